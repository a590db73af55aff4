use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::document::ExportDocument;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write report to {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("report saved to {path} but could not be opened: {source}")]
    Open { path: PathBuf, source: io::Error },
}

/// Signature of the hook that shows a written report to the user.
pub type Opener = fn(&Path) -> io::Result<()>;

/// Where a finished document goes. The renderer's job ends once a sink has
/// the complete content.
pub trait ExportSink {
    fn deliver(&self, document: &ExportDocument) -> Result<(), ExportError>;
}

/// Writes the document as a standalone `.html` file that any browser can
/// print or save as PDF.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `dir/<suggested name>` for the given document.
    pub fn in_dir(dir: &Path, document: &ExportDocument) -> Self {
        Self::new(dir.join(document.suggested_file_name()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExportSink for FileSink {
    fn deliver(&self, document: &ExportDocument) -> Result<(), ExportError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ExportError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        fs::write(&self.path, document.html.as_bytes()).map_err(|source| ExportError::Write {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!(path = %self.path.display(), bytes = document.html.len(), "report exported");
        Ok(())
    }
}

/// Writes the document, then hands the file to the system viewer so the user
/// can print it or save it as PDF.
pub struct ViewerSink<O = Opener> {
    file: FileSink,
    opener: O,
}

impl ViewerSink {
    pub fn new(file: FileSink) -> Self {
        Self::with_opener(file, open_in_system_viewer)
    }
}

impl<O> ViewerSink<O>
where
    O: Fn(&Path) -> io::Result<()>,
{
    pub fn with_opener(file: FileSink, opener: O) -> Self {
        Self { file, opener }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl<O> ExportSink for ViewerSink<O>
where
    O: Fn(&Path) -> io::Result<()>,
{
    fn deliver(&self, document: &ExportDocument) -> Result<(), ExportError> {
        self.file.deliver(document)?;
        let path = self.file.path();
        (self.opener)(path).map_err(|source| ExportError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "report opened in system viewer");
        Ok(())
    }
}

fn open_in_system_viewer(path: &Path) -> io::Result<()> {
    open::that(path)
}
