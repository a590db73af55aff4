use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    multipart::{Form, Part},
    Client,
};
use shared::{error::ServiceErrorBody, protocol::fields, protocol::AnalysisResult};
use tracing::{info, warn};

use crate::{config::ClientSettings, error::SubmitError, state::AnalysisRequest, AnalysisService};

/// `AnalysisService` backed by one multipart `POST` per request. No retries,
/// no authentication.
#[derive(Debug, Clone)]
pub struct HttpAnalysisService {
    http: Client,
    analysis_url: String,
}

impl HttpAnalysisService {
    pub fn new(analysis_url: impl Into<String>, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            analysis_url: analysis_url.into(),
        })
    }

    pub fn from_settings(settings: &ClientSettings) -> anyhow::Result<Self> {
        Self::new(settings.analysis_url.clone(), settings.request_timeout())
    }

    pub fn analysis_url(&self) -> &str {
        &self.analysis_url
    }

    fn build_form(request: AnalysisRequest) -> Result<Form, SubmitError> {
        let file = request.file;
        let part = Part::bytes(file.bytes)
            .file_name(file.name)
            .mime_str(&file.content_type)
            .map_err(|err| SubmitError::InvalidUpload(err.to_string()))?;
        Ok(Form::new()
            .part(fields::FILE, part)
            .text(fields::INDUSTRY, request.industry.code())
            .text(fields::LANG, request.language.code()))
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisService {
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, SubmitError> {
        info!(
            url = %self.analysis_url,
            industry = %request.industry,
            lang = %request.language,
            file = %request.file.name,
            size = request.file.size(),
            "submitting document for analysis"
        );
        let form = Self::build_form(request)?;

        let response = self
            .http
            .post(&self.analysis_url)
            .multipart(form)
            .send()
            .await
            .map_err(SubmitError::from_transport)?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(SubmitError::from_transport)?;

        if status.is_client_error() {
            let message = ServiceErrorBody::message_from_body(&body);
            warn!(status = status.as_u16(), %message, "analysis request rejected");
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                message,
            });
        }
        if !status.is_success() {
            let message = ServiceErrorBody::message_from_body(&body);
            warn!(status = status.as_u16(), %message, "analysis service failure");
            return Err(SubmitError::ServiceFailure {
                status: status.as_u16(),
                message,
            });
        }

        let result: AnalysisResult = serde_json::from_str(&body)?;
        result.validate()?;
        Ok(result)
    }
}
