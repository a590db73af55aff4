use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use super::*;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use shared::{
    domain::{Industry, Language},
    error::ErrorCategory,
};
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex, Notify},
};

fn scenario_b_body() -> Value {
    json!({
        "revenue": 1000000.0,
        "expense": 750000.0,
        "profit": 250000.0,
        "working_capital": 250000.0,
        "profit_margin": 25.0,
        "credit_score": 78,
        "risk_level_en": "Low Risk",
        "risk_level_display": "कम जोखिम",
        "benchmark_status_en": "AI Analyzed",
        "benchmark_status_display": "एआई विश्लेषित",
        "cost_suggestions_en": ["Reduce overhead"],
        "cost_suggestions_display": ["ओवरहेड कम करें"],
        "investor_report_en": "Solid performance.",
        "investor_report_display": "उत्कृष्ट प्रदर्शन।"
    })
}

fn scenario_b_result() -> AnalysisResult {
    serde_json::from_value(scenario_b_body()).expect("fixture")
}

fn csv_file() -> UploadFile {
    UploadFile::new("ledger.csv", b"revenue,expense\n1000000,750000\n".to_vec())
}

/// Counts calls and answers with a fixed outcome.
struct ScriptedService {
    calls: AtomicUsize,
    fail: bool,
}

impl ScriptedService {
    fn ok() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnalysisService for ScriptedService {
    async fn analyze(&self, _request: AnalysisRequest) -> Result<AnalysisResult, SubmitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(SubmitError::Unreachable("connection refused".to_string()))
        } else {
            Ok(scenario_b_result())
        }
    }
}

#[derive(Debug, Default)]
struct ReceivedForm {
    file_name: Option<String>,
    content_type: Option<String>,
    file_bytes: Vec<u8>,
    industry: Option<String>,
    lang: Option<String>,
}

#[derive(Clone)]
struct CaptureState {
    tx: Arc<Mutex<Option<oneshot::Sender<ReceivedForm>>>>,
}

async fn handle_analyze(
    State(state): State<CaptureState>,
    mut multipart: Multipart,
) -> Json<Value> {
    let mut form = ReceivedForm::default();
    while let Some(field) = multipart.next_field().await.expect("multipart field") {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                form.file_name = field.file_name().map(str::to_string);
                form.content_type = field.content_type().map(str::to_string);
                form.file_bytes = field.bytes().await.expect("file bytes").to_vec();
            }
            "industry" => form.industry = Some(field.text().await.expect("industry")),
            "lang" => form.lang = Some(field.text().await.expect("lang")),
            _ => {}
        }
    }
    if let Some(tx) = state.tx.lock().await.take() {
        let _ = tx.send(form);
    }
    Json(scenario_b_body())
}

async fn serve(app: Router) -> Result<String, std::io::Error> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}/analyze"))
}

async fn spawn_capture_server() -> (String, oneshot::Receiver<ReceivedForm>) {
    let (tx, rx) = oneshot::channel();
    let state = CaptureState {
        tx: Arc::new(Mutex::new(Some(tx))),
    };
    let app = Router::new()
        .route("/analyze", post(handle_analyze))
        .with_state(state);
    (serve(app).await.expect("spawn server"), rx)
}

async fn spawn_fixed_server(status: StatusCode, body: &'static str) -> String {
    let app = Router::new().route(
        "/analyze",
        post(move || async move { (status, body).into_response() }),
    );
    serve(app).await.expect("spawn server")
}

fn http_service(url: String) -> HttpAnalysisService {
    HttpAnalysisService::new(url, Some(Duration::from_secs(5))).expect("http client")
}

fn controller_with_file<S: AnalysisService>(service: S) -> SubmissionController<S> {
    let mut state = UiState::new(Industry::Technology, Language::Hi);
    state.select_file(csv_file()).expect("select file");
    SubmissionController::new(service, state)
}

#[tokio::test]
async fn submit_without_file_never_reaches_the_service() {
    let mut controller = SubmissionController::new(ScriptedService::ok(), UiState::default());

    let err = controller.submit().await.expect_err("must refuse");

    assert!(matches!(err, SubmitError::NoFileSelected));
    assert_eq!(controller.service().calls(), 0);
    assert!(!controller.state.is_submitting());
    assert!(controller.state.last_result().is_none());
    let notice = controller.state.notice().expect("advisory raised");
    assert_eq!(notice.severity, NoticeSeverity::Advisory);
    assert_eq!(notice.message, "Please select a file first!");
    assert_eq!(controller.state.phase(), Phase::Idle);
}

#[test]
fn in_flight_flag_brackets_one_request() {
    let mut state = UiState::default();
    state.select_file(csv_file()).expect("select file");
    assert_eq!(state.phase(), Phase::FileSelected);

    let request = state.begin_submission().expect("begin");
    assert_eq!(request.industry, Industry::Services);
    assert_eq!(request.language, Language::En);
    assert!(state.is_submitting());
    assert_eq!(state.phase(), Phase::Submitting);

    assert!(matches!(
        state.begin_submission(),
        Err(SubmitError::AlreadySubmitting)
    ));
    assert!(matches!(
        state.select_file(UploadFile::new("other.pdf", Vec::new())),
        Err(SubmitError::AlreadySubmitting)
    ));
    assert!(state.is_submitting());

    state
        .complete_submission(Err(SubmitError::TimedOut))
        .expect_err("failure propagates");
    assert!(!state.is_submitting());
    assert!(state.last_result().is_none());
    assert_eq!(state.phase(), Phase::FileSelected);
    assert_eq!(
        state.notice().map(|n| n.severity),
        Some(NoticeSeverity::Error)
    );

    state.begin_submission().expect("retry allowed");
    state
        .complete_submission(Ok(scenario_b_result()))
        .expect("success");
    assert!(!state.is_submitting());
    assert!(state.notice().is_none());
    assert_eq!(state.phase(), Phase::DisplayingResult);
}

#[tokio::test]
async fn failed_submission_keeps_last_good_result() {
    let mut controller = controller_with_file(ScriptedService::ok());
    controller.submit().await.expect("first submission");
    let before = controller.state.last_result().cloned();

    let mut failing = SubmissionController::new(ScriptedService::failing(), controller.state);
    let err = failing.submit().await.expect_err("second submission fails");

    assert_eq!(err.category(), ErrorCategory::Transport);
    assert_eq!(failing.service().calls(), 1);
    assert_eq!(failing.state.last_result().cloned(), before);
    assert!(!failing.state.is_submitting());
    assert_eq!(
        failing.state.notice().map(|n| n.message.as_str()),
        Some("Connection failed. Ensure backend is running.")
    );
}

#[test]
fn language_switch_does_not_touch_result() {
    let mut state = UiState::default();
    state.select_file(csv_file()).expect("select file");
    state.begin_submission().expect("begin");
    state
        .complete_submission(Ok(scenario_b_result()))
        .expect("success");

    state.set_language(Language::Ml);
    state.set_industry(Industry::Retail);

    assert_eq!(state.last_result(), Some(&scenario_b_result()));
    assert_eq!(state.selected_language(), Language::Ml);
}

#[test]
fn content_type_is_guessed_from_extension() {
    assert_eq!(csv_file().content_type, "text/csv");
    assert_eq!(
        UploadFile::new("statement.pdf", Vec::new()).content_type,
        "application/pdf"
    );
    assert_eq!(
        UploadFile::new("blob", Vec::new()).content_type,
        "application/octet-stream"
    );
}

#[tokio::test]
async fn http_submission_sends_multipart_fields_and_stores_result() {
    let (url, form_rx) = spawn_capture_server().await;
    let mut controller = controller_with_file(http_service(url));

    let result = controller.submit().await.expect("analysis").clone();

    let form = form_rx.await.expect("form received");
    assert_eq!(form.file_name.as_deref(), Some("ledger.csv"));
    assert_eq!(form.content_type.as_deref(), Some("text/csv"));
    assert_eq!(form.file_bytes, csv_file().bytes);
    assert_eq!(form.industry.as_deref(), Some("Technology"));
    assert_eq!(form.lang.as_deref(), Some("hi"));

    assert_eq!(result.canonical.risk_level, "Low Risk");
    assert_eq!(result.display.risk_level, "कम जोखिम");
    assert_eq!(result.display.cost_suggestions, vec!["ओवरहेड कम करें"]);
    assert_eq!(controller.state.last_result(), Some(&result));
    assert_eq!(controller.state.phase(), Phase::DisplayingResult);
}

#[tokio::test]
async fn rejected_file_surfaces_backend_message() {
    let url = spawn_fixed_server(StatusCode::BAD_REQUEST, r#"{"error": "File error"}"#).await;
    let mut controller = controller_with_file(http_service(url));

    let err = controller.submit().await.expect_err("rejected");

    match &err {
        SubmitError::Rejected { status, message } => {
            assert_eq!(*status, 400);
            assert_eq!(message, "File error");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(
        err.user_notice(),
        "The analysis service rejected this file: File error"
    );
    assert!(controller.state.last_result().is_none());
    assert!(!controller.state.is_submitting());
}

#[tokio::test]
async fn server_error_is_a_service_failure() {
    let url = spawn_fixed_server(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;
    let mut controller = controller_with_file(http_service(url));

    let err = controller.submit().await.expect_err("server error");

    assert!(matches!(err, SubmitError::ServiceFailure { status: 500, .. }));
    assert_eq!(err.category(), ErrorCategory::Service);
}

#[tokio::test]
async fn unparseable_body_is_malformed() {
    let url = spawn_fixed_server(StatusCode::OK, "<html>not json</html>").await;
    let mut controller = controller_with_file(http_service(url));

    let err = controller.submit().await.expect_err("malformed");

    assert!(matches!(err, SubmitError::MalformedResponse(_)));
    assert!(controller.state.last_result().is_none());
}

#[tokio::test]
async fn out_of_range_credit_score_is_malformed() {
    let url = spawn_fixed_server(
        StatusCode::OK,
        r#"{"revenue": 1, "expense": 1, "profit": 0, "working_capital": 0,
            "profit_margin": 0, "credit_score": 140,
            "risk_level_en": "Low Risk", "risk_level_display": "Low Risk",
            "benchmark_status_en": "AI Analyzed",
            "cost_suggestions_en": [], "cost_suggestions_display": [],
            "investor_report_en": "", "investor_report_display": ""}"#,
    )
    .await;
    let mut controller = controller_with_file(http_service(url));

    let err = controller.submit().await.expect_err("malformed");

    assert_eq!(err.category(), ErrorCategory::Malformed);
    let SubmitError::MalformedResponse(message) = &err else {
        panic!("expected malformed response, got {err:?}");
    };
    assert!(message.contains("credit_score 140"), "{message}");
    assert!(controller.state.last_result().is_none());
}

#[tokio::test]
async fn closed_port_is_unreachable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    let mut controller = controller_with_file(http_service(format!("http://{addr}/analyze")));

    let err = controller.submit().await.expect_err("unreachable");

    assert!(matches!(err, SubmitError::Unreachable(_)), "got {err:?}");
    assert!(!controller.state.is_submitting());
}

#[tokio::test]
async fn slow_service_times_out() {
    let app = Router::new().route(
        "/analyze",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(scenario_b_body())
        }),
    );
    let url = serve(app).await.expect("spawn server");
    let service =
        HttpAnalysisService::new(url, Some(Duration::from_millis(200))).expect("http client");
    let mut controller = controller_with_file(service);

    let err = controller.submit().await.expect_err("timeout");

    assert!(matches!(err, SubmitError::TimedOut), "got {err:?}");
    assert!(controller.state.last_result().is_none());
}

#[tokio::test]
async fn flag_stays_raised_while_request_is_outstanding() {
    let release = Arc::new(Notify::new());
    let gate = release.clone();
    let app = Router::new().route(
        "/analyze",
        post(move || {
            let gate = gate.clone();
            async move {
                gate.notified().await;
                Json(scenario_b_body())
            }
        }),
    );
    let url = serve(app).await.expect("spawn server");
    let service = Arc::new(http_service(url));

    let mut state = UiState::new(Industry::Technology, Language::Hi);
    state.select_file(csv_file()).expect("select file");
    let request = state.begin_submission().expect("begin");
    let in_flight = tokio::spawn({
        let service = service.clone();
        async move { service.analyze(request).await }
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(state.is_submitting());
    assert!(matches!(
        state.begin_submission(),
        Err(SubmitError::AlreadySubmitting)
    ));

    release.notify_one();
    let outcome = in_flight.await.expect("join");
    state.complete_submission(outcome).expect("success");
    assert!(!state.is_submitting());
    assert_eq!(state.last_result(), Some(&scenario_b_result()));
}
