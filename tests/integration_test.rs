use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

use assessment_submit::form::{load_form_snapshot, RecordingNotifier};
use assessment_submit::logger;
use assessment_submit::render::renderer::CONNECTION_ERROR_HTML;
use assessment_submit::{
    FormSnapshot, RecommendationTable, RegionState, ScorerClient, SubmissionOutcome, Submitter,
};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;

const SAMPLE_FORM: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/forms/sample_assessment.toml");

/// 评分服务桩
#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: String,
    received: Arc<Mutex<Vec<Value>>>,
}

async fn predict(
    State(state): State<StubState>,
    Json(body): Json<Value>,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    state.received.lock().unwrap().push(body);
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}

/// 启动评分服务桩，返回地址和收到的请求体
async fn spawn_stub(status: StatusCode, body: &str) -> (String, Arc<Mutex<Vec<Value>>>) {
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        status,
        body: body.to_string(),
        received: received.clone(),
    };

    let app = Router::new()
        .route("/predict", post(predict))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/predict", addr), received)
}

/// 收集日志输出
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// 在当前线程上安装一个写入 `CapturedLogs` 的订阅者
fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(move || writer.clone())
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}

fn submitter_for(endpoint: &str) -> (Submitter, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::new());
    let submitter = Submitter::new(
        Arc::new(ScorerClient::with_endpoint(endpoint)),
        notifier.clone(),
        RecommendationTable::builtin(),
    );
    (submitter, notifier)
}

async fn sample_form() -> FormSnapshot {
    load_form_snapshot(Path::new(SAMPLE_FORM))
        .await
        .expect("加载示例表单失败")
}

#[tokio::test]
async fn test_low_risk_round_trip() {
    logger::init();

    let (endpoint, received) = spawn_stub(
        StatusCode::OK,
        r#"{"risk_category": "Low Risk", "risk_score_prediction": 0.4}"#,
    )
    .await;
    let (submitter, notifier) = submitter_for(&endpoint);

    let outcome = submitter.submit(&sample_form().await).await;
    assert_eq!(
        outcome,
        SubmissionOutcome::Success {
            category: "Low Risk".to_string(),
            score: 0.4
        }
    );
    assert!(notifier.messages().is_empty());

    let bodies = received.lock().unwrap().clone();
    assert_eq!(bodies.len(), 1, "应该只发出一次请求");
    let body = bodies[0].as_object().unwrap();
    assert_eq!(body.len(), 14);
    assert_eq!(body["Days_Indoors"], "1-14 days");
    assert_eq!(body["family_history"], "No");
    assert_eq!(body["Gender"], "");
    assert!(body["self_employed"].is_null());

    let region = submitter.region().await;
    assert_eq!(region.class_name(), "result-low");
    assert!(region.html().contains("<strong>0.40</strong>"));
    assert!(region.html().contains("<li>Reflect and Plan:"));
    assert!(region.to_html().contains("class=\"result-low show\""));
}

#[tokio::test]
async fn test_stable_score_is_rounded() {
    let (endpoint, _) = spawn_stub(
        StatusCode::OK,
        r#"{"risk_category": "Stable (Moderate Risk)", "risk_score_prediction": 1.0}"#,
    )
    .await;
    let (submitter, _) = submitter_for(&endpoint);

    submitter.submit(&sample_form().await).await;

    let region = submitter.region().await;
    assert_eq!(region.class_name(), "result-stable");
    assert!(region.html().contains("<strong>1.00</strong>"));
}

#[tokio::test]
async fn test_server_error_status_ignores_body() {
    let (endpoint, received) = spawn_stub(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"risk_category": "Low Risk", "risk_score_prediction": 0.4}"#,
    )
    .await;
    let (submitter, _) = submitter_for(&endpoint);
    let form = sample_form().await;

    let (logs, _guard) = capture_logs();
    let outcome = submitter.submit(&form).await;
    assert_eq!(outcome, SubmissionOutcome::RequestFailed);
    assert_eq!(received.lock().unwrap().len(), 1);
    assert_eq!(logs.contents().matches("status: 500").count(), 1);

    let region = submitter.region().await;
    assert_eq!(region.class_name(), "result-high");
    assert!(region
        .html()
        .contains("Error: Could not connect to the assessment server."));
}

#[tokio::test]
async fn test_malformed_body_is_request_failure() {
    let (endpoint, _) = spawn_stub(StatusCode::OK, r#"{"prediction": "oops"}"#).await;
    let (submitter, _) = submitter_for(&endpoint);

    let outcome = submitter.submit(&sample_form().await).await;
    assert_eq!(outcome, SubmissionOutcome::RequestFailed);
    assert_eq!(submitter.state().await, RegionState::RequestFailed);
}

#[tokio::test]
async fn test_unreachable_server() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let form = sample_form().await;
    let (submitter, _) = submitter_for(&format!("http://{}/predict", addr));

    let (logs, _guard) = capture_logs();
    let outcome = submitter.submit(&form).await;
    assert_eq!(outcome, SubmissionOutcome::RequestFailed);

    // 页面上只有通用提示，具体原因只进日志
    let region = submitter.region().await;
    assert!(region.is_visible());
    assert_eq!(region.class_name(), "result-high");
    assert_eq!(region.html(), CONNECTION_ERROR_HTML);
    assert!(!region.to_html().contains(&addr.to_string()));
    assert!(!region.html().contains("API请求失败"));

    let logs = logs.contents();
    assert_eq!(logs.matches("Prediction failed").count(), 1, "日志: {}", logs);
    assert!(logs.contains(&addr.to_string()), "日志: {}", logs);
}

#[tokio::test]
async fn test_incomplete_form_never_reaches_server() {
    let (endpoint, received) = spawn_stub(
        StatusCode::OK,
        r#"{"risk_category": "High Risk", "risk_score_prediction": 2.0}"#,
    )
    .await;
    let (submitter, notifier) = submitter_for(&endpoint);

    let mut form = sample_form().await;
    form.select.remove("Mood_Swings");

    let outcome = submitter.submit(&form).await;
    assert_eq!(
        outcome,
        SubmissionOutcome::ValidationFailed {
            missing: vec!["Mood_Swings"]
        }
    );
    assert_eq!(
        notifier.messages(),
        vec!["Please answer the question regarding: Mood Swings".to_string()]
    );
    assert!(received.lock().unwrap().is_empty());
    assert_eq!(submitter.region().await.class_name(), "result-high");
}
