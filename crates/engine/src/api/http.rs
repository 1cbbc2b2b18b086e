//! HTTP routes.

use axum::{
    extract::{DefaultBodyLimit, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use merchmagic_domain::{
    all_presets, BatchId, EditPreset, FilterPreset, ImageData, Mockup, MockupId, MockupSuite, ProductTemplate,
    SuiteStats, Theme,
};

use crate::app::App;
use crate::use_cases::editor::{
    EditError, EditFailure, EditOutcome, EditSource, EditorState, ViewAction,
};
use crate::use_cases::export::{DownloadFile, ExportError};
use crate::use_cases::suite::SuiteError;

/// Create all HTTP routes.
///
/// `max_upload_bytes` caps every request body; logo and background uploads
/// arrive as base64 inside JSON.
pub fn routes(max_upload_bytes: usize) -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/logo", put(upload_logo).delete(clear_logo))
        .route("/api/suite", get(get_suite).post(start_suite))
        .route("/api/catalog", get(get_catalog))
        .route("/api/presets", get(get_presets))
        .route("/api/filters", get(get_filters))
        .route("/api/mockups/{id}/retry", post(retry_mockup))
        .route("/api/mockups/{id}/draft", put(update_draft))
        .route("/api/mockups/{id}/edit", post(edit_mockup))
        .route("/api/mockups/{id}/editor", get(get_editor))
        .route("/api/mockups/{id}/view", post(update_view))
        .route("/api/mockups/{id}/error", delete(dismiss_error))
        .route("/api/mockups/{id}/export", get(export_mockup))
        .route("/api/export", get(export_suite))
        .route("/api/preferences/theme", get(get_theme).put(set_theme))
        .route("/api/preferences/theme/toggle", post(toggle_theme))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Logo
// =============================================================================

#[derive(Debug, Deserialize)]
struct LogoUpload {
    /// Data URI or bare base64.
    image: String,
}

async fn upload_logo(
    State(app): State<Arc<App>>,
    Json(body): Json<LogoUpload>,
) -> Result<StatusCode, ApiError> {
    let image =
        ImageData::from_data_uri(&body.image).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    tracing::info!(mime_type = %image.mime_type(), "Logo uploaded");
    app.entities.logo.set(image);
    Ok(StatusCode::NO_CONTENT)
}

async fn clear_logo(State(app): State<Arc<App>>) -> StatusCode {
    app.entities.logo.clear();
    StatusCode::NO_CONTENT
}

// =============================================================================
// Suite
// =============================================================================

#[derive(Debug, Serialize)]
struct BatchStarted {
    batch_id: BatchId,
}

async fn start_suite(State(app): State<Arc<App>>) -> Result<(StatusCode, Json<BatchStarted>), ApiError> {
    if !app.entities.logo.is_set() {
        return Err(ApiError::Conflict("Upload a logo first".to_string()));
    }
    let run = app
        .begin_batch()
        .ok_or_else(|| ApiError::Conflict("A batch is already running".to_string()))?;
    let batch_id = run.batch_id();

    tokio::spawn(async move {
        let summary = run.run().await;
        tracing::debug!(batch_id = %summary.batch_id, "Batch task finished");
    });

    Ok((StatusCode::ACCEPTED, Json(BatchStarted { batch_id })))
}

#[derive(Debug, Serialize)]
struct SuiteResponse {
    #[serde(flatten)]
    suite: MockupSuite,
    stats: SuiteStats,
    running: bool,
}

async fn get_suite(State(app): State<Arc<App>>) -> Json<SuiteResponse> {
    let suite = app.entities.mockups.snapshot();
    let stats = suite.stats();
    Json(SuiteResponse {
        suite,
        stats,
        running: app.use_cases.suite.generate.is_running(),
    })
}

async fn get_catalog() -> Json<Vec<ProductTemplate>> {
    Json(merchmagic_domain::product_catalog())
}

async fn get_presets() -> Json<Vec<EditPreset>> {
    Json(all_presets().copied().collect())
}

#[derive(Debug, Serialize)]
struct FilterOption {
    id: FilterPreset,
    name: &'static str,
}

async fn get_filters() -> Json<Vec<FilterOption>> {
    Json(
        FilterPreset::ALL
            .iter()
            .map(|&id| FilterOption { id, name: id.name() })
            .collect(),
    )
}

#[derive(Debug, Serialize)]
struct RetryResponse {
    mockup: Mockup,
    error: Option<EditFailure>,
}

async fn retry_mockup(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<Json<RetryResponse>, ApiError> {
    let outcome = app
        .use_cases
        .suite
        .retry
        .execute(MockupId::from_uuid(id))
        .await?;
    Ok(Json(RetryResponse {
        mockup: outcome.mockup,
        error: outcome.error.as_ref().map(EditFailure::from),
    }))
}

#[derive(Debug, Deserialize)]
struct DraftUpdate {
    draft: String,
}

async fn update_draft(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(body): Json<DraftUpdate>,
) -> Result<Json<Mockup>, ApiError> {
    let mockup = app
        .use_cases
        .suite
        .draft
        .execute(MockupId::from_uuid(id), body.draft)?;
    Ok(Json(mockup))
}

// =============================================================================
// Editor
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
enum EditRequest {
    FreeText,
    Preset { preset_id: String },
    CustomBackground { image: String },
}

impl EditRequest {
    fn into_source(self) -> Result<EditSource, ApiError> {
        match self {
            Self::FreeText => Ok(EditSource::FreeText),
            Self::Preset { preset_id } => Ok(EditSource::Preset(preset_id)),
            Self::CustomBackground { image } => ImageData::from_data_uri(&image)
                .map(EditSource::CustomBackground)
                .map_err(|e| ApiError::BadRequest(e.to_string())),
        }
    }
}

async fn edit_mockup(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(body): Json<EditRequest>,
) -> Result<Response, ApiError> {
    let source = body.into_source()?;
    let outcome = app
        .use_cases
        .editor
        .edit
        .execute(MockupId::from_uuid(id), source)
        .await?;
    Ok(match outcome {
        EditOutcome::Skipped => StatusCode::NO_CONTENT.into_response(),
        EditOutcome::Applied(mockup) => Json(mockup).into_response(),
    })
}

async fn get_editor(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<Json<EditorState>, ApiError> {
    let state = app.use_cases.editor.view.state(MockupId::from_uuid(id))?;
    Ok(Json(state))
}

async fn update_view(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(action): Json<ViewAction>,
) -> Result<Json<EditorState>, ApiError> {
    let state = app
        .use_cases
        .editor
        .view
        .apply(MockupId::from_uuid(id), action)?;
    Ok(Json(state))
}

async fn dismiss_error(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<Json<EditorState>, ApiError> {
    let state = app
        .use_cases
        .editor
        .view
        .dismiss_error(MockupId::from_uuid(id))?;
    Ok(Json(state))
}

// =============================================================================
// Export
// =============================================================================

fn attachment(file: DownloadFile) -> Response {
    let disposition = format!("attachment; filename=\"{}\"", file.file_name);
    (
        [
            (header::CONTENT_TYPE, file.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.bytes,
    )
        .into_response()
}

async fn export_mockup(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let file = app
        .use_cases
        .export
        .mockup
        .execute(MockupId::from_uuid(id))?;
    Ok(attachment(file))
}

async fn export_suite(State(app): State<Arc<App>>) -> Result<Response, ApiError> {
    Ok(match app.use_cases.export.suite.execute()? {
        Some(file) => attachment(file),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

// =============================================================================
// Preferences
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
struct ThemeBody {
    theme: Theme,
}

async fn get_theme(State(app): State<Arc<App>>) -> Json<ThemeBody> {
    Json(ThemeBody {
        theme: app.use_cases.preferences.theme.get(),
    })
}

async fn set_theme(State(app): State<Arc<App>>, Json(body): Json<ThemeBody>) -> Json<ThemeBody> {
    Json(ThemeBody {
        theme: app.use_cases.preferences.theme.set(body.theme),
    })
}

async fn toggle_theme(State(app): State<Arc<App>>) -> Json<ThemeBody> {
    Json(ThemeBody {
        theme: app.use_cases.preferences.theme.toggle(),
    })
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Conflict(String),
    /// The image service refused or failed an edit.
    EditFailed(EditFailure),
    /// Rendering or packaging a download failed; the message is returned.
    ExportFailed(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg).into_response(),
            ApiError::EditFailed(failure) => (StatusCode::BAD_GATEWAY, Json(failure)).into_response(),
            ApiError::ExportFailed(msg) => {
                tracing::error!(error = %msg, "Export failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}

impl From<SuiteError> for ApiError {
    fn from(e: SuiteError) -> Self {
        match e {
            SuiteError::NotFound(_) => ApiError::NotFound,
            SuiteError::NoLogo | SuiteError::NotRetryable { .. } => ApiError::Conflict(e.to_string()),
            SuiteError::Domain(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<EditError> for ApiError {
    fn from(e: EditError) -> Self {
        match e {
            EditError::NotFound(_) => ApiError::NotFound,
            EditError::UnknownPreset(_) => ApiError::BadRequest(e.to_string()),
            EditError::Busy | EditError::NotReady(_) => ApiError::Conflict(e.to_string()),
            EditError::Failed(failure) => ApiError::EditFailed(failure),
            EditError::Domain(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(e: ExportError) -> Self {
        match e {
            ExportError::NotFound(_) => ApiError::NotFound,
            ExportError::NotReady(_) => ApiError::Conflict(e.to_string()),
            ExportError::Decode(_) | ExportError::Imaging(_) | ExportError::Archive(_) => {
                ApiError::ExportFailed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::DEFAULT_MAX_UPLOAD_BYTES;
    use crate::infrastructure::ports::{ImageGenError, ImageResult, MockImageGenPort};
    use crate::test_fixtures::image_mocks::{test_png, GatedImageGen};
    use crate::test_fixtures::{logo, run_batch, test_app};
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use merchmagic_domain::MockupStatus;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn router(app: &Arc<App>) -> Router {
        routes(DEFAULT_MAX_UPLOAD_BYTES).with_state(app.clone())
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn released_gen() -> Arc<GatedImageGen> {
        let image_gen = Arc::new(GatedImageGen::new());
        image_gen.release(100);
        image_gen
    }

    #[tokio::test]
    async fn health() {
        let app = Arc::new(test_app(Arc::new(MockImageGenPort::new())));
        let response = router(&app)
            .oneshot(empty_request("GET", "/api/health"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn starting_a_suite_without_logo_conflicts() {
        let app = Arc::new(test_app(Arc::new(MockImageGenPort::new())));
        let response = router(&app)
            .oneshot(empty_request("POST", "/api/suite"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert!(app.entities.mockups.snapshot().is_empty());
    }

    #[tokio::test]
    async fn upload_logo_then_start_suite() {
        let image_gen = Arc::new(GatedImageGen::new());
        let app = Arc::new(test_app(image_gen.clone()));

        let response = router(&app)
            .oneshot(json_request(
                "PUT",
                "/api/logo",
                json!({ "image": logo().to_data_uri() }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = router(&app)
            .oneshot(empty_request("POST", "/api/suite"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::ACCEPTED);

        // The gate holds the workers, so a second start hits the guard
        let response = router(&app)
            .oneshot(empty_request("POST", "/api/suite"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = router(&app)
            .oneshot(empty_request("GET", "/api/suite"))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["mockups"].as_array().unwrap().len(), 2);
        assert_eq!(body["stats"]["total"], 2);
        assert_eq!(body["running"], true);

        image_gen.release(2);
    }

    #[tokio::test]
    async fn invalid_logo_is_rejected() {
        let app = Arc::new(test_app(Arc::new(MockImageGenPort::new())));
        let response = router(&app)
            .oneshot(json_request("PUT", "/api/logo", json!({ "image": "data:image/png;base64,%%%" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(!app.entities.logo.is_set());
    }

    #[tokio::test]
    async fn edit_failure_returns_safety_details() {
        let mut image_gen = MockImageGenPort::new();
        image_gen.expect_generate().returning(|request| {
            if request.instruction == "add a sword" {
                Err(ImageGenError::SafetyBlocked {
                    categories: vec!["Violence".to_string()],
                })
            } else {
                Ok(ImageResult {
                    image: ImageData::from_bytes("image/png", &test_png()),
                })
            }
        });
        let app = Arc::new(test_app(Arc::new(image_gen)));
        let ids = run_batch(&app).await;
        let before = app.entities.mockups.get(ids[0]).unwrap();

        let response = router(&app)
            .oneshot(json_request(
                "PUT",
                &format!("/api/mockups/{}/draft", ids[0]),
                json!({ "draft": "add a sword" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router(&app)
            .oneshot(json_request(
                "POST",
                &format!("/api/mockups/{}/edit", ids[0]),
                json!({ "source": "free_text" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(response).await;
        assert_eq!(body["is_safety"], true);
        assert_eq!(body["safety_categories"], json!(["Violence"]));

        let after = app.entities.mockups.get(ids[0]).unwrap();
        assert_eq!(after.image_url(), before.image_url());
        assert_eq!(after.status(), MockupStatus::Ready);

        let response = router(&app)
            .oneshot(empty_request("GET", &format!("/api/mockups/{}/editor", ids[0])))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["last_error"]["safety_categories"], json!(["Violence"]));

        let response = router(&app)
            .oneshot(empty_request("DELETE", &format!("/api/mockups/{}/error", ids[0])))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert!(body["last_error"].is_null());
    }

    #[tokio::test]
    async fn preset_edit_and_unknown_preset() {
        let app = Arc::new(test_app(released_gen()));
        let ids = run_batch(&app).await;

        let response = router(&app)
            .oneshot(json_request(
                "POST",
                &format!("/api/mockups/{}/edit", ids[1]),
                json!({ "source": "preset", "preset_id": "studio" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router(&app)
            .oneshot(json_request(
                "POST",
                &format!("/api/mockups/{}/edit", ids[1]),
                json!({ "source": "preset", "preset_id": "nope" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn view_actions_update_editor_state() {
        let app = Arc::new(test_app(released_gen()));
        let ids = run_batch(&app).await;
        let uri = format!("/api/mockups/{}/view", ids[0]);

        let response = router(&app)
            .oneshot(json_request("POST", &uri, json!({ "action": "toggle_flip" })))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["view"]["flipped"], true);

        let response = router(&app)
            .oneshot(json_request(
                "POST",
                &uri,
                json!({ "action": "set_filter", "filter": "sepia" }),
            ))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["view"]["filter"], "sepia");

        let response = router(&app)
            .oneshot(json_request("POST", &uri, json!({ "action": "reset" })))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["view"]["flipped"], false);
    }

    #[tokio::test]
    async fn unknown_mockup_is_not_found() {
        let app = Arc::new(test_app(Arc::new(MockImageGenPort::new())));
        let uri = format!("/api/mockups/{}/editor", Uuid::new_v4());
        let response = router(&app).oneshot(empty_request("GET", &uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn retry_of_ready_mockup_conflicts() {
        let app = Arc::new(test_app(released_gen()));
        let ids = run_batch(&app).await;

        let response = router(&app)
            .oneshot(empty_request("POST", &format!("/api/mockups/{}/retry", ids[0])))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn exports() {
        let app = Arc::new(test_app(released_gen()));

        let response = router(&app)
            .oneshot(empty_request("GET", "/api/export"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let ids = run_batch(&app).await;

        let response = router(&app)
            .oneshot(empty_request("GET", "/api/export"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/zip");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"merchmagic-suite-1700000000123.zip\""
        );

        let response = router(&app)
            .oneshot(empty_request("GET", &format!("/api/mockups/{}/export", ids[0])))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
    }

    #[tokio::test]
    async fn theme_round_trip() {
        let app = Arc::new(test_app(Arc::new(MockImageGenPort::new())));

        let response = router(&app)
            .oneshot(empty_request("GET", "/api/preferences/theme"))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["theme"], "light");

        let response = router(&app)
            .oneshot(empty_request("POST", "/api/preferences/theme/toggle"))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["theme"], "dark");

        let response = router(&app)
            .oneshot(json_request("PUT", "/api/preferences/theme", json!({ "theme": "light" })))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["theme"], "light");
    }

    #[tokio::test]
    async fn catalog_and_presets() {
        let app = Arc::new(test_app(Arc::new(MockImageGenPort::new())));

        let response = router(&app)
            .oneshot(empty_request("GET", "/api/catalog"))
            .await
            .unwrap();
        assert_eq!(body_json(response).await.as_array().unwrap().len(), 7);

        let response = router(&app)
            .oneshot(empty_request("GET", "/api/presets"))
            .await
            .unwrap();
        let presets = body_json(response).await;
        assert!(presets
            .as_array()
            .unwrap()
            .iter()
            .any(|p| p["id"] == "neon"));
    }

    fn large_logo_uri(raw_len: usize) -> String {
        let mut bytes = test_png();
        bytes.resize(raw_len, 0);
        ImageData::from_bytes("image/png", &bytes).to_data_uri()
    }

    #[tokio::test]
    async fn multi_megabyte_logo_is_accepted() {
        let app = Arc::new(test_app(Arc::new(MockImageGenPort::new())));
        let image = large_logo_uri(1_800_000);
        assert!(image.len() > 2 * 1024 * 1024);

        let response = router(&app)
            .oneshot(json_request("PUT", "/api/logo", json!({ "image": image })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(app.entities.logo.is_set());
    }

    #[tokio::test]
    async fn body_over_the_configured_limit_is_rejected() {
        let app = Arc::new(test_app(Arc::new(MockImageGenPort::new())));
        let response = routes(64 * 1024)
            .with_state(app.clone())
            .oneshot(json_request(
                "PUT",
                "/api/logo",
                json!({ "image": large_logo_uri(100_000) }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert!(!app.entities.logo.is_set());
    }

    #[tokio::test]
    async fn filters_are_listed_with_names() {
        let app = Arc::new(test_app(Arc::new(MockImageGenPort::new())));
        let response = router(&app)
            .oneshot(empty_request("GET", "/api/filters"))
            .await
            .unwrap();
        let filters = body_json(response).await;
        let filters = filters.as_array().unwrap();
        assert_eq!(filters.len(), 6);
        assert_eq!(filters[0], json!({ "id": "none", "name": "None" }));
        assert!(filters
            .iter()
            .any(|f| f["id"] == "vintage" && f["name"] == "Vintage"));
    }

    #[tokio::test]
    async fn undecodable_render_reports_export_error() {
        let mut image_gen = MockImageGenPort::new();
        image_gen.expect_generate().returning(|_| {
            Ok(ImageResult {
                image: ImageData::from_bytes("image/png", b"junk"),
            })
        });
        let app = Arc::new(test_app(Arc::new(image_gen)));
        let ids = run_batch(&app).await;

        let response = router(&app)
            .oneshot(empty_request("GET", &format!("/api/mockups/{}/export", ids[0])))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let message = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(message.starts_with("Failed to decode image"), "{message}");
    }
}
