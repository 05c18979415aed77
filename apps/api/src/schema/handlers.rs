//! Axum route handlers for the Schema API.

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::Response,
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::business::ServiceType;
use crate::schema::document::LocalBusinessDocument;
use crate::schema::export::{attachment_disposition, download_filename, PASTE_INSTRUCTIONS};
use crate::schema::form::BusinessForm;
use crate::schema::generator::generate;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ServiceTypeOption {
    pub key: &'static str,
    pub label: &'static str,
    pub display_name: &'static str,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    /// Paste-ready `<script type="application/ld+json">` block.
    pub html: String,
    pub document: LocalBusinessDocument,
    pub download_filename: String,
    pub instructions: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/schema/service-types
///
/// Lists the categories the form may offer, in display order.
pub async fn handle_service_types() -> Json<Vec<ServiceTypeOption>> {
    Json(
        ServiceType::ALL
            .into_iter()
            .map(|service| ServiceTypeOption {
                key: service.key(),
                label: service.schema_type(),
                display_name: service.display_name(),
            })
            .collect(),
    )
}

/// POST /api/v1/schema/generate
///
/// Returns the script block together with the object graph it was built from,
/// so the form can show the code and offer a download.
pub async fn handle_generate(
    Json(form): Json<BusinessForm>,
) -> Result<Json<GenerateResponse>, AppError> {
    let record = form.into_record()?;
    let markup = generate(&record)?;

    info!(
        "Generated {} schema for '{}'",
        markup.document.schema_type, record.name
    );

    Ok(Json(GenerateResponse {
        html: markup.html,
        document: markup.document,
        download_filename: download_filename(&record.name),
        instructions: PASTE_INSTRUCTIONS,
    }))
}

/// POST /api/v1/schema/download
///
/// Same generation as `/generate`, returned as an HTML file attachment.
pub async fn handle_download(Json(form): Json<BusinessForm>) -> Result<Response, AppError> {
    let record = form.into_record()?;
    let html = generate(&record)?.html;
    let filename = download_filename(&record.name);

    info!("Serving schema download '{filename}'");

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .header(header::CONTENT_DISPOSITION, attachment_disposition(&filename))
        .body(Body::from(html))
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to build download response: {e}")))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt; // for oneshot

    use crate::config::Config;
    use crate::routes::build_router;
    use crate::state::AppState;

    fn test_app() -> Router {
        build_router(AppState {
            config: Config {
                port: 0,
                rust_log: "info".to_string(),
                max_body_bytes: 4096,
            },
        })
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
    }

    fn joes_plumbing() -> Value {
        json!({
            "name": "Joe's Plumbing",
            "service_type": "plumber",
            "phone": "555-1234",
            "url": "https://joesplumbing.com",
            "email": "",
            "address": {
                "street": "1 Main St",
                "city": "Springfield",
                "state": "il",
                "zip": "62704"
            },
            "hours": {}
        })
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_service_types_lists_all_categories() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/schema/service-types")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        let keys: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|option| option["key"].as_str().unwrap())
            .collect();
        assert_eq!(keys, vec!["plumber", "roofer", "electrician", "hvac", "general"]);
        assert_eq!(body[1]["display_name"], "Roofing Contractor");
    }

    #[tokio::test]
    async fn test_generate_end_to_end() {
        let response = test_app()
            .oneshot(post_json("/api/v1/schema/generate", &joes_plumbing()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["document"]["@type"], "Plumber");
        assert_eq!(body["document"]["address"]["addressRegion"], "IL");
        assert!(body["document"].get("email").is_none());
        assert_eq!(body["document"]["openingHoursSpecification"], json!([]));
        assert_eq!(body["download_filename"], "joe's_plumbing_schema.html");
        assert!(body["instructions"].as_str().unwrap().contains("<head>"));

        let html = body["html"].as_str().unwrap();
        assert!(html.starts_with("<script type=\"application/ld+json\">"));
        assert!(html.ends_with("</script>"));
    }

    #[tokio::test]
    async fn test_generate_drops_partial_hours() {
        let mut form = joes_plumbing();
        form["hours"] = json!({
            "monday": { "open": "09:00", "close": "17:00" },
            "tuesday": { "open": "09:00" }
        });

        let response = test_app()
            .oneshot(post_json("/api/v1/schema/generate", &form))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        let specs = body["document"]["openingHoursSpecification"]
            .as_array()
            .unwrap();
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0]["dayOfWeek"], "Monday");
    }

    #[tokio::test]
    async fn test_generate_unknown_day_is_bad_request() {
        let mut form = joes_plumbing();
        form["hours"] = json!({ "someday": { "open": "09:00", "close": "17:00" } });

        let response = test_app()
            .oneshot(post_json("/api/v1/schema/generate", &form))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_generate_non_object_hours_rejected() {
        let mut form = joes_plumbing();
        form["hours"] = json!("mon-fri 9-5");

        let response = test_app()
            .oneshot(post_json("/api/v1/schema/generate", &form))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_generate_oversized_body_rejected() {
        let mut form = joes_plumbing();
        form["name"] = json!("x".repeat(8192));

        let response = test_app()
            .oneshot(post_json("/api/v1/schema/generate", &form))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_download_returns_attachment() {
        let response = test_app()
            .oneshot(post_json("/api/v1/schema/download", &joes_plumbing()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"joe's_plumbing_schema.html\""
        );

        let html = body_text(response).await;
        assert!(html.contains("\"@type\": \"Plumber\""));
        assert!(html.contains("\"addressRegion\": \"IL\""));
    }

    #[tokio::test]
    async fn test_generate_and_download_emit_same_markup() {
        let mut form = joes_plumbing();
        form["name"] = json!("<!--<script> Plumbing");
        form["hours"] = json!({ "friday": { "open": "08:00", "close": "16:00" } });

        let generated = test_app()
            .oneshot(post_json("/api/v1/schema/generate", &form))
            .await
            .unwrap();
        let body: Value = serde_json::from_str(&body_text(generated).await).unwrap();

        let downloaded = test_app()
            .oneshot(post_json("/api/v1/schema/download", &form))
            .await
            .unwrap();
        let html = body_text(downloaded).await;

        assert_eq!(body["html"], html.as_str());
        assert!(!html.contains("<!--"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = test_app()
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
