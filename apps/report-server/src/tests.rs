//! HTTP tests for the report server

use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use report_pdf::PageGeometry;
use serde_json::json;
use shared_types::Locale;

use crate::api::header_safe_filename;
use crate::state::AppState;

fn test_state() -> AppState {
    AppState::new(PageGeometry::default(), Locale::En)
}

fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(crate::app(state)).unwrap()
}

fn render_body(report_number: &str, content: &str) -> serde_json::Value {
    json!({
        "institution": { "name": "Court of Audit", "type": "Supreme Audit Institution" },
        "title": "Risk Assessment Report",
        "reportNumber": report_number,
        "reportDate": "2026-10-19",
        "content": content
    })
}

#[tokio::test]
async fn test_health_returns_200() {
    let server = create_test_server(test_state());
    let response = server.get("/health").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "report-server");
}

#[tokio::test]
async fn test_report_types_are_localized() {
    let server = create_test_server(test_state());

    let response = server.get("/api/report-types").await;
    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["count"], 4);
    assert_eq!(json["reportTypes"][3]["reportType"], "risk");
    assert_eq!(json["reportTypes"][3]["title"], "Risk Assessment Report");

    let response = server
        .get("/api/report-types")
        .add_query_param("locale", "fr-CA")
        .await;
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["locale"], "fr");
    assert_eq!(json["reportTypes"][3]["title"], "Rapport d'évaluation des risques");
}

#[tokio::test]
async fn test_compliance_content() {
    let server = create_test_server(test_state());

    let response = server
        .post("/api/reports/content")
        .json(&json!({
            "reportType": "compliance",
            "metrics": {
                "overallScore": 85,
                "componentScores": { "control_environment": 92 },
                "recommendations": []
            }
        }))
        .await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], true);
    let content = json["content"].as_str().unwrap();
    assert!(content.contains("Overall compliance score: 85% (Good)"));
    assert!(content.contains("Control Environment: 92% - Excellent"));
    assert!(content.contains("There are no recommendations at this time."));
}

#[tokio::test]
async fn test_content_without_metrics_is_defaulted() {
    let server = create_test_server(test_state());

    for report_type in ["compliance", "progress", "performance", "risk"] {
        let response = server
            .post("/api/reports/content")
            .json(&json!({ "reportType": report_type, "metrics": null, "locale": "fr" }))
            .await;
        response.assert_status_ok();

        let json = response.json::<serde_json::Value>();
        let content = json["content"].as_str().unwrap();
        assert!(!content.is_empty());
        assert!(!content.contains("undefined"));
        assert!(!content.contains("null"));
    }
}

#[tokio::test]
async fn test_unknown_report_type_is_rejected() {
    let server = create_test_server(test_state());

    let response = server
        .post("/api/reports/content")
        .json(&json!({ "reportType": "budget", "metrics": {} }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["code"], "INVALID_REQUEST");
}

#[tokio::test]
async fn test_malformed_bodies_get_json_errors() {
    let server = create_test_server(test_state());

    let mut body = render_body("RPT-12", "Body");
    body["reportDate"] = json!("not-a-date");
    let response = server.post("/api/reports/render").json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "INVALID_REQUEST");

    let response = server
        .post("/api/reports/content")
        .json(&json!({ "metrics": {} }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<serde_json::Value>()["code"], "INVALID_REQUEST");

    let response = server.post("/api/reports/content").text("compliance").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<serde_json::Value>()["code"], "INVALID_REQUEST");
}

#[tokio::test]
async fn test_render_returns_pdf_download() {
    let server = create_test_server(test_state());

    let response = server
        .post("/api/reports/render")
        .json(&render_body("RPT-2026-031", "1. EXECUTIVE SUMMARY\n\nAll controls were tested."))
        .await;
    response.assert_status_ok();

    assert_eq!(response.header("content-type"), "application/pdf");
    assert_eq!(response.header("x-page-count"), "1");
    let disposition = response.header("content-disposition");
    let disposition = disposition.to_str().unwrap();
    assert!(disposition.starts_with(
        "attachment; filename=\"Risk_Assessment_Report_RPT-2026-031_2026-10-19_"
    ));

    let doc = lopdf::Document::load_mem(response.as_bytes()).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}

#[tokio::test]
async fn test_duplicate_render_is_refused_while_in_progress() {
    let state = test_state();
    let server = create_test_server(state.clone());

    let busy = state.gate.try_begin("RPT-7").unwrap();
    let response = server
        .post("/api/reports/render")
        .json(&render_body("RPT-7", "Body"))
        .await;
    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<serde_json::Value>()["code"], "GENERATION_IN_PROGRESS");

    drop(busy);
    let response = server
        .post("/api/reports/render")
        .json(&render_body("RPT-7", "Body"))
        .await;
    response.assert_status_ok();
    assert!(!state.gate.is_generating("RPT-7"));
}

#[tokio::test]
async fn test_render_failure_is_a_single_error_and_releases_gate() {
    let geometry = PageGeometry {
        line_height_mm: 0.0,
        ..PageGeometry::default()
    };
    let state = AppState::new(geometry, Locale::En);
    let server = create_test_server(state.clone());

    let response = server
        .post("/api/reports/render")
        .json(&render_body("RPT-9", "Body"))
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "RENDER_FAILED");
    assert!(!state.gate.is_generating("RPT-9"));
}

#[test]
fn test_header_safe_filename() {
    assert_eq!(
        header_safe_filename("Rapport_d'évaluation_R-1.pdf"),
        "Rapport_d'_valuation_R-1.pdf"
    );
}
