//! Liveness and store diagnostics endpoints.

use actix_web::{HttpResponse, web};

use fitblog_shared::dto::{DiagnosticsResponse, MessageResponse};

use crate::state::AppState;

/// Longest store error text echoed back by the diagnostics endpoint.
const MAX_ERROR_CHARS: usize = 50;

/// GET /
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("Hello from the Fitblog backend!"))
}

/// GET /api/hello
pub async fn hello() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("Hello from the backend API!"))
}

/// Store connectivity report. Never fails: store problems are reported in the body.
///
/// GET /test
pub async fn diagnostics(state: web::Data<AppState>) -> HttpResponse {
    let mut report = DiagnosticsResponse::default();

    let Some(probe) = &state.probe else {
        report.database = "⚠️  Available but not initialized".to_string();
        return HttpResponse::Ok().json(report);
    };

    report.database = "✅ Available".to_string();
    report.database_url = Some(
        if state.database_url_set {
            "✅ Set"
        } else {
            "❌ Not Set"
        }
        .to_string(),
    );

    match probe.probe().await {
        Ok(status) => {
            report.database_name = Some(status.database_name);
            report.connection_status = "Connected".to_string();
            report.collections = status.collections;
            report.database = "✅ Connected & Working".to_string();
        }
        Err(e) => {
            tracing::warn!(error = %e, "Store probe failed");
            let reason: String = e.to_string().chars().take(MAX_ERROR_CHARS).collect();
            report.database = format!("❌ Error: {reason}");
        }
    }

    HttpResponse::Ok().json(report)
}
