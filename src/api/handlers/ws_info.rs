use axum::{response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct WsInfo {
    websocket: String,
}

/// Placeholder until real-time features land; documents that no WebSocket
/// endpoint is exposed yet.
#[utoipa::path(
    get,
    path = "/ws-info",
    responses(
        (status = 200, description = "WebSocket usage", body = WsInfo),
    ),
    tag = "Info"
)]
pub async fn ws_info() -> impl IntoResponse {
    Json(WsInfo {
        websocket: "No active WebSocket endpoints yet.".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_ws_info_reports_no_endpoints() {
        let response = ws_info().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["websocket"], "No active WebSocket endpoints yet.");
    }
}
