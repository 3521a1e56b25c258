//! HTTP routes for reservation endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    health, list_wizard_fields, send_assistant_message, submit_wizard_step, ReservationAppState,
};

/// Reservation endpoints, to be nested under `/api/reservations`.
pub fn reservation_routes() -> Router<ReservationAppState> {
    Router::new()
        .route("/wizard/fields", get(list_wizard_fields))
        .route("/wizard/steps", post(submit_wizard_step))
        .route("/assistant/messages", post(send_assistant_message))
}

/// Full API router with state applied.
pub fn api_router(state: ReservationAppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/reservations", reservation_routes())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FeatureFlags;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn state(features: FeatureFlags) -> ReservationAppState {
        ReservationAppState::new(features)
    }

    #[tokio::test]
    async fn router_mounts_health_endpoint() {
        let app = api_router(state(FeatureFlags::default()));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn router_mounts_wizard_fields_endpoint() {
        let app = api_router(state(FeatureFlags::default()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/reservations/wizard/fields")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn assistant_without_provider_is_disabled() {
        let app = api_router(state(FeatureFlags::default()));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/reservations/assistant/messages")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"message": "Merhaba"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn disabled_wizard_answers_404() {
        let app = api_router(state(FeatureFlags {
            wizard_enabled: false,
            ..FeatureFlags::default()
        }));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/reservations/wizard/fields")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
