//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use gearhub_app::ports::{DeviceRepository, StoreStatistics, UserRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api` next to a `/health` probe.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<UR, DR, SR>(state: AppState<UR, DR, SR>) -> Router
where
    UR: UserRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    SR: StoreStatistics + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use gearhub_app::services::device_service::DeviceService;
    use gearhub_app::services::stats_service::StatsService;
    use gearhub_app::services::user_service::UserService;
    use gearhub_domain::device::Device;
    use gearhub_domain::error::GearHubError;
    use gearhub_domain::outcome::Outcome;
    use gearhub_domain::stats::StoreStats;
    use gearhub_domain::user::User;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    const TAKEN: &str = "taken@mci.edu";

    struct StubUserRepo;
    struct StubDeviceRepo;
    struct FailingStats;

    impl UserRepository for StubUserRepo {
        async fn create(&self, user: User) -> Result<User, GearHubError> {
            Ok(user)
        }
        async fn get_all(&self) -> Result<Vec<User>, GearHubError> {
            Ok(vec![])
        }
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, GearHubError> {
            Ok((email == TAKEN).then(|| User {
                email: TAKEN.to_string(),
                name: "Taken".to_string(),
            }))
        }
        async fn update(&self, user: User) -> Result<User, GearHubError> {
            Ok(user)
        }
        async fn delete(&self, _email: &str) -> Result<(), GearHubError> {
            Ok(())
        }
    }

    impl DeviceRepository for StubDeviceRepo {
        async fn create(&self, device: Device) -> Result<Device, GearHubError> {
            Ok(device)
        }
        async fn get_all(&self) -> Result<Vec<Device>, GearHubError> {
            Ok(vec![])
        }
        async fn find_by_device_id(&self, _device_id: i64) -> Result<Option<Device>, GearHubError> {
            Ok(None)
        }
    }

    impl StoreStatistics for FailingStats {
        async fn stats(&self) -> Result<StoreStats, GearHubError> {
            Err(GearHubError::Storage(Box::new(std::io::Error::other(
                "disk unavailable",
            ))))
        }
    }

    fn app() -> Router {
        build(AppState::new(
            UserService::new(StubUserRepo),
            DeviceService::new(StubDeviceRepo),
            StatsService::new(FailingStats),
        ))
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn outcome(response: axum::response::Response) -> Outcome {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_created_outcome_when_user_registered() {
        let response = app()
            .oneshot(json_request(
                "POST",
                "/api/users",
                r#"{"email":"anna@mci.edu","name":"Anna"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert!(outcome(response).await.ok);
    }

    #[tokio::test]
    async fn should_return_bad_request_when_fields_missing() {
        let response = app()
            .oneshot(json_request("POST", "/api/users", r#"{"email":"anna@mci.edu"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = outcome(response).await;
        assert!(!body.ok);
        assert_eq!(body.message, "please fill in all required fields");
    }

    #[tokio::test]
    async fn should_return_bad_request_outcome_when_body_does_not_deserialize() {
        for (uri, body) in [
            ("/api/users", r#"{"email":"anna@mci.edu","name":null}"#),
            ("/api/devices", r#"{"device_id":1,"maintenance_interval_days":-5}"#),
            ("/api/devices", "not json"),
        ] {
            let response = app().oneshot(json_request("POST", uri, body)).await.unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri} {body}");
            let body = outcome(response).await;
            assert!(!body.ok);
            assert!(!body.message.is_empty());
        }
    }

    #[tokio::test]
    async fn should_treat_empty_date_as_missing_field() {
        let response = app()
            .oneshot(json_request(
                "POST",
                "/api/devices",
                r#"{"device_id":1,"name":"Prusa","responsible_email":"max@mci.edu",
                    "first_maintenance":"","maintenance_interval_days":90,
                    "maintenance_cost_eur":10.0,"end_of_life":"2030-01-01"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            outcome(response).await.message,
            "please fill in all required fields"
        );
    }

    #[tokio::test]
    async fn should_return_bad_request_outcome_when_rename_body_malformed() {
        let response = app()
            .oneshot(json_request(
                "PUT",
                "/api/users/taken@mci.edu",
                r#"{"name":42}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(!outcome(response).await.ok);
    }

    #[tokio::test]
    async fn should_return_conflict_when_email_taken() {
        let response = app()
            .oneshot(json_request(
                "POST",
                "/api/users",
                r#"{"email":"taken@mci.edu","name":"Someone"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert!(!outcome(response).await.ok);
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_unknown_user() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/users/ghost@mci.edu")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_rename_existing_user() {
        let response = app()
            .oneshot(json_request(
                "PUT",
                "/api/users/taken@mci.edu",
                r#"{"name":"  New Name "}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(outcome(response).await.ok);
    }

    #[tokio::test]
    async fn should_hide_storage_details_behind_internal_error() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/stats")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(outcome(response).await.message, "internal server error");
    }
}
