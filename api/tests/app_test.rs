//! Integration tests for application wiring

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web};
    use serde_json::Value;
    use std::sync::Arc;

    use otp_api::app::{create_app, SERVICE_NAME};
    use otp_api::middleware::CorsConfig;
    use otp_api::routes::AppState;
    use otp_core::repositories::mock::MockOtpRepository;
    use otp_core::services::otp::mock::RecordingEmailService;
    use otp_core::services::otp::{OtpService, OtpServiceConfig};

    fn state() -> web::Data<AppState<MockOtpRepository, RecordingEmailService>> {
        let service = OtpService::new(
            Arc::new(MockOtpRepository::new()),
            Arc::new(RecordingEmailService::new(false)),
            OtpServiceConfig::default(),
        );
        web::Data::new(AppState::new(Arc::new(service), false))
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(create_app(state(), &CorsConfig::default())).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], SERVICE_NAME);
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[actix_web::test]
    async fn test_unknown_route_is_json_not_found() {
        let app = test::init_service(create_app(state(), &CorsConfig::default())).await;

        let req = test::TestRequest::get().uri("/api/otp/unknown").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
    }

    #[actix_web::test]
    async fn test_send_requires_post() {
        let app = test::init_service(create_app(state(), &CorsConfig::default())).await;

        let req = test::TestRequest::get().uri("/api/otp/send").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_client_error());
    }

    #[actix_web::test]
    async fn test_cors_allows_configured_origin() {
        let cors = CorsConfig {
            permissive: false,
            allowed_origins: vec!["https://courses.example.com".to_string()],
            max_age: 600,
        };
        let app = test::init_service(create_app(state(), &cors)).await;

        let req = test::TestRequest::get()
            .uri("/health")
            .insert_header(("Origin", "https://courses.example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("https://courses.example.com")
        );
    }
}
