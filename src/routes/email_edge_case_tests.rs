#[cfg(test)]
mod email_routes_edge_case_tests {
    use crate::models::{Outcome, ValidationResponse};
    use crate::routes::email::configure_routes;
    use actix_web::{App, http::StatusCode, test};
    use serde_json::json;

    async fn create_test_app() -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    > {
        test::init_service(App::new().configure(|cfg| configure_routes(cfg, "/email"))).await
    }

    async fn read_response(resp: actix_web::dev::ServiceResponse) -> (StatusCode, ValidationResponse) {
        let status = resp.status();
        let body = test::read_body(resp).await;
        let parsed: ValidationResponse =
            serde_json::from_slice(&body).expect("Body should be a validation response");
        (status, parsed)
    }

    fn json_post() -> test::TestRequest {
        test::TestRequest::post()
            .uri("/email")
            .insert_header(("content-type", "application/json"))
    }

    #[actix_web::test]
    async fn test_every_other_method_is_forbidden() {
        let app = create_test_app().await;
        for req in [
            test::TestRequest::get(),
            test::TestRequest::put(),
            test::TestRequest::delete(),
            test::TestRequest::patch(),
        ] {
            let req = req
                .uri("/email")
                .insert_header(("content-type", "application/json"))
                .set_payload(r#"{"email": "user@example.com"}"#)
                .to_request();
            let (status, body) = read_response(test::call_service(&app, req).await).await;
            assert_eq!(status, StatusCode::FORBIDDEN);
            assert_eq!(body, Outcome::MethodNotAllowed.body());
        }
    }

    #[actix_web::test]
    async fn test_content_type_with_charset_is_rejected() {
        let app = create_test_app().await;
        let req = test::TestRequest::post()
            .uri("/email")
            .insert_header(("content-type", "application/json; charset=utf-8"))
            .set_payload(r#"{"email": "user@example.com"}"#)
            .to_request();

        let (status, body) = read_response(test::call_service(&app, req).await).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.msg, "Content-Type header must be application/json.");
    }

    #[actix_web::test]
    async fn test_extra_fields_ignored() {
        let app = create_test_app().await;
        let req = json_post()
            .set_json(json!({
                "email": "user@example.com",
                "extra_field": "should_be_ignored",
                "another_field": 123
            }))
            .to_request();

        let (status, body) = read_response(test::call_service(&app, req).await).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.msg, "Email conforms to RFC 5322.");
    }

    #[actix_web::test]
    async fn test_null_email_is_missing_key() {
        let app = create_test_app().await;
        let req = json_post().set_json(json!({ "email": null })).to_request();

        let (status, body) = read_response(test::call_service(&app, req).await).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, Outcome::MissingEmail.body());
    }

    #[actix_web::test]
    async fn test_numeric_email_is_invalid_json() {
        let app = create_test_app().await;
        let req = json_post().set_json(json!({ "email": 12345 })).to_request();

        let (status, body) = read_response(test::call_service(&app, req).await).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, Outcome::InvalidJson.body());
    }

    #[actix_web::test]
    async fn test_array_body_is_invalid_json() {
        let app = create_test_app().await;
        let req = json_post()
            .set_payload(r#"["user@example.com"]"#)
            .to_request();

        let (_, body) = read_response(test::call_service(&app, req).await).await;
        assert_eq!(body, Outcome::InvalidJson.body());
    }

    #[actix_web::test]
    async fn test_empty_body_is_invalid_json() {
        let app = create_test_app().await;
        let req = json_post().to_request();

        let (status, body) = read_response(test::call_service(&app, req).await).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, Outcome::InvalidJson.body());
    }

    #[actix_web::test]
    async fn test_trailing_data_after_object_is_ignored() {
        let app = create_test_app().await;
        let req = json_post()
            .set_payload(r#"{"email": "user@example.com"}{"email": ""}"#)
            .to_request();

        let (status, _) = read_response(test::call_service(&app, req).await).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_padded_email_conforms() {
        let app = create_test_app().await;
        let req = json_post()
            .set_payload(r#"{"email": "  user@example.com  "}"#)
            .to_request();

        let (status, _) = read_response(test::call_service(&app, req).await).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_whitespace_email_does_not_conform() {
        let app = create_test_app().await;
        let req = json_post().set_payload(r#"{"email": "   "}"#).to_request();

        let (_, body) = read_response(test::call_service(&app, req).await).await;
        assert_eq!(body, Outcome::NonConforming.body());
    }

    #[actix_web::test]
    async fn test_tagged_address_conforms() {
        let app = create_test_app().await;
        let req = json_post()
            .set_json(json!({ "email": "user.name+tag@example.com" }))
            .to_request();

        let (status, body) = read_response(test::call_service(&app, req).await).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status_code, 200);
    }

    #[actix_web::test]
    async fn test_repeated_request_is_idempotent() {
        let app = create_test_app().await;
        let mut seen = Vec::new();
        for _ in 0..3 {
            let req = json_post()
                .set_payload(r#"{"email": "jacob"}"#)
                .to_request();
            seen.push(read_response(test::call_service(&app, req).await).await);
        }
        assert!(seen.windows(2).all(|pair| pair[0] == pair[1]));
        assert_eq!(seen[0].1, Outcome::NonConforming.body());
    }

    #[actix_web::test]
    async fn test_trailing_slash_is_not_the_route() {
        let app = create_test_app().await;
        let req = test::TestRequest::get().uri("/email/").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_custom_route() {
        let app = test::init_service(
            App::new().configure(|cfg| configure_routes(cfg, "/api/v1/validate")),
        )
        .await;

        let req = json_post().uri("/api/v1/validate").set_payload(r#"{"email": "a@b.co"}"#);
        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/email").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    fn oversized_body() -> String {
        let padding = "x".repeat(300 * 1024);
        format!(r#"{{"padding": "{padding}", "email": "user@example.com"}}"#)
    }

    #[actix_web::test]
    async fn test_oversized_get_is_still_forbidden() {
        let app = create_test_app().await;
        let req = test::TestRequest::get()
            .uri("/email")
            .insert_header(("content-type", "application/json"))
            .set_payload(oversized_body())
            .to_request();

        let (status, body) = read_response(test::call_service(&app, req).await).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, Outcome::MethodNotAllowed.body());
    }

    #[actix_web::test]
    async fn test_oversized_post_without_json_type_is_rejected() {
        let app = create_test_app().await;
        let req = test::TestRequest::post()
            .uri("/email")
            .insert_header(("content-type", "text/plain"))
            .set_payload(oversized_body())
            .to_request();

        let (status, body) = read_response(test::call_service(&app, req).await).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, Outcome::UnsupportedContentType.body());
    }

    #[actix_web::test]
    async fn test_oversized_post_is_validated() {
        let app = create_test_app().await;
        let req = json_post().set_payload(oversized_body()).to_request();

        let (status, body) = read_response(test::call_service(&app, req).await).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Outcome::Conforming.body());
    }

    #[actix_web::test]
    async fn test_null_body_is_missing_key() {
        let app = create_test_app().await;
        let req = json_post().set_payload("null").to_request();

        let (status, body) = read_response(test::call_service(&app, req).await).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, Outcome::MissingEmail.body());
    }

    #[actix_web::test]
    async fn test_capitalised_key_is_accepted() {
        let app = create_test_app().await;
        let req = json_post()
            .set_payload(r#"{"Email": "user@example.com"}"#)
            .to_request();

        let (status, _) = read_response(test::call_service(&app, req).await).await;
        assert_eq!(status, StatusCode::OK);
    }
}
