//! HTTP API integration tests

#[cfg(test)]
mod tests {
    use crate::common::ListingFactory;
    use actix_web::http::StatusCode;
    use actix_web::{test, web};
    use estate_hub::config::Config;
    use estate_hub::server::{AppState, HttpServer};
    use estate_hub::PermissionTable;
    use serde_json::{Value, json};

    fn state_with(config: Config) -> web::Data<AppState> {
        web::Data::new(AppState::new(
            config,
            PermissionTable::standard(),
            ListingFactory::catalog(),
        ))
    }

    #[actix_web::test]
    async fn test_search_visibility_depends_on_role() {
        let state = state_with(Config::default());
        let app = test::init_service(HttpServer::create_app(state)).await;

        for (role, villas) in [("agent", 1), ("seller", 1), ("developer", 2), ("admin", 2)] {
            let body: Value = test::call_and_read_body_json(
                &app,
                test::TestRequest::get()
                    .uri("/api/v1/listings?property_type=villa")
                    .insert_header(("x-user-role", role))
                    .to_request(),
            )
            .await;
            assert_eq!(body["data"]["pagination"]["total"], villas, "{}", role);
        }
    }

    #[actix_web::test]
    async fn test_search_query_string() {
        let state = state_with(Config::default());
        let app = test::init_service(HttpServer::create_app(state)).await;

        let body: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/listings?city=giza&sort=price_desc&limit=1")
                .to_request(),
        )
        .await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["items"][0]["title"], "Sheikh Zayed Villa");
        assert_eq!(body["data"]["pagination"]["total"], 2);
        assert_eq!(body["data"]["pagination"]["has_next"], true);
    }

    #[actix_web::test]
    async fn test_oversized_page_is_rejected() {
        let state = state_with(Config::default());
        let app = test::init_service(HttpServer::create_app(state)).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/listings?limit=1000")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_custom_role_header() {
        let mut config = Config::default();
        config.app.auth.rbac.role_header = "x-dashboard-role".to_string();
        let state = state_with(config);
        let app = test::init_service(HttpServer::create_app(state)).await;

        let payload = json!({
            "title": "Katameya Heights Villa",
            "property_type": "villa",
            "listing_type": "sale",
            "price": 2_000_000,
            "city": "New Cairo"
        });

        // the default header is ignored once another one is configured
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/listings")
                .insert_header(("x-user-role", "admin"))
                .set_json(&payload)
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/listings")
                .insert_header(("x-dashboard-role", "admin"))
                .set_json(&payload)
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    #[actix_web::test]
    async fn test_forbidden_error_body() {
        let state = state_with(Config::default());
        let app = test::init_service(HttpServer::create_app(state)).await;

        let listing = uuid::Uuid::new_v4();
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri(&format!("/api/v1/listings/{}/reject", listing))
                .insert_header(("x-user-role", "seller"))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "FORBIDDEN");
        assert_eq!(
            body["error"]["message"],
            "Forbidden: Role 'seller' cannot approve properties"
        );
    }

    #[actix_web::test]
    async fn test_unknown_listing_is_404() {
        let state = state_with(Config::default());
        let app = test::init_service(HttpServer::create_app(state)).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::put()
                .uri(&format!("/api/v1/listings/{}", uuid::Uuid::new_v4()))
                .insert_header(("x-user-role", "agent"))
                .set_json(json!({ "featured": true }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_version_endpoint() {
        let state = state_with(Config::default());
        let app = test::init_service(HttpServer::create_app(state)).await;

        let body: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/version").to_request(),
        )
        .await;
        assert_eq!(body["data"]["version"], env!("CARGO_PKG_VERSION"));
    }
}
