//! Dashboard resource management tests
//!
//! Cover the four managed resources end to end: pages render what the
//! API lists, posted forms turn into the right API calls, and API
//! failures come back as page banners instead of error pages.

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use badmintoner_web::server::create_app;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::common::fixtures;
    use crate::common::{admin_session, mock_backend};

    const BEARER: &str = "Bearer admin-token";

    /// Chrome lookup used by every admin page
    async fn mount_admin_chrome(backend: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/auth/profile"))
            .and(header("authorization", BEARER))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(fixtures::admin_user("u-nav", "Dana", "Court")),
            )
            .mount(backend)
            .await;
    }

    #[actix_web::test]
    async fn test_users_page_lists_accounts() {
        let (backend, state) = mock_backend().await;
        mount_admin_chrome(&backend).await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .and(header("authorization", BEARER))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                fixtures::admin_user("u-1", "Dana", "Court"),
                fixtures::admin_user("u-2", "Sam", "Net"),
            ])))
            .expect(1)
            .mount(&backend)
            .await;

        let app = test::init_service(create_app(state)).await;
        let (token, role) = admin_session();
        let req = test::TestRequest::get()
            .uri("/admin/users")
            .cookie(token)
            .cookie(role)
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body = test::read_body(res).await;
        let page = String::from_utf8_lossy(&body);
        assert!(page.contains("Dana"));
        assert!(page.contains("Sam"));
        assert!(page.contains("sam.net@badmintoner.test"));
    }

    #[actix_web::test]
    async fn test_create_user_posts_to_api() {
        let (backend, state) = mock_backend().await;

        Mock::given(method("POST"))
            .and(path("/users"))
            .and(header("authorization", BEARER))
            .and(body_partial_json(json!({
                "first_name": "New",
                "last_name": "Staff",
                "email": "new.staff@badmintoner.test",
                "role": "admin",
                "password": "changeme"
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(fixtures::admin_user("u-3", "New", "Staff")),
            )
            .expect(1)
            .mount(&backend)
            .await;

        let app = test::init_service(create_app(state)).await;
        let (token, role) = admin_session();
        let req = test::TestRequest::post()
            .uri("/admin/users")
            .cookie(token)
            .cookie(role)
            .set_form([
                ("op", "create"),
                ("first_name", "New"),
                ("last_name", "Staff"),
                ("email", "new.staff@badmintoner.test"),
                ("role", "admin"),
                ("password", "changeme"),
            ])
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers().get("location").unwrap(), "/admin/users");
    }

    #[actix_web::test]
    async fn test_delete_user_calls_api() {
        let (backend, state) = mock_backend().await;

        Mock::given(method("DELETE"))
            .and(path("/users/u-9"))
            .and(header("authorization", BEARER))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&backend)
            .await;

        let app = test::init_service(create_app(state)).await;
        let (token, role) = admin_session();
        let req = test::TestRequest::post()
            .uri("/admin/users")
            .cookie(token)
            .cookie(role)
            .set_form([("op", "delete"), ("id", "u-9")])
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::SEE_OTHER);
    }

    #[actix_web::test]
    async fn test_create_club_sends_member_count() {
        let (backend, state) = mock_backend().await;

        Mock::given(method("POST"))
            .and(path("/clubs"))
            .and(body_partial_json(json!({
                "name": "Smash Bros BC",
                "location": "Oslo",
                "members": 24
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(fixtures::club("c-1", "Smash Bros BC", "Oslo", 24)),
            )
            .expect(1)
            .mount(&backend)
            .await;

        let app = test::init_service(create_app(state)).await;
        let (token, role) = admin_session();
        let req = test::TestRequest::post()
            .uri("/admin/clubs")
            .cookie(token)
            .cookie(role)
            .set_form([
                ("op", "create"),
                ("name", "Smash Bros BC"),
                ("location", "Oslo"),
                ("members", "24"),
            ])
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers().get("location").unwrap(), "/admin/clubs");
    }

    #[actix_web::test]
    async fn test_update_event_patches_api() {
        let (backend, state) = mock_backend().await;

        Mock::given(method("PATCH"))
            .and(path("/events/e-7"))
            .and(header("authorization", BEARER))
            .and(body_partial_json(json!({ "status": "completed" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::event(
                "e-7",
                "Spring Open",
                "2024-04-01T10:00:00.000Z",
                "completed",
            )))
            .expect(1)
            .mount(&backend)
            .await;

        let app = test::init_service(create_app(state)).await;
        let (token, role) = admin_session();
        let req = test::TestRequest::post()
            .uri("/admin/events")
            .cookie(token)
            .cookie(role)
            .set_form([
                ("op", "update"),
                ("id", "e-7"),
                ("name", "Spring Open"),
                ("date", "2024-04-01"),
                ("location", "Main Hall"),
                ("status", "completed"),
            ])
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers().get("location").unwrap(), "/admin/events");
    }

    #[actix_web::test]
    async fn test_create_player_uses_signup_endpoint() {
        let (backend, state) = mock_backend().await;

        Mock::given(method("POST"))
            .and(path("/players/signup"))
            .and(body_partial_json(json!({
                "first_name": "Tai",
                "username": "tzuying"
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(fixtures::player("p-2", "Tai", "Tzu-ying", Some("tzuying"))),
            )
            .expect(1)
            .mount(&backend)
            .await;

        let app = test::init_service(create_app(state)).await;
        let (token, role) = admin_session();
        let req = test::TestRequest::post()
            .uri("/admin/players")
            .cookie(token)
            .cookie(role)
            .set_form([
                ("op", "create"),
                ("first_name", "Tai"),
                ("last_name", "Tzu-ying"),
                ("email", "tai@badmintoner.test"),
                ("username", "tzuying"),
                ("password", "secret123"),
            ])
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::SEE_OTHER);
    }

    #[actix_web::test]
    async fn test_failed_action_shows_banner_with_api_message() {
        let (backend, state) = mock_backend().await;
        mount_admin_chrome(&backend).await;

        Mock::given(method("POST"))
            .and(path("/users"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(fixtures::api_error("Email already registered")),
            )
            .expect(1)
            .mount(&backend)
            .await;

        // the page re-render lists existing users again
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&backend)
            .await;

        let app = test::init_service(create_app(state)).await;
        let (token, role) = admin_session();
        let req = test::TestRequest::post()
            .uri("/admin/users")
            .cookie(token)
            .cookie(role)
            .set_form([
                ("op", "create"),
                ("first_name", "New"),
                ("last_name", "Staff"),
                ("email", "taken@badmintoner.test"),
                ("role", "admin"),
            ])
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body = test::read_body(res).await;
        assert!(String::from_utf8_lossy(&body).contains("Email already registered"));
    }

    #[actix_web::test]
    async fn test_dashboard_counts_and_recents() {
        let (backend, state) = mock_backend().await;
        mount_admin_chrome(&backend).await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                fixtures::admin_user("u-1", "Dana", "Court"),
                fixtures::admin_user("u-2", "Sam", "Net"),
            ])))
            .mount(&backend)
            .await;
        Mock::given(method("GET"))
            .and(path("/clubs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                fixtures::club("c-1", "Smash Bros BC", "Oslo", 24),
            ])))
            .mount(&backend)
            .await;
        Mock::given(method("GET"))
            .and(path("/events"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                fixtures::event("e-1", "Spring Open", "2024-04-01T10:00:00.000Z", "upcoming"),
            ])))
            .mount(&backend)
            .await;
        Mock::given(method("GET"))
            .and(path("/players"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                fixtures::player("p-1", "Lin", "Dan", Some("superdan")),
            ])))
            .mount(&backend)
            .await;

        let app = test::init_service(create_app(state)).await;
        let (token, role) = admin_session();
        let req = test::TestRequest::get()
            .uri("/admin/home")
            .cookie(token)
            .cookie(role)
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body = test::read_body(res).await;
        let page = String::from_utf8_lossy(&body);

        assert!(page.contains(r#"<span class="stat-value">2</span>"#));
        assert!(page.contains("Spring Open"));
        assert!(page.contains("Lin Dan"));
        // recent players link to their public profile
        assert!(page.contains("/player/profile/superdan"));
    }

    #[actix_web::test]
    async fn test_action_without_session_is_redirected_by_gate() {
        let (_backend, state) = mock_backend().await;

        let app = test::init_service(create_app(state)).await;
        let req = test::TestRequest::post()
            .uri("/admin/users")
            .set_form([("op", "delete"), ("id", "u-9")])
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(res.headers().get("location").unwrap(), "/admin/login");
    }

    #[actix_web::test]
    async fn test_stale_admin_token_still_loads_page() {
        // cookies present but the API rejects the token: lists degrade
        // to empty rather than erroring the page
        let (backend, state) = mock_backend().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .and(header("authorization", BEARER))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(fixtures::api_error("Unauthorized")),
            )
            .mount(&backend)
            .await;

        let app = test::init_service(create_app(state)).await;
        let (token, role) = admin_session();
        let req = test::TestRequest::get()
            .uri("/admin/users")
            .cookie(token)
            .cookie(role)
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
    }
}
