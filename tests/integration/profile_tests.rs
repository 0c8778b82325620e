//! Profile page and self-service update tests

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use badmintoner_web::server::create_app;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::common::fixtures;
    use crate::common::{mock_backend, player_session};

    const BEARER: &str = "Bearer player-token";
    const BASIC_AUTH: &str = "Basic YWRtaW46cGFzc3dvcmQxMjM=";

    /// The signed-in player's own record, served for ownership checks
    /// and the page chrome
    async fn mount_own_profile(backend: &MockServer, profile: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/players/profile"))
            .and(header("authorization", BEARER))
            .respond_with(ResponseTemplate::new(200).set_body_json(profile))
            .mount(backend)
            .await;
    }

    #[actix_web::test]
    async fn test_public_profile_renders_for_anonymous_visitor() {
        let (backend, state) = mock_backend().await;

        // without a session the lookup authenticates with basic auth
        Mock::given(method("GET"))
            .and(path("/players/profile/superdan"))
            .and(header("authorization", BASIC_AUTH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(fixtures::player("p-1", "Lin", "Dan", Some("superdan"))),
            )
            .expect(1)
            .mount(&backend)
            .await;

        let app = test::init_service(create_app(state)).await;
        let req = test::TestRequest::get()
            .uri("/player/profile/superdan")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body = test::read_body(res).await;
        let page = String::from_utf8_lossy(&body);

        assert!(page.contains("Lin Dan"));
        assert!(page.contains("@superdan"));
        assert!(page.contains("Loves a long rally."));
        assert!(page.contains("Smash Bros BC"));
        // visitors get no edit forms
        assert!(!page.contains(r#"value="profile""#));
    }

    #[actix_web::test]
    async fn test_owner_sees_edit_forms() {
        let (backend, state) = mock_backend().await;
        let own = fixtures::player("p-1", "Lin", "Dan", Some("superdan"));

        Mock::given(method("GET"))
            .and(path("/players/profile/superdan"))
            .and(header("authorization", BEARER))
            .respond_with(ResponseTemplate::new(200).set_body_json(own.clone()))
            .mount(&backend)
            .await;
        mount_own_profile(&backend, own).await;

        let app = test::init_service(create_app(state)).await;
        let (token, role) = player_session();
        let req = test::TestRequest::get()
            .uri("/player/profile/superdan")
            .cookie(token)
            .cookie(role)
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body = test::read_body(res).await;
        let page = String::from_utf8_lossy(&body);

        assert!(page.contains(r#"value="profile""#));
        assert!(page.contains(r#"value="account""#));
        assert!(page.contains("lin@badmintoner.test"));
    }

    #[actix_web::test]
    async fn test_another_players_page_is_read_only() {
        let (backend, state) = mock_backend().await;

        Mock::given(method("GET"))
            .and(path("/players/profile/tzuying"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(fixtures::player("p-2", "Tai", "Tzu-ying", Some("tzuying"))),
            )
            .mount(&backend)
            .await;
        mount_own_profile(&backend, fixtures::player("p-1", "Lin", "Dan", Some("superdan"))).await;

        let app = test::init_service(create_app(state)).await;
        let (token, role) = player_session();
        let req = test::TestRequest::get()
            .uri("/player/profile/tzuying")
            .cookie(token)
            .cookie(role)
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body = test::read_body(res).await;
        let page = String::from_utf8_lossy(&body);

        assert!(page.contains("Tai Tzu-ying"));
        assert!(!page.contains(r#"value="profile""#));
    }

    #[actix_web::test]
    async fn test_profile_entry_redirects_to_own_slug() {
        let (backend, state) = mock_backend().await;
        mount_own_profile(&backend, fixtures::player("p-1", "Lin", "Dan", Some("superdan"))).await;

        let app = test::init_service(create_app(state)).await;
        let (token, role) = player_session();
        let req = test::TestRequest::get()
            .uri("/player/profile")
            .cookie(token)
            .cookie(role)
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            res.headers().get("location").unwrap(),
            "/player/profile/superdan"
        );
    }

    #[actix_web::test]
    async fn test_profile_entry_falls_back_to_id_without_username() {
        let (backend, state) = mock_backend().await;
        mount_own_profile(&backend, fixtures::player("p-1", "Lin", "Dan", None)).await;

        let app = test::init_service(create_app(state)).await;
        let (token, role) = player_session();
        let req = test::TestRequest::get()
            .uri("/player/profile")
            .cookie(token)
            .cookie(role)
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(res.headers().get("location").unwrap(), "/player/profile/p-1");
    }

    #[actix_web::test]
    async fn test_profile_entry_without_session_goes_to_login() {
        let (_backend, state) = mock_backend().await;

        let app = test::init_service(create_app(state)).await;
        let req = test::TestRequest::get().uri("/player/profile").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(res.headers().get("location").unwrap(), "/player/login");
    }

    #[actix_web::test]
    async fn test_unknown_slug_renders_not_found_page() {
        let (backend, state) = mock_backend().await;

        Mock::given(method("GET"))
            .and(path("/players/profile/ghost"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(fixtures::api_error("Player not found")),
            )
            .expect(1)
            .mount(&backend)
            .await;

        let app = test::init_service(create_app(state)).await;
        let req = test::TestRequest::get()
            .uri("/player/profile/ghost")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body = test::read_body(res).await;
        assert!(String::from_utf8_lossy(&body).contains("This page does not exist."));
    }

    #[actix_web::test]
    async fn test_profile_update_patches_api() {
        let (backend, state) = mock_backend().await;

        Mock::given(method("PATCH"))
            .and(path("/players/profile"))
            .and(header("authorization", BEARER))
            .and(body_json(json!({
                "first_name": "Lin",
                "last_name": "Dan",
                "username": "superdan",
                "bio": "Two-time Olympic champion."
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(fixtures::player("p-1", "Lin", "Dan", Some("superdan"))),
            )
            .expect(1)
            .mount(&backend)
            .await;

        let app = test::init_service(create_app(state)).await;
        let (token, role) = player_session();
        let req = test::TestRequest::post()
            .uri("/player/profile")
            .cookie(token)
            .cookie(role)
            .set_form([
                ("op", "profile"),
                ("first_name", "Lin"),
                ("last_name", "Dan"),
                ("username", "superdan"),
                ("bio", "Two-time Olympic champion."),
            ])
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers().get("location").unwrap(), "/player/profile");
    }

    #[actix_web::test]
    async fn test_account_update_sends_only_filled_fields() {
        let (backend, state) = mock_backend().await;

        // blank password stays out of the payload entirely
        Mock::given(method("PATCH"))
            .and(path("/players/profile/account"))
            .and(body_json(json!({ "email": "new@badmintoner.test" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&backend)
            .await;

        let app = test::init_service(create_app(state)).await;
        let (token, role) = player_session();
        let req = test::TestRequest::post()
            .uri("/player/profile")
            .cookie(token)
            .cookie(role)
            .set_form([
                ("op", "account"),
                ("email", "new@badmintoner.test"),
                ("password", ""),
            ])
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::SEE_OTHER);
    }

    #[actix_web::test]
    async fn test_empty_account_update_shows_banner() {
        let (backend, state) = mock_backend().await;
        mount_own_profile(&backend, fixtures::player("p-1", "Lin", "Dan", Some("superdan"))).await;

        let app = test::init_service(create_app(state)).await;
        let (token, role) = player_session();
        let req = test::TestRequest::post()
            .uri("/player/profile")
            .cookie(token)
            .cookie(role)
            .set_form([("op", "account"), ("email", ""), ("password", "")])
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body = test::read_body(res).await;
        assert!(String::from_utf8_lossy(&body).contains("Nothing to update"));
    }

    #[actix_web::test]
    async fn test_failed_update_rerenders_with_banner() {
        let (backend, state) = mock_backend().await;
        mount_own_profile(&backend, fixtures::player("p-1", "Lin", "Dan", Some("superdan"))).await;

        Mock::given(method("PATCH"))
            .and(path("/players/profile"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(fixtures::api_error("username must be unique")),
            )
            .expect(1)
            .mount(&backend)
            .await;

        let app = test::init_service(create_app(state)).await;
        let (token, role) = player_session();
        let req = test::TestRequest::post()
            .uri("/player/profile")
            .cookie(token)
            .cookie(role)
            .set_form([
                ("op", "profile"),
                ("first_name", "Lin"),
                ("last_name", "Dan"),
                ("username", "taken"),
                ("bio", ""),
            ])
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body = test::read_body(res).await;
        assert!(String::from_utf8_lossy(&body).contains("username must be unique"));
    }
}
