//! Route access gate integration tests
//!
//! Sends every visitor persona across the route surface and checks
//! where each request lands. No backend is running; pages that fetch
//! data degrade to their empty state, which is enough to observe the
//! gate's verdict.

#[cfg(test)]
mod tests {
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use badmintoner_web::server::create_app;

    use crate::common::{admin_session, player_session, test_state};

    /// Backend address nothing listens on
    const DEAD_BACKEND: &str = "http://127.0.0.1:9";

    async fn landing(
        uri: &str,
        session: Option<(Cookie<'static>, Cookie<'static>)>,
    ) -> (StatusCode, Option<String>) {
        let app = test::init_service(create_app(test_state(DEAD_BACKEND))).await;

        let mut req = test::TestRequest::get().uri(uri);
        if let Some((token, role)) = session {
            req = req.cookie(token).cookie(role);
        }
        let res = test::call_service(&app, req.to_request()).await;

        let location = res
            .headers()
            .get("location")
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        (res.status(), location)
    }

    #[actix_web::test]
    async fn test_anonymous_visitor() {
        assert_eq!(landing("/", None).await.0, StatusCode::OK);
        assert_eq!(landing("/club", None).await.0, StatusCode::OK);
        assert_eq!(landing("/event", None).await.0, StatusCode::OK);
        assert_eq!(landing("/admin/login", None).await.0, StatusCode::OK);
        assert_eq!(landing("/admin/signup", None).await.0, StatusCode::OK);
        assert_eq!(landing("/player/login", None).await.0, StatusCode::OK);
        assert_eq!(landing("/player/signup", None).await.0, StatusCode::OK);

        let (status, location) = landing("/admin/home", None).await;
        assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location.as_deref(), Some("/admin/login"));

        let (status, location) = landing("/admin/events", None).await;
        assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location.as_deref(), Some("/admin/login"));
    }

    #[actix_web::test]
    async fn test_signed_in_admin() {
        assert_eq!(landing("/", Some(admin_session())).await.0, StatusCode::OK);
        assert_eq!(
            landing("/admin/home", Some(admin_session())).await.0,
            StatusCode::OK
        );
        assert_eq!(
            landing("/admin/users", Some(admin_session())).await.0,
            StatusCode::OK
        );

        let (status, location) = landing("/admin/login", Some(admin_session())).await;
        assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location.as_deref(), Some("/admin/home"));

        let (status, location) = landing("/player/signup", Some(admin_session())).await;
        assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location.as_deref(), Some("/admin/home"));
    }

    #[actix_web::test]
    async fn test_signed_in_player() {
        assert_eq!(landing("/", Some(player_session())).await.0, StatusCode::OK);

        let (status, location) = landing("/player/login", Some(player_session())).await;
        assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location.as_deref(), Some("/"));

        let (status, location) = landing("/admin/login", Some(player_session())).await;
        assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location.as_deref(), Some("/"));

        let (status, location) = landing("/admin/home", Some(player_session())).await;
        assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location.as_deref(), Some("/admin/login"));
    }

    /// A token cookie without a readable role tag
    #[actix_web::test]
    async fn test_token_without_role_tag() {
        let session = || {
            (
                Cookie::new("token", "token-1"),
                Cookie::new("user_type", "gardener"),
            )
        };

        // auth pages treat it as signed out
        assert_eq!(landing("/admin/login", Some(session())).await.0, StatusCode::OK);

        // the admin area still requires the admin tag
        let (status, location) = landing("/admin/home", Some(session())).await;
        assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location.as_deref(), Some("/admin/login"));
    }

    #[actix_web::test]
    async fn test_unknown_paths_redirect_to_not_found() {
        for uri in ["/admin", "/player", "/clubs", "/admin/users/42", "/deep/nested/path"] {
            let (status, location) = landing(uri, Some(admin_session())).await;
            assert_eq!(status, StatusCode::TEMPORARY_REDIRECT, "uri: {}", uri);
            assert_eq!(location.as_deref(), Some("/not-found"), "uri: {}", uri);
        }
    }

    #[actix_web::test]
    async fn test_profile_pages_are_public() {
        assert_eq!(
            landing("/not-found", None).await.0,
            StatusCode::NOT_FOUND
        );

        // the slug route is valid for every persona; with no backend the
        // lookup fails and surfaces as a gateway error page rather than
        // a redirect
        let (status, location) = landing("/player/profile/superdan", None).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(location, None);
    }
}
