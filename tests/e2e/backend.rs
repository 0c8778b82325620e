//! E2E tests against a running Badmintoner API
//!
//! These tests exercise the real REST client over the network and run
//! only when API_TARGET_URL points at a live API.
//! Run with: cargo test -- --ignored

#[cfg(test)]
mod tests {
    use badmintoner_web::backend::BackendClient;
    use badmintoner_web::config::BackendConfig;

    use crate::skip_without_env;

    /// A client pointed at the API named by API_TARGET_URL
    fn live_client() -> BackendClient {
        let base_url =
            std::env::var("API_TARGET_URL").expect("API_TARGET_URL environment variable not set");
        let config = BackendConfig {
            base_url,
            ..BackendConfig::default()
        };
        BackendClient::new(&config).expect("client construction failed")
    }

    /// Bad credentials must come back as a rejection, not a transport error
    #[tokio::test]
    #[ignore]
    async fn test_admin_login_rejects_bad_credentials() {
        skip_without_env!("API_TARGET_URL");
        let client = live_client();

        let result = client
            .admin_login("admin@badmintoner.test", "wrong-password")
            .await;

        assert!(result.is_err());
    }

    /// A made-up profile slug resolves to a not-found error
    #[tokio::test]
    #[ignore]
    async fn test_public_profile_for_unknown_slug() {
        skip_without_env!("API_TARGET_URL");
        let client = live_client();

        let result = client
            .public_profile("no-such-player-slug-badmintoner", None)
            .await;

        assert!(result.is_err());
    }
}
