/// Runtime configuration for the service locator, sourced from environment
/// variables. See [`crate::config::load_app_config`].
#[derive(Clone)]
pub struct AppConfig {
    /// API key for the place-search / geocoding provider. `None` means the
    /// provider is unconfigured; any search attempt must fail fast with a
    /// provider-unconfigured error before issuing calls.
    pub places_api_key: Option<String>,
    /// Base URL of the provider API. Overridable to point at a mock server.
    pub places_base_url: String,
    pub request_timeout_secs: u64,
    /// Delay between consecutive nearby-search calls within one sweep.
    pub nearby_delay_ms: u64,
    /// Delay between consecutive text-search calls; text search is more
    /// aggressively rate-limited by the provider, so this is larger.
    pub text_delay_ms: u64,
    pub log_level: String,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "places_api_key",
                &self.places_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("places_base_url", &self.places_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("nearby_delay_ms", &self.nearby_delay_ms)
            .field("text_delay_ms", &self.text_delay_ms)
            .field("log_level", &self.log_level)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
