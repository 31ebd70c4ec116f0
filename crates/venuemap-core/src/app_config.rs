use crate::venue::LatLng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub location_name: String,
    pub center: LatLng,
    pub foursquare_client_id: String,
    pub foursquare_client_secret: String,
    pub foursquare_base_url: String,
    pub foursquare_version: String,
    pub explore_section: String,
    pub venue_limit: u32,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("location_name", &self.location_name)
            .field("center", &self.center)
            .field("foursquare_client_id", &self.foursquare_client_id)
            .field("foursquare_client_secret", &"[redacted]")
            .field("foursquare_base_url", &self.foursquare_base_url)
            .field("foursquare_version", &self.foursquare_version)
            .field("explore_section", &self.explore_section)
            .field("venue_limit", &self.venue_limit)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
