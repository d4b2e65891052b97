use crate::Coordinate;

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
    /// HotPepper API credential. Required and non-empty; checked at load time.
    pub hotpepper_api_key: String,
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    /// Coordinate used when no live fix is available. Opt-in; absent means a
    /// search without a fix surfaces `LocationUnavailable` instead.
    pub fallback_coordinate: Option<Coordinate>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("hotpepper_api_key", &"[redacted]")
            .field("api_base_url", &self.api_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("fallback_coordinate", &self.fallback_coordinate)
            .finish()
    }
}
