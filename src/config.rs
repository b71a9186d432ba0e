use std::env;

/// Default address of the listings backend
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL shared by the search, review, and city catalog endpoints
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Config {
    /// Read `STAY_SCOUT_API_URL`, falling back to the default backend address
    pub fn from_env() -> Self {
        let api_base_url =
            env::var("STAY_SCOUT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self { api_base_url }
    }
}
