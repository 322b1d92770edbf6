pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Location of the inference service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Builds a config from an optional override, typically `option_env!("DEEPFAKE_API_URL")`.
    /// Blank values fall back to [`DEFAULT_API_BASE_URL`].
    pub fn from_override(value: Option<&str>) -> Self {
        let base_url = value
            .map(str::trim)
            .map(|v| v.trim_end_matches('/'))
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);

        Self {
            base_url: base_url.to_string(),
        }
    }

    pub fn predict_url(&self) -> String {
        format!("{}/api/predict", self.base_url)
    }

    pub fn health_url(&self) -> String {
        format!("{}/api/health", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_override(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, "http://localhost:5000")]
    #[case(Some(""), "http://localhost:5000")]
    #[case(Some("   "), "http://localhost:5000")]
    #[case(Some("https://detector.example.com/"), "https://detector.example.com")]
    #[case(Some("http://10.0.0.2:8080"), "http://10.0.0.2:8080")]
    fn resolves_base_url(#[case] value: Option<&str>, #[case] expected: &str) {
        assert_eq!(ApiConfig::from_override(value).base_url, expected);
    }

    #[test]
    fn builds_endpoint_urls() {
        let config = ApiConfig::from_override(Some("http://api.local//"));
        assert_eq!(config.predict_url(), "http://api.local/api/predict");
        assert_eq!(config.health_url(), "http://api.local/api/health");
    }
}
