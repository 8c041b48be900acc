use tracing::warn;
use url::Url;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct Settings {
    pub server_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.into(),
        }
    }
}

/// Environment-provided configuration with defaults. The base URL is the
/// only external knob this client has.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(v) = std::env::var("CARELINE_SERVER_URL") {
        settings.server_url = v;
    }
    if let Ok(v) = std::env::var("APP__SERVER_URL") {
        settings.server_url = v;
    }

    settings.server_url = normalize_server_url(&settings.server_url);
    settings
}

fn normalize_server_url(raw: &str) -> String {
    let raw = raw.trim().trim_end_matches('/');

    if raw.is_empty() {
        return Settings::default().server_url;
    }

    match Url::parse(raw) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => raw.to_string(),
        _ => {
            warn!(server_url = raw, "invalid server url; falling back to default");
            Settings::default().server_url
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_valid_http_url() {
        assert_eq!(
            normalize_server_url("http://10.0.0.5:9000"),
            "http://10.0.0.5:9000"
        );
    }

    #[test]
    fn trims_whitespace_and_trailing_slash() {
        assert_eq!(
            normalize_server_url(" https://care.example.org/ "),
            "https://care.example.org"
        );
    }

    #[test]
    fn rejects_non_http_schemes() {
        assert_eq!(normalize_server_url("ftp://nope"), DEFAULT_SERVER_URL);
        assert_eq!(normalize_server_url("not a url"), DEFAULT_SERVER_URL);
        assert_eq!(normalize_server_url(""), DEFAULT_SERVER_URL);
    }
}
