use crate::errors::ConfigError;
use std::{env, net::SocketAddr};
use url::Url;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub backend_url: Url,
}

impl Settings {
    /// Reads `PORT` and `NEGOCIO_API_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(env::var("PORT").ok(), env::var("NEGOCIO_API_URL").ok())
    }

    pub fn from_values(
        port: Option<String>,
        backend_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let port = port
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let backend_url = parse_backend_url(backend_url.as_deref().unwrap_or(DEFAULT_BACKEND_URL))?;
        Ok(Self { port, backend_url })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

pub fn parse_backend_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ConfigError::UnsupportedScheme(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let settings = Settings::from_values(None, None).unwrap();
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.backend_url.as_str(), "http://127.0.0.1:5000/");
    }

    #[test]
    fn unparseable_port_falls_back() {
        let settings = Settings::from_values(Some("web".into()), None).unwrap();
        assert_eq!(settings.port, 8080);
        let settings = Settings::from_values(Some("9001".into()), None).unwrap();
        assert_eq!(settings.listen_addr().port(), 9001);
    }

    #[test]
    fn backend_url_must_be_http() {
        assert!(matches!(
            parse_backend_url("not a url"),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            parse_backend_url("mailto:ops@example.com"),
            Err(ConfigError::UnsupportedScheme(_))
        ));
        assert!(parse_backend_url("https://api.example.com/v1/").is_ok());
    }
}
