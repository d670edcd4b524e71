use std::env;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
const DEFAULT_PORT: u16 = 8000;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    /// Absent keys are allowed at startup; requests then fail with 500.
    pub gemini_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            gemini_api_key: env::var(API_KEY_ENV)
                .ok()
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty()),
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("gemini_api_key", &self.gemini_api_key.as_ref().map(|_| "***"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set(key: &str, value: Option<&str>) {
        unsafe {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
    }

    #[test]
    #[serial]
    fn defaults_without_environment() {
        set("PORT", None);
        set(API_KEY_ENV, None);

        let config = Config::from_env();
        assert_eq!(config.port, 8000);
        assert!(config.gemini_api_key.is_none());
    }

    #[test]
    #[serial]
    fn reads_port_and_key() {
        set("PORT", Some("3000"));
        set(API_KEY_ENV, Some("  abc123  "));

        let config = Config::from_env();
        assert_eq!(config.port, 3000);
        assert_eq!(config.gemini_api_key.as_deref(), Some("abc123"));

        set("PORT", None);
        set(API_KEY_ENV, None);
    }

    #[test]
    #[serial]
    fn blank_key_counts_as_missing_and_bad_port_falls_back() {
        set("PORT", Some("not-a-port"));
        set(API_KEY_ENV, Some("   "));

        let config = Config::from_env();
        assert_eq!(config.port, 8000);
        assert!(config.gemini_api_key.is_none());

        set("PORT", None);
        set(API_KEY_ENV, None);
    }

    #[test]
    fn debug_hides_the_key() {
        let config = Config {
            port: 1,
            gemini_api_key: Some("secret".to_string()),
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("***"));
    }
}
