use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    tcgcollector_api::DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    tcgcollector_api::DEFAULT_TIMEOUT.as_secs()
}

impl Settings {
    /// Reads `config.toml` (or the file named by `TCGC_CONFIG`), then `TCGC_*`
    /// environment variables.
    pub fn new() -> Result<Self, ConfigError> {
        let config_path = std::env::var("TCGC_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
        Self::load(&config_path)
    }

    pub fn load(config_path: &str) -> Result<Self, ConfigError> {
        Self::load_with_env(config_path, None)
    }

    /// `env` replaces the process environment when set.
    fn load_with_env(
        config_path: &str,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(config_path).required(false))
            .add_source(
                Environment::with_prefix("TCGC")
                    .prefix_separator("_")
                    .separator("__")
                    .source(env),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Rejects values the client would refuse to start with.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url is required".to_string());
        }
        let url = url::Url::parse(&self.base_url)
            .map_err(|e| format!("base_url is not a valid URL: {e}"))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err("base_url must be a valid HTTP(S) URL".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than zero".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(base_url: &str) -> Settings {
        Settings {
            api_key: "key".into(),
            base_url: base_url.into(),
            timeout_secs: 30,
        }
    }

    const MISSING: &str = "/nonexistent/tcgc-config.toml";

    fn env(vars: &[(&str, &str)]) -> Option<Map<String, String>> {
        Some(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = Settings::load_with_env(MISSING, env(&[])).unwrap();
        assert_eq!(settings.base_url, "https://www.tcgcollector.com");
        assert_eq!(settings.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn file_values_override_defaults() {
        let path = std::env::temp_dir().join(format!("tcgc-settings-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "api_key = \"from-file\"\nbase_url = \"http://localhost:9000\"\ntimeout_secs = 5\n",
        )
        .unwrap();

        let settings = Settings::load_with_env(path.to_str().unwrap(), env(&[])).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.api_key, "from-file");
        assert_eq!(settings.base_url, "http://localhost:9000");
        assert_eq!(settings.timeout_secs, 5);
    }

    #[test]
    fn single_underscore_env_vars_are_read() {
        let settings = Settings::load_with_env(
            MISSING,
            env(&[
                ("TCGC_API_KEY", "from-env"),
                ("TCGC_BASE_URL", "http://localhost:9000"),
            ]),
        )
        .unwrap();

        assert_eq!(settings.api_key, "from-env");
        assert_eq!(settings.base_url, "http://localhost:9000");
    }

    #[test]
    fn env_overrides_file() {
        let path = std::env::temp_dir().join(format!("tcgc-env-{}.toml", std::process::id()));
        std::fs::write(&path, "api_key = \"from-file\"\n").unwrap();

        let settings =
            Settings::load_with_env(path.to_str().unwrap(), env(&[("TCGC_API_KEY", "from-env")]))
                .unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.api_key, "from-env");
    }

    #[test]
    fn unrelated_env_vars_are_ignored() {
        let settings =
            Settings::load_with_env(MISSING, env(&[("TCGCX_API_KEY", "nope"), ("API_KEY", "nope")]))
                .unwrap();
        assert_eq!(settings.api_key, "");
    }

    #[test]
    fn validate_accepts_http_and_https() {
        assert!(settings("https://www.tcgcollector.com").validate().is_ok());
        assert!(settings("http://localhost:8080").validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_base_urls() {
        assert!(settings("").validate().is_err());
        assert!(settings(":\\invalid").validate().is_err());
        assert!(settings("ftp://example.com").validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut settings = settings("https://www.tcgcollector.com");
        settings.timeout_secs = 0;
        assert!(settings.validate().is_err());
    }
}
