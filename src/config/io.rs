use super::AppConfig;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load the configuration file, falling back to defaults when the file is
/// missing or malformed so the UI can still launch.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err}");
            AppConfig::default()
        }
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

#[cfg(test)]
mod tests {
    use super::parse_config;
    use crate::config::{LogLevel, ThemeMode};

    #[test]
    fn empty_config_yields_defaults() {
        let cfg = parse_config("").expect("empty TOML should parse");
        assert_eq!(cfg.api_base_url, "http://localhost:5000/api");
        assert_eq!(cfg.speed_percent, 0);
        assert_eq!(cfg.repeat_count, 1);
        assert_eq!(cfg.loop_interval_ms, 500);
        assert_eq!(cfg.theme, ThemeMode::Night);
    }

    #[test]
    fn partial_config_overrides_only_named_fields() {
        let cfg = parse_config(
            r#"
            theme = "day"
            api_base_url = "http://tts.example:8080/api"
            log_level = "debug"
            "#,
        )
        .expect("partial TOML should parse");
        assert_eq!(cfg.theme, ThemeMode::Day);
        assert_eq!(cfg.api_base_url, "http://tts.example:8080/api");
        assert_eq!(cfg.log_level, LogLevel::Debug);
        assert_eq!(cfg.audio_base_url, "http://localhost:5000/audio");
    }

    #[test]
    fn load_missing_file_falls_back_to_defaults() {
        let cfg = super::load_config(std::path::Path::new("does/not/exist.toml"));
        assert_eq!(cfg.default_voice, "Mandarin Female (Xiaoyi)");
    }
}
