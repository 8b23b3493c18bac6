use crate::config;

/// Load and validate settings; any failure falls back to the defaults.
pub fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                tracing::warn!(error = %msg, "invalid config, using defaults");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent the app from starting.
            tracing::warn!(error = %e, "failed to load config, using defaults");
            config::Settings::default()
        }
    }
}
