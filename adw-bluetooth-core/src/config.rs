use crate::app_id;

pub const DEFAULT_TITLE: &str = "Bluetooth";
pub const DEFAULT_WIDTH: i32 = 550;
pub const DEFAULT_HEIGHT: i32 = 510;

/// Explicit startup configuration, built once in `main` and handed to the
/// frontend instead of scattering identifier and geometry literals across
/// call sites.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_id: String,
    pub title: String,
    /// Initial window width; zero or negative means "use the toolkit default".
    pub default_width: i32,
    /// Initial window height; zero or negative means "use the toolkit default".
    pub default_height: i32,
}

impl AppConfig {
    /// Build a config with a caller-supplied identifier.
    ///
    /// The identifier is validated up front so a bad one fails here, before
    /// the toolkit is touched, rather than as an opaque registration error.
    pub fn new(
        app_id: &str,
        title: &str,
        default_width: i32,
        default_height: i32,
    ) -> Result<Self, String> {
        if !app_id::is_valid(app_id) {
            return Err(format!("invalid application id '{}'", app_id));
        }
        Ok(AppConfig {
            app_id: app_id.to_string(),
            title: title.to_string(),
            default_width,
            default_height,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            app_id: app_id::CANONICAL.to_string(),
            title: DEFAULT_TITLE.to_string(),
            default_width: DEFAULT_WIDTH,
            default_height: DEFAULT_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_carries_canonical_literals() {
        let config = AppConfig::default();
        assert_eq!(config.app_id, app_id::CANONICAL);
        assert_eq!(config.title, "Bluetooth");
        assert_eq!(config.default_width, 550);
        assert_eq!(config.default_height, 510);
    }

    #[test]
    fn default_id_passes_validation() {
        assert!(app_id::is_valid(&AppConfig::default().app_id));
    }

    #[test]
    fn new_rejects_invalid_id() {
        assert!(AppConfig::new("com.eweaver.adw-bluetooth", "Bluetooth", 550, 510).is_err());
        assert!(AppConfig::new("bluetooth", "Bluetooth", 550, 510).is_err());
    }

    #[test]
    fn new_accepts_toolkit_default_dimensions() {
        let config = AppConfig::new("com.example.App", "App", 0, 0).unwrap();
        assert_eq!(config.default_width, 0);
        assert_eq!(config.default_height, 0);
    }
}
