//! `tagwm` general configuration

mod checks;

use serde::{Deserialize, Serialize};
use tagwm_core::models::Color;

/// General configuration
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Labels of the tags to create, in order.
    pub tags: Vec<String>,
    pub border_width: i32,
    /// Color name, `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub border_color: String,
    /// Opacity of newly managed windows, between 0.0 and 1.0. Unset leaves windows opaque.
    pub opacity: Option<f64>,
    /// An `EnvFilter` directive, e.g. `info` or `tagwm_core=trace`.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        let tags = ["1", "2", "3", "4", "5", "6", "7", "8", "9"]
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        Self {
            tags,
            border_width: 1,
            border_color: Color::rgb(0x22, 0x22, 0x22).to_string(),
            opacity: None,
            log_level: "info".to_owned(),
        }
    }
}

impl tagwm_core::Config for Config {
    fn create_list_of_tag_labels(&self) -> Vec<String> {
        self.tags.clone()
    }

    fn border_width(&self) -> i32 {
        self.border_width
    }

    fn default_border_color(&self) -> &str {
        &self.border_color
    }

    fn opacity(&self) -> Option<f64> {
        self.opacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagwm_core::models::{MockHandle, WindowHandle};
    use tagwm_core::State;

    #[test]
    fn default_config_drives_the_state() {
        let config = Config {
            border_width: 4,
            opacity: Some(0.9),
            ..Config::default()
        };
        let mut state: State<MockHandle> = State::new(&config);
        assert_eq!(state.tags().len(), 9);

        let handle = WindowHandle(1);
        state.manage_window(handle, None);
        let window = state.window(&handle).unwrap();
        assert_eq!(window.border_width(), 4);
        assert_eq!(window.border_color(), Color::rgb(0x22, 0x22, 0x22));
        assert_eq!(window.opacity(), Some(0.9));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: Config = ron::from_str("(tags: [\"web\"], border_width: 2)").unwrap();
        assert_eq!(config.tags, vec!["web".to_owned()]);
        assert_eq!(config.border_width, 2);
        assert_eq!(config.border_color, "#222222");
        assert_eq!(config.log_level, "info");
    }
}
