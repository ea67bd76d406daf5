//! Settings the state model needs from the user configuration.

pub trait Config {
    /// Labels of the tags to create, in order. Tag ids start at 1.
    fn create_list_of_tag_labels(&self) -> Vec<String>;

    /// Border width given to newly managed windows.
    fn border_width(&self) -> i32;

    /// Border color given to newly managed windows, e.g. `#222222`.
    fn default_border_color(&self) -> &str;

    /// Opacity given to newly managed windows. `None` leaves it unset.
    fn opacity(&self) -> Option<f64>;
}

#[cfg(test)]
#[allow(clippy::module_name_repetitions)]
pub struct TestConfig {
    pub tags: Vec<String>,
}

#[cfg(test)]
impl Config for TestConfig {
    fn create_list_of_tag_labels(&self) -> Vec<String> {
        self.tags.clone()
    }
    fn border_width(&self) -> i32 {
        1
    }
    fn default_border_color(&self) -> &str {
        "#222222"
    }
    fn opacity(&self) -> Option<f64> {
        None
    }
}
