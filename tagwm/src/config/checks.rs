use super::Config;
use tagwm_core::models::Color;
use tracing_subscriber::EnvFilter;

impl Config {
    /// Runs every check, printing what is wrong. Returns `false` if anything is.
    pub fn check(&self, verbose: bool) -> bool {
        let results = [
            self.check_tags(verbose),
            self.check_border(verbose),
            self.check_opacity(verbose),
            self.check_log_level(verbose),
        ];
        results.iter().all(|ok| *ok)
    }

    pub fn check_tags(&self, verbose: bool) -> bool {
        if verbose {
            println!("Checking tags.");
        }
        if self.tags.is_empty() {
            println!("No tags are configured, windows will never be visible unless sticky.");
            return false;
        }
        let mut labels: Vec<&String> = self.tags.iter().collect();
        labels.sort_unstable();
        labels.dedup();
        if labels.len() != self.tags.len() {
            println!("Tag labels must be unique: {:?}", self.tags);
            return false;
        }
        if verbose {
            println!("Tags are okay.");
        }
        true
    }

    pub fn check_border(&self, verbose: bool) -> bool {
        if verbose {
            println!("Checking border width and color.");
        }
        let mut ok = true;
        if self.border_width < 0 {
            println!("Border width {} is negative.", self.border_width);
            ok = false;
        }
        if let Err(err) = self.border_color.parse::<Color>() {
            println!("Border color is invalid: {err}");
            ok = false;
        }
        if ok && verbose {
            println!("Border is okay.");
        }
        ok
    }

    pub fn check_opacity(&self, verbose: bool) -> bool {
        if verbose {
            println!("Checking opacity.");
        }
        match self.opacity {
            Some(opacity) if !(0.0..=1.0).contains(&opacity) => {
                println!("Opacity {opacity} is outside of 0.0..=1.0.");
                false
            }
            _ => true,
        }
    }

    pub fn check_log_level(&self, verbose: bool) -> bool {
        if verbose {
            println!("Trying to parse log_level.");
        }
        match EnvFilter::builder().parse(&self.log_level) {
            Ok(_) if verbose => {
                println!("Log level is ok.");
                true
            }
            Ok(_) => true,
            Err(err) => {
                println!("Log level is invalid: {err}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_passes() {
        assert!(Config::default().check(false));
    }

    #[test]
    fn bad_values_are_caught() {
        let config = Config {
            tags: vec!["a".to_owned(), "a".to_owned()],
            border_width: -2,
            border_color: "#12345".to_owned(),
            opacity: Some(1.2),
            log_level: "tagwm=loud".to_owned(),
        };
        assert!(!config.check_tags(false));
        assert!(!config.check_border(false));
        assert!(!config.check_opacity(false));
        assert!(!config.check_log_level(false));
    }
}
