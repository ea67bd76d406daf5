use crate::Config;
use anyhow::{bail, Result};
use ron::{
    extensions::Extensions,
    ser::{to_string_pretty, PrettyConfig},
    Options,
};
use std::{
    ffi::OsStr,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use xdg::BaseDirectories;

const COMMENT_HEADER: &str = r#"// tagwm configuration
//
// tags:         labels of the tags to create, in order
// border_width: border width of newly managed windows
// border_color: color name, #rgb, #rrggbb or #rrggbbaa
// opacity:      Some(0.0..=1.0), or None to leave windows opaque
// log_level:    an EnvFilter directive, e.g. "info" or "tagwm_core=trace"

"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFileType {
    RonFile,
    TomlFile,
}

/// Anything not ending in `.toml` is read as RON.
pub fn check_file_type(path: impl AsRef<Path>) -> ConfigFileType {
    if path.as_ref().extension() == Some(OsStr::new("toml")) {
        ConfigFileType::TomlFile
    } else {
        ConfigFileType::RonFile
    }
}

/// `$XDG_CONFIG_HOME/tagwm/config.ron`, creating the directory if needed.
///
/// # Errors
///
/// Errors if the XDG base directories cannot be determined or created.
pub fn get_default_path() -> Result<PathBuf> {
    let path = BaseDirectories::with_prefix("tagwm")?;
    Ok(path.place_config_file("config.ron")?)
}

/// Loads the configuration from `path`, or from the default location when `path` is `None`.
///
/// In the default location `config.ron` is preferred over `config.toml`. If neither exists a
/// default `config.ron` is written and returned.
///
/// # Errors
///
/// Errors if an explicitly given file does not exist, if a file cannot be read or parsed,
/// or if the default file cannot be written.
pub fn load_config_file(path: Option<PathBuf>) -> Result<Config> {
    tracing::debug!("Loading config file");
    if let Some(path) = path {
        if !path.exists() {
            bail!("Config file '{}' does not exist", path.display());
        }
        return read_config_file(&path);
    }
    let ron_file = get_default_path()?;
    load_or_create(&ron_file, &ron_file.with_extension("toml"))
}

fn load_or_create(ron_file: &Path, toml_file: &Path) -> Result<Config> {
    if ron_file.exists() {
        read_config_file(ron_file)
    } else if toml_file.exists() {
        read_config_file(toml_file)
    } else {
        tracing::debug!("Config file not found. Using default config file.");
        let config = Config::default();
        write_to_file(ron_file, &config)?;
        Ok(config)
    }
}

fn read_config_file(path: &Path) -> Result<Config> {
    tracing::debug!("Config file '{}' found.", path.display());
    let contents = fs::read_to_string(path)?;
    let config = match check_file_type(path) {
        ConfigFileType::RonFile => {
            let ron = Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
            ron.from_str(&contents)?
        }
        ConfigFileType::TomlFile => toml::from_str(&contents)?,
    };
    Ok(config)
}

/// # Errors
/// This function errors when:
/// - serialization of the config fails
/// - writing to file fails
pub fn write_to_file(ron_file: &Path, config: &Config) -> Result<()> {
    let ron_pretty_conf = PrettyConfig::new()
        .depth_limit(2)
        .extensions(Extensions::IMPLICIT_SOME);
    let ron = to_string_pretty(&config, ron_pretty_conf)?;
    let ron_with_header = String::from(COMMENT_HEADER) + &ron;
    let mut file = File::create(ron_file)?;
    file.write_all(ron_with_header.as_bytes())?;
    Ok(())
}
