use anyhow::Result;
use clap::{arg, command};
use std::path::PathBuf;
use tagwm::utils::file_handler::{check_file_type, load_config_file, ConfigFileType};

fn main() -> Result<()> {
    let matches = command!("tagwm Check")
        .about("Checks syntax of the configuration file")
        .help_template(tagwm::utils::get_help_template())
        .args(&[
            arg!(-v --verbose "Outputs received configuration file."),
            arg!([INPUT] "Sets the input file to use. Uses the default location otherwise."),
        ])
        .get_matches();

    let config_file = matches.get_one::<String>("INPUT").map(PathBuf::from);
    let verbose = matches.get_flag("verbose");

    println!(
        "\x1b[0;94m::\x1b[0m tagwm version: {}",
        env!("CARGO_PKG_VERSION")
    );

    if let Some(path) = &config_file {
        println!("\x1b[1;35mNote: Using file {} \x1b[0m", path.display());
        if check_file_type(path) == ConfigFileType::TomlFile {
            println!("\x1b[1;35mYou are using TOML as config language. RON is preferred. \x1b[0m");
        }
    }

    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    match load_config_file(config_file) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            if verbose {
                dbg!(&config);
                tagwm::utils::log::setup_logging(&config.log_level)?;
            }
            println!("\x1b[0;94m::\x1b[0m Checking configuration . . .");
            if config.check(verbose) {
                println!("\x1b[0;92m    -> Configuration OK \x1b[0m");
            } else {
                println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m Configuration has invalid values \x1b[0m");
            }
        }
        Err(e) => {
            println!("Configuration failed. Reason: {e:?}");
        }
    }

    Ok(())
}
