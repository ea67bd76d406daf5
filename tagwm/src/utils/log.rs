use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{filter::ParseError, layer::SubscriberExt, EnvFilter};

/// Builds a subscriber filtering on `level_regex`, an `EnvFilter` directive such as
/// `info` or `tagwm_core=trace,warn`. An unparseable directive falls back to `info` and the
/// parse error is handed back so it can be reported once logging works.
#[must_use]
pub fn parse_log_level(level_regex: &str) -> (impl Subscriber, Option<ParseError>) {
    let mut parse_err = None;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse(level_regex)
        .unwrap_or_else(|err| {
            parse_err = Some(err);
            EnvFilter::default().add_directive(LevelFilter::INFO.into())
        });
    (get_subscribers(filter), parse_err)
}

pub fn get_subscribers(filter: EnvFilter) -> impl Subscriber {
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
}

/// Installs the global subscriber for `level_regex`.
///
/// # Errors
///
/// Errors if a global subscriber has already been installed.
pub fn setup_logging(level_regex: &str) -> anyhow::Result<()> {
    let (subscriber, parse_err) = parse_log_level(level_regex);
    tracing::subscriber::set_global_default(subscriber)?;
    if let Some(err) = parse_err {
        tracing::warn!("Invalid log level '{}': {}, using info", level_regex, err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_levels_parse() {
        for level in ["info", "debug", "tagwm_core=trace,warn"] {
            let (_, err) = parse_log_level(level);
            assert!(err.is_none(), "{level} was rejected");
        }
    }

    #[test]
    fn invalid_levels_report_the_error() {
        let (_, err) = parse_log_level("tagwm_core=loud");
        assert!(err.is_some());
    }
}
