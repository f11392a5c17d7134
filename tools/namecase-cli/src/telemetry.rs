use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    /// `--log-level` is not a valid filter directive.
    InvalidFilter { value: String, source: ParseError },
    /// A global subscriber was installed before this one.
    AlreadyInstalled,
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::InvalidFilter { value, .. } => {
                write!(f, "invalid --log-level '{value}'")
            }
            TelemetryError::AlreadyInstalled => f.write_str("a log subscriber is already installed"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::InvalidFilter { source, .. } => Some(source),
            TelemetryError::AlreadyInstalled => None,
        }
    }
}

/// Installs the stderr logger, keeping stdout for results. `RUST_LOG`, when
/// set and valid, wins over `level`.
pub fn init(level: &str) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|source| TelemetryError::InvalidFilter {
            value: level.to_owned(),
            source,
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|_| TelemetryError::AlreadyInstalled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn bad_filter_is_reported() {
        std::env::remove_var("RUST_LOG");
        let err = init("namecase=notalevel").unwrap_err();
        assert!(matches!(err, TelemetryError::InvalidFilter { .. }));
        assert!(err.to_string().contains("namecase=notalevel"));
        assert!(err.source().is_some());
    }

    #[test]
    fn second_install_is_refused() {
        let _ = init("warn");
        let err = init("warn").unwrap_err();
        assert!(matches!(err, TelemetryError::AlreadyInstalled));
        assert!(err.source().is_none());
    }
}
