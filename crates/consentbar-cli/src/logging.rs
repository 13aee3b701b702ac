// SPDX-License-Identifier: Apache-2.0
//! Subscriber setup for the binary. Libraries only emit events.

use tracing_subscriber::EnvFilter;

use crate::error::{CliError, Result};

/// Directive used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber, writing to stderr.
///
/// Fails if a global subscriber is already installed.
pub fn init(json: bool) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|err| CliError::Logging(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_reported() {
        let _ = init(false);
        let err = init(true).unwrap_err();
        assert!(matches!(err, CliError::Logging(_)));
        assert_eq!(err.exit_code(), 1);
    }
}
