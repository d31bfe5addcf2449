//! Client configuration from global flags and the environment.

use std::time::Duration;

use robohash_client::{DefaultRoboHashClient, RoboHashClientConfig};

use crate::error::CliError;
use crate::parser::Cli;

/// Resolve the client configuration from the parsed command line.
///
/// Flags already carry their environment fallbacks (`ROBOHASH_*`), so
/// anything left unset keeps the library default.
pub fn client_config(cli: &Cli) -> RoboHashClientConfig {
    let mut config = RoboHashClientConfig::new()
        .with_user_agent(concat!("robohash-cli/", env!("CARGO_PKG_VERSION")));
    if let Some(ref base_url) = cli.base_url {
        config = config.with_base_url(base_url.clone());
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    if let Some(retries) = cli.retries {
        config = config.with_max_retries(retries);
    }
    config
}

/// Build the production client for this invocation.
pub fn bootstrap(cli: &Cli) -> Result<DefaultRoboHashClient, CliError> {
    let config = client_config(cli);
    tracing::debug!(base_url = config.base_url(), "Creating RoboHash client");
    DefaultRoboHashClient::new(&config).map_err(CliError::Config)
}
