//! URL command handler.

use anyhow::Result;
use robohash_client::{HttpBackend, RoboHashClient};

use crate::error::CliError;
use crate::request_args::RequestArgs;

/// Execute the url command.
///
/// Prints the avatar URL rendered against the client's base URL. Nothing
/// is downloaded.
pub fn execute<B: HttpBackend>(client: &RoboHashClient<B>, request: &RequestArgs) -> Result<()> {
    println!("{}", render(client, request)?);
    Ok(())
}

fn render<B: HttpBackend>(
    client: &RoboHashClient<B>,
    request: &RequestArgs,
) -> Result<String, CliError> {
    let builder = request.to_builder()?;
    let url = client.build_request_url(&builder)?;
    Ok(url.to_string())
}
