//! Describe command handler.
//!
//! Prints the fully-resolved request (defaults applied) as JSON, together
//! with the URL it renders to.

use anyhow::Result;
use robohash_client::{HttpBackend, RoboHashClient, RoboHashRequestBuilder};
use serde_json::json;

use crate::error::CliError;
use crate::request_args::RequestArgs;

/// Execute the describe command.
pub fn execute<B: HttpBackend>(client: &RoboHashClient<B>, request: &RequestArgs) -> Result<()> {
    let builder = request.to_builder().map_err(CliError::from)?;
    println!("{}", describe(client, &builder)?);
    Ok(())
}

fn describe<B: HttpBackend>(
    client: &RoboHashClient<B>,
    builder: &RoboHashRequestBuilder,
) -> Result<String, CliError> {
    let url = client.build_request_url(builder)?;
    let document = json!({
        "request": builder,
        "summary": builder.to_string(),
        "url": url.as_str(),
    });
    Ok(serde_json::to_string_pretty(&document)?)
}
