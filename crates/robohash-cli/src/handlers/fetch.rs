//! Fetch command handler.
//!
//! Downloads an avatar and writes it to the requested file.

use std::path::Path;

use anyhow::Result;
use robohash_client::{HttpBackend, RoboHashClient, RoboHashImage};

use crate::error::CliError;
use crate::request_args::RequestArgs;

/// Execute the fetch command.
///
/// # Errors
///
/// This function will return an error if:
/// - The request flags are invalid
/// - `output` already exists, is a directory, or has no usable file name
/// - RoboHash cannot be reached or does not return an image
/// - The file cannot be written
pub async fn execute<B: HttpBackend>(
    client: &RoboHashClient<B>,
    request: &RequestArgs,
    output: &Path,
) -> Result<()> {
    let image = save(client, request, output).await?;
    println!("Saved {} to {}", summary(&image), output.display());
    Ok(())
}

async fn save<B: HttpBackend>(
    client: &RoboHashClient<B>,
    request: &RequestArgs,
    output: &Path,
) -> Result<RoboHashImage, CliError> {
    let builder = request.to_builder()?;
    tracing::debug!(request = %builder, output = %output.display(), "Fetching avatar");
    Ok(client.save_to_file(&builder, output).await?)
}

fn summary(image: &RoboHashImage) -> String {
    let format = image
        .format()
        .map(|f| f.to_string())
        .or_else(|| image.content_type().map(str::to_string))
        .unwrap_or_else(|| "image".to_string());
    match image.dimensions() {
        Some((width, height)) => format!("{width}x{height} {format} ({} bytes)", image.len()),
        None => format!("{format} ({} bytes)", image.len()),
    }
}
