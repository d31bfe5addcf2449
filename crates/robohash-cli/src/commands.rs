//! Available subcommands.

use std::path::PathBuf;

use clap::Subcommand;

use crate::request_args::RequestArgs;

/// Operations the CLI can perform on an avatar request.
#[derive(Subcommand)]
pub enum Commands {
    /// Print the RoboHash URL for an avatar
    Url {
        #[command(flatten)]
        request: RequestArgs,
    },

    /// Print the validated request as JSON
    Describe {
        #[command(flatten)]
        request: RequestArgs,
    },

    /// Download an avatar and save it to a file
    Fetch {
        #[command(flatten)]
        request: RequestArgs,

        /// Destination file; must not exist yet
        #[arg(short, long)]
        output: PathBuf,
    },
}
