//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for fetching RoboHash avatars.
#[derive(Parser)]
#[command(name = "robohash")]
#[command(about = "Build RoboHash avatar URLs and download avatars")]
#[command(version)]
pub struct Cli {
    /// RoboHash endpoint, for self-hosted instances
    #[arg(long = "base-url", env = "ROBOHASH_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long = "timeout-secs", env = "ROBOHASH_TIMEOUT_SECS", global = true)]
    pub timeout_secs: Option<u64>,

    /// Retries for transient download failures
    #[arg(long, env = "ROBOHASH_RETRIES", global = true)]
    pub retries: Option<u8>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use robohash_client::{ImageExtension, ImageSet};

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "robohash",
            "--verbose",
            "--base-url",
            "http://localhost:8080/",
            "--retries",
            "0",
            "url",
            "key",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:8080/"));
        assert_eq!(cli.retries, Some(0));
        assert!(matches!(cli.command, Some(Commands::Url { .. })));
    }

    #[test]
    fn test_request_flags() {
        let cli = Cli::parse_from([
            "robohash", "fetch", "robot", "--set", "monsters", "--set", "5", "-e", "jpg",
            "--size", "200x100", "-o", "out.jpg",
        ]);
        let Some(Commands::Fetch { request, output }) = cli.command else {
            panic!("expected fetch command");
        };
        assert_eq!(request.key, "robot");
        assert_eq!(request.sets, vec![ImageSet::Monsters, ImageSet::Humans]);
        assert_eq!(request.extension, Some(ImageExtension::Jpg));
        assert_eq!(request.size.map(|s| (s.width, s.height)), Some((200, 100)));
        assert_eq!(output.to_str(), Some("out.jpg"));
    }

    #[test]
    fn test_unknown_set_is_rejected() {
        let result = Cli::try_parse_from(["robohash", "url", "robot", "--set", "dragons"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_size_conflicts_with_width() {
        let result =
            Cli::try_parse_from(["robohash", "url", "robot", "--size", "5x5", "--width", "7"]);
        assert!(result.is_err());
    }
}
