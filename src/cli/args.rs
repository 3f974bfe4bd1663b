//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Instagram image downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "instagram-downloader",
    version,
    about = "Download images from a public Instagram post",
    long_about = "A CLI tool to download the images of a public Instagram post.\n\n\
                  Extracts image URLs from the post's og:image metadata and saves each\n\
                  image into the download directory (instagram_downloads by default)."
)]
pub struct Args {
    /// URL of the public Instagram post
    /// (e.g., https://www.instagram.com/p/Cxyz123abc/).
    pub url: String,

    /// Directory to save images into.
    #[arg(short = 'd', long = "directory")]
    pub download_directory: Option<PathBuf>,

    /// Browser user agent string.
    #[arg(short = 'a', long = "user-agent", env = "INSTAGRAM_DL_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Request timeout in seconds.
    #[arg(short = 't', long)]
    pub timeout: Option<u64>,

    /// Extension used for synthetic or unrecognized filenames.
    #[arg(long = "default-extension")]
    pub default_extension: Option<String>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Hide download progress information.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(dir) = &self.download_directory {
            config.options.download_directory = Some(dir.clone());
        }

        if let Some(user_agent) = &self.user_agent {
            config.client.user_agent = user_agent.clone();
        }

        if let Some(timeout) = self.timeout {
            config.client.timeout_seconds = timeout;
        }

        if let Some(ext) = &self.default_extension {
            config.options.default_extension = ext.trim_start_matches('.').to_string();
        }

        if self.quiet {
            config.options.show_downloads = false;
        }
    }
}
