//! Instagram Image Downloader - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use instagram_downloader::{
    cli::Args,
    client::HttpClient,
    config::{validate_config, Config},
    download::{download_image, RunStats},
    error::{exit_codes, Error, Result},
    extract::{extract_image_urls, post_shortcode},
    fs::{ensure_dir, filename_for_url},
    output::{
        create_spinner, print_banner, print_config_summary, print_error, print_info,
        print_run_stats, print_success, print_warning,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(stats) if stats.all_succeeded() => ExitCode::from(exit_codes::SUCCESS as u8),
        Ok(_) => ExitCode::from(exit_codes::SOME_IMAGES_FAILED as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::InvalidUrl(_) => ExitCode::from(exit_codes::INVALID_URL_ERROR as u8),
                Error::Network(_) => ExitCode::from(exit_codes::NETWORK_ERROR as u8),
                Error::Parsing(_) => ExitCode::from(exit_codes::PARSING_ERROR as u8),
                Error::Download(_) | Error::Save(_) => {
                    ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8)
                }
                Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<RunStats> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Load configuration; the config file is optional
    let mut config = if args.config.exists() {
        Config::load(&args.config)?
    } else {
        if args.config != std::path::PathBuf::from("config.toml") {
            print_warning(&format!(
                "Configuration file not found: {}",
                args.config.display()
            ));
        }
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    let download_dir = config.download_directory();
    print_config_summary(&args.url, &download_dir.display().to_string());

    if let Some(shortcode) = post_shortcode(&args.url) {
        tracing::debug!("Post shortcode: {}", shortcode);
    }

    let client = HttpClient::new(&config.client)?;

    // Stage one: extract image URLs. A failure here is terminal for the
    // whole run; there is nothing to download without a URL list.
    print_info(&format!("Extracting image URLs from: {}", args.url));
    let image_urls = extract_image_urls(&client, &args.url).await?;
    print_info(&format!(
        "Found {} image(s). Starting download...",
        image_urls.len()
    ));

    ensure_dir(&download_dir)?;

    // Stage two: download each image independently. One failing download
    // must not prevent attempts on the remaining ones.
    let mut stats = RunStats::default();
    for (i, image_url) in image_urls.iter().enumerate() {
        let filename = filename_for_url(image_url, i, &config.options);
        let save_path = download_dir.join(&filename);

        let spinner = config.options.show_downloads.then(|| {
            create_spinner(&format!(
                "Downloading image {} of {}: {}",
                i + 1,
                image_urls.len(),
                image_url
            ))
        });

        let result = download_image(&client, image_url, &save_path).await;

        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        match result {
            Ok(()) => {
                stats.record_success();
                if config.options.show_downloads {
                    print_success(&format!("Saved {}", save_path.display()));
                }
            }
            Err(e) => {
                stats.record_failure();
                print_error(&format!("{}", e));
            }
        }
    }

    print_run_stats(&stats, &download_dir.display().to_string());

    Ok(stats)
}
