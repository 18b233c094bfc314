//! yadisk-downloader - CLI entry point.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use yadisk_downloader::{
    api::DiskApi,
    cli::Args,
    config::{validate_config, Config},
    download::{Downloader, FolderTarget, PipelineSettings},
    error::{exit_codes, Error, Result},
    output::{
        print_config_summary, print_error, print_info, print_run_summary, print_success,
        print_warning, ConsoleProgress,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::TomlParse(_)
                | Error::UrlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::Listing { .. } | Error::Api(_) | Error::Http(_) => {
                    ExitCode::from(exit_codes::API_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<i32> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            config_path.display()
        ));
        print_info("Using default configuration with CLI arguments");
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    validate_config(&config)?;

    let target = FolderTarget::from_config(&config)?;
    let destination = config.destination_folder();
    print_config_summary(
        &target.public_key,
        target.item_limit,
        &destination.display().to_string(),
    );

    let api = DiskApi::new(&config.network)?;
    let mut downloader = Downloader::new(api, PipelineSettings::from(&config.options));
    if config.options.show_progress {
        downloader = downloader.with_progress(Arc::new(ConsoleProgress::new()));
    }

    let result = downloader.run(&target, &destination).await?;

    print_run_summary(&result);
    if result.is_complete() {
        print_success(&format!("Downloaded {} file(s)", result.succeeded));
    } else {
        print_error(&format!(
            "{} of {} file(s) failed",
            result.failed.len(),
            result.total
        ));
    }

    Ok(result.exit_code())
}
