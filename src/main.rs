//! my365 Archiver - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use my365_archiver::{
    api::DiaryClient,
    cli::Args,
    config::{validate_config, Config, IoConfig, SettingsConfig, UserConfig},
    error::{exit_codes, Error, Result},
    output::{
        print_archive_stats, print_banner, print_config_summary, print_error, print_info,
        print_warning,
    },
    run::run_archive,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::TomlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::AuthenticationStatus(_) | Error::AuthenticationCookie => {
                    ExitCode::from(exit_codes::AUTH_ERROR as u8)
                }
                Error::PageFetch { .. } | Error::Extraction { .. } => {
                    ExitCode::from(exit_codes::SCRAPE_ERROR as u8)
                }
                Error::DownloadStatus { .. }
                | Error::DownloadContentType { .. }
                | Error::Download(_) => ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug {
        "debug"
    } else if args.quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Load configuration
    let mut config = if args.config.exists() {
        Config::load(&args.config)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            args.config.display()
        ));
        print_info("Using CLI arguments only");
        Config {
            settings: SettingsConfig::default(),
            user: UserConfig::default(),
            io: IoConfig::default(),
        }
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    // Print configuration summary
    let range = format!(
        "current month back to {:04}-{:02}",
        config.settings.first_year, config.settings.first_month
    );
    print_config_summary(
        &config.user.account,
        &range,
        &config.io.output_directory.display().to_string(),
        &config.io.imagelist.display().to_string(),
    );

    // Authenticate
    print_info("Logging in...");
    let client =
        DiaryClient::login(config.host(), &config.user.account, &config.user.password).await?;
    print_info("Session established.");

    // Crawl, persist the manifest, download
    let stats = run_archive(&client, &config, args.list_only).await?;
    print_archive_stats(&stats);

    Ok(())
}
