use clap::Parser;
use profile_browser::core::config::{load_config, resolve};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "profile-browser", about = "Browse user profiles, posts and todos")]
struct Args {
    /// Content service base URL (overrides config and PROFILES_BASE_URL)
    #[arg(short, long)]
    base_url: Option<String>,

    /// User to show first (1-30)
    #[arg(short, long)]
    start_user: Option<u32>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to profile-browser.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("profile-browser.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = load_config().unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        Default::default()
    });
    let config = resolve(&file_config, args.base_url.as_deref(), args.start_user);

    log::info!(
        "Profile browser starting up against {} at user {}",
        config.base_url,
        config.start_user
    );

    profile_browser::tui::run(config)
}
