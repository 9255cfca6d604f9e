use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use media_relay::{
    ApiServer, AppState, Config, Engine, ExtractionRequest, Mode, Quality, TelegramChannel, YtDlp,
};

/// Media Relay - resolve media links and send them back through Telegram
#[derive(Parser)]
#[command(name = "media-relay", version, about)]
struct Cli {
    /// Port to listen on (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the webhook server (default)
    Serve,
    /// Register the webhook URL with Telegram
    SetWebhook {
        /// Public HTTPS URL Telegram should post updates to
        #[arg(env = "WEBHOOK_URL")]
        url: String,
    },
    /// Remove the webhook registration
    DeleteWebhook,
    /// Resolve a link locally and print the result as JSON
    Extract {
        /// Media page URL
        url: String,
        /// Audio track only
        #[arg(long)]
        audio: bool,
        /// Video quality ceiling: best, 720 or 360
        #[arg(short, long, default_value = "best")]
        quality: Quality,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "info,media_relay=info",
        1 => "info,media_relay=debug",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(port) = cli.port {
        config.port = port;
    }
    tracing::debug!(?config, "loaded configuration");

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(&config).await,
        Command::SetWebhook { url } => {
            let channel = telegram(&config)?;
            let me = channel.get_me().await?;
            channel.set_webhook(&url).await?;
            println!("webhook for @{} set to {url}", me.username.unwrap_or(me.first_name));
            Ok(())
        }
        Command::DeleteWebhook => {
            telegram(&config)?.delete_webhook().await?;
            println!("webhook deleted");
            Ok(())
        }
        Command::Extract {
            url,
            audio,
            quality,
        } => {
            let mode = if audio { Mode::Audio } else { Mode::Video(quality) };
            let engine = Engine::from_config(&config);
            let result = engine.resolve(&ExtractionRequest::new(url, mode)).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
    }
}

async fn serve(config: &Config) -> anyhow::Result<()> {
    tracing::info!(port = config.port, "starting media relay");

    let ytdlp = YtDlp::new(&config.extractor);
    match ytdlp.locate() {
        Some(path) => tracing::debug!(path = %path.display(), "found yt-dlp"),
        None => tracing::warn!(bin = %config.extractor.ytdlp_bin.display(), "yt-dlp not found on PATH"),
    }
    match ytdlp.version().await {
        Ok(version) => tracing::info!(%version, "yt-dlp available"),
        Err(e) => tracing::warn!(error = %e, "yt-dlp not usable, every extraction will fail"),
    }

    if let Some(url) = &config.telegram.webhook_url
        && config.has_bot_token()
        && let Err(e) = telegram(config)?.set_webhook(url).await
    {
        tracing::warn!(error = %e, "failed to register webhook at startup");
    }

    let state = AppState::from_config(config)?;
    ApiServer::new(state, config.port).run().await?;

    tracing::info!("media relay stopped");
    Ok(())
}

/// Telegram client for one-off CLI calls
fn telegram(config: &Config) -> anyhow::Result<TelegramChannel> {
    let token = config
        .bot_token()
        .context("BOT_TOKEN (or TELEGRAM_BOT_TOKEN) is not set")?;
    Ok(TelegramChannel::new(token, &config.telegram)?)
}
