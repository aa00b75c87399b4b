//! clix - post to Twitter/X from the terminal

use clap::Parser;
use libclix::config::{expand_path, ConfigStore};
use libclix::logging::{LogFormat, LoggingConfig};
use libclix::platforms::twitter::TwitterClient;
use libclix::{ClixError, Prompt, Session, SessionSummary};

#[derive(Parser, Debug)]
#[command(name = "clix")]
#[command(about = "Post to Twitter/X from the terminal, one line at a time", long_about = None)]
struct Cli {
    /// Credentials file (defaults to ~/.config/clix.json)
    #[arg(long, env = "CLIX_CONFIG")]
    config: Option<String>,

    /// Log output format (text, json or pretty)
    #[arg(long, env = "CLIX_LOG_FORMAT", default_value = "text")]
    log_format: LogFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Root URL of the Twitter API
    #[arg(long, env = "CLIX_API_BASE_URL", hide = true)]
    api_base_url: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env(cli.verbose);
    logging.format = cli.log_format;
    logging.init();

    match run(cli).await {
        Ok(summary) => {
            tracing::info!(
                "Session finished: {} attempted, {} posted, {} failed",
                summary.attempted,
                summary.posted,
                summary.failed
            );
        }
        Err(e) => {
            // Diagnostics share stdout with the interactive protocol
            println!("{}", e);
            let code = e
                .downcast_ref::<ClixError>()
                .map(ClixError::exit_code)
                .unwrap_or(1);
            std::process::exit(code);
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<SessionSummary> {
    let store = match cli.config.as_deref() {
        Some(path) => ConfigStore::new(expand_path(path)),
        None => ConfigStore::open_default().map_err(fatal("Error loading configuration"))?,
    };
    tracing::debug!("Using configuration at {:?}", store.path());

    let mut prompt = Prompt::stdio();
    let credentials = store
        .load_or_create(&mut prompt)
        .map_err(fatal("Error loading configuration"))?;

    let mut client = TwitterClient::new(&credentials).map_err(fatal("Error creating client"))?;
    if let Some(base_url) = cli.api_base_url {
        client = client.with_base_url(base_url);
    }
    drop(credentials);

    let mut session = Session::new(&client, prompt);
    let summary = session
        .run()
        .await
        .map_err(fatal("Error reading input"))?;

    Ok(summary)
}

/// Attach the user-facing message while keeping the typed error for the exit code
fn fatal(label: &'static str) -> impl FnOnce(ClixError) -> anyhow::Error {
    move |e| {
        let message = format!("{}: {}", label, e);
        anyhow::Error::new(e).context(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["clix"]).unwrap();
        assert!(!cli.verbose);
        assert_eq!(cli.log_format, LogFormat::Text);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "clix",
            "--config",
            "/tmp/creds.json",
            "--log-format",
            "json",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.config.as_deref(), Some("/tmp/creds.json"));
        assert_eq!(cli.log_format, LogFormat::Json);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_rejects_unknown_log_format() {
        assert!(Cli::try_parse_from(["clix", "--log-format", "xml"]).is_err());
    }
}
