use cosmic_guide::{
    advisor::Advisor,
    config::AppConfig,
    notify::ChannelNotifier,
    session::WELCOME_MESSAGE,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; quiet by default so it doesn't interleave with the chat
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    dotenv::dotenv().ok();
    let config = AppConfig::from_env()?;

    let (notifier, mut notices) = ChannelNotifier::channel();
    let advisor = Advisor::new(&config.gemini)?.with_notifier(Arc::new(notifier));

    info!(
        remote = config.api_key.is_some(),
        profile = config.profile.is_some(),
        "Cosmic chat starting"
    );

    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(format!("✨ {}\n\n", WELCOME_MESSAGE).as_bytes())
        .await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        stdout.write_all(b"you> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if question == "/quit" {
            break;
        }

        let answer = advisor
            .get_response(question, config.api_key.as_deref(), config.profile.as_ref())
            .await;

        // Notices show inline, like the toast in a browser chat
        while let Ok(notice) = notices.try_recv() {
            eprintln!("⚠️  {}: {}", notice.title, notice.description);
        }

        stdout
            .write_all(format!("🌙 {}\n\n", answer).as_bytes())
            .await?;
    }

    Ok(())
}
