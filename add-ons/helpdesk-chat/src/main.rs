//! Terminal chat for the college helpdesk: one line in, one reply out, transcript kept for the
//! session. Type `/history` to reprint the conversation, `exit` or `quit` (or EOF) to leave.

use helpdesk_core::render::text::GREETING;
use helpdesk_core::{ChatSession, CoreConfig, DatasetStore, Helpdesk};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// What to do with one input line.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    History,
    Skip,
    Ask(&'a str),
}

fn parse_line(line: &str) -> Command<'_> {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        "" => Command::Skip,
        "exit" | "quit" | "/exit" | "/quit" => Command::Quit,
        "/history" => Command::History,
        _ => Command::Ask(trimmed),
    }
}

fn format_history(session: &ChatSession) -> String {
    session
        .transcript()
        .iter()
        .map(|m| format!("[{}] {}", m.role.as_str(), m.content.trim_end()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[helpdesk-chat] .env not loaded: {} (using system environment)", e);
    }

    // Logs go to stderr so they never interleave with the transcript on stdout.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = CoreConfig::load()?;
    let store = Arc::new(DatasetStore::load_or_empty(&config.data_path));

    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(format!("{}\n{}\n\n", config.app_name, GREETING).as_bytes())
        .await?;
    if let Some(err) = store.load_error() {
        stdout
            .write_all(format!("Error: {}. Please check the dataset file.\n\n", err).as_bytes())
            .await?;
    }

    let mut session = ChatSession::new(Helpdesk::new(store));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        match parse_line(&line) {
            Command::Quit => break,
            Command::Skip => continue,
            Command::History => {
                stdout
                    .write_all(format!("{}\n\n", format_history(&session)).as_bytes())
                    .await?;
            }
            Command::Ask(query) => {
                let reply = session.ask(query);
                stdout
                    .write_all(format!("{}\n\n", reply.trim_end()).as_bytes())
                    .await?;
            }
        }
    }

    tracing::info!(turns = session.transcript().len() / 2, "Chat session ended");
    stdout.flush().await?;
    Ok(())
}
