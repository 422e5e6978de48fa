mod app;
mod transcript;
mod tui;

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use chatline_sdk::{ChatWidget, Completion, ConversationView, HttpTransport, WidgetConfig};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::app::{AppController, ChatApp};
use crate::tui::{EventHandler, Tui};

#[derive(Parser, Debug)]
#[command(name = "chatline")]
#[command(author, version, about = "Chatline chat client", long_about = None)]
pub struct Cli {
    /// Chat endpoint URL (overrides CHATLINE_ENDPOINT)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send one message and print the exchange
    Send {
        /// Message text; several words are joined with spaces
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Interactive full-screen chat
    Tui {
        /// Write logs to this file (the terminal is in use)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },
}

fn env_filter(default: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default))
}

async fn run_send(config: WidgetConfig, text: &str) -> anyhow::Result<()> {
    let transport = HttpTransport::new(config.endpoint.clone());
    let mut widget = ChatWidget::new(transport, ConversationView::new(), config);

    match widget.submit(text).await {
        None => info!("nothing to send"),
        Some(Completion::FellBack(err)) => info!(error = %err, "delivery failed"),
        Some(Completion::Replied | Completion::Stale) => {}
    }

    for message in widget.view().messages() {
        println!("{}", transcript::format_message(message));
    }
    Ok(())
}

async fn event_loop<A: AppController>(
    terminal: &mut Tui,
    events: &mut EventHandler,
    app: &mut A,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;
        let Some(action) = events.next_async().await else {
            return Ok(());
        };
        app.update(action);
        if app.should_quit() {
            return Ok(());
        }
    }
}

async fn run_tui(config: WidgetConfig) -> anyhow::Result<()> {
    let transport = HttpTransport::new(config.endpoint.clone());
    let widget = ChatWidget::new(transport, ConversationView::new(), config);

    let mut events = EventHandler::new();
    let mut app = ChatApp::new(widget, events.get_sender());

    let mut terminal = tui::init().context("failed to initialise terminal")?;
    let result = event_loop(&mut terminal, &mut events, &mut app).await;
    tui::restore().context("failed to restore terminal")?;

    result
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = WidgetConfig::from_env();
    if let Some(endpoint) = cli.endpoint {
        config = config.with_endpoint(endpoint);
    }

    match cli.command {
        Commands::Send { text } => {
            // Logs go to stderr, stdout carries the transcript.
            tracing_subscriber::fmt()
                .with_env_filter(env_filter("warn"))
                .with_writer(std::io::stderr)
                .init();

            run_send(config, &text.join(" ")).await
        }
        Commands::Tui { log_file } => {
            if let Some(path) = log_file {
                let file = File::create(&path)
                    .with_context(|| format!("cannot create log file {}", path.display()))?;
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter("info"))
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .init();
            }

            info!(endpoint = %config.endpoint, "starting chat");
            run_tui(config).await
        }
    }
}
