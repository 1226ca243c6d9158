//! oblako - terminal client for the chat/weather backend.
//!
//! Three views over one store: conversation, weather lookup, backend status.
//! Keyboard events become actions, the reducer returns effects, effects run
//! as tokio tasks that report back through the action channel.

use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use oblako_core::{Action, ApiClient, AppState, ClientConfig, Store, ViewId};
use oblako_tui::{AppUi, Runtime};

/// Terminal client for the oblako backend
#[derive(Parser, Debug)]
#[command(name = "oblako")]
#[command(about = "Chat, weather lookup and backend status in the terminal")]
struct Args {
    /// Base URL of the backend API
    #[arg(long, default_value = ClientConfig::DEFAULT_BASE_URL)]
    base_url: String,

    /// User identifier sent with every conversation message
    #[arg(long, default_value = ClientConfig::DEFAULT_USER_ID)]
    user_id: String,

    /// View to open on start (chat, weather, status)
    #[arg(long, default_value = "chat")]
    view: String,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    // stderr keeps the log out of the alternate screen; redirect it to a
    // file to watch dispatches live.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "oblako=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &args).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    args: &Args,
) -> io::Result<()> {
    let config = ClientConfig::new(&args.base_url, &args.user_id);
    let base_url = config.base_url.clone();
    let client = ApiClient::new(config);

    let mut runtime = Runtime::new(Store::new(AppState::default()), client);
    let mut ui = AppUi::new(base_url);

    // Routing the initial view through the reducer means starting on the
    // status view triggers its first health probe like any other entry.
    runtime.enqueue(Action::NavSelect(ViewId::from_name_or_default(&args.view)));

    runtime.run(terminal, &mut ui).await
}
