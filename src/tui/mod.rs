//! Terminal display surface.
//!
//! Renders engine events and turns key presses into orchestrator commands.

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use std::time::Duration;
use tictactoe::{Command, GameConfig, GameEvent, Orchestrator, RandomMoveSource};
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

use app::App;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the terminal game until the player quits.
pub async fn run_tui(config: GameConfig, log_file: &Path) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(mode = %config.mode(), think_delay = ?config.think_delay(), "Starting tictactoe");

    // Create channels for communication
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let source = match config.seed() {
        Some(seed) => RandomMoveSource::seeded(*seed),
        None => RandomMoveSource::from_entropy(),
    };
    let orchestrator = Orchestrator::new(&config, source, event_tx, command_tx.clone());
    let orchestrator_handle = tokio::spawn(orchestrator.run(command_rx));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let app = App::new(*config.mode());
    let res = run_app(&mut terminal, app, &command_tx, &mut event_rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Stops the loop if the UI bailed out before sending Quit.
    let _ = command_tx.send(Command::Quit);
    match orchestrator_handle.await {
        Ok(Err(e)) => error!(error = %e, "Orchestrator error"),
        Err(e) => error!(error = %e, "Orchestrator task failed"),
        Ok(Ok(())) => {}
    }

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, drain engine events, read one key; repeat until quit.
#[instrument(skip_all)]
async fn run_app(
    terminal: &mut Term,
    mut app: App,
    command_tx: &mpsc::UnboundedSender<Command>,
    event_rx: &mut mpsc::UnboundedReceiver<GameEvent>,
) -> Result<()> {
    loop {
        while let Ok(event) = event_rx.try_recv() {
            app.handle_event(event);
        }

        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(command) = app.on_key(key.code)
        {
            if command_tx.send(command).is_err() {
                anyhow::bail!("Orchestrator stopped unexpectedly");
            }
            if command == Command::Quit {
                info!("User quit");
                return Ok(());
            }
        }

        // Yield so the orchestrator can run on a busy runtime.
        tokio::task::yield_now().await;
    }
}
