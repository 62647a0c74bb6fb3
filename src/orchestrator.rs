//! Event-driven dispatch loop between a display surface and the engine.
//!
//! The display surface sends [`Command`]s in and receives [`GameEvent`]s
//! out. The only concurrency is the computer's thinking delay, which runs
//! as a separate task that never touches the engine: when the delay
//! elapses it sends a [`Command::ComputerMove`] tagged with the generation
//! it was scheduled for, and the loop discards it if the game was reset in
//! the meantime.

use crate::config::GameConfig;
use crate::games::tictactoe::{Game, GameEvent, GameMode, MoveOutcome, MoveSource};
use anyhow::Result;
use std::ops::ControlFlow;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument};

/// Requests sent to the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A human picked the cell at this index.
    Select(usize),
    /// Start over in the given mode.
    Restart(GameMode),
    /// The computer's thinking delay elapsed.
    ComputerMove {
        /// Generation the move was scheduled in.
        generation: u64,
    },
    /// Stop the loop.
    Quit,
}

/// Owns the engine and feeds it moves from humans and the computer.
pub struct Orchestrator<S> {
    game: Game,
    source: S,
    think_delay: Duration,
    commands: mpsc::UnboundedSender<Command>,
    pending: Option<JoinHandle<()>>,
}

impl<S: MoveSource> Orchestrator<S> {
    /// Creates an orchestrator and starts the first game.
    ///
    /// Engine events are forwarded to `events`. `commands` must feed the
    /// receiver later handed to [`Orchestrator::run`]; thinking timers post
    /// their moves through it.
    pub fn new(
        config: &GameConfig,
        source: S,
        events: mpsc::UnboundedSender<GameEvent>,
        commands: mpsc::UnboundedSender<Command>,
    ) -> Self {
        let mut game = Game::new(*config.mode());
        game.subscribe(move |event: &GameEvent| {
            // The display may already be gone during shutdown.
            let _ = events.send(event.clone());
        });
        game.reset(*config.mode());

        Self {
            game,
            source,
            think_delay: *config.think_delay(),
            commands,
            pending: None,
        }
    }

    /// Returns the engine.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// True from scheduling a computer move until it is handled or cancelled,
    /// including while its command is still queued after the timer fired.
    pub fn has_pending_move(&self) -> bool {
        self.pending.is_some()
    }

    /// Processes commands until [`Command::Quit`] or the channel closes.
    ///
    /// # Errors
    ///
    /// Fails if the computer's move source breaks its contract: asked to
    /// move on a full board, or picking a square the engine refuses.
    #[instrument(skip_all)]
    pub async fn run(mut self, mut receiver: mpsc::UnboundedReceiver<Command>) -> Result<()> {
        info!("Starting game orchestration");

        while let Some(command) = receiver.recv().await {
            if self.handle(command)?.is_break() {
                break;
            }
        }

        self.cancel_pending();
        info!("Game orchestration stopped");
        Ok(())
    }

    /// Applies one command.
    ///
    /// # Errors
    ///
    /// See [`Orchestrator::run`].
    #[instrument(skip(self), fields(generation = self.game.generation()))]
    pub fn handle(&mut self, command: Command) -> Result<ControlFlow<()>> {
        match command {
            Command::Select(index) => self.select(index),
            Command::Restart(mode) => {
                self.cancel_pending();
                self.game.reset(mode);
            }
            Command::ComputerMove { generation } => self.computer_move(generation)?,
            Command::Quit => return Ok(ControlFlow::Break(())),
        }
        Ok(ControlFlow::Continue(()))
    }

    fn select(&mut self, index: usize) {
        if self.game.is_computer_turn() {
            debug!(index, "Ignoring selection during the computer's turn");
            return;
        }
        match self.game.apply_move(index) {
            Ok(outcome) => self.after_move(outcome),
            Err(e) => debug!(index, error = %e, "Move rejected"),
        }
    }

    fn computer_move(&mut self, generation: u64) -> Result<()> {
        if generation != self.game.generation() || !self.game.is_computer_turn() {
            debug!(
                scheduled = generation,
                current = self.game.generation(),
                "Discarding stale computer move"
            );
            return Ok(());
        }
        self.pending = None;

        let position = self.source.choose_move(self.game.board()).map_err(|e| {
            error!(error = %e, board = %self.game.board().display(), "Computer asked to move on a full board");
            anyhow::Error::new(e)
        })?;

        let outcome = self.game.place(position).map_err(|e| {
            error!(%position, error = %e, "Computer chose an illegal move");
            anyhow::Error::new(e)
        })?;
        self.after_move(outcome);
        Ok(())
    }

    fn after_move(&mut self, outcome: MoveOutcome) {
        if let MoveOutcome::Continue {
            computer_to_move: true,
            ..
        } = outcome
        {
            self.schedule_computer_move();
        }
    }

    fn schedule_computer_move(&mut self) {
        self.cancel_pending();

        let generation = self.game.generation();
        let delay = self.think_delay;
        let commands = self.commands.clone();
        debug!(generation, ?delay, "Scheduling computer move");

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = commands.send(Command::ComputerMove { generation });
        }));
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            debug!("Cancelling pending computer move");
            handle.abort();
        }
    }
}
