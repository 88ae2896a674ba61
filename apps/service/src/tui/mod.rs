mod events;
mod state;
mod types;
mod ui;

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use crossterm::cursor::{Hide, Show};
use crossterm::event;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use prober::{Snapshot, StoreReader};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::debug;

use state::AppState;

/// Redraw cadence, independent of the poll interval
const FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// Run the full-screen status view until the user quits
pub async fn run_tui(
    targets: Vec<String>,
    reader: StoreReader,
    mut snapshots: broadcast::Receiver<Snapshot>,
) -> Result<()> {
    let mut state = AppState::new(targets);

    // Init terminal in alternate screen
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let backend = CrosstermBackend::new(&mut stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let outcome = event_loop(&mut terminal, &mut state, &reader, &mut snapshots).await;

    // Cleanup terminal
    drop(terminal);
    let exec_result = execute!(stdout, Show, LeaveAlternateScreen);
    let raw_mode_result = disable_raw_mode();
    exec_result.and(raw_mode_result)?;
    stdout.flush()?;
    outcome
}

async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    reader: &StoreReader,
    snapshots: &mut broadcast::Receiver<Snapshot>,
) -> Result<()> {
    loop {
        // Drain completed cycles (non-blocking)
        loop {
            match snapshots.try_recv() {
                Ok(snapshot) => {
                    debug!(cycle = snapshot.cycle, "TUI: received cycle snapshot");
                    state.apply_cycle(snapshot);
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    debug!(skipped, "TUI: fell behind on cycle snapshots");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }

        // Pick up results merged since, including a cycle still in flight
        state.refresh(reader.snapshot().await);

        terminal.draw(|f| ui::render(f, state))?;

        if event::poll(FRAME_INTERVAL)? && events::handle_event(event::read()?) {
            return Ok(());
        }
    }
}
