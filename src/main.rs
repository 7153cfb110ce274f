//! Terminal game runner (default binary).
//!
//! Single-threaded loop over two event sources: a gravity tick and keyboard
//! input. Both are serialized here, so the engine is never touched from two
//! threads.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use gridfall::core::{Game, Snapshot};
use gridfall::input::{handle_key_event, should_quit};
use gridfall::term::{GameView, TerminalRenderer};
use gridfall::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);

    let mut game = Game::new(seed);
    let view = GameView;
    let mut snapshot = Snapshot::default();

    let tick_duration = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        game.snapshot_into(&mut snapshot);
        term.draw(&view.render(&snapshot))?;

        // Input with timeout until the next gravity tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.move_piece(0, 1);
        }
    }
}
