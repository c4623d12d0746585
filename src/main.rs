//! Terminal tic-tac-toe runner.
//!
//! Uses crossterm for input and a framebuffer-based renderer (no widget
//! toolkit). The loop is purely event-driven: nothing in the game advances
//! without a key press, so it blocks on the next event instead of ticking.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_tictactoe::core::GameState;
use tui_tictactoe::input::{handle_key_event, should_quit, Controls};
use tui_tictactoe::term::{GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new();
    let mut controls = Controls::new();
    let view = GameView::default();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let snap = game.render_snapshot();
        let fb = view.render(&snap, Some(controls.cursor()), Viewport::new(w, h));
        term.draw(fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    if let Some(command) =
                        controls.apply(action, snap.current_step, snap.history_len())
                    {
                        game.apply(command);
                    }
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}
