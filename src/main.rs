//! Terminal sliding-puzzle runner (default binary).
//!
//! Single-threaded event loop: poll crossterm input with a short timeout,
//! apply actions to the session, tick the win-transition and toast timers,
//! redraw. The session's drained events feed the toast notifier, the
//! terminal bell, and the high-score store.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use log::{error, info};

use tui_fifteen::core::{GameState, SimpleRng};
use tui_fifteen::input::{map_key, should_quit};
use tui_fifteen::store::HighScoreStore;
use tui_fifteen::term::{FrameBuffer, GameView, TerminalRenderer, Toasts, Viewport};
use tui_fifteen::types::{GameAction, GameEvent, TICK_MS};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default()).init();

    let mut term = TerminalRenderer::new();
    if let Err(err) = term.enter() {
        error!("terminal setup failed: {err:#}");
        eprintln!("unable to start the game: {err:#}");
        return Err(err);
    }

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(ref err) = result {
        error!("game loop failed: {err:#}");
        eprintln!("the game stopped unexpectedly: {err:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let store = HighScoreStore::new();
    let high_score = store.load();
    info!("loaded high score {high_score} from {}", store.path().display());

    let mut game = GameState::new(SimpleRng::from_entropy().next_u32(), high_score);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(1, 1);
    let mut toasts = Toasts::new();
    toasts.success("Play", "New game started!");

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game, &toasts, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = map_key(key) {
                        game.apply_action(action);
                    }
                }
                Event::Mouse(mouse) => {
                    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                        let viewport = Viewport::new(w, h);
                        if let Some(pos) =
                            view.hit_test(game.board().size(), viewport, mouse.column, mouse.row)
                        {
                            game.apply_action(GameAction::MoveAt(pos));
                        }
                    }
                }
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            let elapsed_ms = elapsed.as_millis().min(u32::MAX as u128) as u32;
            last_tick = Instant::now();
            game.tick(elapsed_ms);
            toasts.tick(elapsed_ms);
        }

        dispatch_events(&mut game, term, &mut toasts, &store);
    }
}

/// Forward the session's observable effects to the collaborators: toast
/// notifier, terminal bell, and the high-score store.
fn dispatch_events(
    game: &mut GameState,
    term: &mut TerminalRenderer,
    toasts: &mut Toasts,
    store: &HighScoreStore,
) {
    let sfx = game.sfx_enabled();
    for event in game.take_events() {
        match event {
            GameEvent::Moved => {
                if sfx {
                    term.bell();
                }
            }
            GameEvent::Shuffled => {
                toasts.info("Shuffle", "Puzzle shuffled!");
            }
            GameEvent::NewGame { size } => {
                toasts.info("Play", format!("New {size}x{size} board"));
            }
            GameEvent::Win { moves } => {
                if sfx {
                    term.bell();
                }
                toasts.success(
                    "Congratulations",
                    format!("You solved the puzzle in {moves} moves!"),
                );
            }
            GameEvent::LevelUp { level } => {
                toasts.success("Level Up", format!("You are now on level {level}"));
            }
            GameEvent::SizeIncreased { size } => {
                toasts.success("Level Up", format!("Difficulty increased to {size}x{size}!"));
            }
            GameEvent::NewBest { moves } => {
                toasts.success("High Score", format!("New best: {moves} moves"));
                if let Err(err) = store.save(moves) {
                    error!("failed to persist high score: {err:#}");
                    toasts.error("High Score", "Could not save your score");
                }
            }
            GameEvent::MusicToggled(enabled) => {
                toasts.info(
                    "Music",
                    if enabled {
                        "Background music enabled"
                    } else {
                        "Background music disabled"
                    },
                );
            }
            GameEvent::SfxToggled(enabled) => {
                toasts.info(
                    "SFX",
                    if enabled {
                        "Sound effects enabled"
                    } else {
                        "Sound effects disabled"
                    },
                );
            }
            GameEvent::ShuffleFailed(message) => {
                toasts.error("Oops", message);
            }
        }
    }
}
