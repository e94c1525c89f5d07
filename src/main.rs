//! Terminal dots runner (default binary).
//!
//! This is the primary gameplay entrypoint. It uses crossterm for keyboard
//! and mouse input and a custom framebuffer-based renderer (no ratatui
//! widgets/layout). Drag with the mouse across same-colored neighboring dots
//! and release to clear them, or play the same gesture with the keyboard
//! cursor.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use tui_dots::core::{GameState, ReleaseOutcome};
use tui_dots::input::{handle_key_event, should_quit, Cursor};
use tui_dots::term::{BoardView, FrameBuffer, HudInfo, TerminalRenderer, Viewport};
use tui_dots::types::{BoardConfig, GameAction, SelectEvent};

/// How long to wait for input before redrawing anyway.
const POLL_MS: u64 = 50;

#[derive(Debug, Clone, Copy)]
struct Options {
    config: BoardConfig,
    seed: u32,
}

fn main() -> Result<()> {
    let options = parse_args(std::env::args().skip(1))?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, options);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, options: Options) -> Result<()> {
    let mut game = GameState::new(options.config, options.seed);
    let mut cursor = Cursor::new();
    let mut hud = HudInfo {
        seed: options.seed,
        last_clear: 0,
    };

    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let poll_timeout = Duration::from_millis(POLL_MS);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        view.render_into(&game, cursor.at(), &hud, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        if !event::poll(poll_timeout)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => match key.kind {
                // Terminal auto-repeat is welcome here: it lets a held
                // arrow key walk the cursor across the board.
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        apply_action(&mut game, &mut cursor, &mut hud, action);
                    }
                }
                KeyEventKind::Release => {}
            },
            Event::Mouse(mouse) => {
                handle_mouse(&view, &mut game, &mut cursor, &mut hud, viewport, mouse);
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}

fn apply_action(game: &mut GameState, cursor: &mut Cursor, hud: &mut HudInfo, action: GameAction) {
    let config = game.board().config();
    match action {
        GameAction::Move(dir) => {
            cursor.step(dir, config);
        }
        GameAction::Touch => {
            game.touch(cursor.at());
        }
        GameAction::Release => {
            let outcome = game.release();
            note_clear(hud, &outcome);
        }
        GameAction::Cancel => game.cancel(),
    }
}

fn handle_mouse(
    view: &BoardView,
    game: &mut GameState,
    cursor: &mut Cursor,
    hud: &mut HudInfo,
    viewport: Viewport,
    mouse: MouseEvent,
) {
    let config = game.board().config();
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
            // Positions outside the board frame are not part of a gesture.
            if let Some(at) = view.hit_test(config, viewport, mouse.column, mouse.row) {
                cursor.jump(at);
                game.handle(SelectEvent::Touch(at));
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(outcome) = game.handle(SelectEvent::Release) {
                note_clear(hud, &outcome);
            }
        }
        _ => {}
    }
}

fn note_clear(hud: &mut HudInfo, outcome: &ReleaseOutcome) {
    if let ReleaseOutcome::Cleared(diff) = outcome {
        hud.last_clear = diff.removed.len() as u32;
    }
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Options> {
    let mut args = args;
    let mut config = BoardConfig::default();
    let mut seed = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--width" => config.width = parse_dim(&arg, args.next())?,
            "--height" => config.height = parse_dim(&arg, args.next())?,
            "--kinds" => config.kinds = parse_dim(&arg, args.next())?,
            "--seed" => {
                let value = match args.next() {
                    Some(value) => value,
                    None => bail!("--seed needs a value"),
                };
                let parsed = value
                    .parse::<u32>()
                    .with_context(|| format!("invalid --seed value {:?}", value))?;
                seed = Some(parsed);
            }
            _ => bail!(
                "unknown argument {:?} (expected --width, --height, --kinds, --seed)",
                arg
            ),
        }
    }

    Ok(Options {
        config,
        seed: seed.unwrap_or_else(default_seed),
    })
}

fn parse_dim(flag: &str, value: Option<String>) -> Result<u8> {
    let value = match value {
        Some(value) => value,
        None => bail!("{} needs a value", flag),
    };
    let parsed = value
        .parse::<u8>()
        .with_context(|| format!("invalid {} value {:?}", flag, value))?;
    if parsed == 0 {
        bail!("{} must be at least 1", flag);
    }
    Ok(parsed)
}

/// Wall-clock milliseconds; good enough to vary casual games.
fn default_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u32)
        .unwrap_or(1)
}
