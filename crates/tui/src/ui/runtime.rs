//! Runtime: event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode, mouse capture).
//! - Drive a single event loop over terminal input, a periodic tick and Ctrl+C.
//! - Route input through `MainView` and execute the returned `Effect`s.
//!
//! Ticking
//! - Fast interval (250 ms) while toasts are on screen so they expire on time;
//!   long interval (5 s) when idle.
//!
//! Entry Point
//! - `run_app(config, options)` is called from `lib::run` and performs setup,
//!   event processing, and teardown. Teardown runs even when the loop fails.
use std::time::{Duration, Instant};

use adminshell_types::{Effect, Msg};
use adminshell_util::ShellConfig;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::*};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::RunOptions;
use crate::app::App;
use crate::ui::components::component::Component;
use crate::ui::main_component::MainView;
use crate::ui::theme;

/// What the event loop should do after a batch of effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopAction {
    Continue,
    Exit,
}

/// Spawn a dedicated input thread that polls the terminal and forwards
/// `crossterm` events over a Tokio channel.
///
/// `poll()` and `read()` stay on the same OS thread. The thread exits once
/// the receiver is dropped.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);

    tokio::task::spawn_blocking(move || {
        let sixteen_ms = Duration::from_millis(16);
        let mut last_mouse_move = Instant::now();
        while !sender.is_closed() {
            match event::poll(sixteen_ms) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(e) => {
                    warn!("Failed to poll terminal events: {}", e);
                    break;
                }
            }
            match event::read() {
                Ok(event) => {
                    // Throttle mouse move events to once per 16 ms.
                    let is_mouse_move = event.as_mouse_event().is_some_and(|e| e.kind == MouseEventKind::Moved);
                    if is_mouse_move {
                        if last_mouse_move.elapsed() < sixteen_ms {
                            continue;
                        }
                        last_mouse_move = Instant::now();
                    }
                    if let Err(e) = sender.blocking_send(event) {
                        debug!("Input receiver dropped: {}", e);
                        break;
                    }
                }
                Err(e) => {
                    warn!("Failed to read event: {}", e);
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
///
/// Returns a ratatui `Terminal` backed by Crossterm for later drawing.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Draws a frame. Focus is rebuilt first so it tracks the areas recorded by
/// the previous frame.
fn render(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    main_view.rebuild_focus(app);
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

/// Handle raw crossterm input events and route them through the main view.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Advances time-based state. Returns the resulting effects and whether the
/// screen changed (toasts were on screen or something reacted to the tick).
fn handle_tick(app: &mut App, main_view: &mut MainView) -> (Vec<Effect>, bool) {
    let had_toasts = !app.toasts.is_empty();
    let effects = main_view.handle_message(app, Msg::Tick);
    let changed = had_toasts || !effects.is_empty();
    (effects, changed)
}

/// Executes effects in order. Stops at the first `Quit`.
pub(crate) fn process_effects(app: &mut App, main_view: &mut MainView, effects: Vec<Effect>) -> LoopAction {
    for effect in effects {
        match effect {
            Effect::Navigate(path) => main_view.set_current_page(app, &path),
            Effect::Logout => {
                // No session backend; the request is only recorded.
                info!(user = %app.ctx.user.name, "logout requested");
            }
            Effect::ShowToast(toast) => app.show_toast(toast),
            Effect::Quit => return LoopAction::Exit,
        }
    }
    LoopAction::Continue
}

fn is_ctrl_c(event: &Event) -> bool {
    matches!(event, Event::Key(key) if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    main_view: &mut MainView,
) -> Result<()> {
    let mut input_receiver = spawn_input_thread();

    let fast_interval = Duration::from_millis(250);
    let idle_interval = Duration::from_millis(5000);
    let mut current_interval = idle_interval;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    render(terminal, app, main_view)?;

    // Track the last known terminal size to synthesize Resize messages when
    // some terminals fail to emit them.
    let mut last_size: Option<(u16, u16)> = crossterm::terminal::size().ok();

    loop {
        let target_interval = if app.toasts.is_empty() { idle_interval } else { fast_interval };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = time::interval(current_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }

        let (effects, mut needs_render) = tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    // Input channel closed; shut down cleanly.
                    break;
                };
                if is_ctrl_c(&event) {
                    break;
                }
                (handle_input_event(app, main_view, event), true)
            }
            _ = ticker.tick() => handle_tick(app, main_view),
            _ = signal::ctrl_c() => { break; }
        };

        if process_effects(app, main_view, effects) == LoopAction::Exit {
            break;
        }

        // Fallback: detect terminal size changes even if no explicit Resize
        // event was received.
        if let Ok((w, h)) = crossterm::terminal::size()
            && last_size != Some((w, h))
        {
            last_size = Some((w, h));
            main_view.handle_message(app, Msg::Resize(w, h));
            needs_render = true;
        }

        if needs_render {
            render(terminal, app, main_view)?;
        }
    }
    Ok(())
}

/// Entry point for the TUI runtime: resolves the theme, builds the app at
/// the initial route, runs the event loop and restores the terminal.
pub async fn run_app(config: ShellConfig, options: RunOptions) -> Result<()> {
    let loaded_theme = theme::load(options.theme_override.as_deref(), config.theme.as_deref());
    info!(theme = loaded_theme.definition.id, "theme selected");

    let mut app = App::new(config, loaded_theme);
    let mut main_view = MainView::new(&app);
    main_view.set_current_page(&mut app, &options.initial_path);

    let mut terminal = setup_terminal()?;
    let loop_result = event_loop(&mut terminal, &mut app, &mut main_view).await;
    let cleanup_result = cleanup_terminal(&mut terminal);
    info!("admin shell exited");
    loop_result.and(cleanup_result)
}
