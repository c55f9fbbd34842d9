//! Interactive terminal front-end.
//!
//! Draws the current [`View`] and offers its actions through dialoguer
//! prompts. Prompts block, so they run on a blocking thread and hand intents
//! to the state machine over a channel.

use std::io::{self, IsTerminal, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use chrono::Local;
use dialoguer::{theme::ColorfulTheme, Input, Password, Select};
use tokio::runtime::Handle;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info};

use crate::api::KioskApi;
use crate::app::{App, Intent};
use crate::config::KioskConfig;
use crate::screens::{self, View};
use crate::state::{AppState, StateHandle};

/// Longest wait for the state machine to react to an intent before the
/// view is drawn again.
const SETTLE_TIMEOUT: Duration = Duration::from_secs(2);

enum Choice {
    Intent(Intent),
    TypeText,
    Redraw,
    Quit,
}

pub async fn run(api: Arc<dyn KioskApi>, config: KioskConfig) -> Result<()> {
    if !io::stdin().is_terminal() {
        bail!("The kiosk front-end needs an interactive terminal");
    }

    let app = App::new(api, config);
    let state = app.state().clone();
    let (tx, rx) = mpsc::channel::<Intent>(16);

    let handle = Handle::current();
    let prompts = tokio::task::spawn_blocking(move || prompt_loop(state, tx, handle));

    info!("SafeScribe kiosk is ready");
    app.run(rx).await;

    prompts.await.context("Terminal front-end panicked")?
}

fn prompt_loop(state: StateHandle, intents: mpsc::Sender<Intent>, handle: Handle) -> Result<()> {
    let theme = ColorfulTheme::default();
    let mut changes = state.subscribe();

    loop {
        let _ = changes.borrow_and_update();
        let view = screens::render(&state.get(), Local::now());
        draw(&view);

        if view.is_passive() {
            if handle.block_on(changes.changed()).is_err() {
                return Ok(());
            }
            continue;
        }
        if view.is_live() {
            watch_live(&mut changes, &handle);
            continue;
        }

        let intent = match choose(&theme, &view)? {
            Choice::Intent(intent) => intent,
            Choice::TypeText => Intent::TypeText(prompt_text(&theme, &view)?),
            Choice::Redraw => continue,
            Choice::Quit => Intent::Quit,
        };

        debug!("Sending {:?}", intent);
        let quit = intent == Intent::Quit;
        if intents.blocking_send(intent).is_err() || quit {
            return Ok(());
        }

        let _ = handle.block_on(tokio::time::timeout(SETTLE_TIMEOUT, changes.changed()));
    }
}

/// Redraw the changing first line of a live view in place until the user
/// presses Enter, a modal appears or the screen changes.
fn watch_live(changes: &mut watch::Receiver<AppState>, handle: &Handle) {
    println!();
    println!("  (press Enter for actions)");

    let (tx, mut enter) = oneshot::channel();
    std::thread::spawn(move || {
        let mut line = String::new();
        let _ = io::stdin().read_line(&mut line);
        let _ = tx.send(());
    });

    let initial = screens::render(&changes.borrow_and_update(), Local::now());
    let mut shown = initial.lines.first().cloned().unwrap_or_default();
    let mut stopped = false;

    handle.block_on(async {
        loop {
            tokio::select! {
                _ = &mut enter => return,
                changed = changes.changed(), if !stopped => {
                    if changed.is_err() {
                        stopped = true;
                        continue;
                    }
                }
            }

            let view = screens::render(&changes.borrow_and_update(), Local::now());
            if !view.is_live() || view.title != initial.title {
                // Keep waiting for Enter so the reader thread is done
                // before the next prompt takes the terminal.
                stopped = true;
                if let Some(modal) = &view.modal {
                    println!();
                    println!("  ** {} **", modal.title);
                    println!("  {}", modal.message);
                }
                println!("  (press Enter to continue)");
                continue;
            }

            let line = view.lines.first().cloned().unwrap_or_default();
            if line != shown {
                print!("\r  {}", line);
                let _ = io::stdout().flush();
                shown = line;
            }
        }
    });
}

fn draw(view: &View) {
    println!();
    println!("{}", view.title);
    println!("{}", "=".repeat(view.title.chars().count()));
    if let Some(subtitle) = &view.subtitle {
        println!("{}", subtitle);
    }
    for line in &view.lines {
        println!("  {}", line);
    }

    if let Some(keyboard) = &view.keyboard {
        println!();
        println!("  [ {} ]", keyboard.display);
    }

    if let Some(modal) = &view.modal {
        println!();
        println!("  ** {} **", modal.title);
        println!("  {}", modal.message);
    }
}

fn choose(theme: &ColorfulTheme, view: &View) -> Result<Choice> {
    let actions = view.available_actions();
    let typing = view.modal.is_none() && view.keyboard.is_some();

    let mut items: Vec<String> = actions.iter().map(|a| a.label.clone()).collect();
    if typing {
        items.push("Type text...".to_string());
    }
    items.push("Refresh".to_string());
    items.push("Quit".to_string());

    let selection = Select::with_theme(theme)
        .with_prompt("Choose an action")
        .items(&items)
        .default(0)
        .interact()?;

    let extra = selection.checked_sub(actions.len());
    Ok(match (extra, typing) {
        (None, _) => Choice::Intent(actions[selection].intent.clone()),
        (Some(0), true) => Choice::TypeText,
        (Some(0), false) | (Some(1), true) => Choice::Redraw,
        _ => Choice::Quit,
    })
}

fn prompt_text(theme: &ColorfulTheme, view: &View) -> Result<String> {
    let masked = view.keyboard.as_ref().is_some_and(|k| k.masked);
    let text = if masked {
        Password::with_theme(theme)
            .with_prompt("Text")
            .allow_empty_password(true)
            .interact()?
    } else {
        Input::<String>::with_theme(theme)
            .with_prompt("Text")
            .allow_empty(true)
            .interact_text()?
    };
    Ok(text)
}
