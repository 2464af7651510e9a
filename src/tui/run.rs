//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal — all intelligence lives in the pure layers.
//!
//! Architecture: producer threads feed a single mpsc channel.
//! - Key reader thread: forwards crossterm key events
//! - Timer threads (one per armed timer): deliver due TimerIds
//! The event loop consumes from the channel, dispatching to pure handlers.

use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::content::Content;
use crate::prefs::{AmbientScheme, PreferenceStore, ThemeStore};
use crate::timer::{ChannelScheduler, Scheduler};
use crate::types::SendStatus;
use crate::typing::{TypingDriver, TypingSequencer};

use super::state::{Action, App, AppEvent, Effect, Screen, Transition};
use super::update::update;
use super::view::render;

/// How long a contact-form "delivery" takes.
const SEND_DELAY: Duration = Duration::from_millis(1500);

/// How long the sent confirmation stays up before the form resets.
const RESET_DELAY: Duration = Duration::from_millis(3000);

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// `text_entry` is true when the current screen captures typed
/// characters (the contact form). In that mode most keys become text
/// input instead of navigation.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent, text_entry: bool) -> Option<Action> {
    // Control chords work everywhere, even while typing.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            _ => None,
        };
    }

    if text_entry {
        return match key.code {
            KeyCode::Esc => Some(Action::Back),
            KeyCode::Tab => Some(Action::NextField),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        };
    }

    match key.code {
        // Navigation within a section
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Enter => Some(Action::Enter),
        KeyCode::Esc => Some(Action::Back),

        // Navigation between sections
        KeyCode::Char(c @ '1'..='4') => Some(Action::Section(c as u8 - b'0')),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(Action::NextSection),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevSection),

        // Actions
        KeyCode::Char('f') => Some(Action::CycleFilter),
        KeyCode::Char('o') => Some(Action::OpenRepo),
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        KeyCode::Char('q') => Some(Action::Quit),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards key events to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Event::Key(key)) => {
                    if tx.send(AppEvent::Key(key)).is_err() {
                        break; // receiver dropped, TUI is shutting down
                    }
                }
                Ok(_) => {} // ignore mouse, resize, etc.
                Err(_) => break,
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the TUI event loop.
///
/// This is the main entry point for the TUI. It resolves the initial
/// theme, sets up the terminal, starts the typing animation, and runs
/// the event loop until the user quits.
///
/// `dark_override` forces a theme for this session without persisting
/// it (the `--dark` / `--light` flags).
pub fn run<P, A>(theme: &ThemeStore<P, A>, dark_override: Option<bool>) -> io::Result<()>
where
    P: PreferenceStore,
    A: AmbientScheme,
{
    let dark = dark_override.unwrap_or_else(|| theme.initialize());

    let content = Content::bundled();
    let sequencer = TypingSequencer::new(content.profile.headline_words.clone())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_key_reader(tx.clone());
    let mut scheduler = ChannelScheduler::new(tx);

    let mut app = App::new(content, dark, TypingDriver::new(sequencer));
    app.typing.start(&mut scheduler);

    loop {
        // Render
        terminal.draw(|frame| render(&app, frame))?;

        // Check quit flag
        if app.should_quit {
            break;
        }

        // Block on next event from any producer
        let app_event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // all senders dropped
        };

        match app_event {
            AppEvent::Key(key) => {
                let text_entry = app.screen.wants_text_entry();
                if let Some(action) = map_key(key, text_entry) {
                    let transition = update(app.screen.clone(), &action, &app.content);
                    match transition {
                        Transition::Screen(new_screen) => {
                            app.screen = new_screen;
                        }
                        Transition::Quit => {
                            app.should_quit = true;
                        }
                        Transition::Effect(effect) => {
                            handle_effect(effect, &mut app, &mut scheduler, theme);
                        }
                    }
                }
            }
            AppEvent::Timer(id) => {
                handle_timer(id, &mut app, &mut scheduler);
            }
        }
    }

    // Stop the animation and drop any in-flight timers.
    app.typing.shutdown(&mut scheduler);
    if let Some(id) = app.pending_send.take() {
        scheduler.cancel(id);
    }
    if let Some(id) = app.pending_reset.take() {
        scheduler.cancel(id);
    }

    restore_terminal()?;
    Ok(())
}

// ============================================================================
// EFFECT HANDLING
// ============================================================================

/// Handle a side effect requested by a pure transition.
fn handle_effect<P, A>(
    effect: Effect,
    app: &mut App,
    scheduler: &mut dyn Scheduler,
    theme: &ThemeStore<P, A>,
) where
    P: PreferenceStore,
    A: AmbientScheme,
{
    match effect {
        Effect::ToggleTheme => {
            app.dark = theme.toggle(app.dark);
        }
        Effect::SubmitMessage { mut form } => {
            form.status = SendStatus::Sending;
            app.pending_send = Some(scheduler.schedule_after(SEND_DELAY));
            app.screen = Screen::Contact { form };
        }
        Effect::OpenLink { url } => {
            open_link(&url);
            // Current screen is unchanged
        }
    }
}

/// Route a due timer to its owner.
///
/// Timers for a contact form the user has since abandoned fall through
/// the status guards and are ignored.
fn handle_timer(id: crate::timer::TimerId, app: &mut App, scheduler: &mut dyn Scheduler) {
    if app.typing.on_timer(id, scheduler) {
        return;
    }

    if app.pending_send == Some(id) {
        app.pending_send = None;
        if let Screen::Contact { form } = &mut app.screen {
            if form.status == SendStatus::Sending {
                form.status = SendStatus::Sent;
                form.clear_fields();
                app.pending_reset = Some(scheduler.schedule_after(RESET_DELAY));
            }
        }
        return;
    }

    if app.pending_reset == Some(id) {
        app.pending_reset = None;
        if let Screen::Contact { form } = &mut app.screen {
            if form.status == SendStatus::Sent {
                form.status = SendStatus::Idle;
            }
        }
    }
    // Anything else is a stale timer from a canceled chain.
}

/// Open a URL with the platform opener, fire and forget.
fn open_link(url: &str) {
    #[cfg(target_os = "macos")]
    let opener = "open";
    #[cfg(not(target_os = "macos"))]
    let opener = "xdg-open";

    let _ = std::process::Command::new(opener).arg(url).spawn();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::{ManualScheduler, TimerId};
    use crate::types::ContactForm;

    // -- key mapping, navigation mode --

    #[test]
    fn ctrl_c_maps_to_quit() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key, false), Some(Action::Quit));
        assert_eq!(map_key(key, true), Some(Action::Quit));
    }

    #[test]
    fn ctrl_t_toggles_theme_even_while_typing() {
        let key = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key, true), Some(Action::ToggleTheme));
    }

    #[test]
    fn vim_keys_map_to_movement() {
        let j = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        let k = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE);
        assert_eq!(map_key(j, false), Some(Action::MoveDown));
        assert_eq!(map_key(k, false), Some(Action::MoveUp));
    }

    #[test]
    fn number_keys_map_to_sections() {
        for n in 1..=4u8 {
            let key = KeyEvent::new(KeyCode::Char((b'0' + n) as char), KeyModifiers::NONE);
            assert_eq!(map_key(key, false), Some(Action::Section(n)));
        }
    }

    #[test]
    fn tab_cycles_sections_in_navigation_mode() {
        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        let back_tab = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(map_key(tab, false), Some(Action::NextSection));
        assert_eq!(map_key(back_tab, false), Some(Action::PrevSection));
    }

    #[test]
    fn filter_open_and_theme_keys() {
        let f = KeyEvent::new(KeyCode::Char('f'), KeyModifiers::NONE);
        let o = KeyEvent::new(KeyCode::Char('o'), KeyModifiers::NONE);
        let t = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE);
        assert_eq!(map_key(f, false), Some(Action::CycleFilter));
        assert_eq!(map_key(o, false), Some(Action::OpenRepo));
        assert_eq!(map_key(t, false), Some(Action::ToggleTheme));
    }

    #[test]
    fn unmapped_key_returns_none() {
        let key = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(map_key(key, false), None);
    }

    // -- key mapping, text-entry mode --

    #[test]
    fn letters_become_input_while_typing() {
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(map_key(q, true), Some(Action::Input('q')));

        let j = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(map_key(j, true), Some(Action::Input('j')));
    }

    #[test]
    fn text_entry_editing_keys() {
        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let backspace = KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE);
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(map_key(tab, true), Some(Action::NextField));
        assert_eq!(map_key(enter, true), Some(Action::Submit));
        assert_eq!(map_key(backspace, true), Some(Action::DeleteChar));
        assert_eq!(map_key(esc, true), Some(Action::Back));
    }

    // -- timer routing --

    fn make_app() -> App {
        let content = Content::bundled();
        let sequencer =
            TypingSequencer::new(content.profile.headline_words.clone()).unwrap();
        App::new(content, true, TypingDriver::new(sequencer))
    }

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello!".into(),
            ..Default::default()
        }
    }

    #[test]
    fn submit_effect_schedules_delivery_and_marks_sending() {
        let mut app = make_app();
        let mut scheduler = ManualScheduler::new();
        let theme = ThemeStore::new(crate::prefs::FilePreference::new("/dev/null".into()),
            crate::prefs::TerminalScheme::from_env());

        handle_effect(
            Effect::SubmitMessage { form: filled_form() },
            &mut app,
            &mut scheduler,
            &theme,
        );

        assert!(app.pending_send.is_some());
        let Screen::Contact { form } = &app.screen else {
            panic!("expected Contact");
        };
        assert_eq!(form.status, SendStatus::Sending);
    }

    #[test]
    fn delivery_timer_marks_sent_clears_fields_and_arms_reset() {
        let mut app = make_app();
        let mut scheduler = ManualScheduler::new();
        let mut form = filled_form();
        form.status = SendStatus::Sending;
        app.screen = Screen::Contact { form };
        let send_id = scheduler.schedule_after(SEND_DELAY);
        app.pending_send = Some(send_id);

        handle_timer(send_id, &mut app, &mut scheduler);

        assert_eq!(app.pending_send, None);
        assert!(app.pending_reset.is_some());
        let Screen::Contact { form } = &app.screen else {
            panic!("expected Contact");
        };
        assert_eq!(form.status, SendStatus::Sent);
        assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
    }

    #[test]
    fn reset_timer_returns_the_form_to_idle() {
        let mut app = make_app();
        let mut scheduler = ManualScheduler::new();
        let mut form = ContactForm::default();
        form.status = SendStatus::Sent;
        app.screen = Screen::Contact { form };
        let reset_id = scheduler.schedule_after(RESET_DELAY);
        app.pending_reset = Some(reset_id);

        handle_timer(reset_id, &mut app, &mut scheduler);

        assert_eq!(app.pending_reset, None);
        let Screen::Contact { form } = &app.screen else {
            panic!("expected Contact");
        };
        assert_eq!(form.status, SendStatus::Idle);
    }

    #[test]
    fn delivery_timer_for_an_abandoned_form_is_ignored() {
        let mut app = make_app();
        let mut scheduler = ManualScheduler::new();
        let send_id = scheduler.schedule_after(SEND_DELAY);
        app.pending_send = Some(send_id);
        app.screen = Screen::Home; // user left the contact section

        handle_timer(send_id, &mut app, &mut scheduler);

        assert_eq!(app.pending_send, None);
        assert_eq!(app.pending_reset, None);
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn stale_timer_is_ignored() {
        let mut app = make_app();
        let mut scheduler = ManualScheduler::new();
        let before = app.typing.text().to_string();

        handle_timer(TimerId(9999), &mut app, &mut scheduler);

        assert_eq!(app.typing.text(), before);
        assert_eq!(app.pending_send, None);
    }

    #[test]
    fn typing_timer_advances_the_animation() {
        let mut app = make_app();
        let mut scheduler = ManualScheduler::new();
        app.typing.start(&mut scheduler);

        let fired = scheduler.advance(Duration::from_millis(100));
        assert_eq!(fired.len(), 1);
        handle_timer(fired[0], &mut app, &mut scheduler);

        assert_eq!(app.typing.text(), "F");
    }
}
