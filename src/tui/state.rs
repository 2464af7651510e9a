//! TUI state algebra: pure types, zero effects.
//!
//! These types define the entire interface state space. The transition
//! function and the rendering layer both program against them.
//!
//! Design principle: Screen variants carry only per-screen transient
//! state (cursors, the active filter, form fields). Shared data — the
//! bundled content, the dark flag, the typing animation — lives in App.

use crossterm::event::KeyEvent;

use crate::content::Content;
use crate::timer::TimerId;
use crate::types::{ContactForm, ProjectCategory};
use crate::typing::TypingDriver;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// Two producers feed a single mpsc channel:
/// - A key reader thread sends `Key` variants
/// - Scheduler threads send `Timer` variants when a one-shot fires
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// A one-shot timer fired (typing tick or contact-form delay).
    Timer(TimerId),
}

impl From<TimerId> for AppEvent {
    fn from(id: TimerId) -> Self {
        AppEvent::Timer(id)
    }
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
pub struct App {
    /// Current section with its transient state.
    pub screen: Screen,

    /// Bundled portfolio content, shared across screens.
    pub content: Content,

    /// Current theme flag. Mutated only through the toggle effect.
    pub dark: bool,

    /// The headline typewriter animation and its pending timer.
    pub typing: TypingDriver,

    /// Pending "delivery" timer for the contact form, if a send is
    /// in flight.
    pub pending_send: Option<TimerId>,

    /// Pending timer returning the contact form from Sent to Idle.
    pub pending_reset: Option<TimerId>,

    /// Set to true when the app should exit on the next loop pass.
    pub should_quit: bool,
}

impl App {
    /// Create an App on the Home screen.
    pub fn new(content: Content, dark: bool, typing: TypingDriver) -> Self {
        App {
            screen: Screen::Home,
            content,
            dark,
            typing,
            pending_send: None,
            pending_reset: None,
            should_quit: false,
        }
    }
}

// ============================================================================
// SCREENS
// ============================================================================

/// The current section, mirroring the four anchors of the page:
/// Home, About, Projects, Contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Landing section with the typing animation. No per-screen state;
    /// the animation lives in [`App::typing`].
    Home,

    /// Skill listing, vertically scrollable.
    About {
        /// First visible line offset.
        scroll: usize,
    },

    /// Project showcase with filter and optional detail modal.
    Projects {
        /// Focused row within the filtered list.
        cursor: usize,
        /// Active category filter. None shows everything.
        filter: Option<ProjectCategory>,
        /// Open detail modal: index into the filtered list.
        selected: Option<usize>,
    },

    /// Contact form. Text entry captures printable keys.
    Contact { form: ContactForm },
}

impl Screen {
    /// Screen for a section number (1-4), at its initial state.
    pub fn section(n: u8) -> Option<Screen> {
        match n {
            1 => Some(Screen::Home),
            2 => Some(Screen::about()),
            3 => Some(Screen::projects()),
            4 => Some(Screen::contact()),
            _ => None,
        }
    }

    /// 1-based section number of this screen.
    pub fn section_number(&self) -> u8 {
        match self {
            Screen::Home => 1,
            Screen::About { .. } => 2,
            Screen::Projects { .. } => 3,
            Screen::Contact { .. } => 4,
        }
    }

    /// Create the About section scrolled to the top.
    pub fn about() -> Screen {
        Screen::About { scroll: 0 }
    }

    /// Create the Projects section: cursor at top, no filter, no modal.
    pub fn projects() -> Screen {
        Screen::Projects { cursor: 0, filter: None, selected: None }
    }

    /// Create the Contact section with an empty form.
    pub fn contact() -> Screen {
        Screen::Contact { form: ContactForm::default() }
    }

    /// True when printable keys should be captured as form input
    /// instead of being interpreted as commands.
    pub fn wants_text_entry(&self) -> bool {
        matches!(self, Screen::Contact { .. })
    }
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Home
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions.
/// The transition function decides what each Action means per Screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Move cursor / scroll up.
    MoveUp,
    /// Move cursor / scroll down.
    MoveDown,
    /// Jump to a section by number (1-4).
    Section(u8),
    /// Go to the next section in order.
    NextSection,
    /// Go to the previous section in order.
    PrevSection,
    /// Open the focused item / primary action.
    Enter,
    /// Close a modal or return to Home.
    Back,
    /// Advance the project filter: All -> Web -> Mobile -> Fullstack
    /// -> Backend -> All.
    CycleFilter,
    /// Open the focused project's repository in the browser.
    OpenRepo,
    /// Flip dark mode.
    ToggleTheme,
    /// Text entry: append a character to the focused field.
    Input(char),
    /// Text entry: delete the last character of the focused field.
    DeleteChar,
    /// Text entry: move focus to the next field.
    NextField,
    /// Submit the contact form.
    Submit,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// The update function returns this. The effects boundary inspects it
/// to decide what to render and which side effects to execute.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Render this screen (may be the same or a different screen).
    Screen(Screen),
    /// Quit the application.
    Quit,
    /// Execute a side effect. The effects layer handles it.
    Effect(Effect),
}

/// Side effect requested by a pure transition.
///
/// Pure code never executes these — it only describes them.
#[derive(Debug, PartialEq)]
pub enum Effect {
    /// Toggle and persist the theme flag.
    ToggleTheme,
    /// Begin the simulated contact-form delivery. Carries the form so
    /// the effects layer can re-enter the screen with status Sending.
    SubmitMessage { form: ContactForm },
    /// Open a URL in the system browser.
    OpenLink { url: String },
}

// ============================================================================
// TESTS
// ============================================================================
