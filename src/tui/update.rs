//! Pure state transitions: (Screen, Action) → Transition.
//!
//! This is the core logic of the interface. Fully testable without a
//! terminal. Each screen defines which actions it accepts. Unhandled
//! actions return the current screen unchanged (no-op).

use crate::content::Content;
use crate::types::{ProjectCategory, SendStatus};

use super::state::{Action, Effect, Screen, Transition};

/// Pure state transition function.
///
/// Given the current screen, an action, and a read-only view of the
/// bundled content, produces the next transition. The effects boundary
/// interprets the result.
pub fn update(screen: Screen, action: &Action, content: &Content) -> Transition {
    // Actions that mean the same thing on every screen.
    match action {
        Action::Quit => return Transition::Quit,
        Action::ToggleTheme => return Transition::Effect(Effect::ToggleTheme),
        Action::Section(n) => {
            // Jumping to the current section is a no-op; jumping
            // elsewhere resets that section to its initial state.
            if *n == screen.section_number() {
                return Transition::Screen(screen);
            }
            if let Some(next) = Screen::section(*n) {
                return Transition::Screen(next);
            }
            return Transition::Screen(screen);
        }
        Action::NextSection => {
            let n = screen.section_number() % 4 + 1;
            return Transition::Screen(Screen::section(n).unwrap_or(Screen::Home));
        }
        Action::PrevSection => {
            let n = if screen.section_number() == 1 { 4 } else { screen.section_number() - 1 };
            return Transition::Screen(Screen::section(n).unwrap_or(Screen::Home));
        }
        _ => {}
    }

    match screen {
        Screen::Home => update_home(action, content),
        Screen::About { scroll } => update_about(scroll, action, content),
        Screen::Projects { cursor, filter, selected } => {
            update_projects(cursor, filter, selected, action, content)
        }
        Screen::Contact { form } => update_contact(form, action),
    }
}

// ============================================================================
// PER-SCREEN HANDLERS
// ============================================================================

/// Home: Enter jumps to the showcase, `o` opens the GitHub profile.
fn update_home(action: &Action, content: &Content) -> Transition {
    match action {
        Action::Enter => Transition::Screen(Screen::projects()),
        Action::MoveDown => Transition::Screen(Screen::about()),
        Action::OpenRepo => Transition::Effect(Effect::OpenLink {
            url: content.profile.github_url.clone(),
        }),
        _ => Transition::Screen(Screen::Home),
    }
}

/// About: vertical scrolling over the skill listing.
fn update_about(scroll: usize, action: &Action, content: &Content) -> Transition {
    match action {
        Action::MoveUp => Transition::Screen(Screen::About {
            scroll: scroll.saturating_sub(1),
        }),
        Action::MoveDown => {
            let max = about_line_count(content).saturating_sub(1);
            Transition::Screen(Screen::About {
                scroll: (scroll + 1).min(max),
            })
        }
        Action::Back => Transition::Screen(Screen::Home),
        _ => Transition::Screen(Screen::About { scroll }),
    }
}

/// Number of lines the About body renders: a heading, the group's
/// skills, and a blank line per non-empty group. Used to clamp scroll.
pub fn about_line_count(content: &Content) -> usize {
    crate::types::SkillCategory::ALL
        .iter()
        .map(|&c| content.skills_in(c).len())
        .filter(|&n| n > 0)
        .map(|n| n + 2)
        .sum()
}

/// Projects: cursor movement over the filtered list, filter cycling,
/// a detail modal, and repository opening.
fn update_projects(
    cursor: usize,
    filter: Option<ProjectCategory>,
    selected: Option<usize>,
    action: &Action,
    content: &Content,
) -> Transition {
    let len = content.filtered_projects(filter).len();

    // Modal open: it captures everything except closing and the
    // repository shortcut.
    if let Some(index) = selected {
        return match action {
            Action::Back => Transition::Screen(Screen::Projects {
                cursor,
                filter,
                selected: None,
            }),
            Action::OpenRepo => match content.filtered_projects(filter).get(index) {
                Some(project) => Transition::Effect(Effect::OpenLink {
                    url: project.repo_url.clone(),
                }),
                None => Transition::Screen(Screen::Projects { cursor, filter, selected: None }),
            },
            _ => Transition::Screen(Screen::Projects { cursor, filter, selected }),
        };
    }

    match action {
        Action::MoveUp => Transition::Screen(Screen::Projects {
            cursor: cursor.saturating_sub(1),
            filter,
            selected: None,
        }),
        Action::MoveDown => {
            let next = if len == 0 { 0 } else { (cursor + 1).min(len - 1) };
            Transition::Screen(Screen::Projects { cursor: next, filter, selected: None })
        }
        Action::CycleFilter => Transition::Screen(Screen::Projects {
            cursor: 0,
            filter: next_filter(filter),
            selected: None,
        }),
        Action::Enter => {
            if cursor < len {
                Transition::Screen(Screen::Projects { cursor, filter, selected: Some(cursor) })
            } else {
                Transition::Screen(Screen::Projects { cursor, filter, selected: None })
            }
        }
        Action::OpenRepo => match content.filtered_projects(filter).get(cursor) {
            Some(project) => Transition::Effect(Effect::OpenLink {
                url: project.repo_url.clone(),
            }),
            None => Transition::Screen(Screen::Projects { cursor, filter, selected: None }),
        },
        Action::Back => Transition::Screen(Screen::Home),
        _ => Transition::Screen(Screen::Projects { cursor, filter, selected: None }),
    }
}

/// Filter cycle: All -> Web -> Mobile -> Fullstack -> Backend -> All.
fn next_filter(filter: Option<ProjectCategory>) -> Option<ProjectCategory> {
    match filter {
        None => Some(ProjectCategory::ALL[0]),
        Some(current) => ProjectCategory::ALL
            .iter()
            .position(|&c| c == current)
            .and_then(|i| ProjectCategory::ALL.get(i + 1))
            .copied(),
    }
}

/// Contact: text entry plus simulated submission.
fn update_contact(mut form: crate::types::ContactForm, action: &Action) -> Transition {
    match action {
        Action::Input(c) => {
            form.focused_text().push(*c);
            Transition::Screen(Screen::Contact { form })
        }
        Action::DeleteChar => {
            form.focused_text().pop();
            Transition::Screen(Screen::Contact { form })
        }
        Action::NextField => {
            form.focus = form.focus.next();
            Transition::Screen(Screen::Contact { form })
        }
        Action::Submit => {
            if form.status == SendStatus::Idle && form.is_complete() {
                Transition::Effect(Effect::SubmitMessage { form })
            } else {
                Transition::Screen(Screen::Contact { form })
            }
        }
        Action::Back => Transition::Screen(Screen::Home),
        _ => Transition::Screen(Screen::Contact { form }),
    }
}

// ============================================================================
// TESTS
// ============================================================================
