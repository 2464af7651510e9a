//! TUI color semantics in two variants.
//!
//! The view never names a Color directly, it asks the palette, so
//! flipping dark mode restyles the whole interface in one place.
//!
//! Color semantics:
//! - accent: brand color (name highlight, typed headline, active filter)
//! - dim: de-emphasized metadata (hints, separators, tech lists)
//! - title: section titles and headings
//! - cursor: the focused row/field
//! - success / warning: contact-form status feedback

use ratatui::style::{Color, Modifier, Style};

/// The full style set for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Default text on the default background.
    pub base: Style,
    /// Brand accent.
    pub accent: Style,
    /// De-emphasized text.
    pub dim: Style,
    /// Titles and headings.
    pub title: Style,
    /// Focused row or field.
    pub cursor: Style,
    /// Positive feedback.
    pub success: Style,
    /// Attention needed.
    pub warning: Style,
    /// Keybinding hints in the help line.
    pub help: Style,
    /// Background fill for the whole frame.
    pub background: Color,
}

impl Palette {
    /// Palette for the requested mode.
    pub fn for_mode(dark: bool) -> Palette {
        if dark { Palette::dark() } else { Palette::light() }
    }

    pub fn dark() -> Palette {
        Palette {
            base: Style::new().fg(Color::Gray),
            accent: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            dim: Style::new().fg(Color::DarkGray),
            title: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
            cursor: Style::new().add_modifier(Modifier::REVERSED),
            success: Style::new().fg(Color::Green),
            warning: Style::new().fg(Color::Yellow),
            help: Style::new().fg(Color::DarkGray),
            background: Color::Reset,
        }
    }

    pub fn light() -> Palette {
        Palette {
            base: Style::new().fg(Color::Black).bg(Color::White),
            accent: Style::new()
                .fg(Color::Blue)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
            dim: Style::new().fg(Color::DarkGray).bg(Color::White),
            title: Style::new()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
            cursor: Style::new().add_modifier(Modifier::REVERSED),
            success: Style::new().fg(Color::Green).bg(Color::White),
            warning: Style::new().fg(Color::Magenta).bg(Color::White),
            help: Style::new().fg(Color::Gray).bg(Color::White),
            background: Color::White,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_mode_selects_the_right_palette() {
        assert_eq!(Palette::for_mode(true), Palette::dark());
        assert_eq!(Palette::for_mode(false), Palette::light());
    }

    #[test]
    fn palettes_differ() {
        assert_ne!(Palette::dark(), Palette::light());
    }

    #[test]
    fn accent_is_bold_in_both_modes() {
        assert!(Palette::dark().accent.add_modifier.contains(Modifier::BOLD));
        assert!(Palette::light().accent.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn cursor_style_is_reversed() {
        assert!(Palette::dark().cursor.add_modifier.contains(Modifier::REVERSED));
        assert!(Palette::light().cursor.add_modifier.contains(Modifier::REVERSED));
    }
}
