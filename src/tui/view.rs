//! Pure rendering: map App state to ratatui widget trees.
//!
//! Each screen has a dedicated render function. The main `render()`
//! dispatches based on the current Screen variant. Widget-building
//! functions are pure (state in, widgets out); the only effect is
//! Frame::render_widget() which writes to the terminal buffer.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::content::Content;
use crate::report::level_bar;
use crate::types::{ContactForm, FormField, Project, SendStatus, SkillCategory};

use super::state::{App, Screen};
use super::theme::Palette;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let palette = Palette::for_mode(app.dark);
    let area = frame.area();

    // Paint the background first so the light theme gets a light canvas.
    frame.render_widget(Block::new().style(palette.base), area);

    // Common layout: title bar at top, content in middle, help at bottom
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(&app.screen, &palette), chunks[0]);
    frame.render_widget(render_help(&app.screen, &palette), chunks[2]);

    let content_area = chunks[1];

    match &app.screen {
        Screen::Home => render_home(app, &palette, frame, content_area),
        Screen::About { scroll } => {
            render_about(&app.content, *scroll, &palette, frame, content_area);
        }
        Screen::Projects { cursor, filter, selected } => {
            render_projects(&app.content, *cursor, *filter, &palette, frame, content_area);
            if let Some(index) = selected {
                let shown = app.content.filtered_projects(*filter);
                if let Some(project) = shown.get(*index) {
                    render_project_modal(project, &palette, frame, content_area);
                }
            }
        }
        Screen::Contact { form } => {
            render_contact(&app.content, form, &palette, frame, content_area);
        }
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

/// Title bar showing the app name and current section.
fn render_title(screen: &Screen, palette: &Palette) -> Paragraph<'static> {
    let section = match screen {
        Screen::Home => "Home",
        Screen::About { .. } => "About",
        Screen::Projects { .. } => "Projects",
        Screen::Contact { .. } => "Contact",
    };

    Paragraph::new(Line::from(vec![
        Span::styled(" termfolio ", palette.title),
        Span::styled(format!(" {}/4 {}", screen.section_number(), section), palette.dim),
    ]))
    .style(palette.base)
}

/// Help line showing available keybindings for the current screen.
fn render_help(screen: &Screen, palette: &Palette) -> Paragraph<'static> {
    let help_text = match screen {
        Screen::Home => "[1-4] sections  [Enter] projects  [o] github  [t] theme  [q] quit",
        Screen::About { .. } => "[j/k] scroll  [1-4] sections  [Esc] home  [q] quit",
        Screen::Projects { selected: Some(_), .. } => "[o] open repo  [Esc] close",
        Screen::Projects { .. } => {
            "[j/k] move  [f] filter  [Enter] details  [o] open repo  [Esc] home"
        }
        Screen::Contact { .. } => "[Tab] next field  [Enter] send  [^T] theme  [Esc] home",
    };

    Paragraph::new(Span::styled(help_text, palette.help)).style(palette.base)
}

// ============================================================================
// SCREEN: HOME
// ============================================================================

fn render_home(app: &App, palette: &Palette, frame: &mut Frame, area: Rect) {
    let profile = &app.content.profile;

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}", profile.greeting), palette.dim)),
        Line::from(Span::styled(format!("  {}", profile.name), palette.title)),
        Line::from(""),
        Line::from(vec![
            Span::styled("  I'm a ", palette.base),
            Span::styled(app.typing.text().to_string(), palette.accent),
            Span::styled("▌", palette.cursor),
        ]),
        Line::from(""),
        Line::from(Span::styled(format!("  {}", profile.bio), palette.base)),
        Line::from(""),
        Line::from(Span::styled(format!("  ⌂ {}", profile.location), palette.dim)),
        Line::from(Span::styled(format!("  ✉ {}", profile.email), palette.dim)),
        Line::from(Span::styled(format!("  ⎇ {}", profile.github_url), palette.dim)),
        Line::from(""),
        Line::from(vec![
            Span::styled("  [Enter] ", palette.accent),
            Span::styled("View my work", palette.base),
        ]),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).style(palette.base);
    frame.render_widget(paragraph, area);
}

// ============================================================================
// SCREEN: ABOUT
// ============================================================================

fn render_about(
    content: &Content,
    scroll: usize,
    palette: &Palette,
    frame: &mut Frame,
    area: Rect,
) {
    let mut lines: Vec<Line> = Vec::new();

    for &category in &SkillCategory::ALL {
        let group = content.skills_in(category);
        if group.is_empty() {
            continue;
        }
        lines.push(Line::from(Span::styled(
            format!("  {}", category.label()),
            palette.title,
        )));
        for skill in group {
            lines.push(Line::from(vec![
                Span::styled(format!("    {:<16} ", skill.name), palette.base),
                Span::styled(level_bar(skill.level), palette.accent),
            ]));
        }
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .scroll((scroll as u16, 0))
        .style(palette.base);
    frame.render_widget(paragraph, area);
}

// ============================================================================
// SCREEN: PROJECTS
// ============================================================================

fn render_projects(
    content: &Content,
    cursor: usize,
    filter: Option<crate::types::ProjectCategory>,
    palette: &Palette,
    frame: &mut Frame,
    area: Rect,
) {
    let chunks = Layout::vertical([
        Constraint::Length(2), // filter line
        Constraint::Min(0),    // list
    ])
    .split(area);

    let filter_label = match filter {
        None => "All".to_string(),
        Some(category) => category.label().to_string(),
    };
    let filter_line = Paragraph::new(Line::from(vec![
        Span::styled("  Filter: ", palette.dim),
        Span::styled(filter_label, palette.accent),
        Span::styled("  (press f to cycle)", palette.dim),
    ]))
    .style(palette.base);
    frame.render_widget(filter_line, chunks[0]);

    let shown = content.filtered_projects(filter);
    let mut lines: Vec<Line> = Vec::new();

    for (i, project) in shown.iter().enumerate() {
        let marker = if i == cursor { "> " } else { "  " };
        let star = if project.featured { " ★" } else { "" };
        let spans = vec![
            Span::raw(format!("  {}", marker)),
            Span::styled(format!("{}{}", project.title, star), palette.accent),
            Span::styled(format!("  [{}]", project.category.label()), palette.dim),
        ];
        let line = if i == cursor {
            Line::from(spans).style(palette.cursor)
        } else {
            Line::from(spans)
        };
        lines.push(line);
        lines.push(Line::from(Span::styled(
            format!("      {}", project.summary),
            palette.dim,
        )));
    }

    if shown.is_empty() {
        lines.push(Line::from(Span::styled("  (no projects)", palette.dim)));
    }

    // Two lines per entry, keep the cursor visible.
    let visible_height = chunks[1].height as usize;
    let cursor_line = cursor * 2;
    let scroll_offset = if cursor_line + 2 > visible_height {
        cursor_line + 2 - visible_height
    } else {
        0
    };

    let list = Paragraph::new(lines)
        .scroll((scroll_offset as u16, 0))
        .style(palette.base);
    frame.render_widget(list, chunks[1]);
}

/// Detail modal drawn over the list.
fn render_project_modal(project: &Project, palette: &Palette, frame: &mut Frame, area: Rect) {
    let modal = centered_rect(area, 80, 80);
    frame.render_widget(Clear, modal);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}", project.title), palette.title)),
        Line::from(Span::styled(
            format!("  {}{}", project.category.label(), if project.featured { " · featured" } else { "" }),
            palette.dim,
        )),
        Line::from(""),
        Line::from(Span::styled(format!("  {}", project.details), palette.base)),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Tech: ", palette.dim),
            Span::styled(project.technologies.join(", "), palette.accent),
        ]),
        Line::from(""),
        Line::from(Span::styled(format!("  Repo: {}", project.repo_url), palette.dim)),
    ];

    if let Some(live) = &project.live_url {
        lines.push(Line::from(Span::styled(format!("  Live: {}", live), palette.dim)));
    }

    let block = Block::new()
        .borders(Borders::ALL)
        .title(" Project ")
        .style(palette.base);
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    frame.render_widget(paragraph, modal);
}

/// A rectangle centered in `area`, sized as a percentage of it.
fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);
    let horizontal = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1]);
    horizontal[1]
}

// ============================================================================
// SCREEN: CONTACT
// ============================================================================

fn render_contact(
    content: &Content,
    form: &ContactForm,
    palette: &Palette,
    frame: &mut Frame,
    area: Rect,
) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Get in touch", palette.title)),
        Line::from(Span::styled(
            format!("  Or email me directly: {}", content.profile.email),
            palette.dim,
        )),
        Line::from(""),
    ];

    for (field, label, value) in [
        (FormField::Name, "Name", &form.name),
        (FormField::Email, "Email", &form.email),
        (FormField::Message, "Message", &form.message),
    ] {
        let focused = form.focus == field;
        let marker = if focused { "> " } else { "  " };
        let label_style = if focused { palette.accent } else { palette.dim };
        let mut spans = vec![
            Span::raw(format!("  {}", marker)),
            Span::styled(format!("{:<8} ", label), label_style),
            Span::styled(value.clone(), palette.base),
        ];
        if focused {
            spans.push(Span::styled("▌", palette.cursor));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let status = match form.status {
        SendStatus::Idle => {
            if form.is_complete() {
                Span::styled("  [Enter] Send message", palette.accent)
            } else {
                Span::styled("  Fill in all fields to send", palette.dim)
            }
        }
        SendStatus::Sending => Span::styled("  Sending...", palette.warning),
        SendStatus::Sent => Span::styled("  ✓ Message sent!", palette.success),
    };
    lines.push(status.into());

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).style(palette.base);
    frame.render_widget(paragraph, area);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;
    use crate::typing::{TypingDriver, TypingSequencer};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn make_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(70, 24);
        Terminal::new(backend).unwrap()
    }

    fn make_app() -> App {
        let content = Content::bundled();
        let sequencer =
            TypingSequencer::new(content.profile.headline_words.clone()).unwrap();
        App::new(content, true, TypingDriver::new(sequencer))
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    #[test]
    fn all_screens_render_without_panic() {
        let mut terminal = make_terminal();
        let mut app = make_app();
        let screens = vec![
            Screen::Home,
            Screen::about(),
            Screen::projects(),
            Screen::Projects { cursor: 0, filter: None, selected: Some(0) },
            Screen::contact(),
        ];
        for screen in screens {
            app.screen = screen;
            terminal
                .draw(|frame| render(&app, frame))
                .expect("every screen should render without panic");
        }
    }

    #[test]
    fn home_shows_name_and_typed_text() {
        let mut terminal = make_terminal();
        let mut app = make_app();
        // Advance the animation a few characters.
        let mut scheduler = crate::timer::ManualScheduler::new();
        app.typing.start(&mut scheduler);
        for _ in 0..4 {
            for id in scheduler.advance(std::time::Duration::from_millis(100)) {
                app.typing.on_timer(id, &mut scheduler);
            }
        }
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_text(&terminal);
        assert!(content.contains(&app.content.profile.name));
        assert!(content.contains("I'm a Full"), "typed prefix should be visible");
        assert!(content.contains("▌"), "cursor glyph should be visible");
    }

    #[test]
    fn about_shows_skill_groups_and_bars() {
        let mut terminal = make_terminal();
        let mut app = make_app();
        app.screen = Screen::about();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_text(&terminal);
        assert!(content.contains("Languages"));
        assert!(content.contains("█"), "level bars should be visible");
    }

    #[test]
    fn projects_list_shows_filter_and_cursor() {
        let mut terminal = make_terminal();
        let mut app = make_app();
        app.screen = Screen::Projects {
            cursor: 1,
            filter: Some(crate::types::ProjectCategory::Web),
            selected: None,
        };
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_text(&terminal);
        assert!(content.contains("Filter: Web"));
        assert!(content.contains("> "), "cursor marker should be visible");
    }

    #[test]
    fn project_modal_shows_details() {
        let mut terminal = make_terminal();
        let mut app = make_app();
        app.screen = Screen::Projects { cursor: 0, filter: None, selected: Some(0) };
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_text(&terminal);
        let first = app.content.filtered_projects(None)[0].title.clone();
        assert!(content.contains(&first));
        assert!(content.contains("Tech:"));
    }

    #[test]
    fn contact_shows_fields_and_focus() {
        let mut terminal = make_terminal();
        let mut app = make_app();
        app.screen = Screen::contact();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_text(&terminal);
        assert!(content.contains("Name"));
        assert!(content.contains("Email"));
        assert!(content.contains("Message"));
        assert!(content.contains("Fill in all fields"));
    }

    #[test]
    fn contact_shows_send_status() {
        let mut terminal = make_terminal();
        let mut app = make_app();
        let mut form = ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hi".into(),
            ..Default::default()
        };
        form.status = SendStatus::Sending;
        app.screen = Screen::Contact { form: form.clone() };
        terminal.draw(|frame| render(&app, frame)).unwrap();
        assert!(buffer_text(&terminal).contains("Sending..."));

        form.status = SendStatus::Sent;
        app.screen = Screen::Contact { form };
        terminal.draw(|frame| render(&app, frame)).unwrap();
        assert!(buffer_text(&terminal).contains("Message sent!"));
    }

    #[test]
    fn title_names_the_current_section() {
        let mut terminal = make_terminal();
        let mut app = make_app();
        app.screen = Screen::about();
        terminal.draw(|frame| render(&app, frame)).unwrap();
        assert!(buffer_text(&terminal).contains("2/4 About"));
    }

    #[test]
    fn light_mode_renders_without_panic() {
        let mut terminal = make_terminal();
        let mut app = make_app();
        app.dark = false;
        terminal
            .draw(|frame| render(&app, frame))
            .expect("light palette should render");
    }
}
