//! Pure rendering: map App state to ratatui widget trees.
//!
//! Each screen has a dedicated function producing its lines. `render()`
//! lays out title, centered content and help, and is re-invoked by the
//! event loop after every change. The only effect is
//! Frame::render_widget() which writes to the terminal buffer.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::state::{App, Screen};
use super::theme;

/// Minimum visible width of a text field, cursor included.
const INPUT_WIDTH: usize = 24;

const APP_TITLE: &str = "greeter-nav";

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let [title_area, content_area, help_area] = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .areas(frame.area());

    frame.render_widget(render_title(app), title_area);
    frame.render_widget(render_help(&app.screen), help_area);

    let lines = screen_lines(&app.screen);

    // Centered both ways, like a column with centered arrangement
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let [body] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(content_area);

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, body);
}

/// Visual description of a screen.
pub fn screen_lines(screen: &Screen) -> Vec<Line<'static>> {
    match screen {
        Screen::NameEntry { name } => name_entry_lines(name),
        Screen::AgeEntry { user_name, age } => age_entry_lines(user_name, age),
        Screen::Summary { user_name, age } => summary_lines(user_name, age),
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

/// Title bar with the app name and, optionally, the current route path.
fn render_title(app: &App) -> Paragraph<'static> {
    let mut spans = vec![Span::styled(APP_TITLE, theme::STYLE_TITLE)];

    if app.show_route_path {
        if let Some(path) = app.current_path() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(path.to_string(), theme::STYLE_DIM));
        }
    }

    Paragraph::new(Line::from(spans))
}

/// Help line showing available keys for the current screen.
fn render_help(screen: &Screen) -> Paragraph<'static> {
    let help_text = match screen {
        Screen::NameEntry { .. } | Screen::AgeEntry { .. } => {
            "type to edit  [Backspace] delete  [Enter] confirm  [Esc] back  [^C] quit"
        }
        Screen::Summary { .. } => "[Enter] back to start  [Esc] back  [^C] quit",
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

fn heading(text: String) -> Line<'static> {
    Line::from(Span::styled(text, theme::STYLE_HEADING))
}

fn input_line(value: &str) -> Line<'static> {
    let field = format!("{value}_");
    Line::from(Span::styled(
        format!(" {field:<INPUT_WIDTH$} "),
        theme::STYLE_INPUT,
    ))
}

/// Button label; dimmed while its guard would block the press.
fn button_line(label: &str, enabled: bool) -> Line<'static> {
    let style = if enabled {
        theme::STYLE_BUTTON
    } else {
        theme::STYLE_BUTTON_DISABLED
    };
    Line::from(Span::styled(format!("[ {label} ]"), style))
}

// ============================================================================
// SCREENS
// ============================================================================

fn name_entry_lines(name: &str) -> Vec<Line<'static>> {
    vec![
        heading("Ekran 1 - Wprowadź imię".to_string()),
        Line::from(""),
        input_line(name),
        Line::from(""),
        button_line("Przejdź do Ekranu 2", !name.is_empty()),
    ]
}

fn age_entry_lines(user_name: &str, age: &str) -> Vec<Line<'static>> {
    vec![
        heading(format!("Ekran 2 - Witaj {user_name}. Wprowadź swój wiek:")),
        Line::from(""),
        input_line(age),
        Line::from(""),
        button_line("Przejdź do Ekranu 3", !age.is_empty()),
    ]
}

fn summary_lines(user_name: &str, age: &str) -> Vec<Line<'static>> {
    let mut lines = vec![heading(format!("Ekran 3 - Twoje imię: {user_name}"))];

    if !age.is_empty() {
        lines.push(heading(format!("Twój wiek: {age}")));
    }

    lines.push(Line::from(""));
    lines.push(button_line("Przejdź do Ekranu 1", true));
    lines
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::PopPolicy;
    use crate::tui::update::step;
    use crate::tui::state::Action;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn make_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 20);
        Terminal::new(backend).unwrap()
    }

    fn rendered(app: &App) -> String {
        let mut terminal = make_terminal();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    fn app_on(screen: Screen) -> App {
        let mut app = App::start(PopPolicy::Lenient, true).unwrap();
        app.screen = screen;
        app
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn name_entry_renders_heading_field_and_button() {
        let content = rendered(&app_on(Screen::NameEntry { name: "Ann".into() }));
        assert!(content.contains("Ekran 1 - Wprowadź imię"));
        assert!(content.contains("Ann_"));
        assert!(content.contains("Przejdź do Ekranu 2"));
    }

    #[test]
    fn age_entry_greets_user() {
        let content = rendered(&app_on(Screen::AgeEntry {
            user_name: "Ann".into(),
            age: "3".into(),
        }));
        assert!(content.contains("Witaj Ann. Wprowadź swój wiek:"));
        assert!(content.contains("3_"));
        assert!(content.contains("Przejdź do Ekranu 3"));
    }

    #[test]
    fn summary_shows_age_when_present() {
        let content = rendered(&app_on(Screen::Summary {
            user_name: "Ann".into(),
            age: "30".into(),
        }));
        assert!(content.contains("Twoje imię: Ann"));
        assert!(content.contains("Twój wiek: 30"));
        assert!(content.contains("Przejdź do Ekranu 1"));
    }

    #[test]
    fn summary_omits_age_line_when_empty() {
        let lines = screen_lines(&Screen::Summary {
            user_name: "Ann".into(),
            age: String::new(),
        });
        assert!(lines.iter().all(|l| !line_text(l).contains("Twój wiek")));

        let content = rendered(&app_on(Screen::Summary {
            user_name: "Ann".into(),
            age: String::new(),
        }));
        assert!(content.contains("Twoje imię: Ann"));
        assert!(!content.contains("Twój wiek"));
    }

    #[test]
    fn button_is_dimmed_until_field_has_text() {
        let empty = screen_lines(&Screen::default());
        let filled = screen_lines(&Screen::NameEntry { name: "A".into() });
        let button_style = |lines: &[Line]| lines.last().unwrap().spans[0].style;
        assert_eq!(button_style(&empty), theme::STYLE_BUTTON_DISABLED);
        assert_eq!(button_style(&filled), theme::STYLE_BUTTON);
    }

    #[test]
    fn title_shows_route_path_when_enabled() {
        let mut app = App::start(PopPolicy::Lenient, true).unwrap();
        for c in "Ann".chars() {
            step(&mut app, &Action::Input(c));
        }
        step(&mut app, &Action::Confirm);
        assert!(rendered(&app).contains("screen2/Ann"));

        app.show_route_path = false;
        assert!(!rendered(&app).contains("screen2/Ann"));
    }

    #[test]
    fn all_screens_render_without_panic() {
        let screens = vec![
            Screen::default(),
            Screen::AgeEntry { user_name: "Ann".into(), age: String::new() },
            Screen::Summary { user_name: "Ann".into(), age: "30".into() },
            Screen::Summary { user_name: String::new(), age: String::new() },
        ];
        let mut terminal = make_terminal();
        for screen in screens {
            let app = app_on(screen);
            terminal
                .draw(|frame| render(&app, frame))
                .expect("every screen should render without panic");
        }
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
        let app = app_on(Screen::Summary { user_name: "Ann".into(), age: "30".into() });
        terminal.draw(|frame| render(&app, frame)).unwrap();
    }
}
