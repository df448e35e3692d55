use lexi_core::{View, messages, render};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::app::{Focus, UiApp};

const BUTTON_WIDTH: u16 = 12;

pub fn draw(frame: &mut Frame, app: &mut UiApp) {
    let [title_area, input_row, results_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let [input_area, button_area] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(BUTTON_WIDTH)])
            .areas(input_row);

    app.input_area = input_area;
    app.button_area = button_area;

    frame.render_widget(
        Paragraph::new("Dictionary").style(Style::default().add_modifier(Modifier::BOLD)),
        title_area,
    );
    draw_input(frame, app, input_area);
    draw_button(frame, app, button_area);
    draw_results(frame, app, results_area);
    draw_status_bar(frame, app, status_area);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_input(frame: &mut Frame, app: &UiApp, area: Rect) {
    let focused = app.focus == Focus::Input;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(focused));

    let paragraph = if app.input.text.is_empty() {
        Paragraph::new(app.placeholder.as_str()).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(app.input.text.as_str()).style(Style::default().fg(Color::White))
    };
    frame.render_widget(paragraph.block(block), area);

    if focused {
        let offset = app.input.before_cursor().width() as u16;
        let x = (area.x + 1 + offset).min(area.right().saturating_sub(2));
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}

fn draw_button(frame: &mut Frame, app: &UiApp, area: Rect) {
    let focused = app.focus == Focus::SearchButton;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(focused));

    let style = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default()
    };

    frame.render_widget(
        Paragraph::new("Search")
            .alignment(Alignment::Center)
            .style(style)
            .block(block),
        area,
    );
}

fn draw_results(frame: &mut Frame, app: &UiApp, area: Rect) {
    let view = render(&app.lookup);

    let text: Text = match &view {
        View::Definitions { word, definitions } => {
            let mut lines = vec![Line::styled(
                messages::meanings_heading(word),
                Style::default().add_modifier(Modifier::BOLD),
            )];
            lines.extend(
                definitions
                    .iter()
                    .enumerate()
                    .map(|(i, definition)| Line::from(format!(" {}. {}", i + 1, definition))),
            );
            Text::from(lines)
        }
        View::Error(error) => Text::styled(*error, Style::default().fg(Color::Red)),
        View::Searching => Text::styled(messages::SEARCHING, Style::default().fg(Color::Yellow)),
        other => Text::from(other.lines().join("\n")),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_status_bar(frame: &mut Frame, app: &UiApp, area: Rect) {
    let status = if app.backend_ready { "" } else { "starting… " };
    let hint = format!("{status}Enter: search  Tab: focus  Esc: quit");

    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use lexi_types::{AppEvent, LookupOutcome};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn screen(app: &mut UiApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn blank_input_shows_prompt_and_placeholder() {
        let mut app = UiApp::new("Search for a word".to_string());
        let out = screen(&mut app);

        assert!(out.contains("Search for a word"));
        assert!(out.contains(messages::ENTER_WORD_PROMPT));
        assert!(!out.contains(messages::IDLE_PROMPT));
    }

    #[test]
    fn definitions_are_listed_under_heading() {
        let mut app = UiApp::new(String::new());
        app.input.text = "mouse".to_string();
        app.input.end();
        app.lookup.input_changed("mouse");
        let request = app.lookup.submit().unwrap();
        app.apply(AppEvent::LookupFinished {
            id: request.id,
            outcome: LookupOutcome::Found(vec!["a rodent".into(), "to move stealthily".into()]),
        });

        let out = screen(&mut app);
        assert!(out.contains("Meanings of \"mouse\":"));
        assert!(out.contains("1. a rodent"));
        assert!(out.contains("2. to move stealthily"));
    }

    #[test]
    fn draw_records_button_hit_area() {
        let mut app = UiApp::new(String::new());
        screen(&mut app);

        assert_eq!(app.button_area.width, BUTTON_WIDTH);
        assert_eq!(app.button_area.height, 3);
        assert_eq!(app.input_area.y, app.button_area.y);
    }
}
