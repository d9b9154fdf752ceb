//! Dashboard rendering
//!
//! The layout gives the banner exactly the rows its last height report asks
//! for, then splits the rest between the host activity pane and a one-line
//! status bar.

use marquee::App;
use marquee::ui::{StatusBarWidget, colors};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use std::rc::Rc;

/// Render the full dashboard
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let chunks = layout(app, frame.area());

    if let Some(banner) = app.banner.widget() {
        banner.render(frame, chunks[0]);
    }
    render_body(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);
}

/// Banner slice of the layout for `frame_area`.
///
/// Mouse hit-testing uses the same split the renderer does.
pub fn banner_area(app: &App, frame_area: Rect) -> Rect {
    layout(app, frame_area)[0]
}

fn layout(app: &App, frame_area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(app.banner_rows()),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame_area)
}

fn render_body(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let visible = usize::from(area.height.saturating_sub(2));
    let start = app.activity.len().saturating_sub(visible);
    let lines: Vec<Line<'_>> = app.activity[start..]
        .iter()
        .map(|entry| Line::styled(entry.as_str(), Style::default().fg(colors::TEXT_MUTED)))
        .collect();

    let body = Paragraph::new(lines).block(
        Block::default()
            .title(" Host Activity ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::BORDER)),
    );
    frame.render_widget(body, area);
}

fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let widget = if app.banner.is_closed() {
        StatusBarWidget::status("banner closed")
    } else {
        StatusBarWidget::normal(app.height.get())
    };
    frame.render_widget(widget.to_paragraph(), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee::Config;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn test_app() -> App {
        let mut app = App::new(Config::default());
        app.dispatch_current();
        app.pump_banner();
        app
    }

    fn draw(app: &App, width: u16, height: u16) -> Result<String, Box<dyn std::error::Error>> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend)?;
        terminal.draw(|frame| render(frame, app))?;

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in buffer.area.top()..buffer.area.bottom() {
            for x in buffer.area.left()..buffer.area.right() {
                if let Some(cell) = buffer.cell((x, y)) {
                    text.push_str(cell.symbol());
                }
            }
            text.push('\n');
        }
        Ok(text)
    }

    #[test]
    fn test_open_banner_renders_title_and_cta() -> TestResult {
        let text = draw(&test_app(), 80, 24)?;
        assert!(text.contains("Introducing GPT-5"));
        assert!(text.contains("Learn more"));
        assert!(text.contains("Close"));
        Ok(())
    }

    #[test]
    fn test_status_bar_shows_reported_height() -> TestResult {
        let text = draw(&test_app(), 80, 24)?;
        assert!(text.contains("banner 220px"));
        assert!(text.contains("[q]uit"));
        Ok(())
    }

    #[test]
    fn test_closed_banner_renders_no_banner_content() -> TestResult {
        let mut app = test_app();
        app.activate_close();

        let text = draw(&app, 80, 24)?;
        assert!(!text.contains("Introducing GPT-5"));
        assert!(!text.contains("Learn more"));
        assert!(text.contains("banner closed"));
        Ok(())
    }

    #[test]
    fn test_banner_area_matches_reported_rows() {
        let app = test_app();
        let area = banner_area(&app, Rect::new(0, 0, 80, 24));
        assert_eq!(area, Rect::new(0, 0, 80, 11));
    }

    #[test]
    fn test_banner_area_collapses_after_close_and_render_event() {
        let mut app = test_app();
        app.activate_close();
        app.dispatch_current();
        app.pump_banner();

        let area = banner_area(&app, Rect::new(0, 0, 80, 24));
        assert_eq!(area.height, 0);
    }
}
