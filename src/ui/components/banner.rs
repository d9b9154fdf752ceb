//! Hero banner widget
//!
//! Draws the banner surface: gradient (or flat) fill, vertically centered
//! title, optional subtitle and call-to-action label, and the close control
//! in the top-right corner.

use crate::banner::{CLOSE_LABEL, CTA_LABEL, DisplayArgs};
use crate::ui::colors;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Widget for the open banner surface.
#[derive(Debug, Clone)]
pub struct Widget {
    title: String,
    subtitle: String,
    gradient: bool,
}

impl Widget {
    /// Build from display arguments.
    #[must_use]
    pub fn new(args: &DisplayArgs) -> Self {
        Self {
            title: args.title.clone(),
            subtitle: args.subtitle.clone(),
            gradient: args.gradient,
        }
    }

    /// Rectangle of the close control within a banner laid out at `area`.
    ///
    /// Derived from the area alone so mouse hits can be tested against the
    /// same split the renderer used.
    #[must_use]
    pub fn close_rect(area: Rect) -> Rect {
        let width = close_label_width().min(area.width);
        let x = area
            .right()
            .saturating_sub(width.saturating_add(1))
            .max(area.x);
        Rect {
            x,
            y: area.y,
            width,
            height: area.height.min(1),
        }
    }

    /// Draw the banner into `area`. A zero-sized area draws nothing.
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        self.fill_background(frame, area);
        frame.render_widget(self.content(area), area);
        render_close_control(frame, area);
    }

    fn fill_background(&self, frame: &mut Frame<'_>, area: Rect) {
        for row in 0..area.height {
            let color = if self.gradient {
                colors::hero_gradient(row, area.height)
            } else {
                colors::HERO_FLAT
            };
            let row_area = Rect {
                x: area.x,
                y: area.y.saturating_add(row),
                width: area.width,
                height: 1,
            };
            frame
                .buffer_mut()
                .set_style(row_area, Style::default().bg(color));
        }
    }

    fn content(&self, area: Rect) -> Paragraph<'_> {
        let body = self.body();
        let body_height = u16::try_from(body.len()).unwrap_or(u16::MAX);
        let pad = area.height.saturating_sub(body_height) / 2;

        let mut lines = Vec::with_capacity(usize::from(pad) + body.len());
        for _ in 0..pad {
            lines.push(Line::default());
        }
        lines.extend(body);

        Paragraph::new(lines).alignment(Alignment::Center)
    }

    fn body(&self) -> Vec<Line<'_>> {
        let mut lines = vec![Line::styled(
            self.title.as_str(),
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )];
        if !self.subtitle.is_empty() {
            lines.push(Line::styled(
                self.subtitle.as_str(),
                Style::default().fg(colors::TEXT_DIM),
            ));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!(" {CTA_LABEL} "),
            Style::default().fg(colors::CTA_FG).bg(colors::CTA_BG),
        )));
        lines
    }
}

fn render_close_control(frame: &mut Frame<'_>, area: Rect) {
    let close = Widget::close_rect(area);
    if close.width == 0 || close.height == 0 {
        return;
    }
    let label = Paragraph::new(Line::styled(
        format!("✕ {CLOSE_LABEL}"),
        Style::default().fg(colors::TEXT_PRIMARY),
    ));
    frame.render_widget(label, close);
}

fn close_label_width() -> u16 {
    // "✕ " takes two cells in front of the label.
    u16::try_from(CLOSE_LABEL.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}
