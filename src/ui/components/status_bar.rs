//! Status bar widget

use crate::ui::colors;
use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Widget for displaying the status bar
#[derive(Debug)]
pub struct Widget {
    content: StatusContent,
}

/// Content type for the status bar
#[derive(Debug)]
pub enum StatusContent {
    /// Normal status showing the reported banner height and keybindings
    Normal {
        /// Latest height the banner reported, in pixels
        height_px: u32,
    },
    /// Status message
    Status(String),
}

impl Widget {
    /// Create a new status bar with normal content
    #[must_use]
    pub const fn normal(height_px: u32) -> Self {
        Self {
            content: StatusContent::Normal { height_px },
        }
    }

    /// Create a new status bar with a status message
    #[must_use]
    pub fn status(message: impl Into<String>) -> Self {
        Self {
            content: StatusContent::Status(message.into()),
        }
    }

    /// Convert to a Paragraph widget
    #[must_use]
    pub fn to_paragraph(&self) -> Paragraph<'_> {
        let span = match &self.content {
            StatusContent::Status(msg) => {
                Span::styled(format!(" {msg} "), Style::default().fg(colors::STATUS_OK))
            }
            StatusContent::Normal { height_px } => Span::styled(
                format!(" banner {height_px}px | [r]efresh [c]lose [q]uit "),
                Style::default().fg(colors::TEXT_MUTED),
            ),
        };

        Paragraph::new(Line::from(span)).style(Style::default().bg(colors::SURFACE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_bar_normal() {
        let widget = Widget::normal(220);
        match widget.content {
            StatusContent::Normal { height_px } => assert_eq!(height_px, 220),
            StatusContent::Status(_) => unreachable!("expected Normal content"),
        }
    }

    #[test]
    fn test_status_bar_status() {
        let widget = Widget::status("banner closed");
        match widget.content {
            StatusContent::Status(msg) => assert_eq!(msg, "banner closed"),
            StatusContent::Normal { .. } => unreachable!("expected Status content"),
        }
    }

    #[test]
    fn test_to_paragraph() {
        let widget = Widget::normal(0);
        let _paragraph = widget.to_paragraph();
    }

    #[test]
    fn test_to_paragraph_status() {
        let widget = Widget::status("test status");
        let _paragraph = widget.to_paragraph();
    }
}
