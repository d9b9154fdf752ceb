//! Shared fixtures for integration tests

use marquee::banner::DisplayArgs;
use ratatui::buffer::Buffer;

/// Render buffer contents as one string, rows separated by newlines.
pub fn buffer_text(buffer: &Buffer) -> String {
    let mut text = String::new();
    for y in buffer.area.top()..buffer.area.bottom() {
        for x in buffer.area.left()..buffer.area.right() {
            if let Some(cell) = buffer.cell((x, y)) {
                text.push_str(cell.symbol());
            }
        }
        text.push('\n');
    }
    text
}

/// Args used by most scenarios: title + subtitle, gradient on.
pub fn sample_args() -> DisplayArgs {
    DisplayArgs::new("Release day").subtitle("Now with themes")
}
