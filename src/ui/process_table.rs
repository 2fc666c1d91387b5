use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::format::format_row;
use crate::system::snapshot::ProcessRow;
use crate::ui::theme::Theme;

/// Rows beyond the area's height are not drawn.
pub fn render(frame: &mut Frame, area: Rect, rows: &[ProcessRow], theme: &Theme) {
    let width = area.width as usize;
    let lines: Vec<Line> = rows
        .iter()
        .take(area.height as usize)
        .map(|row| Line::raw(format_row(row, width)))
        .collect();
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().fg(theme.text_primary)),
        area,
    );
}
