use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::format::{BAR_WIDTH, format_bar, format_header, format_kib};
use crate::system::snapshot::SystemSnapshot;
use crate::system::sort::SortMode;
use crate::ui::theme::Theme;

pub fn render_title(
    frame: &mut Frame,
    area: Rect,
    snapshot: &SystemSnapshot,
    sort_mode: SortMode,
    theme: &Theme,
) {
    let style = Style::default().fg(theme.title_fg).bg(theme.title_bg);
    let line = Line::from(vec![
        Span::styled(" sysmon ", style.add_modifier(Modifier::BOLD)),
        Span::styled(format!("  Sort: {}", sort_mode.label()), style),
        Span::styled(
            format!("  Procs: {}", snapshot.processes.len()),
            style,
        ),
    ]);
    frame.render_widget(Paragraph::new(line).style(style), area);
}

pub fn render_cpu(frame: &mut Frame, area: Rect, snapshot: &SystemSnapshot, theme: &Theme) {
    let percent = snapshot.cpu_usage_percent;
    let line = Line::from(vec![
        Span::styled(" CPU ", Style::default().fg(theme.text_secondary)),
        Span::styled(
            format_bar(percent, BAR_WIDTH),
            Style::default().fg(theme.cpu_bar),
        ),
        Span::styled(
            format!(" {percent:>5.1}%"),
            Style::default().fg(theme.text_primary),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

pub fn render_memory(frame: &mut Frame, area: Rect, snapshot: &SystemSnapshot, theme: &Theme) {
    let percent = snapshot.memory_usage_percent();
    let line = Line::from(vec![
        Span::styled(" Mem ", Style::default().fg(theme.text_secondary)),
        Span::styled(
            format_bar(percent, BAR_WIDTH),
            Style::default().fg(theme.mem_bar),
        ),
        Span::styled(
            format!(" {percent:>5.1}%"),
            Style::default().fg(theme.text_primary),
        ),
        Span::styled(
            format!(
                " ({}/{})",
                format_kib(snapshot.memory.used_kib()),
                format_kib(snapshot.memory.total_kib)
            ),
            Style::default().fg(theme.text_secondary),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

pub fn render_column_header(frame: &mut Frame, area: Rect, theme: &Theme) {
    let style = Style::default()
        .fg(theme.column_header_fg)
        .bg(theme.column_header_bg)
        .add_modifier(Modifier::BOLD);
    let text = format_header(area.width as usize);
    frame.render_widget(Paragraph::new(Line::from(Span::styled(text, style))).style(style), area);
}
