use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::prompt::{KillPrompt, PID_INPUT_CAPACITY};
use crate::ui::theme::Theme;

/// Centered box asking for the pid to terminate.
pub fn render(frame: &mut Frame, area: Rect, prompt: &KillPrompt, theme: &Theme) {
    let width = 40u16.min(area.width);
    let height = 4u16.min(area.height);
    let overlay = centered_rect(width, height, area);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.overlay_border))
        .title(Span::styled(
            " Kill process (SIGTERM) ",
            Style::default()
                .fg(theme.overlay_border)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(overlay);

    let field = format!(
        "{:<w$}",
        format!("{}\u{2588}", prompt.input()),
        w = PID_INPUT_CAPACITY + 1
    );
    let lines = vec![
        Line::from(Span::styled(
            " PID (Enter to send, Esc to cancel):",
            Style::default().fg(theme.text_primary),
        )),
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                field,
                Style::default().fg(theme.input_fg).bg(theme.input_bg),
            ),
        ]),
    ];

    frame.render_widget(block, overlay);
    frame.render_widget(Paragraph::new(lines), inner);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [vert] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [horiz] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(vert);
    horiz
}
