pub mod header;
pub mod kill_prompt;
pub mod process_table;
pub mod statusbar;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::App;
use crate::prompt::KillPrompt;

/// Title, CPU bar, memory bar and column header take one row each; the
/// table gets what is left above the status bar.
pub const HEADER_ROWS: u16 = 4;

pub fn draw(frame: &mut Frame, app: &App, prompt: Option<&KillPrompt>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let theme = &app.theme;
    header::render_title(frame, chunks[0], &app.snapshot, app.sort_mode, theme);
    header::render_cpu(frame, chunks[1], &app.snapshot, theme);
    header::render_memory(frame, chunks[2], &app.snapshot, theme);
    header::render_column_header(frame, chunks[3], theme);
    process_table::render(frame, chunks[4], &app.snapshot.processes, theme);
    statusbar::render(
        frame,
        chunks[5],
        app.status_message.as_ref(),
        &app.keybinds.hints(),
        theme,
    );

    // Overlay last so it draws on top
    if let Some(prompt) = prompt {
        kill_prompt::render(frame, frame.area(), prompt, theme);
    }
}

#[cfg(test)]
pub(crate) fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            if let Some(cell) = buf.cell((x, y)) {
                out.push_str(cell.symbol());
            }
        }
        if y + 1 < area.height {
            out.push('\n');
        }
    }
    out
}
