use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::system::snapshot::ProcessRow;

pub const PID_WIDTH: usize = 6;
pub const USER_WIDTH: usize = 10;
pub const PERCENT_WIDTH: usize = 6;
pub const BAR_WIDTH: usize = 20;

/// Truncate to `max_width` display cells, marking the cut with an ellipsis.
pub fn truncate_unicode(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(1) {
            if max_width > 0 {
                result.push('\u{2026}');
            }
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

/// Cut to `max_width` display cells without a marker.
pub fn clip_unicode(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    const GB: u64 = 1024 * 1024 * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.0} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

pub fn format_kib(kib: u64) -> String {
    format_bytes(kib.saturating_mul(1024))
}

/// `[|||||     ]` with the filled share rounded to whole cells.
pub fn format_bar(percent: f64, width: usize) -> String {
    let ratio = (percent / 100.0).clamp(0.0, 1.0);
    let filled = ((ratio * width as f64).round() as usize).min(width);
    format!("[{}{}]", "|".repeat(filled), " ".repeat(width - filled))
}

pub fn format_header(width: usize) -> String {
    let line = format!(
        "{:<pw$} {:<uw$} {:>cw$} {:>cw$} {}",
        "PID",
        "USER",
        "CPU%",
        "MEM%",
        "COMMAND",
        pw = PID_WIDTH,
        uw = USER_WIDTH,
        cw = PERCENT_WIDTH,
    );
    clip_unicode(&line, width)
}

/// One table row fitted to `width` cells; only the command is ellipsized.
/// A pid wider than its column pushes the row right and the command gives
/// up the difference.
pub fn format_row(row: &ProcessRow, width: usize) -> String {
    let user = clip_unicode(&row.user, USER_WIDTH);
    let user_pad = USER_WIDTH.saturating_sub(user.width());
    let prefix = format!(
        "{:<pw$} {}{} {:>cw$.1} {:>cw$.1} ",
        row.pid,
        user,
        " ".repeat(user_pad),
        row.cpu_percent,
        row.mem_percent,
        pw = PID_WIDTH,
        cw = PERCENT_WIDTH,
    );
    let command_width = width.saturating_sub(prefix.width());
    let line = format!("{prefix}{}", truncate_unicode(&row.name, command_width));
    clip_unicode(&line, width)
}
