//! Helper functions and constants for UI rendering

use chrono::{DateTime, Local, TimeZone, Utc};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::pages::{Banner, BannerKind};

use super::theme::{COLOR_DIM, COLOR_ERROR, COLOR_INFO, COLOR_SUCCESS};

/// Spinner frames for in-flight requests
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Date format for timestamps, e.g. "May 2, 3:04 PM"
pub const DATE_FORMAT: &str = "%b %-d, %-I:%M %p";

pub fn spinner(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()]
}

/// Format a timestamp in `tz` with [`DATE_FORMAT`].
pub fn format_datetime_in<Tz: TimeZone>(dt: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.with_timezone(tz).format(DATE_FORMAT).to_string()
}

/// Format a timestamp in local time.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    format_datetime_in(dt, &Local)
}

/// Truncate to at most `max_width` display columns, adding "..." if cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

/// Word-wrap `text` into rows of at most `width` display columns. Words
/// wider than a row are split. Always returns at least one row.
pub fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_width = 0;
    for word in text.split_whitespace() {
        let word_width = word.width();
        if row_width > 0 && row_width + 1 + word_width <= width {
            row.push(' ');
            row.push_str(word);
            row_width += 1 + word_width;
            continue;
        }
        if row_width > 0 {
            rows.push(std::mem::take(&mut row));
            row_width = 0;
        }
        for c in word.chars() {
            let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
            if row_width + w > width && row_width > 0 {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            row.push(c);
            row_width += w;
        }
    }
    if row_width > 0 || rows.is_empty() {
        rows.push(row);
    }
    rows
}

/// One-line banner paragraph colored by kind.
pub fn banner_line(banner: &Banner) -> Paragraph<'static> {
    let color = match banner.kind {
        BannerKind::Info => COLOR_INFO,
        BannerKind::Success => COLOR_SUCCESS,
        BannerKind::Error => COLOR_ERROR,
    };
    Paragraph::new(Line::from(vec![
        Span::styled(banner.text.clone(), Style::default().fg(color)),
        Span::styled("  [x] dismiss", Style::default().fg(COLOR_DIM)),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_date_format() {
        let dt = Utc.with_ymd_and_hms(2024, 5, 2, 15, 4, 0).unwrap();
        let utc = FixedOffset::east_opt(0).unwrap();
        assert_eq!(format_datetime_in(&dt, &utc), "May 2, 3:04 PM");

        let morning = Utc.with_ymd_and_hms(2024, 12, 25, 9, 30, 0).unwrap();
        assert_eq!(format_datetime_in(&morning, &utc), "Dec 25, 9:30 AM");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("a long subject line", 10), "a long ...");
    }

    #[test]
    fn test_wrap_to_width() {
        let rows = wrap_to_width(&"word ".repeat(10), 12);
        assert_eq!(rows, vec!["word word", "word word", "word word", "word word", "word word"]);

        let rows = wrap_to_width("abcdefghij", 4);
        assert_eq!(rows, vec!["abcd", "efgh", "ij"]);

        assert_eq!(wrap_to_width("   ", 10), vec![String::new()]);
    }

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner(0), spinner(10));
    }
}
