//! Formatting utilities used for CLI and export outputs.

use chrono::NaiveTime;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `Some(09:00:00)` → `"09:00:00"`, `None` → `"--:--:--"`.
pub fn opt_clock(t: Option<NaiveTime>) -> String {
    t.map(crate::utils::time::clock_str)
        .unwrap_or_else(|| "--:--:--".to_string())
}

pub fn billable_label(is_billable: bool) -> &'static str {
    if is_billable { "yes" } else { "no" }
}

/// Shorten `s` to at most `max` terminal cells, ending with "…" when cut.
pub fn truncate(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }

    let budget = max.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}
