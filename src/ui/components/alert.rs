//! Modal alert renderer.
//!
//! ```text
//! ╭─ Erro ─────────────────────────╮
//! │                                │
//! │ Chave da API do Google Maps    │
//! │ não encontrada. Defina ...     │
//! │                                │
//! │              [ OK ]            │
//! ╰────────────────────────────────╯
//! ```

use crate::ui::helpers::{center_padding, position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::AlertInfo;

/// Widest the dialog gets, borders included.
const MAX_DIALOG_WIDTH: usize = 56;

/// Greedy word wrap to `width` columns. Words longer than a line are cut.
#[must_use]
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let word = truncate(word, width);
        let needed = if line.is_empty() {
            text_width(&word)
        } else {
            text_width(&line) + 1 + text_width(&word)
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Draws the alert centered over whatever is on screen.
pub fn render_alert(alert: &AlertInfo, theme: &Theme, rows: usize, cols: usize) {
    let width = cols.saturating_sub(4).min(MAX_DIALOG_WIDTH);
    if width < 8 || rows < 5 {
        return;
    }
    let inner = width - 2;
    let text_width_max = inner - 2;

    let max_lines = rows.saturating_sub(6).max(1);
    let mut body = wrap_words(&alert.message, text_width_max);
    body.truncate(max_lines);

    let height = body.len() + 5;
    let top = rows.saturating_sub(height) / 2 + 1;
    let (left, _) = center_padding(width, cols);
    let col = left + 1;

    let frame = format!("{}{}", Theme::bg(&theme.colors.alert_bg), Theme::fg(&theme.colors.alert_border));
    let text = format!("{}{}", Theme::bg(&theme.colors.alert_bg), Theme::fg(&theme.colors.alert_fg));

    let title = truncate(&alert.title, inner.saturating_sub(4));
    position_cursor(top, col);
    print!(
        "{frame}╭─ {}{title}{}{frame} {}╮{}",
        Theme::bold(),
        Theme::reset(),
        "─".repeat(inner.saturating_sub(3 + text_width(&title))),
        Theme::reset()
    );

    let blank = format!("{frame}│{}│{}", " ".repeat(inner), Theme::reset());
    let mut r = top + 1;
    position_cursor(r, col);
    print!("{blank}");
    r += 1;

    for line in &body {
        position_cursor(r, col);
        print!(
            "{frame}│{text} {line}{}{frame}│{}",
            " ".repeat(inner.saturating_sub(1 + text_width(line))),
            Theme::reset()
        );
        r += 1;
    }

    position_cursor(r, col);
    print!("{blank}");
    r += 1;

    let button = format!("[ {} ]", alert.button);
    let (pad_left, pad_right) = center_padding(text_width(&button), inner);
    position_cursor(r, col);
    print!(
        "{frame}│{text}{}{}{button}{}{text}{}{frame}│{}",
        " ".repeat(pad_left),
        Theme::bold(),
        Theme::reset(),
        " ".repeat(pad_right),
        Theme::reset()
    );
    r += 1;

    position_cursor(r, col);
    print!("{frame}╰{}╯{}", "─".repeat(inner), Theme::reset());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_missing_key_message() {
        let lines = wrap_words(
            "Chave da API do Google Maps não encontrada. Defina EXPO_PUBLIC_GOOGLE_MAPS_API_KEY.",
            30,
        );
        assert_eq!(
            lines,
            vec![
                "Chave da API do Google Maps",
                "não encontrada. Defina",
                "EXPO_PUBLIC_GOOGLE_MAPS_API_K…",
            ]
        );
        assert!(lines.iter().all(|l| text_width(l) <= 30));
    }

    #[test]
    fn empty_message_has_no_lines() {
        assert!(wrap_words("   ", 10).is_empty());
    }
}
