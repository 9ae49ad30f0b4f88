// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Langsheet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Langsheet and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub(crate) fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }

    if text_len(text) <= max_len {
        return text.to_owned();
    }

    let budget = max_len - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let width = ch.width().unwrap_or(0);
        if used + width > budget {
            break;
        }
        used += width;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Width in terminal cells; wide glyphs such as emoji count as two.
pub(crate) fn text_len(text: &str) -> usize {
    text.width()
}

/// `── left ───── right ──` filled with rules up to `width` cells; `right` is optional.
pub(crate) fn rule_with_labels(left: &str, right: Option<&str>, width: usize) -> String {
    let mut line = format!("── {left} ");
    let tail = right.map(|right| format!(" {right} ──")).unwrap_or_default();
    let used = text_len(&line) + text_len(&tail);
    if used < width {
        line.push_str(&"─".repeat(width - used));
    } else {
        line.push('─');
    }
    line.push_str(&tail);
    line
}

pub(crate) fn center(text: &str, width: usize) -> String {
    let len = text_len(text);
    if len >= width {
        return text.to_owned();
    }
    let left = (width - len) / 2;
    format!("{}{text}", " ".repeat(left))
}

#[cfg(test)]
mod tests {
    use super::{center, rule_with_labels, text_len, truncate_with_ellipsis};

    #[test]
    fn truncate_with_ellipsis_handles_small_widths() {
        assert_eq!(truncate_with_ellipsis("Kotlin", 0), "");
        assert_eq!(truncate_with_ellipsis("Kotlin", 1), "…");
        assert_eq!(truncate_with_ellipsis("Kotlin", 4), "Kot…");
        assert_eq!(truncate_with_ellipsis("Go", 4), "Go");
    }

    #[test]
    fn truncate_counts_wide_glyphs_as_two_cells() {
        assert_eq!(truncate_with_ellipsis("🐹🐹🐹", 4), "🐹…");
        let title = truncate_with_ellipsis("☕ Java → 🎯 Kotlin", 8);
        assert_eq!(title, "☕ Java…");
        assert_eq!(text_len(&title), 8);
    }

    #[test]
    fn rule_fills_to_width() {
        let rule = rule_with_labels("Go", Some("Playground URL"), 40);
        assert_eq!(text_len(&rule), 40);
        assert!(rule.starts_with("── Go ─"));
        assert!(rule.ends_with(" Playground URL ──"));
    }

    #[test]
    fn rule_keeps_labels_when_too_narrow() {
        let rule = rule_with_labels("TypeScript", None, 4);
        assert_eq!(rule, "── TypeScript ─");
    }

    #[test]
    fn center_pads_left_only() {
        assert_eq!(center("ab", 6), "  ab");
        assert_eq!(center("abcdef", 4), "abcdef");
    }

    #[test]
    fn center_measures_display_width() {
        assert_eq!(text_len("☕ ab"), 5);
        assert_eq!(center("☕ ab", 8), " ☕ ab");
    }
}
