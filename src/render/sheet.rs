// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Langsheet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Langsheet and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Plain-text rendering of the cheat sheet, used by the non-interactive CLI modes.

use super::text::{center, rule_with_labels};
use super::{
    topic_page, Card, TopicPage, LINK_LABEL, PLACEHOLDER, PLAYGROUND_ACTION_LABEL, TITLE,
    TOUR_LABEL,
};
use crate::model::{SnippetTable, Topic};
use crate::playground::TOUR_URL;
use crate::ui::CheatSheetState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetRenderOptions {
    /// Width in cells used for rules and centering. Snippet lines are never wrapped.
    pub width: usize,
    pub show_header: bool,
}

impl Default for SheetRenderOptions {
    fn default() -> Self {
        Self { width: 80, show_header: true }
    }
}

/// Renders just the body of one topic: its cards, or the placeholder.
pub fn render_topic_text(table: &SnippetTable, topic: Topic, width: usize) -> String {
    let mut out = String::new();
    push_page(&mut out, &topic_page(table, topic), width);
    out
}

/// Renders the whole sheet for `state`: title, tab bar, active page, link panel, outbound link.
pub fn render_sheet_text(
    table: &SnippetTable,
    state: &CheatSheetState,
    options: SheetRenderOptions,
) -> String {
    let width = options.width.max(20);
    let mut out = String::new();

    if options.show_header {
        out.push_str(&center(TITLE, width));
        out.push('\n');
        out.push_str(&tab_bar_text(state.topic()));
        out.push_str("\n\n");
    }

    push_page(&mut out, &topic_page(table, state.topic()), width);

    if let Some(url) = state.link().shown_url() {
        out.push('\n');
        out.push_str(LINK_LABEL);
        out.push('\n');
        out.push_str(url);
        out.push('\n');
    }

    if options.show_header {
        out.push('\n');
        out.push_str(&center(&format!("{TOUR_LABEL}: {TOUR_URL}"), width));
        out.push('\n');
    }

    out
}

fn tab_bar_text(active: Topic) -> String {
    Topic::ALL
        .iter()
        .map(|topic| {
            if *topic == active {
                format!("[{}]", topic.label())
            } else {
                topic.label().to_owned()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

fn push_page(out: &mut String, page: &TopicPage, width: usize) {
    match page {
        TopicPage::ComingSoon => {
            out.push_str(&center(PLACEHOLDER, width));
            out.push('\n');
        }
        TopicPage::Cards(cards) => {
            for (idx, card) in cards.iter().enumerate() {
                if idx > 0 {
                    out.push('\n');
                }
                push_card(out, card, width);
            }
        }
    }
}

fn push_card(out: &mut String, card: &Card, width: usize) {
    let action = card.playground.map(|_| PLAYGROUND_ACTION_LABEL);
    out.push_str(&rule_with_labels(card.language.name(), action, width));
    out.push('\n');
    out.push_str(card.code);
    out.push('\n');
}
