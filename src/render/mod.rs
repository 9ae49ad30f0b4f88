// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Langsheet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Langsheet and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering for cheat sheet pages.
//!
//! [`topic_page`] turns the snippet table plus the active topic into a view model (cards or the
//! "coming soon" placeholder) shared by the TUI and the plain-text renderer.

use crate::model::{Language, SnippetTable, Topic};
use crate::playground::Playground;

pub mod sheet;
pub(crate) mod text;

pub use sheet::{render_sheet_text, render_topic_text, SheetRenderOptions};

pub const TITLE: &str =
    "☕ Java → 🎯 Kotlin → 🐹 Go → 🐍 Python → 💙 TypeScript: Cross-Language Cheat Sheet";
pub const PLACEHOLDER: &str = "Example coming soon...";
pub const LINK_LABEL: &str = "Copy this URL and paste it in your browser:";
pub const PLAYGROUND_ACTION_LABEL: &str = "Playground URL";
pub const TOUR_LABEL: &str = "Learn More at Tour of Go";

/// One language card of a topic page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub language: Language,
    pub code: &'static str,
    /// Set only for languages with an online runner; the action is not offered otherwise.
    pub playground: Option<Playground>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicPage {
    Cards(Vec<Card>),
    ComingSoon,
}

impl TopicPage {
    pub fn cards(&self) -> &[Card] {
        match self {
            Self::Cards(cards) => cards,
            Self::ComingSoon => &[],
        }
    }

    pub fn is_coming_soon(&self) -> bool {
        matches!(self, Self::ComingSoon)
    }
}

/// Page for `topic`: one card per present language, in card order.
///
/// Absent languages are omitted; a topic without any entry yields [`TopicPage::ComingSoon`].
pub fn topic_page(table: &SnippetTable, topic: Topic) -> TopicPage {
    if !table.has_entries(topic) {
        return TopicPage::ComingSoon;
    }

    let cards = table
        .snippets_for(topic)
        .map(|snippet| Card {
            language: snippet.language(),
            code: snippet.code(),
            playground: Playground::for_language(snippet.language()),
        })
        .collect();
    TopicPage::Cards(cards)
}

#[cfg(test)]
mod tests {
    use super::{topic_page, TopicPage};
    use crate::model::{Language, SnippetTable, Topic};
    use crate::playground::Playground;

    #[test]
    fn empty_topic_is_coming_soon() {
        let table = SnippetTable::from_entries([(Topic::Basics, Language::Go, "package main")]);
        let page = topic_page(&table, Topic::Errors);
        assert_eq!(page, TopicPage::ComingSoon);
        assert!(page.cards().is_empty());
    }

    #[test]
    fn absent_language_card_is_omitted() {
        let table = SnippetTable::from_entries([
            (Topic::Objects, Language::Java, "class A {}"),
            (Topic::Objects, Language::Python, "class A: ..."),
        ]);
        let page = topic_page(&table, Topic::Objects);
        let languages = page.cards().iter().map(|card| card.language).collect::<Vec<_>>();
        assert_eq!(languages, vec![Language::Java, Language::Python]);
        assert!(!page.is_coming_soon());
    }

    #[test]
    fn playground_offered_only_for_supported_languages() {
        let page = topic_page(&SnippetTable::builtin(), Topic::Basics);
        for card in page.cards() {
            assert_eq!(card.playground, Playground::for_language(card.language));
        }
        let java = page.cards().iter().find(|card| card.language == Language::Java).expect("java");
        assert_eq!(java.playground, None);
    }
}
