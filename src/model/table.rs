// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Langsheet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Langsheet and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{snippets::SNIPPETS, Language, Topic};

/// One authored code block for a `(Topic, Language)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snippet {
    topic: Topic,
    language: Language,
    code: &'static str,
}

impl Snippet {
    pub fn topic(&self) -> Topic {
        self.topic
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn code(&self) -> &'static str {
        self.code
    }
}

/// Fixed `Topic -> Language -> code` mapping.
///
/// Absence is a valid state at both levels: a single missing language (its card is omitted) and
/// a topic with no entries at all (rendered as a placeholder).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetTable {
    cells: [[Option<&'static str>; Language::COUNT]; Topic::COUNT],
}

impl SnippetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The authored cheat sheet content.
    pub fn builtin() -> Self {
        Self::from_entries(SNIPPETS.iter().copied())
    }

    /// Builds a table from entries; a repeated pair keeps the last text.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (Topic, Language, &'static str)>,
    ) -> Self {
        let mut table = Self::new();
        for (topic, language, code) in entries {
            table.insert(topic, language, code);
        }
        table
    }

    pub fn insert(&mut self, topic: Topic, language: Language, code: &'static str) {
        self.cells[topic.index()][language.index()] = Some(code);
    }

    pub fn lookup(&self, topic: Topic, language: Language) -> Option<&'static str> {
        self.cells[topic.index()][language.index()]
    }

    pub fn snippet(&self, topic: Topic, language: Language) -> Option<Snippet> {
        self.lookup(topic, language).map(|code| Snippet { topic, language, code })
    }

    pub fn has_entries(&self, topic: Topic) -> bool {
        self.cells[topic.index()].iter().any(Option::is_some)
    }

    /// Present snippets of `topic`, in card order.
    pub fn snippets_for(&self, topic: Topic) -> impl Iterator<Item = Snippet> + '_ {
        Language::ALL.into_iter().filter_map(move |language| self.snippet(topic, language))
    }

    pub fn languages_for(&self, topic: Topic) -> impl Iterator<Item = Language> + '_ {
        self.snippets_for(topic).map(|snippet| snippet.language)
    }

    pub fn len(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
