// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Langsheet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Langsheet and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! View state owned by the top-level cheat sheet view.
//!
//! Nothing here is global: the interactive TUI owns one [`CheatSheetState`] and passes it by
//! reference to the renderers.

use crate::model::{Snippet, Topic};
use crate::playground::{build_link, PlaygroundError};

/// Holds exactly one active topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TopicSelector {
    current: Topic,
}

impl TopicSelector {
    pub fn new(initial: Topic) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> Topic {
        self.current
    }

    /// Sets the active topic. Returns whether the value changed.
    pub fn select(&mut self, topic: Topic) -> bool {
        let changed = self.current != topic;
        self.current = topic;
        changed
    }
}

/// Last built playground URL plus whether it is shown.
///
/// Only ever overwritten by a newer link; there is no reset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaygroundLink {
    url: Option<String>,
    visible: bool,
}

impl PlaygroundLink {
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// URL to display, if any.
    pub fn shown_url(&self) -> Option<&str> {
        if self.visible {
            self.url()
        } else {
            None
        }
    }

    fn show(&mut self, url: String) {
        self.url = Some(url);
        self.visible = true;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheatSheetState {
    selector: TopicSelector,
    link: PlaygroundLink,
}

impl CheatSheetState {
    pub fn new(initial: Topic) -> Self {
        Self { selector: TopicSelector::new(initial), link: PlaygroundLink::default() }
    }

    pub fn topic(&self) -> Topic {
        self.selector.current()
    }

    pub fn selector_mut(&mut self) -> &mut TopicSelector {
        &mut self.selector
    }

    pub fn link(&self) -> &PlaygroundLink {
        &self.link
    }

    /// Builds the playground link for `snippet` and shows it, replacing any previous link.
    ///
    /// On error the displayed link is left untouched.
    pub fn request_link(&mut self, snippet: Snippet) -> Result<&str, PlaygroundError> {
        let url = build_link(snippet.code(), snippet.language())?;
        self.link.show(url);
        Ok(self.link.url().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::{CheatSheetState, TopicSelector};
    use crate::model::{Language, SnippetTable, Topic};
    use crate::playground::PlaygroundError;

    #[test]
    fn selector_starts_at_default_topic() {
        assert_eq!(TopicSelector::default().current(), Topic::Basics);
        assert_eq!(CheatSheetState::default().topic(), Topic::DEFAULT);
    }

    #[test]
    fn select_sets_every_topic() {
        let mut selector = TopicSelector::default();
        for topic in Topic::ALL {
            selector.select(topic);
            assert_eq!(selector.current(), topic);
        }
    }

    #[test]
    fn select_reports_change() {
        let mut selector = TopicSelector::new(Topic::Errors);
        assert!(!selector.select(Topic::Errors));
        assert!(selector.select(Topic::Objects));
        assert_eq!(selector.current(), Topic::Objects);
    }

    #[test]
    fn link_is_hidden_until_requested() {
        let state = CheatSheetState::default();
        assert!(!state.link().is_visible());
        assert_eq!(state.link().url(), None);
        assert_eq!(state.link().shown_url(), None);
    }

    #[test]
    fn second_request_replaces_first_link() {
        let table = SnippetTable::builtin();
        let mut state = CheatSheetState::default();

        let go = table.snippet(Topic::Basics, Language::Go).expect("go");
        let go_url = state.request_link(go).expect("go link").to_owned();
        assert!(go_url.starts_with("https://go.dev/play/?q="));

        let kotlin = table.snippet(Topic::Basics, Language::Kotlin).expect("kotlin");
        let kotlin_url = state.request_link(kotlin).expect("kotlin link").to_owned();
        assert!(kotlin_url.starts_with("https://play.kotlinlang.org/#code="));

        assert_eq!(state.link().shown_url(), Some(kotlin_url.as_str()));
        assert_ne!(go_url, kotlin_url);
    }

    #[test]
    fn unsupported_request_keeps_previous_link() {
        let table = SnippetTable::builtin();
        let mut state = CheatSheetState::default();
        let python = table.snippet(Topic::Errors, Language::Python).expect("python");
        let python_url = state.request_link(python).expect("python link").to_owned();

        let java = table.snippet(Topic::Errors, Language::Java).expect("java");
        assert_eq!(state.request_link(java), Err(PlaygroundError::NotSupported(Language::Java)));
        assert_eq!(state.link().shown_url(), Some(python_url.as_str()));
    }

    #[test]
    fn changing_topic_keeps_link() {
        let table = SnippetTable::builtin();
        let mut state = CheatSheetState::default();
        let ts = table.snippet(Topic::Basics, Language::TypeScript).expect("ts");
        state.request_link(ts).expect("ts link");

        state.selector_mut().select(Topic::Concurrency);
        assert!(state.link().is_visible());
    }
}
