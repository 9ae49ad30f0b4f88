// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Langsheet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Langsheet and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! JSON export of the whole cheat sheet.
//!
//! Shape: `{ title, topics: [{ key, label, snippets: [{ language, code, playground_url? }] }] }`.
//! Topics appear in tab order even when empty; snippets appear in card order.

use serde::Serialize;

use crate::model::{SnippetTable, Topic};
use crate::playground::Playground;
use crate::render::TITLE;

#[derive(Debug, Serialize)]
struct SheetJson<'a> {
    title: &'a str,
    topics: Vec<TopicJson<'a>>,
}

#[derive(Debug, Serialize)]
struct TopicJson<'a> {
    key: &'a str,
    label: &'a str,
    snippets: Vec<SnippetJson<'a>>,
}

#[derive(Debug, Serialize)]
struct SnippetJson<'a> {
    language: &'a str,
    code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    playground_url: Option<String>,
}

fn topic_json(table: &SnippetTable, topic: Topic) -> TopicJson<'static> {
    let snippets = table
        .snippets_for(topic)
        .map(|snippet| SnippetJson {
            language: snippet.language().key(),
            code: snippet.code(),
            playground_url: Playground::for_language(snippet.language())
                .map(|playground| playground.link_for(snippet.code())),
        })
        .collect();
    TopicJson { key: topic.key(), label: topic.label(), snippets }
}

/// Serializes every topic of `table` as pretty-printed JSON.
pub fn export_json(table: &SnippetTable) -> Result<String, serde_json::Error> {
    let sheet = SheetJson {
        title: TITLE,
        topics: Topic::ALL.iter().map(|topic| topic_json(table, *topic)).collect(),
    };
    serde_json::to_string_pretty(&sheet)
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::export_json;
    use crate::model::{Language, SnippetTable, Topic};
    use crate::playground::build_link;

    fn export_value(table: &SnippetTable) -> Value {
        let json = export_json(table).expect("export");
        serde_json::from_str(&json).expect("valid json")
    }

    #[test]
    fn export_lists_every_topic_in_tab_order() {
        let value = export_value(&SnippetTable::builtin());
        let keys = value["topics"]
            .as_array()
            .expect("topics")
            .iter()
            .map(|topic| topic["key"].as_str().expect("key").to_owned())
            .collect::<Vec<_>>();
        let expected = Topic::ALL.iter().map(|topic| topic.key().to_owned()).collect::<Vec<_>>();
        assert_eq!(keys, expected);
        assert_eq!(value["topics"][6]["label"], "GoF");
    }

    #[test]
    fn export_carries_links_only_for_supported_languages() {
        let table = SnippetTable::builtin();
        let value = export_value(&table);
        let snippets = value["topics"][0]["snippets"].as_array().expect("snippets");
        assert_eq!(snippets.len(), Language::COUNT);

        let java = &snippets[0];
        assert_eq!(java["language"], "java");
        assert!(java.get("playground_url").is_none());

        let go = &snippets[2];
        assert_eq!(go["language"], "go");
        let code = table.lookup(Topic::Basics, Language::Go).expect("go");
        assert_eq!(go["code"], code);
        assert_eq!(go["playground_url"], build_link(code, Language::Go).expect("link"));
    }

    #[test]
    fn empty_topics_export_empty_snippet_lists() {
        let table = SnippetTable::from_entries([(Topic::Gof, Language::Kotlin, "object Single")]);
        let value = export_value(&table);
        assert_eq!(value["topics"][0]["snippets"].as_array().map(Vec::len), Some(0));
        assert_eq!(value["topics"][6]["snippets"][0]["code"], "object Single");
    }
}
