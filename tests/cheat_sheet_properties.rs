// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Langsheet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Langsheet and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use langsheet::format::export_json;
use langsheet::model::{Language, SnippetTable, Topic};
use langsheet::playground::{build_link, Playground, PlaygroundError};
use langsheet::render::{render_topic_text, topic_page, TopicPage, PLACEHOLDER};
use langsheet::ui::{CheatSheetState, TopicSelector};
use rstest::rstest;

fn all_topics() -> impl Iterator<Item = Topic> {
    Topic::ALL.into_iter()
}

#[test]
fn selecting_any_topic_shows_only_its_entries() {
    let table = SnippetTable::builtin();
    let mut selector = TopicSelector::default();

    for topic in all_topics() {
        selector.select(topic);
        assert_eq!(selector.current(), topic);

        let text = render_topic_text(&table, selector.current(), 80);
        for other in all_topics().filter(|other| *other != topic) {
            for language in Language::ALL {
                let Some(code) = table.lookup(other, language) else {
                    continue;
                };
                // Very short snippets may legitimately recur inside longer ones.
                if code.lines().count() > 3 {
                    assert!(!text.contains(code), "{other}/{language} leaked into {topic}");
                }
            }
        }
    }
}

#[test]
fn builtin_table_covers_every_pair_with_card_order() {
    let table = SnippetTable::builtin();
    assert_eq!(table.len(), Topic::COUNT * Language::COUNT);
    for topic in all_topics() {
        let page = topic_page(&table, topic);
        let order = page.cards().iter().map(|card| card.language).collect::<Vec<_>>();
        assert_eq!(order, Language::ALL.to_vec(), "{topic}");
    }
}

#[test]
fn absent_pairs_are_omitted_and_empty_topics_show_placeholder() {
    let table = SnippetTable::from_entries([
        (Topic::Functions, Language::Kotlin, "fun f() = 1"),
        (Topic::Functions, Language::TypeScript, "const f = () => 1;"),
    ]);
    assert_eq!(table.lookup(Topic::Functions, Language::Go), None);

    let page = topic_page(&table, Topic::Functions);
    let languages = page.cards().iter().map(|card| card.language).collect::<Vec<_>>();
    assert_eq!(languages, vec![Language::Kotlin, Language::TypeScript]);

    for topic in all_topics().filter(|topic| *topic != Topic::Functions) {
        assert_eq!(topic_page(&table, topic), TopicPage::ComingSoon);
        assert!(render_topic_text(&table, topic, 60).contains(PLACEHOLDER));
    }
}

#[test]
fn basics_go_is_not_the_datatypes_snippet() {
    let table = SnippetTable::builtin();
    let basics = table.lookup(Topic::Basics, Language::Go).expect("basics/go");
    assert!(basics.starts_with("package main"));
    assert!(!basics.contains("fmt.Println(i, f, b, c, s)"));

    let holders = all_topics()
        .flat_map(|topic| Language::ALL.into_iter().map(move |language| (topic, language)))
        .filter(|(topic, language)| {
            table
                .lookup(*topic, *language)
                .is_some_and(|code| code.contains("fmt.Println(i, f, b, c, s)"))
        })
        .collect::<Vec<_>>();
    assert_eq!(holders, vec![(Topic::Datatypes, Language::Go)]);
}

#[test]
fn go_link_matches_known_vector() {
    assert_eq!(
        build_link("a:=10", Language::Go),
        Ok("https://go.dev/play/?q=a%3A%3D10".to_owned())
    );
}

#[rstest]
#[case(Topic::Basics)]
#[case(Topic::Visibility)]
#[case(Topic::Gof)]
#[case(Topic::Concurrency)]
fn links_are_deterministic_for_every_supported_card(#[case] topic: Topic) {
    let table = SnippetTable::builtin();
    for card in topic_page(&table, topic).cards() {
        match card.playground {
            Some(playground) => {
                let first = build_link(card.code, card.language).expect("supported");
                assert_eq!(build_link(card.code, card.language).as_ref(), Ok(&first));
                assert_eq!(playground.link_for(card.code), first);
            }
            None => assert_eq!(
                build_link(card.code, card.language),
                Err(PlaygroundError::NotSupported(card.language))
            ),
        }
    }
}

#[test]
fn only_java_lacks_a_playground() {
    let unsupported = Language::ALL
        .into_iter()
        .filter(|language| Playground::for_language(*language).is_none())
        .collect::<Vec<_>>();
    assert_eq!(unsupported, vec![Language::Java]);
}

#[test]
fn second_link_request_replaces_first() {
    let table = SnippetTable::builtin();
    let mut state = CheatSheetState::default();

    let python = table.snippet(Topic::Functions, Language::Python).expect("python");
    let first = state.request_link(python).expect("python link").to_owned();
    let go = table.snippet(Topic::Functions, Language::Go).expect("go");
    let second = state.request_link(go).expect("go link").to_owned();

    assert_ne!(first, second);
    assert_eq!(state.link().shown_url(), Some(second.as_str()));
}

#[test]
fn json_export_round_trips_every_snippet() {
    let table = SnippetTable::builtin();
    let value: serde_json::Value =
        serde_json::from_str(&export_json(&table).expect("export")).expect("json");

    let topics = value["topics"].as_array().expect("topics");
    assert_eq!(topics.len(), Topic::COUNT);
    for (topic, topic_value) in all_topics().zip(topics) {
        let snippets = topic_value["snippets"].as_array().expect("snippets");
        for (language, snippet) in Language::ALL.into_iter().zip(snippets) {
            assert_eq!(snippet["code"].as_str(), table.lookup(topic, language));
        }
    }
}
