// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Langsheet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Langsheet and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use langsheet::format::export_json;
use langsheet::model::Topic;
use langsheet::render::{render_sheet_text, render_topic_text, topic_page, SheetRenderOptions};
use langsheet::ui::CheatSheetState;

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `render.page`, `render.text`, `render.json`
// - Case IDs are table fixture ids (`builtin`, `sparse`), optionally suffixed with a topic key.
fn benches_render(c: &mut Criterion) {
    let cases = [fixtures::table::Case::Builtin, fixtures::table::Case::Sparse];

    let mut group = c.benchmark_group("render.page");
    for case in cases {
        let table = fixtures::table::fixture(case);
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let cards = Topic::ALL
                    .iter()
                    .map(|topic| topic_page(&table, black_box(*topic)).cards().len())
                    .sum::<usize>();
                black_box(cards)
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("render.text");
    for case in cases {
        let table = fixtures::table::fixture(case);
        for topic in [Topic::Basics, Topic::Visibility] {
            let table = table.clone();
            group.bench_function(format!("{}_{}", case.id(), topic.key()), move |b| {
                b.iter(|| black_box(render_topic_text(&table, black_box(topic), 100).len()))
            });
        }
        let state = CheatSheetState::new(Topic::Errors);
        group.bench_function(format!("{}_sheet", case.id()), move |b| {
            b.iter(|| {
                let text = render_sheet_text(&table, &state, SheetRenderOptions::default());
                black_box(text.len())
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("render.json");
    for case in cases {
        let table = fixtures::table::fixture(case);
        group.bench_function(case.id(), move |b| {
            b.iter(|| black_box(export_json(black_box(&table)).expect("export_json").len()))
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_render
}
criterion_main!(benches);
