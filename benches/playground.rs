// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Langsheet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Langsheet and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use langsheet::model::{Language, SnippetTable};
use langsheet::playground::{build_link, Playground};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `playground.<service key>`, `playground.sheet`
// - Case IDs are the fixture ids (`tiny`, `medium_ascii`, `large_ascii`, `large_unicode`) and
//   `all_supported`; rename neither when the wiring changes.
fn benches_playground(c: &mut Criterion) {
    for playground in Playground::ALL {
        let mut group = c.benchmark_group(format!("playground.{}", playground.language().key()));
        for case in fixtures::snippet::Case::ALL {
            let code = fixtures::snippet::fixture(case);
            group.bench_function(case.id(), move |b| {
                b.iter(|| {
                    let url = playground.link_for(black_box(&code));
                    black_box(fixtures::snippet::checksum(&url))
                })
            });
        }
        group.finish();
    }

    let mut group = c.benchmark_group("playground.sheet");
    let table = SnippetTable::builtin();
    group.bench_function("all_supported", move |b| {
        b.iter(|| {
            let mut total = 0usize;
            for topic in langsheet::model::Topic::ALL {
                for snippet in table.snippets_for(topic) {
                    if snippet.language() == Language::Java {
                        continue;
                    }
                    let url = build_link(black_box(snippet.code()), snippet.language())
                        .expect("supported language");
                    total += url.len();
                }
            }
            black_box(total)
        })
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_playground
}
criterion_main!(benches);
