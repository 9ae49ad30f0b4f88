// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Langsheet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Langsheet and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

pub mod snippet {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Tiny,
        MediumAscii,
        LargeAscii,
        LargeUnicode,
    }

    impl Case {
        pub const ALL: [Case; 4] =
            [Self::Tiny, Self::MediumAscii, Self::LargeAscii, Self::LargeUnicode];

        pub const fn id(self) -> &'static str {
            match self {
                Self::Tiny => "tiny",
                Self::MediumAscii => "medium_ascii",
                Self::LargeAscii => "large_ascii",
                Self::LargeUnicode => "large_unicode",
            }
        }

        const fn lines(self) -> usize {
            match self {
                Self::Tiny => 1,
                Self::MediumAscii => 40,
                Self::LargeAscii | Self::LargeUnicode => 400,
            }
        }
    }

    /// Code-shaped text: indentation, operators, and quotes that all need escaping.
    pub fn fixture(case: Case) -> String {
        if case == Case::Tiny {
            return "a:=10".to_owned();
        }

        let mut out = String::new();
        for idx in 0..case.lines() {
            let indent = "    ".repeat(idx % 4);
            out.push_str(&indent);
            match case {
                Case::LargeUnicode => {
                    out.push_str(&format!("msg{idx} := \"✅ ok {idx} — ❌ fail\" // ß→ü"));
                }
                _ => out.push_str(&format!("if x{idx} >= {idx} && y != \"#{idx}\" {{ z += 1 }}")),
            }
            out.push('\n');
        }
        out
    }

    pub fn checksum(url: &str) -> u64 {
        url.bytes().fold(0u64, |acc, byte| acc.wrapping_mul(131).wrapping_add(u64::from(byte)))
    }
}

pub mod table {
    use langsheet::model::{Language, SnippetTable, Topic};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Builtin,
        Sparse,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Builtin => "builtin",
                Self::Sparse => "sparse",
            }
        }
    }

    /// `Sparse` keeps Go only, so most cards are omitted and some topics are empty.
    pub fn fixture(case: Case) -> SnippetTable {
        let builtin = SnippetTable::builtin();
        match case {
            Case::Builtin => builtin,
            Case::Sparse => SnippetTable::from_entries(
                Topic::ALL
                    .into_iter()
                    .step_by(2)
                    .filter_map(|topic| {
                        builtin.lookup(topic, Language::Go).map(|code| (topic, Language::Go, code))
                    })
                    .collect::<Vec<_>>(),
            ),
        }
    }
}
