// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Langsheet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Langsheet and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

/// Target language of a snippet. Declaration order is the card order within a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    Java,
    Kotlin,
    Go,
    Python,
    TypeScript,
}

impl Language {
    pub const COUNT: usize = 5;

    pub const ALL: [Language; Self::COUNT] =
        [Self::Java, Self::Kotlin, Self::Go, Self::Python, Self::TypeScript];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Java => "java",
            Self::Kotlin => "kotlin",
            Self::Go => "go",
            Self::Python => "python",
            Self::TypeScript => "typescript",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Java => "Java",
            Self::Kotlin => "Kotlin",
            Self::Go => "Go",
            Self::Python => "Python",
            Self::TypeScript => "TypeScript",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        let found =
            Self::ALL.into_iter().find(|language| language.key().eq_ignore_ascii_case(needle));
        match found {
            Some(language) => Ok(language),
            // Common short forms.
            None if needle.eq_ignore_ascii_case("ts") => Ok(Self::TypeScript),
            None if needle.eq_ignore_ascii_case("py") => Ok(Self::Python),
            None if needle.eq_ignore_ascii_case("kt") => Ok(Self::Kotlin),
            None => Err(ParseLanguageError { value: s.to_owned() }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLanguageError {
    value: String,
}

impl fmt::Display for ParseLanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known = Language::ALL.map(Language::key).join(", ");
        write!(f, "unknown language `{}` (expected one of: {known})", self.value)
    }
}

impl std::error::Error for ParseLanguageError {}
