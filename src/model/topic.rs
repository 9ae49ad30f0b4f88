// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Langsheet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Langsheet and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

/// One tab of the cheat sheet.
///
/// The declaration order is the display order of the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Topic {
    Basics,
    Datatypes,
    Visibility,
    Functions,
    Objects,
    Interfaces,
    Gof,
    Errors,
    Concurrency,
}

impl Topic {
    pub const COUNT: usize = 9;

    pub const ALL: [Topic; Self::COUNT] = [
        Self::Basics,
        Self::Datatypes,
        Self::Visibility,
        Self::Functions,
        Self::Objects,
        Self::Interfaces,
        Self::Gof,
        Self::Errors,
        Self::Concurrency,
    ];

    /// Topic shown when the view opens.
    pub const DEFAULT: Topic = Self::Basics;

    pub const fn key(self) -> &'static str {
        match self {
            Self::Basics => "basics",
            Self::Datatypes => "datatypes",
            Self::Visibility => "visibility",
            Self::Functions => "functions",
            Self::Objects => "objects",
            Self::Interfaces => "interfaces",
            Self::Gof => "gof",
            Self::Errors => "errors",
            Self::Concurrency => "concurrency",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Basics => "Basics",
            Self::Datatypes => "Datatypes",
            Self::Visibility => "Visibility",
            Self::Functions => "Functions",
            Self::Objects => "Objects",
            Self::Interfaces => "Interfaces",
            Self::Gof => "GoF",
            Self::Errors => "Errors",
            Self::Concurrency => "Concurrency",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::COUNT - 1) % Self::COUNT]
    }
}

impl Default for Topic {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Topic {
    type Err = ParseTopicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|topic| topic.key().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseTopicError { value: s.to_owned() })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTopicError {
    value: String,
}

impl fmt::Display for ParseTopicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known = Topic::ALL.map(Topic::key).join(", ");
        write!(f, "unknown topic `{}` (expected one of: {known})", self.value)
    }
}

impl std::error::Error for ParseTopicError {}
