// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Langsheet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Langsheet and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shareable playground links.
//!
//! A link embeds the snippet text into a fixed URL template of a third-party online runner.
//! Only four languages have a runner; building a link is a pure string transform.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::model::Language;

/// Landing page of the outbound "Tour of Go" action. Unrelated to any snippet.
pub const TOUR_URL: &str = "https://go.dev/tour";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playground {
    GoPlay,
    PythonTutor,
    KotlinPlay,
    TypeScriptPlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoding {
    Percent,
    Base64,
}

impl Playground {
    pub const ALL: [Playground; 4] =
        [Self::GoPlay, Self::PythonTutor, Self::KotlinPlay, Self::TypeScriptPlay];

    pub const fn for_language(language: Language) -> Option<Self> {
        match language {
            Language::Go => Some(Self::GoPlay),
            Language::Python => Some(Self::PythonTutor),
            Language::Kotlin => Some(Self::KotlinPlay),
            Language::TypeScript => Some(Self::TypeScriptPlay),
            Language::Java => None,
        }
    }

    pub const fn language(self) -> Language {
        match self {
            Self::GoPlay => Language::Go,
            Self::PythonTutor => Language::Python,
            Self::KotlinPlay => Language::Kotlin,
            Self::TypeScriptPlay => Language::TypeScript,
        }
    }

    pub const fn service_name(self) -> &'static str {
        match self {
            Self::GoPlay => "Go Playground",
            Self::PythonTutor => "Python Tutor",
            Self::KotlinPlay => "Kotlin Playground",
            Self::TypeScriptPlay => "TypeScript Playground",
        }
    }

    // Every template ends with the encoded snippet.
    const fn url_prefix(self) -> &'static str {
        match self {
            Self::GoPlay => "https://go.dev/play/?q=",
            Self::PythonTutor => "https://pythontutor.com/visualize.html#mode=edit&code=",
            Self::KotlinPlay => "https://play.kotlinlang.org/#code=",
            Self::TypeScriptPlay => "https://www.typescriptlang.org/play/?#code/",
        }
    }

    const fn encoding(self) -> Encoding {
        match self {
            Self::TypeScriptPlay => Encoding::Base64,
            _ => Encoding::Percent,
        }
    }

    /// Builds the link for `code`. Identical input always yields an identical URL.
    pub fn link_for(self, code: &str) -> String {
        let prefix = self.url_prefix();
        match self.encoding() {
            Encoding::Percent => {
                let encoded = urlencoding::encode(code);
                let mut url = String::with_capacity(prefix.len() + encoded.len());
                url.push_str(prefix);
                url.push_str(&encoded);
                url
            }
            Encoding::Base64 => {
                let mut url = String::with_capacity(prefix.len() + (code.len() + 2) / 3 * 4);
                url.push_str(prefix);
                STANDARD.encode_string(code.as_bytes(), &mut url);
                url
            }
        }
    }
}

impl fmt::Display for Playground {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.service_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaygroundError {
    NotSupported(Language),
}

impl fmt::Display for PlaygroundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSupported(language) => {
                write!(f, "no online playground for {}", language.name())
            }
        }
    }
}

impl std::error::Error for PlaygroundError {}

/// Builds a playground URL for `code` written in `language`.
pub fn build_link(code: &str, language: Language) -> Result<String, PlaygroundError> {
    let playground =
        Playground::for_language(language).ok_or(PlaygroundError::NotSupported(language))?;
    Ok(playground.link_for(code))
}
