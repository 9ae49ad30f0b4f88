// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Langsheet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Langsheet and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Topics and languages are closed enums; the snippet table maps each pair to an optional
//! literal code block.

pub mod language;
mod snippets;
pub mod table;
pub mod topic;

pub use language::{Language, ParseLanguageError};
pub use table::{Snippet, SnippetTable};
pub use topic::{ParseTopicError, Topic};
