// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Langsheet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Langsheet and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Langsheet: a tabbed Java → Kotlin → Go → Python → TypeScript cheat sheet for the terminal.
//!
//! The domain is small: a fixed [`model::SnippetTable`], a [`ui::TopicSelector`] holding the
//! active topic, and [`playground::build_link`] turning a snippet into a shareable runner URL.

pub mod format;
pub mod model;
pub mod playground;
pub mod render;
pub mod tui;
pub mod ui;
