// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Langsheet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Langsheet and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Langsheet CLI entrypoint.
//!
//! By default this runs the interactive cheat sheet. `--print`, `--link`, and `--json` write to
//! stdout instead and never touch the terminal mode.

use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use langsheet::format::export_json;
use langsheet::model::{Language, SnippetTable, Topic};
use langsheet::playground::{build_link, PlaygroundError};
use langsheet::render::{render_sheet_text, SheetRenderOptions};
use langsheet::ui::CheatSheetState;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--topic <topic>] [--log-file <path>]\n  {program} --print <topic> [--log-file <path>]\n  {program} --link <topic> <language> [--log-file <path>]\n  {program} --json [--log-file <path>]\n\nWithout a mode flag the interactive cheat sheet starts (on --topic, default basics).\n--print writes one topic page as plain text.\n--link prints the playground URL of one snippet (kotlin, go, python, typescript).\n--json writes every topic and snippet as JSON.\n\nTopics: {}\nLanguages: {}\n\n--log-file appends logs to <path> (filtered by RUST_LOG, default info).",
        Topic::ALL.map(Topic::key).join(", "),
        Language::ALL.map(Language::key).join(", "),
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    topic: Option<String>,
    print: Option<String>,
    link: Option<(String, String)>,
    json: bool,
    log_file: Option<PathBuf>,
}

impl CliOptions {
    fn is_interactive(&self) -> bool {
        self.print.is_none() && self.link.is_none() && !self.json
    }
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--topic" => {
                if options.topic.is_some() {
                    return Err(());
                }
                options.topic = Some(args.next().ok_or(())?);
            }
            "--print" => {
                if options.print.is_some() {
                    return Err(());
                }
                options.print = Some(args.next().ok_or(())?);
            }
            "--link" => {
                if options.link.is_some() {
                    return Err(());
                }
                let topic = args.next().ok_or(())?;
                let language = args.next().ok_or(())?;
                options.link = Some((topic, language));
            }
            "--json" => {
                if options.json {
                    return Err(());
                }
                options.json = true;
            }
            "--log-file" => {
                if options.log_file.is_some() {
                    return Err(());
                }
                options.log_file = Some(PathBuf::from(args.next().ok_or(())?));
            }
            _ => return Err(()),
        }
    }

    let modes = usize::from(options.print.is_some())
        + usize::from(options.link.is_some())
        + usize::from(options.json);
    if modes > 1 {
        return Err(());
    }

    if options.topic.is_some() && !options.is_interactive() {
        return Err(());
    }

    Ok(options)
}

#[derive(Debug)]
enum CliError {
    MissingSnippet { topic: Topic, language: Language },
    Playground(PlaygroundError),
    Json(serde_json::Error),
    LogFile { path: PathBuf, source: io::Error },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSnippet { topic, language } => {
                write!(f, "no {} snippet for topic {}", language.name(), topic.label())
            }
            Self::Playground(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "json export failed: {err}"),
            Self::LogFile { path, source } => {
                write!(f, "cannot open log file {}: {source}", path.display())
            }
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingSnippet { .. } => None,
            Self::Playground(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::LogFile { source, .. } => Some(source),
        }
    }
}

impl From<PlaygroundError> for CliError {
    fn from(err: PlaygroundError) -> Self {
        Self::Playground(err)
    }
}

/// Interactive mode logs nowhere unless a log file is given; the TUI owns the terminal.
fn init_logging(log_file: Option<&Path>, interactive: bool) -> Result<(), Box<dyn Error>> {
    let default_filter = match (log_file, interactive) {
        (Some(_), _) => "info",
        (None, true) => return Ok(()),
        (None, false) => "off",
    };

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if let Some(path) = log_file {
        let file = File::options()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| CliError::LogFile { path: path.to_path_buf(), source })?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.try_init()?;
    Ok(())
}

fn print_topic(table: &SnippetTable, topic: Topic) -> String {
    let state = CheatSheetState::new(topic);
    render_sheet_text(table, &state, SheetRenderOptions::default())
}

fn link_for(table: &SnippetTable, topic: Topic, language: Language) -> Result<String, CliError> {
    let code = table.lookup(topic, language).ok_or(CliError::MissingSnippet { topic, language })?;
    let url = build_link(code, language)?;
    log::info!("built {language} link for {topic} ({} bytes)", url.len());
    Ok(url)
}

fn export(table: &SnippetTable) -> Result<String, CliError> {
    export_json(table).map_err(CliError::Json)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "langsheet".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_logging(options.log_file.as_deref(), options.is_interactive())?;
        let table = SnippetTable::builtin();

        if let Some(topic) = options.print.as_deref() {
            let topic: Topic = topic.parse()?;
            log::info!("printing topic {topic}");
            print!("{}", print_topic(&table, topic));
            return Ok(());
        }

        if let Some((topic, language)) = options.link.as_ref() {
            let topic: Topic = topic.parse()?;
            let language: Language = language.parse()?;
            println!("{}", link_for(&table, topic, language)?);
            return Ok(());
        }

        if options.json {
            log::info!("exporting {} snippets as json", table.len());
            println!("{}", export(&table)?);
            return Ok(());
        }

        let topic = match options.topic.as_deref() {
            Some(topic) => topic.parse()?,
            None => Topic::DEFAULT,
        };
        log::info!("starting interactive sheet on {topic}");
        langsheet::tui::run_with_table(table, topic)
    })();

    if let Err(err) = result {
        eprintln!("langsheet: {err}");
        std::process::exit(1);
    }
}
