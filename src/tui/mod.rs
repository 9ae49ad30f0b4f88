// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Langsheet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Langsheet and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Interactive cheat sheet shell (ratatui + crossterm): a topic tab bar, one card per language,
//! and a link panel for the last playground URL.

use std::{
    env,
    error::Error,
    fmt, io,
    process::{Command, Stdio},
    thread,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
};

use crate::model::{Language, SnippetTable, Topic};
use crate::playground::TOUR_URL;
use crate::render::text::truncate_with_ellipsis;
use crate::render::{
    topic_page, Card, TopicPage, LINK_LABEL, PLACEHOLDER, PLAYGROUND_ACTION_LABEL, TITLE,
    TOUR_LABEL,
};
use crate::ui::CheatSheetState;

mod theme;

pub use theme::ThemeError;
use theme::TuiTheme;

const FOOTER_BRAND: &str = "🅻 🅰 🅽 🅶 🆂 🅷 🅴 🅴 🆃 ";
const LINK_PANEL_HEIGHT: u16 = 5;
const TOAST_TTL: Duration = Duration::from_secs(3);

/// Runs the interactive cheat sheet on `table`, starting at `initial`.
pub fn run_with_table(table: SnippetTable, initial: Topic) -> Result<(), Box<dyn Error>> {
    let theme = TuiTheme::from_env()?;
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(table, initial, theme);

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                    if let Some(action) = app.take_external_action() {
                        app.execute_external_action(&action);
                    }
                }
                _ => {}
            }
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(app.theme.base_style()), area);

    let link_url = app.state.link().shown_url().map(str::to_owned);
    let link_height = if link_url.is_some() { LINK_PANEL_HEIGHT } else { 0 };
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(link_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let title = Paragraph::new(Line::styled(TITLE, app.theme.title_style()))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout[0]);
    render_tab_bar(frame, layout[1], &TabBarProps::for_topic(app.state.topic()), &app.theme);
    render_page(frame, layout[2], app);
    if let Some(url) = link_url.as_deref() {
        render_link_panel(frame, layout[3], url, &app.theme);
    }
    frame.render_widget(
        Paragraph::new(tour_line(&app.theme)).alignment(Alignment::Center),
        layout[4],
    );

    let toast = match app.toast.as_ref() {
        Some(toast) if toast.expires_at > Instant::now() => Some(toast.message.clone()),
        _ => None,
    };
    if toast.is_none() {
        app.toast = None;
    }
    let status_area = layout[5];
    let compact = footer_uses_compact_mode(status_area);
    let status = Paragraph::new(footer_help_line(app, toast.as_deref(), compact));
    frame.render_widget(status, status_area);
    let brand = Paragraph::new(footer_brand_line(&app.theme)).alignment(Alignment::Right);
    frame.render_widget(brand, status_area);

    if app.show_help {
        render_help(frame, app, area);
    }
}

// Tab bar, card, link panel, footer and help rendering helpers.
include!("chrome.rs");

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ExternalAction {
    OpenUrl(String),
}

impl fmt::Display for ExternalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenUrl(url) => write!(f, "opening {} bytes of URL", url.len()),
        }
    }
}

struct App {
    table: SnippetTable,
    state: CheatSheetState,
    theme: TuiTheme,
    page: TopicPage,
    card_cursor: usize,
    first_card: usize,
    code_scroll: u16,
    cards_viewport_height: u16,
    show_help: bool,
    help_scroll: u16,
    help_viewport_height: u16,
    toast: Option<Toast>,
    pending_external_action: Option<ExternalAction>,
    should_quit: bool,
}

impl App {
    fn new(table: SnippetTable, initial: Topic, theme: TuiTheme) -> Self {
        let page = topic_page(&table, initial);
        Self {
            table,
            state: CheatSheetState::new(initial),
            theme,
            page,
            card_cursor: 0,
            first_card: 0,
            code_scroll: 0,
            cards_viewport_height: 0,
            show_help: false,
            help_scroll: 0,
            help_viewport_height: 0,
            toast: None,
            pending_external_action: None,
            should_quit: false,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_key_code(key.code) {
            self.should_quit = true;
        }
    }

    /// Applies one key press. Returns `true` when the app should quit.
    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        if self.show_help {
            match code {
                KeyCode::Esc | KeyCode::Char('?') => self.show_help = false,
                KeyCode::Char('q') => return true,
                KeyCode::Down | KeyCode::Char('j') => self.help_scroll_by(1),
                KeyCode::Up | KeyCode::Char('k') => self.help_scroll_by(-1),
                KeyCode::PageDown => self.help_scroll_page(1),
                KeyCode::PageUp => self.help_scroll_page(-1),
                KeyCode::Home => self.help_scroll = 0,
                KeyCode::End => self.help_scroll = u16::MAX,
                _ => {}
            }
            return false;
        }

        if let Some(topic) = tab_request_for_key(self.state.topic(), code) {
            self.select_topic(topic);
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('?') => self.toggle_help(),
            KeyCode::Down | KeyCode::Char('j') => self.move_card_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_card_cursor(-1),
            KeyCode::PageDown => self.scroll_code_page(1),
            KeyCode::PageUp => self.scroll_code_page(-1),
            KeyCode::Home => self.set_card_cursor(0),
            KeyCode::End => self.set_card_cursor(usize::MAX),
            KeyCode::Char('p') | KeyCode::Enter => self.request_link(),
            KeyCode::Char('y') => self.yank_link(),
            KeyCode::Char('o') => self.queue_open_link(),
            KeyCode::Char('t') => self.queue_open_url(TOUR_URL),
            _ => {}
        }

        false
    }

    fn select_topic(&mut self, topic: Topic) {
        if !self.state.selector_mut().select(topic) {
            return;
        }
        log::debug!("topic changed to {topic}");
        self.page = topic_page(&self.table, topic);
        self.card_cursor = 0;
        self.first_card = 0;
        self.code_scroll = 0;
    }

    fn cursor_card(&self) -> Option<&Card> {
        self.page.cards().get(self.card_cursor)
    }

    fn set_card_cursor(&mut self, idx: usize) {
        let last = self.page.cards().len().saturating_sub(1);
        let idx = idx.min(last);
        if idx != self.card_cursor {
            self.card_cursor = idx;
            self.code_scroll = 0;
        }
    }

    fn move_card_cursor(&mut self, delta: i32) {
        let next = if delta < 0 {
            self.card_cursor.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            self.card_cursor.saturating_add(delta as usize)
        };
        self.set_card_cursor(next);
    }

    // Scrolls the code of the focused card; the last line stays reachable.
    fn scroll_code_page(&mut self, direction: i32) {
        let Some(card) = self.cursor_card() else {
            return;
        };
        let max_scroll = card.code.lines().count().saturating_sub(1).min(u16::MAX as usize) as u16;
        let step = self.cards_viewport_height.saturating_sub(3).max(1);
        self.code_scroll = if direction < 0 {
            self.code_scroll.saturating_sub(step)
        } else {
            self.code_scroll.saturating_add(step).min(max_scroll)
        };
    }

    fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        if self.show_help {
            self.help_scroll = 0;
        }
    }

    fn help_scroll_by(&mut self, delta: i32) {
        if delta < 0 {
            self.help_scroll = self.help_scroll.saturating_sub(delta.unsigned_abs() as u16);
        } else {
            self.help_scroll = self.help_scroll.saturating_add(delta as u16);
        }
    }

    fn help_scroll_page(&mut self, direction: i32) {
        let page = self.help_viewport_height.max(1).saturating_sub(1) as i32;
        self.help_scroll_by(direction.signum() * page.max(1));
    }

    fn request_link(&mut self) {
        let Some(card) = self.cursor_card().copied() else {
            self.set_toast("Nothing to link on this topic");
            return;
        };
        let topic = self.state.topic();
        let Some(playground) = card.playground else {
            log::debug!("link requested for {topic}/{} without a playground", card.language);
            self.set_toast(format!("No online playground for {}", card.language.name()));
            return;
        };
        let Some(snippet) = self.table.snippet(topic, card.language) else {
            return;
        };

        match self.state.request_link(snippet) {
            Ok(url) => {
                log::info!(
                    "built {playground} link for {topic}/{} ({} bytes)",
                    card.language,
                    url.len()
                );
                self.set_toast(format!("{playground} URL ready (y copy, o open)"));
            }
            Err(err) => {
                log::debug!("link request rejected: {err}");
                self.set_toast(err.to_string());
            }
        }
    }

    fn yank_link(&mut self) {
        let Some(url) = self.state.link().shown_url() else {
            self.set_toast("No playground URL yet (press p)");
            return;
        };

        match copy_to_clipboard(url) {
            Ok(backend) => self.set_toast(format!("Copied playground URL ({backend})")),
            Err(err) => {
                log::warn!("clipboard copy failed: {err}");
                self.set_toast(format!("Clipboard error: {err}"));
            }
        }
    }

    fn queue_open_link(&mut self) {
        match self.state.link().shown_url().map(str::to_owned) {
            Some(url) => self.pending_external_action = Some(ExternalAction::OpenUrl(url)),
            None => self.set_toast("No playground URL yet (press p)"),
        }
    }

    fn queue_open_url(&mut self, url: &str) {
        self.pending_external_action = Some(ExternalAction::OpenUrl(url.to_owned()));
    }

    fn take_external_action(&mut self) -> Option<ExternalAction> {
        self.pending_external_action.take()
    }

    /// Hands the action to the host and returns at once; failures are only logged.
    fn execute_external_action(&mut self, action: &ExternalAction) {
        match action {
            ExternalAction::OpenUrl(url) => {
                let opener = resolve_opener_command();
                match launch_opener_command(&opener, url) {
                    Ok(()) => {
                        log::info!("handed URL to `{opener}`");
                        self.set_toast("Opening in browser");
                    }
                    Err(err) => log::warn!("{action} with `{opener}` failed: {err}"),
                }
            }
        }
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast =
            Some(Toast { message: message.into(), expires_at: Instant::now() + TOAST_TTL });
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

fn copy_to_clipboard(text: &str) -> Result<&'static str, String> {
    let mut stdout = io::stdout();
    execute!(stdout, Print(osc52_sequence(text))).map_err(|err| err.to_string())?;
    Ok("osc52")
}

fn osc52_sequence(text: &str) -> String {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}

fn resolve_opener_command() -> String {
    env::var("BROWSER")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default_opener().to_owned())
}

fn default_opener() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

/// Spawns the opener detached from the terminal. The exit status is never observed by the UI.
fn launch_opener_command(command: &str, url: &str) -> io::Result<()> {
    if url.starts_with('-') {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "refusing to open a URL that looks like an option",
        ));
    }

    let mut child = Command::new("sh")
        .arg("-lc")
        .arg(format!("{command} {}", shell_single_quote(url)))
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    // Reaped off the UI thread.
    thread::spawn(move || {
        let _ = child.wait();
    });
    Ok(())
}

fn shell_single_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}
