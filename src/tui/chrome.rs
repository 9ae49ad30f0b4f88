// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Langsheet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Langsheet and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Presentation pieces take explicit props; only `App` owns state.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TabBarProps {
    labels: Vec<String>,
    active: usize,
}

impl TabBarProps {
    fn for_topic(active: Topic) -> Self {
        let labels = Topic::ALL
            .iter()
            .map(|topic| format!("{} {}", topic.index() + 1, topic.label()))
            .collect();
        Self { labels, active: active.index() }
    }
}

fn render_tab_bar(frame: &mut Frame<'_>, area: Rect, props: &TabBarProps, theme: &TuiTheme) {
    let tabs = Tabs::new(props.labels.clone())
        .select(props.active)
        .style(theme.tab_style())
        .highlight_style(theme.selection_style())
        .divider("│");
    frame.render_widget(tabs, area);
}

/// Topic the tab bar asks for on `code`, if the key addresses the tabs at all.
///
/// The owner applies the request; the bar itself holds no selection.
fn tab_request_for_key(current: Topic, code: KeyCode) -> Option<Topic> {
    match code {
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Some(current.next()),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => Some(current.previous()),
        KeyCode::Char(ch @ '1'..='9') => Topic::from_index(ch as usize - '1' as usize),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CardProps<'a> {
    language: Language,
    title: &'a str,
    body: &'a str,
    active: bool,
    playground_hint: bool,
    scroll: u16,
}

impl<'a> CardProps<'a> {
    fn from_card(card: &'a Card, active: bool, scroll: u16) -> Self {
        Self {
            language: card.language,
            title: card.language.name(),
            body: card.code,
            active,
            playground_hint: card.playground.is_some(),
            scroll,
        }
    }
}

// Code lines plus the two border rows.
fn card_height(code: &str) -> u16 {
    code.lines().count().saturating_add(2).min(u16::MAX as usize) as u16
}

/// First card to draw so that `cursor` stays on screen, keeping `first` when it already does.
fn card_window(heights: &[u16], cursor: usize, first: usize, viewport: u16) -> usize {
    if heights.is_empty() {
        return 0;
    }
    let cursor = cursor.min(heights.len() - 1);
    let mut first = first.min(cursor);
    while first < cursor {
        let used: u32 = heights[first..=cursor].iter().map(|height| u32::from(*height)).sum();
        if used <= u32::from(viewport) {
            break;
        }
        first += 1;
    }
    first
}

fn render_card(frame: &mut Frame<'_>, area: Rect, props: &CardProps<'_>, theme: &TuiTheme) {
    let marker = if props.active { "▶ " } else { "" };
    let title_width = area.width.saturating_sub(4) as usize;
    let title = truncate_with_ellipsis(&format!("{marker}{}", props.title), title_width);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.card_border_style(props.language, props.active))
        .title(format!(" {title} "));
    if props.playground_hint {
        block = block.title(
            Line::from(vec![
                Span::styled(" [p]", theme.footer_key_style()),
                Span::raw(format!(" {PLAYGROUND_ACTION_LABEL} ")),
            ])
            .alignment(Alignment::Right),
        );
    }

    let body = Paragraph::new(props.body)
        .style(theme.base_style())
        .block(block)
        .scroll((props.scroll, 0));
    frame.render_widget(body, area);
}

fn render_page(frame: &mut Frame<'_>, area: Rect, app: &mut App) {
    let heights = app.page.cards().iter().map(|card| card_height(card.code)).collect::<Vec<_>>();
    app.cards_viewport_height = area.height;
    app.first_card = card_window(&heights, app.card_cursor, app.first_card, area.height);
    let app = &*app;

    if app.page.is_coming_soon() {
        let row = Rect { y: area.y + area.height / 2, height: area.height.min(1), ..area };
        let placeholder = Paragraph::new(Line::styled(PLACEHOLDER, app.theme.dim_style()))
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, row);
        return;
    }

    let bottom = area.y.saturating_add(area.height);
    let mut y = area.y;
    for (idx, card) in app.page.cards().iter().enumerate().skip(app.first_card) {
        if y >= bottom {
            break;
        }
        let height = heights[idx].min(bottom - y);
        let active = idx == app.card_cursor;
        let scroll = if active { app.code_scroll } else { 0 };
        let rect = Rect { y, height, ..area };
        render_card(frame, rect, &CardProps::from_card(card, active, scroll), &app.theme);
        y += height;
    }
}

fn render_link_panel(frame: &mut Frame<'_>, area: Rect, url: &str, theme: &TuiTheme) {
    let key_style = theme.footer_key_style();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.link_border_style())
        .title(format!(" {PLAYGROUND_ACTION_LABEL} "))
        .title(
            Line::from(vec![
                Span::styled(" y", key_style),
                Span::raw(" copy  "),
                Span::styled("o", key_style),
                Span::raw(" open "),
            ])
            .alignment(Alignment::Right),
        );

    // One row holds the label; the URL wraps over the rest and is cut with an ellipsis.
    let inner_width = area.width.saturating_sub(2) as usize;
    let url_rows = area.height.saturating_sub(3).max(1) as usize;
    let shown = truncate_with_ellipsis(url, inner_width.saturating_mul(url_rows));
    let text = Text::from(vec![
        Line::styled(LINK_LABEL, theme.dim_style()),
        Line::styled(shown, theme.link_style()),
    ]);

    let panel = Paragraph::new(text).block(block).wrap(Wrap { trim: false });
    frame.render_widget(panel, area);
}

fn tour_line(theme: &TuiTheme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{TOUR_LABEL}: "), theme.dim_style()),
        Span::styled(TOUR_URL, theme.link_style()),
        Span::raw("  "),
        Span::styled("[t]", theme.footer_key_style()),
    ])
}

fn footer_uses_compact_mode(area: Rect) -> bool {
    area.width < 90
}

fn footer_help_line(app: &App, toast: Option<&str>, compact: bool) -> Line<'static> {
    let theme = &app.theme;
    let mut spans = Vec::<Span<'static>>::new();
    let link_disabled = !app.cursor_card().is_some_and(|card| card.playground.is_some());
    let url_disabled = app.state.link().shown_url().is_none();

    if compact {
        push_footer_entry_maybe_disabled(&mut spans, theme, "LINK", "p", link_disabled);
        push_footer_entry(&mut spans, theme, "HELP", "?");
        push_footer_entry(&mut spans, theme, "QUIT", "q");
    } else {
        push_footer_entry(&mut spans, theme, "TOPIC", "←/→");
        push_footer_entry(&mut spans, theme, "CARD", "↑/↓");
        push_footer_entry_maybe_disabled(&mut spans, theme, "LINK", "p", link_disabled);
        push_footer_entry_maybe_disabled(&mut spans, theme, "COPY", "y", url_disabled);
        push_footer_entry_maybe_disabled(&mut spans, theme, "OPEN", "o", url_disabled);
        push_footer_entry(&mut spans, theme, "TOUR", "t");
        push_footer_entry(&mut spans, theme, "HELP", "?");
        push_footer_entry(&mut spans, theme, "QUIT", "q");
    }

    if let Some(message) = toast.map(str::trim).filter(|message| !message.is_empty()) {
        spans.push(Span::styled(" | ", theme.footer_label_style()));
        spans.push(Span::styled("Toast:", theme.footer_label_style()));
        spans.push(Span::raw(message.to_owned()));
    }

    Line::from(spans)
}

fn footer_brand_line(theme: &TuiTheme) -> Line<'static> {
    Line::from(vec![Span::styled(FOOTER_BRAND, theme.brand_style())])
}

fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let vertical_margin = (100u16.saturating_sub(height_percent)) / 2;
    let horizontal_margin = (100u16.saturating_sub(width_percent)) / 2;

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(vertical_margin),
            Constraint::Percentage(height_percent),
            Constraint::Percentage(vertical_margin),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(horizontal_margin),
            Constraint::Percentage(width_percent),
            Constraint::Percentage(horizontal_margin),
        ])
        .split(vertical[1])[1]
}

fn help_kv(key: &str, desc: &str, key_width: usize, key_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key:>key_width$}"), key_style),
        Span::raw("  "),
        Span::raw(desc.to_owned()),
    ])
}

const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Topics",
        &[
            ("←/→, h/l", "Previous/next topic"),
            ("Tab/Shift-Tab", "Next/previous topic"),
            ("1..9", "Jump to topic"),
        ],
    ),
    (
        "Cards",
        &[
            ("↑/↓, j/k", "Move card cursor"),
            ("Home/End", "First/last card"),
            ("PgUp/PgDn", "Scroll the focused card"),
        ],
    ),
    (
        "Playground",
        &[
            ("p/Enter", "Build a playground URL for the focused card"),
            ("y", "Copy the URL to the clipboard (OSC 52)"),
            ("o", "Open the URL in the browser"),
            ("t", "Open the Tour of Go"),
        ],
    ),
    ("Global", &[("?", "Help (toggle)"), ("q", "Quit")]),
    ("Help", &[("j/k, ↑/↓, PgUp/PgDn, Home/End", "Scroll help"), ("Esc/?", "Close help")]),
];

fn help_lines(theme: &TuiTheme) -> Vec<Line<'static>> {
    let key_style = theme.footer_key_style();
    let header_style = theme.title_style();
    let key_col_width = HELP_SECTIONS
        .iter()
        .flat_map(|(_, entries)| entries.iter())
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::<Line<'static>>::new();
    for (idx, (section, entries)) in HELP_SECTIONS.iter().enumerate() {
        if idx > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(format!("--- {section} ---"), header_style)));
        for (key, desc) in entries.iter() {
            lines.push(help_kv(key, desc, key_col_width, key_style));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Note: ", theme.dim_style()),
        Span::styled("p", key_style),
        Span::styled(" is only offered for Kotlin, Go, Python and TypeScript.", theme.dim_style()),
    ]));
    lines
}

fn render_help(frame: &mut Frame<'_>, app: &mut App, main_area: Rect) {
    let area = centered_rect(82, 84, main_area);
    frame.render_widget(Clear, area);

    let lines = help_lines(&app.theme);
    let border_style = app.theme.help_border_style();
    let block = Block::default()
        .borders(Borders::ALL)
        .title("─ Help ─")
        .border_style(border_style)
        .title_style(border_style.add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    app.help_viewport_height = inner.height;
    let max_scroll = lines
        .len()
        .saturating_sub(inner.height.max(1) as usize)
        .min(u16::MAX as usize) as u16;
    app.help_scroll = app.help_scroll.min(max_scroll);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(app.theme.base_style())
        .wrap(Wrap { trim: false })
        .scroll((app.help_scroll, 0));
    frame.render_widget(paragraph, area);
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, theme: &TuiTheme, label: &str, value: &str) {
    push_footer_entry_maybe_disabled(spans, theme, label, value, false);
}

fn push_footer_entry_maybe_disabled(
    spans: &mut Vec<Span<'static>>,
    theme: &TuiTheme,
    label: &str,
    value: &str,
    disabled: bool,
) {
    if !spans.is_empty() {
        spans.push(Span::styled(" | ", theme.footer_label_style()));
    }
    let label = format!("{}:", footer_label_ucfirst(label));
    spans.push(Span::styled(label, theme.footer_label_style()));
    let value_style = if disabled { theme.dim_style() } else { theme.footer_key_style() };
    spans.push(Span::styled(value.to_owned(), value_style));
}

fn footer_label_ucfirst(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = first.to_uppercase().collect::<String>();
    out.push_str(chars.as_str());
    out
}
