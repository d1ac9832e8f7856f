//! Frame layout and widget construction
//!
//! Left pane: entry list for the open tab. Right pane: the selected entry's
//! detail with highlighted snippet. Bottom row: key hints.

use super::model::{Model, Tab};
use super::snippetview::highlight_lines;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn render(frame: &mut Frame, model: &Model) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(32), Constraint::Percentage(68)])
        .split(rows[0]);

    render_list(frame, panes[0], model);
    render_detail(frame, panes[1], model);
    render_hints(frame, rows[1]);
}

fn render_list(frame: &mut Frame, area: Rect, model: &Model) {
    let title = match model.tab() {
        Tab::Algorithms => " Algorithms ",
        Tab::Patterns => " Patterns ",
    };

    let items: Vec<ListItem> = model
        .entry_names()
        .into_iter()
        .map(ListItem::new)
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::REVERSED)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    if !model.is_empty() {
        state.select(Some(model.selected()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_detail(frame: &mut Frame, area: Rect, model: &Model) {
    let (title, lines) = match model.tab() {
        Tab::Algorithms => match model.current_algorithm() {
            Some(algorithm) => (algorithm.name.clone(), algorithm_lines(algorithm)),
            None => (String::new(), vec![]),
        },
        Tab::Patterns => match model.current_pattern() {
            Some(pattern) => (pattern.title.clone(), pattern_lines(pattern)),
            None => (String::new(), vec![]),
        },
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {title} ")),
        )
        .wrap(Wrap { trim: false })
        .scroll((model.detail_scroll(), 0));
    frame.render_widget(paragraph, area);
}

fn algorithm_lines(algorithm: &algodex_catalog::Algorithm) -> Vec<Line<'static>> {
    let mut lines = vec![
        meta_line(vec![
            badge(&algorithm.category),
            badge(&format!("time {}", algorithm.time_complexity)),
            badge(&format!("space {}", algorithm.space_complexity)),
        ]),
        Line::from(algorithm.description.clone()),
        Line::default(),
    ];

    lines.extend(highlight_lines(&algorithm.snippet.code));
    lines.push(Line::default());
    lines.push(section_header("How it works"));
    lines.push(Line::from(algorithm.theory.clone()));
    lines.push(Line::default());
    lines.push(section_header("Step by step"));
    for (index, step) in algorithm.steps.iter().enumerate() {
        lines.push(Line::from(format!("  {}. {}", index + 1, step)));
    }
    lines
}

fn pattern_lines(pattern: &algodex_catalog::Pattern) -> Vec<Line<'static>> {
    let mut lines = vec![
        meta_line(vec![
            badge(&pattern.difficulty.to_string()),
            badge(&format!("time {}", pattern.time_complexity)),
            badge(&format!("space {}", pattern.space_complexity)),
        ]),
        Line::from(pattern.description.clone()),
        Line::default(),
        section_header("Theory"),
        Line::from(pattern.theory.clone()),
        Line::default(),
        section_header("When to use it"),
    ];
    for use_case in &pattern.when_to_use {
        lines.push(Line::from(format!("  - {use_case}")));
    }
    lines.push(Line::default());
    lines.push(section_header("Template"));
    lines.extend(highlight_lines(&pattern.snippet.code));
    lines.push(Line::default());
    lines.push(Line::from(pattern.syntax_notes.clone()));
    lines
}

fn section_header(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn badge(text: &str) -> Span<'static> {
    Span::styled(
        format!("[{text}] "),
        Style::default().fg(Color::Cyan),
    )
}

fn meta_line(spans: Vec<Span<'static>>) -> Line<'static> {
    Line::from(spans)
}

fn render_hints(frame: &mut Frame, area: Rect) {
    let hints = Paragraph::new(Line::from(
        "  up/down or j/k: select   Tab: algorithms/patterns   PgUp/PgDn: scroll   q: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hints, area);
}
