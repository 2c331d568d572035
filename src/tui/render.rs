use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line as Stroke};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

use crate::dataset::Dataset;
use crate::sociogram::Sociogram;

// Node marker geometry, in canvas units: frequently chosen participants
// get visibly larger circles.
const NODE_RADIUS_BASE: f64 = 0.06;
const NODE_RADIUS_STEP: f64 = 0.035;
// Arrows stop short of the markers so heads stay readable.
const ARROW_MARGIN: f64 = 0.03;
const ARROW_HEAD: f64 = 0.07;

const COLOR_NODE: Color = Color::Cyan;
const COLOR_ISOLATED: Color = Color::Red;
const COLOR_EDGE: Color = Color::Gray;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Roster,
    Questions,
    Responses,
}

/// Everything the survey form needs to draw one frame.
#[derive(Debug)]
pub struct SurveyScreen<'a> {
    pub dataset: &'a Dataset,
    pub panel: Panel,
    pub roster_cursor: usize,
    pub question_cursor: usize,
    pub grid_cursor: usize,
    pub hints: &'a str,
    pub message: Option<&'a str>,
    pub show_help: bool,
}

/// One rendered sociogram plus where the viewer is in the question list.
#[derive(Debug)]
pub struct ViewerScreen<'a> {
    pub graph: &'a Sociogram,
    pub positions: &'a [(f64, f64)],
    pub index: usize,
    pub total: usize,
    pub hints: &'a str,
    pub message: Option<&'a str>,
    pub show_help: bool,
}

pub fn draw_survey(frame: &mut Frame, data: &SurveyScreen<'_>) {
    let area = outer_area(frame);
    let outer = outer_block("sociograma survey");
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let [panes_area, _gap, status_area] = Layout::vertical([
        Constraint::Min(6),
        Constraint::Length(1),
        Constraint::Length(2),
    ])
    .areas(inner);

    let [roster_area, questions_area, responses_area] = Layout::horizontal([
        Constraint::Percentage(24),
        Constraint::Percentage(32),
        Constraint::Fill(1),
    ])
    .areas(panes_area);

    draw_roster(frame, roster_area, data);
    draw_questions(frame, questions_area, data);
    draw_responses(frame, responses_area, data);
    draw_status(frame, status_area, data.message, data.hints);

    if data.show_help {
        render_help_overlay(frame, SURVEY_HELP);
    }
}

pub fn draw_viewer(frame: &mut Frame, data: &ViewerScreen<'_>) {
    let area = outer_area(frame);
    let outer = outer_block("sociograma view");
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let [canvas_area, _gap, status_area] = Layout::vertical([
        Constraint::Min(6),
        Constraint::Length(1),
        Constraint::Length(2),
    ])
    .areas(inner);

    let title = Line::from(vec![
        Span::styled(
            format!(" sociogram {}/{} ", data.index + 1, data.total),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", data.graph.question),
            Style::default().fg(Color::White),
        ),
    ]);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([-1.5, 1.5])
        .y_bounds([-1.25, 1.25])
        .paint(|ctx| paint_sociogram(ctx, data.graph, data.positions));
    frame.render_widget(canvas, canvas_area);

    draw_status(frame, status_area, data.message, data.hints);

    if data.show_help {
        render_help_overlay(frame, VIEWER_HELP);
    }
}

// ---------------------------------------------------------------------------
// Sociogram canvas
// ---------------------------------------------------------------------------

pub fn node_radius(in_degree: usize) -> f64 {
    NODE_RADIUS_BASE + in_degree as f64 * NODE_RADIUS_STEP
}

fn paint_sociogram(ctx: &mut Context<'_>, graph: &Sociogram, positions: &[(f64, f64)]) {
    for (origin, target) in graph.edge_indices() {
        let Some(&(x1, y1)) = positions.get(origin) else {
            continue;
        };
        let Some(&(x2, y2)) = positions.get(target) else {
            continue;
        };
        let origin_radius = node_radius(graph.in_degree(&graph.names[origin]));
        let target_radius = node_radius(graph.in_degree(&graph.names[target]));
        paint_arrow(ctx, (x1, y1), (x2, y2), origin_radius, target_radius);
    }

    ctx.layer();
    for (idx, name) in graph.names.iter().enumerate() {
        let Some(&(x, y)) = positions.get(idx) else {
            continue;
        };
        let color = if graph.is_isolated(name) {
            COLOR_ISOLATED
        } else {
            COLOR_NODE
        };
        let radius = node_radius(graph.in_degree(name));
        ctx.draw(&Circle { x, y, radius, color });
    }

    ctx.layer();
    for (idx, name) in graph.names.iter().enumerate() {
        let Some(&(x, y)) = positions.get(idx) else {
            continue;
        };
        let radius = node_radius(graph.in_degree(name));
        ctx.print(
            x + radius + 0.04,
            y,
            Line::styled(name.clone(), Style::default().fg(Color::White)),
        );
    }
}

/// A directed edge: a shaft pulled back from both markers plus a two-stroke
/// head at the target end.
fn paint_arrow(
    ctx: &mut Context<'_>,
    (x1, y1): (f64, f64),
    (x2, y2): (f64, f64),
    origin_radius: f64,
    target_radius: f64,
) {
    let (dx, dy) = (x2 - x1, y2 - y1);
    let dist = (dx * dx + dy * dy).sqrt();
    if dist < 1e-4 {
        return;
    }
    let (ux, uy) = (dx / dist, dy / dist);

    let start = (
        x1 + ux * (origin_radius + ARROW_MARGIN),
        y1 + uy * (origin_radius + ARROW_MARGIN),
    );
    let tip = (
        x2 - ux * (target_radius + ARROW_MARGIN),
        y2 - uy * (target_radius + ARROW_MARGIN),
    );
    stroke(ctx, start, tip, COLOR_EDGE);

    let back = (tip.0 - ux * ARROW_HEAD, tip.1 - uy * ARROW_HEAD);
    let (px, py) = (-uy * ARROW_HEAD * 0.5, ux * ARROW_HEAD * 0.5);
    stroke(ctx, tip, (back.0 + px, back.1 + py), COLOR_EDGE);
    stroke(ctx, tip, (back.0 - px, back.1 - py), COLOR_EDGE);
}

fn stroke(ctx: &mut Context<'_>, from: (f64, f64), to: (f64, f64), color: Color) {
    ctx.draw(&Stroke {
        x1: from.0,
        y1: from.1,
        x2: to.0,
        y2: to.1,
        color,
    });
}

// ---------------------------------------------------------------------------
// Survey panes
// ---------------------------------------------------------------------------

fn draw_roster(frame: &mut Frame, area: Rect, data: &SurveyScreen<'_>) {
    let active = data.panel == Panel::Roster;
    let mut lines = Vec::new();
    if data.dataset.participants.is_empty() {
        lines.push(Line::styled(
            "no names yet — press [a]",
            Style::default().fg(Color::DarkGray),
        ));
    }
    for (idx, name) in data.dataset.participants.iter().enumerate() {
        let style = if active && idx == data.roster_cursor {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:>3} ", idx + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(name.clone(), style),
        ]));
    }
    let cursor_line = if data.dataset.participants.is_empty() {
        0
    } else {
        data.roster_cursor
    };
    render_pane(frame, area, "1 · names", active, lines, cursor_line);
}

fn draw_questions(frame: &mut Frame, area: Rect, data: &SurveyScreen<'_>) {
    let active = data.panel == Panel::Questions;
    let mut lines = Vec::new();
    if data.dataset.questions.is_empty() {
        lines.push(Line::styled(
            "no questions yet — press [a]",
            Style::default().fg(Color::DarkGray),
        ));
    }
    for (idx, question) in data.dataset.questions.iter().enumerate() {
        let style = if active && idx == data.question_cursor {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:>3} ", idx + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(question.clone(), style),
        ]));
    }
    let cursor_line = if data.dataset.questions.is_empty() {
        0
    } else {
        data.question_cursor
    };
    render_pane(frame, area, "2 · questions", active, lines, cursor_line);
}

fn draw_responses(frame: &mut Frame, area: Rect, data: &SurveyScreen<'_>) {
    let active = data.panel == Panel::Responses;
    let (lines, cursor_line) = response_lines(data.dataset, data.grid_cursor, active);
    render_pane(frame, area, "3 · answers", active, lines, cursor_line);
}

/// The per-question grid as text rows; returns the line index of the row
/// under the cursor so the pane can scroll to it.
fn response_lines(dataset: &Dataset, grid_cursor: usize, active: bool) -> (Vec<Line<'static>>, usize) {
    let mut lines = Vec::new();
    let mut cursor_line = 0;
    if dataset.participants.is_empty() || dataset.questions.is_empty() {
        lines.push(Line::styled(
            "enter names and questions first",
            Style::default().fg(Color::DarkGray),
        ));
        return (lines, cursor_line);
    }

    let mut pair_idx = 0;
    for question in &dataset.questions {
        lines.push(Line::styled(
            format!("── {question}"),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
        ));
        for participant in &dataset.participants {
            let chosen = dataset.selections(question, participant).join(", ");
            let focused = active && pair_idx == grid_cursor;
            if focused {
                cursor_line = lines.len();
            }
            let name_style = if focused {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            lines.push(Line::from(vec![
                Span::styled(format!("  {participant} "), name_style),
                Span::styled("→ ", Style::default().fg(Color::DarkGray)),
                Span::styled(chosen, Style::default().fg(Color::Cyan)),
            ]));
            pair_idx += 1;
        }
    }
    (lines, cursor_line)
}

fn render_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    active: bool,
    lines: Vec<Line<'static>>,
    cursor_line: usize,
) {
    let border = if active { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .padding(Padding::new(1, 1, 0, 0));
    let inner_height = block.inner(area).height.max(1) as usize;
    let scroll = cursor_line.saturating_sub(inner_height.saturating_sub(1)) as u16;
    let paragraph = Paragraph::new(lines).block(block).scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

fn draw_status(frame: &mut Frame, area: Rect, message: Option<&str>, hints: &str) {
    let mut lines = Vec::new();
    lines.push(match message {
        Some(text) => Line::styled(text.to_string(), Style::default().fg(Color::Yellow)),
        None => Line::from(""),
    });
    lines.push(Line::styled(
        hints.to_string(),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

// ---------------------------------------------------------------------------
// Chrome
// ---------------------------------------------------------------------------

const SURVEY_HELP: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "switch section"),
    ("↑↓ / jk", "move within a section"),
    ("a", "add a name / question"),
    ("Enter", "choose peers for the focused row"),
    ("w", "save answers to respuestas_sociograma.json"),
    ("g", "generate sociograms"),
    ("?", "toggle this help"),
    ("q", "quit"),
];

const VIEWER_HELP: &[(&str, &str)] = &[
    ("n / →", "next question"),
    ("p / ←", "previous question"),
    ("Esc", "back to the survey"),
    ("?", "toggle this help"),
    ("q", "quit"),
];

fn outer_area(frame: &Frame) -> Rect {
    frame.area().inner(Margin {
        horizontal: 3,
        vertical: 1,
    })
}

fn outer_block(name: &str) -> Block<'static> {
    let title = Line::from(vec![
        Span::styled(name.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled("[?] help", Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled("[q] quit", Style::default().fg(Color::DarkGray)),
    ]);
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::new(2, 2, 1, 1))
        .title(title)
}

fn render_help_overlay(frame: &mut Frame, entries: &[(&str, &str)]) {
    let area = centered_rect(frame.area(), 50, 50);
    frame.render_widget(Clear, area);
    let mut lines = vec![Line::from("")];
    for (keys, what) in entries {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {keys:<16}"),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled((*what).to_string(), Style::default().fg(Color::White)),
        ]));
    }
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" keys ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(paragraph, area);
}

pub fn centered_rect(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .flex(Flex::Center)
    .split(area);
    Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .flex(Flex::Center)
    .split(vertical[1])[1]
}
