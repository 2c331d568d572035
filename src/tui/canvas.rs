use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::CrosstermBackend;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};
use ratatui::{Frame, Terminal};

use crate::dataset::{Dataset, MAX_SELECTIONS};
use crate::layout::{self, LAYOUT_SEED};
use crate::sociogram::Sociogram;
use crate::store;
use crate::tui::input::{self, Action, Direction};
use crate::tui::render::{self, Panel, SurveyScreen, ViewerScreen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingTextKind {
    AddName,
    AddQuestion,
}

#[derive(Debug, Clone)]
struct PendingText {
    title: String,
    buffer: String,
    cursor: usize,
    kind: PendingTextKind,
}

/// The open multi-select popup for one (question, participant) cell.
#[derive(Debug)]
struct PickerState {
    question_idx: usize,
    participant_idx: usize,
    candidates: Vec<String>,
    cursor: usize,
}

/// The generated sociograms, one per question, plus their fixed layouts.
#[derive(Debug)]
struct ViewerState {
    graphs: Vec<Sociogram>,
    layouts: Vec<Vec<(f64, f64)>>,
    current: usize,
}

#[derive(Debug)]
struct AppState {
    dir: PathBuf,
    dataset: Dataset,
    panel: Panel,
    roster_cursor: usize,
    question_cursor: usize,
    grid_cursor: usize,
    pending_text: Option<PendingText>,
    picker: Option<PickerState>,
    viewer: Option<ViewerState>,
    show_help: bool,
    status_message: Option<String>,
    demo: bool,
}

impl AppState {
    fn new(dir: PathBuf, dataset: Dataset, demo: bool) -> Self {
        Self {
            dir,
            dataset,
            panel: Panel::Roster,
            roster_cursor: 0,
            question_cursor: 0,
            grid_cursor: 0,
            pending_text: None,
            picker: None,
            viewer: None,
            show_help: false,
            status_message: if demo {
                Some("demo mode: changes are in-memory only".to_string())
            } else {
                None
            },
            demo,
        }
    }

    fn draw(&self, frame: &mut Frame) {
        if let Some(viewer) = &self.viewer {
            let graph = &viewer.graphs[viewer.current];
            render::draw_viewer(
                frame,
                &ViewerScreen {
                    graph,
                    positions: &viewer.layouts[viewer.current],
                    index: viewer.current,
                    total: viewer.graphs.len(),
                    hints: self.hints(),
                    message: self.status_message.as_deref(),
                    show_help: self.show_help,
                },
            );
        } else {
            render::draw_survey(
                frame,
                &SurveyScreen {
                    dataset: &self.dataset,
                    panel: self.panel,
                    roster_cursor: self.roster_cursor,
                    question_cursor: self.question_cursor,
                    grid_cursor: self.grid_cursor,
                    hints: self.hints(),
                    message: self.status_message.as_deref(),
                    show_help: self.show_help,
                },
            );
        }

        if let Some(prompt) = &self.pending_text {
            self.draw_text_prompt(frame, prompt);
        } else if let Some(picker) = &self.picker {
            self.draw_picker(frame, picker);
        }
    }

    fn hints(&self) -> &'static str {
        if self.pending_text.is_some() {
            return "type text, [Backspace] delete, [Enter] apply, [Esc] cancel";
        }
        if self.picker.is_some() {
            return "[↑↓] move  [Space] toggle  [Enter/Esc] done";
        }
        if self.viewer.is_some() {
            return "[n/p or ←→] switch question  [Esc] back to survey  [q] quit";
        }
        "[Tab] section  [↑↓] move  [a] add  [Enter] choose peers  [w] save  [g] sociograms  [q] quit"
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        self.status_message = None;

        if self.picker.is_some() {
            self.handle_picker_key(key);
            return Ok(false);
        }

        let in_text_mode = self.pending_text.is_some();
        let action = input::action_for_key(key, in_text_mode);

        if in_text_mode {
            self.handle_text_action(action);
            return Ok(false);
        }

        if self.viewer.is_some() {
            return Ok(self.handle_viewer_action(action));
        }

        match action {
            Action::Quit => return Ok(true),
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::NextPanel => self.cycle_panel(1),
            Action::PrevPanel => self.cycle_panel(-1),
            Action::Move(direction) => self.move_cursor(direction),
            Action::AddEntry => self.start_add_prompt(),
            Action::Activate => self.activate(),
            Action::Save => self.do_save(),
            Action::Generate => self.do_generate(),
            Action::Cancel => self.show_help = false,
            Action::NextQuestion
            | Action::PrevQuestion
            | Action::SubmitText
            | Action::Backspace
            | Action::InputChar(_)
            | Action::Noop => {}
        }
        Ok(false)
    }

    fn handle_viewer_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::NextQuestion | Action::Move(Direction::Right) | Action::NextPanel => {
                self.cycle_viewer(1);
            }
            Action::PrevQuestion | Action::Move(Direction::Left) | Action::PrevPanel => {
                self.cycle_viewer(-1);
            }
            Action::Cancel => self.viewer = None,
            _ => {}
        }
        false
    }

    fn cycle_viewer(&mut self, delta: isize) {
        let Some(viewer) = &mut self.viewer else {
            return;
        };
        let total = viewer.graphs.len() as isize;
        if total > 0 {
            viewer.current = ((viewer.current as isize + delta).rem_euclid(total)) as usize;
        }
    }

    // -----------------------------------------------------------------------
    // Survey form
    // -----------------------------------------------------------------------

    fn grid_len(&self) -> usize {
        self.dataset.questions.len() * self.dataset.participants.len()
    }

    fn responses_ready(&self) -> bool {
        !self.dataset.participants.is_empty() && !self.dataset.questions.is_empty()
    }

    fn cycle_panel(&mut self, delta: isize) {
        let order = [Panel::Roster, Panel::Questions, Panel::Responses];
        let current = order.iter().position(|p| *p == self.panel).unwrap_or(0) as isize;
        let next = order[(current + delta).rem_euclid(order.len() as isize) as usize];
        if next == Panel::Responses && !self.responses_ready() {
            self.status_message =
                Some("the answer grid needs at least one name and one question".to_string());
            self.panel = if delta > 0 { Panel::Roster } else { Panel::Questions };
            return;
        }
        self.panel = next;
    }

    fn move_cursor(&mut self, direction: Direction) {
        let delta: isize = match direction {
            Direction::Up | Direction::Left => -1,
            Direction::Down | Direction::Right => 1,
        };
        match self.panel {
            Panel::Roster => {
                self.roster_cursor =
                    step_within(self.roster_cursor, delta, self.dataset.participants.len());
            }
            Panel::Questions => {
                self.question_cursor =
                    step_within(self.question_cursor, delta, self.dataset.questions.len());
            }
            Panel::Responses => {
                self.grid_cursor = step_within(self.grid_cursor, delta, self.grid_len());
            }
        }
    }

    fn start_add_prompt(&mut self) {
        match self.panel {
            Panel::Roster => {
                self.pending_text = Some(PendingText {
                    title: "New name:".to_string(),
                    buffer: String::new(),
                    cursor: 0,
                    kind: PendingTextKind::AddName,
                });
            }
            Panel::Questions => {
                self.pending_text = Some(PendingText {
                    title: "New question:".to_string(),
                    buffer: String::new(),
                    cursor: 0,
                    kind: PendingTextKind::AddQuestion,
                });
            }
            Panel::Responses => {
                self.status_message =
                    Some("press Enter on a row to choose peers".to_string());
            }
        }
    }

    fn activate(&mut self) {
        match self.panel {
            // Enter walks the staged flow forward.
            Panel::Roster | Panel::Questions => self.cycle_panel(1),
            Panel::Responses => self.open_picker(),
        }
    }

    fn open_picker(&mut self) {
        if self.grid_len() == 0 {
            self.status_message =
                Some("the answer grid needs at least one name and one question".to_string());
            return;
        }
        self.grid_cursor = self.grid_cursor.min(self.grid_len() - 1);
        let participant_count = self.dataset.participants.len();
        let question_idx = self.grid_cursor / participant_count;
        let participant_idx = self.grid_cursor % participant_count;
        let participant = &self.dataset.participants[participant_idx];
        let candidates: Vec<String> = self
            .dataset
            .candidates_for(participant)
            .into_iter()
            .map(str::to_string)
            .collect();
        if candidates.is_empty() {
            self.status_message = Some("no peers to choose from".to_string());
            return;
        }
        self.picker = Some(PickerState {
            question_idx,
            participant_idx,
            candidates,
            cursor: 0,
        });
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        let Some(picker) = &mut self.picker else {
            return;
        };
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                picker.cursor =
                    step_within(picker.cursor, -1, picker.candidates.len());
            }
            KeyCode::Down | KeyCode::Char('j') => {
                picker.cursor = step_within(picker.cursor, 1, picker.candidates.len());
            }
            KeyCode::Char(' ') => {
                let question = self.dataset.questions[picker.question_idx].clone();
                let participant =
                    self.dataset.participants[picker.participant_idx].clone();
                let peer = picker.candidates[picker.cursor].clone();
                if self
                    .dataset
                    .selections(&question, &participant)
                    .contains(&peer)
                {
                    self.dataset.deselect(&question, &participant, &peer);
                } else if let Err(err) = self.dataset.select(&question, &participant, &peer) {
                    self.status_message = Some(err.to_string());
                }
            }
            KeyCode::Enter | KeyCode::Esc => self.picker = None,
            _ => {}
        }
    }

    // -----------------------------------------------------------------------
    // Text prompts
    // -----------------------------------------------------------------------

    fn handle_text_action(&mut self, action: Action) {
        match action {
            Action::SubmitText => {
                if let Some(prompt) = self.pending_text.take() {
                    self.apply_text_prompt(prompt);
                }
            }
            Action::Cancel => self.pending_text = None,
            Action::Backspace => {
                if let Some(prompt) = &mut self.pending_text
                    && prompt.cursor > 0
                {
                    let from = byte_index_for_cursor(&prompt.buffer, prompt.cursor - 1);
                    let to = byte_index_for_cursor(&prompt.buffer, prompt.cursor);
                    prompt.buffer.replace_range(from..to, "");
                    prompt.cursor -= 1;
                }
            }
            Action::InputChar(c) => {
                if let Some(prompt) = &mut self.pending_text {
                    let at = byte_index_for_cursor(&prompt.buffer, prompt.cursor);
                    prompt.buffer.insert(at, c);
                    prompt.cursor += 1;
                }
            }
            Action::Move(Direction::Left) => {
                if let Some(prompt) = &mut self.pending_text {
                    prompt.cursor = prompt.cursor.saturating_sub(1);
                }
            }
            Action::Move(Direction::Right) => {
                if let Some(prompt) = &mut self.pending_text {
                    let max = prompt.buffer.chars().count();
                    prompt.cursor = (prompt.cursor + 1).min(max);
                }
            }
            _ => {}
        }
    }

    fn apply_text_prompt(&mut self, prompt: PendingText) {
        match prompt.kind {
            PendingTextKind::AddName => {
                if prompt.buffer.trim().is_empty() {
                    return;
                }
                let added = self.dataset.add_participants(&prompt.buffer);
                self.status_message = Some(if added == 1 {
                    "added 1 name".to_string()
                } else {
                    format!("added {added} names")
                });
                self.roster_cursor = self.dataset.participants.len().saturating_sub(1);
                // Keep the prompt open so a whole roster can be typed in one go.
                self.pending_text = Some(PendingText {
                    title: prompt.title,
                    buffer: String::new(),
                    cursor: 0,
                    kind: PendingTextKind::AddName,
                });
            }
            PendingTextKind::AddQuestion => match self.dataset.add_question(&prompt.buffer) {
                Ok(true) => {
                    self.question_cursor = self.dataset.questions.len() - 1;
                    self.status_message = Some("question added".to_string());
                }
                Ok(false) => {}
                Err(err) => {
                    self.status_message = Some(err.to_string());
                    // Leave the prompt open so the text can be edited.
                    self.pending_text = Some(prompt);
                }
            },
        }
    }

    // -----------------------------------------------------------------------
    // Save / generate
    // -----------------------------------------------------------------------

    fn do_save(&mut self) {
        if self.demo {
            self.status_message = Some("demo mode: nothing is saved".to_string());
            return;
        }
        match store::save(&self.dir, &self.dataset) {
            Ok(()) => {
                self.status_message = Some(format!("saved to {}", store::DATA_FILE));
            }
            Err(err) => self.status_message = Some(err.to_string()),
        }
    }

    /// Build one sociogram per question. Falls back to the saved file when
    /// nothing has been answered in memory yet.
    fn do_generate(&mut self) {
        if !self.dataset.has_responses() && !self.demo {
            match store::load(&self.dir) {
                Ok(loaded) => {
                    self.dataset = loaded;
                    self.clamp_cursors();
                }
                Err(err) => {
                    self.status_message = Some(err.to_string());
                    return;
                }
            }
        }
        if !self.responses_ready() {
            self.status_message =
                Some("nothing to visualise — add names and questions first".to_string());
            return;
        }
        let graphs = Sociogram::all(&self.dataset);
        let layouts = graphs
            .iter()
            .map(|g| layout::spring_layout(g.names.len(), &g.edge_indices(), LAYOUT_SEED))
            .collect();
        self.viewer = Some(ViewerState {
            graphs,
            layouts,
            current: 0,
        });
    }

    fn clamp_cursors(&mut self) {
        self.roster_cursor = self
            .roster_cursor
            .min(self.dataset.participants.len().saturating_sub(1));
        self.question_cursor = self
            .question_cursor
            .min(self.dataset.questions.len().saturating_sub(1));
        self.grid_cursor = self.grid_cursor.min(self.grid_len().saturating_sub(1));
    }

    // -----------------------------------------------------------------------
    // Popup drawing
    // -----------------------------------------------------------------------

    fn draw_text_prompt(&self, frame: &mut Frame, prompt: &PendingText) {
        let area = render::centered_rect(frame.area(), 60, 26);
        frame.render_widget(Clear, area);
        let paragraph = Paragraph::new(vec![
            Line::from(Span::styled(
                prompt.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            line_with_cursor(
                &prompt.buffer,
                prompt.cursor,
                Style::default().fg(Color::White),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
            ),
            Line::from(""),
            Line::from(Span::styled(
                "Backspace deletes char. Enter applies, Esc cancels.",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(
            Block::default()
                .title(" input ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan))
                .padding(Padding::new(2, 2, 1, 1)),
        )
        .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn draw_picker(&self, frame: &mut Frame, picker: &PickerState) {
        let question = &self.dataset.questions[picker.question_idx];
        let participant = &self.dataset.participants[picker.participant_idx];
        let chosen = self.dataset.selections(question, participant);

        let area = render::centered_rect(frame.area(), 56, 60);
        frame.render_widget(Clear, area);

        let mut lines = vec![
            Line::from(Span::styled(
                question.clone(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
        ];
        for (idx, candidate) in picker.candidates.iter().enumerate() {
            let mark = if chosen.iter().any(|c| c == candidate) {
                "[x]"
            } else {
                "[ ]"
            };
            let style = if idx == picker.cursor {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            lines.push(Line::from(vec![
                Span::styled(format!("  {mark} "), Style::default().fg(Color::Cyan)),
                Span::styled(candidate.clone(), style),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("{} of {MAX_SELECTIONS} chosen", chosen.len()),
            Style::default().fg(Color::DarkGray),
        )));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(format!(" {participant} chooses (max {MAX_SELECTIONS}) "))
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::Green))
                    .padding(Padding::new(2, 2, 1, 1)),
            )
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Open the survey form. `dataset` may already carry a roster (see
/// `survey --roster`).
pub fn run_survey(dir: &Path, dataset: Dataset) -> Result<()> {
    run_app(AppState::new(dir.to_path_buf(), dataset, false))
}

/// Open the viewer directly on an already loaded (or demo) dataset.
pub fn run_view(dir: &Path, dataset: Dataset, demo: bool) -> Result<()> {
    let mut app = AppState::new(dir.to_path_buf(), dataset, demo);
    app.do_generate();
    run_app(app)
}

fn run_app(mut app: AppState) -> Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    loop {
        terminal.draw(|f| app.draw(f))?;
        if !event::poll(Duration::from_millis(200))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if matches!(key.kind, KeyEventKind::Release | KeyEventKind::Repeat) {
                continue;
            }
            if app.handle_key(key)? {
                break;
            }
        }
    }
    Ok(())
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn step_within(cursor: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let pos = cursor.min(len - 1) as isize;
    (pos + delta).rem_euclid(len as isize) as usize
}

fn line_with_cursor(text: &str, cursor: usize, text_style: Style, caret_style: Style) -> Line<'static> {
    let mut spans = Vec::new();
    let char_len = text.chars().count();
    let clamped = cursor.min(char_len);

    if char_len == 0 {
        spans.push(Span::styled("▌", caret_style));
        return Line::from(spans);
    }

    let split = byte_index_for_cursor(text, clamped);
    let (left, right) = text.split_at(split);
    if !left.is_empty() {
        spans.push(Span::styled(left.to_string(), text_style));
    }
    spans.push(Span::styled("▌", caret_style));
    if !right.is_empty() {
        spans.push(Span::styled(right.to_string(), text_style));
    }
    Line::from(spans)
}

fn byte_index_for_cursor(text: &str, cursor: usize) -> usize {
    text.char_indices()
        .nth(cursor)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

/// A small built-in dataset for `view --demo`.
pub fn demo_dataset() -> Dataset {
    let mut d = Dataset::new();
    d.add_participants("Ana\nBea\nCarlos\nDiana\nElena");
    let q1 = "¿Con quién te gustaría trabajar?";
    let q2 = "¿A quién invitarías a tu cumpleaños?";
    for q in [q1, q2] {
        let _ = d.add_question(q);
    }
    for (participant, peer) in [
        ("Ana", "Bea"),
        ("Ana", "Carlos"),
        ("Bea", "Ana"),
        ("Carlos", "Ana"),
        ("Carlos", "Bea"),
        ("Diana", "Ana"),
    ] {
        let _ = d.select(q1, participant, peer);
    }
    for (participant, peer) in [("Ana", "Diana"), ("Bea", "Diana"), ("Diana", "Bea")] {
        let _ = d.select(q2, participant, peer);
    }
    // Elena stays isolated on purpose so the highlight colour shows up.
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn app_in(dir: &TempDir, dataset: Dataset) -> AppState {
        AppState::new(dir.path().to_path_buf(), dataset, false)
    }

    #[test]
    fn generate_without_data_reports_missing_file() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir, Dataset::new());
        app.do_generate();
        assert!(app.viewer.is_none());
        let message = app.status_message.unwrap();
        assert!(message.contains("no saved data"), "got: {message}");
    }

    #[test]
    fn generate_loads_saved_dataset_from_disk() {
        let dir = TempDir::new().unwrap();
        let mut saved = Dataset::new();
        saved.add_participants("A\nB\nC");
        saved.add_question("Q").unwrap();
        saved.select("Q", "A", "B").unwrap();
        store::save(dir.path(), &saved).unwrap();

        let mut app = app_in(&dir, Dataset::new());
        app.do_generate();
        let viewer = app.viewer.expect("viewer should open");
        assert_eq!(viewer.graphs.len(), 1);
        assert_eq!(viewer.graphs[0].names, vec!["A", "B", "C"]);
        assert_eq!(viewer.layouts[0].len(), 3);
    }

    #[test]
    fn generate_with_corrupt_file_reports_corrupt() {
        let dir = TempDir::new().unwrap();
        fs::write(store::data_path(dir.path()), "not json at all").unwrap();
        let mut app = app_in(&dir, Dataset::new());
        app.do_generate();
        assert!(app.viewer.is_none());
        let message = app.status_message.unwrap();
        assert!(message.contains("not a valid survey file"), "got: {message}");
    }

    #[test]
    fn generate_prefers_in_memory_responses() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir, demo_dataset());
        app.do_generate();
        let viewer = app.viewer.expect("viewer should open");
        assert_eq!(viewer.graphs.len(), 2);
    }

    #[test]
    fn responses_panel_requires_names_and_questions() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir, Dataset::new());
        app.panel = Panel::Questions;
        app.cycle_panel(1);
        assert_ne!(app.panel, Panel::Responses);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn picker_indices_map_grid_cursor() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir, demo_dataset());
        // 5 participants, second question, third participant
        app.grid_cursor = 5 + 2;
        app.open_picker();
        let picker = app.picker.expect("picker should open");
        assert_eq!(picker.question_idx, 1);
        assert_eq!(picker.participant_idx, 2);
        // candidates never include the participant themselves
        assert!(!picker.candidates.contains(&"Carlos".to_string()));
        assert_eq!(picker.candidates.len(), 4);
    }

    #[test]
    fn viewer_cycles_through_questions() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir, demo_dataset());
        app.do_generate();
        app.cycle_viewer(1);
        assert_eq!(app.viewer.as_ref().unwrap().current, 1);
        app.cycle_viewer(1);
        assert_eq!(app.viewer.as_ref().unwrap().current, 0);
        app.cycle_viewer(-1);
        assert_eq!(app.viewer.as_ref().unwrap().current, 1);
    }

    #[test]
    fn demo_dataset_keeps_one_isolated_participant() {
        let graphs = Sociogram::all(&demo_dataset());
        assert!(graphs.iter().all(|g| g.is_isolated("Elena")));
    }
}
