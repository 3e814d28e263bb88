#![forbid(unsafe_code)]

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Tabs, Wrap,
};

use crate::config::{self, Config, ViewMode};
use crate::core::gantt::{self, GanttRow};
use crate::core::list;
use crate::task::model::NewTask;
use crate::task::storage::TodoStorage;
use crate::task::store::TaskStore;
use crate::tui::TerminalGuard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TabId {
    List,
    Gantt,
    Help,
}

impl TabId {
    const ALL: [TabId; 3] = [TabId::List, TabId::Gantt, TabId::Help];

    fn title(self) -> &'static str {
        match self {
            TabId::List => "List",
            TabId::Gantt => "Gantt",
            TabId::Help => "Help",
        }
    }

    fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Normal,
    NewTask,
    Confirm,
}

#[derive(Debug, Clone)]
struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    fn new(initial: impl Into<String>) -> Self {
        let text = initial.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    fn as_str(&self) -> &str {
        &self.text
    }

    fn insert_char(&mut self, c: char) {
        let mut chars: Vec<char> = self.text.chars().collect();
        let cur = self.cursor.min(chars.len());
        chars.insert(cur, c);
        self.text = chars.into_iter().collect();
        self.cursor = cur + 1;
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut chars: Vec<char> = self.text.chars().collect();
        let cur = self.cursor.min(chars.len());
        if cur == 0 {
            return;
        }
        chars.remove(cur - 1);
        self.text = chars.into_iter().collect();
        self.cursor = cur - 1;
    }

    fn delete(&mut self) {
        let mut chars: Vec<char> = self.text.chars().collect();
        let cur = self.cursor.min(chars.len());
        if cur >= chars.len() {
            return;
        }
        chars.remove(cur);
        self.text = chars.into_iter().collect();
    }

    fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn move_right(&mut self) {
        let len = self.text.chars().count();
        self.cursor = (self.cursor + 1).min(len);
    }

    fn move_home(&mut self) {
        self.cursor = 0;
    }

    fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NewTaskField {
    Task,
    Start,
    End,
}

#[derive(Debug, Clone)]
struct NewTaskDialog {
    task: TextInput,
    start_date: TextInput,
    end_date: TextInput,
    field: NewTaskField,
    error: Option<String>,
}

impl NewTaskDialog {
    fn new() -> Self {
        Self {
            task: TextInput::new(""),
            start_date: TextInput::new(""),
            end_date: TextInput::new(""),
            field: NewTaskField::Task,
            error: None,
        }
    }

    fn input(&self) -> NewTask {
        NewTask {
            task: self.task.as_str().to_owned(),
            start_date: self.start_date.as_str().to_owned(),
            end_date: self.end_date.as_str().to_owned(),
        }
    }
}

#[derive(Debug, Clone)]
struct ConfirmDialog {
    title: String,
    message: String,
    action: ConfirmAction,
}

#[derive(Debug, Clone)]
enum ConfirmAction {
    DeleteTask { id: String, label: String },
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    until: Instant,
}

impl Toast {
    fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            until: Instant::now() + Duration::from_secs(3),
        }
    }
}

#[derive(Debug)]
struct AppState {
    cfg: Config,
    store: TaskStore,

    tab: TabId,
    mode: Mode,

    list_state: TableState,
    gantt_scroll: usize,

    new_task: Option<NewTaskDialog>,
    confirm: Option<ConfirmDialog>,

    toast: Option<Toast>,
    should_quit: bool,
}

impl AppState {
    fn new(cfg: Config, store: TaskStore) -> Self {
        let tab = match cfg.ui.default_view {
            ViewMode::List => TabId::List,
            ViewMode::Gantt => TabId::Gantt,
        };
        let mut list_state = TableState::default();
        list_state.select(Some(0));

        Self {
            cfg,
            store,
            tab,
            mode: Mode::Normal,
            list_state,
            gantt_scroll: 0,
            new_task: None,
            confirm: None,
            toast: None,
            should_quit: false,
        }
    }

    fn selected_index(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }

    fn clamp_selection(&mut self) {
        let max = self.store.len().saturating_sub(1);
        if self.selected_index() > max {
            self.list_state.select(Some(max));
        }
    }
}

/// Runs the interactive shell until the user quits. One event at a time;
/// every mutation completes (and persists) before the next key is read.
pub fn run(cfg: Config) -> anyhow::Result<()> {
    let storage_path = config::expand_path(&cfg.storage.file)?;
    let store = TaskStore::open(TodoStorage::new(storage_path));

    let mut guard = TerminalGuard::acquire()?;
    let mut app = AppState::new(cfg, store);

    loop {
        if let Some(toast) = &app.toast
            && Instant::now() >= toast.until
        {
            app.toast = None;
        }

        guard.terminal()?.draw(|f| draw(f, &mut app))?;

        if app.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
        {
            handle_key(key, &mut app);
        }
    }

    Ok(())
}

fn draw(f: &mut Frame<'_>, app: &mut AppState) {
    let area = f.area();

    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    draw_tabs(f, root[0], app);
    match app.tab {
        TabId::List => draw_list_tab(f, root[1], app),
        TabId::Gantt => draw_gantt_tab(f, root[1], app),
        TabId::Help => draw_help_tab(f, root[1]),
    }
    draw_footer(f, root[2], app);

    if let Some(confirm) = &app.confirm {
        draw_confirm(f, confirm);
    }

    if app.mode == Mode::NewTask {
        let Some(dialog) = &app.new_task else {
            return;
        };
        draw_new_task_popup(f, dialog);

        let popup = centered_rect(70, 45, area);
        let inner = Block::default()
            .borders(Borders::ALL)
            .title("New task")
            .inner(popup);

        let (line_idx, prefix, input) = match dialog.field {
            NewTaskField::Task => (0u16, "Task:  ", &dialog.task),
            NewTaskField::Start => (1u16, "Start: ", &dialog.start_date),
            NewTaskField::End => (2u16, "End:   ", &dialog.end_date),
        };

        let prefix_len = prefix.chars().count();
        let x = inner.x
            + u16::try_from(prefix_len).unwrap_or(0)
            + cursor_x_for_text(input.as_str(), input.cursor);
        let y = inner.y + line_idx;
        f.set_cursor_position((x, y));
    }
}

fn draw_tabs(f: &mut Frame<'_>, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let titles: Vec<Line> = TabId::ALL
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let mut title = format!("{} [{}]", t.title(), i + 1);
            if *t != TabId::Help {
                title = format!("{title} ({})", app.store.len());
            }
            Line::from(title)
        })
        .collect();

    let selected = TabId::ALL.iter().position(|t| *t == app.tab).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" | ");

    f.render_widget(tabs, chunks[0]);

    let storage = if app.cfg.ui.tilde_home {
        config::tilde_path(&config::expand_tilde(&app.cfg.storage.file))
    } else {
        app.cfg.storage.file.clone()
    };
    let path = Paragraph::new(Line::from(storage))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right);
    f.render_widget(path, chunks[1]);
}

fn draw_list_tab(f: &mut Frame<'_>, area: Rect, app: &mut AppState) {
    if app.store.is_empty() {
        let empty = Paragraph::new("No tasks yet. Press 'a' to add one.")
            .block(Block::default().borders(Borders::ALL).title("Tasks"))
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true });
        f.render_widget(empty, area);
        return;
    }

    let rows_data = list::project(app.store.items());
    let icons = app.cfg.ui.icons;

    let headers = Row::new(vec!["", "TASK", "START", "END"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = rows_data.iter().map(|row| {
        let marker = if icons {
            if row.completed { "☑" } else { "☐" }
        } else if row.completed {
            "[x]"
        } else {
            "[ ]"
        };

        let task_style = if row.completed {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default()
        };
        let date_style = if row.completed {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker_style = if row.completed {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };

        Row::new(vec![
            Cell::from(marker).style(marker_style),
            Cell::from(row.task.clone()).style(task_style),
            Cell::from(row.start_display.clone()).style(date_style),
            Cell::from(row.end_display.clone()).style(date_style),
        ])
    });

    let table = Table::new(
        rows,
        vec![
            Constraint::Length(3),
            Constraint::Min(16),
            Constraint::Length(13),
            Constraint::Length(13),
        ],
    )
    .header(headers)
    .block(Block::default().borders(Borders::ALL).title("Tasks"))
    .row_highlight_style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightBlue)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("▸ ");

    f.render_stateful_widget(table, area, &mut app.list_state);
}

fn draw_gantt_tab(f: &mut Frame<'_>, area: Rect, app: &mut AppState) {
    let block = Block::default().borders(Borders::ALL).title("Gantt");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = gantt::project(app.store.items());
    if rows.is_empty() {
        f.render_widget(
            Paragraph::new("No tasks to chart. Add some tasks first.")
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true }),
            inner,
        );
        return;
    }

    let label_width = rows
        .iter()
        .map(|r| r.label.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(8, 24);
    let chart_width = (inner.width as usize).saturating_sub(label_width + 1);
    if chart_width < 2 || inner.height < 2 {
        return;
    }

    let span = gantt::total_span_days(&rows).max(1) as usize;
    let scale = chart_width as f64 / span as f64;

    let visible = (inner.height as usize).saturating_sub(1);
    let max_scroll = rows.len().saturating_sub(visible);
    app.gantt_scroll = app.gantt_scroll.min(max_scroll);

    let mut lines = vec![axis_line(label_width, chart_width, span)];
    for row in rows.iter().skip(app.gantt_scroll).take(visible) {
        lines.push(bar_line(row, label_width, chart_width, scale, app.cfg.ui.icons));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

/// Day-number ruler across the top of the chart: first day on the left,
/// chart extent on the right.
fn axis_line(label_width: usize, chart_width: usize, span: usize) -> Line<'static> {
    let left = "day 0";
    let right = format!("{span}d");
    let gap = chart_width.saturating_sub(left.chars().count() + right.chars().count());

    Line::from(vec![
        Span::raw(" ".repeat(label_width + 1)),
        Span::styled(
            format!("{left}{}{right}", " ".repeat(gap)),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

/// One chart row: the invisible offset segment followed by the visible
/// duration segment, scaled from days to terminal cells.
fn bar_line(
    row: &GanttRow,
    label_width: usize,
    chart_width: usize,
    scale: f64,
    icons: bool,
) -> Line<'static> {
    let mut label: String = row.label.chars().take(label_width).collect();
    let pad = label_width.saturating_sub(label.chars().count());
    label.push_str(&" ".repeat(pad));

    let offset_cells =
        ((f64::from(row.start_offset_days) * scale).round() as usize).min(chart_width - 1);
    let width_cells = ((f64::from(row.duration_days) * scale).round() as usize)
        .max(1)
        .min(chart_width - offset_cells);

    let bar_char = if icons { '█' } else { '=' };
    let bar_style = if row.completed {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::LightBlue)
    };
    let label_style = if row.completed {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::styled(label, label_style),
        Span::raw(" ".repeat(offset_cells + 1)),
        Span::styled(String::from(bar_char).repeat(width_cells), bar_style),
        Span::styled(
            format!(" {}d", row.duration_days),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn draw_help_tab(f: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from("Keys:"),
        Line::from("  1/2/3        List / Gantt / Help tab"),
        Line::from("  h/l, Tab     Previous / next tab"),
        Line::from("  j/k, ↑/↓     Move (list) or scroll (Gantt)"),
        Line::from("  g/G          Jump to first / last task"),
        Line::from("  Space/Enter  Toggle task complete"),
        Line::from("  a or n       Add a new task"),
        Line::from("  d or Del     Delete selected task (with confirm)"),
        Line::from("  q, Esc       Quit"),
        Line::from(""),
        Line::from("New task form:"),
        Line::from("  Tab/Shift-Tab  Switch field"),
        Line::from("  Enter          Next field, submit from the last one"),
        Line::from("  Esc            Cancel"),
        Line::from(""),
        Line::from("Dates are calendar days in YYYY-MM-DD form; a task spans"),
        Line::from("its start and end dates inclusively."),
    ];
    let help = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .wrap(Wrap { trim: false });
    f.render_widget(help, area);
}

fn draw_footer(f: &mut Frame<'_>, area: Rect, app: &AppState) {
    let effective_mode = if app.confirm.is_some() {
        Mode::Confirm
    } else if app.new_task.is_some() {
        Mode::NewTask
    } else {
        app.mode
    };

    let mut left = match effective_mode {
        Mode::Normal => match app.tab {
            TabId::List => {
                "q quit • 1-3 tabs • j/k move • Space toggle • a add • d delete".to_owned()
            }
            TabId::Gantt => "q quit • 1-3 tabs • j/k scroll • a add".to_owned(),
            TabId::Help => "q quit • 1-3 tabs".to_owned(),
        },
        Mode::NewTask => "Enter next/submit • Tab switch field • Esc cancel".to_owned(),
        Mode::Confirm => "y delete • n cancel".to_owned(),
    };

    if let Some(toast) = &app.toast {
        left.clone_from(&toast.message);
    }

    let done = app.store.items().iter().filter(|t| t.completed).count();
    let right = format!("{} task(s) • {done} done", app.store.len());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(24)])
        .split(area);

    f.render_widget(
        Paragraph::new(Line::from(left)).style(Style::default().fg(Color::DarkGray)),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(Line::from(right))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Right),
        chunks[1],
    );
}

fn draw_confirm(f: &mut Frame<'_>, confirm: &ConfirmDialog) {
    let area = centered_rect(60, 25, f.area());
    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(confirm.title.as_str());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(confirm.message.clone()),
        Line::from(""),
        Line::from("[y] delete    [n] cancel"),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn draw_new_task_popup(f: &mut Frame<'_>, dialog: &NewTaskDialog) {
    let area = centered_rect(70, 45, f.area());
    f.render_widget(Clear, area);
    let block = Block::default().borders(Borders::ALL).title("New task");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let active_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let style_for = |field: NewTaskField| {
        if dialog.field == field {
            active_style
        } else {
            Style::default()
        }
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Task:  ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(dialog.task.as_str(), style_for(NewTaskField::Task)),
        ]),
        Line::from(vec![
            Span::styled("Start: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(dialog.start_date.as_str(), style_for(NewTaskField::Start)),
            Span::styled("  (YYYY-MM-DD)", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled("End:   ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(dialog.end_date.as_str(), style_for(NewTaskField::End)),
            Span::styled("  (YYYY-MM-DD)", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    if let Some(err) = dialog.error.as_deref() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                "Error: ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(err, Style::default().fg(Color::Red)),
        ]));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn handle_key(key: KeyEvent, app: &mut AppState) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c')) {
        app.should_quit = true;
        return;
    }

    // Modals take precedence
    if app.confirm.is_some() {
        app.mode = Mode::Confirm;
        handle_confirm_key(key, app);
        return;
    }
    if app.new_task.is_some() {
        app.mode = Mode::NewTask;
        handle_new_task_key(key, app);
        return;
    }
    app.mode = Mode::Normal;

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('1') => app.tab = TabId::List,
        KeyCode::Char('2') => app.tab = TabId::Gantt,
        KeyCode::Char('?' | '3') => app.tab = TabId::Help,
        KeyCode::Char('h') => app.tab = app.tab.prev(),
        KeyCode::Char('l') | KeyCode::Tab => app.tab = app.tab.next(),
        _ => {}
    }

    match app.tab {
        TabId::List => handle_list_key(key, app),
        TabId::Gantt => handle_gantt_key(key, app),
        TabId::Help => {}
    }
}

fn handle_list_key(key: KeyEvent, app: &mut AppState) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            let next = (app.selected_index() + 1).min(app.store.len().saturating_sub(1));
            app.list_state.select(Some(next));
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.list_state.select(Some(app.selected_index().saturating_sub(1)));
        }
        KeyCode::Char('g') | KeyCode::Home => app.list_state.select(Some(0)),
        KeyCode::Char('G') | KeyCode::End => {
            app.list_state.select(Some(app.store.len().saturating_sub(1)));
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            if let Some(item) = app.store.items().get(app.selected_index()) {
                let id = item.id.clone();
                app.store.toggle_complete(&id);
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(item) = app.store.items().get(app.selected_index()) {
                app.confirm = Some(ConfirmDialog {
                    title: "Delete task".to_owned(),
                    message: format!("Delete '{}'?", item.task),
                    action: ConfirmAction::DeleteTask {
                        id: item.id.clone(),
                        label: item.task.clone(),
                    },
                });
            }
        }
        KeyCode::Char('a' | 'n') => {
            app.new_task = Some(NewTaskDialog::new());
            app.mode = Mode::NewTask;
        }
        _ => {}
    }
}

fn handle_gantt_key(key: KeyEvent, app: &mut AppState) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            app.gantt_scroll = app.gantt_scroll.saturating_add(1);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.gantt_scroll = app.gantt_scroll.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => app.gantt_scroll = 0,
        KeyCode::Char('G') | KeyCode::End => app.gantt_scroll = usize::MAX,
        KeyCode::Char('a' | 'n') => {
            app.new_task = Some(NewTaskDialog::new());
            app.mode = Mode::NewTask;
        }
        _ => {}
    }
}

fn handle_new_task_key(key: KeyEvent, app: &mut AppState) {
    let Some(dialog) = app.new_task.as_mut() else {
        app.mode = Mode::Normal;
        return;
    };

    let next_field = |f: NewTaskField| match f {
        NewTaskField::Task => NewTaskField::Start,
        NewTaskField::Start => NewTaskField::End,
        NewTaskField::End => NewTaskField::Task,
    };
    let prev_field = |f: NewTaskField| match f {
        NewTaskField::Task => NewTaskField::End,
        NewTaskField::Start => NewTaskField::Task,
        NewTaskField::End => NewTaskField::Start,
    };

    match key.code {
        KeyCode::Esc => {
            app.new_task = None;
            app.mode = Mode::Normal;
        }
        KeyCode::Tab => {
            dialog.error = None;
            dialog.field = next_field(dialog.field);
        }
        KeyCode::BackTab => {
            dialog.error = None;
            dialog.field = prev_field(dialog.field);
        }
        KeyCode::Enter => {
            dialog.error = None;
            if dialog.field != NewTaskField::End {
                dialog.field = next_field(dialog.field);
                return;
            }

            match app.store.add(&dialog.input()) {
                Ok(item) => {
                    app.toast = Some(Toast::info(format!("Added '{}'", item.task)));
                    app.new_task = None;
                    app.mode = Mode::Normal;
                    app.list_state
                        .select(Some(app.store.len().saturating_sub(1)));
                }
                Err(err) => dialog.error = Some(err.to_string()),
            }
        }
        _ => {
            let input = match dialog.field {
                NewTaskField::Task => &mut dialog.task,
                NewTaskField::Start => &mut dialog.start_date,
                NewTaskField::End => &mut dialog.end_date,
            };
            handle_text_input_key(key, input);
        }
    }
}

fn handle_confirm_key(key: KeyEvent, app: &mut AppState) {
    match key.code {
        KeyCode::Char('y' | 'Y') | KeyCode::Enter => {
            if let Some(confirm) = app.confirm.take() {
                let ConfirmAction::DeleteTask { id, label } = confirm.action;
                if app.store.delete(&id) {
                    app.toast = Some(Toast::info(format!("Deleted '{label}'")));
                }
                app.clamp_selection();
            }
            app.mode = Mode::Normal;
        }
        KeyCode::Char('n' | 'N') | KeyCode::Esc => {
            app.confirm = None;
            app.mode = Mode::Normal;
        }
        _ => {}
    }
}

fn handle_text_input_key(key: KeyEvent, input: &mut TextInput) {
    match key.code {
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        KeyCode::Char(c) => {
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT)
            {
                input.insert_char(c);
            }
        }
        _ => {}
    }
}

fn cursor_x_for_text(text: &str, cursor: usize) -> u16 {
    let upto = cursor.min(text.chars().count());
    u16::try_from(upto).unwrap_or(u16::MAX)
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
