use crate::data::{Category, Environment, PlannerSettings, ScheduleData};
use crate::engine::{
    lookup_details, resolve_grid, CalendarAxis, CellDescriptor, HolidayCalendar, ProjectScope,
    ScheduleIndex,
};
use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use crossterm::event::{self, Event as CEvent, KeyCode};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame, Terminal,
};
use std::io::Stdout;
use std::time::Duration as StdDuration;

// Cell colors, matching the legacy planning sheet
const DEPLOYMENT_COLOR: Color = Color::Rgb(0, 112, 192);
const INCIDENT_COLOR: Color = Color::Rgb(255, 0, 0);
const MAINTENANCE_COLOR: Color = Color::Rgb(255, 192, 0);
const TEST_COLOR: Color = Color::Rgb(0, 176, 80);
const REGRESSION_COLOR: Color = Color::Rgb(0, 130, 60);
const FREEZE_COLOR: Color = Color::Rgb(150, 0, 200);
const WEEKEND_COLOR: Color = Color::Rgb(217, 217, 217);
const HOLIDAY_COLOR: Color = Color::Rgb(180, 190, 210);

pub struct App<'a> {
    schedule: &'a ScheduleData,
    applications: Vec<String>,
    year: i32,
    month: u32,
    axis: CalendarAxis,
    environment: Environment,
    /// Scopes the user can cycle through: all, unscoped, then each project
    /// present in the snapshot.
    scope_cycle: Vec<ProjectScope>,
    scope_index: usize,
    today: NaiveDate,
    selected_row: usize,
    selected_col: usize,
}

impl<'a> App<'a> {
    pub fn new(
        schedule: &'a ScheduleData,
        applications: Vec<String>,
        settings: &PlannerSettings,
        today: NaiveDate,
    ) -> Self {
        let year = today.year();
        let month = today.month();
        // Month mode for today's date cannot fail
        let axis = CalendarAxis::month(year, month).unwrap();
        let scope_cycle = scope_cycle(schedule);
        App {
            schedule,
            applications,
            year,
            month,
            axis,
            environment: settings.default_environment,
            scope_cycle,
            scope_index: 0,
            today,
            selected_row: 0,
            selected_col: today.day() as usize - 1,
        }
    }

    pub fn scope(&self) -> &ProjectScope {
        &self.scope_cycle[self.scope_index]
    }

    fn selected_date(&self) -> NaiveDate {
        self.axis.days()[self.selected_col]
    }

    fn set_month(&mut self, year: i32, month: u32) {
        if let Ok(axis) = CalendarAxis::month(year, month) {
            self.year = year;
            self.month = month;
            self.axis = axis;
            if self.selected_col >= self.axis.len() {
                self.selected_col = self.axis.len() - 1;
            }
        }
    }

    fn next_month(&mut self) {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        self.set_month(year, month);
    }

    fn prev_month(&mut self) {
        let (year, month) = if self.month == 1 {
            (self.year - 1, 12)
        } else {
            (self.year, self.month - 1)
        };
        self.set_month(year, month);
    }

    fn cycle_environment(&mut self) {
        let i = Environment::ALL
            .iter()
            .position(|e| *e == self.environment)
            .unwrap_or(0);
        self.environment = Environment::ALL[(i + 1) % Environment::ALL.len()];
    }

    fn cycle_scope(&mut self) {
        self.scope_index = (self.scope_index + 1) % self.scope_cycle.len();
    }

    /// Returns true when the app should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Left => {
                self.selected_col = self.selected_col.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_col + 1 < self.axis.len() {
                    self.selected_col += 1;
                }
            }
            KeyCode::Up => {
                self.selected_row = self.selected_row.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected_row + 1 < self.applications.len() {
                    self.selected_row += 1;
                }
            }
            KeyCode::Char('n') => self.next_month(),
            KeyCode::Char('p') => self.prev_month(),
            KeyCode::Char('e') => self.cycle_environment(),
            KeyCode::Char('s') => self.cycle_scope(),
            KeyCode::Char('t') => {
                self.set_month(self.today.year(), self.today.month());
                self.selected_col = self.today.day() as usize - 1;
            }
            _ => {}
        }
        false
    }

    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(6),
                Constraint::Length(8),
                Constraint::Length(1),
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);
        self.render_grid(f, chunks[1]);
        self.render_detail(f, chunks[2]);
        self.render_help(f, chunks[3]);
    }

    fn render_header(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let title = format!(
            "{} | {} {} | {}",
            self.environment,
            month_name(self.month),
            self.year,
            self.scope()
        );
        let header = Paragraph::new(Line::from(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        f.render_widget(header, area);
    }

    fn render_grid(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let calendar = HolidayCalendar::french_for_axis(&self.axis);
        let index = ScheduleIndex::build(&self.schedule.items);
        let rows_data = resolve_grid(
            &index,
            &calendar,
            &self.applications,
            &self.axis,
            self.environment,
            self.scope(),
            self.today,
        );

        let mut header_cells = vec![Cell::from("Application")];
        for date in self.axis.days() {
            let style = if *date == self.today {
                Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default()
            };
            header_cells.push(Cell::from(format!("{:>2}", date.day())).style(style));
        }

        let mut rows = Vec::with_capacity(rows_data.len());
        for (r, row) in rows_data.iter().enumerate() {
            let mut cells = vec![Cell::from(row.application.clone())];
            for (c, cell) in row.cells.iter().enumerate() {
                let selected = r == self.selected_row && c == self.selected_col;
                let style = cell_style(cell, selected);
                cells.push(Cell::from(cell_glyph(cell)).style(style));
            }
            rows.push(Row::new(cells));
        }

        let mut widths = vec![Constraint::Length(18)];
        widths.extend(std::iter::repeat_n(Constraint::Length(2), self.axis.len()));

        let table = Table::new(rows, widths)
            .header(Row::new(header_cells).style(Style::default().add_modifier(Modifier::BOLD)))
            .column_spacing(1)
            .block(Block::default().borders(Borders::TOP));
        f.render_widget(table, area);
    }

    fn render_detail(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let date = self.selected_date();
        let mut lines: Vec<Line> = Vec::new();
        match self.applications.get(self.selected_row) {
            None => lines.push(Line::from("No application selected.")),
            Some(application) => {
                let details = lookup_details(
                    &self.schedule.items,
                    application,
                    date,
                    self.environment,
                    self.scope(),
                );
                lines.push(Line::from(Span::styled(
                    format!("{} on {}", application, date),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                if details.is_empty() {
                    lines.push(Line::from("  no scheduled item"));
                }
                for item in details {
                    let mut text = format!(
                        "  {} {} {} - {} {}",
                        item.category, item.start_date, item.start_time, item.end_date,
                        item.end_time
                    );
                    if let Some(project) = &item.project {
                        text.push_str(&format!("  [{}]", project));
                    }
                    if let Some(note) = &item.note {
                        text.push_str(&format!("  {}", note));
                    }
                    lines.push(Line::from(Span::styled(
                        text,
                        Style::default().fg(category_color(item.category)),
                    )));
                }
            }
        }
        let panel =
            Paragraph::new(lines).block(Block::default().borders(Borders::TOP).title("Detail"));
        f.render_widget(panel, area);
    }

    fn render_help(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let help = Paragraph::new(
            "arrows: move   n/p: month   e: environment   s: scope   t: today   q: quit",
        )
        .style(Style::default().add_modifier(Modifier::DIM));
        f.render_widget(help, area);
    }
}

/// All scopes the view can cycle through for the loaded snapshot.
pub(crate) fn scope_cycle(schedule: &ScheduleData) -> Vec<ProjectScope> {
    let mut scopes = vec![ProjectScope::All, ProjectScope::Unscoped];
    for item in &schedule.items {
        if let Some(project) = &item.project {
            let scope = ProjectScope::Project(project.clone());
            if !scopes.contains(&scope) {
                scopes.push(scope);
            }
        }
    }
    scopes
}

pub(crate) fn category_color(category: Category) -> Color {
    match category {
        Category::Deployment => DEPLOYMENT_COLOR,
        Category::Incident => INCIDENT_COLOR,
        Category::Maintenance => MAINTENANCE_COLOR,
        Category::Test => TEST_COLOR,
        Category::RegressionTest => REGRESSION_COLOR,
        Category::Freeze => FREEZE_COLOR,
        Category::Other => Color::Gray,
    }
}

/// Two-character cell content: count of overlapping items, or blank.
pub(crate) fn cell_glyph(cell: &CellDescriptor) -> String {
    match cell.matches.len() {
        0 => "  ".to_string(),
        1 => "▪ ".to_string(),
        n => format!("{:<2}", n.min(9)),
    }
}

/// Style for one grid cell. An item's category color takes rendering
/// precedence over the weekend/holiday background; the descriptor still
/// carries both facts for the detail panel.
pub(crate) fn cell_style(cell: &CellDescriptor, is_selected: bool) -> Style {
    let mut style = if let Some(first) = cell.matches.first() {
        let bg = category_color(first.category);
        let fg = match first.category {
            Category::Maintenance | Category::Other => Color::Black,
            _ => Color::White,
        };
        Style::default().bg(bg).fg(fg)
    } else if cell.holiday_name.is_some() {
        Style::default().bg(HOLIDAY_COLOR).fg(Color::DarkGray)
    } else if cell.is_weekend {
        Style::default().bg(WEEKEND_COLOR).fg(Color::DarkGray)
    } else {
        Style::default()
    };
    if cell.is_today {
        style = style.add_modifier(Modifier::BOLD);
    }
    if is_selected {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

pub(crate) fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

// ── App event loop ────────────────────────────────────────────────────────────

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;
        if event::poll(StdDuration::from_millis(16))? {
            if let CEvent::Key(key) = event::read()? {
                if app.handle_key(key.code) {
                    break;
                }
            }
        }
    }
    Ok(())
}
