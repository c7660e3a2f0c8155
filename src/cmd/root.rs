use crate::data::{ApplicationData, Persistable, PlannerSettings, ScheduleData};
use crate::ui::grid_view::{run_app, App};
use crate::ui::{restore_terminal, setup_terminal};
use anyhow::Result;
use chrono::Local;

pub fn run() -> Result<()> {
    let schedule = ScheduleData::load()?;
    let applications = ApplicationData::load()?;
    let settings = PlannerSettings::load()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen
        );
        original_hook(info);
    }));

    let mut terminal = setup_terminal()?;

    let today = Local::now().date_naive();
    let rows = applications.rows_with(&schedule);
    let mut app = App::new(&schedule, rows, &settings, today);

    let result = run_app(&mut terminal, &mut app);

    restore_terminal(&mut terminal)?;

    result
}
