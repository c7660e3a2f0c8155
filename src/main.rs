mod cmd;
mod data;
mod engine;
mod ui;

use clap::{Parser, Subcommand};
use data::Environment;
use engine::ProjectScope;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "planit", about = "IT change planning calendar")]
struct Cli {
    /// Path to the data directory containing config and data files (default: ./config)
    #[arg(long, default_value = "./config")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize data files with sample content
    Init,
    /// Print the month grid for one environment
    Grid {
        #[arg(long)]
        year: Option<i32>,
        /// Month 1-12 (default: current month)
        #[arg(long)]
        month: Option<u32>,
        /// Window mode: first day of an arbitrary span (YYYY-MM-DD)
        #[arg(long, conflicts_with_all = ["year", "month"])]
        start: Option<chrono::NaiveDate>,
        /// Window length in days (default: configured window_days)
        #[arg(long, requires = "start")]
        days: Option<u32>,
        /// PROD, PRE-PROD or TEST/ACCEPTANCE (default: configured)
        #[arg(long)]
        env: Option<Environment>,
        /// Restrict the acceptance view to one project (plus unscoped items)
        #[arg(long, conflicts_with = "no_project")]
        project: Option<String>,
        /// Restrict the acceptance view to items without a project
        #[arg(long)]
        no_project: bool,
        /// Show a single application row
        #[arg(long)]
        app: Option<String>,
    },
    /// Show every scheduled item covering one (application, day) cell
    Detail {
        #[arg(long)]
        app: String,
        /// Day to inspect (YYYY-MM-DD)
        #[arg(long)]
        date: chrono::NaiveDate,
        #[arg(long)]
        env: Option<Environment>,
        #[arg(long, conflicts_with = "no_project")]
        project: Option<String>,
        #[arg(long)]
        no_project: bool,
    },
    /// List all scheduled items
    Items,
    /// List the public holidays of a year
    Holidays {
        #[arg(long)]
        year: Option<i32>,
    },
}

fn scope_from(project: Option<String>, no_project: bool) -> ProjectScope {
    if no_project {
        ProjectScope::Unscoped
    } else {
        match project {
            Some(id) => ProjectScope::Project(id.to_uppercase()),
            None => ProjectScope::All,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Resolve data_dir to an absolute path so file I/O works regardless of
    // future directory changes within the process.
    let data_dir = if cli.data_dir.is_absolute() {
        cli.data_dir.clone()
    } else {
        std::env::current_dir()?.join(&cli.data_dir)
    };
    data::persistence::set_data_dir(data_dir.clone());

    // Auto-init when the data directory is missing or empty and the user did
    // not explicitly invoke the `init` subcommand.
    let is_init_command = matches!(cli.command, Some(Commands::Init));
    if !is_init_command && dir_needs_init(&data_dir) {
        eprintln!(
            "Data directory '{}' is missing or empty - running init...",
            data_dir.display()
        );
        cmd::init::run()?;
    }

    match cli.command {
        None => cmd::root::run(),
        Some(Commands::Init) => cmd::init::run(),
        Some(Commands::Grid {
            year,
            month,
            start,
            days,
            env,
            project,
            no_project,
            app,
        }) => cmd::grid::run(
            year,
            month,
            start,
            days,
            env,
            &scope_from(project, no_project),
            app.as_deref(),
        ),
        Some(Commands::Detail {
            app,
            date,
            env,
            project,
            no_project,
        }) => cmd::detail::run(&app, date, env, &scope_from(project, no_project)),
        Some(Commands::Items) => cmd::items::run(),
        Some(Commands::Holidays { year }) => {
            let year = year.unwrap_or_else(|| {
                use chrono::Datelike;
                chrono::Local::now().year()
            });
            cmd::holidays::run(year)
        }
    }
}

/// Returns true when `dir` does not exist or exists but contains no files.
fn dir_needs_init(dir: &std::path::Path) -> bool {
    if !dir.exists() {
        return true;
    }
    dir.read_dir()
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false)
}
