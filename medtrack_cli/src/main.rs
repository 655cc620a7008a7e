use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};
use medtrack_core::calendar::{GRID_COLUMNS, WEEKDAY_LABELS};
use medtrack_core::daily::parse_dose_selector;
use medtrack_core::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "medtrack")]
#[command(about = "Medication schedule and prescription tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month's dose schedule (default)
    Calendar {
        /// Year to show (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,

        /// Month to show, 1-12 (defaults to the current month)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// calendar or list (defaults to the configured view)
        #[arg(long)]
        view: Option<ViewMode>,

        /// JSON schedule file (defaults to the configured file, then sample data)
        #[arg(long)]
        schedule: Option<PathBuf>,
    },

    /// Show today's dose checklist
    Today {
        /// Toggle a dose as taken, e.g. `--take morning:0` (repeatable)
        #[arg(long = "take", value_name = "PERIOD:INDEX")]
        take: Vec<String>,
    },

    /// List prescriptions
    Prescriptions {
        /// all, active, completed or expired
        #[arg(long, default_value = "all")]
        status: StatusFilter,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Initialize logging
    medtrack_core::logging::init_with_level(&config.logging.level);

    match cli.command {
        Some(Commands::Calendar {
            year,
            month,
            view,
            schedule,
        }) => cmd_calendar(year, month, view, schedule, &config),
        Some(Commands::Today { take }) => cmd_today(&take),
        Some(Commands::Prescriptions { status }) => cmd_prescriptions(status),
        None => {
            // Default to "calendar" command
            cmd_calendar(None, None, None, None, &config)
        }
    }
}

fn cmd_calendar(
    year: Option<i32>,
    month: Option<u32>,
    view: Option<ViewMode>,
    schedule_path: Option<PathBuf>,
    config: &Config,
) -> Result<()> {
    let today = Local::now().date_naive();
    let month = match (year, month) {
        (None, None) => CalendarMonth::from_date(today)?,
        (year, month) => CalendarMonth::new(
            year.unwrap_or(today.year()),
            month.map(|m| m - 1).unwrap_or(today.month0()),
        )?,
    };

    let schedule = match schedule_path.or_else(|| config.schedule.file.clone()) {
        Some(path) => load_schedule(&path)?,
        None => {
            tracing::info!("No schedule file configured, using sample schedule");
            sample::sample_schedule().clone()
        }
    };

    println!("Medication Schedule");
    match view.unwrap_or(config.display.default_view) {
        ViewMode::Calendar => {
            println!("{}", month.title());
            println!();
            display_grid(&build_month_grid(month, &schedule));
        }
        ViewMode::List => {
            println!();
            display_list(&index_schedule(&schedule));
        }
    }

    Ok(())
}

fn cmd_today(take: &[String]) -> Result<()> {
    let mut checklist = sample::sample_checklist();

    for selector in take {
        let (period, index) = parse_dose_selector(selector)?;
        checklist.toggle_taken(period, index)?;
    }

    println!("{}", Local::now().format("%A, %B %-d, %Y"));

    for period in Period::ALL {
        let doses = checklist.doses(period);
        if doses.is_empty() {
            continue;
        }

        println!();
        println!("{}", period.label());
        for dose in doses {
            let mark = if dose.taken { "x" } else { " " };
            println!("  [{}] {} ({})", mark, dose.name, dose.quantity);
        }
    }

    println!();
    if checklist.is_complete() {
        println!("✓ All doses taken");
    } else {
        println!("{} doses remaining", checklist.remaining());
    }

    Ok(())
}

fn cmd_prescriptions(status: StatusFilter) -> Result<()> {
    let filters: Vec<String> = StatusFilter::OPTIONS
        .iter()
        .map(|f| {
            if *f == status {
                format!("[{}]", f)
            } else {
                f.to_string()
            }
        })
        .collect();
    println!("Prescriptions  {}", filters.join(" "));

    let matching = filter_prescriptions(sample::sample_prescriptions(), status);
    if matching.is_empty() {
        println!();
        println!("No prescriptions match this filter.");
        return Ok(());
    }

    for prescription in matching {
        println!();
        println!(
            "{}  {}  ({})",
            prescription.date,
            prescription.doctor_name,
            prescription.status.label()
        );
        for medication in &prescription.medications {
            let periods: Vec<String> = medication
                .schedule
                .periods()
                .iter()
                .map(|p| p.to_string())
                .collect();
            println!(
                "  {} {}: {} for {}",
                medication.name,
                medication.dosage,
                periods.join(", "),
                medication.period
            );
        }
    }

    Ok(())
}

fn period_marker(period: Period) -> char {
    match period {
        Period::Morning => 'M',
        Period::Afternoon => 'A',
        Period::Night => 'N',
    }
}

fn display_grid(grid: &MonthGrid) {
    let header: String = WEEKDAY_LABELS
        .iter()
        .map(|label| format!(" {:<6}", label))
        .collect();
    println!("{}", header.trim_end());

    for row in grid.rows() {
        debug_assert_eq!(row.len(), GRID_COLUMNS);
        let line: String = row
            .iter()
            .map(|cell| {
                if cell.belongs_to_requested_month {
                    let markers: String = cell
                        .dose_count
                        .map(|c| c.scheduled_periods().into_iter().map(period_marker).collect())
                        .unwrap_or_default();
                    format!(" {:>2} {:<3}", cell.day_number, markers)
                } else {
                    format!("({:>2})   ", cell.day_number)
                }
            })
            .collect();
        println!("{}", line.trim_end());
    }

    println!();
    println!("M = Morning  A = Afternoon  N = Night");
}

fn display_list(entries: &[ScheduleEntry]) {
    if entries.is_empty() {
        println!("No scheduled doses.");
        return;
    }

    for entry in entries {
        println!("{}", entry.long_label());
        for period in entry.dose_count.scheduled_periods() {
            println!("  {} {}", entry.dose_count.get(period), period);
        }
    }
}
