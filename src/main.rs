// Calendar Layout CLI
// Loads an event file and prints the computed layout as JSON

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde_json::json;

use calendar_layout::error::LayoutError;
use calendar_layout::models::event::EditableEvent;
use calendar_layout::models::gesture::{Gesture, PointerTarget};
use calendar_layout::models::grid::DayCell;
use calendar_layout::models::settings::{default_config_path, LayoutSettings};
use calendar_layout::services::agenda::{build_agenda, time_label};
use calendar_layout::services::interaction::minutes_from_y;
use calendar_layout::services::grid::{
    build_month_grid, build_week_grid, is_today, today_index, week_bounds, week_count,
};
use calendar_layout::services::segment::build_event_rows;
use calendar_layout::services::stacking::{grid_row_capacity, row_capacity, week_event_layout};
use calendar_layout::services::timed::timed_events_by_day;
use calendar_layout::utils::date::{
    format_date_key, format_day_title, format_month_title, format_week_title, parse_date_key,
};

/// Visible event rows when neither a capacity nor a grid height is given
const DEFAULT_ROW_CAPACITY: usize = 3;

#[derive(Parser)]
#[command(name = "calendar-layout")]
#[command(about = "Lay out calendar events for month, week, day and agenda views")]
struct Cli {
    /// JSON array of { "event": ..., "location": ... } entries
    #[arg(short, long, global = true, default_value = "events.json")]
    events: PathBuf,

    /// Layout settings file (defaults to the platform config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Maximum visible event rows per week
    #[arg(long, global = true)]
    capacity: Option<usize>,

    /// Measured grid height in pixels, used to derive the capacity
    #[arg(long, global = true)]
    height: Option<f32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Month grid with stacked all-day bars
    Month {
        /// Any day of the month, YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Week view: all-day strip and timed columns
    Week {
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Single day view
    Day {
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Day-by-day list of the week's events
    Agenda {
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Time range selected by dragging between two points of the timed grid
    Select {
        /// Day the drag starts on (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Day the drag ends on (defaults to the start day)
        #[arg(long)]
        to_date: Option<String>,
        /// Pointer offset from the top of the grid where the drag starts
        #[arg(long)]
        from_y: f32,
        /// Pointer offset from the top of the grid where the drag ends
        #[arg(long)]
        to_y: f32,
    },
}

fn parse_anchor(value: Option<&str>) -> Result<NaiveDate> {
    match value {
        Some(text) => Ok(parse_date_key(text)
            .ok_or_else(|| LayoutError::InvalidDateKey(text.to_string()))?),
        None => Ok(Local::now().date_naive()),
    }
}

fn load_settings(path: Option<&Path>) -> Result<LayoutSettings> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) => path,
            None => {
                log::warn!("No config directory available, using default settings");
                return Ok(LayoutSettings::default());
            }
        },
    };
    LayoutSettings::load(&path)
        .with_context(|| format!("Failed to load settings from {}", path.display()))
}

fn load_events(path: &Path) -> Result<Vec<EditableEvent>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read events from {}", path.display()))?;
    let events: Vec<EditableEvent> = serde_json::from_str(&contents)
        .map_err(LayoutError::from)
        .with_context(|| format!("Failed to parse events in {}", path.display()))?;
    log::info!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

fn resolve_capacity(cli: &Cli, settings: &LayoutSettings, grid_rows: usize) -> usize {
    if let Some(capacity) = cli.capacity {
        return capacity;
    }
    match cli.height {
        Some(height) => row_capacity(grid_row_capacity(
            Some(height),
            grid_rows,
            settings.grid_top_offset,
            settings.event_row_spacing(),
        )),
        None => DEFAULT_ROW_CAPACITY,
    }
}

fn month_view(
    cli: &Cli,
    settings: &LayoutSettings,
    events: &[EditableEvent],
    anchor: NaiveDate,
) -> serde_json::Value {
    let grid = build_month_grid(anchor.year(), anchor.month(), settings.first_day_of_week);
    let rows = build_event_rows(events, &grid);
    let weeks = week_count(&grid);
    let capacity = resolve_capacity(cli, settings, weeks);
    let layouts: Vec<_> = (0..weeks)
        .map(|week| {
            let (start, end) = week_bounds(week);
            week_event_layout(&rows, start, end, capacity)
        })
        .collect();

    json!({
        "title": format_month_title(anchor),
        "rowCapacity": capacity,
        "todayIndex": today_index(&grid, Local::now().date_naive()),
        "grid": grid,
        "weeks": layouts,
    })
}

fn week_view(
    cli: &Cli,
    settings: &LayoutSettings,
    events: &[EditableEvent],
    title: String,
    grid: &[DayCell],
) -> serde_json::Value {
    let rows = build_event_rows(events, grid);
    let capacity = resolve_capacity(cli, settings, 1);
    let end = grid.len().saturating_sub(1);
    let all_day = week_event_layout(&rows, 0, end, capacity);
    let gesture = Gesture::Idle;
    let timed = timed_events_by_day(grid, &rows, &gesture);

    json!({
        "title": title,
        "grid": grid,
        "todayIndex": grid.iter().position(|cell| is_today(cell.date)),
        "allDay": all_day,
        "timed": timed,
    })
}

fn agenda_view(events: &[EditableEvent], grid: &[DayCell]) -> serde_json::Value {
    let rows = build_event_rows(events, grid);
    let agenda = build_agenda(&rows, grid);
    let days: Vec<_> = agenda
        .iter()
        .map(|day| {
            let timed: Vec<_> = day
                .timed
                .iter()
                .map(|segment| json!({ "label": time_label(segment), "segment": segment }))
                .collect();
            json!({
                "date": format_date_key(day.date),
                "allDay": day.all_day,
                "timed": timed,
            })
        })
        .collect();
    json!({ "days": days })
}

fn selection_view(
    settings: &LayoutSettings,
    anchor: NaiveDate,
    hover: NaiveDate,
    from_y: f32,
    to_y: f32,
) -> serde_json::Value {
    let target = |date, y| {
        let minutes = minutes_from_y(y, 0.0, settings.slot_height, settings.slot_minutes);
        PointerTarget::new(date, minutes)
    };
    let mut gesture = Gesture::select(target(anchor, from_y));
    gesture.hover_at(target(hover, to_y));

    json!({
        "slotMinutes": settings.slot_minutes,
        "dateRange": gesture.date_range(),
        "timeRange": gesture.time_range_with_slot(settings.slot_minutes),
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let settings = load_settings(cli.config.as_deref())?;
    let events = match cli.command {
        Commands::Select { .. } => Vec::new(),
        _ => load_events(&cli.events)?,
    };
    let first_day = settings.first_day_of_week;

    let output = match &cli.command {
        Commands::Month { date } => {
            let anchor = parse_anchor(date.as_deref())?;
            month_view(&cli, &settings, &events, anchor)
        }
        Commands::Week { date } => {
            let anchor = parse_anchor(date.as_deref())?;
            let grid = build_week_grid(anchor, first_day);
            week_view(
                &cli,
                &settings,
                &events,
                format_week_title(anchor, first_day),
                &grid,
            )
        }
        Commands::Day { date } => {
            let anchor = parse_anchor(date.as_deref())?;
            let grid = [DayCell::new(anchor, true)];
            week_view(&cli, &settings, &events, format_day_title(anchor), &grid)
        }
        Commands::Agenda { date } => {
            let anchor = parse_anchor(date.as_deref())?;
            let grid = build_week_grid(anchor, first_day);
            agenda_view(&events, &grid)
        }
        Commands::Select {
            date,
            to_date,
            from_y,
            to_y,
        } => {
            let anchor = parse_anchor(date.as_deref())?;
            let hover = match to_date {
                Some(text) => parse_anchor(Some(text))?,
                None => anchor,
            };
            selection_view(&settings, anchor, hover, *from_y, *to_y)
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
