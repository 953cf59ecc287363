// Benchmark for layout calculations
// Measures segmenting, week stacking and timed column assignment

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use calendar_layout::models::event::CalendarEvent;
use calendar_layout::models::gesture::Gesture;
use calendar_layout::services::grid::{build_month_grid, build_week_grid, week_bounds};
use calendar_layout::services::segment::build_event_rows_from_events;
use calendar_layout::services::stacking::week_event_layout;
use calendar_layout::services::timed::timed_events_by_day;
use calendar_layout::utils::date::{add_days, format_time};

fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
}

// Deterministic spread of all-day spans and timed blocks over June
fn generate_events(count: usize) -> Vec<CalendarEvent> {
    (0..count)
        .map(|i| {
            let date = add_days(june(1), (i * 7 % 30) as i64);
            if i % 3 == 0 {
                CalendarEvent {
                    title: format!("Span {i}"),
                    all_day: true,
                    date: Some(date),
                    end_date: Some(add_days(date, (i % 5) as i64)),
                    ..CalendarEvent::default()
                }
            } else {
                let start = ((i * 37) % 40) as u32 * 30;
                CalendarEvent {
                    title: format!("Block {i}"),
                    date: Some(date),
                    start_time: Some(format_time(start)),
                    end_time: Some(format_time(start + 30 + (i % 4) as u32 * 30)),
                    ..CalendarEvent::default()
                }
            }
        })
        .collect()
}

fn bench_month_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("month_layout");
    let grid = build_month_grid(2025, 6, 0);

    for count in [50, 200, 1000].iter() {
        let events = generate_events(*count);
        group.bench_with_input(BenchmarkId::new("rows_and_weeks", count), &events, |b, events| {
            b.iter(|| {
                let rows = build_event_rows_from_events(black_box(events), &grid);
                let mut placed = 0;
                for week in 0..6 {
                    let (start, end) = week_bounds(week);
                    placed += week_event_layout(&rows, start, end, 3).placement_count();
                }
                placed
            })
        });
    }

    group.finish();
}

fn bench_week_timed(c: &mut Criterion) {
    let mut group = c.benchmark_group("week_timed");
    let grid = build_week_grid(june(11), 0);
    let gesture = Gesture::Idle;

    for count in [50, 200].iter() {
        let events = generate_events(*count);
        let rows = build_event_rows_from_events(&events, &grid);
        group.bench_with_input(BenchmarkId::new("timed_events_by_day", count), &rows, |b, rows| {
            b.iter(|| timed_events_by_day(&grid, black_box(rows), &gesture).len())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_month_layout, bench_week_timed);
criterion_main!(benches);
