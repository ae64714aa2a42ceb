//! Plain-text rendering of the calendar for the terminal.

use std::fmt::Write;

use coalcal_common::model::{piles_of, DayStatus, FireRecord, Warehouse, WeatherRecord};
use coalcal_common::month::WeekStart;
use coalcal_engine::day_index::DayIndex;
use coalcal_engine::grid::{self, GridCell};

const CELL_WIDTH: usize = 4;

fn glyph(status: DayStatus) -> char {
    match status {
        DayStatus::Safe => '.',
        DayStatus::Risk => '!',
        DayStatus::Fire => '*',
    }
}

/// Month title, weekday header and grid rows.
pub fn month(index: &DayIndex, week_start: WeekStart) -> String {
    let key = index.month();
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", key.name(), key.year());

    for label in grid::weekday_labels(week_start) {
        let _ = write!(out, "{label:>CELL_WIDTH$}");
    }
    out.push('\n');

    let cells = grid::build_grid(index, week_start);
    for row in cells.chunks(7) {
        for cell in row {
            match cell {
                GridCell::Blank => out.push_str(&" ".repeat(CELL_WIDTH)),
                GridCell::Day { day, status } => {
                    let _ = write!(out, "{day:>3}{}", glyph(*status));
                }
            }
        }
        out.push('\n');
    }
    out
}

/// One line with the glyph and day count of each status.
pub fn legend(index: &DayIndex) -> String {
    let counts = index.status_counts();
    let parts: Vec<String> = DayStatus::ALL
        .iter()
        .map(|&s| format!("{} {}: {}", glyph(s), s.label(), counts.get(s)))
        .collect();
    format!("{}\n", parts.join("   "))
}

/// Status, fire records and weather of one day.
pub fn day_detail(index: &DayIndex, day: u32) -> String {
    let key = index.month();
    let (Some(date), Some(status)) = (key.date_of(day), index.status_for(day)) else {
        return format!("Day {day} is not in {key}\n");
    };

    let mut out = String::new();
    let _ = writeln!(out, "{date}: {}", status.label());

    let records = index.fire_records_for(day);
    if records.is_empty() {
        out.push_str("  No fire records (estimated status)\n");
    } else {
        out.push_str("  Fire records:\n");
        for rec in records {
            let _ = writeln!(out, "    {}", fire_line(rec));
        }
    }

    match index.weather_for(day) {
        Some(w) => {
            let _ = writeln!(out, "  Weather: {}", weather_line(w));
        }
        None => out.push_str("  Weather: no data\n"),
    }
    out
}

/// Warehouses with their pile counts.
pub fn warehouses(list: &[Warehouse]) -> String {
    if list.is_empty() {
        return "No warehouses\n".to_string();
    }
    let mut out = String::new();
    for w in list {
        let _ = writeln!(out, "#{} {} ({} piles)", w.id, w.name, w.piles.len());
    }
    out
}

/// Piles of one warehouse; unknown warehouses list no piles.
pub fn piles(list: &[Warehouse], warehouse_id: i64) -> String {
    let piles = piles_of(list, warehouse_id);
    if piles.is_empty() {
        return format!("No piles for warehouse #{warehouse_id}\n");
    }
    let mut out = String::new();
    for p in piles {
        let _ = writeln!(out, "#{} {}", p.id, p.name);
    }
    out
}

fn fire_line(rec: &FireRecord) -> String {
    let mut line = format!(
        "{} / {}: {}",
        rec.warehouse_label(),
        rec.pile_label(),
        rec.status.label()
    );
    let mut extra = Vec::new();
    if let Some(h) = rec.humidity {
        extra.push(format!("humidity {h}%"));
    }
    if let Some(ws) = rec.wind_speed {
        extra.push(format!("wind {ws} m/s"));
    }
    if !extra.is_empty() {
        let _ = write!(line, " ({})", extra.join(", "));
    }
    line
}

fn weather_line(w: &WeatherRecord) -> String {
    let mut parts = Vec::new();
    if let Some(t) = w.temperature {
        parts.push(format!("temperature {t}°C"));
    }
    if let Some(h) = w.humidity {
        parts.push(format!("humidity {h}%"));
    }
    if let Some(ws) = w.wind_speed {
        parts.push(format!("wind {ws} m/s"));
    }
    if let Some(dir) = w.wind_direction {
        parts.push(format!("direction {dir}°"));
    }
    if let Some(p) = w.precipitation {
        parts.push(format!("precipitation {p} mm"));
    }
    if parts.is_empty() {
        "no measurements".to_string()
    } else {
        parts.join(", ")
    }
}
