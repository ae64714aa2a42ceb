//! Record types delivered by the data service.
//!
//! Field names follow the service's JSON bodies so the types deserialize
//! straight from `/fires/month/{y}/{m}`, `/weather/month/{y}/{m}` and
//! `/warehouses`.  Extra fields (`id`, `created_at`, ...) are ignored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ─── Day status ──────────────────────────────────────────────────────────────

/// Fire-risk classification of a pile observation or a calendar day.
///
/// Variants are declared in ascending severity so the derived `Ord`
/// agrees with [`DayStatus::severity`]: `Fire > Risk > Safe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Safe,
    Risk,
    Fire,
}

impl DayStatus {
    pub const ALL: [DayStatus; 3] = [DayStatus::Safe, DayStatus::Risk, DayStatus::Fire];

    /// Severity rank: safe = 1, risk = 2, fire = 3.
    pub fn severity(self) -> u8 {
        match self {
            DayStatus::Safe => 1,
            DayStatus::Risk => 2,
            DayStatus::Fire => 3,
        }
    }

    /// Human-readable label for legends and detail views.
    pub fn label(self) -> &'static str {
        match self {
            DayStatus::Safe => "Safe",
            DayStatus::Risk => "Fire risk",
            DayStatus::Fire => "Fire",
        }
    }

    /// Wire name, as used by the data service.
    pub fn as_str(self) -> &'static str {
        match self {
            DayStatus::Safe => "safe",
            DayStatus::Risk => "risk",
            DayStatus::Fire => "fire",
        }
    }
}

impl std::fmt::Display for DayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Fire ────────────────────────────────────────────────────────────────────

/// A dated observation tagging one pile of one warehouse with a status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireRecord {
    pub date: NaiveDate,
    pub warehouse_id: i64,
    #[serde(default)]
    pub warehouse_name: Option<String>,
    pub pile_id: i64,
    #[serde(default)]
    pub pile_name: Option<String>,
    pub status: DayStatus,
    /// Relative humidity, percent.
    #[serde(default)]
    pub humidity: Option<f64>,
    /// Metres per second.
    #[serde(default)]
    pub wind_speed: Option<f64>,
}

impl FireRecord {
    /// Record without names or measurements.
    pub fn new(date: NaiveDate, warehouse_id: i64, pile_id: i64, status: DayStatus) -> Self {
        FireRecord {
            date,
            warehouse_id,
            warehouse_name: None,
            pile_id,
            pile_name: None,
            status,
            humidity: None,
            wind_speed: None,
        }
    }

    /// Warehouse name, or `#id` when the service did not resolve one.
    pub fn warehouse_label(&self) -> String {
        self.warehouse_name
            .clone()
            .unwrap_or_else(|| format!("#{}", self.warehouse_id))
    }

    /// Pile name, or `#id` when the service did not resolve one.
    pub fn pile_label(&self) -> String {
        self.pile_name
            .clone()
            .unwrap_or_else(|| format!("#{}", self.pile_id))
    }
}

impl std::fmt::Display for FireRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Fire({}, {}/{}, {})",
            self.date,
            self.warehouse_label(),
            self.pile_label(),
            self.status
        )
    }
}

// ─── Weather ─────────────────────────────────────────────────────────────────

/// Environmental snapshot for one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub date: NaiveDate,
    /// Degrees Celsius.
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub wind_speed: Option<f64>,
    /// Degrees from north.
    #[serde(default)]
    pub wind_direction: Option<f64>,
    /// Millimetres.
    #[serde(default)]
    pub precipitation: Option<f64>,
}

impl WeatherRecord {
    /// Record with every measurement missing.
    pub fn empty(date: NaiveDate) -> Self {
        WeatherRecord {
            date,
            temperature: None,
            humidity: None,
            wind_speed: None,
            wind_direction: None,
            precipitation: None,
        }
    }
}

// ─── Topology ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pile {
    pub id: i64,
    pub warehouse_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub piles: Vec<Pile>,
}

/// Piles of warehouse `warehouse_id`.
///
/// An unknown warehouse and a warehouse without piles both yield an empty
/// slice; callers cannot tell the two apart.
pub fn piles_of(warehouses: &[Warehouse], warehouse_id: i64) -> &[Pile] {
    warehouses
        .iter()
        .find(|w| w.id == warehouse_id)
        .map(|w| w.piles.as_slice())
        .unwrap_or(&[])
}

// ─── tests ───────────────────────────────────────────────────────────────
