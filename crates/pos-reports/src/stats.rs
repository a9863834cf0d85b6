//! Cash statistics by time window.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use pos_types::time::parse_timestamp;
use pos_types::{Amount, CashMovement, CashMovementType};
use serde::{Deserialize, Serialize};

/// Period the statistics view covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Window {
    /// Whole history.
    #[default]
    Total,
    /// Since January 1st.
    Year,
    /// Since the first of the month.
    Month,
    /// Last seven days.
    Week,
    /// Today only.
    Today,
}

impl Window {
    /// Toggle order of the statistics view.
    pub const ALL: [Window; 5] = [
        Window::Total,
        Window::Year,
        Window::Month,
        Window::Week,
        Window::Today,
    ];

    /// First day included, `None` for the whole history.
    pub fn from_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Window::Total => None,
            Window::Year => NaiveDate::from_ymd_opt(today.year(), 1, 1),
            Window::Month => NaiveDate::from_ymd_opt(today.year(), today.month(), 1),
            Window::Week => today.checked_sub_signed(Duration::days(7)),
            Window::Today => Some(today),
        }
    }

    /// `from_date` as the `YYYY-MM-DD` query parameter.
    pub fn query_param(&self, today: NaiveDate) -> Option<String> {
        self.from_date(today)
            .map(|d| d.format("%Y-%m-%d").to_string())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Window::Total => "Históricos (Total)",
            Window::Year => "del Año",
            Window::Month => "del Mes",
            Window::Week => "de la Semana",
            Window::Today => "de Hoy",
        }
    }

    /// Next window in toggle order, wrapping around.
    pub fn next(&self) -> Window {
        let idx = Self::ALL.iter().position(|w| w == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Window::Total => "total",
            Window::Year => "year",
            Window::Month => "month",
            Window::Week => "week",
            Window::Today => "today",
        };
        f.write_str(name)
    }
}

impl FromStr for Window {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "total" | "all" => Ok(Window::Total),
            "year" => Ok(Window::Year),
            "month" => Ok(Window::Month),
            "week" => Ok(Window::Week),
            "today" | "day" => Ok(Window::Today),
            other => Err(format!("unknown window: {other}")),
        }
    }
}

/// Income and expenses over a set of movements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CashSummary {
    /// Sum of positive amounts.
    pub income: Amount,
    /// Sum of the absolute value of negative amounts.
    pub expenses: Amount,
    pub movement_count: usize,
    /// Net amount per movement type.
    pub by_type: BTreeMap<CashMovementType, Amount>,
}

impl CashSummary {
    pub fn from_movements(movements: &[CashMovement]) -> Self {
        let mut summary = Self {
            movement_count: movements.len(),
            ..Self::default()
        };

        for movement in movements {
            if movement.amount > 0 {
                summary.income = summary.income.saturating_add(movement.amount);
            } else {
                summary.expenses = summary
                    .expenses
                    .saturating_add(movement.amount.saturating_abs());
            }
            let entry = summary.by_type.entry(movement.kind).or_insert(0);
            *entry = entry.saturating_add(movement.amount);
        }

        summary
    }

    /// `income - expenses`.
    pub fn net(&self) -> Amount {
        self.income.saturating_sub(self.expenses)
    }
}

/// Extraction movements, newest first.
pub fn extractions(movements: &[CashMovement]) -> Vec<&CashMovement> {
    let mut out: Vec<&CashMovement> = movements
        .iter()
        .filter(|m| m.kind == CashMovementType::Extraction)
        .collect();
    out.sort_by(|a, b| {
        match (parse_timestamp(&a.date), parse_timestamp(&b.date)) {
            (Some(da), Some(db)) => db.cmp(&da),
            _ => b.date.cmp(&a.date),
        }
    });
    out
}
