use std::error::Error;
use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::domain::{ReportPeriod, Weekday};

/// One category's flow data. The label is the identity key within a sequence.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CashFlowRecord {
    label: String,
    cash_in: f64,
    cash_out: f64,
}

impl CashFlowRecord {
    pub fn new(label: impl Into<String>, cash_in: f64, cash_out: f64) -> Self {
        Self {
            label: label.into(),
            cash_in,
            cash_out,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn cash_in(&self) -> f64 {
        self.cash_in
    }

    pub fn cash_out(&self) -> f64 {
        self.cash_out
    }

    /// Net movement for the category (in minus out).
    pub fn net(&self) -> f64 {
        self.cash_in - self.cash_out
    }

    fn check_amounts(&self) -> Result<(), SeriesError> {
        for value in [self.cash_in, self.cash_out] {
            if !value.is_finite() {
                return Err(SeriesError::NonFiniteAmount {
                    label: self.label.clone(),
                });
            }
            if value < 0.0 {
                return Err(SeriesError::NegativeAmount {
                    label: self.label.clone(),
                    value,
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for CashFlowRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (in: {:.2}, out: {:.2})",
            self.label, self.cash_in, self.cash_out
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SeriesError {
    Empty(ReportPeriod),
    DuplicateLabel { period: ReportPeriod, label: String },
    NegativeAmount { label: String, value: f64 },
    NonFiniteAmount { label: String },
}

impl fmt::Display for SeriesError {
    fn fmt(&self, f: &mut fmt::Formatter) -> std::fmt::Result {
        match self {
            SeriesError::Empty(period) => write!(f, "{} has no records", period),
            SeriesError::DuplicateLabel { period, label } => {
                write!(f, "{} contains label '{}' more than once", period, label)
            }
            SeriesError::NegativeAmount { label, value } => {
                write!(f, "Negative amount {} for '{}'", value, label)
            }
            SeriesError::NonFiniteAmount { label } => {
                write!(f, "Non-finite amount for '{}'", label)
            }
        }
    }
}

impl Error for SeriesError {}

/// Week-to-date and month-to-date records, each in display order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CashFlowSeries {
    pub week_to_date: Vec<CashFlowRecord>,
    pub month_to_date: Vec<CashFlowRecord>,
}

impl CashFlowSeries {
    pub fn new(week_to_date: Vec<CashFlowRecord>, month_to_date: Vec<CashFlowRecord>) -> Self {
        Self {
            week_to_date,
            month_to_date,
        }
    }

    /// Fixed values, one record per weekday. Used when no randomness is available.
    pub fn fixture() -> Self {
        const WEEK: [(f64, f64); 5] = [
            (120.0, 70.0),
            (45.0, 90.0),
            (80.0, 30.0),
            (95.0, 110.0),
            (60.0, 55.0),
        ];
        const MONTH: [(f64, f64); 5] = [
            (140.0, 85.0),
            (65.0, 120.0),
            (100.0, 40.0),
            (110.0, 135.0),
            (75.0, 60.0),
        ];

        let build = |values: &[(f64, f64)]| -> Vec<CashFlowRecord> {
            Weekday::iter()
                .zip(values)
                .map(|(day, &(cash_in, cash_out))| CashFlowRecord::new(day.label(), cash_in, cash_out))
                .collect()
        };

        Self::new(build(&WEEK), build(&MONTH))
    }

    pub fn records(&self, period: ReportPeriod) -> &[CashFlowRecord] {
        match period {
            ReportPeriod::Week => &self.week_to_date,
            ReportPeriod::Month => &self.month_to_date,
        }
    }

    /// Linear search by label.
    pub fn find(&self, period: ReportPeriod, label: &str) -> Option<&CashFlowRecord> {
        self.records(period).iter().find(|r| r.label() == label)
    }

    pub fn labels(&self, period: ReportPeriod) -> Vec<&str> {
        self.records(period).iter().map(|r| r.label()).collect()
    }

    /// True when both sequences carry the same labels in the same order.
    pub fn same_shape(&self, other: &CashFlowSeries) -> bool {
        [ReportPeriod::Week, ReportPeriod::Month]
            .into_iter()
            .all(|p| self.labels(p) == other.labels(p))
    }

    pub fn validate(&self) -> Result<(), SeriesError> {
        for period in [ReportPeriod::Week, ReportPeriod::Month] {
            let records = self.records(period);
            if records.is_empty() {
                return Err(SeriesError::Empty(period));
            }
            if let Some(label) = records.iter().map(|r| r.label()).duplicates().next() {
                return Err(SeriesError::DuplicateLabel {
                    period,
                    label: label.to_string(),
                });
            }
            records.iter().try_for_each(|r| r.check_amounts())?;
        }
        Ok(())
    }
}
