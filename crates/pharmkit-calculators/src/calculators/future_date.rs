use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pharmkit_core::{Evaluation, dates, field};

use crate::Calculator;

/// Future date calculator: start date + N days/weeks/months.
pub struct FutureDate;

impl Calculator for FutureDate {
    fn id(&self) -> &str {
        "future_date"
    }

    fn name(&self) -> &str {
        "Future Date Calculator"
    }

    fn description(&self) -> &str {
        "Patient needs a repeat blood test in 6 weeks/months etc? Calculate target \
         dates here."
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DurationUnit {
    #[default]
    Days,
    Weeks,
    Months,
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self {
            DurationUnit::Days => "days",
            DurationUnit::Weeks => "weeks",
            DurationUnit::Months => "months",
        };
        f.write_str(unit)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FutureDateForm {
    pub start_date: String,
    pub duration: String,
    pub unit: DurationUnit,
}

impl FutureDateForm {
    pub fn evaluate(&self) -> Evaluation {
        let (Some(start), Some(duration)) = (
            field::date(&self.start_date),
            field::positive_integer(&self.duration),
        ) else {
            return Evaluation::Incomplete;
        };

        let target = match self.unit {
            DurationUnit::Days => dates::add_days(start, duration),
            DurationUnit::Weeks => dates::add_days(start, duration * 7),
            DurationUnit::Months => dates::add_months_rolling(start, duration),
        };

        target
            .map(|target| {
                format!(
                    "Target date: {} (Start date: {}, Interval: {} {})",
                    dates::format_dmy(target),
                    dates::format_dmy(start),
                    duration,
                    self.unit,
                )
            })
            .into()
    }
}
