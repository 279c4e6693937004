use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pharmkit_core::{Evaluation, dates, field};

use crate::Calculator;

/// Medication end date calculator: when should a supply run out, and how
/// many days remain from today.
pub struct MedicationEndDate;

impl Calculator for MedicationEndDate {
    fn id(&self) -> &str {
        "medication_end_date"
    }

    fn name(&self) -> &str {
        "Medication End Date Calculator"
    }

    fn description(&self) -> &str {
        "Concerned that a patient is ordering medication too early? Use this tool to \
         calculate the correct medication run-out date."
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MedFormulation {
    /// Quantities are tablet counts.
    #[default]
    Solid,
    /// Quantities are volumes.
    Liquid,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MedicationEndDateForm {
    pub formulation: MedFormulation,
    pub issue_date: String,
    pub daily_usage: String,
    pub quantity_supplied: String,
}

impl MedicationEndDateForm {
    /// `today` is supplied by the caller so the calculation stays pure.
    pub fn evaluate(&self, today: Date) -> Evaluation {
        let (Some(issued), Some(daily), Some(quantity)) = (
            field::date(&self.issue_date),
            field::positive(&self.daily_usage),
            field::positive(&self.quantity_supplied),
        ) else {
            return Evaluation::Incomplete;
        };

        let days_supply = quantity / daily;
        // Counts the issue date itself as day 1, hence the -1. The source
        // tool uses the same arithmetic.
        let Some(run_out) = dates::add_days(issued, days_supply.floor() as i64 - 1) else {
            return Evaluation::Incomplete;
        };

        let remaining = dates::days_between(today, run_out);
        let run_out_str = dates::format_dmy(run_out);

        let message = if remaining < 0 {
            format!("Medication should have run out on {run_out_str}")
        } else {
            format!(
                "Patient should have a sufficient supply to last {remaining} days \
                 (lasting until {run_out_str})"
            )
        };
        Evaluation::Ready(message)
    }
}
