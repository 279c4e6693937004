use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pharmkit_core::{Evaluation, field, format};

use crate::Calculator;

/// Percentage increase/decrease calculator, e.g. for tracking a change
/// in creatinine or eGFR between two lab results.
pub struct PercentageChange;

impl Calculator for PercentageChange {
    fn id(&self) -> &str {
        "percentage_change"
    }

    fn name(&self) -> &str {
        "Percentage Change Calculator"
    }

    fn description(&self) -> &str {
        "Determine the percentage drop or increase in a lab result eg eGFR and action \
         according to current guidelines."
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PercentageChangeForm {
    pub previous: String,
    pub current: String,
}

impl PercentageChangeForm {
    pub fn evaluate(&self) -> Evaluation {
        let (Some(previous), Some(current)) = (
            field::decimal(&self.previous),
            field::decimal(&self.current),
        ) else {
            return Evaluation::Incomplete;
        };
        // A zero baseline makes the ratio meaningless; show nothing.
        if previous == 0.0 {
            return Evaluation::Incomplete;
        }

        let change = (current - previous) / previous * 100.0;
        Evaluation::Ready(format!("Percentage change: {}%", format::fixed(change, 2)))
    }
}
