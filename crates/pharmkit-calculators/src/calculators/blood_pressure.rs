use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pharmkit_core::{Evaluation, field, format};

use crate::Calculator;

/// Home blood pressure average calculator.
///
/// Readings live in an ordered, append-only row list. A blank trailing
/// row is appended as soon as the last row is completed, so there is
/// always somewhere to type the next reading; rows are never removed
/// automatically.
pub struct BloodPressure;

impl Calculator for BloodPressure {
    fn id(&self) -> &str {
        "blood_pressure"
    }

    fn name(&self) -> &str {
        "Blood Pressure Average Calculator"
    }

    fn description(&self) -> &str {
        "Calculate the average home blood pressure reading and display a chart that \
         illustrates the variation over time."
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BpRow {
    pub systolic: String,
    pub diastolic: String,
}

impl BpRow {
    fn reading(&self) -> Option<(f64, f64)> {
        match (field::decimal(&self.systolic), field::decimal(&self.diastolic)) {
            (Some(systolic), Some(diastolic)) => Some((systolic, diastolic)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BloodPressureForm {
    pub rows: Vec<BpRow>,
}

impl Default for BloodPressureForm {
    fn default() -> Self {
        Self {
            rows: vec![BpRow::default()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BloodPressureResult {
    pub reading_count: usize,
    pub systolic: Evaluation,
    pub diastolic: Evaluation,
}

impl BloodPressureForm {
    /// Re-establish the trailing-blank-row invariant after an edit.
    pub fn normalise(&mut self) {
        if self.rows.is_empty() {
            self.rows.push(BpRow::default());
            return;
        }
        let last = self.rows.last().expect("rows is non-empty");
        if last.reading().is_some() {
            self.rows.push(BpRow::default());
        }
    }

    pub fn evaluate(&self) -> BloodPressureResult {
        let readings: Vec<(f64, f64)> = self.rows.iter().filter_map(BpRow::reading).collect();

        if readings.is_empty() {
            return BloodPressureResult {
                reading_count: 0,
                systolic: Evaluation::Incomplete,
                diastolic: Evaluation::Incomplete,
            };
        }

        let count = readings.len() as f64;
        let systolic_mean = readings.iter().map(|(s, _)| s).sum::<f64>() / count;
        let diastolic_mean = readings.iter().map(|(_, d)| d).sum::<f64>() / count;

        BloodPressureResult {
            reading_count: readings.len(),
            systolic: Evaluation::Ready(format!(
                "Average Systolic: {}",
                format::fixed(systolic_mean, 2)
            )),
            diastolic: Evaluation::Ready(format!(
                "Average Diastolic: {}",
                format::fixed(diastolic_mean, 2)
            )),
        }
    }
}
