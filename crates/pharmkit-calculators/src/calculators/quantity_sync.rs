use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pharmkit_core::{Evaluation, field};

use crate::Calculator;

/// Quantity synchronisation calculator: how many tablets of each
/// medicine to issue so that everything runs out on the same day.
pub struct QuantitySync;

impl Calculator for QuantitySync {
    fn id(&self) -> &str {
        "quantity_sync"
    }

    fn name(&self) -> &str {
        "Quantity Synchronisation"
    }

    fn description(&self) -> &str {
        "Medication running out at different times? Use this calculator to determine \
         the number of tablets required to bring them all in line."
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MedicationRow {
    pub drug_name: String,
    pub tablets_per_day: String,
    pub tablets_remaining: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuantitySyncForm {
    pub number_of_meds: String,
    pub days: String,
    pub rows: Vec<MedicationRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuantitySyncResult {
    /// One entry per row, in row order.
    pub rows: Vec<Evaluation>,
}

impl QuantitySyncForm {
    /// Entering a medicine count materialises that many rows, named
    /// `Drug 1..N`; an invalid count clears the table.
    pub fn set_medicine_count(&mut self, raw: &str) {
        self.number_of_meds = raw.to_string();
        match field::positive_integer(raw) {
            Some(count) => {
                self.rows = (1..=count)
                    .map(|i| MedicationRow {
                        drug_name: format!("Drug {i}"),
                        tablets_per_day: String::new(),
                        tablets_remaining: String::new(),
                    })
                    .collect();
            }
            None => self.rows.clear(),
        }
    }

    pub fn evaluate(&self) -> QuantitySyncResult {
        let days = field::integer(&self.days);

        let rows = self
            .rows
            .iter()
            .map(|row| {
                let (Some(days), Some(per_day), Some(remaining)) = (
                    days,
                    field::integer(&row.tablets_per_day),
                    field::integer(&row.tablets_remaining),
                ) else {
                    return Evaluation::Incomplete;
                };

                let to_issue = (days * per_day - remaining).max(0);
                let message = if to_issue > 0 {
                    format!("{} tablets of {} to be issued", to_issue, row.drug_name)
                } else {
                    format!("No additional tablets of {} required", row.drug_name)
                };
                Evaluation::Ready(message)
            })
            .collect();

        QuantitySyncResult { rows }
    }
}
