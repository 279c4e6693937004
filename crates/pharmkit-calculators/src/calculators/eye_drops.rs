use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pharmkit_core::{Evaluation, dates, field, format};

use crate::Calculator;

/// Eye drop duration calculator.
pub struct EyeDrops;

impl Calculator for EyeDrops {
    fn id(&self) -> &str {
        "eye_drops"
    }

    fn name(&self) -> &str {
        "Eye Drop Duration Calculator"
    }

    fn description(&self) -> &str {
        "Calculate the number of days an eye drop supply will last based on the drops \
         used per day and the quantity provided."
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BottleMeasure {
    /// Bottle volume in ml plus a per-drop volume.
    #[default]
    Volume,
    /// Drop count per bottle entered directly.
    Drops,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EyeUsage {
    #[default]
    One,
    Both,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EyeDropsForm {
    pub bottles: String,
    pub bottle_measure: BottleMeasure,
    pub bottle_volume: String,
    pub drop_volume: String,
    pub drops_per_bottle: String,
    /// Drops used per day, per eye.
    pub daily_drops: String,
    pub eye_usage: EyeUsage,
    pub use_prescription_date: bool,
    pub prescription_date: String,
}

impl Default for EyeDropsForm {
    fn default() -> Self {
        Self {
            bottles: String::new(),
            bottle_measure: BottleMeasure::default(),
            bottle_volume: String::new(),
            // Standard assumption for ophthalmic droppers.
            drop_volume: "0.05".to_string(),
            drops_per_bottle: String::new(),
            daily_drops: String::new(),
            eye_usage: EyeUsage::default(),
            use_prescription_date: false,
            prescription_date: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EyeDropsResult {
    pub supply: Evaluation,
    pub run_out: Evaluation,
}

impl EyeDropsForm {
    pub fn evaluate(&self) -> EyeDropsResult {
        let total_drops = field::positive(&self.bottles).and_then(|bottles| {
            match self.bottle_measure {
                BottleMeasure::Volume => {
                    match (
                        field::positive(&self.bottle_volume),
                        field::positive(&self.drop_volume),
                    ) {
                        (Some(volume), Some(drop)) => Some(bottles * (volume / drop)),
                        _ => None,
                    }
                }
                BottleMeasure::Drops => {
                    field::positive(&self.drops_per_bottle).map(|drops| bottles * drops)
                }
            }
        });

        let daily_usage = field::positive(&self.daily_drops).map(|per_eye| {
            per_eye
                * match self.eye_usage {
                    EyeUsage::Both => 2.0,
                    EyeUsage::One => 1.0,
                }
        });

        let supply_days = match (total_drops, daily_usage) {
            (Some(total), Some(daily)) => Some(total / daily),
            _ => None,
        };

        let supply = supply_days.map(|days| {
            format!(
                "Your supply will last approximately {} days.",
                format::fixed(days, 1)
            )
        });

        let run_out = match (supply_days, self.use_prescription_date) {
            (Some(days), true) => field::date(&self.prescription_date)
                .and_then(|issued| dates::add_days(issued, days.floor() as i64))
                .map(|date| {
                    format!(
                        "Based on the prescription date, the medication should run out on {}.",
                        dates::format_dmy(date)
                    )
                }),
            _ => None,
        };

        EyeDropsResult {
            supply: supply.into(),
            run_out: run_out.into(),
        }
    }
}
