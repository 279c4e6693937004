use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pharmkit_core::{Evaluation, dates, field, format};

use crate::Calculator;

/// Insulin duration calculator: days a supply lasts, or devices needed
/// to cover a day count.
pub struct Insulin;

impl Calculator for Insulin {
    fn id(&self) -> &str {
        "insulin"
    }

    fn name(&self) -> &str {
        "Insulin Duration Calculator"
    }

    fn description(&self) -> &str {
        "Calculate the number of days an insulin supply will last based on daily unit \
         usage and the total quantity provided."
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InsulinMode {
    /// How many days will the supply last?
    #[default]
    Duration,
    /// How many devices for X days?
    Quantity,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InsulinForm {
    pub mode: InsulinMode,
    pub units_per_ml: String,
    pub ml_per_device: String,
    pub daily_units: String,
    /// Duration mode only.
    pub devices_supplied: String,
    /// Quantity mode only.
    pub days_needed: String,
    /// Optional prescription-date section (duration mode only).
    pub use_prescription_date: bool,
    pub prescription_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InsulinResult {
    pub supply: Evaluation,
    pub run_out: Evaluation,
}

impl InsulinForm {
    pub fn evaluate(&self) -> InsulinResult {
        let units_per_device = match (
            field::positive(&self.units_per_ml),
            field::positive(&self.ml_per_device),
        ) {
            (Some(units), Some(ml)) => Some(units * ml),
            _ => None,
        };

        match self.mode {
            InsulinMode::Duration => {
                let supply_days = match (
                    units_per_device,
                    field::positive(&self.devices_supplied),
                    field::positive(&self.daily_units),
                ) {
                    (Some(per_device), Some(devices), Some(daily)) => {
                        Some(per_device * devices / daily)
                    }
                    _ => None,
                };

                let supply = supply_days.map(|days| {
                    format!(
                        "Supply should last for approximately {} days.",
                        format::fixed(days, 1)
                    )
                });

                let run_out = match (supply_days, self.use_prescription_date) {
                    (Some(days), true) => field::date(&self.prescription_date)
                        .and_then(|issued| dates::add_days(issued, days.floor() as i64))
                        .map(|date| {
                            format!(
                                "Based on the prescription date, the medication should run out \
                                 on {}.",
                                dates::format_dmy(date)
                            )
                        }),
                    _ => None,
                };

                InsulinResult {
                    supply: supply.into(),
                    run_out: run_out.into(),
                }
            }
            InsulinMode::Quantity => {
                let supply = match (
                    units_per_device,
                    field::positive(&self.days_needed),
                    field::positive(&self.daily_units),
                ) {
                    (Some(per_device), Some(days), Some(daily)) => {
                        let devices = daily * days / per_device;
                        Some(format!(
                            "You need {} devices to cover {} days.",
                            format::fixed(devices, 1),
                            format::fixed(days, 1),
                        ))
                    }
                    _ => None,
                };

                InsulinResult {
                    supply: supply.into(),
                    run_out: Evaluation::Incomplete,
                }
            }
        }
    }
}
