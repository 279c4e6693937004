use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pharmkit_core::{Evaluation, field, format};

use crate::Calculator;

/// Oestrogel duration calculator. Pack constants from the SPC: each
/// device holds 80 g of gel, each pump actuation delivers 1.25 g.
pub struct Oestrogel;

const DEVICE_GRAMS: f64 = 80.0;
const PUMP_GRAMS: f64 = 1.25;

impl Calculator for Oestrogel {
    fn id(&self) -> &str {
        "oestrogel"
    }

    fn name(&self) -> &str {
        "Oestrogel Duration Calculator"
    }

    fn description(&self) -> &str {
        "Calculate the number of days a supply of Oestrogel will last based on number \
         of pumps to be used and the total quantity provided."
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OestrogelMode {
    #[default]
    Duration,
    Quantity,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OestrogelForm {
    pub mode: OestrogelMode,
    pub pumps_per_day: String,
    pub devices_supplied: String,
    pub days_needed: String,
}

impl OestrogelForm {
    pub fn evaluate(&self) -> Evaluation {
        let Some(pumps) = field::positive(&self.pumps_per_day) else {
            return Evaluation::Incomplete;
        };
        let daily_grams = PUMP_GRAMS * pumps;

        let message = match self.mode {
            OestrogelMode::Duration => field::positive(&self.devices_supplied).map(|devices| {
                let days = DEVICE_GRAMS * devices / daily_grams;
                format!(
                    "At {} pumps per day, this supply should last approximately {} days.",
                    format::fixed(pumps, 1),
                    format::fixed(days, 1),
                )
            }),
            OestrogelMode::Quantity => field::positive(&self.days_needed).map(|days| {
                let devices = daily_grams * days / DEVICE_GRAMS;
                format!(
                    "You need {} devices to cover {} days at {} pumps per day.",
                    format::fixed(devices, 1),
                    format::fixed(days, 1),
                    format::fixed(pumps, 1),
                )
            }),
        };

        message.into()
    }
}
