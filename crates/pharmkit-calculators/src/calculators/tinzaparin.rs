use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pharmkit_core::{field, format};

use crate::Calculator;

/// Tinzaparin treatment dosing: weight × band units/kg, rounded to the
/// nearest 1,000 IU, using 20,000 units/ml pre-filled syringes.
pub struct Tinzaparin;

const SYRINGE_UNITS_PER_ML: f64 = 20_000.0;

impl Calculator for Tinzaparin {
    fn id(&self) -> &str {
        "tinzaparin"
    }

    fn name(&self) -> &str {
        "Tinzaparin Dosing Tool"
    }

    fn description(&self) -> &str {
        "Calculate Tinzaparin treament dose based on weight."
    }
}

/// Creatinine clearance band used to select the units/kg constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CrclBand {
    /// Creatinine clearance ≥ 30 ml/min: 175 units/kg once daily.
    #[default]
    AtLeast30,
    /// Dosing for reduced clearance is deliberately not offered while its
    /// appropriateness for a primary-care tool is under review.
    Below30,
}

impl CrclBand {
    fn units_per_kg(self) -> Option<f64> {
        match self {
            CrclBand::AtLeast30 => Some(175.0),
            CrclBand::Below30 => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TinzaparinForm {
    pub band: CrclBand,
    pub weight: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum TinzaparinResult {
    Incomplete,
    /// The selected clearance band has no dose table entry.
    Unsupported,
    Ready { message: String, note: String },
}

impl TinzaparinForm {
    pub fn evaluate(&self) -> TinzaparinResult {
        let Some(units_per_kg) = self.band.units_per_kg() else {
            return TinzaparinResult::Unsupported;
        };
        let Some(weight) = field::positive(&self.weight) else {
            return TinzaparinResult::Incomplete;
        };

        let raw_dose = units_per_kg * weight;
        let rounded = (raw_dose / 1000.0).round() as i64 * 1000;
        let volume = rounded as f64 / SYRINGE_UNITS_PER_ML;

        TinzaparinResult::Ready {
            message: format!(
                "Recommended Tinzaparin dose: approx. {} units (≈ {} ml) once daily \
                 using a 20,000 units per ml pre-filled syringe.",
                format::group_thousands(rounded),
                format::fixed(volume, 2),
            ),
            note: "Doses are administered in 1,000 IU increments facilitated by the \
                   0.05 ml graduations on the syringes. The calculated dose, based on \
                   the patient's body weight, is therefore rounded up or down as \
                   appropriate"
                .to_string(),
        }
    }
}
