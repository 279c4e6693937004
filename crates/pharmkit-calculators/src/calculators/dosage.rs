use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pharmkit_core::{Evaluation, field, format};

use crate::Calculator;

/// Dosage calculator: daily dose from weight or entered directly, then
/// dispensed as a liquid volume or a tablet count.
pub struct Dosage;

impl Calculator for Dosage {
    fn id(&self) -> &str {
        "dosage"
    }

    fn name(&self) -> &str {
        "Dosage Calculator"
    }

    fn description(&self) -> &str {
        "Calculate the appropriate medication dosage based on an individual's weight, \
         expressed in either milliliters (ml) or the number of tablets."
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DoseMethod {
    /// `daily dose = weight × mg/kg`.
    #[default]
    WeightBased,
    /// The total daily mg dose is entered directly.
    Direct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Formulation {
    #[default]
    Liquid,
    Tablet,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DosageForm {
    pub method: DoseMethod,
    pub weight: String,
    pub mg_per_kg: String,
    pub total_dose: String,
    pub formulation: Formulation,
    /// Liquid concentration, e.g. 300 mg / 5 ml.
    pub liquid_mg: String,
    pub liquid_ml: String,
    pub tablet_strength: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DosageResult {
    /// Partial result, shown as soon as the daily dose is known.
    pub daily_dose: Evaluation,
    pub preparation: Evaluation,
}

impl DosageForm {
    pub fn evaluate(&self) -> DosageResult {
        let daily = match self.method {
            DoseMethod::WeightBased => {
                match (field::positive(&self.weight), field::positive(&self.mg_per_kg)) {
                    (Some(weight), Some(mg_per_kg)) => Some(weight * mg_per_kg),
                    _ => None,
                }
            }
            DoseMethod::Direct => field::positive(&self.total_dose),
        };

        let Some(daily) = daily else {
            return DosageResult {
                daily_dose: Evaluation::Incomplete,
                preparation: Evaluation::Incomplete,
            };
        };

        let preparation = match self.formulation {
            Formulation::Liquid => {
                match (field::positive(&self.liquid_mg), field::positive(&self.liquid_ml)) {
                    (Some(mg), Some(ml)) => {
                        let volume = daily / (mg / ml);
                        Some(format!(
                            "{} ml ({} mg total) of {} mg/{} ml solution",
                            format::fixed(volume, 1),
                            format::fixed(daily, 1),
                            format::plain(mg),
                            format::plain(ml),
                        ))
                    }
                    _ => None,
                }
            }
            Formulation::Tablet => field::positive(&self.tablet_strength).map(|strength| {
                format!(
                    "{} tablets ({} mg total)",
                    format::fixed(daily / strength, 1),
                    format::fixed(daily, 1),
                )
            }),
        };

        DosageResult {
            daily_dose: Evaluation::Ready(format!(
                "Total daily dose: {} mg",
                format::fixed(daily, 1)
            )),
            preparation: preparation.into(),
        }
    }
}
