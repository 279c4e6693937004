//! pharmkit-calculators
//!
//! Clinical calculator definitions for the practice pharmacy toolkit.
//! Each calculator is a self-contained module: a form of raw text fields,
//! a pure `evaluate` function, and a formatted result. Pure data and
//! arithmetic — no I/O.

pub mod calculators;
pub mod error;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Trait implemented by each calculator tool.
pub trait Calculator: Send + Sync {
    /// Unique identifier for this tool (e.g., "dosage", "opioid_conversion").
    fn id(&self) -> &str;

    /// Human-readable name shown in the tool catalogue.
    fn name(&self) -> &str;

    /// One-sentence description shown on the landing page.
    fn description(&self) -> &str;
}

/// Catalogue entry for a calculator, safe to send to the frontend.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CalculatorInfo {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Return all registered calculators, in catalogue order.
pub fn all_calculators() -> Vec<Box<dyn Calculator>> {
    vec![
        Box::new(calculators::dosage::Dosage),
        Box::new(calculators::blood_pressure::BloodPressure),
        Box::new(calculators::percentage_change::PercentageChange),
        Box::new(calculators::future_date::FutureDate),
        Box::new(calculators::quantity_sync::QuantitySync),
        Box::new(calculators::medication_end_date::MedicationEndDate),
        Box::new(calculators::metric_imperial::MetricImperial),
        Box::new(calculators::insulin::Insulin),
        Box::new(calculators::eye_drops::EyeDrops),
        Box::new(calculators::oestrogel::Oestrogel),
        Box::new(calculators::opioid::OpioidConversion),
        Box::new(calculators::tinzaparin::Tinzaparin),
        Box::new(calculators::non_hdl::NonHdlCholesterol),
        Box::new(calculators::hrt_progestogen::HrtProgestogen),
    ]
}

/// Look up a calculator by ID.
pub fn get_calculator(id: &str) -> Option<Box<dyn Calculator>> {
    all_calculators().into_iter().find(|c| c.id() == id)
}

/// The catalogue as serialisable records.
pub fn catalogue() -> Vec<CalculatorInfo> {
    all_calculators()
        .iter()
        .map(|c| CalculatorInfo {
            id: c.id().to_string(),
            name: c.name().to_string(),
            description: c.description().to_string(),
        })
        .collect()
}
