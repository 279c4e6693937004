use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pharmkit_core::{Evaluation, field, format};

use crate::Calculator;

/// Metric↔imperial conversion for weight and height. Whichever side has
/// a value drives the conversion; the metric field wins when both are
/// populated (the shell disables the other side's inputs anyway).
pub struct MetricImperial;

const STONE_KG: f64 = 6.35029318;
const POUND_KG: f64 = 0.45359237;
const POUNDS_PER_STONE: f64 = 14.0;
const INCH_CM: f64 = 2.54;
const INCHES_PER_FOOT: f64 = 12.0;

impl Calculator for MetricImperial {
    fn id(&self) -> &str {
        "metric_imperial"
    }

    fn name(&self) -> &str {
        "Metric Imperial Conversion Calculator"
    }

    fn description(&self) -> &str {
        "Convert height and weight between metric and imperial units."
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ConversionMode {
    #[default]
    Weight,
    Height,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetricImperialForm {
    pub mode: ConversionMode,
    pub kg: String,
    pub stone: String,
    pub pounds: String,
    pub cm: String,
    pub feet: String,
    pub inches: String,
}

impl MetricImperialForm {
    pub fn evaluate(&self) -> Evaluation {
        let message = match self.mode {
            ConversionMode::Weight => self.convert_weight(),
            ConversionMode::Height => self.convert_height(),
        };
        message.into()
    }

    fn convert_weight(&self) -> Option<String> {
        if let Some(kg) = field::positive(&self.kg) {
            let total_stone = kg / STONE_KG;
            let whole_stone = total_stone.floor();
            let pounds = (total_stone - whole_stone) * POUNDS_PER_STONE;
            return Some(format!(
                "{} stone and {} lb is equivalent to {} kg",
                format::fixed(whole_stone, 0),
                format::fixed(pounds, 1),
                format::fixed(kg, 1),
            ));
        }

        match (field::decimal(&self.stone), field::decimal(&self.pounds)) {
            (Some(stone), Some(pounds)) if stone > 0.0 || pounds > 0.0 => {
                let kg = stone * STONE_KG + pounds * POUND_KG;
                Some(format!(
                    "{} kg is equivalent to {} stone and {} lb",
                    format::fixed(kg, 1),
                    format::fixed(stone, 0),
                    format::fixed(pounds, 1),
                ))
            }
            _ => None,
        }
    }

    fn convert_height(&self) -> Option<String> {
        if let Some(cm) = field::positive(&self.cm) {
            let total_inches = cm / INCH_CM;
            let whole_feet = (total_inches / INCHES_PER_FOOT).floor();
            let inches = total_inches - whole_feet * INCHES_PER_FOOT;
            return Some(format!(
                "{} feet and {} inches is equivalent to {} cm",
                format::fixed(whole_feet, 0),
                format::fixed(inches, 1),
                format::fixed(cm, 1),
            ));
        }

        match (field::decimal(&self.feet), field::decimal(&self.inches)) {
            (Some(feet), Some(inches)) if feet > 0.0 || inches > 0.0 => {
                let cm = (feet * INCHES_PER_FOOT + inches) * INCH_CM;
                Some(format!(
                    "{} cm is equivalent to {} feet and {} inches",
                    format::fixed(cm, 1),
                    format::fixed(feet, 0),
                    format::fixed(inches, 1),
                ))
            }
            _ => None,
        }
    }
}
