use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pharmkit_core::{Evaluation, field, format};

use crate::Calculator;

/// Non-HDL cholesterol calculator. NICE recommends a greater-than-40%
/// reduction in non-HDL cholesterol for primary prevention; target mode
/// computes the goal level, actual mode the achieved reduction.
pub struct NonHdlCholesterol;

impl Calculator for NonHdlCholesterol {
    fn id(&self) -> &str {
        "non_hdl"
    }

    fn name(&self) -> &str {
        "Non-HDL Cholesterol Calculator"
    }

    fn description(&self) -> &str {
        "For primary prevention, NICE recommends reducing non-HDL cholesterol by more \
         than 40%. Use this tool to calculate the target level"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CholesterolMode {
    #[default]
    Target,
    ActualReduction,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NonHdlForm {
    pub mode: CholesterolMode,
    pub pre_total: String,
    pub pre_hdl: String,
    /// Pre-statin non-HDL level, preferred over total − HDL when given.
    pub pre_non_hdl: String,
    pub latest_non_hdl: String,
}

impl NonHdlForm {
    pub fn evaluate(&self) -> Evaluation {
        match self.mode {
            CholesterolMode::Target => self.target(),
            CholesterolMode::ActualReduction => self.actual_reduction(),
        }
        .into()
    }

    /// The literal result sentence, for the copy-to-clipboard affordance.
    pub fn summary(&self) -> Option<String> {
        self.evaluate().message().map(str::to_string)
    }

    fn target(&self) -> Option<String> {
        if let Some(baseline) = field::positive(&self.pre_non_hdl) {
            let target = baseline * 0.6;
            return Some(format!(
                "Non hdl cholesterol target is {} (40% reduction, calculated from \
                 baseline non hdl cholesterol provided of {})",
                format::fixed(target, 1),
                format::fixed(baseline, 1),
            ));
        }

        let total = field::positive(&self.pre_total)?;
        let hdl = field::decimal(&self.pre_hdl).filter(|v| *v >= 0.0)?;
        if total <= hdl {
            return None;
        }
        let baseline = total - hdl;
        let target = baseline * 0.6;
        Some(format!(
            "Non hdl cholesterol target is {} (40% reduction, calculated from baseline \
             total cholesterol of {} and hdl cholesterol of {})",
            format::fixed(target, 1),
            format::fixed(total, 1),
            format::fixed(hdl, 1),
        ))
    }

    fn actual_reduction(&self) -> Option<String> {
        let pre = field::positive(&self.pre_non_hdl)?;
        let latest = field::decimal(&self.latest_non_hdl).filter(|v| *v >= 0.0)?;
        let reduction = (pre - latest) / pre * 100.0;
        Some(format!(
            "Patient has achieved a {}% reduction",
            format::fixed(reduction, 0)
        ))
    }
}
