use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pharmkit_core::{Evaluation, field, format};

use crate::Calculator;

/// Opioid conversion calculator: sums a list of opioids into a total
/// daily oral-morphine equivalent, and converts an oral morphine dose to
/// an equivalent dose of a target opioid.
///
/// Equivalence data is from opioid dose equivalent tables (as of Feb
/// 2025) and the Faculty of Pain Medicine guidance; all conversions are
/// approximate.
pub struct OpioidConversion;

impl Calculator for OpioidConversion {
    fn id(&self) -> &str {
        "opioid_conversion"
    }

    fn name(&self) -> &str {
        "Opioid Conversion Calculator"
    }

    fn description(&self) -> &str {
        "This tool converts opioid doses to morphine-equivalent doses and vice versa"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Route {
    Oral,
    Injection,
    Patch,
}

/// How an entry's potency is expressed. Exactly one representation per
/// entry, determined by route: patches are dosed in patch counts, every
/// other route in mg/day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Potency {
    /// mg of this drug roughly equivalent to 10 mg oral morphine.
    MgPer10Morphine(f64),
    /// Total daily mg oral morphine matched by one patch.
    PatchMorphineEquivalent(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OpioidEntry {
    pub id: String,
    pub name: String,
    pub route: Route,
    pub potency: Potency,
}

impl OpioidEntry {
    /// Oral-morphine mg/day equivalent of `daily_dose` of this opioid.
    /// For patches `daily_dose` is the number of patches worn.
    pub fn morphine_equivalent(&self, daily_dose: f64) -> f64 {
        match self.potency {
            Potency::MgPer10Morphine(mg) => daily_dose * 10.0 / mg,
            Potency::PatchMorphineEquivalent(mg) => daily_dose * mg,
        }
    }
}

fn entry(id: &str, name: &str, route: Route, potency: Potency) -> OpioidEntry {
    OpioidEntry {
        id: id.to_string(),
        name: name.to_string(),
        route,
        potency,
    }
}

static ENTRIES: LazyLock<Vec<OpioidEntry>> = LazyLock::new(|| {
    use Potency::{MgPer10Morphine as Mg, PatchMorphineEquivalent as PatchEq};
    use Route::{Injection, Oral, Patch};

    vec![
        entry("oral-codeine", "Codeine phosphate (oral)", Oral, Mg(100.0)),
        entry("oral-dihydrocodeine", "Dihydrocodeine (oral)", Oral, Mg(100.0)),
        entry("oral-hydromorphone", "Hydromorphone (oral)", Oral, Mg(2.0)),
        entry("oral-morphine", "Morphine (oral)", Oral, Mg(10.0)),
        entry("oral-oxycodone", "Oxycodone (oral)", Oral, Mg(6.6)),
        entry("oral-tapentadol", "Tapentadol (oral)", Oral, Mg(25.0)),
        entry("oral-tramadol", "Tramadol (oral)", Oral, Mg(100.0)),
        entry("inj-diamorphine", "Diamorphine (IV/Subcut)", Injection, Mg(3.3)),
        entry("inj-oxycodone", "Oxycodone (IV/Subcut)", Injection, Mg(5.0)),
        entry("inj-morphine", "Morphine (IV/Subcut)", Injection, Mg(5.0)),
        entry("patch-bupren-5", "Buprenorphine 5 mcg/h patch", Patch, PatchEq(12.0)),
        entry("patch-bupren-10", "Buprenorphine 10 mcg/h patch", Patch, PatchEq(24.0)),
        entry("patch-bupren-15", "Buprenorphine 15 mcg/h patch", Patch, PatchEq(36.0)),
        entry("patch-bupren-20", "Buprenorphine 20 mcg/h patch", Patch, PatchEq(48.0)),
        entry("patch-bupren-35", "Buprenorphine 35 mcg/h patch", Patch, PatchEq(84.0)),
        entry("patch-bupren-52", "Buprenorphine 52.5 mcg/h patch", Patch, PatchEq(126.0)),
        entry("patch-bupren-70", "Buprenorphine 70 mcg/h patch", Patch, PatchEq(168.0)),
        entry("patch-fent-12", "Fentanyl 12 mcg/h patch", Patch, PatchEq(30.0)),
        entry("patch-fent-25", "Fentanyl 25 mcg/h patch", Patch, PatchEq(60.0)),
        entry("patch-fent-37", "Fentanyl 37.5 mcg/h patch", Patch, PatchEq(90.0)),
        entry("patch-fent-50", "Fentanyl 50 mcg/h patch", Patch, PatchEq(120.0)),
        entry("patch-fent-75", "Fentanyl 75 mcg/h patch", Patch, PatchEq(180.0)),
        entry("patch-fent-100", "Fentanyl 100 mcg/h patch", Patch, PatchEq(240.0)),
    ]
});

/// The full equivalence table, in display order.
pub fn entries() -> &'static [OpioidEntry] {
    &ENTRIES
}

/// Look up an entry by ID.
pub fn find(id: &str) -> Option<&'static OpioidEntry> {
    ENTRIES.iter().find(|e| e.id == id)
}

/// One user-editable row of the sum form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DoseLine {
    pub opioid_id: String,
    /// mg/day, or the number of patches for patch entries.
    pub daily_dose: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OpioidForm {
    pub lines: Vec<DoseLine>,
    /// Reverse mode: total daily oral morphine in mg.
    pub morphine_daily: String,
    pub target_opioid: String,
}

impl Default for OpioidForm {
    fn default() -> Self {
        Self {
            lines: vec![DoseLine::default()],
            morphine_daily: String::new(),
            target_opioid: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OpioidResult {
    /// Per-row morphine equivalent, shown beside each completed row.
    pub line_equivalents: Vec<Option<String>>,
    pub total: Evaluation,
    pub conversion: Evaluation,
}

impl OpioidForm {
    pub fn add_line(&mut self) {
        self.lines.push(DoseLine::default());
    }

    /// Remove a row. Refused when it is the only row left.
    pub fn remove_line(&mut self, index: usize) -> bool {
        if self.lines.len() > 1 && index < self.lines.len() {
            self.lines.remove(index);
            true
        } else {
            false
        }
    }

    pub fn evaluate(&self) -> OpioidResult {
        let mut total = 0.0;
        let mut line_equivalents = Vec::with_capacity(self.lines.len());

        for line in &self.lines {
            let entry = find(&line.opioid_id);
            let dose = field::decimal(&line.daily_dose);
            match (entry, dose) {
                (Some(entry), Some(dose)) => {
                    let equivalent = entry.morphine_equivalent(dose);
                    if dose > 0.0 {
                        total += equivalent;
                    }
                    line_equivalents
                        .push(Some(format!("{} mg morphine eq.", format::fixed(equivalent, 1))));
                }
                _ => line_equivalents.push(None),
            }
        }

        let total = if total > 0.0 {
            Evaluation::Ready(format!(
                "Total daily morphine equivalent: {} mg",
                format::fixed(total, 1)
            ))
        } else {
            Evaluation::Incomplete
        };

        OpioidResult {
            line_equivalents,
            total,
            conversion: self.convert_from_morphine().into(),
        }
    }

    /// The literal total sentence, for the copy-to-clipboard affordance.
    pub fn summary(&self) -> Option<String> {
        self.evaluate().total.message().map(str::to_string)
    }

    fn convert_from_morphine(&self) -> Option<String> {
        let morphine = field::positive(&self.morphine_daily)?;
        let target = find(&self.target_opioid)?;

        let message = match target.potency {
            Potency::PatchMorphineEquivalent(per_patch) => {
                let patches = morphine / per_patch;
                format!(
                    "{} patch(es) of {} (approx)",
                    format::fixed(patches, 1),
                    target.name
                )
            }
            Potency::MgPer10Morphine(mg) => {
                let drug_dose = morphine * mg / 10.0;
                format!(
                    "{} mg/day of {} (approx)",
                    format::fixed(drug_dose, 1),
                    target.name
                )
            }
        };
        Some(message)
    }
}
