use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pharmkit_core::Evaluation;

use crate::Calculator;

/// HRT progestogen dose selector: a two-stage lookup from the BMS
/// guideline on management of unscheduled bleeding on HRT (April 2024).
/// Stage 1 maps the prescribed oestrogen product + dose to a potency
/// category; stage 2 maps the (collapsed) category + chosen progestogen
/// regimen to a recommended dose.
pub struct HrtProgestogen;

impl Calculator for HrtProgestogen {
    fn id(&self) -> &str {
        "hrt_progestogen"
    }

    fn name(&self) -> &str {
        "HRT Progestogen Dose Lookup Tool"
    }

    fn description(&self) -> &str {
        "Look up the recommended progestogen dose for endometrial protection based on \
         the prescribed oestrogen-only HRT product and dose."
    }
}

/// Oestrogen dose category as classified by the BMS table. This raw
/// value is what the user sees; the dosing lookup collapses it first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OestrogenCategory {
    UltraLow,
    Low,
    Standard,
    Moderate,
    High,
}

impl fmt::Display for OestrogenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OestrogenCategory::UltraLow => "Ultra-Low",
            OestrogenCategory::Low => "Low",
            OestrogenCategory::Standard => "Standard",
            OestrogenCategory::Moderate => "Moderate",
            OestrogenCategory::High => "High",
        };
        f.write_str(label)
    }
}

/// Category bucket used by the progestogen dosing table: Ultra-Low and
/// Low share one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DoseBucket {
    UltraLow,
    Standard,
    Moderate,
    High,
}

impl fmt::Display for DoseBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DoseBucket::UltraLow => "Ultra/Low",
            DoseBucket::Standard => "Standard",
            DoseBucket::Moderate => "Moderate",
            DoseBucket::High => "High",
        };
        f.write_str(label)
    }
}

impl OestrogenCategory {
    pub fn bucket(self) -> DoseBucket {
        match self {
            OestrogenCategory::UltraLow | OestrogenCategory::Low => DoseBucket::UltraLow,
            OestrogenCategory::Standard => DoseBucket::Standard,
            OestrogenCategory::Moderate => DoseBucket::Moderate,
            OestrogenCategory::High => DoseBucket::High,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HrtOption {
    pub label: String,
    pub category: OestrogenCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HrtProduct {
    pub name: String,
    pub options: Vec<HrtOption>,
}

fn product(name: &str, options: [(&str, OestrogenCategory); 5]) -> HrtProduct {
    HrtProduct {
        name: name.to_string(),
        options: options
            .into_iter()
            .map(|(label, category)| HrtOption {
                label: label.to_string(),
                category,
            })
            .collect(),
    }
}

static PRODUCTS: LazyLock<Vec<HrtProduct>> = LazyLock::new(|| {
    use OestrogenCategory::{High, Low, Moderate, Standard, UltraLow};

    vec![
        product(
            "Oestrogel",
            [
                ("½ pump", UltraLow),
                ("1 pump", Low),
                ("2 pumps", Standard),
                ("3 pumps", Moderate),
                ("4 pumps", High),
            ],
        ),
        product(
            "Sandrena",
            [
                ("0.25mg", UltraLow),
                ("0.5mg", Low),
                ("1mg", Standard),
                ("1.5-2mg", Moderate),
                ("3mg", High),
            ],
        ),
        product(
            "Lenzetto Spray",
            [
                ("1 spray", UltraLow),
                ("2 sprays", Low),
                ("3 sprays", Standard),
                ("4-5 sprays", Moderate),
                ("6 sprays", High),
            ],
        ),
        product(
            "Patch",
            [
                ("12.5 mcg", UltraLow),
                ("25 mcg", Low),
                ("50 mcg", Standard),
                ("75 mcg", Moderate),
                ("100 mcg", High),
            ],
        ),
        product(
            "Oral estradiol",
            [
                ("0.5mg", UltraLow),
                ("1mg", Low),
                ("2mg", Standard),
                ("3mg", Moderate),
                ("4mg", High),
            ],
        ),
    ]
});

pub const REGIMENS: [&str; 7] = [
    "Micronised Progesterone continuous",
    "Micronised Progesterone sequential",
    "Medroxy progesterone continuous",
    "Medroxy progesterone sequential",
    "Norethisterone continuous",
    "Norethisterone sequential",
    "Mirena",
];

const MIRENA_DOSE: &str = "One device (for up to 5 yrs – record fitting date on script)";

static DOSING: LazyLock<HashMap<DoseBucket, HashMap<&'static str, &'static str>>> =
    LazyLock::new(|| {
        let column = |doses: [&'static str; 7]| -> HashMap<&'static str, &'static str> {
            REGIMENS.into_iter().zip(doses).collect()
        };

        HashMap::from([
            (
                DoseBucket::UltraLow,
                column(["100mg", "200mg", "2.5mg", "10mg", "5mg", "5mg", MIRENA_DOSE]),
            ),
            (
                DoseBucket::Standard,
                column(["100mg", "200mg", "2.5-5mg", "10mg", "5mg", "5mg", MIRENA_DOSE]),
            ),
            (
                DoseBucket::Moderate,
                column(["100mg", "200mg", "5mg", "10mg", "5mg", "5mg", MIRENA_DOSE]),
            ),
            (
                DoseBucket::High,
                column(["200mg", "300mg", "10mg", "20mg", "5mg", "5mg", MIRENA_DOSE]),
            ),
        ])
    });

/// The product table, in display order.
pub fn products() -> &'static [HrtProduct] {
    &PRODUCTS
}

/// The progestogen regimen names, in display order.
pub fn regimens() -> Vec<String> {
    REGIMENS.iter().map(|r| r.to_string()).collect()
}

/// Stage 1: product + dose label → potency category.
pub fn categorise(product: &str, dose_label: &str) -> Option<OestrogenCategory> {
    let product = PRODUCTS.iter().find(|p| p.name == product)?;
    product
        .options
        .iter()
        .find(|o| o.label == dose_label)
        .map(|o| o.category)
}

/// Stage 2: collapsed category + regimen → recommended dose.
pub fn recommended_dose(bucket: DoseBucket, regimen: &str) -> Option<&'static str> {
    DOSING.get(&bucket)?.get(regimen).copied()
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HrtForm {
    pub product: String,
    pub dose: String,
    pub progestogen: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HrtResult {
    /// Stage 1's raw category, displayed to the user uncollapsed.
    pub category: Option<OestrogenCategory>,
    pub recommendation: Evaluation,
}

impl HrtForm {
    pub fn evaluate(&self) -> HrtResult {
        let category = categorise(&self.product, &self.dose);

        let recommendation = category
            .filter(|_| !self.progestogen.is_empty())
            .and_then(|category| {
                recommended_dose(category.bucket(), &self.progestogen).map(|dose| {
                    format!(
                        "Lookup table suggests dose for {} is {}.",
                        self.progestogen, dose
                    )
                })
            });

        HrtResult {
            category,
            recommendation: recommendation.into(),
        }
    }
}
