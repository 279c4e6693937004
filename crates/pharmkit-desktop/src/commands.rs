use tauri::State;
use tauri_plugin_clipboard_manager::ClipboardExt;

use pharmkit_calculators::CalculatorInfo;
use pharmkit_calculators::calculators::blood_pressure::{
    BloodPressureForm, BloodPressureResult,
};
use pharmkit_calculators::calculators::dosage::{DosageForm, DosageResult};
use pharmkit_calculators::calculators::eye_drops::{EyeDropsForm, EyeDropsResult};
use pharmkit_calculators::calculators::future_date::FutureDateForm;
use pharmkit_calculators::calculators::hrt_progestogen::{self, HrtForm, HrtProduct, HrtResult};
use pharmkit_calculators::calculators::insulin::{InsulinForm, InsulinResult};
use pharmkit_calculators::calculators::medication_end_date::MedicationEndDateForm;
use pharmkit_calculators::calculators::metric_imperial::MetricImperialForm;
use pharmkit_calculators::calculators::non_hdl::NonHdlForm;
use pharmkit_calculators::calculators::oestrogel::OestrogelForm;
use pharmkit_calculators::calculators::opioid::{self, OpioidEntry, OpioidForm, OpioidResult};
use pharmkit_calculators::calculators::percentage_change::PercentageChangeForm;
use pharmkit_calculators::calculators::quantity_sync::{QuantitySyncForm, QuantitySyncResult};
use pharmkit_calculators::calculators::tinzaparin::{TinzaparinForm, TinzaparinResult};
use pharmkit_calculators::error::CalculatorError;
use pharmkit_core::Evaluation;

use crate::state::DesktopState;

#[tauri::command]
pub fn catalogue() -> Vec<CalculatorInfo> {
    pharmkit_calculators::catalogue()
}

#[tauri::command]
pub fn calculator_info(id: String) -> Result<CalculatorInfo, String> {
    pharmkit_calculators::get_calculator(&id)
        .map(|c| CalculatorInfo {
            id: c.id().to_string(),
            name: c.name().to_string(),
            description: c.description().to_string(),
        })
        .ok_or_else(|| CalculatorError::UnknownCalculator(id).to_string())
}

#[tauri::command]
pub fn evaluate_dosage(form: DosageForm) -> DosageResult {
    form.evaluate()
}

#[tauri::command]
pub fn evaluate_insulin(form: InsulinForm) -> InsulinResult {
    form.evaluate()
}

#[tauri::command]
pub fn evaluate_eye_drops(form: EyeDropsForm) -> EyeDropsResult {
    form.evaluate()
}

#[tauri::command]
pub fn evaluate_oestrogel(form: OestrogelForm) -> Evaluation {
    form.evaluate()
}

#[tauri::command]
pub fn normalise_blood_pressure(mut form: BloodPressureForm) -> BloodPressureForm {
    form.normalise();
    form
}

#[tauri::command]
pub fn evaluate_blood_pressure(form: BloodPressureForm) -> BloodPressureResult {
    form.evaluate()
}

#[tauri::command]
pub fn evaluate_metric_imperial(form: MetricImperialForm) -> Evaluation {
    form.evaluate()
}

#[tauri::command]
pub fn evaluate_future_date(form: FutureDateForm) -> Evaluation {
    form.evaluate()
}

#[tauri::command]
pub fn evaluate_medication_end_date(form: MedicationEndDateForm) -> Evaluation {
    form.evaluate(jiff::Zoned::now().date())
}

#[tauri::command]
pub fn evaluate_percentage_change(form: PercentageChangeForm) -> Evaluation {
    form.evaluate()
}

#[tauri::command]
pub fn evaluate_quantity_sync(form: QuantitySyncForm) -> QuantitySyncResult {
    form.evaluate()
}

#[tauri::command]
pub fn set_quantity_sync_count(mut form: QuantitySyncForm, count: String) -> QuantitySyncForm {
    form.set_medicine_count(&count);
    form
}

#[tauri::command]
pub fn evaluate_non_hdl(form: NonHdlForm) -> Evaluation {
    form.evaluate()
}

#[tauri::command]
pub fn non_hdl_summary(form: NonHdlForm) -> Option<String> {
    form.summary()
}

#[tauri::command]
pub fn evaluate_tinzaparin(form: TinzaparinForm) -> TinzaparinResult {
    form.evaluate()
}

#[tauri::command]
pub fn opioid_entries() -> Vec<OpioidEntry> {
    opioid::entries().to_vec()
}

#[tauri::command]
pub fn evaluate_opioid(form: OpioidForm) -> OpioidResult {
    form.evaluate()
}

#[tauri::command]
pub fn opioid_summary(form: OpioidForm) -> Option<String> {
    form.summary()
}

#[tauri::command]
pub fn hrt_products() -> Vec<HrtProduct> {
    hrt_progestogen::products().to_vec()
}

#[tauri::command]
pub fn hrt_regimens() -> Vec<String> {
    hrt_progestogen::regimens()
}

#[tauri::command]
pub fn evaluate_hrt(form: HrtForm) -> HrtResult {
    form.evaluate()
}

#[tauri::command]
pub fn disclaimer_accepted(state: State<'_, DesktopState>) -> bool {
    *state
        .disclaimer_accepted
        .lock()
        .expect("disclaimer lock poisoned")
}

#[tauri::command]
pub fn accept_disclaimer(state: State<'_, DesktopState>) -> Result<(), String> {
    let mut accepted = state
        .disclaimer_accepted
        .lock()
        .expect("disclaimer lock poisoned");
    *accepted = true;
    crate::disclaimer::persist_accepted().map_err(|e| e.to_string())
}

/// Copy a formatted result summary to the system clipboard. Failure is
/// reported to the caller; calculator state is unaffected either way.
#[tauri::command]
pub fn copy_summary(app: tauri::AppHandle, text: String) -> Result<(), String> {
    app.clipboard().write_text(text).map_err(|e| e.to_string())
}
