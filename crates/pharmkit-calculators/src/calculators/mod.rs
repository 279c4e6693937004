pub mod blood_pressure;
pub mod dosage;
pub mod eye_drops;
pub mod future_date;
pub mod hrt_progestogen;
pub mod insulin;
pub mod medication_end_date;
pub mod metric_imperial;
pub mod non_hdl;
pub mod oestrogel;
pub mod opioid;
pub mod percentage_change;
pub mod quantity_sync;
pub mod tinzaparin;
