use pharmkit_calculators::calculators::eye_drops::{BottleMeasure, EyeDropsForm, EyeUsage};
use pharmkit_calculators::calculators::insulin::{InsulinForm, InsulinMode};
use pharmkit_calculators::calculators::oestrogel::{OestrogelForm, OestrogelMode};
use pharmkit_core::Evaluation;

#[test]
fn insulin_supply_duration() {
    let form = InsulinForm {
        units_per_ml: "100".to_string(),
        ml_per_device: "3".to_string(),
        daily_units: "50".to_string(),
        devices_supplied: "5".to_string(),
        ..Default::default()
    };

    let result = form.evaluate();
    assert_eq!(
        result.supply,
        Evaluation::Ready("Supply should last for approximately 30.0 days.".to_string())
    );
    assert_eq!(result.run_out, Evaluation::Incomplete);
}

#[test]
fn insulin_devices_needed() {
    let form = InsulinForm {
        mode: InsulinMode::Quantity,
        units_per_ml: "100".to_string(),
        ml_per_device: "3".to_string(),
        daily_units: "40".to_string(),
        days_needed: "30".to_string(),
        ..Default::default()
    };

    assert_eq!(
        form.evaluate().supply,
        Evaluation::Ready("You need 4.0 devices to cover 30.0 days.".to_string())
    );
}

#[test]
fn insulin_run_out_date_from_prescription_date() {
    let form = InsulinForm {
        units_per_ml: "100".to_string(),
        ml_per_device: "3".to_string(),
        daily_units: "50".to_string(),
        devices_supplied: "5".to_string(),
        use_prescription_date: true,
        prescription_date: "2025-01-01".to_string(),
        ..Default::default()
    };

    assert_eq!(
        form.evaluate().run_out,
        Evaluation::Ready(
            "Based on the prescription date, the medication should run out on 31/01/2025."
                .to_string()
        )
    );
}

#[test]
fn insulin_run_out_needs_the_checkbox() {
    let form = InsulinForm {
        units_per_ml: "100".to_string(),
        ml_per_device: "3".to_string(),
        daily_units: "50".to_string(),
        devices_supplied: "5".to_string(),
        prescription_date: "2025-01-01".to_string(),
        ..Default::default()
    };

    assert_eq!(form.evaluate().run_out, Evaluation::Incomplete);
}

#[test]
fn eye_drops_volume_mode() {
    // 2 bottles × (10 ml / 0.05 ml per drop) = 400 drops; 2 drops/day in
    // both eyes = 4/day → 100 days.
    let form = EyeDropsForm {
        bottles: "2".to_string(),
        bottle_volume: "10".to_string(),
        daily_drops: "2".to_string(),
        eye_usage: EyeUsage::Both,
        ..Default::default()
    };

    assert_eq!(
        form.evaluate().supply,
        Evaluation::Ready("Your supply will last approximately 100.0 days.".to_string())
    );
}

#[test]
fn eye_drops_drop_count_mode() {
    let form = EyeDropsForm {
        bottles: "1".to_string(),
        bottle_measure: BottleMeasure::Drops,
        drops_per_bottle: "200".to_string(),
        daily_drops: "4".to_string(),
        ..Default::default()
    };

    assert_eq!(
        form.evaluate().supply,
        Evaluation::Ready("Your supply will last approximately 50.0 days.".to_string())
    );
}

#[test]
fn eye_drops_default_drop_volume_is_prefilled() {
    let form = EyeDropsForm::default();
    assert_eq!(form.drop_volume, "0.05");
}

#[test]
fn oestrogel_duration() {
    // 80 g × 2 devices / (1.25 g × 2 pumps) = 64 days.
    let form = OestrogelForm {
        pumps_per_day: "2".to_string(),
        devices_supplied: "2".to_string(),
        ..Default::default()
    };

    assert_eq!(
        form.evaluate(),
        Evaluation::Ready(
            "At 2.0 pumps per day, this supply should last approximately 64.0 days."
                .to_string()
        )
    );
}

#[test]
fn oestrogel_devices_needed() {
    let form = OestrogelForm {
        mode: OestrogelMode::Quantity,
        pumps_per_day: "2".to_string(),
        days_needed: "50".to_string(),
        ..Default::default()
    };

    assert_eq!(
        form.evaluate(),
        Evaluation::Ready(
            "You need 1.6 devices to cover 50.0 days at 2.0 pumps per day.".to_string()
        )
    );
}

#[test]
fn oestrogel_needs_pump_count() {
    let form = OestrogelForm {
        devices_supplied: "2".to_string(),
        ..Default::default()
    };

    assert_eq!(form.evaluate(), Evaluation::Incomplete);
}
