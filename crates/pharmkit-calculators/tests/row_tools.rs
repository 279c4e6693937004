use pharmkit_calculators::calculators::blood_pressure::{BloodPressureForm, BpRow};
use pharmkit_calculators::calculators::quantity_sync::QuantitySyncForm;
use pharmkit_core::Evaluation;

fn row(systolic: &str, diastolic: &str) -> BpRow {
    BpRow {
        systolic: systolic.to_string(),
        diastolic: diastolic.to_string(),
    }
}

#[test]
fn blood_pressure_averages_complete_rows_only() {
    let form = BloodPressureForm {
        rows: vec![row("140", "90"), row("120", "80"), row("130", "")],
    };

    let result = form.evaluate();
    assert_eq!(result.reading_count, 2);
    assert_eq!(
        result.systolic,
        Evaluation::Ready("Average Systolic: 130.00".to_string())
    );
    assert_eq!(
        result.diastolic,
        Evaluation::Ready("Average Diastolic: 85.00".to_string())
    );
}

#[test]
fn blood_pressure_no_readings_shows_nothing() {
    let result = BloodPressureForm::default().evaluate();
    assert_eq!(result.reading_count, 0);
    assert_eq!(result.systolic, Evaluation::Incomplete);
    assert_eq!(result.diastolic, Evaluation::Incomplete);
}

#[test]
fn completing_the_last_row_appends_a_blank_one() {
    let mut form = BloodPressureForm {
        rows: vec![row("140", "90")],
    };
    form.normalise();
    assert_eq!(form.rows.len(), 2);
    assert_eq!(form.rows.last(), Some(&BpRow::default()));

    // A partially-filled trailing row does not grow the list.
    form.rows.last_mut().unwrap().systolic = "120".to_string();
    form.normalise();
    assert_eq!(form.rows.len(), 2);
}

#[test]
fn normalise_never_removes_rows() {
    let mut form = BloodPressureForm {
        rows: vec![row("140", "90"), BpRow::default(), BpRow::default()],
    };
    form.normalise();
    assert_eq!(form.rows.len(), 3);
}

#[test]
fn blood_pressure_reset_is_idempotent() {
    let mut form = BloodPressureForm {
        rows: vec![row("140", "90"), row("120", "80")],
    };
    form = BloodPressureForm::default();
    let once = form.clone();
    form = BloodPressureForm::default();
    assert_eq!(form, once);
    assert_eq!(form.rows.len(), 1);
}

#[test]
fn quantity_sync_issues_the_shortfall() {
    let mut form = QuantitySyncForm {
        days: "28".to_string(),
        ..Default::default()
    };
    form.set_medicine_count("2");
    form.rows[0].tablets_per_day = "2".to_string();
    form.rows[0].tablets_remaining = "10".to_string();
    form.rows[1].tablets_per_day = "2".to_string();
    form.rows[1].tablets_remaining = "60".to_string();

    let result = form.evaluate();
    assert_eq!(
        result.rows[0],
        Evaluation::Ready("46 tablets of Drug 1 to be issued".to_string())
    );
    assert_eq!(
        result.rows[1],
        Evaluation::Ready("No additional tablets of Drug 2 required".to_string())
    );
}

#[test]
fn quantity_sync_rows_follow_the_medicine_count() {
    let mut form = QuantitySyncForm::default();
    form.set_medicine_count("3");
    assert_eq!(form.rows.len(), 3);
    assert_eq!(form.rows[2].drug_name, "Drug 3");

    form.set_medicine_count("");
    assert!(form.rows.is_empty());
}

#[test]
fn quantity_sync_incomplete_rows_show_nothing() {
    let mut form = QuantitySyncForm {
        days: "28".to_string(),
        ..Default::default()
    };
    form.set_medicine_count("1");
    form.rows[0].tablets_per_day = "2".to_string();

    assert_eq!(form.evaluate().rows[0], Evaluation::Incomplete);
}
