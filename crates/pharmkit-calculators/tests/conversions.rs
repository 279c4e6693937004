use pharmkit_calculators::calculators::metric_imperial::{ConversionMode, MetricImperialForm};
use pharmkit_calculators::calculators::non_hdl::{CholesterolMode, NonHdlForm};
use pharmkit_calculators::calculators::percentage_change::PercentageChangeForm;
use pharmkit_calculators::calculators::tinzaparin::{CrclBand, TinzaparinForm, TinzaparinResult};
use pharmkit_core::Evaluation;

#[test]
fn percentage_change_two_decimals() {
    let form = PercentageChangeForm {
        previous: "100".to_string(),
        current: "80".to_string(),
    };

    assert_eq!(
        form.evaluate(),
        Evaluation::Ready("Percentage change: -20.00%".to_string())
    );
}

#[test]
fn percentage_change_zero_baseline_shows_nothing() {
    let form = PercentageChangeForm {
        previous: "0".to_string(),
        current: "80".to_string(),
    };

    assert_eq!(form.evaluate(), Evaluation::Incomplete);
}

#[test]
fn kilograms_to_stone_and_pounds() {
    let form = MetricImperialForm {
        kg: "70".to_string(),
        ..Default::default()
    };

    assert_eq!(
        form.evaluate(),
        Evaluation::Ready("11 stone and 0.3 lb is equivalent to 70.0 kg".to_string())
    );
}

#[test]
fn weight_round_trip_within_tolerance() {
    // 70 kg → 11 st 0.3 lb → back to kg must land within 0.1 kg.
    let back = MetricImperialForm {
        stone: "11".to_string(),
        pounds: "0.3".to_string(),
        ..Default::default()
    };

    let message = match back.evaluate() {
        Evaluation::Ready(message) => message,
        Evaluation::Incomplete => panic!("expected a result"),
    };
    let kg: f64 = message
        .split_whitespace()
        .next()
        .unwrap()
        .parse()
        .unwrap();
    assert!((kg - 70.0).abs() < 0.1, "round trip drifted to {kg}");
}

#[test]
fn centimetres_to_feet_and_inches() {
    let form = MetricImperialForm {
        mode: ConversionMode::Height,
        cm: "170".to_string(),
        ..Default::default()
    };

    assert_eq!(
        form.evaluate(),
        Evaluation::Ready("5 feet and 6.9 inches is equivalent to 170.0 cm".to_string())
    );
}

#[test]
fn height_round_trip_within_tolerance() {
    let back = MetricImperialForm {
        mode: ConversionMode::Height,
        feet: "5".to_string(),
        inches: "6.9".to_string(),
        ..Default::default()
    };

    let message = match back.evaluate() {
        Evaluation::Ready(message) => message,
        Evaluation::Incomplete => panic!("expected a result"),
    };
    let cm: f64 = message
        .split_whitespace()
        .next()
        .unwrap()
        .parse()
        .unwrap();
    assert!((cm - 170.0).abs() < 0.3, "round trip drifted to {cm}");
}

#[test]
fn imperial_weight_needs_both_fields_parseable() {
    let form = MetricImperialForm {
        stone: "11".to_string(),
        ..Default::default()
    };

    assert_eq!(form.evaluate(), Evaluation::Incomplete);
}

#[test]
fn non_hdl_target_from_direct_baseline() {
    let form = NonHdlForm {
        pre_non_hdl: "4".to_string(),
        ..Default::default()
    };

    assert_eq!(
        form.evaluate(),
        Evaluation::Ready(
            "Non hdl cholesterol target is 2.4 (40% reduction, calculated from baseline \
             non hdl cholesterol provided of 4.0)"
                .to_string()
        )
    );
}

#[test]
fn non_hdl_target_from_total_minus_hdl() {
    let form = NonHdlForm {
        pre_total: "6".to_string(),
        pre_hdl: "1.5".to_string(),
        ..Default::default()
    };

    assert_eq!(
        form.evaluate(),
        Evaluation::Ready(
            "Non hdl cholesterol target is 2.7 (40% reduction, calculated from baseline \
             total cholesterol of 6.0 and hdl cholesterol of 1.5)"
                .to_string()
        )
    );
}

#[test]
fn non_hdl_total_must_exceed_hdl() {
    let form = NonHdlForm {
        pre_total: "1.5".to_string(),
        pre_hdl: "2".to_string(),
        ..Default::default()
    };

    assert_eq!(form.evaluate(), Evaluation::Incomplete);
}

#[test]
fn non_hdl_actual_reduction_whole_percent() {
    let form = NonHdlForm {
        mode: CholesterolMode::ActualReduction,
        pre_non_hdl: "4".to_string(),
        latest_non_hdl: "2.4".to_string(),
        ..Default::default()
    };

    assert_eq!(
        form.evaluate(),
        Evaluation::Ready("Patient has achieved a 40% reduction".to_string())
    );
}

#[test]
fn non_hdl_summary_is_the_result_sentence() {
    let form = NonHdlForm {
        pre_non_hdl: "4".to_string(),
        ..Default::default()
    };

    assert_eq!(form.summary().as_deref(), form.evaluate().message());
    assert_eq!(NonHdlForm::default().summary(), None);
}

#[test]
fn tinzaparin_rounds_to_the_nearest_thousand_units() {
    let form = TinzaparinForm {
        weight: "63".to_string(),
        ..Default::default()
    };

    // 175 × 63 = 11,025 → 11,000 units → 0.55 ml.
    match form.evaluate() {
        TinzaparinResult::Ready { message, note } => {
            assert_eq!(
                message,
                "Recommended Tinzaparin dose: approx. 11,000 units (≈ 0.55 ml) once \
                 daily using a 20,000 units per ml pre-filled syringe."
            );
            assert!(note.contains("1,000 IU increments"));
        }
        other => panic!("expected a dose, got {other:?}"),
    }
}

#[test]
fn tinzaparin_missing_weight_is_incomplete() {
    assert_eq!(
        TinzaparinForm::default().evaluate(),
        TinzaparinResult::Incomplete
    );
}

#[test]
fn tinzaparin_low_clearance_band_is_explicitly_unsupported() {
    let form = TinzaparinForm {
        band: CrclBand::Below30,
        weight: "63".to_string(),
    };

    assert_eq!(form.evaluate(), TinzaparinResult::Unsupported);
}
