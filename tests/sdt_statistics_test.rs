// tests/sdt_statistics_test.rs
//
// Validates the SDT arithmetic against fixed reference values computed with
// scipy.stats.norm (hit/false-alarm rates, d-prime, criterion), plus the
// algebraic properties of combine and scale.

use sigdetect::DetectionOutcome;

const TOLERANCE: f64 = 1e-6;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn d_prime_zero_for_balanced_outcome() {
    init_logging();
    // Equal hit and false-alarm rates mean no sensitivity
    let outcome = DetectionOutcome::new(15.0, 5.0, 15.0, 5.0);
    assert!(outcome.d_prime().abs() < TOLERANCE);
}

#[test]
fn d_prime_reference_value() {
    init_logging();
    let outcome = DetectionOutcome::new(15.0, 10.0, 15.0, 5.0);
    let expected = -0.421142647060282;
    assert!(
        (outcome.d_prime() - expected).abs() < TOLERANCE,
        "d-prime {} != {}",
        outcome.d_prime(),
        expected
    );
}

#[test]
fn criterion_zero_for_balanced_outcome() {
    init_logging();
    let outcome = DetectionOutcome::new(5.0, 5.0, 5.0, 5.0);
    assert!(outcome.criterion().abs() < TOLERANCE);
}

#[test]
fn criterion_reference_value() {
    init_logging();
    let outcome = DetectionOutcome::new(15.0, 10.0, 15.0, 5.0);
    let expected = -0.463918426665941;
    assert!(
        (outcome.criterion() - expected).abs() < TOLERANCE,
        "criterion {} != {}",
        outcome.criterion(),
        expected
    );
}

#[test]
fn combine_matches_elementwise_sums() {
    init_logging();
    let a = DetectionOutcome::new(1.0, 1.0, 2.0, 1.0);
    let b = DetectionOutcome::new(2.0, 1.0, 1.0, 3.0);

    let combined = a.combine(&b);
    let expected = DetectionOutcome::new(3.0, 2.0, 3.0, 4.0);
    assert_eq!(combined.criterion(), expected.criterion());

    // Order of operands cannot matter
    assert_eq!(a.combine(&b).criterion(), b.combine(&a).criterion());
}

#[test]
fn scale_matches_elementwise_products() {
    init_logging();
    let scaled = DetectionOutcome::new(1.0, 2.0, 3.0, 1.0).scale(4.0);
    let expected = DetectionOutcome::new(4.0, 8.0, 12.0, 4.0);
    assert_eq!(scaled.criterion(), expected.criterion());
}

#[test]
fn mutated_fields_change_derived_statistics() {
    init_logging();
    let mut outcome = DetectionOutcome::new(2.0, 5.0, 5.0, 5.0);
    let before = outcome.criterion();

    outcome.hits = 5.0;
    outcome.misses = 6.0;
    outcome.false_alarms = 7.0;
    outcome.correct_rejections = 8.0;

    let after = outcome.criterion();
    assert_ne!(before, after, "criterion must recompute from current fields");
}

#[test]
fn combining_a_zero_scaled_outcome_is_a_no_op() {
    init_logging();
    let a = DetectionOutcome::new(15.0, 10.0, 15.0, 5.0);
    let b = DetectionOutcome::new(7.0, 3.0, 2.0, 9.0);

    let unchanged = a.combine(&b.scale(0.0));
    assert_eq!(unchanged.hit_rate(), a.hit_rate());
    assert_eq!(unchanged.false_alarm_rate(), a.false_alarm_rate());
    assert_eq!(unchanged.d_prime(), a.d_prime());
    assert_eq!(unchanged.criterion(), a.criterion());
}

#[test]
fn saturated_rates_give_non_finite_statistics() {
    init_logging();
    // Perfect hit rate pins the quantile at infinity
    let outcome = DetectionOutcome::new(10.0, 0.0, 5.0, 5.0);
    assert_eq!(outcome.hit_rate(), 1.0);
    assert!(!outcome.d_prime().is_finite());
    assert!(!outcome.criterion().is_finite());
}

#[test]
fn outcome_serde_round_trip() {
    init_logging();
    let outcome = DetectionOutcome::new(15.0, 10.0, 15.0, 5.0);
    let json = serde_json::to_string(&outcome).expect("serialize");
    let back: DetectionOutcome = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, outcome);
}
