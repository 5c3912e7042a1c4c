//! Behavior tests for the value-transformer algebra.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use adaptics::transform::{FunctionTransformer, ValueTransformer, sequence, with_default};
use rstest::rstest;

fn stringly() -> impl ValueTransformer<Value = i64, Transformed = String, Error = String> + Clone {
    FunctionTransformer::new(
        |value: i64| Ok(value.to_string()),
        |text: String| text.parse::<i64>().map_err(|error| error.to_string()),
    )
}

#[rstest]
#[case(0)]
#[case(-17)]
#[case(i64::MAX)]
fn transform_then_reverse_round_trips(#[case] value: i64) {
    let transformer = stringly();
    let transformed = transformer.transform(value).unwrap();
    assert_eq!(transformer.reverse_transform(transformed), Ok(value));
}

#[test]
fn reverse_transform_rejects_garbage() {
    assert!(stringly().reverse_transform("2.5".to_string()).is_err());
}

#[test]
fn flip_exchanges_domain_and_codomain() {
    let parsed = stringly().flip();

    assert_eq!(parsed.transform("3".to_string()), Ok(3));
    assert_eq!(parsed.reverse_transform(4), Ok("4".to_string()));
    assert!(parsed.transform("3.5".to_string()).is_err());
}

#[test]
fn compose_runs_reverse_in_reverse_order() {
    let trace = Arc::new(std::sync::Mutex::new(Vec::new()));

    let record = |name: &'static str, trace: Arc<std::sync::Mutex<Vec<&'static str>>>| {
        let forward_trace = Arc::clone(&trace);
        FunctionTransformer::new(
            move |value: i64| {
                forward_trace.lock().unwrap().push(name);
                Ok::<_, String>(value)
            },
            move |value: i64| {
                trace.lock().unwrap().push(name);
                Ok::<_, String>(value)
            },
        )
    };

    let pipeline = record("first", Arc::clone(&trace)).compose(record("second", Arc::clone(&trace)));

    pipeline.transform(1).unwrap();
    assert_eq!(*trace.lock().unwrap(), vec!["first", "second"]);

    trace.lock().unwrap().clear();
    pipeline.reverse_transform(1).unwrap();
    assert_eq!(*trace.lock().unwrap(), vec!["second", "first"]);
}

#[test]
fn compose_short_circuits_on_first_failing_stage() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counting_calls = Arc::clone(&calls);

    let failing = FunctionTransformer::new(
        |_: i64| Err::<i64, _>("always".to_string()),
        |value: i64| Ok(value),
    );
    let counting = FunctionTransformer::new(
        move |value: i64| {
            counting_calls.fetch_add(1, Ordering::SeqCst);
            Ok::<_, String>(value)
        },
        |value: i64| Ok(value),
    );

    let pipeline = failing.compose(counting);
    assert_eq!(pipeline.transform(1), Err("always".to_string()));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[rstest]
#[case(None, "0")]
#[case(Some(7), "7")]
fn with_default_transforms_absence_to_default(#[case] value: Option<i64>, #[case] expected: &str) {
    let defaulted = with_default(stringly(), "0".to_string());
    assert_eq!(defaulted.transform(value), Ok(expected.to_string()));
}

#[rstest]
#[case("0", None)]
#[case("7", Some(7))]
fn with_default_reverses_default_to_absence(#[case] text: &str, #[case] expected: Option<i64>) {
    let defaulted = with_default(stringly(), "0".to_string());
    assert_eq!(defaulted.reverse_transform(text.to_string()), Ok(expected));
}

#[test]
fn sequence_lift_applies_elementwise() {
    let elements = sequence(stringly());

    assert_eq!(
        elements.transform(vec![1, 2, 3]),
        Ok(vec!["1".to_string(), "2".to_string(), "3".to_string()]),
    );
    assert_eq!(
        elements.reverse_transform(vec!["4".to_string(), "5".to_string()]),
        Ok(vec![4, 5]),
    );
}

#[test]
fn sequence_lift_fails_with_the_elements_own_error() {
    let elements = sequence(stringly());

    let failure = elements.reverse_transform(vec![
        "1".to_string(),
        "oops".to_string(),
        "3".to_string(),
    ]);
    let own = stringly().reverse_transform("oops".to_string()).unwrap_err();
    assert_eq!(failure, Err(own));
}

#[test]
fn sequence_lift_short_circuits_remaining_elements() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counting_calls = Arc::clone(&calls);

    let counting = FunctionTransformer::new(
        move |value: i64| {
            counting_calls.fetch_add(1, Ordering::SeqCst);
            if value < 0 {
                Err("negative".to_string())
            } else {
                Ok(value)
            }
        },
        |value: i64| Ok(value),
    );

    let elements = sequence(counting);
    assert!(elements.transform(vec![1, -2, 3]).is_err());
    // Element 3 is never visited.
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
