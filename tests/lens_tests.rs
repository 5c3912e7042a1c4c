//! Behavior tests for the lens algebra: basics, lifts, and the product
//! combinators.

use adaptics::lens;
use adaptics::optics::{
    FunctionLens, Lens, fanout, lift_option, lift_result, lift_sequence, split,
};

#[derive(Clone, PartialEq, Debug)]
struct Counter {
    count: i64,
}

#[derive(Clone, PartialEq, Debug)]
struct Label {
    text: String,
}

#[test]
fn modify_applies_function_to_focus() {
    let count = lens!(Counter, count);
    let doubled = count.modify(Counter { count: 21 }, |value| value * 2);
    assert_eq!(doubled, Counter { count: 42 });
}

#[test]
fn option_lift_preserves_absence() {
    let count = lift_option(lens!(Counter, count));

    assert_eq!(count.get(&None), None);
    assert_eq!(count.get(&Some(Counter { count: 2 })), Some(2));

    assert_eq!(count.set(None, Some(5)), None);
    assert_eq!(
        count.set(Some(Counter { count: 2 }), Some(5)),
        Some(Counter { count: 5 }),
    );
    assert_eq!(
        count.set(Some(Counter { count: 2 }), None),
        Some(Counter { count: 2 }),
    );
}

#[test]
fn result_lift_passes_failure_through_get() {
    let count = lift_result::<_, _, _, &str>(lens!(Counter, count));

    assert_eq!(count.get(&Ok(Counter { count: 2 })), Ok(2));
    assert_eq!(count.get(&Err("boom")), Err("boom"));
}

#[test]
fn result_lift_set_needs_both_successes() {
    let count = lift_result::<_, _, _, &str>(lens!(Counter, count));

    assert_eq!(
        count.set(Ok(Counter { count: 0 }), Ok(5)),
        Ok(Counter { count: 5 }),
    );
    assert_eq!(count.set(Ok(Counter { count: 0 }), Err("value")), Err("value"));
    // The container failure wins when both sides have failed.
    assert_eq!(count.set(Err("container"), Err("value")), Err("container"));
}

#[test]
fn sequence_lift_maps_pairwise() {
    let count = lift_sequence(lens!(Counter, count));
    let counters = vec![Counter { count: 1 }, Counter { count: 2 }];

    assert_eq!(count.get(&counters), vec![1, 2]);
    assert_eq!(
        count.set(counters, vec![10, 20]),
        vec![Counter { count: 10 }, Counter { count: 20 }],
    );
}

#[test]
fn sequence_lift_set_truncates_to_shorter() {
    let count = lift_sequence(lens!(Counter, count));
    let counters = vec![
        Counter { count: 1 },
        Counter { count: 2 },
        Counter { count: 3 },
    ];

    // Documented behavior: a length mismatch truncates, it does not error.
    assert_eq!(count.set(counters, vec![9]), vec![Counter { count: 9 }]);

    let counters = vec![Counter { count: 1 }];
    assert_eq!(count.set(counters, vec![7, 8]), vec![Counter { count: 7 }]);
}

#[test]
fn split_applies_sides_independently() {
    let both = split(lens!(Counter, count), lens!(Label, text));
    let pair = (
        Counter { count: 1 },
        Label {
            text: "a".to_string(),
        },
    );

    assert_eq!(both.get(&pair), (1, "a".to_string()));

    let updated = both.set(pair, (2, "b".to_string()));
    assert_eq!(updated.0, Counter { count: 2 });
    assert_eq!(updated.1.text, "b");
}

#[test]
fn fanout_reads_both_sides_of_one_source() {
    #[derive(Clone, PartialEq, Debug)]
    struct Point {
        x: i32,
        y: i32,
    }

    let xy = fanout(lens!(Point, x), lens!(Point, y));
    assert_eq!(xy.get(&Point { x: 1, y: 2 }), (1, 2));
    assert_eq!(xy.set(Point { x: 1, y: 2 }, (3, 4)), Point { x: 3, y: 4 });
}

#[test]
fn fanout_set_right_side_wins_on_shared_target() {
    let first = FunctionLens::new(
        |counter: &Counter| counter.count,
        |counter: Counter, count| Counter { count, ..counter },
    );
    let second = FunctionLens::new(
        |counter: &Counter| counter.count,
        |counter: Counter, count| Counter { count, ..counter },
    );

    let shared = fanout(first, second);
    let updated = shared.set(Counter { count: 0 }, (1, 2));
    assert_eq!(updated, Counter { count: 2 });
}
