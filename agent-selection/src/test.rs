use fitness_selection::num::assert_within;
use fitness_selection::{Linear, SelectionError};
use proptest::{prelude::prop, prop_assert, prop_compose, proptest};
use rand::rngs::SmallRng;
use rand::SeedableRng as _;

use crate::{exponential_selection, linear_selection, selection_with, ActionError, ScriptValue};

fn frequency(hits: u32, trials: u32) -> f64 {
    hits as f64 / trials as f64
}

#[test]
fn linear_selection_distribution() {
    let values = [ScriptValue::from("c"), ScriptValue::from("d")];
    let scores = [3.0, 7.0];
    let trials: u32 = 6500;
    let mut first = 0;
    for _ in 0..trials {
        if linear_selection(&values, &scores).unwrap() == values[0] {
            first += 1;
        }
    }
    assert_within(frequency(first, trials), 0.3, 0.05);
    assert_within(frequency(trials - first, trials), 0.7, 0.05);
}

#[test]
fn exponential_selection_with_sharp_bias() {
    let values = [ScriptValue::from("a"), ScriptValue::from("b")];
    let scores = [4.5, 3.5];
    let trials: u32 = 5000;
    let mut first = 0;
    for _ in 0..trials {
        let picked = exponential_selection(&values, &scores, &[ScriptValue::Num(1.0)]).unwrap();
        if picked == values[0] {
            first += 1;
        }
    }
    assert_within(frequency(first, trials), 0.73, 0.05);
    assert_within(frequency(trials - first, trials), 0.27, 0.05);
}

#[test]
fn exponential_selection_with_flat_bias() {
    // a low bias widens the spread toward uniform
    let values = [ScriptValue::from("a"), ScriptValue::from("b")];
    let scores = [4.5, 3.5];
    let trials: u32 = 6500;
    let mut first = 0;
    for _ in 0..trials {
        let picked = exponential_selection(&values, &scores, &[ScriptValue::Num(0.5)]).unwrap();
        if picked == values[0] {
            first += 1;
        }
    }
    assert_within(frequency(first, trials), 0.73, 0.2);
    assert_within(frequency(trials - first, trials), 0.27, 0.2);
}

#[test]
fn exponential_selection_bias_defaults_to_one() {
    let values = [ScriptValue::from("a"), ScriptValue::from("b")];
    let scores = [4.5, 3.5];
    let trials: u32 = 5000;
    let mut first = 0;
    for _ in 0..trials {
        if exponential_selection(&values, &scores, &[]).unwrap() == values[0] {
            first += 1;
        }
    }
    assert_within(frequency(first, trials), 0.73, 0.05);
}

#[test]
fn concurrent_selection_preserves_distribution() {
    let values = [ScriptValue::from("c"), ScriptValue::from("d")];
    let scores = [3.0, 7.0];
    let threads: u32 = 8;
    let per_thread: u32 = 820;
    let first: u32 = std::thread::scope(|scope| {
        (0..threads)
            .map(|_| {
                scope.spawn(|| {
                    (0..per_thread)
                        .filter(|_| linear_selection(&values, &scores).unwrap() == values[0])
                        .count() as u32
                })
            })
            .collect::<Vec<_>>()
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .sum()
    });
    assert_within(
        frequency(first, threads * per_thread),
        0.3,
        0.05,
    );
}

#[test]
fn single_value_is_always_selected() {
    let solo = [ScriptValue::from("only")];
    for _ in 0..32 {
        assert_eq!(linear_selection(&solo, &[0.0]).unwrap(), solo[0]);
    }
}

#[test]
fn mismatched_scores_are_rejected() {
    let values = [ScriptValue::from("a"), ScriptValue::from("b")];
    let result = linear_selection(&values, &[1.0]);
    assert!(matches!(
        result,
        Err(ActionError::Selection(SelectionError::LengthMismatch {
            candidates: 2,
            weights: 1,
        }))
    ));

    let result = linear_selection(&[], &[]);
    assert!(matches!(
        result,
        Err(ActionError::Selection(SelectionError::EmptyCandidates))
    ));
}

#[test]
fn non_numeric_bias_is_rejected() {
    let values = [ScriptValue::from("a")];
    let result = exponential_selection(&values, &[1.0], &[ScriptValue::from("sharp")]);
    assert!(matches!(result, Err(ActionError::NonNumericBias(_))));
}

prop_compose! {
    fn scores()(scores in prop::collection::vec(0.0_f64..100.0, 1..16)) -> Vec<f64> {
        scores
    }
}
proptest! {
    #[test]
    fn selection_returns_an_input_value(seed: u64, scores in scores()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let values: Vec<ScriptValue> = (0..scores.len())
            .map(|i| ScriptValue::Num(i as f64))
            .collect();
        let picked = selection_with(&mut rng, &values, &scores, &Linear).unwrap();
        prop_assert!(values.contains(&picked));
    }
}
