//! Properties every registered algorithm must satisfy.

use fuzzmatch_similarity::AlgorithmRegistry;
use proptest::prelude::*;

fn registry() -> AlgorithmRegistry {
    AlgorithmRegistry::builtin()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn identical_strings_score_one(value in "\\PC{1,24}") {
        let registry = registry();
        for id in registry.ids() {
            prop_assert_eq!(registry.resolve(id).algorithm.score(&value, &value), 1.0, "{}", id);
        }
    }

    #[test]
    fn scores_stay_in_unit_interval(a in "\\PC{0,24}", b in "\\PC{0,24}") {
        let registry = registry();
        for id in registry.ids() {
            let entry = registry.resolve(id).algorithm;
            let score = entry.score(&a, &b);
            prop_assert!(score.is_finite(), "{id}: {score}");
            prop_assert!((0.0..=1.0).contains(&score), "{id}: {score}");
        }
    }

    #[test]
    fn one_empty_side_scores_zero(value in "\\PC{1,24}") {
        let registry = registry();
        for id in registry.ids() {
            let entry = registry.resolve(id).algorithm;
            prop_assert_eq!(entry.score("", &value), 0.0, "{}", id);
            prop_assert_eq!(entry.score(&value, ""), 0.0, "{}", id);
        }
    }

    #[test]
    fn case_changes_do_not_matter(value in "[a-zA-Z ]{1,16}") {
        let registry = registry();
        let upper = value.to_uppercase();
        for id in registry.ids() {
            prop_assert_eq!(registry.resolve(id).algorithm.score(&value, &upper), 1.0, "{}", id);
        }
    }
}

#[test]
fn empty_strings_are_identical_for_every_algorithm() {
    let registry = registry();
    for id in registry.ids() {
        assert_eq!(registry.resolve(id).algorithm.score("", ""), 1.0, "{id}");
    }
}

#[test]
fn punctuation_and_unicode_inputs_are_scored() {
    let registry = registry();
    let pairs = [
        ("Zürich", "Zurich"),
        ("O'Brien & Sons", "OBrien and Sons"),
        ("東京", "東京都"),
        ("---", "..."),
        ("ǅemal", "džemal"),
    ];
    for id in registry.ids() {
        for (a, b) in pairs {
            let score = registry.resolve(id).algorithm.score(a, b);
            assert!((0.0..=1.0).contains(&score), "{id} on ({a}, {b}) -> {score}");
        }
    }
}

#[test]
fn scenario_names_prefer_the_right_counterpart() {
    let registry = registry();
    let jw = registry.resolve("jaro-winkler").algorithm;
    assert!(jw.score("John Smith", "J. Smith") > jw.score("John Smith", "Microsoft Corporation"));
    assert!(
        jw.score("Microsoft Corp", "Microsoft Corporation") > jw.score("Microsoft Corp", "J. Smith")
    );
}
