// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::panic)]
use super::*;
use crate::report::parse_lines;
use proptest::prelude::*;
use rstest::rstest;

const SAMPLE: [&str; 6] = [
    "7 6 4 2 1",
    "1 2 7 8 9",
    "9 7 6 2 1",
    "1 3 2 4 5",
    "8 6 4 4 1",
    "1 3 6 7 9",
];

fn sample_reports() -> Vec<Report> {
    parse_lines(&SAMPLE).reports
}

#[rstest]
#[case(&[7, 6, 4, 2, 1], Assessment::Safe, Assessment::Safe)]
#[case(&[1, 2, 7, 8, 9], Assessment::Unsafe, Assessment::Unsafe)]
#[case(&[9, 7, 6, 2, 1], Assessment::Unsafe, Assessment::Unsafe)]
#[case(&[1, 3, 2, 4, 5], Assessment::Unsafe, Assessment::SafeAfterRemoval(1))]
#[case(&[8, 6, 4, 4, 1], Assessment::Unsafe, Assessment::SafeAfterRemoval(2))]
#[case(&[1, 1, 1, 1, 1], Assessment::Unsafe, Assessment::Unsafe)]
#[case(&[1, 3, 6, 7, 9], Assessment::Safe, Assessment::Safe)]
fn assesses_scenarios(
    #[case] levels: &[i64],
    #[case] direct: Assessment,
    #[case] dampened: Assessment,
) {
    let report = Report::from_levels(1, levels.to_vec());
    let rule = StepRule::default();

    assert_eq!(assess(&report, &rule, CheckMode::Direct), direct);
    assert_eq!(assess(&report, &rule, CheckMode::Dampened), dampened);
}

#[test]
fn removal_of_first_level() {
    assert_eq!(dampened_removal(&[10, 1, 2, 3], &StepRule::default()), Some(0));
}

#[test]
fn removal_of_last_level() {
    assert_eq!(dampened_removal(&[1, 2, 3, 10], &StepRule::default()), Some(3));
}

#[test]
fn removal_picks_lowest_index() {
    // Dropping either 3 fixes the flat step; the first one wins.
    assert_eq!(dampened_removal(&[1, 3, 3, 5], &StepRule::default()), Some(1));
}

#[test]
fn no_removal_for_safe_sequence() {
    assert_eq!(dampened_removal(&[1, 2, 3], &StepRule::default()), None);
}

#[test]
fn two_element_unsafe_is_rescued() {
    // Removing either level leaves a single vacuously safe level.
    assert_eq!(dampened_removal(&[4, 4], &StepRule::default()), Some(0));
}

#[test]
fn direct_pass_over_sample() {
    let reports = sample_reports();
    let result = classify_all(&reports, &StepRule::default());

    assert_eq!(result.count(), 2);
    assert_eq!(result.lines(), vec![1, 6]);
    assert_eq!(result.mode(), CheckMode::Direct);
    assert_eq!(result.summary(), "Found 2 safe reports");
}

#[test]
fn dampened_pass_over_sample() {
    let reports = sample_reports();
    let result = classify_all_with_tolerance(&reports, &StepRule::default());

    assert_eq!(result.count(), 4);
    assert_eq!(result.lines(), vec![1, 4, 5, 6]);
    assert_eq!(result.safe()[1].text(), "1 3 2 4 5");
    assert_eq!(
        result.summary(),
        "Found 4 safe reports with Problem Dampener"
    );
}

#[rstest]
#[case(CheckMode::Direct)]
#[case(CheckMode::Dampened)]
fn empty_input_has_none_found_summary(#[case] mode: CheckMode) {
    let result = Classifier::new(StepRule::default()).run(&[], mode);
    assert_eq!(result.count(), 0);
    assert_eq!(result.summary(), "No safe reports found!");
}

#[test]
fn single_safe_report_keeps_plural_wording() {
    let reports = vec![Report::from_levels(1, vec![1, 2])];
    let result = classify_all(&reports, &StepRule::default());
    assert_eq!(result.summary(), "Found 1 safe reports");
}

#[test]
fn classifier_records_verdicts() {
    let reports = sample_reports();
    let log = VerdictLog::new();
    let classifier = Classifier::new(StepRule::default()).with_log(&log);

    classifier.run(&reports, CheckMode::Direct);
    classifier.run(&reports, CheckMode::Dampened);

    assert_eq!(log.len(), 12);
    let dampened = log.for_mode(CheckMode::Dampened);
    assert_eq!(
        dampened[3].outcome,
        VerdictOutcome::SafeAfterRemoval { index: 1, level: 3 }
    );
    assert_eq!(
        dampened[1].outcome,
        VerdictOutcome::Unsafe {
            reason: "step of 5 at index 1 is outside 1..=3".to_string()
        }
    );
    let direct = log.for_mode(CheckMode::Direct);
    assert_eq!(
        direct[4].outcome,
        VerdictOutcome::Unsafe {
            reason: "flat step at index 2".to_string()
        }
    );
}

proptest! {
    #[test]
    fn prop_dampened_accepts_everything_direct_accepts(
        levels in prop::collection::vec(-20i64..20, 0..10),
    ) {
        let report = Report::from_levels(1, levels);
        let rule = StepRule::default();
        if assess(&report, &rule, CheckMode::Direct).is_safe() {
            prop_assert!(assess(&report, &rule, CheckMode::Dampened).is_safe());
        }
    }

    #[test]
    fn prop_rescue_index_yields_safe_candidate(
        levels in prop::collection::vec(-20i64..20, 0..10),
    ) {
        let rule = StepRule::default();
        if let Some(i) = dampened_removal(&levels, &rule) {
            let mut candidate = levels.clone();
            candidate.remove(i);
            prop_assert!(is_safe(&candidate, &rule));
            prop_assert!(!is_safe(&levels, &rule));
        }
    }
}
