use aula_calendar::WeekPolicy;
use aula_core::{Distributor, all_week_distributions, lessons_for_week, weeks_in_term};
use proptest::prelude::*;

#[test]
fn third_term_is_shorter() {
    assert_eq!(weeks_in_term("3"), 10);
    assert_eq!(weeks_in_term("3º"), 10);
    for term in ["1", "2", "4", "2°"] {
        assert_eq!(weeks_in_term(term), 11, "term {term}");
    }
}

#[test]
fn second_week_of_first_term() {
    assert_eq!(lessons_for_week("1", "SEMANA 2", 23), [4, 5]);
    assert_eq!(lessons_for_week("1", "SEMANA 1", 23), [1, 2, 3]);
    assert_eq!(lessons_for_week("1", "SEMANA 11", 23), [22, 23]);
}

#[test]
fn malformed_and_out_of_range_weeks_are_empty() {
    assert!(lessons_for_week("1", "", 23).is_empty());
    assert!(lessons_for_week("1", "SEMANA", 23).is_empty());
    assert!(lessons_for_week("1", "SEMANA 0", 23).is_empty());
    assert!(lessons_for_week("1", "SEMANA 12", 23).is_empty());
    assert!(lessons_for_week("3", "SEMANA 11", 23).is_empty());
    assert!(lessons_for_week("1", "SEMANA 1", 0).is_empty());
}

#[test]
fn week_labels_are_case_insensitive() {
    assert_eq!(lessons_for_week("1", "semana 2", 23), [4, 5]);
    assert_eq!(lessons_for_week("1", "Week 2", 23), [4, 5]);
}

#[test]
fn fewer_lessons_than_weeks_leaves_trailing_weeks_empty() {
    let weeks = all_week_distributions("3", 4);
    assert_eq!(weeks.len(), 10);
    let sizes: Vec<usize> = weeks.iter().map(|week| week.len()).collect();
    assert_eq!(sizes, [1, 1, 1, 1, 0, 0, 0, 0, 0, 0]);
    assert_eq!(weeks[4].start_lesson, 5);
    assert_eq!(weeks[4].end_lesson, 4);
}

#[test]
fn custom_policy_changes_week_count() {
    let policy = WeekPolicy::new(4, [("2", 2)]).expect("valid policy");
    let distributor = Distributor::new(&policy);
    assert_eq!(distributor.weeks_in_term("1"), 4);
    assert_eq!(distributor.lessons_for_week("2", "SEMANA 2", 5), [4, 5]);
    assert!(distributor.lessons_for_week("2", "SEMANA 3", 5).is_empty());
}

#[test]
fn distribution_labels() {
    let weeks = all_week_distributions("1", 11);
    assert_eq!(weeks[0].label(), "SEMANA 1");
    assert_eq!(weeks[10].week_number(), 11);
}

proptest! {
    #[test]
    fn distributions_partition_all_lessons(term in "[1-4]", total in 0u32..400) {
        let weeks = all_week_distributions(&term, total);
        let flattened: Vec<u32> = weeks
            .iter()
            .flat_map(|week| week.lesson_numbers.iter().copied())
            .collect();
        let expected: Vec<u32> = (1..=total).collect();
        prop_assert_eq!(flattened, expected);
        prop_assert_eq!(weeks.len(), weeks_in_term(&term));
    }

    #[test]
    fn week_sizes_differ_by_at_most_one(term in "[1-4]", total in 0u32..400) {
        let weeks = all_week_distributions(&term, total);
        let sizes: Vec<usize> = weeks.iter().map(|week| week.len()).collect();
        let max = sizes.iter().copied().max().unwrap_or(0);
        let min = sizes.iter().copied().min().unwrap_or(0);
        prop_assert!(max - min <= 1);
        prop_assert!(sizes.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn single_week_matches_full_distribution(term in "[1-4]", total in 0u32..400) {
        let weeks = all_week_distributions(&term, total);
        for week in &weeks {
            let label = format!("SEMANA {}", week.week_index + 1);
            prop_assert_eq!(&lessons_for_week(&term, &label, total), &week.lesson_numbers);
            prop_assert_eq!(u64::from(week.end_lesson) + 1 - u64::from(week.start_lesson), week.len() as u64);
        }
    }
}
