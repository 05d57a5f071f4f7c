use crate::{enumerate, enumerate_with_budget, Budget, MatchRecord, PatternError, PatternOptions};

fn all_matches() -> PatternOptions {
    PatternOptions::new().with_global(true)
}

fn starts_and_texts(records: &[MatchRecord]) -> Vec<(usize, &str)> {
    records
        .iter()
        .map(|r| (r.start, r.matched_text.as_str()))
        .collect()
}

#[test]
fn digits_across_the_subject() {
    let records = enumerate(r"\d+", &all_matches(), "a1 bb22 c3").unwrap();
    assert_eq!(starts_and_texts(&records), vec![(1, "1"), (5, "22"), (9, "3")]);
}

#[test]
fn captured_groups_in_declaration_order() {
    let records = enumerate(r"(\d{3})-(\d{4})", &PatternOptions::new(), "call 555-1234 now").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].start, 5);
    assert_eq!(records[0].matched_text, "555-1234");
    assert_eq!(
        records[0].captured_groups,
        vec![Some("555".to_string()), Some("1234".to_string())]
    );
}

#[test]
fn non_global_stops_at_one() {
    let records = enumerate(r"\d", &PatternOptions::new(), "1 2 3").unwrap();
    assert_eq!(starts_and_texts(&records), vec![(0, "1")]);
}

#[test]
fn non_global_still_searches_the_whole_subject() {
    // The single attempt starts from position 0 but is not anchored there.
    let records = enumerate(r"\d", &PatternOptions::new(), "ab3").unwrap();
    assert_eq!(starts_and_texts(&records), vec![(2, "3")]);
}

#[test]
fn zero_width_pattern_terminates_with_one_record_per_position() {
    // `x*` matches the empty string everywhere; without the advance guard
    // this would loop forever at position 0.
    let records = enumerate(r"x*", &all_matches(), "y").unwrap();
    assert_eq!(starts_and_texts(&records), vec![(0, ""), (1, "")]);
}

#[test]
fn zero_width_and_consuming_matches_interleave() {
    let records = enumerate(r"x*", &all_matches(), "yxxy").unwrap();
    assert_eq!(
        starts_and_texts(&records),
        vec![(0, ""), (1, "xx"), (3, ""), (4, "")]
    );
}

#[test]
fn word_boundary_only_pattern_terminates() {
    let records = enumerate(r"\b", &all_matches(), "ab cd").unwrap();
    assert!(records.iter().all(|r| r.is_zero_width()));
    assert_eq!(
        records.iter().map(|r| r.start).collect::<Vec<_>>(),
        vec![0, 2, 3, 5]
    );
}

#[test]
fn invalid_pattern_is_a_typed_error() {
    let err = enumerate("(unbalanced", &PatternOptions::new(), "anything").unwrap_err();
    assert!(matches!(err, PatternError::InvalidSyntax { .. }));
}

#[test]
fn absent_group_is_distinct_from_empty_group() {
    // `(a)?` on a subject without "a": the group never participates.
    let records = enumerate(r"(a)?", &PatternOptions::new(), "b").unwrap();
    assert_eq!(records[0].captured_groups, vec![None]);

    // `(a*)` on the same subject: the group participates and matches "".
    let records = enumerate(r"(a*)", &PatternOptions::new(), "b").unwrap();
    assert_eq!(records[0].captured_groups, vec![Some(String::new())]);
}

#[test]
fn alternation_reports_every_defined_group() {
    // Two groups are defined; only one participates per match.
    let records = enumerate(r"(a)|(b)", &all_matches(), "ab").unwrap();
    assert_eq!(
        records[0].captured_groups,
        vec![Some("a".to_string()), None]
    );
    assert_eq!(
        records[1].captured_groups,
        vec![None, Some("b".to_string())]
    );
}

#[test]
fn records_are_ordered_and_non_overlapping() {
    let records = enumerate(r"\w+", &all_matches(), "one two three four").unwrap();
    for pair in records.windows(2) {
        assert!(pair[0].end() <= pair[1].start);
    }
    for record in &records {
        assert!(record.end() <= "one two three four".len());
    }
}

#[test]
fn case_insensitive_option() {
    let options = all_matches().with_case_insensitive(true);
    let records = enumerate("rust", &options, "Rust RUST rust").unwrap();
    assert_eq!(records.len(), 3);
}

#[test]
fn multiline_anchors_match_at_line_boundaries() {
    let subject = "one\ntwo";
    let options = all_matches().with_multiline(true);
    let records = enumerate(r"^\w+", &options, subject).unwrap();
    assert_eq!(starts_and_texts(&records), vec![(0, "one"), (4, "two")]);

    // Without multiline, only the string start anchors.
    let records = enumerate(r"^\w+", &all_matches(), subject).unwrap();
    assert_eq!(starts_and_texts(&records), vec![(0, "one")]);
}

#[test]
fn dot_all_lets_the_wildcard_cross_lines() {
    let options = PatternOptions::new().with_dot_all(true);
    let records = enumerate("a.b", &options, "a\nb").unwrap();
    assert_eq!(records.len(), 1);

    let records = enumerate("a.b", &PatternOptions::new(), "a\nb").unwrap();
    assert!(records.is_empty());
}

#[test]
fn ascii_classes_when_unicode_mode_is_off() {
    let options = all_matches().with_unicode_mode(false);
    let records = enumerate(r"\w+", &options, "héllo").unwrap();
    // "é" is outside the ASCII word class, splitting the run in two.
    assert_eq!(starts_and_texts(&records), vec![(0, "h"), (3, "llo")]);

    let records = enumerate(r"\w+", &all_matches(), "héllo").unwrap();
    assert_eq!(starts_and_texts(&records), vec![(0, "héllo")]);
}

#[test]
fn offsets_are_byte_offsets_on_char_boundaries() {
    let subject = "é1 ü22";
    let records = enumerate(r"\d+", &all_matches(), subject).unwrap();
    assert_eq!(starts_and_texts(&records), vec![(2, "1"), (6, "22")]);
    assert_eq!(records[0].start_chars(subject), 1);
    assert_eq!(records[1].start_chars(subject), 4);
    // Byte offsets slice the original subject directly.
    for record in &records {
        assert_eq!(&subject[record.start..record.end()], record.matched_text);
    }
}

#[test]
fn budget_abort_carries_partial_matches() {
    let err = enumerate_with_budget(r"\d", &all_matches(), "1 2 3", Budget::searches(2))
        .unwrap_err();
    match err {
        PatternError::BudgetExceeded { partial } => {
            assert_eq!(starts_and_texts(&partial), vec![(0, "1"), (2, "2")]);
        }
        other => panic!("expected BudgetExceeded, got {:?}", other),
    }
}

#[test]
fn sufficient_budget_completes_normally() {
    let records =
        enumerate_with_budget(r"\d", &all_matches(), "1 2 3", Budget::searches(10)).unwrap();
    assert_eq!(records.len(), 3);
}
