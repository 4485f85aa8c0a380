use std::io::Cursor;

use attendance_grader::attendance::{
    default_bands, AbsenceElimination, AttendanceBook, CompositeScoring, DayCountBonus,
    DefaultPolicyFactory, GradeBand, GradePolicy, ParticipantRecord, PolicyFactory,
    ScoringPolicy, ThresholdGrading, Weekday, UNDEFINED_GRADE,
};
use attendance_grader::config::PolicyConfig;
use attendance_grader::{loader, output};

fn record_times<S, G, E>(book: &mut AttendanceBook<S, G, E>, name: &str, day: Weekday, times: usize)
where
    S: ScoringPolicy,
    G: GradePolicy,
    E: attendance_grader::attendance::EliminationRule,
{
    for _ in 0..times {
        book.add_record(name, day);
    }
}

fn names(records: &[ParticipantRecord]) -> Vec<&str> {
    records.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn test_default_scenarios() {
    let mut book = AttendanceBook::new();
    record_times(&mut book, "Alice", Weekday::Wednesday, 10);
    record_times(&mut book, "Bob", Weekday::Saturday, 10);
    for day in [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Monday,
    ] {
        book.add_record("Carol", day);
    }
    record_times(&mut book, "Goldie", Weekday::Wednesday, 17);
    book.compute();

    let records = book.records();
    assert_eq!(names(records), vec!["Alice", "Bob", "Carol", "Goldie"]);

    let alice = &records[0];
    assert_eq!((alice.base_points, alice.bonus_points, alice.total_points), (30, 10, 40));
    assert_eq!(alice.grade, "SILVER");

    let bob = &records[1];
    assert_eq!((bob.base_points, bob.bonus_points, bob.total_points), (20, 10, 30));
    assert_eq!(bob.grade, "SILVER");

    let carol = &records[2];
    assert_eq!(carol.total_points, 5);
    assert_eq!(carol.grade, "NORMAL");
    assert!(carol.elimination_candidate);

    let goldie = &records[3];
    assert_eq!(goldie.total_points, 61);
    assert_eq!(goldie.grade, "GOLD");

    let eliminated: Vec<&str> = book.eliminated().map(|r| r.name.as_str()).collect();
    assert_eq!(eliminated, vec!["Carol"]);
}

#[test]
fn test_ingest_skips_bad_lines() {
    let mut book = AttendanceBook::new();
    let summary = loader::load_from_reader(
        &mut book,
        Cursor::new("Umar monday\nDaisy tuesday\nBadName funday\n"),
    );
    book.compute();

    assert_eq!(summary.accepted, 2);
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(names(book.records()), vec!["Umar", "Daisy"]);
    assert_eq!(book.records()[0].id, 1);
    assert_eq!(book.records()[1].id, 2);
}

#[test]
fn test_summary_report_end_to_end() {
    let mut book = AttendanceBook::new();
    loader::load_from_reader(
        &mut book,
        Cursor::new("Umar monday\nDaisy wednesday\nUmar friday\n"),
    );
    book.compute();

    let report = output::format_summary(book.records());
    assert_eq!(
        report,
        "NAME : Umar, POINT : 2, GRADE : NORMAL\n\
         NAME : Daisy, POINT : 3, GRADE : NORMAL\n\
         \n\
         Removed player\n\
         ==============\n\
         Umar\n"
    );
}

#[test]
fn test_platinum_band_without_changing_callers() {
    let mut bands = vec![GradeBand::new("PLATINUM", 80)];
    bands.extend(default_bands());

    let mut book = AttendanceBook::with_policies(
        CompositeScoring::default(),
        ThresholdGrading::new(bands),
        AbsenceElimination::default(),
    );
    record_times(&mut book, "Ace", Weekday::Wednesday, 27);
    book.compute();

    assert_eq!(book.len(), 1);
    assert_eq!(book.records()[0].total_points, 91);
    assert_eq!(book.records()[0].grade, "PLATINUM");
}

#[test]
fn test_custom_policies_by_reference() {
    struct Strict;
    impl GradePolicy for Strict {
        fn decide(&self, total_points: i64) -> String {
            if total_points >= 100 {
                "PASS".to_string()
            } else {
                "FAIL".to_string()
            }
        }
    }

    let scoring = CompositeScoring::new([2; 7]).with_rule(DayCountBonus::new(
        "busy-monday",
        vec![Weekday::Monday],
        3,
        100,
    ));
    let elimination = AbsenceElimination::new("FAIL", vec![Weekday::Monday]);

    let mut book = AttendanceBook::with_policies(&scoring, Strict, &elimination);
    record_times(&mut book, "Mo", Weekday::Monday, 3);
    record_times(&mut book, "Tu", Weekday::Tuesday, 3);
    book.compute();

    let mo = book.get("Mo").unwrap();
    assert_eq!(mo.total_points, 106);
    assert_eq!(mo.grade, "PASS");
    assert!(!mo.elimination_candidate);

    let tu = book.get("Tu").unwrap();
    assert_eq!(tu.total_points, 6);
    assert_eq!(tu.grade, "FAIL");
    assert!(tu.elimination_candidate);
}

#[test]
fn test_empty_bands_through_factory() {
    let config: PolicyConfig = serde_saphyr::from_str("grading:\n  bands: []\n").unwrap();
    let mut book = AttendanceBook::from_bundle(config.create());
    book.add_record("NoBandUser", Weekday::Monday);
    book.compute();

    assert_eq!(book.records()[0].grade, UNDEFINED_GRADE);
    assert!(!book.records()[0].elimination_candidate);
}

#[test]
fn test_default_config_matches_default_factory() {
    let input = "A wednesday\nA wednesday\nB sunday\nC monday\n".repeat(6);

    let mut from_config = AttendanceBook::from_bundle(PolicyConfig::default().create());
    let mut from_factory = AttendanceBook::from_bundle(DefaultPolicyFactory.create());
    loader::load_from_reader(&mut from_config, Cursor::new(input.clone()));
    loader::load_from_reader(&mut from_factory, Cursor::new(input));
    from_config.compute();
    from_factory.compute();

    assert_eq!(from_config.records(), from_factory.records());
    // A: 12 wednesdays -> 36 + 10
    assert_eq!(from_config.get("A").unwrap().total_points, 46);
}

#[test]
fn test_clear_then_reuse() {
    let mut book = AttendanceBook::new();
    loader::load_from_reader(&mut book, Cursor::new("A monday B tuesday"));
    book.compute();
    assert_eq!(book.len(), 2);

    book.clear();
    assert!(book.records().is_empty());

    book.add_record("X", Weekday::Wednesday);
    book.compute();
    assert_eq!(book.records()[0].id, 1);
    assert_eq!(book.records()[0].name, "X");
}
