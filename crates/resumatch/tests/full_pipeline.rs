mod common;

use common::{
    JOB_DESCRIPTION, PARTIAL_RESUME, STRONG_RESUME, UNRELATED_RESUME, build_pdf, screener,
};
use resumatch_core::{Candidate, NoticeReason, ScreenError};
use resumatch_report::{Tier, parse_csv};

#[test]
fn test_mixed_batch_end_to_end() {
    let candidates = [
        Candidate::new("unrelated.txt", UNRELATED_RESUME),
        Candidate::new("strong.pdf", build_pdf(&[STRONG_RESUME, ""])),
        Candidate::new("scan.pdf", build_pdf(&["", ""])),
        Candidate::new("partial.txt", PARTIAL_RESUME),
    ];

    let outcome = screener().screen(JOB_DESCRIPTION, &candidates).unwrap();
    let names: Vec<&str> = outcome.table.rows().iter().map(|r| r.name.as_str()).collect();

    assert_eq!(names, vec!["strong.pdf", "partial.txt", "unrelated.txt"]);
    assert_eq!(outcome.table.rows()[2].score, 0.0);
    assert_eq!(outcome.table.rows()[2].tier, Tier::Low);

    assert_eq!(outcome.notices.len(), 1);
    assert_eq!(outcome.notices[0].candidate, "scan.pdf");
    assert_eq!(outcome.notices[0].reason, NoticeReason::NoText);
}

#[test]
fn test_survivors_never_exceed_uploads() {
    let candidates = [
        Candidate::new("a.txt", STRONG_RESUME),
        Candidate::new("b.bin", vec![0xFFu8, 0x00, 0xC3, 0x28]),
        Candidate::new("c.txt", "   "),
    ];
    let outcome = screener().screen(JOB_DESCRIPTION, &candidates).unwrap();
    assert!(outcome.table.len() <= candidates.len());
    assert_eq!(outcome.table.len() + outcome.notices.len(), candidates.len());
}

#[test]
fn test_corrupt_pdf_only_is_fatal() {
    let candidates = [Candidate::new("broken.pdf", b"%PDF-1.7\n\x00\x01 truncated".to_vec())];
    let err = screener().screen(JOB_DESCRIPTION, &candidates).unwrap_err();
    assert!(matches!(err, ScreenError::EmptyBatch { dropped: 1 }));
}

#[test]
fn test_csv_export_roundtrip() {
    let candidates = [
        Candidate::new("Doe, John.txt", PARTIAL_RESUME),
        Candidate::new("strong.txt", STRONG_RESUME),
    ];
    let outcome = screener().screen(JOB_DESCRIPTION, &candidates).unwrap();
    let parsed = parse_csv(&outcome.table.to_csv().unwrap()).unwrap();

    let expected: Vec<(String, f64)> = outcome
        .table
        .rows()
        .iter()
        .map(|r| (r.name.clone(), r.percentage))
        .collect();
    let actual: Vec<(String, f64)> = parsed.into_iter().map(|r| (r.name, r.percentage)).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_runs_are_independent() {
    let s = screener();
    let first = s
        .screen(JOB_DESCRIPTION, &[Candidate::new("a", STRONG_RESUME)])
        .unwrap();
    // an unrelated run in between must not leak vocabulary into the next
    s.screen("pastry chef", &[Candidate::new("x", UNRELATED_RESUME)])
        .unwrap();
    let again = s
        .screen(JOB_DESCRIPTION, &[Candidate::new("a", STRONG_RESUME)])
        .unwrap();
    assert_eq!(first.table, again.table);
}
