//! Integration tests for the attendance batch transaction.
//!
//! These tests drive the SQLite adapter through its public API and check
//! the delete-then-insert routine end to end:
//! 1. A submission fully replaces its (workshop, date) key
//! 2. Failures leave the store exactly as it was
//! 3. Concurrent submissions for one key never interleave

use std::collections::BTreeSet;

use chrono::NaiveDate;
use proptest::prelude::*;

use workshop_attendance::adapters::sqlite::{
    Database, SqliteAttendanceRepository, SqliteParticipantRepository, SqliteWorkshopRepository,
};
use workshop_attendance::config::DatabaseConfig;
use workshop_attendance::domain::attendance::{AttendanceEntry, AttendanceStatus};
use workshop_attendance::domain::foundation::{ParticipantId, WorkshopId};
use workshop_attendance::domain::participant::NewParticipant;
use workshop_attendance::domain::workshop::NewWorkshop;
use workshop_attendance::ports::{
    AttendanceRepository, ParticipantRepository, WorkshopRepository,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Fixture {
    db: Database,
    attendance: SqliteAttendanceRepository,
    workshop: WorkshopId,
    students: Vec<ParticipantId>,
}

async fn seed(db: Database, students: usize) -> Fixture {
    let participants = SqliteParticipantRepository::new(db.pool().clone());
    let workshops = SqliteWorkshopRepository::new(db.pool().clone());

    let instructor = participants
        .create(&registration("instructor", "Carlos", 0))
        .await
        .unwrap();
    let workshop = workshops
        .create(
            &NewWorkshop::new(
                Some("Robotics".to_string()),
                Some(instructor.id),
                Some("Monday 10:00-12:00".to_string()),
                None,
                None,
                None,
            )
            .unwrap(),
        )
        .await
        .unwrap();

    let mut ids = Vec::new();
    for n in 1..=students {
        let student = participants
            .create(&registration("student", &format!("Student {}", n), n))
            .await
            .unwrap();
        ids.push(student.id);
    }

    Fixture {
        attendance: SqliteAttendanceRepository::new(db.pool().clone()),
        db,
        workshop,
        students: ids,
    }
}

fn registration(kind: &str, name: &str, n: usize) -> NewParticipant {
    let cpf = format!("{:011}", 10_000_000_000u64 + n as u64);
    NewParticipant::new(
        Some(name.to_string()),
        Some(format!("{}@example.com", cpf)),
        Some("41999999999".to_string()),
        Some(kind.to_string()),
        None,
        Some(cpf),
    )
    .unwrap()
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn entry(
    workshop: WorkshopId,
    participant: ParticipantId,
    date: &str,
    status: AttendanceStatus,
    notes: Option<&str>,
) -> AttendanceEntry {
    AttendanceEntry {
        workshop_id: workshop,
        participant_id: participant,
        date: day(date),
        status,
        notes: notes.map(str::to_string),
    }
}

/// Order-independent view of the rows stored under one key.
async fn stored_set(
    fixture: &Fixture,
    date: &str,
) -> BTreeSet<(i64, &'static str, Option<String>)> {
    fixture
        .attendance
        .find_by_key(fixture.workshop, day(date))
        .await
        .unwrap()
        .into_iter()
        .map(|r| (r.participant_id.as_i64(), r.status.as_str(), r.notes))
        .collect()
}

fn submitted_set(entries: &[AttendanceEntry]) -> BTreeSet<(i64, &'static str, Option<String>)> {
    entries
        .iter()
        .map(|e| (e.participant_id.as_i64(), e.status.as_str(), e.notes.clone()))
        .collect()
}

// =============================================================================
// Replacement Semantics
// =============================================================================

#[tokio::test]
async fn resubmission_leaves_one_absent_record() {
    let fixture = seed(Database::in_memory().await.unwrap(), 1).await;
    let student = fixture.students[0];

    fixture
        .attendance
        .record_batch(&[entry(
            fixture.workshop,
            student,
            "2025-01-01",
            AttendanceStatus::Present,
            None,
        )])
        .await
        .unwrap();
    fixture
        .attendance
        .record_batch(&[entry(
            fixture.workshop,
            student,
            "2025-01-01",
            AttendanceStatus::Absent,
            Some("late arrival"),
        )])
        .await
        .unwrap();

    let rows = fixture
        .attendance
        .find_by_key(fixture.workshop, day("2025-01-01"))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, AttendanceStatus::Absent);
    assert_eq!(rows[0].notes.as_deref(), Some("late arrival"));
}

#[tokio::test]
async fn participants_left_out_of_a_resubmission_are_dropped() {
    let fixture = seed(Database::in_memory().await.unwrap(), 3).await;
    let all: Vec<_> = fixture
        .students
        .iter()
        .map(|s| entry(fixture.workshop, *s, "2025-02-03", AttendanceStatus::Present, None))
        .collect();
    fixture.attendance.record_batch(&all).await.unwrap();

    let only_first = [entry(
        fixture.workshop,
        fixture.students[0],
        "2025-02-03",
        AttendanceStatus::Absent,
        None,
    )];
    fixture.attendance.record_batch(&only_first).await.unwrap();

    assert_eq!(stored_set(&fixture, "2025-02-03").await, submitted_set(&only_first));
}

#[tokio::test]
async fn empty_batch_is_a_noop() {
    let fixture = seed(Database::in_memory().await.unwrap(), 1).await;
    fixture
        .attendance
        .record_batch(&[entry(
            fixture.workshop,
            fixture.students[0],
            "2025-01-01",
            AttendanceStatus::Present,
            None,
        )])
        .await
        .unwrap();

    let acks = fixture.attendance.record_batch(&[]).await.unwrap();

    assert!(acks.is_empty());
    assert_eq!(fixture.attendance.list_all().await.unwrap().len(), 1);
}

// =============================================================================
// Failure Atomicity
// =============================================================================

#[tokio::test]
async fn failing_insert_keeps_previous_day() {
    let fixture = seed(Database::in_memory().await.unwrap(), 2).await;
    let before = [entry(
        fixture.workshop,
        fixture.students[0],
        "2025-01-01",
        AttendanceStatus::Present,
        None,
    )];
    fixture.attendance.record_batch(&before).await.unwrap();

    let result = fixture
        .attendance
        .record_batch(&[
            entry(fixture.workshop, fixture.students[1], "2025-01-01", AttendanceStatus::Absent, None),
            entry(fixture.workshop, ParticipantId::new(999), "2025-01-01", AttendanceStatus::Absent, None),
        ])
        .await;

    assert!(result.is_err());
    assert_eq!(stored_set(&fixture, "2025-01-01").await, submitted_set(&before));
}

#[tokio::test]
async fn failing_delete_inserts_nothing() {
    let fixture = seed(Database::in_memory().await.unwrap(), 2).await;
    let before = [entry(
        fixture.workshop,
        fixture.students[0],
        "2025-01-01",
        AttendanceStatus::Present,
        None,
    )];
    fixture.attendance.record_batch(&before).await.unwrap();

    sqlx::query(
        "CREATE TRIGGER block_attendance_delete BEFORE DELETE ON attendance \
         BEGIN SELECT RAISE(ABORT, 'delete blocked'); END",
    )
    .execute(fixture.db.pool())
    .await
    .unwrap();

    let err = fixture
        .attendance
        .record_batch(&[entry(
            fixture.workshop,
            fixture.students[1],
            "2025-01-01",
            AttendanceStatus::Absent,
            None,
        )])
        .await
        .unwrap_err();

    assert!(err.message.contains("delete blocked"));
    assert_eq!(fixture.attendance.list_all().await.unwrap().len(), 1);
    assert_eq!(stored_set(&fixture, "2025-01-01").await, submitted_set(&before));
}

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test]
async fn concurrent_submissions_for_one_key_never_interleave() {
    let dir = tempfile::tempdir().unwrap();
    let config = DatabaseConfig {
        url: format!("sqlite://{}", dir.path().join("attendance.db").display()),
        max_connections: 8,
        ..DatabaseConfig::default()
    };
    let db = Database::connect(&config).await.unwrap();
    db.initialize_schema().await.unwrap();
    let fixture = seed(db, 4).await;

    let submissions: Vec<Vec<AttendanceEntry>> = (0..8)
        .map(|round| {
            fixture
                .students
                .iter()
                .map(|s| {
                    let status = if round % 2 == 0 {
                        AttendanceStatus::Present
                    } else {
                        AttendanceStatus::Absent
                    };
                    let note = format!("round {}", round);
                    entry(fixture.workshop, *s, "2025-03-10", status, Some(note.as_str()))
                })
                .collect()
        })
        .collect();

    let mut tasks = Vec::new();
    for batch in submissions.clone() {
        let repo = SqliteAttendanceRepository::new(fixture.db.pool().clone());
        tasks.push(tokio::spawn(async move { repo.record_batch(&batch).await }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let stored = stored_set(&fixture, "2025-03-10").await;
    assert_eq!(stored.len(), fixture.students.len());
    assert!(
        submissions.iter().any(|s| submitted_set(s) == stored),
        "stored rows must match exactly one submission"
    );

    fixture.db.close().await;
}

// =============================================================================
// Property: the last submission for a key is exactly what is stored
// =============================================================================

fn status_strategy() -> impl Strategy<Value = AttendanceStatus> {
    prop_oneof![Just(AttendanceStatus::Present), Just(AttendanceStatus::Absent)]
}

fn batch_strategy() -> impl Strategy<Value = Vec<(usize, AttendanceStatus, Option<String>)>> {
    prop::collection::vec(
        (0usize..4, status_strategy(), prop::option::of("[a-z ]{0,12}")),
        1..6,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn last_submission_wins(first in batch_strategy(), second in batch_strategy()) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async {
            let fixture = seed(Database::in_memory().await.unwrap(), 4).await;
            let build = |batch: &[(usize, AttendanceStatus, Option<String>)], date: &str| {
                batch
                    .iter()
                    .map(|(n, status, notes)| {
                        entry(fixture.workshop, fixture.students[*n], date, *status, notes.as_deref())
                    })
                    .collect::<Vec<_>>()
            };

            let other_day = build(&first, "2025-04-02");
            fixture.attendance.record_batch(&other_day).await.unwrap();
            fixture.attendance.record_batch(&build(&first, "2025-04-01")).await.unwrap();

            let last = build(&second, "2025-04-01");
            let acks = fixture.attendance.record_batch(&last).await.unwrap();

            assert_eq!(acks.len(), last.len());
            let stored = fixture
                .attendance
                .find_by_key(fixture.workshop, day("2025-04-01"))
                .await
                .unwrap();
            assert_eq!(stored.len(), last.len());
            assert_eq!(stored_set(&fixture, "2025-04-01").await, submitted_set(&last));
            assert_eq!(stored_set(&fixture, "2025-04-02").await, submitted_set(&other_day));
        });
    }
}
