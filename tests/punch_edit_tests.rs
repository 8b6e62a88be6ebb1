mod common;
use common::{at, day, default_settings};
use rworklog::core::del::DeleteLogic;
use rworklog::core::edit::{EditLogic, RecordChanges, RecordSelector};
use rworklog::core::punch::PunchLogic;
use rworklog::core::store::{MemStore, RecordStore};
use rworklog::errors::AppError;
use rworklog::models::clock_action::ClockAction;
use rworklog::models::work_record::WorkRecord;
use rworklog::models::work_status::WorkStatus;

fn store() -> MemStore {
    MemStore::with_settings(default_settings())
}

fn punched_day(store: &mut MemStore) -> WorkRecord {
    PunchLogic::punch(store, ClockAction::ClockIn, at("2025-06-02", "09:00")).unwrap();
    PunchLogic::punch(store, ClockAction::BreakStart, at("2025-06-02", "12:00")).unwrap();
    PunchLogic::punch(store, ClockAction::BreakEnd, at("2025-06-02", "13:00")).unwrap();
    PunchLogic::punch(store, ClockAction::ClockOut, at("2025-06-02", "18:00")).unwrap()
}

#[test]
fn punch_creates_and_updates_the_days_record() {
    let mut store = store();
    let done = punched_day(&mut store);

    assert_eq!(store.len(), 1);
    assert_eq!(done.status, WorkStatus::Finished);
    assert_eq!(done.total_work_minutes, 480);
    assert_eq!(done.earnings, 24000);

    let ops: Vec<&str> = store
        .audit_entries()
        .iter()
        .map(|e| e.operation.as_str())
        .collect();
    assert_eq!(ops, vec!["clock_in", "break_start", "break_end", "clock_out"]);
    assert!(store.audit_entries().iter().all(|e| e.target == "2025-06-02"));
}

#[test]
fn another_day_gets_its_own_record() {
    let mut store = store();
    punched_day(&mut store);
    PunchLogic::punch(&mut store, ClockAction::ClockIn, at("2025-06-03", "09:00")).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.get_by_date(day("2025-06-03")).unwrap()[0].status, WorkStatus::Working);
}

#[test]
fn illegal_punch_saves_nothing() {
    let mut store = store();
    let err = PunchLogic::punch(&mut store, ClockAction::ClockOut, at("2025-06-02", "18:00"))
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition { .. }));
    assert!(store.is_empty());
    assert!(store.audit_entries().is_empty());
}

#[test]
fn punch_before_clock_in_is_rejected() {
    let mut store = store();
    PunchLogic::punch(&mut store, ClockAction::ClockIn, at("2025-06-02", "09:00")).unwrap();
    let err = PunchLogic::punch(&mut store, ClockAction::BreakStart, at("2025-06-02", "08:00"))
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidTimestamp(_)));

    let rec = &store.get_by_date(day("2025-06-02")).unwrap()[0];
    assert_eq!(rec.status, WorkStatus::Working);
    assert!(rec.break_start.is_none());
}

#[test]
fn resume_before_break_start_is_rejected() {
    let mut store = store();
    PunchLogic::punch(&mut store, ClockAction::ClockIn, at("2025-06-02", "09:00")).unwrap();
    PunchLogic::punch(&mut store, ClockAction::BreakStart, at("2025-06-02", "12:00")).unwrap();
    let err = PunchLogic::punch(&mut store, ClockAction::BreakEnd, at("2025-06-02", "11:00"))
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidTimestamp(_)));
}

#[test]
fn edit_clock_out_keeps_break_total() {
    let mut store = store();
    punched_day(&mut store);

    let changes = RecordChanges {
        clock_out: Some("19:00".into()),
        ..Default::default()
    };
    let updated = EditLogic::apply(
        &mut store,
        &RecordSelector::parse("2025-06-02"),
        &changes,
        at("2025-06-02", "20:00"),
    )
    .unwrap();

    assert_eq!(updated.total_break_minutes, 60);
    assert_eq!(updated.total_work_minutes, 540);
    // 480 regular + 60 overtime at 3750
    assert_eq!(updated.earnings, 27750);
    assert_eq!(store.audit_entries().last().unwrap().operation, "edit");
}

#[test]
fn edit_break_pair_recomputes_total() {
    let mut store = store();
    punched_day(&mut store);

    let changes = RecordChanges {
        break_end: Some("12:30".into()),
        ..Default::default()
    };
    let updated = EditLogic::apply(
        &mut store,
        &RecordSelector::parse("2025-06-02"),
        &changes,
        at("2025-06-02", "20:00"),
    )
    .unwrap();

    assert_eq!(updated.total_break_minutes, 30);
    assert_eq!(updated.total_work_minutes, 510);
}

#[test]
fn edit_explicit_break_minutes() {
    let mut store = store();
    let rec = punched_day(&mut store);

    let changes = RecordChanges {
        break_minutes: Some(45),
        ..Default::default()
    };
    let updated = EditLogic::apply(
        &mut store,
        &RecordSelector::Id(rec.id.clone()),
        &changes,
        at("2025-06-02", "20:00"),
    )
    .unwrap();
    assert_eq!(updated.total_break_minutes, 45);
    assert_eq!(updated.total_work_minutes, 495);
}

#[test]
fn edit_rejects_inverted_times_and_leaves_record() {
    let mut store = store();
    let before = punched_day(&mut store);

    let changes = RecordChanges {
        clock_out: Some("08:00".into()),
        ..Default::default()
    };
    let err = EditLogic::apply(
        &mut store,
        &RecordSelector::parse("2025-06-02"),
        &changes,
        at("2025-06-02", "20:00"),
    )
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidTimestamp(_)));
    assert_eq!(store.get(&before.id).unwrap(), Some(before));
}

#[test]
fn edit_rejects_bad_input() {
    let rec = {
        let mut store = store();
        punched_day(&mut store)
    };
    let now = at("2025-06-02", "20:00");

    let bad_time = RecordChanges {
        clock_in: Some("9h".into()),
        ..Default::default()
    };
    assert!(matches!(
        EditLogic::merge(&rec, &bad_time, now),
        Err(AppError::InvalidTimestamp(_))
    ));

    let negative = RecordChanges {
        break_minutes: Some(-1),
        ..Default::default()
    };
    assert!(matches!(
        EditLogic::merge(&rec, &negative, now),
        Err(AppError::InvalidTimestamp(_))
    ));

    let bad_status = RecordChanges {
        status: Some("sleeping".into()),
        ..Default::default()
    };
    assert!(matches!(
        EditLogic::merge(&rec, &bad_status, now),
        Err(AppError::InvalidStatus(_))
    ));
}

#[test]
fn edit_without_changes_or_target_fails() {
    let mut store = store();
    let now = at("2025-06-02", "20:00");
    assert!(
        EditLogic::apply(
            &mut store,
            &RecordSelector::parse("2025-06-02"),
            &RecordChanges::default(),
            now
        )
        .is_err()
    );

    let changes = RecordChanges {
        clock_in: Some("09:00".into()),
        ..Default::default()
    };
    let err = EditLogic::apply(
        &mut store,
        &RecordSelector::parse("2025-06-09"),
        &changes,
        now,
    )
    .unwrap_err();
    assert!(matches!(err, AppError::RecordNotFound(_)));
}

#[test]
fn delete_by_date() {
    let mut store = store();
    punched_day(&mut store);

    let gone = DeleteLogic::apply(&mut store, &RecordSelector::parse("2025-06-02")).unwrap();
    assert_eq!(gone.date_str(), "2025-06-02");
    assert!(store.is_empty());
    assert_eq!(store.audit_entries().last().unwrap().operation, "del");

    let err = DeleteLogic::apply(&mut store, &RecordSelector::parse("2025-06-02")).unwrap_err();
    assert!(matches!(err, AppError::RecordNotFound(_)));
}

fn punch_all(store: &mut MemStore, punches: &[(ClockAction, &str)]) -> WorkRecord {
    let mut last = None;
    for (action, time) in punches {
        last = Some(PunchLogic::punch(store, *action, at("2025-06-02", time)).unwrap());
    }
    last.expect("at least one punch")
}

#[test]
fn edit_while_on_second_break() {
    let mut store = store();
    punch_all(
        &mut store,
        &[
            (ClockAction::ClockIn, "09:00"),
            (ClockAction::BreakStart, "12:00"),
            (ClockAction::BreakEnd, "12:30"),
            (ClockAction::BreakStart, "15:00"),
        ],
    );

    let changes = RecordChanges {
        clock_in: Some("08:55".into()),
        ..Default::default()
    };
    let updated = EditLogic::apply(
        &mut store,
        &RecordSelector::parse("2025-06-02"),
        &changes,
        at("2025-06-02", "15:05"),
    )
    .unwrap();

    assert_eq!(updated.status, WorkStatus::OnBreak);
    assert_eq!(updated.clock_in, Some(at("2025-06-02", "08:55")));
    assert_eq!(updated.total_break_minutes, 30);
}

#[test]
fn stale_break_end_is_dropped_when_editing_a_record_on_break() {
    let mut rec = punched_day(&mut store());
    rec.status = WorkStatus::OnBreak;
    rec.clock_out = None;
    rec.break_start = Some(at("2025-06-02", "15:00"));
    rec.break_end = Some(at("2025-06-02", "13:00"));

    let changes = RecordChanges {
        clock_in: Some("08:55".into()),
        ..Default::default()
    };
    let merged = EditLogic::merge(&rec, &changes, at("2025-06-02", "15:10")).unwrap();
    assert!(merged.break_end.is_none());
    assert_eq!(merged.break_start, Some(at("2025-06-02", "15:00")));
}

#[test]
fn two_break_day_then_edit_clock_out() {
    let mut store = store();
    let done = punch_all(
        &mut store,
        &[
            (ClockAction::ClockIn, "09:00"),
            (ClockAction::BreakStart, "12:00"),
            (ClockAction::BreakEnd, "12:30"),
            (ClockAction::BreakStart, "15:00"),
            (ClockAction::BreakEnd, "15:15"),
            (ClockAction::ClockOut, "18:00"),
        ],
    );
    assert_eq!(done.total_break_minutes, 45);
    assert_eq!(done.total_work_minutes, 495);
    assert_eq!(done.earnings, 24938);

    let changes = RecordChanges {
        clock_out: Some("17:45".into()),
        ..Default::default()
    };
    let updated = EditLogic::apply(
        &mut store,
        &RecordSelector::Id(done.id.clone()),
        &changes,
        at("2025-06-02", "19:00"),
    )
    .unwrap();

    // both windows stay counted
    assert_eq!(updated.total_break_minutes, 45);
    assert_eq!(updated.total_work_minutes, 480);
    assert_eq!(updated.earnings, 24000);
}

#[test]
fn out_before_last_resume_is_rejected() {
    let mut store = store();
    let before = punch_all(
        &mut store,
        &[
            (ClockAction::ClockIn, "09:00"),
            (ClockAction::BreakStart, "12:00"),
            (ClockAction::BreakEnd, "13:00"),
        ],
    );

    let err = PunchLogic::punch(&mut store, ClockAction::ClockOut, at("2025-06-02", "12:10"))
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidTimestamp(_)));

    let err = PunchLogic::punch(&mut store, ClockAction::BreakStart, at("2025-06-02", "12:59"))
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidTimestamp(_)));

    assert_eq!(store.get(&before.id).unwrap(), Some(before));

    // at the resume minute itself is fine
    let out = PunchLogic::punch(&mut store, ClockAction::ClockOut, at("2025-06-02", "13:00"))
        .unwrap();
    assert_eq!(out.total_work_minutes, 180);
}

#[test]
fn edit_status_must_match_stamps() {
    let rec = punched_day(&mut store());
    let now = at("2025-06-02", "20:00");

    // finished without a clock-out would freeze the totals
    let reopen_without_status = RecordChanges {
        clear_clock_out: true,
        ..Default::default()
    };
    assert!(matches!(
        EditLogic::merge(&rec, &reopen_without_status, now),
        Err(AppError::InvalidStatus(_))
    ));

    // working while still carrying a clock-out
    let working_with_out = RecordChanges {
        status: Some("working".into()),
        ..Default::default()
    };
    assert!(matches!(
        EditLogic::merge(&rec, &working_with_out, now),
        Err(AppError::InvalidStatus(_))
    ));

    let not_started = RecordChanges {
        status: Some("not_started".into()),
        ..Default::default()
    };
    assert!(matches!(
        EditLogic::merge(&rec, &not_started, now),
        Err(AppError::InvalidStatus(_))
    ));

    // reopening with both flags is consistent
    let reopen = RecordChanges {
        clear_clock_out: true,
        status: Some("working".into()),
        ..Default::default()
    };
    let merged = EditLogic::merge(&rec, &reopen, now).unwrap();
    assert_eq!(merged.status, WorkStatus::Working);
    assert!(merged.clock_out.is_none());
}

#[test]
fn session_cannot_cross_midnight() {
    let mut store = store();
    PunchLogic::punch(&mut store, ClockAction::ClockIn, at("2025-06-02", "22:00")).unwrap();

    // the next day has its own (not started) record
    let err = PunchLogic::punch(&mut store, ClockAction::ClockOut, at("2025-06-03", "01:00"))
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition { .. }));

    // times given to edit are on the record's own day
    let changes = RecordChanges {
        clock_out: Some("01:00".into()),
        status: Some("finished".into()),
        ..Default::default()
    };
    let err = EditLogic::apply(
        &mut store,
        &RecordSelector::parse("2025-06-02"),
        &changes,
        at("2025-06-03", "01:05"),
    )
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidTimestamp(_)));
}
