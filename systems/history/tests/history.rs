use chrono::NaiveDate;
use signal_desk_core::RunType;
use signal_desk_system_history::{build_history, HistoryError, DEFAULT_HISTORY_DAYS, RUN_TIMES};

fn pinned_anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid anchor date")
}

#[test]
fn two_days_back_yields_nine_records() {
    let runs = build_history(pinned_anchor(), 2).expect("history");
    assert_eq!(runs.len(), 9, "3 dates x 3 times");

    let ids: Vec<&str> = runs.iter().map(|run| run.run_id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "run-2024-01-15-1900",
            "run-2024-01-15-1300",
            "run-2024-01-15-0700",
            "run-2024-01-14-1900",
            "run-2024-01-14-1300",
            "run-2024-01-14-0700",
            "run-2024-01-13-1900",
            "run-2024-01-13-1300",
            "run-2024-01-13-0700",
        ],
        "most recent date first, night cap before midday before morning"
    );
}

#[test]
fn zero_days_back_covers_only_the_anchor() {
    let runs = build_history(pinned_anchor(), 0).expect("history");
    assert_eq!(runs.len(), 3);
    assert!(runs.iter().all(|run| run.report_date == "2024-01-15"));
}

#[test]
fn run_types_follow_the_fixed_times() {
    let runs = build_history(pinned_anchor(), 0).expect("history");
    let types: Vec<RunType> = runs.iter().map(|run| run.run_type).collect();
    assert_eq!(
        types,
        vec![RunType::NightCap, RunType::MiddayUpdate, RunType::MorningBrief]
    );
}

#[test]
fn emission_times_match_the_fixed_schedule() {
    assert_eq!(RUN_TIMES, ["19:00", "13:00", "07:00"]);
    let runs = build_history(pinned_anchor(), 1).expect("history");
    for date_group in runs.chunks(3) {
        let times: Vec<&str> = date_group
            .iter()
            .map(|run| &run.generated_at[11..16])
            .collect();
        assert_eq!(times, vec!["19:00", "13:00", "07:00"]);
    }
}

#[test]
fn window_crosses_month_and_leap_boundaries() {
    let anchor = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid anchor date");
    let runs = build_history(anchor, 2).expect("history");
    let dates: Vec<&str> = runs
        .iter()
        .step_by(3)
        .map(|run| run.report_date.as_str())
        .collect();
    assert_eq!(dates, vec!["2024-03-01", "2024-02-29", "2024-02-28"]);
}

#[test]
fn pinned_anchor_reproduces_the_same_history() {
    let first = build_history(pinned_anchor(), DEFAULT_HISTORY_DAYS).expect("first history");
    let second = build_history(pinned_anchor(), DEFAULT_HISTORY_DAYS).expect("second history");
    assert_eq!(first, second, "a pinned anchor must reproduce every record");
    assert_eq!(first.len(), (DEFAULT_HISTORY_DAYS as usize + 1) * 3);
}

#[test]
fn each_run_reports_its_own_date() {
    let runs = build_history(pinned_anchor(), 1).expect("history");
    for run in &runs {
        assert!(
            run.run_id.as_str().contains(&run.report_date),
            "run id {} should embed report date {}",
            run.run_id,
            run.report_date
        );
        assert_eq!(run.snapshot.date, run.report_date);
        assert!(run.generated_at.starts_with(&run.report_date));
    }
}

#[test]
fn window_past_the_calendar_floor_is_rejected() {
    let result = build_history(NaiveDate::MIN, 1);
    assert_eq!(
        result,
        Err(HistoryError::RangeExceedsCalendar {
            anchor: NaiveDate::MIN,
            days_back: 1
        })
    );
}
