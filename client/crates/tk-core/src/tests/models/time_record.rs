use crate::{CurrentStatus, TimeRecordStatus};

use chrono::NaiveDate;
use serde_json::json;

#[test]
fn test_current_status_with_open_record() {
    let status: CurrentStatus = serde_json::from_value(json!({
        "status": "CHECKED_IN",
        "record": {
            "id": "r1",
            "employee": "e-uuid",
            "employee_name": "A B",
            "employee_id": "E1",
            "date": "2024-03-04",
            "check_in_time": "2024-03-04T08:01:02.123456+07:00",
            "check_out_time": null,
            "status": "CHECKED_IN",
            "working_hours": 0.0,
            "forgot_checkout": false,
            "created_at": "2024-03-04T08:01:02.123456+07:00",
            "updated_at": "2024-03-04T08:01:02.123456+07:00"
        }
    }))
    .unwrap();

    assert!(status.is_checked_in());
    let record = status.record.unwrap();
    assert!(record.is_open());
    assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
    assert_eq!(record.employee_id.as_deref(), Some("E1"));
}

#[test]
fn test_current_status_without_record() {
    let status: CurrentStatus =
        serde_json::from_value(json!({"status": "CHECKED_OUT", "record": null})).unwrap();

    assert_eq!(status.status, TimeRecordStatus::CheckedOut);
    assert!(status.record.is_none());
    assert!(!status.is_checked_in());
}

#[test]
fn test_closed_record_is_not_open() {
    let status: CurrentStatus = serde_json::from_value(json!({
        "status": "CHECKED_OUT",
        "record": {
            "id": "r2",
            "date": "2024-03-04",
            "check_in_time": "2024-03-04T08:00:00+07:00",
            "check_out_time": "2024-03-04T17:30:00+07:00",
            "status": "CHECKED_OUT",
            "working_hours": 9.5,
            "forgot_checkout": false
        }
    }))
    .unwrap();

    let record = status.record.unwrap();
    assert!(!record.is_open());
    assert_eq!(record.working_hours, 9.5);
}
