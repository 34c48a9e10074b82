use crate::TimeRecordStatus;

use std::str::FromStr;

#[test]
fn test_time_record_status_as_str() {
    assert_eq!(TimeRecordStatus::CheckedIn.as_str(), "CHECKED_IN");
    assert_eq!(TimeRecordStatus::CheckedOut.as_str(), "CHECKED_OUT");
    assert_eq!(TimeRecordStatus::ForgotCheckout.as_str(), "FORGOT_CHECKOUT");
}

#[test]
fn test_time_record_status_from_str() {
    assert_eq!(
        TimeRecordStatus::from_str("FORGOT_CHECKOUT").unwrap(),
        TimeRecordStatus::ForgotCheckout
    );
    assert!(TimeRecordStatus::from_str("checked_in").is_err());
}

#[test]
fn test_time_record_status_default_is_checked_out() {
    assert_eq!(TimeRecordStatus::default(), TimeRecordStatus::CheckedOut);
}
