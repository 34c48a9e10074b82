use crate::{CoreError, ReportPeriod};

#[test]
fn test_report_period_valid() {
    let period = ReportPeriod::new(2024, 2).unwrap();
    assert_eq!(period.year, 2024);
    assert_eq!(period.month, 2);
    assert_eq!(period.query_string(), "?year=2024&month=2");
    assert_eq!(period.to_string(), "2/2024");
}

#[test]
fn test_report_period_month_out_of_range() {
    assert!(matches!(
        ReportPeriod::new(2024, 13),
        Err(CoreError::InvalidReportPeriod { month: 13, .. })
    ));
    assert!(ReportPeriod::new(2024, 0).is_err());
}

#[test]
fn test_report_period_year_out_of_range() {
    assert!(ReportPeriod::new(1999, 5).is_err());
    assert!(ReportPeriod::new(2101, 5).is_err());
}

#[test]
fn test_report_period_resolve_fills_missing_from_current() {
    let current = ReportPeriod::current();

    let period = ReportPeriod::resolve(None, Some(6)).unwrap();
    assert_eq!(period.year, current.year);
    assert_eq!(period.month, 6);

    assert_eq!(ReportPeriod::resolve(None, None).unwrap(), current);
}
