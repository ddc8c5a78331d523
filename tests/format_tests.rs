use portal_aluno::format::{format_date, format_grade, format_time};

#[test]
fn test_format_date() {
    assert_eq!(format_date(Some("2025-03-14")), "14/03/2025");
    assert_eq!(format_date(Some("2025-03-14T10:00:00Z")), "14/03/2025");
    assert_eq!(format_date(Some("2025-03-14T23:30:00-03:00")), "14/03/2025");
    assert_eq!(format_date(Some("2025-03-14T08:00:00.000")), "14/03/2025");
}

#[test]
fn test_format_date_placeholder() {
    assert_eq!(format_date(None), "-");
    assert_eq!(format_date(Some("")), "-");
    assert_eq!(format_date(Some("ontem")), "-");
}

#[test]
fn test_format_time() {
    assert_eq!(format_time(Some("2025-03-14T10:05:00Z")), "10:05");
    assert_eq!(format_time(Some("2025-03-14T19:45:10-03:00")), "19:45");
    assert_eq!(format_time(Some("14:30")), "14:30");
    assert_eq!(format_time(Some("2025-03-14")), "-");
    assert_eq!(format_time(None), "-");
}

#[test]
fn test_format_grade() {
    assert_eq!(format_grade(Some(8.5)), "8,5");
    assert_eq!(format_grade(Some(10.0)), "10,0");
    assert_eq!(format_grade(Some(7.26)), "7,3");
    assert_eq!(format_grade(Some(0.0)), "0,0");
    assert_eq!(format_grade(None), "-");
    assert_eq!(format_grade(Some(f64::NAN)), "-");
}
