use super::{Month, MonthLabel};
use anyhow::Result;
use std::str::FromStr;

#[test]
fn test_month_accepts_only_calendar_range() {
    assert!(Month::new(0).is_err());
    assert!(Month::new(13).is_err());
    assert!(Month::new(1).is_ok());
    assert!(Month::new(12).is_ok());
}

#[test]
fn test_previous_month_wraps_january_to_december() -> Result<()> {
    assert_eq!(Month::new(1)?.previous(), Month::DECEMBER);
    assert_eq!(Month::new(12)?.previous(), Month::new(11)?);
    assert_eq!(Month::new(2)?.previous().number(), 1);

    Ok(())
}

#[test]
fn test_month_labels_use_full_name_or_abbreviation() -> Result<()> {
    let test_cases = vec![
        (1, "January", "Jan"),
        (5, "May", "May"),
        (9, "September", "Sep"),
        (12, "December", "Dec"),
    ];

    for (number, full, short) in test_cases {
        let month = Month::new(number)?;
        assert_eq!(month.label(MonthLabel::Full), full);
        assert_eq!(month.label(MonthLabel::Abbreviated), short);
    }

    Ok(())
}

#[test]
fn test_month_parses_from_trimmed_strings() -> Result<()> {
    assert_eq!(Month::from_str(" 7 ")?.number(), 7);
    assert!(Month::from_str("abc").is_err());
    assert!(Month::from_str("-1").is_err());
    assert!(Month::from_str("0").is_err());

    Ok(())
}
