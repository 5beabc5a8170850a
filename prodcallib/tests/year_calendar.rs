use chrono::NaiveDate;
use prodcallib::{
    error::ProdcalError,
    model::{Calendar, Year},
    parse::YEAR_ROW_FIELDS,
};

const ROW_1999: [&str; 18] = [
    "1999", "1,3,4,6*", "6,7", "4+,26,31*", "3,4", "1,2,3", "12,13", "3,4", "1,7", "4,5",
    "2,3", "6,7", "11,12", "251", "114", "2004", "1807.2", "1204.8",
];

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn year_row_full() {
    let y = Year::parse(&ROW_1999).expect("parse year");
    assert_eq!(y.date(), ymd(1999, 1, 1));
    assert_eq!(y.months().len(), 12);
    assert_eq!(y.workdays(), 251);
    assert_eq!(y.holidays(), 114);
    assert_eq!(y.work_hours_40(), 2004.0);
    assert_eq!(y.work_hours_36(), 1807.2);
    assert_eq!(y.work_hours_24(), 1204.8);

    for (i, m) in y.into_iter().enumerate() {
        assert_eq!(m.date(), ymd(1999, i as u32 + 1, 1));
    }

    let march = y.month(3).expect("march");
    assert_eq!(march.days().len(), 3);
    assert!(march.days()[0].is_additional_holiday());
    assert!(march.days()[2].is_halfday());
    assert_eq!(march.days()[2].date(), ymd(1999, 3, 31));

    assert!(y.month(0).is_none());
    assert!(y.month(13).is_none());
}

#[test]
fn year_row_accepts_owned_fields_with_spaces() {
    let mut fields: Vec<String> = ROW_1999.iter().map(|s| s.to_string()).collect();
    fields[13] = " 251 ".into();
    let y = Year::parse(&fields).expect("parse year");
    assert_eq!(y.workdays(), 251);
}

#[test]
fn year_row_wrong_width() {
    let err = Year::parse(&ROW_1999[..17]).expect_err("short row");
    assert!(matches!(
        err,
        ProdcalError::MalformedRow { expected: YEAR_ROW_FIELDS, found: 17 }
    ));

    let mut long = ROW_1999.to_vec();
    long.push("1");
    let err = Year::parse(&long).expect_err("long row");
    assert!(matches!(err, ProdcalError::MalformedRow { found: 19, .. }));
}

#[test]
fn year_row_non_numeric_totals() {
    let mut row = ROW_1999;
    row[13] = "many";
    let err = Year::parse(&row).expect_err("bad workdays");
    match err {
        ProdcalError::InvalidNumber { field, value } => {
            assert_eq!(field, "workdays");
            assert_eq!(value, "many");
        }
        other => panic!("unexpected error: {other}"),
    }

    let mut row = ROW_1999;
    row[17] = "12,5";
    let err = Year::parse(&row).expect_err("bad hours");
    assert!(matches!(err, ProdcalError::InvalidNumber { field: "work_hours_24", .. }));

    let mut row = ROW_1999;
    row[0] = "MCMXCIX";
    let err = Year::parse(&row).expect_err("bad year");
    assert!(matches!(err, ProdcalError::InvalidNumber { field: "year", .. }));
}

#[test]
fn year_row_bad_day_token() {
    let mut row = ROW_1999;
    row[2] = "6,30";
    let err = Year::parse(&row).expect_err("feb 30");
    assert!(matches!(err, ProdcalError::InvalidDayToken { month, .. } if month == ymd(1999, 2, 1)));
}

#[test]
fn calendar_keeps_row_order_and_duplicates() {
    let mut row_2000 = ROW_1999;
    row_2000[0] = "2000";
    let cal = Calendar::parse([ROW_1999, row_2000, ROW_1999]).expect("parse calendar");

    let years: Vec<NaiveDate> = cal.into_iter().map(|y| y.date()).collect();
    assert_eq!(years, vec![ymd(1999, 1, 1), ymd(2000, 1, 1), ymd(1999, 1, 1)]);

    let per_year = cal.years()[0].months().iter().map(|m| m.days().len()).sum::<usize>();
    assert_eq!(cal.day_count(), 3 * per_year);
    assert_eq!(cal.days().count(), cal.day_count());
    assert_eq!(cal.days().next().map(|d| d.date()), Some(ymd(1999, 1, 1)));
}

#[test]
fn calendar_stops_at_first_bad_row() {
    let mut bad = ROW_1999;
    bad[14] = "";
    let err = Calendar::parse([ROW_1999, bad]).expect_err("bad row");
    assert!(matches!(err, ProdcalError::InvalidNumber { field: "holidays", .. }));
}

#[test]
fn calendar_empty() {
    let rows: Vec<Vec<&str>> = Vec::new();
    let cal = Calendar::parse(rows).expect("empty calendar");
    assert!(cal.years().is_empty());
    assert_eq!(cal.day_count(), 0);
}
