mod common;
use babybirthdays::{Age, AgeBucket, AgeLabels, compute_age, compute_age_utc, format_age};
use chrono::{FixedOffset, NaiveDate};
use common::ms;

const HOUR: i64 = 60 * 60 * 1000;

#[test]
fn test_days_under_one_week() {
    assert_eq!(format_age(ms(2020, 1, 1), ms(2020, 1, 4)), "3 days");
    assert_eq!(format_age(ms(2020, 1, 1), ms(2020, 1, 7)), "6 days");
    assert_eq!(format_age(ms(2020, 1, 1), ms(2020, 1, 1)), "0 days");
}

#[test]
fn test_singular_day() {
    assert_eq!(format_age(ms(2020, 1, 1), ms(2020, 1, 2)), "1 day");
}

#[test]
fn test_partial_days_are_truncated() {
    let birth = ms(2020, 1, 1);
    assert_eq!(format_age(birth, birth + 23 * HOUR), "0 days");
    assert_eq!(format_age(birth, ms(2020, 1, 3) + 23 * HOUR), "2 days");
}

#[test]
fn test_weeks_between_one_and_eight_weeks() {
    assert_eq!(format_age(ms(2020, 1, 1), ms(2020, 1, 8)), "1 week");
    assert_eq!(format_age(ms(2020, 1, 1), ms(2020, 1, 14)), "1 week");
    assert_eq!(format_age(ms(2020, 1, 1), ms(2020, 1, 15)), "2 weeks");
    // 31 days
    assert_eq!(format_age(ms(2020, 1, 1), ms(2020, 2, 1)), "4 weeks");
    // 55 days
    assert_eq!(format_age(ms(2020, 1, 1), ms(2020, 2, 25)), "7 weeks");
}

#[test]
fn test_eight_weeks_stay_weeks_when_under_two_calendar_months() {
    // 56 days, one calendar month
    assert_eq!(format_age(ms(2020, 1, 1), ms(2020, 2, 26)), "8 weeks");
    // 60 days but day-of-month not reached: 1 month
    assert_eq!(format_age(ms(2019, 3, 31), ms(2019, 5, 30)), "8 weeks");
}

#[test]
fn test_calendar_months() {
    assert_eq!(format_age(ms(2020, 1, 1), ms(2020, 3, 1)), "2 months");
    // 156 days
    assert_eq!(format_age(ms(2019, 1, 15), ms(2019, 6, 20)), "5 months");
    assert_eq!(format_age(ms(2019, 1, 15), ms(2019, 6, 14)), "4 months");
}

#[test]
fn test_months_wrap_across_year_end() {
    // Oct → Feb: negative month difference
    assert_eq!(format_age(ms(2019, 10, 5), ms(2020, 2, 5)), "4 months");
    assert_eq!(format_age(ms(2019, 10, 5), ms(2020, 2, 4)), "3 months");
}

#[test]
fn test_same_month_before_birthday_counts_eleven_months() {
    // 355 days
    assert_eq!(format_age(ms(2018, 6, 20), ms(2019, 6, 10)), "11 months");
}

#[test]
fn test_months_past_one_year() {
    // 366 days across a leap year, still under the two-year ceiling
    assert_eq!(format_age(ms(2019, 3, 10), ms(2020, 3, 10)), "12 months");
    // 729 days
    assert_eq!(format_age(ms(2018, 1, 1), ms(2019, 12, 31)), "23 months");
}

#[test]
fn test_years_from_730_days() {
    assert_eq!(format_age(ms(2018, 1, 1), ms(2020, 1, 1)), "2 years");
    assert_eq!(format_age(ms(2017, 3, 10), ms(2020, 3, 10)), "3 years");
    assert_eq!(format_age(ms(1990, 5, 1), ms(2020, 5, 1)), "30 years");
}

#[test]
fn test_year_magnitude_uses_365_day_years() {
    // 1094 days: still 2 by 365-day division even though the calendar says 3 years
    let age = compute_age_utc(ms(2017, 3, 10), ms(2020, 3, 8));
    assert_eq!(age.bucket, AgeBucket::Years);
    assert_eq!(age.magnitude, 2);
}

#[test]
fn test_future_birth_is_not_clamped() {
    let age = compute_age_utc(ms(2020, 1, 10), ms(2020, 1, 1));
    assert_eq!(
        age,
        Age {
            magnitude: -9,
            bucket: AgeBucket::Days
        }
    );
    assert_eq!(age.to_string(), "-9 days");

    // far future still lands in days
    assert!(format_age(ms(2030, 1, 1), ms(2020, 1, 1)).ends_with(" days"));

    // less than a day ahead truncates to zero
    assert_eq!(format_age(ms(2020, 1, 1) + 12 * HOUR, ms(2020, 1, 1)), "0 days");
}

#[test]
fn test_calendar_fields_follow_time_zone() {
    let birth = NaiveDate::from_ymd_opt(2019, 1, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
        .and_utc()
        .timestamp_millis();
    let now = NaiveDate::from_ymd_opt(2019, 6, 14)
        .unwrap()
        .and_hms_opt(23, 0, 0)
        .unwrap()
        .and_utc()
        .timestamp_millis();

    assert_eq!(compute_age_utc(birth, now).to_string(), "4 months");

    // in UTC+2 "now" is already June 15th
    let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
    assert_eq!(compute_age(birth, now, &plus_two).to_string(), "5 months");
}

#[test]
fn test_custom_labels() {
    let labels = AgeLabels {
        day: "giorno".into(),
        days: "giorni".into(),
        week: "settimana".into(),
        weeks: "settimane".into(),
        month: "mese".into(),
        months: "mesi".into(),
        year: "anno".into(),
        years: "anni".into(),
    };

    let one_day = compute_age_utc(ms(2020, 1, 1), ms(2020, 1, 2));
    assert!(one_day.is_singular());
    assert_eq!(one_day.render(&labels), "1 giorno");

    let months = compute_age_utc(ms(2019, 1, 15), ms(2019, 6, 20));
    assert!(!months.is_singular());
    assert_eq!(months.render(&labels), "5 mesi");

    let years = compute_age_utc(ms(2017, 3, 10), ms(2020, 3, 10));
    assert_eq!(years.render(&labels), "3 anni");
}
