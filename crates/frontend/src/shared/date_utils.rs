use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

/// Format a date as DD/MM/YYYY for display.
pub fn format_date(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}

/// Format a time as h:mm AM/PM.
pub fn format_time(time: NaiveTime) -> String {
    let (is_pm, hour12) = time.hour12();
    format!(
        "{}:{:02} {}",
        hour12,
        time.minute(),
        if is_pm { "PM" } else { "AM" }
    )
}

/// English month name, 1-based. Out-of-range input falls back to the number.
pub fn month_name(month: u32) -> String {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => return month.to_string(),
    }
    .to_string()
}

/// Short month name for chart axes ("Jan", "Feb", ...).
pub fn month_abbrev(month: u32) -> String {
    let full = month_name(month);
    full.chars().take(3).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_date_with_zero_padding() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(format_date(d), "07/03/2025");
    }

    #[test]
    fn formats_time_in_twelve_hour_clock() {
        assert_eq!(
            format_time(NaiveTime::from_hms_opt(0, 5, 0).unwrap()),
            "12:05 AM"
        );
        assert_eq!(
            format_time(NaiveTime::from_hms_opt(13, 30, 0).unwrap()),
            "1:30 PM"
        );
        assert_eq!(
            format_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap()),
            "12:00 PM"
        );
    }

    #[test]
    fn month_names() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(13), "13");
        assert_eq!(month_abbrev(9), "Sep");
    }
}
