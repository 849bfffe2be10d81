//! Formatting helpers shared by the listing and the player panel.

use chrono::{DateTime, Datelike, Utc, Weekday};

const SHORT_MONTHS: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

const FULL_MONTHS: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Render a second count as a fixed-width time label: `MM:SS`, growing to
/// `HH:MM:SS` once the hour mark is crossed.
pub fn format_duration(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

/// Short pt-BR publish date used in the episode listing, e.g. "8 jan 21".
pub fn format_published_date(date: &DateTime<Utc>) -> String {
    let month = SHORT_MONTHS[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year() % 100)
}

/// Header date, e.g. "Qui, 8 Abril".
pub fn format_header_date(date: &DateTime<Utc>) -> String {
    let weekday = match date.weekday() {
        Weekday::Mon => "Seg",
        Weekday::Tue => "Ter",
        Weekday::Wed => "Qua",
        Weekday::Thu => "Qui",
        Weekday::Fri => "Sex",
        Weekday::Sat => "Sáb",
        Weekday::Sun => "Dom",
    };
    let month = FULL_MONTHS[date.month0() as usize];
    format!("{}, {} {}", weekday, date.day(), month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn zero_seconds_renders_as_minutes_and_seconds() {
        assert_eq!(format_duration(0), "00:00");
    }

    #[test]
    fn sub_hour_durations_skip_the_hour_field() {
        assert_eq!(format_duration(125), "02:05");
        assert_eq!(format_duration(3599), "59:59");
    }

    #[test]
    fn hour_long_durations_gain_the_hour_field() {
        assert_eq!(format_duration(3600), "01:00:00");
        assert_eq!(format_duration(3881), "01:04:41");
    }

    #[test]
    fn published_date_is_short_portuguese() {
        let date = Utc.with_ymd_and_hms(2021, 1, 8, 12, 0, 0).unwrap();
        assert_eq!(format_published_date(&date), "8 jan 21");
    }

    #[test]
    fn header_date_spells_out_the_month() {
        let date = Utc.with_ymd_and_hms(2021, 4, 8, 12, 0, 0).unwrap();
        assert_eq!(format_header_date(&date), "Qui, 8 Abril");
    }
}
