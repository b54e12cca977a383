use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Weekday};
use tracing::trace;

use crate::constants::MENU_DATE_FORMAT;

/// Section marker used for `weekday` inside the menu document.
///
/// Only Monday to Friday have a menu, weekends map to `None`.
pub fn day_label(weekday: Weekday) -> Option<&'static str> {
    match weekday {
        Weekday::Mon => Some("SEGUNDA"),
        Weekday::Tue => Some("TERÇA"),
        Weekday::Wed => Some("QUARTA"),
        Weekday::Thu => Some("QUINTA"),
        Weekday::Fri => Some("SEXTA"),
        Weekday::Sat | Weekday::Sun => None,
    }
}

/// Monday and Friday of the week containing `date`.
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = date - chrono::Duration::days(date.weekday().num_days_from_monday() as i64);
    let friday = monday + chrono::Duration::days(4);
    (monday, friday)
}

/// Path of the menu document for the week containing `date`, relative to the
/// upload root. The folder is taken from the Monday, so a week straddling two
/// months (or years) is filed under the earlier one.
pub fn menu_path_for_date(date: NaiveDate) -> String {
    let (monday, friday) = week_bounds(date);
    let path = format!(
        "{:04}/{:02}/Ementa-uptec-{}-a-{}.pdf",
        monday.year(),
        monday.month(),
        monday.format(MENU_DATE_FORMAT),
        friday.format(MENU_DATE_FORMAT)
    );
    trace!(%date, %path, "menu path");
    path
}

pub fn menu_path<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    menu_path_for_date(now.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn labels_cover_working_days_only() {
        assert_eq!(day_label(Weekday::Mon), Some("SEGUNDA"));
        assert_eq!(day_label(Weekday::Tue), Some("TERÇA"));
        assert_eq!(day_label(Weekday::Wed), Some("QUARTA"));
        assert_eq!(day_label(Weekday::Thu), Some("QUINTA"));
        assert_eq!(day_label(Weekday::Fri), Some("SEXTA"));
        assert_eq!(day_label(Weekday::Sat), None);
        assert_eq!(day_label(Weekday::Sun), None);
    }

    #[test]
    fn path_for_a_monday() {
        assert_eq!(
            menu_path_for_date(date(2026, 10, 19)),
            "2026/10/Ementa-uptec-19-10-2026-a-23-10-2026.pdf"
        );
    }

    #[test]
    fn every_day_of_the_week_shares_the_path() {
        let expected = "2026/10/Ementa-uptec-19-10-2026-a-23-10-2026.pdf";
        for day in 19..=25 {
            assert_eq!(menu_path_for_date(date(2026, 10, day)), expected);
        }
    }

    #[test]
    fn week_spanning_two_months_uses_monday_folder() {
        // Thursday 1 October, the week started on 28 September.
        assert_eq!(
            menu_path_for_date(date(2026, 10, 1)),
            "2026/09/Ementa-uptec-28-09-2026-a-02-10-2026.pdf"
        );
        assert_eq!(
            menu_path_for_date(date(2026, 9, 28)),
            "2026/09/Ementa-uptec-28-09-2026-a-02-10-2026.pdf"
        );
    }

    #[test]
    fn week_spanning_new_year_uses_monday_folder() {
        assert_eq!(
            menu_path_for_date(date(2026, 1, 1)),
            "2025/12/Ementa-uptec-29-12-2025-a-02-01-2026.pdf"
        );
        assert_eq!(
            menu_path_for_date(date(2025, 12, 31)),
            "2025/12/Ementa-uptec-29-12-2025-a-02-01-2026.pdf"
        );
    }

    #[test]
    fn file_name_uses_calendar_year_not_week_year() {
        // 29 December 2025 belongs to ISO week 1 of 2026.
        let path = menu_path_for_date(date(2025, 12, 29));
        assert!(path.contains("29-12-2025"), "{path}");
    }

    #[test]
    fn bounds_hold_for_every_day_over_several_years() {
        let mut day = date(2023, 1, 1);
        let end = date(2028, 12, 31);
        while day <= end {
            let (monday, friday) = week_bounds(day);
            assert_eq!(monday.weekday(), Weekday::Mon);
            assert_eq!(friday.weekday(), Weekday::Fri);
            assert_eq!((friday - monday).num_days(), 4);
            assert!(monday <= day && day < monday + chrono::Duration::days(7));

            let path = menu_path_for_date(day);
            let folder = format!("{:04}/{:02}/", monday.year(), monday.month());
            assert!(path.starts_with(&folder), "{day}: {path}");
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn zoned_time_uses_local_date() {
        // Sunday 23:30 UTC is already Monday in UTC+1.
        let now = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2026, 10, 19, 0, 30, 0)
            .unwrap();
        assert_eq!(now.weekday(), Weekday::Mon);
        assert_eq!(
            menu_path(&now),
            "2026/10/Ementa-uptec-19-10-2026-a-23-10-2026.pdf"
        );
        assert_eq!(
            menu_path(&now.with_timezone(&Utc)),
            "2026/10/Ementa-uptec-12-10-2026-a-16-10-2026.pdf"
        );
    }
}
