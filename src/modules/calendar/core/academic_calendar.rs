use crate::modules::calendar::core::holiday::{DateRangeError, Holiday, HolidayKind};
use chrono::NaiveDate;

const BUILTIN: [(&str, HolidayKind, &str, &str); 12] = [
    (
        "2024-10-02",
        HolidayKind::Public,
        "Gandhi Jayanti",
        "National Holiday",
    ),
    (
        "2024-10-12",
        HolidayKind::Festival,
        "Dussehra",
        "Festival Holiday",
    ),
    (
        "2024-10-15-20",
        HolidayKind::Academic,
        "Mid-Term Break",
        "Mid-semester break for students",
    ),
    (
        "2024-10-31",
        HolidayKind::Festival,
        "Diwali",
        "Festival of Lights",
    ),
    (
        "2024-11-01",
        HolidayKind::Festival,
        "Diwali Holiday",
        "Extended Diwali celebration",
    ),
    (
        "2024-11-14",
        HolidayKind::Academic,
        "Children's Day",
        "Special events for students",
    ),
    (
        "2024-12-20-31",
        HolidayKind::Academic,
        "Winter Break",
        "Year-end holidays",
    ),
    (
        "2025-01-01",
        HolidayKind::Public,
        "New Year's Day",
        "Public Holiday",
    ),
    (
        "2025-01-26",
        HolidayKind::Public,
        "Republic Day",
        "National Holiday",
    ),
    (
        "2025-02-14",
        HolidayKind::Festival,
        "Basant Panchami",
        "Festival Holiday",
    ),
    (
        "2025-03-08",
        HolidayKind::Festival,
        "Holi",
        "Festival of Colors",
    ),
    (
        "2025-03-15-25",
        HolidayKind::Academic,
        "Spring Break",
        "Spring semester break",
    ),
];

/// Holidays ordered by start date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcademicCalendar {
    holidays: Vec<Holiday>,
}

impl AcademicCalendar {
    pub fn new(mut holidays: Vec<Holiday>) -> Self {
        holidays.sort_by_key(|holiday| holiday.starts_on);
        Self { holidays }
    }

    pub fn builtin() -> Result<Self, DateRangeError> {
        let holidays = BUILTIN
            .into_iter()
            .map(|(dates, kind, name, description)| {
                Holiday::new(name, kind, Some(description), dates)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(holidays))
    }

    pub fn all(&self) -> &[Holiday] {
        &self.holidays
    }

    pub fn holiday_on(&self, date: NaiveDate) -> Option<&Holiday> {
        self.holidays.iter().find(|holiday| holiday.covers(date))
    }

    /// Holidays not yet over on `from`, a running one included.
    pub fn upcoming(&self, from: NaiveDate, limit: usize) -> Vec<&Holiday> {
        self.holidays
            .iter()
            .filter(|holiday| holiday.ends_on >= from)
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
mod academic_calendar_tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[fixture]
    fn calendar() -> AcademicCalendar {
        AcademicCalendar::builtin().unwrap()
    }

    #[rstest]
    fn it_should_ship_the_builtin_catalogue_in_date_order(calendar: AcademicCalendar) {
        assert_eq!(calendar.all().len(), 12);
        assert!(
            calendar
                .all()
                .windows(2)
                .all(|pair| pair[0].starts_on <= pair[1].starts_on)
        );
    }

    #[rstest]
    #[case(day(2024, 10, 2), Some("Gandhi Jayanti"))]
    #[case(day(2024, 10, 17), Some("Mid-Term Break"))]
    #[case(day(2024, 12, 31), Some("Winter Break"))]
    #[case(day(2024, 10, 3), None)]
    fn it_should_find_the_holiday_on_a_date(
        calendar: AcademicCalendar,
        #[case] date: NaiveDate,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(
            calendar.holiday_on(date).map(|holiday| holiday.name.as_str()),
            expected
        );
    }

    #[rstest]
    fn it_should_include_a_running_holiday_in_upcoming(calendar: AcademicCalendar) {
        let names: Vec<&str> = calendar
            .upcoming(day(2024, 10, 18), 3)
            .into_iter()
            .map(|holiday| holiday.name.as_str())
            .collect();
        assert_eq!(names, vec!["Mid-Term Break", "Diwali", "Diwali Holiday"]);
    }

    #[rstest]
    fn it_should_return_nothing_after_the_last_holiday(calendar: AcademicCalendar) {
        assert!(calendar.upcoming(day(2025, 4, 1), 5).is_empty());
    }
}
