// Fixed daily grid of one hour teaching slots, 9 AM to 5 PM.
//
// Purpose
// - Catalogue the eight slots and map a wall-clock reading onto at most one of them.
//
// Boundaries
// - Clock readings are parsed once, here, into a chrono::NaiveTime. The resolution
//   algorithm only ever sees structured times.
//
// Matching window
// - A reading matches a slot when the hours agree and the minutes are within
//   MATCH_WINDOW_MINUTES of the slot start. With whole-hour starts this covers only the
//   first half of each hour: 9:29 is in the first slot, 9:30 is in none.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const MATCH_WINDOW_MINUTES: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    #[serde(rename = "9:00 AM - 10:00 AM")]
    NineToTen,
    #[serde(rename = "10:00 AM - 11:00 AM")]
    TenToEleven,
    #[serde(rename = "11:00 AM - 12:00 PM")]
    ElevenToNoon,
    #[serde(rename = "12:00 PM - 1:00 PM")]
    NoonToOne,
    #[serde(rename = "1:00 PM - 2:00 PM")]
    OneToTwo,
    #[serde(rename = "2:00 PM - 3:00 PM")]
    TwoToThree,
    #[serde(rename = "3:00 PM - 4:00 PM")]
    ThreeToFour,
    #[serde(rename = "4:00 PM - 5:00 PM")]
    FourToFive,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown time slot: {0}")]
pub struct UnknownTimeSlot(pub String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClockReadingError {
    #[error("empty clock reading")]
    Empty,

    #[error("unreadable clock reading: {input}")]
    Unreadable {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 8] = [
        TimeSlot::NineToTen,
        TimeSlot::TenToEleven,
        TimeSlot::ElevenToNoon,
        TimeSlot::NoonToOne,
        TimeSlot::OneToTwo,
        TimeSlot::TwoToThree,
        TimeSlot::ThreeToFour,
        TimeSlot::FourToFive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TimeSlot::NineToTen => "9:00 AM - 10:00 AM",
            TimeSlot::TenToEleven => "10:00 AM - 11:00 AM",
            TimeSlot::ElevenToNoon => "11:00 AM - 12:00 PM",
            TimeSlot::NoonToOne => "12:00 PM - 1:00 PM",
            TimeSlot::OneToTwo => "1:00 PM - 2:00 PM",
            TimeSlot::TwoToThree => "2:00 PM - 3:00 PM",
            TimeSlot::ThreeToFour => "3:00 PM - 4:00 PM",
            TimeSlot::FourToFive => "4:00 PM - 5:00 PM",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Slot start as (hour, minute) on the 24-hour clock.
    pub fn start(self) -> (u32, u32) {
        (9 + self.index() as u32, 0)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeSlot {
    type Err = UnknownTimeSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TimeSlot::ALL
            .into_iter()
            .find(|slot| slot.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownTimeSlot(s.to_string()))
    }
}

/// First slot, in declared order, whose start lies within the matching window of `now`.
pub fn resolve_slot(now: NaiveTime) -> Option<TimeSlot> {
    TimeSlot::ALL.into_iter().find(|slot| {
        let (hour, minute) = slot.start();
        now.hour() == hour && now.minute().abs_diff(minute) < MATCH_WINDOW_MINUTES
    })
}

/// Parse "9:15 AM", "12:05 pm" or "14:05" into a time of day.
pub fn parse_clock_reading(input: &str) -> Result<NaiveTime, ClockReadingError> {
    let reading = input.trim().to_ascii_uppercase();
    if reading.is_empty() {
        return Err(ClockReadingError::Empty);
    }

    let parsed = match reading
        .strip_suffix("AM")
        .map(|body| (body, "AM"))
        .or_else(|| reading.strip_suffix("PM").map(|body| (body, "PM")))
    {
        Some((body, meridiem)) => {
            NaiveTime::parse_from_str(&format!("{} {meridiem}", body.trim()), "%I:%M %p")
        }
        None => NaiveTime::parse_from_str(&reading, "%H:%M"),
    };

    parsed.map_err(|source| ClockReadingError::Unreadable {
        input: input.to_string(),
        source,
    })
}

#[cfg(test)]
mod time_slot_tests {
    use super::*;
    use rstest::rstest;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[rstest]
    fn it_should_lay_out_eight_contiguous_slots() {
        assert_eq!(TimeSlot::ALL.len(), 8);
        for pair in TimeSlot::ALL.windows(2) {
            let (start, _) = pair[0].start();
            let (next, _) = pair[1].start();
            assert_eq!(next, start + 1);
        }
        assert_eq!(TimeSlot::NineToTen.start(), (9, 0));
        assert_eq!(TimeSlot::FourToFive.start(), (16, 0));
    }

    #[rstest]
    fn it_should_agree_with_the_start_written_in_each_label() {
        for slot in TimeSlot::ALL {
            let (start_label, _) = slot.label().split_once(" - ").unwrap();
            let start = parse_clock_reading(start_label).unwrap();
            assert_eq!((start.hour(), start.minute()), slot.start(), "{slot}");
        }
    }

    #[rstest]
    #[case(at(9, 0), Some(TimeSlot::NineToTen))]
    #[case(at(9, 15), Some(TimeSlot::NineToTen))]
    #[case(at(9, 29), Some(TimeSlot::NineToTen))]
    #[case(at(9, 30), None)]
    #[case(at(9, 45), None)]
    #[case(at(12, 10), Some(TimeSlot::NoonToOne))]
    #[case(at(16, 0), Some(TimeSlot::FourToFive))]
    #[case(at(17, 0), None)]
    #[case(at(8, 59), None)]
    #[case(at(0, 5), None)]
    fn it_should_resolve_the_slot_for_a_reading(
        #[case] now: NaiveTime,
        #[case] expected: Option<TimeSlot>,
    ) {
        assert_eq!(resolve_slot(now), expected);
    }

    #[rstest]
    fn it_should_resolve_at_most_one_slot_from_the_table_for_every_minute() {
        for hour in 0..24 {
            for minute in 0..60 {
                let now = at(hour, minute);
                let matching = TimeSlot::ALL
                    .into_iter()
                    .filter(|slot| {
                        let (h, m) = slot.start();
                        now.hour() == h && now.minute().abs_diff(m) < MATCH_WINDOW_MINUTES
                    })
                    .count();
                assert!(matching <= 1);
                if let Some(slot) = resolve_slot(now) {
                    assert!(TimeSlot::ALL.contains(&slot));
                }
            }
        }
    }

    #[rstest]
    #[case("9:15 AM", at(9, 15))]
    #[case("09:15 am", at(9, 15))]
    #[case("12:05 PM", at(12, 5))]
    #[case("12:05 AM", at(0, 5))]
    #[case("1:40PM", at(13, 40))]
    #[case("14:05", at(14, 5))]
    fn it_should_parse_clock_readings(#[case] input: &str, #[case] expected: NaiveTime) {
        assert_eq!(parse_clock_reading(input), Ok(expected));
    }

    #[rstest]
    #[case("13:00 PM")]
    #[case("noon")]
    #[case("25:00")]
    fn it_should_reject_unreadable_clock_readings(#[case] input: &str) {
        assert!(matches!(
            parse_clock_reading(input),
            Err(ClockReadingError::Unreadable { .. })
        ));
    }

    #[rstest]
    fn it_should_reject_an_empty_reading() {
        assert_eq!(parse_clock_reading("   "), Err(ClockReadingError::Empty));
    }

    #[rstest]
    fn it_should_round_trip_labels_through_from_str() {
        assert_eq!(
            "12:00 PM - 1:00 PM".parse::<TimeSlot>(),
            Ok(TimeSlot::NoonToOne)
        );
        assert!("8:00 AM - 9:00 AM".parse::<TimeSlot>().is_err());
    }
}
