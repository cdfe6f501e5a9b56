// Weekly timetable of one teacher.
//
// Purpose
// - Own the full Weekday x TimeSlot grid. Every cell exists; an empty cell is a free period.
//
// Responsibilities
// - Lookup, single cell update (returns a new schedule), and wholesale replace from the
//   nested map shape used on the wire: { "Monday": { "9:00 AM - 10:00 AM": {..} | null } }.
// - Missing days or slots in incoming data are filled with free periods. Keys that do not
//   name a known day or slot, or that name a cell already given under another spelling, are
//   rejected; the grid is never partially filled.
//
// Boundaries
// - No input or output. Persistence belongs to the repository adapter.

use crate::modules::timetable::core::assignment::ClassAssignment;
use crate::modules::timetable::core::time_slot::{TimeSlot, resolve_slot};
use crate::modules::timetable::core::weekday::Weekday;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Transport shape with free-form keys, as uploaded or edited by a client.
pub type RawSchedule = BTreeMap<String, BTreeMap<String, Option<ClassAssignment>>>;

type Grid = [[Option<ClassAssignment>; 8]; 6];
type TypedSchedule = BTreeMap<Weekday, BTreeMap<TimeSlot, Option<ClassAssignment>>>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("malformed schedule: {0}")]
    MalformedSchedule(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    CurrentClass,
    ScheduledClass,
    Free,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "TypedSchedule", try_from = "RawSchedule")]
pub struct Schedule {
    cells: Grid,
}

impl Schedule {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get_assignment(&self, day: Weekday, slot: TimeSlot) -> Option<&ClassAssignment> {
        self.cells[day.index()][slot.index()].as_ref()
    }

    /// Copy of this schedule with one cell replaced.
    pub fn set_assignment(
        &self,
        day: Weekday,
        slot: TimeSlot,
        assignment: Option<ClassAssignment>,
    ) -> Schedule {
        let mut next = self.clone();
        next.cells[day.index()][slot.index()] = assignment;
        next
    }

    /// Build a complete grid from uploaded data.
    pub fn replace_schedule(raw: RawSchedule) -> Result<Schedule, ScheduleError> {
        let mut cells = <Grid as Default>::default();
        let mut written = [[false; 8]; 6];
        for (day_key, slots) in raw {
            let day: Weekday = day_key
                .parse()
                .map_err(|_| ScheduleError::MalformedSchedule(format!("unknown day {day_key:?}")))?;
            for (slot_key, assignment) in slots {
                let slot: TimeSlot = slot_key.parse().map_err(|_| {
                    ScheduleError::MalformedSchedule(format!(
                        "unknown time slot {slot_key:?} on {day}"
                    ))
                })?;
                let seen = &mut written[day.index()][slot.index()];
                if *seen {
                    return Err(ScheduleError::MalformedSchedule(format!(
                        "{slot} on {day} is given more than once"
                    )));
                }
                *seen = true;
                cells[day.index()][slot.index()] = assignment;
            }
        }
        Ok(Schedule { cells })
    }

    pub fn classes_on(&self, day: Weekday) -> Vec<(TimeSlot, &ClassAssignment)> {
        TimeSlot::ALL
            .into_iter()
            .filter_map(|slot| self.get_assignment(day, slot).map(|a| (slot, a)))
            .collect()
    }

    pub fn class_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// How a viewer should paint a cell at `now`.
    pub fn cell_state(&self, day: Weekday, slot: TimeSlot, now: NaiveDateTime) -> CellState {
        if self.get_assignment(day, slot).is_none() {
            return CellState::Free;
        }
        let is_now = Weekday::of(&now) == Some(day) && resolve_slot(now.time()) == Some(slot);
        if is_now {
            CellState::CurrentClass
        } else {
            CellState::ScheduledClass
        }
    }
}

impl From<Schedule> for TypedSchedule {
    fn from(schedule: Schedule) -> Self {
        Weekday::ALL
            .into_iter()
            .zip(schedule.cells)
            .map(|(day, row)| (day, TimeSlot::ALL.into_iter().zip(row).collect()))
            .collect()
    }
}

impl TryFrom<RawSchedule> for Schedule {
    type Error = ScheduleError;

    fn try_from(raw: RawSchedule) -> Result<Self, Self::Error> {
        Schedule::replace_schedule(raw)
    }
}
