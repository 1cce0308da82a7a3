//! Room store operations

use crate::error::{Error, Result};
use crate::lifecycle::RoomTransition;
use crate::models::{EntityKind, Room, RoomStatus};

use super::EntityStore;

pub type RoomStore = EntityStore<Room>;

impl EntityStore<Room> {
    /// Override the occupancy status; any status may follow any other
    pub fn set_status(&mut self, id: &str, status: RoomStatus) -> Result<Room> {
        self.transition(id, status)
    }

    /// Move housekeeping one step forward ("Start Cleaning" / "Mark Clean")
    pub fn advance_housekeeping(&mut self, id: &str) -> Result<Room> {
        let current = self.lookup(id)?.housekeeping_status;
        match current.next() {
            Some(next) => self.transition(id, next),
            None => Err(Error::IllegalTransition {
                kind: EntityKind::Room,
                id: id.to_string(),
                from: current.to_string(),
                to: current.to_string(),
            }),
        }
    }

    pub fn report_issue(&mut self, id: &str, issue: impl Into<String>) -> Result<Room> {
        self.transition(id, RoomTransition::ReportIssue(issue.into()))
    }

    pub fn resolve_issues(&mut self, id: &str) -> Result<Room> {
        self.transition(id, RoomTransition::ResolveIssues)
    }

    /// Distinct floors in ascending order, for the floor filter bar
    pub fn floors(&self) -> Vec<u32> {
        let mut floors: Vec<u32> = self.get_all().iter().map(|r| r.floor).collect();
        floors.sort_unstable();
        floors.dedup();
        floors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use chrono::NaiveDate;

    use crate::clock::FixedClock;
    use crate::models::{HousekeepingStatus, RoomType};

    fn store() -> RoomStore {
        let clock = Rc::new(FixedClock(
            NaiveDate::from_ymd_opt(2025, 1, 16)
                .unwrap()
                .and_hms_opt(16, 42, 31)
                .unwrap(),
        ));
        RoomStore::with_entities(
            clock,
            vec![
                Room::new("room-305", "305", 3, RoomType::Standard),
                Room::new("room-101", "101", 1, RoomType::Standard).with_status(RoomStatus::OutOfOrder),
                Room::new("room-304", "304", 3, RoomType::Deluxe).with_status(RoomStatus::Occupied),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_cleaning_cycle_stamps_once() {
        let mut store = store();
        let started = store.advance_housekeeping("room-305").unwrap();
        assert_eq!(started.housekeeping_status, HousekeepingStatus::InProgress);
        assert_eq!(started.last_cleaned, None);

        let done = store.advance_housekeeping("room-305").unwrap();
        assert_eq!(done.housekeeping_status, HousekeepingStatus::Completed);
        assert_eq!(done.last_cleaned.as_deref(), Some("2025-01-16 16:42"));

        assert!(store.advance_housekeeping("room-305").is_err());
    }

    #[test]
    fn test_housekeeping_cannot_skip() {
        let mut store = store();
        assert!(store
            .transition("room-305", HousekeepingStatus::Completed)
            .is_err());
        assert_eq!(store.get("room-305").unwrap().last_cleaned, None);
    }

    #[test]
    fn test_status_override_from_any_state() {
        let mut store = store();
        let room = store.set_status("room-101", RoomStatus::VacantClean).unwrap();
        assert_eq!(room.status, RoomStatus::VacantClean);
        let room = store.set_status("room-101", RoomStatus::OutOfOrder).unwrap();
        assert_eq!(room.status, RoomStatus::OutOfOrder);
        assert_eq!(room.housekeeping_status, HousekeepingStatus::Pending);
    }

    #[test]
    fn test_floor_filter_and_floors() {
        let store = store();
        let third: Vec<_> = store.apply_filter("3").unwrap().map(|r| r.number.as_str()).collect();
        assert_eq!(third, ["305", "304"]);
        assert_eq!(store.floors(), vec![1, 3]);
    }

    #[test]
    fn test_issue_log() {
        let mut store = store();
        store.report_issue("room-304", "AC not cooling properly").unwrap();
        assert!(store.get("room-304").unwrap().has_open_issues());
        store.resolve_issues("room-304").unwrap();
        assert!(!store.get("room-304").unwrap().has_open_issues());
    }
}
