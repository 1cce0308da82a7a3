//! Room model - occupancy plus housekeeping workflow

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::title_case;
use crate::error::Error;

/// Occupancy and condition of a room
///
/// Any value may be set from any other; staff override it by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    Occupied,
    VacantClean,
    VacantDirty,
    OutOfOrder,
    Maintenance,
}

impl RoomStatus {
    pub const ALL: [RoomStatus; 5] = [
        RoomStatus::Occupied,
        RoomStatus::VacantClean,
        RoomStatus::VacantDirty,
        RoomStatus::OutOfOrder,
        RoomStatus::Maintenance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Occupied => "occupied",
            RoomStatus::VacantClean => "vacant_clean",
            RoomStatus::VacantDirty => "vacant_dirty",
            RoomStatus::OutOfOrder => "out_of_order",
            RoomStatus::Maintenance => "maintenance",
        }
    }

    pub fn label(&self) -> String {
        title_case(self.as_str())
    }
}

impl FromStr for RoomStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| Error::invalid_value("room status", s))
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Cleaning workflow, forward only like a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HousekeepingStatus {
    Pending,
    InProgress,
    Completed,
}

impl HousekeepingStatus {
    pub const ALL: [HousekeepingStatus; 3] = [
        HousekeepingStatus::Pending,
        HousekeepingStatus::InProgress,
        HousekeepingStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HousekeepingStatus::Pending => "pending",
            HousekeepingStatus::InProgress => "in_progress",
            HousekeepingStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> String {
        title_case(self.as_str())
    }
}

impl FromStr for HousekeepingStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| Error::invalid_value("housekeeping status", s))
    }
}

impl std::fmt::Display for HousekeepingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Room category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
    Villa,
}

impl RoomType {
    pub const ALL: [RoomType; 4] = [
        RoomType::Standard,
        RoomType::Deluxe,
        RoomType::Suite,
        RoomType::Villa,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Standard => "standard",
            RoomType::Deluxe => "deluxe",
            RoomType::Suite => "suite",
            RoomType::Villa => "villa",
        }
    }

    pub fn label(&self) -> String {
        title_case(self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::invalid_value("room type", s))
    }
}

/// A hotel room
///
/// `status` and `housekeeping_status` evolve independently; an out of order
/// room may still show housekeeping as completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub number: String,
    pub floor: u32,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub status: RoomStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out: Option<NaiveDate>,
    pub housekeeping_status: HousekeepingStatus,
    #[serde(default)]
    pub maintenance_issues: Vec<String>,
    /// `YYYY-MM-DD HH:MM`, stamped only when housekeeping completes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_cleaned: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Room {
    pub fn new(
        id: impl Into<String>,
        number: impl Into<String>,
        floor: u32,
        room_type: RoomType,
    ) -> Self {
        Self {
            id: id.into(),
            number: number.into(),
            floor,
            room_type,
            status: RoomStatus::VacantDirty,
            guest_name: None,
            check_in: None,
            check_out: None,
            housekeeping_status: HousekeepingStatus::Pending,
            maintenance_issues: Vec::new(),
            last_cleaned: None,
            notes: None,
        }
    }

    pub fn with_status(mut self, status: RoomStatus) -> Self {
        self.status = status;
        self
    }

    pub fn has_open_issues(&self) -> bool {
        !self.maintenance_issues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_status_roundtrip_str() {
        for status in RoomStatus::ALL {
            assert_eq!(status.as_str().parse::<RoomStatus>().unwrap(), status);
        }
        assert!("closed".parse::<RoomStatus>().is_err());
    }

    #[test]
    fn test_room_type_roundtrip_str() {
        for room_type in RoomType::ALL {
            assert_eq!(room_type.as_str().parse::<RoomType>().unwrap(), room_type);
            assert_eq!(serde_json::to_value(room_type).unwrap(), room_type.as_str());
        }
        assert_eq!(RoomType::Deluxe.label(), "Deluxe");
        assert_eq!(HousekeepingStatus::InProgress.label(), "In Progress");
        assert!(matches!(
            "penthouse".parse::<RoomType>(),
            Err(Error::InvalidValue { field: "room type", .. })
        ));
    }

    #[test]
    fn test_room_status_label() {
        assert_eq!(RoomStatus::VacantClean.label(), "Vacant Clean");
    }

    #[test]
    fn test_new_room_defaults() {
        let room = Room::new("room-999", "999", 9, RoomType::Villa);
        assert_eq!(room.status, RoomStatus::VacantDirty);
        assert_eq!(room.housekeeping_status, HousekeepingStatus::Pending);
        assert!(room.last_cleaned.is_none());
        assert!(!room.has_open_issues());
    }

    #[test]
    fn test_dates_serialize_as_plain_dates() {
        let mut room = Room::new("room-1", "1", 1, RoomType::Standard);
        room.check_in = NaiveDate::from_ymd_opt(2025, 1, 15);
        let json = serde_json::to_value(&room).unwrap();
        assert_eq!(json["checkIn"], "2025-01-15");
        assert_eq!(json["housekeepingStatus"], "pending");
    }
}
