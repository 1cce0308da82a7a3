//! Named filter predicates for each entity collection

use crate::error::{Error, Result};
use crate::models::{EntityKind, Notification, Room, Task, TaskStatus};

/// Task list filter: `all` or an exact status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    Status(TaskStatus),
}

impl TaskFilter {
    pub const NAMES: [&'static str; 4] = ["all", "pending", "in_progress", "completed"];

    pub fn parse(name: &str) -> Result<Self> {
        if name == "all" {
            return Ok(TaskFilter::All);
        }
        name.parse::<TaskStatus>()
            .map(TaskFilter::Status)
            .map_err(|_| invalid(EntityKind::Task, name))
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Status(status) => task.status == *status,
        }
    }
}

impl std::fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskFilter::All => f.write_str("all"),
            TaskFilter::Status(status) => f.write_str(status.as_str()),
        }
    }
}

/// Room list filter: `all` or a positive floor number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomFilter {
    All,
    Floor(u32),
}

impl RoomFilter {
    pub fn parse(name: &str) -> Result<Self> {
        if name == "all" {
            return Ok(RoomFilter::All);
        }
        match name.parse::<u32>() {
            Ok(floor) if floor > 0 => Ok(RoomFilter::Floor(floor)),
            _ => Err(invalid(EntityKind::Room, name)),
        }
    }

    pub fn matches(&self, room: &Room) -> bool {
        match self {
            RoomFilter::All => true,
            RoomFilter::Floor(floor) => room.floor == *floor,
        }
    }
}

/// Canonical name: `"+3"` and `"03"` both display as `3`
impl std::fmt::Display for RoomFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoomFilter::All => f.write_str("all"),
            RoomFilter::Floor(floor) => write!(f, "{}", floor),
        }
    }
}

/// Notification filter; `urgent` ignores read state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationFilter {
    All,
    Unread,
    Urgent,
}

impl NotificationFilter {
    pub const NAMES: [&'static str; 3] = ["unread", "urgent", "all"];

    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "all" => Ok(NotificationFilter::All),
            "unread" => Ok(NotificationFilter::Unread),
            "urgent" => Ok(NotificationFilter::Urgent),
            other => Err(invalid(EntityKind::Notification, other)),
        }
    }

    pub fn matches(&self, notification: &Notification) -> bool {
        match self {
            NotificationFilter::All => true,
            NotificationFilter::Unread => !notification.is_read,
            NotificationFilter::Urgent => notification.is_urgent(),
        }
    }
}

impl std::fmt::Display for NotificationFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            NotificationFilter::All => "all",
            NotificationFilter::Unread => "unread",
            NotificationFilter::Urgent => "urgent",
        })
    }
}

fn invalid(kind: EntityKind, name: &str) -> Error {
    Error::InvalidFilter {
        kind,
        name: name.to_string(),
    }
}
