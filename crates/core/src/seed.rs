//! Start-of-shift fixture data and the combined dashboard snapshot format

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::Result;
use crate::models::{
    HousekeepingStatus, Notification, NotificationSource, NotificationType, RelatedKind, Room,
    RoomStatus, RoomType, Task, TaskPriority, TaskStatus, TaskType,
};
use crate::store::snapshot;

/// All three collections, as written to and read from a snapshot file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    pub tasks: Vec<Task>,
    pub rooms: Vec<Room>,
    pub notifications: Vec<Notification>,
}

impl SeedData {
    /// The built-in shift fixture
    pub fn builtin() -> Self {
        Self {
            tasks: tasks(),
            rooms: rooms(),
            notifications: notifications(),
        }
    }

    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let data: SeedData = serde_json::from_str(&json)?;
        tracing::info!(
            tasks = data.tasks.len(),
            rooms = data.rooms.len(),
            notifications = data.notifications.len(),
            "Loaded dashboard snapshot"
        );
        Ok(data)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        snapshot::write_atomic(path.as_ref(), &serde_json::to_string_pretty(self)?)
    }
}

#[allow(clippy::too_many_arguments)]
fn task(
    id: &str,
    title: &str,
    description: &str,
    priority: TaskPriority,
    status: TaskStatus,
    task_type: TaskType,
    location: &str,
    assigned_to: &str,
    due_time: &str,
    estimated_duration: u32,
    requested_by: Option<&str>,
) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        priority,
        status,
        task_type,
        location: location.to_string(),
        assigned_to: assigned_to.to_string(),
        due_time: due_time.to_string(),
        estimated_duration,
        requested_by: requested_by.map(str::to_string),
    }
}

pub fn tasks() -> Vec<Task> {
    vec![
        task(
            "task-001",
            "Fix AC Unit",
            "Guest reports AC not cooling properly in room 304",
            TaskPriority::High,
            TaskStatus::Pending,
            TaskType::Maintenance,
            "Room 304",
            "John Smith",
            "14:00",
            45,
            Some("Guest Services"),
        ),
        task(
            "task-002",
            "Room Cleaning",
            "Deep clean and prepare room for VIP guest arrival",
            TaskPriority::Normal,
            TaskStatus::InProgress,
            TaskType::Housekeeping,
            "Room 508",
            "Maria Garcia",
            "15:30",
            60,
            None,
        ),
        task(
            "task-003",
            "Welcome Package Delivery",
            "Deliver complimentary fruit basket and wine to honeymoon suite",
            TaskPriority::Normal,
            TaskStatus::Completed,
            TaskType::Delivery,
            "Suite 201",
            "David Chen",
            "12:00",
            15,
            None,
        ),
        task(
            "task-004",
            "Pool Equipment Check",
            "Daily maintenance check of pool filtration system",
            TaskPriority::Low,
            TaskStatus::Pending,
            TaskType::Maintenance,
            "Pool Area",
            "Mike Johnson",
            "16:00",
            30,
            None,
        ),
        task(
            "task-005",
            "Guest Complaint Resolution",
            "Noise complaint from room 412 - investigate adjoining room",
            TaskPriority::Urgent,
            TaskStatus::Pending,
            TaskType::GuestService,
            "Room 412/414",
            "Sarah Wilson",
            "ASAP",
            20,
            Some("Front Desk"),
        ),
    ]
}

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

pub fn rooms() -> Vec<Room> {
    let mut r304 = Room::new("room-304", "304", 3, RoomType::Deluxe).with_status(RoomStatus::Occupied);
    r304.guest_name = Some("John & Mary Smith".into());
    r304.check_in = date(2025, 1, 15);
    r304.check_out = date(2025, 1, 18);
    r304.housekeeping_status = HousekeepingStatus::Completed;
    r304.maintenance_issues = vec!["AC not cooling properly".into()];
    r304.last_cleaned = Some("2025-01-16 10:30".into());

    let mut r305 = Room::new("room-305", "305", 3, RoomType::Standard).with_status(RoomStatus::VacantDirty);
    r305.notes = Some("Guest checked out at 11:00 AM".into());

    let mut r508 = Room::new("room-508", "508", 5, RoomType::Suite).with_status(RoomStatus::VacantClean);
    r508.housekeeping_status = HousekeepingStatus::Completed;
    r508.last_cleaned = Some("2025-01-16 14:15".into());
    r508.notes = Some("VIP arrival at 16:00".into());

    let mut r201 = Room::new("room-201", "201", 2, RoomType::Suite).with_status(RoomStatus::Occupied);
    r201.guest_name = Some("David & Sarah Johnson".into());
    r201.check_in = date(2025, 1, 16);
    r201.check_out = date(2025, 1, 20);
    r201.housekeeping_status = HousekeepingStatus::Completed;
    r201.last_cleaned = Some("2025-01-16 15:45".into());
    r201.notes = Some("Honeymoon suite - special amenities delivered".into());

    let mut r412 = Room::new("room-412", "412", 4, RoomType::Standard).with_status(RoomStatus::Occupied);
    r412.guest_name = Some("Elena Rodriguez".into());
    r412.check_in = date(2025, 1, 15);
    r412.check_out = date(2025, 1, 17);
    r412.housekeeping_status = HousekeepingStatus::Completed;
    r412.last_cleaned = Some("2025-01-16 09:15".into());
    r412.notes = Some("Noise complaint logged - monitoring situation".into());

    let mut r101 = Room::new("room-101", "101", 1, RoomType::Standard).with_status(RoomStatus::OutOfOrder);
    r101.maintenance_issues = vec!["Plumbing leak".into(), "Carpet needs replacement".into()];
    r101.notes = Some("Major maintenance required - estimated 3 days".into());

    vec![r304, r305, r508, r201, r412, r101]
}

#[allow(clippy::too_many_arguments)]
fn notification(
    id: &str,
    notification_type: NotificationType,
    title: &str,
    message: &str,
    timestamp: &str,
    is_read: bool,
    source: NotificationSource,
    action_required: Option<bool>,
) -> Notification {
    let mut n = Notification::new(id, notification_type, title, source);
    n.message = message.to_string();
    n.timestamp = timestamp.to_string();
    n.is_read = is_read;
    n.action_required = action_required;
    n
}

pub fn notifications() -> Vec<Notification> {
    vec![
        notification(
            "notif-001",
            NotificationType::Urgent,
            "Guest Complaint - Room 412",
            "Noise complaint from adjoining room. Immediate attention required.",
            "2025-01-16 13:45",
            false,
            NotificationSource::Guest,
            Some(true),
        )
        .related_to(RelatedKind::Room, "room-412", "Room 412"),
        notification(
            "notif-002",
            NotificationType::Warning,
            "Maintenance Scheduled",
            "Pool filtration system maintenance due in 30 minutes.",
            "2025-01-16 13:30",
            false,
            NotificationSource::System,
            Some(true),
        )
        .related_to(RelatedKind::Task, "task-004", "Pool Equipment Check"),
        notification(
            "notif-003",
            NotificationType::Info,
            "VIP Arrival Alert",
            "Honeymoon suite guest arriving at 16:00. Welcome package ready.",
            "2025-01-16 13:15",
            false,
            NotificationSource::Manager,
            None,
        )
        .related_to(RelatedKind::Room, "room-508", "Suite 508"),
        notification(
            "notif-004",
            NotificationType::Success,
            "Task Completed",
            "Room 201 cleaning completed successfully.",
            "2025-01-16 12:30",
            true,
            NotificationSource::System,
            None,
        )
        .related_to(RelatedKind::Room, "room-201", "Room 201"),
        notification(
            "notif-005",
            NotificationType::Error,
            "System Alert",
            "Room 101 marked out of order due to plumbing issues.",
            "2025-01-16 11:15",
            true,
            NotificationSource::Maintenance,
            None,
        )
        .related_to(RelatedKind::Room, "room-101", "Room 101"),
    ]
}
