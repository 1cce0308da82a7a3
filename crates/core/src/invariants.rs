//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::models::{Notification, Room, Task};
use crate::store::Entity;

/// Validate that a store's id index points at the right positions
pub fn assert_store_index<E: Entity>(entities: &[E], index: &HashMap<String, usize>) {
    debug_assert_eq!(
        entities.len(),
        index.len(),
        "{} store has {} entities but {} index entries",
        E::KIND,
        entities.len(),
        index.len()
    );

    if cfg!(debug_assertions) {
        for (pos, entity) in entities.iter().enumerate() {
            debug_assert_eq!(
                index.get(entity.id()),
                Some(&pos),
                "{} {} indexed at the wrong position",
                E::KIND,
                entity.id()
            );
        }
    }
}

/// Validate that a Room's state is internally consistent
pub fn assert_room_invariants(room: &Room) {
    debug_assert!(!room.id.trim().is_empty(), "Room has empty id");

    // Stamp must be `YYYY-MM-DD HH:MM`
    if let Some(stamp) = &room.last_cleaned {
        debug_assert!(
            NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d %H:%M").is_ok(),
            "Room {} has malformed lastCleaned {:?}",
            room.id,
            stamp
        );
    }

    debug_assert!(
        room.maintenance_issues.iter().all(|i| !i.trim().is_empty()),
        "Room {} has a blank maintenance issue",
        room.id
    );
}

/// Validate that a Task is valid
pub fn assert_task_invariants(task: &Task) {
    debug_assert!(!task.id.trim().is_empty(), "Task has empty id");
    debug_assert!(
        !task.title.trim().is_empty(),
        "Task {} has empty title",
        task.id
    );
}

/// Validate that a relatedEntity pointer is well formed (its target may be absent)
pub fn assert_notification_invariants(notification: &Notification) {
    if let Some(related) = &notification.related_entity {
        debug_assert!(
            !related.id.trim().is_empty(),
            "Notification {} points at an entity with empty id",
            notification.id
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NotificationSource, NotificationType, RelatedKind, RoomType, TaskType};

    #[test]
    fn test_valid_room() {
        let mut room = Room::new("room-1", "1", 1, RoomType::Standard);
        room.last_cleaned = Some("2025-01-16 10:30".into());
        assert_room_invariants(&room);
    }

    #[test]
    #[should_panic(expected = "malformed lastCleaned")]
    fn test_malformed_last_cleaned() {
        let mut room = Room::new("room-1", "1", 1, RoomType::Standard);
        room.last_cleaned = Some("yesterday".into());
        assert_room_invariants(&room);
    }

    #[test]
    fn test_valid_task() {
        assert_task_invariants(&Task::new("task-1", "Fix AC", TaskType::Maintenance));
    }

    #[test]
    fn test_dangling_reference_is_fine() {
        let n = Notification::new("n", NotificationType::Info, "N", NotificationSource::System)
            .related_to(RelatedKind::Room, "room-gone", "Room Gone");
        assert_notification_invariants(&n);
    }

    #[test]
    fn test_index_consistent() {
        let tasks = vec![Task::new("a", "A", TaskType::Delivery)];
        let index = HashMap::from([("a".to_string(), 0)]);
        assert_store_index(&tasks, &index);
    }

    #[test]
    #[should_panic(expected = "index entries")]
    fn test_index_missing_entry() {
        let tasks = vec![Task::new("a", "A", TaskType::Delivery)];
        assert_store_index(&tasks, &HashMap::new());
    }
}
