//! Task store operations

use crate::error::{Error, Result};
use crate::lifecycle::TaskTransition;
use crate::models::{EntityKind, Task, TaskStatus};

use super::EntityStore;

pub type TaskStore = EntityStore<Task>;

impl EntityStore<Task> {
    /// `pending -> in_progress`
    pub fn start(&mut self, id: &str) -> Result<Task> {
        self.transition(id, TaskStatus::InProgress)
    }

    /// `in_progress -> completed`
    pub fn complete(&mut self, id: &str) -> Result<Task> {
        self.transition(id, TaskStatus::Completed)
    }

    /// Move a task one step forward; completed tasks have nowhere to go
    pub fn advance(&mut self, id: &str) -> Result<Task> {
        let current = self.lookup(id)?.status;
        match current.next() {
            Some(next) => self.transition(id, TaskTransition::to(next)),
            None => Err(Error::IllegalTransition {
                kind: EntityKind::Task,
                id: id.to_string(),
                from: current.to_string(),
                to: current.to_string(),
            }),
        }
    }

    pub fn count_with_status(&self, status: TaskStatus) -> usize {
        self.count_where(|t| t.status == status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::system_clock;
    use crate::models::{TaskPriority, TaskType};

    fn store() -> TaskStore {
        TaskStore::with_entities(
            system_clock(),
            vec![
                Task::new("task-001", "Fix AC Unit", TaskType::Maintenance)
                    .with_priority(TaskPriority::High),
                Task::new("task-003", "Welcome Package", TaskType::Delivery)
                    .with_status(TaskStatus::Completed),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_start_then_complete() {
        let mut store = store();
        assert_eq!(store.start("task-001").unwrap().status, TaskStatus::InProgress);
        assert_eq!(store.complete("task-001").unwrap().status, TaskStatus::Completed);
        assert_eq!(store.count_with_status(TaskStatus::Completed), 2);
    }

    #[test]
    fn test_complete_pending_fails() {
        let mut store = store();
        assert!(matches!(
            store.complete("task-001"),
            Err(Error::IllegalTransition { .. })
        ));
        assert_eq!(store.get("task-001").unwrap().status, TaskStatus::Pending);
    }

    #[test]
    fn test_advance() {
        let mut store = store();
        assert_eq!(store.advance("task-001").unwrap().status, TaskStatus::InProgress);
        assert_eq!(store.advance("task-001").unwrap().status, TaskStatus::Completed);
        assert!(store.advance("task-001").is_err());
        assert!(matches!(store.advance("nope"), Err(Error::NotFound { .. })));
    }

    #[test]
    fn test_reassign_with_transition() {
        let mut store = store();
        let task = store
            .transition("task-001", TaskTransition::to(TaskStatus::InProgress).reassign("Mike Johnson"))
            .unwrap();
        assert_eq!(task.assigned_to, "Mike Johnson");
    }
}
