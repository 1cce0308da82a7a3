//! Task model - a unit of staff work

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::title_case;
use crate::error::Error;

/// Task priority, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Normal,
    High,
    Urgent,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 4] = [
        TaskPriority::Low,
        TaskPriority::Normal,
        TaskPriority::High,
        TaskPriority::Urgent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Normal => "normal",
            TaskPriority::High => "high",
            TaskPriority::Urgent => "urgent",
        }
    }

    pub fn label(&self) -> String {
        title_case(self.as_str())
    }
}

impl FromStr for TaskPriority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| Error::invalid_value("priority", s))
    }
}

/// Task workflow status
///
/// Moves forward only: `pending -> in_progress -> completed`.
/// The allowed edges live in [`crate::lifecycle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> String {
        title_case(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| Error::invalid_value("task status", s))
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of work a task represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Maintenance,
    Housekeeping,
    GuestService,
    Delivery,
}

impl TaskType {
    pub const ALL: [TaskType; 4] = [
        TaskType::Maintenance,
        TaskType::Housekeeping,
        TaskType::GuestService,
        TaskType::Delivery,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Maintenance => "maintenance",
            TaskType::Housekeeping => "housekeeping",
            TaskType::GuestService => "guest_service",
            TaskType::Delivery => "delivery",
        }
    }

    pub fn label(&self) -> String {
        title_case(self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::invalid_value("task type", s))
    }
}

/// A staff task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub location: String,
    pub assigned_to: String,
    /// Free text, e.g. "14:00" or "ASAP"
    pub due_time: String,
    /// Minutes
    pub estimated_duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_by: Option<String>,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>, task_type: TaskType) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            priority: TaskPriority::Normal,
            status: TaskStatus::Pending,
            task_type,
            location: String::new(),
            assigned_to: String::new(),
            due_time: String::new(),
            estimated_duration: 0,
            requested_by: None,
        }
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_urgent(&self) -> bool {
        self.priority == TaskPriority::Urgent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!("in_progress".parse::<TaskStatus>().unwrap(), TaskStatus::InProgress);
        assert!(matches!(
            "done".parse::<TaskStatus>(),
            Err(Error::InvalidValue { field: "task status", .. })
        ));
    }

    #[test]
    fn test_status_label() {
        assert_eq!(TaskStatus::InProgress.label(), "In Progress");
    }

    #[test]
    fn test_task_type_roundtrip_str() {
        for task_type in TaskType::ALL {
            assert_eq!(task_type.as_str().parse::<TaskType>().unwrap(), task_type);
            assert_eq!(serde_json::to_value(task_type).unwrap(), task_type.as_str());
        }
        assert_eq!(TaskType::GuestService.label(), "Guest Service");
        assert_eq!(TaskPriority::Urgent.label(), "Urgent");
        assert!(matches!(
            "laundry".parse::<TaskType>(),
            Err(Error::InvalidValue { field: "task type", .. })
        ));
    }

    #[test]
    fn test_priority_ordering() {
        assert!(TaskPriority::Urgent > TaskPriority::High);
        assert!(TaskPriority::Low < TaskPriority::Normal);
    }

    #[test]
    fn test_serializes_with_original_field_names() {
        let task = Task::new("task-009", "Restock minibar", TaskType::Delivery);
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["type"], "delivery");
        assert_eq!(json["assignedTo"], "");
        assert_eq!(json["status"], "pending");
        assert!(json.get("requestedBy").is_none());
    }
}
