//! Notification model - staff alerts with read state

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::title_case;
use crate::error::Error;

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    Urgent,
    Warning,
    Info,
    Success,
    Error,
}

impl NotificationType {
    pub const ALL: [NotificationType; 5] = [
        NotificationType::Urgent,
        NotificationType::Warning,
        NotificationType::Info,
        NotificationType::Success,
        NotificationType::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Urgent => "urgent",
            NotificationType::Warning => "warning",
            NotificationType::Info => "info",
            NotificationType::Success => "success",
            NotificationType::Error => "error",
        }
    }

    pub fn label(&self) -> String {
        title_case(self.as_str())
    }
}

impl FromStr for NotificationType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::invalid_value("notification type", s))
    }
}

/// Who raised the notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationSource {
    System,
    Guest,
    Manager,
    Maintenance,
}

impl NotificationSource {
    pub const ALL: [NotificationSource; 4] = [
        NotificationSource::System,
        NotificationSource::Guest,
        NotificationSource::Manager,
        NotificationSource::Maintenance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationSource::System => "system",
            NotificationSource::Guest => "guest",
            NotificationSource::Manager => "manager",
            NotificationSource::Maintenance => "maintenance",
        }
    }

    pub fn label(&self) -> String {
        title_case(self.as_str())
    }
}

impl FromStr for NotificationSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|src| src.as_str() == s)
            .ok_or_else(|| Error::invalid_value("notification source", s))
    }
}

/// Read state of a notification; `unread -> read` only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadState {
    Unread,
    Read,
}

impl ReadState {
    pub const ALL: [ReadState; 2] = [ReadState::Unread, ReadState::Read];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReadState::Unread => "unread",
            ReadState::Read => "read",
        }
    }

    pub fn label(&self) -> String {
        title_case(self.as_str())
    }
}

impl FromStr for ReadState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| Error::invalid_value("read state", s))
    }
}

impl std::fmt::Display for ReadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of entity a notification points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelatedKind {
    Room,
    Guest,
    Task,
    System,
}

impl RelatedKind {
    pub const ALL: [RelatedKind; 4] = [
        RelatedKind::Room,
        RelatedKind::Guest,
        RelatedKind::Task,
        RelatedKind::System,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RelatedKind::Room => "room",
            RelatedKind::Guest => "guest",
            RelatedKind::Task => "task",
            RelatedKind::System => "system",
        }
    }

    pub fn label(&self) -> String {
        title_case(self.as_str())
    }
}

impl FromStr for RelatedKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| Error::invalid_value("related entity type", s))
    }
}

/// Navigational pointer to another entity
///
/// Holds no ownership; the target may not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    #[serde(rename = "type")]
    pub kind: RelatedKind,
    pub id: String,
    pub name: String,
}

/// A staff notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub timestamp: String,
    pub is_read: bool,
    pub source: NotificationSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_entity: Option<EntityRef>,
}

impl Notification {
    pub fn new(
        id: impl Into<String>,
        notification_type: NotificationType,
        title: impl Into<String>,
        source: NotificationSource,
    ) -> Self {
        Self {
            id: id.into(),
            notification_type,
            title: title.into(),
            message: String::new(),
            timestamp: String::new(),
            is_read: false,
            source,
            action_required: None,
            related_entity: None,
        }
    }

    pub fn read_state(&self) -> ReadState {
        if self.is_read {
            ReadState::Read
        } else {
            ReadState::Unread
        }
    }

    pub fn is_urgent(&self) -> bool {
        self.notification_type == NotificationType::Urgent
    }

    pub fn requires_action(&self) -> bool {
        self.action_required.unwrap_or(false)
    }

    pub fn related_to(mut self, kind: RelatedKind, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.related_entity = Some(EntityRef {
            kind,
            id: id.into(),
            name: name.into(),
        });
        self
    }
}
