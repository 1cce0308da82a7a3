//! Status machines and the transition requests each entity accepts
//!
//! Every mutation of a task, room or notification goes through
//! [`Entity::apply`], so the transition tables below are the only place
//! the legal edges are defined.

use chrono::NaiveDateTime;

use crate::clock::format_stamp;
use crate::error::{Error, Result};
use crate::filters::{NotificationFilter, RoomFilter, TaskFilter};
use crate::invariants;
use crate::models::{
    EntityKind, HousekeepingStatus, Notification, ReadState, Room, RoomStatus, Task, TaskStatus,
};
use crate::store::Entity;

/// Outcome of checking one edge of a status machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The edge exists; apply it
    Apply,
    /// Already in the requested state and re-requesting it is harmless
    NoOp,
    /// The edge does not exist
    Reject,
}

/// A status value with a transition table
pub trait StatusMachine: Copy + Eq + std::fmt::Display {
    fn step(self, to: Self) -> Step;

    fn is_terminal(self) -> bool;
}

impl StatusMachine for TaskStatus {
    fn step(self, to: Self) -> Step {
        match (self, to) {
            (TaskStatus::Pending, TaskStatus::InProgress) => Step::Apply,
            (TaskStatus::InProgress, TaskStatus::Completed) => Step::Apply,
            _ => Step::Reject,
        }
    }

    fn is_terminal(self) -> bool {
        self == TaskStatus::Completed
    }
}

impl TaskStatus {
    /// The single forward edge out of this status, if any
    pub fn next(self) -> Option<Self> {
        match self {
            TaskStatus::Pending => Some(TaskStatus::InProgress),
            TaskStatus::InProgress => Some(TaskStatus::Completed),
            TaskStatus::Completed => None,
        }
    }
}

impl StatusMachine for HousekeepingStatus {
    fn step(self, to: Self) -> Step {
        match (self, to) {
            (HousekeepingStatus::Pending, HousekeepingStatus::InProgress) => Step::Apply,
            (HousekeepingStatus::InProgress, HousekeepingStatus::Completed) => Step::Apply,
            _ => Step::Reject,
        }
    }

    fn is_terminal(self) -> bool {
        self == HousekeepingStatus::Completed
    }
}

impl HousekeepingStatus {
    pub fn next(self) -> Option<Self> {
        match self {
            HousekeepingStatus::Pending => Some(HousekeepingStatus::InProgress),
            HousekeepingStatus::InProgress => Some(HousekeepingStatus::Completed),
            HousekeepingStatus::Completed => None,
        }
    }
}

impl StatusMachine for RoomStatus {
    // Manual overrides: every status is reachable from every status.
    fn step(self, _to: Self) -> Step {
        Step::Apply
    }

    fn is_terminal(self) -> bool {
        false
    }
}

impl StatusMachine for ReadState {
    fn step(self, to: Self) -> Step {
        match (self, to) {
            (ReadState::Unread, ReadState::Read) => Step::Apply,
            (ReadState::Read, ReadState::Read) => Step::NoOp,
            _ => Step::Reject,
        }
    }

    fn is_terminal(self) -> bool {
        self == ReadState::Read
    }
}

/// Requested task status, optionally reassigning the task in the same update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTransition {
    pub status: TaskStatus,
    pub assigned_to: Option<String>,
}

impl TaskTransition {
    pub fn to(status: TaskStatus) -> Self {
        Self {
            status,
            assigned_to: None,
        }
    }

    pub fn reassign(mut self, assignee: impl Into<String>) -> Self {
        self.assigned_to = Some(assignee.into());
        self
    }
}

impl From<TaskStatus> for TaskTransition {
    fn from(status: TaskStatus) -> Self {
        TaskTransition::to(status)
    }
}

/// Changes a room accepts; the two status machines move independently
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomTransition {
    Status(RoomStatus),
    Housekeeping(HousekeepingStatus),
    /// Append to the maintenance issue log
    ReportIssue(String),
    /// Clear the maintenance issue log
    ResolveIssues,
}

impl From<RoomStatus> for RoomTransition {
    fn from(status: RoomStatus) -> Self {
        RoomTransition::Status(status)
    }
}

impl From<HousekeepingStatus> for RoomTransition {
    fn from(status: HousekeepingStatus) -> Self {
        RoomTransition::Housekeeping(status)
    }
}

fn illegal<S: std::fmt::Display>(kind: EntityKind, id: &str, from: S, to: S) -> Error {
    Error::IllegalTransition {
        kind,
        id: id.to_string(),
        from: from.to_string(),
        to: to.to_string(),
    }
}

impl Entity for Task {
    const KIND: EntityKind = EntityKind::Task;
    type Filter = TaskFilter;
    type Transition = TaskTransition;

    fn id(&self) -> &str {
        &self.id
    }

    fn state(&self) -> String {
        self.status.to_string()
    }

    fn parse_filter(name: &str) -> Result<TaskFilter> {
        TaskFilter::parse(name)
    }

    fn matches(&self, filter: &TaskFilter) -> bool {
        filter.matches(self)
    }

    fn apply(&self, request: &TaskTransition, _now: NaiveDateTime) -> Result<Option<Self>> {
        match self.status.step(request.status) {
            Step::Reject => Err(illegal(Self::KIND, &self.id, self.status, request.status)),
            Step::NoOp => Ok(None),
            Step::Apply => {
                let mut next = self.clone();
                next.status = request.status;
                if let Some(assignee) = &request.assigned_to {
                    next.assigned_to = assignee.clone();
                }
                invariants::assert_task_invariants(&next);
                Ok(Some(next))
            }
        }
    }
}

impl Entity for Room {
    const KIND: EntityKind = EntityKind::Room;
    type Filter = RoomFilter;
    type Transition = RoomTransition;

    fn id(&self) -> &str {
        &self.id
    }

    fn state(&self) -> String {
        format!("{}/{}", self.status, self.housekeeping_status)
    }

    fn parse_filter(name: &str) -> Result<RoomFilter> {
        RoomFilter::parse(name)
    }

    fn matches(&self, filter: &RoomFilter) -> bool {
        filter.matches(self)
    }

    fn apply(&self, request: &RoomTransition, now: NaiveDateTime) -> Result<Option<Self>> {
        let mut next = self.clone();
        match request {
            RoomTransition::Status(status) => match self.status.step(*status) {
                Step::Reject => return Err(illegal(Self::KIND, &self.id, self.status, *status)),
                Step::NoOp => return Ok(None),
                Step::Apply => next.status = *status,
            },
            RoomTransition::Housekeeping(status) => match self.housekeeping_status.step(*status) {
                Step::Reject => {
                    return Err(illegal(
                        Self::KIND,
                        &self.id,
                        self.housekeeping_status,
                        *status,
                    ))
                }
                Step::NoOp => return Ok(None),
                Step::Apply => {
                    next.housekeeping_status = *status;
                    if *status == HousekeepingStatus::Completed {
                        next.last_cleaned = Some(format_stamp(now));
                    }
                }
            },
            RoomTransition::ReportIssue(issue) => {
                let issue = issue.trim();
                if issue.is_empty() {
                    return Err(Error::invalid_value("maintenance issue", issue));
                }
                next.maintenance_issues.push(issue.to_string());
            }
            RoomTransition::ResolveIssues => {
                if self.maintenance_issues.is_empty() {
                    return Ok(None);
                }
                next.maintenance_issues.clear();
            }
        }
        invariants::assert_room_invariants(&next);
        Ok(Some(next))
    }
}

impl Entity for Notification {
    const KIND: EntityKind = EntityKind::Notification;
    type Filter = NotificationFilter;
    type Transition = ReadState;

    fn id(&self) -> &str {
        &self.id
    }

    fn state(&self) -> String {
        self.read_state().to_string()
    }

    fn parse_filter(name: &str) -> Result<NotificationFilter> {
        NotificationFilter::parse(name)
    }

    fn matches(&self, filter: &NotificationFilter) -> bool {
        filter.matches(self)
    }

    fn apply(&self, request: &ReadState, _now: NaiveDateTime) -> Result<Option<Self>> {
        let current = self.read_state();
        match current.step(*request) {
            Step::Reject => Err(illegal(Self::KIND, &self.id, current, *request)),
            Step::NoOp => Ok(None),
            Step::Apply => {
                let mut next = self.clone();
                next.is_read = true;
                invariants::assert_notification_invariants(&next);
                Ok(Some(next))
            }
        }
    }
}
