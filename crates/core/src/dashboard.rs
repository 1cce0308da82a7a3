//! Dashboard controller and aggregator
//!
//! The [`Dashboard`] owns the three stores. The [`Aggregator`] derives the
//! header counters from them and holds the active tab. It only reads the
//! stores; the unread badge is pushed to it by a notification store
//! subscription so it is current as soon as a mutation returns.

use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::clock::SharedClock;
use crate::config::DashboardConfig;
use crate::error::{Error, Result};
use crate::filters::{NotificationFilter, RoomFilter, TaskFilter};
use crate::models::{Notification, RelatedKind, Room, Task, TaskStatus};
use crate::seed::SeedData;
use crate::store::{FilterView, NotificationStore, RoomStore, SubscriptionId, TaskStore};

/// Top-level tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Tasks,
    Rooms,
    Notifications,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Tasks, Tab::Rooms, Tab::Notifications];

    pub fn id(&self) -> &'static str {
        match self {
            Tab::Tasks => "tasks",
            Tab::Rooms => "rooms",
            Tab::Notifications => "notifications",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Tab::Tasks => "Tasks",
            Tab::Rooms => "Rooms",
            Tab::Notifications => "Alerts",
        }
    }
}

impl FromStr for Tab {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| Error::InvalidTab(s.to_string()))
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Header counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardCounts {
    pub pending: usize,
    pub completed_today: usize,
    pub urgent: usize,
    pub unread: usize,
}

/// A tab as rendered in the navigation bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabInfo {
    pub tab: Tab,
    pub name: &'static str,
    pub active: bool,
    /// Only present when there is something to show
    pub badge: Option<usize>,
}

/// Derived counters plus the active tab
pub struct Aggregator {
    unread: Rc<Cell<usize>>,
    active_tab: Tab,
    subscription: SubscriptionId,
}

impl Aggregator {
    /// Subscribe to `notifications` so the unread badge follows every change
    pub fn attach(notifications: &mut NotificationStore, active_tab: Tab) -> Self {
        let unread = Rc::new(Cell::new(notifications.unread_count()));
        let badge = Rc::clone(&unread);
        let subscription = notifications.subscribe(move |change| {
            let count = change.entities.iter().filter(|n| !n.is_read).count();
            tracing::trace!(revision = change.revision, unread = count, "Unread badge updated");
            badge.set(count);
        });

        Self {
            unread,
            active_tab,
            subscription,
        }
    }

    /// Stop observing; the badge freezes at its last value
    pub fn detach(&self, notifications: &mut NotificationStore) -> bool {
        notifications.unsubscribe(self.subscription)
    }

    pub fn unread_count(&self) -> usize {
        self.unread.get()
    }

    pub fn pending_task_count(&self, tasks: &TaskStore) -> usize {
        tasks.count_with_status(TaskStatus::Pending)
    }

    /// The board covers one shift, so every completed task counts as today's
    pub fn completed_today_count(&self, tasks: &TaskStore) -> usize {
        tasks.count_with_status(TaskStatus::Completed)
    }

    /// Urgent-priority tasks plus urgent notifications, regardless of status or read state
    pub fn urgent_count(&self, tasks: &TaskStore, notifications: &NotificationStore) -> usize {
        tasks.count_where(Task::is_urgent) + notifications.count_where(Notification::is_urgent)
    }

    pub fn counts(&self, tasks: &TaskStore, notifications: &NotificationStore) -> DashboardCounts {
        DashboardCounts {
            pending: self.pending_task_count(tasks),
            completed_today: self.completed_today_count(tasks),
            urgent: self.urgent_count(tasks, notifications),
            unread: self.unread_count(),
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn set_active_tab(&mut self, id: &str) -> Result<Tab> {
        let tab = id.parse::<Tab>()?;
        self.active_tab = tab;
        tracing::debug!(tab = tab.id(), "Active tab changed");
        Ok(tab)
    }
}

/// Selected filter per tab, kept with its parsed form
struct ActiveFilters {
    task: (String, TaskFilter),
    room: (String, RoomFilter),
    notification: (String, NotificationFilter),
}

impl ActiveFilters {
    fn from_config(config: &DashboardConfig) -> Result<Self> {
        Ok(Self {
            task: named(TaskFilter::parse(&config.task_filter)?),
            room: named(RoomFilter::parse(&config.room_filter)?),
            notification: named(NotificationFilter::parse(&config.notification_filter)?),
        })
    }
}

/// Pair a parsed filter with its canonical name
fn named<F: std::fmt::Display>(filter: F) -> (String, F) {
    (filter.to_string(), filter)
}

/// The staff dashboard: three stores, the aggregator, and per-tab filters
pub struct Dashboard {
    tasks: TaskStore,
    rooms: RoomStore,
    notifications: NotificationStore,
    aggregator: Aggregator,
    filters: ActiveFilters,
    clock: SharedClock,
}

impl Dashboard {
    /// Build from explicit data
    pub fn new(data: SeedData, config: &DashboardConfig, clock: SharedClock) -> Result<Self> {
        let tasks = TaskStore::with_entities(Rc::clone(&clock), data.tasks)?;
        let rooms = RoomStore::with_entities(Rc::clone(&clock), data.rooms)?;
        let mut notifications = NotificationStore::with_entities(Rc::clone(&clock), data.notifications)?;

        let tab = config.default_tab.parse::<Tab>()?;
        let aggregator = Aggregator::attach(&mut notifications, tab);
        let filters = ActiveFilters::from_config(config)?;

        tracing::info!(
            tasks = tasks.len(),
            rooms = rooms.len(),
            notifications = notifications.len(),
            tab = tab.id(),
            "Dashboard ready"
        );

        Ok(Self {
            tasks,
            rooms,
            notifications,
            aggregator,
            filters,
            clock,
        })
    }

    /// Built-in shift data with default settings
    pub fn seeded(clock: SharedClock) -> Result<Self> {
        Self::new(SeedData::builtin(), &DashboardConfig::default(), clock)
    }

    /// Load the configured snapshot, or the built-in data if none is set
    pub fn from_config(config: &DashboardConfig, clock: SharedClock) -> Result<Self> {
        let data = match &config.seed_path {
            Some(path) => SeedData::load(path)?,
            None => SeedData::builtin(),
        };
        Self::new(data, config, clock)
    }

    pub fn tasks(&self) -> &TaskStore {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut TaskStore {
        &mut self.tasks
    }

    pub fn rooms(&self) -> &RoomStore {
        &self.rooms
    }

    pub fn rooms_mut(&mut self) -> &mut RoomStore {
        &mut self.rooms
    }

    pub fn notifications(&self) -> &NotificationStore {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationStore {
        &mut self.notifications
    }

    pub fn aggregator(&self) -> &Aggregator {
        &self.aggregator
    }

    pub fn counts(&self) -> DashboardCounts {
        self.aggregator.counts(&self.tasks, &self.notifications)
    }

    pub fn unread_count(&self) -> usize {
        self.aggregator.unread_count()
    }

    pub fn pending_task_count(&self) -> usize {
        self.aggregator.pending_task_count(&self.tasks)
    }

    pub fn completed_today_count(&self) -> usize {
        self.aggregator.completed_today_count(&self.tasks)
    }

    pub fn urgent_count(&self) -> usize {
        self.aggregator.urgent_count(&self.tasks, &self.notifications)
    }

    pub fn active_tab(&self) -> Tab {
        self.aggregator.active_tab()
    }

    pub fn set_active_tab(&mut self, id: &str) -> Result<Tab> {
        self.aggregator.set_active_tab(id)
    }

    /// Navigation bar entries; the alerts tab carries the unread badge
    pub fn tabs(&self) -> Vec<TabInfo> {
        let unread = self.unread_count();
        Tab::ALL
            .into_iter()
            .map(|tab| TabInfo {
                tab,
                name: tab.display_name(),
                active: tab == self.active_tab(),
                badge: (tab == Tab::Notifications && unread > 0).then_some(unread),
            })
            .collect()
    }

    pub fn active_filter(&self, tab: Tab) -> &str {
        match tab {
            Tab::Tasks => &self.filters.task.0,
            Tab::Rooms => &self.filters.room.0,
            Tab::Notifications => &self.filters.notification.0,
        }
    }

    /// Select the filter for a tab; an unknown name leaves the old one in place
    pub fn set_filter(&mut self, tab: Tab, name: &str) -> Result<()> {
        match tab {
            Tab::Tasks => self.filters.task = named(TaskFilter::parse(name)?),
            Tab::Rooms => self.filters.room = named(RoomFilter::parse(name)?),
            Tab::Notifications => self.filters.notification = named(NotificationFilter::parse(name)?),
        }
        tracing::debug!(tab = tab.id(), filter = self.active_filter(tab), "Filter changed");
        Ok(())
    }

    pub fn visible_tasks(&self) -> FilterView<'_, Task> {
        self.tasks.filter(self.filters.task.1)
    }

    pub fn visible_rooms(&self) -> FilterView<'_, Room> {
        self.rooms.filter(self.filters.room.1)
    }

    pub fn visible_notifications(&self) -> FilterView<'_, Notification> {
        self.notifications.filter(self.filters.notification.1)
    }

    /// Whether a notification's related entity is present in a store.
    ///
    /// Guests and system references are not tracked here and never resolve.
    pub fn related_entity_exists(&self, notification: &Notification) -> bool {
        match &notification.related_entity {
            Some(related) => match related.kind {
                RelatedKind::Room => self.rooms.contains(&related.id),
                RelatedKind::Task => self.tasks.contains(&related.id),
                RelatedKind::Guest | RelatedKind::System => false,
            },
            None => false,
        }
    }

    /// Current wall-clock time, for the header
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Owned copy of all three collections
    pub fn snapshot(&self) -> SeedData {
        SeedData {
            tasks: self.tasks.snapshot(),
            rooms: self.rooms.snapshot(),
            notifications: self.notifications.snapshot(),
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.snapshot().save(path)
    }
}
