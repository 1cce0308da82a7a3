//! PMS Core Library
//!
//! Entity models, status machines, stores, and the dashboard aggregator for
//! the hotel staff dashboard.

pub mod actions;
pub mod clock;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filters;
pub mod invariants;
pub mod lifecycle;
pub mod models;
pub mod seed;
pub mod store;

pub use actions::QuickAction;
pub use clock::{Clock, FixedClock, SharedClock, SystemClock};
pub use config::DashboardConfig;
pub use dashboard::{Aggregator, Dashboard, DashboardCounts, Tab, TabInfo};
pub use error::{Error, Result};
pub use filters::{NotificationFilter, RoomFilter, TaskFilter};
pub use lifecycle::{RoomTransition, StatusMachine, Step, TaskTransition};
pub use models::*;
pub use seed::SeedData;
pub use store::{
    Entity, EntityStore, FilterView, NotificationStore, RoomStore, StoreChange, SubscriptionId,
    TaskStore,
};
