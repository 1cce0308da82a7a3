//! In-memory entity stores
//!
//! One [`EntityStore`] owns each collection. It is the only mutator of that
//! collection; everything else reads through its query surface or observes
//! change events.

mod notifications;
mod rooms;
pub(crate) mod snapshot;
mod tasks;
mod traits;

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::clock::SharedClock;
use crate::error::{Error, Result};
use crate::invariants;

pub use notifications::NotificationStore;
pub use rooms::RoomStore;
pub use tasks::TaskStore;
pub use traits::Entity;

/// Handle returned by [`EntityStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Delivered to observers after every successful mutation
#[derive(Debug)]
pub struct StoreChange<'a, E> {
    /// Store revision after the mutation
    pub revision: u64,
    /// Ids of the entities that changed
    pub changed_ids: &'a [String],
    /// The full post-mutation collection, in insertion order
    pub entities: &'a [E],
}

type Observer<E> = Box<dyn FnMut(&StoreChange<'_, E>)>;

/// Ordered, id-keyed collection with validated transitions and change events
pub struct EntityStore<E: Entity> {
    entities: Vec<E>,
    /// id -> position in `entities`
    index: HashMap<String, usize>,
    revision: u64,
    observers: Vec<(SubscriptionId, Observer<E>)>,
    next_subscription: u64,
    clock: SharedClock,
}

impl<E: Entity> EntityStore<E> {
    /// Create an empty store
    pub fn new(clock: SharedClock) -> Self {
        Self {
            entities: Vec::new(),
            index: HashMap::new(),
            revision: 0,
            observers: Vec::new(),
            next_subscription: 0,
            clock,
        }
    }

    /// Create a store seeded with `entities`, in order
    pub fn with_entities(clock: SharedClock, entities: Vec<E>) -> Result<Self> {
        let mut store = Self::new(clock);
        for entity in entities {
            store.insert(entity)?;
        }
        Ok(store)
    }

    /// Full collection in insertion order
    pub fn get_all(&self) -> &[E] {
        &self.entities
    }

    /// Owned copy of the collection; unaffected by later mutations
    pub fn snapshot(&self) -> Vec<E> {
        self.entities.clone()
    }

    pub fn get(&self, id: &str) -> Option<&E> {
        self.index.get(id).map(|&idx| &self.entities[idx])
    }

    /// Like [`Self::get`] but fails with `NotFound`
    pub fn lookup(&self, id: &str) -> Result<&E> {
        self.get(id).ok_or_else(|| Self::not_found(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Number of successful mutations so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Entities matching the named filter predicate
    pub fn apply_filter(&self, name: &str) -> Result<FilterView<'_, E>> {
        let filter = E::parse_filter(name)?;
        Ok(self.filter(filter))
    }

    /// Entities matching an already-parsed filter
    pub fn filter(&self, filter: E::Filter) -> FilterView<'_, E> {
        FilterView {
            items: &self.entities,
            pos: 0,
            filter,
        }
    }

    /// Count of entities matching `predicate`
    pub fn count_where(&self, predicate: impl Fn(&E) -> bool) -> usize {
        self.entities.iter().filter(|e| predicate(e)).count()
    }

    /// Add a new entity at the end of the collection
    pub fn insert(&mut self, entity: E) -> Result<()> {
        let id = entity.id().to_string();
        if self.index.contains_key(&id) {
            return Err(Error::invalid_value("duplicate id", id));
        }
        self.index.insert(id.clone(), self.entities.len());
        self.entities.push(entity);
        self.commit(vec![id]);
        Ok(())
    }

    /// Move one entity to a requested state.
    ///
    /// On failure the store is left untouched and no observer runs.
    /// A no-op request returns the current entity without a change event.
    pub fn transition(&mut self, id: &str, request: impl Into<E::Transition>) -> Result<E> {
        let request = request.into();
        let idx = *self.index.get(id).ok_or_else(|| Self::not_found(id))?;
        let now = self.clock.now();
        let current = &self.entities[idx];
        let from = current.state();

        match current.apply(&request, now) {
            Err(e) => {
                warn!(kind = %E::KIND, id, from = %from, request = ?request, error = %e, "Rejected transition");
                Err(e)
            }
            Ok(None) => {
                debug!(kind = %E::KIND, id, state = %from, "Transition is a no-op");
                Ok(current.clone())
            }
            Ok(Some(next)) => {
                let to = next.state();
                self.entities[idx] = next;
                self.commit(vec![id.to_string()]);
                debug!(kind = %E::KIND, id, from = %from, to = %to, revision = self.revision, "Transition applied");
                Ok(self.entities[idx].clone())
            }
        }
    }

    /// Apply one request to every entity.
    ///
    /// Validates the whole collection before touching any of it. Entities for
    /// which the request is a no-op are skipped. Returns how many changed.
    pub fn transition_all(&mut self, request: impl Into<E::Transition>) -> Result<usize> {
        let request = request.into();
        let now = self.clock.now();

        let mut updates = Vec::new();
        for (idx, entity) in self.entities.iter().enumerate() {
            if let Some(next) = entity.apply(&request, now)? {
                updates.push((idx, next));
            }
        }

        if updates.is_empty() {
            debug!(kind = %E::KIND, request = ?request, "Bulk transition changed nothing");
            return Ok(0);
        }

        let changed = updates.len();
        let mut ids = Vec::with_capacity(changed);
        for (idx, next) in updates {
            ids.push(next.id().to_string());
            self.entities[idx] = next;
        }
        self.commit(ids);
        debug!(kind = %E::KIND, changed, revision = self.revision, "Bulk transition applied");
        Ok(changed)
    }

    /// Register an observer; it runs synchronously after every mutation
    pub fn subscribe(&mut self, observer: impl FnMut(&StoreChange<'_, E>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    fn commit(&mut self, changed_ids: Vec<String>) {
        self.revision += 1;
        invariants::assert_store_index(&self.entities, &self.index);

        let change = StoreChange {
            revision: self.revision,
            changed_ids: &changed_ids,
            entities: &self.entities,
        };
        for (_, observer) in self.observers.iter_mut() {
            observer(&change);
        }
    }

    fn not_found(id: &str) -> Error {
        Error::NotFound {
            kind: E::KIND,
            id: id.to_string(),
        }
    }
}

impl<E: Entity + std::fmt::Debug> std::fmt::Debug for EntityStore<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityStore")
            .field("kind", &E::KIND)
            .field("entities", &self.entities)
            .field("revision", &self.revision)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Lazy view over the entities matching a filter.
///
/// Reading it never touches the store. Call [`FilterView::restart`] (or clone
/// the view before iterating) to walk it again.
pub struct FilterView<'a, E: Entity> {
    items: &'a [E],
    pos: usize,
    filter: E::Filter,
}

impl<'a, E: Entity> FilterView<'a, E> {
    pub fn restart(&mut self) {
        self.pos = 0;
    }
}

impl<'a, E: Entity> Clone for FilterView<'a, E> {
    fn clone(&self) -> Self {
        Self {
            items: self.items,
            pos: self.pos,
            filter: self.filter.clone(),
        }
    }
}

impl<'a, E: Entity> Iterator for FilterView<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<&'a E> {
        while let Some(item) = self.items.get(self.pos) {
            self.pos += 1;
            if item.matches(&self.filter) {
                return Some(item);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use chrono::NaiveDate;

    use crate::clock::FixedClock;
    use crate::models::{Task, TaskStatus, TaskType};

    fn clock() -> SharedClock {
        Rc::new(FixedClock(
            NaiveDate::from_ymd_opt(2025, 1, 16)
                .unwrap()
                .and_hms_opt(13, 0, 0)
                .unwrap(),
        ))
    }

    fn store() -> EntityStore<Task> {
        EntityStore::with_entities(
            clock(),
            vec![
                Task::new("t-1", "One", TaskType::Maintenance),
                Task::new("t-2", "Two", TaskType::Delivery).with_status(TaskStatus::InProgress),
                Task::new("t-3", "Three", TaskType::Housekeeping),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_insertion_order_preserved() {
        let store = store();
        let ids: Vec<_> = store.get_all().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["t-1", "t-2", "t-3"]);
        assert_eq!(store.revision(), 3);
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let mut store = store();
        let err = store.insert(Task::new("t-1", "Again", TaskType::Delivery)).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { .. }));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_filter_is_restartable() {
        let store = store();
        let mut view = store.apply_filter("pending").unwrap();
        let first: Vec<_> = view.by_ref().map(|t| t.id.clone()).collect();
        assert_eq!(first, ["t-1", "t-3"]);
        assert_eq!(view.next(), None);
        view.restart();
        assert_eq!(view.count(), 2);
    }

    #[test]
    fn test_unknown_filter() {
        let store = store();
        assert!(matches!(
            store.apply_filter("later"),
            Err(Error::InvalidFilter { .. })
        ));
    }

    #[test]
    fn test_transition_not_found() {
        let mut store = store();
        let err = store.transition("t-404", TaskStatus::InProgress).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
        assert_eq!(store.revision(), 3);
    }

    #[test]
    fn test_failed_transition_changes_nothing() {
        let mut store = store();
        let fired = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&fired);
        store.subscribe(move |_| *counter.borrow_mut() += 1);

        let before = store.snapshot();
        let revision = store.revision();
        assert!(store.transition("t-1", TaskStatus::Completed).is_err());
        assert_eq!(store.snapshot(), before);
        assert_eq!(store.revision(), revision);
        assert_eq!(*fired.borrow(), 0);
    }

    #[test]
    fn test_observer_sees_post_mutation_state() {
        let mut store = store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |change| {
            let status = change
                .entities
                .iter()
                .find(|t| t.id == change.changed_ids[0])
                .map(|t| t.status);
            sink.borrow_mut().push((change.revision, status));
        });

        store.transition("t-1", TaskStatus::InProgress).unwrap();
        assert_eq!(*seen.borrow(), vec![(4, Some(TaskStatus::InProgress))]);
    }

    #[test]
    fn test_snapshot_is_isolated() {
        let mut store = store();
        let old = store.snapshot();
        store.transition("t-1", TaskStatus::InProgress).unwrap();
        assert_eq!(old[0].status, TaskStatus::Pending);
        assert_eq!(store.get("t-1").unwrap().status, TaskStatus::InProgress);
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = store();
        let fired = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&fired);
        let sub = store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.transition("t-1", TaskStatus::InProgress).unwrap();
        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));
        store.transition("t-1", TaskStatus::Completed).unwrap();
        assert_eq!(*fired.borrow(), 1);
    }

    #[test]
    fn test_transition_all_validates_first() {
        let mut store = store();
        // t-1 and t-3 are pending, so completing everything must fail as a whole
        let before = store.snapshot();
        assert!(store.transition_all(TaskStatus::Completed).is_err());
        assert_eq!(store.snapshot(), before);
    }
}
