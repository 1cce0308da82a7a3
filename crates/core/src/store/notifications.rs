//! Notification store operations

use crate::error::Result;
use crate::models::{Notification, ReadState};

use super::EntityStore;

pub type NotificationStore = EntityStore<Notification>;

impl EntityStore<Notification> {
    /// Mark one notification read; already-read is a no-op, not an error
    pub fn mark_read(&mut self, id: &str) -> Result<Notification> {
        self.transition(id, ReadState::Read)
    }

    /// Mark every notification read; returns how many were unread
    pub fn mark_all_read(&mut self) -> Result<usize> {
        self.transition_all(ReadState::Read)
    }

    pub fn unread_count(&self) -> usize {
        self.count_where(|n| !n.is_read)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::clock::system_clock;
    use crate::error::Error;
    use crate::models::{NotificationSource, NotificationType};

    fn store() -> NotificationStore {
        let mut read = Notification::new("n-3", NotificationType::Success, "Done", NotificationSource::System);
        read.is_read = true;
        NotificationStore::with_entities(
            system_clock(),
            vec![
                Notification::new("n-1", NotificationType::Urgent, "Complaint", NotificationSource::Guest),
                Notification::new("n-2", NotificationType::Warning, "Pool", NotificationSource::System),
                read,
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_unread_filter_preserves_order() {
        let mut store = store();
        let unread: Vec<_> = store.apply_filter("unread").unwrap().map(|n| n.id.clone()).collect();
        assert_eq!(unread, ["n-1", "n-2"]);

        store.mark_read("n-1").unwrap();
        let unread: Vec<_> = store.apply_filter("unread").unwrap().map(|n| n.id.clone()).collect();
        assert_eq!(unread, ["n-2"]);
    }

    #[test]
    fn test_mark_read_is_idempotent() {
        let mut store = store();
        let revision = store.revision();
        let n = store.mark_read("n-3").unwrap();
        assert!(n.is_read);
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_mark_read_unknown() {
        let mut store = store();
        assert!(matches!(store.mark_read("n-9"), Err(Error::NotFound { .. })));
    }

    #[test]
    fn test_mark_all_read_twice() {
        let mut store = store();
        assert_eq!(store.mark_all_read().unwrap(), 2);
        let once = store.snapshot();
        assert_eq!(store.mark_all_read().unwrap(), 0);
        assert_eq!(store.snapshot(), once);
        assert_eq!(store.unread_count(), 0);
    }

    #[test]
    fn test_mark_all_read_fires_once_then_never() {
        let mut store = store();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        store.subscribe(move |change| sink.borrow_mut().push(change.changed_ids.to_vec()));

        let before = store.revision();
        store.mark_all_read().unwrap();
        assert_eq!(store.revision(), before + 1);
        assert_eq!(*events.borrow(), vec![vec!["n-1".to_string(), "n-2".to_string()]]);

        store.mark_all_read().unwrap();
        assert_eq!(store.revision(), before + 1);
        assert_eq!(events.borrow().len(), 1);
    }
}
