//! JSON snapshots of a store's collection

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::instrument;

use crate::clock::SharedClock;
use crate::error::Result;

use super::{Entity, EntityStore};

impl<E: Entity> EntityStore<E> {
    /// Serialize the ordered collection
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self.get_all())?)
    }

    /// Rebuild a store from [`Self::to_json`] output
    pub fn from_json(clock: SharedClock, json: &str) -> Result<Self> {
        let entities: Vec<E> = serde_json::from_str(json)?;
        Self::with_entities(clock, entities)
    }

    /// Write the collection to `path` (temp file + rename)
    #[instrument(skip(self, path), fields(kind = %E::KIND, path = %path.as_ref().display()))]
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_atomic(path.as_ref(), &self.to_json()?)
    }

    #[instrument(skip(clock, path), fields(kind = %E::KIND, path = %path.as_ref().display()))]
    pub fn load<P: AsRef<Path>>(clock: SharedClock, path: P) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        let store = Self::from_json(clock, &json)?;
        tracing::info!(count = store.len(), "Loaded entities");
        Ok(store)
    }
}

pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp = path.with_extension("json.tmp");
    let written = fs::File::create(&tmp)
        .and_then(|mut f| {
            f.write_all(contents.as_bytes())?;
            f.flush()
        })
        .and_then(|()| fs::rename(&tmp, path));

    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    use crate::clock::system_clock;
    use crate::models::{Notification, Room};
    use crate::seed;

    #[test]
    fn test_roundtrip_preserves_order_and_fields() {
        let rooms = EntityStore::<Room>::with_entities(system_clock(), seed::rooms()).unwrap();
        let json = rooms.to_json().unwrap();
        let reloaded = EntityStore::<Room>::from_json(system_clock(), &json).unwrap();
        assert_eq!(reloaded.get_all(), rooms.get_all());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notifications.json");

        let mut store =
            EntityStore::<Notification>::with_entities(system_clock(), seed::notifications()).unwrap();
        store.mark_read("notif-002").unwrap();
        store.save(&path).unwrap();

        let loaded = EntityStore::<Notification>::load(system_clock(), &path).unwrap();
        assert_eq!(loaded.get_all(), store.get_all());
        assert!(loaded.get("notif-002").unwrap().is_read);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_failed_save_removes_temp_file() {
        let temp = TempDir::new().unwrap();
        // A directory in the way makes the final rename fail
        let path = temp.path().join("rooms");
        fs::create_dir(&path).unwrap();

        let rooms = EntityStore::<Room>::with_entities(system_clock(), seed::rooms()).unwrap();
        assert!(rooms.save(&path).is_err());
        assert!(!path.with_extension("json.tmp").exists());
        assert!(path.is_dir());
    }

    #[test]
    fn test_load_rejects_duplicate_ids() {
        let json = r#"[
            {"id":"n","type":"info","title":"a","message":"","timestamp":"","isRead":false,"source":"system"},
            {"id":"n","type":"info","title":"b","message":"","timestamp":"","isRead":false,"source":"system"}
        ]"#;
        assert!(EntityStore::<Notification>::from_json(system_clock(), json).is_err());
    }
}
