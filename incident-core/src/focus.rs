//! Focus Registry
//!
//! Maps incident id -> opaque focus handle for each mounted list card.
//! Rows register on mount and are removed on unmount; the registry is
//! consulted only while a transition is being committed.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::incident::IncidentId;

/// Opaque scroll anchor of a mounted card
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FocusHandle(String);

impl FocusHandle {
    /// Anchor for a card. `[A-Za-z0-9_]` pass through, every other byte
    /// becomes `-xx` (lowercase hex), so distinct ids never collide.
    pub fn for_incident(id: &IncidentId) -> Self {
        let mut anchor = String::from("incident-card-");
        for byte in id.as_str().bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'_' {
                anchor.push(char::from(byte));
            } else {
                anchor.push_str(&format!("-{:02x}", byte));
            }
        }
        Self(anchor)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Default)]
pub struct FocusRegistry {
    handles: HashMap<IncidentId, FocusHandle>,
}

impl FocusRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self, id: &IncidentId) -> FocusHandle {
        self.handles
            .entry(id.clone())
            .or_insert_with(|| FocusHandle::for_incident(id))
            .clone()
    }

    pub fn unmount(&mut self, id: &IncidentId) -> Option<FocusHandle> {
        self.handles.remove(id)
    }

    /// Mount exactly `ids`, unmounting everything else.
    ///
    /// Returns (mounted, unmounted) counts.
    pub fn sync<'a>(&mut self, ids: impl IntoIterator<Item = &'a IncidentId>) -> (usize, usize) {
        let wanted: HashSet<&IncidentId> = ids.into_iter().collect();

        let stale: Vec<IncidentId> = self
            .handles
            .keys()
            .filter(|id| !wanted.contains(id))
            .cloned()
            .collect();
        for id in &stale {
            self.handles.remove(id);
        }

        let mut mounted = 0;
        for id in wanted {
            if !self.handles.contains_key(id) {
                self.mount(id);
                mounted += 1;
            }
        }
        (mounted, stale.len())
    }

    pub fn handle(&self, id: &IncidentId) -> Option<&FocusHandle> {
        self.handles.get(id)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_escapes_id() {
        let h = FocusHandle::for_incident(&IncidentId::from("a/b c_1"));
        assert_eq!(h.as_str(), "incident-card-a-2fb-20c_1");
    }

    #[test]
    fn test_similar_ids_get_distinct_handles() {
        let slash = FocusHandle::for_incident(&IncidentId::from("a/b"));
        let dash = FocusHandle::for_incident(&IncidentId::from("a-b"));
        assert_ne!(slash, dash);
        assert_eq!(dash.as_str(), "incident-card-a-2db");
    }

    #[test]
    fn test_mount_unmount() {
        let mut reg = FocusRegistry::new();
        let a = IncidentId::from("a");
        let h = reg.mount(&a);
        assert_eq!(reg.handle(&a), Some(&h));
        assert_eq!(reg.unmount(&a), Some(h));
        assert!(reg.handle(&a).is_none());
    }

    #[test]
    fn test_sync_replaces_rows() {
        let mut reg = FocusRegistry::new();
        let (a, b, c) = (IncidentId::from("a"), IncidentId::from("b"), IncidentId::from("c"));

        assert_eq!(reg.sync([&a, &b]), (2, 0));
        assert_eq!(reg.sync([&b, &c]), (1, 1));
        assert!(reg.handle(&a).is_none());
        assert!(reg.handle(&b).is_some());
        assert_eq!(reg.len(), 2);
    }
}
