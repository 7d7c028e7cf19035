//! Numbering Assigner
//!
//! Display numbers are assigned after filtering, contiguous from 1. The
//! mappable subset is cut from the numbered list afterwards so a marker
//! always carries the same number as its list card.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::filter::{self, SeverityFilter};
use crate::incident::{IncidentId, IncidentRecord};

/// An incident paired with its 1-based display number
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumberedIncident {
    pub number: usize,
    #[serde(flatten)]
    pub record: Arc<IncidentRecord>,
}

impl NumberedIncident {
    pub fn id(&self) -> &IncidentId {
        &self.record.id
    }

    /// Has coordinates and a positive attack classification
    pub fn is_mappable(&self) -> bool {
        self.record.has_coordinates() && self.record.is_attack()
    }
}

/// Number every incident in `filtered`, in its current order
pub fn assign(filtered: Vec<Arc<IncidentRecord>>) -> Vec<NumberedIncident> {
    filtered
        .into_iter()
        .enumerate()
        .map(|(i, record)| NumberedIncident { number: i + 1, record })
        .collect()
}

/// Numbered incidents that can be drawn on the map, numbers untouched
pub fn mappable(numbered: &[NumberedIncident]) -> Vec<NumberedIncident> {
    numbered.iter().filter(|n| n.is_mappable()).cloned().collect()
}

/// Both derived sequences for one (records, filter) pass
#[derive(Debug, Clone, Default)]
pub struct NumberedView {
    filter: SeverityFilter,
    numbered: Vec<NumberedIncident>,
    mappable: Vec<NumberedIncident>,
    positions: HashMap<IncidentId, usize>,
}

impl NumberedView {
    pub fn derive(records: &[Arc<IncidentRecord>], filter: SeverityFilter) -> Self {
        let numbered = assign(filter::apply(records, filter));
        let mappable = mappable(&numbered);

        let mut positions = HashMap::with_capacity(numbered.len());
        for (pos, n) in numbered.iter().enumerate() {
            match positions.entry(n.id().clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(pos);
                }
                Entry::Occupied(_) => {
                    log::warn!("Duplicate incident id {} in numbering pass, first wins", n.id());
                }
            }
        }

        log::debug!(
            "Numbered {} incidents ({} mappable) under filter '{}'",
            numbered.len(),
            mappable.len(),
            filter
        );

        Self {
            filter,
            numbered,
            mappable,
            positions,
        }
    }

    pub fn filter(&self) -> SeverityFilter {
        self.filter
    }

    pub fn numbered(&self) -> &[NumberedIncident] {
        &self.numbered
    }

    pub fn mappable(&self) -> &[NumberedIncident] {
        &self.mappable
    }

    pub fn len(&self) -> usize {
        self.numbered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbered.is_empty()
    }

    /// Lookup by id. A stale id is simply "not found".
    pub fn get(&self, id: &IncidentId) -> Option<&NumberedIncident> {
        self.positions.get(id).and_then(|&pos| self.numbered.get(pos))
    }

    pub fn contains(&self, id: &IncidentId) -> bool {
        self.positions.contains_key(id)
    }

    pub fn number_of(&self, id: &IncidentId) -> Option<usize> {
        self.get(id).map(|n| n.number)
    }

    pub fn is_mappable(&self, id: &IncidentId) -> bool {
        self.get(id).map_or(false, NumberedIncident::is_mappable)
    }
}
