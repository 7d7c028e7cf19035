//! Effect Queue
//!
//! Side effects emitted by a committed transition. The host drains the
//! queue once per interaction and fires each effect without waiting on it.

use serde::Serialize;

use crate::focus::FocusHandle;
use crate::incident::{IncidentId, LatLng};

/// One fire-and-forget UI side effect
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    /// Animate the map to a marker. A newer fly-to replaces a running one.
    FlyTo {
        id: IncidentId,
        center: LatLng,
        zoom: f64,
        duration_ms: u32,
    },
    /// Scroll the list so the card sits in the viewport center
    ScrollListToCard {
        id: IncidentId,
        number: usize,
        handle: FocusHandle,
    },
    /// Scroll the page so the map is visible
    ScrollPageToMap,
    OpenPopup {
        id: IncidentId,
    },
    ClosePopup,
}

#[derive(Debug, Default)]
pub struct EffectQueue {
    pending: Vec<Effect>,
}

impl EffectQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, effect: Effect) {
        log::trace!("Effect queued: {:?}", effect);
        self.pending.push(effect);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take everything queued so far, in emission order
    pub fn drain(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.pending)
    }
}
