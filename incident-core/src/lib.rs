//! Attack Monitor Core - Incident numbering & selection engine
//!
//! Keeps one selected incident consistent across the map and the list.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       DASHBOARD                              │
//! ├──────────────────────────────────────────────────────────────┤
//! │  records ──► filter ──► numbering ──┬──► MapBinding          │
//! │                                     └──► ListBinding         │
//! │                                            │      │          │
//! │        ┌───────────────────────────────────┘      │          │
//! │        ▼                                          ▼          │
//! │  ┌────────────┐   commit   ┌──────────────┐  ┌──────────┐    │
//! │  │ Selection  │ ─────────► │ EffectQueue  │  │  Focus   │    │
//! │  │  Machine   │            │ (drained)    │  │ Registry │    │
//! │  └────────────┘            └──────────────┘  └──────────┘    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing in this crate performs I/O. The host feeds records in and
//! carries the drained effects out to whatever renders them.

pub mod constants;
pub mod error;

pub mod incident;
pub mod filter;
pub mod numbering;
pub mod selection;
pub mod effects;
pub mod focus;
pub mod map;
pub mod list;
pub mod threat;
pub mod dashboard;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{CoreError, CoreResult};

pub use incident::{Classification, IncidentId, IncidentRecord, LatLng, Recency, Severity};
pub use filter::{SeverityCounts, SeverityFilter};
pub use numbering::{NumberedIncident, NumberedView};
pub use selection::{Origin, Selection, Trigger};
pub use effects::{Effect, EffectQueue};
pub use focus::{FocusHandle, FocusRegistry};
pub use map::{MapBinding, MapFrame, MapSettings, Viewport};
pub use list::{ListBinding, ListFrame};
pub use threat::{ThreatBundle, ThreatWindow, Trend};
pub use dashboard::{Dashboard, DashboardFrame, DashboardState, Outcome, Transition, UiEvent};
