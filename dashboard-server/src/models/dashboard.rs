//! Dashboard request / response models
//!
//! The server keeps no sessions: the client sends its `DashboardState`
//! with every interaction and gets the next one back.

use serde::{Deserialize, Serialize};
use validator::Validate;

use incident_core::{
    DashboardFrame, DashboardState, Effect, IncidentId, LatLng, Outcome, SeverityFilter, UiEvent,
    Viewport,
};

use crate::{AppError, AppResult};

#[derive(Debug, Deserialize, Default)]
pub struct ViewRequest {
    #[serde(default)]
    pub state: DashboardState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    CardClick,
    BadgeClick,
    MarkerClick,
    JumpToList,
    PopupClose,
    ViewportMoved,
    SetFilter,
}

#[derive(Debug, Deserialize, Validate)]
pub struct EventRequest {
    #[serde(default)]
    pub state: DashboardState,

    pub action: EventAction,

    #[validate(length(min = 1, max = 512))]
    pub incident_id: Option<String>,

    pub severity: Option<String>,

    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: Option<f64>,

    #[validate(range(min = 0.0, max = 19.0))]
    pub zoom: Option<f64>,
}

impl EventRequest {
    /// Turn the flat request into a core event
    pub fn to_event(&self) -> AppResult<UiEvent> {
        let event = match self.action {
            EventAction::CardClick => UiEvent::CardClicked(self.incident()?),
            EventAction::BadgeClick => UiEvent::BadgeClicked(self.incident()?),
            EventAction::MarkerClick => UiEvent::MarkerClicked(self.incident()?),
            EventAction::JumpToList => UiEvent::JumpToList(self.incident()?),
            EventAction::PopupClose => UiEvent::PopupClosed,
            EventAction::ViewportMoved => {
                let (Some(lat), Some(lng), Some(zoom)) = (self.lat, self.lng, self.zoom) else {
                    return Err(AppError::ValidationError(
                        "viewport_moved requires lat, lng and zoom".to_string(),
                    ));
                };
                UiEvent::ViewportMoved(Viewport::new(LatLng::new(lat, lng), zoom)?)
            }
            EventAction::SetFilter => {
                let filter: SeverityFilter = self.severity.as_deref().unwrap_or("all").parse()?;
                UiEvent::FilterSelected(filter)
            }
        };
        Ok(event)
    }

    fn incident(&self) -> AppResult<IncidentId> {
        self.incident_id
            .as_deref()
            .map(IncidentId::from)
            .ok_or_else(|| AppError::ValidationError("incident_id is required".to_string()))
    }
}

#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub state: DashboardState,
    pub outcome: Outcome,
    pub effects: Vec<Effect>,
    pub frame: DashboardFrame,
}

#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub state: DashboardState,
    pub frame: DashboardFrame,
}
