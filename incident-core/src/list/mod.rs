//! List View Binding
//!
//! One card per numbered incident, mappable or not. The selected card is
//! emphasized; a map-originated selection scrolls it to the center.
//!
//! ## Scroll rules
//! - marker click / popup jump: scroll the list to the card
//! - badge click: scroll the page up to the map
//! - card body: highlight only, the card is already in view

pub mod card;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::effects::{Effect, EffectQueue};
use crate::filter::SeverityFilter;
use crate::focus::FocusRegistry;
use crate::numbering::NumberedView;
use crate::selection::{Origin, Selection};

pub use card::CardView;

pub const NO_INCIDENTS_MESSAGE: &str =
    "No attack-related articles detected. Run the pipeline to fetch and classify news.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListFrame {
    pub cards: Vec<CardView>,
    pub empty_message: Option<String>,
}

#[derive(Debug, Default)]
pub struct ListBinding {
    registry: FocusRegistry,
}

impl ListBinding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &FocusRegistry {
        &self.registry
    }

    /// Mount one row per numbered incident, unmount the rest
    pub fn mount_rows(&mut self, view: &NumberedView) {
        let (mounted, unmounted) = self.registry.sync(view.numbered().iter().map(|n| n.id()));
        log::trace!("List rows: +{} -{}", mounted, unmounted);
    }

    pub fn on_selection_change(
        &mut self,
        view: &NumberedView,
        current: &Selection,
        origin: Origin,
        effects: &mut EffectQueue,
    ) {
        let Some(id) = current.id() else {
            return;
        };

        match origin {
            Origin::MapMarker | Origin::PopupJump => {
                let Some(number) = view.number_of(id) else {
                    return;
                };
                match self.registry.handle(id) {
                    Some(handle) => effects.push(Effect::ScrollListToCard {
                        id: id.clone(),
                        number,
                        handle: handle.clone(),
                    }),
                    None => log::debug!("Card #{} not mounted, scroll skipped", number),
                }
            }
            Origin::ListBadge => {
                if view.is_mappable(id) {
                    effects.push(Effect::ScrollPageToMap);
                }
            }
            Origin::ListCard | Origin::FilterChange => {}
        }
    }

    pub fn render(
        &self,
        view: &NumberedView,
        selection: &Selection,
        total_records: usize,
        now: DateTime<Utc>,
    ) -> ListFrame {
        let cards: Vec<CardView> = view
            .numbered()
            .iter()
            .map(|n| {
                CardView::build(
                    n,
                    selection.is_selected(n.id()),
                    self.registry.handle(n.id()).cloned(),
                    now,
                )
            })
            .collect();

        let empty_message = if !cards.is_empty() {
            None
        } else if total_records == 0 || view.filter() == SeverityFilter::All {
            Some(NO_INCIDENTS_MESSAGE.to_string())
        } else {
            Some(format!("No {}-severity incidents found.", view.filter()))
        };

        ListFrame { cards, empty_message }
    }
}
