//! Selection State Machine
//!
//! Pure transition function. Guards that need the numbered view (stale
//! ids, inert badges) live in `Dashboard`, which owns the cell.

use super::types::{Selection, Trigger};

/// Next selection for `trigger` applied to `current`.
///
/// - card body toggles
/// - marker, badge and popup jump always select (re-click never clears)
/// - filter change always clears
pub fn next(current: &Selection, trigger: &Trigger) -> Selection {
    match trigger {
        Trigger::ListCardClick(id) => {
            if current.is_selected(id) {
                Selection::Unselected
            } else {
                Selection::Selected(id.clone())
            }
        }
        Trigger::ListBadgeClick(id) | Trigger::MapMarkerClick(id) | Trigger::PopupJumpToList(id) => {
            Selection::Selected(id.clone())
        }
        Trigger::FilterChange => Selection::Unselected,
    }
}
