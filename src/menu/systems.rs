use bevy::prelude::*;

use super::entities::{HoverIntent, HoverState, MenuCatalog};

/// Drains this frame's [`HoverIntent`]s into [`HoverState`], last write wins.
///
/// The resource is only marked changed when the final value differs, so a
/// duplicate enter does not wake the flare or overlay systems.
pub fn apply_hover_intents(
    mut intents: MessageReader<HoverIntent>,
    catalog: Res<MenuCatalog>,
    mut hover: ResMut<HoverState>,
) {
    let mut next = *hover;
    for intent in intents.read() {
        match *intent {
            HoverIntent::Enter(id) => {
                if let Err(err) = next.enter(id, &catalog) {
                    warn!("ignoring hover intent: {err}");
                }
            }
            HoverIntent::Leave => {
                next.leave();
            }
        }
    }

    if hover.set_if_neq(next) {
        match next.active_entry(&catalog) {
            Some(entry) => debug!("hover -> {} {}", entry.id, entry.label),
            None => debug!("hover -> none"),
        }
    }
}
