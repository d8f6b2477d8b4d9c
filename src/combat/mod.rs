//! Combat domain: fighter state, timers, hit resolution, AI, and the bout
//! that ties them together each tick.

pub(crate) mod ai;
pub(crate) mod bout;
pub(crate) mod components;
pub(crate) mod events;
pub(crate) mod hits;
pub(crate) mod systems;
pub(crate) mod timers;

pub use ai::{AiBrain, AiIntent};
pub use bout::{Bout, Controller, TimeScale};
pub use components::{CombatTimers, Facing, Fighter, Meter};
pub use events::{BoutEndedEvent, BoutOutcome, CombatEvent, CombatEventMessage};
pub use hits::{HitKind, resolve_hit};
pub use systems::BoutControls;

use bevy::prelude::*;

use crate::combat::systems::{announce_outcome, handle_pause_toggle, tick_bout};

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BoutControls>()
            .add_message::<CombatEventMessage>()
            .add_message::<BoutEndedEvent>()
            .add_systems(
                Update,
                (
                    handle_pause_toggle,
                    tick_bout.run_if(resource_exists::<Bout>),
                    announce_outcome,
                )
                    .chain(),
            );
    }
}
