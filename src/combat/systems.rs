//! Combat domain: Bevy systems that drive the bout and publish its events.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::bout::Bout;
use crate::combat::events::{BoutEndedEvent, CombatEventMessage};
use crate::movement::{ActionInput, FighterControls};

/// Latest control state for both slots, written by whatever front end is
/// attached. Press edges are cleared once a tick consumes them.
#[derive(Resource, Debug, Default)]
pub struct BoutControls {
    pub fighters: [FighterControls; 2],
    pub pause: ActionInput,
}

/// Pause is read even while the bout is frozen.
pub(crate) fn handle_pause_toggle(mut controls: ResMut<BoutControls>, bout: Option<ResMut<Bout>>) {
    if !controls.pause.just_pressed {
        return;
    }
    controls.pause.just_pressed = false;

    if let Some(mut bout) = bout {
        bout.toggle_pause();
    }
}

pub(crate) fn tick_bout(
    time: Res<Time>,
    mut bout: ResMut<Bout>,
    mut controls: ResMut<BoutControls>,
    mut combat_events: MessageWriter<CombatEventMessage>,
    mut ended_events: MessageWriter<BoutEndedEvent>,
) {
    let was_over = bout.outcome.is_some();

    let emitted = bout.tick(time.delta_secs(), &controls.fighters);
    for fighter_controls in &mut controls.fighters {
        fighter_controls.clear_edges();
    }

    for event in emitted {
        combat_events.write(CombatEventMessage(event));
    }

    if was_over {
        return;
    }
    if let Some(outcome) = bout.outcome {
        ended_events.write(BoutEndedEvent {
            outcome,
            winner: bout.winner_name(outcome).to_string(),
        });
    }
}

pub(crate) fn announce_outcome(mut ended_events: MessageReader<BoutEndedEvent>) {
    for event in ended_events.read() {
        info!("{:?}! {} takes the bout", event.outcome, event.winner);
    }
}
