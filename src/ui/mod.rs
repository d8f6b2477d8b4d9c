//! UI domain: the event sink side of combat feedback.

mod feedback;
#[cfg(test)]
mod tests;

pub use feedback::{CameraShake, DamageNumber, DamageNumbers, FeedbackBanner};

use bevy::prelude::*;

use crate::ui::feedback::{collect_combat_events, decay_feedback};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraShake>()
            .init_resource::<FeedbackBanner>()
            .init_resource::<DamageNumbers>()
            .add_systems(PostUpdate, (decay_feedback, collect_combat_events).chain());
    }
}
