//! Movement domain: gravity and position integration.

use crate::combat::Fighter;
use crate::sprites::AnimationState;

/// Gravity while airborne, then `position += velocity * dt`.
pub fn integrate(fighter: &mut Fighter, dt: f32) {
    if !fighter.grounded {
        let was_rising = fighter.velocity.y < 0.0;
        fighter.velocity.y += fighter.stats.gravity * dt;

        if fighter.animation.is(AnimationState::Jumping) && was_rising && fighter.velocity.y >= 0.0
        {
            fighter.animation.set_state(AnimationState::Falling);
        }
    }

    fighter.position += fighter.velocity * dt;
}
