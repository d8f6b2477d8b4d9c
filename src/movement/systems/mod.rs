//! Movement domain: the movement and physics step.

pub(crate) mod collisions;
pub(crate) mod controls;
pub(crate) mod physics;

pub use collisions::{LANDING_SPEED_THRESHOLD, clamp_to_bounds, resolve_ground};
pub use controls::apply_controls;
pub use physics::integrate;
