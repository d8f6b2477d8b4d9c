//! Combat domain: AI decision policy.

pub(crate) mod brain;

pub use brain::{AiBrain, AiIntent, aggression_multiplier, drive_ai};
