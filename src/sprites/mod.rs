//! Sprites domain: the cosmetic animation layer.
//!
//! Fighters carry an `AnimationTrack` (tag, timer, offset). Drawing is left to
//! whatever front end reads the track.

pub mod animation;
#[cfg(test)]
mod tests;

pub use animation::*;
