//! Movement domain: control intents and arena geometry.

use bevy::prelude::*;

use crate::content::ArenaDef;

/// One logical action: held this frame, and whether it went down this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub struct ActionInput {
    pub held: bool,
    pub just_pressed: bool,
}

impl ActionInput {
    /// Feed the raw button level; derives the press edge.
    pub fn set(&mut self, down: bool) {
        self.just_pressed = down && !self.held;
        self.held = down;
    }

    pub fn press(&mut self) {
        self.set(true);
    }

    pub fn release(&mut self) {
        self.set(false);
    }
}

/// Abstract per-fighter control mapping. How buttons become these is the
/// front end's business.
#[derive(Debug, Clone, Default, Reflect)]
pub struct FighterControls {
    pub move_left: ActionInput,
    pub move_right: ActionInput,
    pub attack: ActionInput,
    pub block: ActionInput,
    pub dash: ActionInput,
    pub jump: ActionInput,
}

impl FighterControls {
    /// -1, 0 or 1 from the held directions. Both held cancel out.
    pub fn horizontal(&self) -> f32 {
        let mut x = 0.0;
        if self.move_left.held {
            x -= 1.0;
        }
        if self.move_right.held {
            x += 1.0;
        }
        x
    }

    /// Drop this frame's press edges once they have been consumed.
    pub fn clear_edges(&mut self) {
        for action in [
            &mut self.move_left,
            &mut self.move_right,
            &mut self.attack,
            &mut self.block,
            &mut self.dash,
            &mut self.jump,
        ] {
            action.just_pressed = false;
        }
    }
}

/// Floor height and horizontal walls. Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub ground_y: f32,
    pub bounds_left: f32,
    pub bounds_right: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self::from(&ArenaDef::default())
    }
}

impl From<&ArenaDef> for Arena {
    fn from(def: &ArenaDef) -> Self {
        Self {
            ground_y: def.ground_y,
            bounds_left: def.bounds_left,
            bounds_right: def.bounds_right,
        }
    }
}
