//! Movement domain: system modules for input, sensing and locomotion updates.

pub(crate) mod animation;
pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use animation::update_animation_state;
pub(crate) use collisions::detect_surfaces;
pub(crate) use input::{consume_input_edges, read_input};
pub(crate) use movement::{apply_locomotion, freeze_locked_bodies, release_unlocked_bodies};
