//! Swing domain: system modules for input and the two update cadences.

pub(crate) mod input;
pub(crate) mod swing;

pub(crate) use input::read_input;
pub(crate) use swing::{
    arm_local_transform, handle_overlaps, sync_orientation, update_frame, update_tick,
};
