//! Pet state engine: stat gauges, time decay, and care actions.

mod engine;
mod state;

pub use engine::PetEngine;
pub use state::{
    CareAction, PetState, StatDelta, DECAY_PER_MIN, DEFAULT_NAME, DEFAULT_STAT, STAT_MAX, STAT_MIN,
};
