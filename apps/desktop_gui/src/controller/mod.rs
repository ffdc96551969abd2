//! Controller layer: UI events and command orchestration toward the backend worker.

pub mod events;
pub mod orchestration;
