//! Velocity field and flow map storage.

mod flow;
mod velocity;

pub use flow::FlowMap;
pub use velocity::{FieldError, VelocityField};
