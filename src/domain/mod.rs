// Domain layer: roster model, typed cell addressing, and the store port.

pub mod model;
pub mod ports;
