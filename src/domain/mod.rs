// Domain layer: zone request model and the ports the generator depends on.

pub mod model;
pub mod ports;
