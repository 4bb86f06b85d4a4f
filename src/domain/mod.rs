// Domain layer: feed models, ports (interfaces) and the embedded seed dataset.

pub mod model;
pub mod ports;
pub mod seed;
