// Domain layer: the identifier model and the randomness port. No I/O.

pub mod model;
pub mod ports;
