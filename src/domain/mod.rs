// Domain layer: the subscriber entity and the rule/repository ports.
// No dependencies beyond std/serde.

pub mod model;
pub mod ports;
