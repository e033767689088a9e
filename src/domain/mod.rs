// Domain layer: value types, fixtures and ports. Nothing here touches the runtime.

pub mod fixtures;
pub mod model;
pub mod ports;
