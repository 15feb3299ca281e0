// Domain layer: typed records, findings and the check port. No I/O here.

pub mod expectations;
pub mod findings;
pub mod model;
pub mod ports;
