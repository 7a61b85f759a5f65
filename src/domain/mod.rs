// Domain layer: course model, grade table and ports. No I/O here.

pub mod grade;
pub mod model;
pub mod ports;
