pub mod aabb;
pub mod ray;
pub mod config;
pub mod probe;
pub mod numeric;
pub mod interval;
pub mod json_parser;

pub mod prelude;
