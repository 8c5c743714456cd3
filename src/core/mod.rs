//! Core building blocks: tile coordinate arithmetic, the office table,
//! render parameters, and the compositing/styling/marker pipeline. These are
//! internal primitives consumed by the high-level `api` module.
pub mod geo;
pub mod offices;
pub mod params;
pub mod processing;
