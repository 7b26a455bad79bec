//! Render a structured YAML resume into a LaTeX document and compile it.
//!
//! Flow: [`loader`] → [`render::sections`] → [`render::template`] →
//! [`pipeline`] writes `<First>_<Last>.tex` → [`compile`] runs the LaTeX
//! compiler.

pub mod compile;
pub mod config;
pub mod errors;
pub mod loader;
pub mod models;
pub mod pipeline;
pub mod render;
