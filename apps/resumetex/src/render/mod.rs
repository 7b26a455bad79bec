// LaTeX rendering: escaping, inline links, per-section blocks, template filling.
// Everything here is pure string transformation over the loaded document.

pub mod escape;
pub mod links;
pub mod sections;
pub mod template;

pub use escape::{escape, escape_opt};
pub use links::translate_links;
pub use template::{fill, render, TemplateValues, Token};
