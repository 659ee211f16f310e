//! Roadmap outline: one shared parser feeding two renderers (the JSON tree
//! returned to the frontend and the downloadable HTML report).

pub mod export;
pub mod parser;

pub use parser::{parse, Day, Resource, Roadmap, Week};
