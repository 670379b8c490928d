//! impactsim CLI library.
//!
//! Terminal styling and the text/JSON renderers used by the `impactsim`
//! binary.

pub mod output;
pub mod terminal;
