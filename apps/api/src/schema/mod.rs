// Schema markup generation
// Implements: form conversion, JSON-LD document building, script wrapping, export helpers.
// Generation is pure; handlers are the only place HTTP concerns appear.

pub mod document;
pub mod export;
pub mod form;
pub mod generator;
pub mod handlers;
