//! Fills DOCX templates from JSON contexts, turning `**bold**` markup in
//! selected fields into styled runs.

pub mod config;
pub mod error;
pub mod model;
pub mod parsers;
pub mod protocol;
pub mod services;
#[cfg(test)]
mod test_helpers;
