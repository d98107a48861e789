//! Localization sheet sync: pulls localized strings from a spreadsheet
//! feed into per-language `key=value` files and derives the character-set
//! manifests used by font tooling.

pub mod builder;
pub mod chars;
pub mod config;
pub mod normalize;
pub mod pipeline;
pub mod registry;
pub mod sheets;
pub mod table;
pub mod validate;
pub mod writer;
