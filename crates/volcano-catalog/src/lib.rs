//! Volcano catalog for the Volcano World app.
//!
//! The catalog is read-mostly content: a fixed list of volcanoes, plus the
//! player state attached to it: which entries were viewed, which are
//! favorites, and any photos the player added. It is the [`ProgressSource`]
//! the rewards engine reads its view-driven achievements from.
//!
//! # Modules
//!
//! - [`catalog`] -- The persisted [`VolcanoCatalog`]
//! - [`starting_catalog`] -- The bundled volcano entries
//! - [`error`] -- Error types
//!
//! [`ProgressSource`]: volcano_types::ProgressSource

pub mod catalog;
pub mod error;
pub mod starting_catalog;

pub use catalog::{KEY_VIEWED_IDS, KEY_VOLCANOES, VolcanoCatalog};
pub use error::CatalogError;
pub use starting_catalog::starting_catalog;
