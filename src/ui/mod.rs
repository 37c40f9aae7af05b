//! Terminal UI layer for the interactive composer.
//!
//! Key submodules include:
//! - [`compose_loop`]: terminal lifecycle, key dispatch and the event loop.
//! - [`renderer`]: frame layout for the link field, panels and editor dialog.
//! - [`theme`]: built-in colour schemes.
//!
//! Ownership boundary: this layer presents and captures interaction state, while
//! [`crate::core`] owns the composer and its rules.

pub mod compose_loop;
pub mod renderer;
pub mod theme;
