//! Domain logic: the template composer, session state and configuration.
//!
//! Nothing here touches the terminal. [`composer`] is the heart of the crate;
//! [`app`] wraps it with the interactive session state the UI draws.

pub mod app;
pub mod composer;
pub mod config;
pub mod constants;
