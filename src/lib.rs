//! Fill a class announcement template with a meeting link.
//!
//! The [`core::composer::TemplateComposer`] keeps a template, a link and the
//! derived message in step, while allowing the message to be edited by hand.
//! [`ui`] puts a terminal interface around it and [`cli`] exposes both the
//! interface and a headless `render` command.

pub mod cli;
pub mod core;
pub mod ui;
pub mod utils;
