pub mod clipboard;
pub mod editor;
pub mod input;
pub mod line_editor;
pub mod logging;
