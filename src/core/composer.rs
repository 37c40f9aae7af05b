//! Template/link reconciliation.
//!
//! [`TemplateComposer`] owns the template, the meeting link, and the message
//! that is shown and copied. The message is either derived from the template
//! and link or, once the user edits it directly, held verbatim until a link
//! change or an explicit reset invalidates the edit. Changing the template
//! alone never discards a manual edit.

use crate::core::constants::{DEFAULT_TEMPLATE, PLACEHOLDER_TOKEN};

/// Apply the derivation rule: substitute every placeholder with the raw link
/// when the trimmed link is non-empty, otherwise return the template as-is.
///
/// Substitution is a single literal pass; a link that itself contains the
/// placeholder is not expanded again.
pub fn derive_output(template: &str, link_value: &str) -> String {
    if link_value.trim().is_empty() {
        template.to_string()
    } else {
        template.replace(PLACEHOLDER_TOKEN, link_value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateComposer {
    template: String,
    link_value: String,
    output: String,
    is_overridden: bool,
}

impl Default for TemplateComposer {
    fn default() -> Self {
        Self::with_template(DEFAULT_TEMPLATE)
    }
}

impl TemplateComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a caller-supplied template instead of the built-in one.
    pub fn with_template(template: impl Into<String>) -> Self {
        let template = template.into();
        Self {
            output: template.clone(),
            template,
            link_value: String::new(),
            is_overridden: false,
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn link_value(&self) -> &str {
        &self.link_value
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn is_overridden(&self) -> bool {
        self.is_overridden
    }

    /// Replace the template. A manual edit of the output survives this.
    pub fn set_template(&mut self, new_template: impl Into<String>) {
        self.template = new_template.into();
        if !self.is_overridden {
            self.regenerate();
        }
    }

    /// Replace the link. Always drops a manual edit and re-derives.
    pub fn set_link_value(&mut self, new_value: impl Into<String>) {
        self.link_value = new_value.into();
        self.is_overridden = false;
        self.regenerate();
    }

    /// Set the output directly, switching to override mode.
    pub fn set_output(&mut self, new_output: impl Into<String>) {
        self.output = new_output.into();
        self.is_overridden = true;
    }

    pub fn reset_to_template(&mut self) {
        self.is_overridden = false;
        self.regenerate();
    }

    pub fn is_link_value_present(&self) -> bool {
        !self.link_value.trim().is_empty()
    }

    pub fn has_placeholder(&self) -> bool {
        self.template.contains(PLACEHOLDER_TOKEN)
    }

    /// The text handed to clipboards and other sinks. Never transformed.
    pub fn output_for_export(&self) -> &str {
        &self.output
    }

    fn regenerate(&mut self) {
        self.output = derive_output(&self.template, &self.link_value);
    }
}
