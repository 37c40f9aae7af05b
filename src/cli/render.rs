//! Headless rendering for scripts and shell pipelines.

use std::error::Error;
use std::io::Write;

use tracing::info;

use crate::core::app::{COPY_FAILURE_MESSAGE, COPY_SUCCESS_MESSAGE, MISSING_LINK_MESSAGE};
use crate::core::composer::TemplateComposer;
use crate::utils::clipboard::{export_output, ClipboardSink};

/// Write the message to `out` and optionally copy it. Returns the process
/// exit code: non-zero when a requested copy was refused or failed.
pub fn run_render<W: Write>(
    composer: &TemplateComposer,
    copy: bool,
    clipboard: &mut dyn ClipboardSink,
    out: &mut W,
) -> Result<i32, Box<dyn Error>> {
    writeln!(out, "{}", composer.output())?;
    out.flush()?;

    if !copy {
        return Ok(0);
    }
    if !composer.is_link_value_present() {
        eprintln!("⚠️  {MISSING_LINK_MESSAGE} (use --link)");
        return Ok(1);
    }
    if export_output(composer, clipboard) {
        info!("rendered message copied");
        eprintln!("✅ {COPY_SUCCESS_MESSAGE}");
        Ok(0)
    } else {
        eprintln!("❌ {COPY_FAILURE_MESSAGE}");
        Ok(1)
    }
}
