//! Build command: render the first page of a picker.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use tgcal_picker::DatePicker;

use crate::cli::BuildArgs;
use crate::{config, convert, render};

/// Render the initial keyboard and print it.
pub fn run(args: BuildArgs) -> Result<()> {
    let _cmd = info_span!("build").entered();

    let file = config::load(args.picker.config.as_deref())?;
    let picker_cfg = convert::build_picker_config(&file, &args.picker)?;
    let picker = DatePicker::new(picker_cfg).context("failed to create picker")?;

    let step = args.step.map(convert::step_from_arg);
    let page = picker.build(step).context("failed to render first page")?;
    info!(
        calendar_id = picker.config().calendar_id(),
        system = %picker.config().calendar_system(),
        step = %page.step,
        rows = page.keyboard.rows().len(),
        "rendered page"
    );

    print!("{}", render::page(&page, args.picker.format)?);
    Ok(())
}
