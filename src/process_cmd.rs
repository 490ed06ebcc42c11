//! Process command: apply a tapped token.

use anyhow::{Context, Result, bail};
use tracing::{error, info, info_span, warn};

use tgcal_picker::{DatePicker, Outcome};

use crate::cli::ProcessArgs;
use crate::{config, convert, render};

/// Feed one callback token to the picker and print what it leads to.
pub fn run(args: ProcessArgs) -> Result<()> {
    let _cmd = info_span!("process").entered();

    let file = config::load(args.picker.config.as_deref())?;
    let picker_cfg = convert::build_picker_config(&file, &args.picker)?;
    let picker = DatePicker::new(picker_cfg).context("failed to create picker")?;

    if !picker.is_own_token(&args.token) {
        bail!(
            "token {:?} is not addressed to calendar {}",
            args.token,
            picker.config().calendar_id()
        );
    }

    let outcome = match picker.process(&args.token) {
        Ok(outcome) => outcome,
        Err(e) => {
            if e.is_recoverable() {
                warn!(error = %e, "token rejected");
            } else {
                error!(error = %e, "picker contract violated");
            }
            return Err(e).with_context(|| format!("failed to process token {:?}", args.token));
        }
    };
    match &outcome {
        Outcome::Ignored => info!("inert button"),
        Outcome::Page(page) => info!(step = %page.step, "next page"),
        Outcome::Selected(date) => info!(%date, "date selected"),
    }

    print!("{}", render::outcome(&outcome, args.picker.format)?);
    Ok(())
}
