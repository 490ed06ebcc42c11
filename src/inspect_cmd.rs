//! Inspect command: decode a token without a picker.

use anyhow::{Context, Result};

use tgcal_picker::{MAX_TOKEN_LEN, Token};

use crate::cli::InspectArgs;
use crate::render;

/// Decode the token and print its fields.
pub fn run(args: InspectArgs) -> Result<()> {
    let token = Token::decode(&args.token)
        .with_context(|| format!("failed to decode token {:?}", args.token))?;
    if args.token.len() > MAX_TOKEN_LEN {
        tracing::warn!(
            len = args.token.len(),
            max = MAX_TOKEN_LEN,
            "token exceeds callback data limit"
        );
    }
    print!("{}", render::token(&token, args.format)?);
    Ok(())
}
