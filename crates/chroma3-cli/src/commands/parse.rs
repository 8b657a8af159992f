//! Parse command
//!
//! Reads one or more textual colors and prints each in canonical form,
//! packed hex and HSV.

use crate::ParseArgs;
use anyhow::Result;
use tracing::{debug, trace};

pub fn run(args: ParseArgs) -> Result<()> {
    trace!(count = args.input.len(), "parse::run");

    for text in &args.input {
        let c = super::parse_color(text)?;
        debug!(input = %text, r = c.r, g = c.g, b = c.b, "Parsed color");
        println!("{}", super::describe(c, args.precision));
    }

    Ok(())
}
