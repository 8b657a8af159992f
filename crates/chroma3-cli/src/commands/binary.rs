//! Encode / decode commands
//!
//! Write colors to, and read them from, a file of back-to-back 12-byte
//! records (three f32 channels, r g b).

use crate::{DecodeArgs, EncodeArgs};
use anyhow::{bail, Context, Result};
use chroma3_core::{Color3, Endian};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, info, trace};

pub fn run_encode(args: EncodeArgs) -> Result<()> {
    trace!(output = %args.output.display(), endian = %args.endian, "binary::run_encode");

    let endian = super::parse_endian(&args.endian)?;
    let colors = args
        .input
        .iter()
        .map(|s| super::parse_color(s))
        .collect::<Result<Vec<_>>>()?;

    write_colors(&args.output, &colors, endian)?;
    info!(count = colors.len(), output = %args.output.display(), "Wrote colors");
    println!("Wrote {} color(s) to {}", colors.len(), args.output.display());
    Ok(())
}

pub fn run_decode(args: DecodeArgs) -> Result<()> {
    trace!(input = %args.input.display(), endian = %args.endian, "binary::run_decode");

    let endian = super::parse_endian(&args.endian)?;
    for (i, c) in read_colors(&args.input, endian)?.into_iter().enumerate() {
        println!("{i:>4}  {}", super::describe(c, None));
    }
    Ok(())
}

/// Write `colors` back to back.
pub fn write_colors(path: &Path, colors: &[Color3], endian: Endian) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create: {}", path.display()))?;
    let mut out = BufWriter::new(file);
    for c in colors {
        c.serialize(&mut out, endian)
            .with_context(|| format!("Failed to write: {}", path.display()))?;
    }
    out.flush()
        .with_context(|| format!("Failed to write: {}", path.display()))?;
    Ok(())
}

/// Read every record in the file. The size must be a multiple of 12 bytes.
pub fn read_colors(path: &Path, endian: Endian) -> Result<Vec<Color3>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open: {}", path.display()))?;
    let len = file
        .metadata()
        .with_context(|| format!("Failed to stat: {}", path.display()))?
        .len() as usize;
    if len % Color3::SERIALIZED_SIZE != 0 {
        bail!(
            "{}: size {} is not a multiple of {} bytes",
            path.display(),
            len,
            Color3::SERIALIZED_SIZE
        );
    }

    let count = len / Color3::SERIALIZED_SIZE;
    debug!(count, ?endian, "Reading colors");
    let mut input = BufReader::new(file);
    let mut colors = Vec::with_capacity(count);
    for i in 0..count {
        let c = Color3::read_from(&mut input, endian)
            .with_context(|| format!("Failed to read record {i} of {}", path.display()))?;
        colors.push(c);
    }

    let mut tail = [0u8; 1];
    if input.read(&mut tail)? != 0 {
        bail!("{}: file grew while reading", path.display());
    }
    Ok(colors)
}
