//! Writing command results to stdout and files.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::Result;

/// Pretty-print `value` as JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_json(&mut out, value)
}

/// Pretty JSON followed by a newline.
pub fn render_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut file = io::BufWriter::new(fs::File::create(path)?);
    render_json(&mut file, value)?;
    file.flush()?;
    Ok(())
}

/// Write raw bytes to `path`, creating parent directories as needed.
pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    Ok(())
}
