// crates/bibleviz-core/src/loader/common_io.rs
use crate::error::{Result, VizError};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

pub(crate) fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

#[cfg(not(feature = "compact"))]
fn compact_disabled(path: &Path) -> VizError {
    VizError::InvalidData(format!(
        "{} is gzip-compressed; enable the 'compact' feature to read or write it",
        path.display()
    ))
}

/// Opens a file for reading, transparently decompressing `.gz` files.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        VizError::NotFound(format!("Input not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if !is_gzip(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(compact_disabled(path))
    }
}

fn write_to<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, value)?;
    } else {
        serde_json::to_writer(writer, value)?;
    }
    Ok(())
}

#[cfg(feature = "compact")]
fn write_gzip<T: Serialize + ?Sized>(path: &Path, value: &T, pretty: bool) -> Result<()> {
    let mut encoder = GzEncoder::new(BufWriter::new(File::create(path)?), Compression::default());
    write_to(&mut encoder, value, pretty)?;
    // `finish` writes the gzip trailer.
    let mut file = encoder.finish()?;
    file.flush()?;
    Ok(())
}

#[cfg(not(feature = "compact"))]
fn write_gzip<T: Serialize + ?Sized>(path: &Path, _value: &T, _pretty: bool) -> Result<()> {
    Err(compact_disabled(path))
}

/// Writes `value` as JSON, gzip-compressed when `path` ends in `.gz`.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T, pretty: bool) -> Result<()> {
    if is_gzip(path) {
        return write_gzip(path, value, pretty);
    }
    let mut writer = BufWriter::new(File::create(path)?);
    write_to(&mut writer, value, pretty)?;
    writer.flush()?;
    Ok(())
}
