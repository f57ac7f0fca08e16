//! JSON writer with four-space indentation.

use super::{output_path, write_output, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::Write;
use std::path::{Path, PathBuf};

const INDENT: &[u8] = b"    ";

/// Serialize any value, not only segments, as indented JSON.
pub fn write_json<W, T>(out: &mut W, value: &T) -> Result<()>
where
    W: Write + ?Sized,
    T: Serialize + ?Sized,
{
    let mut serializer = Serializer::with_formatter(out, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    Ok(())
}

/// Write `<base>.json`, replacing any existing file.
pub fn write_json_file<T>(base: impl AsRef<Path>, value: &T) -> Result<PathBuf>
where
    T: Serialize + ?Sized,
{
    let path = output_path(base, ".json");
    write_output(&path, |file| write_json(file, value))?;
    Ok(path)
}
