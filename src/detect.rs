use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{HeadstampError, Result};
use crate::header::HeaderTemplate;

/// Bounded check for an existing header.
///
/// Scans at most the template's canonical line count from the top of the
/// file and looks for the copyright text as a substring. Never reads the
/// whole file. Lines are read as bytes so a stray non-UTF-8 character near
/// the top of a source file does not block detection.
pub fn has_header(path: &Path, template: &HeaderTemplate) -> Result<bool> {
    let file = File::open(path).map_err(|e| HeadstampError::Io {
        context: format!("opening {}", path.display()),
        source: e,
    })?;

    let needle = template.copyright().trim();
    let mut reader = BufReader::new(file);
    let mut line = Vec::new();

    for _ in 0..template.line_count() {
        line.clear();
        let read = reader.read_until(b'\n', &mut line).map_err(|e| {
            HeadstampError::Io {
                context: format!("reading {}", path.display()),
                source: e,
            }
        })?;
        if read == 0 {
            break;
        }
        if String::from_utf8_lossy(&line).contains(needle) {
            return Ok(true);
        }
    }

    Ok(false)
}
