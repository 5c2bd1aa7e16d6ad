use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::error::{HeadstampError, Result};
use crate::header::{CommentStyle, HeaderTemplate};

const SHEBANG: &[u8] = b"#!";

/// Rewrite `path` with the header inserted at the top.
///
/// The original is first copied into a private temp dir, the new content is
/// staged into a temp file next to the target, and the target is replaced by
/// an atomic rename. The backup is discarded only after the rename succeeds,
/// so a crash at any point leaves either the untouched original or the
/// finished file on disk.
pub fn insert_header(path: &Path, style: &CommentStyle, template: &HeaderTemplate) -> Result<()> {
    let backup_dir = tempfile::tempdir().map_err(|e| HeadstampError::Io {
        context: "creating backup directory".into(),
        source: e,
    })?;
    let file_name = path.file_name().unwrap_or_else(|| "original".as_ref());
    let backup_path = backup_dir.path().join(file_name);
    fs::copy(path, &backup_path).map_err(|e| HeadstampError::Io {
        context: format!("backing up {}", path.display()),
        source: e,
    })?;

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut staged = tempfile::NamedTempFile::new_in(parent).map_err(|e| HeadstampError::Io {
        context: format!("staging rewrite of {}", path.display()),
        source: e,
    })?;

    let mut original = BufReader::new(File::open(&backup_path).map_err(|e| HeadstampError::Io {
        context: format!("reading backup of {}", path.display()),
        source: e,
    })?);

    write_patched(&mut original, staged.as_file_mut(), style, template).map_err(|e| {
        HeadstampError::Io {
            context: format!("rewriting {}", path.display()),
            source: e,
        }
    })?;

    staged.persist(path).map_err(|e| HeadstampError::Io {
        context: format!("replacing {}", path.display()),
        source: e.error,
    })?;

    backup_dir.close().map_err(|e| HeadstampError::Io {
        context: "removing backup directory".into(),
        source: e,
    })?;

    Ok(())
}

/// Stream `original` into `out` with the header inserted.
///
/// A shebang first line stays on top; any other first line is ordinary
/// content and is written back after the separator. Everything after the
/// first line is copied byte for byte.
fn write_patched(
    original: &mut impl BufRead,
    out: &mut impl Write,
    style: &CommentStyle,
    template: &HeaderTemplate,
) -> io::Result<()> {
    let mut first = Vec::new();
    original.read_until(b'\n', &mut first)?;
    let shebang = first.starts_with(SHEBANG);
    if shebang {
        out.write_all(&first)?;
    }

    if let Some(block) = style.block {
        writeln!(out, "{}", block.open)?;
    }
    out.write_all(template.render(style.line_prefix).as_bytes())?;
    if let Some(block) = style.block {
        writeln!(out, "{}", block.close)?;
    }

    // Two blank lines between header and content
    out.write_all(b"\n\n")?;

    if !shebang {
        out.write_all(&first)?;
    }
    io::copy(original, out)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::ExtensionPolicy;
    use std::io::Cursor;

    fn patch_string(content: &str, ext: &str) -> String {
        let policy = ExtensionPolicy::builtin();
        let template = HeaderTemplate::default();
        let style = policy.style_for(ext).expect("style");

        let mut input = Cursor::new(content.as_bytes().to_vec());
        let mut output = Vec::new();
        write_patched(&mut input, &mut output, style, &template).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_shebang_stays_first() {
        let patched = patch_string("#!/bin/sh\necho hi\n", ".sh");
        assert!(patched.starts_with("#!/bin/sh\n#---"));
        assert!(patched.ends_with("\n\n\necho hi\n"));
    }

    #[test]
    fn test_non_shebang_first_line_moves_below_header() {
        let patched = patch_string("echo hi\necho bye\n", ".sh");
        assert!(patched.starts_with("#---"));
        assert!(patched.ends_with("\n\n\necho hi\necho bye\n"));
    }

    #[test]
    fn test_block_style_wraps_header() {
        let patched = patch_string("<project/>\n", ".xml");
        assert!(patched.starts_with("<!--\n---"));
        assert!(patched.contains("\n-->\n\n\n<project/>\n"));
    }

    #[test]
    fn test_empty_input_gets_header_only() {
        let template = HeaderTemplate::default();
        let patched = patch_string("", ".sh");
        assert_eq!(patched, format!("{}\n\n", template.render("#")));
    }

    #[test]
    fn test_content_is_byte_exact_below_separator() {
        let template = HeaderTemplate::default();
        let body = "line one\n\tline two\nline three without newline";
        let patched = patch_string(body, ".c");
        assert_eq!(patched, format!("{}\n\n{body}", template.render("//")));
    }
}
