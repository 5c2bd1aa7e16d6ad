use std::collections::BTreeMap;

/// Open/close pair for comment syntaxes with no line form (e.g. XML).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockDelimiters {
    pub open: &'static str,
    pub close: &'static str,
}

/// How to turn header text into a comment for one file type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentStyle {
    /// Prefix applied to every header line; empty for block styles.
    pub line_prefix: &'static str,
    pub block: Option<BlockDelimiters>,
}

impl CommentStyle {
    const fn line(prefix: &'static str) -> Self {
        Self {
            line_prefix: prefix,
            block: None,
        }
    }

    const fn block(open: &'static str, close: &'static str) -> Self {
        Self {
            line_prefix: "",
            block: Some(BlockDelimiters { open, close }),
        }
    }
}

/// The fixed extension-to-comment-style table.
///
/// Built once and passed explicitly; requesting an extension outside this
/// table is a configuration error, fatal to the run.
pub struct ExtensionPolicy {
    styles: BTreeMap<&'static str, CommentStyle>,
}

impl ExtensionPolicy {
    pub fn builtin() -> Self {
        let styles = BTreeMap::from([
            (".tcl", CommentStyle::line("#")),
            (".c", CommentStyle::line("//")),
            (".vhd", CommentStyle::line("--")),
            (".dep", CommentStyle::line("#")),
            (".sh", CommentStyle::line("#")),
            (".v", CommentStyle::line("//")),
            (".xml", CommentStyle::block("<!--", "-->")),
            (".ucf", CommentStyle::line("#")),
        ]);
        Self { styles }
    }

    pub fn style_for(&self, ext: &str) -> Option<&CommentStyle> {
        self.styles.get(ext)
    }

    pub fn is_supported(&self, ext: &str) -> bool {
        self.styles.contains_key(ext)
    }

    pub fn supported_extensions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.styles.keys().copied()
    }
}

/// Ensure an extension carries its leading dot (`sh` becomes `.sh`).
pub fn normalize_extension(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('.') {
        trimmed.to_string()
    } else {
        format!(".{trimmed}")
    }
}
