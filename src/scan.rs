use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use console::style;
use walkdir::{DirEntry, WalkDir};

/// Files under one root, grouped by extension (leading dot included).
pub type ExtensionGroups = BTreeMap<String, Vec<PathBuf>>;

fn is_hidden_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry.file_name().to_string_lossy().starts_with('.')
}

/// Walk `root` and group every file by its extension.
///
/// Hidden directories are pruned, so their descendants are never visited.
/// Files without an extension are ignored. Group order is deterministic
/// (BTreeMap) but carries no semantic meaning.
pub fn scan_root(root: &Path, verbose: bool) -> ExtensionGroups {
    let mut groups = ExtensionGroups::new();

    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_hidden_dir(e))
        .filter_map(|e| e.ok())
    {
        if entry.file_type().is_dir() {
            if verbose {
                println!(
                    "Inspecting directory: {}",
                    style(entry.path().display()).dim()
                );
            }
            continue;
        }

        let path = entry.path();
        let Some(ext) = path.extension() else {
            continue;
        };

        if verbose {
            println!("  {}", path.display());
        }

        groups
            .entry(format!(".{}", ext.to_string_lossy()))
            .or_default()
            .push(path.to_path_buf());
    }

    groups
}
