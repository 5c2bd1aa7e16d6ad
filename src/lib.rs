pub mod detect;
pub mod error;
pub mod header;
pub mod patch;
pub mod scan;

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use crate::error::{HeadstampError, Result};
use crate::header::{normalize_extension, ExtensionPolicy, HeaderTemplate};
use crate::scan::scan_root;

pub struct ApplyOptions {
    /// Root directories to scan.
    pub roots: Vec<PathBuf>,
    /// Requested extensions; normalized to carry a leading dot.
    pub extensions: Vec<String>,
    /// List every directory and file visited during the scan.
    pub verbose: bool,
}

/// A file that needs the header, discovered during planning.
pub struct PlannedPatch {
    pub path: PathBuf,
    pub extension: String,
}

/// A per-file error that did not stop the run.
pub struct FileFailure {
    pub path: PathBuf,
    pub error: HeadstampError,
}

/// Everything needed to execute a run that has been planned but not yet
/// written: the files to patch, plus what was skipped and why.
pub struct ApplyPlan {
    pub patches: Vec<PlannedPatch>,
    pub already_headered: Vec<PathBuf>,
    /// (root, extension) pairs that matched no files. Reported, not an error.
    pub unmatched: Vec<(PathBuf, String)>,
    /// Files that could not be inspected during detection.
    pub failures: Vec<FileFailure>,
    pub template: HeaderTemplate,
    pub policy: ExtensionPolicy,
}

/// Outcome of executing a plan.
pub struct ApplyOutcome {
    pub patched: Vec<PathBuf>,
    pub failures: Vec<FileFailure>,
}

/// Plan a run: validate the requested extensions, scan each root, and decide
/// per file whether it needs the header.
///
/// Extension validation happens before any filesystem traversal, so a
/// configuration error has no side effects. Files that cannot be read are
/// recorded as failures and do not stop the run.
pub fn plan_apply(options: ApplyOptions) -> Result<ApplyPlan> {
    let policy = ExtensionPolicy::builtin();
    let template = HeaderTemplate::default();

    // Normalize and dedup; `-e sh -e .sh` must not schedule files twice.
    let mut extensions: Vec<String> = Vec::new();
    for raw in &options.extensions {
        let ext = normalize_extension(raw);
        if !extensions.contains(&ext) {
            extensions.push(ext);
        }
    }

    for ext in &extensions {
        if !policy.is_supported(ext) {
            return Err(HeadstampError::UnknownExtension {
                ext: ext.clone(),
                supported: policy.supported_extensions().collect::<Vec<_>>().join(", "),
            });
        }
    }

    let mut patches = Vec::new();
    let mut already_headered = Vec::new();
    let mut unmatched = Vec::new();
    let mut failures = Vec::new();

    // A file can be reached through more than one root (overlapping or
    // repeated root arguments); inspect and schedule each file once, keyed
    // on its canonical path.
    let mut scheduled: BTreeSet<PathBuf> = BTreeSet::new();

    for root in &options.roots {
        let groups = scan_root(root, options.verbose);

        for ext in &extensions {
            let Some(files) = groups.get(ext) else {
                unmatched.push((root.clone(), ext.clone()));
                continue;
            };

            for path in files {
                let identity = fs::canonicalize(path).unwrap_or_else(|_| path.clone());
                if !scheduled.insert(identity) {
                    continue;
                }

                match detect::has_header(path, &template) {
                    Ok(true) => already_headered.push(path.clone()),
                    Ok(false) => patches.push(PlannedPatch {
                        path: path.clone(),
                        extension: ext.clone(),
                    }),
                    Err(error) => failures.push(FileFailure {
                        path: path.clone(),
                        error,
                    }),
                }
            }
        }
    }

    Ok(ApplyPlan {
        patches,
        already_headered,
        unmatched,
        failures,
        template,
        policy,
    })
}

/// Execute a previously planned run: rewrite every file in the plan.
///
/// Per-file failures are collected, not propagated; one bad file never stops
/// the batch.
pub fn execute_plan(plan: &ApplyPlan) -> ApplyOutcome {
    let mut patched = Vec::new();
    let mut failures = Vec::new();

    for item in &plan.patches {
        let result = plan
            .policy
            .style_for(&item.extension)
            .ok_or_else(|| HeadstampError::MissingStyle {
                ext: item.extension.clone(),
            })
            .and_then(|style| patch::insert_header(&item.path, style, &plan.template));

        match result {
            Ok(()) => patched.push(item.path.clone()),
            Err(error) => failures.push(FileFailure {
                path: item.path.clone(),
                error,
            }),
        }
    }

    ApplyOutcome { patched, failures }
}

/// Plan and execute in one step.
pub fn apply(options: ApplyOptions) -> Result<(ApplyPlan, ApplyOutcome)> {
    let plan = plan_apply(options)?;
    let outcome = execute_plan(&plan);
    Ok((plan, outcome))
}
