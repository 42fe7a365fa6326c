//! Solving every instance file of a directory into one table.
use crate::{
    instance::Instance,
    report::{BatchRow, BATCH_HEADER},
    solver::solve_all,
};
use log::{debug, warn};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    /// Only files with this extension are treated as instances.
    pub extension: String,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            extension: "txt".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub solved: usize,
    pub failed: usize,
}

/// Instance files in `dir`, sorted by file name.
pub fn instance_files(dir: &Path, options: &BatchOptions) -> io::Result<Vec<PathBuf>> {
    let mut res = vec![];
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let wanted = path.is_file()
            && path
                .extension()
                .map_or(false, |ext| ext == options.extension.as_str());
        if wanted {
            res.push(path);
        }
    }
    res.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(res)
}

/// Writes the batch table for `dir` to `out`.
///
/// A file that fails to parse gets a row of `?` and a `# ERROR` line on
/// `err`; the remaining files are still solved.
pub fn run_batch<W, E>(
    dir: &Path,
    options: &BatchOptions,
    out: &mut W,
    err: &mut E,
) -> io::Result<BatchSummary>
where
    W: Write,
    E: Write,
{
    let mut summary = BatchSummary::default();
    writeln!(out, "{}", BATCH_HEADER)?;
    for path in instance_files(dir, options)? {
        let name = path
            .file_name()
            .map(|x| x.to_string_lossy().into_owned())
            .unwrap_or_default();
        match Instance::from_path(&path) {
            Ok(instance) => {
                let row = BatchRow::Solved {
                    name: &name,
                    vertices: instance.header().vertices,
                    solutions: solve_all(&instance),
                };
                debug!("{}", row);
                writeln!(out, "{}", row)?;
                summary.solved += 1;
            }
            Err(e) => {
                warn!("{}: {}", name, e);
                writeln!(out, "{}", BatchRow::Failed { name: &name })?;
                writeln!(err, "# ERROR on {}: {}", name, e)?;
                summary.failed += 1;
            }
        }
    }
    Ok(summary)
}
