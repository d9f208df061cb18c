//! Folder mode: analyze every `*.txt` in a directory, one JSON file each.

use crate::report::AnalysisReport;
use adore_core::Dashboard;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub written: usize,
    pub skipped: usize,
}

fn input_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read input folder {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    files.sort();
    Ok(files)
}

/// Unreadable or blank files and failed analyses are logged and skipped.
pub async fn process_folder(dashboard: &Dashboard, input: &Path, output: &Path) -> Result<BatchSummary> {
    std::fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output folder {}", output.display()))?;
    info!("Processing input folder: {}", input.display());
    info!("Output folder: {}", output.display());

    let mut summary = BatchSummary::default();
    for path in input_files(input)? {
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        info!("Processing file: {}", name);

        let text = match std::fs::read_to_string(&path) {
            Ok(t) => t,
            Err(e) => {
                warn!("Skipping {} due to read error: {}", name, e);
                summary.skipped += 1;
                continue;
            }
        };

        let analysis = match dashboard.analyze(&text).await {
            Ok(a) => a,
            Err(e) => {
                warn!("Skipping {} due to analysis error: {}", name, e);
                summary.skipped += 1;
                continue;
            }
        };

        let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_else(|| name.clone());
        let out_path = output.join(format!("{}.json", stem));
        let report = AnalysisReport::new(&analysis, dashboard.themes());
        let json = match serde_json::to_string_pretty(&report) {
            Ok(j) => j,
            Err(e) => {
                error!("Error serializing results for {}: {}", name, e);
                summary.skipped += 1;
                continue;
            }
        };
        if let Err(e) = std::fs::write(&out_path, json) {
            error!("Error saving results to {}: {}", out_path.display(), e);
            summary.skipped += 1;
            continue;
        }
        info!("Analysis saved to {}", out_path.display());
        summary.written += 1;
    }

    Ok(summary)
}
