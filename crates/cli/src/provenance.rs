//! `<stem>.provenance.json` sidecars recording how a map listing was produced.

use anyhow::{Context, Result};
use ribbon::{Census, SearchStats};
use serde::Serialize;
use std::borrow::Cow;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::output::Format;

/// Inputs of one `maps` run.
#[derive(Debug, Serialize)]
pub struct RunParams {
    pub degrees: Vec<usize>,
    pub equivalence: String,
    pub format: Format,
}

/// Search and filter counters of a finished run.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunCounts {
    pub nodes: u64,
    pub leaves: u64,
    pub emitted: u64,
    pub offered: usize,
    pub kept: usize,
}

impl RunCounts {
    pub fn new(stats: &SearchStats, census: &Census) -> Self {
        Self {
            nodes: stats.nodes,
            leaves: stats.leaves,
            emitted: stats.emitted,
            offered: census.offered(),
            kept: census.kept(),
        }
    }
}

/// Parameters and counts of a run, as stored in its sidecar.
#[derive(Debug, Serialize)]
pub struct RunRecord {
    pub params: RunParams,
    pub counts: RunCounts,
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    version: &'static str,
    callsite: Callsite,
    #[serde(flatten)]
    run: &'a RunRecord,
    outputs: Vec<String>,
}

/// Write the sidecar next to `artifact` and return its path.
///
/// Pre: the artifact's directory exists (the caller created it for the artifact).
#[track_caller]
pub fn write_sidecar(artifact: &Path, run: &RunRecord) -> Result<PathBuf> {
    let path = sidecar_path(artifact);
    let caller = Location::caller();
    let doc = Sidecar {
        code_rev: current_git_rev(),
        version: ribbon::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        run,
        outputs: vec![artifact.to_string_lossy().into_owned()],
    };
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map_or(Cow::Borrowed("maps"), |s| s.to_string_lossy());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Revision from `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    fn non_empty(s: String) -> Option<String> {
        (!s.is_empty()).then_some(s)
    }
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .and_then(non_empty)
        .or_else(|| std::env::var("GIT_COMMIT").ok().and_then(non_empty))
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ribbon::prelude::{for_each_map, DegreeMultiset, Equivalence};
    use serde_json::Value;
    use tempfile::tempdir;

    fn record(values: &[usize], equivalence: Equivalence) -> RunRecord {
        let degrees: DegreeMultiset = values.iter().copied().collect();
        let mut census = Census::new(equivalence);
        let stats = for_each_map(&degrees, |m| {
            census.offer(m);
        });
        RunRecord {
            params: RunParams {
                degrees: degrees.to_vec(),
                equivalence: equivalence.to_string(),
                format: Format::Json,
            },
            counts: RunCounts::new(&stats, &census),
        }
    }

    #[test]
    fn sidecar_path_replaces_extension() {
        let base = Path::new("/tmp/output/maps_3_3.txt");
        assert_eq!(
            sidecar_path(base),
            Path::new("/tmp/output/maps_3_3.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("out/census")),
            Path::new("out/census.provenance.json")
        );
    }

    #[test]
    fn run_counts_follow_search_and_filter() {
        let run = record(&[3, 3], Equivalence::Unsensed);
        assert_eq!(run.counts.emitted, 20);
        assert_eq!(run.counts.offered, 20);
        assert_eq!(run.counts.kept, 7);
        assert!(run.counts.leaves >= run.counts.emitted);
        assert!(run.counts.nodes > 0);
    }

    #[test]
    fn write_sidecar_records_params_and_counts() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("maps.jsonl");
        fs::write(&artifact, "").unwrap();
        let run = record(&[3, 3], Equivalence::Unsensed);
        let prov_path = write_sidecar(&artifact, &run).unwrap();
        assert_eq!(prov_path, dir.path().join("maps.provenance.json"));
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["params"]["degrees"], serde_json::json!([3, 3]));
        assert_eq!(parsed["params"]["equivalence"], "unsensed");
        assert_eq!(parsed["params"]["format"], "json");
        assert_eq!(parsed["counts"]["kept"], 7);
        assert_eq!(parsed["version"], ribbon::VERSION);
        assert!(parsed["callsite"]["line"].as_u64().unwrap() > 0);
    }
}
