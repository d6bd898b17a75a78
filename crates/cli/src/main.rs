use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use ribbon::multiset::parse_degree;
use ribbon::{Census, DegreeMultiset, Equivalence, MapStream, SearchStats};
use serde_json::json;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;

mod output;
mod provenance;

use output::{write_map, Format};
use provenance::{write_sidecar, RunCounts, RunParams, RunRecord};

#[derive(Parser)]
#[command(name = "ribbon")]
#[command(about = "Enumerate combinatorial maps with prescribed vertex degrees")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print one line per map (or per class with --sensed/--unsensed)
    Maps {
        #[command(flatten)]
        select: Select,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Write maps to this file (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the number of maps per surface
    Census {
        #[command(flatten)]
        select: Select,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Debug)]
struct Select {
    /// Vertex degrees, one per vertex (repeats allowed)
    #[arg(required = true, value_parser = parse_degree)]
    degrees: Vec<usize>,
    /// Collapse maps under all relabelings
    #[arg(long)]
    unsensed: bool,
    /// Collapse maps under orientation-preserving relabelings
    #[arg(long)]
    sensed: bool,
}

impl Select {
    fn resolve(&self) -> Result<(DegreeMultiset, Equivalence)> {
        let equivalence = Equivalence::from_selectors(self.sensed, self.unsensed)?;
        Ok((self.degrees.iter().copied().collect(), equivalence))
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Maps {
            select,
            format,
            out,
        } => maps(&select, format, out.as_deref()),
        Action::Census { select } => census(&select),
        Action::Report => report(),
    }
}

/// Run the search on a worker and feed every kept map to `on_kept`.
fn run_search(
    degrees: &DegreeMultiset,
    equivalence: Equivalence,
    mut on_kept: impl FnMut(&ribbon::FlagMap, ribbon::Surface) -> Result<()>,
) -> Result<(Census, SearchStats)> {
    let mut census = Census::new(equivalence);
    let mut stream = MapStream::spawn(degrees.clone());
    for m in stream.by_ref() {
        if let Some((kept, surface)) = census.offer(m) {
            on_kept(&kept, surface)?;
        }
    }
    let stats = stream.finish();
    Ok((census, stats))
}

fn maps(select: &Select, format: Format, out: Option<&Path>) -> Result<()> {
    let (degrees, equivalence) = select.resolve()?;
    tracing::info!(degrees = %degrees, %equivalence, ?format, out = ?out, "maps");
    let start = Instant::now();

    let mut sink: Box<dyn Write> = match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating output dir {}", parent.display()))?;
                }
            }
            let file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    let (census, stats) = run_search(&degrees, equivalence, |m, surface| {
        write_map(sink.as_mut(), format, m, surface)
    })?;
    sink.flush()?;

    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;
    tracing::info!(
        emitted = stats.emitted,
        kept = census.kept(),
        nodes = stats.nodes,
        elapsed_ms,
        "done"
    );

    if let Some(path) = out {
        let run = RunRecord {
            params: RunParams {
                degrees: degrees.to_vec(),
                equivalence: equivalence.to_string(),
                format,
            },
            counts: RunCounts::new(&stats, &census),
        };
        let prov = write_sidecar(path, &run)?;
        tracing::info!(provenance = %prov.display(), "wrote provenance");
    }
    Ok(())
}

fn census(select: &Select) -> Result<()> {
    let (degrees, equivalence) = select.resolve()?;
    tracing::info!(degrees = %degrees, %equivalence, "census");
    let (census, stats) = run_search(&degrees, equivalence, |_, _| Ok(()))?;
    let stdout = io::stdout();
    let mut w = stdout.lock();
    for (surface, count) in census.by_surface() {
        writeln!(w, "{surface} {count}")?;
    }
    writeln!(w, "total {}", census.kept())?;
    tracing::info!(emitted = stats.emitted, kept = census.kept(), "done");
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": ribbon::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Result<Cmd, clap::Error> {
        Cmd::try_parse_from(std::iter::once("ribbon").chain(args.iter().copied()))
    }

    #[test]
    fn maps_accepts_degrees_and_one_selector() {
        let cmd = parse(&["maps", "3", "3", "--unsensed"]).unwrap();
        match cmd.action {
            Action::Maps { select, format, out } => {
                assert_eq!(select.degrees, vec![3, 3]);
                assert_eq!(format, Format::Text);
                assert!(out.is_none());
                let (degrees, eq) = select.resolve().unwrap();
                assert_eq!(degrees.remaining_count(), 2);
                assert_eq!(eq, Equivalence::Unsensed);
            }
            _ => panic!("expected maps"),
        }
    }

    #[test]
    fn malformed_degree_is_rejected_before_search() {
        assert!(parse(&["maps", "3", "x"]).is_err());
        assert!(parse(&["census", "0"]).is_err());
        assert!(parse(&["maps"]).is_err());
    }

    #[test]
    fn conflicting_selectors_fail_to_resolve() {
        let cmd = parse(&["census", "4", "--sensed", "--unsensed"]).unwrap();
        match cmd.action {
            Action::Census { select } => {
                let err = select.resolve().unwrap_err();
                assert!(err.to_string().contains("both sensed and unsensed"));
            }
            _ => panic!("expected census"),
        }
    }

    #[test]
    fn maps_to_file_writes_lines_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("maps_4.txt");
        let select = Select {
            degrees: vec![4],
            unsensed: true,
            sensed: false,
        };
        maps(&select, Format::Text, Some(&out)).unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines.iter().filter(|l| l.starts_with("0 + ")).count(), 1);
        let sidecar = dir.path().join("nested").join("maps_4.provenance.json");
        let parsed: serde_json::Value =
            serde_json::from_slice(&std::fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(parsed["counts"]["emitted"], 12);
        assert_eq!(parsed["counts"]["kept"], 6);
        assert_eq!(parsed["params"]["equivalence"], "unsensed");
        assert_eq!(parsed["params"]["format"], "text");
        assert_eq!(parsed["counts"]["offered"], 12);
    }

    #[test]
    fn labeled_run_keeps_every_map() {
        let (degrees, eq) = Select {
            degrees: vec![3, 3],
            unsensed: false,
            sensed: false,
        }
        .resolve()
        .unwrap();
        let mut lines = 0;
        let (census, stats) = run_search(&degrees, eq, |_, _| {
            lines += 1;
            Ok(())
        })
        .unwrap();
        assert_eq!(lines, 20);
        assert_eq!(census.kept(), 20);
        assert_eq!(stats.emitted, 20);
    }
}
