//! Command-line front end for the decal-preserving mirror engine.
//!
//! Reads an STL model, mirrors it across one axis while leaving small
//! disconnected clusters (embossed text, logos, decals) untouched, and writes
//! the result as binary or ASCII STL.
//!
//! ```text
//! stl-mirror part.stl -a y -t 6 --report part.json
//! ```

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use mesh::engine::{self, MirrorParams, MirrorSummary};
use mesh::io::encode_stl_ascii;
use mesh::topology::DEFAULT_EPSILON;
use mesh::types::{Aabb, Axis};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "stl-mirror",
    author,
    version,
    about = "Mirror an STL model across an axis, keeping small decal clusters unmirrored"
)]
struct Cli {
    /// Path to the STL model (binary or ASCII).
    input: PathBuf,

    /// Output path. Defaults to `<input stem>_mirrored.stl` beside the input.
    #[arg(short, long, value_name = "STL")]
    output: Option<PathBuf>,

    /// Axis to mirror across: x, y or z.
    #[arg(short, long, default_value = "x")]
    axis: Axis,

    /// Clusters with at most this many triangles are left unmirrored.
    #[arg(short, long, default_value_t = engine::DEFAULT_THRESHOLD)]
    threshold: usize,

    /// Distance under which vertices count as shared.
    #[arg(short, long, default_value_t = DEFAULT_EPSILON)]
    epsilon: f64,

    /// Write ASCII STL instead of binary.
    #[arg(long)]
    ascii: bool,

    /// Write a JSON report of the run to this path.
    #[arg(long, value_name = "JSON")]
    report: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn params(&self) -> MirrorParams {
        MirrorParams::default()
            .with_threshold(self.threshold)
            .with_epsilon(self.epsilon)
    }
}

/// JSON report written by `--report`.
#[derive(Debug, Serialize)]
struct MirrorReport {
    input: PathBuf,
    output: PathBuf,
    axis: Axis,
    params: MirrorParams,
    summary: MirrorSummary,
    bounds: Aabb,
    excluded_triangles: Vec<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let report = run(&cli)?;
    println!("{} {}", "✓".green(), report.summary);
    let size = report.bounds.size();
    println!("  size {:.3} x {:.3} x {:.3}", size.x, size.y, size.z);
    if report.summary.degenerate_count > 0 {
        println!(
            "  {} {} degenerate triangles written with zero normals",
            "!".yellow(),
            report.summary.degenerate_count
        );
    }
    println!("  wrote {}", report.output.display().bold());
    Ok(())
}

/// Install a stderr subscriber. `-v` flags win over `RUST_LOG`.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        eprintln!("warning: logging disabled: {err}");
    }
}

fn run(cli: &Cli) -> Result<MirrorReport> {
    let params = cli.params();
    params.validate()?;

    let source = fs::read(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let buffer = engine::decode(&source)
        .with_context(|| format!("failed to parse {}", cli.input.display()))?;
    info!(
        triangles = buffer.triangle_count(),
        input = %cli.input.display(),
        "loaded model"
    );

    let outcome = engine::mirror(&buffer, cli.axis, &params)
        .with_context(|| format!("failed to mirror {}", cli.input.display()))?;
    debug!(excluded = ?outcome.excluded, "preserved triangles");

    let output = resolve_output_path(cli);
    let bytes = if cli.ascii {
        encode_stl_ascii(&outcome.triangles, &solid_name(&output)).into_bytes()
    } else {
        engine::encode(&outcome.triangles)
    };
    fs::write(&output, bytes).with_context(|| format!("failed to write {}", output.display()))?;
    info!(output = %output.display(), "wrote mirrored model");

    let report = MirrorReport {
        input: cli.input.clone(),
        output,
        axis: cli.axis,
        params,
        summary: outcome.summary,
        bounds: outcome.bounds,
        excluded_triangles: outcome.excluded,
    };

    if let Some(path) = &cli.report {
        write_report(path, &report)
            .with_context(|| format!("failed to write report {}", path.display()))?;
    }

    Ok(report)
}

fn write_report(path: &Path, report: &MirrorReport) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, report)?;
    Ok(())
}

fn resolve_output_path(cli: &Cli) -> PathBuf {
    if let Some(path) = &cli.output {
        return path.clone();
    }

    let stem = cli
        .input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("mesh");
    cli.input.with_file_name(format!("{stem}_mirrored.stl"))
}

fn solid_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("mesh")
        .to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use mesh::io::{StlFormat, load_stl, save_stl};
    use mesh::types::{Triangle, TriangleBuffer};

    /// Ten-triangle fan body plus a two-triangle decal above it.
    fn decorated_part() -> TriangleBuffer {
        let mut triangles: Vec<Triangle> = (0..10u8)
            .map(|i| {
                let (a, b) = (f32::from(i) * 0.5, f32::from(i + 1) * 0.5);
                Triangle::from_arrays(
                    [0.0, 0.0, 0.0],
                    [2.0 * a.cos(), 2.0 * a.sin(), 0.0],
                    [2.0 * b.cos(), 2.0 * b.sin(), 0.0],
                )
            })
            .collect();
        triangles.push(Triangle::from_arrays(
            [1.0, 1.0, 1.0],
            [2.0, 1.0, 1.0],
            [1.0, 2.0, 1.0],
        ));
        triangles.push(Triangle::from_arrays(
            [2.0, 1.0, 1.0],
            [2.0, 2.0, 1.0],
            [1.0, 2.0, 1.0],
        ));
        TriangleBuffer::from_triangles(triangles)
    }

    fn cli_for(input: &Path, extra: &[&str]) -> Cli {
        let mut args = vec!["stl-mirror", input.to_str().unwrap()];
        args.extend_from_slice(extra);
        Cli::parse_from(args)
    }

    #[test]
    fn repeated_tracing_init_does_not_panic() {
        init_tracing(0);
        init_tracing(2);
    }

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["stl-mirror", "part.stl"]);
        assert_eq!(cli.axis, Axis::X);
        assert_eq!(cli.threshold, 3);
        assert!((cli.epsilon - 1e-6).abs() < f64::EPSILON);
        assert!(!cli.ascii);
        assert!(cli.output.is_none());
        assert!(cli.report.is_none());
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.params(), MirrorParams::default());
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::parse_from([
            "stl-mirror", "part.stl", "-a", "Z", "-t", "8", "-e", "0.001", "--ascii", "-vv",
        ]);
        assert_eq!(cli.axis, Axis::Z);
        assert_eq!(cli.threshold, 8);
        assert!(cli.ascii);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_rejects_unknown_axis() {
        assert!(Cli::try_parse_from(["stl-mirror", "part.stl", "-a", "w"]).is_err());
    }

    #[test]
    fn default_output_sits_beside_input() {
        let cli = Cli::parse_from(["stl-mirror", "models/part.stl"]);
        assert_eq!(
            resolve_output_path(&cli),
            PathBuf::from("models/part_mirrored.stl")
        );
    }

    #[test]
    fn run_writes_mirrored_model_and_report() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("part.stl");
        let report_path = dir.path().join("part.json");
        save_stl(&decorated_part(), &input, StlFormat::Binary).unwrap();

        let cli = cli_for(&input, &["--report", report_path.to_str().unwrap()]);
        let report = run(&cli).unwrap();

        assert_eq!(report.output, dir.path().join("part_mirrored.stl"));
        assert_eq!(report.excluded_triangles, vec![10, 11]);
        assert_eq!(report.summary.component_count, 2);

        let mirrored = load_stl(&report.output).unwrap();
        assert_eq!(mirrored.triangle_count(), 12);
        assert_eq!(mirrored.record(10), decorated_part().record(10));

        let json = fs::read_to_string(&report_path).unwrap();
        assert!(json.contains("\"excluded_triangles\""));
        assert!(json.contains("\"axis\": \"x\""));
        assert!(json.contains("\"bounds\""));
        assert_eq!(report.bounds, mirrored.bounds());
    }

    #[test]
    fn ascii_flag_writes_ascii() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("part.stl");
        let output = dir.path().join("flipped.stl");
        save_stl(&decorated_part(), &input, StlFormat::Binary).unwrap();

        let cli = cli_for(&input, &["--ascii", "-o", output.to_str().unwrap()]);
        run(&cli).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert!(text.starts_with("solid flipped"));
        assert_eq!(load_stl(&output).unwrap().triangle_count(), 12);
    }

    #[test]
    fn missing_input_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli_for(&dir.path().join("absent.stl"), &[]);
        let err = run(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("absent.stl"));
    }

    #[test]
    fn malformed_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.stl");
        fs::write(&input, b"solid broken\n  facet normal 0 0 1\n").unwrap();

        let err = run(&cli_for(&input, &[])).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse"));
    }

    #[test]
    fn invalid_epsilon_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("part.stl");
        save_stl(&decorated_part(), &input, StlFormat::Binary).unwrap();

        let err = run(&cli_for(&input, &["-e", "0"])).unwrap_err();
        assert!(err.to_string().contains("epsilon"));
    }
}
