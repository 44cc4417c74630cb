mod io;
mod provenance;
mod report;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use hullscan::gen::{scatter, ScatterCfg};
use hullscan::prep::{label_by_polar_order, normalize_rotation, same_vertex_set};
use hullscan::{Algorithm, EventSink, Frame, HullCfg, Recorder};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use provenance::Payload;
use report::HullReport;

#[derive(Parser)]
#[command(name = "hullscan-cli")]
#[command(about = "Convex hulls by Graham's Scan and Jarvis's March")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute a hull and write a JSON report plus provenance sidecar
    Run {
        /// graham | jarvis
        #[arg(long, default_value = "graham")]
        algo: Algorithm,
        /// Point file (.csv or .parquet) with x, y[, label]
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// cartesian (y up) | screen (y down)
        #[arg(long, default_value = "cartesian")]
        frame: Frame,
        /// Include the step event log in the report
        #[arg(long)]
        trace: bool,
    },
    /// Write a reproducible random point set as CSV
    Generate {
        #[arg(long, default_value_t = 10)]
        count: usize,
        /// Side length of the square canvas
        #[arg(long, default_value_t = 512)]
        size: u32,
        #[arg(long, default_value_t = 20)]
        margin: u32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Label points P0.. in polar order around the lowest point
        #[arg(long)]
        label: bool,
        #[arg(long, default_value = "screen")]
        frame: Frame,
        #[arg(long)]
        out: PathBuf,
    },
    /// Run both engines and fail unless they agree
    Compare {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value = "cartesian")]
        frame: Frame,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            algo,
            input,
            out,
            frame,
            trace,
        } => run(algo, &input, &out, frame, trace),
        Action::Generate {
            count,
            size,
            margin,
            seed,
            label,
            frame,
            out,
        } => {
            let cfg = ScatterCfg {
                count,
                width: size,
                height: size,
                margin,
            };
            generate(cfg, seed, label.then_some(frame), &out)
        }
        Action::Compare { input, frame } => compare(&input, frame),
        Action::Report => report(),
    }
}

fn run(algo: Algorithm, input: &Path, out: &Path, frame: Frame, trace: bool) -> Result<()> {
    tracing::info!(%algo, %frame, input = %input.display(), out = %out.display(), "run");
    let points = io::read_points(input)?;
    let engine = algo.engine(HullCfg { frame });

    let mut rec = Recorder::new();
    let sink: Option<&mut dyn EventSink> = if trace { Some(&mut rec) } else { None };
    let hull = engine
        .compute_with(&points, sink)
        .with_context(|| format!("{algo} on {}", input.display()))?;
    tracing::info!(
        n = points.len(),
        hull_len = hull.len(),
        kind = %hull.kind,
        ties = hull.ties.total(),
        "hull_done"
    );

    let events = trace.then_some(rec.events.as_slice());
    let doc = HullReport::new(engine.name(), points.len(), &hull, events);
    create_parent(out)?;
    fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let payload = Payload::new(json!({
        "algo": engine.name(),
        "frame": frame.to_string(),
        "trace": trace,
    }))
    .with_input(input);
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn generate(cfg: ScatterCfg, seed: u64, label: Option<Frame>, out: &Path) -> Result<()> {
    tracing::info!(count = cfg.count, size = cfg.width, seed, out = %out.display(), "generate");
    let mut points = scatter(cfg, seed)?;
    if let Some(frame) = label {
        if !points.is_empty() {
            points = label_by_polar_order(&points, frame)?;
        }
    }
    io::write_points_csv(out, &points)?;
    let payload = Payload::new(json!({
        "count": cfg.count,
        "width": cfg.width,
        "height": cfg.height,
        "margin": cfg.margin,
        "seed": seed,
        "label_frame": label.map(|f| f.to_string()),
    }));
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn compare(input: &Path, frame: Frame) -> Result<()> {
    let points = io::read_points(input)?;
    let cfg = HullCfg { frame };
    let mut hulls = Vec::with_capacity(Algorithm::ALL.len());
    for alg in Algorithm::ALL {
        let hull = alg
            .engine(cfg)
            .compute(&points)
            .with_context(|| format!("{alg} on {}", input.display()))?;
        let ring: Vec<String> = normalize_rotation(hull.vertices(), frame)
            .iter()
            .map(|p| p.to_string())
            .collect();
        tracing::info!(%alg, hull_len = hull.len(), ring = ring.join(" "), "hull");
        hulls.push(hull);
    }
    if !same_vertex_set(hulls[0].vertices(), hulls[1].vertices()) {
        bail!(
            "engines disagree: {} vs {} vertices",
            hulls[0].len(),
            hulls[1].len()
        );
    }
    tracing::info!(n = points.len(), "engines_agree");
    Ok(())
}

fn report() -> Result<()> {
    let mut obj = provenance::header();
    obj["algorithms"] = json!(Algorithm::ALL.map(|a| a.to_string()));
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}
