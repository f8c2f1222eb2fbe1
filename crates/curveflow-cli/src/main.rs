use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use curveflow::api::{
    draw_collection, evolve, load_collection, save_collection, DegeneratePolicy, FlowCfg,
    RingCfg, VertexCount,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod table;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "curveflow")]
#[command(about = "Load, analyze and evolve closed polygonal curves (.vert files)")]
struct Cmd {
    /// Optional run tag; propagated to provenance and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Run curvature-flow ticks and write the evolved curves
    Evolve {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 1)]
        steps: usize,
        #[arg(long, default_value_t = 0.01)]
        dt: f64,
        /// What to do when a component has a zero-length edge
        #[arg(long, value_enum, default_value_t = OnDegenerate::Abort)]
        on_degenerate: OnDegenerate,
    },
    /// Write a per-vertex diagnostics table (.csv or .parquet)
    Analyze {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write random star-shaped rings as a .vert file
    Sample {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 1)]
        components: usize,
        /// Fixed vertex count per ring (random in 6..=24 when omitted)
        #[arg(long)]
        vertices: Option<usize>,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Emit clockwise rings (the flow moves these inward)
        #[arg(long)]
        clockwise: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
enum OnDegenerate {
    /// Stop and keep the last complete tick
    Abort,
    /// Leave the degenerate component in place, step the rest
    Skip,
}

#[derive(Serialize)]
struct EvolveParams {
    steps: usize,
    dt: f64,
    on_degenerate: OnDegenerate,
}

#[derive(Serialize)]
struct SampleParams {
    components: usize,
    vertices: Option<usize>,
    seed: u64,
    clockwise: bool,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Evolve {
            input,
            out,
            steps,
            dt,
            on_degenerate,
        } => run_evolve(
            &input,
            &out,
            EvolveParams {
                steps,
                dt,
                on_degenerate,
            },
            cmd.tag,
        ),
        Action::Analyze { input, out } => run_analyze(&input, &out, cmd.tag),
        Action::Sample {
            out,
            components,
            vertices,
            seed,
            clockwise,
        } => run_sample(
            &out,
            SampleParams {
                components,
                vertices,
                seed,
                clockwise,
            },
            cmd.tag,
        ),
        Action::Report => report(cmd.tag),
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

fn run_evolve(input: &Path, out: &Path, params: EvolveParams, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), steps = params.steps, dt = params.dt, tag = ?tag, "evolve");
    let mut collection =
        load_collection(input).with_context(|| format!("loading {}", input.display()))?;
    // Degenerate-edge policy is decided here, by the caller of the engine.
    let on_degenerate = match params.on_degenerate {
        OnDegenerate::Abort => DegeneratePolicy::Abort,
        OnDegenerate::Skip => DegeneratePolicy::SkipComponent,
    };
    let cfg = FlowCfg {
        delta_t: params.dt,
        steps: params.steps,
        on_degenerate,
    };
    let summary = evolve(&mut collection, cfg).context("curvature flow aborted")?;
    tracing::info!(
        ticks = summary.ticks,
        skipped = summary.skipped.len(),
        components = collection.len(),
        vertices = collection.vertex_count(),
        "evolved"
    );

    ensure_parent(out)?;
    save_collection(&collection, out).with_context(|| format!("writing {}", out.display()))?;
    let payload = Payload::new(&params)?.with_input(input).with_tag(tag);
    write_sidecar(out, payload)?;
    Ok(())
}

fn run_analyze(input: &Path, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), tag = ?tag, "analyze");
    let collection =
        load_collection(input).with_context(|| format!("loading {}", input.display()))?;
    let mut df = table::vertex_table(&collection)?;
    let summary = table::component_summary(&df)?;
    tracing::info!(rows = df.height(), cols = df.width(), "vertex_table_shape");
    println!("{summary}");
    table::write_table(&mut df, out)?;
    let payload = Payload::new(&serde_json::json!({ "rows": df.height() }))?
        .with_input(input)
        .with_tag(tag);
    write_sidecar(out, payload)?;
    Ok(())
}

fn run_sample(out: &Path, params: SampleParams, tag: Option<String>) -> Result<()> {
    tracing::info!(out = %out.display(), components = params.components, seed = params.seed, "sample");
    let mut cfg = RingCfg {
        clockwise: params.clockwise,
        ..RingCfg::default()
    };
    if let Some(n) = params.vertices {
        cfg.vertex_count = VertexCount::Fixed(n);
    }
    let collection = draw_collection(cfg, params.components, params.seed);
    ensure_parent(out)?;
    save_collection(&collection, out).with_context(|| format!("writing {}", out.display()))?;
    write_sidecar(out, Payload::new(&params)?.with_tag(tag))?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&report_doc(tag))?);
    Ok(())
}

fn report_doc(tag: Option<String>) -> serde_json::Value {
    serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "curveflow": curveflow::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    })
}
