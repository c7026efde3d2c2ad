use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use meshgen::api::{
    build_mesh, scatter_centers, MeshCfg, RegularPolygonCfg, ReplayToken, ScatterCfg,
};
use meshgen::Point;
use serde_json::json;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod doc;
mod output;
mod provenance;

use doc::{MeshDoc, Params};
use output::Format;
use provenance::Payload;

#[derive(Parser)]
#[command(name = "meshgen")]
#[command(about = "Planar mesh around regular-polygon obstacles in the unit square")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build a mesh and write it with a provenance sidecar
    Generate(GenerateArgs),
    /// Run the structural checks on a JSON mesh
    Check {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value_t = meshgen::geom2::PROXIMITY_EPS)]
        eps: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
struct GenerateArgs {
    /// Obstacle center as `X,Y`; repeat for more obstacles
    #[arg(long = "center", value_parser = parse_point, conflicts_with = "random")]
    centers: Vec<Point>,
    /// Place this many non-overlapping obstacles at random instead
    #[arg(long)]
    random: Option<usize>,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 0.1)]
    radius: f64,
    /// Vertices per obstacle polygon
    #[arg(long, default_value_t = 6)]
    vertices: u8,
    #[arg(long, default_value_t = meshgen::geom2::PROXIMITY_EPS)]
    eps: f64,
    /// Cap on completion passes (default: derived from the vertex count)
    #[arg(long)]
    max_passes: Option<usize>,
    #[arg(long)]
    out: PathBuf,
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Generate(args) => generate(args),
        Action::Check { input, eps } => check(input, eps),
        Action::Report => report(),
    }
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("{v:?}: {e}"))
    };
    Ok(Point::new(parse(x)?, parse(y)?))
}

fn generate(args: GenerateArgs) -> Result<()> {
    let (centers, seed) = match args.random {
        Some(count) => {
            let cfg = ScatterCfg {
                count,
                radius: args.radius,
                ..ScatterCfg::default()
            };
            let tok = ReplayToken {
                seed: args.seed,
                index: 0,
            };
            (scatter_centers(cfg, tok)?, Some(args.seed))
        }
        None => (args.centers, None),
    };
    let poly_cfg = RegularPolygonCfg {
        radius: args.radius,
        vertex_count: args.vertices,
    };
    let cfg = MeshCfg {
        eps: args.eps,
        max_passes: args.max_passes,
    };
    tracing::info!(
        obstacles = centers.len(),
        radius = args.radius,
        vertices = args.vertices,
        "generate"
    );

    let start = Instant::now();
    let mesh = build_mesh(&centers, &poly_cfg, cfg)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;
    tracing::info!(
        points = mesh.graph.num_points(),
        edges = mesh.graph.num_edges(),
        passes = mesh.completion.passes,
        open_edges = mesh.open_edges.len(),
        elapsed_ms,
        "mesh built"
    );

    let params = Params {
        centers: centers.iter().map(|c| [c.x, c.y]).collect(),
        radius: args.radius,
        vertex_count: args.vertices,
        eps: args.eps,
        max_passes: args.max_passes,
        seed,
    };
    let params_json = serde_json::to_value(&params)?;
    let outputs = output::write_mesh(&mesh, params, &args.out, args.format)?;
    let payload = Payload::new(params_json)
        .with_summary(json!({
            "points": mesh.graph.num_points(),
            "edges": mesh.graph.num_edges(),
            "visibility_edges": mesh.visibility_edges,
            "passes": mesh.completion.passes,
            "converged": mesh.completion.converged(),
            "open_edges": mesh.open_edges.len(),
            "elapsed_ms": elapsed_ms
        }))
        .with_outputs(outputs);
    let prov = provenance::write_sidecar(&args.out, &payload)?;
    tracing::info!(out = %args.out.display(), provenance = %prov.display(), "written");
    Ok(())
}

fn check(input: PathBuf, eps: f64) -> Result<()> {
    let bytes = std::fs::read(&input).with_context(|| format!("reading {}", input.display()))?;
    let doc: MeshDoc = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {}", input.display()))?;
    let mesh = doc.to_mesh()?;
    let report = mesh.validate(eps);
    let summary = json!({
        "points": mesh.graph.num_points(),
        "edges": mesh.graph.num_edges(),
        "asymmetric": report.asymmetric.len(),
        "missing_boundary": report.missing_boundary.len(),
        "intra_polygon": report.intra_polygon.len(),
        "crossings": report.crossings.len(),
        "open_edges": report.open.len(),
        "valid": report.is_valid()
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    if !report.is_valid() {
        bail!("{} failed structural checks", input.display());
    }
    if !report.open.is_empty() {
        tracing::warn!(open = report.open.len(), "mesh is not fully triangulated");
    }
    Ok(())
}

fn report() -> Result<()> {
    let doc = provenance::document(&Payload::new(json!({})));
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
