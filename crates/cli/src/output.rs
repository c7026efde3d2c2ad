//! Mesh writers: one JSON document, or point and edge tables via Polars.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use meshgen::api::Mesh;
use polars::prelude::*;

use crate::doc::{MeshDoc, Params};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Csv,
    Parquet,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Csv => "csv",
            Format::Parquet => "parquet",
        }
    }
}

/// Write the mesh under `out` and return every file written.
///
/// JSON goes to `out` itself. Table formats write `<stem>_points.<ext>` and
/// `<stem>_edges.<ext>` next to it.
pub fn write_mesh(mesh: &Mesh, params: Params, out: &Path, format: Format) -> Result<Vec<PathBuf>> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    match format {
        Format::Json => {
            let doc = MeshDoc::from_mesh(mesh, params);
            fs::write(out, serde_json::to_vec_pretty(&doc)?)
                .with_context(|| format!("writing {}", out.display()))?;
            Ok(vec![out.to_path_buf()])
        }
        Format::Csv | Format::Parquet => {
            let points_path = sibling(out, "points", format);
            let edges_path = sibling(out, "edges", format);
            write_table(&mut points_frame(mesh)?, &points_path, format)?;
            write_table(&mut edges_frame(mesh)?, &edges_path, format)?;
            Ok(vec![points_path, edges_path])
        }
    }
}

/// `id, x, y, polygon` per vertex.
pub fn points_frame(mesh: &Mesh) -> Result<DataFrame> {
    let pts = mesh.graph.points();
    let ids: Vec<u64> = (0..pts.len() as u64).collect();
    let xs: Vec<f64> = pts.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = pts.iter().map(|p| p.y).collect();
    let polygon: Vec<Option<u64>> = (0..pts.len())
        .map(|id| mesh.polygon_of(id).map(|k| k as u64))
        .collect();
    Ok(df!("id" => ids, "x" => xs, "y" => ys, "polygon" => polygon)?)
}

/// `a, b, open` per undirected edge, lower id first.
pub fn edges_frame(mesh: &Mesh) -> Result<DataFrame> {
    let (a, b): (Vec<u64>, Vec<u64>) = mesh
        .graph
        .edges()
        .map(|(a, b)| (a as u64, b as u64))
        .unzip();
    let open: Vec<bool> = mesh
        .graph
        .edges()
        .map(|e| mesh.open_edges.contains(&e))
        .collect();
    Ok(df!("a" => a, "b" => b, "open" => open)?)
}

fn write_table(df: &mut DataFrame, path: &Path, format: Format) -> Result<()> {
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if format == Format::Parquet {
        ParquetWriter::new(file).finish(df)?;
    } else {
        CsvWriter::new(&mut file).include_header(true).finish(df)?;
    }
    tracing::debug!(path = %path.display(), rows = df.height(), "table written");
    Ok(())
}

fn sibling(out: &Path, table: &str, format: Format) -> PathBuf {
    let stem = out
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "mesh".to_string());
    out.with_file_name(format!("{stem}_{table}.{}", format.extension()))
}
