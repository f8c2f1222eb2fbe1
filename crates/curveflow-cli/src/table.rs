//! Per-vertex diagnostics as a polars table.
//!
//! One row per vertex: position, tangent, normal, tangent-difference curvature,
//! flow speed and circumradius curvature. Components with a zero-length edge get
//! nulls in the tangent-derived columns.

use anyhow::{Context, Result};
use curveflow::api::{
    compute_curvatures, compute_normals, compute_tangents, point_curvatures, CurveCollection,
};
use curveflow::flow::vertex_difference_curvatures;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

#[derive(Default)]
struct Columns {
    component: Vec<u64>,
    index: Vec<u64>,
    x: Vec<f64>,
    y: Vec<f64>,
    tangent_x: Vec<Option<f64>>,
    tangent_y: Vec<Option<f64>>,
    normal_x: Vec<Option<f64>>,
    normal_y: Vec<Option<f64>>,
    tangent_curvature: Vec<Option<f64>>,
    flow_speed: Vec<f64>,
    point_curvature: Vec<f64>,
}

/// Build the per-vertex table for every component.
pub fn vertex_table(collection: &CurveCollection) -> Result<DataFrame> {
    let mut cols = Columns::default();
    for (ci, comp) in collection.iter().enumerate() {
        let v = comp.vertices();
        let frames = match compute_tangents(v) {
            Ok(t) => {
                let n = compute_normals(&t);
                let k = compute_curvatures(&t);
                Some((t, n, k))
            }
            Err(e) => {
                tracing::warn!(component = ci, error = %e, "tangent columns left null");
                None
            }
        };
        let speeds = vertex_difference_curvatures(v);
        let pk = point_curvatures(v);
        for (i, p) in v.iter().enumerate() {
            cols.component.push(u64::try_from(ci)?);
            cols.index.push(u64::try_from(i)?);
            cols.x.push(p.x);
            cols.y.push(p.y);
            let (t, n, k) = match &frames {
                Some((t, n, k)) => (Some(t[i]), Some(n[i]), Some(k[i])),
                None => (None, None, None),
            };
            cols.tangent_x.push(t.map(|t| t.x));
            cols.tangent_y.push(t.map(|t| t.y));
            cols.normal_x.push(n.map(|n| n.x));
            cols.normal_y.push(n.map(|n| n.y));
            cols.tangent_curvature.push(k);
            cols.flow_speed.push(speeds[i]);
            cols.point_curvature.push(pk[i]);
        }
    }
    let df = df!(
        "component" => cols.component,
        "index" => cols.index,
        "x" => cols.x,
        "y" => cols.y,
        "tangent_x" => cols.tangent_x,
        "tangent_y" => cols.tangent_y,
        "normal_x" => cols.normal_x,
        "normal_y" => cols.normal_y,
        "tangent_curvature" => cols.tangent_curvature,
        "flow_speed" => cols.flow_speed,
        "point_curvature" => cols.point_curvature
    )?;
    Ok(df)
}

/// Per-component aggregates of the vertex table, in component order.
pub fn component_summary(df: &DataFrame) -> Result<DataFrame> {
    let out = df
        .clone()
        .lazy()
        .group_by_stable([col("component")])
        .agg([
            col("index").count().alias("vertices"),
            col("flow_speed").sum().alias("perimeter"),
            col("point_curvature").max().alias("max_point_curvature"),
            col("tangent_curvature").mean().alias("mean_tangent_curvature"),
        ])
        .collect()?;
    Ok(out)
}

/// Write as Parquet when the extension says so, CSV otherwise.
pub fn write_table(df: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("parquet") => {
            ParquetWriter::new(file).finish(df)?;
        }
        _ => {
            CsvWriter::new(file).include_header(true).finish(df)?;
        }
    }
    Ok(())
}
