// File: crates/demo/src/main.rs
// Summary: Demo CLI: renders a detection curve (JSON payload or single-column CSV) to PNG,
// and exports a bundle of records with their curves to a SpreadsheetML .xls file.

use anyhow::{bail, Context, Result};
use curve_core::{theme, CurvePayload, CurveRenderer, CurveView, RenderOptions};
use curve_render_skia::RasterSurface;
use log::{info, warn};
use serde::Deserialize;
use sheet_export::workbook::build_workbook_with;
use sheet_export::{export_file_name_now, ExportOptions, ProjectRecord, RowKey, SelectOutcome, SelectionState};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const USAGE: &str = "usage:
  labcurve-demo curve <curve.json|curve.csv> [out.png] [WIDTHxHEIGHT] [dpr]
  labcurve-demo export <bundle.json> [out_dir]

env: LABCURVE_THEME=light|dark|high-contrast-dark, RUST_LOG=debug";

/// Default output directory for both commands.
const OUT_DIR: &str = "target/out";

/// One entry of an export bundle: a list row plus its fetched curve.
#[derive(Debug, Deserialize)]
struct ExportItem {
    record: ProjectRecord,
    #[serde(default)]
    curve: CurvePayload,
}

fn main() -> Result<()> {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("curve") => run_curve(&args[1..]),
        Some("export") => run_export(&args[1..]),
        _ => {
            eprintln!("{USAGE}");
            bail!("missing or unknown command");
        }
    }
}

fn render_options() -> RenderOptions {
    let theme = std::env::var("LABCURVE_THEME").map(|n| theme::find(&n)).unwrap_or_default();
    RenderOptions { theme, ..Default::default() }
}

fn run_curve(args: &[String]) -> Result<()> {
    let Some(input) = args.first().map(PathBuf::from) else {
        bail!("curve: input file required\n{USAGE}");
    };
    let out = match args.get(1) {
        Some(p) => PathBuf::from(p),
        None => out_name_with(Path::new(OUT_DIR), &input, "curve")?,
    };
    let (width, height) = match args.get(2) {
        Some(s) => parse_size(s)?,
        None => (800.0, 420.0),
    };
    let dpr: f32 = match args.get(3) {
        Some(s) => s.parse().with_context(|| format!("invalid dpr '{s}'"))?,
        None => 1.0,
    };

    let payload = load_curve(&input).with_context(|| format!("failed to load curve '{}'", input.display()))?;
    info!("loaded {} samples from {}", payload.adc_values.len(), input.display());
    match payload.stats_or_computed() {
        Some(s) => println!("min {:.3}  max {:.3}  avg {:.3}", s.min, s.max, s.avg),
        None => println!("empty curve; output shows the background only"),
    }

    let renderer = CurveRenderer::new(render_options());
    let mut surface = RasterSurface::new(width, height, dpr)?;
    let mut view = CurveView::new();
    let (x_label, y_label) = (payload.x_label().to_string(), payload.y_label().to_string());
    view.show(&renderer, &mut surface, payload.series(), x_label, y_label);
    surface.write_png(&out)?;
    println!("Wrote {}", out.display());

    // replay the cached curve on a wider layout, as after a window resize
    surface.set_client_size(width * 1.5, height);
    if view.redraw(&renderer, &mut surface) {
        let wide = out.with_file_name(format!(
            "{}_wide.png",
            out.file_stem().and_then(|s| s.to_str()).unwrap_or("curve")
        ));
        surface.write_png(&wide)?;
        println!("Wrote {}", wide.display());
    }
    Ok(())
}

fn run_export(args: &[String]) -> Result<()> {
    let Some(input) = args.first().map(PathBuf::from) else {
        bail!("export: bundle file required\n{USAGE}");
    };
    let out_dir = args.get(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from(OUT_DIR));

    let text = std::fs::read_to_string(&input).with_context(|| format!("reading {}", input.display()))?;
    let items: Vec<ExportItem> = serde_json::from_str(&text).with_context(|| format!("parsing {}", input.display()))?;
    if items.is_empty() {
        bail!("nothing selected for export");
    }

    let mut selection = SelectionState::new();
    let mut curves: HashMap<RowKey, Vec<f64>> = HashMap::new();
    let mut collisions = 0usize;
    for item in items {
        curves.insert(RowKey::of(&item.record), item.curve.adc_values);
        if selection.select(item.record) == SelectOutcome::CompositeCollision {
            collisions += 1;
        }
    }
    if collisions > 0 {
        warn!("{collisions} records shared a fallback key with another record and were dropped");
    }
    let rows = selection.records();
    let columns: Vec<Vec<f64>> = selection
        .keys()
        .map(|k| curves.remove(k).unwrap_or_default())
        .collect();

    let opts = ExportOptions::default();
    let xml = build_workbook_with(&rows, &columns, &opts).to_xml()?;
    std::fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;
    let out = out_dir.join(export_file_name_now(&opts.file_prefix));
    std::fs::write(&out, xml).with_context(|| format!("writing {}", out.display()))?;
    println!("Exported {} rows to {}", rows.len(), out.display());
    Ok(())
}

/// JSON files hold a full curve payload; anything else is read as a CSV
/// whose first column carries the samples (non-numeric rows are skipped).
fn load_curve(path: &Path) -> Result<CurvePayload> {
    let is_json = path
        .extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if is_json {
        let text = std::fs::read_to_string(path)?;
        return Ok(serde_json::from_str(&text)?);
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut values = Vec::new();
    for (i, rec) in rdr.records().enumerate() {
        let rec = rec?;
        match rec.get(0).map(str::trim).and_then(|s| s.parse::<f64>().ok()) {
            Some(v) if v.is_finite() => values.push(v),
            _ => warn!("skipping row {}: no numeric sample", i + 1),
        }
    }
    Ok(CurvePayload { adc_values: values, ..Default::default() })
}

fn parse_size(s: &str) -> Result<(f32, f32)> {
    let (w, h) = s.split_once(['x', 'X']).with_context(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    Ok((w.trim().parse()?, h.trim().parse()?))
}

/// Produce output file name like <out_dir>/curve_<stem>_<suffix>.png, creating `out_dir`.
fn out_name_with(out_dir: &Path, input: &Path, suffix: &str) -> Result<PathBuf> {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("curve");
    std::fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;
    Ok(out_dir.join(format!("curve_{}_{}.png", stem, suffix)))
}
