// File: crates/curve-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic curves (no text) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else fails: a missing snapshot is not a pass.
// Ignored by default until the PNGs under tests/__snapshots__ are blessed:
//   UPDATE_SNAPSHOTS=1 cargo test -p curve-render-skia --test snapshot -- --ignored

use curve_core::{CurveRenderer, RenderOptions};
use curve_render_skia::render_png;

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, bytes: &[u8]) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    assert!(path.exists(), "missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless", path.display());
    let want = std::fs::read(&path).expect("read snapshot");
    let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
    let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
    assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
}

fn render(series: &[f64]) -> Vec<u8> {
    let renderer = CurveRenderer::new(RenderOptions { draw_labels: false, ..Default::default() });
    render_png(&renderer, series, "X", "Y", 480.0, 300.0, 1.0).expect("render bytes")
}

#[test]
#[ignore = "golden PNGs not blessed yet; run with UPDATE_SNAPSHOTS=1 and --ignored"]
fn golden_detection_curve() {
    // baseline, a test-line peak, and a control-line peak
    let data: Vec<f64> = (0..200)
        .map(|i| {
            let x = i as f64;
            0.4 + 1.8 * (-((x - 60.0) / 8.0).powi(2)).exp() + 2.6 * (-((x - 140.0) / 9.0).powi(2)).exp()
        })
        .collect();
    write_or_compare("detection_curve.png", &render(&data));
}

#[test]
#[ignore = "golden PNGs not blessed yet; run with UPDATE_SNAPSHOTS=1 and --ignored"]
fn golden_single_point() {
    write_or_compare("single_point.png", &render(&[3.3]));
}
