// File: crates/chart-labels/tests/snapshot.rs
// Purpose: Golden text snapshot of generated tooltips with bless flow.
// Behavior:
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares text for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use chart_labels::{DefaultXyzDataset, StandardXyToolTipGenerator, StandardXyzToolTipGenerator, XyDataset};

fn append_all<F>(out: &mut String, ds: &DefaultXyzDataset, generate: F)
where
    F: Fn(usize, usize) -> chart_labels::Result<String>,
{
    for s in 0..ds.series_count() {
        for i in 0..ds.item_count(s) {
            out.push_str(&generate(s, i).expect("generate"));
            out.push('\n');
        }
    }
}

fn render_text() -> String {
    let ds = DefaultXyzDataset::new()
        .with_points("alpha", &[(0.0, 1.0, 2.0), (1.5, -2.25, 1000.0)])
        .with_points("beta", &[(12345.6789, 0.001, -0.5)]);
    let xyz = StandardXyzToolTipGenerator::default();
    let xy = StandardXyToolTipGenerator::default();

    let mut out = String::new();
    append_all(&mut out, &ds, |s, i| xyz.generate(&ds, s, i));
    append_all(&mut out, &ds, |s, i| xy.generate(&ds, s, i));
    out
}

#[test]
fn golden_tooltips() {
    let text = render_text();
    let snap_path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/tooltips.txt");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        if let Some(parent) = snap_path.parent() { std::fs::create_dir_all(parent).expect("create snapshots dir"); }
        std::fs::write(&snap_path, &text).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), text.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read_to_string(&snap_path).expect("read snapshot").replace("\r\n", "\n");
        assert_eq!(text, want, "tooltips differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}
