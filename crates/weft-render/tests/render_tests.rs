//! Integration tests for weft-render.

use std::fs;
use std::path::PathBuf;

use weft_grid::{ClothParams, ParticleGrid};
use weft_render::csv_exporter::{clean_output_dir, CSV_HEADER};
use weft_render::{CsvFrameExporter, HeadlessRenderer, JsonFrameExporter, RenderFrame, Renderer};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("weft-render-{}-{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn grid(rows: usize, cols: usize) -> ParticleGrid {
    ParticleGrid::new(rows, cols, &ClothParams::default()).unwrap()
}

// ─── Frames ───────────────────────────────────────────────────

#[test]
fn capture_is_row_major() {
    let g = grid(2, 3);
    let frame = RenderFrame::capture(7, &g);
    assert_eq!(frame.timestep, 7);
    assert_eq!((frame.rows, frame.cols), (2, 3));
    assert_eq!(frame.positions.len(), 6);
    assert_eq!(frame.positions[1], [0.5, 0.0, 0.0]);
    assert_eq!(frame.positions[3], [0.0, 1.0, 0.0]);
}

// ─── Headless ─────────────────────────────────────────────────

#[test]
fn headless_counts_frames() {
    let mut renderer = HeadlessRenderer::new();
    renderer.init(2, 2).unwrap();
    assert_eq!(renderer.name(), "headless");
    assert_eq!(renderer.frame_count(), 0);

    let frame = RenderFrame::capture(0, &grid(2, 2));
    renderer.submit_frame(&frame).unwrap();
    renderer.submit_frame(&frame).unwrap();
    renderer.finalize().unwrap();
    assert_eq!(renderer.frame_count(), 2);
}

// ─── CSV ──────────────────────────────────────────────────────

#[test]
fn csv_text_layout() {
    let frame = RenderFrame::from_positions(0, 1, 2, vec![[0.0, 0.0, 0.0], [1.5, -2.0, 0.25]]);
    let text = CsvFrameExporter::frame_to_csv(&frame);
    assert_eq!(text, "x,y,z\n0,0,0\n1.5,-2,0.25\n");
}

#[test]
fn csv_writes_one_file_per_frame() {
    let dir = scratch_dir("frames");
    let g = grid(3, 3);
    let mut exporter = CsvFrameExporter::new(&dir);
    exporter.init(3, 3).unwrap();
    exporter.submit_frame(&RenderFrame::capture(0, &g)).unwrap();
    exporter.submit_frame(&RenderFrame::capture(20, &g)).unwrap();
    exporter.finalize().unwrap();
    assert_eq!(exporter.frame_count(), 2);

    let text = fs::read_to_string(dir.join("cloth_step_20.csv")).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], CSV_HEADER);
    assert_eq!(lines.len(), 1 + 9);
    assert_eq!(lines[2], "0.5,0,0");
    assert!(dir.join("cloth_step_0.csv").exists());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn init_removes_stale_csv_only() {
    let dir = scratch_dir("stale");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("cloth_step_999.csv"), "old").unwrap();
    fs::write(dir.join("notes.txt"), "keep").unwrap();

    let mut exporter = CsvFrameExporter::new(&dir);
    exporter.init(2, 2).unwrap();

    assert!(!dir.join("cloth_step_999.csv").exists());
    assert!(dir.join("notes.txt").exists());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn clean_creates_missing_dir() {
    let dir = scratch_dir("fresh").join("nested");
    assert_eq!(clean_output_dir(&dir).unwrap(), 0);
    assert!(dir.is_dir());
    fs::remove_dir_all(dir.parent().unwrap()).unwrap();
}

// ─── JSON ─────────────────────────────────────────────────────

#[test]
fn json_exporter_writes_animation() {
    let dir = scratch_dir("json");
    let path = dir.join("anim.json");
    let g = grid(2, 2);

    let mut exporter = JsonFrameExporter::new(&path);
    exporter.init(2, 2).unwrap();
    exporter.submit_frame(&RenderFrame::capture(0, &g)).unwrap();
    exporter.submit_frame(&RenderFrame::capture(1, &g)).unwrap();
    assert_eq!(exporter.frame_count(), 2);
    exporter.finalize().unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["rows"], 2);
    assert_eq!(value["cols"], 2);
    assert_eq!(value["frames"].as_array().unwrap().len(), 2);
    assert_eq!(value["frames"][1]["timestep"], 1);
    assert_eq!(value["frames"][0]["positions"][3][0], 1.0);

    fs::remove_dir_all(&dir).unwrap();
}
