use waterfall_lod::{
    Level, LevelBufferSet, RenderResult, Viewport, ViewportSampler, WaterfallConfig,
    WaterfallError,
};

fn config(sample_width: usize, half_width: usize, levels: &[u32]) -> WaterfallConfig {
    WaterfallConfig {
        sample_width,
        half_width,
        levels: levels.to_vec(),
    }
}

fn ramp_row(width: usize, k: usize) -> Vec<f32> {
    (0..width).map(|s| (k * 100 + s + 1) as f32).collect()
}

fn level(raw: u32) -> Level {
    Level::new(raw).unwrap()
}

#[test]
fn test_level_selection_thresholds() {
    // Thresholds step at powers of two; a density exactly on a threshold
    // belongs to the next coarser level.
    let cases = [
        (3.0, 1),
        (2.5, 1),
        (2.0, 2),
        (1.5, 2),
        (1.0, 4),
        (0.9, 4),
        (0.6, 4),
        (0.5, 8),
        (0.26, 8),
        (0.25, 16),
        (0.13, 16),
        (0.125, 32),
        (0.07, 32),
        (0.0625, 64),
        (0.05, 64),
        (0.03125, 128),
        (0.01, 128),
    ];
    for (density, expected) in cases {
        assert_eq!(
            ViewportSampler::select_level(density).get(),
            expected,
            "density {} should map to level {}",
            density,
            expected
        );
    }
}

#[test]
fn test_level_selection_is_monotonic() {
    let densities = [
        4.0, 3.0, 2.0, 1.2, 0.8, 0.5, 0.3, 0.2, 0.1, 0.07, 0.04, 0.02, 0.001,
    ];
    let mut prev = 0u32;
    for density in densities {
        let selected = ViewportSampler::select_level(density).get();
        assert!(
            selected >= prev,
            "level must not get finer as density drops: {} -> {} at {}",
            prev,
            selected,
            density
        );
        prev = selected;
    }
}

#[test]
fn test_clamp_level_respects_configured_set() {
    let small = [level(1), level(2), level(4)];
    assert_eq!(ViewportSampler::clamp_level(&small, level(128)), level(4));
    assert_eq!(ViewportSampler::clamp_level(&small, level(4)), level(4));
    assert_eq!(ViewportSampler::clamp_level(&small, level(1)), level(1));

    // Nothing as fine as the ideal: fall back to the finest configured.
    let coarse = [level(4), level(8)];
    assert_eq!(ViewportSampler::clamp_level(&coarse, level(1)), level(4));
    assert_eq!(ViewportSampler::clamp_level(&coarse, level(2)), level(4));
    assert_eq!(ViewportSampler::clamp_level(&coarse, level(8)), level(8));
}

#[test]
fn test_no_wraparound_read() {
    // Single-sample rows with strictly increasing values: any rendered
    // window must come back strictly increasing along the column axis,
    // with no seam where the circular buffer wrapped.
    let mut set = LevelBufferSet::<f32>::new(config(1, 8, &[1])).unwrap();
    for k in 0..12 {
        set.ingest(&[k as f32]);
    }

    let viewport = Viewport::new(0.0, 0.0, 0.0, 7.0);
    let result = ViewportSampler::render(&set, level(1), &viewport).unwrap();
    let image = result.image().expect("window holds data");
    assert_eq!(image.data.dim(), (1, 8));
    for j in 0..8 {
        assert_eq!(image.data[[0, j]], (4 + j) as f32, "column {}", j);
    }

    // Push the cursor further and read again across the wrap point.
    for k in 12..15 {
        set.ingest(&[k as f32]);
    }
    let result = ViewportSampler::render(&set, level(1), &viewport).unwrap();
    let image = result.image().expect("window holds data");
    for j in 0..8 {
        assert_eq!(image.data[[0, j]], (7 + j) as f32, "column {}", j);
    }
}

#[test]
fn test_end_to_end_scenario() {
    let mut set = LevelBufferSet::<f32>::new(config(4, 8, &[1, 2, 4])).unwrap();
    let rows: Vec<Vec<f32>> = (0..8).map(|k| ramp_row(4, k)).collect();
    for row in &rows {
        set.ingest(row);
    }

    let viewport = Viewport::new(0.0, 3.0, 0.0, 7.0);

    // Level 1: all eight rows, in ingest order.
    let result = ViewportSampler::render(&set, level(1), &viewport).unwrap();
    let image = result.image().expect("level 1 covers the viewport");
    assert_eq!(image.data.dim(), (4, 8));
    assert_eq!(image.row_scale, 1);
    assert_eq!(image.x_offset, 0);
    assert_eq!(image.y_offset, 0);
    for (j, row) in rows.iter().enumerate() {
        assert_eq!(&image.data.column(j).to_vec(), row, "level-1 column {}", j);
    }

    // Level 2: the end of each 2-row window.
    let result = ViewportSampler::render(&set, level(2), &viewport).unwrap();
    let image = result.image().expect("level 2 covers the viewport");
    assert_eq!(image.data.dim(), (4, 4));
    assert_eq!(image.row_scale, 2);
    for (j, k) in [1usize, 3, 5, 7].iter().enumerate() {
        assert_eq!(&image.data.column(j).to_vec(), &rows[*k]);
    }

    // Level 4: exactly r3 and r7, the ends of the two windows.
    let result = ViewportSampler::render(&set, level(4), &viewport).unwrap();
    let image = result.image().expect("level 4 covers the viewport");
    assert_eq!(image.data.dim(), (4, 2));
    assert_eq!(image.row_scale, 4);
    assert_eq!(&image.data.column(0).to_vec(), &rows[3]);
    assert_eq!(&image.data.column(1).to_vec(), &rows[7]);
}

#[test]
fn test_viewport_outside_data_is_empty() {
    let mut set = LevelBufferSet::<f32>::new(config(4, 8, &[1])).unwrap();
    for k in 0..8 {
        set.ingest(&ramp_row(4, k));
    }

    // Beyond the retained half-width of history.
    let far = Viewport::new(0.0, 3.0, 100.0, 200.0);
    assert!(ViewportSampler::render(&set, level(1), &far)
        .unwrap()
        .is_empty());

    // Entirely left of the sample range.
    let off_x = Viewport::new(-10.0, -5.0, 0.0, 7.0);
    assert!(ViewportSampler::render(&set, level(1), &off_x)
        .unwrap()
        .is_empty());

    // Entirely above the data in y.
    let off_y = Viewport::new(0.0, 3.0, -50.0, -10.0);
    assert!(ViewportSampler::render(&set, level(1), &off_y)
        .unwrap()
        .is_empty());
}

#[test]
fn test_render_unconfigured_level_fails() {
    let set = LevelBufferSet::<f32>::new(config(4, 8, &[1, 2, 4])).unwrap();
    let viewport = Viewport::new(0.0, 3.0, 0.0, 7.0);
    let err = ViewportSampler::render(&set, level(8), &viewport).unwrap_err();
    assert_eq!(err, WaterfallError::LevelNotConfigured(8));
}

#[test]
fn test_render_placement_metadata() {
    let mut set = LevelBufferSet::<f32>::new(config(4, 8, &[1])).unwrap();
    for k in 0..8 {
        set.ingest(&ramp_row(4, k));
    }

    // Partial viewport: samples 1..=2, columns 2.5..=5.5.
    let viewport = Viewport::new(1.0, 2.0, 2.5, 5.5);
    let result = ViewportSampler::render(&set, level(1), &viewport).unwrap();
    let image = result.image().expect("viewport intersects the data");

    assert_eq!(image.data.dim(), (2, 4));
    assert_eq!(image.x_offset, 1);
    assert_eq!(image.y_offset, 2, "placement floors y_min");
    assert_eq!(image.row_scale, 1);
    // First column is r2, samples 1..=2.
    assert_eq!(image.data[[0, 0]], ramp_row(4, 2)[1]);
    assert_eq!(image.data[[1, 0]], ramp_row(4, 2)[2]);
}

#[test]
fn test_render_matches_fired_cadence_only() {
    // Fewer rows than a coarse level's window: that level has nothing yet,
    // but renders zeros rather than stale data.
    let mut set = LevelBufferSet::<f32>::new(config(2, 8, &[1, 4])).unwrap();
    for k in 0..3 {
        set.ingest(&ramp_row(2, k));
    }

    let viewport = Viewport::new(0.0, 1.0, 0.0, 7.0);
    let result = ViewportSampler::render(&set, level(4), &viewport).unwrap();
    let image = result.image().expect("buffer exists even before cadence");

    assert!(
        image.data.iter().all(|&v| v == 0.0),
        "level 4 has not fired after 3 rows"
    );
    assert!(matches!(
        ViewportSampler::render(&set, level(1), &viewport).unwrap(),
        RenderResult::Image(_)
    ));
}
