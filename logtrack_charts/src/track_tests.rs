// Copyright 2025 the LogTrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end scenarios across scales, sampling, fills, tracks and the view.

extern crate std;

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::time::Duration;

use kurbo::{BezPath, Point, Rect, Vec2};
use logtrack_core::{Mark, Surface, TextPayload};
use peniko::Brush;

use crate::{
    CorrelationSpec, Curve, DepthRange, FillPredicate, LogPanelSpec, ResizeEvents, ScaleConfig,
    SeriesVisibility, Size, TrackContext, TrackView, Well, composite, default_tracks,
    depth_to_pixel, gamma_ray_track, threshold_samples, value_to_pixel, visible_points, z_order,
};

#[derive(Debug, Default)]
struct Recorder {
    clears: usize,
    ops: usize,
}

impl Surface for Recorder {
    fn clear(&mut self, _view: Rect) {
        self.clears += 1;
        self.ops = 0;
    }

    fn fill_rect(&mut self, _rect: Rect, _fill: &Brush) {
        self.ops += 1;
    }

    fn fill_path(&mut self, _path: &BezPath, _fill: &Brush) {
        self.ops += 1;
    }

    fn stroke_path(&mut self, _path: &BezPath, _stroke: &Brush, _stroke_width: f64) {
        self.ops += 1;
    }

    fn draw_text(&mut self, _text: &TextPayload) {
        self.ops += 1;
    }
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn gr_well() -> Well {
    Well::new("A-1", DepthRange::new(100.0, 104.0)).with_curve(Curve::new(
        "GR",
        "API",
        vec![20.0, 40.0, 90.0, 110.0, 30.0],
    ))
}

#[test]
fn depth_mapping_hits_both_edges_and_is_monotonic() {
    let range = DepthRange::new(1000.0, 2000.0);
    assert_eq!(depth_to_pixel(1000.0, range, 500.0), 0.0);
    assert_eq!(depth_to_pixel(2000.0, range, 500.0), 500.0);
    let ys: Vec<f64> = (0..=100)
        .map(|i| depth_to_pixel(1000.0 + 10.0 * f64::from(i), range, 500.0))
        .collect();
    assert!(ys.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn out_of_scale_values_clamp_to_the_track_edges() {
    let gr = ScaleConfig::linear(0.0, 150.0);
    assert_eq!(value_to_pixel(400.0, &gr, 120.0), 120.0);
    assert_eq!(value_to_pixel(-50.0, &gr, 120.0), 0.0);
    let res = ScaleConfig::log(0.2, 2000.0);
    assert_eq!(value_to_pixel(0.0, &res, 120.0), 0.0);
    assert_eq!(value_to_pixel(1e9, &res, 120.0), 120.0);
}

#[test]
fn null_samples_are_never_drawn() {
    let well = Well::new("A-1", DepthRange::new(0.0, 4.0)).with_curve(
        Curve::new("GR", "API", vec![10.0, -999.25, 30.0, f64::NAN, 50.0]),
    );
    let points: Vec<_> = visible_points(&well, "gr", well.depth_range)
        .expect("curve present")
        .collect();
    let depths: Vec<f64> = points.iter().map(|p| p.depth).collect();
    assert_eq!(depths, vec![0.0, 2.0, 4.0]);
}

#[test]
fn samples_outside_the_window_are_dropped() {
    let well = gr_well();
    let window = DepthRange::new(100.5, 103.0);
    let points: Vec<_> = visible_points(&well, "GR", window)
        .expect("curve present")
        .collect();
    assert!(points.iter().all(|p| window.contains(p.depth)));
    let depths: Vec<f64> = points.iter().map(|p| p.depth).collect();
    // The window is inclusive at both ends.
    assert_eq!(depths, vec![101.0, 102.0, 103.0]);
}

#[test]
fn rendering_twice_is_identical() {
    let well = gr_well();
    let visibility = SeriesVisibility::new();
    let ctx = TrackContext {
        id_base: 7,
        well: &well,
        window: well.depth_range,
        header: Rect::new(0.0, 0.0, 150.0, 56.0),
        plot: Rect::new(0.0, 56.0, 150.0, 456.0),
        visibility: &visibility,
    };
    let track = gamma_ray_track();
    let a = track.render(&ctx);
    let b = track.render(&ctx);
    assert_eq!(a.marks, b.marks);
    assert_eq!(a.regions, b.regions);
}

#[test]
fn gamma_ray_separates_sand_from_shale() {
    let well = gr_well();
    let points: Vec<_> = visible_points(&well, "GR", well.depth_range)
        .expect("curve present")
        .collect();
    let samples = threshold_samples(points, 75.0);

    let shale = composite(&samples, FillPredicate::Greater);
    assert_eq!(shale.len(), 1);
    let (top, bottom) = shale[0].depth_span();
    assert!(approx(top, 101.7), "{top}");
    assert!(approx(bottom, 103.4375), "{bottom}");

    let sand = composite(&samples, FillPredicate::Less);
    assert_eq!(sand.len(), 2);
    let spans: Vec<(f64, f64)> = sand.iter().map(|r| r.depth_span()).collect();
    assert!(approx(spans[0].0, 100.0) && approx(spans[0].1, 101.7), "{spans:?}");
    assert!(approx(spans[1].0, 103.4375) && approx(spans[1].1, 104.0), "{spans:?}");
}

#[test]
fn resize_burst_repaints_once_after_it_settles() {
    let events = ResizeEvents::new();
    let spec = CorrelationSpec::new(LogPanelSpec::new(default_tracks()));
    let mut view =
        TrackView::new(Recorder::default(), spec, Size::new(800.0, 600.0)).with_resize_source(&events);
    view.set_wells(vec![gr_well()]);
    assert!(view.tick(ms(0)));
    assert_eq!(view.redraw_count(), 1);

    for i in 0..10 {
        let at = ms(5 * i);
        events.emit(Size::new(800.0 + 10.0 * (i as f64), 600.0), at);
        assert!(!view.tick(at));
    }
    assert!(!view.tick(ms(144)));
    assert_eq!(view.redraw_count(), 1);
    assert!(view.tick(ms(145)));
    assert_eq!(view.redraw_count(), 2);
    assert_eq!(view.size(), Size::new(890.0, 600.0));
    assert!(!view.tick(ms(400)));
    assert_eq!(view.surface().clears, 2);
}

#[test]
fn explicit_size_discards_queued_resize_events() {
    let events = ResizeEvents::new();
    let spec = CorrelationSpec::new(LogPanelSpec::new(default_tracks()));
    let mut view =
        TrackView::new(Recorder::default(), spec, Size::new(800.0, 600.0)).with_resize_source(&events);
    view.set_wells(vec![gr_well()]);
    events.emit(Size::new(300.0, 300.0), ms(5));
    view.set_size(Size::new(1000.0, 700.0));
    view.tick(ms(10));
    assert_eq!(view.size(), Size::new(1000.0, 700.0));
    view.tick(ms(200));
    assert_eq!(view.size(), Size::new(1000.0, 700.0));
    assert_eq!(view.redraw_count(), 1);
}

#[test]
fn dropping_the_view_ends_its_resize_subscription() {
    let events = ResizeEvents::new();
    let spec = CorrelationSpec::new(LogPanelSpec::new(default_tracks()));
    let view = TrackView::new(Recorder::default(), spec, Size::new(400.0, 300.0))
        .with_resize_source(&events);
    assert_eq!(events.subscriber_count(), 1);
    drop(view);
    assert_eq!(events.subscriber_count(), 0);
}

#[test]
fn clicks_report_curve_and_well_within_twenty_pixels() {
    let well = Well::new("A-1", DepthRange::new(100.0, 104.0))
        .with_curve(Curve::new("GR", "API", vec![50.0; 5]));
    let spec = CorrelationSpec::new(LogPanelSpec::new(default_tracks()));
    let mut view = TrackView::new(Recorder::default(), spec, Size::new(800.0, 600.0));
    view.set_wells(vec![well]);
    let clicks: Rc<RefCell<Vec<(String, String)>>> = Rc::default();
    let sink = clicks.clone();
    view.on_click(move |curve, well| sink.borrow_mut().push((curve.into(), well.into())));
    view.tick(ms(0));

    let target = view
        .rendered()
        .and_then(|r| r.hits.targets().get(2))
        .map(|t| t.position)
        .expect("rendered sample");
    let hit = view.click(target).expect("exact hit");
    assert_eq!(hit.depth(), 102.0);
    assert_eq!(
        clicks.borrow().as_slice(),
        &[(String::from("GR"), String::from("A-1"))]
    );

    assert!(view.click(target + Vec2::new(30.0, 0.0)).is_none());
    assert_eq!(clicks.borrow().len(), 1);
}

#[test]
fn single_sample_curve_renders_a_marker() {
    let well = Well::new("A-1", DepthRange::new(100.0, 100.0))
        .with_curve(Curve::new("GR", "API", vec![60.0]));
    assert!(well.validate().is_empty());
    let panel = LogPanelSpec::new(vec![gamma_ray_track()]);
    let out = panel.render(
        &well,
        Some(DepthRange::new(90.0, 110.0)),
        None,
        &SeriesVisibility::new(),
        &crate::HeuristicTextMeasurer,
    );
    let markers: Vec<&Mark> = out
        .frame
        .marks()
        .iter()
        .filter(|m| m.z_index == z_order::SERIES_POINTS)
        .collect();
    assert_eq!(markers.len(), 1);
    assert_eq!(out.hits.len(), 1);
    let p = &out.hits.targets()[0];
    assert!(out.hit_test(p.position + Vec2::new(0.0, 5.0)).is_some());
    assert_eq!(p.depth, 100.0);
}

#[test]
fn toggling_a_curve_repaints_without_it() {
    let spec = CorrelationSpec::new(LogPanelSpec::new(default_tracks()));
    let mut view = TrackView::new(Recorder::default(), spec, Size::new(800.0, 600.0));
    view.set_wells(vec![gr_well()]);
    view.tick(ms(0));
    let before = view.rendered().map_or(0, |r| r.hits.len());
    assert_eq!(before, 5);

    assert!(!view.toggle_curve("GR"));
    assert!(view.tick(ms(1)));
    assert!(view.rendered().is_some_and(|r| r.hits.is_empty()));
    assert!(view.click(Point::new(100.0, 100.0)).is_none());
}
