// Copyright 2025 the LogTrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A stateful log view bound to one drawing surface.
//!
//! [`TrackView`] holds the inputs of a panel render (wells, depth window, size, visibility) and
//! decides when to repaint:
//! - changing an input repaints on the next [`TrackView::tick`],
//! - resize notifications are coalesced and repaint once the burst has settled.
//!
//! Every repaint clears the surface and replays a freshly built frame, so repeated repaints with
//! unchanged inputs produce identical output.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::time::Duration;

use kurbo::Point;
use logtrack_core::{Frame, Surface};

use crate::hit_test::Hit;
use crate::layout::Size;
use crate::measure::{HeuristicTextMeasurer, TextMeasurer};
use crate::panel::{CorrelationSpec, RenderedPanel};
use crate::redraw::{Debouncer, ResizeEvents, ResizeSubscription};
use crate::visibility::SeriesVisibility;
use crate::well::{DepthRange, Well};

/// Called with `(curve_name, well_name)` when a click lands on a rendered sample.
pub type ClickHandler = Box<dyn FnMut(&str, &str)>;

/// A log panel bound to the surface it exclusively paints.
pub struct TrackView<S> {
    surface: S,
    spec: CorrelationSpec,
    wells: Vec<Well>,
    window: Option<DepthRange>,
    size: Size,
    visibility: SeriesVisibility,
    measurer: Box<dyn TextMeasurer>,
    on_click: Option<ClickHandler>,
    resize: Option<ResizeSubscription>,
    debouncer: Debouncer,
    pending_size: Option<Size>,
    dirty: bool,
    rendered: Option<RenderedPanel>,
    redraw_count: usize,
}

impl<S> fmt::Debug for TrackView<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackView")
            .field("wells", &self.wells.len())
            .field("window", &self.window)
            .field("size", &self.size)
            .field("visibility", &self.visibility)
            .field("debouncer", &self.debouncer)
            .field("dirty", &self.dirty)
            .field("redraw_count", &self.redraw_count)
            .finish_non_exhaustive()
    }
}

impl<S: Surface> TrackView<S> {
    /// Creates a view of no wells. The first [`tick`](Self::tick) paints.
    pub fn new(surface: S, spec: CorrelationSpec, size: Size) -> Self {
        Self {
            surface,
            spec,
            wells: Vec::new(),
            window: None,
            size,
            visibility: SeriesVisibility::new(),
            measurer: Box::new(HeuristicTextMeasurer),
            on_click: None,
            resize: None,
            debouncer: Debouncer::default(),
            pending_size: None,
            dirty: true,
            rendered: None,
            redraw_count: 0,
        }
    }

    /// Subscribes to resize notifications for as long as the view lives.
    pub fn with_resize_source(mut self, events: &ResizeEvents) -> Self {
        self.resize = Some(events.subscribe());
        self
    }

    /// Sets the quiet period applied to resize bursts.
    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.debouncer = Debouncer::new(delay);
        self
    }

    /// Replaces the text measurer used for layout.
    pub fn with_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Box::new(measurer);
        self.dirty = true;
        self
    }

    /// Replaces the wells.
    pub fn set_wells(&mut self, wells: Vec<Well>) {
        self.wells = wells;
        self.dirty = true;
    }

    /// Sets the depth window; `None` shows the union of the wells' sections.
    pub fn set_window(&mut self, window: Option<DepthRange>) {
        self.window = window;
        self.dirty = true;
    }

    /// Replaces the panel settings.
    pub fn set_spec(&mut self, spec: CorrelationSpec) {
        self.spec = spec;
        self.dirty = true;
    }

    /// Resizes immediately, bypassing the debounce.
    pub fn set_size(&mut self, size: Size) {
        if let Some(sub) = &self.resize {
            // Queued events predate this size.
            sub.drain();
        }
        self.size = size;
        self.pending_size = None;
        self.debouncer.cancel();
        self.dirty = true;
    }

    /// Shows or hides a curve and returns its new visibility.
    pub fn toggle_curve(&mut self, curve: &str) -> bool {
        self.dirty = true;
        self.visibility.toggle_curve(curve)
    }

    /// Shows or hides a track and returns its new visibility.
    pub fn toggle_track(&mut self, title: &str) -> bool {
        self.dirty = true;
        self.visibility.toggle_track(title)
    }

    /// Current visibility toggles.
    pub fn visibility(&self) -> &SeriesVisibility {
        &self.visibility
    }

    /// Registers the click callback.
    pub fn on_click(&mut self, handler: impl FnMut(&str, &str) + 'static) {
        self.on_click = Some(Box::new(handler));
    }

    /// Advances the view to `now`, repainting if anything is due.
    ///
    /// Returns `true` if the surface was repainted.
    pub fn tick(&mut self, now: Duration) -> bool {
        if let Some(sub) = &self.resize {
            for event in sub.drain() {
                self.pending_size = Some(event.size);
                self.debouncer.trigger(event.at);
            }
        }
        if self.debouncer.poll(now)
            && let Some(size) = self.pending_size.take()
        {
            tracing::trace!(width = size.width, height = size.height, "resize settled");
            self.size = size;
            self.dirty = true;
        }
        if !self.dirty {
            return false;
        }
        self.redraw();
        true
    }

    /// Rebuilds the frame and repaints the surface.
    pub fn redraw(&mut self) {
        let rendered = self.spec.render(
            &self.wells,
            self.window,
            Some(self.size),
            &self.visibility,
            self.measurer.as_ref(),
        );
        rendered.frame.paint(&mut self.surface);
        self.redraw_count += 1;
        self.dirty = false;
        tracing::debug!(
            redraws = self.redraw_count,
            marks = rendered.frame.len(),
            "repainted track view"
        );
        self.rendered = Some(rendered);
    }

    /// Hit-tests a pointer position against the last repaint.
    ///
    /// On a hit the click callback receives `(curve_name, well_name)`.
    pub fn click(&mut self, pointer: Point) -> Option<Hit> {
        let hit = self.rendered.as_ref()?.hit_test(pointer)?;
        if let Some(handler) = self.on_click.as_mut() {
            handler(hit.curve(), hit.well());
        }
        Some(hit)
    }

    /// The surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The current size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The frame of the last repaint.
    pub fn frame(&self) -> Option<&Frame> {
        self.rendered.as_ref().map(|r| &r.frame)
    }

    /// The last repaint's full output.
    pub fn rendered(&self) -> Option<&RenderedPanel> {
        self.rendered.as_ref()
    }

    /// Number of repaints so far.
    pub fn redraw_count(&self) -> usize {
        self.redraw_count
    }

    /// Returns `true` if a repaint is due on the next tick or a resize burst is settling.
    pub fn is_pending(&self) -> bool {
        self.dirty || self.debouncer.is_pending()
    }

    /// Unbinds the surface, ending the resize subscription.
    pub fn into_surface(self) -> S {
        self.surface
    }
}
