// Copyright 2025 the LogTrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw-command model for `LogTrack`.
//!
//! Track rendering is modelled as a pure function producing marks:
//! - a [`Mark`] is a single draw command (rect, path or text) with a stable [`MarkId`]
//!   and an explicit `z_index`,
//! - a [`Frame`] is the full, z-ordered list of marks for one repaint, and
//! - a [`Surface`] replays a frame against a concrete 2D backend.
//!
//! Nothing here is incremental: every repaint builds a new frame and replays it from scratch.

#![no_std]

extern crate alloc;

mod frame;
mod mark;
mod surface;

pub use frame::Frame;
pub use mark::{
    Mark, MarkBuilder, MarkId, MarkKind, MarkPayload, PathPayload, PayloadBuilder, RectPayload,
    TextAnchor, TextBaseline, TextPayload,
};
pub use surface::{Surface, is_transparent};
