use crate::tactics::pitch::clamp_coord;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

pub const DEFAULT_STROKE_WIDTH: f32 = 1.2;
pub const DEFAULT_STROKE_COLOR: &str = "chalk";

/// One committed free-hand stroke. Points are ordered capture order in the
/// normalized 0-100 space. Immutable once committed, except for bulk clear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawPath {
    pub id: u32,
    pub points: Vec<Point2<f32>>,
    pub color_tag: String,
    pub stroke_width: f32,
}

impl DrawPath {
    /// Degenerate strokes (a tap without movement) are kept and rendered
    /// as dots rather than discarded.
    pub fn is_dot(&self) -> bool {
        self.points.len() <= 1
    }

    pub fn dot_center(&self) -> Option<Point2<f32>> {
        self.points.first().copied()
    }

    /// SVG path data for a committed stroke, `M x y L x y ...`. Empty for
    /// dots; those render as circles at [`DrawPath::dot_center`].
    pub fn svg_path_data(&self) -> String {
        if self.is_dot() {
            return String::new();
        }

        let mut data = String::new();

        for (index, point) in self.points.iter().enumerate() {
            let command = if index == 0 { 'M' } else { 'L' };
            write!(data, "{}{} {} ", command, point.x, point.y).unwrap();
        }

        data.trim_end().to_string()
    }
}

/// Free-hand annotation layer. Captures pointer movement into an
/// in-progress polyline and commits it on pointer-up.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingLayer {
    paths: Vec<DrawPath>,
    active: Option<DrawPath>,
    next_path_id: u32,
    color_tag: String,
    stroke_width: f32,
}

impl Default for DrawingLayer {
    fn default() -> Self {
        DrawingLayer::new()
    }
}

impl DrawingLayer {
    pub fn new() -> Self {
        DrawingLayer {
            paths: Vec::new(),
            active: None,
            next_path_id: 1,
            color_tag: DEFAULT_STROKE_COLOR.to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }

    /// Rebuilds the layer from persisted paths; the id sequence continues
    /// after the highest committed id.
    pub fn from_paths(paths: Vec<DrawPath>) -> Self {
        let next_path_id = paths.iter().map(|path| path.id).max().unwrap_or(0) + 1;

        DrawingLayer {
            paths,
            active: None,
            next_path_id,
            color_tag: DEFAULT_STROKE_COLOR.to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }

    pub fn set_pen(&mut self, color_tag: &str, stroke_width: f32) {
        self.color_tag = color_tag.to_string();
        self.stroke_width = stroke_width;
    }

    /// Starts a new stroke at the pointer-down position. A still-active
    /// stroke means its pointer-up got lost; it is committed first so no
    /// captured ink is dropped.
    pub fn begin_stroke(&mut self, x: f32, y: f32) {
        if self.active.is_some() {
            self.end_stroke();
        }

        let id = self.next_path_id;
        self.next_path_id += 1;

        self.active = Some(DrawPath {
            id,
            points: vec![Point2::new(clamp_coord(x), clamp_coord(y))],
            color_tag: self.color_tag.clone(),
            stroke_width: self.stroke_width,
        });
    }

    /// Appends a point to the in-progress stroke. No-op when no stroke is
    /// active.
    pub fn extend_stroke(&mut self, x: f32, y: f32) {
        if let Some(active) = self.active.as_mut() {
            active.points.push(Point2::new(clamp_coord(x), clamp_coord(y)));
        }
    }

    /// Commits the in-progress stroke, degenerate or not, and clears the
    /// buffer. Returns the committed path id.
    pub fn end_stroke(&mut self) -> Option<u32> {
        let path = self.active.take()?;
        let id = path.id;

        self.paths.push(path);

        Some(id)
    }

    /// Drops the in-progress stroke without committing it.
    pub fn cancel_stroke(&mut self) {
        self.active = None;
    }

    pub fn clear_all(&mut self) {
        self.paths.clear();
        self.active = None;
    }

    pub fn has_active_stroke(&self) -> bool {
        self.active.is_some()
    }

    pub fn paths(&self) -> &[DrawPath] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_lifecycle_commits_ordered_points() {
        let mut layer = DrawingLayer::new();

        layer.begin_stroke(10.0, 10.0);
        layer.extend_stroke(20.0, 20.0);
        layer.extend_stroke(30.0, 25.0);
        layer.end_stroke();

        assert_eq!(layer.len(), 1);

        let path = &layer.paths()[0];
        assert_eq!(path.points.len(), 3);
        assert_eq!(path.points[0], Point2::new(10.0, 10.0));
        assert_eq!(path.points[2], Point2::new(30.0, 25.0));
        assert!(!layer.has_active_stroke());
    }

    #[test]
    fn tap_without_movement_commits_a_dot() {
        let mut layer = DrawingLayer::new();

        layer.begin_stroke(40.0, 60.0);
        layer.end_stroke();

        assert_eq!(layer.len(), 1);

        let path = &layer.paths()[0];
        assert!(path.is_dot());
        assert_eq!(path.dot_center(), Some(Point2::new(40.0, 60.0)));
        assert_eq!(path.svg_path_data(), "");
    }

    #[test]
    fn extend_without_begin_is_a_noop() {
        let mut layer = DrawingLayer::new();

        layer.extend_stroke(10.0, 10.0);
        assert_eq!(layer.end_stroke(), None);
        assert!(layer.is_empty());
    }

    #[test]
    fn begin_while_active_commits_the_previous_stroke() {
        let mut layer = DrawingLayer::new();

        layer.begin_stroke(10.0, 10.0);
        layer.extend_stroke(15.0, 15.0);
        layer.begin_stroke(50.0, 50.0);
        layer.end_stroke();

        assert_eq!(layer.len(), 2);
        assert_eq!(layer.paths()[0].points.len(), 2);
        assert_eq!(layer.paths()[1].points.len(), 1);
    }

    #[test]
    fn path_ids_are_monotonic_and_unique() {
        let mut layer = DrawingLayer::new();

        for i in 0..4 {
            layer.begin_stroke(i as f32, i as f32);
            layer.end_stroke();
        }

        let ids: Vec<u32> = layer.paths().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn id_sequence_continues_after_reload() {
        let mut layer = DrawingLayer::new();
        layer.begin_stroke(1.0, 1.0);
        layer.end_stroke();
        layer.begin_stroke(2.0, 2.0);
        layer.end_stroke();

        let mut reloaded = DrawingLayer::from_paths(layer.paths().to_vec());
        reloaded.begin_stroke(3.0, 3.0);
        reloaded.end_stroke();

        assert_eq!(reloaded.paths().last().unwrap().id, 3);
    }

    #[test]
    fn clear_all_empties_committed_and_active() {
        let mut layer = DrawingLayer::new();
        layer.begin_stroke(1.0, 1.0);
        layer.end_stroke();
        layer.begin_stroke(2.0, 2.0);

        layer.clear_all();

        assert!(layer.is_empty());
        assert!(!layer.has_active_stroke());
    }

    #[test]
    fn points_are_clamped_into_canvas() {
        let mut layer = DrawingLayer::new();

        layer.begin_stroke(-10.0, 50.0);
        layer.extend_stroke(120.0, 50.0);
        layer.end_stroke();

        let path = &layer.paths()[0];
        assert_eq!(path.points[0], Point2::new(0.0, 50.0));
        assert_eq!(path.points[1], Point2::new(100.0, 50.0));
    }

    #[test]
    fn pen_settings_apply_to_strokes_committed_afterwards() {
        let mut layer = DrawingLayer::new();

        layer.begin_stroke(1.0, 1.0);
        layer.end_stroke();

        layer.set_pen("red", 3.0);
        layer.begin_stroke(2.0, 2.0);
        layer.end_stroke();

        assert_eq!(layer.paths()[0].color_tag, DEFAULT_STROKE_COLOR);
        assert_eq!(layer.paths()[1].color_tag, "red");
        assert_eq!(layer.paths()[1].stroke_width, 3.0);
    }

    #[test]
    fn svg_path_data_uses_move_then_line_commands() {
        let mut layer = DrawingLayer::new();

        layer.begin_stroke(10.0, 10.0);
        layer.extend_stroke(20.0, 20.0);
        layer.end_stroke();

        assert_eq!(layer.paths()[0].svg_path_data(), "M10 10 L20 20");
    }
}
