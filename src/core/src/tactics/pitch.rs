use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Upper bound of the normalized canvas coordinate space, both axes.
///
/// Token positions and drawing points share this space; pixel coordinates
/// exist only at the UI boundary and are converted via [`PitchGeometry`].
pub const COORD_MAX: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PitchMode {
    Football,
    Futsal,
}

impl PitchMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            PitchMode::Football => "Football",
            PitchMode::Futsal => "Futsal",
        }
    }

    /// Nominal pitch dimensions in metres, width x length.
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            PitchMode::Football => (68.0, 105.0),
            PitchMode::Futsal => (20.0, 40.0),
        }
    }

    /// Length-to-width ratio of the vertical pitch rendering.
    pub fn aspect_ratio(&self) -> f32 {
        let (width, length) = self.dimensions();
        length / width
    }

    /// How many players a full lineup holds in this mode.
    pub fn squad_size(&self) -> usize {
        match self {
            PitchMode::Football => 11,
            PitchMode::Futsal => 5,
        }
    }
}

/// Canvas bounding box in pixels. Converts pointer coordinates into the
/// normalized space and token/path coordinates back into pixels for
/// rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchGeometry {
    pub width: f32,
    pub height: f32,
}

impl PitchGeometry {
    pub fn new(width: f32, height: f32) -> Self {
        PitchGeometry { width, height }
    }

    /// Geometry for a canvas of the given pixel width, keeping the mode's
    /// aspect ratio.
    pub fn for_mode(mode: PitchMode, width: f32) -> Self {
        PitchGeometry {
            width,
            height: width * mode.aspect_ratio(),
        }
    }

    pub fn normalize(&self, pixel_x: f32, pixel_y: f32) -> Point2<f32> {
        Point2::new(
            clamp_coord(pixel_x / self.width * COORD_MAX),
            clamp_coord(pixel_y / self.height * COORD_MAX),
        )
    }

    pub fn denormalize(&self, point: Point2<f32>) -> Point2<f32> {
        Point2::new(
            point.x / COORD_MAX * self.width,
            point.y / COORD_MAX * self.height,
        )
    }

    pub fn denormalize_x(&self, x: f32) -> f32 {
        x / COORD_MAX * self.width
    }

    pub fn denormalize_y(&self, y: f32) -> f32 {
        y / COORD_MAX * self.height
    }
}

pub(crate) fn clamp_coord(value: f32) -> f32 {
    value.clamp(0.0, COORD_MAX)
}
