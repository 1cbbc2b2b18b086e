//! Local-only view transforms
//!
//! Zoom, pan, flip, and color filters never reach the image service. Flip and
//! filter are baked into per-item exports; zoom and pan only affect the preview.

use serde::{Deserialize, Serialize};

pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 4.0;
pub const ZOOM_STEP: f32 = 0.25;
pub const DEFAULT_ZOOM: f32 = 1.0;

/// One color operation, with CSS filter-function semantics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "op", content = "amount", rename_all = "snake_case")]
pub enum FilterOp {
    Grayscale(f32),
    Sepia(f32),
    Contrast(f32),
    Brightness(f32),
    Saturate(f32),
    /// Degrees.
    HueRotate(f32),
}

/// Named filter presets offered in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterPreset {
    #[default]
    None,
    Grayscale,
    Sepia,
    Vintage,
    Warm,
    Cool,
}

impl FilterPreset {
    pub const ALL: [FilterPreset; 6] = [
        Self::None,
        Self::Grayscale,
        Self::Sepia,
        Self::Vintage,
        Self::Warm,
        Self::Cool,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Grayscale => "Grayscale",
            Self::Sepia => "Sepia",
            Self::Vintage => "Vintage",
            Self::Warm => "Warm",
            Self::Cool => "Cool",
        }
    }

    /// Operations applied in order.
    pub fn ops(&self) -> &'static [FilterOp] {
        match self {
            Self::None => &[],
            Self::Grayscale => &[FilterOp::Grayscale(1.0)],
            Self::Sepia => &[FilterOp::Sepia(1.0)],
            Self::Vintage => &[
                FilterOp::Sepia(0.4),
                FilterOp::Contrast(1.2),
                FilterOp::Brightness(1.1),
                FilterOp::Saturate(1.1),
            ],
            Self::Warm => &[
                FilterOp::Sepia(0.2),
                FilterOp::Saturate(1.6),
                FilterOp::Brightness(1.05),
            ],
            Self::Cool => &[
                FilterOp::Saturate(0.8),
                FilterOp::HueRotate(10.0),
                FilterOp::Brightness(1.1),
            ],
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Preview pan offset in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PanOffset {
    pub x: f32,
    pub y: f32,
}

/// Current local transform state for one editor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub zoom: f32,
    pub pan: PanOffset,
    pub flipped: bool,
    pub filter: FilterPreset,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            pan: PanOffset::default(),
            flipped: false,
            filter: FilterPreset::None,
        }
    }
}

impl ViewTransform {
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        if !self.is_zoomed_in() {
            self.pan = PanOffset::default();
        }
    }

    pub fn is_zoomed_in(&self) -> bool {
        self.zoom > DEFAULT_ZOOM
    }

    /// Move the preview. Ignored unless zoomed in; returns whether it applied.
    pub fn pan_to(&mut self, x: f32, y: f32) -> bool {
        if !self.is_zoomed_in() {
            return false;
        }
        self.pan = PanOffset { x, y };
        true
    }

    pub fn toggle_flip(&mut self) {
        self.flipped = !self.flipped;
    }

    pub fn set_filter(&mut self, filter: FilterPreset) {
        self.filter = filter;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when an export would differ from the raw render.
    pub fn alters_pixels(&self) -> bool {
        self.flipped || !self.filter.is_identity()
    }
}
