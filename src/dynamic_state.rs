//! Pipeline state that is deferred to draw time instead of baked into the
//! pipeline at creation.

use crate::command::Rect;

/// A viewport transform, in framebuffer coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "trace", derive(serde::Serialize))]
#[cfg_attr(feature = "replay", derive(serde::Deserialize))]
pub struct Viewport {
    pub rect: Rect<f32>,
    pub depth_min: f32,
    pub depth_max: f32,
}

/// Values for the pieces of pipeline state that a pipeline can leave dynamic.
///
/// An unset field means "inherit whatever the pipeline was created with".
/// Recorded by value into the command stream, so mutating a `DynamicState`
/// after recording has no effect on already-recorded draws.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "trace", derive(serde::Serialize))]
#[cfg_attr(feature = "replay", derive(serde::Deserialize))]
pub struct DynamicState {
    pub viewport: Option<Viewport>,
    pub scissor: Option<Rect<u32>>,
    pub line_width: Option<f32>,
    pub blend_constants: Option<[f32; 4]>,
}

impl DynamicState {
    /// A state with every field unset.
    pub fn none() -> Self {
        Self::default()
    }

    /// Combine `self` with per-draw overrides. Set fields of `overrides`
    /// win; unset fields fall back to `self`.
    pub fn merge(&self, overrides: &DynamicState) -> DynamicState {
        DynamicState {
            viewport: overrides.viewport.or(self.viewport),
            scissor: overrides.scissor.or(self.scissor),
            line_width: overrides.line_width.or(self.line_width),
            blend_constants: overrides.blend_constants.or(self.blend_constants),
        }
    }
}
