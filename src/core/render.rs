//=========================================================================
// Render Contract
//=========================================================================
//
// The narrow drawing surface the presentation core consumes.
//
// The real graphics device, swap chain and font machinery live on the
// host side of this trait. The manager itself only needs the viewport
// dimensions and a quad fill for its fade effect; the text primitive
// exists for screens, not for the manager's own logic.
//
//=========================================================================

//=== Viewport ============================================================

/// Dimensions of the drawable surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The full-surface rectangle anchored at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

//=== Rect ================================================================

/// Axis-aligned rectangle in screen coordinates (pixels, top-left origin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

//=== Color ===============================================================

/// Straight-alpha RGBA color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Returns this color with a replaced alpha component.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

//=== RenderTarget Trait ==================================================

/// Drawing surface contract.
///
/// Drawing happens in begin/end brackets; the manager emits exactly one
/// bracket per fade call and screens are expected to bracket their own
/// batches inside `draw`.
pub trait RenderTarget: Send {
    /// Current drawable dimensions. Queried once at initialization and
    /// again on every fade call, never cached across resizes.
    fn viewport(&self) -> Viewport;

    /// Opens a draw batch.
    fn begin(&mut self);

    /// Fills a rectangle with a solid (possibly translucent) color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draws a run of text at a pixel position.
    fn draw_text(&mut self, position: (f32, f32), text: &str, color: Color);

    /// Closes the current draw batch.
    fn end(&mut self);
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_bounds_cover_the_surface() {
        let viewport = Viewport::new(800.0, 600.0);
        assert_eq!(viewport.bounds(), Rect::new(0.0, 0.0, 800.0, 600.0));
    }

    #[test]
    fn with_alpha_keeps_rgb() {
        let faded = Color::BLACK.with_alpha(0.5);
        assert_eq!((faded.r, faded.g, faded.b, faded.a), (0.0, 0.0, 0.0, 0.5));
    }

    #[test]
    fn default_viewport_is_empty() {
        let viewport = Viewport::default();
        assert_eq!((viewport.width, viewport.height), (0.0, 0.0));
    }
}
