use crate::surface::SurfaceSize;
use glam::Vec2;

/// Latest known pointer position in surface space.
///
/// Written by the host's pointer events at their own cadence, read once per
/// frame by [`crate::ParticleField::advance_frame`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl PointerState {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self { x, y, radius }
    }

    /// Pointer parked in the middle of the surface, where it sits until the
    /// first move event arrives.
    pub fn centered(size: SurfaceSize, radius: f32) -> Self {
        let c = size.center();
        Self::new(c.x, c.y, radius)
    }

    #[inline]
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Map a client-space pointer coordinate onto surface pixels.
///
/// `rect_origin`/`rect_size` describe the element's CSS box; the result is
/// scaled into the backing `surface` size. A degenerate box returns the plain
/// offset from the origin.
#[inline]
pub fn client_to_surface(
    client: Vec2,
    rect_origin: Vec2,
    rect_size: Vec2,
    surface: SurfaceSize,
) -> Vec2 {
    let local = client - rect_origin;
    if rect_size.x > 0.0 && rect_size.y > 0.0 {
        Vec2::new(
            local.x / rect_size.x * surface.width,
            local.y / rect_size.y * surface.height,
        )
    } else {
        local
    }
}
