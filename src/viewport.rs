// Logical domain shown on screen: x in [-25, 25] horizontally, z in [0, 50]
// vertically.
pub(crate) const XMIN: f64 = -25.0;
pub(crate) const XMAX: f64 = 25.0;
pub(crate) const YMIN: f64 = 0.0;
pub(crate) const YMAX: f64 = 50.0;

/// Affine map from the logical domain to a `width` x `height` pixel surface
/// with a top-left origin.
///
/// Nothing is clamped. Points outside the domain land outside the surface,
/// and a zero-sized surface collapses every point onto that axis' origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Viewport {
    pub(crate) width: f64,
    pub(crate) height: f64,
}

impl Viewport {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f64,
            height: height as f64,
        }
    }

    #[inline]
    pub(crate) fn project(&self, x: f64, z: f64) -> (f64, f64) {
        project(x, z, self.width, self.height)
    }
}

#[inline]
pub(crate) fn project(x: f64, z: f64, width: f64, height: f64) -> (f64, f64) {
    let px = width * (x - XMIN) / (XMAX - XMIN);
    let py = height * (YMAX - z) / (YMAX - YMIN);
    (px, py)
}
