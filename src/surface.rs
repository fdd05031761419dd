use crossterm::style::Color;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Rgb {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl Rgb {
    pub(crate) const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub(crate) const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub(crate) const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub(crate) const RED: Rgb = Rgb::new(255, 0, 0);

    pub(crate) const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub(crate) fn to_color(self) -> Color {
        Color::Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

/// Something the trajectory driver can draw on.
///
/// Hosts (the terminal canvas, an offscreen image) implement this; the
/// integrator and driver never see the host toolkit.
pub(crate) trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn clear(&mut self, color: Rgb);
    /// Fill a disc of `diameter` pixels centred at (`cx`, `cy`). Off-surface
    /// and non-finite centres are silently ignored.
    fn fill_circle(&mut self, cx: f64, cy: f64, diameter: f64, color: Rgb);
}

/// Visit every pixel of a `w` x `h` grid whose centre lies inside the disc.
/// The pixel containing the disc centre is always visited, so pens smaller
/// than a pixel still leave a mark.
pub(crate) fn for_each_disc_pixel(
    cx: f64,
    cy: f64,
    diameter: f64,
    w: u32,
    h: u32,
    mut f: impl FnMut(u32, u32),
) {
    if !cx.is_finite() || !cy.is_finite() || w == 0 || h == 0 {
        return;
    }
    let r = if diameter.is_finite() { (diameter * 0.5).max(0.0) } else { 0.0 };
    let r2 = r * r;

    let x0 = (cx - r).floor() as i64;
    let x1 = (cx + r).floor() as i64;
    let y0 = (cy - r).floor() as i64;
    let y1 = (cy + r).floor() as i64;
    if x1 < 0 || y1 < 0 || x0 >= w as i64 || y0 >= h as i64 {
        return;
    }
    let x0 = x0.max(0);
    let y0 = y0.max(0);
    let x1 = x1.min(w as i64 - 1);
    let y1 = y1.min(h as i64 - 1);

    let (hx, hy) = (cx.floor() as i64, cy.floor() as i64);
    for py in y0..=y1 {
        let dy = py as f64 + 0.5 - cy;
        for px in x0..=x1 {
            let dx = px as f64 + 0.5 - cx;
            if dx * dx + dy * dy <= r2 || (px == hx && py == hy) {
                f(px as u32, py as u32);
            }
        }
    }
}
