// Lorenz system: sigma=10, rho=28, beta=8/3.
pub(crate) const SIGMA: f64 = 10.0;
pub(crate) const RHO: f64 = 28.0;
pub(crate) const BETA: f64 = 8.0 / 3.0;

/// A point in phase space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct State {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) z: f64,
}

impl State {
    pub(crate) const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

#[inline]
pub(crate) fn derivative(s: State) -> State {
    State {
        x: -SIGMA * (s.x - s.y),
        y: -s.x * s.z + RHO * s.x - s.y,
        z: s.x * s.y - BETA * s.z,
    }
}

/// One explicit Euler step. All three components come from the same input
/// state. Blow-up is not guarded: NaN and infinities propagate as-is.
#[inline]
pub(crate) fn advance(s: State, dt: f64) -> State {
    let d = derivative(s);
    State {
        x: s.x + d.x * dt,
        y: s.y + d.y * dt,
        z: s.z + d.z * dt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn advance_is_deterministic() {
        let s = State::new(1.25, -3.5, 17.0);
        let a = advance(s, 0.001);
        let b = advance(s, 0.001);
        assert_eq!(a.x.to_bits(), b.x.to_bits());
        assert_eq!(a.y.to_bits(), b.y.to_bits());
        assert_eq!(a.z.to_bits(), b.z.to_bits());
    }

    #[test]
    fn origin_is_a_fixed_point() {
        for dt in [0.001, 0.01, 0.5, 3.0] {
            assert_eq!(advance(State::default(), dt), State::new(0.0, 0.0, 0.0));
        }
    }

    #[test]
    fn one_step_from_first_seed() {
        let s = advance(State::new(0.0, 20.0, 25.0), 0.001);
        assert!((s.x - 0.2).abs() < EPS, "x = {}", s.x);
        assert!((s.y - 19.98).abs() < EPS, "y = {}", s.y);
        assert!((s.z - (25.0 - 200.0 / 3.0 * 0.001)).abs() < EPS, "z = {}", s.z);
        assert!((s.z - 24.933_333_333_333).abs() < 1e-9);
    }

    #[test]
    fn components_use_the_input_state() {
        // Sequential in-place updates would feed x' into dy and dz.
        let s = State::new(1.0, 2.0, 3.0);
        let n = advance(s, 0.1);
        assert!((n.x - (1.0 + 10.0 * 0.1)).abs() < EPS);
        assert!((n.y - (2.0 + (-3.0 + 28.0 - 2.0) * 0.1)).abs() < EPS);
        assert!((n.z - (3.0 + (2.0 - 8.0) * 0.1)).abs() < EPS);
    }

    #[test]
    fn blow_up_is_not_masked() {
        let s = advance(State::new(f64::NAN, 0.0, 0.0), 0.001);
        assert!(s.x.is_nan());
        let big = advance(State::new(1e200, 1e200, 1e200), 1.0);
        assert!(!big.y.is_finite() || !big.z.is_finite());
    }
}
