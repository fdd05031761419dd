use crate::lorenz::{advance, State};
use crate::surface::{Rgb, Surface};
use crate::viewport::Viewport;
use log::debug;

pub(crate) const MAX_ITER: usize = 50_000;
pub(crate) const DT: f64 = 0.001;
pub(crate) const PEN_DIAMETER: f64 = 0.003 * 512.0;
pub(crate) const BACKGROUND: Rgb = Rgb::BLACK;

/// Three runs whose seeds differ by 0.01 in y. Order matters: later runs
/// paint over earlier ones.
pub(crate) const SEEDED_RUNS: [TrajectoryRun; 3] = [
    TrajectoryRun::new(State::new(0.0, 20.00, 25.0), Rgb::YELLOW),
    TrajectoryRun::new(State::new(0.0, 20.01, 25.0), Rgb::BLUE),
    TrajectoryRun::new(State::new(0.0, 20.02, 25.0), Rgb::RED),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct TrajectoryRun {
    pub(crate) initial: State,
    pub(crate) steps: usize,
    pub(crate) dt: f64,
    pub(crate) color: Rgb,
}

impl TrajectoryRun {
    pub(crate) const fn new(initial: State, color: Rgb) -> Self {
        Self {
            initial,
            steps: MAX_ITER,
            dt: DT,
            color,
        }
    }

    pub(crate) fn states(&self) -> Trajectory {
        Trajectory {
            state: self.initial,
            remaining: self.steps,
            dt: self.dt,
        }
    }
}

/// Successive Euler steps from a run's initial state. The initial state
/// itself is not yielded.
#[derive(Clone, Debug)]
pub(crate) struct Trajectory {
    state: State,
    remaining: usize,
    dt: f64,
}

impl Iterator for Trajectory {
    type Item = State;

    fn next(&mut self) -> Option<State> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.state = advance(self.state, self.dt);
        Some(self.state)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Trajectory {}

/// Drive one run to completion, projecting (x, z) of every new state and
/// handing the pixel position to `emit`.
pub(crate) fn run(
    trajectory: &TrajectoryRun,
    viewport: Viewport,
    mut emit: impl FnMut(f64, f64, Rgb),
) {
    for s in trajectory.states() {
        let (px, py) = viewport.project(s.x, s.z);
        emit(px, py, trajectory.color);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Progress {
    Pending,
    Done,
}

struct Active {
    index: usize,
    states: Trajectory,
    viewport: Viewport,
}

/// A full frame (clear, then every run in order) that can be advanced a
/// bounded number of steps at a time and picked up again later.
///
/// Surface size is read once at the start of each run, never per step, so
/// a resize between runs can leave the runs of one frame projected at
/// different sizes.
pub(crate) struct RenderJob {
    runs: Vec<TrajectoryRun>,
    next: usize,
    active: Option<Active>,
    cleared: bool,
    draws: usize,
}

impl RenderJob {
    pub(crate) fn new(runs: &[TrajectoryRun]) -> Self {
        Self {
            runs: runs.to_vec(),
            next: 0,
            active: None,
            cleared: false,
            draws: 0,
        }
    }

    pub(crate) fn seeded() -> Self {
        Self::new(&SEEDED_RUNS)
    }

    pub(crate) fn restart(&mut self) {
        self.next = 0;
        self.active = None;
        self.cleared = false;
        self.draws = 0;
    }

    pub(crate) fn draws(&self) -> usize {
        self.draws
    }

    pub(crate) fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// 1-based index of the run being drawn, or the number of runs once
    /// everything is done.
    pub(crate) fn current_run(&self) -> usize {
        match &self.active {
            Some(a) => a.index + 1,
            None => self.next.min(self.runs.len()),
        }
    }

    pub(crate) fn is_done(&self) -> bool {
        self.cleared && self.active.is_none() && self.next >= self.runs.len()
    }

    /// Emit at most `budget` draws onto `surface`.
    pub(crate) fn resume<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        budget: usize,
    ) -> Progress {
        if !self.cleared {
            surface.clear(BACKGROUND);
            self.cleared = true;
        }

        let mut left = budget;
        while left > 0 {
            if self.active.is_none() {
                if self.next >= self.runs.len() {
                    break;
                }
                let viewport = Viewport::new(surface.width(), surface.height());
                self.active = Some(Active {
                    index: self.next,
                    states: self.runs[self.next].states(),
                    viewport,
                });
                self.next += 1;
            }
            let Some(active) = self.active.as_mut() else {
                break;
            };
            let color = self.runs[active.index].color;

            while left > 0 {
                let Some(s) = active.states.next() else {
                    break;
                };
                let (px, py) = active.viewport.project(s.x, s.z);
                surface.fill_circle(px, py, PEN_DIAMETER, color);
                self.draws += 1;
                left -= 1;
            }

            if active.states.len() == 0 {
                debug!(
                    "trajectory {} done: {} draws so far, surface {}x{}",
                    active.index + 1,
                    self.draws,
                    active.viewport.width,
                    active.viewport.height
                );
                self.active = None;
            }
        }

        if self.is_done() {
            Progress::Done
        } else {
            Progress::Pending
        }
    }
}

/// Render a whole frame synchronously: clear, then every seeded run in
/// order. Returns the number of draws issued.
pub(crate) fn render_frame<S: Surface + ?Sized>(surface: &mut S) -> usize {
    surface.clear(BACKGROUND);
    let mut draws = 0;
    for tr in &SEEDED_RUNS {
        let viewport = Viewport::new(surface.width(), surface.height());
        run(tr, viewport, |px, py, color| {
            surface.fill_circle(px, py, PEN_DIAMETER, color);
            draws += 1;
        });
    }
    draws
}
