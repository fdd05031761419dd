use crate::config::Args;
use crate::input::{collect_actions, Action};
use crate::render::{canvas_to_cells, draw_status_line, Terminal};
use crate::trajectory::{Progress, RenderJob};
use crossterm::style::Color;
use log::{debug, info};
use std::time::{Duration, Instant};

const HUD_ROWS: u16 = 1;

pub(crate) struct App {
    args: Args,
    term: Terminal,
    job: RenderJob,
    show_hud: bool,
    should_quit: bool,
    frame_started: Instant,
}

impl App {
    fn init(args: Args) -> anyhow::Result<Self> {
        let show_hud = !args.no_hud;
        let term = Terminal::begin(&args.title, if show_hud { HUD_ROWS } else { 0 })?;
        info!(
            "terminal {}x{} cells, canvas {}x{} dots",
            term.cols, term.rows, term.canvas.w, term.canvas.h
        );
        Ok(Self {
            args,
            term,
            job: RenderJob::seeded(),
            show_hud,
            should_quit: false,
            frame_started: Instant::now(),
        })
    }

    fn run(&mut self) -> anyhow::Result<()> {
        let fps = self.args.fps_cap();
        let frame_dt = Duration::from_secs_f32(1.0 / fps as f32);
        let batch = self.args.batch_steps();
        let mut dirty = true;

        while !self.should_quit {
            let frame_start = Instant::now();

            if self.term.resize_if_needed()? {
                self.restart("resize");
                dirty = true;
            }

            for action in collect_actions(frame_dt)? {
                match action {
                    Action::Quit => {
                        self.should_quit = true;
                        break;
                    }
                    Action::Redraw => {
                        self.restart("redraw requested");
                        dirty = true;
                    }
                    Action::ToggleHud => {
                        self.show_hud = !self.show_hud;
                        self.term
                            .set_reserved_rows(if self.show_hud { HUD_ROWS } else { 0 });
                        self.restart("hud toggled");
                        dirty = true;
                    }
                    Action::Resize(c, r) => {
                        if (c, r) != (self.term.cols, self.term.rows) {
                            self.term.resize(c, r);
                            self.restart("resize");
                            dirty = true;
                        }
                    }
                }
            }
            if self.should_quit {
                break;
            }

            if !self.job.is_done() {
                if self.job.resume(&mut self.term.canvas, batch) == Progress::Done {
                    info!(
                        "frame complete: {} draws in {:.1?}",
                        self.job.draws(),
                        self.frame_started.elapsed()
                    );
                }
                dirty = true;
            }

            // Idle frames only need repainting after something changed.
            if dirty {
                self.render_frame()?;
                dirty = false;
            }

            spin_sleep(frame_dt, frame_start);
        }

        Ok(())
    }

    fn restart(&mut self, why: &str) {
        debug!(
            "restarting render ({why}), canvas {}x{}",
            self.term.canvas.w, self.term.canvas.h
        );
        self.job.restart();
        self.frame_started = Instant::now();
    }

    fn render_frame(&mut self) -> anyhow::Result<()> {
        canvas_to_cells(&self.term.canvas, &mut self.term.cur, !self.args.no_color);

        if self.show_hud && self.term.rows > 0 {
            let line = self.status_line();
            let y = self.term.rows - 1;
            draw_status_line(&mut self.term.cur, y, &line, Color::Grey, Color::Black);
        }

        self.term.present()
    }

    fn status_line(&self) -> String {
        let state = if self.job.is_done() {
            "done".to_string()
        } else {
            format!(
                "trajectory {}/{}",
                self.job.current_run().max(1),
                self.job.run_count()
            )
        };
        format!(
            " {}  | σ=10 ρ=28 β=8/3 dt=0.001 | {} | {} draws | {}x{} dots | keys: Q quit  R redraw  H hud ",
            self.args.title,
            state,
            self.job.draws(),
            self.term.canvas.w,
            self.term.canvas.h
        )
    }
}

pub(crate) fn run(args: Args) -> anyhow::Result<()> {
    let mut app = App::init(args)?;
    let res = app.run();
    // Restore the terminal even when the loop failed.
    app.term.end()?;
    res
}

/* -----------------------------
   Frame pacing helper
------------------------------ */

fn spin_sleep(target: Duration, start: Instant) {
    let end = start + target;
    loop {
        let t = Instant::now();
        if t >= end {
            break;
        }
        let left = end - t;
        if left > Duration::from_millis(2) {
            std::thread::sleep(Duration::from_millis(1));
        } else {
            std::hint::spin_loop();
        }
    }
}
