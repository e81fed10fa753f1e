//! The frame loop: integrate, update trails, render, mirror readouts.

use log::{debug, trace};
use mechanics::DoublePendulum;
use render::{begin_frame, render_body, BodyView, CommandList, DrawSurface, RenderStyle};
use simcore::{palette_color, HamiltonianSystem, Model, SimContext, SimulationConfig, Viewport};
use trail::TrailSettings;

use crate::body::{integrate_step, update_trail, PendulumBody, DEFAULT_THETA, RESTART_OFFSET};
use crate::command::{AngleKind, Command};
use crate::readout::AngleReadout;

/// Bodies that delete will never go below
pub const MIN_BODIES: usize = 2;

pub struct Simulation {
    bodies: Vec<PendulumBody>,
    config: SimulationConfig,
    readouts: Vec<AngleReadout>,
    ctx: SimContext,
    ticks: u64,
    running: bool,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Self {
        let config = config.clamped();
        let mut sim = Simulation {
            bodies: Vec::new(),
            ctx: SimContext { dt: config.dt, t: 0.0 },
            config,
            readouts: Vec::new(),
            ticks: 0,
            running: true,
        };
        sim.restart();
        sim
    }

    /// Runs one frame against `viewport`, drawing onto `surface`. A viewport
    /// with no area (minimized window) skips the frame entirely.
    pub fn tick(&mut self, viewport: &Viewport, surface: &mut impl DrawSurface) {
        if !self.running || viewport.is_empty() {
            return;
        }

        let system = DoublePendulum::from_config(&self.config, viewport);
        let settings = TrailSettings::from_config(&self.config, viewport);
        let style = RenderStyle::from_config(&self.config, viewport);
        let origin = self.config.origin_px(viewport);
        let length = system.params.length;

        if !self.config.paused {
            self.ctx.dt = self.config.dt;
            for body in &mut self.bodies {
                integrate_step(body, &system, self.ctx.dt, origin, &settings);
            }
            self.ctx.t += self.ctx.dt;
        }

        begin_frame(surface, &style);
        for body in &mut self.bodies {
            let segments = update_trail(body, &settings);
            let view = BodyView {
                joints: body.joints(origin, length),
                color: body.color,
                segments: &segments,
            };
            render_body(surface, &view, &style);
        }

        self.readouts = self.bodies.iter().map(|b| AngleReadout::from_state(&b.state)).collect();
        self.ticks += 1;
        trace!(
            "tick {} t={:.2} bodies={} trail points={}",
            self.ticks,
            self.ctx.t,
            self.bodies.len(),
            self.bodies.iter().map(|b| b.trail.len()).sum::<usize>()
        );
    }

    /// Runs one frame and returns the recorded draw calls.
    pub fn tick_commands(&mut self, viewport: &Viewport) -> CommandList {
        let mut frame = CommandList::new();
        self.tick(viewport, &mut frame);
        frame
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::AddBody => self.add_body(),
            Command::DeleteBody => self.delete_body(),
            Command::Restart => self.restart(),
            Command::Clear => self.clear_trails(),
            Command::SetAngle { body, which, value } => self.set_angle(body, which, value),
        }
    }

    pub fn add_body(&mut self) {
        let color = palette_color(self.bodies.len());
        self.bodies.push(PendulumBody::with_default_angles(color));
        debug!("added body {} ({})", self.bodies.len() - 1, color.to_hex());
    }

    /// Removes the last body. No-op at the minimum population.
    pub fn delete_body(&mut self) {
        if self.bodies.len() <= MIN_BODIES {
            return;
        }
        self.bodies.pop();
        self.readouts.truncate(self.bodies.len());
        debug!("deleted body, {} remain", self.bodies.len());
    }

    pub fn restart(&mut self) {
        self.bodies = vec![
            PendulumBody::with_default_angles(palette_color(0)),
            PendulumBody::new(DEFAULT_THETA + RESTART_OFFSET, DEFAULT_THETA, palette_color(1)),
        ];
        self.readouts = self.bodies.iter().map(|b| AngleReadout::from_state(&b.state)).collect();
        self.ctx.t = 0.0;
        debug!("restarted with {} bodies", self.bodies.len());
    }

    pub fn clear_trails(&mut self) {
        for body in &mut self.bodies {
            body.trail.clear();
        }
        debug!("cleared {} trails", self.bodies.len());
    }

    /// Overrides one angle of one body. Out-of-range indices are ignored.
    pub fn set_angle(&mut self, index: usize, which: AngleKind, value: f64) {
        let Some(body) = self.bodies.get_mut(index) else {
            return;
        };
        match which {
            AngleKind::Theta1 => body.state.theta1 = value,
            AngleKind::Theta2 => body.state.theta2 = value,
        }
    }

    /// Normalized angles as of the last tick; zero beyond the population.
    pub fn angles(&self, index: usize) -> AngleReadout {
        self.readouts.get(index).copied().unwrap_or_default()
    }

    pub fn readouts(&self) -> &[AngleReadout] {
        &self.readouts
    }

    /// Total energy of every body under the current config and viewport.
    pub fn energies(&self, viewport: &Viewport) -> Vec<f64> {
        let system = DoublePendulum::from_config(&self.config, viewport);
        self.bodies.iter().map(|b| system.energy(&b.state)).collect()
    }

    pub fn bodies(&self) -> &[PendulumBody] {
        &self.bodies
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Replaces the config; takes effect at the next tick.
    pub fn set_config(&mut self, config: SimulationConfig) {
        let config = config.clamped();
        if config != self.config {
            debug!("config changed");
            self.config = config;
        }
    }

    /// Simulated time since the last restart.
    pub fn time(&self) -> f64 {
        self.ctx.t
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Stops the loop. Checked only at the start of a tick.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl Model for Simulation {
    fn reset(&mut self) {
        self.restart();
    }
}
