mod canvas;

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use clap::Parser;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use engine::{AngleKind, Command, Simulation};
use log::{error, info, LevelFilter};
use simcore::{config, Origin, SimulationConfig, Viewport};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use canvas::{to_color32, ShapeLayer, MAX_RETAINED_SHAPES};

// Energy plot window, in ticks
const ENERGY_WINDOW: usize = 600;

/// Animated double pendulums with drifting trails
#[derive(Parser, Debug)]
#[command(name = "pendulum-trails")]
#[command(version, about, long_about = None)]
struct Args {
    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    /// JSON config file; missing fields take their defaults
    config: Option<PathBuf>,
}

fn load_config(path: Option<&Path>) -> SimulationConfig {
    let Some(path) = path else {
        return SimulationConfig::default();
    };
    match SimulationConfig::from_json_file(path) {
        Ok(config) => {
            info!("loaded config from {}", path.display());
            config
        }
        Err(e) => {
            error!("{e}; using defaults");
            SimulationConfig::default()
        }
    }
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let logger = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto);
    if let Err(e) = logger {
        eprintln!("logger already initialised: {e}");
    }

    let config = load_config(args.config.as_deref());
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_title("Double Pendulum Trails"),
        ..Default::default()
    };
    eframe::run_native(
        "Double Pendulum Trails",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(config)))),
    )
}

/// Rolling energy history, one series per body.
struct EnergyTrace {
    t: VecDeque<f64>,
    series: Vec<VecDeque<f64>>,
    capacity: usize,
}

impl EnergyTrace {
    fn new(capacity: usize) -> Self {
        Self { t: VecDeque::with_capacity(capacity), series: Vec::new(), capacity }
    }

    fn push(&mut self, t: f64, energies: &[f64]) {
        // population changed: start over
        if energies.len() != self.series.len() {
            self.t.clear();
            self.series = vec![VecDeque::with_capacity(self.capacity); energies.len()];
        }
        self.t.push_back(t);
        for (s, &e) in self.series.iter_mut().zip(energies) {
            s.push_back(e);
        }
        while self.t.len() > self.capacity {
            self.t.pop_front();
            for s in &mut self.series {
                s.pop_front();
            }
        }
    }

    fn clear(&mut self) {
        self.t.clear();
        self.series.clear();
    }

    fn line(&self, index: usize) -> PlotPoints<'_> {
        PlotPoints::from_iter(
            self.t
                .iter()
                .copied()
                .zip(self.series[index].iter().copied())
                .map(|(x, y)| [x, y]),
        )
    }
}

struct App {
    sim: Simulation,
    layer: ShapeLayer,
    energy: EnergyTrace,
    show_energy: bool,
}

impl App {
    fn new(config: SimulationConfig) -> Self {
        Self {
            sim: Simulation::new(config),
            layer: ShapeLayer::new(MAX_RETAINED_SHAPES),
            energy: EnergyTrace::new(ENERGY_WINDOW),
            show_energy: true,
        }
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        let mut cfg = self.sim.config().clone();
        ctx.input(|i| {
            if i.key_pressed(egui::Key::H) {
                cfg.hide_arms = !cfg.hide_arms;
            }
            if i.key_pressed(egui::Key::J) {
                cfg.origin = if cfg.origin == Origin::TOP_LEFT {
                    Origin::CENTER
                } else {
                    Origin::TOP_LEFT
                };
            }
            if i.key_pressed(egui::Key::K) {
                cfg.gravity_reversed = !cfg.gravity_reversed;
            }
            if i.key_pressed(egui::Key::Space) {
                cfg.paused = !cfg.paused;
            }
        });
        self.sim.set_config(cfg);
    }

    fn controls(&mut self, ui: &mut egui::Ui, commands: &mut Vec<Command>) {
        let mut cfg = self.sim.config().clone();
        ui.horizontal_wrapped(|ui| {
            if ui.button(if cfg.paused { "▶ Resume" } else { "⏸ Pause" }).clicked() {
                cfg.paused = !cfg.paused;
            }
            if ui.button("⟲ Restart").clicked() {
                commands.push(Command::Restart);
            }
            if ui.button("Clear").clicked() {
                commands.push(Command::Clear);
            }
            if ui.button("+ Pendulum").clicked() {
                commands.push(Command::AddBody);
            }
            if ui.button("− Pendulum").clicked() {
                commands.push(Command::DeleteBody);
            }

            ui.separator();
            let mut prism = cfg.trail_color_cycling && cfg.persist_trails;
            if ui.checkbox(&mut prism, "Prism").changed() {
                cfg.trail_color_cycling = prism;
                cfg.persist_trails = prism;
            }
            ui.checkbox(&mut cfg.trail_color_cycling, "Cycle colors");
            ui.checkbox(&mut cfg.persist_trails, "Persist");
            ui.checkbox(&mut cfg.hide_arms, "Hide arms (H)");

            ui.separator();
            ui.checkbox(&mut cfg.vacuum, "Vacuum");
            ui.checkbox(&mut cfg.directional_gravity, "Freefall");
            ui.checkbox(&mut cfg.gravity_reversed, "Reverse (K)");
            ui.label("Gravity");
            let (lo, hi) = config::GRAVITY_STRENGTH_RANGE;
            ui.add(egui::Slider::new(&mut cfg.gravity_strength, lo..=hi).suffix("×"));

            ui.separator();
            ui.label("Arm length");
            let (lo, hi) = config::ARM_LENGTH_RANGE;
            ui.add(egui::Slider::new(&mut cfg.arm_length_fraction, lo..=hi));
            ui.label("Origin");
            ui.add(egui::Slider::new(&mut cfg.origin.x, 0.0..=1.0).text("x"));
            ui.add(egui::Slider::new(&mut cfg.origin.y, 0.0..=1.0).text("y"));
            ui.checkbox(&mut self.show_energy, "Energy plot");
        });
        self.sim.set_config(cfg);
    }

    fn angle_panel(&self, ui: &mut egui::Ui, commands: &mut Vec<Command>) {
        ui.heading("Angles");
        egui::ScrollArea::vertical().max_height(ui.available_height() * 0.5).show(ui, |ui| {
            for (index, body) in self.sim.bodies().iter().enumerate() {
                let readout = self.sim.angles(index);
                ui.horizontal(|ui| {
                    ui.colored_label(to_color32(body.color), "●");
                    let text = format!("θ1 {}", readout.theta1_text());
                    ui.label(egui::RichText::new(text).monospace());
                });
                ui.horizontal(|ui| {
                    ui.add_space(14.0);
                    let text = format!("θ2 {}", readout.theta2_text());
                    ui.label(egui::RichText::new(text).monospace());
                });
                ui.horizontal(|ui| {
                    let mut theta1 = body.state.theta1;
                    let mut theta2 = body.state.theta2;
                    let dial1 = egui::DragValue::new(&mut theta1).speed(0.01).prefix("θ1 ");
                    if ui.add(dial1).changed() {
                        let which = AngleKind::Theta1;
                        commands.push(Command::SetAngle { body: index, which, value: theta1 });
                    }
                    let dial2 = egui::DragValue::new(&mut theta2).speed(0.01).prefix("θ2 ");
                    if ui.add(dial2).changed() {
                        let which = AngleKind::Theta2;
                        commands.push(Command::SetAngle { body: index, which, value: theta2 });
                    }
                });
                ui.separator();
            }
        });
    }

    fn energy_plot(&self, ui: &mut egui::Ui) {
        ui.heading("Energy");
        Plot::new("energy_plot")
            .legend(Legend::default())
            .allow_scroll(false)
            .y_axis_min_width(48.0)
            .x_axis_label("Time")
            .y_axis_label("H")
            .show(ui, |plot_ui| {
                let plotted = self.energy.series.len();
                for (index, body) in self.sim.bodies().iter().enumerate().take(plotted) {
                    let line = Line::new(format!("body {index}"), self.energy.line(index));
                    plot_ui.line(line.color(to_color32(body.color)));
                }
            });
    }

    fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let desired = ui.available_size();
        let (response, painter) = ui.allocate_painter(desired, egui::Sense::hover());
        let rect = response.rect;
        let viewport = Viewport::new(rect.width() as f64, rect.height() as f64);

        self.sim.tick(&viewport, &mut self.layer);
        self.layer.paint(&painter, rect);

        if !self.sim.config().paused && !viewport.is_empty() {
            self.energy.push(self.sim.time(), &self.sim.energies(&viewport));
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard(ctx);

        let mut commands = Vec::new();
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.controls(ui, &mut commands);
        });

        egui::SidePanel::right("readout").min_width(260.0).show(ctx, |ui| {
            self.angle_panel(ui, &mut commands);
            if self.show_energy {
                self.energy_plot(ui);
            }
        });

        for command in commands {
            match command {
                Command::Clear => self.layer.reset(),
                Command::Restart => {
                    self.layer.reset();
                    self.energy.clear();
                }
                _ => {}
            }
            self.sim.apply(command);
        }

        egui::CentralPanel::default().frame(egui::Frame::NONE).show(ctx, |ui| {
            self.draw_canvas(ui);
        });

        ctx.request_repaint();
    }
}
