use std::f64::consts::FRAC_PI_3;

use engine::{AngleKind, Command, Simulation};
use simcore::{palette_color, Color, SimulationConfig, Vec2, Viewport, PALETTE};
use trail::{Trail, TrailPoint, TrailSettings};

fn viewport() -> Viewport {
    Viewport::new(800.0, 600.0)
}

fn offsets(sim: &Simulation, body: usize) -> Vec<Vec2> {
    sim.bodies()[body].trail.points().iter().map(|p| p.offset).collect()
}

#[test]
fn test_restart_from_four_bodies() {
    let mut sim = Simulation::default();
    sim.apply(Command::AddBody);
    sim.apply(Command::AddBody);
    for _ in 0..10 {
        sim.tick_commands(&viewport());
    }
    assert_eq!(sim.bodies().len(), 4);
    assert!(sim.bodies().iter().all(|b| b.state.p1 != 0.0 && !b.trail.is_empty()));
    assert!(sim.bodies().iter().all(|b| b.cycle == 10));

    sim.apply(Command::Restart);

    let bodies = sim.bodies();
    assert_eq!(bodies.len(), 2);
    for body in bodies {
        assert_eq!(body.state.p1, 0.0);
        assert_eq!(body.state.p2, 0.0);
        assert!(body.trail.is_empty());
        assert_eq!(body.cycle, 0);
    }
    assert!((bodies[0].state.theta1 - FRAC_PI_3).abs() < 1e-12);
    assert!((bodies[0].state.theta2 - FRAC_PI_3).abs() < 1e-12);
    assert!((bodies[1].state.theta1 - (FRAC_PI_3 + 0.01)).abs() < 1e-12);
    assert!((bodies[1].state.theta2 - FRAC_PI_3).abs() < 1e-12);
    assert_eq!(bodies[0].color, PALETTE[0]);
    assert_eq!(bodies[1].color, PALETTE[1]);
}

#[test]
fn test_add_and_delete_bodies() {
    let mut sim = Simulation::default();
    sim.apply(Command::AddBody);
    sim.apply(Command::AddBody);

    let colors: Vec<Color> = sim.bodies().iter().map(|b| b.color).collect();
    let expected: Vec<Color> = (0..4).map(palette_color).collect();
    assert_eq!(colors, expected);
    assert_eq!(colors[2].to_hex(), "#ffff00");
    assert_eq!(colors[3].to_hex(), "#ffa500");
    assert!((sim.bodies()[3].state.theta1 - FRAC_PI_3).abs() < 1e-12);

    sim.apply(Command::DeleteBody);
    sim.apply(Command::DeleteBody);
    assert_eq!(sim.bodies().len(), 2);

    sim.apply(Command::DeleteBody);
    assert_eq!(sim.bodies().len(), 2);
    assert_eq!(sim.bodies()[1].color, palette_color(1));
}

#[test]
fn test_vacuum_freezes_then_resumes() {
    let mut sim = Simulation::default();
    for _ in 0..3 {
        sim.tick_commands(&viewport());
    }
    // newest point has drifted once, oldest three times
    assert_eq!(
        offsets(&sim, 0),
        vec![Vec2::new(0.0, 3.0), Vec2::new(0.0, 2.0), Vec2::new(0.0, 1.0)]
    );

    let frozen = sim.config().clone().with_vacuum(true).with_paused(true);
    sim.set_config(frozen);
    let before = offsets(&sim, 0);
    for _ in 0..5 {
        sim.tick_commands(&viewport());
    }
    assert_eq!(offsets(&sim, 0), before);

    let resumed = sim.config().clone().with_vacuum(false);
    sim.set_config(resumed);
    sim.tick_commands(&viewport());
    let after = offsets(&sim, 0);
    for (old, new) in before.iter().zip(&after) {
        assert!((new.y - (old.y + 1.0)).abs() < 1e-12);
    }
}

#[test]
fn test_paused_ticks_keep_drifting() {
    let mut sim = Simulation::default();
    sim.tick_commands(&viewport());
    let theta = sim.bodies()[0].state.theta1;

    let paused = SimulationConfig::default()
        .with_paused(true)
        .with_gravity_reversed(true)
        .with_gravity_strength(2.0);
    sim.set_config(paused);
    sim.tick_commands(&viewport());

    assert_eq!(sim.bodies()[0].trail.len(), 1);
    assert_eq!(sim.bodies()[0].state.theta1, theta);
    assert!((offsets(&sim, 0)[0].y - (1.0 - 2.0)).abs() < 1e-12);
}

#[test]
fn test_directional_drift_points_away_from_center() {
    let vp = viewport();
    let config = SimulationConfig::default()
        .with_directional_gravity(true)
        .with_gravity_strength(0.5);
    let settings = TrailSettings::from_config(&config, &vp);

    let mut trail = Trail::new();
    trail.push(TrailPoint::new(Vec2::new(400.0, 100.0), 0), Color::WHITE);
    trail.push(TrailPoint::new(Vec2::new(700.0, 300.0), 1), Color::WHITE);
    trail::refresh(&mut trail, 2, Color::WHITE, &settings);

    // unit * 2 * 0.5
    assert!((trail.points()[0].offset - Vec2::new(0.0, -1.0)).norm() < 1e-12);
    assert!((trail.points()[1].offset - Vec2::new(1.0, 0.0)).norm() < 1e-12);
}

#[test]
fn test_segments_split_on_invisible_points() {
    let vp = viewport();
    let settings = TrailSettings::from_config(&SimulationConfig::default().with_vacuum(true), &vp);
    let inside = Vec2::new(50.0, 50.0);
    // past the 100 px visible margin, inside the 500 px keep margin
    let outside = Vec2::new(-250.0, 50.0);

    let mut trail = Trail::new();
    for pos in [inside, inside, outside, inside, inside, inside] {
        trail.push(TrailPoint::new(pos, 0), Color::WHITE);
    }
    let segments = trail::refresh(&mut trail, 0, Color::WHITE, &settings);

    let lengths: Vec<usize> = segments.iter().map(|s| s.len()).collect();
    assert_eq!(lengths, vec![2, 3]);
    assert_eq!(trail.len(), 6);

    let mut alternating = Trail::new();
    for pos in [inside, outside, inside, outside, inside] {
        alternating.push(TrailPoint::new(pos, 0), Color::WHITE);
    }
    assert!(trail::refresh(&mut alternating, 0, Color::WHITE, &settings).is_empty());
}

#[test]
fn test_prune_beyond_keep_margin() {
    let vp = viewport();
    let settings = TrailSettings::from_config(&SimulationConfig::default().with_vacuum(true), &vp);

    let mut trail = Trail::new();
    trail.push(TrailPoint::new(Vec2::new(10.0, 10.0), 0), Color::rgb(1, 1, 1));
    trail.push(TrailPoint::new(Vec2::new(-500.0, 10.0), 1), Color::rgb(2, 2, 2));
    trail.push(TrailPoint::new(Vec2::new(-500.5, 10.0), 2), Color::rgb(3, 3, 3));
    trail.push(TrailPoint::new(Vec2::new(20.0, 1200.0), 3), Color::rgb(4, 4, 4));
    trail::refresh(&mut trail, 4, Color::rgb(1, 1, 1), &settings);

    // the boundary itself is kept
    assert_eq!(trail.len(), 2);
    assert_eq!(trail.colors().len(), 2);
    assert_eq!(trail.points()[1].position, Vec2::new(-500.0, 10.0));
}

#[test]
fn test_readouts_follow_overrides() {
    let mut sim = Simulation::new(SimulationConfig::default().with_paused(true));
    sim.apply(Command::SetAngle { body: 1, which: AngleKind::Theta1, value: -0.5 });
    sim.tick_commands(&viewport());

    assert_eq!(sim.angles(1).theta1_text(), " 331.4° (5.783 rad)");
    assert_eq!(sim.angles(0).theta1_text(), "  60.0° (1.047 rad)");
    assert_eq!(sim.angles(5).theta2_text(), "   0.0° (0.000 rad)");
}

#[test]
fn test_clear_keeps_motion() {
    let mut sim = Simulation::default();
    for _ in 0..4 {
        sim.tick_commands(&viewport());
    }
    let states: Vec<_> = sim.bodies().iter().map(|b| b.state).collect();
    sim.apply(Command::Clear);
    assert!(sim.bodies().iter().all(|b| b.trail.is_empty()));
    assert_eq!(sim.bodies().iter().map(|b| b.state).collect::<Vec<_>>(), states);
}
