use mechanics::{integrate_step, DoublePendulum, PendulumParams};
use plotters::prelude::*;
use simcore::{HamiltonianSystem, PhaseState};

fn draw_series(
    filename: &str,
    title: &str,
    x_label: &str,
    y_label: &str,
    series: &[(&str, RGBColor, Vec<(f64, f64)>)],
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(filename, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let all = series.iter().flat_map(|(_, _, pts)| pts.iter());
    let (mut x_min, mut x_max, mut y_min, mut y_max) =
        (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY);
    for &(x, y) in all {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    if y_max - y_min < 1e-9 {
        y_max += 1.0;
        y_min -= 1.0;
    }

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("Arial", 28))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart.configure_mesh().x_desc(x_label).y_desc(y_label).draw()?;

    for (label, color, points) in series {
        let color = *color;
        chart
            .draw_series(LineSeries::new(points.iter().copied(), &color))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.filled()));
    }

    chart.configure_series_labels().border_style(&BLACK).draw()?;

    root.present()?;
    Ok(())
}

/// Relative energy error of an explicit Euler run, sampled every `every` steps.
fn energy_error(
    pendulum: &DoublePendulum,
    dt: f64,
    duration: f64,
    every: usize,
) -> Vec<(f64, f64)> {
    let mut state = PhaseState::new(std::f64::consts::FRAC_PI_3, std::f64::consts::FRAC_PI_3);
    let e0 = pendulum.energy(&state);
    let scale = pendulum.params.mass * pendulum.params.gravity * pendulum.params.length;
    let steps = (duration / dt).round() as usize;

    let mut out = Vec::with_capacity(steps / every + 1);
    for i in 0..=steps {
        if i % every == 0 {
            out.push((i as f64 * dt, (pendulum.energy(&state) - e0) / scale));
        }
        integrate_step(pendulum, &mut state, dt);
    }
    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 128 px arms, the default on a 1280 px wide window
    let pendulum = DoublePendulum::new(PendulumParams { mass: 1.0, length: 128.0, gravity: 9.81 });
    let duration = 200.0;

    let series = vec![
        ("dt = 0.1", RED, energy_error(&pendulum, 0.1, duration, 1)),
        ("dt = 0.01", BLUE, energy_error(&pendulum, 0.01, duration, 10)),
        ("dt = 0.001", GREEN, energy_error(&pendulum, 0.001, duration, 100)),
    ];

    draw_series(
        "energy_drift.png",
        "Explicit Euler Energy Drift",
        "Time [-]",
        "(H - H0) / (m g l) [-]",
        &series,
    )?;

    println!("Wrote plot: energy_drift.png");

    Ok(())
}
