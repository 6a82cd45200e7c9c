use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use parabolic_drag::core::sweep::sweep_angles_parallel;
use parabolic_drag::plot::{
    EULER_COLOR, IDEAL_COLOR, RK4_COLOR, SWEEP_FILE, TRAJECTORY_FILE, TrajectorySeries,
    draw_range_sweep, draw_trajectories,
};
use parabolic_drag::{Scheme, SweepResult, solve_drag, solve_no_drag, sweep_angles};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run_directory(out_root: &Path) -> PathBuf {
    let stamp = chrono::Local::now().format("run-%Y%m%d-%H%M%S");
    out_root.join(stamp.to_string())
}

fn print_best(label: &str, curve: &SweepResult) {
    match curve.best() {
        Some(best) => println!(
            "{label:<14} best angle {:.1} deg -> {:.4} m ({} angles)",
            best.angle_deg,
            best.range_m,
            curve.len()
        ),
        None => println!("{label:<14} no angle landed within the time bound"),
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_filter());

    let params = cli.launch_parameters();
    let sweep = cli.sweep_config();
    tracing::debug!(?params, ?sweep, "starting run");

    let ideal = solve_no_drag(params).context("solving the drag-free trajectory")?;
    let euler = solve_drag(params, Scheme::Euler).context("integrating with Euler")?;
    let rk4 = solve_drag(params, Scheme::Rk4).context("integrating with RK4")?;

    println!(
        "Launch: {:.2} m/s at {:.2} deg, m = {} kg, k = {} kg/m, dt = {} s, h = {} m\n",
        params.speed_mps,
        params.angle_deg,
        params.mass_kg,
        params.drag_k,
        params.time_step_s,
        params.height_m
    );
    println!("No drag       {}", ideal.summary());
    println!("Drag (Euler)  {}", euler.summary());
    println!("Drag (RK4)    {}", rk4.summary());
    println!(
        "Euler - RK4 range difference: {:.4} m\n",
        (euler.range_m() - rk4.range_m()).abs()
    );

    let (ideal_sweep, drag_sweep) = if cli.parallel {
        sweep_angles_parallel(params, sweep)
    } else {
        sweep_angles(params, sweep)
    }
    .context("sweeping launch angles")?;
    print_best("No drag", &ideal_sweep);
    print_best("Drag (RK4)", &drag_sweep);

    if cli.no_plots {
        return Ok(());
    }

    let dir = run_directory(&cli.out_dir);
    fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

    let series = [
        TrajectorySeries {
            label: "No drag".to_string(),
            trajectory: &ideal,
            color: IDEAL_COLOR,
        },
        TrajectorySeries {
            label: "Drag, Euler".to_string(),
            trajectory: &euler,
            color: EULER_COLOR,
        },
        TrajectorySeries {
            label: "Drag, RK4".to_string(),
            trajectory: &rk4,
            color: RK4_COLOR,
        },
    ];
    let title = format!(
        "v0 = {:.1} m/s, angle = {:.1} deg, k/m = {:.3} 1/m",
        params.speed_mps,
        params.angle_deg,
        params.drag_k / params.mass_kg
    );
    draw_trajectories(&dir.join(TRAJECTORY_FILE), &title, &series)
        .context("drawing trajectory chart")?;
    draw_range_sweep(&dir.join(SWEEP_FILE), &ideal_sweep, &drag_sweep)
        .context("drawing range sweep chart")?;

    println!("\nCharts written to {}", dir.display());
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
