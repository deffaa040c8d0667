use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use harmonic::api::{
    draw_drag, initial_curvature, intersect_lines, solve, Cubic, HandleSolver, ReplayToken,
    SampleCfg, SolveCase, SolveCfg, Strategy,
};
use nalgebra::Vector2;
use std::path::Path;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod scenario;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Inspect, solve and replay curvature-preserving handle moves")]
struct Cmd {
    /// Log solver decisions (debug level) to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Signed curvature of a cubic run at `t`
    Curvature {
        /// x0,y0,x1,y1,x2,y2,x3,y3
        #[arg(long, value_parser = parse_cubic, allow_hyphen_values = true)]
        points: Cubic,
        #[arg(long, default_value_t = 0.0)]
        t: f64,
    },
    /// Move one handle and re-place its pair so the anchor curvature is kept
    Solve {
        #[arg(long, value_parser = parse_cubic, allow_hyphen_values = true)]
        points: Cubic,
        #[arg(long, value_enum)]
        case: CaseArg,
        /// x,y of the dragged handle's new position
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        target: Vector2<f64>,
        #[arg(long, value_enum, default_value_t = StrategyArg::ClosedForm)]
        strategy: StrategyArg,
    },
    /// Intersection of the tangents P0–P1 and P2–P3 (null if parallel)
    Marker {
        #[arg(long, value_parser = parse_cubic, allow_hyphen_values = true)]
        points: Cubic,
    },
    /// Replay a JSON drag scenario and write per-step outcomes
    Replay {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        #[arg(long, value_enum, default_value_t = StrategyArg::ClosedForm)]
        strategy: StrategyArg,
    },
    /// Compare both strategies on sampled drags
    Crosscheck {
        #[arg(long, default_value_t = 1000)]
        samples: u64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Relative tolerance for curvature drift and strategy disagreement
        #[arg(long, default_value_t = 1e-7)]
        tol: f64,
    },
    /// Print version information as JSON
    Report,
}

#[derive(Clone, Copy, ValueEnum)]
enum CaseArg {
    P1,
    P2,
}

impl From<CaseArg> for SolveCase {
    fn from(c: CaseArg) -> Self {
        match c {
            CaseArg::P1 => SolveCase::P1Paired,
            CaseArg::P2 => SolveCase::P2Paired,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    ClosedForm,
    RootFinder,
}

impl From<StrategyArg> for Strategy {
    fn from(s: StrategyArg) -> Self {
        match s {
            StrategyArg::ClosedForm => Strategy::ClosedForm,
            StrategyArg::RootFinder => Strategy::RootFinder,
        }
    }
}

fn parse_floats(s: &str, n: usize) -> Result<Vec<f64>, String> {
    let vals = s
        .split(',')
        .map(|v| v.trim().parse::<f64>().map_err(|e| format!("{v:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    if vals.len() != n {
        return Err(format!("expected {n} comma-separated numbers, got {}", vals.len()));
    }
    Ok(vals)
}

fn parse_cubic(s: &str) -> Result<Cubic, String> {
    let v = parse_floats(s, 8)?;
    Ok(Cubic::new(
        Vector2::new(v[0], v[1]),
        Vector2::new(v[2], v[3]),
        Vector2::new(v[4], v[5]),
        Vector2::new(v[6], v[7]),
    ))
}

fn parse_point(s: &str) -> Result<Vector2<f64>, String> {
    let v = parse_floats(s, 2)?;
    Ok(Vector2::new(v[0], v[1]))
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Curvature { points, t } => curvature(points, t),
        Action::Solve {
            points,
            case,
            target,
            strategy,
        } => solve_once(points, case.into(), target, strategy.into()),
        Action::Marker { points } => marker(points),
        Action::Replay {
            input,
            out,
            strategy,
        } => replay(&input, &out, strategy.into()),
        Action::Crosscheck { samples, seed, tol } => crosscheck(samples, seed, tol),
        Action::Report => report(),
    }
}

fn curvature(points: Cubic, t: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&t) {
        bail!("t must lie in [0, 1], got {t}");
    }
    let k = points.curvature(t)?;
    println!("{}", serde_json::json!({ "t": t, "curvature": k }));
    Ok(())
}

fn solve_once(points: Cubic, case: SolveCase, target: Vector2<f64>, strategy: Strategy) -> Result<()> {
    let cfg = SolveCfg::default();
    let k0 = initial_curvature(case, &points).context("curvature at drag start")?;
    let out = solve(&strategy, case, &points, target, k0, &cfg)?;
    let k = out.curvature(case.curvature_t())?;
    tracing::debug!(strategy = strategy.name(), k0, k, "solved");
    let paired = case.paired(&out);
    let doc = serde_json::json!({
        "strategy": strategy.name(),
        "k0": k0,
        "curvature": k,
        "dragged": [target.x, target.y],
        "paired": [paired.x, paired.y],
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn marker(points: Cubic) -> Result<()> {
    let m = intersect_lines(points.p0, points.p1, points.p2, points.p3).map(|p| [p.x, p.y]);
    println!("{}", serde_json::json!({ "marker": m }));
    Ok(())
}

fn replay(input: &str, out: &str, strategy: Strategy) -> Result<()> {
    tracing::info!(input, out, strategy = strategy.name(), "replay");
    let raw = std::fs::read(input).with_context(|| format!("reading {input}"))?;
    let scn: scenario::Scenario =
        serde_json::from_slice(&raw).with_context(|| format!("parsing {input}"))?;
    let report = scenario::replay(&scn, strategy, SolveCfg::default())?;

    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(&report)?)
        .with_context(|| format!("writing {out}"))?;
    Ok(())
}

#[derive(Debug, Default, PartialEq)]
struct CrossStats {
    solved: u64,
    blocked: u64,
    max_drift: f64,
    max_disagreement: f64,
}

fn crosscheck_stats(samples: u64, seed: u64) -> CrossStats {
    let sample_cfg = SampleCfg::default();
    let cfg = SolveCfg::default();
    let mut stats = CrossStats::default();
    for index in 0..samples {
        let Some(s) = draw_drag(&sample_cfg, ReplayToken { seed, index }) else {
            continue;
        };
        let Ok(k0) = initial_curvature(s.case, &s.cubic) else {
            stats.blocked += 1;
            continue;
        };
        let exact = Strategy::ClosedForm.paired_position(s.case, &s.cubic, s.target, k0, &cfg);
        let iter = Strategy::RootFinder.paired_position(s.case, &s.cubic, s.target, k0, &cfg);
        let (Ok(a), Ok(b)) = (exact, iter) else {
            stats.blocked += 1;
            continue;
        };
        let moved = s.case.with_paired(&s.case.with_dragged(&s.cubic, s.target), a);
        if let Ok(k) = moved.curvature(s.case.curvature_t()) {
            let drift = (k - k0).abs() / k0.abs().max(1e-9);
            stats.max_drift = stats.max_drift.max(drift);
        }
        stats.max_disagreement = stats.max_disagreement.max((a - b).norm() / (1.0 + a.norm()));
        stats.solved += 1;
    }
    stats
}

fn crosscheck(samples: u64, seed: u64, tol: f64) -> Result<()> {
    tracing::info!(samples, seed, "crosscheck");
    let stats = crosscheck_stats(samples, seed);
    let doc = serde_json::json!({
        "samples": samples,
        "seed": seed,
        "solved": stats.solved,
        "blocked": stats.blocked,
        "max_relative_drift": stats.max_drift,
        "max_strategy_disagreement": stats.max_disagreement,
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    if stats.max_drift > tol || stats.max_disagreement > tol {
        bail!("crosscheck exceeded tolerance {tol}");
    }
    Ok(())
}

fn report() -> Result<()> {
    let rev = option_env!("GIT_COMMIT").unwrap_or("unknown");
    let obj = serde_json::json!({
        "code_rev": rev,
        "harmonic": harmonic::VERSION,
        "default_strategy": Strategy::default().name(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
