// pCAM Scenario Report Runner
// Evaluates the named presets (or a key/value CSV scenario) and writes a JSON report
//
// Usage:
//   cargo run --bin report                                # All three presets
//   cargo run --bin report -- optimistic                  # Filter by preset name
//   cargo run --bin report -- --params scenario.csv       # Custom scenario table
//   cargo run --bin report -- --constants calib.json      # Override model constants
//   cargo run --bin report -- --out results/              # Output directory

mod report;

use pcam_engine::{params_io, ModelConstants, Preset};
use report::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

// ─── CLI Parsing ────────────────────────────────────────────────────────────

struct CliArgs {
    constants: Option<PathBuf>,
    params: Option<PathBuf>,
    out_dir: PathBuf,
    filter: Option<String>,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut cli = CliArgs {
        constants: None,
        params: None,
        out_dir: PathBuf::from("report-results"),
        filter: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--constants" => {
                i += 1;
                cli.constants = args.get(i).map(PathBuf::from);
            }
            "--params" => {
                i += 1;
                cli.params = args.get(i).map(PathBuf::from);
            }
            "--out" => {
                i += 1;
                if let Some(dir) = args.get(i) {
                    cli.out_dir = PathBuf::from(dir);
                }
            }
            arg if !arg.starts_with('-') => {
                cli.filter = Some(arg.to_string());
            }
            _ => {
                log::warn!("unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    cli
}

// ─── Preset Selection ──────────────────────────────────────────────────────

/// An exact preset name (English or French) selects that preset; anything
/// else is matched as a substring of the English names.
fn select_presets(filter: Option<&str>) -> Vec<Preset> {
    let Some(f) = filter else {
        return Preset::ALL.to_vec();
    };
    if let Ok(preset) = f.parse::<Preset>() {
        return vec![preset];
    }
    let f_lower = f.to_lowercase();
    Preset::ALL.into_iter().filter(|p| p.name().contains(&f_lower)).collect()
}

// ─── Output ─────────────────────────────────────────────────────────────────

fn print_row(s: &ScenarioReport) {
    let open = &s.comparison.chart[0];
    let closed = &s.comparison.chart[1];
    println!(
        "  {:<14} {:>9.0} {:>9.0} {:>10} {:>10} {:>10} {:>10}  {}",
        s.name,
        s.params.black_mass_volume,
        s.result.volumes.pcam,
        open.revenue,
        open.margin,
        closed.revenue,
        closed.margin,
        s.comparison.preferred.label(),
    );
}

fn write_report(report: &Report, dir: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("report-{}.json", report.timestamp));
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(&path, json)?;
    Ok(path)
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn run(cli: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let constants = match &cli.constants {
        Some(path) => {
            log::info!("loading model constants from {}", path.display());
            ModelConstants::from_json_file(path)?
        }
        None => ModelConstants::default(),
    };

    let scenarios: Vec<ScenarioReport> = match &cli.params {
        Some(path) => {
            let params = params_io::read_csv_file(path)?;
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "custom".to_string());
            vec![ScenarioReport::new(name, &constants, params)]
        }
        None => select_presets(cli.filter.as_deref())
            .into_iter()
            .map(|p| ScenarioReport::for_preset(p, &constants))
            .collect(),
    };

    if scenarios.is_empty() {
        return Err(format!("no preset matches filter: {:?}", cli.filter).into());
    }

    println!("\n  pCAM Relocation Report v{}", env!("CARGO_PKG_VERSION"));
    println!("  {} scenario(s), figures in M€\n", scenarios.len());
    println!(
        "  {:<14} {:>9} {:>9} {:>10} {:>10} {:>10} {:>10}  {}",
        "Scenario", "BM (t)", "pCAM (t)", "Open rev", "Open mrg", "Closed rev", "Closed mrg", "Preferred"
    );
    println!("  {}", "-".repeat(100));
    for s in &scenarios {
        print_row(s);
    }
    println!("  {}", "-".repeat(100));

    let ts = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis();
    let report = Report {
        timestamp: ts.to_string(),
        version: env!("CARGO_PKG_VERSION"),
        constants,
        summary: Summary::from_scenarios(&scenarios),
        scenarios,
    };
    println!(
        "  Closed cycle preferred in {}/{} scenario(s)\n",
        report.summary.closed_preferred, report.summary.total
    );

    let path = write_report(&report, &cli.out_dir)?;
    println!("  Results saved to: {}\n", path.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    match run(parse_args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
