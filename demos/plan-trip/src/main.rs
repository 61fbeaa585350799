//! plan-trip: plan an HOS-compliant schedule for one truck trip.
//!
//! Reads a route (OpenRouteService GeoJSON or a two-column segment CSV),
//! runs the planner and prints the resulting duty periods.  The schedule is
//! also written to `schedule_periods.csv` / `trip_summaries.csv` under
//! `--out-dir`.
//!
//! ```text
//! RUST_LOG=debug cargo run -p plan-trip -- \
//!     --route demos/plan-trip/data/sample_route.geojson --cycle-used 12
//! ```

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use clap::Parser;
use log::info;

use hos_core::HosRules;
use hos_engine::{PlannerBuilder, ScheduleResult, TripInput};
use hos_output::{CsvWriter, ScheduleOutputObserver};
use hos_route::{LegSummary, Route, load_route_json, load_segments_csv, summarize};

#[derive(Debug, Parser)]
#[command(name = "plan-trip", version)]
#[command(about = "Plan an hours-of-service compliant truck trip schedule")]
struct Args {
    /// Route file: ORS directions GeoJSON (`.json`/`.geojson`) or segment CSV (`.csv`)
    #[arg(long)]
    route: PathBuf,

    /// Hours already used in the current 70 hr / 8-day cycle
    #[arg(long, default_value_t = 0.0)]
    cycle_used: f64,

    /// Optional JSON file overriding the default rule constants
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Trip start (RFC 3339); defaults to now
    #[arg(long)]
    start: Option<String>,

    /// Directory for the CSV output
    #[arg(long, default_value = "output/plan-trip")]
    out_dir: PathBuf,

    /// Print the schedule as JSON instead of a table
    #[arg(long)]
    json: bool,
}

// ── Input ─────────────────────────────────────────────────────────────────────

fn load_route(path: &Path) -> Result<Route> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    let route = match ext.to_ascii_lowercase().as_str() {
        "csv" => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            load_segments_csv(BufReader::new(file))
        }
        "json" | "geojson" => load_route_json(path),
        other => bail!("unsupported route file extension {other:?} (expected csv, json or geojson)"),
    };
    route.with_context(|| format!("loading route from {}", path.display()))
}

fn load_rules(path: Option<&Path>) -> Result<HosRules> {
    let Some(path) = path else {
        return Ok(HosRules::default());
    };
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let rules: HosRules = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing rules from {}", path.display()))?;
    Ok(rules)
}

fn parse_start(start: Option<&str>) -> Result<DateTime<Utc>> {
    match start {
        Some(s) => Ok(DateTime::parse_from_rfc3339(s)
            .with_context(|| format!("invalid --start {s:?}"))?
            .with_timezone(&Utc)),
        None => Ok(Utc::now()),
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

fn print_table(result: &ScheduleResult) {
    println!(
        "{:<18} {:<18} {:>8} {:>10}  {}",
        "Status", "Start", "Hours", "Miles", "Note"
    );
    println!("{}", "-".repeat(90));
    for p in &result.periods {
        println!(
            "{:<18} {:<18} {:>8.2} {:>10.1}  {}",
            p.status.as_str(),
            p.start.format("%a %H:%M"),
            p.duration().as_hours_f64(),
            p.cumulative_miles,
            p.note,
        );
    }
    println!();

    for (status, hours) in result.hours_by_status() {
        println!("  {:<18} {:>7.2} h", status.as_str(), hours);
    }
    println!("  {:<18} {:>7.2} h", "(on duty)", result.on_duty_time().as_hours_f64());
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let route = load_route(&args.route)?;
    let rules = load_rules(args.rules.as_deref())?;
    let start = parse_start(args.start.as_deref())?;
    let trip = TripInput::new(route, args.cycle_used);

    let planner = PlannerBuilder::new(start).rules(rules).build()?;

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    let writer = CsvWriter::new(&args.out_dir)?;
    let mut obs = ScheduleOutputObserver::new(writer);

    let t0 = Instant::now();
    let result = planner.plan_with(&trip, &mut obs)?;
    let elapsed = t0.elapsed();
    obs.finish()?;
    info!("planned in {:.3} ms", elapsed.as_secs_f64() * 1_000.0);

    let summary = summarize(&trip.route).rounded();
    let pickup = trip.route.pickup_leg().map(LegSummary::of);

    if args.json {
        let body = serde_json::json!({
            "route_summary": {
                "total_miles":           summary.total_miles,
                "estimated_drive_hours": summary.estimated_drive_hours,
            },
            "pickup_leg": pickup.map(|leg| serde_json::json!({
                "distance_km":    leg.distance_km,
                "duration_hours": leg.duration_hours,
            })),
            "schedule": result,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!("=== plan-trip ===");
    println!(
        "Route: {} segments  |  {:.2} mi  |  ~{:.2} h driving  |  cycle used {:.1} h",
        trip.route.len(),
        summary.total_miles,
        summary.estimated_drive_hours,
        args.cycle_used,
    );
    if let Some(leg) = pickup {
        println!("Pickup leg: {:.2} km, {:.2} h", leg.distance_km, leg.duration_hours);
    }
    println!();

    if result.is_empty() {
        println!("Empty route: nothing to schedule.");
        return Ok(());
    }
    print_table(&result);

    println!();
    println!(
        "{} periods, {} → {}  (written to {})",
        result.periods.len(),
        result.start().map(|t| t.to_rfc3339()).unwrap_or_default(),
        result.end().map(|t| t.to_rfc3339()).unwrap_or_default(),
        args.out_dir.display(),
    );
    Ok(())
}
