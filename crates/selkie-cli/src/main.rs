use selkie::fixtures::{MAP1_PATH, map1};
use selkie::{Config, EngineOptions, Limit, MapDocument, Scene, SnapshotMode};
use serde::Serialize;
use serde_json::Value;
use std::io::Read;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    InvalidArg(String),
    Io(std::io::Error),
    Selkie(selkie::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::InvalidArg(msg) => write!(f, "invalid argument: {msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Selkie(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<selkie::Error> for CliError {
    fn from(value: selkie::Error) -> Self {
        Self::Selkie(value)
    }
}

impl From<selkie::vis::Error> for CliError {
    fn from(value: selkie::vis::Error) -> Self {
        Self::Selkie(value.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Ccp,
    Flood,
    Flow,
    Pvs,
    Layout,
    Bundle,
    Snapshot,
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ccp" => Ok(Self::Ccp),
            "flood" => Ok(Self::Flood),
            "flow" => Ok(Self::Flow),
            "pvs" => Ok(Self::Pvs),
            "layout" => Ok(Self::Layout),
            "bundle" => Ok(Self::Bundle),
            "snapshot" => Ok(Self::Snapshot),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    map: Option<String>,
    config: Option<String>,
    pretty: bool,
    start: Option<usize>,
    limit: Option<i64>,
    no_eager: bool,
    until_stable: bool,
    path: Option<Vec<usize>>,
    spacing: Option<f64>,
    mode: Option<SnapshotMode>,
    step: Option<usize>,
    focus_cell: Option<usize>,
}

fn usage() -> &'static str {
    "selkie-cli\n\
\n\
USAGE:\n\
  selkie-cli ccp      [--map map1|<path>|-] [--pretty]\n\
  selkie-cli flood    --start <portal> [--limit <n>] [--map ...] [--pretty]\n\
  selkie-cli flow     --start <portal> [--limit <n>] [--no-eager] [--until-stable] [--map ...] [--pretty]\n\
  selkie-cli pvs      [--map ...] [--pretty]\n\
  selkie-cli layout   [--path <p,p,...>] [--map ...] [--pretty]\n\
  selkie-cli bundle   [--path <p,p,...>] [--spacing <s>] [--map ...] [--pretty]\n\
  selkie-cli snapshot --mode flood|flow --start <portal> --step <n> [--focus-cell <cell>] [--map ...] [--pretty]\n\
\n\
COMMON:\n\
  --map map1|<path>|-   built-in sample map (default), a JSON map file, or stdin\n\
  --config <path>       JSON config merged before command-line flags\n\
\n\
NOTES:\n\
  - A --limit of -1 means unbounded.\n\
  - layout and bundle default to the built-in demo path on map1.\n\
  - Set RUST_LOG (e.g. RUST_LOG=selkie_vis=debug) for diagnostics on stderr.\n\
"
}

fn value<'a>(it: &mut impl Iterator<Item = &'a String>) -> Result<&'a str, CliError> {
    it.next()
        .map(String::as_str)
        .ok_or(CliError::Usage(usage()))
}

fn number<T: FromStr>(flag: &str, raw: &str) -> Result<T, CliError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| CliError::InvalidArg(format!("{flag} expects a number, got {raw:?}")))
}

fn parse_path(raw: &str) -> Result<Vec<usize>, CliError> {
    raw.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| number("--path", s))
        .collect()
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();
    let mut it = argv.iter().skip(1);

    let Some(first) = it.next() else {
        return Err(CliError::Usage(usage()));
    };
    args.command = match first.as_str() {
        "--help" | "-h" => return Err(CliError::Usage(usage())),
        cmd => cmd.parse().map_err(|_| CliError::Usage(usage()))?,
    };

    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--pretty" => args.pretty = true,
            "--no-eager" => args.no_eager = true,
            "--until-stable" => args.until_stable = true,
            "--map" => args.map = Some(value(&mut it)?.to_string()),
            "--config" => args.config = Some(value(&mut it)?.to_string()),
            "--start" => args.start = Some(number("--start", value(&mut it)?)?),
            "--limit" => args.limit = Some(number("--limit", value(&mut it)?)?),
            "--path" => args.path = Some(parse_path(value(&mut it)?)?),
            "--step" => args.step = Some(number("--step", value(&mut it)?)?),
            "--focus-cell" => args.focus_cell = Some(number("--focus-cell", value(&mut it)?)?),
            "--spacing" => {
                let spacing: f64 = number("--spacing", value(&mut it)?)?;
                if !(spacing.is_finite() && spacing > 0.0) {
                    return Err(CliError::InvalidArg(format!(
                        "--spacing must be positive, got {spacing}"
                    )));
                }
                args.spacing = Some(spacing);
            }
            "--mode" => {
                args.mode = Some(match value(&mut it)? {
                    "flood" => SnapshotMode::Flood,
                    "flow" => SnapshotMode::Flow,
                    _ => return Err(CliError::Usage(usage())),
                });
            }
            _ => return Err(CliError::Usage(usage())),
        }
    }

    Ok(args)
}

fn read_input(input: &str) -> Result<String, CliError> {
    match input {
        "-" => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        path => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn engine_options(args: &Args) -> Result<EngineOptions, CliError> {
    let mut config = Config::default();
    if let Some(path) = args.config.as_deref() {
        let file = Config::from_json_str(&read_input(path)?)?;
        config.deep_merge(file.as_value());
    }
    if args.no_eager {
        config.set_value("flow.eagerMarking", Value::Bool(false));
    }
    if args.until_stable {
        config.set_value("flow.passes", Value::from("untilStable"));
    }
    if let Some(spacing) = args.spacing {
        config.set_value("bundle.spacing", Value::from(spacing));
    }
    Ok(EngineOptions::from_config(&config)?)
}

fn load_scene(args: &Args, options: EngineOptions) -> Result<Scene, CliError> {
    match args.map.as_deref() {
        None | Some("map1") => Ok(Scene::with_options(map1(), options)),
        Some(input) => {
            let document: MapDocument = serde_json::from_str(&read_input(input)?)?;
            Ok(Scene::from_document(document, options)?)
        }
    }
}

fn require<T: Copy>(value: Option<T>, flag: &str) -> Result<T, CliError> {
    value.ok_or_else(|| CliError::InvalidArg(format!("{flag} is required")))
}

fn demo_path(args: &Args) -> Result<Vec<usize>, CliError> {
    match (&args.path, args.map.as_deref()) {
        (Some(path), _) => Ok(path.clone()),
        (None, None | Some("map1")) => Ok(MAP1_PATH.to_vec()),
        (None, Some(_)) => Err(CliError::InvalidArg(
            "--path is required for maps other than map1".to_string(),
        )),
    }
}

#[derive(Serialize)]
struct FloodOut<'a> {
    start: usize,
    trace: &'a [usize],
    visited: Vec<usize>,
}

#[derive(Serialize)]
struct FlowOut<'a> {
    start: usize,
    trace: &'a [usize],
    cansee: Vec<usize>,
    confirmed: Vec<usize>,
    stack: &'a [usize],
    passes: usize,
}

#[derive(Serialize)]
struct PvsEntry {
    portal: usize,
    portals: Vec<usize>,
    cells: Vec<usize>,
}

#[derive(Serialize)]
struct BundleOut<'a> {
    path: &'a [usize],
    points: Vec<selkie::CrossingPoint>,
    curve: Option<selkie::BundleCurve>,
}

#[derive(Serialize)]
struct LayoutOut<'a> {
    path: &'a [usize],
    #[serde(flatten)]
    layout: selkie::PathLayout,
}

fn run(args: Args) -> Result<(), CliError> {
    let options = engine_options(&args)?;
    let scene = load_scene(&args, options)?;
    let limit = match args.limit {
        Some(raw) => Limit::from_raw(raw)?,
        None => Limit::Unbounded,
    };
    tracing::debug!(command = ?args.command, ?limit, "running");

    match args.command {
        Command::Ccp => {
            let ccp: Vec<&[usize]> = scene.ccp().iter().collect();
            write_json(&ccp, args.pretty)
        }
        Command::Flood => {
            let start = require(args.start, "--start")?;
            let out = scene.flood(start, limit)?;
            write_json(
                &FloodOut {
                    start,
                    trace: &out.trace,
                    visited: out.visited.to_vec(),
                },
                args.pretty,
            )
        }
        Command::Flow => {
            let start = require(args.start, "--start")?;
            let out = scene.flow(start, limit)?;
            write_json(
                &FlowOut {
                    start,
                    trace: &out.trace,
                    cansee: out.cansee.to_vec(),
                    confirmed: out.confirmed.to_vec(),
                    stack: &out.stack,
                    passes: out.passes,
                },
                args.pretty,
            )
        }
        Command::Pvs => {
            let graph = scene.graph();
            let entries: Vec<PvsEntry> = scene
                .flood_sets()
                .iter()
                .enumerate()
                .map(|(portal, set)| PvsEntry {
                    portal,
                    portals: set.to_vec(),
                    cells: graph.summarize_cells(set.iter()).into_iter().collect(),
                })
                .collect();
            write_json(&entries, args.pretty)
        }
        Command::Layout => {
            let path = demo_path(&args)?;
            let layout = scene.layout(&path)?;
            write_json(&LayoutOut { path: &path, layout }, args.pretty)
        }
        Command::Bundle => {
            let path = demo_path(&args)?;
            let points = scene.bundle_points(&path)?;
            let curve = selkie::layout::bundle_curve(&points, &scene.options().bundle);
            write_json(
                &BundleOut {
                    path: &path,
                    points,
                    curve,
                },
                args.pretty,
            )
        }
        Command::Snapshot => {
            let start = require(args.start, "--start")?;
            let step = require(args.step, "--step")?;
            let snapshot = match require(args.mode, "--mode")? {
                SnapshotMode::Flood => scene.flood_snapshot(start, step)?,
                SnapshotMode::Flow => scene.flow_snapshot(start, step, args.focus_cell)?,
            };
            write_json(&snapshot, args.pretty)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(err @ (CliError::Usage(_) | CliError::InvalidArg(_))) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
