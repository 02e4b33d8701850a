use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "zoomfx", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate validated zoom instructions from a timeline.
    Export(ExportArgs),
    /// Sample preview transforms at a fixed frame rate.
    Preview(PreviewArgs),
    /// Validate and purity-check instruction JSON (one object or an array).
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Input timeline JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Wrap instructions in a batch envelope for this source video.
    #[arg(long)]
    batch: Option<String>,

    /// Fail on any timeline finding instead of reporting it.
    #[arg(long, default_value_t = false)]
    strict: bool,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Input timeline JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Engine options JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sampling rate in ticks per second.
    #[arg(long, default_value_t = 30.0)]
    fps: f64,

    /// First sampled time in seconds.
    #[arg(long, default_value_t = 0.0)]
    from: f64,

    /// Last sampled time in seconds (defaults to the end of the last effect).
    #[arg(long)]
    to: Option<f64>,

    /// Display size as WIDTHxHEIGHT (defaults to the recording frame).
    #[arg(long)]
    viewport: Option<String>,

    /// Print CSS transform strings instead of JSON ticks.
    #[arg(long, default_value_t = false)]
    css: bool,

    /// Fail on any timeline finding instead of reporting it.
    #[arg(long, default_value_t = false)]
    strict: bool,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Instruction JSON to check.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Export(args) => cmd_export(args),
        Command::Preview(args) => cmd_preview(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_timeline(path: &Path, strict: bool) -> anyhow::Result<zoomfx::Timeline> {
    let timeline = zoomfx::Timeline::from_path(path)?;
    if strict {
        timeline
            .validate()
            .with_context(|| format!("timeline '{}'", path.display()))?;
    } else {
        for finding in timeline.report().errors {
            eprintln!("warning: {finding}");
        }
    }
    Ok(timeline)
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let timeline = load_timeline(&args.in_path, args.strict)?;
    let report = zoomfx::prepare_export(&timeline.effects, timeline.frame)
        .with_context(|| format!("export '{}'", args.in_path.display()))?;
    for rejected in &report.rejected {
        eprintln!(
            "rejected effect '{}' (#{}): {}",
            rejected.id, rejected.index, rejected.error
        );
    }
    let instructions = report.ready;

    let json = match &args.batch {
        Some(video) => {
            let batch = zoomfx::ZoomBatch::from_instructions(video.as_str(), &instructions)?;
            serde_json::to_string_pretty(&batch)?
        }
        None => serde_json::to_string_pretty(&instructions)?,
    };

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, json).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {} instruction(s) to {}", instructions.len(), out.display());
        }
        None => println!("{json}"),
    }
    if !report.rejected.is_empty() {
        anyhow::bail!(
            "{} effect(s) rejected, {} instruction(s) exported",
            report.rejected.len(),
            instructions.len()
        );
    }
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    if !(args.fps.is_finite() && args.fps > 0.0) {
        anyhow::bail!("--fps must be finite and > 0");
    }
    let timeline = load_timeline(&args.in_path, args.strict)?;
    let opts = match &args.config {
        Some(path) => zoomfx::EngineOpts::from_path(path)?,
        None => zoomfx::EngineOpts::default(),
    };

    let end = args.to.unwrap_or_else(|| {
        timeline
            .effects
            .iter()
            .map(|e| e.window.end_s())
            .fold(args.from, f64::max)
    });
    let mut engine = zoomfx::PreviewEngine::new(timeline, opts)?;
    if let Some(v) = &args.viewport {
        let (w, h) = parse_viewport(v)?;
        engine.set_viewport(w, h)?;
    }
    for skipped in engine.normalized().skipped() {
        tracing::info!(effect = %skipped.id, reason = %skipped.reason, "effect not previewed");
    }

    let count = ((end - args.from) * args.fps).floor().max(0.0) as u64;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for i in 0..=count {
        let t = args.from + i as f64 / args.fps;
        let tick = engine.evaluate(t);
        if args.css {
            writeln!(out, "{t:.3}\t{}", tick.transform.to_css())?;
        } else {
            writeln!(out, "{}", serde_json::to_string(&tick)?)?;
        }
    }
    Ok(())
}

fn parse_viewport(s: &str) -> anyhow::Result<(f64, f64)> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .with_context(|| format!("viewport '{s}' must look like WIDTHxHEIGHT"))?;
    let w: f64 = w.trim().parse().with_context(|| format!("viewport width '{w}'"))?;
    let h: f64 = h.trim().parse().with_context(|| format!("viewport height '{h}'"))?;
    Ok((w, h))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckOutcome {
    index: usize,
    purity: zoomfx::PurityReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    validation: Option<zoomfx::ValidationReport>,
}

impl CheckOutcome {
    fn ok(&self) -> bool {
        self.purity.clean && self.validation.as_ref().is_some_and(|v| v.valid)
    }
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let value = read_json(&args.in_path)?;
    let items = match value {
        serde_json::Value::Array(items) => items,
        other => vec![other],
    };

    let mut outcomes = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let purity = zoomfx::check_purity(item);
        let validation = purity.clean.then(|| zoomfx::validate_json(item));
        outcomes.push(CheckOutcome {
            index,
            purity,
            validation,
        });
    }

    println!("{}", serde_json::to_string_pretty(&outcomes)?);
    let failed = outcomes.iter().filter(|o| !o.ok()).count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} instruction(s) rejected", outcomes.len());
    }
    Ok(())
}

fn read_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let f = File::open(path).with_context(|| format!("open '{}'", path.display()))?;
    serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse '{}'", path.display()))
}
