use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "joinery", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a demo scenario against a simulated clock.
    Demo(DemoArgs),
    /// Validate a binding config JSON file and print it with defaults filled in.
    CheckConfig(CheckConfigArgs),
}

#[derive(Parser, Debug)]
struct DemoArgs {
    /// Scenario to run.
    #[arg(value_enum)]
    kind: joinery::DemoKind,

    /// Number of data updates.
    #[arg(long, default_value_t = 3)]
    cycles: usize,

    /// Clock step between captured frames, in milliseconds.
    #[arg(long, default_value_t = 100)]
    frame_ms: u64,

    /// Seed for the data generator.
    #[arg(long, default_value_t = 0x5EED)]
    seed: u64,

    /// Binding config JSON overriding the scenario timings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write every frame as JSON to this path instead of printing a summary.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct CheckConfigArgs {
    /// Input config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Demo(args) => cmd_demo(args),
        Command::CheckConfig(args) => cmd_check_config(args),
    }
}

fn read_config(path: &Path) -> anyhow::Result<joinery::BindingConfig> {
    joinery::BindingConfig::from_path(path)
        .with_context(|| format!("load binding config '{}'", path.display()))
}

fn cmd_demo(args: DemoArgs) -> anyhow::Result<()> {
    let config = args.config.as_deref().map(read_config).transpose()?;
    let options = joinery::DemoOptions {
        cycles: args.cycles,
        frame_ms: args.frame_ms,
        seed: args.seed,
        config,
    };
    let kind = args.kind;
    let run = joinery::run_demo(kind, &options)?;

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(&out)
                .with_context(|| format!("create output '{}'", out.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, &run).with_context(|| "serialize demo run")?;
            w.flush().with_context(|| format!("write output '{}'", out.display()))?;
            eprintln!(
                "wrote {} frames ({} cycles) to {}",
                run.frames.len(),
                run.cycles.len(),
                out.display()
            );
        }
        None => {
            println!("demo: {}", kind.name());
            for cycle in &run.cycles {
                println!(
                    "t={}ms enter={} revive={} update={} exit={}",
                    cycle.at_ms, cycle.entered, cycle.revived, cycle.updated, cycle.exited
                );
            }
            let settled = run.last_frame().map_or(0, |f| f.elements.len());
            println!("frames={} settled_elements={}", run.frames.len(), settled);
        }
    }
    Ok(())
}

fn cmd_check_config(args: CheckConfigArgs) -> anyhow::Result<()> {
    let config = read_config(&args.in_path)?;
    let json = serde_json::to_string_pretty(&config).with_context(|| "serialize config")?;
    println!("{json}");
    Ok(())
}
