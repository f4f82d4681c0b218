use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
    time::Duration,
};

use algotrace::inputs::random;
use algotrace::{
    AlgorithmInput, GraphPreset, JobVisitor, MazePreset, PlaybackConfig, PlaybackState, Position,
    Projector, StepRecord, Timeline, TimelineObserver, TraceGenerator,
};
use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng as _;
use rand_chacha::ChaCha8Rng;

#[derive(Parser, Debug)]
#[command(name = "algotrace", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a trace and dump it as JSON.
    Trace(TraceArgs),
    /// Play a trace to completion, printing each record's narration.
    Play(PlayArgs),
    /// Print a built-in input as JSON.
    Preset(PresetArgs),
    /// Print a random input as JSON.
    Random(RandomArgs),
}

#[derive(Parser, Debug)]
struct TraceArgs {
    /// Input algorithm JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Input algorithm JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Playback speed; the tick delay is `base_interval_ms / speed`.
    #[arg(long, default_value_t = 2)]
    speed: u32,

    #[arg(long, default_value_t = 1000)]
    base_interval_ms: u64,

    /// Sleep between ticks instead of advancing the clock directly.
    #[arg(long)]
    realtime: bool,
}

#[derive(Parser, Debug)]
struct PresetArgs {
    kind: PresetKind,

    /// Preset name (`easy`, `medium`, `hard`, `compare_a`, `compare_b` or `internet`, `power`, `road`).
    name: String,

    /// Algorithm to tag the input with. Defaults to bfs for mazes and kruskal for graphs.
    #[arg(long, value_enum)]
    algorithm: Option<PresetAlgorithm>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PresetKind {
    Maze,
    Graph,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PresetAlgorithm {
    Bfs,
    Dfs,
    Kruskal,
    Prim,
    GraphBfs,
    GraphDfs,
}

#[derive(Parser, Debug)]
struct RandomArgs {
    kind: RandomKind,

    /// Array length or graph node count.
    #[arg(long, default_value_t = 10)]
    size: usize,

    /// Seed for a reproducible input (thread RNG when omitted).
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RandomKind {
    Sort,
    Search,
    Graph,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Trace(args) => cmd_trace(args),
        Command::Play(args) => cmd_play(args),
        Command::Preset(args) => cmd_preset(args),
        Command::Random(args) => cmd_random(args),
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
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn read_input(path: &Path) -> anyhow::Result<AlgorithmInput> {
    AlgorithmInput::from_path(path).with_context(|| format!("load input '{}'", path.display()))
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let input = read_input(&args.in_path)?;
    let json = input
        .trace_json()
        .with_context(|| format!("generate {} trace", input.name()))?;

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(&out).with_context(|| format!("create '{}'", out.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, &json).with_context(|| "write trace JSON")?;
            w.flush().with_context(|| format!("flush '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&json)?),
    }
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let input = read_input(&args.in_path)?;
    let config = PlaybackConfig::new(args.base_interval_ms, args.speed)?;
    input.dispatch(PlayRun {
        config,
        realtime: args.realtime,
    })
}

struct PlayRun {
    config: PlaybackConfig,
    realtime: bool,
}

impl JobVisitor for PlayRun {
    type Output = anyhow::Result<()>;

    fn visit<G>(self, job: &G) -> Self::Output
    where
        G: TraceGenerator,
        G::Step: serde::Serialize,
        <G::Projector as Projector>::View: serde::Serialize,
    {
        let mut timeline = Timeline::<G::Projector>::new(self.config)?;
        timeline.subscribe(Box::new(Narrator));
        timeline
            .generate(job)
            .with_context(|| format!("generate {} trace", job.name()))?;
        timeline.play()?;

        // one tick per record; the bound only guards against a stalled clock
        for _ in 0..timeline.len() {
            if timeline.state() != PlaybackState::Playing {
                break;
            }
            let Some(due) = timeline.next_due_ms() else {
                break;
            };
            let wait = due.saturating_sub(timeline.now_ms());
            if self.realtime {
                std::thread::sleep(Duration::from_millis(wait));
            }
            timeline.advance_time(wait);
        }

        anyhow::ensure!(
            timeline.state() == PlaybackState::Complete,
            "playback stopped at {} of {}",
            timeline.position(),
            timeline.len()
        );
        eprintln!(
            "{}: {} records in {} ms of playback",
            job.name(),
            timeline.len(),
            timeline.now_ms()
        );
        Ok(())
    }
}

/// Prints every applied record and the final summary view.
struct Narrator;

impl<P> TimelineObserver<P> for Narrator
where
    P: Projector,
    P::View: serde::Serialize,
{
    fn on_step(&mut self, position: Position, step: Option<&P::Step>, _view: &P::View) {
        if let Some(step) = step {
            println!(
                "{:>5} {:<16} {}",
                position.to_string(),
                step.action(),
                step.message()
            );
        }
    }

    fn on_complete(&mut self, summary: &P::View) {
        match serde_json::to_string(summary) {
            Ok(s) => println!("summary {s}"),
            Err(e) => tracing::warn!(error = %e, "summary view did not serialize"),
        }
    }
}

fn cmd_preset(args: PresetArgs) -> anyhow::Result<()> {
    let input = match args.kind {
        PresetKind::Maze => {
            let maze = args.name.parse::<MazePreset>()?.maze();
            match args.algorithm {
                None | Some(PresetAlgorithm::Bfs) => AlgorithmInput::Bfs(maze),
                Some(PresetAlgorithm::Dfs) => AlgorithmInput::Dfs(maze),
                Some(other) => anyhow::bail!("{other:?} does not run on a maze"),
            }
        }
        PresetKind::Graph => {
            let graph = args.name.parse::<GraphPreset>()?.graph();
            match args.algorithm {
                None | Some(PresetAlgorithm::Kruskal) => AlgorithmInput::Kruskal(graph),
                Some(PresetAlgorithm::Prim) => AlgorithmInput::Prim(graph),
                Some(PresetAlgorithm::GraphBfs) => AlgorithmInput::GraphBfs(graph),
                Some(PresetAlgorithm::GraphDfs) => AlgorithmInput::GraphDfs(graph),
                Some(other) => anyhow::bail!("{other:?} does not run on a graph"),
            }
        }
    };
    println!("{}", input.to_json_pretty()?);
    Ok(())
}

fn cmd_random(args: RandomArgs) -> anyhow::Result<()> {
    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(rand::thread_rng()).with_context(|| "seed from thread rng")?,
    };

    let input = match args.kind {
        RandomKind::Sort => AlgorithmInput::BubbleSort(algotrace::inputs::ArrayInput {
            array: random::random_array(&mut rng, args.size, 1, 100)?,
        }),
        RandomKind::Search => {
            let array = random::random_array(&mut rng, args.size, 1, 100)?;
            let target = array.first().copied().unwrap_or(1);
            AlgorithmInput::LinearSearch(algotrace::LinearSearch {
                array: random::shuffled(&mut rng, &array),
                target,
            })
        }
        RandomKind::Graph => {
            let extra = args.size;
            AlgorithmInput::Kruskal(random::random_connected_graph(
                &mut rng, args.size, extra, 20,
            )?)
        }
    };
    println!("{}", input.to_json_pretty()?);
    Ok(())
}
