use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use log::{info, LevelFilter};

use grover_sim::{search, theory, DiffusionMode, GroverConfig};

use crate::report::Report;

mod report;

#[derive(Parser, Debug)]
#[command(author, version, about = "grover: Grover search on a dense state-vector simulator")]
struct Cli {
    /// Number of qubits in the search register
    #[arg(short = 'n', long, default_value_t = 2)]
    qubits: usize,

    /// Marked bit-string, qubit 0 last (defaults to all ones)
    #[arg(short, long)]
    target: Option<String>,

    /// Grover iterations to apply (defaults to the optimal count)
    #[arg(short, long)]
    iterations: Option<usize>,

    /// Measurement shots
    #[arg(long, default_value_t = 1024)]
    shots: usize,

    /// Seed for reproducible sampling
    #[arg(long)]
    seed: Option<u64>,

    /// Diffusion realization
    #[arg(long, value_enum, default_value_t = DiffusionArg::Gate)]
    diffusion: DiffusionArg,

    /// Print the recorded gate trace
    #[arg(long)]
    circuit: bool,

    /// Print execution statistics
    #[arg(long)]
    stats: bool,

    /// Emit a JSON report instead of text
    #[arg(long)]
    json: bool,

    /// Increase output verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum DiffusionArg {
    Gate,
    ClosedForm,
}

impl From<DiffusionArg> for DiffusionMode {
    fn from(value: DiffusionArg) -> Self {
        match value {
            DiffusionArg::Gate => DiffusionMode::GateLevel,
            DiffusionArg::ClosedForm => DiffusionMode::ClosedForm,
        }
    }
}

impl Cli {
    fn target(&self) -> String {
        self.target
            .clone()
            .unwrap_or_else(|| "1".repeat(self.qubits))
    }

    fn iterations(&self) -> usize {
        self.iterations
            .unwrap_or_else(|| theory::optimal_iterations(self.qubits))
    }

    fn config(&self) -> GroverConfig {
        let mut config = GroverConfig::default()
            .with_shots(self.shots)
            .with_diffusion(self.diffusion.into())
            .with_circuit_recording(self.circuit);
        config.seed = self.seed;
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let target = cli.target();
    let iterations = cli.iterations();
    let config = cli.config();
    info!(
        "searching {} qubits for |{}⟩ with {} iterations",
        cli.qubits, target, iterations
    );

    let result = search(cli.qubits, &target, iterations, &config)
        .with_context(|| format!("search for '{}' on {} qubits failed", target, cli.qubits))?;
    let report = Report::new(&result, config.diffusion, config.seed);

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        println!("{}", json);
    } else {
        print!("{}", report.to_text(cli.stats));
    }

    Ok(())
}

fn init_logging(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    builder.filter_level(level);
    builder.try_init().map_err(|err| err.into())
}
