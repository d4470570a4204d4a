//! Induce a decision tree from a whitespace-separated training file
//! and print it.
use clap::Parser;
use colored::Colorize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use minid3::prelude::*;

use std::path::PathBuf;
use std::process::ExitCode;


const WIDTH: usize = 12;


#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Training file: one example per line,
    /// attribute values followed by the class.
    file: PathBuf,

    /// Label counted as positive (repeatable).
    #[arg(short, long = "positive", required = true)]
    positive: Vec<String>,

    /// Maximal depth of the tree. Unbounded if omitted.
    #[arg(short = 'd', long)]
    max_depth: Option<usize>,

    /// Attribute never split on (repeatable).
    #[arg(long)]
    avoid: Vec<String>,

    /// Highlight the outline.
    #[arg(long)]
    color: bool,

    /// Also write the tree as a Graphviz file.
    #[arg(long)]
    dot: Option<PathBuf>,

    /// Verbosity (-v: info, -vv: debug, -vvv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}


fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format!("Error: {e}").red());
            ExitCode::FAILURE
        },
    }
}


fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}


fn run(cli: &Cli) -> minid3::Result<()> {
    let sample = SampleReader::default()
        .file(&cli.file)
        .read()?;

    let mut builder = DecisionTreeBuilder::new(&sample)
        .positive_class(&cli.positive)
        .avoid(&cli.avoid);
    if let Some(depth) = cli.max_depth {
        builder = builder.max_depth(depth);
    }
    let learner = builder.build()?;
    let f = learner.produce(&sample)?;

    let accuracy = f.accuracy(&sample)?;
    let (n_sample, n_feature) = sample.shape();
    println!("{}", "TRAINING SUMMARY".bold().red());
    println!("{:>WIDTH$}  {n_sample}", "EXAMPLES".bold().blue());
    println!("{:>WIDTH$}  {n_feature}", "ATTRIBUTES".bold().blue());
    println!("{:>WIDTH$}  {}", "CLASSES".bold().blue(), sample.classes().join(", "));
    println!("{:>WIDTH$}  {}", "DEPTH".bold().green(), f.depth());
    println!("{:>WIDTH$}  {}", "LEAVES".bold().green(), f.leaves());
    println!("{:>WIDTH$}  {accuracy:.4}\n", "ACCURACY".bold().cyan());

    print!("{}", f.printer().colored(cli.color));

    if let Some(path) = &cli.dot {
        f.to_dot_file(path)?;
    }

    Ok(())
}
