use clap::Parser;
use evaluator::Report;
use repeval_cli::config::EvalConfig;
use repeval_cli::repeval_commands::{log_level, Args};
use std::io::BufWriter;
#[macro_use]
extern crate log;

fn main() {
    let args = Args::parse();
    if let Err(why) = run(&args) {
        eprintln!("{}", why);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> evaluator::Result<()> {
    let config = EvalConfig::from_args(args)?;
    let level = log_level(config.verbose());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    let input = config.input_file()?;
    debug!("START\tEvaluation of {}", input.display());
    let evaluation = evaluator::evaluate_file(input, config.cutoff())?;
    let stdout = std::io::stdout();
    let wtr = BufWriter::new(stdout.lock());
    evaluation.report(wtr, config.format())?;
    debug!("END\tEvaluation");
    Ok(())
}
