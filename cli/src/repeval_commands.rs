use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(name = "repeval")]
#[clap(author = "Bansho Masutani<ban-m@g.ecc.u-tokyo.ac.jp>")]
#[clap(version = "0.1")]
#[clap(about = "Assess the classification by a reputation system from its simulation log.")]
pub struct Args {
    /// Tab-separated simulation log: user, target, score (or None), user type, target type.
    pub input: Option<PathBuf>,
    /// Targets scored strictly above the cutoff are classified as GOOD. [default: 0]
    #[clap(allow_negative_numbers = true)]
    pub cutoff: Option<f64>,
    /// TOML profile. Values on the command line take precedence.
    #[clap(long, value_name = "TOML")]
    pub profile: Option<PathBuf>,
    /// Output the result in JSON format.
    #[clap(long)]
    pub json: bool,
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
