//! Configuration -- the parameters of a run.
//!
//! A run is configured by a TOML profile, the command line, or both.
//! The command line overrides the profile.
use crate::repeval_commands::Args;
use evaluator::{EvalError, ReportFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct EvalConfig {
    /// The path to the simulation log.
    input_file: Option<PathBuf>,
    cutoff: f64,
    format: ReportFormat,
    verbose: u8,
}

impl EvalConfig {
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::read_to_string(path)?;
        toml::from_str(&file).map_err(|why| EvalError::Config(why.to_string()))
    }
    pub fn from_args(args: &Args) -> Result<Self> {
        let config = match args.profile.as_ref() {
            Some(profile) => Self::from_toml(profile)?,
            None => Self::default(),
        };
        Ok(config.override_with(args))
    }
    pub fn override_with(mut self, args: &Args) -> Self {
        if let Some(input) = args.input.as_ref() {
            self.input_file = Some(input.clone());
        }
        if let Some(cutoff) = args.cutoff {
            self.cutoff = cutoff;
        }
        if args.json {
            self.format = ReportFormat::Json;
        }
        self.verbose = self.verbose.max(args.verbose);
        self
    }
    pub fn input_file(&self) -> Result<&Path> {
        self.input_file.as_deref().ok_or(EvalError::Usage)
    }
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }
    pub fn format(&self) -> ReportFormat {
        self.format
    }
    pub fn verbose(&self) -> u8 {
        self.verbose
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    fn profile(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }
    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["repeval", "sim.tsv"]).unwrap();
        let config = EvalConfig::from_args(&args).unwrap();
        assert_eq!(config.input_file().unwrap(), Path::new("sim.tsv"));
        assert_eq!(config.cutoff(), 0f64);
        assert_eq!(config.format(), ReportFormat::Text);
        assert_eq!(config.verbose(), 0);
    }
    #[test]
    fn missing_input() {
        let args = Args::try_parse_from(["repeval"]).unwrap();
        let config = EvalConfig::from_args(&args).unwrap();
        let why = config.input_file().unwrap_err();
        assert_eq!(
            why.to_string(),
            "Need to provide the file to analyze as the single argument"
        );
    }
    #[test]
    fn profile_and_override() {
        let file = profile("input_file = \"sim.tsv\"\ncutoff = 0.4\nformat = \"json\"\nverbose = 1\n");
        let path = file.path().to_str().unwrap();
        let args = Args::try_parse_from(["repeval", "--profile", path]).unwrap();
        let config = EvalConfig::from_args(&args).unwrap();
        assert_eq!(config.input_file().unwrap(), Path::new("sim.tsv"));
        assert_eq!(config.cutoff(), 0.4);
        assert_eq!(config.format(), ReportFormat::Json);
        assert_eq!(config.verbose(), 1);
        let args =
            Args::try_parse_from(["repeval", "other.tsv", "0.7", "-vvv", "--profile", path])
                .unwrap();
        let config = EvalConfig::from_args(&args).unwrap();
        assert_eq!(config.input_file().unwrap(), Path::new("other.tsv"));
        assert_eq!(config.cutoff(), 0.7);
        assert_eq!(config.verbose(), 3);
    }
    #[test]
    fn invalid_profile() {
        let file = profile("cutof = 0.4\n");
        let path = file.path().to_str().unwrap();
        let args = Args::try_parse_from(["repeval", "sim.tsv", "--profile", path]).unwrap();
        match EvalConfig::from_args(&args) {
            Err(EvalError::Config(_)) => {}
            other => panic!("{:?}", other),
        }
    }
}
