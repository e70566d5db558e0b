// Sat Oct 17 2026 - Alex

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "seymour-analyzer")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Classifies armor hex codes into special patterns and word matches", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Classify(ClassifyArgs),
    Scan(ScanArgs),
    Words,
}

#[derive(Parser, Debug)]
pub struct ClassifyArgs {
    #[arg(required = true)]
    pub hex: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// JSON object of piece id to hex code
    #[arg(long)]
    pub codes: PathBuf,

    /// Legacy tag such as `paired` or `axbxcx_A`
    #[arg(short, long)]
    pub pattern: Option<String>,

    #[arg(short, long)]
    pub words: bool,
}

impl ScanArgs {
    pub fn validate(&self) -> Result<(), String> {
        if self.pattern.is_some() && self.words {
            return Err("--pattern and --words cannot be combined".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_classify() {
        let args = Args::parse_from(["seymour-analyzer", "classify", "AABBCC", "a1a2a3"]);
        match args.command {
            Command::Classify(c) => assert_eq!(c.hex, vec!["AABBCC", "a1a2a3"]),
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_scan_validation() {
        let args = Args::parse_from([
            "seymour-analyzer", "scan", "--codes", "codes.json", "--pattern", "paired", "--words",
        ]);
        match args.command {
            Command::Scan(s) => assert!(s.validate().is_err()),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
