// Sat Oct 17 2026 - Alex

use super::args::{Args, ClassifyArgs, Command, ScanArgs};
use crate::analyzer::PatternAnalyzer;
use crate::config::{AnalyzerConfig, WordSource};
use crate::pattern::{HexCodes, PatternKind};
use crate::utils::logging;
use anyhow::Context;
use colored::Colorize;
use std::collections::HashSet;
use std::fs;

pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<()> {
        self.setup_logging(&args);

        if args.no_color {
            colored::control::set_override(false);
        }

        let config = match &args.config {
            Some(path) => AnalyzerConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => AnalyzerConfig::default(),
        };
        let analyzer = PatternAnalyzer::from_config(config);

        match args.command {
            Command::Classify(classify_args) => self.handle_classify(&analyzer, classify_args),
            Command::Scan(scan_args) => self.handle_scan(&analyzer, scan_args, args.quiet),
            Command::Words => self.handle_words(&analyzer),
        }
    }

    fn setup_logging(&self, args: &Args) {
        let level = if args.quiet {
            log::LevelFilter::Error
        } else {
            logging::level_from_str(&args.log_level)
        };
        logging::init_logger(level);
    }

    fn handle_classify(&self, analyzer: &PatternAnalyzer, args: ClassifyArgs) -> anyhow::Result<()> {
        for hex in &args.hex {
            let classification = analyzer.classify(hex);

            let pattern = classification.pattern
                .map(|k| k.display_name().cyan().to_string())
                .unwrap_or_else(|| "-".dimmed().to_string());
            let word = classification.word
                .as_deref()
                .map(|w| w.green().to_string())
                .unwrap_or_else(|| "-".dimmed().to_string());
            let best = analyzer.priorities()
                .best_match(&classification)
                .map(|p| p.display_name().yellow().bold().to_string())
                .unwrap_or_else(|| "none".dimmed().to_string());

            println!("{}  pattern: {}  word: {}  best: {}", hex.to_uppercase().bold(), pattern, word, best);
        }
        Ok(())
    }

    fn handle_scan(&self, analyzer: &PatternAnalyzer, args: ScanArgs, quiet: bool) -> anyhow::Result<()> {
        args.validate().map_err(|e| anyhow::anyhow!(e))?;

        let contents = fs::read_to_string(&args.codes)
            .with_context(|| format!("Failed to read {}", args.codes.display()))?;
        let codes: HexCodes = serde_json::from_str(&contents)
            .with_context(|| format!("{} is not a JSON object of id to hex", args.codes.display()))?;

        let _timer = logging::scoped_timer("scan");

        if let Some(tag) = &args.pattern {
            let kind: PatternKind = tag.parse()?;
            let ids = analyzer.pieces_with_pattern(kind, &codes);
            self.print_ids(&format!("Pieces with pattern {}", kind.display_name()), ids, &codes, quiet);
        } else if args.words {
            let ids = analyzer.pieces_with_words(&codes);
            self.print_ids("Pieces with word matches", ids, &codes, quiet);
        } else {
            let targets = analyzer.highlight_targets(&codes);
            if !quiet {
                println!("{}", format!("{} of {} pieces match", targets.len(), codes.len()).cyan());
            }
            for (id, priority) in &targets {
                let hex = codes.get(id).map(String::as_str).unwrap_or("");
                println!("  {} {} {}", id, hex.to_uppercase().bold(), priority.display_name().yellow());
            }
        }
        Ok(())
    }

    fn handle_words(&self, analyzer: &PatternAnalyzer) -> anyhow::Result<()> {
        let source = analyzer.source();
        let state = if source.words_enabled() { "enabled".green() } else { "disabled".red() };
        println!("Word matching {} ({} words)", state, source.word_list().len());

        for (i, (word, template)) in source.word_list().iter().enumerate() {
            println!("  #{} {} {}", i + 1, word.bold(), template.to_uppercase().dimmed());
        }
        Ok(())
    }

    fn print_ids(&self, title: &str, ids: HashSet<String>, codes: &HexCodes, quiet: bool) {
        let mut ids: Vec<String> = ids.into_iter().collect();
        ids.sort();

        if !quiet {
            println!("{}", format!("{}: {}", title, ids.len()).cyan());
        }
        for id in &ids {
            let hex = codes.get(id).map(String::as_str).unwrap_or("");
            println!("  {} {}", id, hex.to_uppercase().bold());
        }
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
