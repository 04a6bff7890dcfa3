//! `wordfreq`: rank word frequencies in English and Indic-script text.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use polyglot_wordfreq::config::{MAX_TOP_N, MIN_TOP_N};
use polyglot_wordfreq::{AnalysisReport, LanguageCode, Pipeline, PipelineConfig};

#[derive(Parser)]
#[command(name = "wordfreq", version, about = "Multilingual word frequency analysis")]
struct Cli {
    /// Pipeline config file (TOML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Normalize, tokenize, filter and rank a text.
    Analyze {
        /// Text to analyze. Read from --file or stdin when omitted.
        text: Option<String>,

        /// Read the text from a file.
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Language code (english, hindi, assamese, manipuri, bodo).
        #[arg(long, short, default_value = "english")]
        lang: LanguageCode,

        /// Number of top words to show.
        #[arg(long, short)]
        top: Option<usize>,

        /// Print the full report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List supported languages with their font files.
    Languages,

    /// Show the stopword list for a language.
    Stopwords {
        #[arg(long, short)]
        lang: LanguageCode,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => PipelineConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PipelineConfig::default(),
    };
    let pipeline = Pipeline::new(config)?;

    match cli.command {
        Command::Analyze {
            text,
            file,
            lang,
            top,
            json,
        } => {
            let top_n = top.unwrap_or(pipeline.config().top_n);
            if !(MIN_TOP_N..=MAX_TOP_N).contains(&top_n) {
                bail!("--top must be between {} and {}", MIN_TOP_N, MAX_TOP_N);
            }

            let text = read_input(text, file)?;
            if text.trim().is_empty() {
                bail!("Please enter some text to analyze");
            }

            let report = pipeline.analyze(&text, lang, top_n);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report, &pipeline);
            }
        }
        Command::Languages => {
            for lang in LanguageCode::ALL {
                println!(
                    "{:<10} {:<10} {}",
                    lang.code(),
                    lang.label(),
                    lang.font_file().unwrap_or("(default font)")
                );
            }
        }
        Command::Stopwords { lang } => {
            let words = pipeline.stopwords().sorted_words(lang);
            println!("{} stopwords for {}", words.len(), lang.label());
            for word in words {
                println!("{}", word);
            }
        }
    }

    Ok(())
}

fn read_input(text: Option<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()));
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("reading stdin")?;
    Ok(buf)
}

fn print_report(report: &AnalysisReport, pipeline: &Pipeline) {
    if report.is_empty() {
        eprintln!("No valid tokens found after filtering. Try a different text or language.");
        return;
    }

    println!("Language: {}", report.language.label());
    match report.language.resolve_font(&pipeline.config().font_root) {
        Some(path) => println!("Font: {}", path.display()),
        None => println!("Font: default"),
    }
    println!(
        "Tokens: {} before filtering, {} after, {} unique ({:?}{})",
        report.token_count,
        report.filtered_count,
        report.unique_count,
        report.method,
        if report.fallback_used { ", fallback" } else { "" }
    );
    println!();

    let width = report
        .ranked
        .iter()
        .map(|e| e.token.chars().count())
        .max()
        .unwrap_or(0);
    for (i, entry) in report.ranked.iter().enumerate() {
        let pad = width - entry.token.chars().count();
        println!(
            "{:>3}. {}{}  {}",
            i + 1,
            entry.token,
            " ".repeat(pad),
            entry.count
        );
    }
}
