//! Chandas CLI — syllable weights and metrical patterns for IAST
//! Sanskrit verse.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use chandas_core::figures::vipula::VipulaOutcome;
use chandas_core::{analyze, Analysis, Finding, Weight};

#[derive(Parser)]
#[command(
    name = "chandas",
    about = "Syllable weights and metrical patterns for IAST Sanskrit verse",
    version,
)]
struct Cli {
    /// Input file with IAST text, or "-" for stdin
    input: PathBuf,

    /// Emit the full analysis as pretty JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Analyze each input line separately and print its weight grid
    #[arg(long, default_value_t = false)]
    per_line: bool,

    /// Include not-applicable detector rows in the summary
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let text = read_input(&cli.input)?;

    if cli.per_line {
        return per_line(&text);
    }

    log::info!("Analyzing {} chars", text.chars().count());
    let analysis = analyze(&text)
        .with_context(|| format!("Failed to analyze {}", cli.input.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&analysis.to_json_value())?);
    } else {
        print_report(&analysis, cli.verbose);
    }

    Ok(())
}

fn read_input(path: &PathBuf) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))
    }
}

/// One weight grid per input line, the caller-side convention for
/// texts that mark verse boundaries with newlines.
fn per_line(text: &str) -> Result<()> {
    for (n, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let analysis =
            analyze(line).with_context(|| format!("Failed to analyze line {}", n + 1))?;
        let grid: String = analysis
            .weights
            .iter()
            .map(|w| match w {
                Weight::Light => 'L',
                Weight::Heavy => 'H',
            })
            .collect();
        println!("{:<40} {}", line.trim(), grid);
    }
    Ok(())
}

fn print_report(analysis: &Analysis, verbose: bool) {
    println!("{} syllables", analysis.syllables.len());
    for (i, (syl, w)) in analysis
        .syllables
        .iter()
        .zip(&analysis.weights)
        .enumerate()
    {
        println!("{:>4}  {:<8} {}", i + 1, syl.text(), w);
    }

    println!();
    for m in &analysis.patterns.vipula {
        if verbose || m.outcome != VipulaOutcome::NotApplicable {
            let desc = match m.outcome {
                VipulaOutcome::NotApplicable => "n/a".to_string(),
                VipulaOutcome::NoVipula => "none".to_string(),
                VipulaOutcome::Vipula(v) => format!("{}-vipulā", v),
            };
            println!("vipula     [{:>3}..{:<3}] {}", m.start, m.end, desc);
        }
    }
    for m in &analysis.patterns.pathya {
        if verbose || m.outcome != Finding::NotApplicable {
            println!("pathyā     [{:>3}..{:<3}] {}", m.start, m.end, m.outcome);
        }
    }
    for m in &analysis.patterns.yamaka {
        for (name, f) in m.outcome.named() {
            if verbose || f == Finding::Present {
                println!("yamaka     [{:>3}..{:<3}] {:<20} {}", m.start, m.end, name, f);
            }
        }
    }
    for m in &analysis.patterns.anuprasa {
        for (name, f) in m.outcome.named() {
            if verbose || f == Finding::Present {
                println!("anuprāsa   [{:>3}..{:<3}] {:<20} {}", m.start, m.end, name, f);
            }
        }
    }
}
