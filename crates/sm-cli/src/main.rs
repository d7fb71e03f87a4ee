//! SlotMath Studio command line
//!
//! Usage:
//!   slotmath evaluate game.json          - Compute theoretical RTP vs target
//!   slotmath coverage game.json          - Report missing payout entries
//!   slotmath init game.json              - Write a starter configuration

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use sm_model::WinModel;
use sm_rtp::{bonus_rtp_percent, evaluate, payout_coverage};
use sm_state::ConfigDocument;

#[derive(Parser)]
#[command(name = "slotmath", about = "Slot game math configuration and RTP tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute theoretical RTP and compare against the target
    Evaluate {
        /// Configuration document path
        config: PathBuf,
        /// Override the document's credits per bet
        #[arg(long)]
        credits_per_bet: Option<f64>,
        /// Override the document's target RTP percentage
        #[arg(long)]
        target_rtp: Option<f64>,
        /// Emit machine-readable JSON instead of a report
        #[arg(long)]
        json: bool,
    },
    /// Report payout entries missing for the active win model
    Coverage {
        /// Configuration document path
        config: PathBuf,
    },
    /// Write a starter configuration document
    Init {
        /// Destination path
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate {
            config,
            credits_per_bet,
            target_rtp,
            json,
        } => cmd_evaluate(&config, credits_per_bet, target_rtp, json),
        Commands::Coverage { config } => cmd_coverage(&config),
        Commands::Init { path, force } => cmd_init(&path, force),
    }
}

fn load_document(path: &Path) -> Result<ConfigDocument> {
    let doc = ConfigDocument::load(path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    doc.validate()
        .with_context(|| format!("configuration in {} is invalid", path.display()))?;
    Ok(doc)
}

fn cmd_evaluate(
    path: &Path,
    credits_override: Option<f64>,
    target_override: Option<f64>,
    json: bool,
) -> Result<()> {
    let doc = load_document(path)?;
    let credits_per_bet = credits_override.unwrap_or(doc.bet.credits_per_bet);
    let target_rtp = target_override.unwrap_or(doc.bet.target_rtp_percent);

    let result = evaluate(
        &doc.symbols.symbols,
        &doc.reel_set,
        &doc.win_model,
        credits_per_bet,
        target_rtp,
    )?;

    // Misconfigured bonuses are surfaced but never block the base figure
    let mut bonus_lines = Vec::new();
    let mut total_rtp = result.theoretical_rtp_percent;
    for feature in &doc.bonuses {
        match bonus_rtp_percent(feature) {
            Ok(contribution) => {
                total_rtp += contribution;
                bonus_lines.push((feature.name.clone(), contribution));
            }
            Err(err) => log::warn!("skipping bonus contribution: {err}"),
        }
    }

    if json {
        let output = serde_json::json!({
            "base": result,
            "bonuses": bonus_lines
                .iter()
                .map(|(name, rtp)| serde_json::json!({ "name": name, "rtpPercent": rtp }))
                .collect::<Vec<_>>(),
            "totalRTP": total_rtp,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Theoretical RTP: {}", doc.name);
    println!("  Win model:        {}", describe_win_model(&doc.win_model));
    println!("  Credits per bet:  {credits_per_bet}");
    println!();
    if result.symbols.is_empty() {
        println!("  (no symbols defined)");
    } else {
        println!("  {:<16} {:>14} {:>10}", "Symbol", "Expected", "RTP");
        for contribution in &result.symbols {
            println!(
                "  {:<16} {:>14.6} {:>9.4}%",
                contribution.name, contribution.expected_payout, contribution.rtp_percent
            );
        }
    }
    println!();
    println!(
        "  Base game RTP:    {:.2}%",
        result.theoretical_rtp_percent
    );
    for (name, contribution) in &bonus_lines {
        println!("  Bonus '{name}':   +{contribution:.2}%");
    }
    if !bonus_lines.is_empty() {
        println!("  Total RTP:        {total_rtp:.2}%");
    }
    println!("  Target RTP:       {:.2}%", result.target_rtp_percent);
    println!("  Difference:       {:.2}%", result.difference_percent);

    Ok(())
}

fn cmd_coverage(path: &Path) -> Result<()> {
    let doc = load_document(path)?;
    let gaps = payout_coverage(
        &doc.symbols.symbols,
        &doc.win_model,
        doc.reel_set.reel_count() as u32,
    );

    println!("Payout coverage: {}", doc.name);
    println!("  Win model: {}", describe_win_model(&doc.win_model));
    if gaps.is_empty() {
        println!("  All symbols cover the model's match sizes.");
    } else {
        for gap in &gaps {
            let sizes: Vec<String> = gap.missing_sizes.iter().map(u32::to_string).collect();
            println!(
                "  {:<16} missing sizes: {}",
                gap.name,
                sizes.join(", ")
            );
        }
    }
    Ok(())
}

fn cmd_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    let doc = ConfigDocument::classic();
    doc.save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Wrote starter configuration to {}", path.display());
    Ok(())
}

fn describe_win_model(win_model: &WinModel) -> String {
    match win_model {
        WinModel::Standard { paylines, .. } => {
            format!("standard ({} paylines)", paylines.len())
        }
        WinModel::Ways => "ways".into(),
        WinModel::Clusters {
            min_cluster_size,
            max_cluster_size,
        } => format!("clusters ({min_cluster_size}-{max_cluster_size})"),
    }
}
