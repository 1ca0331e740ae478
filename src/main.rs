use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pro_scout::agents::backend::{create_backend, AiBackend};
use pro_scout::agents::card_scanner::{CardImage, CardScanInput, CardScannerAgent};
use pro_scout::agents::execute_with_retry;
use pro_scout::calculate::rating::{elite_bonus, weighted_average};
use pro_scout::calculate::{position_rating_for_code, ScoutReport};
use pro_scout::catalog::roles::ROLE_GROUPS;
use pro_scout::catalog::{Locale, RoleCatalog, WeightTable};
use pro_scout::config::AppConfig;
use pro_scout::models::{Intensity, PositionCode, RoleDefinition};
use pro_scout::profile::PlayerProfile;

/// Config file picked up from the working directory when `--config` is absent.
const DEFAULT_CONFIG_FILE: &str = "pro-scout.toml";

#[derive(Parser)]
#[command(name = "pro-scout")]
#[command(about = "EA FC player-card scouting: position ratings, body, potential and training plans")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    /// Label language (en, pt)
    #[arg(long, global = true)]
    locale: Option<Locale>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full scouting report for a profile
    Analyze {
        /// Profile JSON file
        profile: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rating breakdown at one position
    Rate {
        /// Profile JSON file
        profile: PathBuf,

        /// Position code (e.g. ST, CDM, or PT abbreviations like MCO)
        #[arg(long)]
        position: String,
    },

    /// Read player cards from screenshots with the AI backend
    Scan {
        /// Image files or glob patterns
        #[arg(required = true)]
        images: Vec<String>,

        /// Where to write the profile (defaults to the profiles directory)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Existing profile to merge the scan into
        #[arg(long)]
        merge: Option<PathBuf>,
    },

    /// List tactical roles and their training focus
    Roles {
        /// Only roles for this position
        #[arg(long)]
        position: Option<String>,
    },

    /// Write an empty profile to fill in by hand
    Init {
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().or_else(|| {
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        local.exists().then_some(local)
    });
    let config = AppConfig::load(config_path.as_deref()).context("Failed to load configuration")?;

    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    init_tracing(log_level, cli.json_logs);

    tracing::info!("Starting pro-scout v{}", env!("CARGO_PKG_VERSION"));

    let locale = cli.locale.unwrap_or(config.locale);

    match cli.command {
        Commands::Analyze { profile, json } => {
            let profile = load_profile(&profile)?;
            let report = ScoutReport::build(&profile.attributes, &profile.player_info, locale);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }

        Commands::Rate { profile, position } => {
            let profile = load_profile(&profile)?;
            let attributes = &profile.attributes;
            let info = &profile.player_info;

            let breakdown = position_rating_for_code(attributes, &position, Some(info));

            let entry = position
                .parse::<PositionCode>()
                .ok()
                .and_then(|p| WeightTable::standard().get(p));
            let Some(entry) = entry else {
                tracing::warn!("Unknown position '{}', rated as zero", position);
                println!("{}: {}", position, breakdown.total);
                return Ok(());
            };

            let bonus = elite_bonus(attributes, entry, info);

            println!("\n=== {} at {} ===", display_name(&info.name), locale.position_label(entry.position));
            println!("Weighted average: {:.2}", weighted_average(attributes, entry));
            println!("Base rating:      {}", breakdown.base);
            println!("Role mastery:     +{:.1}", bonus.role_mastery);
            println!("Elite attributes: +{:.1}", bonus.elite_attributes);
            println!("Stars/PlayStyles: +{:.1}", bonus.legacy);
            println!("Bonus (rounded):  +{}", breakdown.bonus);
            println!("Total:            {}", breakdown.total);

            println!("\nWeights:");
            for (key, weight) in entry.weights {
                println!(
                    "  {:<22} {:>3}  x {:.2}",
                    locale.attribute_label(*key),
                    attributes.get(*key),
                    weight
                );
            }
        }

        Commands::Scan {
            images,
            output,
            merge,
        } => {
            let paths = expand_image_paths(&images)?;
            let images = paths
                .iter()
                .map(|p| CardImage::from_path(p))
                .collect::<Result<Vec<_>, _>>()?;

            let backend_config = config.ai.backend_config()?;
            let backend: Arc<dyn AiBackend> = Arc::from(create_backend(&backend_config)?);

            if !backend.health_check().await.unwrap_or(false) {
                tracing::warn!("{} backend did not answer the health check", backend.name());
            }

            let agent = CardScannerAgent::new(backend).with_max_retries(config.ai.max_retries);
            let output_scan = execute_with_retry(&agent, CardScanInput { images }).await?;

            println!(
                "Read {} attributes for {} ({} confidence)",
                output_scan.data.attributes.len(),
                display_name(&output_scan.data.info.name),
                output_scan.confidence
            );
            for note in &output_scan.extraction_notes {
                println!("  note: {}", note);
            }
            if output_scan.confidence.needs_review() {
                tracing::warn!("Scan needs review before use");
            }

            let mut profile = match merge {
                Some(path) => {
                    let mut profile = load_profile(&path)?;
                    profile.apply_scan(&output_scan.data);
                    profile
                }
                None => PlayerProfile::from_scan(&output_scan.data),
            };

            let written = match output {
                Some(path) => {
                    profile.save(&path)?;
                    path
                }
                None => profile.export_to(&config.profiles_dir)?,
            };
            println!("Profile written to {}", written.display());
        }

        Commands::Roles { position } => {
            let catalog = RoleCatalog::standard();

            match position {
                Some(code) => {
                    let position: PositionCode = code.parse()?;
                    let Some(roles) = catalog.roles_for(position) else {
                        bail!("No roles defined for {}", position);
                    };
                    println!("\n=== {} ===", locale.position_label(position));
                    for role in roles {
                        print_role(role, locale);
                    }
                }
                None => {
                    for (group, roles) in ROLE_GROUPS.iter() {
                        println!("\n=== {} ===", group);
                        for role in roles.iter() {
                            print_role(role, locale);
                        }
                    }
                }
            }
        }

        Commands::Init { path, force } => {
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            PlayerProfile::template().save(&path)?;
            println!("Template profile written to {}", path.display());
        }
    }

    Ok(())
}

fn init_tracing(level: &str, json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries reports
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn load_profile(path: &Path) -> Result<PlayerProfile> {
    PlayerProfile::load(path).with_context(|| format!("Failed to load profile {}", path.display()))
}

/// Expand glob patterns; plain paths pass through untouched.
fn expand_image_paths(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for pattern in patterns {
        if pattern.contains(['*', '?', '[']) {
            let before = paths.len();
            for entry in glob::glob(pattern)? {
                paths.push(entry?);
            }
            if paths.len() == before {
                tracing::warn!("Pattern '{}' matched no files", pattern);
            }
        } else {
            paths.push(PathBuf::from(pattern));
        }
    }

    if paths.is_empty() {
        bail!("No images to scan");
    }
    Ok(paths)
}

fn display_name(name: &str) -> &str {
    if name.trim().is_empty() {
        "Unknown player"
    } else {
        name
    }
}

fn print_report(report: &ScoutReport) {
    let locale = report.locale;

    println!("\n=== {} ===", display_name(&report.name));
    if let Some(best) = report.best_position {
        println!(
            "Best position: {} ({}, {:?})",
            locale.position_label(best),
            report.best_rating,
            report.rating_band
        );
    }

    println!("\nFace stats:");
    for stat in &report.face_stats {
        println!("  {:<4} {:>3}  {:?}", stat.stat.abbreviation(), stat.value, stat.band);
    }

    println!("\nAll positions:");
    for result in &report.ranking {
        println!(
            "  {:<4} {:>3}  (base {:>2} +{}){}",
            locale.position_label(result.position),
            result.rating,
            result.base_rating,
            result.bonus,
            if result.is_best { "  *" } else { "" }
        );
    }

    match &report.bmi {
        Some(bmi) => {
            println!("\nBMI: {:.2} ({})", bmi.value, bmi.category);
            println!("Height: {:.0} cm, {}", bmi.height_cm, bmi.height_analysis);
        }
        None => println!("\nBMI: height/weight not readable"),
    }

    if let Some(potential) = &report.potential {
        println!(
            "\nPotential: {:.1} ({}), {}",
            potential.average, potential.label, potential.recommendation
        );
    }

    if !report.development.is_empty() {
        println!("\nDevelopment plan:");
        for plan in &report.development {
            println!(
                "\n  {} - {} [{}]",
                locale.position_label(plan.position),
                plan.role.name,
                plan.role.focus
            );
            println!("  Train: {}", plan.attribute_names.join(", "));
            for row in plan.training_grid().rows() {
                let cells: String = row
                    .iter()
                    .map(|cell| match cell {
                        Intensity::High => '#',
                        Intensity::Medium => '+',
                        Intensity::None => '.',
                    })
                    .collect();
                println!("    {}", cells);
            }
        }
    }
}

fn print_role(role: &RoleDefinition, locale: Locale) {
    let name = match role.focus_label {
        Some(focus) => format!("{} ({})", role.name, focus),
        None => role.name.to_string(),
    };
    println!(
        "  {}{} [{}]",
        name,
        if role.recommended { " *" } else { "" },
        role.focus
    );
    if let Some(description) = role.description {
        println!("    {}", description);
    }
    let attributes: Vec<_> = role
        .attributes
        .iter()
        .map(|key| locale.attribute_label(*key))
        .collect();
    println!("    {}", attributes.join(", "));
}
