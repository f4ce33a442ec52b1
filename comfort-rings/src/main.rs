//! comfort-rings - Food Personality & Comfort Rings CLI
//!
//! Place every catalog food into one of three comfort rings for a taste
//! profile and report the resulting food personality.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfort_rings_core::catalog::{food_metadata, list_foods, validate_registry, FOOD_REGISTRY};
use comfort_rings_core::config::OutputFormat;
use comfort_rings_core::format::{format_distance, format_percent};
use comfort_rings_core::rings::{explain_food_distance, explain_ring_assignment};
use comfort_rings_core::{
    assign_to_rings, AssignRequest, AssignResponse, Catalog, Config, Dimension, Level, Ring,
    RingAssignment,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "comfort-rings")]
#[command(about = "Food Personality & Comfort Rings")]
#[command(version)]
struct Args {
    /// Verbose output (writes a log file)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Assign every food to a comfort ring
    Assign {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Export format (md = markdown, json = JSON)
        #[arg(long)]
        export: Option<OutputFormat>,
    },

    /// Explain how a single food was placed
    Explain {
        /// Food id, e.g. "Sushi"
        food: String,

        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// List the food ids in the catalog
    Foods,

    /// Show the registry entry for a food as JSON
    Food {
        /// Food id
        id: String,
    },

    /// Validate the built-in food registry
    Validate,
}

#[derive(clap::Args)]
struct ProfileArgs {
    /// Spice intensity (low/mid/high or 0.2/0.5/0.8)
    #[arg(long, value_parser = parse_dimension)]
    spice: Option<f64>,

    /// Texture intensity (low/mid/high or 0.2/0.5/0.8)
    #[arg(long, value_parser = parse_dimension)]
    texture: Option<f64>,

    /// Preparation familiarity (low/mid/high or 0.2/0.5/0.8)
    #[arg(long, value_parser = parse_dimension)]
    prep: Option<f64>,

    /// Richness (low/mid/high or 0.2/0.5/0.8)
    #[arg(long, value_parser = parse_dimension)]
    richness: Option<f64>,

    /// Psychological distance (low/mid/high or 0.2/0.5/0.8)
    #[arg(long, value_parser = parse_dimension)]
    psych: Option<f64>,

    /// Disliked food id (repeatable)
    #[arg(long = "dislike")]
    dislikes: Vec<String>,

    /// Behavioral archetype (repeatable)
    #[arg(long = "archetype")]
    archetypes: Vec<String>,

    /// Read a JSON request instead of the flags above
    #[arg(long, conflicts_with_all = ["spice", "texture", "prep", "richness", "psych"])]
    request: Option<PathBuf>,
}

/// Accepts level names as well as raw numbers; numbers are range-checked by
/// the engine so the error names the offending dimension.
fn parse_dimension(s: &str) -> std::result::Result<f64, String> {
    match s.parse::<Level>() {
        Ok(level) => Ok(level.value()),
        Err(level_err) => s.trim().parse::<f64>().map_err(|_| level_err),
    }
}

impl ProfileArgs {
    fn to_request(&self) -> Result<AssignRequest> {
        if let Some(path) = &self.request {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read request file {}", path.display()))?;
            let mut request =
                AssignRequest::from_json(&json).context("failed to parse request JSON")?;
            if !self.dislikes.is_empty() {
                request.dislikes = Some(self.dislikes.clone());
            }
            if !self.archetypes.is_empty() {
                request.archetypes = Some(self.archetypes.clone());
            }
            return Ok(request);
        }

        let (Some(spice), Some(texture), Some(prep), Some(richness), Some(psych)) =
            (self.spice, self.texture, self.prep, self.richness, self.psych)
        else {
            anyhow::bail!(
                "provide --spice, --texture, --prep, --richness and --psych, or --request FILE"
            );
        };

        Ok(AssignRequest {
            spice_intensity: spice,
            texture_intensity: texture,
            preparation_familiarity: prep,
            richness,
            psychological_distance: psych,
            dislikes: (!self.dislikes.is_empty()).then(|| self.dislikes.clone()),
            archetypes: (!self.archetypes.is_empty()).then(|| self.archetypes.clone()),
        })
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = Config::load().context("failed to load configuration")?;

    // Keep the guard alive until exit so buffered log lines are flushed
    let _log_guard = if args.verbose {
        Some(
            comfort_rings_core::logging::init(&config.logging)
                .context("failed to initialize logging")?,
        )
    } else {
        None
    };

    match args.command {
        Command::Assign { profile, export } => cmd_assign(&config, &profile, export),
        Command::Explain { food, profile } => cmd_explain(&config, &food, &profile),
        Command::Foods => cmd_foods(),
        Command::Food { id } => cmd_food(&id),
        Command::Validate => cmd_validate(),
    }
}

/// Fill dislikes and archetypes from `[profile]` when the request names none.
fn apply_profile_defaults(request: &mut AssignRequest, config: &Config) {
    if request.dislikes.as_ref().map_or(true, Vec::is_empty) && !config.profile.dislikes.is_empty()
    {
        request.dislikes = Some(config.profile.dislikes.clone());
    }
    if request.archetypes.as_ref().map_or(true, Vec::is_empty)
        && !config.profile.archetypes.is_empty()
    {
        request.archetypes = Some(config.profile.archetypes.clone());
    }
}

fn build_assignment(
    config: &Config,
    catalog: &Catalog,
    profile: &ProfileArgs,
) -> Result<RingAssignment> {
    let mut request = profile.to_request()?;
    apply_profile_defaults(&mut request, config);

    let validated = request.validate(catalog)?;
    tracing::info!(
        dislikes = validated.dislikes.len(),
        archetypes = ?validated.archetypes,
        "assigning rings"
    );

    let assignment = assign_to_rings(
        catalog,
        &validated.user_vector,
        &validated.dislikes,
        &validated.archetypes,
    )?;
    Ok(assignment)
}

fn cmd_assign(config: &Config, profile: &ProfileArgs, export: Option<OutputFormat>) -> Result<()> {
    let catalog = Catalog::builtin();
    let assignment = build_assignment(config, &catalog, profile)?;

    match export.unwrap_or(config.output.format) {
        OutputFormat::Terminal => print_terminal(&assignment, config.output.show_contributions),
        OutputFormat::Md => print_markdown(&assignment),
        OutputFormat::Json => print_json(&assignment)?,
    }

    Ok(())
}

fn cmd_explain(config: &Config, food: &str, profile: &ProfileArgs) -> Result<()> {
    let catalog = Catalog::builtin();
    let assignment = build_assignment(config, &catalog, profile)?;
    println!("{}", explain_food_distance(food, &assignment, &catalog)?);
    Ok(())
}

fn cmd_foods() -> Result<()> {
    for profile in FOOD_REGISTRY {
        println!("{:<25} {}", profile.food_id, profile.origin);
    }
    Ok(())
}

fn cmd_food(id: &str) -> Result<()> {
    let profile = food_metadata(id)?;
    let json = serde_json::to_string_pretty(profile).context("failed to serialize food")?;
    println!("{}", json);
    Ok(())
}

fn cmd_validate() -> Result<()> {
    validate_registry().context("food registry is invalid")?;
    Catalog::builtin()
        .validate()
        .context("catalog is invalid")?;
    println!("Registry OK: {} foods", list_foods().len());
    Ok(())
}

fn print_terminal(assignment: &RingAssignment, show_contributions: bool) {
    println!("{}", explain_ring_assignment(assignment));

    if show_contributions {
        println!("DIMENSION CONTRIBUTIONS:");
        for fd in assignment.all_foods() {
            let parts: Vec<String> = fd
                .contributions
                .iter()
                .map(|(key, value)| format!("{}={:.4}", key, value))
                .collect();
            println!("  {:<30} {}", fd.food_name, parts.join(" "));
        }
        println!();
    }
}

fn print_markdown(assignment: &RingAssignment) {
    let p = &assignment.personality;

    println!("# Comfort Rings");
    println!();

    println!("## Food Personality");
    println!();
    println!("| | Personality | Confidence |");
    println!("|--|-------------|------------|");
    println!(
        "| Primary | {} | {} |",
        p.primary,
        format_percent(p.primary_confidence)
    );
    println!(
        "| Secondary | {} | {} |",
        p.secondary,
        format_percent(p.secondary_confidence)
    );
    println!();
    println!("> {}", p.explanation);
    println!();

    println!("## Taste Vector");
    println!();
    println!("| Dimension | Value |");
    println!("|-----------|-------|");
    for dimension in Dimension::ALL {
        println!(
            "| {} | {} |",
            dimension.label(),
            assignment.user_vector.get(dimension)
        );
    }
    println!();
    println!(
        "Thresholds: ring 0 up to {}, ring 1 up to {}",
        format_distance(assignment.ring_thresholds.inner()),
        format_distance(assignment.ring_thresholds.outer())
    );
    println!();

    for ring in Ring::ALL {
        println!("## Ring {}: {}", ring.index(), ring.label());
        println!();

        let foods = assignment.ring(ring);
        if foods.is_empty() {
            println!("*No foods in this ring.*");
            println!();
            continue;
        }

        println!("| Food | Distance |");
        println!("|------|----------|");
        for fd in foods {
            let name = food_metadata(&fd.food_name)
                .ok()
                .map_or(fd.food_name.as_str(), |m| m.display_name);
            println!("| {} | {} |", name, format_distance(fd.distance));
        }
        println!();
    }
}

fn print_json(assignment: &RingAssignment) -> Result<()> {
    let response = AssignResponse::from(assignment);
    let json = serde_json::to_string_pretty(&response).context("failed to serialize response")?;
    println!("{}", json);
    Ok(())
}
