use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use crate::filters::{
    AdvancedSearchForm, count_matches, filter_clips, par_filter_clips, parse_query,
};
use crate::models::{BrandType, Clip, LiveType};
use crate::parsers::load_catalog;
use crate::utils::time::{format_date, format_duration_ms, parse_calendar_date};
use crate::utils::{format_path_with_tilde, resolve_settings};

/// Catalog size above which filtering runs in parallel
const PARALLEL_THRESHOLD: usize = 10_000;

#[derive(Parser)]
#[command(name = "imas-clip-search")]
#[command(version = "0.1.0")]
#[command(about = "Search a clip catalog with the clip-manager query language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a query against a catalog file
    Search {
        /// Query string, e.g. `?song:Shine -?performers:春香`
        #[arg(allow_hyphen_values = true)]
        query: String,
        /// Catalog file (JSON array or JSONL)
        #[arg(long)]
        catalog: PathBuf,
        /// Search settings file controlling unkeyed terms
        #[arg(long)]
        settings: Option<PathBuf>,
        /// Print only the number of matches
        #[arg(long, conflicts_with = "json")]
        count: bool,
        /// Print matches as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Build a query string from structured filters
    Build(BuildArgs),
    /// Show statistics about a catalog
    Stats {
        #[arg(long)]
        catalog: PathBuf,
    },
}

#[derive(Args, Default)]
pub struct BuildArgs {
    #[arg(long, default_value = "")]
    path: String,
    #[arg(long, default_value = "")]
    clip: String,
    #[arg(long, default_value = "")]
    song: String,
    #[arg(long, default_value = "")]
    concert: String,
    #[arg(long, default_value = "")]
    lyrics: String,
    #[arg(long, default_value = "")]
    remarks: String,
    /// Minimum duration (`mm:ss` or `hh:mm:ss`)
    #[arg(long, default_value = "")]
    min_duration: String,
    /// Maximum duration (`mm:ss` or `hh:mm:ss`)
    #[arg(long, default_value = "")]
    max_duration: String,
    #[arg(long, value_parser = parse_date_arg)]
    date_from: Option<NaiveDate>,
    #[arg(long, value_parser = parse_date_arg)]
    date_to: Option<NaiveDate>,
    #[arg(long, value_parser = parse_date_arg)]
    created_from: Option<NaiveDate>,
    #[arg(long, value_parser = parse_date_arg)]
    created_to: Option<NaiveDate>,
    #[arg(long, value_parser = parse_date_arg)]
    updated_from: Option<NaiveDate>,
    #[arg(long, value_parser = parse_date_arg)]
    updated_to: Option<NaiveDate>,
    /// Brand label or flag name, repeatable
    #[arg(long = "brand", value_parser = parse_brand_arg)]
    brands: Vec<BrandType>,
    /// Live type label or variant name, repeatable
    #[arg(long = "type", value_parser = parse_live_type_arg)]
    live_types: Vec<LiveType>,
    /// Performer name, repeatable
    #[arg(long = "performer")]
    performers: Vec<String>,
}

impl From<BuildArgs> for AdvancedSearchForm {
    fn from(args: BuildArgs) -> Self {
        AdvancedSearchForm {
            path: args.path,
            clip_name: args.clip,
            song_title: args.song,
            concert_name: args.concert,
            lyrics: args.lyrics,
            remarks: args.remarks,
            min_duration: args.min_duration,
            max_duration: args.max_duration,
            concert_date_from: args.date_from,
            concert_date_to: args.date_to,
            created_from: args.created_from,
            created_to: args.created_to,
            updated_from: args.updated_from,
            updated_to: args.updated_to,
            brands: args.brands.into_iter().fold(BrandType::empty(), |acc, b| acc | b),
            live_types: args.live_types,
            performers: args.performers,
        }
    }
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_calendar_date(s).ok_or_else(|| format!("invalid date '{}', expected yyyy/MM/dd", s))
}

fn parse_brand_arg(s: &str) -> Result<BrandType, String> {
    BrandType::from_display(s)
        .or_else(|| BrandType::from_name(&s.to_ascii_uppercase()))
        .ok_or_else(|| format!("unknown brand '{}'", s))
}

fn parse_live_type_arg(s: &str) -> Result<LiveType, String> {
    LiveType::from_display(s)
        .or_else(|| {
            LiveType::ALL.into_iter().find(|t| format!("{:?}", t).eq_ignore_ascii_case(s))
        })
        .ok_or_else(|| format!("unknown live type '{}'", s))
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Search { query, catalog, settings, count, json }) => {
            search(&query, &catalog, settings.as_deref(), count, json)?;
        }
        Some(Commands::Build(args)) => {
            build(args);
        }
        Some(Commands::Stats { catalog }) => {
            show_stats(&catalog)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn search(
    query: &str,
    catalog: &Path,
    settings: Option<&Path>,
    count: bool,
    json: bool,
) -> Result<()> {
    let settings = resolve_settings(settings)?;
    let clips = load_catalog(catalog)?;
    let predicate = parse_query(query, settings.as_ref());
    debug!(?predicate, "compiled query");

    if count {
        println!("{}", count_matches(&clips, &predicate));
        return Ok(());
    }

    let matches = if clips.len() >= PARALLEL_THRESHOLD {
        par_filter_clips(&clips, &predicate)
    } else {
        filter_clips(&clips, &predicate)
    };

    if json {
        let out = serde_json::to_string_pretty(&matches).context("Failed to serialize matches")?;
        println!("{}", out);
    } else {
        for clip in matches {
            println!("{}", format_clip_line(clip));
        }
    }

    Ok(())
}

/// `id  label  duration  brands`, tab separated
fn format_clip_line(clip: &Clip) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        clip.id,
        clip.label(),
        format_duration_ms(clip.duration_ms),
        clip.brands.display_string()
    )
}

fn build(args: BuildArgs) {
    let built = AdvancedSearchForm::from(args).build();
    for (key, error) in built.errors.iter() {
        eprintln!("Warning: ?{} omitted: {}", key.keyword(), error);
    }
    println!("{}", built.query);
}

/// Sum of clip durations, saturating instead of overflowing
fn total_duration_ms(clips: &[Clip]) -> u64 {
    clips.iter().map(|c| c.duration_ms).fold(0u64, u64::saturating_add)
}

fn show_stats(catalog: &Path) -> Result<()> {
    let clips = load_catalog(catalog)?;
    let total_ms = total_duration_ms(&clips);

    println!("Clip Catalog Statistics");
    println!("=======================");
    println!("Catalog: {}", format_path_with_tilde(catalog));
    println!("Total clips: {}", clips.len());
    println!("Total duration: {}", format_duration_ms(total_ms));
    println!();

    println!("By live type:");
    for live_type in LiveType::ALL {
        let n = clips.iter().filter(|c| c.live_type == live_type).count();
        println!("  {}: {}", live_type, n);
    }

    println!("By brand:");
    for (flag, label) in BrandType::labeled() {
        let n = clips.iter().filter(|c| c.brands.contains(flag)).count();
        if n > 0 {
            println!("  {}: {}", label, n);
        }
    }

    let dates = clips.iter().filter_map(|c| c.concert_date.map(|d| d.date()));
    if let Some((oldest, newest)) = dates.fold(None, |acc: Option<(NaiveDate, NaiveDate)>, d| {
        Some(acc.map_or((d, d), |(lo, hi)| (lo.min(d), hi.max(d))))
    }) {
        println!();
        println!("Oldest concert: {}", format_date(oldest));
        println!("Newest concert: {}", format_date(newest));
    }

    Ok(())
}
