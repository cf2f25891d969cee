//! Snapshot Parser - Parses saved tracker.gg profile pages
//!
//! Runs the profile parser over HTML files on disk, for checking selector
//! changes without requesting the live site.
//!
//! Usage:
//!     parse_snapshot --username "PAIN#1VCT" saved/pain.html
//!     parse_snapshot --schema selectors.yaml saved/*.html

use anyhow::{Context, Result};
use clap::Parser;
use dotenvy::dotenv;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracker_profiles::render::render_profiles;
use tracker_profiles::{
    init_logging, parse_namespace, OutputFormat, PageSchema, ProfileParser,
    DEFAULT_UID_NAMESPACE,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Parse saved tracker.gg profile pages", long_about = None)]
struct Args {
    /// HTML files to parse
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Username recorded on every parsed profile (defaults to the file stem)
    #[arg(short, long)]
    username: Option<String>,

    /// UUID namespace used to derive profile UIDs
    #[arg(long, env = "TRACKER_UID_NAMESPACE", default_value = DEFAULT_UID_NAMESPACE)]
    namespace: String,

    /// YAML file overriding page selectors
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Verbose output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn username_for(path: &Path, explicit: Option<&str>) -> String {
    match explicit {
        Some(name) => name.to_string(),
        None => path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default(),
    }
}

fn main() -> Result<()> {
    dotenv().ok();

    let args = Args::parse();
    init_logging(args.verbose)?;

    let schema = match &args.schema {
        Some(path) => PageSchema::from_yaml_file(path)
            .with_context(|| format!("Failed to load page schema from {:?}", path))?,
        None => PageSchema::default(),
    };
    let parser = ProfileParser::new(&schema).context("Invalid page schema")?;
    let namespace = parse_namespace(&args.namespace)?;

    let mut profiles = Vec::new();
    let mut failures = 0;
    for path in &args.paths {
        let html = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {:?}", path))?;
        let username = username_for(path, args.username.as_deref());

        match parser.parse(&html, &username, &namespace) {
            Ok(profile) => {
                info!("Parsed {:?} as {}", path, username);
                profiles.push(profile);
            }
            Err(e) => {
                error!("{:?}: {}", path, e);
                failures += 1;
            }
        }
    }

    print!("{}", render_profiles(&profiles, args.format)?);

    if failures > 0 {
        anyhow::bail!("{} of {} snapshots failed to parse", failures, args.paths.len());
    }
    Ok(())
}
