use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use liquigen::{ChangelogResolver, LiquigenConfig, MasterChangelogWriter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

#[derive(Parser)]
#[command(name = "liquigen")]
#[command(version, about = "master changelog generator for liquibase migration directories", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// path to the changelog directory (defaults to current directory)
    #[arg(short, long, global = true)]
    dir: Option<PathBuf>,

    /// explicit config file (default: liquigen.toml in the changelog directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// changelog flavor tag substituted into the output name and header
    #[arg(long, global = true)]
    changelog_format: Option<String>,

    /// liquibase version substituted into the header schema reference
    #[arg(long, global = true)]
    liquibase_version: Option<String>,

    /// pattern a filename must fully match to be picked up
    #[arg(long, global = true)]
    file_pattern: Option<String>,

    /// semicolon-delimited patterns defining the priority ordering
    #[arg(long, global = true)]
    custom_sort: Option<String>,

    /// semicolon-delimited filenames to drop from the master changelog
    #[arg(long, global = true)]
    ignore: Option<String>,

    /// semicolon-delimited filenames to force into the master changelog
    #[arg(long, global = true)]
    insert: Option<String>,

    /// output format (json or human)
    #[arg(short, long, default_value = "human", global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Debug)]
enum OutputFormat {
    Json,
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" => Ok(OutputFormat::Human),
            _ => Err(format!(
                "invalid output format: {}, use 'json' or 'human'",
                s
            )),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// resolve the changelog set and write the master changelog
    Generate,

    /// resolve the changelog set and show it without writing anything
    Preview,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = build_config(&cli)?;

    match cli.command {
        Commands::Generate => {
            handle_generate(&config, &cli.output)?;
        }
        Commands::Preview => {
            handle_preview(&config, &cli.output)?;
        }
    }

    Ok(())
}

// diagnostics go to stderr so json output on stdout stays parseable
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok();
}

/// merge the run configuration: flag > config file > default
fn build_config(cli: &Cli) -> Result<LiquigenConfig> {
    let search_dir = cli.dir.clone().unwrap_or_else(|| PathBuf::from("."));

    let mut config = match &cli.config {
        Some(path) => LiquigenConfig::load_from_file(path)
            .with_context(|| format!("failed to load config file {}", path.display()))?,
        None => LiquigenConfig::load_or_default(&search_dir),
    };

    if let Some(dir) = &cli.dir {
        config = config.changelog_dir(dir);
    }
    if let Some(format) = &cli.changelog_format {
        config = config.changelog_format(format);
    }
    if let Some(version) = &cli.liquibase_version {
        config = config.liquibase_version(version);
    }
    if let Some(pattern) = &cli.file_pattern {
        config = config.file_pattern(pattern);
    }
    if let Some(spec) = &cli.custom_sort {
        config = config.custom_sort(spec);
    }
    if let Some(list) = &cli.ignore {
        config = config.files_to_ignore(list);
    }
    if let Some(list) = &cli.insert {
        config = config.files_to_insert(list);
    }

    Ok(config)
}

fn handle_generate(config: &LiquigenConfig, output: &OutputFormat) -> Result<()> {
    let files = ChangelogResolver::resolve(config).context("failed to resolve changelog files")?;
    let path =
        MasterChangelogWriter::write(config, &files).context("failed to write master changelog")?;

    match output {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "master_changelog": path,
                "referenced_files": files.names(),
                "count": files.len(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            println!("master changelog: {}", path.display());
            println!("referenced files: {}", files.len());
            for name in files.names() {
                println!("  {}", name);
            }
        }
    }

    Ok(())
}

fn handle_preview(config: &LiquigenConfig, output: &OutputFormat) -> Result<()> {
    let files = ChangelogResolver::resolve(config).context("failed to resolve changelog files")?;
    let path = MasterChangelogWriter::master_changelog_path(config);

    match output {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "master_changelog": path,
                "referenced_files": files.names(),
                "count": files.len(),
                "written": false,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            println!("would write master changelog: {}", path.display());
            if files.is_empty() {
                println!("no changelog files resolved");
            } else {
                println!("files in include order:");
                for name in files.names() {
                    println!("  {}", name);
                }
            }
        }
    }

    Ok(())
}
