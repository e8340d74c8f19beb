//! CLI command definitions, routing, and tracing setup.

use std::time::Instant;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use growthloop_shared::{AppConfig, RunId, init_config, load_config};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// growthloop — simulated content-marketing pipeline stages.
#[derive(Parser)]
#[command(
    name = "growthloop",
    version,
    about = "Run simulated content-marketing pipeline stages over sample data.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Discover long-tail keyword patterns for a head-term query.
    Discover {
        /// Head term to expand (defaults to the configured head_term).
        query: Option<String>,
    },

    /// Generate and publish an article for the next pending keyword pattern.
    Generate,

    /// Collect user-generated content mentioning the campaign hashtag.
    Collect {
        /// Campaign hashtag (defaults to the configured campaign_hashtag).
        #[arg(long)]
        hashtag: Option<String>,
    },

    /// Review pending UGC submissions for brand safety and virality.
    Curate,

    /// Re-publish the best curated submission as a community spotlight.
    Spotlight,

    /// Re-prioritize keyword patterns from the analytics funnel.
    Optimize,

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "growthloop=info",
        1 => "growthloop=debug",
        _ => "growthloop=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Discover { query } => cmd_discover(query.as_deref()).await,
        Command::Generate => cmd_generate().await,
        Command::Collect { hashtag } => cmd_collect(hashtag.as_deref()).await,
        Command::Curate => cmd_curate().await,
        Command::Spotlight => cmd_spotlight().await,
        Command::Optimize => cmd_optimize().await,
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init().await,
            ConfigAction::Show => cmd_config_show().await,
        },
    }
}

// ---------------------------------------------------------------------------
// Stage spinner
// ---------------------------------------------------------------------------

/// Spinner shown while a multi-step stage runs.
struct StageSpinner {
    spinner: ProgressBar,
}

impl StageSpinner {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }

    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

async fn cmd_discover(query: Option<&str>) -> Result<()> {
    let config = load_config()?;
    let query = query.unwrap_or(&config.defaults.head_term);
    let run_id = RunId::new();
    let start = Instant::now();

    info!(%run_id, query, "running keyword discovery stage");

    println!("Simulating keyword discovery for query: {query}");
    let patterns = growthloop_discovery::discover_keywords(query)?;

    println!("Simulating population of the keyword patterns store:");
    for pattern in &patterns {
        println!("  Adding: {}", serde_json::to_string(pattern)?);
    }

    println!();
    println!("  Keyword patterns discovered!");
    println!("  Run:      {run_id}");
    println!("  Query:    {query}");
    println!("  Patterns: {}", patterns.len());
    println!("  Time:     {:.1}s", start.elapsed().as_secs_f64());
    println!();

    Ok(())
}

async fn cmd_generate() -> Result<()> {
    let config = load_config()?;
    let base_url = config.article_base_url()?;
    let run_id = RunId::new();
    let start = Instant::now();

    info!(%run_id, "running article generation stage");

    let spinner = StageSpinner::new();

    spinner.phase("Fetching pending keyword pattern");
    println!("Simulating retrieval of a keyword pattern from the store.");
    let pattern = growthloop_content::fetch_pending_pattern();

    spinner.phase("Generating article");
    println!("Simulating article generation for pattern: {}", pattern.pattern);
    let article = growthloop_content::generate_article(&pattern, &config.llm.model)?;

    spinner.phase("Publishing article");
    println!("Simulating publishing article for pattern: {}", pattern.pattern);
    let published = growthloop_content::publish_article(&article, &pattern, &base_url)?;
    spinner.finish();

    if let Some(id) = published.pattern.id {
        println!(
            "Simulating store update for keyword ID {id} to 'Published' with URL: {}",
            published.url
        );
    }

    println!();
    println!("  Article published!");
    println!("  Run:     {run_id}");
    println!("  Pattern: {}", pattern.pattern);
    println!("  Model:   {} (simulated)", config.llm.model);
    println!("  URL:     {}", published.url);
    println!("  Time:    {:.1}s", start.elapsed().as_secs_f64());
    println!();

    Ok(())
}

async fn cmd_collect(hashtag: Option<&str>) -> Result<()> {
    let config = load_config()?;
    let hashtag = hashtag.unwrap_or(&config.defaults.campaign_hashtag);
    let run_id = RunId::new();
    let start = Instant::now();

    info!(%run_id, hashtag, "running UGC collection stage");

    println!("Simulating UGC collection for hashtag: {hashtag}");
    let posts = growthloop_ugc::collect_ugc(hashtag)?;

    println!("Simulating saving UGC submissions:");
    for post in &posts {
        println!("  Saving: {}", serde_json::to_string(post)?);
    }

    println!();
    println!("  UGC collected!");
    println!("  Run:         {run_id}");
    println!("  Hashtag:     {hashtag}");
    println!("  Submissions: {}", posts.len());
    println!("  Time:        {:.1}s", start.elapsed().as_secs_f64());
    println!();

    Ok(())
}

async fn cmd_curate() -> Result<()> {
    let run_id = RunId::new();
    let start = Instant::now();

    info!(%run_id, "running UGC curation stage");

    println!("Simulating UGC curation process.");
    let pending = growthloop_ugc::fetch_pending_submissions();

    let spinner = StageSpinner::new();
    spinner.phase(&format!("Reviewing {} pending submissions", pending.len()));
    let (processed, report) = growthloop_ugc::curate_submissions(pending);
    spinner.finish();

    for submission in &processed {
        if let Some(id) = submission.id {
            println!("  Processing submission ID: {id}");
        }
        println!(
            "    Assigned Virality Score: {}, New Status: {}",
            submission.virality_score.unwrap_or(0),
            submission.status
        );
    }
    println!("Simulating store update for {} submissions.", report.reviewed);

    println!();
    println!("  UGC curation complete!");
    println!("  Run:      {run_id}");
    println!("  Reviewed: {}", report.reviewed);
    println!("  Curated:  {}", report.curated);
    println!("  Rejected: {}", report.rejected);
    println!("  Time:     {:.1}s", start.elapsed().as_secs_f64());
    println!();

    Ok(())
}

async fn cmd_spotlight() -> Result<()> {
    let run_id = RunId::new();
    let start = Instant::now();

    info!(%run_id, "running community spotlight stage");

    println!("Simulating retrieval of a curated UGC submission.");
    let submission = growthloop_ugc::fetch_curated_submission();
    if let Some(id) = submission.id {
        println!("Processing curated submission ID: {id}");
    }

    println!("Simulating spotlight-post writing for the submission.");
    let (post, updated) = growthloop_ugc::spotlight_submission(&submission)?;

    println!("Simulating publishing the spotlight post to an external platform.");
    if let Some(id) = updated.id {
        println!("Simulating store update for submission ID {id} to 'Spotlighted'.");
    }

    println!();
    println!("  Community spotlight published!");
    println!("  Run:      {run_id}");
    println!("  Title:    {}", post.title);
    println!("  Platform: {}", updated.platform);
    println!("  Status:   {}", updated.status);
    println!("  Time:     {:.1}s", start.elapsed().as_secs_f64());
    println!();

    Ok(())
}

async fn cmd_optimize() -> Result<()> {
    let run_id = RunId::new();
    let start = Instant::now();

    info!(%run_id, "running analytics self-optimization stage");

    println!("Simulating querying funnel analytics data.");
    let stats = growthloop_analytics::query_analytics();

    println!("Simulating self-optimization of keyword patterns.");
    let adjustments = growthloop_analytics::optimize_keyword_priorities(&stats);

    println!("Simulating updating the keyword patterns store:");
    for adjustment in &adjustments {
        println!("  Updating: {}", serde_json::to_string(adjustment)?);
    }

    println!();
    println!("  Keyword priorities optimized!");
    println!("  Run:         {run_id}");
    println!("  Funnel rate: {:.3}", stats.page_view_to_signup_rate);
    println!("  Adjusted:    {}", adjustments.len());
    println!("  Time:        {:.1}s", start.elapsed().as_secs_f64());
    println!();

    Ok(())
}

async fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

async fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
