//! Rift Rewind CLI
//!
//! Terminal front-end for the Rift Rewind backend. Drives the same
//! orchestration, fetch state machine and formatters as the dashboard.

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rift_rewind::compare::{self, CompareForm};
use rift_rewind::config::{generate_default_config, Config, LoggingConfig};
use rift_rewind::fetch::{fetch_with_retries, FetchRequest, FetchState, Section, SectionKind};
use rift_rewind::format;
use rift_rewind::models::roast::intensity_meter;
use rift_rewind::models::{
    ComparisonResult, HiddenGemsResult, InsightsResult, PersonalityProfile, PlayerResponse,
    PlayerStats, Region, RoastResult,
};
use rift_rewind::orchestrator::{
    DashboardTransfer, FetchPolicy, LoadEvent, LoadOutcome, Orchestrator, TokioDelay, STEPS,
};
use rift_rewind::routes::{submit_lookup, LoadingQuery, Route};
use rift_rewind::share;
use rift_rewind::{RiftApi, RiftClient};

#[derive(Parser)]
#[command(name = "rift-rewind")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "League of Legends season recap from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: platform config dir, then ./config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL, overriding config and environment
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Matches analysed per request
    #[arg(long, global = true)]
    pub match_count: Option<u32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List selectable regions
    Regions,

    /// Fetch and print a player's overview
    Stats(LookupArgs),

    /// Run the loading sequence and print every section it fetched
    Recap {
        #[command(flatten)]
        lookup: LookupArgs,
        /// Fetch every AI section up front (deprecated loading policy)
        #[arg(long)]
        eager: bool,
    },

    /// Generate AI insights
    Insights(SectionArgs),

    /// Generate a roast
    Roast(SectionArgs),

    /// Discover hidden gems
    Gems(SectionArgs),

    /// Analyze personality
    Personality(SectionArgs),

    /// Compare two players
    Compare {
        player1: String,
        player2: String,
        /// Region code (default: ui.default_region)
        #[arg(short, long)]
        region: Option<String>,
    },

    /// Print share text and a Twitter intent URL
    Share {
        region: String,
        summoner: String,
        /// Link attached to the post
        #[arg(long, default_value = "https://riftrewind.gg")]
        link: String,
    },

    /// Print a default config file
    InitConfig,
}

#[derive(Args)]
pub struct LookupArgs {
    /// Region code, e.g. na1, euw1, kr
    pub region: Option<String>,
    /// Summoner name
    pub summoner: Option<String>,
    /// Use the canned demo dataset instead of a real lookup
    #[arg(long)]
    pub demo: bool,
}

#[derive(Args)]
pub struct SectionArgs {
    pub region: String,
    pub summoner: String,
    /// Retry failed requests this many times
    #[arg(long, default_value_t = 0)]
    pub retries: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("Loading config from {}", path.display()))?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = Some(url.clone());
    }
    if let Some(count) = cli.match_count {
        if count == 0 {
            bail!("--match-count must be at least 1");
        }
        config.api.match_count = count;
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if cli.json_logs {
        config.logging.format = "json".to_string();
    }

    init_logging(&config.logging);

    if let Commands::InitConfig = cli.command {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let client_config = config.client_config();
    let match_count = client_config.match_count;
    tracing::debug!(base_url = %client_config.base_url, match_count, "Client configured");
    let client = RiftClient::http(client_config).context("Building HTTP client")?;

    match cli.command {
        Commands::Regions => {
            let regions = match client.get_regions().await {
                Ok(regions) if !regions.is_empty() => regions,
                Ok(_) => Region::fallback_list(),
                Err(e) => {
                    tracing::warn!("Failed to fetch regions: {}", e);
                    Region::fallback_list()
                }
            };
            for region in regions {
                println!("{:<6} {}", region.code, region.name);
            }
        }

        Commands::Stats(lookup) => {
            let (route, transfer) = load(&client, &lookup, FetchPolicy::Lean, match_count).await?;
            print_overview(&route, &transfer.stats);
        }

        Commands::Recap { lookup, eager } => {
            let policy = if eager {
                FetchPolicy::Eager
            } else {
                FetchPolicy::Lean
            };
            let (route, transfer) = load(&client, &lookup, policy, match_count).await?;
            print_recap(&route, &transfer);
        }

        Commands::Insights(args) => {
            let insights: InsightsResult = section(&client, &args, match_count).await?;
            print_insights(&insights);
        }

        Commands::Roast(args) => {
            let roast: RoastResult = section(&client, &args, match_count).await?;
            print_roast(&roast, None);
        }

        Commands::Gems(args) => {
            let gems: HiddenGemsResult = section(&client, &args, match_count).await?;
            print_gems(&gems);
        }

        Commands::Personality(args) => {
            let profile: PersonalityProfile = section(&client, &args, match_count).await?;
            print_personality(&profile);
        }

        Commands::Compare {
            player1,
            player2,
            region,
        } => {
            let region = region.unwrap_or_else(|| config.ui.default_region.clone());
            let form = CompareForm::new(&player1, &player2, &region);
            match compare::compare(&client, &form, match_count).await {
                Ok(result) => {
                    println!("{}", compare::COMPARE_SUCCESS_MESSAGE);
                    print_comparison(&form, &result);
                }
                Err(e) => bail!(compare::failure_message(&e)),
            }
        }

        Commands::Share {
            region,
            summoner,
            link,
        } => {
            let summoner = summoner.trim();
            let response = client
                .get_player_stats(&region, summoner, match_count)
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message()))?;
            let text = share::format_stats_for_share(&response.stats, summoner);
            let url = format!(
                "{}{}",
                link.trim_end_matches('/'),
                Route::dashboard(&region, summoner)
            );
            println!("{}\n", text);
            println!("{}", share::twitter_intent_url(&text, &url));
        }

        Commands::InitConfig => unreachable!("handled before the client is built"),
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rift_rewind={}", logging.level)));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Run the loading sequence, printing progress to stderr
async fn load(
    client: &dyn RiftApi,
    lookup: &LookupArgs,
    policy: FetchPolicy,
    match_count: u32,
) -> anyhow::Result<(Route, DashboardTransfer)> {
    let query = if lookup.demo {
        LoadingQuery {
            region: lookup.region.clone(),
            demo: true,
            ..LoadingQuery::default()
        }
    } else {
        let route = submit_lookup(
            lookup.region.as_deref().unwrap_or_default(),
            lookup.summoner.as_deref().unwrap_or_default(),
        )
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
        match route {
            Route::Loading(query) => query,
            other => bail!("Unexpected route {}", other),
        }
    };

    let mut failure = None;
    let outcome = Orchestrator::new(client, &TokioDelay, match_count)
        .with_policy(policy)
        .run(&query, &mut |event| match event {
            LoadEvent::Progress { step, percent } => {
                eprintln!("[{:>3}%] {}", percent, STEPS[step]);
            }
            LoadEvent::Failed { message } => failure = Some(message),
        })
        .await;

    match outcome {
        LoadOutcome::Navigate { route, transfer } => Ok((route, *transfer)),
        LoadOutcome::Redirect(_) => match failure {
            Some(message) => bail!(message),
            None => bail!("A region and summoner name are required"),
        },
    }
}

/// Fetch one AI section through the widget state machine
async fn section<T: Section>(
    client: &dyn RiftApi,
    args: &SectionArgs,
    match_count: u32,
) -> anyhow::Result<T> {
    let summoner = args.summoner.trim();
    if summoner.is_empty() {
        bail!(rift_rewind::routes::EMPTY_SUMMONER_MESSAGE);
    }

    let kind: SectionKind = T::KIND;
    eprintln!("{}", kind.loading_message());
    let request = FetchRequest::new(kind, &args.region, summoner, match_count);
    let fetched = fetch_with_retries::<T>(client, request, args.retries).await;
    let attempts = fetched.attempts();

    match fetched.into_state() {
        FetchState::Loaded(value) => Ok(value),
        FetchState::Error(message) => {
            bail!("{} (after {} attempt(s))", message, attempts)
        }
        FetchState::Idle | FetchState::Loading => bail!("{} was not fetched", kind),
    }
}

fn print_overview(route: &Route, response: &PlayerResponse) {
    let stats = &response.stats;
    let name = match route {
        Route::Dashboard { summoner_name, .. } => summoner_name.as_str(),
        _ => response.summoner.name.as_deref().unwrap_or("Unknown"),
    };

    println!("{}'s Stats", name);
    if let Some(level) = response.summoner.level {
        println!("Level {}", level);
    }
    println!();
    println!("  Total Games    {}", stats.total_games);
    println!("  Win Rate       {}", format::win_rate_label(stats));
    println!("  Average KDA    {}", format::kda_label(stats.avg_kda));
    println!("  Most Played    {}", stats.role());
    println!(
        "  Recent Trend   {} {}",
        format::trend_emoji(stats.recent_trend.as_deref()),
        stats.recent_trend.as_deref().unwrap_or("Stable")
    );
    println!(
        "  Time Played    ~{}",
        format::estimate_time_played(stats.total_games, format::DEFAULT_GAME_MINUTES)
    );
    println!("  Avg Game       {}", format::format_duration(stats.avg_game_duration));

    println!();
    for (label, value) in format::secondary_metrics(stats) {
        println!("  {:<20} {}", label, value);
    }

    if stats.has_epic_moments() {
        let counts = stats.achievement_counts();
        println!();
        println!("Epic Moments");
        if counts.pentakills > 0 {
            println!("  ⭐ {} pentakill(s)", counts.pentakills);
        }
        if counts.quadrakills > 0 {
            println!("  💥 {} quadrakill(s)", counts.quadrakills);
        }
        if let Some(kda) = stats.best_game_kda.filter(|k| *k > 10.0) {
            println!("  🔥 {:.1} best KDA", kda);
        }
    }

    if !stats.top_champions.is_empty() {
        println!();
        println!("Champion Pool");
        for champ in stats.top_champions.iter().take(5) {
            println!(
                "  {:<14} {:>3} games  {:>5}% WR  {} KDA",
                champ.champion_name,
                champ.games_played,
                champ.win_rate,
                format::kda_label(champ.avg_kda)
            );
        }
    }

    let series = format::monthly_series(stats);
    if !series.is_empty() {
        println!();
        println!("Monthly Win Rate");
        for point in series {
            println!("  {:<8} {:>5}%  ({} games)", point.label, point.win_rate, point.games);
        }
    }

    println!();
    println!("Playstyle Profile");
    for bar in format::playstyle_profile(stats) {
        println!("  {} {:<11} {:>3}%", bar.icon, bar.name, bar.value);
    }
}

fn print_recap(route: &Route, transfer: &DashboardTransfer) {
    print_overview(route, &transfer.stats);

    if let Some(insights) = &transfer.insights {
        println!();
        print_insights(insights);
    }
    if let Some(gems) = &transfer.hidden_gems {
        println!();
        print_gems(gems);
    }
    if let Some(profile) = &transfer.personality {
        println!();
        print_personality(profile);
    }
    if let Some(roast) = &transfer.roast {
        println!();
        print_roast(roast, Some(&transfer.stats.stats));
    }
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("{}", title);
    for item in items {
        println!("  • {}", item);
    }
}

fn print_insights(insights: &InsightsResult) {
    println!("Your League Journey");
    println!("{}", insights.narrative());
    println!();
    print_list("Your Strengths", &insights.strengths);
    print_list("Growth Opportunities", &insights.areas_for_growth);
    println!("Your Playstyle: \"{}\"", insights.playstyle());
    print_list("Season Highlights", &insights.highlights);
    print_list("Recommendations", &insights.recommendations);
}

fn print_gems(gems: &HiddenGemsResult) {
    println!("Hidden Gems");
    if gems.is_empty() {
        println!("  No hidden gems discovered yet");
        return;
    }
    for gem in &gems.gems {
        println!(
            "  {} {} {}",
            gem.icon,
            gem.title,
            "★".repeat(gem.rarity as usize)
        );
        println!("     {}", gem.description);
    }
}

fn print_personality(profile: &PersonalityProfile) {
    println!("{}", profile.kind());
    println!("{}", profile.playstyle());
    println!();
    println!("{}", profile.description());
    if let Some(celebrity) = profile.celebrity() {
        println!("Plays like: {}", celebrity);
    }
    if !profile.traits.is_empty() {
        println!();
        for t in &profile.traits {
            println!("  {} {:<13} {:>3}%", t.icon(), t.name, t.percent());
        }
    }
    print_list("Strengths", &profile.strengths);
    println!("{}", profile.archetype());
}

fn print_roast(roast: &RoastResult, stats: Option<&PlayerStats>) {
    println!("⚠️ Roast Zone ⚠️");
    println!("{}", roast.text_or_fallback(stats));
    if let Some(stats) = stats {
        println!();
        println!("Roast Intensity Meter");
        for level in intensity_meter(stats) {
            println!("  {:<11} {:>3}%", level.label, level.level);
        }
    }
}

fn print_comparison(form: &CompareForm, result: &ComparisonResult) {
    println!();
    println!("Duo Synergy Score: {}", result.synergy_label());
    if !result.synergy_description().is_empty() {
        println!("{}", result.synergy_description());
    }
    println!();

    let left = result.player1.stat_rows();
    let right = result.player2.stat_rows();
    println!("  {:<10} {:<16} {:<16}", "", form.player1, form.player2);
    for ((label, a), (_, b)) in left.iter().zip(right.iter()) {
        println!("  {:<10} {:<16} {:<16}", label, a, b);
    }

    if let Some(narrative) = result.narrative() {
        println!();
        println!("AI Analysis");
        println!("{}", narrative);
    }
}
