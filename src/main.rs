use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum_prometheus::PrometheusMetricLayer;
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use grant_spotter::config::AppConfig;
use grant_spotter::engine::sample::sample_grants;
use grant_spotter::engine::{
    format_usd, run_query, DashboardStats, FilterState, Grant, GrantCategory, GrantCsvImporter,
    GrantDetailView, GrantStatus, GrantSummaryView, ScoringWeights, SortStrategy,
};
use grant_spotter::error::AppError;
use grant_spotter::routes::{router, AppState};
use grant_spotter::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Grant Spotter",
    about = "Score, filter, and rank funding opportunities from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Run the scoring and filtering pipeline against a grant catalog
    Query(QueryArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct QueryArgs {
    /// Grant catalog CSV export (defaults to the built-in sample catalog)
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Restrict to a category (repeatable); empty means all categories
    #[arg(long = "category", value_parser = parse_category)]
    categories: Vec<GrantCategory>,
    /// Minimum award amount the grant's range must reach
    #[arg(long, default_value_t = 0)]
    min_amount: u64,
    /// Maximum award amount the grant's range must start under
    #[arg(long)]
    max_amount: Option<u64>,
    /// Only grants with a deadline within this many days
    #[arg(long, default_value_t = 365)]
    deadline_within: i64,
    /// Minimum acceptable composite score
    #[arg(long, default_value_t = 0)]
    min_score: u8,
    /// Restrict to a lifecycle status (repeatable); empty means all statuses
    #[arg(long = "status", value_parser = parse_status)]
    statuses: Vec<GrantStatus>,
    /// Sort strategy: score, deadline, or amount
    #[arg(long, default_value = "score")]
    sort: String,
    /// Reference date for deadline math (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
    /// Print the full detail view for every match
    #[arg(long)]
    list_details: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Query(args) => run_query_command(args),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn parse_category(raw: &str) -> Result<GrantCategory, String> {
    GrantCategory::from_slug(raw).ok_or_else(|| {
        let expected = GrantCategory::ordered().map(GrantCategory::slug);
        format!(
            "unknown category '{raw}', expected one of: {}",
            expected.join(", ")
        )
    })
}

fn parse_status(raw: &str) -> Result<GrantStatus, String> {
    GrantStatus::from_slug(raw).ok_or_else(|| {
        let expected = GrantStatus::ordered().map(GrantStatus::slug);
        format!(
            "unknown status '{raw}', expected one of: {}",
            expected.join(", ")
        )
    })
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
        weights: config.scoring.weights,
    };

    let app = router(state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "grant spotter service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_query_command(args: QueryArgs) -> Result<(), AppError> {
    let QueryArgs {
        csv,
        categories,
        min_amount,
        max_amount,
        deadline_within,
        min_score,
        statuses,
        sort,
        today,
        list_details,
    } = args;

    let config = AppConfig::load()?;
    let weights = config.scoring.weights;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let sort = sort.parse::<SortStrategy>()?;

    let imported = csv.is_some();
    let grants = match csv {
        Some(path) => GrantCsvImporter::from_path(path, &weights)?,
        None => sample_grants(today, &weights),
    };

    let filters = FilterState {
        categories,
        min_amount,
        max_amount,
        deadline_within_days: deadline_within,
        min_score,
        statuses,
    };

    let stats = DashboardStats::from_grants(&grants, today);
    let results = run_query(&grants, &filters, sort, today);

    render_query_report(
        &results,
        &stats,
        &filters,
        &weights,
        sort,
        today,
        imported,
        list_details,
    );

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn render_query_report(
    results: &[Grant],
    stats: &DashboardStats,
    filters: &FilterState,
    weights: &ScoringWeights,
    sort: SortStrategy,
    today: NaiveDate,
    imported: bool,
    list_details: bool,
) {
    println!("Grant query report (evaluated {today})");

    if imported {
        println!("Catalog source: CSV import");
    } else {
        println!("Catalog source: built-in sample catalog");
    }

    println!(
        "Sort: {} | active filter dimensions: {}",
        sort.label(),
        filters.active_dimensions()
    );

    println!("\nOverview");
    println!(
        "- Total grants: {} ({} new)",
        stats.total_grants, stats.new_grants
    );
    println!(
        "- Urgent deadlines (within 14 days): {}",
        stats.urgent_deadlines
    );
    println!("- High match (score >= 75): {}", stats.high_match);
    println!("- Applications in progress: {}", stats.in_progress);
    println!("- Average score: {}", stats.average_score);
    println!(
        "- Potential funding: {}",
        format_usd(stats.potential_funding)
    );

    if results.is_empty() {
        println!("\nMatches: none");
        return;
    }

    println!("\nMatches ({})", results.len());
    for grant in results {
        let view = GrantSummaryView::for_grant(grant, today);
        println!(
            "- [{} {}] {} | {} | {} | due {} ({} days, {}) | {} | status {}",
            view.overall_score,
            view.score_band_label,
            view.title,
            view.funder,
            view.category_label,
            view.deadline,
            view.days_until,
            view.urgency_label,
            view.award_label,
            view.status_label
        );
    }

    if list_details {
        println!("\nDetails");
        for grant in results {
            let detail = GrantDetailView::for_grant(grant, weights, today);
            println!("\n{} ({})", detail.summary.title, detail.summary.id.0);
            println!("  {}", detail.description);
            println!(
                "  Source: {} [{}], updated {}",
                detail.source_url, detail.source_reliability_label, detail.last_updated
            );
            if !detail.eligibility.organization_types.is_empty() {
                println!(
                    "  Eligible organizations: {}",
                    detail.eligibility.organization_types.join(", ")
                );
            }
            if !detail.eligibility.requirements.is_empty() {
                println!(
                    "  Requirements: {}",
                    detail.eligibility.requirements.join("; ")
                );
            }
            if detail.eligibility.matching_funds_required {
                println!("  Matching funds required");
            }
            println!("  Score breakdown");
            for component in &detail.score_breakdown {
                println!(
                    "  - {} (weight {:.2}): {}",
                    component.label, component.weight, component.score
                );
            }
        }
    }
}
