mod api;
mod server;

use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use symptom_insights::{
    analyze, analyze_sentiment, assistant_context, backfill_sentiment, format_float, AnalysisOptions,
    AnalysisReport, AnalyticsConfig, DailyLogEntry, Domain, Locale,
};

#[derive(Parser)]
#[command(name = "symptom-insights", about = "Derived health signals from daily symptom logs")]
struct Cli {
    /// Path to a TOML config (defaults to $ANALYTICS_CONFIG_PATH or config/analytics.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify the sentiment of one note
    Sentiment(SentimentArgs),
    /// Run every analysis over a JSON array of entries
    Analyze(AnalyzeArgs),
    /// Print the conversational assistant digest
    Digest(AnalyzeArgs),
    /// Compute missing sentiment snapshots for stored entries
    Backfill(BackfillArgs),
    /// Serve the analyses over HTTP
    Serve(ServeArgs),
    /// Write the default configuration file
    InitConfig {
        #[arg(long, default_value = "config/analytics.toml")]
        path: PathBuf,
    },
}

#[derive(Args, Debug, Clone)]
struct SentimentArgs {
    #[arg(long)]
    text: Option<String>,
    #[arg(long)]
    locale: Option<String>,
}

#[derive(Args, Debug, Clone)]
struct AnalyzeArgs {
    #[arg(long)]
    entries: PathBuf,
    /// Anchor day (YYYY-MM-DD); defaults to the latest entry
    #[arg(long)]
    as_of: Option<String>,
    #[arg(long)]
    locale: Option<String>,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct BackfillArgs {
    #[arg(long)]
    entries: PathBuf,
    #[arg(long)]
    out: PathBuf,
    #[arg(long)]
    locale: Option<String>,
    /// Recompute snapshots that already exist
    #[arg(long)]
    overwrite: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long)]
    host: Option<String>,
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let (config, _) = AnalyticsConfig::load(cli.config.clone()).map_err(|err| err.to_string())?;

    match cli.command {
        Command::Sentiment(args) => run_sentiment(args, &config),
        Command::Analyze(args) => run_analyze(args, &config),
        Command::Digest(args) => run_digest(args, &config),
        Command::Backfill(args) => run_backfill(args, &config),
        Command::Serve(args) => server::serve(args, config).await,
        Command::InitConfig { path } => {
            config.write(&path).map_err(|err| err.to_string())?;
            println!("Config written to {}.", path.display());
            Ok(())
        }
    }
}

fn run_sentiment(args: SentimentArgs, config: &AnalyticsConfig) -> Result<(), String> {
    let locale = Locale::resolve(args.locale.as_deref(), config.locale.to_locale());
    let text = read_text(args.text)?;
    let result = analyze_sentiment(&text, locale);

    println!(
        "Sentiment: {} {} (score {}, confidence {})",
        result.emoji,
        result.sentiment,
        format_float(result.score, 2),
        format_float(result.confidence, 2)
    );
    if !result.keywords.positive.is_empty() {
        println!("Positive keywords: {}", result.keywords.positive.join(", "));
    }
    if !result.keywords.negative.is_empty() {
        println!("Negative keywords: {}", result.keywords.negative.join(", "));
    }
    Ok(())
}

fn analysis_inputs(args: &AnalyzeArgs, config: &AnalyticsConfig) -> Result<(Vec<DailyLogEntry>, AnalysisOptions), String> {
    let entries = read_entries(&args.entries)?;
    let mut options = AnalysisOptions::from_config(config)
        .with_locale(Locale::resolve(args.locale.as_deref(), config.locale.to_locale()));
    if let Some(value) = args.as_of.as_deref() {
        options = options.with_as_of(api::parse_date(value)?);
    }
    Ok((entries, options))
}

fn run_analyze(args: AnalyzeArgs, config: &AnalyticsConfig) -> Result<(), String> {
    let (entries, options) = analysis_inputs(&args, config)?;
    let report = analyze(&entries, &options);

    if args.json {
        let payload = serde_json::to_string_pretty(&report)
            .map_err(|err| format!("failed to serialize report: {}", err))?;
        println!("{}", payload);
        return Ok(());
    }

    print_report(&report);
    Ok(())
}

fn run_digest(args: AnalyzeArgs, config: &AnalyticsConfig) -> Result<(), String> {
    let (entries, options) = analysis_inputs(&args, config)?;
    println!("{}", assistant_context(&entries, &options));
    Ok(())
}

fn run_backfill(args: BackfillArgs, config: &AnalyticsConfig) -> Result<(), String> {
    let locale = Locale::resolve(args.locale.as_deref(), config.locale.to_locale());
    let entries = read_entries(&args.entries)?;
    let updated = backfill_sentiment(&entries, locale, args.overwrite);
    let changed = entries
        .iter()
        .zip(updated.iter())
        .filter(|(before, after)| before.sentiment != after.sentiment)
        .count();

    let payload = serde_json::to_string_pretty(&updated)
        .map_err(|err| format!("failed to serialize entries: {}", err))?;
    std::fs::write(&args.out, payload)
        .map_err(|err| format!("failed to write {}: {}", args.out.display(), err))?;
    println!(
        "Updated {} of {} entries into {}.",
        changed,
        updated.len(),
        args.out.display()
    );
    Ok(())
}

fn print_report(report: &AnalysisReport) {
    let quality = &report.quality_of_life;
    println!("Analysis as of {} ({})", report.as_of, report.locale);
    println!(
        "Quality of life: {}/8 - {} ({} entries)",
        format_float(quality.global_score, 1),
        quality.interpretation_text,
        quality.entries_analyzed
    );
    for domain in Domain::ALL {
        let score = quality.domain(domain);
        println!(
            "  {}: {} ({:?}, {} days)",
            domain,
            format_float(score.score, 1),
            score.severity,
            score.days_affected
        );
    }
    println!("Recommendation: {}", quality.recommendation);

    if !report.red_flags.is_empty() {
        println!("\nRed flags:");
        for alert in &report.red_flags {
            println!(
                "- [{:?} #{}] {}: {} {}",
                alert.severity, alert.priority_rank, alert.title, alert.message, alert.recommended_action
            );
        }
    }

    if !report.insights.is_empty() {
        println!("\nInsights:");
        for insight in &report.insights {
            println!("- {} ({}): {}", insight.title, insight.value, insight.message);
        }
    }

    let trend = &report.sentiment_trend;
    println!(
        "\nNote sentiment: average {} ({:?}) across {} notes ({} positive | {} negative | {} neutral)",
        format_float(trend.average_sentiment, 2),
        trend.trend_direction,
        trend.total_analyzed,
        trend.positive_count,
        trend.negative_count,
        trend.neutral_count
    );
}

fn read_entries(path: &Path) -> Result<Vec<DailyLogEntry>, String> {
    let data = std::fs::read_to_string(path)
        .map_err(|err| format!("failed to read {}: {}", path.display(), err))?;
    serde_json::from_str(&data)
        .map_err(|err| symptom_insights::Error::from(err).to_string())
}

fn read_text(arg: Option<String>) -> Result<String, String> {
    if let Some(text) = arg {
        if !text.trim().is_empty() {
            return Ok(text);
        }
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed reading stdin: {}", err))?;
    Ok(buffer.trim().to_string())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
