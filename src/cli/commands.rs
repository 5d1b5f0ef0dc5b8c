use anyhow::{Context, Result};

use crate::classifier::{Classifier, PostMeta};
use crate::cli::config::{optional_filter, read_body, resolve_config, RunConfig};
use crate::cli::flags::{Cli, Command, PostsCommand, ReportsCommand};
use crate::core::store::{PostFilter, ReportFilter, Store};
use crate::core::time::{now_utc, DateRange};
use crate::hotspot::ClusterParams;
use crate::pipeline::ingest::{create_report, hotspots_for_range, ingest_post, PostOutcome};
use crate::pipeline::normalizer::{normalize_post, normalize_report, RawPost, RawReport};
use crate::pipeline::reporter::emit;
use crate::pipeline::seed::seed_store;

pub fn run(cli: Cli) -> Result<()> {
    let cfg = resolve_config(&cli)?;

    match cli.command {
        Command::Hotspots { date_range } => run_hotspots(&cfg, date_range.into()),
        Command::Classify {
            text,
            platform,
            author,
            location,
        } => {
            let meta = PostMeta {
                platform: platform.as_deref(),
                author: author.as_deref(),
                location: location.as_deref(),
            };
            run_classify(&cfg, &text, &meta)
        }
        Command::Reports { action } => match action {
            ReportsCommand::Add { file } => run_report_add(&cfg, file.as_deref()),
            ReportsCommand::List {
                date_range,
                hazard_type,
                severity,
                verified,
            } => {
                let filter = ReportFilter {
                    since: date_range.map(|r| DateRange::from(r).since(now_utc())),
                    hazard_type: optional_filter(hazard_type.as_deref())?,
                    severity: optional_filter(severity.as_deref())?,
                    verified,
                    ..Default::default()
                };
                run_report_list(&cfg, &filter)
            }
        },
        Command::Posts { action } => match action {
            PostsCommand::Add { file } => run_post_add(&cfg, file.as_deref()),
            PostsCommand::List {
                platform,
                hazard_type,
                is_relevant,
                date_range,
            } => {
                let filter = PostFilter {
                    platform,
                    hazard_type: optional_filter(hazard_type.as_deref())?,
                    is_relevant,
                    since: date_range.map(|r| DateRange::from(r).since(now_utc())),
                };
                run_post_list(&cfg, &filter)
            }
        },
        Command::Seed => run_seed(&cfg),
    }
}

fn open_store(cfg: &RunConfig) -> Result<Store> {
    Store::new(&cfg.app.db_path)
        .with_context(|| format!("opening database {}", cfg.app.db_path.display()))
}

fn run_hotspots(cfg: &RunConfig, range: DateRange) -> Result<()> {
    let store = open_store(cfg)?;
    let params = ClusterParams::from(&cfg.app.hotspots);
    let hotspots = hotspots_for_range(&store, &params, range, now_utc())?;
    emit(&hotspots, cfg.format, cfg.output.as_deref())
}

fn run_classify(cfg: &RunConfig, text: &str, meta: &PostMeta<'_>) -> Result<()> {
    let classifier = Classifier::new(&cfg.app.classifier)?;
    let result = classifier.process_post(text, meta);
    emit(&[result], cfg.format, cfg.output.as_deref())
}

fn run_report_add(cfg: &RunConfig, file: Option<&std::path::Path>) -> Result<()> {
    let body = read_body(file)?;
    let raw: RawReport = serde_json::from_str(&body).context("report body is not valid JSON")?;
    let draft = normalize_report(raw)?;
    let store = open_store(cfg)?;
    let report = create_report(&store, draft, now_utc())?;
    emit(&[report], cfg.format, cfg.output.as_deref())
}

fn run_report_list(cfg: &RunConfig, filter: &ReportFilter) -> Result<()> {
    let store = open_store(cfg)?;
    let reports = store.list_reports(filter)?;
    emit(&reports, cfg.format, cfg.output.as_deref())
}

fn run_post_add(cfg: &RunConfig, file: Option<&std::path::Path>) -> Result<()> {
    let body = read_body(file)?;
    let raw: RawPost = serde_json::from_str(&body).context("post body is not valid JSON")?;
    let draft = normalize_post(raw)?;
    let classifier = Classifier::new(&cfg.app.classifier)?;
    let store = open_store(cfg)?;
    match ingest_post(&store, &classifier, draft, now_utc())? {
        PostOutcome::Stored(post) => emit(&[post], cfg.format, cfg.output.as_deref()),
        PostOutcome::Skipped(result) => {
            eprintln!("Post not relevant to ocean hazards; not stored.");
            emit(&[result], cfg.format, cfg.output.as_deref())
        }
    }
}

fn run_post_list(cfg: &RunConfig, filter: &PostFilter) -> Result<()> {
    let store = open_store(cfg)?;
    let posts = store.list_posts(filter)?;
    emit(&posts, cfg.format, cfg.output.as_deref())
}

fn run_seed(cfg: &RunConfig) -> Result<()> {
    let store = open_store(cfg)?;
    let summary = seed_store(&store, now_utc())?;
    eprintln!(
        "Seeded {} reports and {} posts into {}",
        summary.reports,
        summary.posts,
        cfg.app.db_path.display()
    );
    Ok(())
}
