mod args;

use anyhow::{Context, Result, bail};
use args::{Args, Command, USAGE};
use blockpress_config::Config;
use blockpress_engine::{
    ContainerRequest, Limits, MemoryStore, PageProperties, PersistOptions, PublishReport,
    PublishStatus, Publisher, store_url, to_markdown,
};
use blockpress_notion::NotionClient;
use std::time::Duration;
use std::{env, fs, io, process};

/// Exit code when the page was created but some blocks were lost.
const EXIT_PARTIAL: i32 = 3;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = match Args::parse(env::args().skip(1)) {
        Ok(Command::Publish(args)) => args,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return;
        }
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    match run(&args) {
        Ok(PublishStatus::Complete) => {}
        Ok(PublishStatus::Partial) => process::exit(EXIT_PARTIAL),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<PublishStatus> {
    let config_path = args.config.clone().unwrap_or_else(Config::config_path);
    log::info!("Config path: {}", config_path.display());

    let config = match Config::load_from_path(&config_path)? {
        Some(config) => config,
        None if args.dry_run => Config::default(),
        None => bail!(
            "No config file found; create one at {}",
            config_path.display()
        ),
    };

    let text = read_input(args)?;
    let request = ContainerRequest::new(config.store.database_id.clone(), properties(args, &text));
    let limits = if config.publish.truncate_documents {
        Limits::default()
    } else {
        Limits::untruncated()
    };

    if args.dry_run {
        let options = PersistOptions {
            inter_batch_delay: Duration::ZERO,
            ..PersistOptions::default()
        };
        let mut publisher = Publisher::with_options(MemoryStore::new(), limits, options);
        let report = publisher.publish(&request, &text)?;
        if !args.json
            && let Some(stored) = publisher.store().container(&report.persist.container)
        {
            println!("{}", to_markdown(&stored.blocks));
        }
        return print_report(&report, args.json);
    }

    config.store.validate()?;
    let client = NotionClient::new(config.store.token.as_str())?
        .with_api_base(config.store.api_base.as_str())
        .with_api_version(config.store.api_version.as_str());
    let options = PersistOptions {
        inter_batch_delay: config.publish.inter_batch_delay(),
        ..PersistOptions::default()
    };
    let mut publisher = Publisher::with_options(client, limits, options);
    let report = publisher.publish(&request, &text)?;
    print_report(&report, args.json)
}

fn read_input(args: &Args) -> Result<String> {
    match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => io::read_to_string(io::stdin()).context("Failed to read stdin"),
    }
}

fn properties(args: &Args, text: &str) -> PageProperties {
    let title = args
        .title
        .clone()
        .unwrap_or_else(|| PageProperties::fallback_title(text));
    let mut props = PageProperties::new(title, chrono::Local::now().fixed_offset())
        .with_tags(args.tags.iter().cloned());
    if let Some(summary) = &args.summary {
        props = props.with_summary(summary.as_str());
    }
    if let Some(url) = &args.url {
        props = props.with_source_url(url.as_str());
    }
    props
}

fn print_report(report: &PublishReport, json: bool) -> Result<PublishStatus> {
    let status = report.status();
    let url = store_url(&report.persist.container);

    if let Some(t) = &report.truncation {
        log::warn!(
            "document truncated: kept {} blocks, dropped {}",
            t.kept,
            t.dropped
        );
    }
    if status == PublishStatus::Partial {
        log::warn!(
            "{} of {} blocks were not written",
            report.persist.lost_blocks(),
            report.persist.total
        );
    }

    if json {
        let value = serde_json::json!({
            "url": url,
            "status": status,
            "report": report,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{url}");
    }
    Ok(status)
}
