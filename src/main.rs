use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pocket_forecaster::{
    dom::{ids, Document},
    services::{format_listing, HttpRecommendationSource},
    ui::{ClickOutcome, RecordingNotifier, SearchOutcome},
    Config, UiController,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Html,
}

#[derive(Parser, Debug)]
#[command(name = "pocket-forecaster")]
#[command(about = "Find smartphones by budget, OS and usage", long_about = None)]
struct Args {
    /// Lowest price to consider; blank means 0
    #[arg(long, default_value = "")]
    min_budget: String,

    /// Highest price to consider; blank means 100000
    #[arg(long, default_value = "")]
    max_budget: String,

    /// Android, iOS, or blank for no preference
    #[arg(long, default_value = "")]
    os: String,

    /// 1 Casual, 2 Entertainment, 3 Gaming, 4 Photography, 5 Productivity
    #[arg(long, default_value = "")]
    usage: String,

    /// Base URL of the recommendation service (overrides API_URL)
    #[arg(long)]
    api_url: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    format: Format,
}

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    match run(config, args).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Mounts the page, submits the form once and prints the panels.
/// Returns false when the user was alerted.
async fn run(mut config: Config, args: Args) -> anyhow::Result<bool> {
    if let Some(api_url) = args.api_url {
        config.api_url = api_url;
    }

    let source = Arc::new(HttpRecommendationSource::from_config(&config)?);
    let notifier = Arc::new(RecordingNotifier::echoing());
    let mut controller = UiController::mount(Document::standard(), source, notifier.clone())?;

    let doc = controller.document_mut();
    doc.set_value(ids::MIN_BUDGET, args.min_budget)?;
    doc.set_value(ids::MAX_BUDGET, args.max_budget)?;
    doc.set_value(ids::OS, args.os)?;
    doc.set_value(ids::USAGE, args.usage)?;

    if controller.click(ids::SEARCH_BUTTON)? != ClickOutcome::SearchRequested {
        anyhow::bail!("search button is not wired");
    }

    match controller.search().await? {
        SearchOutcome::Rendered { .. } => {}
        SearchOutcome::Failed | SearchOutcome::Rejected | SearchOutcome::Superseded => {
            return Ok(notifier.count() == 0);
        }
    }

    match args.format {
        Format::Text => {
            if let Some((response, usage)) = controller.shown_results() {
                print!("{}", format_listing(response, usage));
            }
        }
        Format::Html => {
            let doc = controller.document();
            for panel in [ids::MAIN_PANEL, ids::ADDITIONAL_PANEL, ids::BONUS_PANEL] {
                println!("<div id=\"{}\">{}</div>", panel, doc.get(panel)?.inner_html());
            }
        }
    }

    Ok(true)
}
