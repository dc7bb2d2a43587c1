//! Scripture Viewer - render scripture data files as navigable HTML.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use scripture_viewer::config::BRAHMASUTRAM_DATA_PATH;
use scripture_viewer::controller::{
    BrahmasutramController, UpanishadController, VerseController, View, Viewer,
};
use scripture_viewer::{Action, Source, ViewerConfig, ViewerError};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Which viewer to mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    /// Chapters, collapsible sections and commentary.
    Brahmasutram,
    /// Sections, subsections and mantra pages.
    Upanishad,
    /// A single page of shlokas or mantras.
    Verse,
}

/// One step of navigation applied after mounting.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Action(Action),
    HistoryPop,
    Region(String),
}

impl FromStr for Step {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "back" {
            return Ok(Step::HistoryPop);
        }
        if let Some(id) = s.strip_prefix("region:") {
            if id.is_empty() {
                return Err(ViewerError::InvalidAction(s.to_string()));
            }
            return Ok(Step::Region(id.to_string()));
        }
        s.parse().map(Step::Action)
    }
}

#[derive(Parser, Debug)]
#[command(name = "scripture-viewer")]
#[command(about = "Render scripture data files as navigable HTML", long_about = None)]
struct Args {
    /// Viewer to mount
    #[arg(value_enum)]
    kind: Kind,

    /// Data file path or http(s) URL
    source: Option<String>,

    /// Navigation step: root, mid:ID, leaf:PARENT:CHILD, toggle:ID, back, region:ID
    #[arg(short, long = "action", value_name = "STEP")]
    actions: Vec<Step>,

    /// Write the container HTML to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Id of the container element
    #[arg(long)]
    container: Option<String>,

    /// Href of the site home page
    #[arg(long)]
    home: Option<String>,

    /// Href of the sibling index page
    #[arg(long)]
    index: Option<String>,

    /// Print the clickable regions of the final render to stderr
    #[arg(long)]
    regions: bool,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let mut config = match args.kind {
        Kind::Brahmasutram => ViewerConfig::brahmasutram(),
        Kind::Upanishad | Kind::Verse => ViewerConfig::default(),
    };
    if let Some(id) = &args.container {
        config = config.with_container_id(id.as_str());
    }
    if let Some(href) = &args.home {
        config = config.with_home_href(href.as_str());
    }
    if let Some(href) = &args.index {
        config = config.with_index_href(href.as_str());
    }

    let source = match (&args.source, args.kind) {
        (Some(s), _) => Source::parse(s)?,
        (None, Kind::Brahmasutram) => Source::parse(BRAHMASUTRAM_DATA_PATH)?,
        (None, _) => bail!("a data source is required for the {:?} viewer", args.kind),
    };

    let loaded = match args.kind {
        Kind::Brahmasutram => run::<BrahmasutramController>(&args, &config, &source)?,
        Kind::Upanishad => run::<UpanishadController>(&args, &config, &source)?,
        Kind::Verse => run::<VerseController>(&args, &config, &source)?,
    };

    if !loaded {
        std::process::exit(1);
    }
    Ok(())
}

fn run<V: View>(
    args: &Args,
    config: &ViewerConfig,
    source: &Source,
) -> Result<bool> {
    let mut viewer: Viewer<V> = Viewer::mount(config, source);

    if viewer.is_loaded() {
        for step in &args.actions {
            let transition = match step {
                Step::Action(action) => viewer.apply(*action)?,
                Step::HistoryPop => viewer.history_pop()?,
                Step::Region(id) => viewer.dispatch(id)?,
            };
            if !transition.is_rendered() {
                tracing::info!("{:?} changed nothing", step);
            } else if viewer.scroll_to_top() {
                tracing::debug!("{:?} scrolled to top", step);
            }
        }
    } else if !args.actions.is_empty() {
        tracing::warn!("Skipping {} navigation steps, nothing loaded", args.actions.len());
    }

    let html = viewer.container().to_html();
    match &args.output {
        Some(path) => std::fs::write(path, html)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{}", html),
    }

    if args.regions {
        for region in viewer.regions().iter() {
            eprintln!("{}\t{}", region.id, region.action);
        }
    }

    Ok(viewer.is_loaded())
}

fn init_logging(args: &Args) -> Result<()> {
    // Set up logging to a file if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::File::create(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting scripture-viewer");
        return Ok(());
    }

    let default_level = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
