//! # Codestrip - Editor Toolbar Demo
//!
//! Hosts the toolbar controller in a small iced editor window.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the demo
//! cargo run
//!
//! # Edit a file with experimental controls enabled
//! cargo run -- --experimental path/to/index.html
//!
//! # Print the decorated toolbar state as JSON and exit
//! cargo run -- --dump-state
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use codestrip_core::{Collaborators, MimeType, ToolbarConfig};
use codestrip_ui::app::build_toolbar;
use codestrip_ui::demo::{DemoEditor, DemoLayout, mime_for_path};
use codestrip_ui::{Flags, run};

/// Codestrip - editor toolbar demo
#[derive(Parser, Debug)]
#[command(name = "codestrip")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to open
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Toolbar config file (defaults to the platform config directory)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Prefix placed before `toolbar-` in control ids
    #[arg(long)]
    prefix: Option<String>,

    /// Enable experimental controls
    #[arg(long)]
    experimental: bool,

    /// Host the toolbar in the split pane's second container
    #[arg(long)]
    secondary_pane: bool,

    /// Print the decorated toolbar state as JSON and exit
    #[arg(long)]
    dump_state: bool,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Loads the config and applies command line overrides.
    fn toolbar_config(&self) -> anyhow::Result<ToolbarConfig> {
        let mut config = match &self.config {
            Some(path) => ToolbarConfig::load_from(path)?,
            None => ToolbarConfig::load(),
        };
        if let Some(prefix) = &self.prefix {
            config.prefix = Some(prefix.clone());
        }
        config.experimental |= self.experimental;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    tracing::info!("Starting Codestrip v{}", env!("CARGO_PKG_VERSION"));

    let config = args.toolbar_config()?;

    if args.dump_state {
        let editor = Arc::new(DemoEditor::default());
        let collaborators = Collaborators::new()
            .with_editor(editor.clone())
            .with_layout(Arc::new(DemoLayout::default()));
        let mode = args
            .file
            .as_deref()
            .map(mime_for_path)
            .unwrap_or(MimeType::Html);
        let toolbar = build_toolbar(&config, collaborators, editor, mode);
        println!("{}", toolbar.snapshot().to_json()?);
        return Ok(());
    }

    let flags = Flags {
        file: args.file,
        config,
        secondary_pane: args.secondary_pane,
    };

    run(flags).map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
