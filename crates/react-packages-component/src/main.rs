//! Packages component CLI - Component scaffolding typed with the shared CFC type

use anyhow::Result;
use clap::{Parser, Subcommand};
use component_core::tui::CreateArgs;
use component_core::{OptionFlags, ProductConfig};
use std::path::PathBuf;

/// Shared-packages product configuration
#[derive(Clone)]
pub struct PackagesComponentConfig;

impl ProductConfig for PackagesComponentConfig {
    fn name(&self) -> &'static str {
        "create-packages-component"
    }

    fn display_name(&self) -> &'static str {
        "Create Packages Component"
    }

    fn cli_description(&self) -> &'static str {
        "CLI for scaffolding React components typed with shared packages"
    }

    fn use_packages(&self) -> bool {
        true
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-packages-component")]
#[command(about = PackagesComponentConfig.cli_description())]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new component
    Create(CliCreateArgs),
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Component name (upper-case start, latin letters and digits, longer than 3 characters)
    pub name: Option<String>,

    /// Directory to create the component in; a file path uses its parent directory
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    #[command(flatten)]
    pub options: OptionFlags,

    /// Show the files that would be created without writing them
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            options: args.options.to_options(),
            name: args.name,
            directory: args.directory,
            dry_run: args.dry_run,
            yes: args.yes,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = PackagesComponentConfig;

    let create_args = match args.command {
        Some(Command::Create(create_args)) => create_args.into(),
        // No subcommand provided, default to create behavior (interactive mode)
        None => CreateArgs::default(),
    };

    let result = component_core::run(&config, create_args).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
