//! Charm-style CLI prompts using cliclack

use crate::component::{validate, ComponentName, OptionKey, OptionSet};
use crate::product::{generator_for, ProductConfig};
use crate::structure::{self, ComponentPlan, LocalFs};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Component name; prompted for when missing
    pub name: Option<String>,

    /// Directory (or a file inside it) to create the component in
    pub directory: Option<PathBuf>,

    /// Options given on the command line; prompted for when missing
    pub options: Option<OptionSet>,

    /// Print the plan instead of writing files
    pub dry_run: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    if config.use_packages() {
        cliclack::log::info(format!(
            "Components are typed with CFC from {}",
            config.packages_module()
        ))?;
    }

    // Step 1: Component name
    let name = select_name(&args)?;

    // Step 2: Options
    let options = select_options(&args)?;

    // Step 3: Target directory
    let target_dir = select_directory(&args)?;

    let plan = ComponentPlan::new(&generator_for(config, name, options));

    if args.dry_run {
        show_plan(&plan, &target_dir)?;
        cliclack::outro("Dry run complete, nothing was written")?;
        return Ok(());
    }

    // Step 4: Create component
    create_component(&plan, &target_dir).await?;

    cliclack::outro("Happy coding!")?;

    Ok(())
}

fn select_name(args: &CreateArgs) -> Result<ComponentName> {
    if let Some(input) = &args.name {
        let name = validate(input)?;
        cliclack::log::info(format!("Component: {}", name))?;
        return Ok(name);
    }

    if args.yes {
        anyhow::bail!("A component name is required in non-interactive mode.");
    }

    let input: String = cliclack::input("Component name")
        .placeholder("Button")
        .validate(|input: &String| match validate(input) {
            Ok(_) => Ok(()),
            Err(err) => Err(err.to_string()),
        })
        .interact()?;

    Ok(validate(&input)?)
}

fn select_options(args: &CreateArgs) -> Result<OptionSet> {
    let options = if let Some(options) = args.options {
        options
    } else if args.yes {
        OptionSet::default()
    } else {
        let defaults = OptionSet::default();
        let mut multi = cliclack::multiselect("Component options");
        for key in OptionKey::ALL {
            multi = multi.item(key, key.label(), "");
        }

        let selected: Vec<OptionKey> = multi
            .initial_values(defaults.enabled())
            .required(false)
            .interact()?;

        OptionSet::from_enabled(selected)
    };

    let labels: Vec<&str> = options.enabled().iter().map(|key| key.label()).collect();
    if labels.is_empty() {
        cliclack::log::info("Options: none")?;
    } else {
        cliclack::log::info(format!("Options: {}", labels.join(", ")))?;
    }

    Ok(options)
}

fn select_directory(args: &CreateArgs) -> Result<PathBuf> {
    let current_dir =
        std::env::current_dir().context("Failed to determine the current directory")?;

    let location = match &args.directory {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    };

    let target_dir = structure::resolve_target_dir(&location);
    cliclack::log::info(format!("Using directory: {}", target_dir.display()))?;

    Ok(target_dir)
}

async fn create_component(plan: &ComponentPlan, target_dir: &Path) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Creating component...");

    match structure::write_component(plan, target_dir, &mut LocalFs).await {
        Ok(created) => {
            spinner.stop(format!(
                "Created {} ({} entries) in {}",
                plan.component_dir().display(),
                created.len(),
                target_dir.display()
            ));
            for file in plan.files() {
                cliclack::log::step(file.display())?;
            }
            Ok(())
        }
        Err(e) => {
            spinner.stop("Failed to create component");
            cliclack::log::error(format!("{}", e))?;
            Err(e).with_context(|| {
                format!(
                    "Component creation aborted in {}",
                    target_dir.display()
                )
            })
        }
    }
}

fn show_plan(plan: &ComponentPlan, target_dir: &Path) -> Result<()> {
    let (title, body) = plan_note(plan, target_dir)?;
    cliclack::note(title, body)?;
    Ok(())
}

/// Title and YAML body of the dry-run note
fn plan_note(plan: &ComponentPlan, target_dir: &Path) -> Result<(String, String)> {
    let yaml = plan
        .to_yaml()
        .context("Failed to render the component plan")?;
    let title = format!(
        "Dry run: {} in {}",
        plan.component_dir().display(),
        target_dir.display()
    );
    Ok((title, yaml.trim_end().to_string()))
}
