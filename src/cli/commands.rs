//! Command dispatch

use std::fs;
use std::io::{self, IsTerminal, Read};

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::{ViewKind, Visualization, Visualizer};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, OutputFormat, Settings};
use crate::render::{render_array, TreeRender, MAX_TEXT_DEPTH};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = load_settings(cli)?;
    if !settings.color {
        output::disable_colors();
    }

    match &cli.command {
        Some(Commands::Config { command }) => execute_config(command, &settings),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        Some(command) => match command.view() {
            Some((kind, numbers)) => _visualize(kind, numbers, settings),
            None => Ok(()),
        },
        None => Ok(()),
    }
}

/// Settings from config layers, then command line overrides on top.
fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        settings.format = format;
    }
    if cli.no_color {
        settings.color = false;
    }
    if let Some(Commands::Heap {
        strategy: Some(strategy),
        ..
    }) = &cli.command
    {
        settings.heap_strategy = *strategy;
    }
    debug!("settings: {:?}", settings);
    Ok(settings)
}

#[instrument(skip(settings))]
fn _visualize(kind: ViewKind, numbers: &[String], settings: Settings) -> CliResult<()> {
    let text = if numbers.is_empty() {
        read_stdin()?
    } else {
        numbers.join(" ")
    };

    let visualizer = Visualizer::new(settings);
    let vis = visualizer.visualize(kind, &text)?;

    match visualizer.settings().format {
        OutputFormat::Json => output::info(&vis.to_json()?),
        OutputFormat::Text => print_text(&vis, visualizer.settings()),
    }
    Ok(())
}

fn read_stdin() -> CliResult<String> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(CliError::InvalidArgs(
            "no numbers given and nothing piped on stdin".to_string(),
        ));
    }
    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .map_err(|e| CliError::io("read stdin", e))?;
    Ok(text)
}

fn print_text(vis: &Visualization, settings: &Settings) {
    output::header(&format!("array ({})", vis.input.len()));
    output::info(&render_array(&vis.input, settings.show_indices));

    if let Some(strategy) = vis.heap_strategy {
        output::header(&format!("max-heap ({})", strategy));
        output::info(&render_array(&vis.sequence, settings.show_indices));
    }

    if let Some(tree) = &vis.tree {
        output::header(&vis.kind);
        output::info(&tree.to_termtree_limited(MAX_TEXT_DEPTH));
        let depth = tree.depth();
        if depth > MAX_TEXT_DEPTH {
            output::detail(
                "note",
                &format!(
                    "showing {} of {} levels, use --format json for the full tree",
                    MAX_TEXT_DEPTH, depth
                ),
            );
        }
        output::detail("depth", &depth);
        output::detail("leaves", &tree.leaf_values().iter().join(" "));
    }
}

fn execute_config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => {
                    let state = if path.exists() { "exists" } else { "not found" };
                    output::action("global", &format!("{} ({})", path.display(), state));
                }
                None => output::action("global", &"no config directory on this platform"),
            }
            Ok(())
        }
        ConfigCommands::Init { force } => {
            let path = global_config_path().ok_or_else(|| {
                CliError::InvalidArgs("no config directory on this platform".to_string())
            })?;
            if path.exists() && !force {
                return Err(CliError::InvalidArgs(format!(
                    "config already exists: {} (use --force to overwrite)",
                    path.display()
                )));
            }
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)
                    .map_err(|e| CliError::io(format!("create {}", dir.display()), e))?;
            }
            fs::write(&path, Settings::template())
                .map_err(|e| CliError::io(format!("write {}", path.display()), e))?;
            output::action("Created", &path.display());
            Ok(())
        }
    }
}
