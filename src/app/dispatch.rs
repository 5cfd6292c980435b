use anyhow::{Context, Result, bail};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use wedding_blueprint::Config;
use wedding_blueprint::config::OutputFormat;
use wedding_blueprint::core::assembly::{AdjacentVariant, Assembler, Blueprint};
use wedding_blueprint::core::axes::{AxisVector, PartialAxisVector};
use wedding_blueprint::core::component::Section;
use wedding_blueprint::core::library::ContentLibraries;
use wedding_blueprint::core::presets::{Preset, resolve_preset};
use wedding_blueprint::journal::{
    GenerationEntry, GenerationJournal, JsonFileJournal, record_best_effort,
};

use crate::app::render::{
    render_adjacent, render_blueprint, render_history, render_libraries, render_presets,
};
use crate::cli::commands::{Cli, Commands, VectorArgs};

#[derive(Serialize)]
struct GenerateOutput<'a> {
    blueprint: &'a Blueprint,
    #[serde(skip_serializing_if = "Option::is_none")]
    adjacent: Option<&'a AdjacentVariant>,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to serialize output")?
    );
    Ok(())
}

fn library_source(config: &Config) -> String {
    config
        .libraries
        .dir
        .as_ref()
        .map_or_else(|| "built-in".to_string(), |dir| dir.display().to_string())
}

pub fn load_libraries(config: &Config) -> Result<ContentLibraries> {
    match &config.libraries.dir {
        Some(dir) => ContentLibraries::from_dir(dir)
            .with_context(|| format!("Failed to load content libraries from {}", dir.display())),
        None => ContentLibraries::builtin().context("Built-in content libraries are invalid"),
    }
}

/// Validated answers: every axis present and every value legal.
fn read_vector(input: &VectorArgs) -> Result<(PartialAxisVector, AxisVector)> {
    let answers = input.answers()?;
    let vector = AxisVector::try_from(answers).context("Incomplete axis vector")?;
    Ok((answers, vector))
}

fn run_generate(
    config: &Config,
    assembler: &Assembler,
    format: OutputFormat,
    input: &VectorArgs,
    with_adjacent: bool,
    no_journal: bool,
) -> Result<()> {
    let (answers, vector) = read_vector(input)?;
    let blueprint = assembler.assemble_blueprint(&vector)?;
    let adjacent = if with_adjacent {
        Some(assembler.assemble_adjacent_variant(&vector, &blueprint.conflicts)?)
    } else {
        None
    };

    // Only a generation that completes is journaled.
    if config.journal.enabled && !no_journal {
        let journal = JsonFileJournal::new(config.journal_path(), config.journal.capacity);
        record_best_effort(
            &journal,
            GenerationEntry::from_blueprint(answers, &blueprint, Utc::now()),
        );
    }

    match format {
        OutputFormat::Json => print_json(&GenerateOutput {
            blueprint: &blueprint,
            adjacent: adjacent.as_ref(),
        }),
        OutputFormat::Text => {
            let preset = blueprint
                .resolved_preset
                .as_deref()
                .and_then(|id| assembler.libraries().preset(id));
            println!("{}", render_blueprint(&blueprint, preset));
            if let Some(variant) = &adjacent {
                println!();
                println!("{}", render_adjacent(variant, &vector));
            }
            Ok(())
        }
    }
}

fn run_adjacent(assembler: &Assembler, format: OutputFormat, input: &VectorArgs) -> Result<()> {
    let (_, vector) = read_vector(input)?;
    // The variant is driven by the conflicts of the full blueprint.
    let blueprint = assembler.assemble_blueprint(&vector)?;
    let variant = assembler.assemble_adjacent_variant(&vector, &blueprint.conflicts)?;
    match format {
        OutputFormat::Json => print_json(&variant),
        OutputFormat::Text => {
            println!("{}", render_adjacent(&variant, &vector));
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct PresetsOutput<'a> {
    presets: &'a [Preset],
    #[serde(skip_serializing_if = "Option::is_none")]
    resolved: Option<Option<&'a str>>,
}

fn run_presets(libraries: &ContentLibraries, format: OutputFormat, input: &VectorArgs) -> Result<()> {
    let resolved = if input.is_empty() {
        None
    } else {
        let (_, vector) = read_vector(input)?;
        Some(resolve_preset(&libraries.presets, &vector))
    };
    match format {
        OutputFormat::Json => print_json(&PresetsOutput {
            presets: &libraries.presets,
            resolved,
        }),
        OutputFormat::Text => {
            println!("{}", render_presets(&libraries.presets, resolved));
            Ok(())
        }
    }
}

fn run_history(config: &Config, format: OutputFormat, limit: usize) -> Result<()> {
    let journal = JsonFileJournal::new(config.journal_path(), config.journal.capacity);
    let entries = journal
        .entries()
        .with_context(|| format!("Failed to read journal: {}", journal.path().display()))?;
    let recent = &entries[entries.len().saturating_sub(limit)..];
    match format {
        OutputFormat::Json => print_json(&recent),
        OutputFormat::Text => {
            println!("{}", render_history(recent));
            Ok(())
        }
    }
}

pub fn dispatch(cli: Cli, config: Config) -> Result<()> {
    let format = cli.format.unwrap_or(config.output.format);

    if let Commands::History { limit } = &cli.command {
        if *limit == 0 {
            bail!("--limit must be at least 1");
        }
        return run_history(&config, format, *limit);
    }

    let libraries = Arc::new(load_libraries(&config)?);
    info!(
        source = %library_source(&config),
        presets = libraries.presets.len(),
        "loaded content libraries"
    );
    let assembler = Assembler::new(Arc::clone(&libraries));

    match cli.command {
        Commands::Generate {
            input,
            adjacent,
            no_journal,
        } => run_generate(&config, &assembler, format, &input, adjacent, no_journal),
        Commands::Adjacent { input } => run_adjacent(&assembler, format, &input),
        Commands::Presets { input } => run_presets(&libraries, format, &input),
        Commands::Libraries => match format {
            OutputFormat::Json => print_json(&serde_json::json!({
                "source": library_source(&config),
                "palette": libraries.component_ids(Section::Palette),
                "typography": libraries.component_ids(Section::Typography),
                "paper_print": libraries.component_ids(Section::PaperPrint),
                "florals": libraries.component_ids(Section::Florals),
                "signage": libraries.component_ids(Section::Signage),
                "presets": libraries.presets.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            })),
            OutputFormat::Text => {
                println!("{}", render_libraries(&libraries, &library_source(&config)));
                Ok(())
            }
        },
        Commands::History { .. } => Ok(()),
    }
}
