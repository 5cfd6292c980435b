use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use wedding_blueprint::config::OutputFormat;
use wedding_blueprint::core::{AxisName, PartialAxisVector};

/// `wbg` - deterministic wedding design blueprints from an eight-axis style vector.
#[derive(Parser, Debug)]
#[command(name = "wbg")]
#[command(version)]
#[command(about = "Assemble a wedding design blueprint from a style vector.", long_about = None)]
pub struct Cli {
    /// Log scoring and selection decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of ~/.wbg/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (overrides [output] format)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble a full blueprint
    Generate {
        #[command(flatten)]
        input: VectorArgs,

        /// Also build the adjacent variant
        #[arg(long)]
        adjacent: bool,

        /// Skip recording this generation in the journal
        #[arg(long)]
        no_journal: bool,
    },

    /// Show only the adjacent variant for a vector
    Adjacent {
        #[command(flatten)]
        input: VectorArgs,
    },

    /// List the design lanes, and which one a vector resolves to
    Presets {
        #[command(flatten)]
        input: VectorArgs,
    },

    /// Show recent journal entries
    History {
        /// Number of most recent entries to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Validate the configured content libraries and list component ids
    Libraries,
}

/// Axis answers. Flags override values read from `--vector`.
#[derive(Args, Debug, Default, Clone)]
pub struct VectorArgs {
    /// JSON file holding (possibly partial) axis answers
    #[arg(long, value_name = "FILE")]
    pub vector: Option<PathBuf>,

    /// Formality level, 1 (relaxed) to 5 (black tie)
    #[arg(long)]
    pub formality: Option<String>,

    /// restrained | balanced | expressive
    #[arg(long)]
    pub mood: Option<String>,

    /// minimal | layered | rich
    #[arg(long)]
    pub texture: Option<String>,

    /// warm | cool | neutral
    #[arg(long)]
    pub temperature: Option<String>,

    /// organic | balanced | architectural
    #[arg(long)]
    pub shape: Option<String>,

    /// meadow | sculptural | classic_dome
    #[arg(long)]
    pub floral_form: Option<String>,

    /// cool | warm | mixed
    #[arg(long)]
    pub metal: Option<String>,

    /// airy | layered | dramatic
    #[arg(long)]
    pub light: Option<String>,
}

impl VectorArgs {
    fn flags(&self) -> [(AxisName, Option<&str>); 8] {
        [
            (AxisName::Formality, self.formality.as_deref()),
            (AxisName::Mood, self.mood.as_deref()),
            (AxisName::Texture, self.texture.as_deref()),
            (AxisName::Temperature, self.temperature.as_deref()),
            (AxisName::Shape, self.shape.as_deref()),
            (AxisName::FloralForm, self.floral_form.as_deref()),
            (AxisName::Metal, self.metal.as_deref()),
            (AxisName::Light, self.light.as_deref()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.vector.is_none() && self.flags().iter().all(|(_, raw)| raw.is_none())
    }

    /// Raw answers, each value checked but completeness not yet enforced.
    pub fn answers(&self) -> Result<PartialAxisVector> {
        let mut answers = match &self.vector {
            Some(path) => {
                let contents = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read vector file: {}", path.display()))?;
                serde_json::from_str(&contents)
                    .with_context(|| format!("Failed to parse vector file: {}", path.display()))?
            }
            None => PartialAxisVector::default(),
        };
        for (axis, raw) in self.flags() {
            if let Some(raw) = raw {
                answers.set(axis, raw)?;
            }
        }
        Ok(answers)
    }
}
