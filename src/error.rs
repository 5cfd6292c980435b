use thiserror::Error;

use crate::core::axes::AxisName;
use crate::core::component::Section;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for the blueprint engine.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide recovery strategy; the CLI layer uses `anyhow::Result` for
/// ad-hoc context chains.
#[derive(Debug, Error)]
pub enum BlueprintError {
    // ── Assembly ─────────────────────────────────────────────────────────
    #[error("assembly: {0}")]
    Assembly(#[from] AssemblyError),

    // ── Content libraries ───────────────────────────────────────────────
    #[error("library: {0}")]
    Library(#[from] LibraryError),

    // ── Input validation ────────────────────────────────────────────────
    #[error("validation: {0}")]
    Validation(#[from] ValidationError),

    // ── Config ──────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Journal ─────────────────────────────────────────────────────────
    #[error("journal: {0}")]
    Journal(#[from] JournalError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Assembly errors ─────────────────────────────────────────────────────────

/// A library had nothing eligible for the requested vector. No partial
/// blueprint is ever returned alongside this.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("no eligible {section} component for the given axis vector")]
    NoEligibleComponent { section: Section },
}

// ─── Validation errors ───────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing axes: {}", join_axes(.0))]
    MissingAxes(Vec<AxisName>),

    #[error("invalid value {value:?} for axis {axis}")]
    InvalidValue { axis: AxisName, value: String },

    #[error("formality {0} is outside 1..=5")]
    FormalityOutOfRange(u8),
}

fn join_axes(axes: &[AxisName]) -> String {
    axes.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// ─── Library errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("failed to parse {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    #[error("{section} library is empty")]
    Empty { section: Section },

    #[error("duplicate id {id} in {section} library")]
    DuplicateId { section: Section, id: String },

    #[error("component {id} is tagged {found} but lives in the {section} library")]
    SectionMismatch {
        section: Section,
        id: String,
        found: Section,
    },

    #[error("component {id} has invalid formality tag: {reason}")]
    InvalidFormality { id: String, reason: String },

    #[error("expected {expected} presets, found {found}")]
    PresetCount { expected: usize, found: usize },

    #[error("duplicate preset id {0}")]
    DuplicatePreset(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Journal errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("journal file {path} is corrupt: {message}")]
    Corrupt { path: String, message: String },

    #[error("serialize: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, BlueprintError>;
