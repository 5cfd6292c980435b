//! Content libraries: the five component sets plus the preset list.
//!
//! The built-in set is embedded at compile time. A directory holding the same
//! six files can replace it; both paths go through the same validation.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use super::axes::{FORMALITY_MAX, FORMALITY_MIN};
use super::component::{
    Component, FloralsComponent, FormalityTag, PaletteComponent, PaperPrintComponent, Section,
    SignageComponent, TypographyComponent,
};
use super::presets::Preset;
use crate::error::LibraryError;

pub const PRESET_COUNT: usize = 5;

const PRESETS_FILE: &str = "presets.json";

const BUILTIN_PALETTE: &str = include_str!("../../data/palette.json");
const BUILTIN_TYPOGRAPHY: &str = include_str!("../../data/typography.json");
const BUILTIN_PAPER_PRINT: &str = include_str!("../../data/paper_print.json");
const BUILTIN_FLORALS: &str = include_str!("../../data/florals.json");
const BUILTIN_SIGNAGE: &str = include_str!("../../data/signage.json");
const BUILTIN_PRESETS: &str = include_str!("../../data/presets.json");

/// Raw JSON for each library, keyed by the name used in error messages.
#[derive(Debug, Clone, Copy)]
pub struct LibrarySources<'a> {
    pub palette: &'a str,
    pub typography: &'a str,
    pub paper_print: &'a str,
    pub florals: &'a str,
    pub signage: &'a str,
    pub presets: &'a str,
}

impl LibrarySources<'static> {
    pub fn builtin() -> Self {
        Self {
            palette: BUILTIN_PALETTE,
            typography: BUILTIN_TYPOGRAPHY,
            paper_print: BUILTIN_PAPER_PRINT,
            florals: BUILTIN_FLORALS,
            signage: BUILTIN_SIGNAGE,
            presets: BUILTIN_PRESETS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentLibraries {
    pub palette: Vec<PaletteComponent>,
    pub typography: Vec<TypographyComponent>,
    pub paper_print: Vec<PaperPrintComponent>,
    pub florals: Vec<FloralsComponent>,
    pub signage: Vec<SignageComponent>,
    pub presets: Vec<Preset>,
}

pub fn file_name(section: Section) -> String {
    format!("{section}.json")
}

fn parse<T: DeserializeOwned>(source_name: &str, text: &str) -> Result<T, LibraryError> {
    serde_json::from_str(text).map_err(|error| LibraryError::Parse {
        source_name: source_name.to_string(),
        message: error.to_string(),
    })
}

fn validate_formality_tag(id: &str, tag: FormalityTag) -> Result<(), LibraryError> {
    let in_range = |level: u8| (FORMALITY_MIN..=FORMALITY_MAX).contains(&level);
    let reason = match tag {
        FormalityTag::Exact(level) if !in_range(level) => format!("level {level} is outside 1..=5"),
        FormalityTag::Range(min, max) if !in_range(min) || !in_range(max) => {
            format!("range [{min}, {max}] is outside 1..=5")
        }
        FormalityTag::Range(min, max) if min > max => format!("range [{min}, {max}] is inverted"),
        _ => return Ok(()),
    };
    Err(LibraryError::InvalidFormality {
        id: id.to_string(),
        reason,
    })
}

fn validate_section<D>(section: Section, components: &[Component<D>]) -> Result<(), LibraryError> {
    if components.is_empty() {
        return Err(LibraryError::Empty { section });
    }
    let mut seen = HashSet::new();
    for component in components {
        if component.section != section {
            return Err(LibraryError::SectionMismatch {
                section,
                id: component.id.clone(),
                found: component.section,
            });
        }
        if !seen.insert(component.id.as_str()) {
            return Err(LibraryError::DuplicateId {
                section,
                id: component.id.clone(),
            });
        }
        if let Some(tag) = component.axis_tags.formality {
            validate_formality_tag(&component.id, tag)?;
        }
    }
    Ok(())
}

fn validate_presets(presets: &[Preset]) -> Result<(), LibraryError> {
    if presets.len() != PRESET_COUNT {
        return Err(LibraryError::PresetCount {
            expected: PRESET_COUNT,
            found: presets.len(),
        });
    }
    let mut seen = HashSet::new();
    for preset in presets {
        if !seen.insert(preset.id.as_str()) {
            return Err(LibraryError::DuplicatePreset(preset.id.clone()));
        }
    }
    Ok(())
}

impl ContentLibraries {
    /// The embedded libraries shipped with the binary.
    pub fn builtin() -> Result<Self, LibraryError> {
        Self::from_sources(LibrarySources::builtin())
    }

    pub fn from_sources(sources: LibrarySources<'_>) -> Result<Self, LibraryError> {
        let libraries = Self {
            palette: parse(&file_name(Section::Palette), sources.palette)?,
            typography: parse(&file_name(Section::Typography), sources.typography)?,
            paper_print: parse(&file_name(Section::PaperPrint), sources.paper_print)?,
            florals: parse(&file_name(Section::Florals), sources.florals)?,
            signage: parse(&file_name(Section::Signage), sources.signage)?,
            presets: parse(PRESETS_FILE, sources.presets)?,
        };
        libraries.validate()?;
        Ok(libraries)
    }

    /// Loads `palette.json`, `typography.json`, `paper_print.json`,
    /// `florals.json`, `signage.json` and `presets.json` from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, LibraryError> {
        let read = |name: String| fs::read_to_string(dir.join(name));
        let palette = read(file_name(Section::Palette))?;
        let typography = read(file_name(Section::Typography))?;
        let paper_print = read(file_name(Section::PaperPrint))?;
        let florals = read(file_name(Section::Florals))?;
        let signage = read(file_name(Section::Signage))?;
        let presets = read(PRESETS_FILE.to_string())?;

        tracing::debug!(dir = %dir.display(), "loading content libraries from directory");

        Self::from_sources(LibrarySources {
            palette: &palette,
            typography: &typography,
            paper_print: &paper_print,
            florals: &florals,
            signage: &signage,
            presets: &presets,
        })
    }

    pub fn validate(&self) -> Result<(), LibraryError> {
        validate_section(Section::Palette, &self.palette)?;
        validate_section(Section::Typography, &self.typography)?;
        validate_section(Section::PaperPrint, &self.paper_print)?;
        validate_section(Section::Florals, &self.florals)?;
        validate_section(Section::Signage, &self.signage)?;
        for component in &self.florals {
            let native = component.details.native_formality;
            if !(FORMALITY_MIN..=FORMALITY_MAX).contains(&native) {
                return Err(LibraryError::InvalidFormality {
                    id: component.id.clone(),
                    reason: format!("native formality {native} is outside 1..=5"),
                });
            }
        }
        validate_presets(&self.presets)
    }

    pub fn preset(&self, id: &str) -> Option<&Preset> {
        self.presets.iter().find(|preset| preset.id == id)
    }

    /// Component ids of one section, in file order.
    pub fn component_ids(&self, section: Section) -> Vec<&str> {
        fn ids<D>(components: &[Component<D>]) -> Vec<&str> {
            components.iter().map(|c| c.id.as_str()).collect()
        }
        match section {
            Section::Palette => ids(&self.palette),
            Section::Typography => ids(&self.typography),
            Section::PaperPrint => ids(&self.paper_print),
            Section::Florals => ids(&self.florals),
            Section::Signage => ids(&self.signage),
        }
    }
}
