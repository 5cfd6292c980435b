//! Blueprint assembly: the two entry points the presentation layer calls.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::adjacent::{adjacent_implications, build_adjacent_shift};
use super::axes::{AxisVector, PartialAxisVector};
use super::component::{
    Component, FloralsComponent, PaletteComponent, PaperPrintComponent, Section, SignageComponent,
    TypographyComponent,
};
use super::conflicts::{ConflictResult, detect_conflicts};
use super::guidance::generate_do_avoid;
use super::library::ContentLibraries;
use super::presets::resolve_preset;
use super::selector::select;
use crate::error::AssemblyError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlueprintSections {
    pub palette: PaletteComponent,
    pub typography: TypographyComponent,
    pub paper_print: PaperPrintComponent,
    pub florals: FloralsComponent,
    pub signage: SignageComponent,
}

impl BlueprintSections {
    /// Selected ids in section order.
    pub fn ids(&self) -> [&str; 5] {
        [
            self.palette.id.as_str(),
            self.typography.id.as_str(),
            self.paper_print.id.as_str(),
            self.florals.id.as_str(),
            self.signage.id.as_str(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    pub axis_vector: AxisVector,
    pub resolved_preset: Option<String>,
    pub sections: BlueprintSections,
    pub conflicts: ConflictResult,
    pub do_list: Vec<String>,
    pub avoid_list: Vec<String>,
}

/// Florals and signage are not re-selected for a variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjacentSections {
    pub palette: PaletteComponent,
    pub typography: TypographyComponent,
    pub paper_print: PaperPrintComponent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjacentVariant {
    pub shifted_axes: PartialAxisVector,
    pub sections: AdjacentSections,
    pub implications: [String; 3],
}

fn select_required<D: Clone>(
    library: &[Component<D>],
    vector: &AxisVector,
    section: Section,
) -> Result<Component<D>, AssemblyError> {
    select(library, vector)
        .cloned()
        .ok_or(AssemblyError::NoEligibleComponent { section })
}

/// Runs the assembly pipeline over a shared, immutable set of libraries.
#[derive(Debug, Clone)]
pub struct Assembler {
    libraries: Arc<ContentLibraries>,
}

impl Assembler {
    pub fn new(libraries: Arc<ContentLibraries>) -> Self {
        Self { libraries }
    }

    pub fn libraries(&self) -> &ContentLibraries {
        &self.libraries
    }

    /// Selects one component per section, detects conflicts, resolves a
    /// preset and derives do/avoid guidance. Fails without a partial result
    /// when any section has nothing eligible.
    pub fn assemble_blueprint(&self, vector: &AxisVector) -> Result<Blueprint, AssemblyError> {
        let libraries = &self.libraries;
        let sections = BlueprintSections {
            palette: select_required(&libraries.palette, vector, Section::Palette)?,
            typography: select_required(&libraries.typography, vector, Section::Typography)?,
            paper_print: select_required(&libraries.paper_print, vector, Section::PaperPrint)?,
            florals: select_required(&libraries.florals, vector, Section::Florals)?,
            signage: select_required(&libraries.signage, vector, Section::Signage)?,
        };

        let conflicts = detect_conflicts(vector, &sections.palette, &sections.florals);
        let resolved_preset = resolve_preset(&libraries.presets, vector).map(str::to_string);
        let guidance = generate_do_avoid(vector, &conflicts);

        info!(
            preset = resolved_preset.as_deref().unwrap_or("custom"),
            major = conflicts.major.len(),
            minor = conflicts.minor.len(),
            "assembled blueprint"
        );

        Ok(Blueprint {
            axis_vector: *vector,
            resolved_preset,
            sections,
            conflicts,
            do_list: guidance.do_list,
            avoid_list: guidance.avoid_list,
        })
    }

    /// Shifts one or two axes one step, re-selects the print-facing sections
    /// against the shifted vector and writes three implication notes.
    pub fn assemble_adjacent_variant(
        &self,
        vector: &AxisVector,
        conflicts: &ConflictResult,
    ) -> Result<AdjacentVariant, AssemblyError> {
        let shifted_axes = build_adjacent_shift(vector, conflicts);
        let shifted = vector.with_shifts(&shifted_axes);
        let libraries = &self.libraries;

        let sections = AdjacentSections {
            palette: select_required(&libraries.palette, &shifted, Section::Palette)?,
            typography: select_required(&libraries.typography, &shifted, Section::Typography)?,
            paper_print: select_required(&libraries.paper_print, &shifted, Section::PaperPrint)?,
        };

        info!(axes = ?shifted_axes.axes(), "assembled adjacent variant");

        Ok(AdjacentVariant {
            implications: adjacent_implications(&shifted_axes),
            shifted_axes,
            sections,
        })
    }
}
