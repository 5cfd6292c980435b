use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::assembly::Blueprint;
use crate::core::axes::{AxisVector, PartialAxisVector};
use crate::core::component::Section;
use crate::core::conflicts::{MajorConflict, MinorTension};

// GenerationEntry: one successful assembly as it lands in the journal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationEntry {
    pub timestamp: DateTime<Utc>,
    /// Answers as the user gave them, before validation.
    pub input_answers: PartialAxisVector,
    pub axis_vector: AxisVector,
    pub chosen_component_ids: BTreeMap<Section, String>,
    pub conflicts: Vec<MajorConflict>,
    pub tensions: Vec<MinorTension>,
    #[serde(default)]
    pub resolved_preset: Option<String>,
}

impl GenerationEntry {
    pub fn from_blueprint(
        input_answers: PartialAxisVector,
        blueprint: &Blueprint,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let sections = &blueprint.sections;
        let chosen_component_ids = [
            (Section::Palette, &sections.palette.id),
            (Section::Typography, &sections.typography.id),
            (Section::PaperPrint, &sections.paper_print.id),
            (Section::Florals, &sections.florals.id),
            (Section::Signage, &sections.signage.id),
        ]
        .into_iter()
        .map(|(section, id)| (section, id.clone()))
        .collect();

        Self {
            timestamp,
            input_answers,
            axis_vector: blueprint.axis_vector,
            chosen_component_ids,
            conflicts: blueprint.conflicts.major.clone(),
            tensions: blueprint.conflicts.minor.clone(),
            resolved_preset: blueprint.resolved_preset.clone(),
        }
    }
}
