//! Conflict detection over an axis vector and its palette/florals selections.
//!
//! Major conflicts are design-breaking; minor tensions are intentional
//! contrasts that get a prose note instead of a fix.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

use super::axes::{AxisVector, FloralForm, Light, Metal, Mood, Shape, Temperature, Texture};
use super::component::{FloralsComponent, PaletteComponent};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
    EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum MajorConflict {
    TemperaturePaletteMismatch,
    ShapeMismatch,
    MoodMismatch,
    FormalityGap,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
    EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum MinorTension {
    MetalTemperatureTension,
    LightMoodContrastTension,
    // Part of the closed key set; no detection rule emits it.
    TextureFormalityTension,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictResult {
    pub major: Vec<MajorConflict>,
    pub minor: Vec<MinorTension>,
    pub design_tension_notes: Vec<String>,
}

impl ConflictResult {
    pub fn has_major(&self, kind: MajorConflict) -> bool {
        self.major.contains(&kind)
    }

    pub fn has_minor(&self, kind: MinorTension) -> bool {
        self.minor.contains(&kind)
    }
}

const FORMALITY_GAP_THRESHOLD: u8 = 2;

// ── Vector-only rules ────────────────────────────────────────────────────────

/// Organic shape with sculptural florals, or architectural with meadow.
pub fn shape_mismatch(vector: &AxisVector) -> bool {
    matches!(
        (vector.shape, vector.floral_form),
        (Shape::Organic, FloralForm::Sculptural) | (Shape::Architectural, FloralForm::Meadow)
    )
}

/// Expressive mood on a minimal texture, or restrained mood on a rich one.
pub fn mood_mismatch(vector: &AxisVector) -> bool {
    matches!(
        (vector.mood, vector.texture),
        (Mood::Expressive, Texture::Minimal) | (Mood::Restrained, Texture::Rich)
    )
}

pub fn metal_temperature_tension(vector: &AxisVector) -> bool {
    matches!(
        (vector.temperature, vector.metal),
        (Temperature::Warm, Metal::Cool) | (Temperature::Cool, Metal::Warm)
    )
}

pub fn light_mood_tension(vector: &AxisVector) -> bool {
    matches!(
        (vector.light, vector.mood),
        (Light::Airy, Mood::Expressive) | (Light::Dramatic, Mood::Restrained)
    )
}

/// Major conflicts that depend on the vector alone, in detection order.
pub fn vector_major_conflicts(vector: &AxisVector) -> Vec<MajorConflict> {
    let mut major = Vec::new();
    if shape_mismatch(vector) {
        major.push(MajorConflict::ShapeMismatch);
    }
    if mood_mismatch(vector) {
        major.push(MajorConflict::MoodMismatch);
    }
    major
}

/// Minor tensions in detection order: metal first, light second.
pub fn vector_minor_tensions(vector: &AxisVector) -> Vec<MinorTension> {
    let mut minor = Vec::new();
    if metal_temperature_tension(vector) {
        minor.push(MinorTension::MetalTemperatureTension);
    }
    if light_mood_tension(vector) {
        minor.push(MinorTension::LightMoodContrastTension);
    }
    minor
}

// ── Selection-dependent rules ────────────────────────────────────────────────

fn palette_temperature_mismatch(vector: &AxisVector, palette: &PaletteComponent) -> bool {
    palette
        .axis_tags
        .temperature
        .is_some_and(|tagged| vector.temperature.opposes(tagged))
}

fn formality_gap(vector: &AxisVector, florals: &FloralsComponent) -> bool {
    vector.formality.distance(florals.details.native_formality) >= FORMALITY_GAP_THRESHOLD
}

pub fn detect_conflicts(
    vector: &AxisVector,
    palette: &PaletteComponent,
    florals: &FloralsComponent,
) -> ConflictResult {
    let mut major = Vec::new();
    if palette_temperature_mismatch(vector, palette) {
        major.push(MajorConflict::TemperaturePaletteMismatch);
    }
    major.extend(vector_major_conflicts(vector));
    if formality_gap(vector, florals) {
        major.push(MajorConflict::FormalityGap);
    }

    let minor = vector_minor_tensions(vector);
    let design_tension_notes = tension_notes(&minor, vector);

    tracing::debug!(?major, ?minor, "detected conflicts");

    ConflictResult {
        major,
        minor,
        design_tension_notes,
    }
}

// ── Tension notes ────────────────────────────────────────────────────────────

const WARM_METAL_ON_COOL: &str = "Warm metal (brass/gold) with a cool palette";
const COOL_METAL_ON_WARM: &str = "Cool metal (silver/chrome) with a warm palette";

const AIRY_EXPRESSIVE_NOTE: &str = "Airy daylight atmosphere with an expressive mood can dilute graphic impact. Consider layering some ambient candlelight at reception to reinforce the boldness.";
const DRAMATIC_RESTRAINED_NOTE: &str = "Dramatic low-light atmosphere with a restrained mood may feel heavy. Keep candle count moderate and favor tall tapers over wide pillars.";

fn metal_note(vector: &AxisVector) -> String {
    let combo = if vector.metal == Metal::Warm {
        WARM_METAL_ON_COOL
    } else {
        COOL_METAL_ON_WARM
    };
    format!(
        "{combo} creates intentional contrast. Use the contrasting metal as a sparingly-placed accent - flatware, a single hardware detail - not the dominant finish."
    )
}

fn light_note(vector: &AxisVector) -> String {
    if vector.light == Light::Airy && vector.mood == Mood::Expressive {
        AIRY_EXPRESSIVE_NOTE.to_string()
    } else {
        DRAMATIC_RESTRAINED_NOTE.to_string()
    }
}

/// One note per fired tension, in the order the tensions were detected.
pub fn tension_notes(minor: &[MinorTension], vector: &AxisVector) -> Vec<String> {
    minor
        .iter()
        .filter_map(|tension| match tension {
            MinorTension::MetalTemperatureTension => Some(metal_note(vector)),
            MinorTension::LightMoodContrastTension => Some(light_note(vector)),
            MinorTension::TextureFormalityTension => None,
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::axes::tests::{balanced_vector, vector};
    use crate::core::component::{
        AxisTags, Compatibility, ContrastLevel, Density, FloralsDetails, PaletteDetails, Section,
    };

    pub(crate) fn palette(temperature: Option<Temperature>) -> PaletteComponent {
        PaletteComponent {
            id: "pal-test".into(),
            name: "Test palette".into(),
            section: Section::Palette,
            axis_tags: AxisTags {
                temperature,
                ..AxisTags::default()
            },
            compatibility: Compatibility::default(),
            details: PaletteDetails {
                swatches: vec!["#ffffff".into()],
                usage_rules: Vec::new(),
                contrast_level: ContrastLevel::Medium,
            },
        }
    }

    pub(crate) fn florals(native_formality: u8) -> FloralsComponent {
        FloralsComponent {
            id: "flo-test".into(),
            name: "Test florals".into(),
            section: Section::Florals,
            axis_tags: AxisTags::default(),
            compatibility: Compatibility::default(),
            details: FloralsDetails {
                key_flowers: vec!["ranunculus".into()],
                foliage: Vec::new(),
                arrangement_style: "loose".into(),
                density: Density::Medium,
                native_formality,
            },
        }
    }

    #[test]
    fn balanced_vector_has_no_conflicts() {
        let result = detect_conflicts(&balanced_vector(), &palette(None), &florals(3));
        assert_eq!(result, ConflictResult::default());
    }

    #[test]
    fn warm_vector_with_cool_palette_is_major() {
        let v = vector(
            3,
            Mood::Balanced,
            Texture::Layered,
            Temperature::Warm,
            Shape::Balanced,
            FloralForm::Sculptural,
            Metal::Cool,
            Light::Layered,
        );
        let result = detect_conflicts(&v, &palette(Some(Temperature::Cool)), &florals(3));
        assert!(result.has_major(MajorConflict::TemperaturePaletteMismatch));
        assert!(result.has_minor(MinorTension::MetalTemperatureTension));
    }

    #[test]
    fn untagged_or_neutral_palette_never_mismatches() {
        let mut v = balanced_vector();
        v.temperature = Temperature::Warm;
        assert!(detect_conflicts(&v, &palette(None), &florals(3)).major.is_empty());
        assert!(
            detect_conflicts(&v, &palette(Some(Temperature::Neutral)), &florals(3))
                .major
                .is_empty()
        );
    }

    #[test]
    fn expressive_minimal_cool_warm_example() {
        let v = vector(
            4,
            Mood::Expressive,
            Texture::Minimal,
            Temperature::Cool,
            Shape::Architectural,
            FloralForm::Sculptural,
            Metal::Warm,
            Light::Dramatic,
        );
        let result = detect_conflicts(&v, &palette(Some(Temperature::Cool)), &florals(4));
        assert_eq!(result.major, vec![MajorConflict::MoodMismatch]);
        assert_eq!(result.minor, vec![MinorTension::MetalTemperatureTension]);
        assert_eq!(result.design_tension_notes.len(), 1);
        assert!(result.design_tension_notes[0].starts_with("Warm metal (brass/gold)"));
    }

    #[test]
    fn shape_mismatch_both_directions() {
        let mut v = balanced_vector();
        v.shape = Shape::Organic;
        v.floral_form = FloralForm::Sculptural;
        assert!(shape_mismatch(&v));
        v.shape = Shape::Architectural;
        v.floral_form = FloralForm::Meadow;
        assert!(shape_mismatch(&v));
        v.floral_form = FloralForm::ClassicDome;
        assert!(!shape_mismatch(&v));
    }

    #[test]
    fn formality_gap_at_two_steps() {
        let v = balanced_vector();
        assert!(!detect_conflicts(&v, &palette(None), &florals(4)).has_major(MajorConflict::FormalityGap));
        assert!(detect_conflicts(&v, &palette(None), &florals(5)).has_major(MajorConflict::FormalityGap));
        assert!(detect_conflicts(&v, &palette(None), &florals(1)).has_major(MajorConflict::FormalityGap));
    }

    #[test]
    fn major_order_is_fixed() {
        let v = vector(
            1,
            Mood::Restrained,
            Texture::Rich,
            Temperature::Warm,
            Shape::Organic,
            FloralForm::Sculptural,
            Metal::Mixed,
            Light::Layered,
        );
        let result = detect_conflicts(&v, &palette(Some(Temperature::Cool)), &florals(5));
        assert_eq!(
            result.major,
            vec![
                MajorConflict::TemperaturePaletteMismatch,
                MajorConflict::ShapeMismatch,
                MajorConflict::MoodMismatch,
                MajorConflict::FormalityGap,
            ]
        );
    }

    #[test]
    fn notes_follow_tension_order() {
        let v = vector(
            3,
            Mood::Restrained,
            Texture::Minimal,
            Temperature::Warm,
            Shape::Balanced,
            FloralForm::Sculptural,
            Metal::Cool,
            Light::Dramatic,
        );
        let result = detect_conflicts(&v, &palette(None), &florals(3));
        assert_eq!(
            result.minor,
            vec![
                MinorTension::MetalTemperatureTension,
                MinorTension::LightMoodContrastTension
            ]
        );
        assert_eq!(result.design_tension_notes.len(), 2);
        assert!(result.design_tension_notes[0].starts_with("Cool metal (silver/chrome)"));
        assert!(result.design_tension_notes[1].starts_with("Dramatic low-light"));
    }

    #[test]
    fn conflict_keys_are_kebab_case() {
        assert_eq!(MajorConflict::TemperaturePaletteMismatch.to_string(), "temperature-palette-mismatch");
        assert_eq!(
            serde_json::to_string(&MinorTension::LightMoodContrastTension).unwrap(),
            "\"light-mood-contrast-tension\""
        );
    }
}
