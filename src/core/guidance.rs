//! Do/avoid guidance derived from axis values and detected tensions.

use serde::{Deserialize, Serialize};

use super::axes::{AxisVector, Mood, Shape, Temperature, Texture};
use super::conflicts::{ConflictResult, MinorTension};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guidance {
    pub do_list: Vec<String>,
    pub avoid_list: Vec<String>,
}

// (do, avoid) pairs; `None` means the category adds nothing to that list.
type Entry = (Option<&'static str>, Option<&'static str>);

fn temperature_entry(temperature: Temperature) -> Entry {
    match temperature {
        Temperature::Warm => (
            Some("Keep all palette applications in the warm register - creams, terracotta, ochre, blush"),
            Some("Introducing cool-toned greys, blues, or silvers into the palette"),
        ),
        Temperature::Cool => (
            Some("Maintain cool consistency across palette, metals, and print treatments"),
            Some("Introducing warm accents - brass, terracotta, or golden tones"),
        ),
        Temperature::Neutral => (
            Some("Use neutral as a versatile ground - it supports any metal temperature"),
            None,
        ),
    }
}

fn mood_entry(mood: Mood) -> Entry {
    match mood {
        Mood::Restrained => (
            Some("Let negative space and material quality speak - restraint is the statement"),
            Some("Adding decorative details that don't serve a structural purpose"),
        ),
        Mood::Expressive => (
            Some("Commit fully to the contrast - half-measures dilute the impact"),
            Some("Safe neutrals that undercut the graphic energy"),
        ),
        Mood::Balanced => (None, None),
    }
}

fn shape_entry(shape: Shape) -> Entry {
    match shape {
        Shape::Architectural => (
            Some("Keep layouts geometric and intentional - strong horizontal and vertical alignments"),
            Some("Organic or asymmetric arrangement in stationery layouts or signage"),
        ),
        Shape::Organic => (
            Some("Embrace asymmetry and natural flow - no forced symmetry"),
            Some("Rigid grid layouts or perfectly centered compositions"),
        ),
        Shape::Balanced => (None, None),
    }
}

fn texture_entry(texture: Texture) -> Entry {
    match texture {
        Texture::Minimal => (
            Some("Choose one exceptional material and use it consistently across all surfaces"),
            Some("Mixing multiple paper finishes or textile types"),
        ),
        Texture::Rich => (
            Some("Layer textures intentionally - each surface should reward close inspection"),
            Some("Flat digital-only print without any tactile dimension"),
        ),
        Texture::Layered => (None, None),
    }
}

fn formality_entry(level: u8) -> Entry {
    match level {
        4.. => (
            Some("Invest in print quality - engraving, letterpress, or foil elevate the formality"),
            Some("Digital flat-print on thin stock for any formal stationery piece"),
        ),
        ..=2 => (
            Some("Let material authenticity carry the design - imperfection is appropriate here"),
            Some("Over-polishing details to the point of losing warmth"),
        ),
        _ => (None, None),
    }
}

impl Guidance {
    fn push(&mut self, (do_line, avoid_line): Entry) {
        if let Some(line) = do_line {
            self.do_list.push(line.to_string());
        }
        if let Some(line) = avoid_line {
            self.avoid_list.push(line.to_string());
        }
    }
}

/// Expands the vector into ordered do/avoid lists: temperature, mood, shape,
/// texture, metal tension, formality tier.
pub fn generate_do_avoid(vector: &AxisVector, conflicts: &ConflictResult) -> Guidance {
    let mut guidance = Guidance::default();

    guidance.push(temperature_entry(vector.temperature));
    guidance.push(mood_entry(vector.mood));
    guidance.push(shape_entry(vector.shape));
    guidance.push(texture_entry(vector.texture));
    if conflicts.has_minor(MinorTension::MetalTemperatureTension) {
        guidance.avoid_list.push(format!(
            "Using {} metal as the dominant finish - apply it as a single sparingly-placed accent only",
            vector.metal
        ));
    }
    guidance.push(formality_entry(vector.formality.get()));

    guidance
}
