//! Named design lanes and the resolver that labels a vector with one.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::axes::{AxisVector, Mood, Shape};

/// A named lane: canonical vector plus the things it steers away from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub axis_vector: AxisVector,
    #[serde(default)]
    pub avoid_summary: Vec<String>,
}

/// Presets with this many major mismatches are never matched.
pub const ELIMINATION_THRESHOLD: u32 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct PresetScore<'a> {
    pub preset: &'a Preset,
    pub score: f64,
    pub major_mismatches: u32,
}

impl PresetScore<'_> {
    pub fn is_eliminated(&self) -> bool {
        self.major_mismatches >= ELIMINATION_THRESHOLD
    }

    fn rank(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.major_mismatches.cmp(&other.major_mismatches))
            .then_with(|| self.preset.id.cmp(&other.preset.id))
    }
}

fn opposite_moods(a: Mood, b: Mood) -> bool {
    matches!(
        (a, b),
        (Mood::Restrained, Mood::Expressive) | (Mood::Expressive, Mood::Restrained)
    )
}

fn opposite_shapes(a: Shape, b: Shape) -> bool {
    matches!(
        (a, b),
        (Shape::Organic, Shape::Architectural) | (Shape::Architectural, Shape::Organic)
    )
}

pub fn score_preset<'a>(preset: &'a Preset, vector: &AxisVector) -> PresetScore<'a> {
    let canonical = &preset.axis_vector;
    let mut score = 0.0;
    let mut major_mismatches = 0;

    if canonical.mood == vector.mood {
        score += 2.0;
    } else if opposite_moods(canonical.mood, vector.mood) {
        major_mismatches += 1;
    }

    if canonical.texture == vector.texture {
        score += 1.0;
    }

    if canonical.temperature == vector.temperature {
        score += 2.0;
    } else if canonical.temperature.opposes(vector.temperature) {
        major_mismatches += 1;
    }

    if canonical.shape == vector.shape {
        score += 2.0;
    } else if opposite_shapes(canonical.shape, vector.shape) {
        major_mismatches += 1;
    }

    if canonical.floral_form == vector.floral_form {
        score += 1.0;
    }
    if canonical.metal == vector.metal {
        score += 0.5;
    }
    if canonical.light == vector.light {
        score += 0.5;
    }

    match canonical.formality.distance(vector.formality.get()) {
        0 => score += 2.0,
        1 => score += 1.0,
        _ => major_mismatches += 1,
    }

    PresetScore {
        preset,
        score,
        major_mismatches,
    }
}

/// Surviving presets, best first.
pub fn rank_presets<'a>(presets: &'a [Preset], vector: &AxisVector) -> Vec<PresetScore<'a>> {
    let mut survivors: Vec<PresetScore<'a>> = presets
        .iter()
        .map(|preset| score_preset(preset, vector))
        .filter(|scored| !scored.is_eliminated())
        .collect();
    survivors.sort_by(PresetScore::rank);
    survivors
}

/// Id of the best-matching lane, or `None` for a custom direction.
pub fn resolve_preset<'a>(presets: &'a [Preset], vector: &AxisVector) -> Option<&'a str> {
    let resolved = rank_presets(presets, vector)
        .first()
        .map(|best| best.preset.id.as_str());
    tracing::debug!(preset = ?resolved, "resolved preset");
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::axes::tests::vector;
    use crate::core::axes::{FloralForm, Formality, Light, Metal, Temperature, Texture};

    fn preset(id: &str, axis_vector: AxisVector) -> Preset {
        Preset {
            id: id.into(),
            name: id.into(),
            tagline: String::new(),
            axis_vector,
            avoid_summary: Vec::new(),
        }
    }

    fn minimal_cool() -> AxisVector {
        vector(
            4,
            Mood::Restrained,
            Texture::Minimal,
            Temperature::Cool,
            Shape::Architectural,
            FloralForm::Sculptural,
            Metal::Cool,
            Light::Airy,
        )
    }

    #[test]
    fn exact_match_scores_eleven() {
        let p = preset("exact", minimal_cool());
        let scored = score_preset(&p, &minimal_cool());
        assert!((scored.score - 11.0).abs() < 1e-9);
        assert_eq!(scored.major_mismatches, 0);
    }

    #[test]
    fn formality_gap_plus_one_opposite_is_eliminated() {
        let p = preset("far", minimal_cool());
        let mut v = minimal_cool();
        v.formality = Formality::try_from(2).unwrap();
        v.temperature = Temperature::Warm;
        let scored = score_preset(&p, &v);
        assert_eq!(scored.major_mismatches, 2);
        assert!(scored.is_eliminated());
        assert!(resolve_preset(std::slice::from_ref(&p), &v).is_none());
    }

    #[test]
    fn single_mismatch_survives() {
        let p = preset("near", minimal_cool());
        let mut v = minimal_cool();
        v.shape = Shape::Organic;
        assert_eq!(resolve_preset(std::slice::from_ref(&p), &v), Some("near"));
    }

    #[test]
    fn neutral_and_balanced_are_not_opposites() {
        let p = preset("soft", minimal_cool());
        let mut v = minimal_cool();
        v.temperature = Temperature::Neutral;
        v.shape = Shape::Balanced;
        v.mood = Mood::Balanced;
        assert_eq!(score_preset(&p, &v).major_mismatches, 0);
    }

    #[test]
    fn ties_break_on_smaller_id() {
        let presets = vec![preset("zeta", minimal_cool()), preset("alpha", minimal_cool())];
        assert_eq!(resolve_preset(&presets, &minimal_cool()), Some("alpha"));
    }

    #[test]
    fn higher_score_wins() {
        let mut warm = minimal_cool();
        warm.metal = Metal::Warm;
        let presets = vec![preset("a-warm-metal", warm), preset("b-exact", minimal_cool())];
        assert_eq!(resolve_preset(&presets, &minimal_cool()), Some("b-exact"));
    }

    #[test]
    fn equal_score_prefers_fewer_mismatches() {
        let base = minimal_cool();
        // "a" loses mood (opposite, +1 mismatch) but gains nothing else
        let mut a = base;
        a.mood = Mood::Expressive;
        a.texture = Texture::Layered;
        // "b" loses mood to balanced and texture: no mismatch, same score
        let mut b = base;
        b.mood = Mood::Balanced;
        b.texture = Texture::Layered;
        let presets = vec![preset("a", a), preset("b", b)];
        let ranked = rank_presets(&presets, &base);
        assert_eq!(ranked[0].preset.id, "b");
        assert!((ranked[0].score - ranked[1].score).abs() < 1e-9);
    }
}
