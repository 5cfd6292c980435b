//! Adjacent-variant shift builder.
//!
//! Four axes can step along a fixed path graph. Every legal one-step move is
//! a candidate; candidates are ranked by how many detected conflicts they
//! clear and the best one or two become the adjacent direction.

use std::cmp::Ordering;

use super::axes::{AxisName, AxisVector, FloralForm, Light, Mood, PartialAxisVector, Texture};
use super::conflicts::{ConflictResult, MajorConflict, MinorTension, vector_major_conflicts};

// ── Neighbor graph ───────────────────────────────────────────────────────────

type Graph<T> = [(T, &'static [T]); 3];

pub const MOOD_NEIGHBORS: Graph<Mood> = [
    (Mood::Restrained, &[Mood::Balanced]),
    (Mood::Balanced, &[Mood::Restrained, Mood::Expressive]),
    (Mood::Expressive, &[Mood::Balanced]),
];

pub const TEXTURE_NEIGHBORS: Graph<Texture> = [
    (Texture::Minimal, &[Texture::Layered]),
    (Texture::Layered, &[Texture::Minimal, Texture::Rich]),
    (Texture::Rich, &[Texture::Layered]),
];

pub const FLORAL_NEIGHBORS: Graph<FloralForm> = [
    (FloralForm::Meadow, &[FloralForm::Sculptural]),
    (
        FloralForm::Sculptural,
        &[FloralForm::Meadow, FloralForm::ClassicDome],
    ),
    (FloralForm::ClassicDome, &[FloralForm::Sculptural]),
];

pub const LIGHT_NEIGHBORS: Graph<Light> = [
    (Light::Airy, &[Light::Layered]),
    (Light::Layered, &[Light::Airy, Light::Dramatic]),
    (Light::Dramatic, &[Light::Layered]),
];

pub fn neighbors<T: Copy + PartialEq + 'static>(graph: &Graph<T>, node: T) -> &'static [T] {
    graph
        .iter()
        .find(|(value, _)| *value == node)
        .map(|(_, next)| *next)
        .unwrap_or(&[])
}

// ── Candidates ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct ShiftCandidate {
    pub axis: AxisName,
    pub shift: PartialAxisVector,
    pub major_reduction: u32,
    pub minor_reduction: u32,
}

impl ShiftCandidate {
    pub fn is_light(&self) -> bool {
        self.axis == AxisName::Light
    }

    fn rank(&self, other: &Self) -> Ordering {
        other
            .major_reduction
            .cmp(&self.major_reduction)
            .then_with(|| other.minor_reduction.cmp(&self.minor_reduction))
            .then_with(|| self.is_light().cmp(&other.is_light()))
            .then_with(|| {
                let lhs: &'static str = self.axis.into();
                let rhs: &'static str = other.axis.into();
                lhs.cmp(rhs)
            })
    }
}

/// True when `shifted` shows a vector-level major conflict `original` lacks.
fn introduces_major(original: &AxisVector, shifted: &AxisVector) -> bool {
    let before = vector_major_conflicts(original);
    vector_major_conflicts(shifted)
        .iter()
        .any(|conflict| !before.contains(conflict))
}

/// A mood-mismatch counts as cleared only by a mood move and a
/// shape-mismatch only by a floral-form move.
fn major_reduction(conflicts: &ConflictResult, original: &AxisVector, shifted: &AxisVector) -> u32 {
    let cleared = [
        (MajorConflict::MoodMismatch, shifted.mood != original.mood),
        (
            MajorConflict::ShapeMismatch,
            shifted.floral_form != original.floral_form,
        ),
    ];
    let count = cleared
        .iter()
        .filter(|(kind, moved)| *moved && conflicts.has_major(*kind))
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Only a light move counts toward the light/mood contrast tension.
fn minor_reduction(conflicts: &ConflictResult, original: &AxisVector, shifted: &AxisVector) -> u32 {
    u32::from(
        conflicts.has_minor(MinorTension::LightMoodContrastTension)
            && shifted.light != original.light,
    )
}

fn candidate(
    vector: &AxisVector,
    conflicts: &ConflictResult,
    axis: AxisName,
    shift: PartialAxisVector,
) -> Option<ShiftCandidate> {
    let shifted = vector.with_shifts(&shift);
    if introduces_major(vector, &shifted) {
        tracing::debug!(%axis, "skipping shift that introduces a major conflict");
        return None;
    }
    Some(ShiftCandidate {
        axis,
        shift,
        major_reduction: major_reduction(conflicts, vector, &shifted),
        minor_reduction: minor_reduction(conflicts, vector, &shifted),
    })
}

/// Every legal one-step move that introduces no new major conflict, best first.
pub fn shift_candidates(vector: &AxisVector, conflicts: &ConflictResult) -> Vec<ShiftCandidate> {
    let mut moves: Vec<(AxisName, PartialAxisVector)> = Vec::new();
    for &mood in neighbors(&MOOD_NEIGHBORS, vector.mood) {
        moves.push((
            AxisName::Mood,
            PartialAxisVector {
                mood: Some(mood),
                ..PartialAxisVector::default()
            },
        ));
    }
    for &texture in neighbors(&TEXTURE_NEIGHBORS, vector.texture) {
        moves.push((
            AxisName::Texture,
            PartialAxisVector {
                texture: Some(texture),
                ..PartialAxisVector::default()
            },
        ));
    }
    for &floral_form in neighbors(&FLORAL_NEIGHBORS, vector.floral_form) {
        moves.push((
            AxisName::FloralForm,
            PartialAxisVector {
                floral_form: Some(floral_form),
                ..PartialAxisVector::default()
            },
        ));
    }
    for &light in neighbors(&LIGHT_NEIGHBORS, vector.light) {
        moves.push((
            AxisName::Light,
            PartialAxisVector {
                light: Some(light),
                ..PartialAxisVector::default()
            },
        ));
    }

    let mut candidates: Vec<ShiftCandidate> = moves
        .into_iter()
        .filter_map(|(axis, shift)| candidate(vector, conflicts, axis, shift))
        .collect();
    candidates.sort_by(ShiftCandidate::rank);
    candidates
}

/// Chooses one or two axis shifts.
///
/// The primary is the best non-light candidate; the secondary is the next
/// candidate on a different axis whose combination with the primary still
/// introduces no new major conflict. When only light moves remain, the single
/// best light move is used.
pub fn build_adjacent_shift(vector: &AxisVector, conflicts: &ConflictResult) -> PartialAxisVector {
    let candidates = shift_candidates(vector, conflicts);

    let Some(primary_idx) = candidates.iter().position(|c| !c.is_light()) else {
        // Light moves never touch a major rule, so at least one survives.
        return candidates
            .first()
            .map(|c| c.shift)
            .unwrap_or_default();
    };

    let primary = &candidates[primary_idx];
    let mut shift = primary.shift;

    let secondary = candidates[primary_idx + 1..].iter().find(|c| {
        if c.axis == primary.axis {
            return false;
        }
        let mut combined = shift;
        combined.merge(&c.shift);
        !introduces_major(vector, &vector.with_shifts(&combined))
    });
    if let Some(secondary) = secondary {
        shift.merge(&secondary.shift);
    }

    tracing::debug!(axes = ?shift.axes(), "built adjacent shift");
    shift
}

// ── Implications ─────────────────────────────────────────────────────────────

const FALLBACK_IMPLICATIONS: [&str; 3] = [
    "Florals: maintain the selected form but introduce one seasonal wildcard stem for personality",
    "Signage: ensure all materials in the signage system share the same finish language - no mixing sheen and matte",
    "Atmosphere: layer candlelight at the reception even if ceremony is daylight - it shifts the energy effectively",
];

fn floral_implication(form: FloralForm) -> &'static str {
    match form {
        FloralForm::Sculptural => {
            "Florals: shift toward single-stem sculptural arrangements with intentional negative space"
        }
        FloralForm::Meadow => {
            "Florals: soften to loose, garden-gathered arrangements with trailing foliage"
        }
        FloralForm::ClassicDome => {
            "Florals: move toward lush symmetrical domes - increases formality of the floral program"
        }
    }
}

fn mood_implication(mood: Mood) -> &'static str {
    match mood {
        Mood::Balanced => {
            "Signage: introduce one point of personality - a single decorative detail or unexpected material - without changing the overall system"
        }
        Mood::Restrained => {
            "Signage: strip back to the essential information only - one material, no decorative additions"
        }
        Mood::Expressive => {
            "Signage: amplify contrast - larger scale, bolder type weight, or an unexpected material accent"
        }
    }
}

fn texture_implication(texture: Texture) -> &'static str {
    match texture {
        Texture::Layered => {
            "Signage & florals: introduce one textile or tactile layer - a linen backing, a ribbon, or mixed surface signage"
        }
        Texture::Minimal => {
            "Signage & florals: simplify surfaces - remove secondary materials and commit to one dominant texture"
        }
        Texture::Rich => {
            "Signage & florals: add material depth - velvet ribbon, heavy fabric backing, layered florals with visible stems"
        }
    }
}

fn light_implication(light: Light) -> &'static str {
    match light {
        Light::Dramatic => {
            "Atmosphere: increase candle density - tall tapers in clusters, low ambient overhead. Reduce reflective surfaces."
        }
        Light::Airy => {
            "Atmosphere: reduce candle count, favor daylight and diffused ambient. Use reflective surfaces sparingly."
        }
        Light::Layered => {
            "Atmosphere: mix candle and ambient light - pillar candles with overhead diffused lighting for a balanced mood."
        }
    }
}

/// Exactly three downstream notes for the sections that are not re-selected.
///
/// Shifted axes contribute in priority order (floral form, mood, texture,
/// light); the remainder is padded from the fallback list by position.
pub fn adjacent_implications(shift: &PartialAxisVector) -> [String; 3] {
    let axis_lines = [
        shift.floral_form.map(floral_implication),
        shift.mood.map(mood_implication),
        shift.texture.map(texture_implication),
        shift.light.map(light_implication),
    ];
    let mut lines = axis_lines.into_iter().flatten();
    std::array::from_fn(|position| {
        lines
            .next()
            .unwrap_or(FALLBACK_IMPLICATIONS[position])
            .to_string()
    })
}
