//! Affinity scoring between one component and one axis vector.
//!
//! Each categorical axis adds its weight on an exact tag match; untagged axes
//! are wildcards and add nothing. Formality adds at most 1.0.

use super::axes::AxisVector;
use super::component::{AxisTags, Component, FormalityTag};

const MOOD_WEIGHT: f64 = 1.0;
const TEXTURE_WEIGHT: f64 = 1.0;
const TEMPERATURE_WEIGHT: f64 = 1.0;
const SHAPE_WEIGHT: f64 = 1.0;
const FLORAL_FORM_WEIGHT: f64 = 1.0;
const METAL_WEIGHT: f64 = 0.5;
const LIGHT_WEIGHT: f64 = 0.5;

const RANGE_FALLOFF_PER_STEP: f64 = 0.3;

pub fn affinity_score<D>(component: &Component<D>, vector: &AxisVector) -> f64 {
    tag_affinity(&component.axis_tags, vector)
}

pub fn tag_affinity(tags: &AxisTags, vector: &AxisVector) -> f64 {
    fn weight_if<T: PartialEq>(tag: Option<T>, value: T, weight: f64) -> f64 {
        if tag.is_some_and(|t| t == value) {
            weight
        } else {
            0.0
        }
    }

    let categorical = weight_if(tags.mood, vector.mood, MOOD_WEIGHT)
        + weight_if(tags.texture, vector.texture, TEXTURE_WEIGHT)
        + weight_if(tags.temperature, vector.temperature, TEMPERATURE_WEIGHT)
        + weight_if(tags.shape, vector.shape, SHAPE_WEIGHT)
        + weight_if(tags.floral_form, vector.floral_form, FLORAL_FORM_WEIGHT)
        + weight_if(tags.metal, vector.metal, METAL_WEIGHT)
        + weight_if(tags.light, vector.light, LIGHT_WEIGHT);

    categorical + tags.formality.map_or(0.0, |tag| formality_affinity(tag, vector.formality.get()))
}

fn formality_affinity(tag: FormalityTag, level: u8) -> f64 {
    match tag {
        FormalityTag::Range(min, max) => {
            if level < min || level > max {
                return 0.0;
            }
            let center = f64::from(min + max) / 2.0;
            let distance = (f64::from(level) - center).abs();
            (1.0 - distance * RANGE_FALLOFF_PER_STEP).max(0.0)
        }
        FormalityTag::Exact(expected) => match level.abs_diff(expected) {
            0 => 1.0,
            1 => 0.5,
            _ => 0.0,
        },
    }
}
