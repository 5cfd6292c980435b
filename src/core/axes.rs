use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::ValidationError;

// ── Axis names ───────────────────────────────────────────────────────────────

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
    EnumString, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AxisName {
    Formality,
    Mood,
    Texture,
    Temperature,
    Shape,
    FloralForm,
    Metal,
    Light,
}

// ── Categorical axes ─────────────────────────────────────────────────────────

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
    EnumString, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Mood {
    Restrained,
    Balanced,
    Expressive,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
    EnumString, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Texture {
    Minimal,
    Layered,
    Rich,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
    EnumString, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Temperature {
    Warm,
    Cool,
    Neutral,
}

impl Temperature {
    /// Warm and cool oppose each other; neutral opposes nothing.
    pub fn opposes(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Warm, Self::Cool) | (Self::Cool, Self::Warm)
        )
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
    EnumString, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Shape {
    Organic,
    Balanced,
    Architectural,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
    EnumString, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FloralForm {
    Meadow,
    Sculptural,
    ClassicDome,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
    EnumString, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Metal {
    Cool,
    Warm,
    Mixed,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
    EnumString, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Light {
    Airy,
    Layered,
    Dramatic,
}

// ── Formality ────────────────────────────────────────────────────────────────

pub const FORMALITY_MIN: u8 = 1;
pub const FORMALITY_MAX: u8 = 5;

/// Ordinal formality level, always within `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Formality(u8);

impl Formality {
    pub fn get(self) -> u8 {
        self.0
    }

    pub fn distance(self, other: u8) -> u8 {
        self.0.abs_diff(other)
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (FORMALITY_MIN..=FORMALITY_MAX).map(Self)
    }
}

impl TryFrom<u8> for Formality {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (FORMALITY_MIN..=FORMALITY_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::FormalityOutOfRange(value))
        }
    }
}

impl From<Formality> for u8 {
    fn from(value: Formality) -> Self {
        value.0
    }
}

impl std::fmt::Display for Formality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── AxisVector ───────────────────────────────────────────────────────────────

/// Complete eight-axis style descriptor. Every field is present and valid by
/// construction; partial input goes through [`PartialAxisVector`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisVector {
    pub formality: Formality,
    pub mood: Mood,
    pub texture: Texture,
    pub temperature: Temperature,
    pub shape: Shape,
    pub floral_form: FloralForm,
    pub metal: Metal,
    pub light: Light,
}

impl AxisVector {
    /// The seven categorical values as literals. Tag matching is a membership
    /// test against this set, so a tag such as `"warm"` matches either
    /// `temperature` or `metal`.
    pub fn values(&self) -> [&'static str; 7] {
        [
            self.mood.into(),
            self.texture.into(),
            self.temperature.into(),
            self.shape.into(),
            self.floral_form.into(),
            self.metal.into(),
            self.light.into(),
        ]
    }

    pub fn matches_tag(&self, tag: &str) -> bool {
        self.values().iter().any(|value| *value == tag)
    }

    /// Returns a copy with every axis set in `shifts` replaced.
    pub fn with_shifts(&self, shifts: &PartialAxisVector) -> Self {
        Self {
            formality: shifts.formality.unwrap_or(self.formality),
            mood: shifts.mood.unwrap_or(self.mood),
            texture: shifts.texture.unwrap_or(self.texture),
            temperature: shifts.temperature.unwrap_or(self.temperature),
            shape: shifts.shape.unwrap_or(self.shape),
            floral_form: shifts.floral_form.unwrap_or(self.floral_form),
            metal: shifts.metal.unwrap_or(self.metal),
            light: shifts.light.unwrap_or(self.light),
        }
    }

    /// Literal value of one axis, formality rendered as its digit.
    pub fn value_of(&self, axis: AxisName) -> String {
        match axis {
            AxisName::Formality => self.formality.to_string(),
            AxisName::Mood => self.mood.to_string(),
            AxisName::Texture => self.texture.to_string(),
            AxisName::Temperature => self.temperature.to_string(),
            AxisName::Shape => self.shape.to_string(),
            AxisName::FloralForm => self.floral_form.to_string(),
            AxisName::Metal => self.metal.to_string(),
            AxisName::Light => self.light.to_string(),
        }
    }
}

// ── PartialAxisVector ────────────────────────────────────────────────────────

/// Axis vector with any subset of axes set. Carries raw quiz answers before
/// validation and the diff of an adjacent variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialAxisVector {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formality: Option<Formality>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<Texture>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<Temperature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<Shape>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floral_form: Option<FloralForm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metal: Option<Metal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light: Option<Light>,
}

impl PartialAxisVector {
    /// Axes that carry a value, in declaration order.
    pub fn axes(&self) -> Vec<AxisName> {
        let present = [
            (AxisName::Formality, self.formality.is_some()),
            (AxisName::Mood, self.mood.is_some()),
            (AxisName::Texture, self.texture.is_some()),
            (AxisName::Temperature, self.temperature.is_some()),
            (AxisName::Shape, self.shape.is_some()),
            (AxisName::FloralForm, self.floral_form.is_some()),
            (AxisName::Metal, self.metal.is_some()),
            (AxisName::Light, self.light.is_some()),
        ];
        present
            .into_iter()
            .filter_map(|(axis, set)| set.then_some(axis))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.axes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sets one axis from its literal value, as typed by a user.
    pub fn set(&mut self, axis: AxisName, raw: &str) -> Result<(), ValidationError> {
        let invalid = || ValidationError::InvalidValue {
            axis,
            value: raw.to_string(),
        };
        let raw = raw.trim();
        match axis {
            AxisName::Formality => {
                let level: u8 = raw.parse().map_err(|_| invalid())?;
                self.formality = Some(Formality::try_from(level)?);
            }
            AxisName::Mood => self.mood = Some(raw.parse().map_err(|_| invalid())?),
            AxisName::Texture => self.texture = Some(raw.parse().map_err(|_| invalid())?),
            AxisName::Temperature => self.temperature = Some(raw.parse().map_err(|_| invalid())?),
            AxisName::Shape => self.shape = Some(raw.parse().map_err(|_| invalid())?),
            AxisName::FloralForm => self.floral_form = Some(raw.parse().map_err(|_| invalid())?),
            AxisName::Metal => self.metal = Some(raw.parse().map_err(|_| invalid())?),
            AxisName::Light => self.light = Some(raw.parse().map_err(|_| invalid())?),
        }
        Ok(())
    }

    /// Overlays every axis set in `other` onto `self`.
    pub fn merge(&mut self, other: &Self) {
        self.formality = other.formality.or(self.formality);
        self.mood = other.mood.or(self.mood);
        self.texture = other.texture.or(self.texture);
        self.temperature = other.temperature.or(self.temperature);
        self.shape = other.shape.or(self.shape);
        self.floral_form = other.floral_form.or(self.floral_form);
        self.metal = other.metal.or(self.metal);
        self.light = other.light.or(self.light);
    }
}

impl From<AxisVector> for PartialAxisVector {
    fn from(v: AxisVector) -> Self {
        Self {
            formality: Some(v.formality),
            mood: Some(v.mood),
            texture: Some(v.texture),
            temperature: Some(v.temperature),
            shape: Some(v.shape),
            floral_form: Some(v.floral_form),
            metal: Some(v.metal),
            light: Some(v.light),
        }
    }
}

impl TryFrom<PartialAxisVector> for AxisVector {
    type Error = ValidationError;

    fn try_from(p: PartialAxisVector) -> Result<Self, Self::Error> {
        match (
            p.formality,
            p.mood,
            p.texture,
            p.temperature,
            p.shape,
            p.floral_form,
            p.metal,
            p.light,
        ) {
            (
                Some(formality),
                Some(mood),
                Some(texture),
                Some(temperature),
                Some(shape),
                Some(floral_form),
                Some(metal),
                Some(light),
            ) => Ok(Self {
                formality,
                mood,
                texture,
                temperature,
                shape,
                floral_form,
                metal,
                light,
            }),
            _ => {
                let present = p.axes();
                let missing = [
                    AxisName::Formality,
                    AxisName::Mood,
                    AxisName::Texture,
                    AxisName::Temperature,
                    AxisName::Shape,
                    AxisName::FloralForm,
                    AxisName::Metal,
                    AxisName::Light,
                ]
                .into_iter()
                .filter(|axis| !present.contains(axis))
                .collect();
                Err(ValidationError::MissingAxes(missing))
            }
        }
    }
}
