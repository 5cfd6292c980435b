use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use super::axes::{FloralForm, Light, Metal, Mood, Shape, Temperature, Texture};

// Section: which of the five content libraries a component belongs to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
    EnumString, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Section {
    Palette,
    Typography,
    PaperPrint,
    Florals,
    Signage,
}

// FormalityTag: exact level or inclusive [min, max] range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormalityTag {
    Exact(u8),
    Range(u8, u8),
}

// AxisTags: partial axis mapping; an absent axis is a wildcard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisTags {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formality: Option<FormalityTag>,
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

// Compatibility: literal axis values a component needs or refuses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compatibility {
    #[serde(default)]
    pub required_tags: Vec<String>,
    #[serde(default)]
    pub prohibited_tags: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

/// One tagged candidate in a content library. `details` carries the
/// section-specific payload and is opaque to selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component<D> {
    pub id: String,
    pub name: String,
    pub section: Section,
    #[serde(default)]
    pub axis_tags: AxisTags,
    #[serde(default)]
    pub compatibility: Compatibility,
    #[serde(flatten)]
    pub details: D,
}

// ── Section payloads ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ContrastLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Density {
    Airy,
    Medium,
    Lush,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteDetails {
    pub swatches: Vec<String>,
    #[serde(default)]
    pub usage_rules: Vec<String>,
    pub contrast_level: ContrastLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypographyDetails {
    pub heading_font: String,
    pub body_font: String,
    #[serde(default)]
    pub accent_font: Option<String>,
    #[serde(default)]
    pub hierarchy_notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperPrintDetails {
    pub stock: String,
    pub weight: String,
    #[serde(default)]
    pub technique: Vec<String>,
    #[serde(default)]
    pub finishes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloralsDetails {
    pub key_flowers: Vec<String>,
    #[serde(default)]
    pub foliage: Vec<String>,
    pub arrangement_style: String,
    pub density: Density,
    pub native_formality: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignageDetails {
    pub materials: Vec<String>,
    pub lettering_style: String,
    #[serde(default)]
    pub hardware: Vec<String>,
    #[serde(default)]
    pub finishes: Vec<String>,
}

pub type PaletteComponent = Component<PaletteDetails>;
pub type TypographyComponent = Component<TypographyDetails>;
pub type PaperPrintComponent = Component<PaperPrintDetails>;
pub type FloralsComponent = Component<FloralsDetails>;
pub type SignageComponent = Component<SignageDetails>;
