use wedding_blueprint::core::assembly::{AdjacentVariant, Blueprint};
use wedding_blueprint::core::axes::{AxisName, AxisVector};
use wedding_blueprint::core::component::Section;
use wedding_blueprint::core::library::ContentLibraries;
use wedding_blueprint::core::presets::Preset;
use wedding_blueprint::journal::GenerationEntry;
use wedding_blueprint::ui::style;

pub fn render_vector(vector: &AxisVector) -> String {
    [
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
    .map(|axis| format!("{}={}", style::cyan(axis), vector.value_of(axis)))
    .collect::<Vec<_>>()
    .join(" ")
}

fn push_list(lines: &mut Vec<String>, title: &str, items: &[String], bullet: &str) {
    if items.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push(style::header(title));
    for item in items {
        lines.push(format!("  {bullet} {item}"));
    }
}

pub fn render_blueprint(blueprint: &Blueprint, preset: Option<&Preset>) -> String {
    let sections = &blueprint.sections;
    let mut lines = vec![
        format!("◆ {}", style::header("Wedding Blueprint")),
        String::new(),
        format!("  {}", render_vector(&blueprint.axis_vector)),
        match preset {
            Some(preset) => format!(
                "  Lane      {} {}",
                style::success(&preset.name),
                style::dim(format!("({}) {}", preset.id, preset.tagline))
            ),
            None => format!("  Lane      {}", style::dim("custom direction")),
        },
        String::new(),
        style::header("Sections"),
        format!(
            "  {:<12} {} {}",
            Section::Palette.to_string(),
            style::value(&sections.palette.id),
            style::dim(sections.palette.details.swatches.join(" "))
        ),
        format!(
            "  {:<12} {} {}",
            Section::Typography.to_string(),
            style::value(&sections.typography.id),
            style::dim(format!(
                "{} / {}",
                sections.typography.details.heading_font, sections.typography.details.body_font
            ))
        ),
        format!(
            "  {:<12} {} {}",
            Section::PaperPrint.to_string(),
            style::value(&sections.paper_print.id),
            style::dim(format!(
                "{}, {}",
                sections.paper_print.details.stock, sections.paper_print.details.weight
            ))
        ),
        format!(
            "  {:<12} {} {}",
            Section::Florals.to_string(),
            style::value(&sections.florals.id),
            style::dim(sections.florals.details.key_flowers.join(", "))
        ),
        format!(
            "  {:<12} {} {}",
            Section::Signage.to_string(),
            style::value(&sections.signage.id),
            style::dim(sections.signage.details.materials.join(", "))
        ),
    ];

    let conflicts = &blueprint.conflicts;
    if !conflicts.major.is_empty() || !conflicts.minor.is_empty() {
        lines.push(String::new());
        lines.push(style::header("Conflicts"));
        for major in &conflicts.major {
            lines.push(format!("  {} {major}", style::alert("✗")));
        }
        for minor in &conflicts.minor {
            lines.push(format!("  {} {minor}", style::yellow("~")));
        }
        for note in &conflicts.design_tension_notes {
            lines.push(format!("    {}", style::dim(note)));
        }
    }

    push_list(&mut lines, "Do", &blueprint.do_list, &style::success("+"));
    push_list(&mut lines, "Avoid", &blueprint.avoid_list, &style::alert("-"));

    lines.join("\n")
}

pub fn render_adjacent(variant: &AdjacentVariant, original: &AxisVector) -> String {
    let shifted = original.with_shifts(&variant.shifted_axes);
    let mut lines = vec![
        format!("◆ {}", style::header("Adjacent Variant")),
        String::new(),
    ];
    for axis in variant.shifted_axes.axes() {
        lines.push(format!(
            "  {:<12} {} → {}",
            axis.to_string(),
            original.value_of(axis),
            style::value(shifted.value_of(axis))
        ));
    }
    lines.push(String::new());
    lines.push(style::header("Re-selected"));
    lines.push(format!(
        "  {:<12} {}",
        Section::Palette.to_string(),
        style::value(&variant.sections.palette.id)
    ));
    lines.push(format!(
        "  {:<12} {}",
        Section::Typography.to_string(),
        style::value(&variant.sections.typography.id)
    ));
    lines.push(format!(
        "  {:<12} {}",
        Section::PaperPrint.to_string(),
        style::value(&variant.sections.paper_print.id)
    ));
    push_list(&mut lines, "Implications", &variant.implications, &style::accent("•"));
    lines.join("\n")
}

pub fn render_presets(presets: &[Preset], resolved: Option<Option<&str>>) -> String {
    let mut lines = vec![format!("◆ {}", style::header("Design Lanes"))];
    for preset in presets {
        let marker = if resolved.flatten() == Some(preset.id.as_str()) {
            style::success("▶")
        } else {
            " ".to_string()
        };
        lines.push(String::new());
        lines.push(format!(
            "{marker} {} {}",
            style::header(&preset.name),
            style::dim(format!("({})", preset.id))
        ));
        lines.push(format!("    {}", preset.tagline));
        lines.push(format!("    {}", render_vector(&preset.axis_vector)));
        for avoid in &preset.avoid_summary {
            lines.push(format!("    {} {avoid}", style::alert("-")));
        }
    }
    if let Some(resolved) = resolved {
        lines.push(String::new());
        lines.push(format!(
            "Resolved lane: {}",
            resolved.map_or_else(|| style::dim("none (custom direction)"), style::success)
        ));
    }
    lines.join("\n")
}

pub fn render_history(entries: &[GenerationEntry]) -> String {
    if entries.is_empty() {
        return style::dim("No generations recorded yet.");
    }
    let mut lines = vec![format!("◆ {}", style::header("Recent Generations"))];
    for entry in entries {
        lines.push(String::new());
        lines.push(format!(
            "{} {}",
            style::accent(entry.timestamp.format("%Y-%m-%d %H:%M:%S UTC")),
            entry
                .resolved_preset
                .as_deref()
                .map_or_else(|| style::dim("custom"), style::success)
        ));
        lines.push(format!("  {}", render_vector(&entry.axis_vector)));
        let ids: Vec<&str> = entry.chosen_component_ids.values().map(String::as_str).collect();
        lines.push(format!("  {}", style::value(ids.join(", "))));
        if !entry.conflicts.is_empty() || !entry.tensions.is_empty() {
            let keys: Vec<String> = entry
                .conflicts
                .iter()
                .map(ToString::to_string)
                .chain(entry.tensions.iter().map(ToString::to_string))
                .collect();
            lines.push(format!("  {}", style::yellow(keys.join(", "))));
        }
    }
    lines.join("\n")
}

pub fn render_libraries(libraries: &ContentLibraries, source: &str) -> String {
    let mut lines = vec![
        format!("◆ {}", style::header("Content Libraries")),
        format!("  {} {}", style::dim("source"), style::value(source)),
    ];
    for section in [
        Section::Palette,
        Section::Typography,
        Section::PaperPrint,
        Section::Florals,
        Section::Signage,
    ] {
        let ids = libraries.component_ids(section);
        lines.push(String::new());
        lines.push(format!("{} {}", style::header(section), style::dim(format!("({})", ids.len()))));
        for id in ids {
            lines.push(format!("  {}", style::value(id)));
        }
    }
    lines.push(String::new());
    lines.push(format!(
        "{} {}",
        style::header("presets"),
        style::dim(format!("({})", libraries.presets.len()))
    ));
    for preset in &libraries.presets {
        lines.push(format!("  {}", style::value(&preset.id)));
    }
    lines.join("\n")
}
