use std::sync::Arc;

use strum::IntoEnumIterator;
use wedding_blueprint::core::adjacent::build_adjacent_shift;
use wedding_blueprint::core::assembly::Assembler;
use wedding_blueprint::core::axes::{
    AxisVector, FloralForm, Formality, Light, Metal, Mood, PartialAxisVector, Shape, Temperature,
    Texture,
};
use wedding_blueprint::core::conflicts::{MajorConflict, MinorTension, detect_conflicts};
use wedding_blueprint::core::library::ContentLibraries;
use wedding_blueprint::core::presets::resolve_preset;
use wedding_blueprint::core::selector::is_eligible;

fn assembler() -> Assembler {
    Assembler::new(Arc::new(ContentLibraries::builtin().unwrap()))
}

fn all_vectors() -> Vec<AxisVector> {
    let mut vectors = Vec::new();
    for formality in Formality::all() {
        for mood in Mood::iter() {
            for texture in Texture::iter() {
                for temperature in Temperature::iter() {
                    for shape in Shape::iter() {
                        for floral_form in FloralForm::iter() {
                            for metal in Metal::iter() {
                                for light in Light::iter() {
                                    vectors.push(AxisVector {
                                        formality,
                                        mood,
                                        texture,
                                        temperature,
                                        shape,
                                        floral_form,
                                        metal,
                                        light,
                                    });
                                }
                            }
                        }
                    }
                }
            }
        }
    }
    vectors
}

fn example_vector() -> AxisVector {
    AxisVector {
        formality: Formality::try_from(4).unwrap(),
        mood: Mood::Expressive,
        texture: Texture::Minimal,
        temperature: Temperature::Cool,
        shape: Shape::Architectural,
        floral_form: FloralForm::Sculptural,
        metal: Metal::Warm,
        light: Light::Dramatic,
    }
}

mod worked_example {
    use super::*;

    #[test]
    fn selects_expected_components() {
        let blueprint = assembler().assemble_blueprint(&example_vector()).unwrap();
        assert_eq!(
            blueprint.sections.ids(),
            [
                "pal-alabaster-stone",
                "typ-didone-editorial",
                "ppr-smooth-engraved",
                "flo-ikebana-line",
                "sig-acrylic-minimal",
            ]
        );
    }

    #[test]
    fn reports_mood_mismatch_and_metal_tension() {
        let blueprint = assembler().assemble_blueprint(&example_vector()).unwrap();
        assert_eq!(blueprint.conflicts.major, vec![MajorConflict::MoodMismatch]);
        assert_eq!(
            blueprint.conflicts.minor,
            vec![MinorTension::MetalTemperatureTension]
        );
        assert_eq!(blueprint.conflicts.design_tension_notes.len(), 1);
        assert!(
            blueprint.conflicts.design_tension_notes[0]
                .starts_with("Warm metal (brass/gold) with a cool palette")
        );
    }

    #[test]
    fn resolves_to_editorial_lane() {
        let blueprint = assembler().assemble_blueprint(&example_vector()).unwrap();
        assert_eq!(
            blueprint.resolved_preset.as_deref(),
            Some("bold-graphic-editorial")
        );
    }

    #[test]
    fn guidance_includes_interpolated_metal_line() {
        let blueprint = assembler().assemble_blueprint(&example_vector()).unwrap();
        assert!(blueprint.avoid_list.contains(
            &"Using warm metal as the dominant finish - apply it as a single sparingly-placed accent only"
                .to_string()
        ));
        assert!(blueprint.do_list[0].starts_with("Maintain cool consistency"));
    }

    #[test]
    fn adjacent_variant_balances_mood_and_rounds_florals() {
        let assembler = assembler();
        let v = example_vector();
        let blueprint = assembler.assemble_blueprint(&v).unwrap();
        let variant = assembler
            .assemble_adjacent_variant(&v, &blueprint.conflicts)
            .unwrap();
        assert_eq!(
            variant.shifted_axes,
            PartialAxisVector {
                mood: Some(Mood::Balanced),
                floral_form: Some(FloralForm::ClassicDome),
                ..PartialAxisVector::default()
            }
        );
        assert_eq!(variant.sections.palette.id, "pal-alabaster-stone");
        assert_eq!(variant.sections.typography.id, "typ-serif-script");
        assert_eq!(variant.sections.paper_print.id, "ppr-smooth-engraved");
        assert!(variant.implications[0].starts_with("Florals: move toward lush symmetrical domes"));
        assert!(variant.implications[1].starts_with("Signage: introduce one point of personality"));
        assert!(variant.implications[2].starts_with("Atmosphere: layer candlelight"));
    }
}

mod every_vector {
    use super::*;

    #[test]
    fn vector_space_is_complete() {
        assert_eq!(all_vectors().len(), 5 * 3_usize.pow(7));
    }

    #[test]
    fn builtin_libraries_assemble_every_vector() {
        let assembler = assembler();
        for v in all_vectors() {
            let blueprint = assembler
                .assemble_blueprint(&v)
                .unwrap_or_else(|err| panic!("{v:?}: {err}"));
            assembler
                .assemble_adjacent_variant(&v, &blueprint.conflicts)
                .unwrap_or_else(|err| panic!("{v:?}: {err}"));
        }
    }

    #[test]
    fn selection_respects_compatibility() {
        let assembler = assembler();
        for v in all_vectors() {
            let s = assembler.assemble_blueprint(&v).unwrap().sections;
            assert!(is_eligible(&s.palette.compatibility, &v), "{v:?}");
            assert!(is_eligible(&s.typography.compatibility, &v), "{v:?}");
            assert!(is_eligible(&s.paper_print.compatibility, &v), "{v:?}");
            assert!(is_eligible(&s.florals.compatibility, &v), "{v:?}");
            assert!(is_eligible(&s.signage.compatibility, &v), "{v:?}");
        }
    }

    #[test]
    fn assembly_is_deterministic() {
        let first = assembler();
        let second = assembler();
        for v in all_vectors().into_iter().step_by(7) {
            assert_eq!(
                first.assemble_blueprint(&v).unwrap(),
                second.assemble_blueprint(&v).unwrap()
            );
        }
    }

    #[test]
    fn adjacent_shift_is_one_or_two_real_steps() {
        let assembler = assembler();
        for v in all_vectors() {
            let blueprint = assembler.assemble_blueprint(&v).unwrap();
            let variant = assembler
                .assemble_adjacent_variant(&v, &blueprint.conflicts)
                .unwrap();
            let shift = variant.shifted_axes;
            assert!((1..=2).contains(&shift.len()), "{v:?} -> {shift:?}");
            assert!(shift.formality.is_none() && shift.temperature.is_none());
            assert!(shift.shape.is_none() && shift.metal.is_none());
            let shifted = v.with_shifts(&shift);
            for axis in shift.axes() {
                assert_ne!(v.value_of(axis), shifted.value_of(axis), "{v:?}");
            }
            assert_eq!(variant.implications.len(), 3);
        }
    }

    #[test]
    fn adjacent_shift_never_adds_major_conflicts() {
        let assembler = assembler();
        for v in all_vectors() {
            let blueprint = assembler.assemble_blueprint(&v).unwrap();
            let shift = build_adjacent_shift(&v, &blueprint.conflicts);
            let after = detect_conflicts(
                &v.with_shifts(&shift),
                &blueprint.sections.palette,
                &blueprint.sections.florals,
            );
            assert!(
                after.major.len() <= blueprint.conflicts.major.len(),
                "{v:?}: {:?} -> {:?}",
                blueprint.conflicts.major,
                after.major
            );
        }
    }

    #[test]
    fn notes_match_minor_tensions() {
        let assembler = assembler();
        for v in all_vectors() {
            let conflicts = assembler.assemble_blueprint(&v).unwrap().conflicts;
            assert_eq!(conflicts.design_tension_notes.len(), conflicts.minor.len());
            assert!(!conflicts.minor.contains(&MinorTension::TextureFormalityTension));
        }
    }
}

mod presets {
    use super::*;

    #[test]
    fn canonical_vectors_resolve_to_their_own_lane() {
        let libraries = ContentLibraries::builtin().unwrap();
        for preset in &libraries.presets {
            assert_eq!(
                resolve_preset(&libraries.presets, &preset.axis_vector),
                Some(preset.id.as_str())
            );
        }
    }

    #[test]
    fn builtin_lanes_cover_every_vector() {
        let libraries = ContentLibraries::builtin().unwrap();
        for v in all_vectors() {
            assert!(resolve_preset(&libraries.presets, &v).is_some(), "{v:?}");
        }
    }

    #[test]
    fn far_vector_is_custom_against_one_lane() {
        let libraries = ContentLibraries::builtin().unwrap();
        let minimal = libraries.preset("architectural-minimal").unwrap().clone();
        let mut v = minimal.axis_vector;
        v.formality = Formality::try_from(1).unwrap();
        v.shape = Shape::Organic;
        assert_eq!(resolve_preset(std::slice::from_ref(&minimal), &v), None);
    }

    #[test]
    fn blueprint_outside_every_lane_is_custom() {
        let mut libraries = ContentLibraries::builtin().unwrap();
        libraries.presets.retain(|p| p.id == "architectural-minimal");
        let assembler = Assembler::new(Arc::new(libraries));
        let v = AxisVector {
            formality: Formality::try_from(1).unwrap(),
            mood: Mood::Expressive,
            texture: Texture::Rich,
            temperature: Temperature::Warm,
            shape: Shape::Organic,
            floral_form: FloralForm::Meadow,
            metal: Metal::Warm,
            light: Light::Dramatic,
        };
        let blueprint = assembler.assemble_blueprint(&v).unwrap();
        assert_eq!(blueprint.resolved_preset, None);
        assert_eq!(blueprint.sections.ids().len(), 5);
    }
}

mod journal {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;
    use wedding_blueprint::journal::{
        DEFAULT_CAPACITY, GenerationEntry, GenerationJournal, JsonFileJournal, record_best_effort,
    };

    #[test]
    fn log_is_capped_at_default_capacity() {
        let tmp = TempDir::new().unwrap();
        let journal = JsonFileJournal::new(tmp.path().join("journal.json"), DEFAULT_CAPACITY);
        let assembler = assembler();
        let vectors: Vec<AxisVector> = all_vectors().into_iter().take(DEFAULT_CAPACITY + 5).collect();
        for v in &vectors {
            let blueprint = assembler.assemble_blueprint(v).unwrap();
            record_best_effort(
                &journal,
                GenerationEntry::from_blueprint(PartialAxisVector::from(*v), &blueprint, Utc::now()),
            );
        }
        let entries = journal.entries().unwrap();
        assert_eq!(entries.len(), DEFAULT_CAPACITY);
        assert_eq!(entries[0].axis_vector, vectors[5]);
        assert_eq!(entries.last().unwrap().axis_vector, *vectors.last().unwrap());
    }

    #[test]
    fn entry_records_ids_and_keys() {
        let blueprint = assembler().assemble_blueprint(&example_vector()).unwrap();
        let entry = GenerationEntry::from_blueprint(PartialAxisVector::default(), &blueprint, Utc::now());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["chosen_component_ids"]["florals"], "flo-ikebana-line");
        assert_eq!(json["conflicts"][0], "mood-mismatch");
        assert_eq!(json["tensions"][0], "metal-temperature-tension");
        assert_eq!(json["axis_vector"]["formality"], 4);
    }
}

mod config {
    use tempfile::TempDir;
    use wedding_blueprint::Config;

    #[test]
    fn first_run_bootstraps_config_directory() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load_or_init_in(tmp.path()).unwrap();
        assert!(tmp.path().join(".wbg").join("config.toml").is_file());
        let again = Config::load_or_init_in(tmp.path()).unwrap();
        assert_eq!(again.config_path, config.config_path);
    }
}
