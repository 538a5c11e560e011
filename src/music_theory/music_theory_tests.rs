#[cfg(test)]
mod tests {
    use crate::music_theory::music_theory::{
        build_progression, build_scale, build_triad, chromatic_index, frequency_of, spelling_for,
        ChordQuality, Note, ScaleType, ALL_KEYS, FLAT_SPELLING, ROMAN_NUMERALS,
    };

    /// Upward chromatic distance from one pitch class to another.
    fn chromatic_distance(from: Note, to: Note) -> usize {
        (chromatic_index(to) + 12 - chromatic_index(from)) % 12
    }

    #[test]
    fn every_scale_has_eight_notes_and_repeats_the_tonic() {
        for &key in ALL_KEYS.iter() {
            for &scale_type in ScaleType::ALL.iter() {
                let scale = build_scale(key, scale_type);
                assert_eq!(scale.notes.len(), 8);
                assert_eq!(scale.notes[0], key, "scale must start on its key");
                assert_eq!(scale.notes[7], key, "scale must close on the tonic octave");
            }
        }
    }

    #[test]
    fn scale_steps_follow_the_interval_table() {
        for &key in ALL_KEYS.iter() {
            for &scale_type in ScaleType::ALL.iter() {
                let scale = build_scale(key, scale_type);
                let intervals = scale_type.intervals();
                for degree in 0..7 {
                    assert_eq!(
                        chromatic_distance(scale.notes[degree], scale.notes[degree + 1]),
                        intervals[degree],
                        "wrong step from {} to {} in {} {}",
                        scale.notes[degree],
                        scale.notes[degree + 1],
                        key,
                        scale_type,
                    );
                }
            }
        }
    }

    #[test]
    fn quality_tables_match_diatonic_harmony() {
        use ChordQuality::{Diminished, Major, Minor};
        assert_eq!(
            ScaleType::Major.qualities(),
            [Major, Minor, Minor, Major, Major, Minor, Diminished]
        );
        assert_eq!(
            ScaleType::Minor.qualities(),
            [Minor, Diminished, Major, Minor, Minor, Major, Major]
        );
    }

    #[test]
    fn quality_adjustments_flatten_relative_to_the_major_scaffold() {
        for &key in ALL_KEYS.iter() {
            for &scale_type in ScaleType::ALL.iter() {
                let scale = build_scale(key, scale_type);
                for degree in 0..7 {
                    let major = build_triad(&scale, degree, ChordQuality::Major);
                    let minor = build_triad(&scale, degree, ChordQuality::Minor);
                    let diminished = build_triad(&scale, degree, ChordQuality::Diminished);

                    // Major quality is the unmodified scaffold: a plain major
                    // triad on the degree root.
                    assert_eq!(chromatic_distance(major.notes[0], major.notes[1]), 4);
                    assert_eq!(chromatic_distance(major.notes[0], major.notes[2]), 7);

                    assert_eq!(minor.notes[0], major.notes[0]);
                    assert_eq!(chromatic_distance(minor.notes[1], major.notes[1]), 1);
                    assert_eq!(minor.notes[2], major.notes[2]);

                    assert_eq!(diminished.notes[0], major.notes[0]);
                    assert_eq!(chromatic_distance(diminished.notes[1], major.notes[1]), 1);
                    assert_eq!(chromatic_distance(diminished.notes[2], major.notes[2]), 1);
                }
            }
        }
    }

    #[test]
    fn progression_roots_walk_the_scale() {
        for &key in ALL_KEYS.iter() {
            for &scale_type in ScaleType::ALL.iter() {
                let scale = build_scale(key, scale_type);
                let chords = build_progression(key, scale_type);
                assert_eq!(chords.len(), 7);
                for (degree, chord) in chords.iter().enumerate() {
                    assert_eq!(chord.root, scale.notes[degree]);
                    assert_eq!(chord.root, chord.triad.notes[0]);
                }
            }
        }
    }

    #[test]
    fn c_major_progression_matches_the_reference() {
        use Note::{A, B, C, D, E, F, G};
        let scale = build_scale(C, ScaleType::Major);
        assert_eq!(scale.notes, [C, D, E, F, G, A, B, C]);

        let chords = build_progression(C, ScaleType::Major);
        assert_eq!(chords[0].triad.notes, [C, E, G]);
        assert_eq!(chords[0].quality, ChordQuality::Major);
        assert_eq!(chords[1].triad.notes, [D, F, A]);
        assert_eq!(chords[1].quality, ChordQuality::Minor);
        assert_eq!(chords[6].triad.notes, [B, D, F]);
        assert_eq!(chords[6].quality, ChordQuality::Diminished);
    }

    #[test]
    fn f_major_resolves_to_the_flat_spelling() {
        use Note::{A, BFlat, C, D, E, F, G};
        assert_eq!(spelling_for(F), &FLAT_SPELLING);

        let scale = build_scale(F, ScaleType::Major);
        assert_eq!(scale.notes, [F, G, A, BFlat, C, D, E, F]);

        let chords = build_progression(F, ScaleType::Major);
        assert_eq!(chords[3].numeral, "IV");
        assert_eq!(chords[3].triad.notes, [BFlat, D, F]);
        assert_eq!(chords[3].quality, ChordQuality::Major);
    }

    #[test]
    fn a_minor_progression_starts_on_a_minor_triad() {
        use Note::{A, B, C, D, E, F, G};
        let scale = build_scale(A, ScaleType::Minor);
        assert_eq!(scale.notes, [A, B, C, D, E, F, G, A]);

        let chords = build_progression(A, ScaleType::Minor);
        assert_eq!(chords[0].triad.notes, [A, C, E]);
        assert_eq!(chords[0].quality, ChordQuality::Minor);
    }

    #[test]
    fn enharmonic_spellings_share_a_frequency() {
        assert_eq!(frequency_of(Note::CSharp), 277.18);
        assert_eq!(frequency_of(Note::DFlat), 277.18);
    }

    #[test]
    fn reference_octave_frequencies() {
        assert_eq!(frequency_of(Note::C), 261.63);
        assert_eq!(frequency_of(Note::E), 329.63);
        assert_eq!(frequency_of(Note::G), 392.00);
        assert_eq!(frequency_of(Note::A), 440.00);
    }

    #[test]
    fn numerals_stay_fixed_in_both_modes() {
        assert_eq!(ROMAN_NUMERALS, ["I", "ii", "iii", "IV", "V", "vi", "vii°"]);
        for &scale_type in ScaleType::ALL.iter() {
            let chords = build_progression(Note::D, scale_type);
            let numerals: Vec<&str> = chords.iter().map(|chord| chord.numeral).collect();
            assert_eq!(numerals, ROMAN_NUMERALS);
        }
    }

    #[test]
    fn note_names_render_conventionally() {
        assert_eq!(Note::CSharp.to_string(), "C#");
        assert_eq!(Note::DFlat.to_string(), "Db");
        assert_eq!(Note::B.to_string(), "B");
    }
}
