// gui.rs

use crate::{
    audio_player::audio_player::AudioPlayer,
    music_theory::music_theory::{
        build_progression, build_scale, DegreeChord, Note, Scale, ScaleType, ALL_KEYS,
    },
    tone::tone::Waveform,
};
use eframe::egui;
use egui::ScrollArea;
use egui_plot::{Line, Plot, PlotPoints};

/// Samples per cycle in the waveform preview plot.
const PREVIEW_POINTS: usize = 256;

#[derive(Clone)]
pub struct Configs {
    pub volume: f32,
    pub waveform: Waveform,
}

impl Configs {
    pub fn new() -> Self {
        Self {
            volume: 0.5,
            waveform: Waveform::Sine,
        }
    }
}

pub struct ChordApp {
    selected_key: Option<Note>,
    scale_type: ScaleType,
    scale: Option<Scale>,
    progression: Vec<DegreeChord>,
    audio_player: Option<AudioPlayer>,
    audio_error: Option<String>,
    pub configs: Configs,
}

impl ChordApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            selected_key: None,
            scale_type: ScaleType::Major,
            scale: None,
            progression: Vec::new(),
            audio_player: None,
            audio_error: None,
            configs: Configs::new(),
        }
    }

    /// Recomputes the whole seven-chord progression; the previous display is
    /// replaced wholesale, never patched.
    fn rebuild_progression(&mut self) {
        match self.selected_key {
            Some(key) => {
                self.scale = Some(build_scale(key, self.scale_type));
                self.progression = build_progression(key, self.scale_type);
            }
            None => {
                self.scale = None;
                self.progression.clear();
            }
        }
    }

    /// The output stream is only acquired once someone actually plays a
    /// chord; a failure is remembered and shown instead of retried.
    fn ensure_audio_player(&mut self) {
        if self.audio_player.is_some() || self.audio_error.is_some() {
            return;
        }
        match AudioPlayer::new(self.configs.volume) {
            Ok(player) => self.audio_player = Some(player),
            Err(error) => self.audio_error = Some(error),
        }
    }

    fn play_chord(&mut self, chord_index: usize) {
        self.ensure_audio_player();

        if let (Some(player), Some(chord)) =
            (&self.audio_player, self.progression.get(chord_index))
        {
            if let Err(error) = player.play_triad(&chord.triad, self.configs.waveform) {
                self.audio_error = Some(error);
            }
        }
    }

    fn render_waveform_preview(&self, ui: &mut egui::Ui) {
        let waveform = self.configs.waveform;
        let points: PlotPoints = (0..PREVIEW_POINTS)
            .map(|i| {
                let phase = i as f32 / PREVIEW_POINTS as f32;
                [phase as f64, waveform.sample(phase) as f64]
            })
            .collect();
        let line = Line::new(points).name(waveform.to_string());

        Plot::new("waveform_preview")
            .view_aspect(2.0)
            .include_y(-1.1)
            .include_y(1.1)
            .show(ui, |plot_ui| {
                plot_ui.line(line);
            });
    }
}

impl eframe::App for ChordApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut selection_changed = false;

        egui::SidePanel::left("left_panel").show(ctx, |ui| {
            ui.group(|ui| {
                ui.heading("Key & scale");
                egui::ComboBox::new("key_selection", "Key")
                    .selected_text(match self.selected_key {
                        Some(key) => key.to_string(),
                        None => "-".to_owned(),
                    })
                    .show_ui(ui, |ui| {
                        for &key in ALL_KEYS.iter() {
                            let checked = self.selected_key == Some(key);
                            if ui.selectable_label(checked, key.to_string()).clicked() {
                                self.selected_key = Some(key);
                                selection_changed = true;
                            }
                        }
                    });

                egui::ComboBox::new("scale_selection", "Scale")
                    .selected_text(self.scale_type.to_string())
                    .show_ui(ui, |ui| {
                        for &scale_type in ScaleType::ALL.iter() {
                            let checked = self.scale_type == scale_type;
                            if ui
                                .selectable_label(checked, scale_type.to_string())
                                .clicked()
                            {
                                self.scale_type = scale_type;
                                selection_changed = true;
                            }
                        }
                    });
            });

            ui.group(|ui| {
                ui.heading("Playback");
                egui::ComboBox::new("waveform_selection", "Waveform")
                    .selected_text(self.configs.waveform.to_string())
                    .show_ui(ui, |ui| {
                        for &waveform in Waveform::ALL.iter() {
                            let checked = self.configs.waveform == waveform;
                            if ui
                                .selectable_label(checked, waveform.to_string())
                                .clicked()
                            {
                                self.configs.waveform = waveform;
                            }
                        }
                    });

                ui.horizontal(|ui| {
                    ui.label("Volume:");
                    if ui
                        .add(egui::Slider::new(&mut self.configs.volume, 0.0..=1.0).step_by(0.01))
                        .changed()
                    {
                        if let Some(player) = &self.audio_player {
                            player.set_volume(self.configs.volume);
                        }
                    }
                });

                self.render_waveform_preview(ui);
            });

            if let Some(error) = &self.audio_error {
                ui.separator();
                ui.colored_label(
                    egui::Color32::RED,
                    format!("Audio playback unavailable: {}", error),
                );
            }
        });

        if selection_changed {
            self.rebuild_progression();
        }

        let mut play_request = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Diatonic chords");

            match self.selected_key {
                None => {
                    ui.label("Please select a key.");
                }
                Some(key) => {
                    if let Some(scale) = &self.scale {
                        ui.label(format!("{} {} scale: {}", key, self.scale_type, scale));
                    }
                    ui.separator();

                    ScrollArea::vertical()
                        .id_salt("chord_scroll_area")
                        .show(ui, |ui| {
                            for (index, chord) in self.progression.iter().enumerate() {
                                ui.group(|ui| {
                                    ui.horizontal(|ui| {
                                        ui.strong(format!(
                                            "{}: {} {}",
                                            chord.numeral, chord.root, chord.quality
                                        ));
                                        if ui.button("Play").clicked() {
                                            play_request = Some(index);
                                        }
                                    });
                                    ui.label(format!("Notes: {}", chord.triad));
                                });
                            }
                        });
                }
            }
        });

        if let Some(index) = play_request {
            self.play_chord(index);
        }
    }
}
