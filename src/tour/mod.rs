//! Virtual tour engine
//!
//! Tracks the active tour stop, narration language, and playback state,
//! and drives the panorama and speech collaborators. Both ports are
//! fire-and-forget; commands issued before a collaborator attaches are
//! dropped silently, like map commands.

use crate::record::tour::TourScene;
use crate::store::RecordStore;
use std::sync::Arc;
use tracing::debug;

/// Scene crossfade duration used by the panorama collaborator.
pub const SCENE_TRANSITION_MS: u64 = 700;

/// Narration languages offered by the tour views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Nepali,
    Sikkimese,
}

impl Language {
    /// BCP-47-ish code handed to the speech collaborator. Sikkimese
    /// narration is not recorded; it falls back to English text.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Nepali => "ne",
            Language::Sikkimese => "si",
        }
    }
}

/// External panorama viewer.
pub trait PanoramaPort: Send + Sync {
    fn switch_scene(&self, index: usize, transition_ms: u64);
}

/// External speech synthesizer. Fire-and-forget; no return contract.
pub trait SpeechPort: Send + Sync {
    fn speak(&self, text: &str, language: &str);
    fn cancel(&self);
}

/// Per-view tour state.
pub struct TourEngine {
    store: RecordStore<TourScene>,
    active: usize,
    language: Language,
    playing: bool,
    muted: bool,
    panorama: Option<Arc<dyn PanoramaPort>>,
    speech: Option<Arc<dyn SpeechPort>>,
}

impl TourEngine {
    pub fn new(store: RecordStore<TourScene>) -> Self {
        TourEngine {
            store,
            active: 0,
            language: Language::default(),
            playing: false,
            muted: false,
            panorama: None,
            speech: None,
        }
    }

    pub fn attach_panorama(&mut self, port: Arc<dyn PanoramaPort>) {
        self.panorama = Some(port);
    }

    pub fn attach_speech(&mut self, port: Arc<dyn SpeechPort>) {
        self.speech = Some(port);
    }

    pub fn store(&self) -> &RecordStore<TourScene> {
        &self.store
    }

    /// Replace a pending store once the one-shot fetch resolves; the
    /// cursor restarts at the first stop.
    pub fn hydrate(&mut self, store: RecordStore<TourScene>) {
        self.store = store;
        self.active = 0;
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_scene(&self) -> Option<&TourScene> {
        self.store.records()?.get(self.active)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Switch to another stop. Out-of-range indices and re-selecting the
    /// current stop are no-ops; narration restarts when playing.
    pub fn switch_to(&mut self, index: usize) {
        if index == self.active || index >= self.store.len() {
            return;
        }
        self.active = index;
        if let Some(panorama) = &self.panorama {
            panorama.switch_scene(index, SCENE_TRANSITION_MS);
        } else {
            debug!(index, "Panorama not attached, dropping scene switch");
        }
        if self.playing {
            self.restart_narration();
        }
    }

    /// Change narration language; restarts narration when playing.
    pub fn set_language(&mut self, language: Language) {
        if self.language == language {
            return;
        }
        self.language = language;
        if self.playing {
            self.restart_narration();
        }
    }

    pub fn play(&mut self) {
        if self.playing {
            return;
        }
        self.playing = true;
        self.restart_narration();
    }

    pub fn pause(&mut self) {
        if !self.playing {
            return;
        }
        self.playing = false;
        if let Some(speech) = &self.speech {
            speech.cancel();
        }
    }

    /// Mute stops speech output without losing playback state.
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        if let Some(speech) = &self.speech {
            if self.muted {
                speech.cancel();
            } else if self.playing {
                self.restart_narration();
            }
        }
    }

    fn restart_narration(&self) {
        if self.muted {
            return;
        }
        let Some(speech) = &self.speech else {
            debug!("Speech not attached, dropping narration");
            return;
        };
        speech.cancel();
        let text = self
            .active_scene()
            .and_then(|scene| scene.narration.text_for(self.language.code()));
        if let Some(text) = text {
            speech.speak(text, self.language.code());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::tour::{Narration, TourStop};
    use parking_lot::Mutex;

    #[derive(Default)]
    struct RecordingPorts {
        scenes: Mutex<Vec<usize>>,
        spoken: Mutex<Vec<(String, String)>>,
        cancels: Mutex<usize>,
    }

    impl PanoramaPort for RecordingPorts {
        fn switch_scene(&self, index: usize, transition_ms: u64) {
            assert_eq!(transition_ms, SCENE_TRANSITION_MS);
            self.scenes.lock().push(index);
        }
    }

    impl SpeechPort for RecordingPorts {
        fn speak(&self, text: &str, language: &str) {
            self.spoken
                .lock()
                .push((text.to_string(), language.to_string()));
        }

        fn cancel(&self) {
            *self.cancels.lock() += 1;
        }
    }

    fn two_stop_store() -> RecordStore<TourScene> {
        let stops = vec![
            TourStop {
                title: Some("Main Prayer Hall".to_string()),
                narration: Narration {
                    en: Some("The main hall.".to_string()),
                    hi: Some("मुख्य हॉल।".to_string()),
                    ne: None,
                },
                ..TourStop::default()
            },
            TourStop {
                title: Some("Meditation Garden".to_string()),
                narration: Narration {
                    en: Some("The garden.".to_string()),
                    ..Narration::default()
                },
                ..TourStop::default()
            },
        ];
        RecordStore::ready(
            stops
                .into_iter()
                .enumerate()
                .map(|(i, s)| s.normalize(i))
                .collect(),
        )
    }

    fn engine_with_ports() -> (TourEngine, Arc<RecordingPorts>) {
        let mut engine = TourEngine::new(two_stop_store());
        let ports = Arc::new(RecordingPorts::default());
        engine.attach_panorama(ports.clone());
        engine.attach_speech(ports.clone());
        (engine, ports)
    }

    #[test]
    fn test_switch_to_emits_scene_command() {
        let (mut engine, ports) = engine_with_ports();
        engine.switch_to(1);
        assert_eq!(*ports.scenes.lock(), vec![1]);
        assert_eq!(engine.active_scene().unwrap().title, "Meditation Garden");
    }

    #[test]
    fn test_switch_to_same_or_out_of_range_is_no_op() {
        let (mut engine, ports) = engine_with_ports();
        engine.switch_to(0);
        engine.switch_to(5);
        assert!(ports.scenes.lock().is_empty());
        assert_eq!(engine.active_index(), 0);
    }

    #[test]
    fn test_playing_switch_restarts_narration() {
        let (mut engine, ports) = engine_with_ports();
        engine.play();
        assert_eq!(ports.spoken.lock().len(), 1);

        engine.switch_to(1);
        let spoken = ports.spoken.lock();
        assert_eq!(spoken.len(), 2);
        assert_eq!(spoken[1].0, "The garden.");
    }

    #[test]
    fn test_sikkimese_falls_back_to_english_text() {
        let (mut engine, ports) = engine_with_ports();
        engine.set_language(Language::Sikkimese);
        engine.play();
        let spoken = ports.spoken.lock();
        assert_eq!(spoken[0], ("The main hall.".to_string(), "si".to_string()));
    }

    #[test]
    fn test_mute_cancels_and_unmute_resumes() {
        let (mut engine, ports) = engine_with_ports();
        engine.play();
        engine.toggle_mute();
        assert!(*ports.cancels.lock() >= 1);

        let before = ports.spoken.lock().len();
        engine.toggle_mute();
        assert_eq!(ports.spoken.lock().len(), before + 1);
    }

    #[test]
    fn test_detached_ports_drop_commands_silently() {
        let mut engine = TourEngine::new(two_stop_store());
        engine.switch_to(1);
        engine.play();
        assert_eq!(engine.active_index(), 1);
        assert!(engine.is_playing());
    }
}
