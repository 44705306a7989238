//! Audio routing
//!
//! Maps game events to sound effects and runs the background music toggle.
//! Actual playback goes through an [`AudioBackend`] supplied by the host, and
//! a blocked or failed playback never affects the game.

use crate::game::GameListener;
use crate::settings::Settings;
use crate::sim::ModeId;

/// Track played when music is switched on without a user-picked track
pub const DEFAULT_MUSIC_TRACK: &str = "music.mp3";

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Object caught
    Catch,
    /// Last life lost
    Lose,
}

impl SoundEffect {
    /// Asset file for this effect
    pub fn asset(&self) -> &'static str {
        match self {
            SoundEffect::Catch => "catch.mp3",
            SoundEffect::Lose => "catch2.mp3",
        }
    }
}

/// Host playback. Calls are fire-and-forget.
pub trait AudioBackend {
    /// Restart and play an effect. Returns false if the host refused (e.g. autoplay policy).
    fn play_effect(&mut self, effect: SoundEffect, volume: f32) -> bool;
    /// Start looping a music track. Returns false if playback was blocked.
    fn play_music(&mut self, track: &str, volume: f32) -> bool;
    fn stop_music(&mut self);
    fn set_music_volume(&mut self, volume: f32);
}

/// Audio manager for the game
pub struct AudioManager<B: AudioBackend> {
    backend: B,
    sfx_volume: f32,
    /// Effects are only played after a user gesture has unlocked audio
    unlocked: bool,
    pub music: MusicPlayer,
}

impl<B: AudioBackend> AudioManager<B> {
    pub fn new(backend: B, settings: &Settings) -> Self {
        Self {
            backend,
            sfx_volume: settings.effective_sfx_volume(),
            unlocked: false,
            music: MusicPlayer::new(settings.music_on, settings.effective_music_volume()),
        }
    }

    /// Call from a user gesture (click, tap, key press)
    pub fn unlock(&mut self) {
        if !self.unlocked {
            log::info!("Audio unlocked");
        }
        self.unlocked = true;
        self.music.on_user_gesture(&mut self.backend);
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = clamp_volume(vol);
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        if !self.unlocked || self.sfx_volume <= 0.0 {
            return;
        }
        if !self.backend.play_effect(effect, self.sfx_volume) {
            log::debug!("Effect {:?} was blocked", effect);
        }
    }

    pub fn toggle_music(&mut self) -> bool {
        self.music.toggle(&mut self.backend)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

impl<B: AudioBackend> GameListener for AudioManager<B> {
    fn on_started(&mut self, _mode: ModeId) {
        // Play buttons are user gestures
        self.unlock();
    }

    fn on_caught(&mut self, _score: u32) {
        self.play(SoundEffect::Catch);
    }

    fn on_game_over(&mut self, _score: u32) {
        self.play(SoundEffect::Lose);
    }
}

/// Background music on/off state.
///
/// Browsers refuse to start audio outside a user gesture, so a refused start
/// arms the player and the next gesture retries once.
#[derive(Debug, Clone, PartialEq)]
pub struct MusicPlayer {
    on: bool,
    volume: f32,
    track: Option<String>,
    playing: bool,
    armed: bool,
}

impl MusicPlayer {
    /// Music left on last session is armed to start at the first gesture
    pub fn new(on: bool, volume: f32) -> Self {
        Self {
            on,
            volume: clamp_volume(volume),
            track: on.then(|| DEFAULT_MUSIC_TRACK.to_string()),
            playing: false,
            armed: on,
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn track(&self) -> Option<&str> {
        self.track.as_deref()
    }

    /// Flip music on/off; returns the new state
    pub fn toggle<B: AudioBackend>(&mut self, backend: &mut B) -> bool {
        self.on = !self.on;
        if self.on {
            if self.track.is_none() {
                self.track = Some(DEFAULT_MUSIC_TRACK.to_string());
            }
            self.try_play(backend);
        } else {
            backend.stop_music();
            self.playing = false;
            self.armed = false;
        }
        log::info!("Music {}", if self.on { "on" } else { "off" });
        self.on
    }

    /// Use a user-picked track and switch music on
    pub fn select_track<B: AudioBackend>(&mut self, track: &str, backend: &mut B) {
        self.track = Some(track.to_string());
        self.on = true;
        self.try_play(backend);
    }

    pub fn set_volume<B: AudioBackend>(&mut self, volume: f32, backend: &mut B) {
        self.volume = clamp_volume(volume);
        backend.set_music_volume(self.volume);
    }

    /// Retry an armed start
    pub fn on_user_gesture<B: AudioBackend>(&mut self, backend: &mut B) {
        if !self.armed {
            return;
        }
        self.armed = false;
        if self.on && !self.playing {
            self.try_play(backend);
        }
    }

    fn try_play<B: AudioBackend>(&mut self, backend: &mut B) {
        let track = self.track.as_deref().unwrap_or(DEFAULT_MUSIC_TRACK);
        if backend.play_music(track, self.volume) {
            self.playing = true;
            self.armed = false;
        } else {
            log::debug!("Music start blocked, waiting for a user gesture");
            self.playing = false;
            self.armed = true;
        }
    }
}

fn clamp_volume(vol: f32) -> f32 {
    if vol.is_finite() {
        vol.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
