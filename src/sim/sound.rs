// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Ambient sound track registry and simulated player.
//!
//! No audio is decoded or played; the player is pure state driving the
//! sound modal's display (spinning vinyl, track list highlight).

/// The available focus soundscapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundType {
    Rain,
    Fire,
    Cafe,
    Library,
}

/// A track entry in the registry.
pub struct SoundTrack {
    pub kind: SoundType,
    pub label: &'static str,
    pub icon: &'static str,
}

/// All tracks, in the order shown in the track list.
pub static SOUND_TRACKS: [SoundTrack; 4] = [
    SoundTrack { kind: SoundType::Rain, label: "빗소리", icon: "🌧" },
    SoundTrack { kind: SoundType::Fire, label: "장작 소리", icon: "🔥" },
    SoundTrack { kind: SoundType::Cafe, label: "카페 소음", icon: "☕" },
    SoundTrack { kind: SoundType::Library, label: "도서관", icon: "📚" },
];

/// Simulated playback state.
pub struct Player {
    playing: bool,
    current: SoundType,
}

impl Player {
    /// Stopped, first track cued.
    pub fn new() -> Self {
        Self {
            playing: false,
            current: SoundType::Rain,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn current(&self) -> SoundType {
        self.current
    }

    /// The registry entry for the current track.
    pub fn track(&self) -> &'static SoundTrack {
        SOUND_TRACKS
            .iter()
            .find(|t| t.kind == self.current)
            .unwrap_or(&SOUND_TRACKS[0])
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    /// Cue a track and start playing it.
    pub fn play(&mut self, kind: SoundType) {
        self.current = kind;
        self.playing = true;
        log::info!("Playing soundscape {:?}", kind);
    }

    /// Advance to the next track in registry order, wrapping around.
    /// Playback state is kept as-is.
    pub fn skip(&mut self) {
        let pos = SOUND_TRACKS
            .iter()
            .position(|t| t.kind == self.current)
            .unwrap_or(0);
        self.current = SOUND_TRACKS[(pos + 1) % SOUND_TRACKS.len()].kind;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_stopped_on_first_track() {
        let player = Player::new();
        assert!(!player.is_playing());
        assert_eq!(player.current(), SoundType::Rain);
    }

    #[test]
    fn selecting_a_track_starts_playback() {
        let mut player = Player::new();
        player.play(SoundType::Cafe);
        assert!(player.is_playing());
        assert_eq!(player.current(), SoundType::Cafe);
        assert_eq!(player.track().label, "카페 소음");
    }

    #[test]
    fn skip_cycles_through_the_registry() {
        let mut player = Player::new();
        player.skip();
        assert_eq!(player.current(), SoundType::Fire);
        player.skip();
        player.skip();
        player.skip();
        assert_eq!(player.current(), SoundType::Rain);
    }

    #[test]
    fn toggle_flips_playback() {
        let mut player = Player::new();
        player.toggle();
        assert!(player.is_playing());
        player.toggle();
        assert!(!player.is_playing());
    }
}
