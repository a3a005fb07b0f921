//! Looping background music.
//!
//! Webviews usually refuse to start audio before the guest has interacted
//! with the page. Playback is attempted once on load, and again on the first
//! click, the first touch and the first key press, each at most once.

use tracing::{debug, info};

/// Playback volume, 0..1.
pub const VOLUME: f64 = 0.5;

/// Outcome of the last `play()` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicState {
    /// Nothing attempted yet
    Idle,
    /// A `play()` request is in flight
    Requested,
    Playing,
    /// Autoplay was refused; waiting for an interaction
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Click,
    Touch,
    Key,
}

impl Interaction {
    fn bit(self) -> u8 {
        match self {
            Interaction::Click => 1,
            Interaction::Touch => 2,
            Interaction::Key => 4,
        }
    }

    /// DOM event name of the interaction.
    pub fn event_name(self) -> &'static str {
        match self {
            Interaction::Click => "click",
            Interaction::Touch => "touchstart",
            Interaction::Key => "keydown",
        }
    }

    pub fn from_event_name(name: &str) -> Option<Self> {
        match name {
            "click" => Some(Interaction::Click),
            "touchstart" => Some(Interaction::Touch),
            "keydown" => Some(Interaction::Key),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BackgroundMusic {
    source: Option<String>,
    state: MusicState,
    /// Interactions already spent on a retry
    used: u8,
}

impl BackgroundMusic {
    /// Music from `source`. A blank or missing source disables playback.
    pub fn new(source: Option<&str>) -> Self {
        let source = source
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        Self {
            source,
            state: MusicState::Idle,
            used: 0,
        }
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn volume(&self) -> f64 {
        VOLUME
    }

    pub fn state(&self) -> MusicState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == MusicState::Playing
    }

    /// Page finished loading. Returns whether to request playback.
    pub fn autoplay(&mut self) -> bool {
        if self.source.is_none() || self.state != MusicState::Idle {
            return false;
        }
        self.state = MusicState::Requested;
        true
    }

    /// First interaction of its kind. Returns whether to request playback.
    ///
    /// Each kind counts once, whether or not it led to a retry.
    pub fn interaction(&mut self, kind: Interaction) -> bool {
        if self.used & kind.bit() != 0 {
            return false;
        }
        self.used |= kind.bit();

        if self.source.is_none() || matches!(self.state, MusicState::Playing | MusicState::Requested) {
            return false;
        }
        debug!(event = kind.event_name(), "Retrying background music");
        self.state = MusicState::Requested;
        true
    }

    /// Result of a `play()` request.
    pub fn play_settled(&mut self, started: bool) {
        if self.state != MusicState::Requested {
            return;
        }
        if started {
            info!(source = ?self.source, "Background music playing");
            self.state = MusicState::Playing;
        } else {
            debug!("Autoplay prevented, waiting for user interaction");
            self.state = MusicState::Blocked;
        }
    }

    /// Interactions still able to trigger a retry.
    pub fn pending_interactions(&self) -> Vec<Interaction> {
        [Interaction::Click, Interaction::Touch, Interaction::Key]
            .into_iter()
            .filter(|kind| self.used & kind.bit() == 0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn music() -> BackgroundMusic {
        BackgroundMusic::new(Some("assets/music/nhac-cuoi.mp3"))
    }

    #[test]
    fn test_autoplay_success() {
        let mut music = music();
        assert_eq!(music.volume(), 0.5);
        assert!(music.autoplay());
        assert!(!music.autoplay());
        music.play_settled(true);
        assert!(music.is_playing());

        // Already playing: interactions are spent without a retry
        assert!(!music.interaction(Interaction::Click));
        assert_eq!(
            music.pending_interactions(),
            vec![Interaction::Touch, Interaction::Key]
        );
    }

    #[test]
    fn test_blocked_autoplay_retries_on_first_interaction() {
        let mut music = music();
        assert!(music.autoplay());
        music.play_settled(false);
        assert_eq!(music.state(), MusicState::Blocked);

        assert!(music.interaction(Interaction::Key));
        assert_eq!(music.state(), MusicState::Requested);
        music.play_settled(true);
        assert!(music.is_playing());
    }

    #[test]
    fn test_each_interaction_kind_retries_once() {
        let mut music = music();
        music.autoplay();
        music.play_settled(false);

        assert!(music.interaction(Interaction::Click));
        music.play_settled(false);
        assert!(!music.interaction(Interaction::Click));

        assert!(music.interaction(Interaction::Touch));
        music.play_settled(false);
        assert!(music.interaction(Interaction::Key));
        music.play_settled(false);

        assert!(music.pending_interactions().is_empty());
        assert_eq!(music.state(), MusicState::Blocked);
    }

    #[test]
    fn test_interaction_during_request_does_not_double_play() {
        let mut music = music();
        music.autoplay();
        assert!(!music.interaction(Interaction::Touch));
        music.play_settled(false);
        assert!(!music.interaction(Interaction::Touch));
        assert!(music.interaction(Interaction::Click));
    }

    #[test]
    fn test_missing_source_never_plays() {
        for source in [None, Some(""), Some("   ")] {
            let mut music = BackgroundMusic::new(source);
            assert_eq!(music.source(), None);
            assert!(!music.autoplay());
            assert!(!music.interaction(Interaction::Click));
            assert_eq!(music.state(), MusicState::Idle);
        }
    }

    #[test]
    fn test_stale_settle_is_ignored() {
        let mut music = music();
        music.play_settled(true);
        assert_eq!(music.state(), MusicState::Idle);
    }

    #[test]
    fn test_event_names() {
        for kind in [Interaction::Click, Interaction::Touch, Interaction::Key] {
            assert_eq!(Interaction::from_event_name(kind.event_name()), Some(kind));
        }
        assert_eq!(Interaction::from_event_name("scroll"), None);
    }
}
