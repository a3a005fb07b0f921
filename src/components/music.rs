//! Looping background track, started on load or on the first interaction.

use dioxus::prelude::*;
use thiepcuoi_core::{BackgroundMusic, Interaction};

use crate::context::use_config;

/// Forwards the first click, touch and key press, once each.
const INTERACTION_SCRIPT: &str = r#"
for (const name of ['click', 'touchstart', 'keydown']) {
    document.addEventListener(name, () => dioxus.send(name), { once: true, capture: true });
}
await new Promise(() => {});
"#;

/// Ask the `<audio>` element to play and record whether it started.
async fn request_play(mut music: Signal<BackgroundMusic>) {
    let volume = music.peek().volume();
    let script = format!(
        r#"
const audio = document.getElementById('backgroundMusic');
if (!audio) {{ return false; }}
audio.volume = {volume};
try {{ await audio.play(); return true; }} catch (e) {{ return false; }}
"#
    );
    let started = match document::eval(&script).join::<bool>().await {
        Ok(started) => started,
        Err(e) => {
            tracing::debug!(error = ?e, "Background music request failed");
            false
        }
    };
    music.write().play_settled(started);
}

#[component]
pub fn MusicPlayer() -> Element {
    let config = use_config();
    let music = use_signal(|| config.peek().music());

    use_effect(move || {
        spawn(async move {
            if music.peek().source().is_none() {
                return;
            }
            let mut interactions = document::eval(INTERACTION_SCRIPT);

            let autoplay = music.write().autoplay();
            if autoplay {
                request_play(music).await;
            }

            while !music.peek().pending_interactions().is_empty() {
                let name = match interactions.recv::<String>().await {
                    Ok(name) => name,
                    Err(e) => {
                        tracing::debug!(error = ?e, "Interaction events unavailable");
                        break;
                    }
                };
                let Some(kind) = Interaction::from_event_name(&name) else {
                    continue;
                };
                let retry = music.write().interaction(kind);
                if retry {
                    request_play(music).await;
                }
            }
        });
    });

    let Some(source) = music.read().source().map(str::to_string) else {
        return VNode::empty();
    };

    rsx! {
        audio { id: "backgroundMusic", src: "{source}", r#loop: true, preload: "auto" }
    }
}
