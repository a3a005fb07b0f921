//! Hearts drifting down over the page.

use std::time::Duration;

use dioxus::prelude::*;
use thiepcuoi_core::hearts::START_DELAY;
use thiepcuoi_core::HeartRain;
use tokio::time::Instant;

/// Check for expired hearts at least this often while stopped.
const IDLE_POLL: Duration = Duration::from_millis(500);

const VISIBILITY_SCRIPT: &str = r#"
document.addEventListener('visibilitychange', () => dioxus.send(!document.hidden));
await new Promise(() => {});
"#;

#[component]
pub fn FallingHearts() -> Element {
    let mut rain = use_signal(HeartRain::new);

    use_effect(move || {
        spawn(async move {
            tokio::time::sleep(START_DELAY).await;
            let mut rng = rand::rng();
            rain.write().start(Instant::now(), &mut rng);

            let mut visibility = document::eval(VISIBILITY_SCRIPT);
            loop {
                let wake = rain
                    .peek()
                    .next_spawn()
                    .unwrap_or_else(|| Instant::now() + IDLE_POLL);

                tokio::select! {
                    _ = tokio::time::sleep_until(wake) => {
                        rain.write().tick(Instant::now(), &mut rng);
                    }
                    visible = visibility.recv::<bool>() => match visible {
                        Ok(visible) => {
                            tracing::debug!(visible, "Page visibility changed");
                            rain.write().set_visible(visible, Instant::now(), &mut rng);
                        }
                        Err(e) => {
                            tracing::debug!(error = ?e, "Visibility events unavailable");
                            visibility = document::eval("await new Promise(() => {});");
                        }
                    },
                }
            }
        });
    });

    rsx! {
        div { class: "hearts-layer",
            for heart in rain.read().hearts().iter() {
                div { key: "{heart.id}", class: "falling-heart", style: "{heart.style()}", "❤" }
            }
        }
    }
}
