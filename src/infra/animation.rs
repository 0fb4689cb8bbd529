//! Timer driver for [`TypingEffect`].
//!
//! The loop keeps exactly one `sleep` pending at a time. Dropping the future
//! (Dioxus does this on unmount) or aborting the task running it cancels that
//! sleep, so no tick can land after teardown.

use tracing::{debug, trace};

use crate::domain::{Step, TypingEffect, TypingFrame};

/// Runs `effect` to completion, emitting a frame up front and after every tick.
///
/// `on_complete` fires at most once, when a non-looping effect reaches its
/// full text. Looping effects never return on their own.
pub async fn run_typing<F, C>(mut effect: TypingEffect, mut on_frame: F, on_complete: C)
where
    F: FnMut(TypingFrame),
    C: FnOnce(),
{
    debug!(
        total = effect.total(),
        looping = effect.config().looping,
        "starting typing effect"
    );
    on_frame(effect.frame());

    let mut on_complete = Some(on_complete);
    let mut step = effect.begin();
    loop {
        match step {
            Step::Scheduled(delay) => {
                tokio::time::sleep(delay).await;
                step = effect.advance();
                trace!(
                    text = %effect.source().visible_text(effect.shown()),
                    phase = effect.phase().label(),
                    "tick"
                );
                on_frame(effect.frame());
            }
            Step::Completed => {
                if let Some(callback) = on_complete.take() {
                    callback();
                }
                debug!(total = effect.total(), "typing effect completed");
                break;
            }
            Step::Idle => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    };
    use std::time::Duration;

    use super::*;
    use crate::domain::{TypingConfig, TypingPhase};
    use pretty_assertions::assert_eq;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[derive(Clone, Default)]
    struct Recorder {
        frames: Arc<Mutex<Vec<String>>>,
        completions: Arc<AtomicUsize>,
    }

    impl Recorder {
        fn on_frame(&self) -> impl FnMut(TypingFrame) + Send + 'static {
            let frames = self.frames.clone();
            move |frame: TypingFrame| frames.lock().unwrap().push(frame.text())
        }

        fn on_complete(&self) -> impl FnOnce() + Send + 'static {
            let completions = self.completions.clone();
            move || {
                completions.fetch_add(1, Ordering::SeqCst);
            }
        }

        fn frames(&self) -> Vec<String> {
            self.frames.lock().unwrap().clone()
        }

        fn last(&self) -> Option<String> {
            self.frames.lock().unwrap().last().cloned()
        }

        fn completions(&self) -> usize {
            self.completions.load(Ordering::SeqCst)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn run_typing_emits_every_prefix() {
        let mut texts = Vec::new();
        let mut done = 0;
        let effect = TypingEffect::new("Hi", TypingConfig::default().with_typing_speed(ms(100)));

        let started = tokio::time::Instant::now();
        run_typing(effect, |frame| texts.push(frame.text()), || done += 1).await;

        assert_eq!(texts, vec!["", "H", "Hi"]);
        assert_eq!(done, 1);
        assert!(started.elapsed() >= ms(200));
        assert!(started.elapsed() < ms(300));
    }

    #[tokio::test(start_paused = true)]
    async fn spawned_loop_finishes_and_stays_put() {
        let recorder = Recorder::default();
        let effect = TypingEffect::new("Hi", TypingConfig::default().with_typing_speed(ms(100)));
        let handle = tokio::spawn(run_typing(effect, recorder.on_frame(), recorder.on_complete()));

        tokio::time::sleep(ms(150)).await;
        assert_eq!(recorder.last().as_deref(), Some("H"));
        assert_eq!(recorder.completions(), 0);

        tokio::time::sleep(ms(100)).await;
        assert_eq!(recorder.last().as_deref(), Some("Hi"));
        assert_eq!(recorder.completions(), 1);

        let frame_count = recorder.frames().len();
        tokio::time::sleep(ms(5_000)).await;
        assert_eq!(recorder.frames().len(), frame_count);
        assert_eq!(recorder.completions(), 1);
        assert!(handle.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn empty_text_completes_without_ticking() {
        let recorder = Recorder::default();
        let effect = TypingEffect::new("", TypingConfig::default());
        let started = tokio::time::Instant::now();
        run_typing(effect, recorder.on_frame(), recorder.on_complete()).await;

        assert_eq!(recorder.frames(), vec![String::new()]);
        assert_eq!(recorder.completions(), 1);
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn abort_stops_further_ticks() {
        let recorder = Recorder::default();
        let config = TypingConfig::looping().with_typing_speed(ms(100));
        let handle = tokio::spawn(run_typing(
            TypingEffect::new("looping text", config),
            recorder.on_frame(),
            recorder.on_complete(),
        ));

        tokio::time::sleep(ms(350)).await;
        handle.abort();
        let seen = recorder.frames();
        assert_eq!(seen.last().map(String::as_str), Some("loo"));

        tokio::time::sleep(ms(60_000)).await;
        assert_eq!(recorder.frames(), seen);
        assert!(handle.is_finished());
        assert_eq!(recorder.completions(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_future_cancels_it() {
        let recorder = Recorder::default();
        let config = TypingConfig::default().with_typing_speed(ms(100));
        let effect = TypingEffect::new("abcdef", config);
        let outcome = tokio::time::timeout(
            ms(250),
            run_typing(effect, recorder.on_frame(), recorder.on_complete()),
        )
        .await;
        assert!(outcome.is_err());
        let seen = recorder.frames().len();

        tokio::time::sleep(ms(10_000)).await;
        assert_eq!(recorder.frames().len(), seen);
        assert_eq!(recorder.completions(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn restarting_leaves_one_live_loop() {
        let first = Recorder::default();
        let second = Recorder::default();
        let config = TypingConfig::default().with_typing_speed(ms(100));

        let handle = tokio::spawn(run_typing(
            TypingEffect::new("first", config),
            first.on_frame(),
            first.on_complete(),
        ));
        tokio::time::sleep(ms(250)).await;
        handle.abort();
        let _replacement = tokio::spawn(run_typing(
            TypingEffect::new("2nd", config),
            second.on_frame(),
            second.on_complete(),
        ));
        let first_seen = first.frames();

        tokio::time::sleep(ms(1_000)).await;
        assert_eq!(first.frames(), first_seen);
        assert_eq!(first.completions(), 0);
        assert_eq!(second.last().as_deref(), Some("2nd"));
        assert_eq!(second.completions(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn looping_effect_returns_to_empty_after_pause() {
        let recorder = Recorder::default();
        let config = TypingConfig::looping()
            .with_typing_speed(ms(100))
            .with_pause_time(ms(1_000))
            .with_loop_delay(ms(500));
        let effect = TypingEffect::new("ab", config);
        assert_eq!(effect.phase(), TypingPhase::Typing);
        let _handle = tokio::spawn(run_typing(effect, recorder.on_frame(), recorder.on_complete()));

        // 2 typing ticks (200) + pause (1000) + 2 deleting ticks at 50 (100)
        tokio::time::sleep(ms(1_350)).await;
        assert_eq!(
            recorder.frames(),
            vec!["", "a", "ab", "ab", "a", ""]
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>()
        );
    }
}
