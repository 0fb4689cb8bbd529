//! Tick-driven typing effect.
//!
//! [`TypingEffect`] owns the cursor and the phase; a driver (see
//! `infra::animation`) asks for [`TypingEffect::next_delay`], sleeps, then
//! calls [`TypingEffect::advance`] once. Nothing here touches a clock, so the
//! whole cycle can be stepped synchronously in tests.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::segments::{TextSegment, TypingSource};

/// Smallest delay any phase is allowed to wait.
pub const MIN_TICK: Duration = Duration::from_millis(16);

pub const DEFAULT_TYPING_SPEED: Duration = Duration::from_millis(100);
pub const DEFAULT_PAUSE_TIME: Duration = Duration::from_millis(2000);
pub const DEFAULT_LOOP_DELAY: Duration = Duration::from_millis(500);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypingPhase {
    Typing,
    PausedAtFull,
    Deleting,
    PausedAtEmpty,
    Done,
}

impl TypingPhase {
    pub fn label(&self) -> &'static str {
        match self {
            TypingPhase::Typing => "typing",
            TypingPhase::PausedAtFull => "paused-full",
            TypingPhase::Deleting => "deleting",
            TypingPhase::PausedAtEmpty => "paused-empty",
            TypingPhase::Done => "done",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingConfig {
    pub typing_speed: Duration,
    /// Falls back to half of `typing_speed` when unset.
    pub delete_speed: Option<Duration>,
    pub pause_time: Duration,
    pub loop_delay: Duration,
    pub looping: bool,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            typing_speed: DEFAULT_TYPING_SPEED,
            delete_speed: None,
            pause_time: DEFAULT_PAUSE_TIME,
            loop_delay: DEFAULT_LOOP_DELAY,
            looping: false,
        }
    }
}

impl TypingConfig {
    pub fn looping() -> Self {
        Self {
            looping: true,
            ..Self::default()
        }
    }

    pub fn with_typing_speed(mut self, speed: Duration) -> Self {
        self.typing_speed = speed;
        self
    }

    pub fn with_delete_speed(mut self, speed: Duration) -> Self {
        self.delete_speed = Some(speed);
        self
    }

    pub fn with_pause_time(mut self, pause: Duration) -> Self {
        self.pause_time = pause;
        self
    }

    pub fn with_loop_delay(mut self, delay: Duration) -> Self {
        self.loop_delay = delay;
        self
    }

    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn delete_speed(&self) -> Duration {
        self.delete_speed.unwrap_or(self.typing_speed / 2)
    }

    /// Clamps every delay to [`MIN_TICK`] and pins the delete speed.
    pub fn normalized(self) -> Self {
        let typing_speed = self.typing_speed.max(MIN_TICK);
        let delete_speed = self
            .delete_speed
            .unwrap_or(typing_speed / 2)
            .max(MIN_TICK);
        Self {
            typing_speed,
            delete_speed: Some(delete_speed),
            pause_time: self.pause_time.max(MIN_TICK),
            loop_delay: self.loop_delay.max(MIN_TICK),
            looping: self.looping,
        }
    }
}

/// Outcome of a single [`TypingEffect::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Still animating; the next tick is due after this delay.
    Scheduled(Duration),
    /// The full text was revealed in non-looping mode. Returned once.
    Completed,
    /// Already done, nothing to schedule.
    Idle,
}

/// Snapshot handed to the renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypingFrame {
    pub segments: Vec<TextSegment>,
    pub shown: usize,
    pub total: usize,
    pub phase: Option<TypingPhase>,
}

impl TypingFrame {
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn is_done(&self) -> bool {
        self.phase == Some(TypingPhase::Done)
    }
}

#[derive(Clone, Debug)]
pub struct TypingEffect {
    source: TypingSource,
    config: TypingConfig,
    len: usize,
    shown: usize,
    phase: TypingPhase,
}

impl TypingEffect {
    /// Empty non-looping input starts out `Done`; call [`Self::begin`] to
    /// learn whether completion is already due.
    pub fn new(source: impl Into<TypingSource>, config: TypingConfig) -> Self {
        let source = source.into();
        let config = config.normalized();
        let len = source.len();
        let phase = if source.is_empty() && !config.looping {
            TypingPhase::Done
        } else {
            TypingPhase::Typing
        };
        Self {
            source,
            config,
            len,
            shown: 0,
            phase,
        }
    }

    /// First step a driver performs before sleeping.
    ///
    /// A looping effect stopped by [`Self::finish`] reports `Idle`, since
    /// completion belongs to non-looping runs only.
    pub fn begin(&self) -> Step {
        match self.next_delay() {
            Some(delay) => Step::Scheduled(delay),
            None if self.config.looping => Step::Idle,
            None => Step::Completed,
        }
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    pub fn shown(&self) -> usize {
        self.shown
    }

    /// Character count of the full text.
    pub fn total(&self) -> usize {
        self.len
    }

    pub fn config(&self) -> &TypingConfig {
        &self.config
    }

    pub fn source(&self) -> &TypingSource {
        &self.source
    }

    /// Delay before the next tick, or `None` once done.
    pub fn next_delay(&self) -> Option<Duration> {
        match self.phase {
            TypingPhase::Typing => Some(self.config.typing_speed),
            TypingPhase::PausedAtFull => Some(self.config.pause_time),
            TypingPhase::Deleting => Some(self.config.delete_speed()),
            TypingPhase::PausedAtEmpty => Some(self.config.loop_delay),
            TypingPhase::Done => None,
        }
    }

    /// Applies one tick.
    pub fn advance(&mut self) -> Step {
        match self.phase {
            TypingPhase::Typing => {
                if self.shown < self.len {
                    self.shown += 1;
                }
                if self.shown == self.len {
                    if self.config.looping {
                        self.phase = TypingPhase::PausedAtFull;
                    } else {
                        self.phase = TypingPhase::Done;
                        return Step::Completed;
                    }
                }
            }
            TypingPhase::PausedAtFull => self.phase = TypingPhase::Deleting,
            TypingPhase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.phase = TypingPhase::PausedAtEmpty;
                }
            }
            TypingPhase::PausedAtEmpty => self.phase = TypingPhase::Typing,
            TypingPhase::Done => return Step::Idle,
        }
        self.next_delay().map_or(Step::Idle, Step::Scheduled)
    }

    /// Reveals everything and stops. Looping effects never report completion.
    pub fn finish(&mut self) {
        self.shown = self.len;
        self.phase = TypingPhase::Done;
    }

    pub fn frame(&self) -> TypingFrame {
        TypingFrame {
            segments: self.source.visible(self.shown),
            shown: self.shown,
            total: self.len,
            phase: Some(self.phase),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::segments::{SegmentStyle, TextSegment};
    use pretty_assertions::assert_eq;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn non_looping_completes_once_after_len_ticks() {
        let mut effect = TypingEffect::new("Hello", TypingConfig::default());
        let mut completions = 0;
        for _ in 0..5 {
            if effect.advance() == Step::Completed {
                completions += 1;
            }
        }
        assert_eq!(effect.shown(), 5);
        assert_eq!(effect.phase(), TypingPhase::Done);
        assert_eq!(completions, 1);

        for _ in 0..10 {
            assert_eq!(effect.advance(), Step::Idle);
        }
        assert_eq!(effect.shown(), 5);
        assert_eq!(effect.next_delay(), None);
    }

    #[test]
    fn hi_scenario_takes_two_typing_ticks() {
        let config = TypingConfig::default().with_typing_speed(ms(100));
        let mut effect = TypingEffect::new("Hi", config);
        assert_eq!(effect.begin(), Step::Scheduled(ms(100)));
        assert_eq!(effect.advance(), Step::Scheduled(ms(100)));
        assert_eq!(effect.frame().text(), "H");
        assert_eq!(effect.advance(), Step::Completed);
        assert_eq!(effect.frame().text(), "Hi");
    }

    #[test]
    fn looping_cycle_is_periodic() {
        let config = TypingConfig::looping()
            .with_typing_speed(ms(100))
            .with_pause_time(ms(1000))
            .with_loop_delay(ms(300));
        let mut effect = TypingEffect::new("abc", config);

        let mut trace = Vec::new();
        for _ in 0..36 {
            let step = effect.advance();
            trace.push((effect.shown(), effect.phase(), step));
        }

        // 3 typing + 1 pause + 3 deleting + 1 pause
        let period = 8;
        for (index, entry) in trace.iter().enumerate().skip(period) {
            assert_eq!(*entry, trace[index - period], "tick {index}");
        }
        let shape: Vec<usize> = trace[..period].iter().map(|(shown, _, _)| *shown).collect();
        assert_eq!(shape, vec![1, 2, 3, 3, 2, 1, 0, 0]);
        assert!(trace.iter().all(|(_, _, step)| *step != Step::Completed));
    }

    #[test]
    fn phases_follow_strict_order_with_their_delays() {
        let config = TypingConfig::looping()
            .with_typing_speed(ms(80))
            .with_pause_time(ms(2000))
            .with_loop_delay(ms(500));
        let mut effect = TypingEffect::new("a", config);

        assert_eq!(effect.advance(), Step::Scheduled(ms(2000)));
        assert_eq!(effect.phase(), TypingPhase::PausedAtFull);
        assert_eq!(effect.advance(), Step::Scheduled(ms(40)));
        assert_eq!(effect.phase(), TypingPhase::Deleting);
        assert_eq!(effect.advance(), Step::Scheduled(ms(500)));
        assert_eq!(effect.phase(), TypingPhase::PausedAtEmpty);
        assert_eq!(effect.advance(), Step::Scheduled(ms(80)));
        assert_eq!(effect.phase(), TypingPhase::Typing);
    }

    #[test]
    fn empty_text_is_done_immediately() {
        let effect = TypingEffect::new("", TypingConfig::default());
        assert_eq!(effect.phase(), TypingPhase::Done);
        assert_eq!(effect.begin(), Step::Completed);
        assert_eq!(effect.frame().text(), "");
    }

    #[test]
    fn empty_looping_text_cycles_without_underflow() {
        let mut effect = TypingEffect::new("", TypingConfig::looping());
        let phases: Vec<TypingPhase> = (0..8)
            .map(|_| {
                effect.advance();
                effect.phase()
            })
            .collect();
        assert_eq!(
            &phases[..4],
            &[
                TypingPhase::PausedAtFull,
                TypingPhase::Deleting,
                TypingPhase::PausedAtEmpty,
                TypingPhase::Typing,
            ]
        );
        assert_eq!(effect.shown(), 0);
    }

    #[test]
    fn degenerate_delays_are_clamped() {
        let config = TypingConfig::looping()
            .with_typing_speed(Duration::ZERO)
            .with_pause_time(Duration::ZERO)
            .with_loop_delay(Duration::ZERO);
        let effect = TypingEffect::new("x", config);
        assert_eq!(effect.next_delay(), Some(MIN_TICK));
        assert_eq!(effect.config().delete_speed(), MIN_TICK);
        assert_eq!(effect.config().pause_time, MIN_TICK);
    }

    #[test]
    fn explicit_delete_speed_wins() {
        let config = TypingConfig::default()
            .with_typing_speed(ms(150))
            .with_delete_speed(ms(30));
        assert_eq!(config.normalized().delete_speed(), ms(30));
        assert_eq!(TypingConfig::default().normalized().delete_speed(), ms(50));
    }

    #[test]
    fn frame_keeps_segment_styles() {
        let source = TypingSource::new(vec![
            TextSegment::new("AB", SegmentStyle::Custom("x".into())),
            TextSegment::new("CD", SegmentStyle::Custom("y".into())),
        ]);
        let mut effect = TypingEffect::new(source, TypingConfig::default());
        for _ in 0..3 {
            effect.advance();
        }
        let frame = effect.frame();
        assert_eq!(frame.shown, 3);
        assert_eq!(frame.total, 4);
        assert_eq!(
            frame.segments,
            vec![
                TextSegment::new("AB", SegmentStyle::Custom("x".into())),
                TextSegment::new("C", SegmentStyle::Custom("y".into())),
            ]
        );
    }

    #[test]
    fn finish_reveals_everything() {
        let mut effect = TypingEffect::new("cargo", TypingConfig::looping());
        effect.advance();
        effect.finish();
        assert_eq!(effect.frame().text(), "cargo");
        assert_eq!(effect.advance(), Step::Idle);
    }

    #[test]
    fn finished_looping_effect_never_completes() {
        let mut effect = TypingEffect::new("headline", TypingConfig::looping());
        effect.finish();
        assert_eq!(effect.frame().text(), "headline");
        assert_eq!(effect.begin(), Step::Idle);
        assert_eq!(effect.advance(), Step::Idle);
    }

    #[test]
    fn finished_one_shot_effect_completes_on_begin() {
        let mut effect = TypingEffect::new("greeting", TypingConfig::default());
        effect.finish();
        assert_eq!(effect.begin(), Step::Completed);
        assert!(effect.frame().is_done());
    }
}
