use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{
    entities::{Contract, Currency, FreightRate, PackageUnit, Task, Terminal},
    typing::{TypingConfig, DEFAULT_LOOP_DELAY, DEFAULT_PAUSE_TIME, DEFAULT_TYPING_SPEED, MIN_TICK},
};

/// Desk the user is working from; picks navigation and accent colours.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Workspace {
    #[default]
    None,
    Operations,
    Sales,
    Finance,
}

impl Workspace {
    pub fn name(&self) -> &'static str {
        match self {
            Workspace::None => "None",
            Workspace::Operations => "Operations",
            Workspace::Sales => "Sales",
            Workspace::Finance => "Finance",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Workspace::None => "❓",
            Workspace::Operations => "🚚",
            Workspace::Sales => "🤝",
            Workspace::Finance => "💶",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Workspace::Operations => "keep the boxes moving",
            Workspace::Sales => "every lane has a price",
            Workspace::Finance => "rates in, invoices out",
            Workspace::None => "",
        }
    }

    pub fn is_selected(&self) -> bool {
        !matches!(self, Workspace::None)
    }
}

/// Typing-effect timings the user can tune on the settings page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationSettings {
    pub typing_speed_ms: u64,
    pub delete_speed_ms: u64,
    pub pause_time_ms: u64,
    pub loop_delay_ms: u64,
    pub loop_headlines: bool,
    /// Skip animations and show text at once.
    #[serde(default)]
    pub reduced_motion: bool,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            typing_speed_ms: DEFAULT_TYPING_SPEED.as_millis() as u64,
            delete_speed_ms: DEFAULT_TYPING_SPEED.as_millis() as u64 / 2,
            pause_time_ms: DEFAULT_PAUSE_TIME.as_millis() as u64,
            loop_delay_ms: DEFAULT_LOOP_DELAY.as_millis() as u64,
            loop_headlines: true,
            reduced_motion: false,
        }
    }
}

impl AnimationSettings {
    /// Same settings with every delay raised to the minimum tick.
    pub fn validated(self) -> Self {
        let floor = MIN_TICK.as_millis() as u64;
        Self {
            typing_speed_ms: self.typing_speed_ms.max(floor),
            delete_speed_ms: self.delete_speed_ms.max(floor),
            pause_time_ms: self.pause_time_ms.max(floor),
            loop_delay_ms: self.loop_delay_ms.max(floor),
            ..self
        }
    }

    pub fn typing_config(&self, looping: bool) -> TypingConfig {
        TypingConfig::default()
            .with_typing_speed(Duration::from_millis(self.typing_speed_ms))
            .with_delete_speed(Duration::from_millis(self.delete_speed_ms))
            .with_pause_time(Duration::from_millis(self.pause_time_ms))
            .with_loop_delay(Duration::from_millis(self.loop_delay_ms))
            .with_loop(looping)
    }

    /// Config for headline effects, which loop when the user allows it.
    pub fn headline_config(&self) -> TypingConfig {
        self.typing_config(self.loop_headlines)
    }
}

pub const DEFAULT_API_LATENCY_MS: u64 = 800;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub workspace: Workspace,
    #[serde(default)]
    pub animation: AnimationSettings,
    /// Delay the mock backend waits before answering.
    #[serde(default = "default_latency")]
    pub api_latency_ms: u64,
}

fn default_latency() -> u64 {
    DEFAULT_API_LATENCY_MS
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            workspace: Workspace::default(),
            animation: AnimationSettings::default(),
            api_latency_ms: DEFAULT_API_LATENCY_MS,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub workspace: Workspace,
    pub animation: AnimationSettings,
    pub api_latency_ms: u64,
    pub rates: Vec<FreightRate>,
    pub terminals: Vec<Terminal>,
    pub currencies: Vec<Currency>,
    pub package_units: Vec<PackageUnit>,
    pub tasks: Vec<Task>,
    pub contracts: Vec<Contract>,
}

impl AppState {
    pub fn apply_persisted(&mut self, persisted: Preferences) {
        self.workspace = persisted.workspace;
        self.animation = persisted.animation.validated();
        self.api_latency_ms = persisted.api_latency_ms;
    }

    pub fn to_persisted(&self) -> Preferences {
        Preferences {
            workspace: self.workspace,
            animation: self.animation,
            api_latency_ms: self.api_latency_ms,
        }
    }

    pub fn api_latency(&self) -> Duration {
        Duration::from_millis(self.api_latency_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn older_preference_files_fill_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{ "workspace": "Sales" }"#).unwrap();
        assert_eq!(prefs.workspace, Workspace::Sales);
        assert_eq!(prefs.animation, AnimationSettings::default());
        assert_eq!(prefs.api_latency_ms, DEFAULT_API_LATENCY_MS);
    }

    #[test]
    fn persisted_animation_is_clamped_on_load() {
        let mut state = AppState::default();
        state.apply_persisted(Preferences {
            workspace: Workspace::Finance,
            animation: AnimationSettings {
                typing_speed_ms: 0,
                ..AnimationSettings::default()
            },
            api_latency_ms: 0,
        });
        assert_eq!(state.animation.typing_speed_ms, MIN_TICK.as_millis() as u64);
        assert_eq!(state.to_persisted().workspace, Workspace::Finance);
    }

    #[test]
    fn settings_map_onto_typing_config() {
        let settings = AnimationSettings {
            loop_headlines: false,
            ..AnimationSettings::default()
        };
        let config = settings.headline_config();
        assert!(!config.looping);
        assert_eq!(config.typing_speed, Duration::from_millis(100));
        assert_eq!(config.delete_speed(), Duration::from_millis(50));
    }
}
