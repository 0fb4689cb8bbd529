use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{
        app_state::DEFAULT_API_LATENCY_MS, AnimationSettings, AppState, SegmentStyle, TextSegment,
    },
    ui::{
        components::{
            toast::{push_toast, ToastKind, ToastMessage},
            typed_text::TypedSegments,
        },
        theme,
    },
};

const MAX_DELAY_MS: u64 = 10_000;

/// Text inputs for the settings form, kept as typed until applied.
#[derive(Clone, Debug, PartialEq)]
struct SettingsForm {
    typing_speed: String,
    delete_speed: String,
    pause_time: String,
    loop_delay: String,
    api_latency: String,
    loop_headlines: bool,
    reduced_motion: bool,
}

impl SettingsForm {
    fn from_values(animation: AnimationSettings, api_latency_ms: u64) -> Self {
        Self {
            typing_speed: animation.typing_speed_ms.to_string(),
            delete_speed: animation.delete_speed_ms.to_string(),
            pause_time: animation.pause_time_ms.to_string(),
            loop_delay: animation.loop_delay_ms.to_string(),
            api_latency: api_latency_ms.to_string(),
            loop_headlines: animation.loop_headlines,
            reduced_motion: animation.reduced_motion,
        }
    }

    /// Parses every field; delays below the minimum tick are raised to it.
    fn parse(&self) -> Result<(AnimationSettings, u64), String> {
        let animation = AnimationSettings {
            typing_speed_ms: parse_ms("Typing speed", &self.typing_speed)?,
            delete_speed_ms: parse_ms("Delete speed", &self.delete_speed)?,
            pause_time_ms: parse_ms("Pause time", &self.pause_time)?,
            loop_delay_ms: parse_ms("Loop delay", &self.loop_delay)?,
            loop_headlines: self.loop_headlines,
            reduced_motion: self.reduced_motion,
        }
        .validated();
        let api_latency = parse_ms("API latency", &self.api_latency)?;
        Ok((animation, api_latency))
    }
}

fn parse_ms(field: &str, value: &str) -> Result<u64, String> {
    let ms: u64 = value
        .trim()
        .parse()
        .map_err(|_| format!("{field} must be a whole number of milliseconds"))?;
    if ms > MAX_DELAY_MS {
        return Err(format!("{field} must be at most {MAX_DELAY_MS} ms"));
    }
    Ok(ms)
}

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut form = use_signal(|| {
        state.with(|st| SettingsForm::from_values(st.animation, st.api_latency_ms))
    });
    let mut revision = use_signal(|| 0_u32);
    let workspace = state.with(|st| st.workspace);

    let on_apply = move |_| {
        let mut state = state;
        match form().parse() {
            Ok((animation, api_latency_ms)) => {
                state.with_mut(|st| {
                    st.animation = animation;
                    st.api_latency_ms = api_latency_ms;
                });
                persist_user_state(&state);
                form.set(SettingsForm::from_values(animation, api_latency_ms));
                revision += 1;
                push_toast(toasts, ToastKind::Success, "Updated animation settings.");
            }
            Err(message) => push_toast(toasts, ToastKind::Error, message),
        }
    };

    let on_reset = move |_| {
        let mut state = state;
        let defaults = AnimationSettings::default();
        state.with_mut(|st| {
            st.animation = defaults;
            st.api_latency_ms = DEFAULT_API_LATENCY_MS;
        });
        persist_user_state(&state);
        form.set(SettingsForm::from_values(defaults, DEFAULT_API_LATENCY_MS));
        revision += 1;
        push_toast(toasts, ToastKind::Info, "Restored default animation settings.");
    };

    let delay_fields: [(&'static str, &'static str, String); 5] = [
        ("typing", "Typing speed (ms per char)", form().typing_speed),
        ("delete", "Delete speed (ms per char)", form().delete_speed),
        ("pause", "Pause at full text (ms)", form().pause_time),
        ("loop", "Delay before retyping (ms)", form().loop_delay),
        ("latency", "Simulated API latency (ms)", form().api_latency),
    ];

    rsx! {
        div { class: "space-y-8",
            section {
                class: "{theme::panel_border(workspace)} p-6",
                h2 { class: "{theme::label_class(workspace)}", "Animation" }
                div { class: "mt-4 grid gap-4 sm:grid-cols-2",
                    for (field, label, value) in delay_fields {
                        div { key: "{field}",
                            label { class: "{theme::label_class(workspace)}", "{label}" }
                            input {
                                class: "{theme::input_class(workspace)}",
                                r#type: "number",
                                min: "0",
                                value,
                                oninput: move |evt| {
                                    let value = evt.value();
                                    form.with_mut(|f| match field {
                                        "typing" => f.typing_speed = value,
                                        "delete" => f.delete_speed = value,
                                        "pause" => f.pause_time = value,
                                        "loop" => f.loop_delay = value,
                                        _ => f.api_latency = value,
                                    });
                                },
                            }
                        }
                    }
                }
                div { class: "mt-4 flex flex-wrap gap-6 text-sm {theme::text_secondary(workspace)}",
                    label { class: "flex items-center gap-2",
                        input {
                            r#type: "checkbox",
                            checked: form().loop_headlines,
                            onchange: move |evt| {
                                form.with_mut(|f| f.loop_headlines = evt.checked())
                            },
                        }
                        "Loop headlines"
                    }
                    label { class: "flex items-center gap-2",
                        input {
                            r#type: "checkbox",
                            checked: form().reduced_motion,
                            onchange: move |evt| {
                                form.with_mut(|f| f.reduced_motion = evt.checked())
                            },
                        }
                        "Reduce motion (show text at once)"
                    }
                }
                div { class: "mt-4 flex gap-3",
                    button { class: "{theme::btn_primary(workspace)}", onclick: on_apply, "Apply" }
                    button { class: "{theme::btn_secondary(workspace)}", onclick: on_reset, "Reset Defaults" }
                }
            }

            section {
                class: "{theme::panel_border(workspace)} p-6",
                h2 { class: "{theme::label_class(workspace)}", "Preview" }
                p { class: "mt-3 text-lg min-h-[1.75rem]",
                    TypedSegments {
                        key: "{revision}",
                        parts: vec![
                            TextSegment::plain("Rates from "),
                            TextSegment::new("Rotterdam", SegmentStyle::Accent),
                            TextSegment::plain(" to "),
                            TextSegment::new("Shanghai", SegmentStyle::Highlight),
                            TextSegment::new(" updated", SegmentStyle::Muted),
                        ],
                        looping: true,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::typing::MIN_TICK;
    use pretty_assertions::assert_eq;

    #[test]
    fn form_round_trips_current_values() {
        let defaults = AnimationSettings::default();
        let form = SettingsForm::from_values(defaults, 250);
        assert_eq!(form.parse().unwrap(), (defaults, 250));
    }

    #[test]
    fn tiny_delays_are_raised_to_the_minimum_tick() {
        let mut form = SettingsForm::from_values(AnimationSettings::default(), 0);
        form.typing_speed = "1".into();
        let (animation, latency) = form.parse().unwrap();
        assert_eq!(animation.typing_speed_ms, MIN_TICK.as_millis() as u64);
        assert_eq!(latency, 0);
    }

    #[test]
    fn invalid_numbers_name_the_field() {
        let mut form = SettingsForm::from_values(AnimationSettings::default(), 0);
        form.pause_time = "soon".into();
        assert_eq!(
            form.parse().unwrap_err(),
            "Pause time must be a whole number of milliseconds"
        );
        form.pause_time = "60000".into();
        assert!(form.parse().unwrap_err().contains("at most"));
    }
}
