use dioxus::prelude::*;

use crate::{
    domain::{AppState, TextSegment, TypingConfig, TypingEffect, TypingFrame, TypingSource},
    infra::animation::run_typing,
};

/// Drives a typing effect for the lifetime of the calling component.
///
/// The loop runs inside `use_future`, so unmounting the component drops the
/// pending sleep. The source and config are read once; give the component a
/// new `key` to restart with different content.
pub fn use_typing(
    source: TypingSource,
    config: TypingConfig,
    animate: bool,
    on_complete: Option<EventHandler<()>>,
) -> Signal<TypingFrame> {
    let mut frame = use_signal(TypingFrame::default);
    use_future(move || {
        let source = source.clone();
        async move {
            run_typing(
                prepared_effect(source, config, animate),
                move |next| frame.set(next),
                move || {
                    if let Some(handler) = on_complete {
                        handler.call(());
                    }
                },
            )
            .await;
        }
    });
    frame
}

/// Effect ready to drive; with animation off it starts fully revealed.
fn prepared_effect(source: TypingSource, config: TypingConfig, animate: bool) -> TypingEffect {
    let mut effect = TypingEffect::new(source, config);
    if !animate {
        effect.finish();
    }
    effect
}

/// Plain string, typed out with the user's animation settings.
#[component]
pub fn TypedText(
    text: String,
    #[props(default)] looping: bool,
    #[props(default)] class: String,
    on_complete: Option<EventHandler<()>>,
) -> Element {
    let settings = use_context::<Signal<AppState>>().peek().animation;
    let label = text.clone();
    let frame = use_typing(
        TypingSource::plain(text),
        settings.typing_config(looping),
        !settings.reduced_motion,
        on_complete,
    );
    rsx! { TypedView { frame: frame(), label, class } }
}

/// Multi-coloured variant: each part keeps its style while being revealed.
#[component]
pub fn TypedSegments(
    parts: Vec<TextSegment>,
    #[props(default)] looping: bool,
    #[props(default)] class: String,
    on_complete: Option<EventHandler<()>>,
) -> Element {
    let settings = use_context::<Signal<AppState>>().peek().animation;
    let config = if looping {
        settings.headline_config()
    } else {
        settings.typing_config(false)
    };
    let source = TypingSource::new(parts);
    let label = source.full_text();
    let frame = use_typing(source, config, !settings.reduced_motion, on_complete);
    rsx! { TypedView { frame: frame(), label, class } }
}

/// `label` is the complete text, so assistive tech never reads a partial word.
#[component]
fn TypedView(frame: TypingFrame, label: String, class: String) -> Element {
    let caret = if frame.is_done() {
        "typed-caret is-done"
    } else {
        "typed-caret"
    };
    let parts = frame
        .segments
        .iter()
        .map(|segment| (segment.style.class().to_string(), segment.text.clone()))
        .collect::<Vec<_>>();
    let phase = frame.phase.map(|phase| phase.label()).unwrap_or("idle");

    rsx! {
        span {
            class: "typed-text {class}",
            "data-phase": phase,
            "aria-label": label,
            for (index, (style, text)) in parts.into_iter().enumerate() {
                span { key: "{index}", class: "{style}", "{text}" }
            }
            span { class: caret, "aria-hidden": "true" }
        }
    }
}
