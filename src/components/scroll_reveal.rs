use yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use log::warn;

use crate::reveal::{AnimationProfile, RevealLatch, VisibilityState, DETECTION_MARGIN, INTERSECTION_THRESHOLD};

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    pub animation: AnimationProfile,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps a block of content and fades it in the first time it scrolls into
/// view. Each wrapper owns its own observer subscription and latch; once the
/// block is revealed the target is unobserved and never watched again.
#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let node_ref = use_node_ref();
    let latch = use_mut_ref(RevealLatch::new);
    let revealed = use_state(|| false);

    {
        let node_ref = node_ref.clone();
        let latch = latch.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let mut observer: Option<IntersectionObserver> = None;
                let mut callback: Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>> =
                    None;

                if let Some(target) = node_ref.cast::<Element>() {
                    let cb = Closure::wrap(Box::new(
                        move |entries: js_sys::Array, obs: IntersectionObserver| {
                            for entry in entries
                                .iter()
                                .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                            {
                                if latch.borrow_mut().observe(entry.is_intersecting()) {
                                    revealed.set(true);
                                    obs.unobserve(&entry.target());
                                }
                            }
                        },
                    )
                        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(INTERSECTION_THRESHOLD));
                    options.set_root_margin(DETECTION_MARGIN);

                    match IntersectionObserver::new_with_options(
                        cb.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(obs) => {
                            obs.observe(&target);
                            observer = Some(obs);
                            callback = Some(cb);
                        }
                        Err(_) => {
                            // No IntersectionObserver in this runtime: the
                            // block simply stays in its hidden style.
                            warn!("IntersectionObserver unavailable, skipping scroll reveal");
                        }
                    }
                }

                move || {
                    if let Some(obs) = observer {
                        obs.disconnect();
                    }
                    drop(callback);
                }
            },
            (),
        );
    }

    let state = if *revealed {
        VisibilityState::Visible
    } else {
        VisibilityState::Hidden
    };

    html! {
        <div ref={node_ref} style={props.animation.style(state)}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::reveal::FADE_IN_UP;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn next_tick() {
        let promise = js_sys::Promise::resolve(&JsValue::NULL);
        let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
    }

    #[wasm_bindgen_test]
    async fn renders_children_in_hidden_style_and_unmounts_cleanly() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let props = ScrollRevealProps {
            animation: FADE_IN_UP,
            children: Children::new(vec![html! { <p>{"hola"}</p> }]),
        };
        let handle =
            yew::Renderer::<ScrollReveal>::with_root_and_props(root.clone(), props).render();
        next_tick().await;

        let markup = root.inner_html();
        assert!(markup.contains("hola"));
        assert!(markup.contains("opacity: 0"));
        assert!(markup.contains("translate(0px, 5px)"));

        // Unmount while still hidden; the subscription must go with it.
        handle.destroy();
        next_tick().await;
        assert!(!root.inner_html().contains("hola"));
    }
}
