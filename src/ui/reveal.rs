//! IntersectionObserver wiring for reveal-on-scroll animations

use leptos::prelude::*;

use crate::core::reveal::RevealTarget;

/// Starts observing every reveal target once the page is hydrated.
/// Renders nothing; place it after the sections it animates.
#[component]
pub fn RevealOnScroll() -> impl IntoView {
    Effect::new(move |_| {
        for target in RevealTarget::ALL {
            #[cfg(not(feature = "ssr"))]
            {
                if let Err(err) = observe(target) {
                    leptos::logging::warn!("reveal observer for {:?} not started: {:?}", target, err);
                }
            }
            #[cfg(feature = "ssr")]
            {
                let _ = target;
            }
        }
    });
}

#[cfg(not(feature = "ssr"))]
fn observe(target: RevealTarget) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return Ok(());
    };

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let element = entry.target();
                apply_styles(&element, target.revealed_styles());
                if let Some(class) = target.revealed_class() {
                    let _ = element.class_list().add_1(class);
                }
                // One-shot: never hide again
                observer.unobserve(&element);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(target.threshold()));
    options.set_root_margin(target.root_margin());
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    // The observer lives as long as the page
    callback.forget();

    let nodes = document.query_selector_all(target.selector())?;
    for index in 0..nodes.length() {
        let Some(element) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        apply_styles(&element, target.initial_styles());
        observer.observe(&element);
    }

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn apply_styles(element: &web_sys::Element, styles: &[(&str, &str)]) {
    use wasm_bindgen::JsCast;

    if let Some(element) = element.dyn_ref::<web_sys::HtmlElement>() {
        let style = element.style();
        for (property, value) in styles {
            let _ = style.set_property(property, value);
        }
    }
}
