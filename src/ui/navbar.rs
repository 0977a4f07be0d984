//! Fixed navigation bar with the mobile hamburger menu

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::core::scroll::fragment_target;
use crate::core::{NavMenu, NavbarState};
use crate::ui::dom;
use crate::ui::icon::{Icon, icons};

const NAV_LINKS: [(&str, &str); 6] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#services", "Services"),
    ("#packages", "Packages"),
    ("#gallery", "Gallery"),
    ("#contact", "Contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let menu = RwSignal::new(NavMenu::default());
    let bar = RwSignal::new(NavbarState::default());

    // Lock page scrolling behind the open mobile menu
    Effect::new(move |_| {
        dom::set_body_overflow(menu.with(NavMenu::body_overflow));
    });

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::NavbarScroll;
        use leptos::ev::{resize, scroll};

        let tracker = StoredValue::new(NavbarScroll::default());

        let handle_scroll = window_event_listener(scroll, move |_| {
            let y = dom::scroll_y();
            let Some(state) = tracker.try_update_value(|t| t.update(y)) else {
                return;
            };
            if bar.get_untracked() != state {
                bar.set(state);
            }
        });

        let handle_resize = window_event_listener(resize, move |_| {
            let mut current = menu.get_untracked();
            if current.on_resize(dom::viewport_width()) {
                menu.set(current);
            }
        });

        on_cleanup(move || {
            handle_scroll.remove();
            handle_resize.remove();
        });
    }

    let close_menu = move || {
        if menu.with_untracked(NavMenu::is_open) {
            menu.update(|m| {
                m.close();
            });
        }
    };

    view! {
        <nav
            id="navbar"
            class="navbar"
            class:scrolled=move || bar.get().scrolled
            style:transform=move || bar.get().transform()
        >
            <div class="nav-container">
                <div class="logo" role="link" on:click=move |_| dom::smooth_scroll_to(0.0)>
                    <Icon name=icons::LEAF class="logo-icon"/>
                    <span>"Serenity"</span>
                </div>

                <ul id="nav-menu" class="nav-menu" class:active=move || menu.get().is_open()>
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <li>
                                    <a
                                        href=href
                                        class="nav-link"
                                        on:click=move |ev: MouseEvent| {
                                            ev.prevent_default();
                                            if let Some(id) = fragment_target(href) {
                                                dom::scroll_to_section(id);
                                            }
                                            close_menu();
                                        }
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <button
                    id="hamburger"
                    class="hamburger"
                    class:active=move || menu.get().is_open()
                    aria-label="Toggle navigation menu"
                    aria-controls="nav-menu"
                    aria-expanded=move || menu.get().is_open().to_string()
                    on:click=move |_| menu.update(NavMenu::toggle)
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}
