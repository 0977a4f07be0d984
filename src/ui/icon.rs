use leptos::prelude::*;

/// Inline stroke icon, sized and colored through CSS
#[component]
pub fn Icon(
    /// One of the names in [`icons`]
    name: &'static str,
    /// CSS classes for sizing
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=icons::path(name) />
        </svg>
    }
}

/// Predefined icon names
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const CHECK: &str = "check";
    pub const CLOCK: &str = "clock";
    pub const LEAF: &str = "leaf";
    pub const MAP_PIN: &str = "map-pin";
    pub const PHONE: &str = "phone";
    pub const SPARKLE: &str = "sparkle";
    pub const X: &str = "x";

    /// SVG path data for an icon name; unknown names render nothing
    pub fn path(name: &str) -> &'static str {
        match name {
            ALERT_CIRCLE => "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
            CHECK => "M5 13l4 4L19 7",
            CLOCK => "M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z",
            LEAF => "M5 21c0-9 6-15 15-16-1 9-7 15-15 16zm0 0l7-7",
            MAP_PIN => "M12 21s-7-6.2-7-11a7 7 0 0114 0c0 4.8-7 11-7 11zm0-9a2 2 0 100-4 2 2 0 000 4z",
            PHONE => "M3 5a2 2 0 012-2h3.3l1.5 4.5-2.3 1.1a11 11 0 005.9 5.9l1.1-2.3 4.5 1.5V19a2 2 0 01-2 2A16 16 0 013 5z",
            SPARKLE => "M12 3l1.9 5.1L19 10l-5.1 1.9L12 17l-1.9-5.1L5 10l5.1-1.9z",
            X => "M6 18L18 6M6 6l12 12",
            _ => "",
        }
    }
}
