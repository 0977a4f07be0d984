use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::ui::{HomePage, NotFoundPage};

pub const DEFAULT_SITE_NAME: &str = "Serenity Spa";

/// Server-provided page metadata, rendered into the document head
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteMeta {
    pub name: String,
    pub canonical_url: Option<String>,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            name: DEFAULT_SITE_NAME.to_string(),
            canonical_url: None,
        }
    }
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let site = use_context::<SiteMeta>().unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <Meta property="og:site_name" content=site.name/>
                {site.canonical_url.map(|href| view! { <link rel="canonical" href=href/> })}
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/serenity.css"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_meta_defaults_to_site_name() {
        let meta = SiteMeta::default();
        assert_eq!(meta.name, DEFAULT_SITE_NAME);
        assert!(meta.canonical_url.is_none());
    }
}
