//! The marketing page.
//!
//! Sections render in document order; the reveal observer comes last so
//! every card and section exists when it starts observing.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::ui::booking_form::provide_booking_context;
use crate::ui::loading_screen::LoadingScreen;
use crate::ui::navbar::Navbar;
use crate::ui::reveal::RevealOnScroll;
use crate::ui::sections::{About, Contact, Footer, Gallery, Hero, Packages, Services};

#[component]
pub fn HomePage() -> impl IntoView {
    provide_booking_context();

    view! {
        <Title text="Serenity Spa | Massage, Facials & Wellness Retreats"/>
        <Meta
            name="description"
            content="Book massages, facials and full-day wellness packages at Serenity, a day spa and retreat."
        />

        <LoadingScreen/>
        <Navbar/>
        <main>
            <Hero/>
            <About/>
            <Services/>
            <Packages/>
            <Gallery/>
            <Contact/>
        </main>
        <Footer/>
        <RevealOnScroll/>
    }
}
