use super::about::AboutSection;
use super::hero::{HeroSection, InfoStrip};
use crate::domain::catalog::ui::MenuSection;
use crate::domain::testimonial::ui::ReviewsCarousel;
use contracts::domain::catalog::catalog;
use contracts::shared::navigation::Section;
use leptos::logging::log;
use leptos::prelude::*;

#[component]
fn ReviewsSection() -> impl IntoView {
    view! {
        <section id=Section::Reviews.anchor_id() class="section reviews-section container">
            <div class="section__heading">
                <h2 class="section__title">"Community Vibes"</h2>
                <p class="section__subtitle">"What people are saying"</p>
            </div>
            <ReviewsCarousel reviews=catalog().reviews.as_slice()/>
        </section>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    log!("🏠 home mounted");

    view! {
        <HeroSection/>
        <InfoStrip/>
        <AboutSection/>
        <MenuSection/>
        <ReviewsSection/>
    }
}
