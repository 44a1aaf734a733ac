use crate::shared::config::app_config;
use crate::shared::icons::icon;
use contracts::domain::catalog::Testimonial;
use contracts::shared::rotation::Rotation;
use leptos::prelude::*;

#[component]
fn TestimonialSlide(review: &'static Testimonial) -> impl IntoView {
    let stars = (0..review.rating).map(|_| icon("star")).collect_view();

    view! {
        <div class="review-slide">
            <div class="review-slide__quote">{icon("quote")}</div>
            <p class="review-slide__content">{format!("\"{}\"", review.content)}</p>
            <div class="review-slide__stars">{stars}</div>
            <div class="review-slide__author">
                <div class="review-slide__avatar">{review.initial()}</div>
                <h4 class="review-slide__name">{review.author.clone()}</h4>
                {review.role.clone().map(|role| view! { <span class="review-slide__role">{role}</span> })}
            </div>
        </div>
    }
}

/// One testimonial at a time, auto-advancing. Clicking a dot jumps to that
/// review and restarts the interval.
#[component]
pub fn ReviewsCarousel(reviews: &'static [Testimonial]) -> impl IntoView {
    let rotation = RwSignal::new(Rotation::new(reviews.len()));
    let timer = StoredValue::new(None::<IntervalHandle>);
    let interval = app_config().carousel.interval();

    // Restarted on mount and after every manual selection
    let epoch = Memo::new(move |_| rotation.with(|r| r.epoch()));
    Effect::new(move |_| {
        epoch.track();
        if let Some(handle) = timer.get_value() {
            handle.clear();
        }
        if reviews.len() < 2 {
            return;
        }
        match set_interval_with_handle(move || rotation.update(|r| r.advance()), interval) {
            Ok(handle) => timer.set_value(Some(handle)),
            Err(e) => log::error!("carousel timer failed: {:?}", e),
        }
    });

    on_cleanup(move || {
        if let Some(handle) = timer.try_get_value().flatten() {
            handle.clear();
        }
    });

    let select = move |index: usize| {
        rotation.update(|r| {
            r.select(index);
        });
    };

    let current_slide = move || {
        let index = rotation.with(|r| r.current());
        reviews
            .get(index)
            .map(|review| view! { <TestimonialSlide review=review/> })
    };

    let dots = (0..reviews.len())
        .map(|index| {
            view! {
                <button
                    class="reviews-carousel__dot"
                    class:reviews-carousel__dot--active=move || rotation.with(|r| r.current() == index)
                    aria-label=format!("Go to review {}", index + 1)
                    on:click=move |_| select(index)
                ></button>
            }
        })
        .collect_view();

    view! {
        <div class="reviews-carousel">
            <div class="reviews-carousel__stage">{current_slide}</div>
            <div class="reviews-carousel__dots">{dots}</div>
        </div>
    }
}
