use crate::shared::components::ui::{Button, ButtonVariant};
use crate::shared::icons::icon;
use chrono::{Datelike, Local};
use contracts::domain::catalog::catalog;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let business = &catalog().business;
    let now = Local::now();
    let today = business
        .hours_for(now.weekday())
        .map(|entry| entry.day.clone())
        .unwrap_or_default();

    let hours_rows = business
        .hours
        .iter()
        .map(|entry| {
            let is_today = entry.day == today;
            view! {
                <li class="footer__hours-row" class:footer__hours-row--today=is_today>
                    <span>{entry.day.clone()}</span>
                    <span class="footer__hours-value">{entry.hours.clone()}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer__grid">
                    <div class="footer__brand">
                        <div class="footer__wordmark">"MYST"<span class="accent">"."</span></div>
                        <p class="footer__about">
                            "The premier destination for shisha enthusiasts in Western Sydney. Luxury, comfort, and flavour in every session."
                        </p>
                    </div>

                    <div>
                        <h4 class="footer__heading">"Visit Us"</h4>
                        <p class="footer__text">{business.address.clone()}</p>
                        <a href=business.links.maps.clone() target="_blank" rel="noopener noreferrer" class="footer__link">
                            "Open in Maps" {icon("chevron-right")}
                        </a>
                    </div>

                    <div>
                        <h4 class="footer__heading">"Hours"</h4>
                        <ul class="footer__hours">{hours_rows}</ul>
                    </div>

                    <div>
                        <h4 class="footer__heading">"Connect"</h4>
                        <div class="footer__social">
                            <a href=business.links.instagram.clone() target="_blank" rel="noopener noreferrer" class="footer__social-link" aria-label="Instagram">
                                {icon("instagram")}
                            </a>
                            <a href=business.links.facebook.clone() target="_blank" rel="noopener noreferrer" class="footer__social-link" aria-label="Facebook">
                                {icon("facebook")}
                            </a>
                            <a href=business.links.tiktok.clone() target="_blank" rel="noopener noreferrer" class="footer__social-link" aria-label="TikTok">
                                {icon("tiktok")}
                            </a>
                        </div>
                        <a href=business.tel_href()>
                            <Button variant=ButtonVariant::Outline block=true>{business.phone.clone()}</Button>
                        </a>
                    </div>
                </div>

                <div class="footer__bottom">
                    <p>{format!("© {} MYST Lounge. All rights reserved.", now.year())}</p>
                    <p>"Designed for luxury."</p>
                </div>
            </div>
        </footer>
    }
}
