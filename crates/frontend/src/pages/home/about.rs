use crate::shared::icons::icon;
use contracts::shared::navigation::Section;
use leptos::prelude::*;

const HIGHLIGHTS: [(&str, &str, &str); 3] = [
    (
        "gamepad",
        "Entertainment",
        "PS5s, Nintendo Switches, and board games available for your enjoyment.",
    ),
    (
        "flask",
        "The Shisha Lab",
        "One-of-a-kind experience to customise your smoke. From heads to over 200 flavours.",
    ),
    (
        "popcorn",
        "Complimentary Snacks",
        "Enjoy complimentary popcorn and pretzels with your session.",
    ),
];

#[component]
pub fn AboutSection() -> impl IntoView {
    let highlights = HIGHLIGHTS
        .iter()
        .map(|(icon_name, title, text)| {
            view! {
                <div class="highlight">
                    <div class="highlight__icon">{icon(icon_name)}</div>
                    <div>
                        <h4 class="highlight__title">{*title}</h4>
                        <p class="highlight__text">{*text}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=Section::About.anchor_id() class="section about container">
            <div class="about__grid">
                <div class="about__copy">
                    <h3 class="about__title">
                        "The Ultimate " <br/> <span class="muted">"Hangout Spot"</span>
                    </h3>
                    <p class="about__lead">
                        "MYST Lounge provides a luxurious and comfortable experience in the heart of Western Sydney. Whether you're looking for the best night out in Sydney or a chilled evening with friends, we are the place to be."
                    </p>
                    <div class="about__highlights">{highlights}</div>
                </div>

                <div class="about__media">
                    <img src="https://github.com/janyaski-byte/chatgpt/blob/main/myst%20atmosphere.jpg?raw=true" alt="MYST Interior"/>
                    <div class="about__caption">
                        <div class="about__rule"></div>
                        <p>"\"Atmosphere is everything.\""</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
