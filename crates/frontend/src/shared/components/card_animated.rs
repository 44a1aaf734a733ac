//! CardAnimated: обёртка над Thaw Card с анимацией появления.
//!
//! Используется для карточек Shisha Lab (преимущества, статистика).
//! Анимация определена в `style/main.css` (`@keyframes card-appear`).
//!
//! # Пример
//! ```ignore
//! // Каскадная задержка для stagger-эффекта
//! <CardAnimated delay_ms=0>   // карточка 1
//! <CardAnimated delay_ms=150> // карточка 2
//!
//! // С дополнительным классом
//! <CardAnimated class="lab-feature" delay_ms=300>
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Обёртка над Thaw [`Card`] с анимацией `card-appear`.
///
/// # Props
/// - `delay_ms`: задержка анимации в мс (по умолчанию `0`).
/// - `class`: дополнительный CSS-класс карточки.
/// - `children`: содержимое карточки.
#[component]
pub fn CardAnimated(
    /// Задержка анимации в миллисекундах (для stagger-эффекта).
    #[prop(optional)]
    delay_ms: u32,
    /// Дополнительный CSS-класс.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.6s ease-out {}ms both;", delay_ms);
    let class = format!("card-animated {}", class);

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}
