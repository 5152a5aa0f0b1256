use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "page home-page",
            section { class: "hero",
                span { class: "hero-badge", "Для учеников 3 класса" }
                h1 { class: "hero-title", "Математическая Олимпиада 2025" }
                p { class: "hero-subtitle",
                    "Проверь свои знания математики и получи призы! Интересные задачи, "
                    "увлекательные головоломки и возможность стать чемпионом среди одноклассников."
                }
                Link { class: "btn btn-primary hero-cta", to: Route::Register {},
                    "Участвовать в олимпиаде"
                }
            }

            div { class: "feature-grid",
                FeatureCard {
                    title: "Призы победителям",
                    body: "Дипломы, подарки и сертификаты для лучших участников",
                }
                FeatureCard {
                    title: "45 баллов",
                    body: "5 интересных задач разного уровня сложности",
                }
                FeatureCard {
                    title: "45 минут",
                    body: "Время на выполнение всех заданий олимпиады",
                }
            }

            section { class: "price-card",
                h2 { "Стоимость участия" }
                div { class: "price-row",
                    span { class: "price-value", "299 ₽" }
                    ul { class: "price-list",
                        li { "Доступ ко всем заданиям" }
                        li { "Проверка результатов" }
                        li { "Электронный диплом" }
                    }
                }
            }
        }
    }
}

#[component]
fn FeatureCard(title: &'static str, body: &'static str) -> Element {
    rsx! {
        div { class: "feature-card",
            h3 { "{title}" }
            p { "{body}" }
        }
    }
}
