use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use olymp_core::model::ParticipantSession;

use crate::context::AppContext;
use crate::views::{CabinetView, HomeView, Notice, NoticeKind, RegisterView, TasksView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/tasks", TasksView)] Tasks {},
        #[route("/register", RegisterView)] Register {},
        #[route("/cabinet", CabinetView)] Cabinet {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    // The participant session and the transient notice are shared by
    // every tab, so both signals live at the layout root.
    use_context_provider(|| Signal::new(ctx.initial_session()));
    use_context_provider(|| Signal::new(None::<Notice>));

    rsx! {
        div { class: "app",
            TopBar {}
            NoticeBanner {}
            main { class: "content",
                Outlet::<Route> {}
            }
            footer { class: "footer",
                p { "© 2025 МатОлимп. Математическая олимпиада для 3 класса" }
            }
        }
    }
}

#[component]
fn TopBar() -> Element {
    let session = use_context::<Signal<ParticipantSession>>();
    let student_name = session()
        .participant()
        .map(|participant| participant.student_name().to_string());

    rsx! {
        nav { class: "topbar",
            span { class: "brand", "МатОлимп" }
            ul { class: "tabs",
                li { Link { to: Route::Home {}, "Главная" } }
                li { Link { to: Route::Tasks {}, "Задания" } }
                li { Link { to: Route::Register {}, "Регистрация" } }
                li { Link { to: Route::Cabinet {}, "Кабинет" } }
            }
            if let Some(name) = student_name {
                span { class: "topbar-name", "{name}" }
            }
        }
    }
}

#[component]
fn NoticeBanner() -> Element {
    let mut notice = use_context::<Signal<Option<Notice>>>();
    let Some(current) = notice() else {
        return rsx! {};
    };
    let class = match current.kind {
        NoticeKind::Info => "notice notice--info",
        NoticeKind::Error => "notice notice--error",
    };

    rsx! {
        div { class: "{class}",
            span { "{current.text}" }
            button {
                class: "notice-dismiss",
                r#type: "button",
                onclick: move |_| notice.set(None),
                "×"
            }
        }
    }
}
