use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use olymp_core::model::ParticipantSession;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{Notice, ViewError, ViewState, view_state_from_resource};
use crate::vm::{CabinetVm, ResultRowVm, map_cabinet};

#[derive(Clone, Debug, PartialEq)]
struct CabinetData {
    vm: CabinetVm,
    student_name: String,
}

#[component]
pub fn CabinetView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<Signal<ParticipantSession>>();
    let notice = use_context::<Signal<Option<Notice>>>();
    let navigator = use_navigator();
    let results_service = ctx.results_service();
    let session_service = ctx.session_service();

    // Reruns whenever the participant identity changes; an anonymous
    // session skips the fetch entirely.
    let resource = use_resource(move || {
        let results_service = results_service.clone();
        let session_value = session();
        async move {
            let Some(participant) = session_value.participant().cloned() else {
                return Ok(None);
            };
            let board = results_service
                .load_scoreboard(participant.id())
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(Some(CabinetData {
                vm: map_cabinet(&board),
                student_name: participant.student_name().to_string(),
            }))
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page cabinet-page",
            header { class: "view-header",
                h2 { class: "view-title", "Личный кабинет" }
            }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Загружаем результаты..." }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "notice notice--error", "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Повторить"
                    }
                },
                ViewState::Ready(None) => rsx! {
                    div { class: "cabinet-empty",
                        p { "Кабинет доступен после регистрации." }
                        Link { class: "btn btn-primary", to: Route::Register {},
                            "Зарегистрироваться"
                        }
                    }
                },
                ViewState::Ready(Some(data)) => rsx! {
                    div { class: "cabinet-header",
                        p { class: "cabinet-name", "{data.student_name}" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| {
                                let session_service = session_service.clone();
                                let mut session = session;
                                let mut notice = notice;
                                let nav = navigator;
                                spawn(async move {
                                    match session_service.clear().await {
                                        Ok(()) => {
                                            session.write().clear();
                                            let _ = nav.push(Route::Home {});
                                        }
                                        Err(_) => notice.set(Some(Notice::error(
                                            "Не удалось выйти. Попробуйте ещё раз.",
                                        ))),
                                    }
                                });
                            },
                            "Выйти"
                        }
                    }
                    Dashboard { vm: data.vm.clone() }
                },
            }
        }
    }
}

#[component]
fn Dashboard(vm: CabinetVm) -> Element {
    rsx! {
        div { class: "stat-grid",
            StatTile { label: "Баллы", value: vm.score_label.clone() }
            StatTile { label: "Результат", value: vm.percent_label.clone() }
            StatTile { label: "Верные ответы", value: vm.correct_label.clone() }
        }

        if vm.rows.is_empty() {
            p { class: "cabinet-no-results",
                "Результатов пока нет — реши задания и отправь ответы."
            }
        } else {
            ul { class: "result-list",
                for row in vm.rows {
                    ResultRow { row }
                }
            }
        }
    }
}

#[component]
fn ResultRow(row: ResultRowVm) -> Element {
    let row_class = if row.is_correct {
        "result-row result-row--correct"
    } else {
        "result-row result-row--wrong"
    };
    rsx! {
        li { class: "{row_class}",
            p { class: "result-question", "{row.question}" }
            div { class: "result-meta",
                span { "{row.answer_label}" }
                span { class: "result-status", "{row.status_label}" }
                span { class: "result-points", "{row.points_label}" }
            }
        }
    }
}

#[component]
fn StatTile(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "stat-tile",
            span { class: "stat-value", "{value}" }
            span { class: "stat-label", "{label}" }
        }
    }
}
