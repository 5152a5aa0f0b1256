use dioxus::prelude::*;
use dioxus_router::Link;

use olymp_core::model::{AnswerSheet, ParticipantSession, Task};
use services::{ApiError, GradingError, GradingSummary};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{TaskCardVm, map_task_cards};

#[derive(Clone, Debug, PartialEq)]
struct TasksData {
    tasks: Vec<Task>,
    cards: Vec<TaskCardVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum SubmitState {
    Idle,
    Submitting,
    Done(GradingSummary),
    RegistrationRequired,
    Error(String),
}

#[component]
pub fn TasksView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<Signal<ParticipantSession>>();
    let task_service = ctx.task_service();
    let grading_service = ctx.grading_service();
    let mut answers = use_signal(AnswerSheet::new);
    let submit_state = use_signal(|| SubmitState::Idle);

    // One fetch per mount; failures leave the list empty.
    let resource = use_resource(move || {
        let task_service = task_service.clone();
        async move {
            let tasks = task_service
                .list_tasks()
                .await
                .map_err(|_| ViewError::Unknown)?;
            let cards = map_task_cards(&tasks);
            Ok::<_, ViewError>(TasksData { tasks, cards })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page tasks-page",
            header { class: "view-header",
                h2 { class: "view-title", "Задания олимпиады" }
                p { class: "view-subtitle",
                    "Реши все задачи и получи максимальный балл! "
                    "Для участия в олимпиаде необходима регистрация."
                }
            }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Загружаем задания..." }
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
                ViewState::Ready(data) => {
                    let tasks_for_submit = data.tasks.clone();
                    let card_items = data.cards.iter().map(|card| {
                        let task_id = card.id;
                        let value = answers().text_for(task_id).to_string();
                        let mut answers = answers;
                        rsx! {
                            div { class: "task-card",
                                div { class: "task-card-head",
                                    span { class: "task-number", "{card.number}" }
                                    span { class: "task-points", "{card.points_label}" }
                                    span { class: "task-difficulty", "{card.difficulty_label}" }
                                }
                                p { class: "task-question", "{card.question}" }
                                input {
                                    class: "task-answer",
                                    r#type: "text",
                                    placeholder: "Введи ответ",
                                    value: "{value}",
                                    oninput: move |evt| answers.write().set(task_id, evt.value()),
                                }
                            }
                        }
                    });
                    rsx! {
                        div { class: "task-list",
                            {card_items}
                        }
                        SubmitStatus { state: submit_state() }
                        div { class: "submit-row",
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                disabled: submit_state() == SubmitState::Submitting,
                                onclick: move |_| {
                                    let grading_service = grading_service.clone();
                                    let tasks = tasks_for_submit.clone();
                                    let mut submit_state = submit_state;
                                    let session = session;
                                    let answers = answers;
                                    spawn(async move {
                                        submit_state.set(SubmitState::Submitting);
                                        match grading_service.submit(&session(), &answers(), &tasks).await {
                                            Ok(summary) => submit_state.set(SubmitState::Done(summary)),
                                            Err(GradingError::RegistrationRequired) => {
                                                submit_state.set(SubmitState::RegistrationRequired);
                                            }
                                            Err(GradingError::Api(err)) => {
                                                submit_state.set(SubmitState::Error(submit_failure_text(&err)));
                                            }
                                            Err(_) => {
                                                submit_state.set(SubmitState::Error(
                                                    "Не удалось отправить ответы. Попробуйте ещё раз.".to_string(),
                                                ));
                                            }
                                        }
                                    });
                                },
                                "Проверить ответы"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SubmitStatus(state: SubmitState) -> Element {
    match state {
        SubmitState::Idle => rsx! {},
        SubmitState::Submitting => rsx! {
            p { class: "status", "Отправляем ответы..." }
        },
        SubmitState::Done(summary) => rsx! {
            div { class: "notice notice--info",
                "Результат: {summary.correct_count} из {summary.total_tasks}. "
                "Вы набрали {summary.total_points} баллов!"
            }
        },
        SubmitState::RegistrationRequired => rsx! {
            div { class: "notice notice--error",
                span { "Для проверки ответов необходима регистрация. " }
                Link { to: Route::Register {}, "Зарегистрироваться" }
            }
        },
        SubmitState::Error(text) => rsx! {
            div { class: "notice notice--error", "{text}" }
        },
    }
}

fn submit_failure_text(err: &ApiError) -> String {
    match err {
        ApiError::Rejected { message } => message.clone(),
        _ => "Не удалось отправить ответы. Попробуйте ещё раз.".to_string(),
    }
}
