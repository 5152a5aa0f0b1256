use dioxus::prelude::*;
use dioxus_router::use_navigator;

use olymp_core::model::{ParticipantSession, RegistrationForm};
use services::{ApiError, RegistrationServiceError};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::Notice;

#[derive(Clone, Debug, PartialEq, Eq)]
enum RegisterState {
    Idle,
    Submitting,
    Error(String),
}

#[component]
pub fn RegisterView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<Signal<ParticipantSession>>();
    let notice = use_context::<Signal<Option<Notice>>>();
    let navigator = use_navigator();
    let registration_service = ctx.registration_service();
    let mut form = use_signal(RegistrationForm::default);
    let submit_state = use_signal(|| RegisterState::Idle);

    let form_value = form();
    let is_submitting = submit_state() == RegisterState::Submitting;

    rsx! {
        div { class: "page register-page",
            header { class: "view-header",
                h2 { class: "view-title", "Регистрация на олимпиаду" }
                p { class: "view-subtitle",
                    "Заполни форму и получи доступ к заданиям после оплаты"
                }
            }

            div { class: "register-form",
                FormField {
                    label: "Имя и Фамилия ученика",
                    placeholder: "Иван Петров",
                    input_type: "text",
                    value: form_value.student_name.clone(),
                    oninput: move |evt: FormEvent| form.write().student_name = evt.value(),
                }
                FormField {
                    label: "Школа и класс",
                    placeholder: "Школа №1, 3-А класс",
                    input_type: "text",
                    value: form_value.school.clone(),
                    oninput: move |evt: FormEvent| form.write().school = evt.value(),
                }
                FormField {
                    label: "ФИО родителя",
                    placeholder: "Петров Александр Иванович",
                    input_type: "text",
                    value: form_value.parent_name.clone(),
                    oninput: move |evt: FormEvent| form.write().parent_name = evt.value(),
                }
                FormField {
                    label: "Email для связи",
                    placeholder: "example@mail.ru",
                    input_type: "email",
                    value: form_value.email.clone(),
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                }
                FormField {
                    label: "Телефон",
                    placeholder: "+7 (999) 123-45-67",
                    input_type: "tel",
                    value: form_value.phone.clone(),
                    oninput: move |evt: FormEvent| form.write().phone = evt.value(),
                }

                div { class: "payment-note",
                    p { class: "payment-note-title", "Оплата участия" }
                    p {
                        "После отправки формы мы вышлем вам ссылку на оплату 299 ₽. "
                        "Доступ к олимпиаде откроется сразу после успешной оплаты."
                    }
                }

                if let RegisterState::Error(text) = submit_state() {
                    div { class: "notice notice--error", "{text}" }
                }

                button {
                    class: "btn btn-primary register-submit",
                    r#type: "button",
                    disabled: is_submitting,
                    onclick: move |_| {
                        if submit_state() == RegisterState::Submitting {
                            return;
                        }
                        let registration_service = registration_service.clone();
                        let form_value = form();
                        let mut submit_state = submit_state;
                        let mut session = session;
                        let mut notice = notice;
                        let nav = navigator;
                        spawn(async move {
                            submit_state.set(RegisterState::Submitting);
                            match registration_service.register(&form_value).await {
                                Ok(outcome) => {
                                    session.set(ParticipantSession::registered(
                                        outcome.participant.clone(),
                                    ));
                                    notice.set(Some(Notice::info(
                                        outcome.message.unwrap_or_else(|| {
                                            "Регистрация принята!".to_string()
                                        }),
                                    )));
                                    submit_state.set(RegisterState::Idle);
                                    let _ = nav.push(Route::Tasks {});
                                }
                                Err(err) => {
                                    submit_state
                                        .set(RegisterState::Error(register_failure_text(&err)));
                                }
                            }
                        });
                    },
                    if is_submitting {
                        "Отправляем..."
                    } else {
                        "Зарегистрироваться и получить ссылку на оплату"
                    }
                }
            }
        }
    }
}

#[component]
fn FormField(
    label: &'static str,
    placeholder: &'static str,
    input_type: &'static str,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div { class: "form-field",
            label { class: "form-label", "{label}" }
            input {
                class: "form-input",
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}

fn register_failure_text(err: &RegistrationServiceError) -> String {
    match err {
        RegistrationServiceError::Validation(_) => {
            "Все поля обязательны для заполнения".to_string()
        }
        RegistrationServiceError::Api(ApiError::Rejected { message }) => message.clone(),
        _ => "Не удалось отправить форму. Попробуйте ещё раз.".to_string(),
    }
}
