use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::app::{use_services, use_session};
use crate::core::auth::Credentials;
use crate::routes::{Route, REGISTER_PATH};
use crate::t;

use super::{authenticate_and_store, Completion, LoginError, LoginForm, SubmitOutcome};

#[component]
pub fn LoginView() -> Element {
    let services = use_services();
    let session = use_session();
    let navigator = use_navigator();
    let mut form = use_signal(LoginForm::default);

    let coroutine = use_coroutine(move |mut rx: UnboundedReceiver<LoginEvent>| {
        let services = services.clone();
        let mut form_signal = form;
        let mut session_signal = session;

        async move {
            while let Some(event) = rx.next().await {
                match event {
                    LoginEvent::Authenticate(credentials) => {
                        let result = authenticate_and_store(
                            &services.authenticator(),
                            &services.sessions,
                            &credentials,
                        )
                        .await;

                        match form_signal.with_mut(|f| f.finish(result)) {
                            Completion::NavigateToDashboard(active) => {
                                tracing::info!("[login] signed in as {}", active.phone);
                                session_signal.set(Some(active));
                                navigator.replace(Route::Dashboard {});
                            }
                            Completion::Failed(err) => {
                                tracing::warn!("[login] sign-in failed: {err}");
                            }
                            Completion::Ignored => {}
                        }
                    }
                }
            }
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match form.with_mut(|f| f.submit()) {
            SubmitOutcome::Started(credentials) => {
                coroutine.send(LoginEvent::Authenticate(credentials));
            }
            SubmitOutcome::Rejected(err) => tracing::debug!("[login] rejected locally: {err}"),
            SubmitOutcome::Ignored => tracing::debug!("[login] submit ignored; sign-in in flight"),
        }
    };

    let snapshot = form();
    let busy = snapshot.is_submitting();
    let password_type = if snapshot.show_password { "text" } else { "password" };
    let toggle_label = if snapshot.show_password {
        t!("login-password-hide")
    } else {
        t!("login-password-show")
    };
    let phone_placeholder = t!("login-phone-placeholder");
    let password_placeholder = t!("login-password-placeholder");

    rsx! {
        form { class: "login-form", onsubmit: on_submit,
            div { class: "login-form__field",
                label { r#for: "login-phone", {t!("login-phone-label")} }
                input {
                    id: "login-phone",
                    r#type: "tel",
                    autocomplete: "tel",
                    placeholder: "{phone_placeholder}",
                    value: "{snapshot.phone}",
                    disabled: busy,
                    oninput: move |evt| form.with_mut(|f| f.set_phone(evt.value())),
                }
                span { class: "login-form__hint", {t!("login-phone-hint")} }
            }

            div { class: "login-form__field",
                label { r#for: "login-password", {t!("login-password-label")} }
                div { class: "login-form__password",
                    input {
                        id: "login-password",
                        r#type: "{password_type}",
                        autocomplete: "current-password",
                        placeholder: "{password_placeholder}",
                        value: "{snapshot.password}",
                        disabled: busy,
                        oninput: move |evt| form.with_mut(|f| f.set_password(evt.value())),
                    }
                    button {
                        r#type: "button",
                        class: "login-form__reveal",
                        onclick: move |_| form.with_mut(|f| f.toggle_password_visibility()),
                        "{toggle_label}"
                    }
                }
            }

            if let Some(err) = snapshot.error {
                p { class: "login-form__error", role: "alert", "⚠️ {error_message(err)}" }
            }

            button {
                r#type: "submit",
                class: "button button--primary login-form__submit",
                disabled: busy,
                if busy {
                    span { class: "spinner", aria_hidden: "true" }
                    {t!("login-submitting")}
                } else {
                    {t!("login-submit")}
                }
            }

            p { class: "login-form__alt",
                {t!("login-no-account")}
                " "
                Link { class: "login-form__link", to: Route::resolve(REGISTER_PATH), {t!("login-register-link")} }
            }
        }
    }
}

fn error_message(err: LoginError) -> String {
    match err {
        LoginError::EmptyFields => t!("login-error-empty"),
        LoginError::InvalidPhone => t!("login-error-phone"),
        LoginError::Failed => t!("login-error-failed"),
    }
}

#[derive(Debug, Clone)]
enum LoginEvent {
    Authenticate(Credentials),
}
