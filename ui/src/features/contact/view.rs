use dioxus::prelude::*;

use crate::core::{platform, timing};
use crate::features::language::Localized;
use crate::features::reveal::{Reveal, RevealKind};
use crate::site::use_site;
use crate::t;

use super::state::{complete_submit, submit_form, ContactForm, Field, ValidationError};

#[component]
pub fn Contact() -> Element {
    let site = use_site();
    let catalog = site.catalog;
    let latency_ms = catalog.settings.submit_latency_ms;
    let notifications = site.notifications;
    let mut form = use_signal(ContactForm::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let mut notices = notifications;
        let Some(submission) =
            form.with_mut(|f| submit_form(f, &mut notices, validation_message))
        else {
            return;
        };

        // No backend yet: the round trip is simulated.
        tracing::info!(email = %submission.email, "contact form submitted");
        platform::spawn_future(async move {
            timing::sleep_ms(latency_ms).await;
            form.with_mut(|f| complete_submit(f, &mut notices, t!("notify-sent")));
        });
    };

    let state = form();
    let submit_label = if state.is_sending() {
        t!("contact-sending")
    } else {
        site.text("form-submit")
    };

    rsx! {
        section { id: "contact", class: "contact",
            div { class: "container",
                Reveal { kind: RevealKind::SectionTitle, index: 4,
                    h2 { Localized { id: "contact-title" } }
                    p { class: "section-subtitle", Localized { id: "contact-subtitle" } }
                }

                div { class: "contact-content",
                    div { class: "contact-info",
                        for (index, item) in catalog.contact.iter().enumerate() {
                            Reveal { key: "{index}", kind: RevealKind::ContactItem, index: index,
                                i { class: "{item.icon}" }
                                div {
                                    h4 { Localized { id: item.title.as_str() } }
                                    p { "{item.value}" }
                                }
                            }
                        }
                    }

                    Reveal { kind: RevealKind::ContactForm, index: 0,
                        form { class: "contact-form__form", "novalidate": "true", onsubmit: on_submit,
                            {field_input(form, Field::Name, "text", site.text("form-name"))}
                            {field_input(form, Field::Email, "email", site.text("form-email"))}
                            {field_input(form, Field::Phone, "tel", site.text("form-phone"))}
                            div { class: if state.is_focused(Field::Message) { "form-group focused" } else { "form-group" },
                                textarea {
                                    id: Field::Message.id(),
                                    name: Field::Message.id(),
                                    rows: "5",
                                    placeholder: site.text("form-message"),
                                    value: state.value(Field::Message).to_string(),
                                    oninput: move |evt| form.with_mut(|f| f.set_value(Field::Message, evt.value())),
                                    onfocus: move |_| form.with_mut(|f| f.focus(Field::Message)),
                                    onblur: move |_| form.with_mut(|f| f.blur(Field::Message)),
                                }
                            }
                            button {
                                r#type: "submit",
                                class: "btn btn-primary",
                                disabled: state.is_sending(),
                                if state.is_sending() {
                                    i { class: "fas fa-spinner fa-spin" }
                                    " "
                                }
                                "{submit_label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn field_input(
    mut form: Signal<ContactForm>,
    field: Field,
    input_type: &'static str,
    placeholder: String,
) -> Element {
    let state = form.read();
    let group_class = if state.is_focused(field) {
        "form-group focused"
    } else {
        "form-group"
    };
    let value = state.value(field).to_string();
    drop(state);

    rsx! {
        div { class: group_class,
            input {
                id: field.id(),
                name: field.id(),
                r#type: input_type,
                placeholder: placeholder,
                value: value,
                oninput: move |evt| form.with_mut(|f| f.set_value(field, evt.value())),
                onfocus: move |_| form.with_mut(|f| f.focus(field)),
                onblur: move |_| form.with_mut(|f| f.blur(field)),
            }
        }
    }
}

fn validation_message(err: &ValidationError) -> String {
    match err {
        ValidationError::MissingFields => t!("notify-missing-fields"),
        ValidationError::InvalidEmail => t!("notify-invalid-email"),
    }
}
