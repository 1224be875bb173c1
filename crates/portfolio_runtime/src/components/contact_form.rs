use super::*;

use crate::contact::{send_contact, ContactField, ContactForm, ContactStatus};

#[component]
pub(super) fn ContactSection() -> impl IntoView {
    let runtime = use_portfolio_runtime();
    let form = create_rw_signal(ContactForm::default());
    let status = create_rw_signal(ContactStatus::Idle);

    let bind = move |field: ContactField| {
        move |ev: ev::Event| {
            let value = event_target_value(&ev);
            form.update(|form| form.set(field, value));
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked() == ContactStatus::Submitting {
            return;
        }
        let host = runtime.host.get_value();
        let http = host.http();
        let timers = host.timers();
        let relay_url = host.config().contact.relay_url.clone();
        let submission = form.get_untracked();
        status.set(ContactStatus::Submitting);

        spawn_local(async move {
            let report = move |next: ContactStatus| match next {
                ContactStatus::Sent => {
                    let _ = form.try_set(ContactForm::default());
                    let _ = status.try_set(ContactStatus::Sent);
                }
                // Only dismiss the banner this submission raised.
                ContactStatus::Idle => {
                    let _ = status.try_update(|status| {
                        if *status == ContactStatus::Sent {
                            *status = ContactStatus::Idle;
                        }
                    });
                }
                other => {
                    let _ = status.try_set(other);
                }
            };
            send_contact(
                http.as_ref(),
                timers.as_ref(),
                &relay_url,
                &submission,
                report,
            )
            .await;
        });
    };

    view! {
        <section id="contact" class="contact">
            <SectionHeading index="05." title="Get In Touch" />
            <p class="contact-intro">
                "My inbox is always open. Whether you have a question or just want to say hi, I'll get back to you."
            </p>
            {move || match status.get() {
                ContactStatus::Sent => {
                    Some(
                        view! {
                            <p class="contact-banner contact-banner-success" role="status">
                                "Thanks for reaching out! I'll get back to you soon."
                            </p>
                        },
                    )
                }
                ContactStatus::Failed(_) => {
                    Some(
                        view! {
                            <p class="contact-banner contact-banner-error" role="alert">
                                "Something went wrong. Please try again or email me directly."
                            </p>
                        },
                    )
                }
                _ => None,
            }}
            <form class="contact-form" on:submit=on_submit>
                <label>
                    "Name"
                    <input
                        type="text"
                        name="name"
                        required=true
                        prop:value=move || form.with(|form| form.name.clone())
                        on:input=bind(ContactField::Name)
                    />
                </label>
                <label>
                    "Email"
                    <input
                        type="email"
                        name="email"
                        required=true
                        prop:value=move || form.with(|form| form.email.clone())
                        on:input=bind(ContactField::Email)
                    />
                </label>
                <label>
                    "Message"
                    <textarea
                        name="message"
                        rows="5"
                        required=true
                        prop:value=move || form.with(|form| form.message.clone())
                        on:input=bind(ContactField::Message)
                    ></textarea>
                </label>
                <button
                    type="submit"
                    class="button button-primary"
                    disabled=move || status.get() == ContactStatus::Submitting
                >
                    {move || {
                        if status.get() == ContactStatus::Submitting {
                            "Sending…"
                        } else {
                            "Send Message"
                        }
                    }}
                </button>
            </form>
        </section>
    }
}
