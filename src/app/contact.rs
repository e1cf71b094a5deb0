use leptos::{ev::SubmitEvent, html, prelude::*};

use super::overview::SocialAnchor;
use crate::contact::{BannerKind, ContactForm, ContactState, Field};
use crate::content::{copyright_year, footer_text, CONTACT_EMAIL, CONTACT_PHONE, SOCIAL_LINKS};

/// Validates the message and hands it to the mailer provided by the server.
#[server]
pub async fn send_message(form: ContactForm) -> Result<(), ServerFnError> {
    use crate::contact::ContactError;
    use crate::mailer::Mailer;
    use http::StatusCode;
    use leptos_axum::ResponseOptions;

    let set_status = |code: StatusCode| {
        if let Some(res) = use_context::<ResponseOptions>() {
            res.set_status(code);
        }
    };

    if let Err(e) = form.validate() {
        set_status(StatusCode::UNPROCESSABLE_ENTITY);
        return Err(ServerFnError::new(e));
    }
    let Some(mailer) = use_context::<Mailer>() else {
        tracing::error!("contact message dropped, email delivery is not configured");
        set_status(StatusCode::SERVICE_UNAVAILABLE);
        return Err(ServerFnError::new(ContactError::NotConfigured));
    };
    mailer.send(&form).await.map_err(|e| {
        set_status(StatusCode::BAD_GATEWAY);
        ServerFnError::new(e)
    })
}

#[component]
pub fn ContactSection(node_ref: NodeRef<html::Section>) -> impl IntoView {
    view! {
        <section id="contact" node_ref=node_ref class="bg-[#0a0a0a] py-20">
            <div class="max-w-7xl mx-auto px-8">
                <div class="text-center mb-12">
                    <h2 class="text-3xl font-mono font-bold italic text-neutral-200 mb-4">
                        "\"...how can i get in touch with you?\""
                    </h2>
                    <p class="text-neutral-400 font-mono">"i'm glad you've asked."</p>
                </div>
                <div class="grid md:grid-cols-2 gap-12">
                    <div class="space-y-6">
                        <ContactInfo />
                        <div class="bg-neutral-900/50 p-6 rounded-lg border border-neutral-800">
                            <h3 class="text-xl font-bold text-neutral-200 mb-4">"Connect with Me"</h3>
                            <div class="grid grid-cols-2 gap-4">
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|link| view! { <SocialAnchor link /> })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                    <MessageForm />
                </div>
                <Footer />
            </div>
        </section>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="bg-neutral-900/50 p-6 rounded-lg border border-neutral-800">
            <h3 class="text-xl font-bold text-neutral-200 mb-4">"Contact Information"</h3>
            <div class="space-y-4">
                <div class="flex items-center gap-3 text-neutral-400 hover:text-neutral-200 transition-colors">
                    <span aria-hidden="true">"✉"</span>
                    <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                </div>
                <div class="flex items-center gap-3 text-neutral-400 hover:text-neutral-200 transition-colors">
                    <span aria-hidden="true">"☎"</span>
                    <span>{CONTACT_PHONE}</span>
                </div>
            </div>
        </div>
    }
}

const INPUT_CLASS: &str = "w-full px-4 py-2 bg-neutral-800 border border-neutral-700 rounded-lg focus:outline-none focus:ring-2 focus:ring-neutral-600 text-neutral-200";
const LABEL_CLASS: &str = "block text-sm font-medium text-neutral-400 mb-1";

#[component]
fn MessageForm() -> impl IntoView {
    let state = RwSignal::new(ContactState::default());
    let send = ServerAction::<SendMessage>::new();

    Effect::new(move |_| {
        let Some(res) = send.value().get() else {
            return;
        };
        match &res {
            Ok(()) => log::info!("Email sent successfully"),
            Err(e) => log::error!("Error sending email: {e}"),
        }
        state.update(|s| s.finish_submit(res.map_err(|e| e.to_string())));
    });

    // every input writes back to the field named by its `name` attribute
    let on_input = move |ev: leptos::ev::Event| {
        let field = event_target::<web_sys::Element>(&ev)
            .get_attribute("name")
            .and_then(|name| Field::from_name(&name));
        if let Some(field) = field {
            let value = event_target_value(&ev);
            state.update(|s| s.form.set(field, value));
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(form) = state.try_update(|s| s.begin_submit()).flatten() {
            send.dispatch(SendMessage { form });
        }
    };

    let value_of = move |field: Field| move || state.with(|s| s.form.get(field).to_string());

    view! {
        <div class="bg-neutral-900/50 p-6 rounded-lg border border-neutral-800">
            <h3 class="text-xl font-bold text-neutral-200 mb-4">"Send a Message"</h3>
            {move || {
                state
                    .with(|s| s.status.banner().map(|banner| (banner, s.status.reason().map(str::to_owned))))
                    .map(|((kind, text), reason)| {
                        let class = match kind {
                            BannerKind::Success => {
                                "mb-4 p-3 bg-green-900/50 border border-green-700 rounded-lg text-green-200"
                            }
                            BannerKind::Error => {
                                "mb-4 p-3 bg-red-900/50 border border-red-700 rounded-lg text-red-200"
                            }
                        };
                        view! {
                            <div class=class role="status">
                                {text}
                                {reason.map(|r| view! { <p class="mt-1 text-sm opacity-80">{r}</p> })}
                            </div>
                        }
                    })
            }}
            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label for="name" class=LABEL_CLASS>"Name"</label>
                    <input
                        type="text"
                        id="name"
                        name=Field::Name.name()
                        prop:value=value_of(Field::Name)
                        on:input=on_input
                        required
                        class=INPUT_CLASS
                        placeholder="Your name"
                    />
                </div>
                <div>
                    <label for="email" class=LABEL_CLASS>"Email"</label>
                    <input
                        type="email"
                        id="email"
                        name=Field::Email.name()
                        prop:value=value_of(Field::Email)
                        on:input=on_input
                        class=INPUT_CLASS
                        placeholder="your@email.com"
                    />
                </div>
                <div>
                    <label for="message" class=LABEL_CLASS>"Message"</label>
                    <textarea
                        id="message"
                        name=Field::Message.name()
                        prop:value=value_of(Field::Message)
                        on:input=on_input
                        required
                        rows="4"
                        class=INPUT_CLASS
                        placeholder="Your message..."
                    ></textarea>
                </div>
                <button
                    type="submit"
                    disabled=move || state.with(|s| s.status.is_sending())
                    class="w-full py-2 px-4 bg-neutral-700 hover:bg-neutral-600 disabled:opacity-60 text-neutral-200 font-medium rounded-lg transition-colors duration-200"
                >
                    {move || state.with(|s| s.status.button_label())}
                </button>
            </form>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="mt-16 pt-8 border-t border-neutral-800 text-center text-neutral-400">
            <p class="font-mono">{footer_text(copyright_year())}</p>
        </footer>
    }
}

// server-only paths; run with `cargo test --features ssr`
#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::config::MailerConfig;
    use crate::contact::ContactError;
    use crate::mailer::Mailer;
    use http::StatusCode;
    use leptos_axum::ResponseOptions;
    use std::time::Duration;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn form() -> ContactForm {
        ContactForm {
            name: "Ferris".to_string(),
            email: "ferris@rust-lang.org".to_string(),
            message: "Hello there".to_string(),
        }
    }

    fn mailer(endpoint: String) -> Mailer {
        Mailer::new(MailerConfig {
            endpoint,
            service_id: "service_test".to_string(),
            template_id: "template_test".to_string(),
            public_key: "public_test".to_string(),
            private_key: None,
            timeout: Duration::from_secs(2),
        })
    }

    // Runs the server function the way the router does: inside an owner that
    // carries the response options and, when configured, the mailer.
    async fn call(
        form: ContactForm,
        mailer: Option<Mailer>,
    ) -> (Result<(), ServerFnError>, Option<StatusCode>) {
        let owner = Owner::new();
        let response = ResponseOptions::default();
        let fut = owner.with(|| {
            provide_context(response.clone());
            if let Some(mailer) = mailer {
                provide_context(mailer);
            }
            ScopedFuture::new(send_message(form))
        });
        let res = fut.await;
        let status = response.0.read().status;
        (res, status)
    }

    async fn mock_server(status: u16) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_invalid_form_is_unprocessable() {
        let server = mock_server(200).await;
        let mut bad = form();
        bad.name.clear();
        let (res, status) = call(bad, Some(mailer(server.uri()))).await;
        let err = res.unwrap_err().to_string();
        assert!(err.contains(&ContactError::MissingName.to_string()), "{err}");
        assert_eq!(status, Some(StatusCode::UNPROCESSABLE_ENTITY));
    }

    #[tokio::test]
    async fn test_missing_mailer_is_unavailable() {
        let (res, status) = call(form(), None).await;
        let err = res.unwrap_err().to_string();
        assert!(err.contains(&ContactError::NotConfigured.to_string()), "{err}");
        assert_eq!(status, Some(StatusCode::SERVICE_UNAVAILABLE));
    }

    #[tokio::test]
    async fn test_delivery_failure_is_bad_gateway() {
        let server = mock_server(500).await;
        let (res, status) = call(form(), Some(mailer(server.uri()))).await;
        assert!(res.is_err());
        assert_eq!(status, Some(StatusCode::BAD_GATEWAY));
    }

    #[tokio::test]
    async fn test_delivers_through_context_mailer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
            .expect(1)
            .mount(&server)
            .await;
        let (res, status) = call(form(), Some(mailer(server.uri()))).await;
        assert!(res.is_ok());
        assert_eq!(status, None);
    }
}
