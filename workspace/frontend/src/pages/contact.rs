use common::overlay::CONTACT_MESSAGES;
use common::{ContactForm, Operation};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api_client::contact::send_contact_message;
use crate::common::notify::alert;
use crate::common::use_overlay;

const THANK_YOU: &str = "Thank you for your message! We will get back to you soon.";

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let form = use_state(ContactForm::default);
    let overlay = use_overlay();

    let field = |apply: fn(&mut ContactForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut updated = (*form).clone();
            apply(&mut updated, value);
            form.set(updated);
        })
    };
    let on_name = field(|form: &mut ContactForm, value: String| form.from_name = value)
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());
    let on_email = field(|form: &mut ContactForm, value: String| form.from_email = value)
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());
    let on_message = field(|form: &mut ContactForm, value: String| form.message = value)
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlTextAreaElement>().value());

    let on_submit = {
        let form = form.clone();
        let overlay = overlay.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let message = form.to_message();
            let lease = overlay.as_ref().map(|overlay| overlay.show(&CONTACT_MESSAGES));
            let form = form.clone();

            wasm_bindgen_futures::spawn_local(async move {
                log::info!("Sending contact message from {}", message.from_email);
                let outcome = send_contact_message(message).await;
                drop(lease);
                match outcome {
                    Ok(()) => {
                        alert(THANK_YOU);
                        let mut cleared = (*form).clone();
                        cleared.reset();
                        form.set(cleared);
                    }
                    Err(error) => {
                        log::error!("Contact message failed: {}", error);
                        alert(&Operation::Contact.failure_text(&error));
                    }
                }
            });
        })
    };

    html! {
        <div class="container mx-auto px-4 py-8">
            <div class="card bg-base-100 shadow-xl max-w-2xl mx-auto">
                <div class="card-body">
                    <h2 class="card-title text-3xl mb-4">{"Contact Us"}</h2>
                    <form id="contactForm" onsubmit={on_submit} class="space-y-4">
                        <div class="form-control">
                            <label class="label" for="contact_name"><span class="label-text">{"Name"}</span></label>
                            <input
                                type="text"
                                id="contact_name"
                                name="from_name"
                                class="input input-bordered w-full"
                                required={true}
                                value={form.from_name.clone()}
                                oninput={on_name}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="contact_email"><span class="label-text">{"Email"}</span></label>
                            <input
                                type="email"
                                id="contact_email"
                                name="from_email"
                                class="input input-bordered w-full"
                                required={true}
                                value={form.from_email.clone()}
                                oninput={on_email}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="contact_message"><span class="label-text">{"Message"}</span></label>
                            <textarea
                                id="contact_message"
                                name="message"
                                class="textarea textarea-bordered w-full h-32"
                                required={true}
                                value={form.message.clone()}
                                oninput={on_message}
                            />
                        </div>
                        <div class="card-actions justify-end">
                            <button type="submit" class="btn btn-primary">
                                <i class="fas fa-paper-plane"></i>{" Send Message"}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
