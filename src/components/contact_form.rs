use log::{debug, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::{ContactField, ContactForm, SubmissionStatus, SubmitError, SubmitterHandle};

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub submitter: SubmitterHandle,
}

pub enum ContactFormMsg {
    Edit { name: String, value: String },
    Submit,
    Submitted(Result<(), SubmitError>),
}

pub struct ContactFormView {
    form: ContactForm,
}

impl Component for ContactFormView {
    type Message = ContactFormMsg;
    type Properties = ContactFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: ContactForm::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::Edit { name, value } => match self.form.update_named_field(&name, value) {
                Ok(()) => true,
                Err(e) => {
                    debug!("Edit not applied: {}", e);
                    false
                }
            },
            ContactFormMsg::Submit => match self.form.start_submission(&ctx.props().submitter) {
                Ok(pending) => {
                    ctx.link()
                        .send_future(async move { ContactFormMsg::Submitted(pending.await) });
                    true
                }
                // Double click while the first request is out re-renders nothing
                Err(e) => !e.left_form_unchanged(),
            },
            ContactFormMsg::Submitted(outcome) => {
                if let Err(e) = self.form.finish_submit(outcome) {
                    warn!("Contact message not delivered: {}", e);
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactFormMsg::Submit
        });
        let oninput = {
            let link = ctx.link().clone();
            Callback::from(move |e: InputEvent| {
                if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                    link.send_message(ContactFormMsg::Edit {
                        name: input.name(),
                        value: input.value(),
                    });
                } else if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                    link.send_message(ContactFormMsg::Edit {
                        name: area.name(),
                        value: area.value(),
                    });
                }
            })
        };
        let status = self.form.status();
        let busy = status.is_submitting();

        let button_label = match status {
            SubmissionStatus::Submitting => html! {
                <>
                    <span class="loading-spinner"></span>
                    {"Sending..."}
                </>
            },
            SubmissionStatus::Success => html! { <>{"✓ "}{"Sent!"}</> },
            _ => html! { {"Send Message"} },
        };

        html! {
            <form class="contact-form" onsubmit={onsubmit} novalidate={true}>
                <style>
                    {r#"
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .contact-form label {
                        display: block;
                        font-size: 0.9rem;
                        font-weight: 500;
                        color: #e5e7eb;
                    }
                    .contact-form input,
                    .contact-form textarea {
                        margin-top: 0.25rem;
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.75rem 1rem;
                        background: rgba(0, 0, 0, 0.2);
                        color: #fff;
                        border: 1px solid #374151;
                        border-radius: 8px;
                        font: inherit;
                    }
                    .contact-form input:disabled,
                    .contact-form textarea:disabled {
                        opacity: 0.6;
                    }
                    .contact-submit {
                        width: 100%;
                        padding: 0.75rem;
                        border: none;
                        border-radius: 9999px;
                        color: #fff;
                        font-size: 1rem;
                        cursor: pointer;
                        background: linear-gradient(90deg, #3b82f6, #a855f7);
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.3);
                        transition: all 0.3s ease;
                    }
                    .contact-submit.submitting {
                        opacity: 0.7;
                        cursor: not-allowed;
                    }
                    .contact-submit.success { background: #22c55e; }
                    .contact-submit.error { background: #ef4444; }
                    .form-message {
                        font-size: 0.9rem;
                        text-align: center;
                    }
                    .form-message.error { color: #f87171; }
                    .form-message.success { color: #4ade80; }
                    .loading-spinner {
                        display: inline-block;
                        width: 14px;
                        height: 14px;
                        margin-right: 0.5rem;
                        border: 2px solid rgba(255,255,255,.3);
                        border-radius: 50%;
                        border-top-color: #fff;
                        animation: spin 1s ease-in-out infinite;
                        vertical-align: middle;
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                    "#}
                </style>
                { self.render_input(ContactField::Name, "text", &oninput) }
                { self.render_input(ContactField::Email, "email", &oninput) }
                <div>
                    <label for={ContactField::Message.as_str()}>{ContactField::Message.label()}</label>
                    <textarea
                        id={ContactField::Message.as_str()}
                        name={ContactField::Message.as_str()}
                        rows="4"
                        placeholder={ContactField::Message.placeholder()}
                        value={self.form.request().message.clone()}
                        disabled={busy}
                        oninput={oninput.clone()}
                    />
                </div>
                <button
                    type="submit"
                    class={classes!("contact-submit", status.as_str())}
                    disabled={busy}
                >
                    { button_label }
                </button>
                if let Some(message) = self.form.message() {
                    <div class={classes!("form-message", status.as_str())}>
                        if status == SubmissionStatus::Error {
                            { "⚠ " }
                        }
                        if status == SubmissionStatus::Success {
                            { "✓ " }
                        }
                        { message }
                    </div>
                }
            </form>
        }
    }
}

impl ContactFormView {
    fn render_input(
        &self,
        field: ContactField,
        kind: &'static str,
        oninput: &Callback<InputEvent>,
    ) -> Html {
        html! {
            <div>
                <label for={field.as_str()}>{field.label()}</label>
                <input
                    type={kind}
                    id={field.as_str()}
                    name={field.as_str()}
                    placeholder={field.placeholder()}
                    value={self.form.request().get(field).to_string()}
                    disabled={self.form.is_submitting()}
                    oninput={oninput.clone()}
                />
            </div>
        }
    }
}
