use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::animation::{Animation, Keyframes};
use crate::api::SubmitChannel;
use crate::config::{BUSINESS, STATUS_RESET_MS};
use crate::state::contact_form::{ContactAction, ContactForm, Field, SubmitStatus};

const MAP_IMAGE: &str = "https://images.unsplash.com/photo-1577086664693-894d8405334a?auto=format&fit=crop&w=800&q=80";

fn render_field(form: &ContactForm, field: Field, label: &str, dispatch: &Callback<(Field, String)>) -> Html {
    let id = field.id();
    let error = form.errors().get(field);
    let error_id = format!("{}-error", id);
    let class = classes!("form-input", error.is_some().then(|| "invalid"));

    let input = match field {
        Field::Message => {
            let dispatch = dispatch.clone();
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlTextAreaElement = e.target_unchecked_into();
                dispatch.emit((field, input.value()));
            });
            html! {
                <textarea
                    {id}
                    name={id}
                    rows="5"
                    {class}
                    value={form.value(field).to_string()}
                    {oninput}
                    aria-invalid={error.is_some().to_string()}
                    aria-describedby={error.is_some().then(|| error_id.clone())}
                />
            }
        }
        Field::Name | Field::Email => {
            let dispatch = dispatch.clone();
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                dispatch.emit((field, input.value()));
            });
            html! {
                <input
                    type={if field == Field::Email { "email" } else { "text" }}
                    {id}
                    name={id}
                    {class}
                    value={form.value(field).to_string()}
                    {oninput}
                    aria-invalid={error.is_some().to_string()}
                    aria-describedby={error.is_some().then(|| error_id.clone())}
                />
            }
        }
    };

    html! {
        <div class="form-group">
            <label for={id}>{label}</label>
            { input }
            if let Some(error) = error {
                <p id={error_id} class="field-error">{error.to_string()}</p>
            }
        </div>
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form = use_reducer(ContactForm::default);

    // Send whatever was pending when the submission started. A result that lands
    // after teardown is dropped; the request itself cannot be cancelled.
    {
        let dispatcher = form.dispatcher();
        let pending = form.pending();
        use_effect_with_deps(
            move |_| {
                let alive = Rc::new(Cell::new(true));
                if let Some((epoch, data)) = pending {
                    let alive = alive.clone();
                    spawn_local(async move {
                        let result = SubmitChannel::from_config().send(data).await;
                        if alive.get() {
                            dispatcher.dispatch(ContactAction::Finished { epoch, result });
                        } else {
                            debug!("Dropping contact result for unmounted form (epoch {})", epoch);
                        }
                    });
                }
                move || alive.set(false)
            },
            (form.epoch(), form.is_submitting()),
        );
    }

    {
        let dispatcher = form.dispatcher();
        use_effect_with_deps(
            move |&(status, epoch): &(SubmitStatus, u32)| {
                let timeout = matches!(status, SubmitStatus::Success | SubmitStatus::Error).then(|| {
                    Timeout::new(STATUS_RESET_MS, move || dispatcher.dispatch(ContactAction::Expire(epoch)))
                });
                move || drop(timeout)
            },
            (form.status(), form.epoch()),
        );
    }

    let edit = {
        let form = form.clone();
        Callback::from(move |(field, value): (Field, String)| form.dispatch(ContactAction::Edit(field, value)))
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form.dispatch(ContactAction::Submit);
        })
    };

    let heading = Animation::on_mount(Keyframes::FadeUp, 500).style(true);
    let left = Animation::on_mount(Keyframes::SlideLeft, 500).delay(200).style(true);
    let right = Animation::on_mount(Keyframes::SlideRight, 500).delay(200).style(true);
    let banner = Animation::on_mount(Keyframes::FadeDown, 300).style(true);

    html! {
        <section id="contact-section" class="contact" dir="rtl">
            <style>
                {r#"
                .contact { padding: 4rem 1rem; background: #f9fafb; }
                .contact-inner { max-width: 72rem; margin: 0 auto; }
                .contact-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 2.5rem; }
                .contact-card {
                    background: #fff;
                    border-radius: 8px;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    padding: 2rem;
                }
                .contact-card h3 { font-size: 1.25rem; font-weight: 600; color: #1f2937; margin-bottom: 1.5rem; text-align: right; }
                .contact-form { display: flex; flex-direction: column; gap: 1.5rem; }
                .form-group { display: flex; flex-direction: column; gap: 0.5rem; }
                .form-group label { color: #374151; font-weight: 500; text-align: right; }
                .form-input {
                    width: 100%;
                    padding: 0.5rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 6px;
                    text-align: right;
                    box-sizing: border-box;
                    font: inherit;
                }
                .form-input:focus { outline: none; box-shadow: 0 0 0 2px rgba(59, 130, 246, 0.5); }
                .form-input.invalid { border-color: #ef4444; }
                .form-input.invalid:focus { box-shadow: 0 0 0 2px rgba(239, 68, 68, 0.5); }
                .field-error { color: #ef4444; font-size: 0.875rem; text-align: right; margin: 0.25rem 0 0; }
                .submit-button {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    border: none;
                    border-radius: 6px;
                    color: #fff;
                    font-weight: 500;
                    cursor: pointer;
                    background: linear-gradient(to left, #3b82f6, #10b981);
                    transition: transform 0.2s, opacity 0.3s;
                }
                .submit-button:hover:not(:disabled) { transform: scale(1.02); }
                .submit-button:active:not(:disabled) { transform: scale(0.98); }
                .submit-button:disabled { opacity: 0.7; cursor: default; }
                .spinner {
                    display: inline-block;
                    width: 1.25rem;
                    height: 1.25rem;
                    margin-left: 0.75rem;
                    vertical-align: middle;
                    border: 3px solid rgba(255, 255, 255, 0.3);
                    border-top-color: #fff;
                    border-radius: 50%;
                    animation: cw-spin 1s linear infinite;
                }
                .status-banner { padding: 0.75rem 1rem; border-radius: 4px; text-align: right; }
                .status-banner.success { background: #dcfce7; border: 1px solid #4ade80; color: #15803d; }
                .status-banner.error { background: #fee2e2; border: 1px solid #f87171; color: #b91c1c; }
                .contact-info { display: flex; flex-direction: column; gap: 2rem; }
                .info-list { display: flex; flex-direction: column; gap: 1rem; }
                .info-row { display: flex; align-items: center; justify-content: flex-end; gap: 1rem; }
                .info-row .info-text { text-align: right; }
                .info-row .info-label { color: #374151; font-weight: 500; margin: 0; }
                .info-row .info-value { color: #4b5563; margin: 0; }
                .info-icon { padding: 0.75rem; border-radius: 50%; background: #dbeafe; }
                .info-icon.green { background: #dcfce7; }
                .map-card { position: relative; height: 16rem; overflow: hidden; }
                .map-frame { position: relative; height: 100%; border-radius: 6px; overflow: hidden; }
                .map-frame img { width: 100%; height: 100%; object-fit: cover; }
                .map-frame-overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.2);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .map-open {
                    background: #fff;
                    color: #3b82f6;
                    padding: 0.5rem 1rem;
                    border-radius: 6px;
                    font-weight: 500;
                    cursor: pointer;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    transition: transform 0.2s;
                }
                @media (max-width: 767px) {
                    .contact-grid { grid-template-columns: 1fr; }
                    .contact-card { padding: 1.5rem; }
                }
                "#}
            </style>
            <div class="contact-inner">
                <div class="section-heading" style={heading}>
                    <h2>{"צור קשר"}</h2>
                    <p>{"יש לך שאלות? אנחנו כאן לעזור. מלא את הטופס או השתמש בפרטי הקשר שלנו."}</p>
                </div>

                <div class="contact-grid">
                    <div class="contact-card" style={left}>
                        <h3>{"השאר הודעה"}</h3>
                        <form class="contact-form" {onsubmit} novalidate=true>
                            { render_field(&form, Field::Name, "שם מלא", &edit) }
                            { render_field(&form, Field::Email, "אימייל", &edit) }
                            { render_field(&form, Field::Message, "הודעה", &edit) }

                            <button type="submit" class="submit-button" disabled={form.is_submitting()}>
                                if form.is_submitting() {
                                    <span class="spinner" aria-hidden="true"></span>
                                    {"שולח..."}
                                } else {
                                    {"שלח הודעה"}
                                }
                            </button>

                            {
                                match form.status() {
                                    SubmitStatus::Success => html! {
                                        <div class="status-banner success" role="alert" style={banner.clone()}>
                                            <strong>{"תודה! "}</strong>
                                            <span>{"הודעתך נשלחה בהצלחה."}</span>
                                        </div>
                                    },
                                    SubmitStatus::Error => html! {
                                        <div class="status-banner error" role="alert" style={banner.clone()}>
                                            <strong>{"שגיאה! "}</strong>
                                            <span>{"אירעה שגיאה בשליחת ההודעה. אנא נסה שוב."}</span>
                                        </div>
                                    },
                                    SubmitStatus::Idle | SubmitStatus::Submitting => html! {},
                                }
                            }
                        </form>
                    </div>

                    <div class="contact-info" style={right}>
                        <div class="contact-card">
                            <h3>{"פרטי התקשרות"}</h3>
                            <div class="info-list">
                                { info_row("טלפון", BUSINESS.phone, "📞", false) }
                                { info_row("כתובת", BUSINESS.address, "📍", true) }
                                { info_row("שעות פעילות", BUSINESS.hours, "🕒", false) }
                                { info_row("אימייל", BUSINESS.email, "✉️", true) }
                            </div>
                        </div>

                        <div class="contact-card map-card">
                            <h3>{"המיקום שלנו"}</h3>
                            <div class="map-frame">
                                <img src={MAP_IMAGE} alt="מפת מיקום שטיפת הרכב" loading="lazy" />
                                <div class="map-frame-overlay">
                                    <span class="map-open hover-grow">{"פתח במפות"}</span>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn info_row(label: &str, value: &str, icon: &str, green: bool) -> Html {
    html! {
        <div class="info-row">
            <div class="info-text">
                <p class="info-label">{label.to_string()}</p>
                <p class="info-value">{value.to_string()}</p>
            </div>
            <span class={classes!("info-icon", green.then(|| "green"))} aria-hidden="true">{icon.to_string()}</span>
        </div>
    }
}
