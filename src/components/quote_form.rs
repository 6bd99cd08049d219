use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::config;
use crate::quote::{deep_link, QuoteRequest};

#[function_component(QuoteForm)]
pub fn quote_form() -> Html {
    let request = use_state(QuoteRequest::default);

    let on_name = {
        let request = request.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*request).clone();
            next.name = input.value();
            request.set(next);
        })
    };

    let on_phone = {
        let request = request.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*request).clone();
            next.phone = input.value();
            request.set(next);
        })
    };

    let on_area = {
        let request = request.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*request).clone();
            next.area = select.value();
            request.set(next);
        })
    };

    let on_model = {
        let request = request.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*request).clone();
            next.model = input.value();
            request.set(next);
        })
    };

    let on_issue = {
        let request = request.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*request).clone();
            next.issue = input.value();
            request.set(next);
        })
    };

    let complete = request.is_complete();
    // No navigation target until every field is filled in.
    let submit_href = complete.then(|| {
        deep_link(
            &config::whatsapp_base(),
            &request.message_body(config::BUSINESS_NAME),
        )
    });

    let onsubmit = Callback::from(|e: SubmitEvent| e.prevent_default());

    html! {
        <form class="quote-form" {onsubmit}>
            <div class="quote-row">
                <input
                    type="text"
                    placeholder="Seu nome"
                    value={request.name.clone()}
                    oninput={on_name}
                />
                <input
                    type="tel"
                    placeholder="Telefone (WhatsApp)"
                    value={request.phone.clone()}
                    oninput={on_phone}
                />
            </div>
            <div class="quote-row">
                <select onchange={on_area}>
                    { for config::AREAS.iter().map(|area| html! {
                        <option value={*area} selected={request.area == *area}>{*area}</option>
                    }) }
                </select>
                <input
                    type="text"
                    placeholder="Modelo do aparelho (ex.: iPhone 12)"
                    value={request.model.clone()}
                    oninput={on_model}
                />
            </div>
            <textarea
                placeholder="Descreva o problema (ex.: tela trincada, não carrega, molhou, bateria descarregando rápido...)"
                value={request.issue.clone()}
                oninput={on_issue}
            />
            <div class="quote-actions">
                <p class="quote-note">
                    {"Dados protegidos. Envio direto via WhatsApp, sem formulário longo."}
                </p>
                <a
                    class={classes!("quote-submit", (!complete).then(|| "disabled"))}
                    href={submit_href}
                    target="_blank"
                    rel="noreferrer"
                    aria-disabled={(!complete).to_string()}
                >
                    {"Solicitar coleta →"}
                </a>
            </div>

            <style>
                {r#"
                .quote-form {
                    margin-top: 1.5rem;
                    display: grid;
                    gap: 0.75rem;
                }

                .quote-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 0.75rem;
                }

                .quote-form input,
                .quote-form select,
                .quote-form textarea {
                    width: 100%;
                    border: 1px solid #e2e8f0;
                    background: #f8fafc;
                    border-radius: 12px;
                    padding: 0.6rem 0.8rem;
                    font-size: 0.9rem;
                    font-family: inherit;
                    color: #0f172a;
                    outline: none;
                    transition: border-color 0.2s ease;
                    box-sizing: border-box;
                }

                .quote-form input:focus,
                .quote-form select:focus,
                .quote-form textarea:focus {
                    border-color: #cbd5e1;
                }

                .quote-form input::placeholder,
                .quote-form textarea::placeholder {
                    color: #94a3b8;
                }

                .quote-form textarea {
                    min-height: 90px;
                    resize: vertical;
                }

                .quote-actions {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 0.75rem;
                }

                .quote-note {
                    font-size: 0.75rem;
                    color: #94a3b8;
                    margin: 0;
                }

                .quote-submit {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    white-space: nowrap;
                    padding: 0.55rem 1rem;
                    border-radius: 12px;
                    font-size: 0.9rem;
                    font-weight: 600;
                    text-decoration: none;
                    color: #fff;
                    background: linear-gradient(90deg, #f59e0b, #f97316, #f43f5e);
                    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.1);
                    transition: box-shadow 0.2s ease;
                }

                .quote-submit:hover {
                    box-shadow: 0 4px 12px rgba(15, 23, 42, 0.15);
                }

                .quote-submit.disabled {
                    pointer-events: none;
                    background: #e2e8f0;
                    color: #94a3b8;
                    box-shadow: none;
                }

                @media (max-width: 480px) {
                    .quote-row {
                        grid-template-columns: 1fr;
                    }

                    .quote-actions {
                        flex-direction: column;
                        align-items: stretch;
                        text-align: center;
                    }
                }
                "#}
            </style>
        </form>
    }
}
