use yew::prelude::*;
use web_sys::MouseEvent;
use yew::{Children, Properties};

const FAQS: [(&str, &str); 4] = [
    (
        "Quanto custa o serviço de leva e traz?",
        "A coleta e entrega estão inclusas nas regiões atendidas. Fora da área, cobramos uma taxa reduzida para cobrir o deslocamento.",
    ),
    (
        "Vocês dão garantia?",
        "Sim, 90 dias para a maioria dos reparos e peças (exceto danos por impacto/umidade após o conserto).",
    ),
    (
        "Quanto tempo leva para trocar a tela?",
        "Em média de 1 a 3 horas, dependendo do modelo e disponibilidade da peça.",
    ),
    (
        "Como pago?",
        "Pix, cartão (crédito/débito) e parcelamento. Emitimos nota fiscal sob solicitação.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section id="faq" class="faq-section">
            <div class="faq-heading">
                <h2>{"Perguntas frequentes"}</h2>
                <p>{"Se não encontrar sua resposta, chama a gente no WhatsApp! ;)"}</p>
            </div>
            <div class="faq-list">
                { for FAQS.iter().map(|(question, answer)| html! {
                    <FaqItem question={*question}>
                        <p>{*answer}</p>
                    </FaqItem>
                }) }
            </div>

            <style>
                {r#"
                .faq-section {
                    background: #f8fafc;
                    padding: 5rem 1.5rem;
                }

                .faq-heading {
                    max-width: 720px;
                    margin: 0 auto;
                    text-align: center;
                }

                .faq-heading h2 {
                    font-size: 2rem;
                    font-weight: 800;
                    letter-spacing: -0.02em;
                    color: #0f172a;
                    margin: 0;
                }

                .faq-heading p {
                    margin-top: 0.75rem;
                    color: #475569;
                }

                .faq-list {
                    max-width: 720px;
                    margin: 2.5rem auto 0;
                    background: #fff;
                    border: 1px solid #f1f5f9;
                    border-radius: 16px;
                    overflow: hidden;
                }

                .faq-item {
                    border-bottom: 1px solid #e2e8f0;
                }

                .faq-item:last-child {
                    border-bottom: none;
                }

                .faq-question {
                    width: 100%;
                    padding: 1.25rem;
                    background: none;
                    border: none;
                    color: #0f172a;
                    font-size: 1rem;
                    font-weight: 500;
                    font-family: inherit;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .faq-question:hover {
                    color: #f97316;
                }

                .toggle-icon {
                    margin-left: 0.75rem;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 1.5rem;
                    height: 1.5rem;
                    border-radius: 6px;
                    background: #f1f5f9;
                    color: #475569;
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.4s ease;
                    padding: 0 1.25rem;
                }

                .faq-item.open .faq-answer {
                    max-height: 400px;
                    padding: 0 1.25rem 1.25rem;
                }

                .faq-answer p {
                    color: #475569;
                    font-size: 0.9rem;
                    line-height: 1.6;
                    margin: 0;
                }

                @media (max-width: 768px) {
                    .faq-section {
                        padding: 3.5rem 1rem;
                    }

                    .faq-heading h2 {
                        font-size: 1.6rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
