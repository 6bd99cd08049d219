use yew::prelude::*;
use chrono::Datelike;

use crate::components::faq::Faq;
use crate::components::quote_form::QuoteForm;
use crate::config;
use crate::quote::deep_link;

const STATS: [(&str, &str); 3] = [
    ("Atendimentos", "5k+"),
    ("Satisfação", "4.9/5"),
    ("Garantia", "90 dias"),
];

const STEPS: [(&str, &str, &str); 4] = [
    (
        "📞",
        "Solicite a coleta",
        "Você agenda pelo site ou WhatsApp. Nosso time confirma a janela de atendimento.",
    ),
    (
        "🛵",
        "Buscamos seu aparelho",
        "Motoboy faz a retirada com protocolo de segurança e checklist.",
    ),
    (
        "🛡️",
        "Diagnóstico e aprovação",
        "Enviamos orçamento transparente por mensagem. Só seguimos com sua autorização.",
    ),
    (
        "✅",
        "Conserto e devolução",
        "Reparo por técnicos especialistas e devolução no endereço combinado.",
    ),
];

struct Service {
    icon: &'static str,
    title: &'static str,
    info: &'static str,
    eta: &'static str,
    price: &'static str,
    badge: &'static str,
}

const SERVICES: [Service; 4] = [
    Service {
        icon: "📱",
        title: "Troca de Tela",
        info: "Cristal original / premium",
        eta: "1–3h",
        price: "a partir de R$ 199",
        badge: "Mais solicitado",
    },
    Service {
        icon: "🔋",
        title: "Substituição de Bateria",
        info: "Baterias com selo de qualidade",
        eta: "1–2h",
        price: "a partir de R$ 149",
        badge: "Garantia 90 dias",
    },
    Service {
        icon: "🔌",
        title: "Conector / Carga",
        info: "Limpeza e/ou troca do flex",
        eta: "1–2h",
        price: "sob consulta",
        badge: "Teste gratuito",
    },
    Service {
        icon: "🔍",
        title: "Diagnóstico Completo",
        info: "Relatório e orçamento detalhado",
        eta: "até 24h",
        price: "gratuito",
        badge: "Sem compromisso",
    },
];

const PERKS: [(&str, &str, &str); 6] = [
    (
        "🚚",
        "Leva & traz incluso",
        "Coleta e entrega com protocolo seguro e código de rastreio.",
    ),
    (
        "🛡️",
        "Garantia de 90 dias",
        "Padrão de qualidade em peças e mão de obra.",
    ),
    (
        "💳",
        "Pagamento facilitado",
        "Pix, cartão e parcelamento. Nota fiscal disponível.",
    ),
    (
        "⏱️",
        "Agilidade real",
        "Grande parte dos reparos é concluída no mesmo dia.",
    ),
    (
        "🔧",
        "Técnicos especialistas",
        "Experiência em multimarcas e diagnósticos precisos.",
    ),
    (
        "🔒",
        "Privacidade e segurança",
        "Tratamos seus dados com confidencialidade.",
    ),
];

const REVIEWS: [(&str, &str, usize); 3] = [
    (
        "Ana P.",
        "Buscou em casa e devolveu no mesmo dia! Tela ficou perfeita. Atendimento 10/10.",
        5,
    ),
    (
        "Marcos R.",
        "Preço justo, orçamento transparente e sem empurrar serviço. Recomendo!",
        5,
    ),
    (
        "Juliana T.",
        "Meu celular molhou e achei que tinha perdido. Recuperaram tudo!",
        5,
    ),
];

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <header id="hero" class="hero">
            <div class="hero-grid">
                <div class="hero-copy">
                    <span class="hero-badge">{"🚚 Leva & traz incluso"}</span>
                    <h1>
                        {"Assistência técnica "}
                        <span class="gradient-text">{"com coleta e entrega"}</span>
                        {" no mesmo dia*"}
                    </h1>
                    <p class="hero-subtitle">
                        { format!(
                            "Quebrou a tela? Bateria fraca? Buscamos seu aparelho em {}, \
                             consertamos com peças de qualidade e devolvemos rapidinho. \
                             Sem sair de casa.",
                            config::CITY
                        ) }
                    </p>
                    <div class="hero-cta-group">
                        <a href="#agendar" class="cta-dark">{"Solicitar coleta agora →"}</a>
                        <a
                            class="cta-ghost"
                            href={deep_link(&config::whatsapp_base(), "Olá! Preciso de um orçamento.")}
                            target="_blank"
                            rel="noreferrer"
                        >
                            {"Falar no WhatsApp 💬"}
                        </a>
                    </div>
                    <p class="hero-fineprint">
                        {"*Sujeito à disponibilidade de agenda e tipo de reparo."}
                    </p>
                    <dl class="hero-stats">
                        { for STATS.iter().map(|(label, value)| html! {
                            <div class="stat-card">
                                <dt>{*label}</dt>
                                <dd>{*value}</dd>
                            </div>
                        }) }
                    </dl>
                </div>
                <div class="hero-card">
                    <div class="hero-card-header">
                        <span class="hero-card-icon">{"📱"}</span>
                        <div>
                            <p class="hero-card-title">{"Orçamento em minutos"}</p>
                            <p class="hero-card-caption">{"Descreva o problema e receba o valor estimado."}</p>
                        </div>
                    </div>
                    <QuoteForm />
                </div>
            </div>
        </header>
    }
}

#[function_component(HowItWorks)]
fn how_it_works() -> Html {
    html! {
        <section id="como-funciona" class="section">
            <div class="section-heading">
                <h2>{"Como funciona"}</h2>
                <p>{"Serviço ponta a ponta com comodidade e segurança. Você só se preocupa em voltar a usar o celular."}</p>
            </div>
            <ol class="steps-grid">
                { for STEPS.iter().enumerate().map(|(i, (icon, title, desc))| html! {
                    <li class="step-card">
                        <span class="card-icon dark">{*icon}</span>
                        <p class="card-title">{ format!("{}. {}", i + 1, title) }</p>
                        <p class="card-text">{*desc}</p>
                    </li>
                }) }
            </ol>
        </section>
    }
}

#[function_component(Services)]
fn services() -> Html {
    html! {
        <section id="servicos" class="section tinted">
            <div class="section-heading">
                <h2>{"Serviços populares"}</h2>
                <p>{"Trabalhamos com as principais marcas (Apple, Samsung, Xiaomi, Motorola e outras)."}</p>
            </div>
            <div class="services-grid">
                { for SERVICES.iter().map(|service| html! {
                    <div class="service-card">
                        <div class="service-head">
                            <span class="card-icon warm">{service.icon}</span>
                            <div>
                                <p class="card-title">{service.title}</p>
                                <p class="card-caption">{service.info}</p>
                            </div>
                        </div>
                        <div class="service-meta">
                            <span class="service-eta">{"⏱ "}{service.eta}</span>
                            <span class="service-price">{service.price}</span>
                        </div>
                        <span class="service-badge">{service.badge}</span>
                    </div>
                }) }
            </div>
            <div class="section-cta">
                <a href="#agendar" class="cta-dark">{"Ver disponibilidade →"}</a>
            </div>
        </section>
    }
}

#[function_component(Perks)]
fn perks() -> Html {
    html! {
        <section id="diferenciais" class="section">
            <div class="section-heading">
                <h2>{ format!("Por que {}?", config::BUSINESS_NAME) }</h2>
                <p>{"Não é só conserto. É experiência completa com transparência e conforto."}</p>
            </div>
            <ul class="perks-grid">
                { for PERKS.iter().map(|(icon, title, desc)| html! {
                    <li class="perk-card">
                        <span class="card-icon dark">{*icon}</span>
                        <p class="card-title">{*title}</p>
                        <p class="card-text">{*desc}</p>
                    </li>
                }) }
            </ul>
        </section>
    }
}

#[function_component(Areas)]
fn areas() -> Html {
    html! {
        <section id="areas" class="section tinted">
            <div class="areas-grid">
                <div>
                    <h2>{ format!("Atendimento em {}", config::CITY) }</h2>
                    <p class="areas-intro">
                        {"Confira se seu bairro está na nossa rota. Se não estiver, fale com a gente que damos um jeito! ;)"}
                    </p>
                    <ul class="areas-list">
                        { for config::AREAS.iter().map(|area| html! {
                            <li>{"📍 "}{*area}</li>
                        }) }
                    </ul>
                </div>
                <div class="hours-card">
                    <p class="card-title">{"Horários"}</p>
                    <div class="hours-rows">
                        <div class="hours-row"><span>{"Seg–Sex"}</span><span>{"09:00–18:00"}</span></div>
                        <div class="hours-row"><span>{"Sábado"}</span><span>{"09:00–13:00"}</span></div>
                        <div class="hours-row"><span>{"Domingo"}</span><span>{"plantão sob consulta"}</span></div>
                    </div>
                    <p class="hours-note">
                        {"*Coletas agendadas até 16h (Seg–Sex) e 11h (Sáb) são priorizadas para o mesmo dia, sujeitas à disponibilidade."}
                    </p>
                    <a
                        class="cta-dark"
                        href={deep_link(&config::whatsapp_base(), "Olá! Quero confirmar se meu bairro está na rota de coleta.")}
                        target="_blank"
                        rel="noreferrer"
                    >
                        {"Confirmar cobertura 💬"}
                    </a>
                </div>
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section class="section">
            <div class="section-heading">
                <h2>{"Avaliações de clientes"}</h2>
                <p>{"Nosso compromisso é com o seu tempo e seu aparelho."}</p>
            </div>
            <ul class="reviews-grid">
                { for REVIEWS.iter().map(|(name, text, stars)| html! {
                    <li class="review-card">
                        <span class="review-stars">{ ("★").repeat(*stars) }</span>
                        <p class="review-text">{ format!("“{}”", text) }</p>
                        <p class="review-name">{*name}</p>
                    </li>
                }) }
            </ul>
        </section>
    }
}

#[function_component(FinalCta)]
fn final_cta() -> Html {
    html! {
        <section id="agendar" class="section">
            <div class="final-cta-card">
                <h2>{"Vamos buscar seu celular?"}</h2>
                <p>{"Clique abaixo e envie seus dados. Responderemos rapidinho para confirmar o horário."}</p>
                <div class="final-cta-actions">
                    <a
                        class="cta-dark"
                        href={deep_link(&config::whatsapp_base(), "Olá! Quero agendar uma coleta.")}
                        target="_blank"
                        rel="noreferrer"
                    >
                        {"Agendar pelo WhatsApp 💬"}
                    </a>
                    <a href="#hero" class="cta-ghost">{"Fazer orçamento rápido →"}</a>
                </div>
                <p class="final-cta-note">
                    { format!(
                        "{} — assistência técnica com leva & traz. Transparência, qualidade e agilidade.",
                        config::BUSINESS_NAME
                    ) }
                </p>
            </div>
        </section>
    }
}

#[function_component(PageFooter)]
fn page_footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="footer">
            <div class="footer-grid">
                <div>
                    <p class="footer-brand">{"🔧 "}{config::BUSINESS_NAME}</p>
                    <p class="footer-blurb">
                        { format!("Conserto de celulares com coleta e entrega. {}.", config::CITY) }
                    </p>
                </div>
                <div>
                    <p class="footer-title">{"Contato"}</p>
                    <ul>
                        <li>{ format!("📞 WhatsApp: +{}", config::WHATSAPP_NUMBER) }</li>
                        <li>{"💬 Atendimento: Seg–Sáb"}</li>
                    </ul>
                </div>
                <div>
                    <p class="footer-title">{"Links"}</p>
                    <ul>
                        <li><a href="#servicos">{"Serviços"}</a></li>
                        <li><a href="#como-funciona">{"Como funciona"}</a></li>
                        <li><a href="#faq">{"FAQ"}</a></li>
                    </ul>
                </div>
                <div>
                    <p class="footer-title">{"Legal"}</p>
                    <ul>
                        <li>{ format!("© {} {}", year, config::BUSINESS_NAME) }</li>
                        <li>{"Política de privacidade"}</li>
                    </ul>
                </div>
            </div>
            <p class="footer-credit">{"Desenvolvido com ♥"}</p>
        </footer>
    }
}

#[function_component(FloatingWhatsApp)]
fn floating_whatsapp() -> Html {
    html! {
        <a
            class="floating-whatsapp"
            title="Falar no WhatsApp"
            href={deep_link(&config::whatsapp_base(), "Olá! Preciso de ajuda com meu celular.")}
            target="_blank"
            rel="noreferrer"
        >
            {"💬"}
        </a>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="landing-page">
            <Hero />
            <HowItWorks />
            <Services />
            <Perks />
            <Areas />
            <Testimonials />
            <Faq />
            <FinalCta />
            <PageFooter />
            <FloatingWhatsApp />

            <style>
                {r#"
                .landing-page {
                    padding-top: 64px;
                    background: linear-gradient(180deg, #fff 0%, #f8fafc 50%, #fff 100%);
                    color: #0f172a;
                    scroll-behavior: smooth;
                }

                .landing-page h1,
                .landing-page h2 {
                    letter-spacing: -0.02em;
                }

                .gradient-text {
                    background: linear-gradient(90deg, #f59e0b, #f97316, #f43f5e);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .cta-dark {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: #0f172a;
                    color: #fff;
                    padding: 0.8rem 1.25rem;
                    border-radius: 12px;
                    font-weight: 600;
                    font-size: 0.95rem;
                    text-decoration: none;
                    transition: background 0.2s ease;
                }

                .cta-dark:hover {
                    background: #1e293b;
                }

                .cta-ghost {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: #fff;
                    border: 1px solid #e2e8f0;
                    color: #0f172a;
                    padding: 0.8rem 1.25rem;
                    border-radius: 12px;
                    font-weight: 600;
                    font-size: 0.95rem;
                    text-decoration: none;
                    transition: box-shadow 0.2s ease;
                }

                .cta-ghost:hover {
                    box-shadow: 0 2px 8px rgba(15, 23, 42, 0.08);
                }

                /* hero */

                .hero {
                    padding: 5rem 1.5rem 4rem;
                }

                .hero-grid {
                    max-width: 1120px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                .hero-badge {
                    display: inline-block;
                    border: 1px solid #fde68a;
                    background: #fffbeb;
                    color: #b45309;
                    font-size: 0.75rem;
                    font-weight: 500;
                    border-radius: 999px;
                    padding: 0.25rem 0.75rem;
                    margin-bottom: 1rem;
                }

                .hero h1 {
                    font-size: 2.75rem;
                    font-weight: 800;
                    line-height: 1.1;
                    margin: 0;
                }

                .hero-subtitle {
                    margin-top: 1rem;
                    font-size: 1.1rem;
                    line-height: 1.6;
                    color: #334155;
                }

                .hero-cta-group {
                    margin-top: 1.5rem;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                }

                .hero-fineprint {
                    margin-top: 0.75rem;
                    font-size: 0.75rem;
                    color: #94a3b8;
                }

                .hero-stats {
                    margin: 2rem 0 0;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1rem;
                }

                .stat-card {
                    border: 1px solid #f1f5f9;
                    background: rgba(255, 255, 255, 0.6);
                    border-radius: 12px;
                    padding: 1rem 1.25rem;
                    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
                }

                .stat-card dt {
                    font-size: 0.75rem;
                    color: #94a3b8;
                }

                .stat-card dd {
                    margin: 0.25rem 0 0;
                    font-size: 1.25rem;
                    font-weight: 700;
                }

                .hero-card {
                    max-width: 28rem;
                    margin: 0 auto;
                    width: 100%;
                    background: #fff;
                    border: 1px solid #f1f5f9;
                    border-radius: 16px;
                    padding: 1.5rem;
                    box-shadow: 0 20px 40px rgba(15, 23, 42, 0.12);
                    box-sizing: border-box;
                }

                .hero-card-header {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .hero-card-icon {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 12px;
                    background: linear-gradient(45deg, #f59e0b, #f97316, #f43f5e);
                    font-size: 1.1rem;
                }

                .hero-card-title {
                    margin: 0;
                    font-size: 0.9rem;
                    font-weight: 600;
                }

                .hero-card-caption {
                    margin: 0;
                    font-size: 0.75rem;
                    color: #94a3b8;
                }

                /* shared section bits */

                .section {
                    padding: 5rem 1.5rem;
                }

                .section.tinted {
                    background: #f8fafc;
                }

                .section-heading {
                    max-width: 720px;
                    margin: 0 auto;
                    text-align: center;
                }

                .section-heading h2,
                .areas-grid h2,
                .final-cta-card h2 {
                    font-size: 2rem;
                    font-weight: 800;
                    margin: 0;
                }

                .section-heading p {
                    margin-top: 0.75rem;
                    color: #475569;
                }

                .section-cta {
                    margin-top: 2rem;
                    text-align: center;
                }

                .card-icon {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 12px;
                    font-size: 1.1rem;
                    margin-bottom: 0.75rem;
                }

                .card-icon.dark {
                    background: #0f172a;
                }

                .card-icon.warm {
                    background: linear-gradient(45deg, #f59e0b, #f97316, #f43f5e);
                }

                .card-title {
                    font-weight: 600;
                    margin: 0;
                }

                .card-caption {
                    margin: 0;
                    font-size: 0.75rem;
                    color: #94a3b8;
                }

                .card-text {
                    margin: 0.35rem 0 0;
                    font-size: 0.9rem;
                    color: #475569;
                    line-height: 1.5;
                }

                /* steps */

                .steps-grid {
                    max-width: 1120px;
                    margin: 3rem auto 0;
                    padding: 0;
                    list-style: none;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }

                .step-card {
                    background: #fff;
                    border: 1px solid #f1f5f9;
                    border-radius: 16px;
                    padding: 1.5rem;
                    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
                }

                /* services */

                .services-grid {
                    max-width: 1120px;
                    margin: 3rem auto 0;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }

                .service-card {
                    position: relative;
                    background: #fff;
                    border: 1px solid #f1f5f9;
                    border-radius: 16px;
                    padding: 1.5rem;
                    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
                    transition: box-shadow 0.2s ease;
                }

                .service-card:hover {
                    box-shadow: 0 8px 24px rgba(15, 23, 42, 0.1);
                }

                .service-head {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .service-head .card-icon {
                    margin-bottom: 0;
                }

                .service-meta {
                    margin-top: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .service-eta {
                    font-size: 0.85rem;
                    color: #475569;
                }

                .service-price {
                    font-size: 0.85rem;
                    font-weight: 600;
                }

                .service-badge {
                    position: absolute;
                    top: -0.6rem;
                    right: -0.5rem;
                    background: #0f172a;
                    color: #fff;
                    font-size: 0.6rem;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    border-radius: 999px;
                    padding: 0.3rem 0.75rem;
                    box-shadow: 0 2px 6px rgba(15, 23, 42, 0.25);
                }

                /* perks */

                .perks-grid {
                    max-width: 1120px;
                    margin: 3rem auto 0;
                    padding: 0;
                    list-style: none;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }

                .perk-card {
                    background: #fff;
                    border: 1px solid #f1f5f9;
                    border-radius: 16px;
                    padding: 1.5rem;
                    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
                }

                /* areas */

                .areas-grid {
                    max-width: 1120px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    align-items: start;
                }

                .areas-intro {
                    margin-top: 0.75rem;
                    color: #475569;
                }

                .areas-list {
                    margin: 1.5rem 0 0;
                    padding: 0;
                    list-style: none;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 0.75rem;
                }

                .areas-list li {
                    border: 1px solid #e2e8f0;
                    background: #fff;
                    border-radius: 12px;
                    padding: 0.6rem 0.8rem;
                    font-size: 0.9rem;
                }

                .hours-card {
                    background: #fff;
                    border: 1px solid #f1f5f9;
                    border-radius: 16px;
                    padding: 1.5rem;
                    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
                }

                .hours-rows {
                    margin-top: 0.75rem;
                    display: grid;
                    gap: 0.5rem;
                    font-size: 0.9rem;
                    color: #334155;
                }

                .hours-row {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .hours-note {
                    margin: 1rem 0;
                    padding-top: 1rem;
                    border-top: 1px solid #f1f5f9;
                    font-size: 0.85rem;
                    color: #475569;
                }

                /* reviews */

                .reviews-grid {
                    max-width: 1120px;
                    margin: 3rem auto 0;
                    padding: 0;
                    list-style: none;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }

                .review-card {
                    background: #fff;
                    border: 1px solid #f1f5f9;
                    border-radius: 16px;
                    padding: 1.5rem;
                    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
                }

                .review-stars {
                    color: #f59e0b;
                    letter-spacing: 0.15em;
                }

                .review-text {
                    margin: 0.75rem 0 0;
                    font-size: 0.9rem;
                    color: #334155;
                    line-height: 1.6;
                }

                .review-name {
                    margin: 1rem 0 0;
                    font-size: 0.9rem;
                    font-weight: 600;
                }

                /* final cta */

                .final-cta-card {
                    max-width: 720px;
                    margin: 0 auto;
                    background: #fff;
                    border: 1px solid #f1f5f9;
                    border-radius: 16px;
                    padding: 2.5rem 2rem;
                    text-align: center;
                    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
                }

                .final-cta-card p {
                    margin-top: 0.75rem;
                    color: #475569;
                }

                .final-cta-actions {
                    margin-top: 1.5rem;
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                }

                .final-cta-note {
                    font-size: 0.75rem;
                    color: #94a3b8 !important;
                }

                /* footer */

                .footer {
                    border-top: 1px solid #f1f5f9;
                    background: #fff;
                    padding: 2.5rem 1.5rem;
                }

                .footer-grid {
                    max-width: 1120px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }

                .footer-brand {
                    margin: 0;
                    font-weight: 700;
                }

                .footer-blurb {
                    margin-top: 0.75rem;
                    font-size: 0.9rem;
                    color: #475569;
                }

                .footer-title {
                    margin: 0 0 0.5rem;
                    font-size: 0.9rem;
                    font-weight: 600;
                }

                .footer ul {
                    margin: 0;
                    padding: 0;
                    list-style: none;
                    display: grid;
                    gap: 0.5rem;
                    font-size: 0.9rem;
                    color: #334155;
                }

                .footer a {
                    color: #334155;
                    text-decoration: none;
                }

                .footer a:hover {
                    color: #0f172a;
                }

                .footer-credit {
                    margin: 2rem 0 0;
                    text-align: center;
                    font-size: 0.75rem;
                    color: #94a3b8;
                }

                /* floating button */

                .floating-whatsapp {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    z-index: 40;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    background: #22c55e;
                    font-size: 1.3rem;
                    text-decoration: none;
                    box-shadow: 0 8px 20px rgba(34, 197, 94, 0.4);
                    transition: box-shadow 0.2s ease;
                }

                .floating-whatsapp:hover {
                    box-shadow: 0 12px 28px rgba(34, 197, 94, 0.55);
                }

                @media (max-width: 1024px) {
                    .steps-grid,
                    .services-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .perks-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 768px) {
                    .hero {
                        padding: 3rem 1rem 2.5rem;
                    }

                    .hero-grid,
                    .areas-grid {
                        grid-template-columns: 1fr;
                    }

                    .hero h1 {
                        font-size: 2rem;
                    }

                    .section {
                        padding: 3.5rem 1rem;
                    }

                    .section-heading h2,
                    .areas-grid h2,
                    .final-cta-card h2 {
                        font-size: 1.6rem;
                    }

                    .steps-grid,
                    .services-grid,
                    .perks-grid,
                    .reviews-grid {
                        grid-template-columns: 1fr;
                    }

                    .footer-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
