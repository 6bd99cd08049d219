use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod quote;
mod components {
    pub mod faq;
    pub mod quote_form;
}
mod pages {
    pub mod home;
}

use pages::home::Home;
use quote::deep_link;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Home /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 40);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchor jumps must go through, so no prevent_default here.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#hero" class="nav-logo">
                    <span class="nav-logo-icon">{"🔧"}</span>
                    {config::BUSINESS_NAME}
                </a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="#como-funciona" class="nav-link" onclick={close_menu.clone()}>{"Como funciona"}</a>
                    <a href="#servicos" class="nav-link" onclick={close_menu.clone()}>{"Serviços"}</a>
                    <a href="#diferenciais" class="nav-link" onclick={close_menu.clone()}>{"Diferenciais"}</a>
                    <a href="#areas" class="nav-link" onclick={close_menu.clone()}>{"Áreas"}</a>
                    <a href="#faq" class="nav-link" onclick={close_menu.clone()}>{"FAQ"}</a>
                    <a
                        class="nav-whatsapp"
                        href={deep_link(&config::whatsapp_base(), "Olá! Quero agendar uma coleta para meu celular.")}
                        target="_blank"
                        rel="noreferrer"
                        onclick={close_menu.clone()}
                    >
                        {"💬 WhatsApp"}
                    </a>
                    <a href="#agendar" class="nav-cta" onclick={close_menu}>{"Solicitar coleta"}</a>
                </div>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.7);
                    backdrop-filter: blur(8px);
                    border-bottom: 1px solid #f1f5f9;
                    transition: box-shadow 0.2s ease;
                }

                .top-nav.scrolled {
                    box-shadow: 0 2px 12px rgba(15, 23, 42, 0.08);
                }

                .nav-content {
                    max-width: 1120px;
                    margin: 0 auto;
                    height: 64px;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-weight: 700;
                    font-size: 1.1rem;
                    letter-spacing: -0.02em;
                    color: #0f172a;
                    text-decoration: none;
                }

                .nav-logo-icon {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.25rem;
                    height: 2.25rem;
                    border-radius: 12px;
                    background: linear-gradient(45deg, #f59e0b, #f97316, #f43f5e);
                    font-size: 1rem;
                }

                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.25rem;
                }

                .nav-link {
                    font-size: 0.9rem;
                    color: #334155;
                    text-decoration: none;
                }

                .nav-link:hover {
                    color: #0f172a;
                }

                .nav-whatsapp {
                    font-size: 0.9rem;
                    font-weight: 500;
                    color: #0f172a;
                    text-decoration: none;
                    border: 1px solid #e2e8f0;
                    background: #fff;
                    border-radius: 12px;
                    padding: 0.45rem 0.8rem;
                    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
                    transition: box-shadow 0.2s ease;
                }

                .nav-whatsapp:hover {
                    box-shadow: 0 4px 12px rgba(15, 23, 42, 0.1);
                }

                .nav-cta {
                    font-size: 0.9rem;
                    font-weight: 600;
                    color: #fff;
                    text-decoration: none;
                    background: linear-gradient(90deg, #f59e0b, #f97316, #f43f5e);
                    border-radius: 12px;
                    padding: 0.5rem 1rem;
                    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.1);
                    transition: box-shadow 0.2s ease;
                }

                .nav-cta:hover {
                    box-shadow: 0 4px 12px rgba(15, 23, 42, 0.2);
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }

                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    border-radius: 2px;
                    background: #0f172a;
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-right {
                        display: none;
                    }

                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        align-items: stretch;
                        position: absolute;
                        top: 64px;
                        left: 0;
                        right: 0;
                        background: #fff;
                        border-bottom: 1px solid #f1f5f9;
                        padding: 1rem 1.5rem 1.25rem;
                        gap: 0.9rem;
                        box-shadow: 0 8px 20px rgba(15, 23, 42, 0.08);
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Better panic messages in the browser console
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
