use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod content;
mod reveal;
mod components {
    pub mod scroll_reveal;
}
mod pages {
    pub mod festival;
}

use pages::festival::FestivalPage;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering festival page");
            html! { <FestivalPage /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub title: AttrValue,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
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

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {props.title.clone()}
                </Link<Route>>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 74px;
                    display: flex;
                    align-items: center;
                    z-index: 10;
                    background: transparent;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }

                .top-nav.scrolled {
                    background: rgba(227, 163, 83, 0.95);
                    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.15);
                }

                .nav-content {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    width: 100%;
                }

                .nav-logo {
                    font-size: 1.2rem;
                    font-weight: bold;
                    color: #000;
                    text-decoration: none;
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let title = content::festival_2025().navbar_title;

    html! {
        <BrowserRouter>
            <Nav title={title} />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
