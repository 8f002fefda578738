use yew::prelude::*;

use crate::components::scroll_reveal::ScrollReveal;
use crate::content::{
    self, CompetitionCategory, FestivalContent, Performer, VideoEmbed,
};
use crate::reveal::{FADE_IN_LEFT, FADE_IN_RIGHT, FADE_IN_UP};

#[derive(Properties, PartialEq)]
pub struct FestivalPageProps {
    /// Content document rendered by the page. Defaults to the 2025 program.
    #[prop_or_else(content::festival_2025)]
    pub content: FestivalContent,
}

fn render_performer(performer: &Performer) -> Html {
    html! {
        <div class="performer">
            <img src={performer.image} alt={performer.name} />
            <p class="performer-name">{performer.name}</p>
            { for performer.lines.iter().map(|line| html! { <p class="performer-line">{*line}</p> }) }
        </div>
    }
}

fn render_category(category: &CompetitionCategory) -> Html {
    html! {
        <div class="competition-category">
            <h4>{category.name}</h4>
            <p>{category.description}</p>
            {
                if category.phases.is_empty() {
                    html! {}
                } else {
                    html! {
                        <ul>
                            { for category.phases.iter().map(|phase| html! {
                                <li>
                                    <span class="phase-name">{phase.name}</span>
                                    {" "}
                                    {phase.description}
                                </li>
                            }) }
                        </ul>
                    }
                }
            }
        </div>
    }
}

fn render_video(video: &VideoEmbed) -> Html {
    let wrapper_style = match video.max_width {
        Some(width) => format!("padding-top: {}; max-width: {};", video.aspect_padding, width),
        None => format!("padding-top: {};", video.aspect_padding),
    };
    html! {
        <div class="video-frame" style={wrapper_style}>
            <iframe
                src={video.embed_url()}
                title={video.title}
                frameborder="0"
                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                referrerpolicy="strict-origin-when-cross-origin"
                allowfullscreen=true
            />
        </div>
    }
}

#[function_component(FestivalPage)]
pub fn festival_page(props: &FestivalPageProps) -> Html {
    let content = &props.content;

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let background = format!("background-image: url('{}');", content.background_image);

    html! {
        <div class="festival-page" data-navbar-title={content.navbar_title}>
            <div class="festival-bg left" style={background.clone()}></div>
            <div class="festival-bg right" style={background}></div>

            <div class="festival-sections">
                <ScrollReveal animation={FADE_IN_UP}>
                    <section id="festival-2025" class="festival-section coral">
                        <img class="section-poster" src={content.hero.image} alt={content.hero.image_alt} />
                        <h1>{content.hero.title}</h1>
                        { for content.hero.lines.iter().map(|line| html! { <p class="hero-line">{*line}</p> }) }
                    </section>
                </ScrollReveal>

                <ScrollReveal animation={FADE_IN_LEFT}>
                    <section id="simposio" class="festival-section light">
                        <img class="section-logo" src={content.symposium.logo} alt="Festival Logo" />
                        <h2>{content.symposium.title}</h2>
                        <img class="section-poster" src={content.symposium.image} alt="Simposio Internacional" />
                        <div class="section-body">
                            { for content.symposium.paragraphs.iter().map(|p| html! { <p>{*p}</p> }) }
                        </div>
                    </section>
                </ScrollReveal>

                <ScrollReveal animation={FADE_IN_RIGHT}>
                    <section id="concurso-nacional" class="festival-section light">
                        <h2>{content.competition.title}</h2>
                        <p class="section-subtitle">{content.competition.subtitle}</p>
                        <img class="section-poster" src={content.competition.image} alt="Concurso Nacional" />
                        <div class="section-body">
                            <h3>{content.competition.date_heading}</h3>
                            <h4>{content.competition.rules_heading}</h4>
                            <p>{content.competition.rules_intro}</p>
                            { for content.competition.categories.iter().map(render_category) }

                            <h4>{content.competition.inscription.heading}</h4>
                            <p>
                                {content.competition.inscription.details}
                                {" "}
                                <a href={format!("mailto:{}", content.competition.inscription.email)}>
                                    {content.competition.inscription.email}
                                </a>
                            </p>
                            <p class="section-note">{content.competition.inscription.note}</p>

                            <h4>{content.competition.important_heading}</h4>
                            <ul>
                                { for content.competition.important_items.iter().map(|item| html! { <li>{*item}</li> }) }
                            </ul>

                            <h4>{content.competition.schedule_heading}</h4>
                            <p>{content.competition.schedule_intro}</p>
                            <ul>
                                { for content.competition.schedule_items.iter().map(|item| html! { <li>{*item}</li> }) }
                            </ul>
                            <p class="section-note">{content.competition.schedule_note}</p>
                        </div>
                    </section>
                </ScrollReveal>

                <ScrollReveal animation={FADE_IN_LEFT}>
                    <section id="conciertos" class="festival-section light">
                        <h2>{content.concerts.title}</h2>
                        <div class="concert-block">
                            <h3>{content.concerts.opening_title}</h3>
                            { render_performer(&content.concerts.opening) }
                        </div>
                        <div class="concert-block">
                            <h3>{content.concerts.cafe_title}</h3>
                            <p class="section-subtitle">{content.concerts.cafe_subtitle}</p>
                            <div class="performer-grid">
                                { for content.concerts.cafe_performers.iter().map(render_performer) }
                            </div>
                        </div>
                    </section>
                </ScrollReveal>

                <ScrollReveal animation={FADE_IN_UP}>
                    <section id="festival-2024" class="festival-section coral">
                        <h2>{content.archive.title}</h2>
                        <img class="section-poster" src={content.archive.image} alt={content.archive.title} />
                        { for content.archive.lines.iter().map(|line| html! { <p class="hero-line">{*line}</p> }) }
                        <div class="video-list">
                            { for content.archive.videos.iter().map(render_video) }
                        </div>
                    </section>
                </ScrollReveal>
            </div>

            <style>
                {r#"
                .festival-page {
                    min-height: 100vh;
                    padding-top: 74px;
                    background: rgb(227, 163, 83);
                    color: #000;
                    position: relative;
                }

                .festival-bg {
                    position: fixed;
                    top: 0;
                    width: 25%;
                    height: 100vh;
                    opacity: 0.1;
                    background-size: contain;
                    background-repeat: no-repeat;
                    pointer-events: none;
                }

                .festival-bg.left {
                    left: 0;
                    background-position: left;
                }

                .festival-bg.right {
                    right: 0;
                    background-position: right;
                }

                .festival-sections {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 4rem 1rem;
                    display: flex;
                    flex-direction: column;
                    gap: 8rem;
                    position: relative;
                    z-index: 1;
                }

                .festival-section {
                    max-width: 48rem;
                    margin: 0 auto;
                    padding: 1.5rem 2rem;
                    border-radius: 2rem 0.5rem;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    backdrop-filter: blur(24px);
                    overflow: hidden;
                    transition: transform 0.5s ease-in-out, box-shadow 0.5s ease-in-out;
                }

                .festival-section:hover {
                    transform: scale(1.02);
                }

                .festival-section.coral {
                    background: linear-gradient(to bottom, rgba(255, 127, 80, 0.9), rgba(255, 127, 80, 0.9));
                    color: #fff;
                    text-align: center;
                }

                .festival-section.light {
                    background: linear-gradient(to bottom, rgba(255, 255, 255, 0.9), rgba(255, 255, 255, 0.9));
                    color: #333;
                }

                .festival-section h1 {
                    font-size: 2.25rem;
                    font-weight: bold;
                    margin-bottom: 1rem;
                    border-bottom: 2px solid rgba(255, 255, 255, 0.2);
                    padding-bottom: 0.5rem;
                }

                .festival-section h2 {
                    font-size: 2rem;
                    font-weight: bold;
                    margin-bottom: 2rem;
                    text-align: center;
                    color: #ff7f50;
                    border-bottom: 2px solid rgba(255, 127, 80, 0.2);
                    padding-bottom: 0.5rem;
                }

                .festival-section.coral h2 {
                    color: #fff;
                    border-bottom-color: rgba(255, 255, 255, 0.2);
                }

                .festival-section h3 {
                    font-size: 1.75rem;
                    font-weight: 600;
                    margin-bottom: 1rem;
                    text-align: center;
                    color: #ff7f50;
                }

                .festival-section.coral h3 {
                    color: #fff;
                }

                .festival-section h4 {
                    font-size: 1.4rem;
                    font-weight: 600;
                    margin: 1.5rem 0 1rem;
                    text-align: center;
                }

                .section-poster {
                    display: block;
                    width: 75%;
                    max-width: 36rem;
                    margin: 0 auto 1.5rem;
                    border-radius: 0.5rem;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }

                .section-logo {
                    display: block;
                    width: 10rem;
                    height: 10rem;
                    object-fit: contain;
                    margin: -4rem auto 0.5rem;
                }

                .section-body {
                    text-align: left;
                }

                .section-body p,
                .section-body li {
                    font-size: 1.1rem;
                    line-height: 1.8;
                    margin-bottom: 1.5rem;
                }

                .section-body ul {
                    padding-left: 1.5rem;
                }

                .section-subtitle {
                    text-align: center;
                    font-size: 1.2rem;
                    margin-bottom: 1.5rem;
                }

                .section-note {
                    font-style: italic;
                }

                .phase-name {
                    font-weight: 600;
                }

                .hero-line {
                    font-size: 1.4rem;
                    margin: 0.5rem 0;
                    text-shadow: 1px 1px 1px rgba(0, 0, 0, 0.3);
                }

                .concert-block {
                    margin-bottom: 3rem;
                }

                .performer {
                    text-align: center;
                }

                .performer img {
                    max-width: 16rem;
                    width: 100%;
                    margin: 0 auto 1rem;
                    border-radius: 0.5rem;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }

                .performer-name {
                    font-weight: bold;
                }

                .performer-line {
                    font-size: 1.1rem;
                    color: #555;
                }

                .performer-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                }

                .video-list {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                    margin-top: 2rem;
                }

                .video-frame {
                    position: relative;
                    width: 100%;
                    margin: 0 auto;
                }

                .video-frame iframe {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100%;
                    border-radius: 0.5rem;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }

                a {
                    color: #ff7f50;
                }

                @media (max-width: 768px) {
                    .performer-grid {
                        grid-template-columns: 1fr;
                    }

                    .festival-bg {
                        display: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;
    use web_sys::js_sys;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn next_tick() {
        let promise = js_sys::Promise::resolve(&JsValue::NULL);
        let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
    }

    #[wasm_bindgen_test]
    async fn renders_video_frames_with_fullscreen_enabled() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let props = FestivalPageProps {
            content: content::festival_2025(),
        };
        let handle =
            yew::Renderer::<FestivalPage>::with_root_and_props(root.clone(), props).render();
        next_tick().await;

        let markup = root.inner_html();
        assert!(markup.contains("youtube.com/embed/4ys2KLiY574"));
        assert!(markup.contains("youtube.com/embed/mODYpFhwHEA"));
        assert!(markup.contains("allowfullscreen"));

        handle.destroy();
    }
}
