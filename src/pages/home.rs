use chrono::Datelike;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew::{Children, Properties};
use yew_router::prelude::*;

use crate::components::quiz::Quiz;
use crate::config;
use crate::pages::content::{FAQS, PROCESS_STEPS, REVIEWS, TRUST_BADGES};
use crate::Route;

/// Wrapping carousel index.
pub fn carousel_index(current: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    (current as isize + delta).rem_euclid(len as isize) as usize
}

fn scroll_to_hero() {
    let Some(window) = web_sys::window() else {
        return;
    };
    match window.document().and_then(|d| d.get_element_by_id("hero")) {
        Some(hero) => hero.scroll_into_view(),
        None => window.scroll_to_with_x_and_y(0.0, 0.0),
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section id="hero" class="hero">
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <img class="hero-logo" src="/assets/14er-logo.png" alt="14er Renovations" />
                <div class="hero-columns">
                    <div class="hero-copy">
                        <span class="hero-breaking">{"🚨 BREAKING"}</span>
                        <h1>
                            {"New Winter Program Gives Colorado Homeowners "}
                            <span class="highlight">{"$2,000 OFF"}</span>
                            {" Any Concrete Project, Only 7 Spots Left"}
                        </h1>
                        <p>
                            {"Trusted by Colorado homeowners for driveways, patios, walkways and more. Book your FREE on-site estimate and claim the "}
                            <span class="highlight">{"$2,000 OFF"}</span>
                            {" offer today."}
                        </p>
                        <p class="hero-urgency">{"⏳ Only 7 spots remaining this month"}</p>
                    </div>
                    <div class="hero-quiz">
                        <Quiz variant={config::active_variant()} />
                        <div class="hero-trust">
                            <span>{"✔ Licensed & Insured"}</span>
                            <span>{"🛡 1-Year Warranty"}</span>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(TrustBadges)]
fn trust_badges() -> Html {
    // drawn twice so the marquee loops without a gap
    let logos = TRUST_BADGES.iter().chain(TRUST_BADGES.iter());
    html! {
        <section class="trust-badges">
            <p class="section-kicker">{"Trusted & Certified"}</p>
            <div class="trust-marquee">
                { for logos.map(|badge| html! {
                    <div class="trust-logo">
                        <img src={badge.src} alt={badge.alt} loading="lazy" />
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Process)]
fn process() -> Html {
    html! {
        <section class="process">
            <span class="section-kicker">{"Simple Process"}</span>
            <h2>{"How It Works"}</h2>
            <div class="process-grid">
                { for PROCESS_STEPS.iter().enumerate().map(|(i, step)| html! {
                    <div class="process-step">
                        <div class="process-icon">
                            {step.icon}
                            <span class="process-number">{i + 1}</span>
                        </div>
                        <h3>{step.title}</h3>
                        <p>{step.description}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Reviews)]
fn reviews() -> Html {
    let current = use_state(|| 0usize);

    let shift = |delta: isize| {
        let current = current.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            current.set(carousel_index(*current, REVIEWS.len(), delta));
        })
    };

    let review = &REVIEWS[carousel_index(*current, REVIEWS.len(), 0)];
    let stars = "★".repeat(review.rating as usize);

    html! {
        <section class="reviews">
            <h2>{"What Colorado Homeowners Say"}</h2>
            <div class="review-card">
                <div class="review-stars">{stars}</div>
                <p class="review-text">{format!("\u{201c}{}\u{201d}", review.text)}</p>
                <p class="review-author">
                    <strong>{review.name}</strong>
                    {" · "}
                    {review.location}
                </p>
            </div>
            <div class="review-nav">
                <button onclick={shift(-1)} aria-label="Previous review">{"‹"}</button>
                <span>{format!("{} / {}", *current + 1, REVIEWS.len())}</span>
                <button onclick={shift(1)} aria-label="Next review">{"›"}</button>
            </div>
            <Link<Route> to={Route::Qualify} classes="cta-button">
                {"See If You Qualify →"}
            </Link<Route>>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
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

#[function_component(FaqSection)]
fn faq_section() -> Html {
    html! {
        <section class="faq-section">
            <h2>{"Frequently Asked Questions"}</h2>
            { for FAQS.iter().map(|faq| html! {
                <FaqItem question={faq.question}>
                    <p>{faq.answer}</p>
                </FaqItem>
            }) }
        </section>
    }
}

#[function_component(FinalCta)]
fn final_cta() -> Html {
    html! {
        <section class="final-cta">
            <span class="final-cta-badge">{"🎁 Limited Winter Spots Available"}</span>
            <h2>
                {"Don't Wait, Reserve Your "}
                <span class="highlight">{"$2,000 Discount"}</span>
                {" Today"}
            </h2>
            <p>{"Join 200+ satisfied homeowners. Get your free estimate and $2,000 discount before spots fill up."}</p>
            <Link<Route> to={Route::Qualify} classes="cta-button">
                {"Claim My Free Estimate →"}
            </Link<Route>>
            <p class="final-cta-fineprint">{"No obligations • Free on-site estimate • One-year warranty included"}</p>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="site-footer">
            <img src="/assets/14er-logo.png" alt="14er Renovations" />
            <p>{format!("© {} 14er Renovation. All rights reserved. Serving Colorado homeowners.", year)}</p>
        </footer>
    }
}

#[function_component(FloatingCta)]
fn floating_cta() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let visible = visible.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                let scroll_y = win.scroll_y().unwrap_or(0.0);
                                let hero_height = win
                                    .inner_height()
                                    .ok()
                                    .and_then(|h| h.as_f64())
                                    .unwrap_or(800.0);
                                visible.set(scroll_y > hero_height);
                            }
                        }
                    });
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            (),
        );
    }

    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_hero();
    });

    html! {
        if *visible {
            <div class="floating-cta">
                <button {onclick}>{"Claim $2,000 Discount"}</button>
            </div>
        }
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <main class="landing">
            <Hero />
            <TrustBadges />
            <Process />
            <Reviews />
            <FaqSection />
            <FinalCta />
            <Footer />
            <FloatingCta />
            <style>{HOME_CSS}</style>
        </main>
    }
}

const HOME_CSS: &str = r#"
.landing {
    min-height: 100vh;
    background: #f8fafc;
    color: #0f172a;
    overflow-x: hidden;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}
.highlight {
    color: #fb923c;
}
.hero {
    position: relative;
    background-image: url('/assets/hero-colorado-home.png');
    background-size: cover;
    background-position: center;
}
.hero-overlay {
    position: absolute;
    inset: 0;
    background: linear-gradient(to bottom, rgba(15, 23, 42, 0.75), rgba(15, 23, 42, 0.55));
}
.hero-content {
    position: relative;
    z-index: 1;
    max-width: 1200px;
    margin: 0 auto;
    padding: 1.5rem 1rem 3rem;
}
.hero-logo {
    display: block;
    height: 6rem;
    margin: 0 auto 1rem;
}
.hero-columns {
    display: flex;
    gap: 2rem;
    align-items: flex-start;
    justify-content: space-between;
}
.hero-copy {
    flex: 1;
    color: #fff;
    text-shadow: 0 2px 8px rgba(0, 0, 0, 0.5);
}
.hero-copy h1 {
    font-size: 1.9rem;
    line-height: 1.25;
    margin: 1rem 0;
}
.hero-breaking {
    display: inline-block;
    background: #dc2626;
    color: #fff;
    font-size: 0.8rem;
    font-weight: 700;
    padding: 0.25rem 0.5rem;
    border-radius: 4px;
}
.hero-urgency {
    font-size: 0.9rem;
    opacity: 0.85;
}
.hero-quiz {
    flex: 1;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 1rem;
}
.hero-trust {
    display: flex;
    gap: 1.5rem;
    color: rgba(255, 255, 255, 0.85);
    font-size: 0.85rem;
}
.section-kicker {
    display: block;
    text-align: center;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    font-size: 0.75rem;
    color: #64748b;
    margin-bottom: 1rem;
}
.trust-badges {
    padding: 1.5rem 0;
    background: rgba(249, 250, 251, 0.8);
    border-top: 1px solid #f1f5f9;
    border-bottom: 1px solid #f1f5f9;
    overflow: hidden;
}
.trust-marquee {
    display: flex;
    width: max-content;
    animation: marquee 30s linear infinite;
}
.trust-logo {
    padding: 0 3rem;
    min-width: 180px;
    display: flex;
    align-items: center;
    justify-content: center;
}
.trust-logo img {
    height: 3.5rem;
    opacity: 0.8;
}
@keyframes marquee { to { transform: translateX(-50%); } }
.process {
    padding: 5rem 1rem;
    background: linear-gradient(135deg, #1e293b, #0f172a);
    color: #fff;
    text-align: center;
}
.process .section-kicker {
    color: #fb923c;
}
.process-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
    gap: 1.5rem;
    max-width: 1100px;
    margin: 2rem auto 0;
}
.process-icon {
    position: relative;
    width: 4rem;
    height: 4rem;
    margin: 0 auto 1.25rem;
    border-radius: 12px;
    background: rgba(255, 255, 255, 0.1);
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.8rem;
}
.process-number {
    position: absolute;
    top: -0.5rem;
    right: -0.5rem;
    width: 1.75rem;
    height: 1.75rem;
    border-radius: 50%;
    background: #ea580c;
    font-size: 0.85rem;
    font-weight: 700;
    display: flex;
    align-items: center;
    justify-content: center;
}
.process-step p {
    color: rgba(255, 255, 255, 0.7);
    font-size: 0.9rem;
}
.reviews {
    padding: 5rem 1rem;
    text-align: center;
}
.review-card {
    max-width: 640px;
    margin: 2rem auto 1rem;
    background: #fff;
    border-radius: 16px;
    padding: 2rem;
    box-shadow: 0 10px 30px rgba(15, 23, 42, 0.08);
}
.review-stars {
    color: #f59e0b;
    font-size: 1.2rem;
}
.review-text {
    font-size: 1.05rem;
    line-height: 1.6;
}
.review-nav {
    display: flex;
    justify-content: center;
    align-items: center;
    gap: 1rem;
    margin-bottom: 2rem;
}
.review-nav button {
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 50%;
    border: 1px solid #cbd5e1;
    background: #fff;
    font-size: 1.3rem;
    cursor: pointer;
}
.cta-button {
    display: inline-block;
    background: #16a34a;
    color: #fff;
    padding: 1rem 2rem;
    border-radius: 8px;
    font-weight: 600;
    text-decoration: none;
}
.faq-section {
    max-width: 760px;
    margin: 0 auto;
    padding: 4rem 1rem;
}
.faq-section h2 {
    text-align: center;
    margin-bottom: 2rem;
}
.faq-item {
    border-bottom: 1px solid rgba(15, 23, 42, 0.1);
}
.faq-question {
    width: 100%;
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1rem 0;
    background: none;
    border: none;
    text-align: left;
    font-size: 1rem;
    font-weight: 500;
    cursor: pointer;
}
.faq-answer {
    display: none;
    color: #475569;
    font-size: 0.9rem;
    padding-bottom: 1rem;
}
.faq-item.open .faq-answer {
    display: block;
}
.final-cta {
    padding: 5rem 1rem;
    text-align: center;
    background: linear-gradient(135deg, #0f172a, #1e293b);
    color: #fff;
}
.final-cta-badge {
    display: inline-block;
    background: rgba(234, 88, 12, 0.2);
    color: #fb923c;
    padding: 0.5rem 1rem;
    border-radius: 999px;
    font-size: 0.85rem;
    font-weight: 600;
}
.final-cta-fineprint {
    opacity: 0.6;
    font-size: 0.85rem;
    margin-top: 1.5rem;
}
.site-footer {
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 1rem;
    padding: 2rem 1rem;
    background: #0f172a;
    color: rgba(255, 255, 255, 0.6);
    font-size: 0.85rem;
}
.site-footer img {
    height: 3rem;
}
.floating-cta {
    position: fixed;
    bottom: 1.25rem;
    right: 1.5rem;
    z-index: 50;
}
.floating-cta button {
    background: #16a34a;
    color: #fff;
    border: none;
    border-radius: 8px;
    padding: 1rem 1.5rem;
    font-weight: 600;
    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.25);
    cursor: pointer;
}
@media (max-width: 900px) {
    .hero-columns, .site-footer {
        flex-direction: column;
    }
    .hero-copy h1 {
        font-size: 1.4rem;
    }
    .floating-cta {
        left: 1rem;
        right: 1rem;
    }
    .floating-cta button {
        width: 100%;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::carousel_index;

    #[test]
    fn carousel_wraps_both_ways() {
        assert_eq!(carousel_index(0, 5, -1), 4);
        assert_eq!(carousel_index(4, 5, 1), 0);
        assert_eq!(carousel_index(2, 5, 1), 3);
        assert_eq!(carousel_index(3, 0, 1), 0);
    }
}
