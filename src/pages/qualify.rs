use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::quiz::Quiz;
use crate::config;
use crate::Route;

#[function_component(QualifyPage)]
pub fn qualify_page() -> Html {
    html! {
        <div class="qualify-page">
            <header class="qualify-header">
                <Link<Route> to={Route::Home} classes="qualify-back">
                    {"← Back to Home"}
                </Link<Route>>
                <Link<Route> to={Route::Home}>
                    <img src="/assets/14er-logo.png" alt="14er Renovations" class="qualify-logo" />
                </Link<Route>>
            </header>

            <main class="qualify-main">
                <div class="qualify-intro">
                    <span class="qualify-pill">{"Qualification Form"}</span>
                    <h1>{"See if you qualify for $2,000 off"}</h1>
                    <p>{"Answer a few quick questions to check your eligibility"}</p>
                </div>
                <Quiz variant={config::active_variant()} />
            </main>

            <footer class="qualify-footer">
                {"🛡 Your information is secure and will only be used to contact you about your project"}
            </footer>

            <style>
                {r#"
                .qualify-page {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    background: linear-gradient(to bottom, #f8fafc, #ffffff);
                    color: #0f172a;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .qualify-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1rem;
                    border-bottom: 1px solid rgba(15, 23, 42, 0.08);
                    background: rgba(255, 255, 255, 0.8);
                }
                .qualify-back {
                    color: #64748b;
                    font-size: 0.9rem;
                    text-decoration: none;
                }
                .qualify-logo {
                    height: 3rem;
                }
                .qualify-main {
                    flex: 1;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    padding: 2rem 1rem 3rem;
                }
                .qualify-intro {
                    text-align: center;
                    margin-bottom: 1.5rem;
                }
                .qualify-intro h1 {
                    font-size: 1.5rem;
                    margin: 0.75rem 0 0.5rem;
                }
                .qualify-intro p {
                    color: #64748b;
                    font-size: 0.9rem;
                }
                .qualify-pill {
                    display: inline-block;
                    background: rgba(234, 88, 12, 0.1);
                    color: #ea580c;
                    font-size: 0.75rem;
                    font-weight: 600;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                }
                .qualify-footer {
                    text-align: center;
                    font-size: 0.75rem;
                    color: #64748b;
                    padding: 1rem;
                    border-top: 1px solid rgba(15, 23, 42, 0.08);
                }
                "#}
            </style>
        </div>
    }
}
