use gloo_timers::callback::{Interval, Timeout};
use log::{debug, info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::quiz::answers::Field;
use crate::quiz::delivery::LeadPorts;
use crate::quiz::variant::{ChoiceOption, EmailRule, QuizVariant};
use crate::quiz::wizard::{DisqualifyReason, Effect, Step, SubmitError, Wizard};

#[derive(Properties, PartialEq)]
pub struct QuizProps {
    pub variant: QuizVariant,
}

pub enum QuizMsg {
    SelectProjectType(&'static str),
    SelectTimeline(&'static str),
    SelectBudget(&'static str),
    Advance(u64),
    SetZip(String),
    ContinueFromLocation,
    RotateChecking(u64),
    FinishChecking(u64),
    AcceptFallback,
    DeclineFallback,
    Back,
    SetFirstName(String),
    SetPhone(String),
    SetEmail(String),
    Submit,
    StartOver,
}

pub struct Quiz {
    wizard: Wizard,
    ports: LeadPorts,
    // Dropping a handle cancels it, so these die with the component.
    advance_timer: Option<Timeout>,
    checking_timer: Option<Timeout>,
    rotate_timer: Option<Interval>,
}

impl Component for Quiz {
    type Message = QuizMsg;
    type Properties = QuizProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            wizard: Wizard::new(ctx.props().variant.clone()),
            ports: LeadPorts::browser(config::get_webhook_url()),
            advance_timer: None,
            checking_timer: None,
            rotate_timer: None,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().variant == old_props.variant {
            return false;
        }
        self.cancel_timers();
        self.wizard = Wizard::new(ctx.props().variant.clone());
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            QuizMsg::SelectProjectType(code) => {
                let effect = self.wizard.select_project_type(code);
                self.apply(ctx, effect)
            }
            QuizMsg::SelectTimeline(code) => {
                let effect = self.wizard.select_timeline(code);
                self.apply(ctx, effect)
            }
            QuizMsg::SelectBudget(code) => {
                let effect = self.wizard.select_budget(code);
                self.apply(ctx, effect)
            }
            QuizMsg::Advance(epoch) => {
                self.advance_timer = None;
                self.wizard.advance(epoch)
            }
            QuizMsg::SetZip(value) => self.wizard.set_zip(&value),
            QuizMsg::ContinueFromLocation => {
                let effect = self.wizard.continue_from_location();
                self.apply(ctx, effect)
            }
            QuizMsg::RotateChecking(epoch) => self.wizard.rotate_checking_message(epoch),
            QuizMsg::FinishChecking(epoch) => {
                self.checking_timer = None;
                self.rotate_timer = None;
                self.wizard.finish_checking(epoch)
            }
            QuizMsg::AcceptFallback => match self.wizard.accept_fallback_timeline() {
                Ok(()) => true,
                Err(e) => {
                    warn!("Ignoring timeline fallback: {}", e);
                    false
                }
            },
            QuizMsg::DeclineFallback => match self.wizard.decline_fallback_timeline() {
                Ok(()) => true,
                Err(e) => {
                    warn!("Ignoring timeline decline: {}", e);
                    false
                }
            },
            QuizMsg::Back => {
                self.cancel_timers();
                self.wizard.back()
            }
            QuizMsg::SetFirstName(value) => self.wizard.set_first_name(&value),
            QuizMsg::SetPhone(value) => self.wizard.set_phone(&value),
            QuizMsg::SetEmail(value) => self.wizard.set_email(&value),
            QuizMsg::Submit => match self.wizard.submit(&self.ports) {
                Ok(delivery) => {
                    // not tied to this component, keeps going after navigation
                    spawn_local(delivery);
                    true
                }
                Err(SubmitError::Invalid(errors)) => {
                    info!("Quiz contact step has {} invalid fields", errors.len());
                    true
                }
                Err(e) => {
                    warn!("Ignoring submit: {}", e);
                    false
                }
            },
            QuizMsg::StartOver => {
                self.cancel_timers();
                self.wizard.restart()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let step = self.wizard.step();
        let copy = &self.wizard.variant().copy;
        let show_header = !matches!(step, Step::Contact | Step::Submitted | Step::Disqualified(_));

        html! {
            <div class="quiz-card">
                <style>{QUIZ_CSS}</style>
                if show_header {
                    <>
                        <div class="quiz-badge">
                            <span class="quiz-badge-dot"></span>
                            {copy.badge}
                        </div>
                        { self.render_progress() }
                    </>
                }
                <div class="quiz-body">
                    {
                        match step {
                            Step::ProjectType => self.render_project_type(ctx),
                            Step::Timeline => self.render_timeline(ctx),
                            Step::Budget => self.render_budget(ctx),
                            Step::Location => self.render_location(ctx),
                            Step::Clarification => self.render_clarification(ctx),
                            Step::Checking => self.render_checking(),
                            Step::Contact => self.render_contact(ctx),
                            Step::Disqualified(reason) => self.render_disqualified(ctx, reason),
                            Step::Submitted => self.render_submitted(ctx),
                        }
                    }
                </div>
            </div>
        }
    }
}

impl Quiz {
    fn apply<E: std::fmt::Display>(&mut self, ctx: &Context<Self>, effect: Result<Effect, E>) -> bool {
        match effect {
            Ok(Effect::None) => true,
            Ok(Effect::AdvanceAfter { epoch, to, delay_ms }) => {
                debug!("Advancing to {:?} in {} ms", to, delay_ms);
                let link = ctx.link().clone();
                self.advance_timer = Some(Timeout::new(delay_ms, move || {
                    link.send_message(QuizMsg::Advance(epoch));
                }));
                true
            }
            Ok(Effect::Checking { epoch, duration_ms, rotate_every_ms }) => {
                if rotate_every_ms > 0 {
                    let link = ctx.link().clone();
                    self.rotate_timer = Some(Interval::new(rotate_every_ms, move || {
                        link.send_message(QuizMsg::RotateChecking(epoch));
                    }));
                }
                let link = ctx.link().clone();
                self.checking_timer = Some(Timeout::new(duration_ms, move || {
                    link.send_message(QuizMsg::FinishChecking(epoch));
                }));
                true
            }
            Err(e) => {
                warn!("Quiz action ignored: {}", e);
                false
            }
        }
    }

    fn cancel_timers(&mut self) {
        self.advance_timer = None;
        self.checking_timer = None;
        self.rotate_timer = None;
    }

    fn render_progress(&self) -> Html {
        let labels: Vec<&str> = self
            .wizard
            .ordinal_steps()
            .iter()
            .map(|step| match step {
                Step::ProjectType => "Project",
                Step::Timeline => "Timeline",
                Step::Budget => "Budget",
                Step::Location => "Location",
                _ => "Contact",
            })
            .collect();
        let percent = self.wizard.progress_percent();
        let reached = (percent as usize * labels.len()) / 100;

        html! {
            <div class="quiz-progress">
                <div class="quiz-progress-labels">
                    { for labels.iter().enumerate().map(|(i, label)| html! {
                        <span class={classes!((i < reached).then_some("reached"))}>{*label}</span>
                    }) }
                </div>
                <div class="quiz-progress-track">
                    <div class="quiz-progress-fill" style={format!("width: {}%;", percent)}></div>
                </div>
            </div>
        }
    }

    fn render_tiles(
        &self,
        ctx: &Context<Self>,
        options: &[ChoiceOption],
        selected: Option<&str>,
        to_msg: fn(&'static str) -> QuizMsg,
    ) -> Html {
        html! {
            <div class="quiz-tiles">
                { for options.iter().map(|option| {
                    let code = option.code;
                    let is_selected = selected == Some(code);
                    html! {
                        <button
                            class={classes!("quiz-tile", is_selected.then_some("selected"))}
                            onclick={ctx.link().callback(move |_| to_msg(code))}
                        >
                            <span class="quiz-tile-icon">{option.icon}</span>
                            <span class="quiz-tile-label">{option.label}</span>
                        </button>
                    }
                }) }
            </div>
        }
    }

    fn render_back(&self, ctx: &Context<Self>) -> Html {
        html! {
            <button
                class="quiz-back"
                onclick={ctx.link().callback(|_| QuizMsg::Back)}
                disabled={!self.wizard.can_go_back()}
            >
                {"←"}
            </button>
        }
    }

    fn render_project_type(&self, ctx: &Context<Self>) -> Html {
        let variant = self.wizard.variant();
        html! {
            <>
                <h3>{variant.copy.project_heading}</h3>
                { self.render_tiles(ctx, &variant.project_types, self.wizard.answers().project_type.as_deref(), QuizMsg::SelectProjectType) }
            </>
        }
    }

    fn render_timeline(&self, ctx: &Context<Self>) -> Html {
        let variant = self.wizard.variant();
        html! {
            <>
                <h3>{variant.copy.timeline_heading}</h3>
                { self.render_tiles(ctx, &variant.timelines, self.wizard.answers().timeline.as_deref(), QuizMsg::SelectTimeline) }
                { self.render_back(ctx) }
            </>
        }
    }

    fn render_budget(&self, ctx: &Context<Self>) -> Html {
        let variant = self.wizard.variant();
        html! {
            <>
                <h3>{variant.copy.budget_heading}</h3>
                { self.render_tiles(ctx, variant.budget_options(), self.wizard.answers().budget_range.as_deref(), QuizMsg::SelectBudget) }
                { self.render_back(ctx) }
            </>
        }
    }

    fn render_location(&self, ctx: &Context<Self>) -> Html {
        let variant = self.wizard.variant();
        html! {
            <>
                <h3>{variant.copy.location_heading}</h3>
                <div class="quiz-input">
                    <span class="quiz-input-icon">{"📍"}</span>
                    <input
                        type="text"
                        inputmode="numeric"
                        pattern="[0-9]*"
                        maxlength="5"
                        placeholder="Enter ZIP code"
                        value={self.wizard.answers().zip_code.clone()}
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            QuizMsg::SetZip(input.value())
                        })}
                    />
                </div>
                <div class="quiz-actions">
                    { self.render_back(ctx) }
                    <button
                        class="quiz-primary"
                        disabled={!self.wizard.can_continue()}
                        onclick={ctx.link().callback(|_| QuizMsg::ContinueFromLocation)}
                    >
                        {"Continue →"}
                    </button>
                </div>
            </>
        }
    }

    fn render_clarification(&self, ctx: &Context<Self>) -> Html {
        let Some(clarification) = &self.wizard.variant().clarification else {
            return html! {};
        };
        html! {
            <>
                <h3>{clarification.prompt}</h3>
                <div class="quiz-choices">
                    <button class="quiz-primary" onclick={ctx.link().callback(|_| QuizMsg::AcceptFallback)}>
                        {clarification.accept_label}
                    </button>
                    <button class="quiz-secondary" onclick={ctx.link().callback(|_| QuizMsg::DeclineFallback)}>
                        {clarification.decline_label}
                    </button>
                </div>
                { self.render_back(ctx) }
            </>
        }
    }

    fn render_checking(&self) -> Html {
        html! {
            <div class="quiz-checking">
                <span class="quiz-spinner"></span>
                <p>{self.wizard.checking_message().unwrap_or("Checking availability...")}</p>
            </div>
        }
    }

    fn field_error(&self, field: Field) -> Html {
        match self.wizard.errors().get(&field) {
            Some(err) => html! { <p class="quiz-field-error">{err.to_string()}</p> },
            None => html! {},
        }
    }

    fn render_contact(&self, ctx: &Context<Self>) -> Html {
        let variant = self.wizard.variant();
        let answers = self.wizard.answers();
        let errors = self.wizard.errors();
        let email_placeholder = match variant.email_rule {
            EmailRule::Required => "Email",
            _ => "Email (optional)",
        };

        html! {
            <>
                <div class="quiz-contact-header">
                    <div class="quiz-celebrate">{"🎉"}</div>
                    <h3>{variant.copy.contact_heading}</h3>
                    <p>{variant.copy.contact_subheading}</p>
                    <div class="quiz-social-proof">
                        <span class="quiz-stars">{"★★★★★"}</span>
                        {variant.copy.social_proof}
                    </div>
                </div>
                <div class="quiz-fields">
                    <div class={classes!("quiz-input", errors.contains_key(&Field::FirstName).then_some("invalid"))}>
                        <span class="quiz-input-icon">{"👤"}</span>
                        <input
                            type="text"
                            placeholder="First name"
                            value={answers.first_name.clone()}
                            oninput={ctx.link().callback(|e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                QuizMsg::SetFirstName(input.value())
                            })}
                        />
                    </div>
                    { self.field_error(Field::FirstName) }
                    <div class={classes!("quiz-input", errors.contains_key(&Field::Phone).then_some("invalid"))}>
                        <span class="quiz-input-icon">{"📞"}</span>
                        <input
                            type="tel"
                            inputmode="tel"
                            maxlength="14"
                            placeholder="(555) 123-4567"
                            value={answers.phone.clone()}
                            oninput={ctx.link().callback(|e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                QuizMsg::SetPhone(input.value())
                            })}
                        />
                    </div>
                    { self.field_error(Field::Phone) }
                    <div class={classes!("quiz-input", errors.contains_key(&Field::Email).then_some("invalid"))}>
                        <span class="quiz-input-icon">{"✉️"}</span>
                        <input
                            type="email"
                            placeholder={email_placeholder}
                            value={answers.email.clone()}
                            oninput={ctx.link().callback(|e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                QuizMsg::SetEmail(input.value())
                            })}
                        />
                    </div>
                    { self.field_error(Field::Email) }
                </div>
                <div class="quiz-actions">
                    { self.render_back(ctx) }
                    <button class="quiz-cta" onclick={ctx.link().callback(|_| QuizMsg::Submit)}>
                        {variant.copy.submit_label}
                    </button>
                </div>
                <div class="quiz-trust">
                    <span>{"🔒 Secure"}</span>
                    <span>{"·"}</span>
                    <span>{"Licensed & Insured"}</span>
                    <span>{"·"}</span>
                    <span>{"No spam"}</span>
                </div>
            </>
        }
    }

    fn render_start_over(&self, ctx: &Context<Self>) -> Html {
        if !self.wizard.variant().allow_restart {
            return html! {};
        }
        html! {
            <button class="quiz-secondary" onclick={ctx.link().callback(|_| QuizMsg::StartOver)}>
                {"Start over"}
            </button>
        }
    }

    fn render_disqualified(&self, ctx: &Context<Self>, reason: DisqualifyReason) -> Html {
        let copy = &self.wizard.variant().copy;
        let message = match reason {
            DisqualifyReason::OutsideServiceArea => copy.outside_area,
            DisqualifyReason::TimelineDeclined => copy.timeline_declined,
        };
        html! {
            <div class="quiz-final">
                <div class="quiz-final-icon">{"📍"}</div>
                <h3>{message}</h3>
                { self.render_start_over(ctx) }
            </div>
        }
    }

    fn render_submitted(&self, ctx: &Context<Self>) -> Html {
        let copy = &self.wizard.variant().copy;
        html! {
            <div class="quiz-final">
                <div class="quiz-final-icon quiz-check">{"✔"}</div>
                <h3>{format!("Thanks, {}!", self.wizard.answers().first_name.trim())}</h3>
                <p>{copy.thank_you_body}</p>
                <div class="quiz-trust">
                    <span>{"🛡 Your information is secure"}</span>
                </div>
                { self.render_start_over(ctx) }
            </div>
        }
    }
}

const QUIZ_CSS: &str = r#"
.quiz-card {
    background: rgba(255, 255, 255, 0.96);
    border: 2px solid rgba(234, 88, 12, 0.3);
    border-radius: 16px;
    box-shadow: 0 20px 50px -10px rgba(234, 88, 12, 0.35);
    padding: 2rem;
    width: 100%;
    max-width: 32rem;
    color: #0f172a;
}
.quiz-badge {
    display: flex;
    justify-content: center;
    align-items: center;
    gap: 0.5rem;
    margin: 0 auto 1.5rem;
    font-size: 0.75rem;
    font-weight: 600;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    color: #ea580c;
}
.quiz-badge-dot {
    width: 8px;
    height: 8px;
    border-radius: 50%;
    background: #ea580c;
    animation: quiz-pulse 1.5s infinite;
}
.quiz-progress-labels {
    display: flex;
    justify-content: space-between;
    font-size: 0.75rem;
    color: #64748b;
    margin-bottom: 0.5rem;
}
.quiz-progress-labels .reached {
    color: #ea580c;
    font-weight: 500;
}
.quiz-progress-track {
    height: 10px;
    background: #e2e8f0;
    border-radius: 999px;
    overflow: hidden;
    margin-bottom: 1.5rem;
}
.quiz-progress-fill {
    height: 100%;
    background: linear-gradient(90deg, #ea580c, #fb923c);
    transition: width 0.3s ease;
}
.quiz-body h3 {
    font-size: 1.4rem;
    margin-bottom: 1.5rem;
}
.quiz-tiles {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1rem;
    margin-bottom: 1rem;
}
.quiz-tile {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.75rem;
    min-height: 110px;
    padding: 1rem;
    border: 2px solid #e2e8f0;
    border-radius: 12px;
    background: #fff;
    cursor: pointer;
    transition: transform 0.2s, border-color 0.2s;
}
.quiz-tile:hover {
    transform: scale(1.03);
    border-color: rgba(234, 88, 12, 0.6);
}
.quiz-tile.selected {
    border-color: #ea580c;
    background: rgba(234, 88, 12, 0.08);
}
.quiz-tile-icon {
    font-size: 1.6rem;
}
.quiz-input {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    border: 1px solid #cbd5e1;
    border-radius: 8px;
    padding: 0 0.75rem;
    margin-bottom: 0.75rem;
}
.quiz-input.invalid {
    border-color: #ef4444;
}
.quiz-input input {
    flex: 1;
    height: 3.25rem;
    border: none;
    outline: none;
    font-size: 1rem;
    background: transparent;
}
.quiz-field-error {
    color: #ef4444;
    font-size: 0.75rem;
    margin: -0.5rem 0 0.75rem 0.25rem;
}
.quiz-actions, .quiz-choices {
    display: flex;
    gap: 0.75rem;
    margin-bottom: 1rem;
}
.quiz-choices {
    flex-direction: column;
}
.quiz-back, .quiz-secondary {
    padding: 0 1rem;
    height: 3rem;
    border: 1px solid #cbd5e1;
    border-radius: 8px;
    background: #fff;
    cursor: pointer;
}
.quiz-primary, .quiz-cta {
    flex: 1;
    height: 3rem;
    border: none;
    border-radius: 8px;
    background: #ea580c;
    color: #fff;
    font-weight: 600;
    cursor: pointer;
}
.quiz-cta {
    background: #16a34a;
}
button:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}
.quiz-contact-header, .quiz-final, .quiz-checking {
    text-align: center;
    margin-bottom: 1.25rem;
}
.quiz-celebrate {
    font-size: 2rem;
}
.quiz-social-proof {
    font-size: 0.75rem;
    color: #475569;
}
.quiz-stars {
    color: #f59e0b;
    margin-right: 0.4rem;
}
.quiz-trust {
    display: flex;
    justify-content: center;
    flex-wrap: wrap;
    gap: 0.5rem;
    font-size: 0.7rem;
    color: #64748b;
    border-top: 1px solid #e2e8f0;
    padding-top: 0.75rem;
}
.quiz-final-icon {
    width: 4rem;
    height: 4rem;
    margin: 0 auto 1.25rem;
    border-radius: 50%;
    background: #d1fae5;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.8rem;
}
.quiz-spinner {
    display: inline-block;
    width: 32px;
    height: 32px;
    border: 3px solid rgba(234, 88, 12, 0.25);
    border-top-color: #ea580c;
    border-radius: 50%;
    animation: quiz-spin 1s linear infinite;
}
@keyframes quiz-spin { to { transform: rotate(360deg); } }
@keyframes quiz-pulse { 50% { opacity: 0.4; } }
"#;
