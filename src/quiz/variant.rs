//! Declarative description of a quiz variant.
//!
//! Every landing-page flavor (copy, options, gating) is one `QuizVariant`
//! value. The wizard and the view read from it and never branch on which
//! campaign is running.

use std::ops::RangeInclusive;

#[derive(Clone, Debug, PartialEq)]
pub struct ChoiceOption {
    pub code: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

const fn choice(code: &'static str, label: &'static str, icon: &'static str) -> ChoiceOption {
    ChoiceOption { code, label, icon }
}

/// Human-readable label for an option code. Unknown codes map to `""`.
pub fn label<'a>(options: &'a [ChoiceOption], code: Option<&str>) -> &'a str {
    code.and_then(|code| options.iter().find(|o| o.code == code))
        .map(|o| o.label)
        .unwrap_or("")
}

pub fn contains_code(options: &[ChoiceOption], code: &str) -> bool {
    options.iter().any(|o| o.code == code)
}

/// ZIP ranges the crew actually drives to.
#[derive(Clone, Debug, PartialEq)]
pub struct ServiceArea {
    pub ranges: Vec<RangeInclusive<u32>>,
}

impl ServiceArea {
    pub fn new(ranges: Vec<RangeInclusive<u32>>) -> Self {
        Self { ranges }
    }

    pub fn contains(&self, zip: &str) -> bool {
        match zip.parse::<u32>() {
            Ok(value) => self.ranges.iter().any(|r| r.contains(&value)),
            Err(_) => false,
        }
    }
}

/// Offered when the visitor answers the timeline with `sentinel`.
#[derive(Clone, Debug, PartialEq)]
pub struct Clarification {
    pub sentinel: &'static str,
    pub fallback: &'static str,
    pub prompt: &'static str,
    pub accept_label: &'static str,
    pub decline_label: &'static str,
}

/// Fake "verifying your area" pause shown between location and contact.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckingSimulation {
    pub duration_ms: u32,
    pub rotate_every_ms: u32,
    pub messages: Vec<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmailRule {
    Required,
    /// Empty is fine, anything typed must look like an address.
    OptionalStrict,
    OptionalUnchecked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhoneRule {
    LengthOnly,
    /// Also rejects area/exchange codes starting with 0 or 1.
    Enhanced,
}

/// Namespaced keys that differ between CRM form mappings.
#[derive(Clone, Debug, PartialEq)]
pub struct PayloadKeys {
    pub zip_code: &'static str,
    pub project_type: &'static str,
    pub timeline: &'static str,
}

impl PayloadKeys {
    pub fn survey_fields() -> Self {
        Self {
            zip_code: "contact.what_is_your_zip_code",
            project_type: "contact.what_type_of_project",
            timeline: "contact.when_do_you_want_to_start",
        }
    }

    pub fn plain_fields() -> Self {
        Self {
            zip_code: "contact.zip_code",
            project_type: "contact.project_type",
            timeline: "contact.timeline",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizCopy {
    pub badge: &'static str,
    pub project_heading: &'static str,
    pub timeline_heading: &'static str,
    pub budget_heading: &'static str,
    pub location_heading: &'static str,
    pub contact_heading: &'static str,
    pub contact_subheading: &'static str,
    pub social_proof: &'static str,
    pub submit_label: &'static str,
    pub thank_you_body: &'static str,
    pub outside_area: &'static str,
    pub timeline_declined: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizVariant {
    pub project_types: Vec<ChoiceOption>,
    pub timelines: Vec<ChoiceOption>,
    pub budgets: Option<Vec<ChoiceOption>>,
    pub service_area: Option<ServiceArea>,
    pub clarification: Option<Clarification>,
    pub checking: Option<CheckingSimulation>,
    pub email_rule: EmailRule,
    pub phone_rule: PhoneRule,
    pub payload_keys: PayloadKeys,
    pub auto_advance_ms: u32,
    pub allow_restart: bool,
    pub copy: QuizCopy,
}

impl QuizVariant {
    /// The winter concrete campaign: four steps, no gating.
    pub fn concrete_winter() -> Self {
        Self {
            project_types: vec![
                choice("driveway", "Driveway", "🚗"),
                choice("patio", "Patio", "🌳"),
                choice("walkway", "Walkway", "👣"),
                choice("other", "Other", "❓"),
            ],
            timelines: vec![
                choice("asap", "ASAP / Right away", "⚡"),
                choice("this-month", "This month", "📅"),
                choice("2-3-months", "Within 2-3 months", "🗓"),
                choice("not-sure", "Not sure", "🕒"),
            ],
            budgets: None,
            service_area: None,
            clarification: None,
            checking: None,
            email_rule: EmailRule::OptionalUnchecked,
            phone_rule: PhoneRule::LengthOnly,
            payload_keys: PayloadKeys::survey_fields(),
            auto_advance_ms: 250,
            allow_restart: true,
            copy: QuizCopy {
                badge: "Winter Upgrade Program",
                project_heading: "What type of concrete project do you need?",
                timeline_heading: "When are you looking to get started?",
                budget_heading: "What's your budget range?",
                location_heading: "What's your zip code?",
                contact_heading: "Your ZIP Code Qualifies!",
                contact_subheading: "Fill out the form below to schedule your free estimate and claim your $2,000 discount before spots fill up.",
                social_proof: "200+ Colorado homeowners",
                submit_label: "Get My Free Estimate",
                thank_you_body: "A local team member will contact you within 24 hours to schedule your free estimate.",
                outside_area: "Sorry, we don't serve your area yet.",
                timeline_declined: "Thanks for your interest! This offer is limited to projects starting soon.",
            },
        }
    }

    /// The remodeling campaign with every gate switched on.
    pub fn remodel_gated() -> Self {
        Self {
            project_types: vec![
                choice("kitchen", "Kitchen", "🍳"),
                choice("bathroom", "Bathroom", "🛁"),
                choice("both", "Kitchen & Bathroom", "🏠"),
                choice("other", "Other", "❓"),
            ],
            timelines: vec![
                choice("asap", "ASAP", "⚡"),
                choice("within-30-days", "Within 30 days", "📅"),
                choice("1-3-months", "1-3 months", "🗓"),
                choice("not-sure", "Not sure", "🕒"),
            ],
            budgets: Some(vec![
                choice("under-15k", "Under $15,000", "💵"),
                choice("15k-30k", "$15,000 - $30,000", "💰"),
                choice("30k-50k", "$30,000 - $50,000", "🏦"),
                choice("50k-plus", "$50,000+", "💎"),
            ]),
            service_area: Some(ServiceArea::new(vec![80001..=81658])),
            clarification: Some(Clarification {
                sentinel: "not-sure",
                fallback: "1-3-months",
                prompt: "Our winter program covers projects starting within the next 3 months. Would that work for you?",
                accept_label: "Yes, that works",
                decline_label: "No, not right now",
            }),
            checking: Some(CheckingSimulation {
                duration_ms: 8_000,
                rotate_every_ms: 1_800,
                messages: vec![
                    "Checking availability in your area...",
                    "Confirming crew schedules...",
                    "Verifying program eligibility...",
                    "Reserving your discount...",
                ],
            }),
            email_rule: EmailRule::Required,
            phone_rule: PhoneRule::Enhanced,
            payload_keys: PayloadKeys::plain_fields(),
            auto_advance_ms: 300,
            allow_restart: false,
            copy: QuizCopy {
                badge: "Winter Remodel Program",
                project_heading: "What are you looking to remodel?",
                timeline_heading: "When would you like to start?",
                budget_heading: "What's your estimated budget?",
                location_heading: "Where is the project located?",
                contact_heading: "Great news, you qualify!",
                contact_subheading: "Tell us where to send your free estimate and $2,000 discount.",
                social_proof: "200+ Colorado homeowners",
                submit_label: "Claim My $2,000 Discount",
                thank_you_body: "A project specialist will call you within 24 hours to book your free in-home consultation.",
                outside_area: "Unfortunately your home is outside our service area.",
                timeline_declined: "No problem! This program is reserved for projects starting in the next few months.",
            },
        }
    }

    /// Looks a preset up by the name it is configured under.
    pub fn named(name: &str) -> Option<Self> {
        match name.trim() {
            "concrete-winter" => Some(Self::concrete_winter()),
            "remodel-gated" => Some(Self::remodel_gated()),
            _ => None,
        }
    }

    pub fn has_budget_step(&self) -> bool {
        self.budgets.is_some()
    }

    pub fn budget_options(&self) -> &[ChoiceOption] {
        self.budgets.as_deref().unwrap_or(&[])
    }

    pub fn with_budgets(mut self, budgets: Option<Vec<ChoiceOption>>) -> Self {
        self.budgets = budgets;
        self
    }

    pub fn with_service_area(mut self, area: Option<ServiceArea>) -> Self {
        self.service_area = area;
        self
    }

    pub fn with_clarification(mut self, clarification: Option<Clarification>) -> Self {
        self.clarification = clarification;
        self
    }

    pub fn with_checking(mut self, checking: Option<CheckingSimulation>) -> Self {
        self.checking = checking;
        self
    }

    pub fn with_email_rule(mut self, rule: EmailRule) -> Self {
        self.email_rule = rule;
        self
    }

    pub fn with_phone_rule(mut self, rule: PhoneRule) -> Self {
        self.phone_rule = rule;
        self
    }

    /// Zeroes every cosmetic pause so transitions happen inline.
    pub fn without_delays(mut self) -> Self {
        self.auto_advance_ms = 0;
        if let Some(checking) = self.checking.as_mut() {
            checking.duration_ms = 0;
            checking.rotate_every_ms = 0;
        }
        self
    }
}
