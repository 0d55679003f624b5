use log::warn;

use crate::quiz::variant::QuizVariant;

const DEFAULT_VARIANT: &str = "concrete-winter";

#[cfg(debug_assertions)]
pub fn get_webhook_url() -> &'static str {
    "http://localhost:3001/hooks/lead"  // Local echo server while developing
}

#[cfg(not(debug_assertions))]
pub fn get_webhook_url() -> &'static str {
    match option_env!("LEAD_WEBHOOK_URL") {
        Some(url) => url,
        None => "https://services.leadconnectorhq.com/hooks/AUs946zIT71gT6ZZInpO/webhook-trigger/4303b213-285a-4588-88df-5909a8baed41",
    }
}

/// Quiz flavor shown on the home hero and the qualify page.
/// Picked at build time with `QUIZ_VARIANT=remodel-gated`.
pub fn active_variant() -> QuizVariant {
    let name = option_env!("QUIZ_VARIANT").unwrap_or(DEFAULT_VARIANT);
    QuizVariant::named(name).unwrap_or_else(|| {
        warn!("Unknown quiz variant {:?}, using {}", name, DEFAULT_VARIANT);
        QuizVariant::concrete_winter()
    })
}
