use serde::Serialize;
use serde_json::{Map, Value};

use crate::quiz::answers::QuizAnswers;
use crate::quiz::variant::{label, QuizVariant};

/// Flat JSON body for the CRM webhook.
///
/// Every value is written twice, once under the CRM's `contact.*` names and
/// once under plain snake_case names, so either field mapping on the
/// receiving side picks it up.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LeadPayload(Map<String, Value>);

impl LeadPayload {
    pub fn build(answers: &QuizAnswers, variant: &QuizVariant) -> Self {
        let keys = &variant.payload_keys;
        let phone = answers.phone_digits();
        let project = label(&variant.project_types, answers.project_type.as_deref());
        let timeline = label(&variant.timelines, answers.timeline.as_deref());

        let mut payload = Self(Map::new());
        payload.pair("contact.first_name", "first_name", &answers.first_name);
        payload.pair("contact.email", "email", answers.email.trim());
        payload.pair("contact.phone", "phone", &phone);
        payload.pair(keys.zip_code, "zip_code", &answers.zip_code);
        payload.pair(keys.project_type, "project_type", project);
        payload.pair(keys.timeline, "timeline", timeline);

        if let Some(budgets) = &variant.budgets {
            let budget = label(budgets, answers.budget_range.as_deref());
            payload.pair("contact.budget_range", "budget_range", budget);
        }

        payload
    }

    fn pair(&mut self, namespaced: &str, flat: &str, value: &str) {
        self.0.insert(namespaced.to_string(), Value::from(value));
        self.0.insert(flat.to_string(), Value::from(value));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kitchen_lead() -> QuizAnswers {
        QuizAnswers {
            project_type: Some("kitchen".to_string()),
            timeline: Some("asap".to_string()),
            budget_range: Some("15k-30k".to_string()),
            zip_code: "80202".to_string(),
            first_name: "Ann".to_string(),
            phone: "(555) 123-4567".to_string(),
            email: "ann@x.com".to_string(),
        }
    }

    fn key_count(payload: &LeadPayload) -> usize {
        serde_json::to_value(payload).unwrap().as_object().unwrap().len()
    }

    #[test]
    fn both_conventions_carry_the_same_values() {
        let payload = LeadPayload::build(&kitchen_lead(), &QuizVariant::remodel_gated());

        assert_eq!(payload.get("contact.phone"), Some("5551234567"));
        assert_eq!(payload.get("phone"), Some("5551234567"));
        assert_eq!(payload.get("contact.zip_code"), Some("80202"));
        assert_eq!(payload.get("zip_code"), Some("80202"));
        assert_eq!(payload.get("contact.project_type"), Some("Kitchen"));
        assert_eq!(payload.get("project_type"), Some("Kitchen"));
        assert_eq!(payload.get("contact.timeline"), Some("ASAP"));
        assert_eq!(payload.get("budget_range"), Some("$15,000 - $30,000"));
        assert_eq!(payload.get("contact.first_name"), Some("Ann"));
        assert_eq!(key_count(&payload), 14);
    }

    #[test]
    fn budget_is_omitted_without_a_budget_step() {
        let mut answers = kitchen_lead();
        answers.project_type = Some("patio".to_string());
        answers.email.clear();
        let payload = LeadPayload::build(&answers, &QuizVariant::concrete_winter());

        assert_eq!(payload.get("budget_range"), None);
        assert_eq!(payload.get("contact.budget_range"), None);
        assert_eq!(payload.get("contact.what_is_your_zip_code"), Some("80202"));
        assert_eq!(payload.get("contact.what_type_of_project"), Some("Patio"));
        assert_eq!(payload.get("email"), Some(""));
        assert_eq!(key_count(&payload), 12);
    }

    #[test]
    fn unmapped_codes_become_empty_labels() {
        let mut answers = kitchen_lead();
        answers.timeline = Some("someday".to_string());
        let payload = LeadPayload::build(&answers, &QuizVariant::concrete_winter());
        assert_eq!(payload.get("timeline"), Some(""));
        assert_eq!(payload.get("contact.what_type_of_project"), Some(""));
    }

    #[test]
    fn email_is_posted_without_surrounding_whitespace() {
        let mut answers = kitchen_lead();
        answers.email = "  ann@x.com \t".to_string();
        let payload = LeadPayload::build(&answers, &QuizVariant::remodel_gated());
        assert_eq!(payload.get("contact.email"), Some("ann@x.com"));
        assert_eq!(payload.get("email"), Some("ann@x.com"));
    }

    #[test]
    fn serializes_as_a_flat_object() {
        let payload = LeadPayload::build(&kitchen_lead(), &QuizVariant::concrete_winter());
        let json: Value = serde_json::from_str(&payload.to_json().unwrap()).unwrap();
        assert_eq!(json["contact.email"], "ann@x.com");
        assert_eq!(json["first_name"], "Ann");
    }
}
