//! The qualification quiz as a state machine.
//!
//! The wizard owns the answers and the current step. Anything that should
//! happen later (auto-advance after a tile click, the "checking your area"
//! pause) comes back to the caller as an [`Effect`] stamped with the epoch it
//! was scheduled under. Every transition bumps the epoch, so a timer that
//! fires after the visitor moved on is simply ignored.

use log::{debug, info};
use thiserror::Error;

use crate::quiz::answers::{format_phone, sanitize_zip, Field, QuizAnswers};
use crate::quiz::delivery::{dispatch, Delivery, LeadPorts};
use crate::quiz::payload::LeadPayload;
use crate::quiz::validation::{validate, FieldErrors};
use crate::quiz::variant::{contains_code, QuizVariant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisqualifyReason {
    OutsideServiceArea,
    TimelineDeclined,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    ProjectType,
    Timeline,
    Budget,
    Location,
    Clarification,
    Checking,
    Contact,
    Disqualified(DisqualifyReason),
    Submitted,
}

impl Step {
    pub fn is_terminal(self) -> bool {
        matches!(self, Step::Disqualified(_) | Step::Submitted)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Call [`Wizard::advance`] with these values after `delay_ms`.
    AdvanceAfter { epoch: u64, to: Step, delay_ms: u32 },
    /// Rotate the status line every `rotate_every_ms` and call
    /// [`Wizard::finish_checking`] after `duration_ms`.
    Checking { epoch: u64, duration_ms: u32, rotate_every_ms: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("action not available on step {0:?}")]
    WrongStep(Step),
    #[error("{0:?} is not one of the offered options")]
    UnknownOption(&'static str),
    #[error("zip code needs 5 digits")]
    ZipIncomplete,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Step(#[from] StepError),
    #[error("contact details need fixing ({} fields)", .0.len())]
    Invalid(FieldErrors),
}

pub struct Wizard {
    variant: QuizVariant,
    step: Step,
    answers: QuizAnswers,
    errors: FieldErrors,
    epoch: u64,
    pending_advance: Option<(u64, Step)>,
    checking_message: usize,
}

impl Wizard {
    pub fn new(variant: QuizVariant) -> Self {
        Self {
            variant,
            step: Step::ProjectType,
            answers: QuizAnswers::default(),
            errors: FieldErrors::new(),
            epoch: 0,
            pending_advance: None,
            checking_message: 0,
        }
    }

    pub fn variant(&self) -> &QuizVariant {
        &self.variant
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn answers(&self) -> &QuizAnswers {
        &self.answers
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The ordinal path through the quiz, side states excluded.
    pub fn ordinal_steps(&self) -> Vec<Step> {
        let mut steps = vec![Step::ProjectType, Step::Timeline];
        if self.variant.has_budget_step() {
            steps.push(Step::Budget);
        }
        steps.push(Step::Location);
        steps.push(Step::Contact);
        steps
    }

    fn position(&self, step: Step) -> Option<usize> {
        self.ordinal_steps().iter().position(|s| *s == step)
    }

    fn next_ordinal(&self, step: Step) -> Step {
        let steps = self.ordinal_steps();
        self.position(step)
            .and_then(|i| steps.get(i + 1).copied())
            .unwrap_or(step)
    }

    pub fn progress_percent(&self) -> u32 {
        let steps = self.ordinal_steps();
        let reached = match self.step {
            Step::Clarification => Step::Timeline,
            Step::Checking => Step::Location,
            Step::Disqualified(_) | Step::Submitted => Step::Contact,
            step => step,
        };
        let index = self.position(reached).unwrap_or(0) + 1;
        (index * 100 / steps.len()) as u32
    }

    pub fn checking_message(&self) -> Option<&'static str> {
        let checking = self.variant.checking.as_ref()?;
        if checking.messages.is_empty() {
            return None;
        }
        Some(checking.messages[self.checking_message % checking.messages.len()])
    }

    fn enter(&mut self, step: Step) {
        debug!("Quiz step {:?} -> {:?}", self.step, step);
        self.step = step;
        self.epoch += 1;
        self.pending_advance = None;
    }

    fn expect_step(&self, step: Step) -> Result<(), StepError> {
        if self.step == step {
            Ok(())
        } else {
            Err(StepError::WrongStep(self.step))
        }
    }

    fn schedule_advance(&mut self, to: Step) -> Effect {
        let delay_ms = self.variant.auto_advance_ms;
        if delay_ms == 0 {
            self.enter(to);
            return Effect::None;
        }
        // a second click on the same step replaces the pending advance
        self.epoch += 1;
        self.pending_advance = Some((self.epoch, to));
        Effect::AdvanceAfter { epoch: self.epoch, to, delay_ms }
    }

    pub fn select_project_type(&mut self, code: &str) -> Result<Effect, StepError> {
        self.expect_step(Step::ProjectType)?;
        if !contains_code(&self.variant.project_types, code) {
            return Err(StepError::UnknownOption("project type"));
        }
        self.answers.project_type = Some(code.to_string());
        Ok(self.schedule_advance(Step::Timeline))
    }

    pub fn select_timeline(&mut self, code: &str) -> Result<Effect, StepError> {
        self.expect_step(Step::Timeline)?;
        if !contains_code(&self.variant.timelines, code) {
            return Err(StepError::UnknownOption("timeline"));
        }
        self.answers.timeline = Some(code.to_string());
        let needs_clarification = self
            .variant
            .clarification
            .as_ref()
            .is_some_and(|c| c.sentinel == code);
        let to = if needs_clarification {
            Step::Clarification
        } else {
            self.next_ordinal(Step::Timeline)
        };
        Ok(self.schedule_advance(to))
    }

    pub fn select_budget(&mut self, code: &str) -> Result<Effect, StepError> {
        self.expect_step(Step::Budget)?;
        if !contains_code(self.variant.budget_options(), code) {
            return Err(StepError::UnknownOption("budget"));
        }
        self.answers.budget_range = Some(code.to_string());
        Ok(self.schedule_advance(self.next_ordinal(Step::Budget)))
    }

    /// Applies an auto-advance scheduled by one of the `select_*` calls.
    /// Only the target stored with that schedule is applied. Returns false
    /// when nothing is pending under `epoch`.
    pub fn advance(&mut self, epoch: u64) -> bool {
        match self.pending_advance {
            Some((pending, to)) if pending == epoch && epoch == self.epoch => {
                self.enter(to);
                true
            }
            _ => {
                debug!("Dropping stale advance scheduled at epoch {}", epoch);
                false
            }
        }
    }

    pub fn set_zip(&mut self, raw: &str) -> bool {
        if self.step != Step::Location {
            return false;
        }
        self.answers.zip_code = sanitize_zip(raw);
        true
    }

    pub fn can_continue(&self) -> bool {
        self.step == Step::Location && self.answers.has_full_zip()
    }

    pub fn continue_from_location(&mut self) -> Result<Effect, StepError> {
        self.expect_step(Step::Location)?;
        if !self.answers.has_full_zip() {
            return Err(StepError::ZipIncomplete);
        }

        if let Some(area) = &self.variant.service_area {
            if !area.contains(&self.answers.zip_code) {
                info!("Zip {} is outside the service area", self.answers.zip_code);
                self.enter(Step::Disqualified(DisqualifyReason::OutsideServiceArea));
                return Ok(Effect::None);
            }
        }

        match self.variant.checking.as_ref().map(|c| (c.duration_ms, c.rotate_every_ms)) {
            Some((duration_ms, rotate_every_ms)) if duration_ms > 0 => {
                self.checking_message = 0;
                self.enter(Step::Checking);
                Ok(Effect::Checking { epoch: self.epoch, duration_ms, rotate_every_ms })
            }
            _ => {
                self.enter(Step::Contact);
                Ok(Effect::None)
            }
        }
    }

    pub fn rotate_checking_message(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch || self.step != Step::Checking {
            return false;
        }
        self.checking_message += 1;
        true
    }

    pub fn finish_checking(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch || self.step != Step::Checking {
            return false;
        }
        self.enter(Step::Contact);
        true
    }

    pub fn accept_fallback_timeline(&mut self) -> Result<(), StepError> {
        self.expect_step(Step::Clarification)?;
        let Some(clarification) = &self.variant.clarification else {
            return Err(StepError::WrongStep(self.step));
        };
        self.answers.timeline = Some(clarification.fallback.to_string());
        let next = self.next_ordinal(Step::Timeline);
        self.enter(next);
        Ok(())
    }

    pub fn decline_fallback_timeline(&mut self) -> Result<(), StepError> {
        self.expect_step(Step::Clarification)?;
        info!("Visitor declined the offered timeline");
        self.enter(Step::Disqualified(DisqualifyReason::TimelineDeclined));
        Ok(())
    }

    pub fn can_go_back(&self) -> bool {
        match self.step {
            Step::ProjectType | Step::Checking | Step::Disqualified(_) | Step::Submitted => false,
            _ => true,
        }
    }

    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        let previous = if self.step == Step::Clarification {
            self.answers.timeline = None;
            Step::Timeline
        } else {
            let steps = self.ordinal_steps();
            match self.position(self.step) {
                Some(i) if i > 0 => steps[i - 1],
                _ => return false,
            }
        };
        self.enter(previous);
        true
    }

    fn edit_contact(&mut self, field: Field) -> bool {
        if self.step != Step::Contact {
            return false;
        }
        self.errors.remove(&field);
        true
    }

    pub fn set_first_name(&mut self, value: &str) -> bool {
        if !self.edit_contact(Field::FirstName) {
            return false;
        }
        self.answers.first_name = value.to_string();
        true
    }

    pub fn set_phone(&mut self, value: &str) -> bool {
        if !self.edit_contact(Field::Phone) {
            return false;
        }
        self.answers.phone = format_phone(value);
        true
    }

    pub fn set_email(&mut self, value: &str) -> bool {
        if !self.edit_contact(Field::Email) {
            return false;
        }
        self.answers.email = value.to_string();
        true
    }

    /// Validates the contact step and, when it passes, commits to the
    /// thank-you state before anything touches the network.
    ///
    /// The returned [`Delivery`] only logs the webhook outcome; nothing it
    /// does can move the wizard out of [`Step::Submitted`].
    pub fn submit(&mut self, ports: &LeadPorts) -> Result<Delivery, SubmitError> {
        self.expect_step(Step::Contact)?;

        let errors = validate(&self.answers, self.variant.email_rule, self.variant.phone_rule);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(SubmitError::Invalid(errors));
        }

        let payload = LeadPayload::build(&self.answers, &self.variant);
        info!(
            "Quiz payload prepared: project={:?} timeline={:?} zip={}",
            payload.get("project_type"),
            payload.get("timeline"),
            self.answers.zip_code
        );

        self.errors.clear();
        self.enter(Step::Submitted);
        ports.tracker.track_lead();
        Ok(dispatch(ports.sink.as_ref(), &payload))
    }

    pub fn restart(&mut self) -> bool {
        if !self.variant.allow_restart {
            return false;
        }
        self.answers = QuizAnswers::default();
        self.errors.clear();
        self.checking_message = 0;
        self.enter(Step::ProjectType);
        true
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::quiz::delivery::fakes::{ports, CountingTracker, RecordingSink};
    use crate::quiz::delivery::DeliveryError;
    use crate::quiz::validation::FieldError;
    use crate::quiz::variant::{EmailRule, PhoneRule, ServiceArea};

    fn instant(variant: QuizVariant) -> Wizard {
        Wizard::new(variant.without_delays())
    }

    fn to_contact(wizard: &mut Wizard, zip: &str) {
        wizard.select_project_type("kitchen").unwrap();
        wizard.select_timeline("asap").unwrap();
        if wizard.step() == Step::Budget {
            wizard.select_budget("15k-30k").unwrap();
        }
        wizard.set_zip(zip);
        wizard.continue_from_location().unwrap();
    }

    fn remodel_contact() -> Wizard {
        let mut wizard = instant(QuizVariant::remodel_gated());
        to_contact(&mut wizard, "80202");
        assert_eq!(wizard.step(), Step::Contact);
        wizard
    }

    #[test]
    fn starts_on_project_type_with_no_back() {
        let wizard = Wizard::new(QuizVariant::concrete_winter());
        assert_eq!(wizard.step(), Step::ProjectType);
        assert!(!wizard.can_go_back());
        assert_eq!(wizard.answers(), &QuizAnswers::default());
    }

    #[test]
    fn selection_schedules_advance_with_delay() {
        let mut wizard = Wizard::new(QuizVariant::concrete_winter());
        let effect = wizard.select_project_type("patio").unwrap();
        let Effect::AdvanceAfter { epoch, to, delay_ms } = effect else {
            panic!("expected a scheduled advance, got {:?}", effect);
        };
        assert_eq!((to, delay_ms), (Step::Timeline, 250));
        assert_eq!(wizard.step(), Step::ProjectType);

        assert!(wizard.advance(epoch));
        assert_eq!(wizard.step(), Step::Timeline);
        assert_eq!(wizard.answers().project_type.as_deref(), Some("patio"));
    }

    #[test]
    fn reselecting_makes_the_first_timer_stale() {
        let mut wizard = Wizard::new(QuizVariant::remodel_gated());
        wizard.select_project_type("kitchen").unwrap();
        wizard.advance(wizard.epoch());

        let first = wizard.select_timeline("not-sure").unwrap();
        let second = wizard.select_timeline("asap").unwrap();
        if let Effect::AdvanceAfter { epoch, .. } = first {
            assert!(!wizard.advance(epoch));
        }
        if let Effect::AdvanceAfter { epoch, .. } = second {
            assert!(wizard.advance(epoch));
        }
        assert_eq!(wizard.step(), Step::Budget);
    }

    #[test]
    fn advance_without_a_pending_schedule_is_ignored() {
        let mut wizard = instant(QuizVariant::remodel_gated());
        wizard.select_project_type("kitchen").unwrap();
        wizard.select_timeline("asap").unwrap();
        wizard.select_budget("15k-30k").unwrap();
        wizard.set_zip("10001");
        assert_eq!(wizard.step(), Step::Location);
        assert!(!wizard.advance(wizard.epoch()));
        assert_eq!(wizard.step(), Step::Location);

        let mut wizard = remodel_contact();
        assert!(!wizard.advance(wizard.epoch()));
        assert_eq!(wizard.step(), Step::Contact);
    }

    #[test]
    fn pending_advance_is_dropped_by_back() {
        let mut wizard = Wizard::new(QuizVariant::concrete_winter());
        wizard.select_project_type("patio").unwrap();
        assert!(wizard.advance(wizard.epoch()));
        let effect = wizard.select_timeline("asap").unwrap();
        assert!(wizard.back());
        let Effect::AdvanceAfter { epoch, .. } = effect else {
            panic!("expected a scheduled advance, got {:?}", effect);
        };
        assert!(!wizard.advance(epoch));
        assert!(!wizard.advance(wizard.epoch()));
        assert_eq!(wizard.step(), Step::ProjectType);
    }

    #[test]
    fn without_clarification_unsure_timeline_moves_on() {
        let mut wizard = instant(
            QuizVariant::remodel_gated()
                .with_clarification(None)
                .with_budgets(None),
        );
        wizard.select_project_type("kitchen").unwrap();
        wizard.select_timeline("not-sure").unwrap();
        assert_eq!(wizard.step(), Step::Location);
        assert_eq!(wizard.answers().timeline.as_deref(), Some("not-sure"));
    }

    #[test]
    fn without_checking_location_goes_straight_to_contact() {
        let mut wizard = Wizard::new(QuizVariant::remodel_gated().with_checking(None));
        wizard.select_project_type("kitchen").unwrap();
        wizard.advance(wizard.epoch());
        wizard.select_timeline("asap").unwrap();
        wizard.advance(wizard.epoch());
        wizard.select_budget("50k-plus").unwrap();
        wizard.advance(wizard.epoch());
        wizard.set_zip("80202");
        assert_eq!(wizard.continue_from_location(), Ok(Effect::None));
        assert_eq!(wizard.step(), Step::Contact);
        assert_eq!(wizard.checking_message(), None);
    }

    #[test]
    fn zero_delay_advances_inline() {
        let mut wizard = instant(QuizVariant::concrete_winter());
        assert_eq!(wizard.select_project_type("driveway"), Ok(Effect::None));
        assert_eq!(wizard.step(), Step::Timeline);
        wizard.select_timeline("this-month").unwrap();
        assert_eq!(wizard.step(), Step::Location);
    }

    #[test]
    fn selections_only_apply_on_their_step() {
        let mut wizard = instant(QuizVariant::concrete_winter());
        assert_eq!(wizard.select_timeline("asap"), Err(StepError::WrongStep(Step::ProjectType)));
        assert_eq!(wizard.select_project_type("roof"), Err(StepError::UnknownOption("project type")));
        assert_eq!(wizard.step(), Step::ProjectType);
    }

    #[test]
    fn short_zip_blocks_continue() {
        let mut wizard = instant(QuizVariant::concrete_winter());
        wizard.select_project_type("patio").unwrap();
        wizard.select_timeline("asap").unwrap();
        wizard.set_zip("802");
        assert!(!wizard.can_continue());
        assert_eq!(wizard.continue_from_location(), Err(StepError::ZipIncomplete));
        assert_eq!(wizard.step(), Step::Location);

        wizard.set_zip("80202");
        assert!(wizard.can_continue());
        assert_eq!(wizard.continue_from_location(), Ok(Effect::None));
        assert_eq!(wizard.step(), Step::Contact);
    }

    #[test]
    fn zip_outside_area_disqualifies_for_good() {
        let mut wizard = instant(QuizVariant::remodel_gated());
        to_contact(&mut wizard, "10001");
        assert_eq!(wizard.step(), Step::Disqualified(DisqualifyReason::OutsideServiceArea));

        assert!(!wizard.back());
        assert!(!wizard.set_zip("80202"));
        assert!(wizard.continue_from_location().is_err());
        assert!(!wizard.set_first_name("Ann"));
        assert!(!wizard.restart());
        assert_eq!(wizard.step(), Step::Disqualified(DisqualifyReason::OutsideServiceArea));
    }

    #[test]
    fn ungated_variant_accepts_any_zip() {
        let mut wizard = instant(QuizVariant::remodel_gated().with_service_area(None));
        to_contact(&mut wizard, "10001");
        assert_eq!(wizard.step(), Step::Contact);
    }

    #[test]
    fn checking_pause_rotates_then_lands_on_contact() {
        let mut wizard = Wizard::new(QuizVariant::remodel_gated().with_service_area(Some(ServiceArea::new(vec![80000..=80999]))));
        wizard.select_project_type("bathroom").unwrap();
        wizard.advance(wizard.epoch());
        wizard.select_timeline("asap").unwrap();
        wizard.advance(wizard.epoch());
        wizard.select_budget("under-15k").unwrap();
        wizard.advance(wizard.epoch());
        wizard.set_zip("80202");

        let effect = wizard.continue_from_location().unwrap();
        let Effect::Checking { epoch, duration_ms, rotate_every_ms } = effect else {
            panic!("expected checking, got {:?}", effect);
        };
        assert_eq!((duration_ms, rotate_every_ms), (8_000, 1_800));
        assert_eq!(wizard.step(), Step::Checking);
        assert!(!wizard.can_go_back());

        let first = wizard.checking_message();
        assert!(wizard.rotate_checking_message(epoch));
        assert_ne!(wizard.checking_message(), first);

        assert!(!wizard.finish_checking(epoch + 7));
        assert!(wizard.finish_checking(epoch));
        assert_eq!(wizard.step(), Step::Contact);
        assert!(!wizard.rotate_checking_message(epoch));
    }

    #[test]
    fn not_sure_then_decline_disqualifies() {
        let mut wizard = instant(QuizVariant::remodel_gated());
        wizard.select_project_type("kitchen").unwrap();
        wizard.select_timeline("not-sure").unwrap();
        assert_eq!(wizard.step(), Step::Clarification);

        wizard.decline_fallback_timeline().unwrap();
        assert_eq!(wizard.step(), Step::Disqualified(DisqualifyReason::TimelineDeclined));
        assert!(!wizard.can_go_back());
    }

    #[test]
    fn not_sure_then_accept_uses_fallback() {
        let mut wizard = instant(QuizVariant::remodel_gated().with_budgets(None));
        wizard.select_project_type("kitchen").unwrap();
        wizard.select_timeline("not-sure").unwrap();
        wizard.accept_fallback_timeline().unwrap();
        assert_eq!(wizard.answers().timeline.as_deref(), Some("1-3-months"));
        assert_eq!(wizard.step(), Step::Location);
    }

    #[test]
    fn accept_with_budget_goes_to_budget_first() {
        let mut wizard = instant(QuizVariant::remodel_gated());
        wizard.select_project_type("kitchen").unwrap();
        wizard.select_timeline("not-sure").unwrap();
        wizard.accept_fallback_timeline().unwrap();
        assert_eq!(wizard.step(), Step::Budget);
    }

    #[test]
    fn back_from_clarification_clears_timeline() {
        let mut wizard = instant(QuizVariant::remodel_gated());
        wizard.select_project_type("kitchen").unwrap();
        wizard.select_timeline("not-sure").unwrap();
        assert!(wizard.back());
        assert_eq!(wizard.step(), Step::Timeline);
        assert_eq!(wizard.answers().timeline, None);
        assert_eq!(wizard.answers().project_type.as_deref(), Some("kitchen"));
    }

    #[test]
    fn back_keeps_answers() {
        let mut wizard = instant(QuizVariant::concrete_winter());
        wizard.select_project_type("walkway").unwrap();
        wizard.select_timeline("asap").unwrap();
        wizard.set_zip("80202");
        wizard.continue_from_location().unwrap();

        assert!(wizard.back());
        assert_eq!(wizard.step(), Step::Location);
        assert!(wizard.back());
        assert_eq!(wizard.step(), Step::Timeline);
        assert!(wizard.back());
        assert_eq!(wizard.step(), Step::ProjectType);
        assert!(!wizard.back());

        let answers = wizard.answers();
        assert_eq!(answers.project_type.as_deref(), Some("walkway"));
        assert_eq!(answers.timeline.as_deref(), Some("asap"));
        assert_eq!(answers.zip_code, "80202");
    }

    #[test]
    fn back_walks_through_budget_when_configured() {
        let mut wizard = remodel_contact();
        assert!(wizard.back());
        assert_eq!(wizard.step(), Step::Location);
        assert!(wizard.back());
        assert_eq!(wizard.step(), Step::Budget);
    }

    #[test]
    fn invalid_submit_stays_on_contact() {
        let mut wizard = remodel_contact();
        let sink = RecordingSink::accepting();
        let tracker = Rc::new(CountingTracker::default());

        let result = wizard.submit(&ports(sink.clone(), tracker.clone()));
        assert!(matches!(result, Err(SubmitError::Invalid(ref errors)) if errors.len() == 3));
        assert_eq!(wizard.step(), Step::Contact);
        assert_eq!(wizard.errors().len(), 3);
        assert!(sink.posts.borrow().is_empty());
        assert_eq!(tracker.leads.get(), 0);
    }

    #[test]
    fn editing_clears_only_that_field() {
        let mut wizard = remodel_contact();
        let sink = RecordingSink::accepting();
        let _ = wizard.submit(&ports(sink, Rc::new(CountingTracker::default())));

        wizard.set_phone("555");
        assert!(!wizard.errors().contains_key(&Field::Phone));
        assert_eq!(wizard.errors().get(&Field::FirstName), Some(&FieldError::Required("Name")));
        assert_eq!(wizard.errors().get(&Field::Email), Some(&FieldError::Required("Email")));
    }

    #[test]
    fn valid_submit_commits_before_the_network() {
        let variant = QuizVariant::remodel_gated()
            .with_budgets(None)
            .with_email_rule(EmailRule::Required)
            .with_phone_rule(PhoneRule::LengthOnly);
        let mut wizard = instant(variant);
        to_contact(&mut wizard, "80202");
        wizard.set_first_name("Ann");
        wizard.set_phone("(555) 123-4567");
        wizard.set_email("ann@x.com");
        assert_eq!(wizard.answers().phone, "(555) 123-4567");

        let sink = RecordingSink::accepting();
        let tracker = Rc::new(CountingTracker::default());
        let delivery = wizard.submit(&ports(sink.clone(), tracker.clone())).unwrap();

        // nothing has been polled yet
        assert_eq!(wizard.step(), Step::Submitted);
        assert_eq!(tracker.leads.get(), 1);
        let posts = sink.posts.borrow();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].get("phone"), Some("5551234567"));
        assert_eq!(posts[0].get("zip_code"), Some("80202"));
        assert_eq!(posts[0].get("project_type"), Some("Kitchen"));
        drop(posts);

        futures::executor::block_on(delivery);
        assert_eq!(sink.posts.borrow().len(), 1);
    }

    #[test]
    fn webhook_failure_leaves_submitted_alone() {
        let mut wizard = instant(QuizVariant::concrete_winter());
        wizard.select_project_type("patio").unwrap();
        wizard.select_timeline("asap").unwrap();
        wizard.set_zip("80202");
        wizard.continue_from_location().unwrap();
        wizard.set_first_name("Ann");
        wizard.set_phone("5551234567");

        let sink = RecordingSink::failing(DeliveryError::Network("offline".to_string()));
        let delivery = wizard.submit(&ports(sink, Rc::new(CountingTracker::default()))).unwrap();
        futures::executor::block_on(delivery);

        assert_eq!(wizard.step(), Step::Submitted);
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn submitted_is_absorbing() {
        let mut wizard = remodel_contact();
        wizard.set_first_name("Ann");
        wizard.set_phone("3035551234");
        wizard.set_email("ann@x.com");
        let sink = RecordingSink::accepting();
        let tracker = Rc::new(CountingTracker::default());
        let _ = wizard.submit(&ports(sink.clone(), tracker.clone())).unwrap();

        let epoch = wizard.epoch();
        assert!(!wizard.back());
        assert!(!wizard.advance(epoch));
        assert!(wizard.select_project_type("kitchen").is_err());
        assert!(matches!(
            wizard.submit(&ports(sink.clone(), tracker)),
            Err(SubmitError::Step(StepError::WrongStep(Step::Submitted)))
        ));
        assert_eq!(wizard.step(), Step::Submitted);
        assert_eq!(sink.posts.borrow().len(), 1);
    }

    #[test]
    fn restart_clears_everything_when_allowed() {
        let mut wizard = instant(QuizVariant::concrete_winter());
        wizard.select_project_type("patio").unwrap();
        wizard.select_timeline("asap").unwrap();
        wizard.set_zip("80202");
        wizard.continue_from_location().unwrap();
        wizard.set_first_name("Ann");
        wizard.set_phone("5551234567");
        let _ = wizard
            .submit(&ports(RecordingSink::accepting(), Rc::new(CountingTracker::default())))
            .unwrap();

        assert!(wizard.restart());
        assert_eq!(wizard.step(), Step::ProjectType);
        assert_eq!(wizard.answers(), &QuizAnswers::default());
    }

    #[test]
    fn progress_tracks_ordinal_position() {
        let mut wizard = instant(QuizVariant::concrete_winter());
        assert_eq!(wizard.progress_percent(), 25);
        wizard.select_project_type("patio").unwrap();
        assert_eq!(wizard.progress_percent(), 50);
        wizard.select_timeline("asap").unwrap();
        assert_eq!(wizard.progress_percent(), 75);
        wizard.set_zip("80202");
        wizard.continue_from_location().unwrap();
        assert_eq!(wizard.progress_percent(), 100);
    }
}
