use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use log::{debug, info};

use crate::config::BehaviorConfig;
use crate::page::{Display, EventHandle, EventKind, Page, PageError, Target};
use crate::scheduler::Scheduler;
use crate::validation::Field;

pub const ERROR_CLASS: &str = "error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    /// Terminal; the success panel stays up for the rest of the page's life.
    Submitted,
}

struct FieldBinding<E> {
    field: Field,
    input: E,
    error: E,
}

/// Inline validation and simulated submission of the contact form.
pub struct ContactForm<P: Page, S: Scheduler> {
    page: P,
    scheduler: S,
    form: P::Element,
    fields: Vec<FieldBinding<P::Element>>,
    consent: P::Element,
    consent_error: P::Element,
    submit: P::Element,
    wrapper: P::Element,
    success: P::Element,
    submit_delay: Duration,
    loading_label: &'static str,
    state: Cell<SubmissionState>,
}

impl<P: Page, S: Scheduler> ContactForm<P, S> {
    pub fn new(page: P, scheduler: S, config: &BehaviorConfig) -> Result<Self, PageError> {
        let ids = &config.ids;
        let fields = Field::ALL
            .into_iter()
            .map(|field| -> Result<FieldBinding<P::Element>, PageError> {
                let (input, error) = match field {
                    Field::Name => (ids.name, ids.name_error),
                    Field::Email => (ids.email, ids.email_error),
                    Field::Phone => (ids.phone, ids.phone_error),
                    Field::Message => (ids.message, ids.message_error),
                };
                Ok(FieldBinding {
                    field,
                    input: page.element(input)?,
                    error: page.element(error)?,
                })
            })
            .collect::<Result<Vec<_>, PageError>>()?;

        Ok(Self {
            form: page.element(ids.form)?,
            consent: page.element(ids.consent)?,
            consent_error: page.element(ids.consent_error)?,
            submit: page.element(ids.submit)?,
            wrapper: page.element(ids.form_wrapper)?,
            success: page.element(ids.form_success)?,
            fields,
            page,
            scheduler,
            submit_delay: config.submit_delay,
            loading_label: config.loading_label,
            state: Cell::new(SubmissionState::Idle),
        })
    }

    pub fn state(&self) -> SubmissionState {
        self.state.get()
    }

    fn show_error(&self, binding: &FieldBinding<P::Element>, show: bool) {
        self.page.set_class(&binding.input, ERROR_CLASS, show);
        self.page.set_display(&binding.error, Display::shown(show));
        self.page
            .set_attribute(&binding.input, "aria-invalid", if show { "true" } else { "false" });
    }

    fn validate_field(&self, binding: &FieldBinding<P::Element>) -> bool {
        let valid = binding.field.is_valid(&self.page.value(&binding.input));
        self.show_error(binding, !valid);
        valid
    }

    fn validate_consent(&self) -> bool {
        let checked = self.page.is_checked(&self.consent);
        self.page.set_display(&self.consent_error, Display::shown(!checked));
        checked
    }

    /// Re-validates a single field, as on blur.
    pub fn validate(&self, field: Field) -> bool {
        self.fields
            .iter()
            .find(|binding| binding.field == field)
            .map_or(true, |binding| self.validate_field(binding))
    }

    /// Runs the submit sequence; the caller has already suppressed the
    /// native submission.
    pub fn submit(self: &Rc<Self>) {
        if self.state.get() != SubmissionState::Idle {
            debug!("Ignoring submit while {:?}", self.state.get());
            return;
        }

        // every indicator is refreshed, so no short-circuiting here
        let fields_valid = self
            .fields
            .iter()
            .map(|binding| self.validate_field(binding))
            .fold(true, |all, valid| all && valid);
        let consent_given = self.validate_consent();

        if !(fields_valid && consent_given) {
            if let Some(first) = self
                .fields
                .iter()
                .find(|binding| self.page.has_class(&binding.input, ERROR_CLASS))
            {
                self.page.focus(&first.input);
            }
            debug!("Contact form rejected (fields valid: {}, consent: {})", fields_valid, consent_given);
            return;
        }

        info!("Contact form valid, submitting");
        self.state.set(SubmissionState::Submitting);
        self.page.set_disabled(&self.submit, true);
        self.page.set_text(&self.submit, self.loading_label);

        let form = Rc::clone(self);
        self.scheduler
            .schedule(self.submit_delay, Box::new(move || form.finish()));
    }

    fn finish(&self) {
        self.page.set_display(&self.wrapper, Display::Hidden);
        self.page.set_display(&self.success, Display::Block);
        self.page.scroll_into_view_centered(&self.success);
        self.state.set(SubmissionState::Submitted);
        info!("Contact form submitted");
    }

    pub fn attach(self) -> Rc<Self> {
        let form = Rc::new(self);

        for binding in &form.fields {
            let validator = form.clone();
            let field = binding.field;
            form.page.listen(
                Target::Element(&binding.input),
                EventKind::Blur,
                Box::new(move |_: &dyn EventHandle| {
                    validator.validate(field);
                }),
            );
        }

        {
            let submitter = form.clone();
            form.page.listen(
                Target::Element(&form.form),
                EventKind::Submit,
                Box::new(move |event: &dyn EventHandle| {
                    event.prevent_default();
                    submitter.submit();
                }),
            );
        }

        form
    }
}
