use crate::domain::validation::entities;
use crate::domain::validation::errors::ValidationFailure;
use crate::domain::validation::rules::RuleSet;

/// Stateful accumulator of validation failures for one entity's field set.
///
/// Starts valid with no errors; every failed check appends a message and
/// flips validity. `is_valid` and `errors` are plain reads with no side
/// effects; clearing state is only ever done through the explicit `reset`.
///
/// Not safe for concurrent reuse: use a fresh instance per validation pass.
pub struct Validator {
    rule_set: &'static RuleSet,
    valid: bool,
    errors: Vec<String>,
}

impl Validator {
    pub fn new(rule_set: &'static RuleSet) -> Self {
        Self {
            rule_set,
            valid: true,
            errors: Vec::new(),
        }
    }

    pub fn for_user() -> Self {
        Self::new(entities::user_rules())
    }

    pub fn for_lead() -> Self {
        Self::new(entities::lead_rules())
    }

    pub fn for_board() -> Self {
        Self::new(entities::board_rules())
    }

    pub fn for_email() -> Self {
        Self::new(entities::email_rules())
    }

    /// Evaluate a field's rules in declaration order, recording the first
    /// failure only. Fields without rules in this set are ignored.
    pub fn check(&mut self, field: &str, value: &str) {
        for rule in self.rule_set.rules_for(field) {
            if !(rule.check)(value) {
                self.errors.push(rule.message.to_string());
                self.valid = false;
                return;
            }
        }
    }

    /// Evaluate a generic key-value record against the rule set.
    pub fn validate_record<'a>(&mut self, record: impl IntoIterator<Item = (&'a str, &'a str)>) {
        for (field, value) in record {
            self.check(field, value);
        }
    }

    pub fn validate_id(&mut self, id: &str) {
        self.check("id", id);
    }

    /// Validate a bulk ID list: the list must be non-empty and every
    /// element a structurally valid key. Unlike single-field checks this
    /// reports every offending element.
    pub fn validate_id_list<S: AsRef<str>>(&mut self, ids: &[S]) {
        if ids.is_empty() {
            self.errors.push("The list of Ids cannot be empty".to_string());
            self.valid = false;
            return;
        }
        for id in ids {
            let id = id.as_ref();
            if !super::rules::is_valid_object_id(id) {
                self.errors.push(format!("The Id '{}' is not valid", id));
                self.valid = false;
            }
        }
    }

    pub fn validate_name(&mut self, name: &str) {
        self.check("name", name);
    }

    pub fn validate_lastname(&mut self, lastname: &str) {
        self.check("lastname", lastname);
    }

    pub fn validate_email(&mut self, email: &str) {
        self.check("email", email);
    }

    pub fn validate_password(&mut self, password: &str) {
        self.check("password", password);
    }

    pub fn validate_role(&mut self, role: &str) {
        self.check("role", role);
    }

    pub fn validate_status(&mut self, status: &str) {
        self.check("status", status);
    }

    pub fn validate_date(&mut self, date: &str) {
        self.check("date", date);
    }

    pub fn validate_future_date(&mut self, date: &str) {
        self.check("future_date", date);
    }

    pub fn validate_description(&mut self, description: &str) {
        self.check("description", description);
    }

    pub fn validate_phone(&mut self, phone: &str) {
        self.check("phone", phone);
    }

    pub fn validate_recipient(&mut self, recipient: &str) {
        self.check("recipient", recipient);
    }

    pub fn validate_subject(&mut self, subject: &str) {
        self.check("subject", subject);
    }

    pub fn validate_body(&mut self, body: &str) {
        self.check("body", body);
    }

    pub fn validate_attachment(&mut self, attachment: &str) {
        self.check("attachment", attachment);
    }

    /// True while no check has failed since construction or the last reset.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Accumulated messages in check order. Non-mutating.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Clear all state: valid again, no errors.
    pub fn reset(&mut self) {
        self.valid = true;
        self.errors.clear();
    }

    /// The accumulated failure, if any check failed.
    pub fn failure(&self) -> Option<ValidationFailure> {
        if self.valid {
            None
        } else {
            Some(ValidationFailure {
                messages: self.errors.clone(),
            })
        }
    }
}
