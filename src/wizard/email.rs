//! Email wizard: enter an address, receive a 4-digit code, verify it.

use crate::keyboard::{Key, KeyOutcome, OnScreenKeyboard};

pub const OTP_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailStep {
    EnterEmail,
    EnterCode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmailWizard {
    pub step: EmailStep,
    pub email: OnScreenKeyboard,
    pub code: OnScreenKeyboard,
    pub sending: bool,
    pub verifying: bool,
    pub error: Option<String>,
    /// Offer "Skip for Now" (onboarding only).
    pub show_skip: bool,
}

impl EmailWizard {
    pub fn new(show_skip: bool) -> Self {
        Self {
            step: EmailStep::EnterEmail,
            email: OnScreenKeyboard::text(),
            code: OnScreenKeyboard::numeric(OTP_LENGTH),
            sending: false,
            verifying: false,
            error: None,
            show_skip,
        }
    }

    fn active_keyboard(&mut self) -> &mut OnScreenKeyboard {
        match self.step {
            EmailStep::EnterEmail => &mut self.email,
            EmailStep::EnterCode => &mut self.code,
        }
    }

    pub fn press_key(&mut self, key: Key) -> KeyOutcome {
        let outcome = self.active_keyboard().press(key);
        if outcome == KeyOutcome::Edited {
            self.error = None;
        }
        outcome
    }

    pub fn type_text(&mut self, text: &str) {
        if self.active_keyboard().type_text(text) {
            self.error = None;
        }
    }

    pub fn send_disabled(&self) -> bool {
        self.sending || !self.email.value().trim().contains('@')
    }

    pub fn verify_disabled(&self) -> bool {
        self.verifying || self.code.value().chars().count() != OTP_LENGTH
    }

    /// Validate the address and mark a send in flight. Returns the
    /// normalized address to send the code to.
    pub fn begin_send(&mut self) -> Option<String> {
        let email = self.email.value().trim().to_lowercase();
        if email.is_empty() || !email.contains('@') {
            self.error = Some("Enter a valid email address.".to_string());
            return None;
        }
        if self.sending {
            return None;
        }
        self.sending = true;
        self.error = None;
        Some(email)
    }

    pub fn send_succeeded(&mut self, email: &str) {
        self.email.set_value(email);
        self.step = EmailStep::EnterCode;
        self.code.clear();
        self.sending = false;
    }

    pub fn send_failed(&mut self, message: String) {
        self.error = Some(message);
        self.sending = false;
    }

    /// Validate the code and mark verification in flight. Returns
    /// `(email, code)` to verify.
    pub fn begin_verify(&mut self) -> Option<(String, String)> {
        let code = self.code.value().trim().to_string();
        if code.chars().count() != OTP_LENGTH {
            self.error = Some("Enter the 4-digit code.".to_string());
            return None;
        }
        if self.verifying {
            return None;
        }
        self.verifying = true;
        self.error = None;
        Some((self.email.value().to_string(), code))
    }

    pub fn verify_failed(&mut self, message: String) {
        self.error = Some(message);
        self.verifying = false;
    }

    pub fn verify_finished(&mut self) {
        self.verifying = false;
    }

    pub fn back_to_email(&mut self) {
        self.step = EmailStep::EnterEmail;
        self.code.clear();
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_address_without_at() {
        let mut wizard = EmailWizard::new(true);
        wizard.type_text("alice.example.com");
        assert!(wizard.send_disabled());
        assert!(wizard.begin_send().is_none());
        assert_eq!(wizard.error.as_deref(), Some("Enter a valid email address."));

        wizard.type_text("@");
        assert!(wizard.error.is_none());
    }

    #[test]
    fn test_send_normalizes_address() {
        let mut wizard = EmailWizard::new(true);
        wizard.type_text("  Alice@Example.COM ");
        assert_eq!(wizard.begin_send().as_deref(), Some("alice@example.com"));
        assert!(wizard.sending);
        assert!(wizard.send_disabled());

        wizard.send_succeeded("alice@example.com");
        assert_eq!(wizard.step, EmailStep::EnterCode);
        assert_eq!(wizard.email.value(), "alice@example.com");
        assert!(!wizard.sending);
    }

    #[test]
    fn test_code_must_have_four_digits() {
        let mut wizard = EmailWizard::new(false);
        wizard.type_text("a@b.com");
        wizard.begin_send();
        wizard.send_succeeded("a@b.com");

        wizard.type_text("12");
        assert!(wizard.verify_disabled());
        assert!(wizard.begin_verify().is_none());
        assert_eq!(wizard.error.as_deref(), Some("Enter the 4-digit code."));

        wizard.type_text("3456");
        assert_eq!(wizard.code.value(), "1234");
        assert_eq!(
            wizard.begin_verify(),
            Some(("a@b.com".to_string(), "1234".to_string()))
        );
        assert!(wizard.verifying);
    }

    #[test]
    fn test_back_to_email_clears_code() {
        let mut wizard = EmailWizard::new(true);
        wizard.type_text("a@b.com");
        wizard.begin_send();
        wizard.send_succeeded("a@b.com");
        wizard.type_text("99");
        wizard.verify_failed("Incorrect code. Try again.".to_string());

        wizard.back_to_email();
        assert_eq!(wizard.step, EmailStep::EnterEmail);
        assert_eq!(wizard.code.value(), "");
        assert!(wizard.error.is_none());
        assert_eq!(wizard.email.value(), "a@b.com");
    }
}
