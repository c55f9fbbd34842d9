//! Email OTP wizard view.

use super::{Action, KeyboardView, View};
use crate::app::Intent;
use crate::keyboard::Key;
use crate::wizard::{EmailStep, EmailWizard};

pub fn render(wizard: &EmailWizard) -> View {
    let subtitle = match wizard.step {
        EmailStep::EnterEmail => "Enter your email",
        EmailStep::EnterCode => "Enter verification code",
    };

    let mut view = View::new("Email Setup").subtitle(subtitle).line(
        "SafeScribe sends meeting notes to your inbox. Enter your email and we'll send a 4-digit code to verify it.",
    );

    match wizard.step {
        EmailStep::EnterEmail => {
            let label = if wizard.sending { "Sending..." } else { "Send Code" };
            let disabled = wizard.send_disabled();
            view = view
                .keyboard(KeyboardView::new(&wizard.email, label, disabled))
                .action(Action::new(label, Intent::Key(Key::Submit)).enabled(!disabled));
            if wizard.show_skip {
                view = view.action(Action::new("Skip for Now", Intent::SkipEmail));
            }
        }
        EmailStep::EnterCode => {
            let label = if wizard.verifying { "Verifying..." } else { "Verify" };
            let disabled = wizard.verify_disabled();
            view = view
                .line(format!("We sent a 4-digit code to {}", wizard.email.value()))
                .line("Check spam or quarantine folders if you don't see it.")
                .keyboard(KeyboardView::new(&wizard.code, label, disabled))
                .action(Action::new(label, Intent::Key(Key::Submit)).enabled(!disabled))
                .action(Action::new("Resend code", Intent::ResendCode).enabled(!wizard.sending))
                .action(Action::new("← Use a different email", Intent::UseDifferentEmail));
        }
    }

    if let Some(error) = &wizard.error {
        view = view.line(error.clone());
    }
    if !wizard.show_skip {
        view = view.action(Action::new("Back", Intent::Back));
    }

    view.line("Your email stays on this device. Notes are only sent to your inbox.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_disabled_until_address_has_at() {
        let mut wizard = EmailWizard::new(true);
        wizard.type_text("bob");
        let view = render(&wizard);
        assert!(!view.keyboard.as_ref().unwrap().submit_enabled);
        assert!(!view.actions[0].enabled);
        assert_eq!(view.actions[1].intent, Intent::SkipEmail);

        wizard.type_text("@x.io");
        let view = render(&wizard);
        assert!(view.keyboard.unwrap().submit_enabled);
    }

    #[test]
    fn test_code_step() {
        let mut wizard = EmailWizard::new(false);
        wizard.type_text("a@b.com");
        wizard.begin_send();
        wizard.send_succeeded("a@b.com");

        let view = render(&wizard);
        assert_eq!(view.subtitle.as_deref(), Some("Enter verification code"));
        assert_eq!(view.keyboard.as_ref().unwrap().display, "····");
        assert!(view.lines.contains(&"We sent a 4-digit code to a@b.com".to_string()));
        assert!(view.actions.iter().any(|a| a.intent == Intent::Back));
        assert!(view.actions.iter().all(|a| a.intent != Intent::SkipEmail));
    }
}
