//! Multi-step sub-flows shared by onboarding and the settings screen.

pub mod email;
pub mod wifi;

pub use email::{EmailStep, EmailWizard, OTP_LENGTH};
pub use wifi::{WifiStep, WifiWizard};
