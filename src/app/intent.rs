//! User intents consumed by the state machine.

use crate::keyboard::Key;

/// Everything a screen can ask the state machine to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    // Onboarding
    GetStarted,
    SkipEmail,

    // WiFi wizard
    RefreshNetworks,
    SelectNetwork(String),
    ContinueWithNetwork,
    ConnectNetwork,

    // Email wizard
    SendCode,
    ResendCode,
    VerifyCode,
    UseDifferentEmail,

    // On-screen keyboard of the active wizard step
    Key(Key),
    TypeText(String),

    // Recording
    StartRecording,
    StopRecording,
    PauseRecording,
    ResumeRecording,

    // Meetings
    OpenPastMeetings,
    OpenMeeting(String),
    DeleteMeeting(String),
    EmailMeeting(String),
    GotIt,

    // Settings
    OpenSettings,
    OpenWifiSettings,
    OpenEmailSettings,
    RunSetupAgain,
    FactoryReset,

    // Modals
    Confirm,
    Cancel,
    DismissError,

    Back,
    /// Screen timer fired.
    Tick,
    Quit,
}
