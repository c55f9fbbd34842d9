//! Shown while the backend turns a stopped recording into notes.

use super::View;

pub fn render() -> View {
    View::new("Processing Meeting...")
        .line("Generating your AI-powered meeting notes with summaries, action items, and key decisions")
        .line("✓ Audio saved")
        .line("✓ Transcription complete")
        .line("… Analyzing content with AI...")
        .line("  Generating PDF")
}
