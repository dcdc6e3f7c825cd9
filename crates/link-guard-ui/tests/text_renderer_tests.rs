//! Integration tests for terminal rendering.

mod common;

use common::{full_model, minimal_model};
use link_guard_ui::{PresentationSink, TextRenderer, apply_presentation};

#[test]
fn text_renderer_tests_full_model_lists_every_section() {
    let mut renderer = TextRenderer::new();
    apply_presentation(&full_model(), &mut renderer);
    let text = renderer.text();

    assert!(text.starts_with("⚠️ Phishing Detected\n"));
    assert!(text.contains("Risk Level: High\n"));
    assert!(text.contains("Confidence: 88.4%\n"));
    assert!(text.contains("Legitimate: 11.6%  Phishing: 88.4%\n"));
    assert!(text.contains("Risk Score: 72/100\n"));
    assert!(text.contains("Analyzed URL: http://paypa1-login.example\n"));
    assert!(text.contains("  HTTPS: No\n"));
    assert!(text.contains("Prediction: Phishing\n"));
    assert!(text.contains("Why:\n  1. Domain resembles a known brand\n  2. Form posts to another host\n"));
    assert!(text.contains("SSL Certificate:\n"));
    assert!(text.contains("  [critical] External Form Submission: Critical\n"));
    assert!(text.contains("  [negative] Typosquatting Risk: High Risk\n"));
}

#[test]
fn text_renderer_tests_minimal_model_omits_optional_lines() {
    let mut renderer = TextRenderer::new();
    apply_presentation(&minimal_model(), &mut renderer);
    let text = renderer.text();

    assert!(text.starts_with("✅ Legitimate Website\n"));
    assert!(!text.contains("Risk Level"));
    assert!(!text.contains("Why:"));
    assert!(!text.contains("Prediction:"));
    assert!(!text.contains("SSL Certificate"));
}

#[test]
fn text_renderer_tests_error_replaces_hidden_result() {
    let mut renderer = TextRenderer::new();
    apply_presentation(&minimal_model(), &mut renderer);

    renderer.hide_result();
    renderer.show_error("Error: transport failure");

    assert_eq!(renderer.text(), "Error: transport failure\n");
}
