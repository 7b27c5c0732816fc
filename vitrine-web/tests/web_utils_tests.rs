use vitrine_web::a11y;
use vitrine_web::storage::WebStorageError;

#[test]
fn site_css_covers_transition_and_screen_reader_rules() {
    let css = a11y::site_css();
    assert!(css.contains(".theme-transitioning *"));
    assert!(css.contains(".sr-only"));
    assert!(css.contains("prefers-reduced-motion"));
}

#[test]
fn storage_errors_render_their_cause() {
    let err = WebStorageError::Unavailable("SecurityError".to_string());
    assert_eq!(err.to_string(), "localStorage unavailable: SecurityError");
    let err = WebStorageError::Storage("QuotaExceededError".to_string());
    assert!(err.to_string().contains("QuotaExceededError"));
}
