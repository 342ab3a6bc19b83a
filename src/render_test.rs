use super::*;

const FLAG: &str = "FLAG{render}";

#[test]
fn privileged_fragment_reveals_flag() {
    let html = render_fragment(&LoginView::Privileged, FLAG);
    assert_eq!(html, r#"<div class="message">FLAG{render}</div>"#);
}

#[test]
fn member_fragment_echoes_username() {
    let html = render_fragment(&LoginView::Member("alice".into()), FLAG);
    assert_eq!(html, r#"<div class="message">alice</div>"#);
    assert!(!html.contains(FLAG));
}

#[test]
fn member_fragment_is_not_escaped() {
    let html = render_fragment(&LoginView::Member("<b>bob</b>".into()), FLAG);
    assert!(html.contains("<b>bob</b>"));
}

#[test]
fn anonymous_fragment_has_both_forms() {
    let html = render_fragment(&LoginView::Anonymous, FLAG);
    assert_eq!(html.matches("<form").count(), 2);
    assert!(html.contains(r#"name="register""#));
    assert!(html.contains(r#"name="login""#));
    assert_eq!(html.matches(r#"name="username""#).count(), 2);
    assert_eq!(html.matches(r#"name="password""#).count(), 2);
    assert!(!html.contains(FLAG));
}

#[test]
fn page_wraps_fragment_in_document() {
    let html = render_page(&LoginView::Member("carol".into()), FLAG);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>JUST LOGIN</title>"));
    assert!(html.contains(r#"<div class="message">carol</div>"#));
    assert!(!html.contains("<form"));
}

#[test]
fn page_views_are_mutually_exclusive() {
    let privileged = render_page(&LoginView::Privileged, FLAG);
    assert!(privileged.contains(FLAG));
    assert!(!privileged.contains("<form"));

    let anonymous = render_page(&LoginView::Anonymous, FLAG);
    assert!(!anonymous.contains(FLAG));
    assert!(!anonymous.contains(r#"class="message""#));
}
