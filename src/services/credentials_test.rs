use super::*;
use crate::state::test_helpers::{seed_accounts, stored_accounts, test_app_state};

// =============================================================================
// login_predicate / lookup_query
// =============================================================================

#[test]
fn login_predicate_interpolates_verbatim() {
    assert_eq!(login_predicate("alice", "p@ss"), "username='alice' AND password='p@ss'");
}

#[test]
fn login_predicate_does_not_escape_quotes() {
    let predicate = login_predicate("' OR 1=1 --", "x");
    assert_eq!(predicate, "username='' OR 1=1 --' AND password='x'");
}

#[test]
fn lookup_query_selects_username_limit_one() {
    assert_eq!(
        lookup_query("alice", "p@ss"),
        "SELECT username FROM users WHERE username='alice' AND password='p@ss' LIMIT 1"
    );
}

// =============================================================================
// Resolution / LoginView
// =============================================================================

#[test]
fn resolution_admin_is_privileged() {
    assert!(Resolution::Resolved("admin".into()).is_privileged());
    assert!(!Resolution::Resolved("Admin".into()).is_privileged());
    assert!(!Resolution::Anonymous.is_privileged());
}

#[test]
fn login_view_from_resolution() {
    assert_eq!(LoginView::from(Resolution::Resolved("admin".into())), LoginView::Privileged);
    assert_eq!(LoginView::from(Resolution::Resolved("alice".into())), LoginView::Member("alice".into()));
    assert_eq!(LoginView::from(Resolution::Anonymous), LoginView::Anonymous);
}

#[test]
fn login_view_admin_with_whitespace_is_member() {
    assert_eq!(LoginView::from(Resolution::Resolved("admin ".into())), LoginView::Member("admin ".into()));
}

#[test]
fn gateway_error_display_mentions_query() {
    let err = GatewayError::Query(sqlx::Error::RowNotFound);
    assert!(err.to_string().starts_with("query failed"));
}

// =============================================================================
// register
// =============================================================================

#[tokio::test]
async fn register_stores_fields_verbatim() {
    let state = test_app_state().await;
    register(&state.pool, "alice", "p@ss").await.unwrap();
    register(&state.pool, "  o'brien ", "").await.unwrap();

    assert_eq!(
        stored_accounts(&state).await,
        vec![("alice".to_owned(), "p@ss".to_owned()), ("  o'brien ".to_owned(), String::new())]
    );
}

#[tokio::test]
async fn register_duplicate_username_keeps_both_rows() {
    let state = test_app_state().await;
    seed_accounts(&state, &[("bob", "one"), ("bob", "two")]).await;

    let rows = stored_accounts(&state).await;
    assert_eq!(rows.len(), 2);
    assert_eq!(resolve(&state.pool, "bob", "one").await.unwrap(), Resolution::Resolved("bob".into()));
    assert_eq!(resolve(&state.pool, "bob", "two").await.unwrap(), Resolution::Resolved("bob".into()));
}

// =============================================================================
// resolve: literal matches
// =============================================================================

#[tokio::test]
async fn resolve_exact_match_returns_username() {
    let state = test_app_state().await;
    seed_accounts(&state, &[("alice", "p@ss")]).await;

    let resolution = resolve(&state.pool, "alice", "p@ss").await.unwrap();
    assert_eq!(resolution, Resolution::Resolved("alice".into()));
    assert_eq!(LoginView::from(resolution), LoginView::Member("alice".into()));
}

#[tokio::test]
async fn resolve_wrong_password_is_anonymous() {
    let state = test_app_state().await;
    seed_accounts(&state, &[("alice", "p@ss")]).await;

    assert_eq!(resolve(&state.pool, "alice", "wrong").await.unwrap(), Resolution::Anonymous);
}

#[tokio::test]
async fn resolve_unknown_user_is_anonymous() {
    let state = test_app_state().await;
    assert_eq!(resolve(&state.pool, "nobody", "x").await.unwrap(), Resolution::Anonymous);
}

#[tokio::test]
async fn resolve_admin_with_real_password_is_privileged() {
    let state = test_app_state().await;
    seed_accounts(&state, &[("admin", "secret123")]).await;

    let resolution = resolve(&state.pool, "admin", "secret123").await.unwrap();
    assert_eq!(LoginView::from(resolution), LoginView::Privileged);
    assert_eq!(resolve(&state.pool, "admin", "wrong").await.unwrap(), Resolution::Anonymous);
}

// =============================================================================
// resolve: predicate injection
// =============================================================================

#[tokio::test]
async fn resolve_tautology_in_username_returns_first_row() {
    let state = test_app_state().await;
    seed_accounts(&state, &[("admin", "secret123"), ("alice", "p@ss")]).await;

    let resolution = resolve(&state.pool, "' OR 1=1 --", "anything").await.unwrap();
    assert_eq!(resolution, Resolution::Resolved("admin".into()));
    assert_eq!(LoginView::from(resolution), LoginView::Privileged);
}

#[tokio::test]
async fn resolve_tautology_first_row_not_admin_is_member() {
    let state = test_app_state().await;
    seed_accounts(&state, &[("alice", "p@ss"), ("admin", "secret123")]).await;

    let resolution = resolve(&state.pool, "' OR 1=1 --", "").await.unwrap();
    assert_eq!(LoginView::from(resolution), LoginView::Member("alice".into()));
}

#[tokio::test]
async fn resolve_comment_out_password_check() {
    let state = test_app_state().await;
    seed_accounts(&state, &[("alice", "p@ss"), ("admin", "secret123")]).await;

    let resolution = resolve(&state.pool, "admin' --", "not-the-password").await.unwrap();
    assert_eq!(resolution, Resolution::Resolved("admin".into()));
}

#[tokio::test]
async fn resolve_tautology_in_password_field() {
    let state = test_app_state().await;
    seed_accounts(&state, &[("admin", "secret123")]).await;

    let resolution = resolve(&state.pool, "admin", "' OR '1'='1").await.unwrap();
    assert_eq!(resolution, Resolution::Resolved("admin".into()));
}

#[tokio::test]
async fn resolve_union_select_fabricates_identity() {
    let state = test_app_state().await;

    let resolution = resolve(&state.pool, "' UNION SELECT 'admin' --", "").await.unwrap();
    assert_eq!(resolution, Resolution::Resolved("admin".into()));
}

#[tokio::test]
async fn resolve_tautology_on_empty_store_is_anonymous() {
    let state = test_app_state().await;
    assert_eq!(resolve(&state.pool, "' OR 1=1 --", "").await.unwrap(), Resolution::Anonymous);
}

#[tokio::test]
async fn resolve_unbalanced_quote_is_query_error() {
    let state = test_app_state().await;
    seed_accounts(&state, &[("alice", "p@ss")]).await;

    let err = resolve(&state.pool, "'", "x").await.unwrap_err();
    assert!(matches!(err, GatewayError::Query(_)));
}

#[tokio::test]
async fn resolve_union_null_is_anonymous() {
    let state = test_app_state().await;
    seed_accounts(&state, &[("alice", "p@ss")]).await;

    let resolution = resolve(&state.pool, "' UNION SELECT NULL --", "").await.unwrap();
    assert_eq!(resolution, Resolution::Anonymous);
    assert_eq!(LoginView::from(resolution), LoginView::Anonymous);
}

#[tokio::test]
async fn resolve_union_integer_is_coerced_to_text() {
    let state = test_app_state().await;

    let resolution = resolve(&state.pool, "' UNION SELECT 1 --", "").await.unwrap();
    assert_eq!(resolution, Resolution::Resolved("1".into()));
    assert_eq!(LoginView::from(resolution), LoginView::Member("1".into()));
}

#[tokio::test]
async fn resolve_hash_comment_is_query_error() {
    let state = test_app_state().await;
    seed_accounts(&state, &[("admin", "secret123")]).await;

    // SQLite has no `#` comments; only `--` cuts off the password check.
    let err = resolve(&state.pool, "admin'#", "").await.unwrap_err();
    assert!(matches!(err, GatewayError::Query(_)));
}
