mod common;

use std::cell::Cell;
use std::rc::Rc;

use common::{client, signed_in_client, MockTransport};
use money_manager_frontend::api::{ApiClient, Method};
use money_manager_frontend::ledger::AccountDraft;
use money_manager_frontend::models::{AccountType, Credentials};
use money_manager_frontend::session::{KeyValueStore, MemoryStore, Session, TOKEN_KEY, USER_KEY};
use money_manager_frontend::ApiError;
use rust_decimal::Decimal;

#[tokio::test]
async fn attaches_bearer_token_from_session() {
    let (client, transport, _store) = signed_in_client("tok-42");
    transport.respond(Method::Get, "/accounts", 200, "[]");

    let accounts = client.list_accounts().await.unwrap();

    assert!(accounts.is_empty());
    let request = transport.last(Method::Get, "/accounts").unwrap();
    assert_eq!(request.bearer.as_deref(), Some("tok-42"));
    assert!(request.body.is_none());
}

#[tokio::test]
async fn anonymous_requests_carry_no_token() {
    let (client, transport, _store) = client();
    transport.respond(Method::Get, "/accounts", 200, "[]");

    client.list_accounts().await.unwrap();

    assert_eq!(transport.last(Method::Get, "/accounts").unwrap().bearer, None);
}

#[tokio::test]
async fn unauthorized_clears_session_and_fires_hook() {
    let transport = MockTransport::new();
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, "stale");
    store.set(USER_KEY, r#"{"_id":"u1","name":"Asha","email":"asha@example.com"}"#);
    let fired = Rc::new(Cell::new(0));
    let client = {
        let fired = fired.clone();
        ApiClient::new(transport.clone(), Session::new(store.clone()))
            .with_unauthorized_hook(move || fired.set(fired.get() + 1))
    };
    transport.respond(Method::Get, "/auth/me", 401, r#"{"message":"jwt expired"}"#);

    let err = client.me().await.unwrap_err();

    assert_eq!(err, ApiError::Unauthorized);
    assert_eq!(err.notification("Something failed"), None);
    assert_eq!(fired.get(), 1);
    assert!(store.is_empty());
    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn login_persists_token_and_profile() {
    let (client, transport, store) = client();
    transport.respond(
        Method::Post,
        "/auth/login",
        200,
        r#"{"_id":"u1","name":"Asha","email":"asha@example.com","token":"tok-1"}"#,
    );

    let auth = client
        .login(&Credentials {
            email: "asha@example.com".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();

    assert_eq!(auth.token, "tok-1");
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("tok-1"));
    assert_eq!(client.session().user().map(|u| u.name), Some("Asha".to_string()));

    let request = transport.last(Method::Post, "/auth/login").unwrap();
    let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["email"], "asha@example.com");
    assert_eq!(body["password"], "secret");
}

#[tokio::test]
async fn logout_only_clears_local_state() {
    let (client, transport, store) = signed_in_client("tok-1");

    client.logout();

    assert!(store.is_empty());
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn backend_message_surfaces_on_rejection() {
    let (client, transport, _store) = client();
    transport.respond(
        Method::Post,
        "/auth/login",
        400,
        r#"{"message":"Invalid credentials"}"#,
    );

    let err = client
        .login(&Credentials {
            email: "asha@example.com".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::Rejected {
            status: 400,
            message: Some("Invalid credentials".into()),
        }
    );
    assert_eq!(err.notification("Login failed").as_deref(), Some("Invalid credentials"));
}

#[tokio::test]
async fn rejection_without_message_uses_fallback() {
    let (client, transport, _store) = signed_in_client("tok-1");
    transport.respond(Method::Delete, "/transactions/t9", 500, "<html>oops</html>");

    let err = client.delete_transaction("t9").await.unwrap_err();

    assert_eq!(err.notification("Delete failed").as_deref(), Some("Delete failed"));
}

#[tokio::test]
async fn created_account_shows_up_in_listing() {
    let (client, transport, _store) = signed_in_client("tok-1");
    transport.respond(Method::Post, "/accounts", 201, r#"{"_id":"a7"}"#);
    transport.respond(
        Method::Get,
        "/accounts",
        200,
        r#"[{"_id":"a7","name":"Cash Wallet","type":"cash","balance":500}]"#,
    );

    let account = AccountDraft {
        name: "Cash Wallet".into(),
        balance: "500".into(),
        kind: AccountType::Cash,
    }
    .validate()
    .unwrap();
    client.create_account(&account).await.unwrap();
    let accounts = client.list_accounts().await.unwrap();

    let sent = transport.last(Method::Post, "/accounts").unwrap();
    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["name"], "Cash Wallet");
    assert_eq!(body["type"], "cash");

    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].kind, AccountType::Cash);
    assert_eq!(accounts[0].balance, Decimal::new(500, 0));
}

#[tokio::test]
async fn account_update_and_delete_target_the_account_path() {
    let (client, transport, _store) = signed_in_client("tok-1");
    transport.respond(Method::Put, "/accounts/a1", 200, "{}");
    transport.respond(Method::Delete, "/accounts/a1", 200, "{}");

    let renamed = AccountDraft {
        name: "Salary Account".into(),
        balance: "0".into(),
        kind: AccountType::Savings,
    }
    .validate()
    .unwrap();
    client.update_account("a1", &renamed).await.unwrap();
    client.delete_account("a1").await.unwrap();

    assert_eq!(transport.count(Method::Put, "/accounts/a1"), 1);
    assert_eq!(transport.count(Method::Delete, "/accounts/a1"), 1);
    let put = transport.last(Method::Put, "/accounts/a1").unwrap();
    assert!(put.body.unwrap().contains(r#""type":"savings""#));
}

#[tokio::test]
async fn forgot_password_tolerates_a_non_json_body() {
    let (client, transport, _store) = client();
    transport.respond(Method::Post, "/auth/forgot-password", 200, "ok");

    let response = client.forgot_password(" asha@example.com ").await.unwrap();

    assert_eq!(response.token, None);
    let request = transport.last(Method::Post, "/auth/forgot-password").unwrap();
    assert_eq!(request.body.as_deref(), Some(r#"{"email":"asha@example.com"}"#));
}

#[tokio::test]
async fn undecodable_success_body_is_a_decode_error() {
    let (client, transport, _store) = signed_in_client("tok-1");
    transport.respond(Method::Get, "/transactions/summary", 200, "not json");

    let window = money_manager_frontend::filters::ReportWindow::Period(
        money_manager_frontend::filters::Period::Monthly,
    );
    let err = client.summary(&window).await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
    let request = transport.last(Method::Get, "/transactions/summary").unwrap();
    assert_eq!(request.query, vec![("period".to_string(), "monthly".to_string())]);
}
