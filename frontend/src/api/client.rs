//! Resource-oriented wrapper over the REST API.
//!
//! Every call carries the stored bearer token. A 401 from any endpoint wipes
//! the session and fires the unauthorized hook before the error reaches the
//! caller. Calls are fire-once: no retry, no caching.

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::transport::{ApiRequest, ApiResponse, GlooTransport, Method, Transport};
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::filters::{ReportWindow, TransactionQuery};
use crate::models::{
    Account, AuthResponse, CategoryTotal, Credentials, ForgotPasswordResponse, NewAccount,
    PasswordReset, Registration, Summary, Transaction, TransactionPayload, User,
};
use crate::session::{KeyValueStore, LocalStorage, Session};

pub type BrowserClient = ApiClient<GlooTransport, LocalStorage>;

type Query = Vec<(String, String)>;

pub struct ApiClient<T, S> {
    transport: T,
    session: Session<S>,
    on_unauthorized: Option<Rc<dyn Fn()>>,
}

impl BrowserClient {
    pub fn browser(config: &AppConfig) -> Self {
        ApiClient::new(
            GlooTransport::new(config.clone()),
            Session::new(LocalStorage),
        )
    }
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub fn new(transport: T, session: Session<S>) -> Self {
        Self {
            transport,
            session,
            on_unauthorized: None,
        }
    }

    /// Runs after the session is cleared on a 401.
    pub fn with_unauthorized_hook(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_unauthorized = Some(Rc::new(hook));
        self
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn execute(
        &self,
        method: Method,
        path: String,
        query: Query,
        body: Option<String>,
    ) -> Result<String, ApiError> {
        tracing::debug!(method = method.as_str(), path = %path, "sending request");
        let request = ApiRequest {
            method,
            path,
            query,
            body,
            bearer: self.session.token(),
        };
        let path = request.path.clone();

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(method = method.as_str(), path = %path, error = %err, "request failed");
                return Err(err);
            }
        };
        self.check(method, &path, response)
    }

    fn check(&self, method: Method, path: &str, response: ApiResponse) -> Result<String, ApiError> {
        if response.status == 401 {
            tracing::info!(path, "session rejected, returning to login");
            self.session.clear();
            if let Some(hook) = &self.on_unauthorized {
                hook();
            }
            return Err(ApiError::Unauthorized);
        }
        if !response.is_success() {
            let message = backend_message(&response.body);
            tracing::warn!(
                method = method.as_str(),
                path,
                status = response.status,
                message = message.as_deref().unwrap_or(""),
                "request rejected"
            );
            return Err(ApiError::Rejected {
                status: response.status,
                message,
            });
        }
        Ok(response.body)
    }

    async fn get<R: DeserializeOwned>(&self, path: impl Into<String>, query: Query) -> Result<R, ApiError> {
        let body = self.execute(Method::Get, path.into(), query, None).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn send_json<B: Serialize>(
        &self,
        method: Method,
        path: impl Into<String>,
        payload: &B,
    ) -> Result<String, ApiError> {
        let body = serde_json::to_string(payload)?;
        self.execute(method, path.into(), Vec::new(), Some(body)).await
    }

    pub async fn register(&self, registration: &Registration) -> Result<AuthResponse, ApiError> {
        let body = self.send_json(Method::Post, "/auth/register", registration).await?;
        let auth: AuthResponse = serde_json::from_str(&body)?;
        self.session.save(&auth);
        Ok(auth)
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        let body = self.send_json(Method::Post, "/auth/login", credentials).await?;
        let auth: AuthResponse = serde_json::from_str(&body)?;
        self.session.save(&auth);
        Ok(auth)
    }

    pub async fn me(&self) -> Result<User, ApiError> {
        let user: User = self.get("/auth/me", Vec::new()).await?;
        self.session.save_user(&user);
        Ok(user)
    }

    pub async fn forgot_password(&self, email: &str) -> Result<ForgotPasswordResponse, ApiError> {
        let payload = serde_json::json!({ "email": email.trim() });
        let body = self.send_json(Method::Post, "/auth/forgot-password", &payload).await?;
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }

    pub async fn reset_password(&self, reset: &PasswordReset) -> Result<(), ApiError> {
        self.send_json(Method::Post, "/auth/reset-password", reset).await?;
        Ok(())
    }

    /// Local only; the API has no logout endpoint.
    pub fn logout(&self) {
        self.session.clear();
    }

    pub async fn list_accounts(&self) -> Result<Vec<Account>, ApiError> {
        self.get("/accounts", Vec::new()).await
    }

    pub async fn create_account(&self, account: &NewAccount) -> Result<(), ApiError> {
        self.send_json(Method::Post, "/accounts", account).await?;
        Ok(())
    }

    pub async fn update_account(&self, id: &str, account: &NewAccount) -> Result<(), ApiError> {
        self.send_json(Method::Put, format!("/accounts/{}", id), account).await?;
        Ok(())
    }

    pub async fn delete_account(&self, id: &str) -> Result<(), ApiError> {
        self.execute(Method::Delete, format!("/accounts/{}", id), Vec::new(), None)
            .await?;
        Ok(())
    }

    pub async fn list_transactions(&self, query: &TransactionQuery) -> Result<Vec<Transaction>, ApiError> {
        self.get("/transactions", query.query_pairs()).await
    }

    pub async fn create_transaction(&self, payload: &TransactionPayload) -> Result<(), ApiError> {
        self.send_json(Method::Post, "/transactions", payload).await?;
        Ok(())
    }

    pub async fn update_transaction(&self, id: &str, payload: &TransactionPayload) -> Result<(), ApiError> {
        self.send_json(Method::Put, format!("/transactions/{}", id), payload)
            .await?;
        Ok(())
    }

    pub async fn delete_transaction(&self, id: &str) -> Result<(), ApiError> {
        self.execute(Method::Delete, format!("/transactions/{}", id), Vec::new(), None)
            .await?;
        Ok(())
    }

    pub async fn summary(&self, window: &ReportWindow) -> Result<Summary, ApiError> {
        self.get("/transactions/summary", window.query_pairs()).await
    }

    pub async fn category_summary(&self, window: &ReportWindow) -> Result<Vec<CategoryTotal>, ApiError> {
        self.get("/transactions/category-summary", window.query_pairs())
            .await
    }
}

fn backend_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|message| message.as_str())
        .map(str::to_string)
}
