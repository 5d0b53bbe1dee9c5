//! Form and button handlers
//!
//! Each handler calls the backend, turns the outcome into a
//! [`StatusMessage`] and writes it to the page. Handlers are independent:
//! overlapping calls are allowed and nothing is retried.

use weathermail_protocol::{LoginRequest, RegisterRequest};

use crate::network::{ApiClient, ApiError};
use crate::state::{MessageArea, PageState, StatusMessage, TokenStore};

/// Raw values of the registration form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub city: String,
}

impl From<RegisterForm> for RegisterRequest {
    fn from(form: RegisterForm) -> Self {
        RegisterRequest {
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            password: form.password,
            city_name: form.city,
        }
    }
}

/// Raw values of the login form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl From<LoginForm> for LoginRequest {
    fn from(form: LoginForm) -> Self {
        LoginRequest {
            username: form.email,
            password: form.password,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubscriptionAction {
    Unsubscribe,
    Resubscribe,
}

impl SubscriptionAction {
    fn verb(self) -> &'static str {
        match self {
            SubscriptionAction::Unsubscribe => "unsubscribe",
            SubscriptionAction::Resubscribe => "resubscribe",
        }
    }
}

#[derive(Clone)]
pub struct FormController {
    api: ApiClient,
    tokens: TokenStore,
    page: PageState,
}

impl FormController {
    pub fn new(api: ApiClient, tokens: TokenStore, page: PageState) -> Self {
        Self { api, tokens, page }
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// A token left over from an earlier run means the user is already
    /// logged in, so the subscription section is shown straight away.
    pub async fn restore_session(&self) {
        if self.tokens.get().await.is_some() {
            tracing::info!("Restored stored session");
            self.page.reveal_subscription().await;
        }
    }

    pub async fn handle_register(&self, form: RegisterForm) -> StatusMessage {
        let request = RegisterRequest::from(form);

        let message = match self.api.register(&request).await {
            Ok(user) => {
                tracing::info!("Registration succeeded");
                StatusMessage::success(format!(
                    "Registration successful! Welcome, {}",
                    user.first_name
                ))
            }
            Err(e) => failure("Registration", &e),
        };

        self.page.show(MessageArea::General, message.clone()).await;
        message
    }

    pub async fn handle_login(&self, form: LoginForm) -> StatusMessage {
        let request = LoginRequest::from(form);

        let message = match self.api.login(&request).await {
            Ok(response) => {
                tracing::info!("Login succeeded");
                if let Err(e) = self.tokens.set(response.access_token).await {
                    tracing::error!("Failed to persist access token: {}", e);
                }
                self.page.reveal_subscription().await;
                StatusMessage::success("Login successful!")
            }
            Err(e) => failure("Login", &e),
        };

        self.page.show(MessageArea::General, message.clone()).await;
        message
    }

    pub async fn handle_unsubscribe(&self) -> StatusMessage {
        self.change_subscription(SubscriptionAction::Unsubscribe).await
    }

    pub async fn handle_resubscribe(&self) -> StatusMessage {
        self.change_subscription(SubscriptionAction::Resubscribe).await
    }

    pub async fn handle_current_user(&self) -> StatusMessage {
        let message = match self.tokens.get().await {
            None => StatusMessage::error("You need to log in to view your account."),
            Some(token) => match self.api.current_user(&token).await {
                Ok(user) => StatusMessage::success(format!(
                    "Signed in as {} ({})",
                    user.email, user.city_name
                )),
                Err(e) => failure("Account lookup", &e),
            },
        };

        self.page.show(MessageArea::Subscription, message.clone()).await;
        message
    }

    async fn change_subscription(&self, action: SubscriptionAction) -> StatusMessage {
        let message = match self.tokens.get().await {
            None => {
                StatusMessage::error(format!("You need to log in to {}.", action.verb()))
            }
            Some(token) => {
                let result = match action {
                    SubscriptionAction::Unsubscribe => self.api.unsubscribe(&token).await,
                    SubscriptionAction::Resubscribe => self.api.resubscribe(&token).await,
                };

                match result {
                    Ok(response) => {
                        tracing::info!("{} succeeded", action.verb());
                        StatusMessage::success(response.text())
                    }
                    Err(e) => failure(action.verb(), &e),
                }
            }
        };

        self.page.show(MessageArea::Subscription, message.clone()).await;
        message
    }
}

fn failure(action: &str, error: &ApiError) -> StatusMessage {
    match error {
        ApiError::Application { status, detail } => {
            tracing::warn!("{} rejected with status {}: {}", action, status, detail);
            StatusMessage::error(format!("Error: {}", detail))
        }
        ApiError::Transport(message) => {
            tracing::warn!("{} failed: {}", action, message);
            StatusMessage::error(format!("Network error: {}", message))
        }
    }
}
