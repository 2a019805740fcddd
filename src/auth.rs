//! Email sign-in and sign-out.

use crate::endpoints;
use crate::error::ApiError;
use crate::form::first_message;
use crate::http::{ApiClient, CancellationToken};
use common::{AuthUser, LoginForm, SignInResponse};
use thiserror::Error;
use tracing::info;
use validator::Validate;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthError {
    /// Form did not validate; nothing was sent
    #[error("{0}")]
    Invalid(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    /// Backend answered 2xx without a token
    #[error("Unexpected sign-in response: {0}")]
    Response(String),
}

#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for a bearer token and cache the user.
    pub async fn sign_in(&self, form: &LoginForm) -> Result<AuthUser, AuthError> {
        self.sign_in_until(form, &CancellationToken::new()).await
    }

    /// [`sign_in`](Self::sign_in) that stops at `cancel`. A cancelled
    /// attempt leaves the session untouched.
    pub async fn sign_in_until(
        &self,
        form: &LoginForm,
        cancel: &CancellationToken,
    ) -> Result<AuthUser, AuthError> {
        let form = LoginForm {
            email: form.email.trim().to_string(),
            password: form.password.clone(),
        };
        form.validate()
            .map_err(|errors| AuthError::Invalid(first_message(&errors, &["email", "password"])))?;

        let body = ApiClient::with_cancellation(
            cancel,
            self.client.post(endpoints::auth::SIGN_IN_EMAIL, &form),
        )
        .await?;
        let response: SignInResponse =
            serde_json::from_value(body).map_err(|e| AuthError::Response(e.to_string()))?;
        if response.token.is_empty() {
            return Err(AuthError::Response("missing token".to_string()));
        }

        let session = self.client.session();
        session.set_credential(&response.token);
        let user = AuthUser::from_email(form.email);
        session.set_user(Some(user.clone()));
        info!("Signed in as {}", user.email);
        Ok(user)
    }

    /// Forget the session and return to the login page.
    pub fn sign_out(&self) {
        info!("Signing out");
        self.client.session().clear();
        self.client.navigator().redirect_to_login();
    }
}
