//! Session persistence and the mocked authentication flow.
//!
//! There is no real auth protocol: any non-empty email/password pair logs in,
//! and the resulting user is kept as JSON in a key/value store that survives
//! reloads (browser local storage in the front end).

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::SessionError;
use crate::validation::{validate_field, ValidationRule};
use crate::{AuthOutcome, LoginRequest, SignupRequest, User};

pub const USER_KEY: &str = "user";
pub const TOKEN_KEY: &str = "token";

/// Key/value storage for session data
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

/// Process-local store, used in tests and when browser storage is unavailable
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    values: RefCell<HashMap<String, String>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

/// Mocked authentication backed by a session store
#[derive(Debug)]
pub struct AuthSession<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> AuthSession<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Accept any non-empty credentials and persist the resulting user
    pub fn login(&self, request: &LoginRequest) -> AuthOutcome {
        if request.email.is_empty() || request.password.is_empty() {
            return AuthOutcome::failure("Email e senha são obrigatórios");
        }

        let user = User {
            id: 1,
            nome: User::name_from_email(&request.email),
            email: request.email.clone(),
            perfil: Some("administrador".to_string()),
            role: "admin".to_string(),
            telefone: None,
        };

        match self.save_user(&user) {
            Ok(()) => {
                log::info!("Session: logged in as {}", user.email);
                AuthOutcome::success("Login realizado com sucesso!")
            }
            Err(e) => {
                log::error!("Session: failed to persist login: {}", e);
                AuthOutcome::failure("Ocorreu um erro durante o login. Tente novamente.")
            }
        }
    }

    /// Check the signup form; no account is actually created
    pub fn signup(&self, request: &SignupRequest) -> AuthOutcome {
        let checks = [
            (request.nome.as_str(), vec![ValidationRule::required("Nome")]),
            (
                request.email.as_str(),
                vec![ValidationRule::required("Email"), ValidationRule::email()],
            ),
            (request.senha.as_str(), vec![ValidationRule::required("Senha")]),
        ];
        for (value, rules) in &checks {
            if let Err(message) = validate_field(value, rules) {
                return AuthOutcome::failure(message);
            }
        }
        AuthOutcome::success("Cadastro realizado com sucesso!")
    }

    /// Drop the stored user and token. Storage errors are logged, not returned.
    pub fn logout(&self) {
        for key in [USER_KEY, TOKEN_KEY] {
            if let Err(e) = self.store.remove(key) {
                log::warn!("Session: failed to remove {}: {}", key, e);
            }
        }
    }

    /// Restore the user saved by a previous login
    pub fn current_user(&self) -> Option<User> {
        match self.load_user() {
            Ok(user) => user,
            Err(e) => {
                log::warn!("Session: ignoring stored user: {}", e);
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// API token attached as a bearer credential, when one is stored
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).ok().flatten().filter(|t| !t.is_empty())
    }

    fn save_user(&self, user: &User) -> Result<(), SessionError> {
        let json = serde_json::to_string(user)?;
        self.store.set(USER_KEY, &json)
    }

    fn load_user(&self) -> Result<Option<User>, SessionError> {
        match self.store.get(USER_KEY)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }
}
