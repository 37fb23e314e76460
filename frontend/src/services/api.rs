use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::session::{SessionStore, TOKEN_KEY};
use shared::{Aluno, AulaAgendada, Disciplina, Escola};
use thiserror::Error;

use crate::services::config::AppConfig;
use crate::services::session::{session, LocalStorageSessionStore};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Sessão expirada. Faça login novamente.")]
    Unauthorized,
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },
}

/// API client for the student/school/subject REST backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Client for the configured backend, carrying the stored session token
    pub fn new(config: &AppConfig) -> Self {
        Self::with_base_url(config.api_base_url.clone()).with_token(session().token())
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attach a bearer token to every request
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("Accept", "application/json");
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Check the status, then decode the JSON body
    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        Self::check(&response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn check(response: &Response) -> Result<(), ApiError> {
        if response.status() == 401 {
            // The stored token is no longer accepted
            if let Err(e) = LocalStorageSessionStore.remove(TOKEN_KEY) {
                log::warn!("Failed to clear expired token: {}", e);
            }
            return Err(ApiError::Unauthorized);
        }
        if !response.ok() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Server { status: response.status(), message });
        }
        Ok(())
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::parse(response).await
    }

    /// List all students
    pub async fn list_alunos(&self) -> Result<Vec<Aluno>, ApiError> {
        self.get("/alunos").await
    }

    pub async fn get_aluno(&self, id: u32) -> Result<Aluno, ApiError> {
        self.get(&format!("/alunos/{}", id)).await
    }

    /// Create a student together with its scheduled lessons
    pub async fn create_aluno(&self, aluno: &Aluno) -> Result<Aluno, ApiError> {
        let response = self
            .authorize(Request::post(&self.url("/alunos")))
            .json(aluno)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::parse(response).await
    }

    pub async fn update_aluno(&self, id: u32, aluno: &Aluno) -> Result<Aluno, ApiError> {
        let response = self
            .authorize(Request::put(&self.url(&format!("/alunos/{}", id))))
            .json(aluno)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::parse(response).await
    }

    pub async fn delete_aluno(&self, id: u32) -> Result<(), ApiError> {
        let response = self
            .authorize(Request::delete(&self.url(&format!("/alunos/{}", id))))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(&response).await
    }

    /// Lessons of a student, for the printable agenda
    pub async fn list_aulas(&self, aluno_id: u32) -> Result<Vec<AulaAgendada>, ApiError> {
        self.get(&format!("/alunos/{}/aulas", aluno_id)).await
    }

    pub async fn list_escolas(&self) -> Result<Vec<Escola>, ApiError> {
        self.get("/escolas").await
    }

    pub async fn list_disciplinas(&self) -> Result<Vec<Disciplina>, ApiError> {
        self.get("/disciplinas").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::with_base_url("http://localhost:8000/api/");
        assert_eq!(client.url("/alunos"), "http://localhost:8000/api/alunos");
    }

    #[test]
    fn test_unauthorized_message() {
        assert_eq!(ApiError::Unauthorized.to_string(), "Sessão expirada. Faça login novamente.");
        let err = ApiError::Server { status: 500, message: "boom".to_string() };
        assert_eq!(err.to_string(), "Server error 500: boom");
    }
}
