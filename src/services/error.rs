// ============================================================================
// API ERROR - Taxonomía de errores de la capa REST
// ============================================================================
// Cada llamada REST mapea su falla a exactamente una variante con mensaje
// visible al usuario. Ningún error es fatal para el proceso.
// ============================================================================

use serde::Deserialize;
use thiserror::Error;

/// Mensaje por defecto cuando el servidor no responde
pub const MSG_NETWORK: &str = "Servidor não está respondendo. Verifique sua conexão.";

const MSG_BAD_CREDENTIALS: &str = "Credenciais inválidas. Verifique seu e-mail e senha.";
const MSG_SESSION_EXPIRED: &str = "Sessão expirada. Faça login novamente.";
const MSG_SERVER: &str = "Erro desconhecido no servidor.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Validación local de campos; nunca llega a la red
    #[error("{0}")]
    Validation(String),
    /// 401 o falla de autenticación reportada por el servidor
    #[error("{0}")]
    Auth(String),
    /// Otros status HTTP de error (4xx/5xx)
    #[error("{0}")]
    Server(String),
    /// No hubo respuesta del servidor
    #[error("{0}")]
    Network(String),
}

/// Cuerpo de error estándar del backend: { "message": "..." }
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Clasificar un status HTTP de error con el mensaje del servidor si existe.
/// El backend responde message = "Unauthorized" en credenciales inválidas;
/// ese texto crudo se reemplaza por un mensaje útil.
pub fn classify_status(status: u16, server_message: Option<String>) -> ApiError {
    if status == 401 {
        let msg = match server_message.as_deref() {
            Some("Unauthorized") | None => MSG_BAD_CREDENTIALS.to_string(),
            Some(m) => m.to_string(),
        };
        return ApiError::Auth(msg);
    }
    ApiError::Server(server_message.unwrap_or_else(|| MSG_SERVER.to_string()))
}

/// Variante de 401 para endpoints autenticados (token vencido, no login)
pub fn session_expired() -> ApiError {
    ApiError::Auth(MSG_SESSION_EXPIRED.to_string())
}

/// Construir el ApiError a partir de una respuesta HTTP no exitosa
pub async fn error_from_response(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    classify_status(status, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_maps_to_friendly_credentials_message() {
        let err = classify_status(401, Some("Unauthorized".to_string()));
        assert_eq!(err, ApiError::Auth(MSG_BAD_CREDENTIALS.to_string()));
    }

    #[test]
    fn auth_error_keeps_specific_server_message() {
        let err = classify_status(401, Some("Conta bloqueada".to_string()));
        assert_eq!(err, ApiError::Auth("Conta bloqueada".to_string()));
    }

    #[test]
    fn bare_401_maps_to_credentials_message() {
        let err = classify_status(401, None);
        assert_eq!(err, ApiError::Auth(MSG_BAD_CREDENTIALS.to_string()));
    }

    #[test]
    fn other_statuses_surface_server_message_or_fallback() {
        let err = classify_status(422, Some("CPF inválido".to_string()));
        assert_eq!(err, ApiError::Server("CPF inválido".to_string()));

        let err = classify_status(500, None);
        assert_eq!(err, ApiError::Server(MSG_SERVER.to_string()));
    }
}
