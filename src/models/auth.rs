use serde::{Deserialize, Serialize};

use crate::models::client::ClientProfile;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub cpf: String,
    /// El backend espera `date_of_birth` (yyyy-mm-dd), no `birthDate`
    pub date_of_birth: String,
    pub password: String,
}

/// Respuesta de /auth/login y /auth/register
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub access_token: String,
    pub client: ClientProfile,
}
