use serde::{Deserialize, Serialize};

/// Perfil del cliente autenticado. Propiedad del servidor: se reemplaza
/// completo en cada login/registro exitoso, nunca se edita localmente.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ClientProfile {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub cpf: String,
    /// Fecha ISO (yyyy-mm-dd) tal como la serializa el backend
    pub date_of_birth: String,
    pub points_balance: i64,
    pub created_at: String,
}
