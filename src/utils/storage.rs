use web_sys::{window, Storage};

use crate::utils::constants::TOKEN_STORAGE_KEY;

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Persistir el bearer token (se escribe tras login/registro exitoso)
pub fn save_token(token: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .set_item(TOKEN_STORAGE_KEY, token)
        .map_err(|_| "Error guardando token en localStorage".to_string())
}

/// Leer el bearer token persistido, si existe
pub fn load_token() -> Option<String> {
    let storage = get_local_storage()?;
    storage.get_item(TOKEN_STORAGE_KEY).ok()?
}

/// Eliminar el bearer token (logout o token rechazado por el servidor)
pub fn clear_token() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_STORAGE_KEY);
    }
}
