/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:3000 (por defecto)
/// - Producción: https://pontuei-back-end.vercel.app (via BACKEND_URL env var)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

/// Clave de localStorage con el bearer token de la sesión.
/// Es el único estado durable del lado del cliente.
pub const TOKEN_STORAGE_KEY: &str = "userToken";
