// ============================================================================
// REGISTER FORM - Máquina de estados del registro en 3 pasos
// ============================================================================
// Pasos lineales con transiciones guardadas por presencia de campos.
// Volver atrás nunca pierde datos; la validación final (largo de contraseña
// y confirmación) corre antes de invocar sign_up.
// ============================================================================

use crate::models::RegisterRequest;

/// Paso actual del asistente de registro
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterStep {
    /// Paso 1: nombre y e-mail
    CollectingIdentity,
    /// Paso 2: CPF y fecha de nacimiento
    CollectingPersonalInfo,
    /// Paso 3: contraseña y confirmación
    CollectingCredentials,
}

impl RegisterStep {
    /// Número visible en el indicador de pasos (1..3)
    pub fn ordinal(&self) -> u8 {
        match self {
            RegisterStep::CollectingIdentity => 1,
            RegisterStep::CollectingPersonalInfo => 2,
            RegisterStep::CollectingCredentials => 3,
        }
    }
}

/// Estado local del formulario de registro
#[derive(Clone, Debug, PartialEq)]
pub struct RegisterForm {
    pub step: RegisterStep,
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub birth_date: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self {
            step: RegisterStep::CollectingIdentity,
            name: String::new(),
            email: String::new(),
            cpf: String::new(),
            birth_date: String::new(),
            password: String::new(),
            confirm_password: String::new(),
        }
    }

    /// Avanzar al próximo paso si los campos del actual están completos.
    /// En caso de rechazo el paso NO cambia y los campos quedan intactos.
    pub fn advance(&mut self) -> Result<(), String> {
        match self.step {
            RegisterStep::CollectingIdentity => {
                if self.name.trim().is_empty() || self.email.trim().is_empty() {
                    return Err("Preencha todos os campos".to_string());
                }
                self.step = RegisterStep::CollectingPersonalInfo;
                Ok(())
            }
            RegisterStep::CollectingPersonalInfo => {
                if self.cpf.trim().is_empty() || self.birth_date.trim().is_empty() {
                    return Err("Preencha todos os campos".to_string());
                }
                self.step = RegisterStep::CollectingCredentials;
                Ok(())
            }
            RegisterStep::CollectingCredentials => {
                Err("Último passo: use Criar conta".to_string())
            }
        }
    }

    /// Volver un paso. Los campos ya ingresados persisten.
    pub fn back(&mut self) {
        self.step = match self.step {
            RegisterStep::CollectingIdentity => RegisterStep::CollectingIdentity,
            RegisterStep::CollectingPersonalInfo => RegisterStep::CollectingIdentity,
            RegisterStep::CollectingCredentials => RegisterStep::CollectingPersonalInfo,
        };
    }

    /// Validación final antes de llamar a sign_up. Ningún rechazo de acá
    /// genera tráfico de red.
    pub fn validate_submit(&self) -> Result<RegisterRequest, String> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.cpf.trim().is_empty()
            || self.birth_date.trim().is_empty()
            || self.password.is_empty()
        {
            return Err("Preencha todos os campos".to_string());
        }
        if self.password != self.confirm_password {
            return Err("As senhas não coincidem".to_string());
        }
        if self.password.chars().count() < 6 {
            return Err("A senha deve ter pelo menos 6 caracteres".to_string());
        }
        Ok(RegisterRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            cpf: self.cpf.trim().to_string(),
            date_of_birth: self.birth_date.clone(),
            password: self.password.clone(),
        })
    }
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> RegisterForm {
        let mut form = RegisterForm::new();
        form.name = "Ana Pereira".to_string();
        form.email = "ana@exemplo.com".to_string();
        form.cpf = "123.456.789-00".to_string();
        form.birth_date = "1995-08-12".to_string();
        form.password = "segredo1".to_string();
        form.confirm_password = "segredo1".to_string();
        form
    }

    #[test]
    fn empty_identity_fields_block_step_one() {
        let mut form = RegisterForm::new();
        form.email = "ana@exemplo.com".to_string();

        let result = form.advance();

        assert!(result.is_err());
        assert_eq!(form.step, RegisterStep::CollectingIdentity);
    }

    #[test]
    fn complete_fields_walk_the_three_steps() {
        let mut form = filled_form();
        form.step = RegisterStep::CollectingIdentity;

        assert!(form.advance().is_ok());
        assert_eq!(form.step, RegisterStep::CollectingPersonalInfo);
        assert!(form.advance().is_ok());
        assert_eq!(form.step, RegisterStep::CollectingCredentials);
        // No hay cuarto paso
        assert!(form.advance().is_err());
        assert_eq!(form.step, RegisterStep::CollectingCredentials);
    }

    #[test]
    fn going_back_preserves_entered_data() {
        let mut form = filled_form();
        form.step = RegisterStep::CollectingCredentials;

        form.back();
        assert_eq!(form.step, RegisterStep::CollectingPersonalInfo);
        form.back();
        assert_eq!(form.step, RegisterStep::CollectingIdentity);
        form.back();
        assert_eq!(form.step, RegisterStep::CollectingIdentity);

        assert_eq!(form.name, "Ana Pereira");
        assert_eq!(form.cpf, "123.456.789-00");
        assert_eq!(form.password, "segredo1");
    }

    #[test]
    fn mismatched_confirmation_rejects_submit() {
        let mut form = filled_form();
        form.confirm_password = "outra".to_string();

        let err = form.validate_submit().unwrap_err();
        assert_eq!(err, "As senhas não coincidem");
    }

    #[test]
    fn short_password_rejects_submit() {
        let mut form = filled_form();
        form.password = "abc12".to_string();
        form.confirm_password = "abc12".to_string();

        let err = form.validate_submit().unwrap_err();
        assert_eq!(err, "A senha deve ter pelo menos 6 caracteres");
    }

    #[test]
    fn valid_form_builds_the_register_payload() {
        let form = filled_form();
        let payload = form.validate_submit().unwrap();

        assert_eq!(payload.name, "Ana Pereira");
        assert_eq!(payload.email, "ana@exemplo.com");
        assert_eq!(payload.date_of_birth, "1995-08-12");
        assert_eq!(payload.password, "segredo1");
    }

    #[test]
    fn step_ordinals_match_the_indicator() {
        assert_eq!(RegisterStep::CollectingIdentity.ordinal(), 1);
        assert_eq!(RegisterStep::CollectingPersonalInfo.ordinal(), 2);
        assert_eq!(RegisterStep::CollectingCredentials.ordinal(), 3);
    }
}
