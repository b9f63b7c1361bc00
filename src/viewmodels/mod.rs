pub mod auth_viewmodel;
pub mod catalog_viewmodel;
pub mod establishment_viewmodel;
pub mod orders_viewmodel;
pub mod register_form;

pub use auth_viewmodel::AuthViewModel;
pub use catalog_viewmodel::{CatalogViewModel, ProductForm};
pub use establishment_viewmodel::{CustomizeForm, EstablishmentViewModel, StoreForm};
pub use orders_viewmodel::{OrderStats, OrdersViewModel};
pub use register_form::{RegisterForm, RegisterStep};
