pub mod app;
pub mod customize;
pub mod dashboard;
pub mod fields;
pub mod landing;
pub mod login;
pub mod orders;
pub mod products;
pub mod register;
pub mod register_store;
pub mod toast;

pub use app::{render_app, resolve_route};
pub use customize::render_customize_tab;
pub use dashboard::render_dashboard;
pub use landing::render_landing;
pub use login::render_login;
pub use orders::render_orders_tab;
pub use products::render_products_tab;
pub use register::render_register;
pub use register_store::render_register_store;
