pub mod auth;
pub mod client;
pub mod establishment;
pub mod order;
pub mod product;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest};
pub use client::ClientProfile;
pub use establishment::{
    CreateEstablishmentPayload, Establishment, OwnershipResponse, UpdateEstablishmentPayload,
};
pub use order::{Order, OrderClient, OrderItem, OrderItemProduct, OrderStatus};
pub use product::{Product, ProductPayload};
