pub mod error;
pub mod id;
pub mod money;
pub mod payment;
pub mod payment_item;
pub mod transport;
pub mod validation;
