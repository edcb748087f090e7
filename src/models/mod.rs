pub mod credit_card;
pub mod errors;
pub mod metadata;
pub mod payment_method;
