pub mod assistant;
pub mod cart;
pub mod checkout;
