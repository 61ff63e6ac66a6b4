pub mod compare;
pub mod payment;
