pub mod lease;
pub mod loan;
pub mod outright;
