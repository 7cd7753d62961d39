pub mod advice;
pub mod aggregate;
pub mod evaluate;
pub mod export;
pub mod extract;
pub mod session;
