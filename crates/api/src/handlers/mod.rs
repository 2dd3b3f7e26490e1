pub mod approval;
pub mod health;
pub mod notification;
