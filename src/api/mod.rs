//! API handlers for Biblioteca REST endpoints

pub mod books;
pub mod health;
pub mod loans;
pub mod openapi;
pub mod users;

use serde::Serialize;

/// Success envelope: every 2xx payload is wrapped in `result`
#[derive(Serialize)]
pub struct ResultEnvelope<T: Serialize> {
    pub result: T,
}

impl<T: Serialize> ResultEnvelope<T> {
    pub fn new(result: T) -> Self {
        Self { result }
    }
}
