//! Wire types shared with the server's contact endpoint.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/contact`. Mirrors the server's `ContactRequest`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub contact_detail: String,
    pub phone: String,
}
