//! User profile model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user, as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    pub language: String,
    pub is_active: bool,
}
