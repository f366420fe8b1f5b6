// Resource declarations test fixture - a small service with several resource kinds
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[path("/users")]
pub struct User {
    pub id: u32,
    pub name: String,
}

pub struct UserResource;

#[path("/users")]
impl UserResource {
    #[path("/users")]
    #[post]
    pub fn create(&self, user: User) -> User {
        user
    }

    /// Lists every user.
    #[get]
    #[post]
    #[path("/users")]
    pub fn list(&self) -> Vec<User> {
        Vec::new()
    }

    /**
     * Removes one user.
     */
    #[path("/users/{id}")]
    #[put]
    #[delete]
    pub fn remove(&self, id: u32) {}

    fn validate(&self, user: &User) -> bool {
        !user.name.is_empty()
    }
}

/// Health endpoints.
#[path("/health")]
pub mod health {
    /// health check
    #[path("/ping")]
    pub fn ping() -> &'static str {
        "pong"
    }

    pub fn uptime() -> u64 {
        0
    }
}

#[path("/orders")]
pub trait OrderApi {
    ///
    #[GET]
    #[Path("/orders")]
    fn list_orders(&self);

    #[rest::put("/orders/{id}")]
    #[rest::path("/orders/{id}")]
    fn update_order(&self, id: u32);
}

#[path("/admin")]
impl Admin {}

impl Unmarked {
    #[path("/hidden")]
    #[get]
    fn hidden(&self) {}
}
