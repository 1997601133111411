use serde::Serialize;

use super::Catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: u32,
    pub name: &'static str,
}

pub static USERS: [User; 3] = [
    User { id: 1, name: "Tanvi" },
    User { id: 2, name: "Rahul" },
    User { id: 3, name: "Priya" },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct Users;

impl Catalog for Users {
    type Record = User;

    const SERVICE: &'static str = "User Service";
    const COLLECTION: &'static str = "users";

    fn records() -> &'static [User] {
        &USERS
    }
}
