mod inventory;
mod order;
mod user;

pub use inventory::{Inventory, InventoryItem, INVENTORY};
pub use order::{Order, Orders, ORDERS};
pub use user::{User, Users, USERS};

use serde::{ser::SerializeMap, Serialize, Serializer};

/// One responder's fixed data set.
///
/// Implementors are zero-sized markers; the records live in a `static` and are
/// never mutated, so handlers can borrow them for the life of the process.
pub trait Catalog: Send + Sync + 'static {
    type Record: Serialize + Send + Sync + 'static;

    /// Human-readable service name, e.g. `"Inventory Service"`.
    const SERVICE: &'static str;

    /// JSON key the records are published under.
    const COLLECTION: &'static str;

    fn records() -> &'static [Self::Record];

    fn message() -> String {
        format!("{} is running successfully!", Self::SERVICE)
    }
}

/// Body returned by `GET /`: `{service, message, <collection>: [...]}`.
#[derive(Debug, Clone)]
pub struct StatusPayload<R: 'static> {
    pub service: &'static str,
    pub message: String,
    pub collection: &'static str,
    pub records: &'static [R],
}

impl<R: 'static> StatusPayload<R> {
    pub fn of<C>() -> Self
    where
        C: Catalog<Record = R>,
    {
        Self {
            service: C::SERVICE,
            message: C::message(),
            collection: C::COLLECTION,
            records: C::records(),
        }
    }
}

// The collection key differs per service, so the map is written by hand.
impl<R: Serialize + 'static> Serialize for StatusPayload<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("service", self.service)?;
        map.serialize_entry("message", &self.message)?;
        map.serialize_entry(self.collection, self.records)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_derived_from_service_name() {
        assert_eq!(Inventory::message(), "Inventory Service is running successfully!");
        assert_eq!(Orders::message(), "Order Service is running successfully!");
        assert_eq!(Users::message(), "User Service is running successfully!");
    }

    #[test]
    fn payload_keys_are_written_in_order() {
        let body = serde_json::to_string(&StatusPayload::of::<Users>()).unwrap();
        let service = body.find("\"service\"").unwrap();
        let message = body.find("\"message\"").unwrap();
        let users = body.find("\"users\"").unwrap();
        assert!(service < message && message < users, "unexpected key order: {body}");
    }

    #[test]
    fn payload_has_exactly_three_keys() {
        let value = serde_json::to_value(StatusPayload::of::<Orders>()).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert!(obj.contains_key("orders"));
    }

    #[test]
    fn serialization_is_stable_across_calls() {
        let first = serde_json::to_vec(&StatusPayload::of::<Inventory>()).unwrap();
        let second = serde_json::to_vec(&StatusPayload::of::<Inventory>()).unwrap();
        assert_eq!(first, second);
    }
}
