use serde::{Deserialize, Serialize};

/// One user as returned by the directory endpoint.
///
/// Fields the endpoint sends beyond these (id, phone, company, ...) are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
}

impl Address {
    /// Single-line form used on cards: `street, suite, city, zipcode`.
    pub fn formatted(&self) -> String {
        format!(
            "{}, {}, {}, {}",
            self.street, self.suite, self.city, self.zipcode
        )
    }
}
