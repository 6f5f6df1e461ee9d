use serde::{Deserialize, Serialize};

/// An ad account discoverable for a connected credential.
///
/// `id` is the platform node id (prefixed form, e.g. `act_1234`), while
/// `account_id` is the bare numeric account id as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdAccount {
    pub id: String,
    pub account_id: String,
    pub name: String,
    #[serde(default)]
    pub currency: String,
}
