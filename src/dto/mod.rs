use serde::{Deserialize, Deserializer};

pub mod accounts;
pub mod auth;
pub mod blogs;
pub mod cart;
pub mod catalog;
pub mod notifies;
pub mod orders;
pub mod products;

/// For partial updates: an absent field stays `None`, an explicit `null`
/// becomes `Some(None)`. Pair with `#[serde(default)]`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
