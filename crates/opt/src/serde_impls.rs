//! serde support: `Opt<T>` uses the same data model as `Option<T>`.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Error as _, Serialize, Serializer};

use crate::opt::Opt;

impl<T: Serialize> Serialize for Opt<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Opt::Some(value) => serializer.serialize_some(value),
            Opt::None => serializer.serialize_none(),
            Opt::Lazy(lazy) => lazy.try_force().map_err(S::Error::custom)?.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Opt<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Opt::from)
    }
}
