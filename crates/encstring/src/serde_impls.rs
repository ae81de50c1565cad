//! Strings serialize as plain text whatever their encoding.

use alloc::string::String;
use core::{fmt, marker::PhantomData};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{Error, Visitor},
};

use crate::{alloc_handle::Allocator, encoding::Encoding, string::EncodedString};

impl<E: Encoding, A: Allocator> Serialize for EncodedString<E, A> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct EncodedStringVisitor<E, A>(PhantomData<(E, A)>);

impl<E: Encoding, A: Allocator + Default> Visitor<'_> for EncodedStringVisitor<E, A> {
    type Value = EncodedString<E, A>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string")
    }

    fn visit_str<Err>(self, value: &str) -> Result<Self::Value, Err>
    where
        Err: Error,
    {
        let mut out = EncodedString::with_capacity_in(value.len(), A::default());
        out.append(value);
        Ok(out)
    }

    fn visit_string<Err>(self, value: String) -> Result<Self::Value, Err>
    where
        Err: Error,
    {
        self.visit_str(&value)
    }
}

impl<'de, E: Encoding, A: Allocator + Default> Deserialize<'de> for EncodedString<E, A> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(EncodedStringVisitor(PhantomData))
    }
}
