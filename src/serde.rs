//! `serde` support for [`TwoThreeTree`]s
//!
//! A tree is encoded as its in-order key sequence. Decoding rebuilds the tree by repeated
//! insertion, so a duplicated key in the input surfaces as a deserialization error.

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::{Serialize, Serializer};

use std::fmt;
use std::marker::PhantomData;

use crate::TwoThreeTree;

impl<K: Serialize> Serialize for TwoThreeTree<K> {
    fn serialize<Se: Serializer>(&self, serializer: Se) -> Result<Se::Ok, Se::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, K: Deserialize<'de> + Copy + Ord> Deserialize<'de> for TwoThreeTree<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(TwoThreeTreeVisitor { marker: PhantomData })
    }
}

struct TwoThreeTreeVisitor<K> {
    marker: PhantomData<TwoThreeTree<K>>,
}

impl<'de, K: Deserialize<'de> + Copy + Ord> Visitor<'de> for TwoThreeTreeVisitor<K> {
    type Value = TwoThreeTree<K>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of distinct keys")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut this = TwoThreeTree::new();
        while let Some(key) = seq.next_element()? {
            this.insert(key)
                .map_err(|_| de::Error::custom("duplicate key in sequence"))?;
        }

        Ok(this)
    }
}
