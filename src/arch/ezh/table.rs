//! Instruction descriptors and the encoding table

use crate::arch::ezh::field::Field;
use rayon::prelude::*;
use serde::Serialize;
use std::slice;

/// One recognizable instruction encoding.
///
/// A word matches the descriptor iff every bit selected by `mask` equals the
/// corresponding bit of `code`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Descriptor {
    mnemonic: String,
    mask: u32,
    code: u32,
    fields: Vec<Field>,
}

impl Descriptor {
    pub fn new(mnemonic: &str, mask: u32, code: u32, fields: Vec<Field>) -> Self {
        Descriptor {
            mnemonic: mnemonic.to_string(),
            mask,
            code,
            fields,
        }
    }

    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    pub fn mask(&self) -> u32 {
        self.mask
    }

    pub fn code(&self) -> u32 {
        self.code
    }

    pub fn iter_fields(&self) -> slice::Iter<'_, Field> {
        self.fields.iter()
    }

    pub fn matches(&self, word: u32) -> bool {
        (word ^ self.code) & self.mask == 0
    }

    /// Determine if some word could match both descriptors.
    ///
    /// That is the case exactly when the codes agree on every bit that both
    /// masks test.
    pub fn overlaps(&self, other: &Descriptor) -> bool {
        (self.code ^ other.code) & self.mask & other.mask == 0
    }
}

/// The ordered set of all known encodings.
///
/// Built once and then only read; it can be shared freely across threads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EncodingTable {
    descriptors: Vec<Descriptor>,
}

impl EncodingTable {
    pub fn new(descriptors: Vec<Descriptor>) -> Self {
        EncodingTable { descriptors }
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Descriptor> {
        self.descriptors.iter()
    }

    /// Find a descriptor by mnemonic.
    pub fn lookup(&self, mnemonic: &str) -> Option<&Descriptor> {
        self.descriptors.iter().find(|d| d.mnemonic == mnemonic)
    }

    /// List every pair of descriptors (by index, lower first) that claim
    /// overlapping bit space.
    ///
    /// All pairs are checked, so an empty result proves that no 32-bit word
    /// can match two descriptors.
    pub fn collisions(&self) -> Vec<(usize, usize)> {
        let descriptors = &self.descriptors;

        (0..descriptors.len())
            .into_par_iter()
            .flat_map_iter(|i| {
                (i + 1..descriptors.len())
                    .filter(move |&j| descriptors[i].overlaps(&descriptors[j]))
                    .map(move |j| (i, j))
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a EncodingTable {
    type Item = &'a Descriptor;
    type IntoIter = slice::Iter<'a, Descriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}
