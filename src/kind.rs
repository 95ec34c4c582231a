//! The dispatch table: one [`HashKind`] per function, in report order.

use core::fmt;
use core::str::FromStr;

use crate::error::Error;
use crate::{basic, basic_simd, basic_v2, basic_v2_simd, djb2, sdbm, Hash, HashFn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashKind {
    Djb2,
    Sdbm,
    Basic,
    BasicSimd,
    BasicV2,
    BasicV2Simd,
}

impl HashKind {
    pub const COUNT: usize = 6;

    pub const ALL: [HashKind; Self::COUNT] = [
        HashKind::Djb2,
        HashKind::Sdbm,
        HashKind::Basic,
        HashKind::BasicSimd,
        HashKind::BasicV2,
        HashKind::BasicV2Simd,
    ];

    /// Dense index into per-kind tables.
    pub const fn id(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            HashKind::Djb2 => "djb2",
            HashKind::Sdbm => "sdbm",
            HashKind::Basic => "basic",
            HashKind::BasicSimd => "basic_simd",
            HashKind::BasicV2 => "basic_v2",
            HashKind::BasicV2Simd => "basic_v2_simd",
        }
    }

    /// Name right-aligned to the widest name, for tabular output.
    pub const fn label(self) -> &'static str {
        match self {
            HashKind::Djb2 => "         djb2",
            HashKind::Sdbm => "         sdbm",
            HashKind::Basic => "        basic",
            HashKind::BasicSimd => "   basic_simd",
            HashKind::BasicV2 => "     basic_v2",
            HashKind::BasicV2Simd => "basic_v2_simd",
        }
    }

    pub const fn function(self) -> HashFn {
        match self {
            HashKind::Djb2 => djb2,
            HashKind::Sdbm => sdbm,
            HashKind::Basic => basic,
            HashKind::BasicSimd => basic_simd,
            HashKind::BasicV2 => basic_v2,
            HashKind::BasicV2Simd => basic_v2_simd,
        }
    }

    #[inline]
    pub fn hash(self, data: &[u8]) -> Hash {
        (self.function())(data)
    }

    /// The scalar function a vector variant must agree with bit for bit.
    pub const fn scalar_counterpart(self) -> Option<HashKind> {
        match self {
            HashKind::BasicSimd => Some(HashKind::Basic),
            HashKind::BasicV2Simd => Some(HashKind::BasicV2),
            _ => None,
        }
    }
}

impl fmt::Display for HashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HashKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownHash(s.to_owned()))
    }
}
