// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type registry: the closed kind <-> tag mapping.
//!
//! Centralizes every wire tag of the format. The tag assignment is part of
//! the wire format and must stay bit-for-bit stable across releases; encoded
//! data written by one process is read back by any other.
//!
//! Tags are assigned sequentially starting at 1:
//!
//! | Tag | Kind      | Codec |
//! |-----|-----------|-------|
//! | 1   | byte      | yes   |
//! | 2   | boolean   | yes   |
//! | 3   | short     | yes   |
//! | 4   | integer   | yes   |
//! | 5   | long      | yes   |
//! | 6   | float     | yes   |
//! | 7   | double    | yes   |
//! | 8   | character | yes   |
//! | 9   | string    | yes   |
//! | 10  | optional  | yes   |
//! | 11  | list      | reserved |
//! | 12  | set       | reserved |
//! | 13  | map       | reserved |
//! | 14  | array     | reserved |
//!
//! The four reserved tags have no payload layout defined; decoding them
//! fails with [`Error::UnsupportedKind`] and nothing can encode them.

use crate::error::{Error, Result};
use std::fmt;

/// A semantic value kind, distinct from any host-language type.
///
/// The enum is closed: adding a variant means extending the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Byte,
    Boolean,
    Short,
    Integer,
    Long,
    Float,
    Double,
    Character,
    String,
    Optional,
    List,
    Set,
    Map,
    Array,
}

impl Kind {
    /// All registered kinds, in tag order.
    pub const ALL: [Kind; 14] = [
        Kind::Byte,
        Kind::Boolean,
        Kind::Short,
        Kind::Integer,
        Kind::Long,
        Kind::Float,
        Kind::Double,
        Kind::Character,
        Kind::String,
        Kind::Optional,
        Kind::List,
        Kind::Set,
        Kind::Map,
        Kind::Array,
    ];

    /// One-byte wire tag for this kind.
    ///
    /// Total over the enum: every kind is registered, so the lookup cannot
    /// miss. **NEVER renumber** -- the values are wire format.
    pub const fn tag(self) -> u8 {
        match self {
            Kind::Byte => 1,
            Kind::Boolean => 2,
            Kind::Short => 3,
            Kind::Integer => 4,
            Kind::Long => 5,
            Kind::Float => 6,
            Kind::Double => 7,
            Kind::Character => 8,
            Kind::String => 9,
            Kind::Optional => 10,
            Kind::List => 11,
            Kind::Set => 12,
            Kind::Map => 13,
            Kind::Array => 14,
        }
    }

    /// Resolve a wire tag back to its kind.
    pub fn from_tag(tag: u8) -> Result<Self> {
        match tag {
            1 => Ok(Kind::Byte),
            2 => Ok(Kind::Boolean),
            3 => Ok(Kind::Short),
            4 => Ok(Kind::Integer),
            5 => Ok(Kind::Long),
            6 => Ok(Kind::Float),
            7 => Ok(Kind::Double),
            8 => Ok(Kind::Character),
            9 => Ok(Kind::String),
            10 => Ok(Kind::Optional),
            11 => Ok(Kind::List),
            12 => Ok(Kind::Set),
            13 => Ok(Kind::Map),
            14 => Ok(Kind::Array),
            _ => Err(Error::UnknownTag { tag }),
        }
    }

    /// Whether this kind has an implemented payload codec.
    ///
    /// False for the reserved collection kinds (list, set, map, array).
    pub const fn has_codec(self) -> bool {
        !matches!(self, Kind::List | Kind::Set | Kind::Map | Kind::Array)
    }

    /// Lowercase kind name for error and log text.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Byte => "byte",
            Kind::Boolean => "boolean",
            Kind::Short => "short",
            Kind::Integer => "integer",
            Kind::Long => "long",
            Kind::Float => "float",
            Kind::Double => "double",
            Kind::Character => "character",
            Kind::String => "string",
            Kind::Optional => "optional",
            Kind::List => "list",
            Kind::Set => "set",
            Kind::Map => "map",
            Kind::Array => "array",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
