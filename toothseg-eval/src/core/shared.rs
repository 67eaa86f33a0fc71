use core::fmt;

use serde::{Deserialize, Serialize};

/// Position of a point's color within the fixed palette, before FDI
/// remapping. Valid labels live in `0..=35`; 0 is gingiva / no tooth.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoricalLabel(u8);

impl CategoricalLabel {
    pub const fn new(n: u8) -> Self {
        Self(n)
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

/// A tooth identifier in the FDI two-digit notation: tens digit encodes the
/// quadrant, units digit the position within it. 0 is kept for background.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FdiNumber(u8);

impl FdiNumber {
    pub const fn new(n: u8) -> Self {
        Self(n)
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

macro_rules! value_debug_impl {
    ($($t:ty),*) => {
        $(
            impl fmt::Debug for $t {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    self.0.fmt(f)
                }
            }

            impl fmt::Display for $t {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    self.0.fmt(f)
                }
            }
        )*
    };
}

value_debug_impl! {
    CategoricalLabel,
    FdiNumber
}

/// Which dental arch a scan belongs to. The lowercase serialized form is
/// also the token used in prediction file names.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JawType {
    Upper,
    Lower,
}

impl fmt::Display for JawType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JawType::Upper => write!(f, "upper"),
            JawType::Lower => write!(f, "lower"),
        }
    }
}

pub trait ConfigType {
    fn default() -> Self;
}
