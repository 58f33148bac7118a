//! Card network table.
//!
//! This module provides the `CardNetwork` enum identifying the payment
//! network behind a card number, together with everything the formatter and
//! validators need to know about each network: the numeric prefixes it
//! claims, its exact PAN length, how its digits are grouped on screen, its
//! CVC length, and the icon/label a presentation layer shows for it.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// PAN length for every network not listed below.
pub const MAX_PAN_LENGTH: usize = 16;

/// PAN length for American Express.
pub const MAX_PAN_LENGTH_AMEX: usize = 15;

/// PAN length for Diners Club.
pub const MAX_PAN_LENGTH_DINERS_CLUB: usize = 14;

/// CVC length for every network except American Express.
pub const MAX_CVC_LENGTH: usize = 3;

/// CVC length for American Express.
pub const MAX_CVC_LENGTH_AMEX: usize = 4;

/// Supported card networks.
///
/// `Unknown` is what classification yields for an empty or unrecognised
/// prefix; it carries no prefixes, icon or label, and falls back to the
/// generic 16-digit layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardNetwork {
    /// No known prefix matched.
    #[default]
    Unknown,
    /// Visa - prefix 4, 16 digits
    Visa,
    /// Mastercard - prefixes 2221-2720, 50-55, 67, 16 digits
    Mastercard,
    /// American Express - prefixes 34, 37, 15 digits, 4-digit CVC
    AmericanExpress,
    /// Discover - prefixes 6011, 622, 64, 65, 16 digits
    Discover,
    /// JCB - prefix 35, 16 digits
    Jcb,
    /// Diners Club - prefixes 300-305, 309, 36, 38, 39, 14 digits
    DinersClub,
    /// UnionPay - prefix 62, 16 digits
    UnionPay,
    /// Mir - catch-all prefix 2, 16 digits
    Mir,
}

impl CardNetwork {
    /// Known networks in classification order.
    ///
    /// Mastercard comes first so that its 2-series ranges win over Mir's
    /// single-digit `2` prefix, and UnionPay's `62` is tried before
    /// Discover's `622`.
    pub const CLASSIFICATION_ORDER: [CardNetwork; 8] = [
        Self::Mastercard,
        Self::Visa,
        Self::AmericanExpress,
        Self::UnionPay,
        Self::Discover,
        Self::Jcb,
        Self::DinersClub,
        Self::Mir,
    ];

    /// Returns the numeric prefixes claimed by this network.
    pub const fn prefixes(&self) -> &'static [&'static str] {
        match self {
            Self::Unknown => &[],
            Self::Mastercard => &[
                "2221", "2222", "2223", "2224", "2225", "2226", "2227", "2228", "2229", "223",
                "224", "225", "226", "227", "228", "229", "23", "24", "25", "26", "270", "271",
                "2720", "50", "51", "52", "53", "54", "55", "67",
            ],
            Self::Visa => &["4"],
            Self::AmericanExpress => &["34", "37"],
            Self::UnionPay => &["62"],
            Self::Discover => &["6011", "622", "64", "65"],
            Self::Jcb => &["35"],
            Self::DinersClub => &[
                "300", "301", "302", "303", "304", "305", "309", "36", "38", "39",
            ],
            Self::Mir => &["2"],
        }
    }

    /// Returns the icon identifier the presentation layer maps to an image.
    ///
    /// Empty for `Unknown`.
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Unknown => "",
            Self::Visa => "ic_visa",
            Self::Mastercard => "ic_mastercard",
            Self::AmericanExpress => "ic_amex",
            Self::Discover => "ic_discover",
            Self::Jcb => "ic_jcb",
            Self::DinersClub => "ic_diners_club",
            Self::UnionPay => "ic_union_pay",
            Self::Mir => "ic_mir",
        }
    }

    /// Returns the short label printed on the card preview.
    ///
    /// Empty for `Unknown`.
    pub const fn preview_label(&self) -> &'static str {
        match self {
            Self::Unknown => "",
            Self::Visa => "VISA",
            Self::Mastercard => "MC",
            Self::AmericanExpress => "AMEX",
            Self::Discover => "Disc",
            Self::Jcb => "JCB",
            Self::DinersClub => "DC",
            Self::UnionPay => "UP",
            Self::Mir => "MNP",
        }
    }

    /// Returns the exact number of digits a complete card number has.
    #[inline]
    pub const fn pan_length(&self) -> usize {
        match self {
            Self::AmericanExpress => MAX_PAN_LENGTH_AMEX,
            Self::DinersClub => MAX_PAN_LENGTH_DINERS_CLUB,
            _ => MAX_PAN_LENGTH,
        }
    }

    /// Returns the display grouping; the group sizes sum to `pan_length()`.
    #[inline]
    pub const fn grouping(&self) -> &'static [usize] {
        match self {
            Self::AmericanExpress => &[4, 6, 5],
            Self::DinersClub => &[4, 6, 4],
            _ => &[4, 4, 4, 4],
        }
    }

    /// Returns the exact CVC length.
    #[inline]
    pub const fn cvc_length(&self) -> usize {
        match self {
            Self::AmericanExpress => MAX_CVC_LENGTH_AMEX,
            _ => MAX_CVC_LENGTH,
        }
    }

    /// Returns true for every network except `Unknown`.
    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Returns a human-readable name for the network.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::AmericanExpress => "American Express",
            Self::Discover => "Discover",
            Self::Jcb => "JCB",
            Self::DinersClub => "Diners Club",
            Self::UnionPay => "UnionPay",
            Self::Mir => "Mir",
        }
    }
}

impl fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when a network name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown card network name: {0}")]
pub struct ParseNetworkError(String);

impl FromStr for CardNetwork {
    type Err = ParseNetworkError;

    /// Parses a network name, case-insensitively, accepting the usual short
    /// forms (`amex`, `mc`, `diners`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let network = match s.trim().to_ascii_lowercase().as_str() {
            "unknown" | "" => Self::Unknown,
            "visa" => Self::Visa,
            "mastercard" | "mc" => Self::Mastercard,
            "amex" | "american express" | "americanexpress" => Self::AmericanExpress,
            "discover" | "disc" => Self::Discover,
            "jcb" => Self::Jcb,
            "diners" | "diners club" | "dinersclub" | "dc" => Self::DinersClub,
            "unionpay" | "union pay" | "up" => Self::UnionPay,
            "mir" => Self::Mir,
            _ => return Err(ParseNetworkError(s.to_owned())),
        };
        Ok(network)
    }
}
