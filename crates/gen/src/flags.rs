//! Status-flag and PDG ID lookup tables

// crate modules
use crate::error::Error;

// natools modules
use natools_utils::f;

// external crates
use serde::{Deserialize, Serialize};

// standard library
use std::collections::BTreeMap;

/// Named bits of the NanoAOD `GenPart_statusFlags` branch
///
/// Each variant's discriminant is the bit position in the raw bitmask.
/// The set is fixed by the generator bookkeeping conventions, so the
/// table is exhaustive for known flags.
///
/// ```rust
/// # use natools_gen::StatusFlag;
/// assert_eq!(StatusFlag::IsHardProcess.bit(), 7);
/// assert_eq!(StatusFlag::IsHardProcess.name(), "isHardProcess");
///
/// // Lookup from the NanoAOD name
/// assert_eq!(StatusFlag::try_from("isLastCopy").unwrap(), StatusFlag::IsLastCopy);
/// assert!(StatusFlag::try_from("notAFlag").is_err());
/// ```
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatusFlag {
    /// Prompt particle, not from hadron/tau decay
    IsPrompt = 0,
    /// Decayed lepton or hadron
    IsDecayedLeptonHadron = 1,
    /// Any tau decay product
    IsTauDecayProduct = 2,
    /// Product of a prompt tau decay
    IsPromptTauDecayProduct = 3,
    /// Direct tau decay product
    IsDirectTauDecayProduct = 4,
    /// Direct product of a prompt tau decay
    IsDirectPromptTauDecayProduct = 5,
    /// Direct hadron decay product
    IsDirectHadronDecayProduct = 6,
    /// Part of the hard process itself
    IsHardProcess = 7,
    /// Descended from the hard process
    FromHardProcess = 8,
    /// Tau decay product of the hard process
    IsHardProcessTauDecayProduct = 9,
    /// Direct tau decay product of the hard process
    IsDirectHardProcessTauDecayProduct = 10,
    /// From the hard process before final-state radiation
    FromHardProcessBeforeFsr = 11,
    /// First generator copy of this particle
    IsFirstCopy = 12,
    /// Last generator copy of this particle
    IsLastCopy = 13,
    /// Last copy before final-state radiation
    IsLastCopyBeforeFsr = 14,
}

impl StatusFlag {
    /// Every named flag, in bit order
    pub const ALL: [StatusFlag; 15] = [
        StatusFlag::IsPrompt,
        StatusFlag::IsDecayedLeptonHadron,
        StatusFlag::IsTauDecayProduct,
        StatusFlag::IsPromptTauDecayProduct,
        StatusFlag::IsDirectTauDecayProduct,
        StatusFlag::IsDirectPromptTauDecayProduct,
        StatusFlag::IsDirectHadronDecayProduct,
        StatusFlag::IsHardProcess,
        StatusFlag::FromHardProcess,
        StatusFlag::IsHardProcessTauDecayProduct,
        StatusFlag::IsDirectHardProcessTauDecayProduct,
        StatusFlag::FromHardProcessBeforeFsr,
        StatusFlag::IsFirstCopy,
        StatusFlag::IsLastCopy,
        StatusFlag::IsLastCopyBeforeFsr,
    ];

    /// Bit position of the flag in the raw mask
    #[inline]
    pub fn bit(&self) -> u8 {
        *self as u8
    }

    /// The flag name as written in NanoAOD documentation
    pub fn name(&self) -> &'static str {
        match self {
            StatusFlag::IsPrompt => "isPrompt",
            StatusFlag::IsDecayedLeptonHadron => "isDecayedLeptonHadron",
            StatusFlag::IsTauDecayProduct => "isTauDecayProduct",
            StatusFlag::IsPromptTauDecayProduct => "isPromptTauDecayProduct",
            StatusFlag::IsDirectTauDecayProduct => "isDirectTauDecayProduct",
            StatusFlag::IsDirectPromptTauDecayProduct => "isDirectPromptTauDecayProduct",
            StatusFlag::IsDirectHadronDecayProduct => "isDirectHadronDecayProduct",
            StatusFlag::IsHardProcess => "isHardProcess",
            StatusFlag::FromHardProcess => "fromHardProcess",
            StatusFlag::IsHardProcessTauDecayProduct => "isHardProcessTauDecayProduct",
            StatusFlag::IsDirectHardProcessTauDecayProduct => {
                "isDirectHardProcessTauDecayProduct"
            }
            StatusFlag::FromHardProcessBeforeFsr => "fromHardProcessBeforeFSR",
            StatusFlag::IsFirstCopy => "isFirstCopy",
            StatusFlag::IsLastCopy => "isLastCopy",
            StatusFlag::IsLastCopyBeforeFsr => "isLastCopyBeforeFSR",
        }
    }
}

/// Convert from the NanoAOD flag name
impl TryFrom<&str> for StatusFlag {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "isPrompt" => Ok(Self::IsPrompt),
            "isDecayedLeptonHadron" => Ok(Self::IsDecayedLeptonHadron),
            "isTauDecayProduct" => Ok(Self::IsTauDecayProduct),
            "isPromptTauDecayProduct" => Ok(Self::IsPromptTauDecayProduct),
            "isDirectTauDecayProduct" => Ok(Self::IsDirectTauDecayProduct),
            "isDirectPromptTauDecayProduct" => Ok(Self::IsDirectPromptTauDecayProduct),
            "isDirectHadronDecayProduct" => Ok(Self::IsDirectHadronDecayProduct),
            "isHardProcess" => Ok(Self::IsHardProcess),
            "fromHardProcess" => Ok(Self::FromHardProcess),
            "isHardProcessTauDecayProduct" => Ok(Self::IsHardProcessTauDecayProduct),
            "isDirectHardProcessTauDecayProduct" => Ok(Self::IsDirectHardProcessTauDecayProduct),
            "fromHardProcessBeforeFSR" => Ok(Self::FromHardProcessBeforeFsr),
            "isFirstCopy" => Ok(Self::IsFirstCopy),
            "isLastCopy" => Ok(Self::IsLastCopy),
            "isLastCopyBeforeFSR" => Ok(Self::IsLastCopyBeforeFsr),
            _ => Err(Error::FailedToInferStatusFlag(s.to_string())),
        }
    }
}

/// Convert from a raw bit position
impl TryFrom<u8> for StatusFlag {
    type Error = Error;

    fn try_from(bit: u8) -> Result<Self, Self::Error> {
        StatusFlag::ALL
            .get(bit as usize)
            .copied()
            .ok_or_else(|| Error::FailedToInferStatusFlag(f!("bit {bit}")))
    }
}

/// Decoded view over the raw `statusFlags` bitmask
///
/// Thin newtype over the raw integer; each query shifts out the relevant
/// bit rather than storing fifteen booleans per particle.
///
/// ```rust
/// # use natools_gen::{StatusFlag, StatusFlags};
/// let flags = StatusFlags::new(1 << 7);
///
/// assert!(flags.contains(StatusFlag::IsHardProcess));
/// assert!(!flags.contains(StatusFlag::IsLastCopy));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusFlags(i32);

impl StatusFlags {
    /// Wrap a raw bitmask from the record
    pub fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// The raw bitmask value
    pub fn raw(&self) -> i32 {
        self.0
    }

    /// Check a single named flag
    #[inline]
    pub fn contains(&self, flag: StatusFlag) -> bool {
        (self.0 >> flag.bit()) & 1 == 1
    }

    /// Decode every named flag into a name -> bool map
    ///
    /// ```rust
    /// # use natools_gen::StatusFlags;
    /// let decoded = StatusFlags::new(1 << 13).to_map();
    ///
    /// assert_eq!(decoded["isLastCopy"], true);
    /// assert!(decoded.values().filter(|set| **set).count() == 1);
    /// ```
    pub fn to_map(&self) -> BTreeMap<&'static str, bool> {
        StatusFlag::ALL
            .iter()
            .map(|flag| (flag.name(), self.contains(*flag)))
            .collect()
    }
}

/// Short name for a PDG ID, where one is commonly used
///
/// Covers the quarks, leptons, and bosons that show up in decay-structure
/// plots. Keyed on `|pdg_id|`, so antiparticles share the name.
///
/// ```rust
/// # use natools_gen::pdg_name;
/// assert_eq!(pdg_name(6), Some("t"));
/// assert_eq!(pdg_name(-24), Some("W"));
/// assert_eq!(pdg_name(2212), None);
/// ```
pub fn pdg_name(pdg_id: i32) -> Option<&'static str> {
    match pdg_id.abs() {
        1 => Some("d"),
        2 => Some("u"),
        3 => Some("s"),
        4 => Some("c"),
        5 => Some("b"),
        6 => Some("t"),
        11 => Some("e"),
        12 => Some("nu_e"),
        13 => Some("mu"),
        14 => Some("nu_mu"),
        15 => Some("tau"),
        16 => Some("nu_tau"),
        21 => Some("g"),
        22 => Some("photon"),
        23 => Some("Z"),
        24 => Some("W"),
        25 => Some("h"),
        _ => None,
    }
}
