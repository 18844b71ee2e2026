//! Catalog of standard CRC algorithms.
//!
//! Every CRC-8, CRC-16 and CRC-32 algorithm of the
//! [CRC RevEng catalogue](https://reveng.sourceforge.io/crc-catalogue/) is
//! available twice:
//!
//! - as a [`CrcParams`] associated constant (`CrcParams::CRC16_MODBUS`), and
//! - as a [`CatalogEntry`] in [`CATALOG`], which carries the canonical name,
//!   the documented aliases and the published check value.
//!
//! Aliases denote bit-identical parameter sets, e.g. `CRC-16/ARC`,
//! `CRC-16/LHA` and `CRC-16/IEEE-802.3` all resolve to the same entry.
//!
//! ```
//! use oxicrc_core::catalog;
//!
//! let entry = catalog::find("CRC-16/CCITT-FALSE").unwrap();
//! assert_eq!(entry.name, "CRC-16/IBM-3740");
//! assert_eq!(entry.check, 0x29B1);
//! assert!(entry.verify().unwrap());
//! ```

use crate::engine::{Checksum, Crc};
use crate::error::Result;
use crate::params::{CrcParams, Width};

/// The standard check input, the ASCII string `"123456789"`.
pub const CHECK_INPUT: &[u8] = b"123456789";

/// A named CRC algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Canonical name, e.g. `"CRC-16/ARC"`.
    pub name: &'static str,
    /// Alternative names for the same parameters.
    pub aliases: &'static [&'static str],
    /// Algorithm parameters.
    pub params: CrcParams,
    /// CRC of [`CHECK_INPUT`].
    pub check: u32,
}

impl CatalogEntry {
    /// Returns `true` if `name` is the canonical name or one of the aliases
    /// (ASCII case-insensitive).
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }

    /// Create a fresh engine for this algorithm.
    pub fn engine(&self) -> Result<Crc> {
        Crc::new(self.params)
    }

    /// Checksum of [`CHECK_INPUT`] computed by a fresh engine.
    pub fn compute_check(&self) -> Result<Checksum> {
        Crc::compute(self.params, CHECK_INPUT)
    }

    /// Whether a fresh engine reproduces the published check value.
    pub fn verify(&self) -> Result<bool> {
        Ok(self.compute_check()?.value() == self.check)
    }
}

/// Look up a catalog entry by name or alias.
pub fn find(name: &str) -> Option<&'static CatalogEntry> {
    let name = name.trim();
    CATALOG.iter().find(|entry| entry.matches(name))
}

/// All catalog entries of the given width.
pub fn by_width(width: Width) -> impl Iterator<Item = &'static CatalogEntry> {
    CATALOG.iter().filter(move |entry| entry.params.width == width)
}

macro_rules! catalog {
    ($(
        $(#[$meta:meta])*
        $ident:ident = $name:literal [$($alias:literal),* $(,)?]
            ($width:ident, $poly:literal, $init:literal, $refin:literal, $refout:literal, $xorout:literal)
            check $check:literal;
    )*) => {
        impl CrcParams {
            $(
                #[doc = concat!("`", $name, "` (check `", stringify!($check), "`).")]
                $(#[$meta])*
                pub const $ident: Self = Self {
                    width: Width::$width,
                    polynomial: $poly,
                    init: $init,
                    reflect_in: $refin,
                    reflect_out: $refout,
                    xor_out: $xorout,
                };
            )*
        }

        /// Every known algorithm, ordered by width and name.
        pub static CATALOG: &[CatalogEntry] = &[
            $(
                CatalogEntry {
                    name: $name,
                    aliases: &[$($alias),*],
                    params: CrcParams::$ident,
                    check: $check,
                },
            )*
        ];
    };
}

catalog! {
    // ── CRC-8 ────────────────────────────────────────────────────────────
    CRC8_AUTOSAR = "CRC-8/AUTOSAR" [] (W8, 0x2F, 0xFF, false, false, 0xFF) check 0xDF;
    CRC8_BLUETOOTH = "CRC-8/BLUETOOTH" [] (W8, 0xA7, 0x00, true, true, 0x00) check 0x26;
    CRC8_CDMA2000 = "CRC-8/CDMA2000" [] (W8, 0x9B, 0xFF, false, false, 0x00) check 0xDA;
    CRC8_DARC = "CRC-8/DARC" [] (W8, 0x39, 0x00, true, true, 0x00) check 0x15;
    CRC8_DVB_S2 = "CRC-8/DVB-S2" [] (W8, 0xD5, 0x00, false, false, 0x00) check 0xBC;
    CRC8_GSM_A = "CRC-8/GSM-A" [] (W8, 0x1D, 0x00, false, false, 0x00) check 0x37;
    CRC8_GSM_B = "CRC-8/GSM-B" [] (W8, 0x49, 0x00, false, false, 0xFF) check 0x94;
    CRC8_HITAG = "CRC-8/HITAG" [] (W8, 0x1D, 0xFF, false, false, 0x00) check 0xB4;
    CRC8_I_432_1 = "CRC-8/I-432-1" ["CRC-8/ITU"] (W8, 0x07, 0x00, false, false, 0x55) check 0xA1;
    CRC8_I_CODE = "CRC-8/I-CODE" [] (W8, 0x1D, 0xFD, false, false, 0x00) check 0x7E;
    CRC8_LTE = "CRC-8/LTE" [] (W8, 0x9B, 0x00, false, false, 0x00) check 0xEA;
    /// 1-Wire bus devices.
    CRC8_MAXIM_DOW = "CRC-8/MAXIM-DOW" ["CRC-8/MAXIM", "CRC-8/DALLAS", "DOW-CRC"]
        (W8, 0x31, 0x00, true, true, 0x00) check 0xA1;
    CRC8_MIFARE_MAD = "CRC-8/MIFARE-MAD" [] (W8, 0x1D, 0xC7, false, false, 0x00) check 0x99;
    CRC8_NRSC_5 = "CRC-8/NRSC-5" [] (W8, 0x31, 0xFF, false, false, 0x00) check 0xF7;
    CRC8_OPENSAFETY = "CRC-8/OPENSAFETY" [] (W8, 0x2F, 0x00, false, false, 0x00) check 0x3E;
    CRC8_ROHC = "CRC-8/ROHC" [] (W8, 0x07, 0xFF, true, true, 0x00) check 0xD0;
    CRC8_SAE_J1850 = "CRC-8/SAE-J1850" [] (W8, 0x1D, 0xFF, false, false, 0xFF) check 0x4B;
    /// SMBus packet error checking.
    CRC8_SMBUS = "CRC-8/SMBUS" ["CRC-8"] (W8, 0x07, 0x00, false, false, 0x00) check 0xF4;
    CRC8_TECH_3250 = "CRC-8/TECH-3250" ["CRC-8/AES", "CRC-8/EBU"]
        (W8, 0x1D, 0xFF, true, true, 0x00) check 0x97;
    CRC8_WCDMA = "CRC-8/WCDMA" [] (W8, 0x9B, 0x00, true, true, 0x00) check 0x25;

    // ── CRC-16 ───────────────────────────────────────────────────────────
    /// Also used by LHA archives.
    CRC16_ARC = "CRC-16/ARC" ["ARC", "CRC-16", "CRC-16/LHA", "CRC-IBM", "CRC-16/IEEE-802.3"]
        (W16, 0x8005, 0x0000, true, true, 0x0000) check 0xBB3D;
    CRC16_CDMA2000 = "CRC-16/CDMA2000" [] (W16, 0xC867, 0xFFFF, false, false, 0x0000) check 0x4C06;
    CRC16_CMS = "CRC-16/CMS" [] (W16, 0x8005, 0xFFFF, false, false, 0x0000) check 0xAEE7;
    CRC16_DDS_110 = "CRC-16/DDS-110" [] (W16, 0x8005, 0x800D, false, false, 0x0000) check 0x9ECF;
    CRC16_DECT_R = "CRC-16/DECT-R" ["R-CRC-16"] (W16, 0x0589, 0x0000, false, false, 0x0001) check 0x007E;
    CRC16_DECT_X = "CRC-16/DECT-X" ["X-CRC-16"] (W16, 0x0589, 0x0000, false, false, 0x0000) check 0x007F;
    /// Distributed Network Protocol.
    CRC16_DNP = "CRC-16/DNP" [] (W16, 0x3D65, 0x0000, true, true, 0xFFFF) check 0xEA82;
    CRC16_EN_13757 = "CRC-16/EN-13757" [] (W16, 0x3D65, 0x0000, false, false, 0xFFFF) check 0xC2B7;
    CRC16_GENIBUS = "CRC-16/GENIBUS"
        ["CRC-16/DARC", "CRC-16/EPC", "CRC-16/EPC-C1G2", "CRC-16/I-CODE"]
        (W16, 0x1021, 0xFFFF, false, false, 0xFFFF) check 0xD64E;
    CRC16_GSM = "CRC-16/GSM" [] (W16, 0x1021, 0x0000, false, false, 0xFFFF) check 0xCE3C;
    /// Commonly called CRC-16/CCITT-FALSE.
    CRC16_IBM_3740 = "CRC-16/IBM-3740" ["CRC-16/AUTOSAR", "CRC-16/CCITT-FALSE"]
        (W16, 0x1021, 0xFFFF, false, false, 0x0000) check 0x29B1;
    /// HDLC frame check sequence.
    CRC16_IBM_SDLC = "CRC-16/IBM-SDLC"
        ["CRC-16/ISO-HDLC", "CRC-16/ISO-IEC-14443-3-B", "CRC-16/X-25", "CRC-B", "X-25"]
        (W16, 0x1021, 0xFFFF, true, true, 0xFFFF) check 0x906E;
    CRC16_ISO_IEC_14443_3_A = "CRC-16/ISO-IEC-14443-3-A" ["CRC-A"]
        (W16, 0x1021, 0xC6C6, true, true, 0x0000) check 0xBF05;
    CRC16_KERMIT = "CRC-16/KERMIT"
        ["CRC-16/BLUETOOTH", "CRC-16/CCITT", "CRC-16/CCITT-TRUE", "CRC-16/V-41-LSB", "CRC-CCITT", "KERMIT"]
        (W16, 0x1021, 0x0000, true, true, 0x0000) check 0x2189;
    CRC16_LJ1200 = "CRC-16/LJ1200" [] (W16, 0x6F63, 0x0000, false, false, 0x0000) check 0xBDF4;
    CRC16_M17 = "CRC-16/M17" [] (W16, 0x5935, 0xFFFF, false, false, 0x0000) check 0x772B;
    CRC16_MAXIM_DOW = "CRC-16/MAXIM-DOW" ["CRC-16/MAXIM"]
        (W16, 0x8005, 0x0000, true, true, 0xFFFF) check 0x44C2;
    CRC16_MCRF4XX = "CRC-16/MCRF4XX" [] (W16, 0x1021, 0xFFFF, true, true, 0x0000) check 0x6F91;
    CRC16_MODBUS = "CRC-16/MODBUS" ["MODBUS"] (W16, 0x8005, 0xFFFF, true, true, 0x0000) check 0x4B37;
    CRC16_NRSC_5 = "CRC-16/NRSC-5" [] (W16, 0x080B, 0xFFFF, true, true, 0x0000) check 0xA066;
    CRC16_OPENSAFETY_A = "CRC-16/OPENSAFETY-A" [] (W16, 0x5935, 0x0000, false, false, 0x0000) check 0x5D38;
    CRC16_OPENSAFETY_B = "CRC-16/OPENSAFETY-B" [] (W16, 0x755B, 0x0000, false, false, 0x0000) check 0x20FE;
    CRC16_PROFIBUS = "CRC-16/PROFIBUS" ["CRC-16/IEC-61158-2"]
        (W16, 0x1DCF, 0xFFFF, false, false, 0xFFFF) check 0xA819;
    CRC16_RIELLO = "CRC-16/RIELLO" [] (W16, 0x1021, 0xB2AA, true, true, 0x0000) check 0x63D0;
    CRC16_SPI_FUJITSU = "CRC-16/SPI-FUJITSU" ["CRC-16/AUG-CCITT"]
        (W16, 0x1021, 0x1D0F, false, false, 0x0000) check 0xE5CC;
    /// SCSI data integrity field.
    CRC16_T10_DIF = "CRC-16/T10-DIF" [] (W16, 0x8BB7, 0x0000, false, false, 0x0000) check 0xD0DB;
    CRC16_TELEDISK = "CRC-16/TELEDISK" [] (W16, 0xA097, 0x0000, false, false, 0x0000) check 0x0FB3;
    CRC16_TMS37157 = "CRC-16/TMS37157" [] (W16, 0x1021, 0x89EC, true, true, 0x0000) check 0x26B1;
    CRC16_UMTS = "CRC-16/UMTS" ["CRC-16/BUYPASS", "CRC-16/VERIFONE"]
        (W16, 0x8005, 0x0000, false, false, 0x0000) check 0xFEE8;
    CRC16_USB = "CRC-16/USB" [] (W16, 0x8005, 0xFFFF, true, true, 0xFFFF) check 0xB4C8;
    CRC16_XMODEM = "CRC-16/XMODEM"
        ["CRC-16/ACORN", "CRC-16/LTE", "CRC-16/V-41-MSB", "XMODEM", "ZMODEM"]
        (W16, 0x1021, 0x0000, false, false, 0x0000) check 0x31C3;

    // ── CRC-32 ───────────────────────────────────────────────────────────
    CRC32_AIXM = "CRC-32/AIXM" ["CRC-32Q"] (W32, 0x814141AB, 0x00000000, false, false, 0x00000000) check 0x3010BF7F;
    CRC32_AUTOSAR = "CRC-32/AUTOSAR" []
        (W32, 0xF4ACFB13, 0xFFFFFFFF, true, true, 0xFFFFFFFF) check 0x1697D06A;
    CRC32_BASE91_D = "CRC-32/BASE91-D" ["CRC-32D"]
        (W32, 0xA833982B, 0xFFFFFFFF, true, true, 0xFFFFFFFF) check 0x87315576;
    CRC32_BZIP2 = "CRC-32/BZIP2" ["CRC-32/AAL5", "CRC-32/DECT-B", "B-CRC-32"]
        (W32, 0x04C11DB7, 0xFFFFFFFF, false, false, 0xFFFFFFFF) check 0xFC891918;
    CRC32_CD_ROM_EDC = "CRC-32/CD-ROM-EDC" []
        (W32, 0x8001801B, 0x00000000, true, true, 0x00000000) check 0x6EC2EDC4;
    /// The POSIX `cksum` CRC (without the length suffix).
    CRC32_CKSUM = "CRC-32/CKSUM" ["CKSUM", "CRC-32/POSIX"]
        (W32, 0x04C11DB7, 0x00000000, false, false, 0xFFFFFFFF) check 0x765E7680;
    /// Castagnoli polynomial.
    CRC32_ISCSI = "CRC-32/ISCSI"
        ["CRC-32/BASE91-C", "CRC-32/CASTAGNOLI", "CRC-32/INTERLAKEN", "CRC-32C", "CRC-32/NVME"]
        (W32, 0x1EDC6F41, 0xFFFFFFFF, true, true, 0xFFFFFFFF) check 0xE3069283;
    /// The CRC-32 of ZIP, GZIP, PNG and Ethernet.
    CRC32_ISO_HDLC = "CRC-32/ISO-HDLC"
        ["CRC-32", "CRC-32/ADCCP", "CRC-32/V-42", "CRC-32/XZ", "PKZIP", "CRC-32/IEEE", "CRC-32/IEEE-802.3"]
        (W32, 0x04C11DB7, 0xFFFFFFFF, true, true, 0xFFFFFFFF) check 0xCBF43926;
    CRC32_JAMCRC = "CRC-32/JAMCRC" ["JAMCRC"]
        (W32, 0x04C11DB7, 0xFFFFFFFF, true, true, 0x00000000) check 0x340BC6D9;
    CRC32_MEF = "CRC-32/MEF" [] (W32, 0x741B8CD7, 0xFFFFFFFF, true, true, 0x00000000) check 0xD2C22F51;
    CRC32_MPEG_2 = "CRC-32/MPEG-2" []
        (W32, 0x04C11DB7, 0xFFFFFFFF, false, false, 0x00000000) check 0x0376E6E7;
    CRC32_XFER = "CRC-32/XFER" ["XFER"] (W32, 0x000000AF, 0x00000000, false, false, 0x00000000) check 0xBD0BE338;
}

impl CrcParams {
    /// Alias of [`CrcParams::CRC8_MAXIM_DOW`].
    pub const CRC8_DALLAS: Self = Self::CRC8_MAXIM_DOW;
    /// Alias of [`CrcParams::CRC16_ARC`].
    pub const CRC16_LHA: Self = Self::CRC16_ARC;
    /// Alias of [`CrcParams::CRC16_ARC`].
    pub const CRC16_IEEE_802_3: Self = Self::CRC16_ARC;
    /// Alias of [`CrcParams::CRC16_IBM_3740`].
    pub const CRC16_CCITT_FALSE: Self = Self::CRC16_IBM_3740;
    /// Alias of [`CrcParams::CRC16_GENIBUS`].
    pub const CRC16_DARC: Self = Self::CRC16_GENIBUS;
    /// Alias of [`CrcParams::CRC16_GENIBUS`].
    pub const CRC16_EPC: Self = Self::CRC16_GENIBUS;
    /// Alias of [`CrcParams::CRC16_IBM_SDLC`].
    pub const CRC16_ISO_HDLC: Self = Self::CRC16_IBM_SDLC;
    /// Alias of [`CrcParams::CRC16_IBM_SDLC`].
    pub const CRC16_X25: Self = Self::CRC16_IBM_SDLC;
    /// Alias of [`CrcParams::CRC32_ISO_HDLC`].
    pub const CRC32_IEEE: Self = Self::CRC32_ISO_HDLC;
    /// Alias of [`CrcParams::CRC32_CKSUM`].
    pub const CRC32_POSIX: Self = Self::CRC32_CKSUM;
    /// Alias of [`CrcParams::CRC32_ISCSI`].
    pub const CRC32C: Self = Self::CRC32_ISCSI;
}
