//! Known-answer tests against the published check values.

use oxicrc_core::catalog::{self, CATALOG, CHECK_INPUT};
use oxicrc_core::{Crc, CrcError, CrcParams, Width, reference};

#[test]
fn test_every_catalog_check_value() {
    for entry in CATALOG {
        let mut crc = entry.engine().expect("catalog params are valid");
        crc.update(CHECK_INPUT);
        let checksum = crc.checksum();
        assert_eq!(
            checksum.value(),
            entry.check,
            "{} produced {:#x}",
            entry.name,
            checksum
        );
        assert_eq!(checksum.as_bytes().len(), entry.params.width.bytes());
    }
}

#[test]
fn test_every_catalog_entry_verifies() {
    let failures: Vec<_> = CATALOG
        .iter()
        .filter(|entry| !entry.verify().expect("catalog params are valid"))
        .map(|entry| entry.name)
        .collect();
    assert!(failures.is_empty(), "failed: {:?}", failures);
}

#[test]
fn test_headline_vectors() {
    let cases = [
        ("CRC-16/ARC", 0xBB3D),
        ("CRC-16/MODBUS", 0x4B37),
        ("CRC-16/XMODEM", 0x31C3),
        ("CRC-16/CCITT-FALSE", 0x29B1),
        ("CRC-16/DNP", 0xEA82),
        ("CRC-16/GENIBUS", 0xD64E),
        ("CRC-16/KERMIT", 0x2189),
        ("CRC-32/IEEE", 0xCBF43926),
        ("CRC-32/POSIX", 0x765E7680),
        ("CRC-8/DALLAS", 0xA1),
    ];
    for (name, expected) in cases {
        let mut crc = Crc::from_name(name).unwrap();
        crc.update(b"123456789");
        assert_eq!(crc.checksum().value(), expected, "{}", name);
    }
}

#[test]
fn test_end_to_end_arc() {
    let mut crc = Crc::custom(16, 0x8005, 0x0000, true, true, 0x0000).unwrap();
    crc.update(b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    let checksum = crc.checksum();
    assert_eq!(checksum.as_bytes(), &[0x17, 0x8C]);
    assert_eq!(checksum.as_i16(), Some(0x178C));
    assert_eq!(checksum.to_string(), "178C");

    let hex: Vec<String> = checksum.as_bytes().iter().map(|b| format!("{b:02X}")).collect();
    assert_eq!(hex.join("-"), "17-8C");
}

#[test]
fn test_all_ones_is_negative_one() {
    // An untouched MODBUS register finalizes to 0xFFFF.
    let crc = Crc::new(CrcParams::CRC16_MODBUS).unwrap();
    let checksum = crc.checksum();
    assert_eq!(checksum.as_bytes(), &[0xFF, 0xFF]);
    assert_eq!(checksum.as_i16(), Some(-1));
    assert_eq!(checksum.as_u16(), Some(0xFFFF));
}

#[test]
fn test_aliases_agree() {
    let groups: &[&[&str]] = &[
        &["CRC-16/ARC", "CRC-16/LHA", "CRC-16/IEEE-802.3"],
        &["CRC-16/GENIBUS", "CRC-16/DARC", "CRC-16/EPC"],
        &["CRC-16/IBM-SDLC", "CRC-16/ISO-HDLC", "CRC-16/X-25"],
        &["CRC-32/ISO-HDLC", "CRC-32/IEEE", "PKZIP"],
        &["CRC-8/MAXIM-DOW", "CRC-8/DALLAS", "CRC-8/MAXIM"],
    ];
    let inputs: [&[u8]; 4] = [b"", b"a", b"123456789", &[0xFF; 300]];

    for group in groups {
        for input in inputs {
            let values: Vec<u32> = group
                .iter()
                .map(|name| {
                    let mut crc = Crc::from_name(name).unwrap();
                    crc.update(input);
                    crc.checksum().value()
                })
                .collect();
            assert!(
                values.windows(2).all(|w| w[0] == w[1]),
                "{:?} disagree: {:x?}",
                group,
                values
            );
        }
    }
}

#[test]
fn test_engines_from_same_factory_are_independent() {
    let mut a = Crc::new(CrcParams::CRC16_DNP).unwrap();
    let mut b = Crc::new(CrcParams::CRC16_DNP).unwrap();
    a.update(b"first message");
    b.update(b"123456789");
    assert_eq!(b.checksum().value(), 0xEA82);
    assert_ne!(a.checksum(), b.checksum());
    assert!(std::sync::Arc::ptr_eq(a.table(), b.table()));
}

#[test]
fn test_dropped_custom_engines_release_their_tables() {
    let handles: Vec<_> = (0..20_000u32)
        .map(|i| {
            let poly = 0x7100_0001 + 2 * i;
            let crc = Crc::custom(32, poly, 0, true, true, 0).unwrap();
            std::sync::Arc::downgrade(crc.table())
        })
        .collect();
    let alive = handles.iter().filter(|h| h.upgrade().is_some()).count();
    assert_eq!(alive, 0);

    let a = Crc::custom(32, 0x7100_0001, 0, true, true, 0).unwrap();
    let b = Crc::custom(32, 0x7100_0001, 0, true, true, 0).unwrap();
    assert!(std::sync::Arc::ptr_eq(a.table(), b.table()));
}

#[test]
fn test_reset_matches_fresh_engine() {
    for entry in CATALOG {
        let mut reused = entry.engine().unwrap();
        reused.update(b"some earlier message that must not leak");
        let _ = reused.finalize_reset();
        reused.update(CHECK_INPUT);
        assert_eq!(reused.finalize_reset().value(), entry.check, "{}", entry.name);
    }
}

#[test]
fn test_table_engine_matches_reference_on_long_input() {
    let data: Vec<u8> = (0..4096u32).map(|i| (i * 31 + 7) as u8).collect();
    for entry in CATALOG {
        let fast = Crc::compute(entry.params, &data).unwrap().value();
        let slow = reference::checksum(&entry.params, &data);
        assert_eq!(fast, slow, "{}", entry.name);
    }
}

#[test]
fn test_construction_errors() {
    assert!(matches!(
        Crc::custom(64, 0x42F0E1EBA9EA3693u64 as u32, 0, true, true, 0),
        Err(CrcError::InvalidWidth(64))
    ));
    assert!(matches!(
        Crc::custom(32, 0, 0, true, true, 0),
        Err(CrcError::ZeroPolynomial)
    ));
    assert!(matches!(
        Crc::custom(16, 0x1_8005, 0, true, true, 0),
        Err(CrcError::ValueTooWide { width: 16, .. })
    ));
    assert!(matches!(
        Crc::from_name("CRC-64/XZ"),
        Err(CrcError::UnknownAlgorithm(name)) if name == "CRC-64/XZ"
    ));
}

#[test]
fn test_by_width() {
    assert!(catalog::by_width(Width::W8).all(|e| e.name.starts_with("CRC-8/")));
    assert!(catalog::by_width(Width::W16).all(|e| e.name.starts_with("CRC-16/")));
    assert!(catalog::by_width(Width::W32).all(|e| e.name.starts_with("CRC-32/")));
}
