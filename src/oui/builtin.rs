//! Tables compiled into the binary.
//!
//! `BUNDLED_VENDORS` covers well-known prefixes for deployments that ship
//! without an on-disk registry. `FALLBACK_VENDORS` is the last-resort table
//! that keeps lookups answering even when nothing else is available.

use std::collections::HashMap;

/// Well-known OUI prefixes, sorted by prefix. Same shape as a generated
/// vendor table: 6 uppercase hex characters, no separators.
pub(super) const BUNDLED_VENDORS: &[(&str, &str)] = &[
    ("000000", "Xerox Corporation"),
    ("00000C", "Cisco Systems, Inc"),
    ("00005E", "IANA"),
    ("000142", "Cisco Systems, Inc"),
    ("000393", "Apple, Inc."),
    ("0004AC", "Intel Corporate"),
    ("000502", "Apple, Inc."),
    ("00056D", "Ubiquiti Networks"),
    ("00095B", "Netgear"),
    ("000A95", "Apple, Inc."),
    ("000C29", "VMware, Inc."),
    ("000D3A", "Microsoft Corporation"),
    ("000D93", "Apple, Inc."),
    ("00146C", "Netgear"),
    ("001478", "TP-Link Technologies Co., Ltd."),
    ("00155D", "Microsoft Corporation"),
    ("001599", "Samsung Electronics Co., Ltd"),
    ("0016D4", "TP-Link Technologies Co., Ltd."),
    ("001788", "Signify Netherlands B.V. (Philips Hue)"),
    ("0017F2", "Apple, Inc."),
    ("0018AF", "Samsung Electronics Co., Ltd"),
    ("001B63", "Apple, Inc."),
    ("001C10", "Synology Incorporated"),
    ("001CB3", "Apple, Inc."),
    ("001D25", "Samsung Electronics Co., Ltd"),
    ("002241", "Apple, Inc."),
    ("002248", "Microsoft Corporation"),
    ("002436", "Apple, Inc."),
    ("002608", "Apple, Inc."),
    ("0026BB", "Apple, Inc."),
    ("005056", "VMware, Inc."),
    ("080027", "Oracle Corporation (VirtualBox)"),
    ("147590", "Samsung Electronics Co., Ltd"),
    ("149182", "TP-Link Technologies Co., Ltd."),
    ("18E829", "Ubiquiti Networks"),
    ("240AC4", "Espressif Inc."),
    ("245A4C", "Ubiquiti Networks"),
    ("246F28", "Espressif Inc."),
    ("24A43C", "Ubiquiti Networks"),
    ("28CFE9", "Apple, Inc."),
    ("2C3AE8", "Espressif Inc."),
    ("30AEA4", "Espressif Inc."),
    ("3C6105", "Espressif Inc."),
    ("483FDA", "Espressif Inc."),
    ("50C7BF", "TP-Link Technologies Co., Ltd."),
    ("5855CA", "Apple, Inc."),
    ("70886B", "TP-Link Technologies Co., Ltd."),
    ("7C6DF8", "Apple, Inc."),
    ("847E40", "Samsung Electronics Co., Ltd"),
    ("A45E60", "Apple, Inc."),
    ("B827EB", "Raspberry Pi Foundation"),
    ("BC5C4C", "Apple, Inc."),
    ("D83ADD", "Raspberry Pi Trading Ltd"),
    ("DCA632", "Raspberry Pi Trading Ltd"),
    ("E45F01", "Raspberry Pi Trading Ltd"),
    ("F01898", "Apple, Inc."),
];

/// Last-resort table. Deliberately tiny; anything not listed here resolves
/// to the "Unknown" sentinel when no better source loaded.
pub(super) const FALLBACK_VENDORS: &[(&str, &str)] = &[
    ("000000", "Xerox Corporation"),
    ("00000C", "Cisco Systems, Inc"),
    ("000C29", "VMware, Inc."),
    ("00155D", "Microsoft Corporation"),
    ("240AC4", "Espressif Inc."),
    ("B827EB", "Raspberry Pi Foundation"),
];

pub(super) fn bundled_map() -> HashMap<String, String> {
    to_map(BUNDLED_VENDORS)
}

pub(super) fn fallback_map() -> HashMap<String, String> {
    to_map(FALLBACK_VENDORS)
}

fn to_map(table: &[(&str, &str)]) -> HashMap<String, String> {
    table
        .iter()
        .map(|(prefix, vendor)| (prefix.to_string(), vendor.to_string()))
        .collect()
}
