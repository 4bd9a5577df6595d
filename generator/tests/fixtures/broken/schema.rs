// Code generated by schemagen. DO NOT EDIT.

/// Gzip-compressed resolved schemas of the `broken` service, keyed by name.
pub static EMBEDDED: &[(&str, &[u8])] = &[
    ("ok", &[
        0x1f, 0x8b, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0xff, 0xab, 0xae,
        0x05, 0x00, 0x43, 0xbf, 0xa6, 0xa3, 0x02, 0x00, 0x00, 0x00,
    ]),
    ("bad", &[
        0x6e, 0x6f, 0x74, 0x20, 0x67, 0x7a, 0x69, 0x70,
    ]),
];
