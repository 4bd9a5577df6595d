// Code generated by schemagen. DO NOT EDIT.

/// Gzip-compressed resolved schemas of the `users` service, keyed by name.
pub static EMBEDDED: &[(&str, &[u8])] = &[
    ("m", &[
        0x1f, 0x8b, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0xff, 0x4d, 0x8c,
        0x3b, 0x0e, 0x80, 0x20, 0x10, 0x44, 0xef, 0x32, 0x5a, 0x92, 0x10, 0x5b,
        0x8e, 0xa3, 0x2c, 0x66, 0x4d, 0xf8, 0x64, 0x5d, 0x0b, 0x43, 0xb8, 0xbb,
        0x90, 0x58, 0xd0, 0x4c, 0x31, 0xf3, 0xe6, 0x55, 0x78, 0x0a, 0x9c, 0x58,
        0x39, 0xa7, 0x1b, 0xae, 0x82, 0xfd, 0xc8, 0xd8, 0xab, 0xf8, 0x44, 0xb8,
        0xcd, 0x40, 0xdf, 0x42, 0x70, 0xe0, 0xa4, 0x74, 0x92, 0xa0, 0x35, 0x83,
        0x22, 0xb9, 0x90, 0x28, 0xd3, 0x74, 0x59, 0x85, 0x42, 0xc7, 0x16, 0x3b,
        0x09, 0x6d, 0x9f, 0x06, 0xff, 0x2b, 0xf2, 0x7e, 0xd1, 0xa1, 0x68, 0x1f,
        0xd6, 0x4c, 0xd8, 0x7f, 0x75, 0x00, 0x00, 0x00,
    ]),
    ("n", &[
        0x1f, 0x8b, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0xff, 0xab, 0x56,
        0x4a, 0x49, 0x4d, 0xcb, 0xcc, 0xcb, 0x2c, 0xc9, 0xcc, 0xcf, 0x2b, 0x56,
        0xb2, 0xaa, 0xae, 0xd5, 0x51, 0x2a, 0xa9, 0x2c, 0x48, 0x55, 0xb2, 0x52,
        0xca, 0x2b, 0xcd, 0xc9, 0x51, 0xaa, 0x05, 0x00, 0x25, 0x02, 0x8c, 0x31,
        0x20, 0x00, 0x00, 0x00,
    ]),
];
