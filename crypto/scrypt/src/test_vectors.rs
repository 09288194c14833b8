// RFC 7914 sections 8 to 10.

use crate::block::Block;

pub const SALSA_INPUT: &str = "7e879a214f3ec9867ca940e641718f26baee555b8c61c1b50df846116dcd3b1d\
                               ee24f319df9b3d8514121e4b5ac5aa3276021d2909c74829edebc68db8b8c25e";

pub const SALSA_OUTPUT: &str = "a41f859c6608cc993b81cacb020cef05044b2181a2fd337dfd7b1c6396682f29\
                                b4393168e3c9e6bcfe6bc5b7a06d96bae424cc102c91745c24ad673dc7618f81";

pub const BLOCK_MIX_INPUT: &str = "f7ce0b653d2d72a4108cf5abe912ffdd777616dbbb27a70e8204f3ae2d0f6fad\
                                   89f68f4811d1e87bcc3bd7400a9ffd29094f0184639574f39ae5a1315217bcd7\
                                   894991447213bb226c25b54da86370fbcd984380374666bb8ffcb5bf40c254b0\
                                   67d27c51ce4ad5fed829c90b505a571b7f4d1cad6a523cda770e67bceaaf7e89";

pub const BLOCK_MIX_OUTPUT: &str = "a41f859c6608cc993b81cacb020cef05044b2181a2fd337dfd7b1c6396682f29\
                                    b4393168e3c9e6bcfe6bc5b7a06d96bae424cc102c91745c24ad673dc7618f81\
                                    20edc975323881a80540f64c162dcd3c21077cfe5f8d5fe2b1a4168f953678b7\
                                    7d3b3d803b60e4ab920996e59b4d53b65d2a225877d5edf5842cb9f14eefe425";

pub const RO_MIX_OUTPUT: &str = "79ccc193629debca047f0b70604bf6b62ce3dd4a9626e355fafc6198e6ea2b46\
                                 d58413673b99b029d665c357601fb426a0b2f4bba200ee9f0a43d19b571a9c71\
                                 ef1142e65d5a266fddca832ce59faa7cac0b9cf1be2bffca300d01ee387619c4\
                                 ae12fd4438f203a0e4e1c47ec314861f4e9087cb33396a6873e8f9d2539a4b8e";

pub fn unhex(s: &str) -> Vec<u8> {
    assert!(s.len() % 2 == 0, "odd-length hex string");
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}

pub fn words(s: &str) -> Vec<u32> {
    let bytes = unhex(s);
    let mut out = vec![0; bytes.len() / 4];
    crate::words::bytes_to_words(&bytes, &mut out);
    out
}

pub fn block(s: &str) -> Block {
    let mut out = [0; 16];
    out.copy_from_slice(&words(s));
    out
}
