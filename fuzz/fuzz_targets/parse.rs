#![no_main]

use dns_skim::{DnsSummary, PacketBuffer};

libfuzzer_sys::fuzz_target!(|data: &[u8]| {
    let _ = DnsSummary::from(PacketBuffer::new(data));
});
