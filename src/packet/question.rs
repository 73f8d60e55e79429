use crate::buffer::{PacketBuffer, ReaderError};

/// Skip one question entry
///
/// QNAME a domain name represented as a sequence of labels, followed by
/// QTYPE and QCLASS, two octets each. The entry is only traversed, its
/// content stays untouched.
pub fn skip(buffer: &mut PacketBuffer<'_>) -> Result<(), ReaderError> {
    buffer.skip_qname()?;
    let _qtype = buffer.read_u16()?;
    let _qclass = buffer.read_u16()?;

    Ok(())
}
