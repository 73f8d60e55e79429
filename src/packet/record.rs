use crate::buffer::{PacketBuffer, ReaderError};

/// Skip one resource record
///
/// NAME, then TYPE and CLASS (two octets each), TTL (four octets) and
/// RDLENGTH. The RDATA body is stepped over as a whole, using RDLENGTH;
/// a record claiming more data than the packet holds is an error.
pub fn skip(buffer: &mut PacketBuffer<'_>) -> Result<(), ReaderError> {
    buffer.skip_qname()?;
    let _rtype = buffer.read_u16()?;
    let _class = buffer.read_u16()?;
    let _ttl = buffer.read_u32()?;

    let data_len = buffer.read_u16()?;
    buffer.step(data_len as usize)?;

    Ok(())
}
