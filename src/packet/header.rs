use crate::buffer::{PacketBuffer, ReaderError};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResponseCode {
    /// No error condition
    NoError = 0,
    /// Format error - The name server was unable to interpret the query.
    FormatError = 1,
    /// Server failure - The name server was unable to process this query.
    ServerFailure = 2,
    /// Name Error - The domain name referenced in the query does not exist.
    /// Previously named NXDOMAIN
    NameError = 3,
    /// Not Implemented - The name server does not support the requested kind of query.
    NotImplemented = 4,
    /// Refused - The name server refuses to perform the operation for policy reasons.
    Refused = 5,
}

impl ResponseCode {
    pub fn from_num(num: u8) -> ResponseCode {
        match num {
            1 => ResponseCode::FormatError,
            2 => ResponseCode::ServerFailure,
            3 => ResponseCode::NameError,
            4 => ResponseCode::NotImplemented,
            5 => ResponseCode::Refused,
            _ => ResponseCode::NoError,
        }
    }
}

/// The fixed 12 byte header at the front of every packet, kept as the raw
/// big-endian values found on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Header {
    /// A 16 bit identifier assigned by the program that generates the
    /// query, copied into the corresponding reply.
    pub id: u16,
    /// QR, OPCODE, AA, TC, RD, RA, Z and RCODE packed into one 16 bit
    /// field, exactly as transmitted. See the accessor methods.
    pub flags: u16,
    /// QDCOUNT the number of entries in the question section.
    pub questions: u16,
    /// ANCOUNT the number of resource records in the answer section.
    pub answers: u16,
    /// NSCOUNT the number of name server resource records in the authority records section.
    pub authoritative_entries: u16,
    /// ARCOUNT the number of resource records in the additional records section.
    pub resource_entries: u16,
}

impl Header {
    /// Wire size of the fixed header
    pub const SIZE: usize = 12;

    pub fn read(buffer: &mut PacketBuffer<'_>) -> Result<Self, ReaderError> {
        let id = buffer.read_u16()?;
        let flags = buffer.read_u16()?;

        let questions = buffer.read_u16()?;
        let answers = buffer.read_u16()?;
        let authoritative_entries = buffer.read_u16()?;
        let resource_entries = buffer.read_u16()?;

        Ok(Self {
            id,
            flags,
            questions,
            answers,
            authoritative_entries,
            resource_entries,
        })
    }

    /// QR whether this message is a response (1) rather than a query (0).
    pub fn response(&self) -> bool {
        (self.flags & (1 << 15)) > 0
    }

    /// OPCODE the kind of query in this message, set by the originator.
    pub fn opcode(&self) -> u8 {
        ((self.flags >> 11) & 0x0F) as u8
    }

    /// AA whether the responding name server is an authority for the
    /// domain name in the question section.
    pub fn authoritative_answer(&self) -> bool {
        (self.flags & (1 << 10)) > 0
    }

    /// TC whether this message was truncated by the transmission channel.
    pub fn truncated_message(&self) -> bool {
        (self.flags & (1 << 9)) > 0
    }

    /// RD set in a query when the name server should pursue it recursively.
    pub fn recursion_desired(&self) -> bool {
        (self.flags & (1 << 8)) > 0
    }

    /// RA whether recursive query support is available in the name server.
    pub fn recursion_available(&self) -> bool {
        (self.flags & (1 << 7)) > 0
    }

    /// RCODE the response code set as part of responses.
    pub fn response_code(&self) -> ResponseCode {
        ResponseCode::from_num((self.flags & 0x0F) as u8)
    }
}
