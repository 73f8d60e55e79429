//! Structural decoding of DNS packets.
//!
//! The crate walks the fixed header and the four declared sections of a
//! raw packet, checking that every entry fits inside the buffer, and
//! reports the header fields together with a per-section verdict. Label
//! text and RDATA are never interpreted, which keeps the traversal cheap
//! enough to sit in front of a real parser or a packet filter.

pub mod buffer;
pub mod packet;

pub use buffer::{PacketBuffer, ReaderError};
pub use packet::{DecodeStatus, DnsSummary};
