pub mod header;
pub mod question;
pub mod record;

use tracing::{debug, trace};

use crate::buffer::{PacketBuffer, ReaderError};

use self::header::Header;

/// Outcome of a packet traversal
///
/// `Valid` means every entry declared by the header was walked within the
/// bounds of the buffer. Any other value names the phase that broke; the
/// packet has to be rejected as a whole, the header fields that were read
/// before the failure are informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStatus {
    Valid,
    HeaderTooShort,
    InvalidQuestion(ReaderError),
    InvalidAnswer(ReaderError),
    InvalidAuthority(ReaderError),
    InvalidAdditional(ReaderError),
}

impl DecodeStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Header fields of a packet together with the verdict of walking its
/// sections. Produced fresh per call, holds nothing of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DnsSummary {
    pub header: Header,
    pub status: DecodeStatus,
}

impl DnsSummary {
    pub fn read(buffer: &mut PacketBuffer<'_>) -> Self {
        let header = match Header::read(buffer) {
            Ok(header) => header,
            Err(_) => {
                debug!("packet shorter than a header");
                return Self {
                    header: Header::default(),
                    status: DecodeStatus::HeaderTooShort,
                };
            }
        };

        trace!(
            id = header.id,
            questions = header.questions,
            answers = header.answers,
            authorities = header.authoritative_entries,
            additionals = header.resource_entries,
            "header read"
        );

        for _ in 0..header.questions {
            if let Err(err) = question::skip(buffer) {
                debug!(?err, "invalid question section");
                return Self {
                    header,
                    status: DecodeStatus::InvalidQuestion(err),
                };
            }
        }

        for _ in 0..header.answers {
            if let Err(err) = record::skip(buffer) {
                debug!(?err, "invalid answer section");
                return Self {
                    header,
                    status: DecodeStatus::InvalidAnswer(err),
                };
            }
        }

        for _ in 0..header.authoritative_entries {
            if let Err(err) = record::skip(buffer) {
                debug!(?err, "invalid authority section");
                return Self {
                    header,
                    status: DecodeStatus::InvalidAuthority(err),
                };
            }
        }

        for _ in 0..header.resource_entries {
            if let Err(err) = record::skip(buffer) {
                debug!(?err, "invalid additional section");
                return Self {
                    header,
                    status: DecodeStatus::InvalidAdditional(err),
                };
            }
        }

        Self {
            header,
            status: DecodeStatus::Valid,
        }
    }
}

impl<'a> From<PacketBuffer<'a>> for DnsSummary {
    fn from(mut buffer: PacketBuffer<'a>) -> Self {
        Self::read(&mut buffer)
    }
}

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;

    use super::*;

    fn header_bytes(id: u16, flags: u16, counts: [u16; 4]) -> Vec<u8> {
        let mut data = Vec::with_capacity(Header::SIZE);
        data.extend_from_slice(&id.to_be_bytes());
        data.extend_from_slice(&flags.to_be_bytes());
        for count in counts {
            data.extend_from_slice(&count.to_be_bytes());
        }
        data
    }

    #[test]
    fn should_summarize_minimal_query() {
        let mut data = header_bytes(0x1234, 0x0100, [1, 0, 0, 0]);
        // root name, QTYPE A, QCLASS IN
        data.extend_from_slice(&[0x00, 0x00, 0x01, 0x00, 0x01]);

        let summary = DnsSummary::from(PacketBuffer::new(&data));
        assert_eq!(summary.status, DecodeStatus::Valid);
        assert_eq!(summary.header.id, 0x1234);
        assert_eq!(summary.header.flags, 0x0100);
        assert_eq!(summary.header.questions, 1);
        assert_eq!(summary.header.answers, 0);
    }

    #[test]
    fn should_report_missing_question() {
        // one question declared, none present
        let data = header_bytes(0x1234, 0x0100, [1, 0, 0, 0]);

        let summary = DnsSummary::from(PacketBuffer::new(&data));
        assert_eq!(
            summary.status,
            DecodeStatus::InvalidQuestion(ReaderError::EndOfBuffer)
        );
        assert_eq!(summary.header.id, 0x1234);
    }

    #[test]
    fn should_report_short_header() {
        let data = header_bytes(0x1234, 0x0100, [0, 0, 0, 0]);

        let summary = DnsSummary::from(PacketBuffer::new(&data[..11]));
        assert_eq!(summary.status, DecodeStatus::HeaderTooShort);
        assert_eq!(summary.header, Header::default());
    }

    #[test]
    fn should_summarize_header_only_packet() {
        let data = header_bytes(0xBEEF, 0x8580, [0, 0, 0, 0]);

        let summary = DnsSummary::from(PacketBuffer::new(&data));
        assert_eq!(summary.status, DecodeStatus::Valid);
        assert_eq!(summary.header.id, 0xBEEF);
        assert_eq!(summary.header.flags, 0x8580);
        assert_eq!(summary.header.questions, 0);
        assert_eq!(summary.header.answers, 0);
        assert_eq!(summary.header.authoritative_entries, 0);
        assert_eq!(summary.header.resource_entries, 0);
    }

    #[test]
    fn should_summarize_response_with_compression() {
        let mut data = header_bytes(0xCAFE, 0x8180, [1, 1, 0, 0]);
        // question: google.com A IN
        data.extend_from_slice(&[
            6, b'g', b'o', b'o', b'g', b'l', b'e', 3, b'c', b'o', b'm', 0, 0x00, 0x01, 0x00, 0x01,
        ]);
        // answer: jump back to the question name, A IN, TTL 60, 4 byte address
        data.extend_from_slice(&[
            0xC0, 0x0C, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x3C, 0x00, 0x04, 0x08, 0x08,
            0x08, 0x08,
        ]);

        let summary = DnsSummary::from(PacketBuffer::new(&data));
        assert_eq!(summary.status, DecodeStatus::Valid);
        assert_eq!(summary.header.answers, 1);
    }

    #[test]
    fn should_report_rdata_overrun_in_answer() {
        let mut data = header_bytes(0xCAFE, 0x8180, [0, 1, 0, 0]);
        // answer claims 512 bytes of RDATA, none present
        data.extend_from_slice(&[0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x3C, 0x02, 0x00]);

        let summary = DnsSummary::from(PacketBuffer::new(&data));
        assert_eq!(
            summary.status,
            DecodeStatus::InvalidAnswer(ReaderError::EndOfBuffer)
        );
    }

    #[test]
    fn should_report_forward_pointer_in_question() {
        let mut data = header_bytes(0xCAFE, 0x0100, [1, 0, 0, 0]);
        // the question name points at itself
        data.extend_from_slice(&[0xC0, 0x0C, 0x00, 0x01, 0x00, 0x01]);

        let summary = DnsSummary::from(PacketBuffer::new(&data));
        assert_eq!(
            summary.status,
            DecodeStatus::InvalidQuestion(ReaderError::ForwardPointer { at: 12, target: 12 })
        );
    }

    #[test]
    fn should_report_missing_authority() {
        let data = header_bytes(0xCAFE, 0x8180, [0, 0, 1, 0]);

        let summary = DnsSummary::from(PacketBuffer::new(&data));
        assert_eq!(
            summary.status,
            DecodeStatus::InvalidAuthority(ReaderError::EndOfBuffer)
        );
    }

    #[test]
    fn should_report_missing_additional() {
        let data = header_bytes(0xCAFE, 0x8180, [0, 0, 0, 1]);

        let summary = DnsSummary::from(PacketBuffer::new(&data));
        assert_eq!(
            summary.status,
            DecodeStatus::InvalidAdditional(ReaderError::EndOfBuffer)
        );
    }

    #[test]
    fn should_stop_at_first_broken_section() {
        // both answer and additional are declared but missing, the answer
        // section is the one reported
        let data = header_bytes(0xCAFE, 0x8180, [0, 1, 0, 1]);

        let summary = DnsSummary::from(PacketBuffer::new(&data));
        assert_eq!(
            summary.status,
            DecodeStatus::InvalidAnswer(ReaderError::EndOfBuffer)
        );
    }
}
