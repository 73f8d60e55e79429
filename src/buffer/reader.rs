use super::PacketBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReaderError {
    #[error("reading out of buffer")]
    EndOfBuffer,
    #[error("compression pointer at {at} targets {target} instead of an earlier offset")]
    ForwardPointer { at: usize, target: usize },
}

impl From<ReaderError> for std::io::Error {
    fn from(value: ReaderError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, value)
    }
}

impl PacketBuffer<'_> {
    /// Step the buffer position forward a specific number of steps
    pub fn step(&mut self, steps: usize) -> Result<(), ReaderError> {
        if self.pos + steps > self.data.len() {
            return Err(ReaderError::EndOfBuffer);
        }
        self.pos += steps;

        Ok(())
    }

    /// Change the buffer position
    fn seek(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Read a single byte and move the position one step forward
    pub fn read(&mut self) -> Result<u8, ReaderError> {
        if self.pos >= self.data.len() {
            return Err(ReaderError::EndOfBuffer);
        }
        let res = self.data[self.pos];
        self.pos += 1;

        Ok(res)
    }

    /// Get a single byte, without changing the buffer position
    fn get(&self, pos: usize) -> Result<u8, ReaderError> {
        if pos >= self.data.len() {
            return Err(ReaderError::EndOfBuffer);
        }
        Ok(self.data[pos])
    }

    /// Read two bytes, stepping two steps forward
    pub fn read_u16(&mut self) -> Result<u16, ReaderError> {
        let res = ((self.read()? as u16) << 8) | (self.read()? as u16);

        Ok(res)
    }

    /// Read four bytes, stepping four steps forward
    pub fn read_u32(&mut self) -> Result<u32, ReaderError> {
        let res = ((self.read()? as u32) << 24)
            | ((self.read()? as u32) << 16)
            | ((self.read()? as u32) << 8)
            | (self.read()? as u32);

        Ok(res)
    }

    /// Skip a qname without decoding it
    ///
    /// Walks something like [3]www[6]google[3]com[0], following compression
    /// jumps where they appear, and leaves the buffer position on the first
    /// byte after the name as it is laid out in the current entry. No label
    /// text is ever interpreted.
    pub fn skip_qname(&mut self) -> Result<(), ReaderError> {
        // Jumps are resolved on a local copy of the position. The shared
        // position is committed once: either past the terminator, or past
        // the first jump instruction when the name is compressed.
        let mut pos = self.pos();
        let mut jumped = false;

        // Lowest jump target followed for this name. Every later jump must
        // land strictly below it, so a crafted packet cannot cycle between
        // a pointer and the labels in front of it.
        let mut floor = self.data.len();

        loop {
            // Packets are untrusted, a label length can send us anywhere.
            if pos >= self.data.len() {
                return Err(ReaderError::EndOfBuffer);
            }

            // We're always at the start of a label here, and labels start
            // with a length byte.
            let len = self.get(pos)?;

            // A length with the two most significant bits set is a jump to
            // some other offset in the packet.
            if (len & 0xC0) == 0xC0 {
                let target = (((len & 0x3F) as usize) << 8) | self.get(pos + 1)? as usize;

                // Compression only ever references earlier bytes. Anything
                // else is either a forward reference or an attempt to loop.
                if target >= pos || target >= floor {
                    return Err(ReaderError::ForwardPointer { at: pos, target });
                }

                // Move the shared position right behind the jump
                // instruction. Later jumps don't touch it any further.
                if !jumped {
                    self.seek(pos + 2);
                    jumped = true;
                }

                floor = target;
                pos = target;
                continue;
            }

            // The empty label terminates the name. If we never jumped, the
            // shared position still has to move past the terminator.
            if len == 0 {
                if !jumped {
                    self.seek(pos + 1);
                }
                return Ok(());
            }

            // A regular label, move past the length byte and its content.
            pos += 1 + len as usize;
        }
    }
}
