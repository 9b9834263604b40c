//! Host-native-endian byte order helpers.
//!
//! Unlike a general-purpose PCAP library, this crate only ever reads
//! host-endian v2.4 captures (spec: byte-swapped captures are rejected
//! outright, not byte-swapped on read), so there is no pluggable
//! `Endianness` here, just native conversions behind a small `Read`/`Write`
//! extension trait pair in the teacher crate's style.

use std::io::{self, Read, Write};

pub trait ReadExt {
    fn read_u32_ne(&mut self) -> io::Result<u32>;
    fn read_u16_ne(&mut self) -> io::Result<u16>;
    fn read_bytes<const SIZE: usize>(&mut self) -> io::Result<[u8; SIZE]>;
}

impl<R: Read> ReadExt for R {
    fn read_u32_ne(&mut self) -> io::Result<u32> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf)?;
        Ok(u32::from_ne_bytes(buf))
    }

    fn read_u16_ne(&mut self) -> io::Result<u16> {
        let mut buf = [0u8; 2];
        self.read_exact(&mut buf)?;
        Ok(u16::from_ne_bytes(buf))
    }

    fn read_bytes<const SIZE: usize>(&mut self) -> io::Result<[u8; SIZE]> {
        let mut buf = [0u8; SIZE];
        self.read_exact(&mut buf)?;
        Ok(buf)
    }
}

pub trait WriteExt {
    fn write_u32_ne(&mut self, value: u32) -> io::Result<()>;
    fn write_u16_ne(&mut self, value: u16) -> io::Result<()>;
}

impl<W: Write> WriteExt for W {
    fn write_u32_ne(&mut self, value: u32) -> io::Result<()> {
        self.write_all(&value.to_ne_bytes())
    }

    fn write_u16_ne(&mut self, value: u16) -> io::Result<()> {
        self.write_all(&value.to_ne_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn round_trips_u32() {
        let mut buf = Vec::new();
        buf.write_u32_ne(0xA1B2C3D4).unwrap();
        let mut cursor = Cursor::new(buf);
        assert_eq!(cursor.read_u32_ne().unwrap(), 0xA1B2C3D4);
    }

    #[test]
    fn round_trips_u16() {
        let mut buf = Vec::new();
        buf.write_u16_ne(0x0204).unwrap();
        let mut cursor = Cursor::new(buf);
        assert_eq!(cursor.read_u16_ne().unwrap(), 0x0204);
    }
}
