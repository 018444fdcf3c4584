use super::synchsafe::SynchsafeInteger;
use crate::error::Result;
use crate::macros::err;
use crate::tag::TagFlags;

use byteorder::{BigEndian, ByteOrder};

#[derive(Copy, Clone, Debug)]
pub(crate) struct Id3v2Header {
	pub major: u8,
	pub revision: u8,
	pub flags: TagFlags,
	/// The declared size of the tag, including this header
	pub size: u32,
}

impl Id3v2Header {
	pub(crate) fn parse(buffer: &[u8]) -> Result<Self> {
		log::debug!("Parsing ID3v2 header");

		if buffer.len() < 10 {
			err!(InvalidInput("ID3v2 requires at least a 10 byte header"));
		}

		if &buffer[..3] != b"ID3" {
			err!(FakeTag);
		}

		let major = buffer[3];
		let revision = buffer[4];

		let flags = buffer[5];
		let flags = TagFlags {
			unsynchronisation: flags & 0x01 == 0x01,
			extended_header: flags & 0x02 == 0x02,
			experimental: flags & 0x04 == 0x04,
		};

		let size = BigEndian::read_u32(&buffer[6..10]).unsynch();

		Ok(Id3v2Header {
			major,
			revision,
			flags,
			size,
		})
	}
}
