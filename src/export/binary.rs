use crate::HAND_SIZE;
use crate::cards::CanonicalKey;
use crate::strategy::Hold;
use crate::strategy::Record;
use anyhow::Context;
use byteorder::LittleEndian;
use byteorder::ReadBytesExt;
use byteorder::WriteBytesExt;
use std::io::Cursor;
use std::io::Read;
use std::io::Write;

const MAGIC: &[u8; 4] = b"VPST";
const HEADER_SIZE: usize = 64;
const KEY_LENGTH: u8 = 2 * HAND_SIZE as u8;

/// Compact `.vpstrat` table: best hold and EV per canonical key.
///
/// Layout, little endian throughout:
/// - header (64 bytes): magic "VPST", u16 version, u16 flags, u32 entry
///   count, u8 key length, zero padding
/// - index: entry count keys of key length ASCII bytes, sorted
/// - data: per entry, u8 hold mask then f32 EV
///
/// Lookups binary search the index and read the matching data slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Vpstrat {
    keys: Vec<CanonicalKey>,
    data: Vec<(Hold, f32)>,
}

impl From<&[Record]> for Vpstrat {
    fn from(records: &[Record]) -> Self {
        let mut rows = records
            .iter()
            .map(|r| (r.key, (r.hold, r.ev as f32)))
            .collect::<Vec<_>>();
        rows.sort_by_key(|(key, _)| *key);
        rows.dedup_by_key(|(key, _)| *key);
        let (keys, data) = rows.into_iter().unzip();
        Self { keys, data }
    }
}

impl Vpstrat {
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn find(&self, key: &CanonicalKey) -> Option<(Hold, f32)> {
        self.keys
            .binary_search(key)
            .ok()
            .map(|i| self.data[i])
    }

    pub fn encode(&self) -> anyhow::Result<Vec<u8>> {
        let size = HEADER_SIZE + self.len() * (KEY_LENGTH as usize + 5);
        let mut buffer = Vec::with_capacity(size);
        buffer.write_all(MAGIC)?;
        buffer.write_u16::<LittleEndian>(crate::EXPORT_VERSION)?;
        buffer.write_u16::<LittleEndian>(0)?;
        buffer.write_u32::<LittleEndian>(u32::try_from(self.len())?)?;
        buffer.write_u8(KEY_LENGTH)?;
        buffer.resize(HEADER_SIZE, 0);
        for key in self.keys.iter() {
            buffer.write_all(key.as_bytes())?;
        }
        for (hold, ev) in self.data.iter() {
            buffer.write_u8(u8::from(*hold))?;
            buffer.write_f32::<LittleEndian>(*ev)?;
        }
        Ok(buffer)
    }

    pub fn decode(bytes: &[u8]) -> anyhow::Result<Self> {
        let mut reader = Cursor::new(bytes);
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic).context("read magic")?;
        anyhow::ensure!(&magic == MAGIC, "not a vpstrat file");
        let version = reader.read_u16::<LittleEndian>()?;
        anyhow::ensure!(version == crate::EXPORT_VERSION, "unsupported version {}", version);
        let _flags = reader.read_u16::<LittleEndian>()?;
        let count = reader.read_u32::<LittleEndian>()? as usize;
        let length = reader.read_u8()?;
        anyhow::ensure!(length == KEY_LENGTH, "unsupported key length {}", length);
        reader.set_position(HEADER_SIZE as u64);
        let keys = (0..count)
            .map(|_| {
                let mut key = [0u8; KEY_LENGTH as usize];
                reader.read_exact(&mut key)?;
                let key = std::str::from_utf8(&key)?;
                CanonicalKey::try_from(key).map_err(anyhow::Error::msg)
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        anyhow::ensure!(keys.windows(2).all(|w| w[0] < w[1]), "index is not sorted");
        let data = (0..count)
            .map(|_| {
                let hold = Hold::try_from(reader.read_u8()?).map_err(anyhow::Error::msg)?;
                let ev = reader.read_f32::<LittleEndian>()?;
                Ok::<_, anyhow::Error>((hold, ev))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Self { keys, data })
    }
}
