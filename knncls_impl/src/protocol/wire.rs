//! Typed little-endian emit/parse helpers.
//!
//! These functions are purely syntactic; tags and dialogue rules live in the
//! frame layer. All multi-byte values are little-endian on the wire,
//! independently of the host. Strings and blobs are a `u64` byte length
//! followed by the raw bytes, without a terminator.

use crate::{KnnError, KnnResult};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

pub fn emit_u8(value: u8, w: &mut dyn std::io::Write) -> KnnResult<()> {
    w.write_u8(value)?;
    Ok(())
}

pub fn parse_u8(rdr: &mut dyn std::io::Read) -> KnnResult<u8> {
    Ok(rdr.read_u8()?)
}

pub fn emit_u32(value: u32, w: &mut dyn std::io::Write) -> KnnResult<()> {
    w.write_u32::<LittleEndian>(value)?;
    Ok(())
}

pub fn parse_u32(rdr: &mut dyn std::io::Read) -> KnnResult<u32> {
    Ok(rdr.read_u32::<LittleEndian>()?)
}

pub fn emit_u64(value: u64, w: &mut dyn std::io::Write) -> KnnResult<()> {
    w.write_u64::<LittleEndian>(value)?;
    Ok(())
}

pub fn parse_u64(rdr: &mut dyn std::io::Read) -> KnnResult<u64> {
    Ok(rdr.read_u64::<LittleEndian>()?)
}

pub fn emit_f64(value: f64, w: &mut dyn std::io::Write) -> KnnResult<()> {
    w.write_f64::<LittleEndian>(value)?;
    Ok(())
}

pub fn parse_f64(rdr: &mut dyn std::io::Read) -> KnnResult<f64> {
    Ok(rdr.read_f64::<LittleEndian>()?)
}

#[allow(clippy::cast_possible_truncation)]
pub fn emit_blob(bytes: &[u8], w: &mut dyn std::io::Write) -> KnnResult<()> {
    w.write_u64::<LittleEndian>(bytes.len() as u64)?; // U8
    w.write_all(bytes)?; // B (varying)
    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
pub fn parse_blob(rdr: &mut dyn std::io::Read) -> KnnResult<Vec<u8>> {
    let len = rdr.read_u64::<LittleEndian>()? as usize; // U8
    parse_bytes(len, rdr)
}

pub fn emit_string(value: &str, w: &mut dyn std::io::Write) -> KnnResult<()> {
    emit_blob(value.as_bytes(), w)
}

pub fn parse_string(rdr: &mut dyn std::io::Read) -> KnnResult<String> {
    String::from_utf8(parse_blob(rdr)?)
        .map_err(|_| KnnError::Protocol("string on the wire is not UTF-8".to_string()))
}

#[allow(clippy::cast_possible_truncation)]
pub fn emit_f64_vec(values: &[f64], w: &mut dyn std::io::Write) -> KnnResult<()> {
    w.write_u64::<LittleEndian>(values.len() as u64)?; // U8
    for value in values {
        w.write_f64::<LittleEndian>(*value)?; // F8
    }
    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
pub fn parse_f64_vec(rdr: &mut dyn std::io::Read) -> KnnResult<Vec<f64>> {
    let count = rdr.read_u64::<LittleEndian>()? as usize; // U8
    let mut values = Vec::with_capacity(count.min(65_536));
    for _ in 0..count {
        values.push(rdr.read_f64::<LittleEndian>()?);
    }
    Ok(values)
}

// Read n bytes, return as Vec<u8>
pub(crate) fn parse_bytes(len: usize, rdr: &mut dyn std::io::Read) -> KnnResult<Vec<u8>> {
    let mut vec = vec![0_u8; len];
    rdr.read_exact(&mut vec)?;
    Ok(vec)
}
