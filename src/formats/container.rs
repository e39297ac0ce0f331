// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Layered archive container shared by the built-in formats.
//!
//! # Layout
//!
//! All integers are little-endian.
//!
//! ```text
//! magic            8 bytes, format specific
//! version          u16
//! format id        u16 length + UTF-8
//! configuration    u32 length + TOML text
//! layer count      u32
//! layers           per layer: u32 length + bytes
//! checksum         u32, CRC-32 of everything above
//! ```

use std::any::Any;
use std::fs::File;
use std::io::{BufWriter, Cursor, Read, Write};
use std::path::{Path, PathBuf};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use tracing::{debug, warn};

use crate::core::ImportQuality;
use crate::io::config::PrintConfig;
use crate::io::metadata::{ImportedArchive, RasterLayer};
use crate::io::progress::Progress;
use crate::io::traits::{ArchiveReader, ArchiveWriter};
use crate::{ArchiveError, Result};

/// Container layout version.
pub const CONTAINER_VERSION: u16 = 1;

/// Magic, version, id length, config length, layer count and checksum.
const MIN_CONTAINER_SIZE: usize = 8 + 2 + 2 + 4 + 4 + 4;

/// Writer producing the layered container.
#[derive(Debug, Clone)]
pub struct LayerArchiveWriter {
    magic: [u8; 8],
    format_id: String,
    container_id: String,
    config: PrintConfig,
    layers: Vec<RasterLayer>,
}

impl LayerArchiveWriter {
    /// Create a writer for the given format.
    pub fn new(magic: [u8; 8], format_id: impl Into<String>, config: PrintConfig) -> Self {
        let format_id = format_id.into();
        Self {
            magic,
            container_id: format_id.clone(),
            format_id,
            config,
            layers: Vec::new(),
        }
    }

    /// Record `id` in the container instead of the writer's own format id.
    ///
    /// Used by formats that export another format's archive.
    pub fn with_container_id(mut self, id: impl Into<String>) -> Self {
        self.container_id = id.into();
        self
    }

    /// Format id written into the container.
    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// Layers added so far.
    pub fn layers(&self) -> &[RasterLayer] {
        &self.layers
    }

    /// Encode the container into memory.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let id = self.container_id.as_bytes();
        let id_len = u16::try_from(id.len())
            .map_err(|_| ArchiveError::unsupported("format id longer than 65535 bytes"))?;
        let config = self.config.to_toml_string()?;
        let layer_count = u32::try_from(self.layers.len())
            .map_err(|_| ArchiveError::unsupported("more than u32::MAX layers"))?;

        let payload: usize = self.layers.iter().map(|l| 4 + l.len()).sum();
        let mut buf = Vec::with_capacity(MIN_CONTAINER_SIZE + id.len() + config.len() + payload);

        buf.write_all(&self.magic)?;
        buf.write_u16::<LittleEndian>(CONTAINER_VERSION)?;
        buf.write_u16::<LittleEndian>(id_len)?;
        buf.write_all(id)?;
        write_blob(&mut buf, config.as_bytes())?;
        buf.write_u32::<LittleEndian>(layer_count)?;
        for layer in &self.layers {
            write_blob(&mut buf, &layer.data)?;
        }

        let checksum = crc32fast::hash(&buf);
        buf.write_u32::<LittleEndian>(checksum)?;
        Ok(buf)
    }
}

fn write_blob(buf: &mut Vec<u8>, data: &[u8]) -> Result<()> {
    let len = u32::try_from(data.len())
        .map_err(|_| ArchiveError::unsupported("blob larger than 4 GiB"))?;
    buf.write_u32::<LittleEndian>(len)?;
    buf.write_all(data)?;
    Ok(())
}

impl ArchiveWriter for LayerArchiveWriter {
    fn format_id(&self) -> &str {
        &self.format_id
    }

    fn config(&self) -> &PrintConfig {
        &self.config
    }

    fn add_layer(&mut self, layer: RasterLayer) {
        self.layers.push(layer);
    }

    fn layer_count(&self) -> usize {
        self.layers.len()
    }

    fn export(&mut self, path: &Path) -> Result<()> {
        let bytes = self.encode()?;
        let mut out = BufWriter::new(File::create(path)?);
        out.write_all(&bytes)?;
        out.flush()?;

        debug!(
            format_id = %self.format_id,
            container_id = %self.container_id,
            layers = self.layers.len(),
            bytes = bytes.len(),
            path = %path.display(),
            "exported archive"
        );
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Reader for the layered container.
#[derive(Debug, Clone)]
pub struct LayerArchiveReader {
    magic: [u8; 8],
    format_id: String,
    path: PathBuf,
    quality: ImportQuality,
    progress: Progress,
}

impl LayerArchiveReader {
    /// Create a reader for the given format.
    pub fn new(
        magic: [u8; 8],
        format_id: impl Into<String>,
        path: &Path,
        quality: ImportQuality,
        progress: Progress,
    ) -> Self {
        Self {
            magic,
            format_id: format_id.into(),
            path: path.to_path_buf(),
            quality,
            progress,
        }
    }

    /// Decode a container held in memory.
    pub fn decode(&self, bytes: &[u8]) -> Result<ImportedArchive> {
        if bytes.len() < MIN_CONTAINER_SIZE {
            return Err(ArchiveError::parse(
                "archive",
                format!("{} bytes is too short for an archive", bytes.len()),
            ));
        }

        let (body, trailer) = bytes.split_at(bytes.len() - 4);
        let stored = read_u32(&mut Cursor::new(trailer))?;
        let computed = crc32fast::hash(body);
        if stored != computed {
            return Err(ArchiveError::ChecksumMismatch { stored, computed });
        }

        let mut cursor = Cursor::new(body);

        let mut magic = [0u8; 8];
        let magic_len = magic.len();
        magic.copy_from_slice(&read_exact_vec(&mut cursor, magic_len)?);
        if magic != self.magic {
            return Err(ArchiveError::parse(
                "archive",
                format!("unexpected magic {magic:02x?}"),
            ));
        }

        let version = read_u16(&mut cursor)?;
        if version != CONTAINER_VERSION {
            return Err(ArchiveError::unsupported(format!(
                "container version {version}"
            )));
        }

        let id_len = read_u16(&mut cursor)? as usize;
        let id = read_exact_vec(&mut cursor, id_len)?;
        let found = String::from_utf8(id)
            .map_err(|e| ArchiveError::parse("format id", e.to_string()))?;
        if found != self.format_id {
            return Err(ArchiveError::format_mismatch(&self.format_id, found));
        }

        let config_len = read_u32(&mut cursor)? as usize;
        let config = read_exact_vec(&mut cursor, config_len)?;
        let config = String::from_utf8(config)
            .map_err(|e| ArchiveError::parse("configuration", e.to_string()))?;
        let config = PrintConfig::from_toml_str(&config)?;

        let layer_count = read_u32(&mut cursor)? as usize;
        let mut layers = Vec::new();
        for index in 0..layer_count {
            let len = read_u32(&mut cursor)? as usize;
            layers.push(RasterLayer::new(read_exact_vec(&mut cursor, len)?));

            let percent = ((index + 1) * 100 / layer_count) as u32;
            if !self.progress.report(percent) {
                warn!(
                    format_id = %self.format_id,
                    percent,
                    "archive import cancelled"
                );
                return Err(ArchiveError::Cancelled { percent });
            }
        }

        if (cursor.position() as usize) != body.len() {
            return Err(ArchiveError::parse(
                "archive",
                "trailing bytes after the last layer",
            ));
        }

        Ok(ImportedArchive {
            format_id: found,
            config,
            layers,
            quality: self.quality,
        })
    }
}

fn truncated(field: &str) -> ArchiveError {
    ArchiveError::parse("archive", format!("truncated while reading {field}"))
}

fn read_u16(cursor: &mut Cursor<&[u8]>) -> Result<u16> {
    cursor
        .read_u16::<LittleEndian>()
        .map_err(|_| truncated("u16 field"))
}

fn read_u32(cursor: &mut Cursor<&[u8]>) -> Result<u32> {
    cursor
        .read_u32::<LittleEndian>()
        .map_err(|_| truncated("u32 field"))
}

fn read_exact_vec(cursor: &mut Cursor<&[u8]>, len: usize) -> Result<Vec<u8>> {
    let remaining = cursor.get_ref().len() - cursor.position() as usize;
    if len > remaining {
        return Err(ArchiveError::parse(
            "archive",
            format!("length {len} exceeds the {remaining} remaining bytes"),
        ));
    }
    let mut data = vec![0u8; len];
    cursor
        .read_exact(&mut data)
        .map_err(|_| truncated("blob"))?;
    Ok(data)
}

impl ArchiveReader for LayerArchiveReader {
    fn format_id(&self) -> &str {
        &self.format_id
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn quality(&self) -> ImportQuality {
        self.quality
    }

    fn read(&mut self) -> Result<ImportedArchive> {
        let bytes = std::fs::read(&self.path)?;
        let imported = self.decode(&bytes)?;
        debug!(
            format_id = %self.format_id,
            layers = imported.layer_count(),
            quality = self.quality.as_str(),
            "imported archive"
        );
        Ok(imported)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAGIC: [u8; 8] = *b"TESTARCH";

    fn writer() -> LayerArchiveWriter {
        let mut writer = LayerArchiveWriter::new(
            MAGIC,
            "TEST",
            PrintConfig::new().with("layer_height", 0.05),
        );
        writer.add_layers(vec![RasterLayer::new(vec![1, 2, 3]), RasterLayer::new(vec![])]);
        writer
    }

    fn reader(progress: Progress) -> LayerArchiveReader {
        LayerArchiveReader::new(
            MAGIC,
            "TEST",
            Path::new("unused"),
            ImportQuality::Fast,
            progress,
        )
    }

    #[test]
    fn test_decode_written_container() {
        let bytes = writer().encode().unwrap();
        let imported = reader(Progress::none()).decode(&bytes).unwrap();

        assert_eq!(imported.format_id, "TEST");
        assert_eq!(imported.config.get("layer_height"), Some("0.05"));
        assert_eq!(imported.layers, writer().layers());
        assert_eq!(imported.quality, ImportQuality::Fast);
    }

    #[test]
    fn test_corrupted_byte_fails_checksum() {
        let mut bytes = writer().encode().unwrap();
        bytes[12] ^= 0xff;
        let err = reader(Progress::none()).decode(&bytes).unwrap_err();
        assert!(matches!(err, ArchiveError::ChecksumMismatch { .. }));
    }

    #[test]
    fn test_wrong_format_id() {
        let bytes = LayerArchiveWriter::new(MAGIC, "OTHER", PrintConfig::new())
            .encode()
            .unwrap();
        let err = reader(Progress::none()).decode(&bytes).unwrap_err();
        assert!(matches!(err, ArchiveError::FormatMismatch { .. }));
    }

    #[test]
    fn test_wrong_magic() {
        let bytes = LayerArchiveWriter::new(*b"ELSEWHAT", "TEST", PrintConfig::new())
            .encode()
            .unwrap();
        let err = reader(Progress::none()).decode(&bytes).unwrap_err();
        assert!(matches!(err, ArchiveError::ParseError { .. }));
    }

    #[test]
    fn test_container_id_override() {
        let writer = LayerArchiveWriter::new(MAGIC, "ALIAS", PrintConfig::new())
            .with_container_id("TEST");
        assert_eq!(writer.format_id(), "ALIAS");
        assert_eq!(writer.container_id(), "TEST");

        let imported = reader(Progress::none())
            .decode(&writer.encode().unwrap())
            .unwrap();
        assert_eq!(imported.format_id, "TEST");
    }

    fn with_checksum(mut body: Vec<u8>) -> Vec<u8> {
        let checksum = crc32fast::hash(&body);
        body.write_u32::<LittleEndian>(checksum).unwrap();
        body
    }

    #[test]
    fn test_truncated_header_is_parse_error() {
        // layer count missing after an empty configuration
        let mut body = MAGIC.to_vec();
        body.write_u16::<LittleEndian>(CONTAINER_VERSION).unwrap();
        body.write_u16::<LittleEndian>(4).unwrap();
        body.extend_from_slice(b"TEST");
        body.write_u32::<LittleEndian>(0).unwrap();

        let err = reader(Progress::none())
            .decode(&with_checksum(body))
            .unwrap_err();
        assert!(matches!(err, ArchiveError::ParseError { .. }), "{err:?}");
    }

    #[test]
    fn test_truncated_layer_is_parse_error() {
        let mut body = MAGIC.to_vec();
        body.write_u16::<LittleEndian>(CONTAINER_VERSION).unwrap();
        body.write_u16::<LittleEndian>(4).unwrap();
        body.extend_from_slice(b"TEST");
        body.write_u32::<LittleEndian>(0).unwrap();
        body.write_u32::<LittleEndian>(1).unwrap();
        body.write_u32::<LittleEndian>(64).unwrap();

        let err = reader(Progress::none())
            .decode(&with_checksum(body))
            .unwrap_err();
        assert!(matches!(err, ArchiveError::ParseError { .. }), "{err:?}");
    }

    #[test]
    fn test_too_short() {
        let err = reader(Progress::none()).decode(b"tiny").unwrap_err();
        assert!(matches!(err, ArchiveError::ParseError { .. }));
    }

    #[test]
    fn test_cancel_from_progress() {
        let bytes = writer().encode().unwrap();
        let err = reader(Progress::new(|pct| pct < 50))
            .decode(&bytes)
            .unwrap_err();
        assert!(matches!(err, ArchiveError::Cancelled { percent: 50 }));
    }
}
