// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Anycubic Photon archive family.
//!
//! Every machine in the family gets its own format id, equal to its file
//! extension. The family is write-only.

use crate::io::config::PrintConfig;
use crate::io::traits::ArchiveWriter;
use crate::registry::WriterFactory;

use super::container::LayerArchiveWriter;

/// Container magic.
pub const ANYCUBIC_MAGIC: [u8; 8] = *b"ANYCUBIC";

/// Configuration key naming the target machine.
pub const KEY_MACHINE_NAME: &str = "machine_name";

/// Writer factory for one Anycubic machine.
#[derive(Debug, Clone)]
pub struct AnycubicFormat {
    format_id: String,
    machine_name: String,
}

impl AnycubicFormat {
    /// Create the factory for a machine identified by its file extension.
    pub fn new(format_id: impl Into<String>, machine_name: impl Into<String>) -> Self {
        Self {
            format_id: format_id.into(),
            machine_name: machine_name.into(),
        }
    }

    /// Machine this factory writes for.
    pub fn machine_name(&self) -> &str {
        &self.machine_name
    }
}

impl WriterFactory for AnycubicFormat {
    fn build_writer(&self, config: &PrintConfig) -> Box<dyn ArchiveWriter> {
        let config = config
            .clone()
            .with(KEY_MACHINE_NAME, &self.machine_name);
        Box::new(LayerArchiveWriter::new(
            ANYCUBIC_MAGIC,
            self.format_id.as_str(),
            config,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_records_machine() {
        let factory = AnycubicFormat::new("pwmx", "Photon Mono X");
        let writer = factory.build_writer(&PrintConfig::new());
        assert_eq!(writer.format_id(), "pwmx");
        assert_eq!(writer.config().get(KEY_MACHINE_NAME), Some("Photon Mono X"));
        assert_eq!(factory.machine_name(), "Photon Mono X");
    }
}
