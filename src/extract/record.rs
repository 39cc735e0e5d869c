//! Specification record types

use serde::{Deserialize, Serialize};

/// A named specification field read from a detail page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecField {
    ProcessorNumber,
    CoreCount,
    ThreadCount,
    HyperThreading,
    ClockSpeed,
    ClockSpeedMax,
    SocketsSupported,
    MaxTdp,
    AesTech,
    MaxMemory,
    Vtd,
}

impl SpecField {
    /// Every field, in display order
    pub const ALL: [SpecField; 11] = [
        SpecField::ProcessorNumber,
        SpecField::CoreCount,
        SpecField::ThreadCount,
        SpecField::HyperThreading,
        SpecField::ClockSpeed,
        SpecField::ClockSpeedMax,
        SpecField::SocketsSupported,
        SpecField::MaxTdp,
        SpecField::AesTech,
        SpecField::MaxMemory,
        SpecField::Vtd,
    ];

    /// `data-key` used by the catalog for this field
    pub fn default_key(self) -> &'static str {
        match self {
            SpecField::ProcessorNumber => "ProcessorNumber",
            SpecField::CoreCount => "CoreCount",
            SpecField::ThreadCount => "ThreadCount",
            SpecField::HyperThreading => "HyperThreading",
            SpecField::ClockSpeed => "ClockSpeed",
            SpecField::ClockSpeedMax => "ClockSpeedMax",
            SpecField::SocketsSupported => "SocketsSupported",
            SpecField::MaxTdp => "MaxTDP",
            SpecField::AesTech => "AESTech",
            SpecField::MaxMemory => "MaxMem",
            SpecField::Vtd => "VTD",
        }
    }
}

/// Specification of one product page
///
/// `url` is always present. Every other field is `None` when the page did
/// not carry it, which is distinct from an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecRecord {
    /// Canonical URL of the detail page
    pub url: String,
    pub processor_number: Option<String>,
    pub core_count: Option<String>,
    pub thread_count: Option<String>,
    pub hyperthreading: Option<String>,
    pub clock_speed: Option<String>,
    pub clock_speed_max: Option<String>,
    pub sockets_supported: Option<String>,
    pub max_tdp: Option<String>,
    pub aes_tech: Option<String>,
    pub max_memory: Option<String>,
    pub vtd: Option<String>,
}

impl SpecRecord {
    /// Record with only the URL set
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set `field` to `value`
    pub fn with_field(mut self, field: SpecField, value: Option<String>) -> Self {
        *self.slot_mut(field) = value;
        self
    }

    /// Value of `field`, if present
    pub fn get(&self, field: SpecField) -> Option<&str> {
        let slot = match field {
            SpecField::ProcessorNumber => &self.processor_number,
            SpecField::CoreCount => &self.core_count,
            SpecField::ThreadCount => &self.thread_count,
            SpecField::HyperThreading => &self.hyperthreading,
            SpecField::ClockSpeed => &self.clock_speed,
            SpecField::ClockSpeedMax => &self.clock_speed_max,
            SpecField::SocketsSupported => &self.sockets_supported,
            SpecField::MaxTdp => &self.max_tdp,
            SpecField::AesTech => &self.aes_tech,
            SpecField::MaxMemory => &self.max_memory,
            SpecField::Vtd => &self.vtd,
        };
        slot.as_deref()
    }

    fn slot_mut(&mut self, field: SpecField) -> &mut Option<String> {
        match field {
            SpecField::ProcessorNumber => &mut self.processor_number,
            SpecField::CoreCount => &mut self.core_count,
            SpecField::ThreadCount => &mut self.thread_count,
            SpecField::HyperThreading => &mut self.hyperthreading,
            SpecField::ClockSpeed => &mut self.clock_speed,
            SpecField::ClockSpeedMax => &mut self.clock_speed_max,
            SpecField::SocketsSupported => &mut self.sockets_supported,
            SpecField::MaxTdp => &mut self.max_tdp,
            SpecField::AesTech => &mut self.aes_tech,
            SpecField::MaxMemory => &mut self.max_memory,
            SpecField::Vtd => &mut self.vtd,
        }
    }
}
