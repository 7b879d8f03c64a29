use bitflags::bitflags;
use relmeta_ident::error::{Error, Result};
use relmeta_ident::Identifier;

bitflags! {
    /// Row events a trigger fires on.
    pub struct TriggerEvents: u32 {
        const INSERT = 0x01;
        const UPDATE = 0x02;
        const DELETE = 0x04;
    }
}

impl TriggerEvents {
    /// Decode a raw catalog event mask. Undefined bits are invalid state.
    #[inline]
    pub fn from_raw(mask: u32) -> Result<TriggerEvents> {
        TriggerEvents::from_bits(mask).ok_or(Error::InvalidState("trigger event mask out of range"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TriggerTiming {
    Before = 0,
    After = 1,
    InsteadOf = 2,
}

impl TryFrom<u8> for TriggerTiming {
    type Error = Error;

    #[inline]
    fn try_from(value: u8) -> Result<TriggerTiming> {
        match value {
            0 => Ok(TriggerTiming::Before),
            1 => Ok(TriggerTiming::After),
            2 => Ok(TriggerTiming::InsteadOf),
            _ => Err(Error::InvalidState("trigger timing out of range")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    name: Identifier,
    definition: String,
    query_timing: TriggerTiming,
    events: TriggerEvents,
    enabled: bool,
}

impl Trigger {
    /// A trigger with no fired event is invalid and rejected here.
    pub fn new(
        name: Identifier,
        definition: &str,
        query_timing: TriggerTiming,
        events: TriggerEvents,
        enabled: bool,
    ) -> Result<Trigger> {
        if definition.trim().is_empty() {
            return Err(Error::InvalidArgument("blank trigger definition"));
        }
        if events.is_empty() {
            return Err(Error::InvalidArgument("trigger without events"));
        }
        Ok(Trigger {
            name,
            definition: definition.to_string(),
            query_timing,
            events,
            enabled,
        })
    }

    #[inline]
    pub fn name(&self) -> &Identifier {
        &self.name
    }

    #[inline]
    pub fn definition(&self) -> &str {
        &self.definition
    }

    #[inline]
    pub fn query_timing(&self) -> TriggerTiming {
        self.query_timing
    }

    #[inline]
    pub fn events(&self) -> TriggerEvents {
        self.events
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
