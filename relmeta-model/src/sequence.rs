use relmeta_ident::error::{Error, Result};
use relmeta_ident::Identifier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    name: Identifier,
    start: i64,
    increment: i64,
    min_value: Option<i64>,
    max_value: Option<i64>,
    cycle: bool,
    cache_size: Option<u32>,
}

impl Sequence {
    pub fn new(
        name: Identifier,
        start: i64,
        increment: i64,
        min_value: Option<i64>,
        max_value: Option<i64>,
        cycle: bool,
        cache_size: Option<u32>,
    ) -> Result<Sequence> {
        if increment == 0 {
            return Err(Error::InvalidArgument("zero sequence increment"));
        }
        if let (Some(min), Some(max)) = (min_value, max_value) {
            if min > max {
                return Err(Error::InvalidArgument("sequence minimum above maximum"));
            }
        }
        Ok(Sequence {
            name,
            start,
            increment,
            min_value,
            max_value,
            cycle,
            cache_size,
        })
    }

    #[inline]
    pub fn name(&self) -> &Identifier {
        &self.name
    }

    #[inline]
    pub fn start(&self) -> i64 {
        self.start
    }

    #[inline]
    pub fn increment(&self) -> i64 {
        self.increment
    }

    #[inline]
    pub fn min_value(&self) -> Option<i64> {
        self.min_value
    }

    #[inline]
    pub fn max_value(&self) -> Option<i64> {
        self.max_value
    }

    #[inline]
    pub fn cycle(&self) -> bool {
        self.cycle
    }

    /// None when the engine does not report a cache.
    #[inline]
    pub fn cache_size(&self) -> Option<u32> {
        self.cache_size
    }
}
