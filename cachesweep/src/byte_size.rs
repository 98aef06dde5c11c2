use std::fmt;

const UNIT_STEP: u64 = 1024;

/// Display units used when formatting a [ByteSize].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Unit {
    Byte,
    KB,
    MB,
    GB,
    /// Largest unit. Sizes beyond it keep growing in TB.
    TB,
}

impl Unit {
    /// Number of bytes in one unit.
    pub const fn divisor(self) -> u64 {
        match self {
            Unit::Byte => 1,
            Unit::KB => UNIT_STEP,
            Unit::MB => UNIT_STEP * UNIT_STEP,
            Unit::GB => UNIT_STEP * UNIT_STEP * UNIT_STEP,
            Unit::TB => UNIT_STEP * UNIT_STEP * UNIT_STEP * UNIT_STEP,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Unit::Byte => "Byte",
            Unit::KB => "KB",
            Unit::MB => "MB",
            Unit::GB => "GB",
            Unit::TB => "TB",
        }
    }

    fn next(self) -> Option<Unit> {
        match self {
            Unit::Byte => Some(Unit::KB),
            Unit::KB => Some(Unit::MB),
            Unit::MB => Some(Unit::GB),
            Unit::GB => Some(Unit::TB),
            Unit::TB => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A total number of bytes, rendered in human readable units.
///
/// The unit is picked by dividing by 1024 until the quotient drops below one
/// or [Unit::TB] is reached. Everything from [Unit::KB] up is printed with two
/// fraction digits, rounded half-up:
///
/// ```
/// use cachesweep::ByteSize;
///
/// assert_eq!(ByteSize::new(512).to_string(), "512.0 Byte");
/// assert_eq!(ByteSize::new(1535).to_string(), "1.50 KB");
/// assert_eq!(ByteSize::new(1 << 20).to_string(), "1.00 MB");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteSize(u64);

impl ByteSize {
    /// Create a new [ByteSize].
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    /// Get the raw number of bytes.
    pub const fn bytes(&self) -> u64 {
        self.0
    }

    /// Get the unit this size is displayed in.
    pub fn unit(&self) -> Unit {
        let mut unit = Unit::Byte;
        while let Some(next) = unit.next() {
            if self.0 < next.divisor() {
                break;
            }
            unit = next;
        }
        unit
    }

    /// Get the displayed value in hundredths of [ByteSize::unit], rounded half-up.
    fn hundredths(&self) -> u128 {
        let divisor = self.unit().divisor() as u128;
        (self.0 as u128 * 100 + divisor / 2) / divisor
    }
}

impl From<u64> for ByteSize {
    fn from(bytes: u64) -> Self {
        Self(bytes)
    }
}

impl From<ByteSize> for u64 {
    fn from(size: ByteSize) -> Self {
        size.0
    }
}

impl std::iter::Sum for ByteSize {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|size| size.0).fold(0u64, u64::saturating_add))
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit() {
            Unit::Byte => write!(f, "{}.0 {}", self.0, Unit::Byte),
            unit => {
                let hundredths = self.hundredths();
                write!(f, "{}.{:02} {}", hundredths / 100, hundredths % 100, unit)
            }
        }
    }
}

/// Format a byte count as a human readable string.
pub fn format_size(bytes: u64) -> String {
    ByteSize::new(bytes).to_string()
}
