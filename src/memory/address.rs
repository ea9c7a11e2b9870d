// Tue Jan 20 2026 - Alex

use serde::Serialize;
use std::fmt;
use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Address {
    value: u64,
}

impl Address {
    pub fn new(value: u64) -> Self {
        Self { value }
    }

    pub fn zero() -> Self {
        Self { value: 0 }
    }

    pub fn as_u64(&self) -> u64 {
        self.value
    }

    pub fn is_null(&self) -> bool {
        self.value == 0
    }

    pub fn checked_add(&self, rhs: u64) -> Option<Self> {
        self.value.checked_add(rhs).map(|value| Self { value })
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016x}", self.value)
    }
}

impl fmt::LowerHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.value, f)
    }
}

impl fmt::UpperHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.value, f)
    }
}

impl Add<u64> for Address {
    type Output = Self;
    fn add(self, rhs: u64) -> Self::Output {
        Self { value: self.value + rhs }
    }
}

impl From<u64> for Address {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<Address> for u64 {
    fn from(addr: Address) -> Self {
        addr.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_arithmetic() {
        let base = Address::new(0x1000);
        assert_eq!((base + 0x24).as_u64(), 0x1024);
        assert_eq!(Address::from(0x2000u64).as_u64(), 0x2000);
        assert_eq!(u64::from(Address::new(5)), 5);
        assert!(Address::zero().is_null());
    }

    #[test]
    fn test_address_display() {
        let addr = Address::new(0x1001);
        assert_eq!(addr.to_string(), "0x0000000000001001");
        assert_eq!(format!("{:x}", addr), "1001");
    }

    #[test]
    fn test_address_checked_add() {
        assert_eq!(Address::new(1).checked_add(2), Some(Address::new(3)));
        assert_eq!(Address::new(u64::MAX).checked_add(1), None);
    }
}
