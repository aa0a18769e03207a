//! Widget state flags for the host stylesheet
//!
//! Each widget exposes its boolean presentation state as a flat set of named
//! flags (`disabled`, `selected`, `outside`, ...). The host maps them onto
//! whatever its styling system uses for conditional rules.

use smallvec::SmallVec;

/// Ordered set of active state flags
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Mods {
    flags: SmallVec<[&'static str; 8]>,
}

impl Mods {
    /// Create an empty flag set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a flag; adding twice is a no-op
    pub fn add(&mut self, flag: &'static str) -> &mut Self {
        if !self.flags.contains(&flag) {
            self.flags.push(flag);
        }
        self
    }

    /// Add a flag only when the condition holds
    pub fn set(&mut self, flag: &'static str, on: bool) -> &mut Self {
        if on {
            self.add(flag);
        }
        self
    }

    /// Whether a flag is active
    pub fn has(&self, flag: &str) -> bool {
        self.flags.iter().any(|&f| f == flag)
    }

    /// Iterate active flags in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.flags.iter().copied()
    }

    /// Number of active flags
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether no flags are active
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_respects_condition() {
        let mut mods = Mods::new();
        mods.set("disabled", true);
        mods.set("selected", false);

        assert!(mods.has("disabled"));
        assert!(!mods.has("selected"));
        assert_eq!(mods.len(), 1);
    }

    #[test]
    fn test_add_dedupes_and_keeps_order() {
        let mut mods = Mods::new();
        mods.add("weekend");
        mods.add("outside");
        mods.add("weekend");

        let flags: Vec<&str> = mods.iter().collect();
        assert_eq!(flags, ["weekend", "outside"]);
    }
}
