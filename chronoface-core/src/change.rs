//! Change-tracked values
//!
//! A [`ChangeTracked`] value remembers whether it differs from what was last
//! observed. Refresh code feeds it a fresh sample every tick and only does
//! dependent work when [`ChangeTracked::take_changed`] reports a difference.

/// A value paired with a dirty flag
///
/// `set` compares against the stored value and raises the flag only on a
/// real difference. `take_changed` reports the flag and clears it.
///
/// A freshly created value starts out changed, so the first consumer always
/// renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChangeTracked<T> {
    value: T,
    changed: bool,
}

impl<T: Default> Default for ChangeTracked<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> ChangeTracked<T> {
    /// Wrap an initial value, marked as changed
    pub const fn new(value: T) -> Self {
        Self {
            value,
            changed: true,
        }
    }

    /// Current value
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Check the dirty flag without clearing it
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Report whether the value changed since the last call, and clear the flag
    pub fn take_changed(&mut self) -> bool {
        core::mem::replace(&mut self.changed, false)
    }

    /// Force the next `take_changed` to report a change
    pub fn mark_changed(&mut self) {
        self.changed = true;
    }
}

impl<T: PartialEq> ChangeTracked<T> {
    /// Store a new sample
    ///
    /// The flag is raised if the sample differs from the stored value. An
    /// equal sample leaves a pending flag untouched.
    pub fn set(&mut self, value: T) {
        if self.value != value {
            self.value = value;
            self.changed = true;
        }
    }
}
