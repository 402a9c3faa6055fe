//! Door latch trait

/// Trait for the door latch
///
/// Implementations read the door switch and drive the lock solenoid.
pub trait Door {
    /// Check if the door is closed
    ///
    /// Takes `&mut self` because reading the switch may require mutable access.
    fn closed(&mut self) -> bool;

    /// Engage the door lock
    fn lock(&mut self);

    /// Release the door lock
    fn unlock(&mut self);
}

impl<T: Door + ?Sized> Door for &mut T {
    fn closed(&mut self) -> bool {
        T::closed(self)
    }

    fn lock(&mut self) {
        T::lock(self)
    }

    fn unlock(&mut self) {
        T::unlock(self)
    }
}
