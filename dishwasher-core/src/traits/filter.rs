//! Dirt filter sensor trait

/// Trait for the dirt filter sensor
///
/// Larger readings mean a cleaner filter with more remaining capacity.
pub trait DirtFilter {
    /// Read the remaining filter capacity
    fn capacity(&mut self) -> f64;
}

impl<T: DirtFilter + ?Sized> DirtFilter for &mut T {
    fn capacity(&mut self) -> f64 {
        T::capacity(self)
    }
}
