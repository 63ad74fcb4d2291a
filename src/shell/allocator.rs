//! Storage strategies for sessions created with
//! [`Cli::with_allocator`](super::Cli::with_allocator).

/// Provides storage for a value that lives for `'s`.
///
/// Returns `None` when no storage is available. Storage is never given back:
/// sessions are expected to live as long as the program.
///
/// # Examples
///
/// A fixed pool of slots handing out one slot per call:
///
/// ```rust
/// use libcli::shell::Allocator;
///
/// struct Pool<'s, T> {
///     slots: core::slice::IterMut<'s, Option<T>>,
/// }
///
/// impl<'s, T> Allocator<'s, T> for &mut Pool<'s, T> {
///     fn allocate(self, value: T) -> Option<&'s mut T> {
///         self.slots.next().map(|slot| slot.insert(value))
///     }
/// }
///
/// let mut storage = [None, None];
/// let mut pool = Pool { slots: storage.iter_mut() };
/// assert_eq!((&mut pool).allocate(1).copied(), Some(1));
/// assert_eq!((&mut pool).allocate(2).copied(), Some(2));
/// assert!((&mut pool).allocate(3).is_none());
/// ```
pub trait Allocator<'s, T> {
    /// Move `value` into storage owned by the allocator.
    fn allocate(self, value: T) -> Option<&'s mut T>;
}

/// A caller-owned slot. Fails if the slot is already occupied.
impl<'s, T> Allocator<'s, T> for &'s mut Option<T> {
    fn allocate(self, value: T) -> Option<&'s mut T> {
        if self.is_some() {
            return None;
        }
        Some(self.insert(value))
    }
}

/// Heap storage that is never freed.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct Leak;

#[cfg(feature = "std")]
impl<T: 'static> Allocator<'static, T> for Leak {
    fn allocate(self, value: T) -> Option<&'static mut T> {
        Some(std::boxed::Box::leak(std::boxed::Box::new(value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slot_is_filled() {
        let mut slot: Option<u32> = None;
        let value = (&mut slot).allocate(7).unwrap();
        *value += 1;
        assert_eq!(slot, Some(8));
    }

    #[test]
    fn test_occupied_slot_is_refused() {
        let mut slot = Some(1u32);
        assert!((&mut slot).allocate(2).is_none());
        assert_eq!(slot, Some(1));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_leak_always_succeeds() {
        let value: &'static mut u32 = Leak.allocate(3).unwrap();
        assert_eq!(*value, 3);
    }
}
