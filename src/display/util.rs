use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::model::{CHANNEL, TIME, Z};
use crate::store::ImageStore;
use crate::viewer::StackExtents;

/// Locks `mutex`, recovering the data if a previous holder panicked.
pub(crate) fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Viewer extents a store calls for. Unused axes count as length 1.
pub fn stack_extents(store: &dyn ImageStore) -> StackExtents {
    StackExtents::new(
        store.axis_length(CHANNEL).max(1),
        store.axis_length(Z).max(1),
        store.axis_length(TIME).max(1),
    )
}

/// Number of flat indices a store spans over channel, time and z.
pub fn stack_size(store: &dyn ImageStore) -> usize {
    [CHANNEL, TIME, Z]
        .into_iter()
        .map(|axis| store.axis_length(axis))
        .filter(|length| *length != 0)
        .product()
}
