mod error;
mod events;
mod mapper;
mod resolve;
mod stack;
mod sync;
mod util;

#[cfg(test)]
mod tests;

pub use error::{DisplayError, Result};
pub use events::{DisplayEvent, EventBus, SubscriptionId};
pub use stack::StoreStack;
pub use util::{stack_extents, stack_size};
