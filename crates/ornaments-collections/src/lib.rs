//! Prioritised collections.
//!
//! Both collections surface the entry with the **lowest** priority value
//! first. They differ in how equal priorities are ordered:
//!
//! | Collection | Equal priorities |
//! |---|---|
//! | [`PriorityQueue`] | first in, first out |
//! | [`PriorityStack`] | last in, first out |

mod entry;
mod queue;
mod stack;

pub use queue::PriorityQueue;
pub use stack::PriorityStack;
