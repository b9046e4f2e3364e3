mod id;
mod task;

pub use id::{Clock, IdGenerator, SystemClock, TaskId};
pub use task::Task;
