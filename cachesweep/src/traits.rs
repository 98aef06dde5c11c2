mod executor;

pub use executor::{Executor, Task};
