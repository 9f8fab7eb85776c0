pub mod array;
pub mod dynamic;
pub mod randomized;

// Re-export all modules
pub use array::*;
pub use dynamic::*;
pub use randomized::*;
