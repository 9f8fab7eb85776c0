pub mod random_integers;

pub use random_integers::{random_integers, write_random_integers, MAGNITUDE};
