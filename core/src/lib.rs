pub mod calculator;
pub mod greeting;
pub mod showcase;
