pub mod jvm;
pub mod probe;
pub mod release;
