mod ask_persona;

pub use ask_persona::*;
