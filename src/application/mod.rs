/// Application layer: the use cases composing a mirror run
pub mod use_cases;
