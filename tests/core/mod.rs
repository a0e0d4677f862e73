// tests/core/mod.rs

#[cfg(test)]
mod asymmetric;
#[cfg(test)]
mod codec;
