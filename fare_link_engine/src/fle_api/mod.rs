pub mod correlation_api;
pub mod errors;
pub mod linking_api;

#[cfg(test)]
mod mocks;
