pub mod api_utils;
pub mod config;
pub mod icons;
pub mod markup;
pub mod notify;
pub mod store;

#[cfg(test)]
pub mod testing;
