pub mod config;
pub mod logging;

pub mod batch;
pub mod clone;
pub mod dest;
pub mod git_url;
pub mod process;

#[cfg(test)]
mod testing;
