pub mod build_config;

pub use build_config::BuildConfig;
