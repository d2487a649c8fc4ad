//! Value objects exposed to callers outside the core layer.

pub mod account_view;

pub use account_view::AccountView;
