pub mod bundle;
pub mod intl;
pub mod token;
