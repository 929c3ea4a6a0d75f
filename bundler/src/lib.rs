pub use bundle;
pub use config;
pub use errors;
pub use intl;
pub use token;
