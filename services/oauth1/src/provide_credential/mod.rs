mod r#static;
pub use r#static::StaticCredentialProvider;

mod env;
pub use env::EnvCredentialProvider;

mod config;
pub use config::ConfigCredentialProvider;

mod token_store;
pub use token_store::TokenStoreCredentialProvider;

mod default;
pub use default::DefaultCredentialProvider;
