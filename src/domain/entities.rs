pub mod contact;
pub mod project;
pub mod site_config;
