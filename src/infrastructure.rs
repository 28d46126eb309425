pub mod db;
pub mod email;
