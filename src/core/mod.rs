pub mod cleanup;
pub mod config;
pub mod download;
pub mod installer;
pub mod requirements;
pub mod verify;
