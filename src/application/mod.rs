// Application layer - Use cases and the ports they depend on
pub mod error;
pub mod repository;
pub mod species_directory;
#[cfg(test)]
pub mod testing;
pub mod track_my_fish_service;
