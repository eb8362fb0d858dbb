/// Campaign service interface
pub mod campaign;
/// Contact service interface
pub mod contact;
