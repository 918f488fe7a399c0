pub mod netgen;

pub use netgen::{generate_random_network, NetworkConfig};
