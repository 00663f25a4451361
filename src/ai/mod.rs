mod agent;
mod random;
mod tiered;

pub use agent::Agent;
pub use random::RandomAgent;
pub use tiered::TieredAgent;
