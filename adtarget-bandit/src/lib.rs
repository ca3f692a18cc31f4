//! # adtarget-bandit
//!
//! Epsilon-greedy multi-armed bandit. Each eligible segment is an arm;
//! clicks reward it, dismissals do not. Selection exploits the best mean
//! reward and explores a random subset with probability ε.

pub mod model;
pub mod selection;

pub use model::EpsilonGreedyBanditModel;
