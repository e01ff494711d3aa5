pub mod filter;
pub mod map;
pub mod reduce;
pub mod reversed;
pub mod sorted;
pub mod sum;
