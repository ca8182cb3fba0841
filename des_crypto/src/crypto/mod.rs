pub mod bits;
pub mod cipher_traits;
pub mod des;
pub mod des_tables;
pub mod error;
pub mod f_function;
pub mod key_schedule;
pub mod permutation;
