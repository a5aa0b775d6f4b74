// tests/support/mod.rs
// Shared by several integration test binaries; each binary only uses part of
// it, so unused-item warnings are silenced at the module level.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(dead_code, unused_imports)]
pub mod db;


#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use db::*;
#[allow(unused_imports)]
pub use mocks::*;
