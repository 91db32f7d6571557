// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod arithmetic;
    pub mod error;
    pub mod linalg;
    pub mod matrix;
    pub mod traits;
}

