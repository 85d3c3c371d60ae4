pub mod extract;
pub mod normalize;
pub mod rank;
pub mod version;
