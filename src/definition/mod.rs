pub mod component;
pub mod edit;
pub mod graph;
pub mod integrity;
pub mod lookup;
pub mod types;

pub use component::*;
pub use edit::*;
pub use graph::*;
pub use integrity::*;
pub use lookup::*;
pub use types::*;
