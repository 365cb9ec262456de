pub mod assets;
pub mod stage;

pub use assets::{Asset, AssetTable, Character, Library, Scene};
pub use stage::{DialogueLine, PresentationState, Sprite};
