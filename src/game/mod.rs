// Search engine modules

pub mod direction;
pub mod matcher;
pub mod scanner;
pub mod search;

pub use direction::Direction;
pub use matcher::PrefixMatcher;
pub use scanner::RayScanner;
pub use search::SearchDriver;
