//! Read-only query facade.
//!
//! Every operation assumes a fully loaded store and returns an explicit
//! absent result (`None` / empty vec) when a lookup key does not exist.
//! Callers never see join logic.

pub mod lookup;
pub mod search;
pub mod stats;

pub use lookup::{ingredient_by_ref, IngredientDetail};
pub use search::{
    all_functions, ingredients_by_function, search_by_cas, search_ingredients,
    skin_conditioning_ingredients, CasMatch, FunctionMatch, SearchHit,
};
pub use stats::{store_stats, FunctionCount, StoreStats};
