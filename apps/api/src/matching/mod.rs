// The matching core: normalization strategies, query building, the
// ranking algorithm, and response shaping. HTTP specifics stay in
// handlers; everything else here is pure and synchronous.

pub mod handlers;
pub mod normalize;
pub mod presenter;
pub mod query;
pub mod ranker;
