//! Service loads, request loads and the load combination engine

mod combinations;
mod distributed;
mod load_set;
mod load_type;
mod point_load;

pub use combinations::{
    all_combinations, apply_combination, combinations, critical_combination, factored_loads,
    ComboEvaluation, Combination, Method, ASD_COMBINATIONS, LRFD_COMBINATIONS,
};
pub use distributed::DistributedLoad;
pub use load_set::LoadSet;
pub use load_type::LoadType;
pub use point_load::PointLoad;
