pub mod cross_reference;
pub mod data_structure;
pub mod duplicate_names;
pub mod game_breaking;
pub mod player_ids;
pub mod position_distribution;

pub use cross_reference::{verify_cross_references, CrossReferenceCheck};
pub use data_structure::{verify_data_structure, DataStructureCheck};
pub use duplicate_names::{verify_duplicate_names, DuplicateNamesCheck};
pub use game_breaking::{check_game_breaking_issues, GameBreakingCheck};
pub use player_ids::{verify_player_ids, PlayerIdsCheck};
pub use position_distribution::{verify_position_distribution, PositionDistributionCheck};

use crate::domain::ports::Check;

/// The six checks in report order.
pub fn standard_checks() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(DuplicateNamesCheck),
        Box::new(PlayerIdsCheck),
        Box::new(CrossReferenceCheck),
        Box::new(PositionDistributionCheck),
        Box::new(DataStructureCheck),
        Box::new(GameBreakingCheck),
    ]
}
