// Cricket XI selection: composite player scoring and constrained lineup picking.

pub mod player;
pub mod sample;
pub mod scoring;
pub mod selection;
pub mod team;
pub mod validation;

pub use player::{Overseas, Player, Role, ScoredPlayer};
pub use selection::{
    select_default, select_lineup, RoleBounds, RoleShortfall, RulesError, SelectionResult,
    SelectionRules, TeamFormat,
};
