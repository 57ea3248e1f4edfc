//! Built-in formation rules.
//!
//! This module contains the legality checks that come with gridiron, in the
//! order the registry runs them.

pub mod backfield_count;
pub mod covered_receiver;
pub mod end_of_line;
pub mod line_balance;
pub mod line_count;
pub mod player_count;

pub use backfield_count::BackfieldCountRule;
pub use covered_receiver::CoveredReceiverRule;
pub use end_of_line::EndOfLineEligibilityRule;
pub use line_balance::LineBalanceRule;
pub use line_count::LineCountRule;
pub use player_count::PlayerCountRule;
