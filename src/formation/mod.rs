//! Formation snapshots.
//!
//! Two shapes live here:
//!
//! - [`FormationSpec`] / [`PlayerSpec`] - the wire shape shared with the
//!   catalog, the editor and the play generator (`{x, y, onLOS, eligible}`
//!   per player id)
//! - [`Formation`] / [`PlayerPosition`] - the in-memory snapshot the rules
//!   run on, with every player's [`Role`] already decided
//!
//! Players are keyed by id in a `BTreeMap`, so iteration order (and therefore
//! every tie-break in the rules) is the lexical order of the ids.

pub mod catalog;
pub mod file;
pub mod personnel;
pub mod role;

pub use catalog::{Catalog, CatalogEntry};
pub use file::FileFormat;
pub use personnel::Personnel;
pub use role::{Role, RoleClassifier};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::field::FieldGeometry;

/// One player as written in formation files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PlayerSpec {
    /// Horizontal field coordinate.
    pub x: f64,
    /// Vertical field coordinate.
    pub y: f64,
    /// Aligned on the line of scrimmage.
    #[serde(rename = "onLOS", alias = "on_los", default)]
    pub on_los: bool,
    /// Designated eligible pass receiver.
    #[serde(default)]
    pub eligible: bool,
    /// Explicit role; classified from the player id when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// A formation as written in files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FormationSpec {
    /// Optional display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Players keyed by position id.
    #[serde(default)]
    pub positions: BTreeMap<String, PlayerSpec>,
}

/// A player's alignment in a formation snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerPosition {
    pub x: f64,
    pub y: f64,
    pub on_los: bool,
    pub eligible: bool,
    pub role: Role,
    declared_role: Option<Role>,
}

impl PlayerPosition {
    /// Create a player with an explicit role.
    pub fn new(x: f64, y: f64, on_los: bool, eligible: bool, role: Role) -> Self {
        Self {
            x,
            y,
            on_los,
            eligible,
            role,
            declared_role: Some(role),
        }
    }

    fn from_spec(id: &str, spec: &PlayerSpec, classifier: &RoleClassifier) -> Self {
        Self {
            x: spec.x,
            y: spec.y,
            on_los: spec.on_los,
            eligible: spec.eligible,
            role: spec.role.unwrap_or_else(|| classifier.classify(id)),
            declared_role: spec.role,
        }
    }

    fn to_spec(&self) -> PlayerSpec {
        PlayerSpec {
            x: self.x,
            y: self.y,
            on_los: self.on_los,
            eligible: self.eligible,
            role: self.declared_role,
        }
    }
}

/// An immutable-by-convention snapshot of eleven (or so) player alignments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Formation {
    name: Option<String>,
    players: BTreeMap<String, PlayerPosition>,
}

impl Formation {
    /// Create an empty formation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a formation from its wire shape, deciding every player's role.
    pub fn from_spec(spec: &FormationSpec, classifier: &RoleClassifier) -> Self {
        let players = spec
            .positions
            .iter()
            .map(|(id, p)| (id.clone(), PlayerPosition::from_spec(id, p, classifier)))
            .collect();
        Self {
            name: spec.name.clone(),
            players,
        }
    }

    /// Convert back to the wire shape.
    ///
    /// Roles are only written for players whose role was given explicitly.
    pub fn to_spec(&self) -> FormationSpec {
        FormationSpec {
            name: self.name.clone(),
            positions: self
                .players
                .iter()
                .map(|(id, p)| (id.clone(), p.to_spec()))
                .collect(),
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a player, builder style.
    pub fn with_player(mut self, id: impl Into<String>, player: PlayerPosition) -> Self {
        self.insert(id, player);
        self
    }

    /// Add or replace a player, returning the previous alignment.
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        player: PlayerPosition,
    ) -> Option<PlayerPosition> {
        self.players.insert(id.into(), player)
    }

    /// Remove a player, builder style.
    pub fn without(mut self, id: &str) -> Self {
        self.remove(id);
        self
    }

    /// Remove a player, returning its alignment.
    pub fn remove(&mut self, id: &str) -> Option<PlayerPosition> {
        self.players.remove(id)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Look up a player by id.
    pub fn get(&self, id: &str) -> Option<&PlayerPosition> {
        self.players.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut PlayerPosition> {
        self.players.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// All players in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PlayerPosition)> {
        self.players.iter().map(|(id, p)| (id.as_str(), p))
    }

    /// All player ids in order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.players.keys().map(String::as_str)
    }

    /// Players flagged as on the line of scrimmage.
    pub fn on_line(&self) -> impl Iterator<Item = (&str, &PlayerPosition)> {
        self.iter().filter(|(_, p)| p.on_los)
    }

    /// Players flagged as off the line.
    pub fn backfield(&self) -> impl Iterator<Item = (&str, &PlayerPosition)> {
        self.iter().filter(|(_, p)| !p.on_los)
    }

    /// On-line players sorted left to right.
    ///
    /// The sort is stable, so players sharing an x keep id order.
    pub fn line_by_x(&self) -> Vec<(&str, &PlayerPosition)> {
        let mut line: Vec<_> = self.on_line().collect();
        line.sort_by(|a, b| a.1.x.total_cmp(&b.1.x));
        line
    }

    /// A copy flipped left-for-right across the field's `center_x`.
    pub fn mirrored(&self, field: &FieldGeometry) -> Self {
        let mut flipped = self.clone();
        for player in flipped.players.values_mut() {
            player.x = field.mirror_x(player.x);
        }
        flipped
    }

    /// A copy with every `on_los` flag recomputed from the player's y.
    pub fn realign(&self, field: &FieldGeometry) -> Self {
        let mut aligned = self.clone();
        for player in aligned.players.values_mut() {
            player.on_los = field.is_on_line(player.y);
        }
        aligned
    }
}
