//! Decisions a simulation step can take.
//!
//! # Structure
//!
//! - `ActionKind`: payload-free discriminant, carries the canonical name
//! - `Layout`: the argument shape shared by several kinds
//! - `Action`: the decision itself, one variant per kind
//! - `ActionArgs`: an action's payload viewed through its layout
//!
//! Splitting an action into `(ActionKind, ActionArgs)` and reassembling it with
//! [`Action::from_parts`] is lossless. Codecs rely on this to treat every kind
//! sharing a layout identically.

pub mod types;

pub use types::{Coord, GenerateMonster, ItemId, Wish};

// ============================================================================
// Layout
// ============================================================================

/// Argument shape of a decision kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layout {
    /// No arguments.
    Void,
    /// One coordinate pair.
    Coord,
    /// One item identifier.
    Item,
    /// A coordinate pair followed by an item identifier.
    CoordAndItem,
    /// A thing category followed by the specific identity in that category.
    Wish,
    /// Species, decision maker and location of a spawned monster.
    GenerateMonster,
}

impl Layout {
    /// Number of textual arguments following the kind name.
    pub const fn argument_count(self) -> usize {
        match self {
            Layout::Void => 0,
            Layout::Coord => 2,
            Layout::Item => 1,
            Layout::CoordAndItem => 3,
            Layout::Wish => 2,
            Layout::GenerateMonster => 4,
        }
    }
}

// ============================================================================
// Action Kind
// ============================================================================

/// Discriminant of [`Action`].
///
/// Names prefixed with `!` are debug cheats.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::EnumCount,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    #[strum(serialize = "move")]
    Move,
    #[strum(serialize = "wait")]
    Wait,
    #[strum(serialize = "attack")]
    Attack,
    #[strum(serialize = "zap")]
    Zap,
    #[strum(serialize = "pickup")]
    Pickup,
    #[strum(serialize = "drop")]
    Drop,
    #[strum(serialize = "quaff")]
    Quaff,
    #[strum(serialize = "throw")]
    Throw,
    #[strum(serialize = "down")]
    GoDown,
    #[strum(serialize = "!health")]
    CheatHealthBoost,
    #[strum(serialize = "!kill")]
    CheatKillEverybody,
    #[strum(serialize = "!polymorph")]
    CheatPolymorph,
    #[strum(serialize = "!monster")]
    CheatGenerateMonster,
    #[strum(serialize = "!wish")]
    CheatWish,
    #[strum(serialize = "!identify")]
    CheatIdentify,
    #[strum(serialize = "!down")]
    CheatGoDown,
    #[strum(serialize = "!levelup")]
    CheatGainLevel,
}

impl ActionKind {
    /// Returns the argument layout every action of this kind uses.
    pub const fn layout(self) -> Layout {
        match self {
            ActionKind::Wait
            | ActionKind::GoDown
            | ActionKind::CheatHealthBoost
            | ActionKind::CheatKillEverybody
            | ActionKind::CheatPolymorph
            | ActionKind::CheatIdentify
            | ActionKind::CheatGoDown
            | ActionKind::CheatGainLevel => Layout::Void,
            ActionKind::Move | ActionKind::Attack => Layout::Coord,
            ActionKind::Pickup | ActionKind::Drop | ActionKind::Quaff => Layout::Item,
            ActionKind::Zap | ActionKind::Throw => Layout::CoordAndItem,
            ActionKind::CheatWish => Layout::Wish,
            ActionKind::CheatGenerateMonster => Layout::GenerateMonster,
        }
    }

    /// Returns true for debug cheat kinds.
    pub const fn is_cheat(self) -> bool {
        matches!(
            self,
            ActionKind::CheatHealthBoost
                | ActionKind::CheatKillEverybody
                | ActionKind::CheatPolymorph
                | ActionKind::CheatGenerateMonster
                | ActionKind::CheatWish
                | ActionKind::CheatIdentify
                | ActionKind::CheatGoDown
                | ActionKind::CheatGainLevel
        )
    }

    /// Canonical script name.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

// ============================================================================
// Action Arguments
// ============================================================================

/// Payload of an action, shaped by its [`Layout`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionArgs {
    Void,
    Coord(Coord),
    Item(ItemId),
    CoordAndItem(Coord, ItemId),
    Wish(Wish),
    GenerateMonster(GenerateMonster),
}

impl ActionArgs {
    pub const fn layout(&self) -> Layout {
        match self {
            ActionArgs::Void => Layout::Void,
            ActionArgs::Coord(_) => Layout::Coord,
            ActionArgs::Item(_) => Layout::Item,
            ActionArgs::CoordAndItem(..) => Layout::CoordAndItem,
            ActionArgs::Wish(_) => Layout::Wish,
            ActionArgs::GenerateMonster(_) => Layout::GenerateMonster,
        }
    }
}

// ============================================================================
// Action
// ============================================================================

/// One discrete decision taken during a simulation step.
///
/// Actions are plain values compared structurally. There is no "undecided"
/// variant: code that may not have a decision yet returns `Option<Action>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Action {
    Move(Coord),
    Wait,
    Attack(Coord),
    Zap { target: Coord, item: ItemId },
    Pickup(ItemId),
    Drop(ItemId),
    Quaff(ItemId),
    Throw { target: Coord, item: ItemId },
    GoDown,
    CheatHealthBoost,
    CheatKillEverybody,
    CheatPolymorph,
    CheatGenerateMonster(GenerateMonster),
    CheatWish(Wish),
    CheatIdentify,
    CheatGoDown,
    CheatGainLevel,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Move(_) => ActionKind::Move,
            Action::Wait => ActionKind::Wait,
            Action::Attack(_) => ActionKind::Attack,
            Action::Zap { .. } => ActionKind::Zap,
            Action::Pickup(_) => ActionKind::Pickup,
            Action::Drop(_) => ActionKind::Drop,
            Action::Quaff(_) => ActionKind::Quaff,
            Action::Throw { .. } => ActionKind::Throw,
            Action::GoDown => ActionKind::GoDown,
            Action::CheatHealthBoost => ActionKind::CheatHealthBoost,
            Action::CheatKillEverybody => ActionKind::CheatKillEverybody,
            Action::CheatPolymorph => ActionKind::CheatPolymorph,
            Action::CheatGenerateMonster(_) => ActionKind::CheatGenerateMonster,
            Action::CheatWish(_) => ActionKind::CheatWish,
            Action::CheatIdentify => ActionKind::CheatIdentify,
            Action::CheatGoDown => ActionKind::CheatGoDown,
            Action::CheatGainLevel => ActionKind::CheatGainLevel,
        }
    }

    pub fn layout(&self) -> Layout {
        self.kind().layout()
    }

    /// Returns the payload of this action.
    pub fn args(&self) -> ActionArgs {
        match *self {
            Action::Move(coord) | Action::Attack(coord) => ActionArgs::Coord(coord),
            Action::Zap { target, item } | Action::Throw { target, item } => {
                ActionArgs::CoordAndItem(target, item)
            }
            Action::Pickup(item) | Action::Drop(item) | Action::Quaff(item) => {
                ActionArgs::Item(item)
            }
            Action::CheatGenerateMonster(monster) => ActionArgs::GenerateMonster(monster),
            Action::CheatWish(wish) => ActionArgs::Wish(wish),
            Action::Wait
            | Action::GoDown
            | Action::CheatHealthBoost
            | Action::CheatKillEverybody
            | Action::CheatPolymorph
            | Action::CheatIdentify
            | Action::CheatGoDown
            | Action::CheatGainLevel => ActionArgs::Void,
        }
    }

    /// Reassembles an action from its kind and payload.
    ///
    /// Returns `None` when the payload layout does not match the kind's layout.
    pub fn from_parts(kind: ActionKind, args: ActionArgs) -> Option<Self> {
        let action = match (kind, args) {
            (ActionKind::Move, ActionArgs::Coord(coord)) => Action::Move(coord),
            (ActionKind::Attack, ActionArgs::Coord(coord)) => Action::Attack(coord),
            (ActionKind::Zap, ActionArgs::CoordAndItem(target, item)) => {
                Action::Zap { target, item }
            }
            (ActionKind::Throw, ActionArgs::CoordAndItem(target, item)) => {
                Action::Throw { target, item }
            }
            (ActionKind::Pickup, ActionArgs::Item(item)) => Action::Pickup(item),
            (ActionKind::Drop, ActionArgs::Item(item)) => Action::Drop(item),
            (ActionKind::Quaff, ActionArgs::Item(item)) => Action::Quaff(item),
            (ActionKind::CheatGenerateMonster, ActionArgs::GenerateMonster(monster)) => {
                Action::CheatGenerateMonster(monster)
            }
            (ActionKind::CheatWish, ActionArgs::Wish(wish)) => Action::CheatWish(wish),
            (ActionKind::Wait, ActionArgs::Void) => Action::Wait,
            (ActionKind::GoDown, ActionArgs::Void) => Action::GoDown,
            (ActionKind::CheatHealthBoost, ActionArgs::Void) => Action::CheatHealthBoost,
            (ActionKind::CheatKillEverybody, ActionArgs::Void) => Action::CheatKillEverybody,
            (ActionKind::CheatPolymorph, ActionArgs::Void) => Action::CheatPolymorph,
            (ActionKind::CheatIdentify, ActionArgs::Void) => Action::CheatIdentify,
            (ActionKind::CheatGoDown, ActionArgs::Void) => Action::CheatGoDown,
            (ActionKind::CheatGainLevel, ActionArgs::Void) => Action::CheatGainLevel,
            _ => return None,
        };
        Some(action)
    }
}
