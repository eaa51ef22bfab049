//! Decision codec: `Action` values to and from script lines.

use game_core::{
    Action, ActionArgs, ActionKind, DecisionMakerType, GenerateMonster, Layout, PotionId,
    SpeciesId, ThingType, WandId, Wish,
};

use super::numeric::{decode_coord, decode_item_id, encode_int, encode_item_id};
use super::vocab::Vocabulary;
use crate::error::{DecodeError, DecodeErrorKind};
use crate::text::Token;

/// Name tables for every enumeration a decision line can mention.
///
/// Built once per engine or reader; construction validates every table.
#[derive(Clone, Debug)]
pub struct ActionCodec {
    actions: Vocabulary<ActionKind>,
    species: Vocabulary<SpeciesId>,
    decision_makers: Vocabulary<DecisionMakerType>,
    thing_types: Vocabulary<ThingType>,
    wands: Vocabulary<WandId>,
    potions: Vocabulary<PotionId>,
}

impl Default for ActionCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionCodec {
    pub fn new() -> Self {
        Self {
            actions: Vocabulary::build("action name"),
            species: Vocabulary::build("species id"),
            decision_makers: Vocabulary::build("decision maker"),
            thing_types: Vocabulary::build("thing type"),
            wands: Vocabulary::build("wand id"),
            potions: Vocabulary::build("potion id"),
        }
    }

    /// Decodes the tokens of one non-empty line.
    ///
    /// The first token names the kind; the rest must match its layout exactly.
    pub fn decode(&self, tokens: &[Token<'_>]) -> Result<Action, DecodeError> {
        let (head, args) = tokens
            .split_first()
            .ok_or_else(|| DecodeError::new(1, DecodeErrorKind::UnexpectedEof))?;
        let kind = self.actions.parse(head)?;
        let layout = kind.layout();
        if args.len() != layout.argument_count() {
            return Err(head.error(DecodeErrorKind::ExpectedArguments(
                layout.argument_count(),
            )));
        }

        let args = match layout {
            Layout::Void => ActionArgs::Void,
            Layout::Coord => ActionArgs::Coord(decode_coord(&args[0], &args[1])?),
            Layout::Item => ActionArgs::Item(decode_item_id(&args[0])?),
            Layout::CoordAndItem => ActionArgs::CoordAndItem(
                decode_coord(&args[0], &args[1])?,
                decode_item_id(&args[2])?,
            ),
            Layout::Wish => ActionArgs::Wish(self.decode_wish(&args[0], &args[1])?),
            Layout::GenerateMonster => ActionArgs::GenerateMonster(GenerateMonster::new(
                self.species.parse(&args[0])?,
                self.decision_makers.parse(&args[1])?,
                decode_coord(&args[2], &args[3])?,
            )),
        };

        let action = Action::from_parts(kind, args)
            .unwrap_or_else(|| unreachable!("{kind:?} decoded with a foreign layout"));
        Ok(action)
    }

    /// Encodes an action as one newline-terminated line.
    pub fn encode(&self, action: &Action) -> String {
        let mut words = vec![self.actions.name(action.kind()).to_string()];
        match action.args() {
            ActionArgs::Void => {}
            ActionArgs::Coord(coord) => {
                words.push(encode_int(coord.x));
                words.push(encode_int(coord.y));
            }
            ActionArgs::Item(item) => words.push(encode_item_id(&item)),
            ActionArgs::CoordAndItem(coord, item) => {
                words.push(encode_int(coord.x));
                words.push(encode_int(coord.y));
                words.push(encode_item_id(&item));
            }
            ActionArgs::Wish(wish) => {
                words.push(self.thing_types.name(wish.thing_type()).to_string());
                words.push(
                    match wish {
                        Wish::Wand(wand) => self.wands.name(wand),
                        Wish::Potion(potion) => self.potions.name(potion),
                    }
                    .to_string(),
                );
            }
            ActionArgs::GenerateMonster(monster) => {
                words.push(self.species.name(monster.species).to_string());
                words.push(self.decision_makers.name(monster.decision_maker).to_string());
                words.push(encode_int(monster.location.x));
                words.push(encode_int(monster.location.y));
            }
        }

        let mut line = words.join(" ");
        line.push('\n');
        line
    }

    fn decode_wish(&self, category: &Token<'_>, identity: &Token<'_>) -> Result<Wish, DecodeError> {
        match self.thing_types.parse(category)? {
            ThingType::Individual => Err(category.error(DecodeErrorKind::WishForIndividual)),
            ThingType::Wand => Ok(Wish::Wand(self.wands.parse(identity)?)),
            ThingType::Potion => Ok(Wish::Potion(self.potions.parse(identity)?)),
        }
    }
}
