//! Draw-card registry for effect lookup.
//!
//! The `EffectRegistry` maps card names to their draw effects. The
//! engine consults it to decide which held cards are playable draw
//! cards and how each one resolves.

use rustc_hash::FxHashMap;
use smallvec::smallvec;

use crate::cards::CardType;

use super::effect::DrawEffect;

/// A card name bound to its draw effect and rules text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardEffectDef {
    pub name: String,
    pub effect: DrawEffect,
    pub description: String,
}

impl CardEffectDef {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        effect: DrawEffect,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            effect,
            description: description.into(),
        }
    }
}

/// Registry of draw-card effects, keyed by card name.
///
/// ## Example
///
/// ```
/// use pocket_sim::effects::EffectRegistry;
///
/// let registry = EffectRegistry::builtin();
/// assert!(registry.is_draw_card("Poke Ball"));
/// assert!(!registry.is_draw_card("Potion"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct EffectRegistry {
    effects: FxHashMap<String, CardEffectDef>,
}

impl EffectRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the supported Pocket draw cards.
    #[must_use]
    pub fn builtin() -> Self {
        let mut reg = Self::new();
        reg.register(CardEffectDef::new(
            "Poke Ball",
            DrawEffect::TutorByType {
                target: CardType::BasicPokemon,
            },
            "Put a random Basic Pokemon from your deck into your hand.",
        ));
        reg.register(CardEffectDef::new(
            "Professor's Research",
            DrawEffect::DrawFixed { count: 2 },
            "Draw 2 cards.",
        ));
        reg.register(CardEffectDef::new(
            "Galdion",
            DrawEffect::TutorByName {
                targets: smallvec!["Type:Null".to_string(), "Silvally".to_string()],
            },
            "Put a random Type:Null or Silvally from your deck into your hand.",
        ));
        reg.register(CardEffectDef::new(
            "Pokemon Communication",
            DrawEffect::ExchangeWithDeck,
            "Choose a Pokemon in your hand and switch it with a random Pokemon from your deck.",
        ));
        reg.register(CardEffectDef::new(
            "Iono",
            DrawEffect::HandRefresh,
            "Shuffle your hand into your deck and draw that many cards.",
        ));
        reg
    }

    /// Register a draw-card definition.
    ///
    /// Panics if the card name is already registered.
    pub fn register(&mut self, def: CardEffectDef) {
        if self.effects.contains_key(&def.name) {
            panic!("draw card {:?} already registered", def.name);
        }
        self.effects.insert(def.name.clone(), def);
    }

    /// Look up a card's effect definition.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardEffectDef> {
        self.effects.get(name)
    }

    /// Whether a card name has a registered draw effect.
    #[must_use]
    pub fn is_draw_card(&self, name: &str) -> bool {
        self.effects.contains_key(name)
    }

    /// Rules text for a registered card.
    #[must_use]
    pub fn description_of(&self, name: &str) -> Option<&str> {
        self.effects.get(name).map(|d| d.description.as_str())
    }

    /// Registered card names, sorted for stable output.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.effects.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered draw cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Iterate over all definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardEffectDef> {
        self.effects.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_supported_cards() {
        let registry = EffectRegistry::builtin();
        assert_eq!(registry.len(), 5);
        assert_eq!(
            registry.names(),
            vec![
                "Galdion",
                "Iono",
                "Poke Ball",
                "Pokemon Communication",
                "Professor's Research"
            ]
        );
    }

    #[test]
    fn test_builtin_effect_kinds() {
        let registry = EffectRegistry::builtin();
        assert_eq!(
            registry.get("Professor's Research").map(|d| &d.effect),
            Some(&DrawEffect::DrawFixed { count: 2 })
        );
        assert!(registry
            .get("Pokemon Communication")
            .is_some_and(|d| d.effect.is_exchange()));
        assert!(registry.get("Iono").is_some_and(|d| d.effect.is_refresh()));

        match registry.get("Galdion").map(|d| &d.effect) {
            Some(DrawEffect::TutorByName { targets }) => {
                assert_eq!(targets.as_slice(), ["Type:Null", "Silvally"]);
            }
            other => panic!("unexpected Galdion effect: {:?}", other),
        }
    }

    #[test]
    fn test_register_custom_card() {
        let mut registry = EffectRegistry::new();
        registry.register(CardEffectDef::new(
            "Nest Ball",
            DrawEffect::TutorByType {
                target: CardType::BasicPokemon,
            },
            "Put a random Basic Pokemon from your deck into your hand.",
        ));

        assert!(registry.is_draw_card("Nest Ball"));
        assert_eq!(
            registry.description_of("Nest Ball"),
            Some("Put a random Basic Pokemon from your deck into your hand.")
        );
        assert!(registry.description_of("Poke Ball").is_none());
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_name_panics() {
        let mut registry = EffectRegistry::builtin();
        registry.register(CardEffectDef::new(
            "Poke Ball",
            DrawEffect::DrawFixed { count: 1 },
            "Draw 1 card.",
        ));
    }

    #[test]
    fn test_unknown_card_is_not_a_draw_card() {
        let registry = EffectRegistry::builtin();
        assert!(!registry.is_draw_card("Potion"));
        assert!(registry.get("Potion").is_none());
    }
}
