// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// The glyph of every class not found in [`ICONS`].
pub const DEFAULT_ICON: &str = "📦";

/// Display glyphs of the known RPG-Schema classes, by class ID.
static ICONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("World", "🌍"),
        ("Tag", "🏷️"),
        ("Actor", "🎭"),
        ("Character", "🧙"),
        ("Organization", "🏛️"),
        ("Crew", "👥"),
        ("Faction", "⚔️"),
        ("RuleSet", "📜"),
        ("RuleSetAttribute", "📊"),
        ("RuleSetRace", "🧬"),
        ("RuleSetClass", "🎓"),
        ("ClassLevelDefinition", "📈"),
        ("CharacterAttributeValue", "🔢"),
        ("CharacterClassProgression", "⬆️"),
        ("Capability", "✨"),
        ("Spell", "🔮"),
        ("Feature", "🌟"),
        ("Action", "⚡"),
        ("Proficiency", "🎯"),
        ("SpecialAbility", "💫"),
        ("Roll", "🎲"),
        ("ResolutionModel", "⚙️"),
        ("D20Model", "🎲"),
        ("DicePoolModel", "🎲"),
        ("RollSignal", "📡"),
        ("SignalRole", "🔄"),
        ("PrimaryRole", "1️⃣"),
        ("SideEffectRole", "2️⃣"),
        ("RollEvaluation", "📐"),
        ("State", "🔰"),
        ("Condition", "⚠️"),
        ("Harm", "💔"),
        ("AppliedState", "🩹"),
        ("Tracker", "📊"),
        ("ReputationTracker", "⭐"),
        ("TrackerInstance", "📉"),
        ("TemporalEntity", "⏳"),
        ("Session", "📅"),
        ("Scene", "🎬"),
        ("Phase", "🔄"),
        ("Clock", "🕐"),
        ("ClockInstance", "⏱️"),
        ("Relationship", "🤝"),
        ("Item", "🗡️"),
        ("ItemInstance", "🎒"),
        ("AdvancementRule", "📖"),
        ("Unlock", "🔓"),
        ("FictionKnob", "🎛️"),
        ("RiskPosition", "⚠️"),
        ("EffectLevel", "💥"),
        ("Consequence", "💀"),
        ("RollModifier", "➕"),
        ("Creature", "🐉"),
        ("Campaign", "📜"),
        ("GameSystem", "🎲"),
        ("Location", "🏰"),
    ])
});

/// Assigns a display glyph to a class, by its ID (local name).
/// Unknown IDs get [`DEFAULT_ICON`].
#[must_use]
pub fn assign_icon(id: &str) -> &'static str {
    ICONS.get(id).copied().unwrap_or(DEFAULT_ICON)
}
