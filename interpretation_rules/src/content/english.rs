//! English levels.

use super::{Observation, Scenario};
use crate::locale::Language;

pub(crate) fn levels() -> Vec<Scenario> {
    vec![reference(), compositionality(), negation(), quantification()]
}

/// Level 1: basic predicates.
fn reference() -> Scenario {
    Scenario::new(Language::English, "Arborean")
        .with_alien_name("Subject Quine")
        .with_vocabulary(["Gavagai", "Klaatu", "Barada", "Nikto"])
        .with_keywords(
            "Gavagai",
            ["rabbit", "hare", "bunny", "animal", "critter", "mammal", "coney", "lapin"],
        )
        .with_keywords(
            "Klaatu",
            ["run", "move", "fast", "go", "flee", "sprint", "dash", "motion", "moving", "escape"],
        )
        .with_keywords(
            "Barada",
            ["storm", "rain", "thunder", "weather", "wet", "pour", "lightning", "cloud", "tempest"],
        )
        .with_keywords(
            "Nikto",
            ["wolf", "predator", "danger", "enemy", "threat", "beast", "canine", "hunter"],
        )
        .with_takeaway("Truth is the Primitive: We do not start with reference (word-to-object links). We start by holding the alien's *sentences* true in the observed circumstances.")
        .with_takeaway("Reference is Theoretical: We cannot see 'reference'. Mapping 'Gavagai' to rabbits is just a theoretical move we make to explain why the sentence is true.")
        .with_takeaway("Indeterminacy: Does 'Gavagai' mean 'Rabbit' or 'Undetached Rabbit Part'? As long as the T-sentences come out true, the specific reference remains inscrutable.")
        .with_observation(Observation::new(
            1,
            "A white rabbit scurries rapidly across the tall grass.",
            "🐇🌿💨",
            "Gavagai",
            "There is a rabbit.",
        ))
        .with_observation(Observation::new(
            2,
            "The rabbit sits perfectly still, twitching its nose.",
            "🐇🛑",
            "Gavagai",
            "There is a rabbit (sitting).",
        ))
        .with_observation(Observation::new(
            3,
            "A wolf appears on the ridge. The alien points frantically.",
            "🐺😱",
            "Nikto",
            "There is a wolf.",
        ))
        .with_observation(Observation::new(
            4,
            "The rabbit sees the wolf and runs away.",
            "🐇💨🐺",
            "Klaatu",
            "Something is running.",
        ))
        .with_observation(Observation::new(
            5,
            "Dark clouds gather, thunder rumbles, and rain falls.",
            "☁️⚡🌧️",
            "Barada",
            "It is stormy.",
        ))
        .with_observation(Observation::new(
            6,
            "The wolf runs away from the rain.",
            "🐺💨🌧️",
            "Klaatu",
            "It (the wolf) is running.",
        ))
}

/// Level 2: complex utterances built from known parts.
fn compositionality() -> Scenario {
    Scenario::new(Language::English, "Basaltic")
        .with_alien_name("Subject Tarski")
        .with_vocabulary(["Gorm", "Vell", "Ruz", "Zul"])
        .with_keywords(
            "Gorm",
            ["stone", "rock", "boulder", "mineral", "pebble", "granite", "concrete", "solid object"],
        )
        .with_keywords(
            "Vell",
            ["sky", "air", "cloud", "up", "atmosphere", "heaven", "blue yonder", "above"],
        )
        .with_keywords(
            "Ruz",
            ["red", "crimson", "scarlet", "ruby", "cherry", "maroon", "rose", "reddish"],
        )
        .with_keywords(
            "Zul",
            ["blue", "azure", "cyan", "teal", "sapphire", "cobalt", "indigo", "bluish"],
        )
        .with_takeaway("Compositionality: The meaning of 'Ruz Gorm' depends on the meaning of 'Ruz' plus 'Gorm'.")
        .with_takeaway("Finite Axioms, Infinite Sentences: Once you know the parts, you can understand new combinations like 'Zul Gorm' even if you've never seen a blue stone before.")
        .with_takeaway("Satisfaction: The predicate 'Ruz' is satisfied by all red things.")
        .with_observation(Observation::new(
            1,
            "The alien picks up a rough grey stone.",
            "🪨👽",
            "Gorm",
            "That is a stone.",
        ))
        .with_observation(Observation::new(
            2,
            "The alien points to a bright red stone on the ground.",
            "🔴🪨",
            "Ruz Gorm",
            "That is a red stone.",
        ))
        .with_observation(Observation::new(
            3,
            "The alien points to the clear blue sky.",
            "🟦☀️",
            "Zul Vell",
            "That is a blue sky.",
        ))
        .with_observation(Observation::new(
            4,
            "The sun sets, turning the sky a deep red.",
            "🟥☀️",
            "Ruz Vell",
            "That is a red sky.",
        ))
        .with_observation(Observation::new(
            5,
            "The alien finds a rare blue gem embedded in a rock.",
            "💎🟦",
            "Zul Gorm",
            "That is a blue stone.",
        ))
        .with_observation(Observation::new(
            6,
            "The alien holds up a red flower (distinct from stone/sky).",
            "🌹",
            "Ruz",
            "That is red.",
        ))
}

/// Level 3: a truth-functional operator.
fn negation() -> Scenario {
    Scenario::new(Language::English, "Umbral")
        .with_alien_name("Subject Boole")
        .with_vocabulary(["Zan", "Korn", "Xo"])
        .with_keywords(
            "Zan",
            [
                "light", "day", "sun", "bright", "shining", "glow", "radiance", "lit",
                "illumination", "daytime",
            ],
        )
        .with_keywords(
            "Korn",
            ["fire", "flame", "burn", "heat", "blaze", "inferno", "spark", "combustion", "hot"],
        )
        .with_keywords(
            "Xo",
            [
                "not", "no", "non", "negation", "false", "absence", "without", "gone", "void",
                "lacking", "missing", "n't", "zero",
            ],
        )
        .with_takeaway("Truth Functions: 'Xo' is a logical operator. It flips the truth value of the sentence.")
        .with_takeaway("Abstract Objects: Unlike 'Rabbit', you cannot point to 'Not'. You only see it by the absence of the expected object.")
        .with_takeaway("Recursion: Logical operators allow us to build complex sentences from simple ones.")
        .with_observation(Observation::new(
            1,
            "The sun is shining brightly overhead.",
            "☀️😎",
            "Zan",
            "It is light.",
        ))
        .with_observation(Observation::new(
            2,
            "Night falls. It is completely pitch black.",
            "🌑👀",
            "Xo Zan",
            "It is not light.",
        ))
        .with_observation(Observation::new(
            3,
            "The alien lights a campfire.",
            "🔥🪵",
            "Korn",
            "There is fire.",
        ))
        .with_observation(Observation::new(
            4,
            "The alien pours water on the fire. It goes out, leaving wet ash.",
            "💧💨",
            "Xo Korn",
            "There is no fire.",
        ))
        .with_observation(Observation::new(
            5,
            "The alien holds a torch in a dark cave.",
            "🔦🦇",
            "Korn",
            "There is fire (even here).",
        ))
        .with_observation(Observation::new(
            6,
            "The alien points to the dark cave mouth (no fire, no sun).",
            "🕳️",
            "Xo Zan",
            "There is no light.",
        ))
}

/// Level 4: quantifiers.
fn quantification() -> Scenario {
    Scenario::new(Language::English, "Gestalt")
        .with_alien_name("Subject Cantor")
        .with_vocabulary(["Hek", "Rond", "Sim", "Maka"])
        .with_keywords(
            "Hek",
            ["cube", "box", "square", "block", "voxel", "brick", "die", "dice", "hexahedron"],
        )
        .with_keywords(
            "Rond",
            [
                "sphere", "ball", "round", "orb", "circle", "globe", "marble", "pellet",
                "circular object", "spheroid",
            ],
        )
        .with_keywords(
            "Sim",
            [
                "one", "single", "a ", "an ", "exists", "some", "singular", "individual", "unit",
                "lone", "solo", "unique",
            ],
        )
        .with_keywords(
            "Maka",
            [
                "all", "every", "many", "group", "multiple", "universal", "everything", "plenty",
                "lot", "collective", "entire", "whole",
            ],
        )
        .with_takeaway("Quantification: We moved from talking about specific objects to talking about sets of objects.")
        .with_takeaway("Ontological Commitment (Trivia: Quine's position): To say 'Sim Hek' (There is a cube) commits you to the existence of cubes. Davidson, however, focuses on T-sentences.")
        .with_takeaway("Logical Form: The surface grammar might be simple, but the logical form involves variables ranging over a domain.")
        .with_observation(Observation::new(
            1,
            "A single cube sits on the table.",
            "🟦",
            "Sim Hek",
            "There is a cube.",
        ))
        .with_observation(Observation::new(
            2,
            "A single sphere rolls across the floor.",
            "⚽",
            "Sim Rond",
            "There is a sphere.",
        ))
        .with_observation(Observation::new(
            3,
            "A tray is filled with twenty cubes.",
            "🟦🟦🟦",
            "Maka Hek",
            "There are many/all cubes.",
        ))
        .with_observation(Observation::new(
            4,
            "A pit is filled with hundreds of spheres.",
            "⚽⚽⚽",
            "Maka Rond",
            "There are many/all spheres.",
        ))
        .with_observation(Observation::new(
            5,
            "The alien holds one cube, while pointing at the tray of many cubes.",
            "🟦👉🟦🟦",
            "Sim Hek",
            "There is a cube (Singular).",
        ))
        .with_observation(Observation::new(
            6,
            "The alien sweeps their arm across the entire room of shapes.",
            "🙌📦",
            "Maka",
            "Everything/All.",
        ))
}
