//! Static reference table for the 12 zodiac signs.
//!
//! Compatibility lists are directional: a sign's `best`/`good`/`challenging`
//! entries describe how *it* relates to others, and the reverse entry is
//! not required to agree.

use crate::domain::model::ZodiacId::*;
use crate::domain::model::{Compatibles, Element, ZodiacId, ZodiacSign};
use crate::utils::error::{Result, SajuError};
use serde::Serialize;

pub static SIGNS: [ZodiacSign; 12] = [
    ZodiacSign {
        id: Rat,
        name: "Rat",
        name_ko: "쥐",
        element: Element::Water,
        traits: &["quick-witted", "resourceful", "sociable", "thrifty"],
        careers: &["entrepreneur", "analyst", "writer", "broker"],
        lucky_numbers: &[2, 3],
        lucky_colors: &["blue", "gold", "green"],
        fortune: "A year to gather information before acting; small savings grow into an opening.",
        compatibility: Compatibles {
            best: &[Dragon, Monkey],
            good: &[Ox, Pig],
            challenging: &[Horse, Goat],
        },
    },
    ZodiacSign {
        id: Ox,
        name: "Ox",
        name_ko: "소",
        element: Element::Earth,
        traits: &["diligent", "dependable", "patient", "determined"],
        careers: &["engineer", "farmer", "surgeon", "manager"],
        lucky_numbers: &[1, 4],
        lucky_colors: &["white", "yellow", "green"],
        fortune: "Steady effort is rewarded; avoid rushing agreements in the second half of the year.",
        compatibility: Compatibles {
            best: &[Snake, Rooster],
            good: &[Rat],
            challenging: &[Goat, Horse],
        },
    },
    ZodiacSign {
        id: Tiger,
        name: "Tiger",
        name_ko: "호랑이",
        element: Element::Wood,
        traits: &["brave", "confident", "competitive", "generous"],
        careers: &["officer", "athlete", "director", "explorer"],
        lucky_numbers: &[1, 3, 4],
        lucky_colors: &["blue", "grey", "orange"],
        fortune: "Leadership comes naturally this year; temper boldness with listening.",
        compatibility: Compatibles {
            best: &[Horse, Dog],
            good: &[Pig],
            challenging: &[Monkey, Snake],
        },
    },
    ZodiacSign {
        id: Rabbit,
        name: "Rabbit",
        name_ko: "토끼",
        element: Element::Wood,
        traits: &["gentle", "elegant", "cautious", "kind"],
        careers: &["designer", "diplomat", "teacher", "counselor"],
        lucky_numbers: &[3, 4, 6],
        lucky_colors: &["red", "pink", "purple"],
        fortune: "Relationships deepen; a quiet choice made early in the year pays off later.",
        compatibility: Compatibles {
            best: &[Goat, Pig],
            good: &[Dog],
            challenging: &[Rooster, Dragon],
        },
    },
    ZodiacSign {
        id: Dragon,
        name: "Dragon",
        name_ko: "용",
        element: Element::Earth,
        traits: &["ambitious", "energetic", "charismatic", "proud"],
        careers: &["executive", "architect", "lawyer", "performer"],
        lucky_numbers: &[1, 6, 7],
        lucky_colors: &["gold", "silver", "grey"],
        fortune: "Large plans find support; keep an eye on health during busy seasons.",
        compatibility: Compatibles {
            best: &[Rat, Monkey],
            good: &[Rooster],
            challenging: &[Dog, Rabbit],
        },
    },
    ZodiacSign {
        id: Snake,
        name: "Snake",
        name_ko: "뱀",
        element: Element::Fire,
        traits: &["wise", "intuitive", "private", "determined"],
        careers: &["researcher", "philosopher", "investor", "psychologist"],
        lucky_numbers: &[2, 8, 9],
        lucky_colors: &["black", "red", "yellow"],
        fortune: "Insight brings financial gains; share plans only with trusted people.",
        compatibility: Compatibles {
            best: &[Ox, Rooster],
            good: &[Monkey],
            challenging: &[Pig, Tiger],
        },
    },
    ZodiacSign {
        id: Horse,
        name: "Horse",
        name_ko: "말",
        element: Element::Fire,
        traits: &["energetic", "independent", "warm-hearted", "impatient"],
        careers: &["journalist", "pilot", "salesperson", "tour guide"],
        lucky_numbers: &[2, 3, 7],
        lucky_colors: &["yellow", "green"],
        fortune: "Travel and movement bring luck; finish one project before starting the next.",
        compatibility: Compatibles {
            best: &[Tiger, Dog],
            good: &[Goat],
            challenging: &[Rat, Ox],
        },
    },
    ZodiacSign {
        id: Goat,
        name: "Goat",
        name_ko: "양",
        element: Element::Earth,
        traits: &["calm", "creative", "empathetic", "shy"],
        careers: &["artist", "nurse", "gardener", "musician"],
        lucky_numbers: &[2, 7],
        lucky_colors: &["brown", "red", "purple"],
        fortune: "Creative work is recognised; lean on family when decisions feel heavy.",
        compatibility: Compatibles {
            best: &[Rabbit, Pig],
            good: &[Horse],
            challenging: &[Ox, Rat],
        },
    },
    ZodiacSign {
        id: Monkey,
        name: "Monkey",
        name_ko: "원숭이",
        element: Element::Metal,
        traits: &["clever", "curious", "playful", "versatile"],
        careers: &["inventor", "trader", "programmer", "comedian"],
        lucky_numbers: &[4, 9],
        lucky_colors: &["white", "blue", "gold"],
        fortune: "New skills open doors; guard against scattering energy across too many ideas.",
        compatibility: Compatibles {
            best: &[Rat, Dragon],
            good: &[Snake],
            challenging: &[Tiger, Pig],
        },
    },
    ZodiacSign {
        id: Rooster,
        name: "Rooster",
        name_ko: "닭",
        element: Element::Metal,
        traits: &["observant", "punctual", "honest", "outspoken"],
        careers: &["accountant", "editor", "chef", "military officer"],
        lucky_numbers: &[5, 7, 8],
        lucky_colors: &["gold", "brown", "yellow"],
        fortune: "Careful planning leads to promotion; soften criticism of close colleagues.",
        compatibility: Compatibles {
            best: &[Ox, Snake],
            good: &[Dragon],
            challenging: &[Rabbit, Dog],
        },
    },
    ZodiacSign {
        id: Dog,
        name: "Dog",
        name_ko: "개",
        element: Element::Earth,
        traits: &["loyal", "honest", "protective", "anxious"],
        careers: &["police officer", "social worker", "judge", "doctor"],
        lucky_numbers: &[3, 4, 9],
        lucky_colors: &["red", "green", "purple"],
        fortune: "Trust built over years returns as help; rest before fatigue sets in.",
        compatibility: Compatibles {
            best: &[Tiger, Horse],
            good: &[Rabbit],
            challenging: &[Dragon, Rooster],
        },
    },
    ZodiacSign {
        id: Pig,
        name: "Pig",
        name_ko: "돼지",
        element: Element::Water,
        traits: &["generous", "sincere", "easygoing", "diligent"],
        careers: &["hospitality manager", "entertainer", "veterinarian", "volunteer coordinator"],
        lucky_numbers: &[2, 5, 8],
        lucky_colors: &["yellow", "grey", "brown"],
        fortune: "Abundance in daily life; review contracts closely before signing.",
        compatibility: Compatibles {
            best: &[Rabbit, Goat],
            good: &[Tiger],
            challenging: &[Snake, Monkey],
        },
    },
];

pub fn sign(id: ZodiacId) -> &'static ZodiacSign {
    &SIGNS[id.index()]
}

pub fn find_sign(id: &str) -> Option<&'static ZodiacSign> {
    id.parse::<ZodiacId>().ok().map(sign)
}

pub fn signs() -> &'static [ZodiacSign] {
    &SIGNS
}

#[derive(Serialize)]
struct SignRow<'a> {
    id: &'a str,
    name: &'a str,
    name_ko: &'a str,
    element: &'a str,
    traits: String,
    careers: String,
    lucky_numbers: String,
    lucky_colors: String,
    best: String,
    good: String,
    challenging: String,
}

fn join_ids(ids: &[ZodiacId]) -> String {
    ids.iter().map(|id| id.as_str()).collect::<Vec<_>>().join(";")
}

/// Flattens the table to CSV, one row per sign, list fields `;`-joined.
pub fn table_csv(table: &[ZodiacSign]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for s in table {
        writer.serialize(SignRow {
            id: s.id.as_str(),
            name: s.name,
            name_ko: s.name_ko,
            element: s.element.as_str(),
            traits: s.traits.join(";"),
            careers: s.careers.join(";"),
            lucky_numbers: s
                .lucky_numbers
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(";"),
            lucky_colors: s.lucky_colors.join(";"),
            best: join_ids(s.compatibility.best),
            good: join_ids(s.compatibility.good),
            challenging: join_ids(s.compatibility.challenging),
        })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| SajuError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| SajuError::ValidationError {
        message: format!("CSV output is not UTF-8: {}", e),
    })
}
