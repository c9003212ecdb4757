//! Hit point lines.

use faerun_domain::{format_signed, CharacterBuild, HpBreakdown, MaxHpBreakdown};

/// Level-up HP calculation, e.g. `6 PV + 8 PV obtenus (moyenne) +4PV (CON) = 18 PV`.
pub fn render_hp_gain(breakdown: &HpBreakdown, new_hp: i32) -> String {
    let mut text = format!(
        "{} PV + {} PV obtenus (moyenne)",
        breakdown.previous_hp, breakdown.hp_from_levels
    );

    if breakdown.hp_from_constitution != 0 {
        text.push_str(&format!(
            " {}PV (CON)",
            format_signed(i64::from(breakdown.hp_from_constitution))
        ));
    }

    if breakdown.flat_bonus.is_shown() {
        text.push_str(&format!(" +{}", breakdown.flat_bonus.annotation()));
    }

    text.push_str(&format!(" = {} PV", new_hp));
    text
}

/// Maximum HP breakdown of one character card.
pub fn render_hp_breakdown(build: &CharacterBuild, hp: &MaxHpBreakdown) -> String {
    let modifier = build.constitution_modifier();
    let name = if build.name.trim().is_empty() {
        "Personnage"
    } else {
        build.name.trim()
    };

    [
        format!("🎲 PV de base (niveau 1) : {}", hp.base),
        format!(
            "💪 Modificateur Constitution ({}) : {}",
            signed_or_zero(modifier),
            signed_or_zero(hp.constitution)
        ),
        format!("📈 PV par niveaux supplémentaires : +{}", hp.levels),
        format!("🧝 Bonus racial : +{}", hp.racial),
        format!("🎒 Dons et objets : +{}", hp.bonus),
        format!("🏆 TOTAL : {} PV", hp.total),
        format!("{} - Niveau total: {}", name, hp.total_level),
    ]
    .join("\n")
}

fn signed_or_zero(value: i32) -> String {
    if value >= 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}
