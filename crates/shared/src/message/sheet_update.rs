//! Sheet-update message, as posted in the Discord sheet channel.
//!
//! Layout and literal banners are fixed by the channel's moderation rules;
//! any change here shows up as a diff the moderators have to review.

use faerun_domain::{
    format_gold_equivalent, primary_class_name, QuestAggregate, QuestLink, QuestSummary,
    XpOutlook,
};

use super::hp::render_hp_gain;
use crate::form::{non_blank, SheetUpdateForm};
use crate::report::SheetUpdateReport;

/// Zero-width word joiner placed before `- ` so Discord does not start a list.
const WORD_JOINER: char = '\u{2060}';

const PJ_OPEN: &str = "** / =======================  PJ  ========================= \\ **";
const PJ_CLOSE: &str = "** \\ =======================  PJ  ========================= / **";
const MERCHANT_OPEN: &str = "**/ ===================== Marchand ===================== \\ **";
const MERCHANT_CLOSE: &str = "** \\ ==================== Marchand ====================== / **";

/// Render the full sheet-update block.
pub fn render_sheet_update(form: &SheetUpdateForm, report: &SheetUpdateReport) -> String {
    let mut lines: Vec<String> = vec![
        format!(
            "Nom du PJ : {}",
            non_blank(&form.character_name).unwrap_or("[NOM_PJ]")
        ),
        format!("Classe : {}", form.class_label()),
    ];

    if let Some((activity, description)) = form.special_activity() {
        let title = activity.title();
        lines.push(format!(
            "/ =======================  {}  ========================= \\ ",
            title
        ));
        lines.push(description.to_string());
        lines.push(format!(
            "\\ =======================  {}  ========================= /",
            title
        ));
    }

    lines.push(PJ_OPEN.to_string());
    lines.push(quest_section(&report.quests));

    if let Some(xp) = xp_line(report) {
        lines.push(xp);
    }

    let state = &report.state;
    if state.is_leveling() {
        lines.push(format!(
            "**Gain de niveau :** Niveau {} → **Niveau {}** 🎉",
            state.current_level, state.target_level
        ));
        if let Some(breakdown) = &report.hp.breakdown {
            if state.current_hp > 0 {
                lines.push(format!(
                    "**PV :** {}",
                    render_hp_gain(breakdown, report.hp.new_hp)
                ));
            }
        }
    }

    lines.push("**¤ Capacités et sorts supplémentaires :**".to_string());
    lines.push("Nouvelle(s) capacité(s) :".to_string());
    lines.push(or_dash(&form.new_abilities));
    lines.push("Nouveau(x) sort(s) :".to_string());
    lines.push(or_dash(&form.new_spells));
    lines.push("Sort remplacé :".to_string());
    lines.push(or_dash(&form.replaced_spell));

    lines.extend(inventory_lines(form, report));
    lines.push(PJ_CLOSE.to_string());

    if form.include_merchant {
        if let Some(purchases) = non_blank(&form.purchases) {
            lines.push(MERCHANT_OPEN.to_string());
            lines.push("**¤ Inventaire**".to_string());
            lines.push(purchases.to_string());
            lines.push(MERCHANT_CLOSE.to_string());
        }
    }

    lines.push("**¤ Solde :**".to_string());
    lines.push(balance_line(form, report));
    lines.push("*Fiche R20 à jour.*".to_string());

    lines.join("\n")
}

fn quest_section(quests: &QuestAggregate) -> String {
    if quests.is_empty() {
        return format!(
            "**Quête :** [TITRE_QUETE] + [NOM_MJ] {}- [LIEN_RECOMPENSES]",
            WORD_JOINER
        );
    }

    let lines: Vec<String> = quests.per_quest.iter().map(quest_line).collect();
    format!("**Quête :** [\n{}\n] +{} XP", lines.join("\n"), quests.total_xp)
}

fn quest_line(quest: &QuestSummary) -> String {
    let n = quest.position;
    let title = quest
        .title
        .clone()
        .unwrap_or_else(|| format!("[TITRE_QUETE_{}]", n));
    let dm = quest.dm.clone().unwrap_or_else(|| format!("[MJ_{}]", n));
    let rewards = reward_suffix(quest);

    match &quest.link {
        QuestLink::Single { reward_link } => format!(
            "- {} + {} {}- {}, +{} XP{}",
            title,
            dm,
            WORD_JOINER,
            reward_link
                .clone()
                .unwrap_or_else(|| format!("[LIEN_RECOMPENSE_{}]", n)),
            quest.xp,
            rewards
        ),
        QuestLink::MultiSession { sessions } => format!(
            "- {} + MJ {} {}- [\n{}\n] +{} XP{}",
            title,
            dm,
            WORD_JOINER,
            sessions
                .clone()
                .unwrap_or_else(|| format!("[SESSIONS_QUETE_{}]", n)),
            quest.xp,
            rewards
        ),
    }
}

fn reward_suffix(quest: &QuestSummary) -> String {
    let mut suffix = String::new();
    let currency = quest.currency.format_deltas();
    for part in std::iter::once(currency)
        .chain(std::iter::once(quest.items.join(", ")))
        .chain(std::iter::once(quest.others.join(", ")))
    {
        if !part.is_empty() {
            suffix.push_str(", ");
            suffix.push_str(&part);
        }
    }
    suffix
}

fn xp_line(report: &SheetUpdateReport) -> Option<String> {
    let progression = &report.progression;
    if progression.xp_gained == 0 {
        return None;
    }

    let requirement = progression
        .next_level_requirement
        .map_or_else(|| "?".to_string(), |xp| xp.to_string());

    let mut line = format!(
        "**Solde XP :** {}/{} + {}XP obtenue ==> {} ==> {}/{}",
        progression.current_xp,
        requirement,
        progression.xp_gained,
        progression.new_total_xp,
        progression.new_total_xp,
        requirement
    );

    if progression.leveled_up() {
        let announced = if progression.target_level > progression.current_level {
            progression.target_level
        } else {
            progression.reachable_level
        };
        line.push_str(&format!(
            " ==> LEVEL UP {} {}",
            leveling_class_name(&report.state.primary_class),
            announced
        ));
    }

    line.push_str(&outlook_marker(progression.outlook()));
    Some(line)
}

fn leveling_class_name(label: &str) -> &str {
    match label.trim() {
        "" | "[CLASSE]" | "[CLASSE_COMPLETE]" => "CLASSE",
        trimmed => primary_class_name(trimmed),
    }
}

fn outlook_marker(outlook: XpOutlook) -> String {
    match outlook {
        XpOutlook::TargetReached => " ✅".to_string(),
        XpOutlook::MultiLevelReached => " 🚀".to_string(),
        XpOutlook::CouldReach { reachable } => {
            format!(" 💡 Vous pourriez atteindre le niveau {} !", reachable)
        }
        XpOutlook::MissingXp {
            missing,
            next_level,
        } => format!(" ⚠️ (Manque {} XP pour niveau {})", missing, next_level),
        XpOutlook::Steady | XpOutlook::NoThreshold | XpOutlook::LevelUpAvailable => String::new(),
    }
}

fn inventory_lines(form: &SheetUpdateForm, report: &SheetUpdateReport) -> Vec<String> {
    let quest_items = report.quests.item_descriptions.join(", ");
    let items: Vec<&str> = [non_blank(&form.looted_items), non_blank(&quest_items)]
        .into_iter()
        .flatten()
        .collect();
    let items = items.join(", ");
    let coins = report.looted.format_deltas();

    if items.is_empty() && coins.is_empty() {
        return Vec::new();
    }

    let mut lines = vec!["**¤ Inventaire**".to_string()];
    if !items.is_empty() {
        lines.push("Objets lootés :".to_string());
        lines.push(items);
    }
    if !coins.is_empty() {
        lines.push(format!("Monnaies lootées: {}", coins));
    }
    lines
}

fn balance_line(form: &SheetUpdateForm, report: &SheetUpdateReport) -> String {
    let previous = non_blank(&form.previous_balance).unwrap_or("[ANCIEN_SOLDE]");
    let change = report.balance_change.gold_equivalent;
    let delta = report.balance_change.display_gold_equivalent();

    if delta == "0" {
        return format!("ANCIEN SOLDE {} inchangé", previous);
    }

    let sign = if change > 0.0 { "+" } else { "" };
    let new_balance = previous
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map_or_else(
            || "[NOUVEAU_SOLDE]".to_string(),
            |value| format_gold_equivalent(value + change),
        );

    format!("ANCIEN SOLDE {} {}{} = {}", previous, sign, delta, new_balance)
}

fn or_dash(raw: &str) -> String {
    non_blank(raw).unwrap_or("-").to_string()
}
