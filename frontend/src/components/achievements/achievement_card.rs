use super::{achievement_rarity_classes, format_date};
use shared::{Achievement, ClaimStatus};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AchievementCardProps {
    pub achievement: Achievement,
    pub on_claim: Callback<String>,
}

/// Text and colour for the claim state, if the card should show one.
pub fn claim_note(achievement: &Achievement) -> Option<(&'static str, &'static str)> {
    match achievement.claim_status {
        ClaimStatus::Pending => Some(("Claiming...", "text-green-700")),
        ClaimStatus::Failed => Some(("Claim failed", "text-red-600")),
        ClaimStatus::Synced => None,
    }
}

#[function_component(AchievementCard)]
pub fn achievement_card(props: &AchievementCardProps) -> Html {
    let achievement = &props.achievement;
    let progress = achievement.completion_percent();

    let on_claim = {
        let on_claim = props.on_claim.clone();
        let id = achievement.id.clone();
        Callback::from(move |_: MouseEvent| on_claim.emit(id.clone()))
    };

    let note = claim_note(achievement).map(|(text, class)| {
        html! { <span class={classes!("text-xs", "font-semibold", class)}>{text}</span> }
    });

    let status = if achievement.claimable {
        html! {
            <div class="flex items-center gap-2">
                {note.unwrap_or_default()}
                <button
                    class="text-xs font-semibold text-white bg-green-600 hover:bg-green-700 rounded px-2 py-1"
                    onclick={on_claim}
                >
                    {"Claim"}
                </button>
            </div>
        }
    } else if achievement.unlocked {
        note.unwrap_or_else(|| html! { <span class="text-xs font-semibold text-green-700">{"Unlocked"}</span> })
    } else {
        html! { <span class="text-xs font-semibold text-gray-500">{"In progress"}</span> }
    };

    html! {
        <div class={classes!("rounded-lg", "border", "p-4", achievement_rarity_classes(achievement.rarity))}>
            <div class="flex items-start justify-between gap-4">
                <div class="flex items-start gap-3">
                    <span class="text-2xl">{achievement.icon.clone()}</span>
                    <div>
                        <h4 class="text-sm font-semibold text-gray-900">{achievement.title.clone()}</h4>
                        <p class="text-xs text-gray-600 mt-1">{achievement.description.clone()}</p>
                        <p class="text-xs text-gray-500 mt-1">
                            {format!("{} pts · {}", achievement.points, achievement.rarity)}
                        </p>
                    </div>
                </div>
                {status}
            </div>
            <div class="mt-3">
                <div class="flex justify-between text-xs text-gray-600 mb-1">
                    <span>{format!("{}/{}", achievement.progress, achievement.max_progress)}</span>
                    <span>{format!("{}%", progress)}</span>
                </div>
                <div class="h-2 w-full rounded-full bg-gray-200">
                    <div
                        class={classes!(
                            "h-2", "rounded-full",
                            if achievement.unlocked { "bg-green-500" } else { "bg-blue-500" }
                        )}
                        style={format!("width: {}%;", progress)}
                    ></div>
                </div>
                {achievement.unlocked_at.as_ref().map(|ts| html! {
                    <div class="text-xs text-gray-500 mt-2">
                        {format!("Unlocked on {}", format_date(ts))}
                    </div>
                }).unwrap_or_else(|| html! {})}
                {if !achievement.unlocked {
                    achievement.hint.as_ref().map(|hint| html! {
                        <div class="text-xs italic text-gray-500 mt-2">{format!("Hint: {}", hint)}</div>
                    }).unwrap_or_else(|| html! {})
                } else {
                    html! {}
                }}
                {achievement.unlock_percentage.map(|pct| html! {
                    <div class="text-xs text-gray-400 mt-1">{format!("{:.1}% of players", pct)}</div>
                }).unwrap_or_else(|| html! {})}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::claim_note;
    use pretty_assertions::assert_eq;
    use shared::dto::achievement::normalize_achievements;
    use shared::{AchievementAction, AchievementState, Snapshot};

    fn state_with_claimable() -> AchievementState {
        let achievements = normalize_achievements(Some(serde_json::json!([
            { "id": "a1", "points": 100, "userProgress": { "progress": 1, "claimable": true } }
        ])));
        let mut state = AchievementState::default();
        state.apply(AchievementAction::FetchStarted { generation: 1 });
        state.apply(AchievementAction::FetchSucceeded {
            generation: 1,
            snapshot: Snapshot { achievements, ..Default::default() },
        });
        state
    }

    #[test]
    fn rejected_claim_shows_failure_next_to_claim_button() {
        let mut state = state_with_claimable();
        assert_eq!(claim_note(&state.achievements[0]), None);

        state.claim_achievement("a1");
        assert_eq!(claim_note(&state.achievements[0]).map(|(text, _)| text), Some("Claiming..."));

        state.resolve_claim("a1", false);
        let rolled_back = &state.achievements[0];
        assert!(rolled_back.claimable);
        assert_eq!(claim_note(rolled_back).map(|(text, _)| text), Some("Claim failed"));
    }

    #[test]
    fn synced_claim_has_no_note() {
        let mut state = state_with_claimable();
        state.claim_achievement("a1");
        state.resolve_claim("a1", true);
        assert_eq!(claim_note(&state.achievements[0]), None);
    }
}
