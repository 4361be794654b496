use crate::components::achievements::achievement_grid::AchievementGrid;
use crate::components::achievements::badge_grid::BadgeGrid;
use crate::components::achievements::leaderboard_table::LeaderboardTable;
use crate::components::achievements::stats_summary::StatsSummary;
use crate::components::achievements::tabs::{AchievementsTab, AchievementsTabs};
use crate::hooks::use_achievement_data;
use log::info;
use yew::prelude::*;

#[function_component(AchievementsPage)]
pub fn achievements_page() -> Html {
    let data = use_achievement_data();
    let current_tab = use_state(|| AchievementsTab::Achievements);
    let state = data.state();

    let on_tab_click = {
        let current_tab = current_tab.clone();
        Callback::from(move |tab: AchievementsTab| current_tab.set(tab))
    };

    let on_claim = {
        let data = data.clone();
        Callback::from(move |id: String| {
            if let Some(previous) = data.claim_achievement(&id) {
                info!("Claimed \"{}\" for {} points", previous.title, previous.points);
            }
        })
    };

    let on_refresh = {
        let refresh = data.refresh_callback();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    let body = if state.loading && state.achievements.is_empty() {
        html! {
            <div class="bg-white rounded-xl shadow-mobile-soft p-6 border border-gray-100">
                <div class="text-center py-8 text-gray-500">{"Loading achievements..."}</div>
            </div>
        }
    } else {
        match *current_tab {
            AchievementsTab::Achievements => html! {
                <AchievementGrid achievements={state.achievements.clone()} on_claim={on_claim} />
            },
            AchievementsTab::Badges => html! {
                <BadgeGrid badges={state.badges.clone()} />
            },
            AchievementsTab::Leaderboard => html! {
                <LeaderboardTable entries={state.leaderboard.clone()} />
            },
        }
    };

    html! {
        <div class="max-w-5xl mx-auto px-4 py-6 space-y-6">
            <StatsSummary stats={state.stats.clone()} />
            {state.error.as_ref().map(|error| html! {
                <div class="rounded-lg border border-red-200 bg-red-50 p-4 flex items-center justify-between">
                    <span class="text-sm text-red-700">{error.clone()}</span>
                    <button class="text-sm font-medium text-red-700 underline" onclick={on_refresh.clone()}>
                        {"Retry"}
                    </button>
                </div>
            }).unwrap_or_else(|| html! {})}
            <div class="flex items-center justify-between">
                <AchievementsTabs current_tab={*current_tab} on_tab_click={on_tab_click} />
                <button
                    class="text-sm text-blue-600 hover:text-blue-800 disabled:opacity-50"
                    disabled={state.loading}
                    onclick={on_refresh}
                >
                    {if state.loading { "Refreshing..." } else { "Refresh" }}
                </button>
            </div>
            {body}
        </div>
    }
}
