use shared::AchievementStats;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatsSummaryProps {
    pub stats: AchievementStats,
}

#[function_component(StatsSummary)]
pub fn stats_summary(props: &StatsSummaryProps) -> Html {
    let stats = &props.stats;
    let rank_progress = if stats.next_rank_xp == 0 {
        100
    } else {
        ((stats.total_xp.min(stats.next_rank_xp) as f64 / stats.next_rank_xp as f64) * 100.0).round() as u32
    };

    html! {
        <div class="bg-white rounded-xl shadow-mobile-soft p-6 border border-gray-100">
            <div class="flex items-center justify-between mb-4">
                <div>
                    <h2 class="text-2xl font-bold text-gray-900">{"Achievements"}</h2>
                    <p class="mt-1 text-gray-600">{stats.rank.clone()}</p>
                </div>
                <div class="text-4xl">{"🏅"}</div>
            </div>
            <div class="grid grid-cols-2 sm:grid-cols-4 gap-4">
                <div class="bg-blue-50 rounded-lg p-4">
                    <p class="text-xs font-medium text-blue-700">{"Total XP"}</p>
                    <p class="text-2xl font-bold text-blue-900">{stats.total_xp}</p>
                </div>
                <div class="bg-gray-50 rounded-lg p-4">
                    <p class="text-xs font-medium text-gray-600">{"Unlocked"}</p>
                    <p class="text-2xl font-bold text-gray-900">
                        {format!("{}/{}", stats.unlocked_count, stats.total_count)}
                    </p>
                </div>
                <div class="bg-green-50 rounded-lg p-4">
                    <p class="text-xs font-medium text-green-700">{"Completion"}</p>
                    <p class="text-2xl font-bold text-green-900">{format!("{}%", stats.completion_rate)}</p>
                </div>
                <div class="bg-orange-50 rounded-lg p-4">
                    <p class="text-xs font-medium text-orange-700">{"Streak"}</p>
                    <p class="text-2xl font-bold text-orange-900">{format!("{} 🔥", stats.current_streak)}</p>
                </div>
            </div>
            <div class="mt-4">
                <div class="flex justify-between text-xs text-gray-600 mb-1">
                    <span>
                        {if stats.xp_to_next_rank == 0 {
                            "Top rank reached".to_string()
                        } else {
                            format!("{} XP to next rank", stats.xp_to_next_rank)
                        }}
                    </span>
                    <span>{format!("Badges {}/{} ({}%)", stats.earned_badges, stats.total_badges, stats.badge_completion_rate)}</span>
                </div>
                <div class="h-2 w-full rounded-full bg-gray-200">
                    <div class="h-2 rounded-full bg-blue-500" style={format!("width: {}%;", rank_progress)}></div>
                </div>
            </div>
        </div>
    }
}
