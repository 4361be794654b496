use super::trend_icon;
use shared::LeaderboardEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LeaderboardTableProps {
    pub entries: Vec<LeaderboardEntry>,
}

#[function_component(LeaderboardTable)]
pub fn leaderboard_table(props: &LeaderboardTableProps) -> Html {
    if props.entries.is_empty() {
        return html! {
            <div class="bg-white rounded-xl shadow-mobile-soft p-6 border border-gray-100">
                <div class="text-center py-8 text-gray-500">{"No leaderboard data yet."}</div>
            </div>
        };
    }

    html! {
        <div class="bg-white rounded-xl shadow-mobile-soft border border-gray-100 overflow-hidden">
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        <th class="px-4 py-2 text-left text-xs font-medium text-gray-500">{"Rank"}</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-gray-500">{"Player"}</th>
                        <th class="px-4 py-2 text-right text-xs font-medium text-gray-500">{"Points"}</th>
                        <th class="px-4 py-2 text-right text-xs font-medium text-gray-500">{"Unlocked"}</th>
                        <th class="px-4 py-2 text-right text-xs font-medium text-gray-500">{"Level"}</th>
                        <th class="px-4 py-2 text-center text-xs font-medium text-gray-500">{"Trend"}</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-100">
                    {props.entries.iter().map(|entry| html! {
                        <tr
                            key={entry.id.clone()}
                            class={classes!(if entry.is_current_user { "bg-blue-50 font-semibold" } else { "" })}
                        >
                            <td class="px-4 py-2 text-sm text-gray-900">{format!("#{}", entry.rank)}</td>
                            <td class="px-4 py-2 text-sm text-gray-900">
                                <div class="flex items-center gap-2">
                                    <img class="h-8 w-8 rounded-full" src={entry.avatar.clone()} alt={entry.name.clone()} />
                                    <span>{entry.name.clone()}</span>
                                </div>
                            </td>
                            <td class="px-4 py-2 text-sm text-right">{entry.points}</td>
                            <td class="px-4 py-2 text-sm text-right">{entry.achievements_unlocked}</td>
                            <td class="px-4 py-2 text-sm text-right">{entry.level}</td>
                            <td class="px-4 py-2 text-sm text-center">{trend_icon(entry.trend)}</td>
                        </tr>
                    }).collect::<Html>()}
                </tbody>
            </table>
        </div>
    }
}
