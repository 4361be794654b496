use super::achievement_card::AchievementCard;
use shared::{filter_and_sort, Achievement, AchievementQuery};
use std::collections::BTreeSet;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AchievementGridProps {
    pub achievements: Vec<Achievement>,
    pub on_claim: Callback<String>,
}

/// Distinct categories in display order, for the category filter
pub fn categories(achievements: &[Achievement]) -> Vec<String> {
    achievements
        .iter()
        .map(|a| a.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn select_callback(handle: UseStateHandle<String>) -> Callback<Event> {
    Callback::from(move |event: Event| {
        let value = event
            .target_unchecked_into::<HtmlSelectElement>()
            .value();
        handle.set(value);
    })
}

#[function_component(AchievementGrid)]
pub fn achievement_grid(props: &AchievementGridProps) -> Html {
    let search_term = use_state(String::new);
    let category = use_state(|| "all".to_string());
    let rarity = use_state(|| "all".to_string());
    let sort_by = use_state(|| "recent".to_string());
    let unlocked_only = use_state(|| false);

    let query = AchievementQuery::new(
        &search_term,
        &category,
        &rarity,
        &sort_by,
        *unlocked_only,
    );
    let visible = filter_and_sort(&props.achievements, &query);

    let on_search = {
        let search_term = search_term.clone();
        Callback::from(move |event: InputEvent| {
            let value = event.target_unchecked_into::<HtmlInputElement>().value();
            search_term.set(value);
        })
    };

    let on_unlocked_only = {
        let unlocked_only = unlocked_only.clone();
        Callback::from(move |event: Event| {
            let checked = event.target_unchecked_into::<HtmlInputElement>().checked();
            unlocked_only.set(checked);
        })
    };

    html! {
        <div class="space-y-6">
            <div class="bg-gray-50 rounded-lg p-4">
                <div class="grid grid-cols-1 sm:grid-cols-5 gap-4 items-end">
                    <div class="sm:col-span-2">
                        <label class="block text-xs font-medium text-gray-500 mb-1">{"Search"}</label>
                        <input
                            type="text"
                            class="w-full border border-gray-200 rounded-md px-2 py-1 text-sm"
                            placeholder="Search achievements"
                            value={(*search_term).clone()}
                            oninput={on_search}
                        />
                    </div>
                    <div>
                        <label class="block text-xs font-medium text-gray-500 mb-1">{"Category"}</label>
                        <select
                            class="w-full border border-gray-200 rounded-md px-2 py-1 text-sm"
                            value={(*category).clone()}
                            onchange={select_callback(category.clone())}
                        >
                            <option value="all">{"All"}</option>
                            {categories(&props.achievements).into_iter().map(|c| html! {
                                <option value={c.clone()}>{c}</option>
                            }).collect::<Html>()}
                        </select>
                    </div>
                    <div>
                        <label class="block text-xs font-medium text-gray-500 mb-1">{"Rarity"}</label>
                        <select
                            class="w-full border border-gray-200 rounded-md px-2 py-1 text-sm"
                            value={(*rarity).clone()}
                            onchange={select_callback(rarity.clone())}
                        >
                            <option value="all">{"All"}</option>
                            <option value="common">{"Common"}</option>
                            <option value="rare">{"Rare"}</option>
                            <option value="epic">{"Epic"}</option>
                            <option value="legendary">{"Legendary"}</option>
                        </select>
                    </div>
                    <div>
                        <label class="block text-xs font-medium text-gray-500 mb-1">{"Sort"}</label>
                        <select
                            class="w-full border border-gray-200 rounded-md px-2 py-1 text-sm"
                            value={(*sort_by).clone()}
                            onchange={select_callback(sort_by.clone())}
                        >
                            <option value="recent">{"Recently unlocked"}</option>
                            <option value="points">{"Points"}</option>
                            <option value="progress">{"Progress"}</option>
                            <option value="rarity">{"Rarity"}</option>
                        </select>
                    </div>
                </div>
                <label class="mt-3 inline-flex items-center gap-2 text-sm text-gray-600">
                    <input type="checkbox" checked={*unlocked_only} onchange={on_unlocked_only} />
                    {"Unlocked only"}
                </label>
            </div>

            {if visible.is_empty() {
                html! {
                    <div class="bg-white rounded-xl shadow-mobile-soft p-6 border border-gray-100">
                        <div class="text-center py-8 text-gray-500">{"No achievements match those filters."}</div>
                    </div>
                }
            } else {
                html! {
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        {visible.into_iter().map(|achievement| {
                            let key = achievement.id.clone();
                            html! {
                                <AchievementCard
                                    key={key}
                                    achievement={achievement}
                                    on_claim={props.on_claim.clone()}
                                />
                            }
                        }).collect::<Html>()}
                    </div>
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::categories;
    use pretty_assertions::assert_eq;
    use shared::dto::achievement::normalize_achievements;

    #[test]
    fn categories_are_distinct_and_sorted() {
        let achievements = normalize_achievements(Some(serde_json::json!([
            { "id": "1", "category": "learning" },
            { "id": "2" },
            { "id": "3", "category": "compliance" },
            { "id": "4", "category": "learning" },
        ])));
        assert_eq!(categories(&achievements), vec!["compliance", "general", "learning"]);
    }
}
