use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AchievementsTab {
    Achievements,
    Badges,
    Leaderboard,
}

#[derive(Properties, PartialEq)]
pub struct AchievementsTabsProps {
    pub current_tab: AchievementsTab,
    pub on_tab_click: Callback<AchievementsTab>,
}

#[function_component(AchievementsTabs)]
pub fn achievements_tabs(props: &AchievementsTabsProps) -> Html {
    let tabs = [
        (AchievementsTab::Achievements, "🏆", "Achievements"),
        (AchievementsTab::Badges, "🎖️", "Badges"),
        (AchievementsTab::Leaderboard, "📈", "Leaderboard"),
    ];

    html! {
        <div class="border-b border-gray-200">
            <nav class="-mb-px flex space-x-8">
                {tabs.iter().map(|(tab, icon, label)| {
                    let is_active = props.current_tab == *tab;
                    let tab_click = props.on_tab_click.clone();
                    let tab = *tab;

                    html! {
                        <button
                            class={classes!(
                                "py-2", "px-1", "border-b-2", "font-medium", "text-sm",
                                if is_active {
                                    classes!("border-blue-500", "text-blue-600")
                                } else {
                                    classes!("border-transparent", "text-gray-500", "hover:text-gray-700", "hover:border-gray-300")
                                }
                            )}
                            onclick={Callback::from(move |_: MouseEvent| tab_click.emit(tab))}
                        >
                            <span class="mr-2">{*icon}</span>
                            {*label}
                        </button>
                    }
                }).collect::<Html>()}
            </nav>
        </div>
    }
}
