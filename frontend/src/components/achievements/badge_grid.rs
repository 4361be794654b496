use super::{badge_rarity_classes, format_date};
use shared::Badge;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BadgeGridProps {
    pub badges: Vec<Badge>,
}

#[function_component(BadgeGrid)]
pub fn badge_grid(props: &BadgeGridProps) -> Html {
    if props.badges.is_empty() {
        return html! {
            <div class="bg-white rounded-xl shadow-mobile-soft p-6 border border-gray-100">
                <div class="text-center py-8 text-gray-500">{"No badges yet. Complete trainings to earn them!"}</div>
            </div>
        };
    }

    html! {
        <div class="grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-4 gap-4">
            {props.badges.iter().map(|badge| {
                let style = badge
                    .color
                    .as_ref()
                    .map(|color| format!("background-color: {};", color))
                    .unwrap_or_default();
                html! {
                    <div
                        key={badge.id.clone()}
                        class={classes!(
                            "rounded-xl", "p-4", "text-center", "ring-2", "bg-white",
                            badge_rarity_classes(badge.rarity),
                            if badge.earned { None } else { Some("opacity-50 grayscale") }
                        )}
                    >
                        <div class="mx-auto h-12 w-12 rounded-full flex items-center justify-center text-2xl" style={style}>
                            {badge.icon.clone()}
                        </div>
                        <h4 class="mt-2 text-sm font-semibold text-gray-900">{badge.name.clone()}</h4>
                        <p class="text-xs text-gray-600">{badge.description.clone()}</p>
                        <p class="text-xs text-gray-400 mt-1">{badge.rarity.to_string()}</p>
                        {badge.earned_at.as_ref().map(|ts| html! {
                            <p class="text-xs text-green-700 mt-1">{format!("Earned {}", format_date(ts))}</p>
                        }).unwrap_or_else(|| html! {})}
                        {if badge.earned || badge.requirements.is_empty() {
                            html! {}
                        } else {
                            html! {
                                <ul class="mt-2 text-left text-xs text-gray-500 list-disc list-inside">
                                    {badge.requirements.iter().map(|r| html! { <li>{r.clone()}</li> }).collect::<Html>()}
                                </ul>
                            }
                        }}
                    </div>
                }
            }).collect::<Html>()}
        </div>
    }
}
