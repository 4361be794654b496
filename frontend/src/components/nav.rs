use crate::auth::AuthContext;
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Nav)]
pub fn nav() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator();

    let on_logout_click = {
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| {
            auth.logout.emit(());
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Achievements);
            }
        })
    };

    let greeting = auth
        .state
        .user
        .as_ref()
        .map(|user| user.first_name.clone())
        .unwrap_or_else(|| "Guest".to_string());

    html! {
        <nav class={classes!(
            "sticky", "top-0", "z-50", "bg-gradient-to-r", "from-slate-800", "to-blue-600",
            "text-white", "shadow-lg"
        )}>
            <div class={classes!("max-w-7xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8")}>
                <div class={classes!("flex", "justify-between", "h-16", "items-center")}>
                    <Link<Route> to={Route::Achievements} classes={classes!("text-lg", "font-medium")}>
                        {"Achievements"}
                    </Link<Route>>
                    <div class={classes!("flex", "items-center", "space-x-4")}>
                        <span class="text-sm text-blue-100">{format!("Hi, {}", greeting)}</span>
                        {if auth.state.is_authenticated() {
                            html! {
                                <button class="text-sm underline" onclick={on_logout_click}>{"Log out"}</button>
                            }
                        } else {
                            html! {}
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}
