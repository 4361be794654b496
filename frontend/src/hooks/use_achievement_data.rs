use crate::api::achievements::HttpAchievementApi;
use crate::auth::AuthContext;
use crate::config::Config;
use crate::storage::BrowserCredentialStore;
use log::{debug, error};
use shared::{
    filter_and_sort, load_snapshot, Achievement, AchievementAction, AchievementQuery,
    AchievementState, FetchSequence,
};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Reducer wrapper so the shared state machine can drive a Yew component.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AchievementStore(pub AchievementState);

impl Reducible for AchievementStore {
    type Action = AchievementAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).0.clone();
        next.apply(action);
        Rc::new(Self(next))
    }
}

/// Handle returned by [`use_achievement_data`].
#[derive(Clone)]
pub struct AchievementData {
    store: UseReducerHandle<AchievementStore>,
    refresh: Callback<()>,
}

impl AchievementData {
    pub fn state(&self) -> &AchievementState {
        &self.store.0
    }

    /// Re-runs the fetch for the signed-in user
    pub fn refresh(&self) {
        self.refresh.emit(());
    }

    pub fn refresh_callback(&self) -> Callback<()> {
        self.refresh.clone()
    }

    /// Optimistically claims `id`, returning the achievement as it was before.
    ///
    /// The returned copy comes from the state this handle was rendered with.
    /// The claim itself is applied to the reducer's latest state, where it is a
    /// no-op if a refresh has landed since and the achievement is no longer
    /// claimable.
    pub fn claim_achievement(&self, id: &str) -> Option<Achievement> {
        let previous = self
            .state()
            .achievements
            .iter()
            .find(|a| a.id == id && a.claimable)
            .cloned();
        if previous.is_some() {
            self.store.dispatch(AchievementAction::Claim { id: id.to_string() });
        } else {
            debug!("Ignoring claim for {}: not claimable", id);
        }
        previous
    }

    pub fn resolve_claim(&self, id: &str, accepted: bool) {
        self.store.dispatch(AchievementAction::ResolveClaim {
            id: id.to_string(),
            accepted,
        });
    }

    pub fn filter_and_sort_achievements(&self, query: &AchievementQuery) -> Vec<Achievement> {
        filter_and_sort(&self.state().achievements, query)
    }

    /// Server-driven unlock detection is not available yet; always empty.
    pub fn check_achievements(&self) -> Vec<Achievement> {
        Vec::new()
    }
}

/// Loads achievements, badges, leaderboard and stats for the signed-in user.
///
/// Fetches on mount and again whenever the user changes; signing out clears
/// the state. Each refresh takes a new generation number so a slow response
/// cannot overwrite a newer one.
#[hook]
pub fn use_achievement_data() -> AchievementData {
    let user = use_context::<AuthContext>().and_then(|auth| auth.state.user);
    let store = use_reducer(|| AchievementStore(AchievementState::new(Config::achievements().rank_tiers)));
    let sequence = use_mut_ref(FetchSequence::default);

    let refresh = {
        let store = store.clone();
        let user = user.clone();
        Callback::from(move |_: ()| {
            let action = sequence.borrow_mut().begin(user.as_ref());
            store.dispatch(action.clone());

            let (AchievementAction::FetchStarted { generation: next }, Some(user)) =
                (action, user.clone())
            else {
                debug!("No signed-in user, cleared achievements");
                return;
            };

            let store = store.clone();
            spawn_local(async move {
                let config = Config::achievements();
                let credentials = BrowserCredentialStore::new(config.token_keys.clone());
                let api = HttpAchievementApi::new(config.clone(), credentials.clone());

                match load_snapshot(&api, &credentials, &user, &config).await {
                    Ok(snapshot) => store.dispatch(AchievementAction::FetchSucceeded {
                        generation: next,
                        snapshot,
                    }),
                    Err(e) => {
                        error!("Failed to load achievements: {}", e);
                        store.dispatch(AchievementAction::FetchFailed {
                            generation: next,
                            error: e,
                        });
                    }
                }
            });
        })
    };

    {
        let refresh = refresh.clone();
        let user_id = user.as_ref().map(|u| u.id.clone());
        use_effect_with(user_id, move |_| {
            refresh.emit(());
            || ()
        });
    }

    AchievementData { store, refresh }
}
