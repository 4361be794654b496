use crate::config::Config;
use crate::storage::{BrowserCredentialStore, USER_KEY};
use gloo_storage::{LocalStorage, Storage};
use log::{debug, error};
use shared::{CredentialStore, CurrentUser};
use std::rc::Rc;
use yew::functional::use_reducer_eq;
use yew::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<CurrentUser>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.as_ref().map(|u| !u.id.is_empty()).unwrap_or(false)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthAction {
    SignedIn(CurrentUser),
    SignedOut,
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::SignedIn(user) => {
                if let Err(e) = LocalStorage::set(USER_KEY, &user) {
                    error!("Failed to store user in local storage: {}", e);
                }
                Rc::new(Self { user: Some(user) })
            }
            AuthAction::SignedOut => {
                LocalStorage::delete(USER_KEY);
                BrowserCredentialStore::new(Config::achievements().token_keys).clear();
                Rc::new(Self { user: None })
            }
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct AuthProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuthContext {
    pub state: AuthState,
    pub sign_in: Callback<CurrentUser>,
    pub logout: Callback<()>,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth = use_reducer_eq(|| {
        let user = LocalStorage::get::<CurrentUser>(USER_KEY).ok();
        debug!("Restored user from storage: {}", user.is_some());
        AuthState { user }
    });

    let sign_in = {
        let auth = auth.clone();
        Callback::from(move |user: CurrentUser| auth.dispatch(AuthAction::SignedIn(user)))
    };

    let logout = {
        let auth = auth.clone();
        Callback::from(move |_: ()| auth.dispatch(AuthAction::SignedOut))
    };

    let context = AuthContext {
        state: (*auth).clone(),
        sign_in,
        logout,
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}
