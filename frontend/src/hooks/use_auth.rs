use shared::{AuthOutcome, LoginRequest, SignupRequest, User};
use yew::prelude::*;

use crate::services::session::session;

#[derive(Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    /// Message of the last login or signup attempt
    pub outcome: Option<AuthOutcome>,
}

pub struct UseAuthResult {
    pub state: AuthState,
    pub actions: UseAuthActions,
}

#[derive(Clone, PartialEq)]
pub struct UseAuthActions {
    pub login: Callback<LoginRequest>,
    pub signup: Callback<SignupRequest>,
    pub logout: Callback<()>,
    pub clear_outcome: Callback<()>,
}

#[hook]
pub fn use_auth() -> UseAuthResult {
    let user = use_state(|| session().current_user());
    let outcome = use_state(|| Option::<AuthOutcome>::None);

    let login = {
        let user = user.clone();
        let outcome = outcome.clone();
        use_callback((), move |request: LoginRequest, _| {
            let session = session();
            let result = session.login(&request);
            if result.success {
                user.set(session.current_user());
            }
            outcome.set(Some(result));
        })
    };

    let signup = {
        let outcome = outcome.clone();
        use_callback((), move |request: SignupRequest, _| {
            let result = session().signup(&request);
            if result.success {
                log::info!("Signup accepted for {}", request.email);
            }
            outcome.set(Some(result));
        })
    };

    let logout = {
        let user = user.clone();
        let outcome = outcome.clone();
        use_callback((), move |_: (), _| {
            session().logout();
            user.set(None);
            outcome.set(None);
        })
    };

    let clear_outcome = {
        let outcome = outcome.clone();
        use_callback((), move |_: (), _| outcome.set(None))
    };

    let state = AuthState {
        user: (*user).clone(),
        outcome: (*outcome).clone(),
    };

    let actions = UseAuthActions {
        login,
        signup,
        logout,
        clear_outcome,
    };

    UseAuthResult { state, actions }
}
