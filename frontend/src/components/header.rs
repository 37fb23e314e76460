use shared::User;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub user: Option<User>,
    pub on_logout: Callback<()>,
    pub on_home: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };
    let on_home = {
        let on_home = props.on_home.clone();
        Callback::from(move |_: MouseEvent| on_home.emit(()))
    };

    html! {
        <header class="header no-print">
            <div class="container">
                <h1 class="brand" onclick={on_home}>{"Tutti Agenda"}</h1>
                if let Some(user) = &props.user {
                    <div class="header-right">
                        <span class="user-name">
                            {match &user.perfil {
                                Some(perfil) => format!("{} ({})", user.nome, perfil),
                                None => user.nome.clone(),
                            }}
                        </span>
                        <button class="logout-button" onclick={on_logout}>{"Sair"}</button>
                    </div>
                }
            </div>
        </header>
    }
}
