use common::PageId;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub active: Option<PageId>,
    pub on_navigate: Callback<PageId>,
}

fn nav_item(page: PageId, active: Option<PageId>, on_navigate: &Callback<PageId>) -> Html {
    let onclick = on_navigate.reform(move |e: MouseEvent| {
        e.prevent_default();
        page
    });
    let href = format!("#/{}", page.as_str());

    html! {
        <li key={page.as_str()}>
            <a
                {href}
                class={classes!("nav-link", (active == Some(page)).then_some("active"))}
                {onclick}
            >
                {page.title()}
            </a>
        </li>
    }
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let items = || {
        PageId::ALL
            .into_iter()
            .map(|page| nav_item(page, props.active, &props.on_navigate))
            .collect::<Html>()
    };
    let on_brand = props.on_navigate.reform(|e: MouseEvent| {
        e.prevent_default();
        PageId::Home
    });

    html! {
        <div class="navbar bg-primary text-primary-content sticky top-0 z-40 shadow">
            <div class="navbar-start">
                <div class="dropdown">
                    <div tabindex="0" role="button" class="btn btn-ghost lg:hidden">
                        <svg xmlns="http://www.w3.org/2000/svg" class="h-5 w-5" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h8m-8 6h16" />
                        </svg>
                    </div>
                    <ul tabindex="0" class="menu menu-sm dropdown-content mt-3 z-[1] p-2 shadow bg-base-100 text-base-content rounded-box w-52">
                        { items() }
                    </ul>
                </div>
                <a href="#/home" class="btn btn-ghost text-xl" onclick={on_brand}>
                    <i class="fas fa-seedling"></i>{" AgriPredict"}
                </a>
            </div>
            <div class="navbar-end hidden lg:flex">
                <ul class="menu menu-horizontal px-1">
                    { items() }
                </ul>
            </div>
        </div>
    }
}
