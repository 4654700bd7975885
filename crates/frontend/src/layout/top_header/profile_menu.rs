use crate::shared::icons::icon;
use contracts::domain::a001_book_order::UserProfile;
use leptos::prelude::*;

/// Avatar button with a dropdown: user details, Profile, Settings, Logout.
///
/// Every item closes the menu after running its callback.
#[component]
pub fn ProfileMenu(
    user: UserProfile,
    on_profile_click: Callback<()>,
    on_settings_click: Callback<()>,
    on_logout: Callback<()>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let initial = user.initial();
    let avatar_url = user.avatar_url().map(str::to_string);
    let avatar_alt = user.name.clone();
    let select = move |cb: Callback<()>| {
        cb.run(());
        open.set(false);
    };

    view! {
        <div class="popover-anchor">
            <button
                class="top-header__avatar-btn"
                aria-label="profile menu"
                aria-haspopup="true"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {match avatar_url {
                    Some(url) => view! {
                        <img class="profile-menu__avatar-img" src=url alt=avatar_alt />
                    }.into_any(),
                    None => view! { <span class="avatar avatar--primary">{initial}</span> }.into_any(),
                }}
            </button>
            <Show when=move || open.get()>
                <div class="popover-backdrop" on:click=move |_| open.set(false)></div>
                <div class="popover profile-menu" role="menu">
                    <div class="profile-menu__user">
                        <div class="profile-menu__name">{user.name.clone()}</div>
                        <div class="profile-menu__email">{user.email.clone()}</div>
                        <div class="profile-menu__role">{user.role.clone()}</div>
                    </div>
                    <hr class="divider" />
                    <button class="profile-menu__item" role="menuitem" on:click=move |_| select(on_profile_click)>
                        {icon("user")}
                        <span>"Profile"</span>
                    </button>
                    <button class="profile-menu__item" role="menuitem" on:click=move |_| select(on_settings_click)>
                        {icon("settings")}
                        <span>"Settings"</span>
                    </button>
                    <hr class="divider" />
                    <button class="profile-menu__item" role="menuitem" on:click=move |_| select(on_logout)>
                        {icon("log-out")}
                        <span>"Logout"</span>
                    </button>
                </div>
            </Show>
        </div>
    }
}
