//! Area management screen: list, create, rename, delete.

#[cfg(test)]
#[path = "areas_test.rs"]
mod areas_test;

use leptos::prelude::*;

use crate::components::page_header::PageHeader;
use crate::net::types::AreaDraft;
use crate::routes;

fn validate_area_name(raw: &str) -> Result<AreaDraft, &'static str> {
    let name = raw.trim();
    if name.is_empty() {
        return Err("Enter an area name.");
    }
    Ok(AreaDraft { name: name.to_owned() })
}

#[component]
pub fn AdminAreasPage() -> impl IntoView {
    let areas = LocalResource::new(|| crate::services::areas::list());

    let new_name = RwSignal::new(String::new());
    let editing = RwSignal::new(None::<(i64, String)>);
    let info = RwSignal::new(String::new());

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = match validate_area_name(&new_name.get()) {
            Ok(draft) => draft,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::services::areas::create(&draft).await {
                Ok(_) => {
                    new_name.set(String::new());
                    info.set(String::new());
                    areas.refetch();
                }
                Err(error) => info.set(format!("Could not create area: {error}")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = draft;
        }
    };

    let on_rename = move |id: i64, raw: String| {
        let draft = match validate_area_name(&raw) {
            Ok(draft) => draft,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::services::areas::update(id, &draft).await {
                Ok(_) => {
                    editing.set(None);
                    info.set(String::new());
                    areas.refetch();
                }
                Err(error) => info.set(format!("Could not rename area: {error}")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, draft);
        }
    };

    let on_delete = move |id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::services::areas::remove(id).await {
                Ok(()) => {
                    info.set(String::new());
                    areas.refetch();
                }
                Err(error) => info.set(format!("Could not delete area: {error}")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    view! {
        <div class="admin-areas">
            <PageHeader title="Areas"/>

            <nav class="admin-areas__nav">
                <a class="btn" href=routes::ADMIN_HOME>
                    "Back to dashboard"
                </a>
            </nav>

            <form class="admin-areas__create" on:submit=on_create>
                <input
                    class="admin-areas__input"
                    type="text"
                    placeholder="New area name"
                    prop:value=move || new_name.get()
                    on:input=move |ev| new_name.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">
                    "Add area"
                </button>
            </form>

            <Show when=move || !info.get().is_empty()>
                <p class="error-banner">{move || info.get()}</p>
            </Show>

            <Suspense fallback=move || view! { <p>"Loading areas..."</p> }>
                {move || {
                    areas
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <ul class="admin-areas__list">
                                        {list
                                            .into_iter()
                                            .map(|area| {
                                                let id = area.id;
                                                view! {
                                                    <li class="admin-areas__item">
                                                        <Show
                                                            when=move || {
                                                                editing.get().is_some_and(|(editing_id, _)| editing_id == id)
                                                            }
                                                            fallback={
                                                                let name = area.name.clone();
                                                                move || {
                                                                    let start_name = name.clone();
                                                                    view! {
                                                                        <span class="admin-areas__name">{name.clone()}</span>
                                                                        <button
                                                                            class="btn"
                                                                            on:click=move |_| {
                                                                                editing.set(Some((id, start_name.clone())))
                                                                            }
                                                                        >
                                                                            "Rename"
                                                                        </button>
                                                                        <button
                                                                            class="btn btn--danger"
                                                                            on:click=move |_| on_delete(id)
                                                                        >
                                                                            "Delete"
                                                                        </button>
                                                                    }
                                                                }
                                                            }
                                                        >
                                                            <input
                                                                class="admin-areas__input"
                                                                type="text"
                                                                prop:value=move || {
                                                                    editing.get().map(|(_, name)| name).unwrap_or_default()
                                                                }
                                                                on:input=move |ev| {
                                                                    editing.set(Some((id, event_target_value(&ev))))
                                                                }
                                                            />
                                                            <button
                                                                class="btn btn--primary"
                                                                on:click=move |_| {
                                                                    if let Some((_, name)) = editing.get() {
                                                                        on_rename(id, name);
                                                                    }
                                                                }
                                                            >
                                                                "Save"
                                                            </button>
                                                            <button class="btn" on:click=move |_| editing.set(None)>
                                                                "Cancel"
                                                            </button>
                                                        </Show>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(error) => {
                                view! { <p class="error-banner">{error.to_string()}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
