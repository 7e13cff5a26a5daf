use super::model;
use super::state::SizePresetQuickEntryState;
use crate::shared::form::{is_checked, FieldSpecForm};
use contracts::shared::form::{fields, size_preset_quick_entry_fields};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

/// Быстрый ввод пресета размеров; `on_saved` получает имя пресета
#[component]
pub fn SizePresetQuickEntry(
    #[prop(optional)] brand: Option<String>,
    on_saved: Callback<String>,
) -> impl IntoView {
    let state = RwSignal::new(SizePresetQuickEntryState::new(brand.as_deref()));

    let value = Callback::new(move |name: &'static str| state.with(|s| s.value(name)));
    let on_change = Callback::new(move |(name, value): (&'static str, String)| {
        state.update(|s| match name {
            fields::IS_DEFAULT_FOR_BRAND | fields::DISABLED => s.set_checkbox(name, is_checked(&value)),
            _ => s.set_value(name, value),
        });
    });
    let html: Rc<dyn Fn(&'static str) -> AnyView> = Rc::new(move |name| {
        if name == fields::SIZES_EDITOR {
            view! { <SizeChipsEditor state=state /> }.into_any()
        } else {
            ().into_any()
        }
    });

    let save = move |_| {
        let dto = match state.with(|s| s.to_dto()) {
            Ok(dto) => dto,
            Err(e) => {
                state.update(|s| s.error = Some(e));
                return;
            }
        };
        state.update(|s| {
            s.saving = true;
            s.error = None;
        });
        spawn_local(async move {
            let result = model::save_preset(&dto).await;
            state.update(|s| s.saving = false);
            match result {
                Ok(id) => {
                    log::info!("Saved size preset {} ({})", dto.name, id);
                    on_saved.run(dto.name);
                }
                Err(e) => state.update(|s| s.error = Some(e)),
            }
        });
    };

    view! {
        <div class="size-preset-quick-entry" style="min-width: 480px;">
            <FieldSpecForm
                fields=size_preset_quick_entry_fields()
                value=value
                on_change=on_change
                html=html
            />

            {move || state.with(|s| s.error.clone()).map(|e| view! {
                <div class="error" style="color: #c0392b; margin-top: 8px;">{e}</div>
            })}

            <div class="details-actions" style="margin-top: 12px;">
                <button
                    class="btn btn-primary"
                    on:click=save
                    disabled=move || state.with(|s| s.saving)
                >
                    "Save"
                </button>
            </div>
        </div>
    }
}

#[component]
fn SizeChipsEditor(state: RwSignal<SizePresetQuickEntryState>) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            state.update(|s| {
                s.commit_input();
            });
        }
        "Backspace" => {
            // удаляем чип только если поле уже пустое
            if state.with(|s| s.input().is_empty()) {
                ev.prevent_default();
                state.update(|s| {
                    s.backspace();
                });
            }
        }
        _ => {}
    };

    view! {
        <div
            class="size-chips"
            style="display: flex; flex-wrap: wrap; gap: 6px; align-items: center; border: 1px solid #ccc; border-radius: 4px; padding: 6px;"
        >
            {move || {
                state.with(|s| {
                    s.sizes()
                        .iter()
                        .enumerate()
                        .map(|(idx, size)| {
                            view! {
                                <span
                                    class="chip"
                                    style="background: #eef2f7; border-radius: 12px; padding: 2px 8px;"
                                >
                                    {size.to_string()}
                                    <button
                                        class="button button--icon"
                                        style="border: none; background: none; cursor: pointer; margin-left: 4px;"
                                        on:click=move |_| state.update(|s| {
                                            s.remove_at(idx);
                                        })
                                    >
                                        "×"
                                    </button>
                                </span>
                            }
                        })
                        .collect_view()
                })
            }}
            <input
                type="text"
                placeholder="Type a size and press Enter"
                style="border: none; outline: none; flex: 1; min-width: 120px;"
                prop:value=move || state.with(|s| s.input().to_string())
                on:input=move |ev| state.update(|s| s.set_input(event_target_value(&ev)))
                on:keydown=on_keydown
            />
        </div>
    }
}
